use std::cmp::Ordering;

use anyhow::Result;
use contracts::dashboards::d200_profit_report::{
    ProfitReportFilters, ProfitReportRequest, ProfitReportResponse, SourcingComparison,
    SourcingOption,
};
use contracts::enums::{SortKey, SortOrder};
use contracts::projections::p100_product_profit::ProductProfitRow;

use crate::shared::config::get_config;
use crate::shared::format::trunc2;
use crate::usecases::u100_build_profit_report::record_source::SupplierOfferSource;

/// Execute a profitability report query over frozen P100 rows
///
/// Pure and re-entrant: filtering, sorting and pagination never mutate
/// the source collection and can be re-run over the same snapshot.
pub fn query(rows: &[ProductProfitRow], request: &ProfitReportRequest) -> ProfitReportResponse {
    let mut filtered: Vec<&ProductProfitRow> = rows
        .iter()
        .filter(|row| matches_filters(row, &request.filters))
        .collect();

    sort_rows(&mut filtered, request.sort_key, request.sort_order);

    let page_size = if request.page_size == 0 {
        get_config().report.page_size
    } else {
        request.page_size
    }
    .max(1);

    let total_filtered = filtered.len() as u64;
    let page_count = ((total_filtered + page_size - 1) / page_size).max(1);

    let start = (request.page.saturating_mul(page_size)) as usize;
    let end = start.saturating_add(page_size as usize).min(filtered.len());
    let page_rows = if start < filtered.len() {
        filtered[start..end].iter().map(|row| (*row).clone()).collect()
    } else {
        Vec::new()
    };

    ProfitReportResponse {
        rows: page_rows,
        page_count,
        total_filtered,
    }
}

/// All filter predicates combine with AND
fn matches_filters(row: &ProductProfitRow, filters: &ProfitReportFilters) -> bool {
    if let Some(status) = &filters.status {
        if !row.status.eq_ignore_ascii_case(status) {
            return false;
        }
    }

    if let Some(search) = &filters.search {
        let needle = search.to_lowercase();
        if !needle.is_empty() {
            let in_title = row.title.to_lowercase().contains(&needle);
            let in_code = row.product_code().to_lowercase().contains(&needle);
            if !in_title && !in_code {
                return false;
            }
        }
    }

    if let Some(from) = filters.margin_from {
        if row.margin_percent < from {
            return false;
        }
    }
    if let Some(to) = filters.margin_to {
        if row.margin_percent > to {
            return false;
        }
    }

    if let Some(from) = filters.roi_from {
        if row.roi_percent < from {
            return false;
        }
    }
    if let Some(to) = filters.roi_to {
        if row.roi_percent > to {
            return false;
        }
    }

    if let Some(stock_risk) = filters.stock_risk {
        if row.stock_risk != stock_risk {
            return false;
        }
    }
    if let Some(abc_class) = filters.abc_class {
        if row.abc_class != abc_class {
            return false;
        }
    }

    if filters.only_stock_risk && !row.stock_risk.is_elevated() {
        return false;
    }
    if filters.only_variable_price && !row.variable_price {
        return false;
    }

    true
}

/// Sort by the selected key; ties are always broken by ascending product
/// identifier regardless of key or direction
fn sort_rows(rows: &mut [&ProductProfitRow], key: SortKey, order: SortOrder) {
    rows.sort_by(|a, b| {
        let by_key = match key {
            SortKey::UnitsSold => a.units_sold.cmp(&b.units_sold),
            SortKey::Revenue => a.revenue_total.total_cmp(&b.revenue_total),
            SortKey::TotalProfit | SortKey::Default => a.total_profit.total_cmp(&b.total_profit),
        };
        let by_key = match order {
            SortOrder::Asc => by_key,
            SortOrder::Desc => by_key.reverse(),
        };
        by_key.then_with(|| tie_break(a, b))
    });
}

fn tie_break(a: &ProductProfitRow, b: &ProductProfitRow) -> Ordering {
    a.item_id
        .cmp(&b.item_id)
        .then_with(|| a.variation_id.cmp(&b.variation_id))
}

/// Compare supplier offers for a product against its current unit cost.
/// Offers come back sorted by unit cost, cheapest first.
pub async fn sourcing_options(
    row: &ProductProfitRow,
    source: &dyn SupplierOfferSource,
) -> Result<SourcingComparison> {
    let product_code = row.product_code();
    let mut offers = source.offers_for(&product_code).await?;
    offers.sort_by(|a, b| a.unit_cost.total_cmp(&b.unit_cost));

    let options = offers
        .into_iter()
        .map(|offer| SourcingOption {
            unit_cost_delta: trunc2(offer.unit_cost - row.unit_cost),
            offer,
        })
        .collect();

    Ok(SourcingComparison {
        product_code,
        current_unit_cost: row.unit_cost,
        options,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use contracts::domain::a002_supplier_offer::SupplierOffer;
    use contracts::enums::{AbcClass, StockRisk};

    fn row(item_id: &str, units: i64, profit: f64, revenue: f64) -> ProductProfitRow {
        ProductProfitRow {
            item_id: item_id.to_string(),
            variation_id: 0,
            title: format!("Product {}", item_id),
            status: "active".to_string(),
            thumbnail: None,
            available_stock: 10,
            units_sold: units,
            revenue_total: revenue,
            cost_total: 50.0,
            fee_total: 10.0,
            shipping_total: 5.0,
            ads_total: 2.0,
            unit_price: 100.0,
            unit_cost: 50.0,
            unit_fee: 10.0,
            unit_shipping: 5.0,
            unit_ads: 2.0,
            unit_profit: 33.0,
            total_profit: profit,
            margin_percent: 33.0,
            roi_percent: 66.0,
            variable_price: false,
            stock_risk: StockRisk::Low,
            abc_class: AbcClass::A,
        }
    }

    fn default_request() -> ProfitReportRequest {
        ProfitReportRequest::default()
    }

    #[test]
    fn test_pagination_page_count_and_last_page() {
        let rows: Vec<ProductProfitRow> = (0..105)
            .map(|i| row(&format!("ITEM{:03}", i), 1, 10.0, 100.0))
            .collect();

        let mut request = default_request();
        request.page_size = 100;
        request.page = 1;
        let response = query(&rows, &request);

        assert_eq!(response.page_count, 2);
        assert_eq!(response.total_filtered, 105);
        assert_eq!(response.rows.len(), 5);
    }

    #[test]
    fn test_pagination_empty_set_has_one_page() {
        let response = query(&[], &default_request());
        assert_eq!(response.page_count, 1);
        assert_eq!(response.total_filtered, 0);
        assert!(response.rows.is_empty());
    }

    #[test]
    fn test_page_past_the_end_is_empty() {
        let rows = vec![row("ITEM1", 1, 10.0, 100.0)];
        let mut request = default_request();
        request.page = 7;
        let response = query(&rows, &request);
        assert!(response.rows.is_empty());
        assert_eq!(response.page_count, 1);
    }

    #[test]
    fn test_zero_page_size_uses_configured_default() {
        let rows = vec![row("ITEM1", 1, 10.0, 100.0)];
        let mut request = default_request();
        request.page_size = 0;
        let response = query(&rows, &request);
        assert_eq!(response.rows.len(), 1);
        assert_eq!(response.page_count, 1);
    }

    #[test]
    fn test_sort_ties_break_by_product_id_ascending() {
        // Одинаковая прибыль — порядок по item_id независимо от направления
        let rows = vec![
            row("ITEM_C", 5, 10.0, 100.0),
            row("ITEM_A", 3, 10.0, 100.0),
            row("ITEM_B", 4, 10.0, 100.0),
        ];

        for order in [SortOrder::Asc, SortOrder::Desc] {
            let mut request = default_request();
            request.sort_key = SortKey::TotalProfit;
            request.sort_order = order;
            let response = query(&rows, &request);
            let ids: Vec<&str> = response.rows.iter().map(|r| r.item_id.as_str()).collect();
            assert_eq!(ids, vec!["ITEM_A", "ITEM_B", "ITEM_C"]);
        }
    }

    #[test]
    fn test_sort_by_units_desc() {
        let rows = vec![
            row("ITEM_A", 3, 10.0, 100.0),
            row("ITEM_B", 9, 10.0, 100.0),
        ];
        let mut request = default_request();
        request.sort_key = SortKey::UnitsSold;
        request.sort_order = SortOrder::Desc;
        let response = query(&rows, &request);
        assert_eq!(response.rows[0].item_id, "ITEM_B");
    }

    #[test]
    fn test_status_and_search_filters() {
        let mut paused = row("ITEM_P", 1, 10.0, 100.0);
        paused.status = "paused".to_string();
        let rows = vec![row("ITEM_A", 1, 10.0, 100.0), paused];

        let mut request = default_request();
        request.filters.status = Some("paused".to_string());
        let response = query(&rows, &request);
        assert_eq!(response.total_filtered, 1);
        assert_eq!(response.rows[0].item_id, "ITEM_P");

        let mut request = default_request();
        request.filters.search = Some("item_a".to_string());
        let response = query(&rows, &request);
        assert_eq!(response.total_filtered, 1);
        assert_eq!(response.rows[0].item_id, "ITEM_A");
    }

    #[test]
    fn test_margin_range_is_inclusive() {
        let mut low = row("ITEM_L", 1, 10.0, 100.0);
        low.margin_percent = 10.0;
        let mut high = row("ITEM_H", 1, 10.0, 100.0);
        high.margin_percent = 60.0;
        let rows = vec![low, high];

        let mut request = default_request();
        request.filters.margin_from = Some(10.0);
        request.filters.margin_to = Some(33.0);
        let response = query(&rows, &request);
        assert_eq!(response.total_filtered, 1);
        assert_eq!(response.rows[0].item_id, "ITEM_L");
    }

    #[test]
    fn test_classification_filters() {
        let mut risky = row("ITEM_R", 1, 10.0, 100.0);
        risky.stock_risk = StockRisk::High;
        let mut variable = row("ITEM_V", 1, 10.0, 100.0);
        variable.variable_price = true;
        let rows = vec![row("ITEM_A", 1, 10.0, 100.0), risky, variable];

        let mut request = default_request();
        request.filters.only_stock_risk = true;
        let response = query(&rows, &request);
        assert_eq!(response.total_filtered, 1);
        assert_eq!(response.rows[0].item_id, "ITEM_R");

        let mut request = default_request();
        request.filters.only_variable_price = true;
        let response = query(&rows, &request);
        assert_eq!(response.total_filtered, 1);
        assert_eq!(response.rows[0].item_id, "ITEM_V");

        let mut request = default_request();
        request.filters.abc_class = Some(AbcClass::A);
        let response = query(&rows, &request);
        assert_eq!(response.total_filtered, 3);
    }

    struct FixtureOffers;

    #[async_trait]
    impl SupplierOfferSource for FixtureOffers {
        async fn offers_for(&self, _product_code: &str) -> Result<Vec<SupplierOffer>> {
            Ok(vec![
                SupplierOffer {
                    supplier_id: "SUP2".to_string(),
                    name: "Дорогой".to_string(),
                    unit_cost: 55.0,
                    available_units: 100,
                    model: None,
                    sku: None,
                },
                SupplierOffer {
                    supplier_id: "SUP1".to_string(),
                    name: "Дешёвый".to_string(),
                    unit_cost: 42.0,
                    available_units: 10,
                    model: None,
                    sku: None,
                },
            ])
        }
    }

    #[tokio::test]
    async fn test_sourcing_options_sorted_cheapest_first() {
        let row = row("ITEM1", 1, 10.0, 100.0);
        let comparison = sourcing_options(&row, &FixtureOffers).await.unwrap();
        assert_eq!(comparison.options.len(), 2);
        assert_eq!(comparison.options[0].offer.supplier_id, "SUP1");
        assert_eq!(comparison.options[0].unit_cost_delta, -8.0);
        assert_eq!(comparison.options[1].unit_cost_delta, 5.0);
    }
}
