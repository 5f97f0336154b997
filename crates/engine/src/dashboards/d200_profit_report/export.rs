use contracts::dashboards::d200_profit_report::ProfitExportRow;
use contracts::projections::p100_product_profit::ProductProfitRow;

use crate::shared::format::trunc2;

/// Flatten report rows into presentation-normalized export rows
///
/// Money fields are truncated to cents and classifications become
/// display strings; the actual spreadsheet/document rendering is the
/// consumer's job.
pub fn to_export_rows(rows: &[ProductProfitRow]) -> Vec<ProfitExportRow> {
    rows.iter().map(to_export_row).collect()
}

fn to_export_row(row: &ProductProfitRow) -> ProfitExportRow {
    ProfitExportRow {
        product_code: row.product_code(),
        title: row.title.clone(),
        status: row.status.clone(),
        units_sold: row.units_sold,
        unit_price: trunc2(row.unit_price),
        unit_cost: trunc2(row.unit_cost),
        unit_fee: trunc2(row.unit_fee),
        unit_shipping: trunc2(row.unit_shipping),
        unit_ads: trunc2(row.unit_ads),
        unit_profit: trunc2(row.unit_profit),
        revenue_total: trunc2(row.revenue_total),
        total_profit: trunc2(row.total_profit),
        margin_percent: trunc2(row.margin_percent),
        roi_percent: trunc2(row.roi_percent),
        variable_price: row.variable_price,
        stock_risk: row.stock_risk.code().to_string(),
        abc_class: row.abc_class.code().to_string(),
        available_stock: row.available_stock,
    }
}
