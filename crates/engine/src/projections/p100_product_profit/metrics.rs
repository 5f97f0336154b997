use contracts::enums::{AbcClass, StockRisk};
use contracts::projections::p100_product_profit::ProductProfitRow;

use super::accumulator::ProductAccumulator;
use crate::shared::format::{percent_of, safe_div, trunc2};

/// Доля накопленной выручки для класса A
const ABC_A_SHARE: f64 = 0.80;
/// Доля накопленной выручки для класса B
const ABC_B_SHARE: f64 = 0.95;
/// Покрытие остатком меньше этого числа дней — высокий риск
const STOCK_HIGH_DAYS: f64 = 7.0;
/// Покрытие остатком меньше этого числа дней — средний риск
const STOCK_MEDIUM_DAYS: f64 = 30.0;

/// Заморозить накопитель в строку отчёта с производными метриками
///
/// Прибыль считается усечением до копеек (не округлением); каждый
/// знаменатель защищён от нуля — NaN/∞ наружу не выходят.
pub fn derive_row(acc: ProductAccumulator) -> ProductProfitRow {
    let units = acc.units_sold as f64;

    let unit_cost = safe_div(acc.cost_total, units);
    let unit_fee = safe_div(acc.fee_total, units);
    let unit_shipping = safe_div(acc.shipping_total, units);
    let unit_ads = safe_div(acc.ads_total, units);

    let unit_profit = trunc2(acc.unit_price - (unit_cost + unit_fee + unit_shipping + unit_ads));
    let total_profit = trunc2(unit_profit * units);

    let margin_percent = percent_of(total_profit, acc.revenue_total);
    let roi_percent = percent_of(total_profit, acc.cost_total);

    ProductProfitRow {
        item_id: acc.product.item_id.clone(),
        variation_id: acc.product.variation_id,
        title: acc.title.clone(),
        status: acc.status.clone(),
        thumbnail: acc.thumbnail.clone(),
        available_stock: acc.available_stock,
        units_sold: acc.units_sold,
        revenue_total: acc.revenue_total,
        cost_total: acc.cost_total,
        fee_total: acc.fee_total,
        shipping_total: acc.shipping_total,
        ads_total: acc.ads_total,
        unit_price: acc.unit_price,
        unit_cost,
        unit_fee,
        unit_shipping,
        unit_ads,
        unit_profit,
        total_profit,
        margin_percent,
        roi_percent,
        variable_price: acc.variable_price(),
        // Классификации назначаются пост-проходом по всем строкам
        stock_risk: StockRisk::Low,
        abc_class: AbcClass::C,
    }
}

/// Назначить классификации по всему набору строк
///
/// ABC — по накопленной доле выручки (A до 80%, B до 95%, далее C);
/// риск по остаткам — по дням покрытия при текущем темпе продаж
/// за окно запроса.
pub fn classify_rows(rows: &mut [ProductProfitRow], window_days: i64) {
    assign_abc(rows);

    let days = window_days.max(1) as f64;
    for row in rows.iter_mut() {
        row.stock_risk = stock_risk_for(row, days);
    }
}

fn assign_abc(rows: &mut [ProductProfitRow]) {
    let total_revenue: f64 = rows.iter().map(|r| r.revenue_total.max(0.0)).sum();
    if total_revenue == 0.0 {
        for row in rows.iter_mut() {
            row.abc_class = AbcClass::C;
        }
        return;
    }

    // Индексы по убыванию выручки
    let mut order: Vec<usize> = (0..rows.len()).collect();
    order.sort_by(|&a, &b| rows[b].revenue_total.total_cmp(&rows[a].revenue_total));

    let mut cumulative = 0.0;
    for idx in order {
        cumulative += rows[idx].revenue_total.max(0.0);
        let share = cumulative / total_revenue;
        rows[idx].abc_class = if share <= ABC_A_SHARE {
            AbcClass::A
        } else if share <= ABC_B_SHARE {
            AbcClass::B
        } else {
            AbcClass::C
        };
    }
}

fn stock_risk_for(row: &ProductProfitRow, window_days: f64) -> StockRisk {
    let units_per_day = safe_div(row.units_sold as f64, window_days);
    if units_per_day <= 0.0 {
        return StockRisk::Low;
    }
    let days_of_cover = safe_div(row.available_stock as f64, units_per_day);
    if days_of_cover < STOCK_HIGH_DAYS {
        StockRisk::High
    } else if days_of_cover < STOCK_MEDIUM_DAYS {
        StockRisk::Medium
    } else {
        StockRisk::Low
    }
}
