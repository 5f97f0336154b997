use contracts::domain::a001_order_line::RawOrderLine;
use contracts::projections::p100_product_profit::ProductProfitRow;

use super::projection_builder;

/// Построить проекцию P100 за окно запроса
pub fn build(lines: &[RawOrderLine], window_days: i64) -> Vec<ProductProfitRow> {
    let rows = projection_builder::build_product_profit(lines, window_days);
    tracing::info!(
        "Projected {} order lines into {} P100 profit rows",
        lines.len(),
        rows.len()
    );
    rows
}
