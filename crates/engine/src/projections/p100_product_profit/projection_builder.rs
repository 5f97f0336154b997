use contracts::domain::a001_order_line::RawOrderLine;
use contracts::projections::p100_product_profit::ProductProfitRow;

use super::{accumulator::AccumulatorSet, metrics, shipment_groups};

/// Построить строки отчёта прибыльности (P100) из сырых строк заказов
///
/// Проход строго последовательный: группировка отправлений →
/// проратирование доставки → свёртка накопителей → производные метрики →
/// классификации. Никогда не завершается ошибкой: пропущенные числовые
/// поля уже приведены к нулю при десериализации.
pub fn build_product_profit(lines: &[RawOrderLine], window_days: i64) -> Vec<ProductProfitRow> {
    let groups = shipment_groups::group_shipments(lines);
    let prorated = shipment_groups::prorate_shipping(lines, &groups);

    let mut set = AccumulatorSet::new();
    for (idx, line) in lines.iter().enumerate() {
        set.fold_line(line, prorated[idx]);
    }

    let mut rows: Vec<ProductProfitRow> = set
        .into_accumulators()
        .into_iter()
        .map(metrics::derive_row)
        .collect();

    metrics::classify_rows(&mut rows, window_days);

    tracing::debug!(
        "Built {} product profit rows from {} order lines ({} shipments)",
        rows.len(),
        lines.len(),
        groups.len()
    );

    rows
}
