use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::projections::p100_product_profit::ProductProfitRow;

/// Замороженный результат одного цикла загрузки/агрегации
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportSnapshot {
    /// ID цикла (новый на каждый запуск)
    pub cycle_id: uuid::Uuid,
    /// Момент публикации снимка
    pub generated_at: DateTime<Utc>,
    /// Строки отчёта; пустой список при фатальной ошибке загрузки
    pub rows: Vec<ProductProfitRow>,
    /// Магазины, пропущенные по политике skip-store
    pub skipped_stores: Vec<String>,
}

impl ReportSnapshot {
    pub fn empty(cycle_id: uuid::Uuid) -> Self {
        Self {
            cycle_id,
            generated_at: Utc::now(),
            rows: Vec::new(),
            skipped_stores: Vec::new(),
        }
    }
}
