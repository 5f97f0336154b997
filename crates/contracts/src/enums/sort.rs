use serde::{Deserialize, Serialize};

/// Ключ сортировки строк отчёта прибыльности
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortKey {
    /// Продано единиц
    UnitsSold,
    /// Прибыль итого
    TotalProfit,
    /// Выручка итого
    Revenue,
    /// Ключ по умолчанию (прибыль итого)
    Default,
}

impl Default for SortKey {
    fn default() -> Self {
        SortKey::Default
    }
}

/// Направление сортировки
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl Default for SortOrder {
    fn default() -> Self {
        SortOrder::Desc
    }
}
