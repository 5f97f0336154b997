use serde::{Deserialize, Serialize};

/// Политика обработки ошибки загрузки по одному магазину
/// при мульти-магазинной выборке
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FetchFailurePolicy {
    /// Пропустить магазин с ошибкой, продолжить с остальными
    SkipStore,
    /// Прервать всю выборку целиком
    Abort,
}

impl FetchFailurePolicy {
    pub fn code(&self) -> &'static str {
        match self {
            FetchFailurePolicy::SkipStore => "skip-store",
            FetchFailurePolicy::Abort => "abort",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "skip-store" => Some(FetchFailurePolicy::SkipStore),
            "abort" => Some(FetchFailurePolicy::Abort),
            _ => None,
        }
    }
}

impl Default for FetchFailurePolicy {
    fn default() -> Self {
        FetchFailurePolicy::SkipStore
    }
}
