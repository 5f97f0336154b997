use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::enums::FetchFailurePolicy;

/// Запрос на построение отчёта прибыльности
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildReportRequest {
    /// Магазины продавца (минимум один)
    pub store_ids: Vec<String>,
    /// Начало периода (включительно)
    pub date_from: NaiveDate,
    /// Конец периода (включительно)
    pub date_to: NaiveDate,
    /// Переопределение политики обработки ошибок по магазину;
    /// если не задано — берётся из конфигурации
    #[serde(default)]
    pub failure_policy: Option<FetchFailurePolicy>,
}

impl BuildReportRequest {
    /// Длина окна запроса в днях (минимум 1)
    pub fn window_days(&self) -> i64 {
        (self.date_to - self.date_from).num_days().max(0) + 1
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.store_ids.is_empty() {
            anyhow::bail!("request must name at least one store");
        }
        if self.date_from > self.date_to {
            anyhow::bail!(
                "date_from {} is after date_to {}",
                self.date_from,
                self.date_to
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_days_is_inclusive() {
        let request = BuildReportRequest {
            store_ids: vec!["s1".to_string()],
            date_from: NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
            date_to: NaiveDate::from_ymd_opt(2026, 3, 31).unwrap(),
            failure_policy: None,
        };
        assert_eq!(request.window_days(), 31);
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_inverted_window() {
        let request = BuildReportRequest {
            store_ids: vec!["s1".to_string()],
            date_from: NaiveDate::from_ymd_opt(2026, 4, 1).unwrap(),
            date_to: NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
            failure_policy: None,
        };
        assert!(request.validate().is_err());
    }
}
