use serde::{Deserialize, Serialize};

/// Фаза цикла построения отчёта
///
/// Idle → Fetching → Aggregating → Ready; Failed при фатальной ошибке.
/// Новый запуск во время активного цикла возвращает машину в Fetching,
/// результат прежнего цикла отбрасывается.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportPhase {
    Idle,
    Fetching,
    Aggregating,
    Ready,
    Failed,
}

impl Default for ReportPhase {
    fn default() -> Self {
        ReportPhase::Idle
    }
}
