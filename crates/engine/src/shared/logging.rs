use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Инициализация tracing для встраивающего приложения или тестов
///
/// Уровень задаётся через RUST_LOG, по умолчанию `info`.
/// Повторный вызов безопасен (инициализация выполняется один раз).
pub fn init_tracing() {
    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}
