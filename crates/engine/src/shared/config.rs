use contracts::enums::FetchFailurePolicy;
use once_cell::sync::OnceCell;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub report: ReportConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ReportConfig {
    /// Размер страницы по умолчанию для отчётов
    pub page_size: u64,
    /// Политика обработки ошибки загрузки по магазину:
    /// "skip-store" или "abort"
    pub failure_policy: String,
}

impl Config {
    pub fn failure_policy(&self) -> FetchFailurePolicy {
        FetchFailurePolicy::from_code(&self.report.failure_policy).unwrap_or_default()
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[report]
page_size = 50
failure_policy = "skip-store"
"#;

static CONFIG: OnceCell<Config> = OnceCell::new();

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    // Try to find config.toml next to the executable
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                let config: Config = toml::from_str(&contents)?;
                return Ok(config);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    // Fall back to default config
    tracing::info!("Using default embedded configuration");
    let config: Config = toml::from_str(DEFAULT_CONFIG)?;
    Ok(config)
}

/// Глобальный доступ к конфигурации; при первом обращении
/// поднимает встроенный default, если load_config не вызывался
pub fn get_config() -> &'static Config {
    CONFIG.get_or_init(|| {
        toml::from_str(DEFAULT_CONFIG).expect("embedded default config is valid")
    })
}

/// Установить конфигурацию при старте приложения.
/// Возвращает Err, если конфигурация уже была установлена.
pub fn set_config(config: Config) -> anyhow::Result<()> {
    CONFIG
        .set(config)
        .map_err(|_| anyhow::anyhow!("Config already initialized"))
}
