use serde::{Deserialize, Serialize};

use config::{Config, ConfigError, Environment};

#[derive(Debug, Serialize, Deserialize)]
pub struct Settings {
    pub log_filter: String,
    pub queue_capacity: usize,
}

impl Settings {
    pub fn load() -> Result<Self, ConfigError> {
        let cfg = Config::builder()
            // Добавляем значения по умолчанию
            .set_default("log_filter", "info")?
            .set_default("queue_capacity", 128)?
            // Добавляем переменные окружения с префиксом VESTNIK_
            .add_source(Environment::with_prefix("VESTNIK"))
            .build()?;

        // Десериализуем конфигурацию в нашу структуру
        cfg.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Тест проверяет значения по умолчанию.
    #[test]
    fn test_defaults() {
        let settings = Settings::load().unwrap();
        assert_eq!(settings.log_filter, "info");
        assert_eq!(settings.queue_capacity, 128);
    }
}
