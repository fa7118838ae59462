use std::env;

// Главная структура конфигурации - контейнер для всех настроек
#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub store: StoreConfig,
}

// Настройки приложения
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub rust_log: String,
}

// Настройки хранилища документов
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub url: String,
    pub bucket: String,
}

impl Config {
    pub fn from_env() -> Self {
        Config {
            app: AppConfig {
                rust_log: env::var("RUST_LOG")
                    .unwrap_or_else(|_| "ticket_sim=info".to_string()),
            },
            store: StoreConfig {
                url: env::var("STORE_URL")
                    .unwrap_or_else(|_| "redis://127.0.0.1:6379".to_string()),
                bucket: env::var("STORE_BUCKET").unwrap_or_else(|_| "tickets".to_string()),
            },
        }
    }
}
