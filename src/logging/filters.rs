use tracing_subscriber::EnvFilter;

/// Собирает фильтр логирования.
///
/// Если задан RUST_LOG (или другой env filter) — используем его.
/// Иначе берём директиву из конфигурации.
pub fn build_filter(directive: &str) -> EnvFilter {
    match EnvFilter::try_from_default_env() {
        Ok(env_filter) => env_filter,
        Err(_) => filter_from_directive(directive),
    }
}

/// Собирает фильтр из директивы конфигурации; некорректную
/// директиву заменяет на "info" с понятным сообщением.
fn filter_from_directive(directive: &str) -> EnvFilter {
    match EnvFilter::try_new(directive) {
        Ok(filter) => filter,
        Err(e) => {
            eprintln!(
                "Invalid log filter directive from config ('{directive}'): {e}; falling back to 'info'"
            );
            EnvFilter::new("info")
        }
    }
}
