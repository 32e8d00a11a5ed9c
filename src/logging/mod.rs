mod filters;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::Settings;

/// Инициализация логирования с конфигурацией.
pub fn init_logging(settings: &Settings) {
    let env_filter = filters::build_filter(&settings.log_filter);

    let console_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stdout as fn() -> std::io::Stdout);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .init();

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        log_filter = %settings.log_filter,
        "Logging system initialized"
    );
}
