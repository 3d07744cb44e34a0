//! Инициализация журналирования.
//!
//! Диагностика пишется в stderr, чтобы stdout оставался чистым диалогом с
//! пользователем.

use std::io;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Фильтр по умолчанию, если `RUST_LOG` не задан.
#[must_use]
pub const fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "simple_calculator=debug"
    } else {
        "simple_calculator=warn"
    }
}

/// Устанавливает глобальный подписчик `tracing`.
///
/// Повторный вызов ничего не делает.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    // Ошибка означает, что подписчик уже установлен.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init();
}
