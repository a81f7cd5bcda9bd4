//! Subscriber setup for hosts that embed the engine.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install a global subscriber: `RUST_LOG` when set, else `default_filter`.
/// `json` switches the fmt layer to one JSON object per event.
///
/// Returns `false` if a global subscriber was already installed.
pub fn init_tracing(default_filter: &str, json: bool) -> bool {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_ansi(false);

    let registry = tracing_subscriber::registry().with(env_filter);
    if json {
        registry.with(fmt_layer.json()).try_init().is_ok()
    } else {
        registry.with(fmt_layer).try_init().is_ok()
    }
}
