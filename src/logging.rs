use std::sync::Arc;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing with optional file output.
///
/// Logging is off by default: the form owns the alternate screen, so
/// writing to stdout would corrupt the display. Set `PREFTUI_LOG` to a
/// file path to capture logs (including submitted snapshots).
pub fn init_tracing() {
    let Ok(log_path) = std::env::var("PREFTUI_LOG") else {
        return;
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let Ok(file) = std::fs::File::create(&log_path) else {
        eprintln!("Warning: failed to create log file: {}", log_path);
        return;
    };

    let file_layer = fmt::layer()
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .with_timer(fmt::time::UtcTime::rfc_3339())
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();
}
