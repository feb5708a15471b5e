#[cfg(feature = "trace")]
use std::path::Path;
#[cfg(feature = "trace")]
use std::sync::Once;

#[cfg(feature = "trace")]
static INIT: Once = Once::new();

/// Install a JSON subscriber writing to `<log_dir>/lipi-trace.jsonl`.
/// `LIPI_LOG` overrides the filter. Only the first call has any effect.
#[cfg(feature = "trace")]
pub fn init_tracing(log_dir: &Path) {
    INIT.call_once(|| {
        let file_appender = tracing_appender::rolling::never(log_dir, "lipi-trace.jsonl");
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
        // The keyboard process outlives any scope we could hold the guard in.
        std::mem::forget(guard);

        let filter = tracing_subscriber::EnvFilter::try_from_env("LIPI_LOG")
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("lipi_core=debug,lipi_ffi=debug"));
        let installed = tracing_subscriber::fmt()
            .json()
            .with_writer(non_blocking)
            .with_target(true)
            .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
            .with_env_filter(filter)
            .try_init();
        if installed.is_ok() {
            tracing::debug!(log_dir = %log_dir.display(), "tracing enabled");
        }
    });
}

#[cfg(not(feature = "trace"))]
pub fn init_tracing(_log_dir: &std::path::Path) {}
