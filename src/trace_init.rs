//! Opt-in JSON trace log for following conversions inside a running editor.

use std::path::Path;

/// File created in the directory passed to [`init_tracing`].
pub const TRACE_FILE: &str = "kana-live-trace.jsonl";

/// Targets traced when `RUST_LOG` is unset.
#[cfg(feature = "trace")]
const DEFAULT_FILTER: &str = "kana_live=debug,kana_session=debug,kana_core=debug";

/// Write `tracing` events from all three crates to `<log_dir>/kana-live-trace.jsonl`.
///
/// Returns whether this call installed the subscriber. Later calls, a host
/// that already set a global subscriber, or a build without the `trace`
/// feature all return false.
pub fn init_tracing(log_dir: &Path) -> bool {
    #[cfg(feature = "trace")]
    {
        install(log_dir)
    }
    #[cfg(not(feature = "trace"))]
    {
        let _ = log_dir;
        false
    }
}

#[cfg(feature = "trace")]
fn install(log_dir: &Path) -> bool {
    use std::sync::Once;

    use tracing_subscriber::fmt::format::FmtSpan;
    use tracing_subscriber::EnvFilter;

    static INIT: Once = Once::new();

    let mut installed = false;
    INIT.call_once(|| {
        let appender = tracing_appender::rolling::never(log_dir, TRACE_FILE);
        let (writer, guard) = tracing_appender::non_blocking(appender);
        // Kept for the life of the host process; dropping it stops the writer.
        std::mem::forget(guard);

        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
        installed = tracing_subscriber::fmt()
            .json()
            .with_writer(writer)
            .with_target(true)
            .with_span_events(FmtSpan::CLOSE)
            .with_env_filter(filter)
            .try_init()
            .is_ok();
    });
    installed
}
