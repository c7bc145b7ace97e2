use tracing_appender::non_blocking::NonBlocking;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Filter used when `RUST_LOG` is not set.
pub fn default_env_filter(logging_level: &str) -> String {
    format!("info,common={logging_level},script_launcher={logging_level}")
}

/// Diagnostics go to stderr only; stdout is reserved for the launch report and the
/// launcher writes no log file of its own.
pub fn init_logging(rust_log: &str, non_blocking_stderr: NonBlocking) {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(rust_log))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(non_blocking_stderr)
                .with_file(true)
                .with_line_number(true)
                .with_target(false),
        )
        .init();
}
