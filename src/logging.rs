//! `tracing` integration for contextual errors

use tracing::{error, warn};

use crate::core::ContextError;

/// Emit an error event for `err` with its base frame and full trail as fields
pub fn report(err: &ContextError) {
    error!(
        code = err.code(),
        file = err.file(),
        line = err.line(),
        function = err.function(),
        trail = %err.detailed_message(),
        "{}",
        err.message()
    );
}

/// Same as [`report`] for errors the caller has recovered from
pub fn report_warning(err: &ContextError) {
    warn!(
        code = err.code(),
        file = err.file(),
        line = err.line(),
        function = err.function(),
        trail = %err.detailed_message(),
        "{}",
        err.message()
    );
}

/// Install a global fmt subscriber filtered by `RUST_LOG`.
///
/// Calling this more than once, or after another subscriber was installed,
/// leaves the existing subscriber in place.
#[cfg(not(tarpaulin_include))]
pub fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .with_line_number(true)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
