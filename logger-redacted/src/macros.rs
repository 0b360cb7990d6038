// Logging macros

/// `tracing::warn!` with a `detail` field passed through [`crate::redact`]
#[macro_export]
macro_rules! redacted_warn {
    ($detail:expr, $($arg:tt)*) => {
        tracing::warn!(detail = %$crate::redact(&$detail), $($arg)*)
    };
}

/// `tracing::error!` with a `detail` field passed through [`crate::redact`]
#[macro_export]
macro_rules! redacted_error {
    ($detail:expr, $($arg:tt)*) => {
        tracing::error!(detail = %$crate::redact(&$detail), $($arg)*)
    };
}
