//! crates/logging/src/macros.rs
//! Per-severity convenience macros.
//!
//! The macros keep variadic call-site ergonomics without runtime type
//! inspection: each expands to the matching [`Logger`](crate::Logger) method
//! with every argument rendered via `Display`, and yields that method's
//! `Result`.

/// Logs values classified `None`.
///
/// # Example
/// ```ignore
/// log_none!(logger, "startup banner");
/// ```
#[macro_export]
macro_rules! log_none {
    ($logger:expr, $($value:expr),+ $(,)?) => {
        $logger.log($crate::Severity::None, &[$(&$value as &dyn ::std::fmt::Display),+])
    };
}

/// Logs values classified `Info`.
///
/// # Example
/// ```ignore
/// log_info!(logger, "transferred", bytes);
/// ```
#[macro_export]
macro_rules! log_info {
    ($logger:expr, $($value:expr),+ $(,)?) => {
        $logger.log($crate::Severity::Info, &[$(&$value as &dyn ::std::fmt::Display),+])
    };
}

/// Logs values classified `Warning`.
///
/// # Example
/// ```ignore
/// log_warning!(logger, "retrying", attempt);
/// ```
#[macro_export]
macro_rules! log_warning {
    ($logger:expr, $($value:expr),+ $(,)?) => {
        $logger.log($crate::Severity::Warning, &[$(&$value as &dyn ::std::fmt::Display),+])
    };
}

/// Logs values classified `Error`.
///
/// # Example
/// ```ignore
/// log_error!(logger, "disk full", path);
/// ```
#[macro_export]
macro_rules! log_error {
    ($logger:expr, $($value:expr),+ $(,)?) => {
        $logger.log($crate::Severity::Error, &[$(&$value as &dyn ::std::fmt::Display),+])
    };
}

/// Logs values classified `Critical`; never suppressed.
///
/// # Example
/// ```ignore
/// log_critical!(logger, "unrecoverable", err);
/// ```
#[macro_export]
macro_rules! log_critical {
    ($logger:expr, $($value:expr),+ $(,)?) => {
        $logger.log($crate::Severity::Critical, &[$(&$value as &dyn ::std::fmt::Display),+])
    };
}

/// Logs values classified `Debug`.
///
/// # Example
/// ```ignore
/// log_debug!(logger, "state", state);
/// ```
#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $($value:expr),+ $(,)?) => {
        $logger.log($crate::Severity::Debug, &[$(&$value as &dyn ::std::fmt::Display),+])
    };
}

/// Logs values with no explicit severity; the call is classified `Debug`,
/// matching the historical default for unclassified calls.
///
/// # Example
/// ```ignore
/// log_values!(logger, "just text");
/// ```
#[macro_export]
macro_rules! log_values {
    ($logger:expr, $($value:expr),+ $(,)?) => {
        $logger.emit(&$crate::Record::unclassified(
            &[$(&$value as &dyn ::std::fmt::Display),+],
        ))
    };
}
