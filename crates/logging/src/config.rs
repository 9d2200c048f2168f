//! crates/logging/src/config.rs
//! Gate and formatting configuration for a logger instance.

use message::{LineFormat, Severity};

/// Filtering and formatting configuration for a [`Logger`](crate::Logger).
///
/// The fields mirror the logger's public configuration surface: a separator
/// character, the verbose and debug gates, and the timestamp toggle. The
/// struct is a plain value; the logger keeps the authoritative copy behind
/// its instance lock and hands out snapshots.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GateConfig {
    /// Character appended after each logged value. Default: tab.
    pub separator: char,
    /// Whether verbose-gated severities (None/Info/Warning/Error) pass.
    /// Default: false.
    pub verbose: bool,
    /// Whether Debug-classified calls pass. Default: false.
    pub show_debug: bool,
    /// Whether a local timestamp is prepended to each line. Default: false.
    pub add_time: bool,
}

impl GateConfig {
    /// Creates the default configuration: tab separator, all gates closed,
    /// no timestamp.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            separator: '\t',
            verbose: false,
            show_debug: false,
            add_time: false,
        }
    }

    /// Reports whether a call with the given severity may emit output.
    ///
    /// The decision is made once per call from the explicit severity:
    /// `Debug` requires [`show_debug`](Self::show_debug), the verbose-gated
    /// group requires [`verbose`](Self::verbose), and `Critical` always
    /// passes.
    ///
    /// # Examples
    ///
    /// ```
    /// use logging::{GateConfig, Severity};
    ///
    /// let config = GateConfig::new();
    /// assert!(config.permits(Severity::Critical));
    /// assert!(!config.permits(Severity::Info));
    /// assert!(!config.permits(Severity::Debug));
    /// ```
    #[must_use]
    pub const fn permits(&self, severity: Severity) -> bool {
        if severity.is_debug() {
            return self.show_debug;
        }
        if severity.is_verbose_gated() {
            return self.verbose;
        }
        true
    }

    /// Returns the line format derived from this configuration.
    #[must_use]
    pub const fn line_format(&self) -> LineFormat {
        LineFormat {
            separator: self.separator,
            timestamp: self.add_time,
        }
    }
}

impl Default for GateConfig {
    fn default() -> Self {
        Self::new()
    }
}
