use std::fmt;
use std::str::FromStr;

/// Severity of a single log call.
///
/// The enumeration is closed: every call is classified by exactly one of
/// these variants, and the filter in the `logging` crate branches on the
/// named predicates below rather than on numeric masks.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Severity {
    /// No classification.
    None,
    /// Normal, non-actionable information.
    Info,
    /// Attention-worthy condition.
    Warning,
    /// Recoverable failure.
    Error,
    /// Unrecoverable failure; never suppressed.
    Critical,
    /// Developer-only output, suppressed unless explicitly enabled.
    Debug,
}

impl Severity {
    /// Returns the textual name used when rendering the line label.
    ///
    /// # Examples
    ///
    /// ```
    /// use message::Severity;
    ///
    /// assert_eq!(Severity::Info.as_str(), "Info");
    /// assert_eq!(Severity::Critical.as_str(), "Critical");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Info => "Info",
            Self::Warning => "Warning",
            Self::Error => "Error",
            Self::Critical => "Critical",
            Self::Debug => "Debug",
        }
    }

    /// Returns the bracketed label rendered at the start of every line.
    ///
    /// Centralising the label keeps [`LineFormat::render`](crate::LineFormat::render)
    /// from assembling the bracket, name, and trailing space per call.
    ///
    /// # Examples
    ///
    /// ```
    /// use message::Severity;
    ///
    /// assert_eq!(Severity::Error.label(), "[Error] ");
    /// ```
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::None => "[None] ",
            Self::Info => "[Info] ",
            Self::Warning => "[Warning] ",
            Self::Error => "[Error] ",
            Self::Critical => "[Critical] ",
            Self::Debug => "[Debug] ",
        }
    }

    /// Returns the historical bit value of this severity.
    ///
    /// The values survive for interop with configuration that stored the
    /// old flag encoding. Filtering never recomputes group membership from
    /// them; use [`is_verbose_gated`](Self::is_verbose_gated) and friends.
    ///
    /// # Examples
    ///
    /// ```
    /// use message::Severity;
    ///
    /// assert_eq!(Severity::None.bit(), 1);
    /// assert_eq!(Severity::Debug.bit(), 32);
    /// ```
    #[must_use]
    pub const fn bit(self) -> u8 {
        match self {
            Self::None => 1,
            Self::Info => 2,
            Self::Warning => 4,
            Self::Error => 8,
            Self::Critical => 16,
            Self::Debug => 32,
        }
    }

    /// Reports whether this severity is suppressed while verbose output is
    /// disabled.
    ///
    /// Membership is exactly {`None`, `Info`, `Warning`, `Error`}.
    /// `Critical` is never gated and `Debug` is gated independently.
    ///
    /// # Examples
    ///
    /// ```
    /// use message::Severity;
    ///
    /// assert!(Severity::Warning.is_verbose_gated());
    /// assert!(!Severity::Critical.is_verbose_gated());
    /// assert!(!Severity::Debug.is_verbose_gated());
    /// ```
    #[must_use]
    pub const fn is_verbose_gated(self) -> bool {
        matches!(self, Self::None | Self::Info | Self::Warning | Self::Error)
    }

    /// Reports whether this severity is developer-only output.
    #[must_use]
    pub const fn is_debug(self) -> bool {
        matches!(self, Self::Debug)
    }

    /// Reports whether this severity marks an unrecoverable failure.
    #[must_use]
    pub const fn is_critical(self) -> bool {
        matches!(self, Self::Critical)
    }
}

impl Default for Severity {
    /// Returns [`Severity::Debug`], the classification applied when a call
    /// supplies no severity of its own.
    fn default() -> Self {
        Self::Debug
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a [`Severity`] from a string fails.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseSeverityError {
    _private: (),
}

impl fmt::Display for ParseSeverityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unrecognised log severity")
    }
}

impl std::error::Error for ParseSeverityError {}

impl FromStr for Severity {
    type Err = ParseSeverityError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input {
            "None" => Ok(Self::None),
            "Info" => Ok(Self::Info),
            "Warning" => Ok(Self::Warning),
            "Error" => Ok(Self::Error),
            "Critical" => Ok(Self::Critical),
            "Debug" => Ok(Self::Debug),
            _ => Err(ParseSeverityError { _private: () }),
        }
    }
}
