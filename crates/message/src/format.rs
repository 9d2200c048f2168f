//! Line assembly: separator handling, the CRLF terminator, and the optional
//! timestamp prefix.

use time::OffsetDateTime;
use time::format_description::FormatItem;
use time::macros::format_description;

use crate::record::Record;

/// Terminator appended to every formatted line, on every sink.
///
/// The terminator is fixed; no platform-specific substitution occurs.
pub const LINE_TERMINATOR: &str = "\r\n";

const TIMESTAMP_FORMAT: &[FormatItem<'static>] = format_description!(
    "[year]-[month]-[day] [hour]:[minute]:[second].[subsecond digits:6]"
);

const TIMESTAMP_FALLBACK: &str = "1970-01-01 00:00:00.000000";

/// Formatting configuration for a single line.
///
/// `separator` is appended after every value, including the last one, and
/// `timestamp` controls whether the current local time is prepended before
/// the severity label. The wire format is:
///
/// ```text
/// [<ts>, ][Severity] value1<sep>value2<sep>...valueN<sep>\r\n
/// ```
///
/// # Examples
///
/// ```
/// use message::{LineFormat, Record, Severity};
///
/// let format = LineFormat::new().with_separator(',');
/// let record = Record::with_values(Severity::Info, &[&"a", &"b"]);
/// assert_eq!(format.render(&record), "[Info] a,b,\r\n");
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LineFormat {
    /// Character appended after each rendered value.
    pub separator: char,
    /// Whether to prepend the current local timestamp.
    pub timestamp: bool,
}

impl LineFormat {
    /// Creates the default format: tab separator, no timestamp.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            separator: '\t',
            timestamp: false,
        }
    }

    /// Returns the format with a different separator character.
    #[must_use]
    pub const fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    /// Returns the format with the timestamp prefix toggled.
    #[must_use]
    pub const fn with_timestamp(mut self, timestamp: bool) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Renders a record into a complete line.
    ///
    /// The timestamp, when enabled, is the only difference between two
    /// renderings of the same record: the `[Severity]` label, body, and
    /// terminator are byte-identical with and without it.
    #[must_use]
    pub fn render(&self, record: &Record) -> String {
        let mut line = String::new();
        if self.timestamp {
            line.push_str(&current_timestamp());
            line.push_str(", ");
        }
        line.push_str(record.severity().label());
        for value in record.values() {
            line.push_str(value);
            line.push(self.separator);
        }
        line.push_str(LINE_TERMINATOR);
        line
    }
}

impl Default for LineFormat {
    fn default() -> Self {
        Self::new()
    }
}

/// Formats the current local time, falling back to UTC when the local offset
/// cannot be determined and to a fixed epoch string if formatting fails.
fn current_timestamp() -> String {
    let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
    now.format(TIMESTAMP_FORMAT)
        .unwrap_or_else(|_| TIMESTAMP_FALLBACK.to_string())
}
