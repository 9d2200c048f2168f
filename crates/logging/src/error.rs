use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Error returned when a sink fails during a single log call.
///
/// Filtering and formatting never fail; only I/O on a sink does. The error
/// is scoped to the failing `log`/`emit` invocation and is never escalated
/// to process termination. No retry is performed.
#[derive(Debug, Error)]
pub enum SinkError {
    /// The console writer rejected the line.
    #[error("console sink write failed")]
    Console {
        /// Underlying I/O error from the console writer.
        #[source]
        source: io::Error,
    },
    /// The file sink could not be opened or appended.
    #[error("file sink append failed for {}", path.display())]
    File {
        /// The configured log file path.
        path: PathBuf,
        /// Underlying I/O error from opening or writing the file.
        #[source]
        source: io::Error,
    },
}

impl SinkError {
    /// Returns the file path when the failing sink was the file sink.
    #[must_use]
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Self::Console { .. } => None,
            Self::File { path, .. } => Some(path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn console_error_has_no_path() {
        let err = SinkError::Console {
            source: io::Error::new(io::ErrorKind::BrokenPipe, "pipe"),
        };
        assert!(err.path().is_none());
        assert_eq!(err.to_string(), "console sink write failed");
        assert!(err.source().is_some());
    }

    #[test]
    fn file_error_reports_the_configured_path() {
        let err = SinkError::File {
            path: PathBuf::from("/var/log/app.log"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.path(), Some(std::path::Path::new("/var/log/app.log")));
        assert!(err.to_string().contains("/var/log/app.log"));
    }
}
