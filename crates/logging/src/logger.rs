use std::fmt;
use std::io::{self, Stdout, Write};
use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard, PoisonError};

use message::{Record, Severity};

use crate::config::GateConfig;
use crate::error::SinkError;
use crate::sink::FileSink;

/// Severity-gated line logger fanning out to a console writer and an
/// optional file.
///
/// The logger is generic over its console writer so tests can capture output
/// in a `Vec<u8>`; production code uses the [`Stdout`] default via
/// [`Logger::new`] or [`Logger::with_file`]. All state — the console writer,
/// the optional file sink, and the [`GateConfig`] — sits behind one mutex,
/// which serialises concurrent `log` calls (lines never interleave mid-line
/// on either sink) and makes reconfiguration safe while other threads are
/// logging.
///
/// # Examples
///
/// Console-only logging with the default gates:
///
/// ```
/// use logging::{Logger, Severity};
///
/// let logger = Logger::with_console(Vec::<u8>::new());
/// logger.log(Severity::Critical, &[&"halting"])?;
///
/// let bytes = logger.into_console();
/// assert_eq!(bytes, b"[Critical] halting\t\r\n\n");
/// # Ok::<(), logging::SinkError>(())
/// ```
///
/// Opening the debug gate for unclassified calls:
///
/// ```
/// use logging::Logger;
///
/// let logger = Logger::with_console(Vec::<u8>::new());
/// logger.set_show_debug(true);
/// logger.debug(&[&"just text"])?;
///
/// let output = String::from_utf8(logger.into_console()).unwrap();
/// assert_eq!(output, "[Debug] just text\t\r\n\n");
/// # Ok::<(), logging::SinkError>(())
/// ```
pub struct Logger<W = Stdout> {
    inner: Mutex<LoggerInner<W>>,
}

struct LoggerInner<W> {
    console: W,
    file: Option<FileSink>,
    config: GateConfig,
}

impl Logger<Stdout> {
    /// Creates a console-only logger writing to standard output.
    #[must_use]
    pub fn new() -> Self {
        Self::with_console(io::stdout())
    }

    /// Creates a logger writing to standard output and appending to the file
    /// at `path`.
    ///
    /// The path is stored as given; the file is not opened until the first
    /// passing call writes to it, so an unusable path surfaces as a
    /// [`SinkError::File`] from that call rather than here.
    #[must_use]
    pub fn with_file(path: impl Into<PathBuf>) -> Self {
        Self::with_console_and_file(io::stdout(), path)
    }
}

impl Default for Logger<Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W> Logger<W> {
    /// Creates a console-only logger over a custom writer.
    #[must_use]
    pub fn with_console(console: W) -> Self {
        Self {
            inner: Mutex::new(LoggerInner {
                console,
                file: None,
                config: GateConfig::new(),
            }),
        }
    }

    /// Creates a logger over a custom writer plus a file sink at `path`.
    #[must_use]
    pub fn with_console_and_file(console: W, path: impl Into<PathBuf>) -> Self {
        Self {
            inner: Mutex::new(LoggerInner {
                console,
                file: Some(FileSink::new(path)),
                config: GateConfig::new(),
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, LoggerInner<W>> {
        // A caller panicking mid-write must not wedge every other thread's
        // diagnostics; the inner state is still structurally sound.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns a snapshot of the current configuration.
    #[must_use]
    pub fn config(&self) -> GateConfig {
        self.lock().config
    }

    /// Returns the configured separator character.
    #[must_use]
    pub fn separator(&self) -> char {
        self.lock().config.separator
    }

    /// Sets the separator appended after each logged value.
    pub fn set_separator(&self, separator: char) {
        self.lock().config.separator = separator;
    }

    /// Reports whether verbose-gated severities currently pass.
    #[must_use]
    pub fn verbose(&self) -> bool {
        self.lock().config.verbose
    }

    /// Opens or closes the verbose gate (None/Info/Warning/Error).
    pub fn set_verbose(&self, verbose: bool) {
        self.lock().config.verbose = verbose;
    }

    /// Reports whether Debug-classified calls currently pass.
    #[must_use]
    pub fn show_debug(&self) -> bool {
        self.lock().config.show_debug
    }

    /// Opens or closes the debug gate.
    pub fn set_show_debug(&self, show_debug: bool) {
        self.lock().config.show_debug = show_debug;
    }

    /// Reports whether a timestamp is prepended to each line.
    #[must_use]
    pub fn add_time(&self) -> bool {
        self.lock().config.add_time
    }

    /// Toggles the timestamp prefix.
    pub fn set_add_time(&self, add_time: bool) {
        self.lock().config.add_time = add_time;
    }

    /// Returns the file sink path, when one was configured.
    #[must_use]
    pub fn file_path(&self) -> Option<PathBuf> {
        self.lock().file.as_ref().map(|sink| sink.path().to_path_buf())
    }

    /// Consumes the logger and returns the console writer.
    ///
    /// Tests use this to inspect the bytes captured by a `Vec<u8>` console.
    #[must_use]
    pub fn into_console(self) -> W {
        self.inner
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
            .console
    }
}

impl<W> Logger<W>
where
    W: Write,
{
    /// Classifies, filters, formats, and emits one log call.
    ///
    /// Each value is rendered via [`fmt::Display`] and followed by the
    /// configured separator; the line ends with `\r\n`. A suppressed call
    /// and an empty value list are silent no-ops returning `Ok(())` — only
    /// sink I/O failures produce an error.
    pub fn log(&self, severity: Severity, values: &[&dyn fmt::Display]) -> Result<(), SinkError> {
        self.emit(&Record::with_values(severity, values))
    }

    /// Emits a pre-built [`Record`] under the same contract as
    /// [`log`](Self::log).
    ///
    /// Filtering, formatting, and both sink writes happen under the instance
    /// lock, so the record's line is written atomically with respect to
    /// concurrent calls.
    pub fn emit(&self, record: &Record) -> Result<(), SinkError> {
        if record.is_empty() {
            return Ok(());
        }

        let mut inner = self.lock();
        if !inner.config.permits(record.severity()) {
            return Ok(());
        }

        let line = inner.config.line_format().render(record);
        inner.write_line(&line)
    }

    /// Logs values classified [`Severity::None`].
    pub fn none(&self, values: &[&dyn fmt::Display]) -> Result<(), SinkError> {
        self.log(Severity::None, values)
    }

    /// Logs values classified [`Severity::Info`].
    pub fn info(&self, values: &[&dyn fmt::Display]) -> Result<(), SinkError> {
        self.log(Severity::Info, values)
    }

    /// Logs values classified [`Severity::Warning`].
    pub fn warning(&self, values: &[&dyn fmt::Display]) -> Result<(), SinkError> {
        self.log(Severity::Warning, values)
    }

    /// Logs values classified [`Severity::Error`].
    pub fn error(&self, values: &[&dyn fmt::Display]) -> Result<(), SinkError> {
        self.log(Severity::Error, values)
    }

    /// Logs values classified [`Severity::Critical`].
    pub fn critical(&self, values: &[&dyn fmt::Display]) -> Result<(), SinkError> {
        self.log(Severity::Critical, values)
    }

    /// Logs values classified [`Severity::Debug`], the classification every
    /// severity-less call receives.
    pub fn debug(&self, values: &[&dyn fmt::Display]) -> Result<(), SinkError> {
        self.log(Severity::Debug, values)
    }
}

impl<W> LoggerInner<W>
where
    W: Write,
{
    /// Writes one formatted line to every enabled sink.
    ///
    /// The console receives the line plus one extra `\n` (the line-print
    /// convention the wire format inherited); the file receives the line
    /// bytes only. Both sinks are attempted even when the first fails, and
    /// the first failure is reported afterwards.
    fn write_line(&mut self, line: &str) -> Result<(), SinkError> {
        let console = self
            .console
            .write_all(line.as_bytes())
            .and_then(|()| self.console.write_all(b"\n"))
            .and_then(|()| self.console.flush())
            .map_err(|source| SinkError::Console { source });

        let file = match &self.file {
            Some(sink) => sink.append_line(line).map_err(|source| SinkError::File {
                path: sink.path().to_path_buf(),
                source,
            }),
            None => Ok(()),
        };

        console.and(file)
    }
}

impl<W> fmt::Debug for Logger<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.lock();
        f.debug_struct("Logger")
            .field("config", &inner.config)
            .field("file", &inner.file)
            .finish_non_exhaustive()
    }
}
