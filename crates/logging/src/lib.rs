#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logging` owns the [`Logger`]: the single entry point that classifies a
//! call by severity, applies the verbose and debug gates, formats one
//! delimited line, and writes it synchronously to every enabled sink. The
//! console sink is always present; a file sink is present when a path was
//! supplied at construction and is opened in append mode for the duration of
//! each write.
//!
//! # Design
//!
//! The logger is generic over its console writer, so tests capture output in
//! a `Vec<u8>` while production code uses [`std::io::Stdout`]. One mutex per
//! instance serialises the whole filter-format-emit sequence together with
//! every configuration accessor: lines from concurrent callers never
//! interleave mid-line, and reconfiguring a live logger is safe against
//! in-flight calls.
//!
//! Severity classification is explicit. Call sites pass a
//! [`Severity`] (or use the per-severity helpers and macros); a severity
//! value appearing in the value list is formatted as plain text and never
//! re-triggers filtering.
//!
//! # Invariants
//!
//! - A suppressed call performs no I/O and returns `Ok(())`; only sink
//!   failures produce a [`SinkError`].
//! - Every sink is attempted on every passing call, even after an earlier
//!   sink fails; the first error is reported once all sinks were attempted.
//! - The file handle is scoped to a single call: opened append-with-create,
//!   written, and closed on every exit path. No handle is cached.
//!
//! # Errors
//!
//! [`Logger::log`] and [`Logger::emit`] surface [`SinkError::Console`] when
//! the console writer fails and [`SinkError::File`] (carrying the configured
//! path) when the file sink cannot be opened or appended. Formatting and
//! filtering never fail.
//!
//! # Examples
//!
//! Capture two lines in memory and inspect the exact bytes:
//!
//! ```
//! use logging::{Logger, Severity};
//!
//! let logger = Logger::with_console(Vec::new());
//! logger.set_verbose(true);
//!
//! logger.log(Severity::Error, &[&"disk full"])?;
//! logger.log(Severity::Info, &[&"resuming", &3])?;
//!
//! let output = String::from_utf8(logger.into_console()).unwrap();
//! assert_eq!(
//!     output,
//!     "[Error] disk full\t\r\n\n[Info] resuming\t3\t\r\n\n"
//! );
//! # Ok::<(), logging::SinkError>(())
//! ```
//!
//! Suppression is silent; only `Critical` passes the default gates:
//!
//! ```
//! use logging::{Logger, Severity};
//!
//! let logger = Logger::with_console(Vec::new());
//! logger.log(Severity::Info, &[&"hidden"])?;
//! logger.log(Severity::Critical, &[&"kept"])?;
//!
//! let output = String::from_utf8(logger.into_console()).unwrap();
//! assert_eq!(output, "[Critical] kept\t\r\n\n");
//! # Ok::<(), logging::SinkError>(())
//! ```

mod config;
mod error;
mod logger;
mod macros;
mod sink;
#[cfg(feature = "tracing")]
mod tracing_bridge;

pub use config::GateConfig;
pub use error::SinkError;
pub use logger::Logger;
pub use message::{LINE_TERMINATOR, LineFormat, NIL_PLACEHOLDER, ParseSeverityError, Record, Severity};
#[cfg(feature = "tracing")]
pub use tracing_bridge::{LineLayer, init_tracing, init_tracing_with_filter};
