#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `message` is the I/O-free half of the linelog workspace. It models a single
//! log call as a [`Record`] (an explicit [`Severity`] plus an ordered list of
//! already-rendered values) and turns records into delimited text lines via
//! [`LineFormat`]. The sibling `logging` crate owns the sinks that carry those
//! lines to the console and to files; this crate never touches a writer.
//!
//! # Design
//!
//! The severity is a closed enumeration rather than a bit set. Call sites that
//! need the historical grouping semantics go through the named predicates
//! ([`Severity::is_verbose_gated`], [`Severity::is_debug`],
//! [`Severity::is_critical`]) instead of masking [`Severity::bit`] values, so
//! the membership of each gate is spelled out in one place.
//!
//! Values are rendered to text when the [`Record`] is built. A record is
//! therefore a plain value type that can be filtered, formatted, and emitted
//! any number of times without re-running caller formatting.
//!
//! # Invariants
//!
//! - Exactly one severity classifies a record; a severity passed in the value
//!   list is formatted as its textual name like any other value.
//! - [`LineFormat::render`] appends the configured separator after *every*
//!   value, then terminates the line with [`LINE_TERMINATOR`] (`\r\n`).
//! - Absent optional values render as the fixed [`NIL_PLACEHOLDER`] string.
//!
//! # Examples
//!
//! Build a record and render it with a comma separator:
//!
//! ```
//! use message::{LineFormat, Record, Severity};
//!
//! let record = Record::with_values(Severity::Info, &[&"a", &"b"]);
//! let format = LineFormat::new().with_separator(',');
//!
//! assert_eq!(format.render(&record), "[Info] a,b,\r\n");
//! ```

mod format;
mod record;
mod severity;

pub use format::{LINE_TERMINATOR, LineFormat};
pub use record::{NIL_PLACEHOLDER, Record};
pub use severity::{ParseSeverityError, Severity};
