//! Structured-field logger
//!
//! Loggers carry a bound set of typed [`Field`]s. Binding more fields with
//! [`Logger::with_fields`] returns a new child logger and leaves the parent
//! untouched, so a logger handle can be enriched per request and passed on.
//!
//! A process default logger lives in a replaceable [`LoggerSlot`]; it starts
//! out as a [`NoOpLogger`] until [`init`] installs something else.

#![warn(missing_docs, unreachable_pub)]
#![forbid(unsafe_code)]

mod error;
mod field;
mod fields;
mod global;
mod level;
mod logger;
mod macros;
mod noop;
mod record;
pub mod sugar;

#[cfg(feature = "stdout")]
mod stdout;

pub mod compat;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use error::{Error, Result};
pub use field::{Field, FieldType, FieldValue, SharedError, SharedValue};
pub use fields::Fields;
pub use global::{LoggerSlot, default_slot, init, logger};
pub use level::Level;
pub use logger::{Logger, LoggerExt, LoggerHandleExt};
pub use noop::NoOpLogger;
pub use record::{OwnedRecord, Record};
pub use sugar::{SugaredLogger, SugaredValue};

#[cfg(feature = "stdout")]
pub use stdout::StdoutLogger;
