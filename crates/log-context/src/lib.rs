//! Structured logging fields carried in an immutable request context
//!
//! Attach fields once near the edge of a request and pick them up wherever a
//! log line is written, without threading a logger through every call:
//!
//! ```
//! use proven_log_context::{Context, append, get, get_field, set};
//! use proven_logger::Field;
//!
//! let ctx = set(&Context::background(), [Field::string("trace_id", "abc")]);
//! let ctx = append(&ctx, [Field::string("span_id", "def")]);
//!
//! assert_eq!(get(&ctx).len(), 2);
//! assert_eq!(get_field(&ctx, "trace_id").as_str(), Some("abc"));
//! ```
//!
//! Two storage shapes are supported. Field sequences ([`set`], [`append`],
//! [`get`]) are merged into a logger at the point of use with [`enrich`] or
//! [`sugared`]. Bound loggers ([`set_logger`], [`logger`]) have their fields
//! merged once, up front.
//!
//! Nothing here fails: missing values read as empty, and a value of the wrong
//! type under one of the reserved keys reads as missing.

#![warn(missing_docs, unreachable_pub)]
#![forbid(unsafe_code)]

mod bound;
mod context;
mod fields;
mod scope;

pub use bound::{enrich, logger, logger_from, logger_or, set_logger, stored_logger, sugared, with_logger};
pub use context::{Context, ContextKey};
pub use fields::{FieldsExt, append, find_field, get, get_field, get_sugared, set};
pub use scope::{ContextFutureExt, current_fields, current_logger};
