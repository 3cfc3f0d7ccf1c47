//! Log record type optimized for performance

use crate::{Fields, Level};
#[cfg(feature = "timestamps")]
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::borrow::Cow;
use std::fmt::Write as _;

/// A log record - designed to minimize allocations
#[derive(Debug, Clone, Serialize)]
pub struct Record<'a> {
    /// Log level
    pub level: Level,
    /// The log message
    pub message: Cow<'a, str>,
    /// When the log was created (can be disabled for performance)
    #[cfg(feature = "timestamps")]
    pub timestamp: DateTime<Utc>,
    /// Target module
    pub target: &'static str,
    /// File location
    pub file: Option<&'static str>,
    /// Line number
    pub line: Option<u32>,
    /// Fields attached to this record only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<&'a Fields>,
}

impl<'a> Record<'a> {
    /// Create a new record with minimal allocations
    #[inline]
    pub fn new(level: Level, message: impl Into<Cow<'a, str>>) -> Self {
        Self {
            level,
            message: message.into(),
            #[cfg(feature = "timestamps")]
            timestamp: Utc::now(),
            target: module_path!(),
            file: None,
            line: None,
            fields: None,
        }
    }

    /// Builder-style method for setting target
    #[inline]
    pub fn with_target(mut self, target: &'static str) -> Self {
        self.target = target;
        self
    }

    /// Builder-style method for setting location
    #[inline]
    pub fn with_location(mut self, file: &'static str, line: u32) -> Self {
        self.file = Some(file);
        self.line = Some(line);
        self
    }

    /// Builder-style method for attaching per-record fields
    #[inline]
    pub fn with_fields(mut self, fields: &'a Fields) -> Self {
        self.fields = Some(fields);
        self
    }

    /// Render as a single plain-text line, without a trailing newline
    ///
    /// `bound` are the fields carried by the logger; they come before the
    /// record's own fields.
    pub fn render(&self, bound: &Fields) -> String {
        let mut line = format!("{} [{}]", self.level, self.target);
        if let (Some(file), Some(line_no)) = (self.file, self.line) {
            let _ = write!(line, " {file}:{line_no}");
        }
        let _ = write!(line, " {}", self.message);

        let own = self.fields.into_iter().flat_map(|fields| fields.iter());
        for field in bound.iter().chain(own) {
            let _ = write!(line, " {field}");
        }
        line
    }

    /// Convert to owned version (for sending across threads)
    ///
    /// The logger's bound fields are folded in ahead of the record's own.
    pub fn to_owned(self, bound: &Fields) -> OwnedRecord {
        let fields = match self.fields {
            Some(own) => bound.extend(own.clone()),
            None => bound.clone(),
        };

        OwnedRecord {
            level: self.level,
            message: self.message.into_owned(),
            #[cfg(feature = "timestamps")]
            timestamp: self.timestamp,
            target: self.target,
            file: self.file,
            line: self.line,
            fields,
        }
    }
}

/// Owned version of Record for cross-thread sending
#[derive(Debug, Clone, Serialize)]
pub struct OwnedRecord {
    /// Log level
    pub level: Level,
    /// The log message
    pub message: String,
    /// When the log was created
    #[cfg(feature = "timestamps")]
    pub timestamp: DateTime<Utc>,
    /// Target module
    pub target: &'static str,
    /// File location
    pub file: Option<&'static str>,
    /// Line number
    pub line: Option<u32>,
    /// Every field that applied to the record
    pub fields: Fields,
}
