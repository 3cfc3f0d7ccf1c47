//! Log levels with compile-time ceilings

use serde::{Deserialize, Serialize};
use std::fmt;

/// Log level, ordered from most to least verbose
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Level {
    /// Very verbose diagnostics
    Trace = 0,
    /// Debugging information
    Debug = 1,
    /// Normal operational messages
    Info = 2,
    /// Something unexpected but recoverable
    Warn = 3,
    /// Something failed
    Error = 4,
}

impl Level {
    /// The most verbose level compiled in, selected by the `max-level-*` features
    #[inline(always)]
    pub const fn static_max() -> Self {
        if cfg!(feature = "max-level-error") {
            Self::Error
        } else if cfg!(feature = "max-level-warn") {
            Self::Warn
        } else if cfg!(feature = "max-level-info") {
            Self::Info
        } else if cfg!(feature = "max-level-debug") {
            Self::Debug
        } else {
            Self::Trace
        }
    }

    /// Whether this level survives the compile-time ceiling
    ///
    /// This is a const check, so disabled call sites fold away entirely.
    #[inline(always)]
    pub const fn is_enabled_static(self) -> bool {
        if cfg!(feature = "max-level-off") {
            return false;
        }
        self as u8 >= Self::static_max() as u8
    }

    /// Upper-case name used in rendered lines
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Trace => "TRACE",
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering() {
        assert!(Level::Error > Level::Warn);
        assert!(Level::Warn > Level::Info);
        assert!(Level::Info > Level::Debug);
        assert!(Level::Debug > Level::Trace);
    }

    #[test]
    fn test_display() {
        assert_eq!(Level::Error.to_string(), "ERROR");
        assert_eq!(Level::Trace.to_string(), "TRACE");
    }

    #[test]
    #[cfg(not(any(
        feature = "max-level-off",
        feature = "max-level-error",
        feature = "max-level-warn",
        feature = "max-level-info",
        feature = "max-level-debug"
    )))]
    fn test_everything_enabled_by_default() {
        assert_eq!(Level::static_max(), Level::Trace);
        assert!(Level::Trace.is_enabled_static());
        assert!(Level::Error.is_enabled_static());
    }
}
