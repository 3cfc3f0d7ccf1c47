//! Replaceable default logger

use crate::{Logger, NoOpLogger};
use arc_swap::ArcSwap;
use std::fmt;
use std::sync::{Arc, LazyLock};

/// A slot holding a default logger that can be swapped at runtime
///
/// Reads never block. Applications can own their own slot and hand it to
/// whatever needs a fallback logger; the process-wide slot behind [`logger`]
/// and [`init`] is just one instance.
pub struct LoggerSlot {
    current: ArcSwap<Arc<dyn Logger>>,
}

impl LoggerSlot {
    /// Create a slot holding `logger`
    pub fn new(logger: Arc<dyn Logger>) -> Self {
        Self {
            current: ArcSwap::from_pointee(logger),
        }
    }

    /// The logger currently in the slot
    pub fn get(&self) -> Arc<dyn Logger> {
        let current = self.current.load();
        Arc::clone(&**current)
    }

    /// Put `logger` in the slot, returning the one it replaced
    pub fn replace(&self, logger: Arc<dyn Logger>) -> Arc<dyn Logger> {
        let previous = self.current.swap(Arc::new(logger));
        Arc::clone(&*previous)
    }
}

impl Default for LoggerSlot {
    fn default() -> Self {
        Self::new(Arc::new(NoOpLogger))
    }
}

impl fmt::Debug for LoggerSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggerSlot")
            .field("fields", &self.get().fields())
            .finish_non_exhaustive()
    }
}

static DEFAULT: LazyLock<LoggerSlot> = LazyLock::new(LoggerSlot::default);

/// The process-wide default slot
pub fn default_slot() -> &'static LoggerSlot {
    &DEFAULT
}

/// Install `logger` as the process-wide default, returning the previous one
pub fn init(logger: Arc<dyn Logger>) -> Arc<dyn Logger> {
    DEFAULT.replace(logger)
}

/// The process-wide default logger
#[inline]
pub fn logger() -> Arc<dyn Logger> {
    DEFAULT.get()
}
