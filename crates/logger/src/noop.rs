use crate::{Fields, Level, Logger, Record};
use std::sync::Arc;

/// Logger that discards everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpLogger;

impl Logger for NoOpLogger {
    #[inline(always)]
    fn log(&self, _record: Record) {}

    #[inline(always)]
    fn flush(&self) {}

    #[inline(always)]
    fn is_enabled(&self, _level: Level) -> bool {
        false
    }

    fn with_fields(&self, _fields: Fields) -> Arc<dyn Logger> {
        Arc::new(Self)
    }
}
