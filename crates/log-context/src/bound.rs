//! Loggers bound into a context
//!
//! Instead of raw fields, a context can carry a logger that already has its
//! fields attached. Retrieval hands that logger back, or a fallback when none
//! was stored.

use crate::{Context, ContextKey, get, get_sugared};
use proven_logger::{Fields, Logger, LoggerSlot, SugaredLogger};
use std::sync::Arc;

/// Reserved key for a bound logger
pub(crate) const LOGGER_KEY: ContextKey = ContextKey::new("proven-log-context.logger");

/// Bind `fields` into `base` and store the resulting logger
pub fn set_logger(ctx: &Context, base: &Arc<dyn Logger>, fields: impl Into<Fields>) -> Context {
    let fields = fields.into();
    let bound = if fields.is_empty() {
        Arc::clone(base)
    } else {
        base.with_fields(fields)
    };
    with_logger(ctx, bound)
}

/// Store an already-bound logger
pub fn with_logger(ctx: &Context, logger: Arc<dyn Logger>) -> Context {
    ctx.with_value(LOGGER_KEY, logger)
}

/// The logger stored in `ctx`, if any
pub fn stored_logger(ctx: &Context) -> Option<Arc<dyn Logger>> {
    let value = ctx.value(LOGGER_KEY)?;
    let logger = value.downcast_ref::<Arc<dyn Logger>>().cloned();
    if logger.is_none() {
        tracing::trace!(key = %LOGGER_KEY, "ignoring context value of unexpected type");
    }
    logger
}

/// The logger stored in `ctx`, or the process-wide default
pub fn logger(ctx: &Context) -> Arc<dyn Logger> {
    stored_logger(ctx).unwrap_or_else(proven_logger::logger)
}

/// The logger stored in `ctx`, or whatever `slot` currently holds
pub fn logger_from(ctx: &Context, slot: &LoggerSlot) -> Arc<dyn Logger> {
    stored_logger(ctx).unwrap_or_else(|| slot.get())
}

/// The logger stored in `ctx`, or `fallback`
pub fn logger_or(ctx: &Context, fallback: &Arc<dyn Logger>) -> Arc<dyn Logger> {
    stored_logger(ctx).unwrap_or_else(|| Arc::clone(fallback))
}

/// `base` with the fields visible from `ctx` bound into it
pub fn enrich(ctx: &Context, base: &Arc<dyn Logger>) -> Arc<dyn Logger> {
    let fields = get(ctx);
    if fields.is_empty() {
        return Arc::clone(base);
    }
    base.with_fields(fields)
}

/// Sugared `base` with the fields visible from `ctx` bound as pairs
pub fn sugared(ctx: &Context, base: &Arc<dyn Logger>) -> SugaredLogger {
    SugaredLogger::new(Arc::clone(base)).with(get_sugared(ctx))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::set;
    use proven_logger::test_support::CaptureLogger;
    use proven_logger::{Field, Level, LoggerExt};

    #[test]
    fn test_set_logger_binds_fields() {
        let capture = CaptureLogger::new();
        let ctx = set_logger(
            &Context::background(),
            &capture.handle(),
            [Field::string("trace_id", "t-1")],
        );

        logger(&ctx).info("bound");

        assert!(capture.contains("bound trace_id=t-1"));
    }

    #[test]
    fn test_set_logger_without_fields_stores_base() {
        let base = CaptureLogger::new().handle();
        let ctx = set_logger(&Context::background(), &base, None::<Fields>);

        let stored = stored_logger(&ctx).unwrap();
        assert!(Arc::ptr_eq(&stored, &base));
    }

    #[test]
    fn test_set_logger_replaces() {
        let capture = CaptureLogger::new();
        let base = capture.handle();
        let ctx = set_logger(&Context::background(), &base, [Field::string("a", "1")]);
        let ctx = set_logger(&ctx, &base, [Field::string("b", "2")]);

        logger(&ctx).info("replaced");

        assert!(capture.contains("replaced b=2"));
        assert!(!capture.has_field_key("a"));
    }

    #[test]
    fn test_fallbacks() {
        let empty = Context::background();

        let fallback = CaptureLogger::new();
        logger_or(&empty, &fallback.handle()).warn("to fallback");
        assert!(fallback.contains("to fallback"));

        let slotted = CaptureLogger::new();
        let slot = LoggerSlot::new(slotted.handle());
        logger_from(&empty, &slot).warn("to slot");
        assert!(slotted.contains("to slot"));
    }

    #[test]
    fn test_stored_logger_wins_over_fallback() {
        let stored = CaptureLogger::new();
        let fallback = CaptureLogger::new();
        let ctx = with_logger(&Context::background(), stored.handle());

        logger_or(&ctx, &fallback.handle()).info("kept local");

        assert!(stored.contains("kept local"));
        assert!(!fallback.contains("kept local"));
    }

    #[test]
    fn test_default_logger_when_absent() {
        // Nothing installed in this test binary, so the default is a no-op
        let logger = logger(&Context::background());
        assert!(!logger.is_enabled(Level::Error));
    }

    #[test]
    fn test_foreign_value_at_logger_key() {
        let ctx = Context::background()
            .with_value(ContextKey::new("proven-log-context.logger"), 17u8);

        assert!(stored_logger(&ctx).is_none());
    }

    #[test]
    fn test_enrich_and_sugared() {
        let capture = CaptureLogger::new();
        let base = capture.handle();
        let ctx = set(
            &Context::background(),
            [Field::string("trace_id", "t-1"), Field::f64("ratio", 0.5)],
        );

        enrich(&ctx, &base).info("typed");
        sugared(&ctx, &base).info("sugared");

        assert!(capture.contains("typed trace_id=t-1 ratio=0.5"));
        // Floats have no sugared form
        assert!(capture.contains("sugared trace_id=t-1\n"));
    }

    #[test]
    fn test_enrich_empty_context_returns_base() {
        let base = CaptureLogger::new().handle();
        assert!(Arc::ptr_eq(&enrich(&Context::background(), &base), &base));
    }
}
