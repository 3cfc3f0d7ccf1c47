//! Bridge from tracing to proven-logger

use crate::{Error, Field, Fields, Level, Logger, Record, Result};
use std::sync::Arc;
use tracing::{Event, Subscriber, field::Visit};
use tracing_subscriber::{Layer, layer::Context, registry::LookupSpan};

/// A tracing layer that forwards to proven-logger
///
/// Event fields become typed [`Field`]s on the forwarded record.
pub struct TracingBridge<S> {
    logger: Arc<dyn Logger>,
    _phantom: std::marker::PhantomData<S>,
}

impl<S> TracingBridge<S> {
    /// Create a new tracing bridge
    pub fn new(logger: Arc<dyn Logger>) -> Self {
        Self {
            logger,
            _phantom: std::marker::PhantomData,
        }
    }
}

impl<S> Layer<S> for TracingBridge<S>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &Event<'_>, ctx: Context<'_, S>) {
        let level = map_level(*event.metadata().level());

        // Skip if not enabled
        if !self.logger.is_enabled(level) {
            return;
        }

        let mut visitor = FieldVisitor::default();
        event.record(&mut visitor);

        // Build span context if available
        let mut span_context = Vec::new();
        if let Some(scope) = ctx.event_scope(event) {
            for span in scope.from_root() {
                span_context.push(span.name());
            }
        }

        let message = if span_context.is_empty() {
            visitor.message
        } else {
            format!("{}: {}", span_context.join("::"), visitor.message)
        };

        let fields = Fields::from(visitor.fields);
        let mut record = Record::new(level, message)
            .with_target(event.metadata().target())
            .with_fields(&fields);

        if let (Some(file), Some(line)) = (event.metadata().file(), event.metadata().line()) {
            record = record.with_location(file, line);
        }

        self.logger.log(record);
    }
}

fn map_level(level: tracing::Level) -> Level {
    match level {
        tracing::Level::ERROR => Level::Error,
        tracing::Level::WARN => Level::Warn,
        tracing::Level::INFO => Level::Info,
        tracing::Level::DEBUG => Level::Debug,
        tracing::Level::TRACE => Level::Trace,
    }
}

/// Pulls the message out and keeps every other field typed
#[derive(Default)]
struct FieldVisitor {
    message: String,
    fields: Vec<Field>,
}

impl Visit for FieldVisitor {
    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        } else {
            self.fields.push(Field::string(field.name(), value.to_string()));
        }
    }

    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{value:?}");
        } else {
            // The value is borrowed, so keep its rendering rather than the value
            self.fields.push(Field::any(field.name(), DebugText(format!("{value:?}"))));
        }
    }

    fn record_i64(&mut self, field: &tracing::field::Field, value: i64) {
        self.fields.push(Field::i64(field.name(), value));
    }

    fn record_u64(&mut self, field: &tracing::field::Field, value: u64) {
        self.fields.push(Field::u64(field.name(), value));
    }

    fn record_f64(&mut self, field: &tracing::field::Field, value: f64) {
        self.fields.push(Field::f64(field.name(), value));
    }

    fn record_bool(&mut self, field: &tracing::field::Field, value: bool) {
        self.fields.push(Field::bool(field.name(), value));
    }

    fn record_error(
        &mut self,
        field: &tracing::field::Field,
        value: &(dyn std::error::Error + 'static),
    ) {
        self.fields
            .push(Field::error(field.name(), ErrorText(value.to_string())));
    }
}

/// Pre-rendered debug output that prints verbatim
struct DebugText(String);

impl std::fmt::Debug for DebugText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Owned snapshot of a borrowed error
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
struct ErrorText(String);

/// Initialize tracing to forward to proven-logger
///
/// This sets up a global subscriber that captures all tracing events and spans.
///
/// # Example
/// ```no_run
/// use proven_logger::{StdoutLogger, compat::tracing_bridge::init_tracing_bridge};
/// use std::sync::Arc;
///
/// let logger = Arc::new(StdoutLogger::new());
/// init_tracing_bridge(logger).expect("Failed to set tracing bridge");
/// ```
pub fn init_tracing_bridge(logger: Arc<dyn Logger>) -> Result<()> {
    use tracing_subscriber::prelude::*;

    let layer = TracingBridge::new(logger);

    tracing_subscriber::registry()
        .with(layer)
        .try_init()
        .map_err(|e| Error::TracingInit(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FieldType;
    use crate::test_support::CaptureLogger;
    use tracing_subscriber::prelude::*;

    #[test]
    fn test_event_fields_are_typed() {
        let capture = CaptureLogger::new();
        let subscriber = tracing_subscriber::registry().with(TracingBridge::new(capture.handle()));

        tracing::subscriber::with_default(subscriber, || {
            tracing::info!(count = 42, ok = true, user = "alice", "Message with field");
        });

        let records = capture.records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].message, "Message with field");
        assert_eq!(records[0].fields.get("count").map(Field::field_type), Some(FieldType::I64));
        assert_eq!(records[0].fields.get("ok"), Some(&Field::bool("ok", true)));
        assert!(capture.has_string_field("user", "alice"));
    }

    #[test]
    fn test_span_names_prefix_message() {
        let capture = CaptureLogger::new();
        let subscriber = tracing_subscriber::registry().with(TracingBridge::new(capture.handle()));

        tracing::subscriber::with_default(subscriber, || {
            let span = tracing::info_span!("my_span");
            let _enter = span.enter();
            tracing::warn!("Inside span");
        });

        assert!(capture.contains("my_span: Inside span"));
    }
}
