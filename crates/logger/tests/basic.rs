//! Basic tests for the logger

use proven_logger::*;
use std::sync::Arc;

#[test]
#[cfg(feature = "stdout")]
fn test_macros() {
    // Initialize with stdout logger
    let logger = StdoutLogger::new().with_level(Level::Debug);
    init(Arc::new(logger));

    // Test macros
    error!("This is an error");
    warn!("This is a warning");
    info!("This is info");
    debug!("This is debug");
    trace!("This is trace (won't show with Debug level)");

    // Test formatting
    let value = 42;
    info!("The answer is {value}");
}

#[test]
#[cfg(feature = "stdout")]
fn test_fields() {
    // Create a logger with fields bound
    let base_logger = StdoutLogger::new();
    let logger = base_logger.with_fields(Fields::from([
        Field::string("component", "engine"),
        Field::string("node_id", "abc123"),
    ]));

    // Use it directly
    logger.info("Starting engine");
    logger.debug("Engine initialized");

    let fields = logger.fields();
    let keys: Vec<_> = fields.iter().map(Field::key).collect();
    assert_eq!(keys, ["component", "node_id"]);
}

#[test]
#[cfg(feature = "stdout")]
fn test_child_fields_accumulate() {
    let base: Arc<dyn Logger> =
        Arc::new(StdoutLogger::new().with_base_fields(Field::string("app", "node")));
    let child = base.with_fields(Fields::from(Field::i64("shard", 3)));

    // Parent is unchanged
    assert_eq!(base.fields().len(), 1);
    assert_eq!(child.fields().get("app"), Some(&Field::string("app", "node")));
    assert_eq!(child.fields().get("shard"), Some(&Field::i64("shard", 3)));
}

#[test]
#[cfg(feature = "stdout")]
fn test_performance() {
    // Don't init to avoid conflicts with other tests
    let logger = Arc::new(StdoutLogger::new().with_level(Level::Info));

    // Test that debug level check works
    assert!(!logger.is_enabled(Level::Debug));
    assert!(logger.is_enabled(Level::Info));
    assert!(logger.is_enabled(Level::Error));
}

#[test]
fn test_noop_logger() {
    let logger = Arc::new(NoOpLogger);

    // NoOpLogger should never be enabled
    assert!(!logger.is_enabled(Level::Error));
    assert!(!logger.is_enabled(Level::Warn));
    assert!(!logger.is_enabled(Level::Info));
    assert!(!logger.is_enabled(Level::Debug));
    assert!(!logger.is_enabled(Level::Trace));

    // Test that it doesn't panic when used
    logger.error("This goes nowhere");
    logger.flush();

    // Fields bound to a no-op logger go nowhere either
    assert!(logger.with_fields(Fields::from(Field::bool("x", true))).fields().is_empty());
}

#[test]
fn test_sugared_default_logger() {
    // Whatever the default is, the sugared wrapper must accept pairs
    let sugar = logger().sugar().with([("request_id", "r-1")]);
    sugar.info("sugared call");
}

#[cfg(feature = "max-level-off")]
#[test]
fn test_compile_time_optimization() {
    let logger = Arc::new(NoOpLogger);

    // With max-level-off, these should compile to nothing
    logger.error("This should be optimized away");
    logger.warn("This too");
    logger.info("And this");
    logger.debug("Also this");
    logger.trace("Finally this");
}
