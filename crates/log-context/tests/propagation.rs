//! End-to-end: fields set on a context show up on log lines

use proven_log_context::*;
use proven_logger::test_support::CaptureLogger;
use proven_logger::{Field, Fields, LoggerExt, SugaredValue};
use std::borrow::Cow;

const TRACE_ID_KEY: &str = "trace_id";
const SPAN_ID_KEY: &str = "span_id";
const TEST_TRACE_ID: &str = "test-trace-id-3333";

#[test]
fn test_set_enriches_logger() {
    let capture = CaptureLogger::new();
    let base = capture.handle();
    let ctx = Context::background();

    let cases = [
        ("empty", set(&ctx, None::<Fields>), None),
        (
            "trace id",
            set(&ctx, [Field::string(TRACE_ID_KEY, TEST_TRACE_ID)]),
            Some(TEST_TRACE_ID),
        ),
        (
            "trace id replaced",
            set(&ctx, [Field::string(TRACE_ID_KEY, "test-trace-id-new")]),
            Some("test-trace-id-new"),
        ),
    ];

    for (name, ctx, expected) in cases {
        capture.clear();
        enrich(&ctx, &base).info("just a test record");

        match expected {
            Some(value) => assert!(capture.has_string_field(TRACE_ID_KEY, value), "{name}"),
            None => assert!(!capture.has_field_key(TRACE_ID_KEY), "{name}"),
        }
    }
}

#[test]
fn test_append_counts() {
    let capture = CaptureLogger::new();
    let base = capture.handle();
    let ctx = set(
        &Context::background(),
        [Field::string(TRACE_ID_KEY, TEST_TRACE_ID)],
    );

    let cases = [
        ("nothing appended", append(&ctx, None::<Fields>), 1),
        (
            "span id appended",
            append(&ctx, [Field::string(SPAN_ID_KEY, TEST_TRACE_ID)]),
            2,
        ),
    ];

    for (name, ctx, expected) in cases {
        enrich(&ctx, &base).info("just a test record");
        assert_eq!(get(&ctx).len(), expected, "{name}");
    }

    // The base context never saw the appended span id
    assert!(get_field(&ctx, SPAN_ID_KEY).is_empty());
}

#[test]
fn test_get_on_empty_context() {
    let capture = CaptureLogger::new();

    enrich(&Context::todo(), &capture.handle()).info("just a test record");

    assert!(get(&Context::todo()).is_empty());
    assert!(capture.contains("just a test record"));
    assert!(!capture.has_field_key(TRACE_ID_KEY));
}

#[test]
fn test_get_sugared_logs_pairs() {
    let capture = CaptureLogger::new();
    let ctx = set(
        &Context::background(),
        [Field::string(TRACE_ID_KEY, TEST_TRACE_ID)],
    );

    sugared(&ctx, &capture.handle()).error("just a test record");
    sugared(&Context::todo(), &capture.handle()).error("without fields");

    assert!(capture.has_field_key(TRACE_ID_KEY));
    assert!(capture.has_string_field(TRACE_ID_KEY, TEST_TRACE_ID));
    assert_eq!(
        get_sugared(&ctx),
        [(Cow::Borrowed(TRACE_ID_KEY), SugaredValue::from(TEST_TRACE_ID))]
    );
}

#[test]
fn test_get_field() {
    let ctx = set(
        &Context::background(),
        [Field::string(TRACE_ID_KEY, TEST_TRACE_ID)],
    );

    assert_eq!(get_field(&ctx, TRACE_ID_KEY).as_str(), Some(TEST_TRACE_ID));
    assert_eq!(get_field(&Context::todo(), TRACE_ID_KEY).as_str(), None);
}

#[test]
fn test_bound_logger_variant() {
    let capture = CaptureLogger::new();
    let ctx = set_logger(
        &Context::background(),
        &capture.handle(),
        [Field::string(TRACE_ID_KEY, TEST_TRACE_ID)],
    );

    // Hand the context down a call chain; the logger comes back out intact
    fn handler(ctx: &Context) {
        logger(ctx).info("handled");
    }
    handler(&ctx);

    assert!(capture.contains(&format!("handled {TRACE_ID_KEY}={TEST_TRACE_ID}")));
}

#[tokio::test]
async fn test_fields_follow_the_task() {
    let capture = CaptureLogger::new();
    let base = capture.handle();
    let ctx = set(
        &Context::background(),
        [Field::string(TRACE_ID_KEY, TEST_TRACE_ID)],
    );

    async fn deep_in_the_stack(base: proven_logger::SugaredLogger) {
        base.with(get_sugared(&Context::current())).info("deep");
    }

    deep_in_the_stack(proven_logger::SugaredLogger::new(base))
        .in_context(ctx)
        .await;

    assert!(capture.has_string_field(TRACE_ID_KEY, TEST_TRACE_ID));
}
