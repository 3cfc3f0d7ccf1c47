//! Test support utilities
//!
//! This module provides utilities for capturing logs during tests.
//! It's only available when the `test-support` feature is enabled.

use crate::{Fields, Level, Logger, OwnedRecord, Record};
use std::fmt::Write as FmtWrite;
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct Captured {
    text: String,
    records: Vec<OwnedRecord>,
}

/// A logger that captures all logs in memory for testing
///
/// Clones and children created with [`Logger::with_fields`] share one buffer.
#[derive(Clone)]
pub struct CaptureLogger {
    captured: Arc<Mutex<Captured>>,
    min_level: Level,
    fields: Fields,
}

impl CaptureLogger {
    /// Create a new capture logger
    pub fn new() -> Self {
        Self {
            captured: Arc::new(Mutex::new(Captured::default())),
            min_level: Level::Trace,
            fields: Fields::new(),
        }
    }

    /// Create with a specific level
    pub fn with_level(mut self, level: Level) -> Self {
        self.min_level = level;
        self
    }

    /// Get all captured logs
    pub fn logs(&self) -> String {
        self.captured.lock().unwrap().text.clone()
    }

    /// Every captured record, bound fields included
    pub fn records(&self) -> Vec<OwnedRecord> {
        self.captured.lock().unwrap().records.clone()
    }

    /// Clear captured logs
    pub fn clear(&self) {
        let mut captured = self.captured.lock().unwrap();
        captured.text.clear();
        captured.records.clear();
    }

    /// Check if logs contain a specific string
    pub fn contains(&self, text: &str) -> bool {
        self.captured.lock().unwrap().text.contains(text)
    }

    /// Check if any record carried a field with this key
    pub fn has_field_key(&self, key: &str) -> bool {
        self.captured
            .lock()
            .unwrap()
            .records
            .iter()
            .any(|record| record.fields.get(key).is_some())
    }

    /// Check if any record carried a string field with this key and value
    pub fn has_string_field(&self, key: &str, value: &str) -> bool {
        self.captured
            .lock()
            .unwrap()
            .records
            .iter()
            .flat_map(|record| record.fields.iter())
            .any(|field| field.key() == key && field.as_str() == Some(value))
    }

    /// Shared handle for injecting into code under test
    pub fn handle(&self) -> Arc<dyn Logger> {
        Arc::new(self.clone())
    }
}

impl Default for CaptureLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger for CaptureLogger {
    fn log(&self, record: Record) {
        if let Ok(mut captured) = self.captured.lock() {
            let line = record.render(&self.fields);
            let _ = writeln!(captured.text, "{line}");
            captured.records.push(record.to_owned(&self.fields));
        }
    }

    fn flush(&self) {
        // No-op for in-memory logger
    }

    #[inline(always)]
    fn is_enabled(&self, level: Level) -> bool {
        level >= self.min_level && level.is_enabled_static()
    }

    fn with_fields(&self, fields: Fields) -> Arc<dyn Logger> {
        Arc::new(CaptureLogger {
            captured: self.captured.clone(),
            min_level: self.min_level,
            fields: self.fields.extend(fields),
        })
    }

    fn fields(&self) -> Fields {
        self.fields.clone()
    }
}

/// Test guard that captures logs and prints them on test failure
pub struct TestLogGuard {
    logger: CaptureLogger,
    test_name: String,
    printed: bool,
}

impl TestLogGuard {
    /// Create a new test log guard
    ///
    /// Nothing global is touched; inject [`TestLogGuard::handle`] where the
    /// code under test expects a logger.
    pub fn new(test_name: impl Into<String>) -> Self {
        Self {
            logger: CaptureLogger::new(),
            test_name: test_name.into(),
            printed: false,
        }
    }

    /// Mark that the test passed (logs won't be printed)
    pub fn passed(&mut self) {
        self.printed = true;
    }

    /// Get the capture logger
    pub fn logger(&self) -> &CaptureLogger {
        &self.logger
    }

    /// Shared handle to the capture logger
    pub fn handle(&self) -> Arc<dyn Logger> {
        self.logger.handle()
    }
}

impl Drop for TestLogGuard {
    fn drop(&mut self) {
        if !self.printed && std::thread::panicking() {
            let logs = self.logger.logs();
            if !logs.is_empty() {
                eprintln!("\n===== Logs from failed test '{}' =====", self.test_name);
                eprint!("{logs}");
                eprintln!("===== End of logs =====\n");
            }
        }
    }
}
