//! Simple stdout logger for development

use crate::{Fields, Level, Logger, Record};
use std::io::Write;
use std::sync::{Arc, Mutex};

#[cfg(feature = "color")]
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Simple logger that writes to stdout
#[derive(Debug)]
pub struct StdoutLogger {
    fields: Fields,
    /// Minimum log level
    min_level: Level,
    /// Lock for stdout (to prevent interleaving)
    #[cfg(not(feature = "color"))]
    stdout: Arc<Mutex<std::io::Stdout>>,
    #[cfg(feature = "color")]
    stdout: Arc<Mutex<StandardStream>>,
}

impl StdoutLogger {
    /// Create a new stdout logger
    pub fn new() -> Self {
        Self {
            fields: Fields::new(),
            min_level: Level::Trace,
            #[cfg(not(feature = "color"))]
            stdout: Arc::new(Mutex::new(std::io::stdout())),
            #[cfg(feature = "color")]
            stdout: Arc::new(Mutex::new(StandardStream::stdout(ColorChoice::Auto))),
        }
    }

    /// Create with a specific minimum level
    pub fn with_level(mut self, level: Level) -> Self {
        self.min_level = level;
        self
    }

    /// Create with fields bound up front
    pub fn with_base_fields(mut self, fields: impl Into<Fields>) -> Self {
        self.fields = fields.into();
        self
    }
}

impl Default for StdoutLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger for StdoutLogger {
    fn log(&self, record: Record) {
        // Write with lock
        if let Ok(mut stdout) = self.stdout.lock() {
            #[cfg(feature = "color")]
            {
                // Set colors based on level
                let level_color = match record.level {
                    Level::Error => Color::Red,
                    Level::Warn => Color::Yellow,
                    Level::Info => Color::Green,
                    Level::Debug => Color::Blue,
                    Level::Trace => Color::Magenta,
                };

                // Level with color
                let _ = stdout.set_color(ColorSpec::new().set_fg(Some(level_color)).set_bold(true));
                let _ = write!(stdout, "{}", record.level);
                let _ = stdout.reset();

                // Target in dimmed white
                let _ = stdout.set_color(ColorSpec::new().set_dimmed(true));
                let _ = write!(stdout, " [{}]", record.target);

                // Location in dimmed white
                if let (Some(file), Some(line)) = (record.file, record.line) {
                    let _ = write!(stdout, " {file}:{line}");
                }
                let _ = stdout.reset();

                // Message in normal color
                let _ = write!(stdout, " {}", record.message);

                // Fields in cyan
                let own = record.fields.into_iter().flat_map(|fields| fields.iter());
                let _ = stdout.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)));
                for field in self.fields.iter().chain(own) {
                    let _ = write!(stdout, " {field}");
                }
                let _ = stdout.reset();
                let _ = writeln!(stdout);
            }

            #[cfg(not(feature = "color"))]
            {
                let mut line = record.render(&self.fields);
                line.push('\n');
                let _ = stdout.write_all(line.as_bytes());
            }

            let _ = stdout.flush();
        }
    }

    fn flush(&self) {
        if let Ok(mut stdout) = self.stdout.lock() {
            let _ = stdout.flush();
        }
    }

    #[inline(always)]
    fn is_enabled(&self, level: Level) -> bool {
        level >= self.min_level && level.is_enabled_static()
    }

    fn with_fields(&self, fields: Fields) -> Arc<dyn Logger> {
        Arc::new(StdoutLogger {
            fields: self.fields.extend(fields),
            min_level: self.min_level,
            stdout: self.stdout.clone(),
        })
    }

    fn fields(&self) -> Fields {
        self.fields.clone()
    }
}
