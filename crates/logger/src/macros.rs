//! Logging macros backed by the process-wide default logger

/// Log at an explicit level through the default logger
///
/// ```
/// use proven_logger::{Level, log};
///
/// log!(Level::Info, "listening on {}", 8080);
/// ```
#[macro_export]
macro_rules! log {
    ($level:expr, $($arg:tt)+) => {{
        let level: $crate::Level = $level;
        // Compile-time check first
        if level.is_enabled_static() {
            let logger = $crate::logger();
            if $crate::Logger::is_enabled(&*logger, level) {
                $crate::Logger::log(
                    &*logger,
                    $crate::Record::new(level, ::std::format!($($arg)+))
                        .with_target(::std::module_path!())
                        .with_location(::std::file!(), ::std::line!()),
                );
            }
        }
    }};
}

/// Log an error through the default logger
#[macro_export]
macro_rules! error {
    ($($arg:tt)+) => {
        $crate::log!($crate::Level::Error, $($arg)+)
    };
}

/// Log a warning through the default logger
#[macro_export]
macro_rules! warn {
    ($($arg:tt)+) => {
        $crate::log!($crate::Level::Warn, $($arg)+)
    };
}

/// Log info through the default logger
#[macro_export]
macro_rules! info {
    ($($arg:tt)+) => {
        $crate::log!($crate::Level::Info, $($arg)+)
    };
}

/// Log debug through the default logger
#[macro_export]
macro_rules! debug {
    ($($arg:tt)+) => {
        $crate::log!($crate::Level::Debug, $($arg)+)
    };
}

/// Log trace through the default logger
#[macro_export]
macro_rules! trace {
    ($($arg:tt)+) => {
        $crate::log!($crate::Level::Trace, $($arg)+)
    };
}
