//! Compatibility bridges for other logging crates

#[cfg(feature = "tracing-compat")]
pub mod tracing_bridge;
