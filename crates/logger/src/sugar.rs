//! Loosely typed key/value logging
//!
//! The sugared convention accepts `(key, value)` pairs instead of [`Field`]s.
//! It supports a reduced set of value shapes: strings, booleans, integers,
//! errors, and anything debug-printable.

use crate::{Field, FieldValue, Fields, Level, Logger, LoggerExt, Record, SharedError, SharedValue};
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

/// A value accepted by the sugared convention
#[derive(Clone)]
pub enum SugaredValue {
    /// String
    String(Cow<'static, str>),
    /// Boolean
    Bool(bool),
    /// Signed integer
    Int(i64),
    /// Unsigned integer
    Uint(u64),
    /// Error
    Error(SharedError),
    /// Anything else
    Any(SharedValue),
}

impl SugaredValue {
    /// Wrap any debug-printable value
    pub fn any<T>(value: T) -> Self
    where
        T: fmt::Debug + Send + Sync + 'static,
    {
        Self::Any(Arc::new(value))
    }

    /// Turn back into a typed field
    pub fn into_field(self, key: impl Into<Cow<'static, str>>) -> Field {
        let value = match self {
            Self::String(s) => FieldValue::String(s),
            Self::Bool(b) => FieldValue::Bool(b),
            Self::Int(i) => FieldValue::I64(i),
            Self::Uint(u) => FieldValue::U64(u),
            Self::Error(e) => FieldValue::Error(Some(e)),
            Self::Any(v) => FieldValue::Any(v),
        };
        Field::new(key, value)
    }
}

impl PartialEq for SugaredValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Uint(a), Self::Uint(b)) => a == b,
            (Self::Error(a), Self::Error(b)) => std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b)),
            (Self::Any(a), Self::Any(b)) => std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b)),
            _ => false,
        }
    }
}

impl fmt::Debug for SugaredValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => fmt::Debug::fmt(s, f),
            Self::Bool(b) => fmt::Debug::fmt(b, f),
            Self::Int(i) => fmt::Debug::fmt(i, f),
            Self::Uint(u) => fmt::Debug::fmt(u, f),
            Self::Error(e) => write!(f, "Error({:?})", e.to_string()),
            Self::Any(v) => fmt::Debug::fmt(v, f),
        }
    }
}

impl From<&'static str> for SugaredValue {
    fn from(value: &'static str) -> Self {
        Self::String(Cow::Borrowed(value))
    }
}

impl From<String> for SugaredValue {
    fn from(value: String) -> Self {
        Self::String(Cow::Owned(value))
    }
}

impl From<Cow<'static, str>> for SugaredValue {
    fn from(value: Cow<'static, str>) -> Self {
        Self::String(value)
    }
}

impl From<bool> for SugaredValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

macro_rules! impl_from_int {
    ($variant:ident, $target:ty, $($ty:ty),+) => {
        $(
            impl From<$ty> for SugaredValue {
                fn from(value: $ty) -> Self {
                    Self::$variant(<$target>::from(value))
                }
            }
        )+
    };
}

impl_from_int!(Int, i64, i8, i16, i32, i64);
impl_from_int!(Uint, u64, u8, u16, u32, u64);

impl From<SharedError> for SugaredValue {
    fn from(value: SharedError) -> Self {
        Self::Error(value)
    }
}

/// Build a typed field straight from a sugared pair
impl<K, V> From<(K, V)> for Field
where
    K: Into<Cow<'static, str>>,
    V: Into<SugaredValue>,
{
    fn from((key, value): (K, V)) -> Self {
        value.into().into_field(key)
    }
}

/// A logger that takes key/value pairs
///
/// Wraps a typed [`Logger`]; pairs are converted to fields on the way in.
#[derive(Clone)]
pub struct SugaredLogger {
    inner: Arc<dyn Logger>,
}

impl SugaredLogger {
    /// Wrap a typed logger
    pub fn new(inner: Arc<dyn Logger>) -> Self {
        Self { inner }
    }

    /// Child logger with the given pairs bound
    pub fn with<K, V, I>(&self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<Cow<'static, str>>,
        V: Into<SugaredValue>,
    {
        let fields: Fields = pairs
            .into_iter()
            .map(Field::from)
            .collect();
        if fields.is_empty() {
            return self.clone();
        }
        Self::new(self.inner.with_fields(fields))
    }

    /// The typed logger underneath
    pub fn desugar(&self) -> Arc<dyn Logger> {
        Arc::clone(&self.inner)
    }

    /// Log an error
    pub fn error(&self, msg: impl Into<Cow<'static, str>>) {
        self.inner.error(msg);
    }

    /// Log a warning
    pub fn warn(&self, msg: impl Into<Cow<'static, str>>) {
        self.inner.warn(msg);
    }

    /// Log info
    pub fn info(&self, msg: impl Into<Cow<'static, str>>) {
        self.inner.info(msg);
    }

    /// Log debug
    pub fn debug(&self, msg: impl Into<Cow<'static, str>>) {
        self.inner.debug(msg);
    }

    /// Log trace
    pub fn trace(&self, msg: impl Into<Cow<'static, str>>) {
        self.inner.trace(msg);
    }

    /// Log at `level` with pairs that apply to this line only
    pub fn log_pairs<K, V, I>(&self, level: Level, msg: impl Into<Cow<'static, str>>, pairs: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<Cow<'static, str>>,
        V: Into<SugaredValue>,
    {
        if !(level.is_enabled_static() && self.inner.is_enabled(level)) {
            return;
        }
        let fields: Fields = pairs
            .into_iter()
            .map(Field::from)
            .collect();
        self.inner.log(Record::new(level, msg).with_fields(&fields));
    }
}

impl fmt::Debug for SugaredLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SugaredLogger")
            .field("fields", &self.inner.fields())
            .finish()
    }
}
