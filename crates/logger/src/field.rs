//! Typed structured fields

use serde::ser::{Serialize, SerializeStruct, Serializer};
use serde_json::{Number, Value};
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// Shared error payload carried by error fields
pub type SharedError = Arc<dyn std::error::Error + Send + Sync + 'static>;

/// Shared payload for values that only know how to debug-print themselves
pub type SharedValue = Arc<dyn fmt::Debug + Send + Sync + 'static>;

/// Discriminator for [`FieldValue`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldType {
    /// UTF-8 string
    String,
    /// Boolean
    Bool,
    /// Signed 64-bit integer
    I64,
    /// Unsigned 64-bit integer
    U64,
    /// 64-bit float
    F64,
    /// Elapsed time
    Duration,
    /// Error, possibly absent
    Error,
    /// Arbitrary debug-printable value
    Any,
    /// Placeholder that carries nothing
    Skip,
}

/// The value half of a [`Field`]
///
/// Exactly one payload is populated, selected by the variant.
#[derive(Clone)]
pub enum FieldValue {
    /// UTF-8 string
    String(Cow<'static, str>),
    /// Boolean
    Bool(bool),
    /// Signed 64-bit integer
    I64(i64),
    /// Unsigned 64-bit integer
    U64(u64),
    /// 64-bit float
    F64(f64),
    /// Elapsed time
    Duration(Duration),
    /// Error; `None` when the field was built from an absent error
    Error(Option<SharedError>),
    /// Arbitrary debug-printable value
    Any(SharedValue),
    /// Nothing
    Skip,
}

impl FieldValue {
    /// The discriminator of this value
    pub const fn field_type(&self) -> FieldType {
        match self {
            Self::String(_) => FieldType::String,
            Self::Bool(_) => FieldType::Bool,
            Self::I64(_) => FieldType::I64,
            Self::U64(_) => FieldType::U64,
            Self::F64(_) => FieldType::F64,
            Self::Duration(_) => FieldType::Duration,
            Self::Error(_) => FieldType::Error,
            Self::Any(_) => FieldType::Any,
            Self::Skip => FieldType::Skip,
        }
    }

    /// Render the value as JSON for machine-readable sinks
    pub fn to_json(&self) -> Value {
        match self {
            Self::String(s) => Value::String(s.to_string()),
            Self::Bool(b) => Value::Bool(*b),
            Self::I64(i) => Value::Number((*i).into()),
            Self::U64(u) => Value::Number((*u).into()),
            Self::F64(f) => Number::from_f64(*f).map_or(Value::Null, Value::Number),
            Self::Duration(d) => {
                Value::Number(u64::try_from(d.as_nanos()).unwrap_or(u64::MAX).into())
            }
            Self::Error(Some(e)) => Value::String(e.to_string()),
            Self::Any(v) => Value::String(format!("{v:?}")),
            Self::Error(None) | Self::Skip => Value::Null,
        }
    }
}

impl PartialEq for FieldValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::I64(a), Self::I64(b)) => a == b,
            (Self::U64(a), Self::U64(b)) => a == b,
            (Self::F64(a), Self::F64(b)) => a.to_bits() == b.to_bits(),
            (Self::Duration(a), Self::Duration(b)) => a == b,
            (Self::Error(None), Self::Error(None)) => true,
            // Shared payloads compare by identity
            (Self::Error(Some(a)), Self::Error(Some(b))) => {
                std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b))
            }
            (Self::Any(a), Self::Any(b)) => std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b)),
            (Self::Skip, Self::Skip) => true,
            _ => false,
        }
    }
}

impl fmt::Debug for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => f.debug_tuple("String").field(s).finish(),
            Self::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            Self::I64(i) => f.debug_tuple("I64").field(i).finish(),
            Self::U64(u) => f.debug_tuple("U64").field(u).finish(),
            Self::F64(v) => f.debug_tuple("F64").field(v).finish(),
            Self::Duration(d) => f.debug_tuple("Duration").field(d).finish(),
            Self::Error(Some(e)) => f.debug_tuple("Error").field(&e.to_string()).finish(),
            Self::Error(None) => f.write_str("Error(None)"),
            Self::Any(v) => f.debug_tuple("Any").field(v).finish(),
            Self::Skip => f.write_str("Skip"),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Quote strings that would otherwise break key=value parsing
            Self::String(s) if s.is_empty() || s.contains(char::is_whitespace) => {
                write!(f, "{s:?}")
            }
            Self::String(s) => f.write_str(s),
            Self::Bool(b) => write!(f, "{b}"),
            Self::I64(i) => write!(f, "{i}"),
            Self::U64(u) => write!(f, "{u}"),
            Self::F64(v) => write!(f, "{v}"),
            Self::Duration(d) => write!(f, "{d:?}"),
            Self::Error(Some(e)) => write!(f, "{:?}", e.to_string()),
            Self::Error(None) => f.write_str("<nil>"),
            Self::Any(v) => write!(f, "{v:?}"),
            Self::Skip => Ok(()),
        }
    }
}

/// A single structured log attribute
///
/// The default field has an empty key and a [`FieldValue::Skip`] value; it is
/// what lookups hand back when nothing matched.
#[derive(Clone, Debug, PartialEq)]
pub struct Field {
    key: Cow<'static, str>,
    value: FieldValue,
}

impl Default for Field {
    fn default() -> Self {
        Self::skip()
    }
}

impl Field {
    /// Create a field from a key and an already-built value
    pub fn new(key: impl Into<Cow<'static, str>>, value: FieldValue) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }

    /// String field
    pub fn string(key: impl Into<Cow<'static, str>>, value: impl Into<Cow<'static, str>>) -> Self {
        Self::new(key, FieldValue::String(value.into()))
    }

    /// Boolean field
    pub fn bool(key: impl Into<Cow<'static, str>>, value: bool) -> Self {
        Self::new(key, FieldValue::Bool(value))
    }

    /// Signed integer field
    pub fn i64(key: impl Into<Cow<'static, str>>, value: impl Into<i64>) -> Self {
        Self::new(key, FieldValue::I64(value.into()))
    }

    /// Unsigned integer field
    pub fn u64(key: impl Into<Cow<'static, str>>, value: impl Into<u64>) -> Self {
        Self::new(key, FieldValue::U64(value.into()))
    }

    /// Float field
    pub fn f64(key: impl Into<Cow<'static, str>>, value: impl Into<f64>) -> Self {
        Self::new(key, FieldValue::F64(value.into()))
    }

    /// Duration field
    pub fn duration(key: impl Into<Cow<'static, str>>, value: Duration) -> Self {
        Self::new(key, FieldValue::Duration(value))
    }

    /// Error field
    pub fn error<E>(key: impl Into<Cow<'static, str>>, error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::new(key, FieldValue::Error(Some(Arc::new(error))))
    }

    /// Error field from an error that is already shared
    pub fn shared_error(key: impl Into<Cow<'static, str>>, error: SharedError) -> Self {
        Self::new(key, FieldValue::Error(Some(error)))
    }

    /// Error field that may not hold an error at all
    pub fn maybe_error<E>(key: impl Into<Cow<'static, str>>, error: Option<E>) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        let error = error.map(|e| Arc::new(e) as SharedError);
        Self::new(key, FieldValue::Error(error))
    }

    /// Field holding any debug-printable value
    pub fn any<T>(key: impl Into<Cow<'static, str>>, value: T) -> Self
    where
        T: fmt::Debug + Send + Sync + 'static,
    {
        Self::new(key, FieldValue::Any(Arc::new(value)))
    }

    /// Empty field: no key, no value
    pub const fn skip() -> Self {
        Self {
            key: Cow::Borrowed(""),
            value: FieldValue::Skip,
        }
    }

    /// The field key
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The field value
    pub const fn value(&self) -> &FieldValue {
        &self.value
    }

    /// The value discriminator
    pub const fn field_type(&self) -> FieldType {
        self.value.field_type()
    }

    /// The string payload, if this is a string field
    pub fn as_str(&self) -> Option<&str> {
        match &self.value {
            FieldValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// True for the default field
    pub fn is_empty(&self) -> bool {
        self.key.is_empty() && matches!(self.value, FieldValue::Skip)
    }

    /// Split into key and value
    pub fn into_parts(self) -> (Cow<'static, str>, FieldValue) {
        (self.key, self.value)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}

impl Serialize for Field {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Field", 2)?;
        state.serialize_field("key", &self.key)?;
        state.serialize_field("value", &self.value.to_json())?;
        state.end()
    }
}
