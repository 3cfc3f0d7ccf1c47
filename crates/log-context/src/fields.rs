//! Field sequences stored in a context

use crate::{Context, ContextKey};
use proven_logger::{Field, FieldValue, Fields, SugaredValue};
use std::borrow::Cow;

/// Reserved key for the field sequence
pub(crate) const FIELDS_KEY: ContextKey = ContextKey::new("proven-log-context.fields");

/// Derive a context whose visible fields are exactly `fields`
///
/// Whatever was visible before is hidden, not merged. `None` or an empty list
/// leaves the new context with no fields.
pub fn set(ctx: &Context, fields: impl Into<Fields>) -> Context {
    ctx.with_value(FIELDS_KEY, fields.into())
}

/// Derive a context with `fields` placed ahead of the fields already visible
pub fn append(ctx: &Context, fields: impl Into<Fields>) -> Context {
    let merged = stored(ctx).cloned().unwrap_or_default().prepend(fields);
    ctx.with_value(FIELDS_KEY, merged)
}

/// The fields visible from `ctx`, empty when none were set
pub fn get(ctx: &Context) -> Fields {
    stored(ctx).cloned().unwrap_or_default()
}

/// The first visible field with exactly this key, or the empty field
pub fn get_field(ctx: &Context, key: &str) -> Field {
    find_field(ctx, key).unwrap_or_default()
}

/// The first visible field with exactly this key
pub fn find_field(ctx: &Context, key: &str) -> Option<Field> {
    stored(ctx)?.get(key).cloned()
}

/// The visible fields as key/value pairs for a [`SugaredLogger`]
///
/// Only strings, booleans, integers, errors and generic values survive.
/// Error fields without an error, and floats, durations and empty fields,
/// are dropped.
///
/// [`SugaredLogger`]: proven_logger::SugaredLogger
pub fn get_sugared(ctx: &Context) -> Vec<(Cow<'static, str>, SugaredValue)> {
    let Some(fields) = stored(ctx) else {
        return Vec::new();
    };
    fields.iter().filter_map(to_sugared).collect()
}

fn to_sugared(field: &Field) -> Option<(Cow<'static, str>, SugaredValue)> {
    let (key, value) = field.clone().into_parts();
    let value = match value {
        FieldValue::String(s) => SugaredValue::String(s),
        FieldValue::Bool(b) => SugaredValue::Bool(b),
        FieldValue::I64(i) => SugaredValue::Int(i),
        FieldValue::U64(u) => SugaredValue::Uint(u),
        FieldValue::Error(Some(e)) => SugaredValue::Error(e),
        FieldValue::Any(v) => SugaredValue::Any(v),
        FieldValue::Error(None) | FieldValue::F64(_) | FieldValue::Duration(_) | FieldValue::Skip => {
            return None;
        }
    };
    Some((key, value))
}

fn stored(ctx: &Context) -> Option<&Fields> {
    let value = ctx.value(FIELDS_KEY)?;
    let fields = value.downcast_ref::<Fields>();
    if fields.is_none() {
        tracing::trace!(key = %FIELDS_KEY, "ignoring context value of unexpected type");
    }
    fields
}

/// Method-style access to the field operations
pub trait FieldsExt {
    /// See [`set`]
    fn set_fields(&self, fields: impl Into<Fields>) -> Context;

    /// See [`append`]
    fn append_fields(&self, fields: impl Into<Fields>) -> Context;

    /// See [`get`]
    fn fields(&self) -> Fields;

    /// See [`get_field`]
    fn field(&self, key: &str) -> Field;

    /// See [`get_sugared`]
    fn sugared_fields(&self) -> Vec<(Cow<'static, str>, SugaredValue)>;
}

impl FieldsExt for Context {
    fn set_fields(&self, fields: impl Into<Fields>) -> Context {
        set(self, fields)
    }

    fn append_fields(&self, fields: impl Into<Fields>) -> Context {
        append(self, fields)
    }

    fn fields(&self) -> Fields {
        get(self)
    }

    fn field(&self, key: &str) -> Field {
        get_field(self, key)
    }

    fn sugared_fields(&self) -> Vec<(Cow<'static, str>, SugaredValue)> {
        get_sugared(self)
    }
}
