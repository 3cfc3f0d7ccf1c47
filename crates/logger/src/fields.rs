//! Ordered, shareable field sequences

use crate::Field;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::HashSet;
use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

/// An immutable, ordered sequence of [`Field`]s
///
/// Cloning is a reference-count bump. Keys are not deduplicated; lookups scan
/// in order and the first matching key wins.
#[derive(Clone, Default, PartialEq)]
pub struct Fields(Arc<[Field]>);

impl Fields {
    /// An empty sequence
    pub fn new() -> Self {
        Self::default()
    }

    /// First field with exactly this key
    pub fn get(&self, key: &str) -> Option<&Field> {
        self.0.iter().find(|field| field.key() == key)
    }

    /// A new sequence holding `head` followed by these fields
    pub fn prepend(&self, head: impl Into<Fields>) -> Self {
        let head = head.into();
        if head.is_empty() {
            return self.clone();
        }
        if self.is_empty() {
            return head;
        }
        head.iter().chain(self.iter()).cloned().collect()
    }

    /// A new sequence holding these fields followed by `tail`
    pub fn extend(&self, tail: impl Into<Fields>) -> Self {
        tail.into().prepend(self.clone())
    }

    /// Borrow as a slice
    pub fn as_slice(&self) -> &[Field] {
        &self.0
    }

    /// True when both handles point at the same buffer
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Deref for Fields {
    type Target = [Field];

    fn deref(&self) -> &[Field] {
        &self.0
    }
}

impl From<Vec<Field>> for Fields {
    fn from(fields: Vec<Field>) -> Self {
        Self(fields.into())
    }
}

impl From<&[Field]> for Fields {
    fn from(fields: &[Field]) -> Self {
        Self(fields.into())
    }
}

impl<const N: usize> From<[Field; N]> for Fields {
    fn from(fields: [Field; N]) -> Self {
        Self(Arc::new(fields))
    }
}

impl From<Field> for Fields {
    fn from(field: Field) -> Self {
        Self::from([field])
    }
}

impl<T: Into<Fields>> From<Option<T>> for Fields {
    fn from(fields: Option<T>) -> Self {
        fields.map(Into::into).unwrap_or_default()
    }
}

impl FromIterator<Field> for Fields {
    fn from_iter<I: IntoIterator<Item = Field>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Fields {
    type Item = &'a Field;
    type IntoIter = std::slice::Iter<'a, Field>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Debug for Fields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}

impl fmt::Display for Fields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, field) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{field}")?;
        }
        Ok(())
    }
}

/// Serializes as a JSON-style object; a repeated key keeps its first value.
impl Serialize for Fields {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seen = HashSet::with_capacity(self.0.len());
        let mut map = serializer.serialize_map(None)?;
        for field in self.0.iter() {
            if seen.insert(field.key()) {
                map.serialize_entry(field.key(), &field.value().to_json())?;
            }
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Fields {
        Fields::from(vec![
            Field::string("trace_id", "t-1"),
            Field::string("span_id", "s-1"),
            Field::string("trace_id", "t-2"),
        ])
    }

    #[test]
    fn test_get_first_match_wins() {
        let fields = sample();
        assert_eq!(fields.get("trace_id"), Some(&Field::string("trace_id", "t-1")));
        assert_eq!(fields.get("TRACE_ID"), None);
        assert_eq!(fields.get("missing"), None);
    }

    #[test]
    fn test_prepend_keeps_both() {
        let base = Fields::from(Field::string("a", "1"));
        let merged = base.prepend([Field::string("b", "2"), Field::string("c", "3")]);

        let keys: Vec<_> = merged.iter().map(Field::key).collect();
        assert_eq!(keys, ["b", "c", "a"]);
        // Original is untouched
        assert_eq!(base.len(), 1);
    }

    #[test]
    fn test_prepend_empty_shares_buffer() {
        let base = sample();
        assert!(base.prepend(None::<Vec<Field>>).ptr_eq(&base));
        assert!(Fields::new().prepend(base.clone()).ptr_eq(&base));
    }

    #[test]
    fn test_extend() {
        let merged = Fields::from(Field::string("a", "1")).extend(Field::string("b", "2"));
        let keys: Vec<_> = merged.iter().map(Field::key).collect();
        assert_eq!(keys, ["a", "b"]);
    }

    #[test]
    fn test_display() {
        let fields = Fields::from([Field::string("a", "x"), Field::bool("b", true)]);
        assert_eq!(fields.to_string(), "a=x b=true");
        assert_eq!(Fields::new().to_string(), "");
    }

    #[test]
    fn test_serialize_first_key_wins() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json, serde_json::json!({ "trace_id": "t-1", "span_id": "s-1" }));
    }
}
