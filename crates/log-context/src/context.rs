//! Immutable, parent-linked request context

use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// Identifies one slot in a [`Context`]
///
/// Keys compare by name, so pick names that are unlikely to collide, e.g.
/// prefixed with the owning crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContextKey(&'static str);

impl ContextKey {
    /// Create a key
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    /// The key name
    pub const fn name(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for ContextKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

type Value = Arc<dyn Any + Send + Sync>;

struct Node {
    key: ContextKey,
    value: Value,
    parent: Option<Arc<Node>>,
    depth: usize,
}

impl Drop for Node {
    // Unlink iteratively so dropping a long chain does not recurse
    fn drop(&mut self) {
        let mut next = self.parent.take();
        while let Some(node) = next {
            match Arc::try_unwrap(node) {
                Ok(mut node) => next = node.parent.take(),
                Err(_) => break,
            }
        }
    }
}

/// An immutable chain of key/value bindings
///
/// Deriving a context with [`Context::with_value`] never changes the context it
/// was derived from, so a context can be cloned into many tasks and extended
/// independently by each. Lookups see the context itself and its ancestors,
/// never descendants.
#[derive(Clone, Default)]
pub struct Context {
    head: Option<Arc<Node>>,
}

impl Context {
    /// The empty root context
    pub const fn background() -> Self {
        Self { head: None }
    }

    /// An empty root for call sites that have not been wired to a real context yet
    pub const fn todo() -> Self {
        Self::background()
    }

    /// Derive a child context binding `key` to `value`
    pub fn with_value<T>(&self, key: ContextKey, value: T) -> Self
    where
        T: Any + Send + Sync,
    {
        self.with_shared_value(key, Arc::new(value))
    }

    /// Derive a child context binding `key` to an already shared value
    pub fn with_shared_value(&self, key: ContextKey, value: Arc<dyn Any + Send + Sync>) -> Self {
        Self {
            head: Some(Arc::new(Node {
                key,
                value,
                parent: self.head.clone(),
                depth: self.depth() + 1,
            })),
        }
    }

    /// The nearest value bound to `key`, if any
    pub fn value(&self, key: ContextKey) -> Option<&(dyn Any + Send + Sync)> {
        self.nodes()
            .find(|node| node.key == key)
            .map(|node| &*node.value)
    }

    /// The nearest value bound to `key`, if it has type `T`
    ///
    /// A nearer binding of another type hides any further-up binding.
    pub fn value_as<T: Any>(&self, key: ContextKey) -> Option<&T> {
        self.value(key)?.downcast_ref::<T>()
    }

    /// Number of derivations between this context and the root
    pub fn depth(&self) -> usize {
        self.head.as_ref().map_or(0, |node| node.depth)
    }

    /// True for a root context with nothing bound
    pub fn is_background(&self) -> bool {
        self.head.is_none()
    }

    /// True when both handles are the same derivation
    pub fn ptr_eq(&self, other: &Self) -> bool {
        match (&self.head, &other.head) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        }
    }

    fn nodes(&self) -> impl Iterator<Item = &Node> {
        std::iter::successors(self.head.as_deref(), |node| node.parent.as_deref())
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Values are type-erased; only keys are printable
        f.debug_struct("Context")
            .field("keys", &self.nodes().map(|node| node.key.name()).collect::<Vec<_>>())
            .finish()
    }
}
