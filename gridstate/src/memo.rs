//! Input-keyed stage caches.

/// Single-slot memo for one pipeline stage.
///
/// Stores the last computed output together with the input key it was
/// computed from. A stage is re-derived only when its own inputs change;
/// an unrelated keystroke leaves the cache untouched. Keys embed an
/// upstream revision counter plus the stage's parameters, so invalidation
/// cascades downstream by construction.
#[derive(Debug)]
pub(crate) struct Memo<K, V> {
    key: Option<K>,
    value: V,
}

impl<K: PartialEq, V: Default> Memo<K, V> {
    pub fn new() -> Self {
        Self {
            key: None,
            value: V::default(),
        }
    }

    /// Whether the cached output was computed from a different input.
    pub fn is_stale(&self, key: &K) -> bool {
        self.key.as_ref() != Some(key)
    }

    /// Replaces the cached output.
    pub fn store(&mut self, key: K, value: V) {
        self.key = Some(key);
        self.value = value;
    }

    /// The cached output. Valid only after the owning stage has ensured
    /// freshness for the current key.
    pub fn value(&self) -> &V {
        &self.value
    }
}
