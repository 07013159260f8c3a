use std::cmp::Ordering;

/// A key paired with an opaque value.
///
/// Ordering: key ascending. Equality also looks at the key alone, so two
/// elements with equal keys are duplicates no matter what they carry.
/// Compare `value` explicitly when the payload matters.
#[derive(Debug, Clone)]
pub struct Element<K, V> {
    pub key: K,
    pub value: V,
}

impl<K, V> Element<K, V> {
    pub fn new(key: K, value: V) -> Self {
        Element { key, value }
    }
}

impl<K: Ord, V> PartialEq for Element<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl<K: Ord, V> Eq for Element<K, V> {}

impl<K: Ord, V> PartialOrd for Element<K, V> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Ord, V> Ord for Element<K, V> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

impl<K, V> From<(K, V)> for Element<K, V> {
    fn from((key, value): (K, V)) -> Self {
        Element { key, value }
    }
}
