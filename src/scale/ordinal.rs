use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

use super::Scale;
use super::canonical::{CanonicalKey, canonicalize};
use crate::error::{Result, ScaleError};

/// Discrete scale mapping each domain key to a range value by position.
///
/// Keys are compared structurally through [`canonicalize`], so a freshly
/// built value equal to a domain key finds that key's slot, whatever the
/// order of its fields.
///
/// - The key at index `i` maps to `range[i % range.len()]`, so a short
///   range cycles.
/// - A key listed twice in the domain takes its last position.
/// - Unknown keys map to `range[0]`.
///
/// # Examples
///
/// ```rust
/// use skala::{Scale, scale::Ordinal};
///
/// let scale = Ordinal::new(vec!["apple", "banana", "orange"], vec!["red", "yellow"]).unwrap();
///
/// assert_eq!(scale.apply(&"apple"), "red");
/// assert_eq!(scale.apply(&"banana"), "yellow");
/// assert_eq!(scale.apply(&"orange"), "red");
/// assert_eq!(scale.apply(&"grape"), "red");
/// ```
#[derive(Clone)]
pub struct Ordinal<K, V> {
    domain: Vec<K>,
    range: Vec<V>,
    index: HashMap<CanonicalKey, usize>,
}

impl<K: Serialize, V> Ordinal<K, V> {
    /// Fails with [`ScaleError::EmptyRange`] when `range` is empty.
    ///
    /// Domain keys that cannot be serialised are never matched.
    pub fn new(domain: Vec<K>, range: Vec<V>) -> Result<Self> {
        if range.is_empty() {
            log::debug!("rejecting ordinal scale with an empty range");
            return Err(ScaleError::EmptyRange);
        }

        let mut index = HashMap::with_capacity(domain.len());
        for (position, key) in domain.iter().enumerate() {
            match canonicalize(key) {
                Ok(canonical) => {
                    index.insert(canonical, position);
                }
                Err(err) => log::debug!("ordinal domain key {position} is not representable: {err}"),
            }
        }

        Ok(Self { domain, range, index })
    }

    pub fn domain(&self) -> &[K] {
        &self.domain
    }

    pub fn range(&self) -> &[V] {
        &self.range
    }

    /// Range slot for `key`, or `None` when the key is not in the domain.
    pub fn position(&self, key: &K) -> Option<usize> {
        let canonical = canonicalize(key).ok()?;
        self.index.get(&canonical).map(|position| position % self.range.len())
    }

    pub(crate) fn get(&self, key: &K) -> &V {
        match self.position(key) {
            Some(slot) => &self.range[slot],
            None => {
                log::trace!("ordinal key not in domain, using the first range value");
                &self.range[0]
            }
        }
    }
}

impl<K: Serialize, V: Clone> Scale for Ordinal<K, V> {
    type Input = K;
    type Output = V;

    fn apply(&self, key: &K) -> V {
        self.get(key).clone()
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Ordinal<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ordinal")
            .field("domain", &self.domain)
            .field("range", &self.range)
            .finish_non_exhaustive()
    }
}
