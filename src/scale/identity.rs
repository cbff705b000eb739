use std::fmt;
use std::marker::PhantomData;

use super::Scale;

/// Scale that returns its input unchanged.
///
/// ```rust
/// use skala::{Scale, scale::Identity};
///
/// let scale = Identity::new();
/// assert_eq!(scale.apply(&"steelblue"), "steelblue");
/// ```
pub struct Identity<T> {
    marker: PhantomData<fn(T) -> T>,
}

impl<T> Identity<T> {
    pub const fn new() -> Self {
        Self { marker: PhantomData }
    }
}

impl<T> Default for Identity<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Identity<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Identity<T> {}

impl<T> fmt::Debug for Identity<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Identity")
    }
}

impl<T: Clone> Scale for Identity<T> {
    type Input = T;
    type Output = T;

    fn apply(&self, value: &T) -> T {
        value.clone()
    }
}
