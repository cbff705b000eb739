use num_traits::Float;

use super::util;

/// Iterator over the tick values produced by a scale.
///
/// Ticks are produced lazily and are always finite in number.
pub struct TickIter<T> {
    inner: Box<dyn Iterator<Item = T> + 'static>,
}

impl<T: 'static> TickIter<T> {
    pub fn new<I>(iter: I) -> Self
    where
        I: Iterator<Item = T> + 'static,
    {
        Self {
            inner: Box::new(iter),
        }
    }

    /// Creates a `TickIter` from a vector of ticks.
    ///
    /// ```
    /// use skala::scale::TickIter;
    ///
    /// let iter = TickIter::from_vec(vec![0.0, 50.0, 100.0]);
    /// assert_eq!(iter.count(), 3);
    /// ```
    pub fn from_vec(vec: Vec<T>) -> Self {
        Self::new(vec.into_iter())
    }

    /// Creates an empty `TickIter` that produces no ticks.
    ///
    /// ```
    /// use skala::scale::TickIter;
    ///
    /// let iter = TickIter::<f64>::empty();
    /// assert_eq!(iter.count(), 0);
    /// ```
    pub fn empty() -> Self {
        Self::new(std::iter::empty())
    }

    /// Converts every tick, e.g. back out of a transformed domain.
    pub fn map_ticks<U: 'static, F>(self, f: F) -> TickIter<U>
    where
        F: FnMut(T) -> U + 'static,
    {
        TickIter::new(self.inner.map(f))
    }
}

impl<D: Float + 'static> TickIter<D> {
    pub(crate) fn from_stepped(iter: SteppedTicks<D>) -> Self {
        Self::new(iter)
    }
}

impl<T> Iterator for TickIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

/// Sweep over `round(i * step)` for `i` in `first..=last`, in either direction.
pub(crate) struct SteppedTicks<D: Float> {
    state: SteppedState<D>,
}

enum SteppedState<D: Float> {
    Single(Option<D>),
    Sweep(SweepState<D>),
    Done,
}

struct SweepState<D: Float> {
    step: D,
    // Multipliers of `step`, kept in D so huge domains cannot overflow an integer.
    current: D,
    last: D,
    descending: bool,
}

impl<D: Float> SteppedTicks<D> {
    pub(crate) fn single(value: D) -> Self {
        Self {
            state: SteppedState::Single(Some(value)),
        }
    }

    pub(crate) fn empty() -> Self {
        Self {
            state: SteppedState::Done,
        }
    }

    /// Ticks from `first * step` to `last * step` inclusive.
    ///
    /// `first` and `last` must already be integral.
    pub(crate) fn sweep(step: D, first: D, last: D, descending: bool) -> Self {
        if first > last {
            return Self::empty();
        }

        let (current, last) = if descending { (last, first) } else { (first, last) };
        Self {
            state: SteppedState::Sweep(SweepState {
                step,
                current,
                last,
                descending,
            }),
        }
    }
}

impl<D: Float> Iterator for SteppedTicks<D> {
    type Item = D;

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.state {
            SteppedState::Single(slot) => {
                let value = slot.take();
                if value.is_none() {
                    self.state = SteppedState::Done;
                }
                value
            }
            SteppedState::Sweep(state) => {
                let finished = if state.descending {
                    state.current < state.last
                } else {
                    state.current > state.last
                };
                if finished {
                    self.state = SteppedState::Done;
                    return None;
                }

                // Calculate value from the multiplier to avoid accumulation errors
                let value = util::round_ticks(state.current * state.step);
                let next = if state.descending {
                    state.current - D::one()
                } else {
                    state.current + D::one()
                };
                if next == state.current {
                    // Multiplier past the type's integer precision
                    self.state = SteppedState::Done;
                } else {
                    state.current = next;
                }
                Some(value)
            }
            SteppedState::Done => None,
        }
    }
}
