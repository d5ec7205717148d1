use core::ops::Add;

use crate::sequence::{Number, Sequence};

/// Yields `start, start + 1, start + 2, ...` endlessly. Works for integers and floats alike.
///
/// Only an early stop ends the iteration; pair this with [`slice`](crate::SequenceExt::slice) or [`take_while`](crate::SequenceExt::take_while) for a finite prefix. Overflow behaviour is that of the underlying `+`.
///
/// ```
/// use pushseq::prelude::*;
///
/// let naturals: Vec<u64> = pushseq::count(1).slice(0, 4).collect();
/// assert_eq!(naturals, [1, 2, 3, 4]);
/// ```
pub fn count<T: Number>(start: T) -> CountBy<T> {
    count_by(start, T::ONE)
}

/// Yields `start, start + step, start + 2 * step, ...` endlessly.
///
/// Works for any type with a suitable `+`, including floats.
pub fn count_by<T: Copy + Add<Output = T>>(start: T, step: T) -> CountBy<T> {
    CountBy { start, step }
}

/// An endless arithmetic progression. See [`count`] and [`count_by`].
#[derive(Debug, Clone, Copy)]
pub struct CountBy<T> {
    start: T,
    step: T,
}

impl<T: Copy + Add<Output = T>> Sequence for CountBy<T> {
    type Item = T;

    fn run<F: FnMut(T) -> bool>(&mut self, mut emit: F) -> bool {
        let mut value = self.start;
        loop {
            if !emit(value) {
                return false;
            }
            value = value + self.step;
        }
    }
}
