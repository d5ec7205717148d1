use core::marker::PhantomData;

use crate::sequence::Sequence;

/// Wraps a closure written directly against the push contract as a [`Sequence`].
///
/// The closure receives the `emit` continuation and must uphold the usual rules itself: stop at the first `false` from `emit` and return `false` in that case.
///
/// ```
/// use pushseq::prelude::*;
///
/// let fibonacci = pushseq::from_fn(|emit: &mut dyn FnMut(u64) -> bool| {
///     let (mut a, mut b) = (0, 1);
///     loop {
///         if !emit(a) {
///             return false;
///         }
///         (a, b) = (b, a + b);
///     }
/// });
///
/// let start: Vec<u64> = fibonacci.slice(0, 7).collect();
/// assert_eq!(start, [0, 1, 1, 2, 3, 5, 8]);
/// ```
pub fn from_fn<T, F>(run: F) -> FromFn<T, F>
where
    F: FnMut(&mut dyn FnMut(T) -> bool) -> bool,
{
    FromFn {
        run,
        marker: PhantomData,
    }
}

/// A sequence defined by a raw closure. See [`from_fn`].
#[derive(Debug, Clone)]
pub struct FromFn<T, F> {
    run: F,
    marker: PhantomData<fn() -> T>,
}

impl<T, F> Sequence for FromFn<T, F>
where
    F: FnMut(&mut dyn FnMut(T) -> bool) -> bool,
{
    type Item = T;

    fn run<G: FnMut(T) -> bool>(&mut self, mut emit: G) -> bool {
        (self.run)(&mut emit)
    }
}
