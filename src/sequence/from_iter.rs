use crate::sequence::Sequence;

/// Uses any [`IntoIterator`] as a sequence.
///
/// This is the bridge from external (pull) iteration into the push world. Note that the wrapped iterator is stateful: a second `run` resumes wherever the first one stopped, rather than restarting.
///
/// ```
/// use pushseq::prelude::*;
///
/// let odd_squares: Vec<i32> = pushseq::from_iter(0..10).map(|n| n * n).filter(|n| n % 2 == 1).collect();
/// assert_eq!(odd_squares, [1, 9, 25, 49, 81]);
/// ```
pub fn from_iter<I: IntoIterator>(iter: I) -> FromIter<I::IntoIter> {
    FromIter {
        iter: iter.into_iter(),
    }
}

/// A sequence over an iterator. See [`from_iter`].
#[derive(Debug, Clone)]
pub struct FromIter<I> {
    iter: I,
}

impl<I: Iterator> Sequence for FromIter<I> {
    type Item = I::Item;

    fn run<F: FnMut(I::Item) -> bool>(&mut self, mut emit: F) -> bool {
        for item in self.iter.by_ref() {
            if !emit(item) {
                return false;
            }
        }
        true
    }
}
