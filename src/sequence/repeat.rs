use crate::sequence::Sequence;

/// Yields clones of `elem` endlessly.
///
/// Only an early stop ends the iteration.
pub fn repeat<T: Clone>(elem: T) -> Repeat<T> {
    Repeat { elem }
}

/// Yields clones of `elem` exactly `n` times.
///
/// ```
/// use pushseq::prelude::*;
///
/// let echoes: Vec<&str> = pushseq::repeat_n("value", 3).collect();
/// assert_eq!(echoes, ["value", "value", "value"]);
/// ```
pub fn repeat_n<T: Clone>(elem: T, n: usize) -> RepeatN<T> {
    RepeatN { elem, n }
}

/// An endless repetition of one element. See [`repeat`].
#[derive(Debug, Clone)]
pub struct Repeat<T> {
    elem: T,
}

impl<T: Clone> Sequence for Repeat<T> {
    type Item = T;

    fn run<F: FnMut(T) -> bool>(&mut self, mut emit: F) -> bool {
        loop {
            if !emit(self.elem.clone()) {
                return false;
            }
        }
    }
}

/// A bounded repetition of one element. See [`repeat_n`].
#[derive(Debug, Clone)]
pub struct RepeatN<T> {
    elem: T,
    n: usize,
}

impl<T: Clone> Sequence for RepeatN<T> {
    type Item = T;

    fn run<F: FnMut(T) -> bool>(&mut self, mut emit: F) -> bool {
        for _ in 0..self.n {
            if !emit(self.elem.clone()) {
                return false;
            }
        }
        true
    }
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use super::*;
    use crate::sequence::SequenceExt;
    use std::vec::Vec;

    #[test]
    fn endless_repetition_stops_on_request() {
        let sevens: Vec<i32> = repeat(7).slice(0, 3).collect();
        assert_eq!(sevens, [7, 7, 7]);
    }

    #[test]
    fn bounded_repetition_ends_by_itself() {
        assert_eq!(repeat_n('x', 5).count_items(), 5);
        assert_eq!(repeat_n('x', 0).count_items(), 0);
    }
}
