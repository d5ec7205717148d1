use crate::sequence::Sequence;

/// Yields the elements of the wrapped sequence at positions `[start, end)`.
///
/// Created by [`SequenceExt::slice`](crate::SequenceExt::slice).
#[derive(Debug, Clone)]
pub struct Slice<S> {
    source: S,
    start: usize,
    end: usize,
}

impl<S> Slice<S> {
    pub(crate) fn new(source: S, start: usize, end: usize) -> Self {
        Slice { source, start, end }
    }
}

impl<S: Sequence> Sequence for Slice<S> {
    type Item = S::Item;

    fn run<G: FnMut(S::Item) -> bool>(&mut self, mut emit: G) -> bool {
        let (start, end) = (self.start, self.end);
        let mut position = 0;
        let mut stopped = false;
        self.source.run(|item| {
            if position >= end {
                // cut the inner sequence short; not an early stop of ours
                return false;
            }
            let keep = position >= start;
            position += 1;
            if !keep {
                return true;
            }
            if emit(item) {
                true
            } else {
                stopped = true;
                false
            }
        });
        !stopped
    }
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use crate::sequence::{count, range, SequenceExt};
    use std::vec::Vec;

    #[test]
    fn yields_the_requested_window() {
        let window: Vec<i32> = count(0).slice(2, 5).collect();
        assert_eq!(window, [2, 3, 4]);
    }

    #[test]
    fn an_empty_window_yields_nothing() {
        let nothing: Vec<i32> = range(0, 10).slice(4, 4).collect();
        assert!(nothing.is_empty());
    }

    #[test]
    fn a_window_past_the_end_is_truncated() {
        let tail: Vec<i32> = range(0, 5).slice(3, 100).collect();
        assert_eq!(tail, [3, 4]);
    }
}
