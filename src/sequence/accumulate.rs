use crate::sequence::Sequence;

/// Yields the running fold of a binary operation over the wrapped sequence.
///
/// Created by [`SequenceExt::accumulate`](crate::SequenceExt::accumulate).
#[derive(Debug, Clone)]
pub struct Accumulate<S, F> {
    source: S,
    fold: F,
}

impl<S, F> Accumulate<S, F> {
    pub(crate) fn new(source: S, fold: F) -> Self {
        Accumulate { source, fold }
    }
}

impl<S, F> Sequence for Accumulate<S, F>
where
    S: Sequence,
    S::Item: Clone,
    F: FnMut(S::Item, S::Item) -> S::Item,
{
    type Item = S::Item;

    fn run<G: FnMut(S::Item) -> bool>(&mut self, mut emit: G) -> bool {
        let fold = &mut self.fold;
        let mut accumulator: Option<S::Item> = None;
        self.source.run(|item| {
            let folded = match accumulator.take() {
                Some(so_far) => fold(so_far, item),
                None => item,
            };
            accumulator = Some(folded.clone());
            emit(folded)
        })
    }
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use crate::sequence::{range, SequenceExt};
    use std::vec::Vec;

    #[test]
    fn yields_running_totals() {
        let totals: Vec<i32> = range(1, 6).accumulate(|a, b| a + b).collect();
        assert_eq!(totals, [1, 3, 6, 10, 15]);
    }

    #[test]
    fn the_first_element_is_yielded_unfolded() {
        let maxima: Vec<i32> = range(5, 6).accumulate(|a, b| a.max(b)).collect();
        assert_eq!(maxima, [5]);
    }
}
