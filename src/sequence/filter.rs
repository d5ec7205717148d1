use crate::sequence::Sequence;

/// Yields only the elements of the wrapped sequence that satisfy a predicate.
///
/// Created by [`SequenceExt::filter`](crate::SequenceExt::filter).
#[derive(Debug, Clone)]
pub struct Filter<S, F> {
    source: S,
    predicate: F,
}

impl<S, F> Filter<S, F> {
    pub(crate) fn new(source: S, predicate: F) -> Self {
        Filter { source, predicate }
    }
}

impl<S, F> Sequence for Filter<S, F>
where
    S: Sequence,
    F: FnMut(&S::Item) -> bool,
{
    type Item = S::Item;

    fn run<G: FnMut(S::Item) -> bool>(&mut self, mut emit: G) -> bool {
        let predicate = &mut self.predicate;
        self.source.run(|item| {
            if predicate(&item) {
                emit(item)
            } else {
                true
            }
        })
    }
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use crate::sequence::{range, Sequence, SequenceExt};
    use std::vec::Vec;

    #[test]
    fn keeps_only_matching_elements() {
        let multiples: Vec<i32> = range(0, 20).filter(|n| n % 5 == 0).collect();
        assert_eq!(multiples, [0, 5, 10, 15]);
    }

    #[test]
    fn skipped_elements_do_not_reach_the_consumer() {
        let mut calls = 0;
        range(0, 10).filter(|_| false).run(|_| {
            calls += 1;
            true
        });
        assert_eq!(calls, 0);
    }
}
