use crate::sequence::Sequence;

/// Yields leading elements of the wrapped sequence while a predicate holds.
///
/// Created by [`SequenceExt::take_while`](crate::SequenceExt::take_while).
#[derive(Debug, Clone)]
pub struct TakeWhile<S, F> {
    source: S,
    predicate: F,
}

impl<S, F> TakeWhile<S, F> {
    pub(crate) fn new(source: S, predicate: F) -> Self {
        TakeWhile { source, predicate }
    }
}

impl<S, F> Sequence for TakeWhile<S, F>
where
    S: Sequence,
    F: FnMut(&S::Item) -> bool,
{
    type Item = S::Item;

    fn run<G: FnMut(S::Item) -> bool>(&mut self, mut emit: G) -> bool {
        let predicate = &mut self.predicate;
        // Stopping the inner sequence at the cutoff is not an early stop of
        // this sequence, only a `false` from `emit` is.
        let mut stopped = false;
        self.source.run(|item| {
            if !predicate(&item) {
                return false;
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
