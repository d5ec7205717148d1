use crate::sequence::Sequence;

/// Skips leading elements of the wrapped sequence while a predicate holds, then yields the rest.
///
/// Created by [`SequenceExt::drop_while`](crate::SequenceExt::drop_while).
#[derive(Debug, Clone)]
pub struct DropWhile<S, F> {
    source: S,
    predicate: F,
}

impl<S, F> DropWhile<S, F> {
    pub(crate) fn new(source: S, predicate: F) -> Self {
        DropWhile { source, predicate }
    }
}

impl<S, F> Sequence for DropWhile<S, F>
where
    S: Sequence,
    F: FnMut(&S::Item) -> bool,
{
    type Item = S::Item;

    fn run<G: FnMut(S::Item) -> bool>(&mut self, mut emit: G) -> bool {
        let predicate = &mut self.predicate;
        let mut dropping = true;
        self.source.run(|item| {
            if dropping {
                if predicate(&item) {
                    return true;
                }
                dropping = false;
            }
            emit(item)
        })
    }
}
