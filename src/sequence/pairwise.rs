use crate::sequence::Sequence;

/// Yields overlapping pairs of adjacent elements of the wrapped sequence.
///
/// Created by [`SequenceExt::pairwise`](crate::SequenceExt::pairwise).
#[derive(Debug, Clone)]
pub struct Pairwise<S> {
    source: S,
}

impl<S> Pairwise<S> {
    pub(crate) fn new(source: S) -> Self {
        Pairwise { source }
    }
}

impl<S> Sequence for Pairwise<S>
where
    S: Sequence,
    S::Item: Clone,
{
    type Item = (S::Item, S::Item);

    fn run<G: FnMut((S::Item, S::Item)) -> bool>(&mut self, mut emit: G) -> bool {
        let mut previous = None;
        self.source.run(|item| match previous.take() {
            Some(earlier) => {
                previous = Some(item.clone());
                emit((earlier, item))
            }
            None => {
                previous = Some(item);
                true
            }
        })
    }
}
