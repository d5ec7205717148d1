use crate::sequence::Sequence;

/// Pairs every element of the wrapped sequence with its position.
///
/// Created by [`SequenceExt::enumerate`](crate::SequenceExt::enumerate).
#[derive(Debug, Clone)]
pub struct Enumerate<S> {
    source: S,
}

impl<S> Enumerate<S> {
    pub(crate) fn new(source: S) -> Self {
        Enumerate { source }
    }
}

impl<S: Sequence> Sequence for Enumerate<S> {
    type Item = (usize, S::Item);

    fn run<G: FnMut((usize, S::Item)) -> bool>(&mut self, mut emit: G) -> bool {
        let mut position = 0;
        self.source.run(|item| {
            let index = position;
            position += 1;
            emit((index, item))
        })
    }
}
