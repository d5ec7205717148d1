use crate::sequence::Sequence;

/// Transforms every element of the wrapped sequence with a closure.
///
/// Created by [`SequenceExt::map`](crate::SequenceExt::map).
#[derive(Debug, Clone)]
pub struct Map<S, F> {
    source: S,
    transform: F,
}

impl<S, F> Map<S, F> {
    pub(crate) fn new(source: S, transform: F) -> Self {
        Map { source, transform }
    }
}

impl<S, F, U> Sequence for Map<S, F>
where
    S: Sequence,
    F: FnMut(S::Item) -> U,
{
    type Item = U;

    fn run<G: FnMut(U) -> bool>(&mut self, mut emit: G) -> bool {
        let transform = &mut self.transform;
        self.source.run(|item| emit(transform(item)))
    }
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use crate::sequence::{range, Sequence, SequenceExt};
    use std::vec::Vec;

    #[test]
    fn transforms_every_element() {
        let squares: Vec<i32> = range(0, 5).map(|n| n * n).collect();
        assert_eq!(squares, [0, 1, 4, 9, 16]);
    }

    #[test]
    fn propagates_early_stop() {
        let mut seen = Vec::new();
        let completed = range(0, 100).map(|n| n + 1).run(|n| {
            seen.push(n);
            n < 2
        });
        assert!(!completed);
        assert_eq!(seen, [1, 2]);
    }
}
