use crate::sequence::Sequence;

/// Flattens a sequence of sequences into a single sequence.
///
/// Created by [`SequenceExt::flatten`](crate::SequenceExt::flatten).
#[derive(Debug, Clone)]
pub struct Flatten<S> {
    source: S,
}

impl<S> Flatten<S> {
    pub(crate) fn new(source: S) -> Self {
        Flatten { source }
    }
}

impl<S> Sequence for Flatten<S>
where
    S: Sequence,
    S::Item: Sequence,
{
    type Item = <S::Item as Sequence>::Item;

    fn run<G: FnMut(Self::Item) -> bool>(&mut self, mut emit: G) -> bool {
        // An early stop inside an inner sequence surfaces as that inner run
        // returning false, which stops the outer run in turn.
        self.source.run(|mut inner| inner.run(&mut emit))
    }
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use crate::sequence::{from_iter, from_slice, Sequence, SequenceExt};
    use std::string::String;
    use std::vec;

    #[test]
    fn yields_inner_elements_in_order() {
        let word: String = from_iter(vec![from_slice(b"abc"), from_slice(b"def")])
            .flatten()
            .map(char::from)
            .collect();
        assert_eq!(word, "abcdef");
    }

    #[test]
    fn propagates_early_stop_across_inner_boundaries() {
        let mut seen = std::vec::Vec::new();
        let completed = from_iter(vec![from_slice(&[1, 2]), from_slice(&[3, 4])])
            .flatten()
            .run(|n| {
                seen.push(n);
                n < 3
            });
        assert!(!completed);
        assert_eq!(seen, [1, 2, 3]);
    }
}
