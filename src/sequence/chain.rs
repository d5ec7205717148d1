use crate::sequence::Sequence;

/// Yields every element of one sequence, then every element of another.
///
/// Created by [`SequenceExt::chain`](crate::SequenceExt::chain). To concatenate arbitrarily many sequences, see [`Flatten`](crate::sequence::Flatten).
#[derive(Debug, Clone)]
pub struct Chain<A, B> {
    first: A,
    second: B,
}

impl<A, B> Chain<A, B> {
    pub(crate) fn new(first: A, second: B) -> Self {
        Chain { first, second }
    }
}

impl<A, B> Sequence for Chain<A, B>
where
    A: Sequence,
    B: Sequence<Item = A::Item>,
{
    type Item = A::Item;

    fn run<G: FnMut(A::Item) -> bool>(&mut self, mut emit: G) -> bool {
        self.first.run(&mut emit) && self.second.run(&mut emit)
    }
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use crate::sequence::{from_slice, range, Sequence, SequenceExt};
    use std::vec::Vec;

    #[test]
    fn concatenates_in_order() {
        let all: Vec<i32> = range(0, 3).chain(from_slice(&[7, 8])).collect();
        assert_eq!(all, [0, 1, 2, 7, 8]);
    }

    #[test]
    fn an_early_stop_in_the_first_half_skips_the_second() {
        let mut seen = Vec::new();
        let completed = range(0, 3).chain(range(10, 13)).run(|n| {
            seen.push(n);
            n < 1
        });
        assert!(!completed);
        assert_eq!(seen, [0, 1]);
    }
}
