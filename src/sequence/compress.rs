use crate::sequence::{Sequence, SequenceExt};

/// Filters a sequence through a parallel sequence of booleans. See [`compress`](SequenceExt::compress).
#[derive(Debug)]
pub struct Compress<S, B> {
    data: Option<S>,
    selectors: Option<B>,
}

impl<S, B> Compress<S, B> {
    pub(crate) fn new(data: S, selectors: B) -> Self {
        Compress {
            data: Some(data),
            selectors: Some(selectors),
        }
    }
}

impl<S, B> Sequence for Compress<S, B>
where
    S: Sequence + Send + 'static,
    S::Item: Send + 'static,
    B: Sequence<Item = bool> + Send + 'static,
{
    type Item = S::Item;

    fn run<F: FnMut(S::Item) -> bool>(&mut self, mut emit: F) -> bool {
        let (data, selectors) = match (self.data.take(), self.selectors.take()) {
            (Some(data), Some(selectors)) => (data, selectors),
            // Already ran; one-pass, so there is nothing left.
            _ => return true,
        };
        let mut data = data.into_pull();
        let mut selectors = selectors.into_pull();

        loop {
            let item = match data.next() {
                Some(item) => item,
                None => return true,
            };
            let keep = match selectors.next() {
                Some(keep) => keep,
                None => return true,
            };
            if keep && !emit(item) {
                return false;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::{count, from_slice};

    use std::vec::Vec;

    #[test]
    fn keeps_the_selected_elements() {
        let picked: Vec<char> = from_slice(&['A', 'B', 'C', 'D', 'E', 'F'])
            .compress(from_slice(&[true, false, true, false, true, true]))
            .collect();
        assert_eq!(picked, ['A', 'C', 'E', 'F']);
    }

    #[test]
    fn ends_when_the_selectors_run_out() {
        let picked: Vec<i32> = count(0).compress(from_slice(&[true, true, false])).collect();
        assert_eq!(picked, [0, 1]);
    }

    #[test]
    fn ends_when_the_data_runs_out() {
        let picked: Vec<i32> = from_slice(&[5, 6])
            .compress(count(0).map(|n| n % 2 == 0))
            .collect();
        assert_eq!(picked, [5]);
    }

    #[test]
    fn a_second_run_produces_nothing() {
        let mut seq = from_slice(&[1, 2, 3]).compress(from_slice(&[true, true, true]));
        assert_eq!(seq.count_items(), 3);
        assert_eq!(seq.count_items(), 0);
    }

    #[test]
    fn early_stops_both_inputs() {
        let completed = from_slice(&[1, 2, 3])
            .compress(from_slice(&[true, true, true]))
            .run(|_| false);
        assert!(!completed);
    }
}
