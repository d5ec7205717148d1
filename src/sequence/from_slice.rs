use crate::sequence::Sequence;

/// Yields every element of a slice, cloned out in order.
///
/// ```
/// use pushseq::prelude::*;
///
/// let sum: i32 = pushseq::from_slice(&[1, 2, 4]).accumulate(|a, b| a + b).collect::<Vec<i32>>()[2];
/// assert_eq!(sum, 7);
/// ```
pub fn from_slice<T: Clone>(slice: &[T]) -> FromSlice<'_, T> {
    FromSlice { slice }
}

/// A sequence over a borrowed slice. See [`from_slice`].
#[derive(Debug, Clone, Copy)]
pub struct FromSlice<'a, T> {
    slice: &'a [T],
}

impl<T: Clone> Sequence for FromSlice<'_, T> {
    type Item = T;

    fn run<F: FnMut(T) -> bool>(&mut self, mut emit: F) -> bool {
        for item in self.slice {
            if !emit(item.clone()) {
                return false;
            }
        }
        true
    }
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use super::*;
    use crate::sequence::SequenceExt;
    use std::vec::Vec;

    #[test]
    fn yields_the_slice_in_order() {
        let items: Vec<u8> = from_slice(b"tofu").collect();
        assert_eq!(items, b"tofu");
    }

    #[test]
    fn reruns_from_the_start() {
        let mut seq = from_slice(&[1, 2, 3]);
        assert_eq!(seq.count_items(), 3);
        assert_eq!(seq.count_items(), 3);
    }
}
