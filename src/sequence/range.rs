use core::ops::Add;

use crate::sequence::Sequence;

/// Primitive numeric types usable with [`count`](crate::sequence::count): the integers plus `f32` and `f64`.
pub trait Number: Copy + PartialOrd + Add<Output = Self> {
    /// The value `1` of this type.
    const ONE: Self;
}

/// Primitive integer types usable with [`range`].
pub trait Integer: Number {}

macro_rules! impl_number {
    ($one:expr; $($num:ty),*) => {
        $(impl Number for $num {
            const ONE: Self = $one;
        })*
    };
}

macro_rules! impl_integer {
    ($($int:ty),*) => {
        $(impl Integer for $int {})*
    };
}

impl_number!(1; u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
impl_number!(1.0; f32, f64);
impl_integer!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

/// Yields every value in `[start, end)`, in increasing order.
///
/// Empty when `start >= end`.
///
/// ```
/// use pushseq::prelude::*;
///
/// let values: Vec<u8> = pushseq::range(3, 7).collect();
/// assert_eq!(values, [3, 4, 5, 6]);
/// ```
pub fn range<T: Integer>(start: T, end: T) -> Range<T> {
    Range { start, end }
}

/// A half-open interval of integers. See [`range`].
#[derive(Debug, Clone, Copy)]
pub struct Range<T> {
    start: T,
    end: T,
}

impl<T: Integer> Sequence for Range<T> {
    type Item = T;

    fn run<F: FnMut(T) -> bool>(&mut self, mut emit: F) -> bool {
        let mut value = self.start;
        while value < self.end {
            if !emit(value) {
                return false;
            }
            value = value + T::ONE;
        }
        true
    }
}
