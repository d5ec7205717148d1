//! The push-iteration contract and everything built directly on top of it.
//!
//! A [`Sequence`] produces its elements by calling back into a consumer-supplied closure, rather than by being polled. All sources and combinators in this module hold only their parameters as plain fields; nothing happens until [`run`](Sequence::run) is called, and running a stateless combinator a second time re-runs it from the start.
//!
//! The [`compress`](SequenceExt::compress) and [`group_by`](SequenceExt::group_by) combinators are the exception: they drive their inputs through a [`Pull`](crate::pull::Pull) adapter, which consumes the inputs, so they are one-pass — a second `run` produces nothing.

mod accumulate;
mod chain;
mod count;
mod drop_while;
mod enumerate;
mod filter;
mod flatten;
mod from_fn;
mod from_iter;
mod from_slice;
mod map;
mod pairwise;
mod range;
mod repeat;
mod slice;
mod take_while;

#[cfg(feature = "std")]
mod compress;
#[cfg(feature = "std")]
mod group_by;

pub use accumulate::Accumulate;
pub use chain::Chain;
pub use count::{count, count_by, CountBy};
pub use drop_while::DropWhile;
pub use enumerate::Enumerate;
pub use filter::Filter;
pub use flatten::Flatten;
pub use from_fn::{from_fn, FromFn};
pub use from_iter::{from_iter, FromIter};
pub use from_slice::{from_slice, FromSlice};
pub use map::Map;
pub use pairwise::Pairwise;
pub use range::{range, Integer, Number, Range};
pub use repeat::{repeat, repeat_n, Repeat, RepeatN};
pub use slice::Slice;
pub use take_while::TakeWhile;

#[cfg(feature = "std")]
pub use compress::Compress;
#[cfg(feature = "std")]
pub use group_by::{Group, GroupBy};

/// A lazy sequence of items, iterated by pushing each item into a continuation.
///
/// This is the dual of [`Iterator`]: instead of being asked for one item at a time, a sequence is handed a closure and drives it over every element itself. The closure answers with a `bool` after each element — `true` to keep going, `false` to stop. A sequence must honour a `false` immediately: no further elements, no further calls into the closure.
///
/// `run` in turn reports to *its* caller whether iteration ran to completion (`true`) or was stopped early (`false`). Combinators forward this verdict unchanged, so an early stop requested at the very end of a long chain unwinds the entire chain in one sweep.
///
/// Any resource a sequence holds across a `run` must be released exactly once whether iteration completes, stops early, or unwinds — in Rust that means tying the release to [`Drop`] of a value scoped to the `run` call.
///
/// ```
/// use pushseq::prelude::*;
///
/// let mut seen = Vec::new();
/// let completed = pushseq::range(0, 10).run(|n| {
///     seen.push(n);
///     n < 3 // stop after seeing 3
/// });
///
/// assert!(!completed);
/// assert_eq!(seen, [0, 1, 2, 3]);
/// ```
pub trait Sequence {
    /// The type of elements this sequence pushes.
    type Item;

    /// Drives `emit` over each element in order.
    ///
    /// Stops immediately — without producing further elements or performing further per-element side effects — the first time `emit` returns `false`, and returns `false` itself in that case. Returns `true` after running to completion.
    fn run<F: FnMut(Self::Item) -> bool>(&mut self, emit: F) -> bool;
}

impl<S: Sequence + ?Sized> Sequence for &mut S {
    type Item = S::Item;

    fn run<F: FnMut(Self::Item) -> bool>(&mut self, emit: F) -> bool {
        (**self).run(emit)
    }
}

impl<S: Sequence> SequenceExt for S {}

/// An extension trait for [`Sequence`] providing combinators and terminal helpers.
///
/// You never need to implement this trait yourself, it merely adds methods with default implementations to every sequence.
pub trait SequenceExt: Sequence {
    /// Transforms every element with `transform`.
    ///
    /// ```
    /// use pushseq::prelude::*;
    ///
    /// let doubled: Vec<i32> = pushseq::range(0, 4).map(|n| n * 2).collect();
    /// assert_eq!(doubled, [0, 2, 4, 6]);
    /// ```
    fn map<U, F>(self, transform: F) -> Map<Self, F>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> U,
    {
        Map::new(self, transform)
    }

    /// Yields only the elements for which `predicate` returns `true`.
    ///
    /// ```
    /// use pushseq::prelude::*;
    ///
    /// let even: Vec<i32> = pushseq::range(0, 10).filter(|n| n % 2 == 0).collect();
    /// assert_eq!(even, [0, 2, 4, 6, 8]);
    /// ```
    fn filter<F>(self, predicate: F) -> Filter<Self, F>
    where
        Self: Sized,
        F: FnMut(&Self::Item) -> bool,
    {
        Filter::new(self, predicate)
    }

    /// Yields elements until `predicate` first returns `false`, then ends.
    ///
    /// Cutting the input short this way is *not* an early stop from the perspective of the caller: the resulting sequence still reports normal completion.
    ///
    /// ```
    /// use pushseq::prelude::*;
    ///
    /// let prefix: Vec<i32> = pushseq::from_slice(&[1, 4, 6, 4, 1]).take_while(|n| *n < 5).collect();
    /// assert_eq!(prefix, [1, 4]);
    /// ```
    fn take_while<F>(self, predicate: F) -> TakeWhile<Self, F>
    where
        Self: Sized,
        F: FnMut(&Self::Item) -> bool,
    {
        TakeWhile::new(self, predicate)
    }

    /// Skips elements until `predicate` first returns `false`, then yields everything from there on.
    ///
    /// ```
    /// use pushseq::prelude::*;
    ///
    /// let suffix: Vec<i32> = pushseq::from_slice(&[1, 4, 6, 4, 1]).drop_while(|n| *n < 5).collect();
    /// assert_eq!(suffix, [6, 4, 1]);
    /// ```
    fn drop_while<F>(self, predicate: F) -> DropWhile<Self, F>
    where
        Self: Sized,
        F: FnMut(&Self::Item) -> bool,
    {
        DropWhile::new(self, predicate)
    }

    /// Yields every element of `self`, then every element of `other`.
    fn chain<S>(self, other: S) -> Chain<Self, S>
    where
        Self: Sized,
        S: Sequence<Item = Self::Item>,
    {
        Chain::new(self, other)
    }

    /// Flattens a sequence of sequences, yielding the elements of each inner sequence in turn.
    fn flatten(self) -> Flatten<Self>
    where
        Self: Sized,
        Self::Item: Sequence,
    {
        Flatten::new(self)
    }

    /// Yields the elements at positions `[start, end)`.
    ///
    /// The inner sequence is cut short as soon as position `end` is reached, so slicing an endless sequence terminates.
    ///
    /// ```
    /// use pushseq::prelude::*;
    ///
    /// let window: Vec<i32> = pushseq::count(0).slice(2, 5).collect();
    /// assert_eq!(window, [2, 3, 4]);
    /// ```
    fn slice(self, start: usize, end: usize) -> Slice<Self>
    where
        Self: Sized,
    {
        Slice::new(self, start, end)
    }

    /// Pairs every element with its position: `(0, s0), (1, s1), ...`.
    fn enumerate(self) -> Enumerate<Self>
    where
        Self: Sized,
    {
        Enumerate::new(self)
    }

    /// Yields overlapping pairs of adjacent elements: `(s0, s1), (s1, s2), ...`.
    ///
    /// A sequence with fewer than two elements yields nothing.
    fn pairwise(self) -> Pairwise<Self>
    where
        Self: Sized,
        Self::Item: Clone,
    {
        Pairwise::new(self)
    }

    /// Yields the running fold of `fold` over the elements: `s0, fold(s0, s1), fold(fold(s0, s1), s2), ...`.
    ///
    /// ```
    /// use pushseq::prelude::*;
    ///
    /// let totals: Vec<i32> = pushseq::range(1, 6).accumulate(|a, b| a + b).collect();
    /// assert_eq!(totals, [1, 3, 6, 10, 15]);
    /// ```
    fn accumulate<F>(self, fold: F) -> Accumulate<Self, F>
    where
        Self: Sized,
        Self::Item: Clone,
        F: FnMut(Self::Item, Self::Item) -> Self::Item,
    {
        Accumulate::new(self, fold)
    }

    /// Yields each element of `self` whose corresponding selector is `true`, ending when either input ends.
    ///
    /// Both inputs are driven through [`Pull`](crate::pull::Pull) adapters in lockstep, so the resulting sequence is one-pass: a second `run` produces nothing.
    ///
    /// ```
    /// use pushseq::prelude::*;
    ///
    /// let picked: Vec<char> = pushseq::from_slice(&['A', 'B', 'C', 'D', 'E', 'F'])
    ///     .compress(pushseq::from_slice(&[true, false, true, false, true, true]))
    ///     .collect();
    /// assert_eq!(picked, ['A', 'C', 'E', 'F']);
    /// ```
    #[cfg(feature = "std")]
    fn compress<S>(self, selectors: S) -> Compress<Self, S>
    where
        Self: Sized + Send + 'static,
        Self::Item: Send + 'static,
        S: Sequence<Item = bool> + Send + 'static,
    {
        Compress::new(self, selectors)
    }

    /// Groups consecutive elements that share a key.
    ///
    /// See [`GroupBy`] for the iteration protocol and its aliasing rules.
    ///
    /// ```
    /// use pushseq::prelude::*;
    ///
    /// let mut lengths = Vec::new();
    /// pushseq::from_slice(b"AAAABBB").group_by(|byte| *byte).run(|key, group| {
    ///     lengths.push((key, group.count_items()));
    ///     true
    /// });
    /// assert_eq!(lengths, [(b'A', 4), (b'B', 3)]);
    /// ```
    #[cfg(feature = "std")]
    fn group_by<K, F>(self, key_fn: F) -> GroupBy<Self, F>
    where
        Self: Sized + Send + 'static,
        Self::Item: Send + 'static,
        F: FnMut(&Self::Item) -> K,
        K: Clone + PartialEq,
    {
        GroupBy::new(self, key_fn)
    }

    /// Converts this push sequence into a [`Pull`](crate::pull::Pull) adapter with on-demand `next`/`stop` semantics.
    #[cfg(feature = "std")]
    fn into_pull(self) -> crate::pull::Pull<Self::Item>
    where
        Self: Sized + Send + 'static,
        Self::Item: Send + 'static,
    {
        crate::pull::Pull::new(self)
    }

    /// Splits this sequence into `n` independent sequences that each replay all of its elements.
    ///
    /// See [`tee`](crate::tee::tee) for details; this method is merely a convenience for calling it.
    #[cfg(feature = "std")]
    fn tee(self, n: usize) -> std::vec::Vec<crate::tee::Tee<Self::Item>>
    where
        Self: Sized + Send + 'static,
        Self::Item: Clone + Send + 'static,
    {
        crate::tee::tee(self, n)
    }

    /// Runs the sequence to completion, gathering all elements into a collection.
    ///
    /// ```
    /// use pushseq::prelude::*;
    ///
    /// let items: Vec<i32> = pushseq::range(0, 3).collect();
    /// assert_eq!(items, [0, 1, 2]);
    /// ```
    fn collect<C: Default + Extend<Self::Item>>(&mut self) -> C {
        let mut collection = C::default();
        self.run(|item| {
            collection.extend(core::iter::once(item));
            true
        });
        collection
    }

    /// Runs the sequence to completion and reports how many elements it pushed.
    fn count_items(&mut self) -> usize {
        let mut count = 0;
        self.run(|_| {
            count += 1;
            true
        });
        count
    }
}
