//! Adapts a push-driven [`Sequence`] into an on-demand, pull-driven iterator.

use either::Either;

use crate::coro::{Coro, Yielder};
use crate::sequence::Sequence;

/// An external-iteration view of a [`Sequence`].
///
/// The sequence runs inside a [`Coro`], suspending at every element; each [`next`](Iterator::next) resumes it for exactly one more element. In between calls the sequence sits frozen mid-`run`, so pulling interleaves cleanly with anything else the caller is doing — including pulling from *other* adapters, which is what [`compress`](crate::SequenceExt::compress) and [`group_by`](crate::SequenceExt::group_by) are built from.
///
/// [`stop`](Pull::stop) ends the iteration early by making the sequence's pending emit return `false`, which unwinds the sequence's `run` normally and releases whatever it holds. Dropping a `Pull` stops it; both are idempotent, and `next` after a stop returns `None`. Either way the sequence is fully torn down before the call returns.
///
/// A panic inside the sequence is rethrown from the `next` call that triggered it.
///
/// ```
/// use pushseq::prelude::*;
///
/// let mut letters = pushseq::from_slice(b"abc").map(char::from).into_pull();
/// assert_eq!(letters.next(), Some('a'));
/// assert_eq!(letters.next(), Some('b'));
/// letters.stop();
/// assert_eq!(letters.next(), None);
/// ```
#[derive(Debug)]
pub struct Pull<T> {
    coro: Option<Coro<bool, T, ()>>,
}

impl<T> Pull<T> {
    /// Starts pulling from `seq`. The sequence does not run at all until the first `next`.
    pub fn new<S>(mut seq: S) -> Self
    where
        S: Sequence<Item = T> + Send + 'static,
        T: Send + 'static,
    {
        let coro = Coro::new(move |keep_going: bool, yielder: Yielder<bool, T>| {
            if keep_going {
                seq.run(|item| yielder.suspend(item) == Some(true));
            }
        });
        Pull { coro: Some(coro) }
    }

    /// Ends the iteration, running the sequence's teardown before returning.
    ///
    /// Idempotent; dropping the adapter has the same effect.
    pub fn stop(&mut self) {
        if let Some(mut coro) = self.coro.take() {
            let _ = coro.resume(false);
        }
    }
}

impl<T> Iterator for Pull<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let coro = self.coro.as_mut()?;
        match coro.resume(true) {
            Some(Either::Left(item)) => Some(item),
            Some(Either::Right(())) | None => {
                self.coro = None;
                None
            }
        }
    }
}

impl<T> Drop for Pull<T> {
    fn drop(&mut self) {
        self.stop();
    }
}
