//! A minimal suspend/resume primitive, built from a dedicated worker thread and a pair of rendezvous channels.
//!
//! A [`Coro`] runs a closure on its own OS thread, but caller and closure never run at the same time: every value exchange is a rendezvous, so exactly one of the two sides is ever making progress. This gives coroutine semantics without `unsafe` stack switching, at the cost of one (almost always blocked) thread per coroutine.
//!
//! This module underpins [`Pull`](crate::pull::Pull); it is public because the primitive is occasionally useful on its own.

use std::panic::resume_unwind;
use std::sync::mpsc::{sync_channel, Receiver, SyncSender};
use std::thread::{self, JoinHandle};

pub use either::Either;

/// A suspended computation that exchanges values with its caller.
///
/// Each call to [`resume`](Coro::resume) hands an `I` to the computation and blocks until it either suspends with a `Y` ([`Either::Left`]) or returns an `R` ([`Either::Right`]). The first `resume` starts the body, which receives that first input as an argument; every later input is returned from the body's matching [`Yielder::suspend`] call.
///
/// Dropping a `Coro` mid-flight makes all pending `suspend` calls return `None`, giving the body a chance to unwind cooperatively, and then joins the worker thread. No thread outlives its `Coro`.
///
/// If the body panics, the panic is rethrown from the `resume` call that triggered it.
///
/// ```
/// use pushseq::coro::{Coro, Either};
///
/// let mut doubler = Coro::new(|first: i32, yielder| {
///     let mut n = first;
///     loop {
///         match yielder.suspend(n * 2) {
///             Some(next) => n = next,
///             None => return n,
///         }
///     }
/// });
///
/// assert_eq!(doubler.resume(1), Some(Either::Left(2)));
/// assert_eq!(doubler.resume(7), Some(Either::Left(14)));
/// ```
#[derive(Debug)]
pub struct Coro<I, Y, R> {
    in_tx: Option<SyncSender<I>>,
    out_rx: Option<Receiver<Y>>,
    worker: Option<JoinHandle<Option<R>>>,
}

/// The handle through which a coroutine body suspends itself. See [`Coro`].
#[derive(Debug)]
pub struct Yielder<I, Y> {
    out_tx: SyncSender<Y>,
    in_rx: Receiver<I>,
}

impl<I, Y> Yielder<I, Y> {
    /// Hands `value` to the caller and blocks until the next [`resume`](Coro::resume).
    ///
    /// Returns the input passed to that `resume`, or `None` if the [`Coro`] was dropped in the meantime. After a `None` the body should return promptly; it will never be resumed again.
    pub fn suspend(&self, value: Y) -> Option<I> {
        if self.out_tx.send(value).is_err() {
            return None;
        }
        self.in_rx.recv().ok()
    }
}

impl<I, Y, R> Coro<I, Y, R>
where
    I: Send + 'static,
    Y: Send + 'static,
    R: Send + 'static,
{
    /// Spawns `body` as a new coroutine. It runs no code until the first [`resume`](Coro::resume).
    pub fn new<F>(body: F) -> Self
    where
        F: FnOnce(I, Yielder<I, Y>) -> R + Send + 'static,
    {
        let (in_tx, in_rx) = sync_channel::<I>(0);
        let (out_tx, out_rx) = sync_channel::<Y>(0);

        let worker = thread::spawn(move || {
            // The first resume starts the body; without one, the body never runs.
            let first = match in_rx.recv() {
                Ok(input) => input,
                Err(_) => return None,
            };
            let yielder = Yielder { out_tx, in_rx };
            Some(body(first, yielder))
        });

        Coro {
            in_tx: Some(in_tx),
            out_rx: Some(out_rx),
            worker: Some(worker),
        }
    }
}

impl<I, Y, R> Coro<I, Y, R> {
    /// Hands `input` to the body and blocks until it suspends or returns.
    ///
    /// Returns `Some(Either::Left(y))` when the body suspends with `y`, `Some(Either::Right(r))` when it returns `r`, and `None` on every call after that. Panics if the body panicked, rethrowing its panic payload.
    pub fn resume(&mut self, input: I) -> Option<Either<Y, R>> {
        let (in_tx, out_rx) = match (self.in_tx.as_ref(), self.out_rx.as_ref()) {
            (Some(tx), Some(rx)) => (tx, rx),
            _ => return None,
        };

        if in_tx.send(input).is_err() {
            return self.finish();
        }
        match out_rx.recv() {
            Ok(yielded) => Some(Either::Left(yielded)),
            // The worker hung up: the body returned (or panicked) instead of suspending.
            Err(_) => self.finish(),
        }
    }

    /// Tears down the channels and joins the worker, rethrowing its panic if there was one.
    fn finish(&mut self) -> Option<Either<Y, R>> {
        self.in_tx = None;
        self.out_rx = None;
        let worker = self.worker.take()?;
        match worker.join() {
            Ok(Some(result)) => Some(Either::Right(result)),
            Ok(None) => None,
            Err(panic) => {
                if !thread::panicking() {
                    resume_unwind(panic);
                }
                None
            }
        }
    }
}

impl<I, Y, R> Drop for Coro<I, Y, R> {
    fn drop(&mut self) {
        // Closing the channels makes any blocked suspend return None, after
        // which the body is expected to return promptly.
        let _ = self.finish();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::string::ToString;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    #[test]
    fn alternates_inputs_and_outputs() {
        let mut echo = Coro::new(|mut line: &'static str, yielder| {
            let mut count = 0;
            loop {
                count += 1;
                match yielder.suspend(line.to_string()) {
                    Some(next) => line = next,
                    None => return count,
                }
            }
        });

        assert_eq!(echo.resume("one"), Some(Either::Left("one".to_string())));
        assert_eq!(echo.resume("two"), Some(Either::Left("two".to_string())));
    }

    #[test]
    fn the_final_return_value_comes_out_as_right() {
        let mut summer = Coro::new(|first: i32, yielder| {
            let mut total = first;
            while let Some(more) = yielder.suspend(total) {
                if more == 0 {
                    return total;
                }
                total += more;
            }
            total
        });

        assert_eq!(summer.resume(3), Some(Either::Left(3)));
        assert_eq!(summer.resume(4), Some(Either::Left(7)));
        assert_eq!(summer.resume(0), Some(Either::Right(7)));
        assert_eq!(summer.resume(99), None);
    }

    #[test]
    fn dropping_lets_the_body_unwind_cooperatively() {
        let cleaned_up = Arc::new(AtomicBool::new(false));
        let flag = cleaned_up.clone();

        struct Signal(Arc<AtomicBool>);
        impl Drop for Signal {
            fn drop(&mut self) {
                self.0.store(true, Ordering::SeqCst);
            }
        }

        let mut coro = Coro::new(move |first: u32, yielder: Yielder<u32, u32>| {
            let _signal = Signal(flag);
            let mut n = first;
            while let Some(next) = yielder.suspend(n) {
                n = next;
            }
            n
        });

        assert_eq!(coro.resume(1), Some(Either::Left(1)));
        drop(coro);
        // Drop joined the worker, so the body has finished by now.
        assert!(cleaned_up.load(Ordering::SeqCst));
    }

    #[test]
    fn a_never_resumed_body_never_runs() {
        let ran = Arc::new(AtomicBool::new(false));
        let flag = ran.clone();

        let coro = Coro::new(move |first: u32, _yielder: Yielder<u32, u32>| {
            flag.store(true, Ordering::SeqCst);
            first
        });
        drop(coro);

        assert!(!ran.load(Ordering::SeqCst));
    }

    #[test]
    #[should_panic(expected = "tripped")]
    fn a_panicking_body_rethrows_from_resume() {
        let mut coro = Coro::new(|_: u32, _yielder: Yielder<u32, u32>| -> u32 {
            panic!("tripped");
        });
        coro.resume(1);
    }
}
