//! Splits one sequence into several, each replaying all of its elements.

use std::sync::{Arc, Mutex, MutexGuard};
use std::vec::Vec;

use crate::pull::Pull;
use crate::sequence::Sequence;

/// How many elements each link of the replay buffer holds.
const CHUNK_CAPACITY: usize = 64;

/// Splits `seq` into `n` independent sequences that each yield all of its elements.
///
/// The source is driven through a single [`Pull`] adapter, strictly on demand: whichever consumer is furthest ahead pulls the next element, and every element is pulled exactly once no matter how many consumers replay it. Elements a consumer has not seen yet are buffered in a chain of fixed-size chunks shared by all consumers; a chunk is freed once every consumer has moved past it, so the buffer only grows with the *spread* between the slowest and fastest consumer, never with the length of the source.
///
/// A consumer retires when it completes, or when it is dropped without completing. When the last consumer retires, the source is stopped and released. Consumers are `Send`, so each may be handed to its own thread (or wrapped in its own [`Pull`]); a lock serialises their access to the shared buffer.
///
/// ```
/// use pushseq::prelude::*;
///
/// let [mut left, mut right]: [_; 2] = tee(pushseq::range(0, 5), 2).try_into().ok().unwrap();
/// let a: Vec<i32> = left.collect();
/// let b: Vec<i32> = right.collect();
/// assert_eq!(a, b);
/// ```
pub fn tee<S>(seq: S, n: usize) -> Vec<Tee<S::Item>>
where
    S: Sequence + Send + 'static,
    S::Item: Clone + Send + 'static,
{
    let head = Arc::new(Mutex::new(Chunk::new()));
    let shared = Arc::new(Mutex::new(Shared {
        upstream: Some(Pull::new(seq)),
        tail: head.clone(),
        consumers: n,
    }));

    (0..n)
        .map(|_| Tee {
            shared: shared.clone(),
            chunk: head.clone(),
            offset: 0,
            retired: false,
        })
        .collect()
}

/// One consumer of a shared, replayed sequence. Created by [`tee`].
#[derive(Debug)]
pub struct Tee<T> {
    shared: Arc<Mutex<Shared<T>>>,
    /// The link of the buffer this consumer currently reads from.
    chunk: Arc<Mutex<Chunk<T>>>,
    /// Position within that link.
    offset: usize,
    retired: bool,
}

/// State shared by all consumers of one [`tee`] call.
#[derive(Debug)]
struct Shared<T> {
    /// The source; `None` once exhausted or abandoned by the last consumer.
    upstream: Option<Pull<T>>,
    /// The link currently being appended to.
    tail: Arc<Mutex<Chunk<T>>>,
    /// Consumers that have not yet retired.
    consumers: usize,
}

/// One link of the replay buffer.
///
/// Links are connected through `Arc`s: each consumer holds the link it is reading, and each link holds the following one. A link is freed as soon as no consumer reads it or an earlier link.
#[derive(Debug)]
struct Chunk<T> {
    items: Vec<T>,
    /// Set on the final link when the source is exhausted.
    done: bool,
    next: Option<Arc<Mutex<Chunk<T>>>>,
}

impl<T> Chunk<T> {
    fn new() -> Self {
        Chunk {
            items: Vec::with_capacity(CHUNK_CAPACITY),
            done: false,
            next: None,
        }
    }
}

impl<T> Drop for Chunk<T> {
    fn drop(&mut self) {
        // Unlink iteratively; dropping a long chain link-by-link through
        // nested Drop calls would overflow the stack.
        let mut next = self.next.take();
        while let Some(link) = next {
            match Arc::try_unwrap(link) {
                Ok(mutex) => {
                    let mut chunk = mutex.into_inner().unwrap_or_else(|poison| poison.into_inner());
                    next = chunk.next.take();
                }
                Err(_) => break,
            }
        }
    }
}

/// What `fetch` decided to do after inspecting the current link.
enum Step<T> {
    Item(T),
    Finished,
    Advance(Arc<Mutex<Chunk<T>>>),
    PullUpstream,
}

impl<T: Clone> Tee<T> {
    /// Produces this consumer's next element, driving the source if it is the furthest ahead.
    fn fetch(&mut self) -> Option<T> {
        let mut shared = lock(&self.shared);
        loop {
            let step = {
                let chunk = lock(&self.chunk);
                if self.offset < chunk.items.len() {
                    Step::Item(chunk.items[self.offset].clone())
                } else if chunk.done {
                    Step::Finished
                } else if let Some(next) = &chunk.next {
                    Step::Advance(next.clone())
                } else {
                    Step::PullUpstream
                }
            };

            match step {
                Step::Item(item) => {
                    self.offset += 1;
                    return Some(item);
                }
                Step::Finished => return None,
                Step::Advance(next) => {
                    self.chunk = next;
                    self.offset = 0;
                }
                Step::PullUpstream => match shared.upstream.as_mut().and_then(|pull| pull.next()) {
                    Some(item) => {
                        let tail_full = lock(&shared.tail).items.len() == CHUNK_CAPACITY;
                        if tail_full {
                            let fresh = Arc::new(Mutex::new(Chunk::new()));
                            lock(&shared.tail).next = Some(fresh.clone());
                            shared.tail = fresh;
                        }
                        lock(&shared.tail).items.push(item);
                    }
                    None => {
                        lock(&shared.tail).done = true;
                        // Exhausted; release the source right away.
                        shared.upstream = None;
                    }
                },
            }
        }
    }
}

impl<T> Tee<T> {
    /// Takes this consumer out of the group, stopping the source if it was the last one.
    fn retire(&mut self) {
        if self.retired {
            return;
        }
        self.retired = true;
        let mut shared = lock(&self.shared);
        shared.consumers -= 1;
        if shared.consumers == 0 {
            // Pull's Drop stops the source and tears it down synchronously.
            shared.upstream = None;
        }
    }
}

impl<T: Clone> Sequence for Tee<T> {
    type Item = T;

    fn run<F: FnMut(T) -> bool>(&mut self, mut emit: F) -> bool {
        if self.retired {
            return true;
        }
        // The lock is only held inside fetch, never while emit runs.
        while let Some(item) = self.fetch() {
            if !emit(item) {
                // An early stop terminates this consumer just as exhaustion does.
                self.retire();
                return false;
            }
        }
        self.retire();
        true
    }
}

impl<T> Drop for Tee<T> {
    fn drop(&mut self) {
        self.retire();
    }
}

/// Locks a mutex, shrugging off poisoning: the buffer is structurally valid
/// after a consumer panics mid-fetch, the panicking consumer just never
/// advances.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poison| poison.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::{from_fn, from_iter, range, SequenceExt};

    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::vec;

    #[test]
    fn every_consumer_sees_the_whole_sequence() {
        let mut branches = tee(range(0, 200), 3);
        let expected: Vec<i32> = (0..200).collect();

        // Drain them one after the other; the first run buffers everything.
        for branch in &mut branches {
            let items: Vec<i32> = branch.collect();
            assert_eq!(items, expected);
        }
    }

    #[test]
    fn interleaved_consumers_each_see_the_whole_sequence() {
        let branches = tee(from_iter(0..1000), 4);
        let mut pulls: Vec<Pull<i32>> = branches.into_iter().map(|b| b.into_pull()).collect();
        let mut seen: Vec<Vec<i32>> = vec![Vec::new(); 4];

        // Uneven round-robin: consumer i takes i + 1 elements per round.
        let mut progressed = true;
        while progressed {
            progressed = false;
            for (i, pull) in pulls.iter_mut().enumerate() {
                for _ in 0..=i {
                    if let Some(item) = pull.next() {
                        seen[i].push(item);
                        progressed = true;
                    }
                }
            }
        }

        let expected: Vec<i32> = (0..1000).collect();
        for items in seen {
            assert_eq!(items, expected);
        }
    }

    #[test]
    fn the_source_is_driven_once_regardless_of_consumer_count() {
        let emitted = Arc::new(AtomicUsize::new(0));
        let counter = emitted.clone();

        let source = from_fn(move |emit: &mut dyn FnMut(u32) -> bool| {
            for n in 0..100 {
                counter.fetch_add(1, Ordering::SeqCst);
                if !emit(n) {
                    return false;
                }
            }
            true
        });

        let mut branches = tee(source, 3);
        for branch in &mut branches {
            assert_eq!(branch.count_items(), 100);
        }
        assert_eq!(emitted.load(Ordering::SeqCst), 100);
    }

    #[test]
    fn the_last_consumer_to_leave_releases_the_source() {
        let released = Arc::new(AtomicBool::new(false));
        let flag = released.clone();

        struct Signal(Arc<AtomicBool>);
        impl Drop for Signal {
            fn drop(&mut self) {
                self.0.store(true, Ordering::SeqCst);
            }
        }

        let signal = Signal(flag);
        // Endless, so only abandonment can release it.
        let source = from_fn(move |emit: &mut dyn FnMut(u64) -> bool| {
            let _keep = &signal;
            let mut n = 0;
            loop {
                if !emit(n) {
                    return false;
                }
                n += 1;
            }
        });

        let mut branches = tee(source, 2);
        let second = branches.pop().unwrap();
        let mut first = branches.pop().unwrap().into_pull();

        assert_eq!(first.next(), Some(0));
        assert_eq!(first.next(), Some(1));
        drop(first);
        assert!(!released.load(Ordering::SeqCst));

        drop(second);
        assert!(released.load(Ordering::SeqCst));
    }

    #[test]
    fn an_early_stopping_consumer_retires_and_can_release_the_source() {
        let released = Arc::new(AtomicBool::new(false));
        let flag = released.clone();

        struct Signal(Arc<AtomicBool>);
        impl Drop for Signal {
            fn drop(&mut self) {
                self.0.store(true, Ordering::SeqCst);
            }
        }

        let signal = Signal(flag);
        let source = from_fn(move |emit: &mut dyn FnMut(u64) -> bool| {
            let _keep = &signal;
            let mut n = 0;
            loop {
                if !emit(n) {
                    return false;
                }
                n += 1;
            }
        });

        let mut branches = tee(source, 1);
        let completed = branches[0].run(|_| false);
        assert!(!completed);
        // The sole consumer stopped early, so the source must be gone already,
        // without waiting for the Tee value itself to be dropped.
        assert!(released.load(Ordering::SeqCst));
        // And the consumer is retired for good.
        assert!(branches[0].run(|_| true));
    }

    #[test]
    fn dropping_one_consumer_does_not_disturb_the_others() {
        let mut branches = tee(range(0, 10), 2);
        drop(branches.pop());
        let items: Vec<i32> = branches[0].collect();
        assert_eq!(items, (0..10).collect::<Vec<i32>>());
    }

    #[test]
    fn teeing_into_zero_consumers_never_runs_the_source() {
        let ran = Arc::new(AtomicBool::new(false));
        let flag = ran.clone();

        let source = from_fn(move |emit: &mut dyn FnMut(u32) -> bool| {
            flag.store(true, Ordering::SeqCst);
            emit(0)
        });

        let branches = tee(source, 0);
        assert!(branches.is_empty());
        assert!(!ran.load(Ordering::SeqCst));
    }
}
