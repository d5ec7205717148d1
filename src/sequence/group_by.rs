use crate::pull::Pull;
use crate::sequence::Sequence;

/// Groups consecutive elements that share a key. See [`group_by`](crate::SequenceExt::group_by).
///
/// Unlike the other combinators, a `GroupBy` is not itself a [`Sequence`]: its groups borrow shared iteration state, so they are handed out one at a time through [`run`](GroupBy::run) instead of being pushed as elements. The visitor receives each group's key and a [`Group`], itself a sequence over that group's elements.
///
/// Elements of a group the visitor does not consume are skipped before the next group begins, and a group cannot be kept around beyond its visit. The source is driven through a [`Pull`] adapter, so iteration is one-pass: a second `run` visits nothing.
pub struct GroupBy<S, F> {
    source: Option<S>,
    key_fn: F,
}

impl<S: Sequence, F> GroupBy<S, F> {
    pub(crate) fn new(source: S, key_fn: F) -> Self {
        GroupBy {
            source: Some(source),
            key_fn,
        }
    }

    /// Drives `visit` over each contiguous run of equal-keyed elements, in order.
    ///
    /// Stops (and returns `false`) the first time `visit` returns `false`; returns `true` once the source is exhausted.
    pub fn run<K, G>(&mut self, mut visit: G) -> bool
    where
        S: Send + 'static,
        S::Item: Send + 'static,
        F: FnMut(&S::Item) -> K,
        K: Clone + PartialEq,
        G: FnMut(K, &mut Group<'_, S::Item, F, K>) -> bool,
    {
        let source = match self.source.take() {
            Some(source) => source,
            None => return true,
        };
        let mut pull = Pull::new(source);

        let first = match pull.next() {
            Some(item) => item,
            None => return true,
        };
        let mut key = (self.key_fn)(&first);
        let mut current = Some(first);

        while current.is_some() {
            let group_key = key.clone();
            let mut group = Group {
                pull: &mut pull,
                key_fn: &mut self.key_fn,
                current: &mut current,
                key: &mut key,
                ended: false,
            };
            if !visit(group_key, &mut group) {
                return false;
            }
            if !group.ended {
                // Skip whatever the visitor left unconsumed.
                group.run(|_| true);
            }
        }
        true
    }
}

/// One contiguous run of equal-keyed elements. See [`GroupBy::run`].
pub struct Group<'a, T, F, K> {
    pull: &'a mut Pull<T>,
    key_fn: &'a mut F,
    /// The next element to hand out; holds the following group's first element once this group ends.
    current: &'a mut Option<T>,
    /// The current group's key; rewritten to the next group's key at the boundary.
    key: &'a mut K,
    /// Set once the boundary (or the end of the source) is reached.
    ended: bool,
}

impl<T, F, K> Sequence for Group<'_, T, F, K>
where
    F: FnMut(&T) -> K,
    K: PartialEq,
{
    type Item = T;

    fn run<G: FnMut(T) -> bool>(&mut self, mut emit: G) -> bool {
        while !self.ended {
            if let Some(item) = self.current.take() {
                if !emit(item) {
                    return false;
                }
            }
            match self.pull.next() {
                None => self.ended = true,
                Some(next) => {
                    let next_key = (self.key_fn)(&next);
                    let crossed = next_key != *self.key;
                    *self.current = Some(next);
                    if crossed {
                        *self.key = next_key;
                        self.ended = true;
                    }
                }
            }
        }
        true
    }
}
