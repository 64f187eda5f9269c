use crate::model::Connection;
use rustc_hash::FxHashMap as HashMap;
use std::collections::VecDeque;
use std::hash::Hash;

/// Connection ids keyed by ordered `(source, target)` pair.
///
/// Parallel connections share a pair; each [`take`](Self::take) hands out the next id in the
/// order the connections were supplied.
#[derive(Debug, Clone)]
pub struct ConnectionIndex<B, C> {
    queues: HashMap<(B, B), VecDeque<C>>,
    len: usize,
}

impl<B, C> Default for ConnectionIndex<B, C> {
    fn default() -> Self {
        Self {
            queues: HashMap::default(),
            len: 0,
        }
    }
}

impl<B, C> ConnectionIndex<B, C>
where
    B: Clone + Eq + Hash,
    C: Clone,
{
    pub fn new(connections: &[Connection<B, C>]) -> Self {
        let mut index = Self::default();
        for c in connections {
            index.push(c.source.clone(), c.target.clone(), c.id.clone());
        }
        index
    }

    pub fn push(&mut self, source: B, target: B, id: C) {
        self.queues.entry((source, target)).or_default().push_back(id);
        self.len += 1;
    }

    pub fn take(&mut self, source: &B, target: &B) -> Option<C> {
        let key = (source.clone(), target.clone());
        let id = self.queues.get_mut(&key)?.pop_front()?;
        self.len -= 1;
        Some(id)
    }

    /// Ids not yet taken.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}
