//! Sparse node storage
//!
//! `NodeStorage<T>` maps node handles to values. Each slot remembers the
//! generation it was written with, so a stale handle reads as empty even
//! after the slot has been reused.

use super::handle::NodeId;

pub struct NodeStorage<T> {
    /// Sparse array indexed by NodeId::index()
    data: Vec<Option<(u32, T)>>,
}

impl<T> NodeStorage<T> {
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    fn ensure_capacity(&mut self, index: usize) {
        if index >= self.data.len() {
            self.data.resize_with(index + 1, || None);
        }
    }

    /// Insert a value for a node, replacing whatever the slot held.
    pub fn insert(&mut self, id: NodeId, value: T) {
        let idx = id.index() as usize;
        self.ensure_capacity(idx);
        self.data[idx] = Some((id.generation(), value));
    }

    pub fn remove(&mut self, id: NodeId) -> Option<T> {
        let slot = self.data.get_mut(id.index() as usize)?;
        let matches = slot
            .as_ref()
            .map_or(false, |(generation, _)| *generation == id.generation());
        if matches {
            slot.take().map(|(_, value)| value)
        } else {
            None
        }
    }

    pub fn get(&self, id: NodeId) -> Option<&T> {
        match self.data.get(id.index() as usize) {
            Some(Some((generation, value))) if *generation == id.generation() => Some(value),
            _ => None,
        }
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut T> {
        match self.data.get_mut(id.index() as usize) {
            Some(Some((generation, value))) if *generation == id.generation() => Some(value),
            _ => None,
        }
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.get(id).is_some()
    }

    /// Iterate over all (handle, value) pairs in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &T)> {
        self.data.iter().enumerate().filter_map(|(idx, slot)| {
            slot.as_ref()
                .map(|(generation, value)| (NodeId::new(idx as u32, *generation), value))
        })
    }

    pub fn len(&self) -> usize {
        self.data.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> Default for NodeStorage<T> {
    fn default() -> Self {
        Self::new()
    }
}
