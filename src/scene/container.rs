//! Child containers
//!
//! A container owns the ordering of its children, not the nodes themselves
//! (those live in the scene arena). Additions go to a pending queue and are
//! merged at the start of the next update pass; dead children are pruned
//! right after the merge. Nothing else ever changes the live list, so a pass
//! can iterate it without worrying about mutation underneath.

use crate::lifecycle::Lifecycle;

use super::handle::NodeId;

#[derive(Debug, Clone)]
pub struct ChildContainer {
    pub(crate) lifecycle: Lifecycle,
    live: Vec<NodeId>,
    pending: Vec<NodeId>,
}

impl ChildContainer {
    pub fn new() -> Self {
        Self {
            lifecycle: Lifecycle::new("children"),
            live: Vec::new(),
            pending: Vec::new(),
        }
    }

    pub fn lifecycle(&self) -> &Lifecycle {
        &self.lifecycle
    }

    /// Queue a child. It joins the live list at the next merge.
    pub fn enqueue(&mut self, id: NodeId) {
        self.pending.push(id);
    }

    /// Move every pending child to the end of the live list, in arrival
    /// order. Returns the ids that were merged.
    pub fn merge_pending(&mut self) -> Vec<NodeId> {
        let merged = std::mem::take(&mut self.pending);
        self.live.extend_from_slice(&merged);
        merged
    }

    /// Remove the given ids from the live list, keeping the rest in order.
    pub fn prune(&mut self, dead: &[NodeId]) {
        if !dead.is_empty() {
            self.live.retain(|id| !dead.contains(id));
        }
    }

    /// Take a child out of either list without touching the node.
    pub fn detach(&mut self, id: NodeId) -> bool {
        if let Some(pos) = self.live.iter().position(|&c| c == id) {
            self.live.remove(pos);
            true
        } else if let Some(pos) = self.pending.iter().position(|&c| c == id) {
            self.pending.remove(pos);
            true
        } else {
            false
        }
    }

    /// Live children first, then pending ones.
    pub fn iter(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.live.iter().chain(self.pending.iter()).copied()
    }

    /// First id (live, then pending) matching `predicate`.
    pub fn find(&self, mut predicate: impl FnMut(NodeId) -> bool) -> Option<NodeId> {
        self.iter().find(|&id| predicate(id))
    }

    pub fn first(&self) -> Option<NodeId> {
        self.iter().next()
    }

    pub fn last(&self) -> Option<NodeId> {
        self.pending.last().or_else(|| self.live.last()).copied()
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.live.contains(&id) || self.pending.contains(&id)
    }

    /// Live and pending children together
    pub fn len(&self) -> usize {
        self.live.len() + self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty() && self.pending.is_empty()
    }

    pub fn live(&self) -> &[NodeId] {
        &self.live
    }

    pub fn pending(&self) -> &[NodeId] {
        &self.pending
    }
}

impl Default for ChildContainer {
    fn default() -> Self {
        Self::new()
    }
}
