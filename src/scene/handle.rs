//! Node handles with generational indices
//!
//! A `NodeId` names a slot in the scene arena plus the generation that slot
//! had when the node was spawned. Once a node is pruned its slot may be
//! reused, and the bumped generation makes every old handle miss instead of
//! silently pointing at the newcomer.

/// Stable handle to a scene node.
///
/// Ordering is by index then generation, which gives collision pairs a
/// canonical (a, b) orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId {
    index: u32,
    generation: u32,
}

impl NodeId {
    /// Should only be called by NodeAllocator (and tests).
    pub(crate) fn new(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }

    pub fn index(&self) -> u32 {
        self.index
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }
}

/// Hands out node slots and tracks which handles are still live.
#[derive(Debug, Default)]
pub struct NodeAllocator {
    /// Current generation of every slot ever allocated
    generations: Vec<u32>,
    /// Freed slots, reused LIFO
    free_indices: Vec<u32>,
    alive_count: u32,
}

impl NodeAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allocate(&mut self) -> NodeId {
        self.alive_count += 1;

        if let Some(index) = self.free_indices.pop() {
            // Generation was already bumped when the slot was freed
            NodeId::new(index, self.generations[index as usize])
        } else {
            let index = self.generations.len() as u32;
            self.generations.push(0);
            NodeId::new(index, 0)
        }
    }

    /// Release a handle. Returns false if it was already stale.
    pub fn free(&mut self, id: NodeId) -> bool {
        if !self.is_alive(id) {
            return false;
        }
        self.generations[id.index as usize] += 1;
        self.free_indices.push(id.index);
        self.alive_count -= 1;
        true
    }

    pub fn is_alive(&self, id: NodeId) -> bool {
        self.generations
            .get(id.index as usize)
            .map_or(false, |&generation| generation == id.generation)
    }

    pub fn alive_count(&self) -> u32 {
        self.alive_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allocate_and_free() {
        let mut alloc = NodeAllocator::new();

        let a = alloc.allocate();
        let b = alloc.allocate();
        assert_eq!(alloc.alive_count(), 2);

        assert!(alloc.free(a));
        assert!(!alloc.free(a));
        assert_eq!(alloc.alive_count(), 1);
        assert!(!alloc.is_alive(a));
        assert!(alloc.is_alive(b));
    }

    #[test]
    fn test_reused_slot_invalidates_old_handle() {
        let mut alloc = NodeAllocator::new();

        let old = alloc.allocate();
        alloc.free(old);
        let new = alloc.allocate();

        assert_eq!(new.index(), old.index());
        assert_ne!(new.generation(), old.generation());
        assert!(!alloc.is_alive(old));
        assert!(alloc.is_alive(new));
    }

    #[test]
    fn test_unknown_handle_is_dead() {
        let alloc = NodeAllocator::new();
        assert!(!alloc.is_alive(NodeId::new(42, 0)));
    }
}
