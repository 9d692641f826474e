//! Outbound events
//!
//! The core finds collisions but does not decide what they mean. Pairs are
//! queued here and drained by whatever owns the game rules.

use crate::scene::NodeId;

/// A queue for events of a single type.
/// Events are collected during the frame and drained by the consumer.
#[derive(Debug)]
pub struct EventQueue<T> {
    events: Vec<T>,
}

impl<T> EventQueue<T> {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Send an event (add to queue)
    pub fn send(&mut self, event: T) {
        self.events.push(event);
    }

    /// Iterate over events without clearing
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.events.iter()
    }

    /// Drain all events (returns iterator and clears queue)
    pub fn drain(&mut self) -> impl Iterator<Item = T> + '_ {
        self.events.drain(..)
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl<T> Default for EventQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Two colliders overlapped this frame. `a` always orders before `b`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CollisionEvent {
    pub a: NodeId,
    pub b: NodeId,
}

impl CollisionEvent {
    /// Build with the pair in canonical order.
    pub fn new(first: NodeId, second: NodeId) -> Self {
        if first <= second {
            Self { a: first, b: second }
        } else {
            Self { a: second, b: first }
        }
    }

    pub fn involves(&self, id: NodeId) -> bool {
        self.a == id || self.b == id
    }

    /// The other half of the pair, if `id` is in it.
    pub fn other(&self, id: NodeId) -> Option<NodeId> {
        if self.a == id {
            Some(self.b)
        } else if self.b == id {
            Some(self.a)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_queue() {
        let mut queue: EventQueue<i32> = EventQueue::new();

        queue.send(1);
        queue.send(2);
        queue.send(3);

        assert_eq!(queue.len(), 3);

        let collected: Vec<_> = queue.drain().collect();
        assert_eq!(collected, vec![1, 2, 3]);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_collision_event_is_canonical() {
        let low = NodeId::new(1, 0);
        let high = NodeId::new(7, 2);
        assert_eq!(CollisionEvent::new(high, low), CollisionEvent::new(low, high));

        let event = CollisionEvent::new(high, low);
        assert_eq!(event.a, low);
        assert_eq!(event.other(low), Some(high));
        assert!(!event.involves(NodeId::new(3, 0)));
    }
}
