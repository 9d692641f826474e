//! Per-frame collision pass
//!
//! Build a quadtree over this frame's colliders, collect candidate pairs
//! from shared leaves, then run the exact test on each pair once.

use std::collections::{BTreeSet, HashMap};

use crate::events::CollisionEvent;
use crate::scene::NodeId;

use super::quadtree::{QuadEntry, Quadtree};
use super::shape::BoxShape;

/// Tree region that covers `bounds` and every entry, so nothing falls off
/// the edge of the world and silently stops colliding.
pub fn covering_bounds(bounds: BoxShape, entries: &[QuadEntry]) -> BoxShape {
    entries
        .iter()
        .fold(bounds, |acc, entry| acc.union(&entry.shape.bounds()))
}

/// Unique (a, b) pairs with a < b that share at least one leaf.
pub fn candidate_pairs(tree: &Quadtree, entries: &[QuadEntry]) -> BTreeSet<(NodeId, NodeId)> {
    let mut pairs = BTreeSet::new();
    let mut nearby = Vec::new();

    for entry in entries {
        nearby.clear();
        tree.retrieve(&mut nearby, &entry.shape);
        for &other in &nearby {
            if entry.id < other {
                pairs.insert((entry.id, other));
            }
        }
    }
    pairs
}

/// Every colliding pair among `entries`, each reported once, in id order.
pub fn find_collisions(
    entries: &[QuadEntry],
    bounds: BoxShape,
    capacity: usize,
    max_depth: u32,
) -> Vec<CollisionEvent> {
    let mut tree = Quadtree::new(covering_bounds(bounds, entries), capacity, max_depth);
    for entry in entries {
        tree.insert(*entry);
    }

    let shapes: HashMap<NodeId, _> = entries.iter().map(|e| (e.id, e.shape)).collect();
    let pairs = candidate_pairs(&tree, entries);

    let hits: Vec<CollisionEvent> = pairs
        .iter()
        .filter(|(a, b)| match (shapes.get(a), shapes.get(b)) {
            (Some(sa), Some(sb)) => sa.collided_with(sb),
            _ => false,
        })
        .map(|&(a, b)| CollisionEvent::new(a, b))
        .collect();

    log::trace!(
        "collision pass: {} colliders, {} candidates, {} hits",
        entries.len(),
        pairs.len(),
        hits.len()
    );
    hits
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collision::shape::{CircleShape, Shape};

    fn boxed(index: u32, x: f32, y: f32, size: f32) -> QuadEntry {
        QuadEntry {
            id: NodeId::new(index, 0),
            shape: Shape::Box(BoxShape::new(x, y, size, size)),
        }
    }

    fn world() -> BoxShape {
        BoxShape::new(0.0, 0.0, 100.0, 100.0)
    }

    /// O(n^2) reference
    fn brute_force(entries: &[QuadEntry]) -> Vec<CollisionEvent> {
        let mut out = Vec::new();
        for (i, a) in entries.iter().enumerate() {
            for b in &entries[i + 1..] {
                if a.shape.collided_with(&b.shape) {
                    out.push(CollisionEvent::new(a.id, b.id));
                }
            }
        }
        out.sort();
        out
    }

    #[test]
    fn test_pairs_reported_once() {
        // Both straddle the centre so they share all four leaves
        let entries = vec![
            boxed(0, 45.0, 45.0, 10.0),
            boxed(1, 48.0, 48.0, 10.0),
            boxed(2, 5.0, 5.0, 2.0),
            boxed(3, 90.0, 90.0, 2.0),
            boxed(4, 90.0, 5.0, 2.0),
        ];
        let hits = find_collisions(&entries, world(), 1, 4);
        assert_eq!(hits, vec![CollisionEvent::new(NodeId::new(0, 0), NodeId::new(1, 0))]);
    }

    #[test]
    fn test_matches_brute_force() {
        let mut entries = Vec::new();
        for i in 0..40u32 {
            let x = (i * 37 % 97) as f32;
            let y = (i * 53 % 89) as f32;
            if i % 3 == 0 {
                entries.push(QuadEntry {
                    id: NodeId::new(i, 0),
                    shape: Shape::Circle(CircleShape::new(x, y, 6.0)),
                });
            } else {
                entries.push(boxed(i, x, y, 8.0));
            }
        }
        let hits = find_collisions(&entries, world(), 3, 5);
        assert_eq!(hits, brute_force(&entries));
        assert!(!hits.is_empty());
    }

    #[test]
    fn test_out_of_bounds_colliders_still_collide() {
        let entries = vec![boxed(0, 500.0, 500.0, 10.0), boxed(1, 505.0, 505.0, 10.0)];
        let hits = find_collisions(&entries, world(), 4, 6);
        assert_eq!(hits.len(), 1);
    }

    #[test]
    fn test_no_colliders_no_pairs() {
        assert!(find_collisions(&[], world(), 4, 6).is_empty());
    }
}
