//! 2D collision
//!
//! - `shape`: box and circle shapes, the per-node `Collider` and its pointer flags
//! - `narrow`: exact intersection and containment tests
//! - `dispatch`: routes a shape pair to the right test
//! - `quadtree`: per-frame spatial index
//! - `broad`: builds the tree, dedups candidate pairs, runs the narrow phase

mod broad;
mod dispatch;
mod narrow;
mod quadtree;
mod shape;

pub use broad::{candidate_pairs, covering_bounds, find_collisions};
pub use dispatch::collided_with;
pub use narrow::{box_box, box_circle, box_contains_point, circle_circle, circle_contains_point};
pub use quadtree::{QuadEntry, Quadtree};
pub use shape::{BoxShape, CircleShape, Collider, PointerInteraction, Shape};
