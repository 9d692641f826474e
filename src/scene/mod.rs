//! Scene graph
//!
//! Nodes live in an arena inside `Scene` and are addressed by `NodeId`.
//! Parents are plain handles; each node's `ChildContainer` decides the order
//! its children are updated and drawn in.

mod anchor;
mod behaviour;
mod container;
mod handle;
mod object;
mod storage;
mod world;

pub use anchor::{anchored_position, Anchor};
pub use behaviour::{AsAny, Behaviour};
pub use container::ChildContainer;
pub use handle::{NodeAllocator, NodeId};
pub use object::{ColliderKind, Owner, SceneNode};
pub use storage::NodeStorage;
pub use world::{NodeMut, Scene};
