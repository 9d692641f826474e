//! TILLY-2D: the runtime core of a small 2D scene-graph engine
//!
//! - Lifecycle state machine shared by every scene object
//! - Hierarchical transforms derived from parent chains
//! - Box and circle colliders with pointer interaction
//! - Quadtree broad phase feeding an exact narrow phase
//!
//! Rendering, texture loading and device input stay with the host: the
//! scene talks to them through `Surface`, `TextureSource` and `Pointer`.

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod assets;
pub mod collision;
pub mod config;
pub mod error;
pub mod events;
pub mod input;
pub mod lifecycle;
pub mod math;
pub mod render;
pub mod scene;
pub mod transform;

pub use assets::{NoTextures, TextureSource};
pub use config::{Bounds, ConfigError, EngineConfig};
pub use error::SceneError;
pub use events::{CollisionEvent, EventQueue};
pub use input::{Pointer, PointerButton, PointerSample};
pub use lifecycle::{Component, Lifecycle};
pub use render::{SpriteDraw, Surface};
pub use scene::{Anchor, Behaviour, NodeId, NodeMut, Scene, SceneNode};
pub use transform::Transform;
