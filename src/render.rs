//! Draw boundary
//!
//! The scene never talks to the GPU. Each visible node emits a `SpriteDraw`
//! into a `Surface`; whoever owns the window decides what that means.

use macroquad::color::Color;

use crate::math::{Rect, Vec2};
use crate::scene::NodeId;

/// Everything a renderer needs to put one node on screen.
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteDraw {
    pub node: NodeId,
    pub texture: String,
    /// World-space centre of the sprite
    pub position: Vec2,
    /// World-space rotation in radians
    pub rotation: f32,
    /// Size on screen
    pub size: Vec2,
    /// Sub-region of the texture (None = whole texture)
    pub source: Option<Rect>,
    /// Pivot inside the texture, in texture pixels
    pub origin: Vec2,
    pub colour: Color,
    pub opacity: f32,
}

/// Receiver for per-node draw calls.
pub trait Surface {
    fn draw_sprite(&mut self, sprite: &SpriteDraw);
}

impl Surface for Vec<SpriteDraw> {
    fn draw_sprite(&mut self, sprite: &SpriteDraw) {
        self.push(sprite.clone());
    }
}
