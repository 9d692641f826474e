//! Texture lookup boundary
//!
//! Scene nodes only know texture asset names. Resolving a name to pixel
//! dimensions is the host's job; nodes ask once, during load.

use std::collections::HashMap;

use crate::math::Vec2;

/// Resolves texture asset names to their natural size in pixels.
pub trait TextureSource {
    fn texture_size(&self, asset: &str) -> Option<Vec2>;
}

impl TextureSource for HashMap<String, Vec2> {
    fn texture_size(&self, asset: &str) -> Option<Vec2> {
        self.get(asset).copied()
    }
}

/// A source with no textures at all (every lookup misses)
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTextures;

impl TextureSource for NoTextures {
    fn texture_size(&self, _asset: &str) -> Option<Vec2> {
        None
    }
}
