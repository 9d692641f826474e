//! Transforms
//!
//! A `Transform` stores position, rotation and scale relative to an optional
//! parent node. World-space values are derived on every read by walking the
//! parent chain; nothing is cached, because parents can change at runtime.
//!
//! For a node with a parent:
//!   world_position = parent.world_position + rotate(local_position, parent.world_rotation)
//!   world_rotation = wrap(parent.world_rotation + local_rotation)
//! For a root node both are just the local values.

use crate::math::{rotate, wrap_angle, Vec2};
use crate::scene::{NodeId, NodeStorage};

/// Anything that can resolve a node handle to its transform.
pub trait TransformLookup {
    fn transform(&self, id: NodeId) -> Option<&Transform>;
}

impl TransformLookup for NodeStorage<Transform> {
    fn transform(&self, id: NodeId) -> Option<&Transform> {
        self.get(id)
    }
}

/// Local transform relative to a parent (or the world if there is none).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub local_position: Vec2,
    /// Radians
    pub local_rotation: f32,
    pub scale: Vec2,
    /// Non-owning link to the parent node's transform
    parent: Option<NodeId>,
}

impl Transform {
    /// Origin, no rotation, unit scale, no parent
    pub const IDENTITY: Transform = Transform {
        local_position: Vec2::ZERO,
        local_rotation: 0.0,
        scale: Vec2::ONE,
        parent: None,
    };

    pub fn new(local_position: Vec2, local_rotation: f32, scale: Vec2) -> Self {
        Self { local_position, local_rotation, scale, parent: None }
    }

    pub fn from_position(local_position: Vec2) -> Self {
        Self { local_position, ..Self::IDENTITY }
    }

    /// Sit exactly on `parent`: zero local offset, zero local rotation.
    pub(crate) fn child_of(parent: NodeId) -> Self {
        Self { parent: Some(parent), ..Self::IDENTITY }
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Only the scene sets this, so node and transform parents stay in step.
    pub(crate) fn set_parent(&mut self, parent: Option<NodeId>) {
        self.parent = parent;
    }

    pub fn translate(&mut self, offset: Vec2) {
        self.local_position += offset;
    }

    pub fn rotate(&mut self, angle: f32) {
        self.local_rotation += angle;
    }

    /// World-space rotation in (-PI, PI] for any node with a parent.
    ///
    /// A parent handle that no longer resolves is treated as no parent.
    pub fn world_rotation<L: TransformLookup + ?Sized>(&self, tree: &L) -> f32 {
        match self.parent.and_then(|id| tree.transform(id)) {
            Some(parent) => wrap_angle(parent.world_rotation(tree) + self.local_rotation),
            None => self.local_rotation,
        }
    }

    pub fn world_position<L: TransformLookup + ?Sized>(&self, tree: &L) -> Vec2 {
        match self.parent.and_then(|id| tree.transform(id)) {
            Some(parent) => {
                parent.world_position(tree)
                    + rotate(self.local_position, parent.world_rotation(tree))
            }
            None => self.local_position,
        }
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    fn chain(transforms: Vec<Transform>) -> NodeStorage<Transform> {
        let mut storage = NodeStorage::new();
        for (i, t) in transforms.into_iter().enumerate() {
            storage.insert(NodeId::new(i as u32, 0), t);
        }
        storage
    }

    fn linked(mut t: Transform, parent: u32) -> Transform {
        t.set_parent(Some(NodeId::new(parent, 0)));
        t
    }

    #[test]
    fn test_root_returns_local_values() {
        let t = Transform::new(Vec2::new(3.0, 4.0), 0.5, Vec2::ONE);
        let tree = chain(vec![t]);
        assert_eq!(t.world_position(&tree), Vec2::new(3.0, 4.0));
        assert!((t.world_rotation(&tree) - 0.5).abs() < 0.001);
    }

    #[test]
    fn test_parent_child_translation() {
        let parent = Transform::from_position(Vec2::new(10.0, 0.0));
        let child = linked(Transform::from_position(Vec2::new(5.0, 0.0)), 0);
        let tree = chain(vec![parent, child]);

        let pos = child.world_position(&tree);
        assert!((pos.x - 15.0).abs() < 0.001);
        assert!(pos.y.abs() < 0.001);
    }

    #[test]
    fn test_parent_rotation_rotates_child_offset() {
        let parent = Transform::new(Vec2::new(10.0, 0.0), PI / 2.0, Vec2::ONE);
        let child = linked(Transform::new(Vec2::new(5.0, 0.0), 0.25, Vec2::ONE), 0);
        let tree = chain(vec![parent, child]);

        let pos = child.world_position(&tree);
        assert!((pos.x - 10.0).abs() < 0.001);
        assert!((pos.y - 5.0).abs() < 0.001);
        assert!((child.world_rotation(&tree) - (PI / 2.0 + 0.25)).abs() < 0.001);
    }

    #[test]
    fn test_rotation_wraps_across_chain() {
        let root = Transform::new(Vec2::ZERO, 3.0, Vec2::ONE);
        let mid = linked(Transform::new(Vec2::ZERO, 3.0, Vec2::ONE), 0);
        let leaf = linked(Transform::new(Vec2::ZERO, 1.0, Vec2::ONE), 1);
        let tree = chain(vec![root, mid, leaf]);

        let rotation = leaf.world_rotation(&tree);
        assert!(rotation > -PI && rotation <= PI);
        assert!((rotation - (7.0 - 2.0 * PI)).abs() < 0.001);
    }

    #[test]
    fn test_three_level_chain() {
        let root = Transform::from_position(Vec2::new(100.0, 100.0));
        let mid = linked(Transform::from_position(Vec2::new(10.0, 0.0)), 0);
        let leaf = linked(Transform::from_position(Vec2::new(0.0, -5.0)), 1);
        let tree = chain(vec![root, mid, leaf]);

        let pos = leaf.world_position(&tree);
        assert!((pos.x - 110.0).abs() < 0.001);
        assert!((pos.y - 95.0).abs() < 0.001);
    }

    #[test]
    fn test_child_of_sits_on_parent() {
        let parent = Transform::new(Vec2::new(7.0, -2.0), 1.0, Vec2::ONE);
        let child = Transform::child_of(NodeId::new(0, 0));
        let tree = chain(vec![parent, child]);

        assert_eq!(child.local_position, Vec2::ZERO);
        assert_eq!(child.world_position(&tree), Vec2::new(7.0, -2.0));
    }
}
