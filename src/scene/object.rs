//! Scene node data
//!
//! A `SceneNode` is plain data: transform, optional collider, a child
//! container, draw settings and an optional behaviour. Lifecycle logic lives
//! in `Scene`, which can see the parent and the texture source.

use macroquad::color::{Color, WHITE};

use crate::collision::Collider;
use crate::lifecycle::Lifecycle;
use crate::math::{Rect, Vec2};
use crate::transform::Transform;

use super::anchor::Anchor;
use super::behaviour::Behaviour;
use super::container::ChildContainer;
use super::handle::NodeId;

/// Which collider a node materialises when it begins.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColliderKind {
    None,
    /// Box sized to the node
    Box,
    Circle { radius: f32 },
}

/// The container a node sits in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Owner {
    /// The scene's top-level container
    Root,
    Node(NodeId),
}

pub struct SceneNode {
    pub(crate) lifecycle: Lifecycle,
    /// Parent link must only change through the scene
    pub(crate) transform: Transform,
    pub(crate) children: ChildContainer,
    pub(crate) collider: Option<Collider>,
    collider_kind: ColliderKind,
    texture_asset: Option<String>,
    /// Natural texture size, resolved during load
    pub(crate) texture_size: Option<Vec2>,
    /// Size on screen. Zero means "use the texture's size".
    pub size: Vec2,
    anchor: Anchor,
    depth: i32,
    pub colour: Color,
    opacity: f32,
    /// Texture sub-region (None = whole texture)
    pub source: Option<Rect>,
    pub(crate) owner: Option<Owner>,
    pub(crate) behaviour: Option<Box<dyn Behaviour>>,
}

impl SceneNode {
    /// A textured node, centred on its parent, with a box collider.
    pub fn new(texture_asset: impl Into<String>) -> Self {
        let texture_asset = texture_asset.into();
        let mut node = Self::empty();
        node.lifecycle.set_name(texture_asset.clone());
        node.texture_asset = Some(texture_asset);
        node
    }

    /// A node with nothing to draw. Useful as a grouping parent.
    pub fn empty() -> Self {
        Self {
            lifecycle: Lifecycle::new("node"),
            transform: Transform::IDENTITY,
            children: ChildContainer::new(),
            collider: None,
            collider_kind: ColliderKind::Box,
            texture_asset: None,
            texture_size: None,
            size: Vec2::ZERO,
            anchor: Anchor::CENTRE,
            depth: 0,
            colour: WHITE,
            opacity: 1.0,
            source: None,
            owner: None,
            behaviour: None,
        }
    }

    pub fn at(mut self, local_position: Vec2) -> Self {
        self.transform.local_position = local_position;
        self
    }

    pub fn with_rotation(mut self, local_rotation: f32) -> Self {
        self.transform.local_rotation = local_rotation;
        self
    }

    /// Position relative to the parent's bounds, computed at initialise.
    pub fn anchored(mut self, anchor: Anchor, depth: i32) -> Self {
        self.anchor = anchor;
        self.depth = depth;
        self
    }

    pub fn with_size(mut self, size: Vec2) -> Self {
        self.size = size;
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.lifecycle.set_name(name);
        self
    }

    pub fn with_colour(mut self, colour: Color) -> Self {
        self.colour = colour;
        self
    }

    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.set_opacity(opacity);
        self
    }

    pub fn with_source(mut self, source: Rect) -> Self {
        self.source = Some(source);
        self
    }

    pub fn without_collider(mut self) -> Self {
        self.collider_kind = ColliderKind::None;
        self
    }

    pub fn with_circle_collider(mut self, radius: f32) -> Self {
        self.collider_kind = ColliderKind::Circle { radius };
        self
    }

    pub fn with_behaviour(mut self, behaviour: impl Behaviour) -> Self {
        self.behaviour = Some(Box::new(behaviour));
        self
    }

    pub fn lifecycle(&self) -> &Lifecycle {
        &self.lifecycle
    }

    pub fn name(&self) -> &str {
        self.lifecycle.name()
    }

    pub fn is_alive(&self) -> bool {
        self.lifecycle.is_alive()
    }

    pub fn set_should_handle_input(&mut self, value: bool) {
        self.lifecycle.set_should_handle_input(value);
    }

    pub fn set_should_update(&mut self, value: bool) {
        self.lifecycle.set_should_update(value);
    }

    pub fn set_should_draw(&mut self, value: bool) {
        self.lifecycle.set_should_draw(value);
    }

    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    pub fn local_position(&self) -> Vec2 {
        self.transform.local_position
    }

    pub fn set_local_position(&mut self, local_position: Vec2) {
        self.transform.local_position = local_position;
    }

    pub fn set_local_rotation(&mut self, local_rotation: f32) {
        self.transform.local_rotation = local_rotation;
    }

    pub fn set_scale(&mut self, scale: Vec2) {
        self.transform.scale = scale;
    }

    pub fn translate(&mut self, offset: Vec2) {
        self.transform.translate(offset);
    }

    pub fn rotate(&mut self, angle: f32) {
        self.transform.rotate(angle);
    }

    pub fn children(&self) -> &ChildContainer {
        &self.children
    }

    /// Exists only after begin, and only if the node opted in.
    pub fn collider(&self) -> Option<&Collider> {
        self.collider.as_ref()
    }

    pub fn collider_kind(&self) -> ColliderKind {
        self.collider_kind
    }

    pub fn uses_collider(&self) -> bool {
        self.collider_kind != ColliderKind::None
    }

    pub fn texture_asset(&self) -> Option<&str> {
        self.texture_asset.as_deref()
    }

    pub fn texture_size(&self) -> Option<Vec2> {
        self.texture_size
    }

    pub fn anchor(&self) -> Anchor {
        self.anchor
    }

    pub fn depth(&self) -> i32 {
        self.depth
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    pub fn set_opacity(&mut self, opacity: f32) {
        self.opacity = opacity.clamp(0.0, 1.0);
    }

    pub fn owner(&self) -> Option<Owner> {
        self.owner
    }

    /// Parent node, if this node sits under another node.
    pub fn parent(&self) -> Option<NodeId> {
        match self.owner {
            Some(Owner::Node(parent)) => Some(parent),
            _ => None,
        }
    }

    /// Pivot in texture pixels: the centre of the drawn region.
    pub fn origin(&self) -> Vec2 {
        match (self.source, self.texture_size) {
            (Some(source), _) => Vec2::new(source.w, source.h) * 0.5,
            (None, Some(size)) => size * 0.5,
            (None, None) => Vec2::ZERO,
        }
    }

    pub fn behaviour<B: Behaviour>(&self) -> Option<&B> {
        self.behaviour
            .as_deref()
            .and_then(|behaviour| behaviour.as_any().downcast_ref::<B>())
    }

    pub fn behaviour_mut<B: Behaviour>(&mut self) -> Option<&mut B> {
        self.behaviour
            .as_deref_mut()
            .and_then(|behaviour| behaviour.as_any_mut().downcast_mut::<B>())
    }

    pub fn has_behaviour<B: Behaviour>(&self) -> bool {
        self.behaviour::<B>().is_some()
    }
}

impl std::fmt::Debug for SceneNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SceneNode")
            .field("name", &self.name())
            .field("transform", &self.transform)
            .field("size", &self.size)
            .field("anchor", &self.anchor)
            .field("depth", &self.depth)
            .field("owner", &self.owner)
            .field("children", &self.children.len())
            .field("has_behaviour", &self.behaviour.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Spinner {
        speed: f32,
    }

    impl Behaviour for Spinner {}

    struct Other;

    impl Behaviour for Other {}

    #[test]
    fn test_new_node_defaults() {
        let node = SceneNode::new("crate");
        assert_eq!(node.name(), "crate");
        assert_eq!(node.texture_asset(), Some("crate"));
        assert_eq!(node.anchor(), Anchor::CENTRE);
        assert_eq!(node.collider_kind(), ColliderKind::Box);
        assert!(node.collider().is_none());
        assert!(node.parent().is_none());
        assert!(node.lifecycle().should_load());
    }

    #[test]
    fn test_builders() {
        let node = SceneNode::empty()
            .with_name("panel")
            .with_size(Vec2::new(20.0, 10.0))
            .anchored(Anchor::TOP_LEFT, 1)
            .with_circle_collider(4.0)
            .with_opacity(3.0);

        assert_eq!(node.name(), "panel");
        assert_eq!(node.size, Vec2::new(20.0, 10.0));
        assert_eq!(node.depth(), 1);
        assert_eq!(node.collider_kind(), ColliderKind::Circle { radius: 4.0 });
        assert!((node.opacity() - 1.0).abs() < 0.001);
        assert!(!SceneNode::empty().without_collider().uses_collider());
    }

    #[test]
    fn test_behaviour_downcast() {
        let mut node = SceneNode::empty().with_behaviour(Spinner { speed: 2.0 });
        assert!(node.has_behaviour::<Spinner>());
        assert!(!node.has_behaviour::<Other>());

        if let Some(spinner) = node.behaviour_mut::<Spinner>() {
            spinner.speed = 5.0;
        }
        assert_eq!(node.behaviour::<Spinner>().map(|s| s.speed), Some(5.0));
    }

    #[test]
    fn test_origin_prefers_source_region() {
        let mut node = SceneNode::new("sheet");
        assert_eq!(node.origin(), Vec2::ZERO);

        node.texture_size = Some(Vec2::new(64.0, 32.0));
        assert_eq!(node.origin(), Vec2::new(32.0, 16.0));

        node.source = Some(Rect::new(16.0, 0.0, 16.0, 16.0));
        assert_eq!(node.origin(), Vec2::new(8.0, 8.0));
    }
}
