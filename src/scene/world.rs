//! Scene
//!
//! The Scene owns every node in an arena and drives the lifecycle:
//! - Node allocation with generational handles
//! - Parent/child wiring (parent links are handles, never owning pointers)
//! - Fan-out of load/initialise/update/input/draw/die through the containers
//! - The per-frame collision pass
//!
//! Containers only hold handles, so a node's lifecycle step has to go through
//! the Scene: it is the one place that can see a node, its parent and its
//! children at the same time. `NodeMut` is the cursor that gives a single
//! node the `Component` interface.

use crate::assets::TextureSource;
use crate::collision::{self, Collider, QuadEntry};
use crate::config::EngineConfig;
use crate::error::SceneError;
use crate::events::{CollisionEvent, EventQueue};
use crate::input::Pointer;
use crate::lifecycle::Component;
use crate::math::Vec2;
use crate::render::{SpriteDraw, Surface};
use crate::transform::{Transform, TransformLookup};

use super::anchor::anchored_position;
use super::behaviour::Behaviour;
use super::container::ChildContainer;
use super::handle::{NodeAllocator, NodeId};
use super::object::{ColliderKind, Owner, SceneNode};
use super::storage::NodeStorage;

fn owner_of(parent: Option<NodeId>) -> Owner {
    match parent {
        Some(id) => Owner::Node(id),
        None => Owner::Root,
    }
}

pub struct Scene {
    allocator: NodeAllocator,
    nodes: NodeStorage<SceneNode>,
    /// Top-level container. Its lifecycle is the scene's lifecycle.
    root: ChildContainer,
    textures: Box<dyn TextureSource>,
    config: EngineConfig,
    /// Pairs found by the last collision passes, waiting to be drained
    pub events: EventQueue<CollisionEvent>,
}

impl Scene {
    pub fn new(config: EngineConfig, textures: impl TextureSource + 'static) -> Self {
        let mut root = ChildContainer::new();
        root.lifecycle.set_name("scene");
        Self {
            allocator: NodeAllocator::new(),
            nodes: NodeStorage::new(),
            root,
            textures: Box::new(textures),
            config,
            events: EventQueue::new(),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn root(&self) -> &ChildContainer {
        &self.root
    }

    /// Nodes currently allocated (attached or not)
    pub fn len(&self) -> usize {
        self.allocator.alive_count() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // =========================================================================
    // Node access
    // =========================================================================

    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains(id)
    }

    pub fn node(&self, id: NodeId) -> Option<&SceneNode> {
        self.nodes.get(id)
    }

    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut SceneNode> {
        self.nodes.get_mut(id)
    }

    fn get(&self, id: NodeId) -> Result<&SceneNode, SceneError> {
        self.nodes.get(id).ok_or(SceneError::StaleNode(id))
    }

    fn get_mut(&mut self, id: NodeId) -> Result<&mut SceneNode, SceneError> {
        self.nodes.get_mut(id).ok_or(SceneError::StaleNode(id))
    }

    /// Lifecycle cursor for a single node.
    pub fn entry(&mut self, id: NodeId) -> Result<NodeMut<'_>, SceneError> {
        self.get(id)?;
        Ok(NodeMut { scene: self, id })
    }

    /// Every allocated node, in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &SceneNode)> {
        self.nodes.iter()
    }

    pub fn world_position(&self, id: NodeId) -> Result<Vec2, SceneError> {
        Ok(self.get(id)?.transform.world_position(self))
    }

    pub fn world_rotation(&self, id: NodeId) -> Result<f32, SceneError> {
        Ok(self.get(id)?.transform.world_rotation(self))
    }

    fn container(&self, owner: Owner) -> Result<&ChildContainer, SceneError> {
        match owner {
            Owner::Root => Ok(&self.root),
            Owner::Node(id) => Ok(&self.get(id)?.children),
        }
    }

    fn container_mut(&mut self, owner: Owner) -> Result<&mut ChildContainer, SceneError> {
        match owner {
            Owner::Root => Ok(&mut self.root),
            Owner::Node(id) => Ok(&mut self.get_mut(id)?.children),
        }
    }

    // =========================================================================
    // Structure
    // =========================================================================

    /// Put a node in the arena without attaching it anywhere.
    pub fn spawn(&mut self, mut node: SceneNode) -> NodeId {
        let id = self.allocator.allocate();
        let container_name = format!("{}/children", node.name());
        node.children.lifecycle.set_name(container_name);
        log::debug!("spawned '{}' as {}:{}", node.name(), id.index(), id.generation());
        self.nodes.insert(id, node);
        id
    }

    /// Attach `child` under `parent` (None = top level).
    ///
    /// The child is queued and joins the live list at the parent's next
    /// update. `load` and `initialise` run those steps right away instead
    /// of waiting for the merge.
    pub fn add_child(
        &mut self,
        parent: Option<NodeId>,
        child: NodeId,
        load: bool,
        initialise: bool,
    ) -> Result<NodeId, SceneError> {
        if self.get(child)?.owner.is_some() {
            return Err(SceneError::AlreadyParented(child));
        }

        let mut cursor = parent;
        while let Some(ancestor) = cursor {
            if ancestor == child {
                return Err(SceneError::CyclicParent(child));
            }
            cursor = self.get(ancestor)?.parent();
        }

        let owner = owner_of(parent);
        self.container_mut(owner)?.enqueue(child);

        let node = self.get_mut(child)?;
        node.owner = Some(owner);
        node.transform.set_parent(parent);
        log::debug!("attached '{}' to {:?}", node.name(), owner);

        if load {
            self.load_node(child)?;
        }
        if initialise {
            self.initialise_node(child)?;
        }
        Ok(child)
    }

    /// Spawn `node` and queue it under `parent`. Load and initialise come
    /// from the parent's fan-out, or at the merge if that already ran.
    pub fn add(&mut self, parent: Option<NodeId>, node: SceneNode) -> Result<NodeId, SceneError> {
        let id = self.spawn(node);
        self.add_child(parent, id, false, false)
    }

    /// Kill a child. It stays in its container until the next prune.
    pub fn remove_child(&mut self, parent: Option<NodeId>, child: NodeId) -> Result<(), SceneError> {
        if !self.container(owner_of(parent))?.contains(child) {
            return Err(SceneError::NotAChild(child));
        }
        self.die_node(child)
    }

    /// Detach a child without killing it, so it can be attached elsewhere.
    pub fn extract_child(
        &mut self,
        parent: Option<NodeId>,
        child: NodeId,
    ) -> Result<NodeId, SceneError> {
        if !self.container_mut(owner_of(parent))?.detach(child) {
            return Err(SceneError::NotAChild(child));
        }
        let node = self.get_mut(child)?;
        node.owner = None;
        node.transform.set_parent(None);
        log::debug!("extracted '{}'", node.name());
        Ok(child)
    }

    /// Drop a pruned node and everything under it from the arena.
    fn despawn(&mut self, id: NodeId) {
        if let Some(node) = self.nodes.remove(id) {
            for child in node.children.iter() {
                self.despawn(child);
            }
            self.allocator.free(id);
            log::debug!("pruned '{}'", node.name());
        }
    }

    // =========================================================================
    // Queries (a miss is None, never an error)
    // =========================================================================

    /// First child (live, then pending) whose node matches `predicate`.
    pub fn find_child(
        &self,
        parent: Option<NodeId>,
        mut predicate: impl FnMut(&SceneNode) -> bool,
    ) -> Option<NodeId> {
        let container = self.container(owner_of(parent)).ok()?;
        container.find(|id| self.nodes.get(id).map_or(false, &mut predicate))
    }

    /// First child carrying a behaviour of type `B`.
    pub fn find_child_of<B: Behaviour>(&self, parent: Option<NodeId>) -> Option<NodeId> {
        self.find_child(parent, |node| node.has_behaviour::<B>())
    }

    /// Every matching child, live first, pending ones only if asked.
    pub fn children_where(
        &self,
        parent: Option<NodeId>,
        include_pending: bool,
        mut predicate: impl FnMut(&SceneNode) -> bool,
    ) -> Vec<NodeId> {
        let Ok(container) = self.container(owner_of(parent)) else {
            return Vec::new();
        };
        let pending: &[NodeId] = if include_pending { container.pending() } else { &[] };
        container
            .live()
            .iter()
            .chain(pending)
            .copied()
            .filter(|&id| self.nodes.get(id).map_or(false, &mut predicate))
            .collect()
    }

    pub fn exists(&self, parent: Option<NodeId>, predicate: impl FnMut(&SceneNode) -> bool) -> bool {
        self.find_child(parent, predicate).is_some()
    }

    pub fn first_child(&self, parent: Option<NodeId>) -> Option<NodeId> {
        self.container(owner_of(parent)).ok()?.first()
    }

    pub fn last_child(&self, parent: Option<NodeId>) -> Option<NodeId> {
        self.container(owner_of(parent)).ok()?.last()
    }

    pub fn child_count(&self, parent: Option<NodeId>) -> usize {
        self.container(owner_of(parent)).map_or(0, |c| c.len())
    }

    /// Any node in the arena with this name.
    pub fn find_by_name(&self, name: &str) -> Option<NodeId> {
        self.nodes.iter().find(|(_, node)| node.name() == name).map(|(id, _)| id)
    }

    // =========================================================================
    // Node lifecycle
    // =========================================================================

    /// Run a behaviour hook with the behaviour taken out of its node, so the
    /// hook can borrow the scene mutably.
    fn run_behaviour(
        &mut self,
        id: NodeId,
        hook: impl FnOnce(&mut dyn Behaviour, &mut NodeMut<'_>) -> Result<(), SceneError>,
    ) -> Result<(), SceneError> {
        let Some(mut behaviour) = self.get_mut(id)?.behaviour.take() else {
            return Ok(());
        };
        let result = hook(&mut *behaviour, &mut NodeMut { scene: self, id });
        if let Some(node) = self.nodes.get_mut(id) {
            node.behaviour = Some(behaviour);
        }
        result
    }

    fn load_node(&mut self, id: NodeId) -> Result<(), SceneError> {
        let node = self.nodes.get_mut(id).ok_or(SceneError::StaleNode(id))?;
        node.lifecycle.load()?;

        if let Some(asset) = node.texture_asset() {
            let size = self
                .textures
                .texture_size(asset)
                .ok_or_else(|| SceneError::MissingTexture(asset.to_string()))?;
            node.texture_size = Some(size);
        }

        self.load_children(Owner::Node(id))
    }

    fn initialise_node(&mut self, id: NodeId) -> Result<(), SceneError> {
        let parent_size = match self.get(id)?.parent() {
            Some(parent) => Some(self.get(parent)?.size),
            None => None,
        };

        let node = self.get_mut(id)?;
        node.lifecycle.initialise()?;

        if let Some(asset) = node.texture_asset() {
            let Some(texture_size) = node.texture_size else {
                return Err(SceneError::MissingTexture(asset.to_string()));
            };
            if node.size == Vec2::ZERO {
                node.size = texture_size;
            }
        }

        if !node.anchor().is_trivial(node.depth()) {
            let parent_size =
                parent_size.ok_or_else(|| SceneError::MissingParent(node.name().to_string()))?;
            node.transform.local_position =
                anchored_position(node.anchor(), node.depth(), node.size, parent_size);
        }

        self.initialise_children(Owner::Node(id))
    }

    fn begin_node(&mut self, id: NodeId) -> Result<(), SceneError> {
        let node = self.get_mut(id)?;
        node.lifecycle.begin()?;

        let centre = node.transform.local_position;
        node.collider = match node.collider_kind() {
            ColliderKind::None => None,
            ColliderKind::Box => {
                let mut collider = Collider::boxed(Vec2::ZERO, node.size);
                collider.set_centre(centre);
                Some(collider)
            }
            ColliderKind::Circle { radius } => Some(Collider::circle(centre, radius)),
        };
        if node.collider.is_some() {
            log::trace!("'{}' collider: {:?}", node.name(), node.collider_kind());
        }

        self.run_behaviour(id, |behaviour, node| behaviour.on_begin(node))
    }

    fn handle_input_node(&mut self, id: NodeId, dt: f32, pointer: &Pointer) -> Result<(), SceneError> {
        if let Some(collider) = self.get_mut(id)?.collider.as_mut() {
            collider.handle_input(pointer);
        }

        self.run_behaviour(id, |behaviour, node| behaviour.on_handle_input(node, dt, pointer))?;

        if self.get(id)?.children.lifecycle.should_handle_input() {
            self.handle_input_children(Owner::Node(id), dt, pointer)?;
        }
        Ok(())
    }

    fn update_node(&mut self, id: NodeId, dt: f32) -> Result<(), SceneError> {
        if !self.get(id)?.lifecycle.is_begun() {
            self.begin_node(id)?;
        }
        self.get_mut(id)?.lifecycle.update(dt)?;

        self.run_behaviour(id, |behaviour, node| behaviour.on_update(node, dt))?;

        let world = self.world_position(id)?;
        let node = self.get_mut(id)?;
        if let Some(collider) = node.collider.as_mut() {
            collider.set_centre(world);
        }

        if node.children.lifecycle.should_update() {
            self.update_children(Owner::Node(id), dt)?;
        }
        Ok(())
    }

    fn draw_node(&mut self, id: NodeId, surface: &mut dyn Surface) -> Result<(), SceneError> {
        let node = self.get(id)?;

        if let Some(asset) = node.texture_asset() {
            if node.texture_size.is_none() {
                return Err(SceneError::MissingTexture(asset.to_string()));
            }
            surface.draw_sprite(&SpriteDraw {
                node: id,
                texture: asset.to_string(),
                position: node.transform.world_position(self),
                rotation: node.transform.world_rotation(self),
                size: node.size,
                source: node.source,
                origin: node.origin(),
                colour: node.colour,
                opacity: node.opacity(),
            });
        }

        if node.children.lifecycle.should_draw() {
            self.draw_children(Owner::Node(id), surface)?;
        }
        Ok(())
    }

    fn die_node(&mut self, id: NodeId) -> Result<(), SceneError> {
        let node = self.get_mut(id)?;
        if !node.is_alive() {
            return Ok(());
        }
        node.lifecycle.die()?;
        log::debug!("'{}' died", node.name());

        self.run_behaviour(id, |behaviour, node| behaviour.on_die(node))?;
        self.die_children(Owner::Node(id))
    }

    fn show_node(&mut self, id: NodeId, cascade: bool) -> Result<(), SceneError> {
        self.get_mut(id)?.lifecycle.show(cascade)?;
        self.show_children(Owner::Node(id), cascade)
    }

    fn hide_node(&mut self, id: NodeId, cascade: bool) -> Result<(), SceneError> {
        self.get_mut(id)?.lifecycle.hide(cascade)?;
        self.hide_children(Owner::Node(id), cascade)
    }

    // =========================================================================
    // Container fan-out
    // =========================================================================

    fn load_children(&mut self, owner: Owner) -> Result<(), SceneError> {
        let container = self.container_mut(owner)?;
        container.lifecycle.load()?;

        let ids: Vec<NodeId> = container.iter().collect();
        for id in ids {
            if self.nodes.get(id).map_or(false, |n| n.lifecycle.should_load()) {
                self.load_node(id)?;
            }
        }
        Ok(())
    }

    fn initialise_children(&mut self, owner: Owner) -> Result<(), SceneError> {
        let container = self.container_mut(owner)?;
        container.lifecycle.initialise()?;

        // Children queued after the load fan-out catch up here
        let ids: Vec<NodeId> = container.iter().collect();
        for id in ids {
            if self.nodes.get(id).map_or(false, |n| n.lifecycle.should_load()) {
                self.load_node(id)?;
            }
            if self.nodes.get(id).map_or(false, |n| n.lifecycle.should_initialise()) {
                self.initialise_node(id)?;
            }
        }
        Ok(())
    }

    /// Bring a freshly merged child up to date with its container.
    fn prepare(&mut self, id: NodeId) -> Result<(), SceneError> {
        let Some(node) = self.nodes.get(id) else {
            return Ok(());
        };
        if !node.is_alive() {
            return Ok(());
        }
        if node.lifecycle.should_load() {
            self.load_node(id)?;
        }
        if self.get(id)?.lifecycle.should_initialise() {
            self.initialise_node(id)?;
        }
        Ok(())
    }

    fn handle_input_children(
        &mut self,
        owner: Owner,
        dt: f32,
        pointer: &Pointer,
    ) -> Result<(), SceneError> {
        let live = self.container(owner)?.live().to_vec();
        for id in live {
            if self.nodes.get(id).map_or(false, |n| n.lifecycle.should_handle_input()) {
                self.handle_input_node(id, dt, pointer)?;
            }
        }
        Ok(())
    }

    /// Merge, prune, then update. The merge and the prune are the only two
    /// places a live list ever changes.
    fn update_children(&mut self, owner: Owner, dt: f32) -> Result<(), SceneError> {
        self.container_mut(owner)?.lifecycle.update(dt)?;

        let merged = self.container_mut(owner)?.merge_pending();
        for id in merged {
            self.prepare(id)?;
        }

        let dead: Vec<NodeId> = self
            .container(owner)?
            .live()
            .iter()
            .copied()
            .filter(|&id| !self.nodes.get(id).map_or(false, |n| n.is_alive()))
            .collect();
        if !dead.is_empty() {
            self.container_mut(owner)?.prune(&dead);
            for id in dead {
                self.despawn(id);
            }
        }

        let live = self.container(owner)?.live().to_vec();
        for id in live {
            if self.nodes.get(id).map_or(false, |n| n.lifecycle.should_update()) {
                self.update_node(id, dt)?;
            }
        }
        Ok(())
    }

    fn draw_children(&mut self, owner: Owner, surface: &mut dyn Surface) -> Result<(), SceneError> {
        let live = self.container(owner)?.live().to_vec();
        for id in live {
            if self.nodes.get(id).map_or(false, |n| n.lifecycle.should_draw()) {
                self.draw_node(id, surface)?;
            }
        }
        Ok(())
    }

    /// Death does not travel through flags; every child is told explicitly.
    fn die_children(&mut self, owner: Owner) -> Result<(), SceneError> {
        let container = self.container_mut(owner)?;
        container.lifecycle.die()?;

        let ids: Vec<NodeId> = container.iter().collect();
        for id in ids {
            if self.nodes.contains(id) {
                self.die_node(id)?;
            }
        }
        Ok(())
    }

    fn show_children(&mut self, owner: Owner, cascade: bool) -> Result<(), SceneError> {
        let container = self.container_mut(owner)?;
        container.lifecycle.show(cascade)?;
        if !cascade {
            return Ok(());
        }

        let ids: Vec<NodeId> = container.iter().collect();
        for id in ids {
            self.show_node(id, true)?;
        }
        Ok(())
    }

    fn hide_children(&mut self, owner: Owner, cascade: bool) -> Result<(), SceneError> {
        let container = self.container_mut(owner)?;
        container.lifecycle.hide(cascade)?;
        if !cascade {
            return Ok(());
        }

        let ids: Vec<NodeId> = container.iter().collect();
        for id in ids {
            self.hide_node(id, true)?;
        }
        Ok(())
    }

    // =========================================================================
    // Collision and frame driving
    // =========================================================================

    fn collect_colliders(&self, owner: Owner, out: &mut Vec<QuadEntry>) {
        let Ok(container) = self.container(owner) else {
            return;
        };
        for &id in container.live() {
            let Some(node) = self.nodes.get(id) else {
                continue;
            };
            if !node.is_alive() {
                continue;
            }
            if let Some(collider) = node.collider() {
                out.push(QuadEntry { id, shape: *collider.shape() });
            }
            self.collect_colliders(Owner::Node(id), out);
        }
    }

    /// Find every overlapping pair among live colliders attached to the tree.
    ///
    /// Each pair is reported once, queued on `events` and returned.
    pub fn collide(&mut self) -> Vec<CollisionEvent> {
        let mut entries = Vec::new();
        self.collect_colliders(Owner::Root, &mut entries);

        let hits = collision::find_collisions(
            &entries,
            self.config.world_bounds.to_box(),
            self.config.quadtree_capacity,
            self.config.quadtree_max_depth,
        );
        for hit in &hits {
            self.events.send(*hit);
        }
        hits
    }

    /// One frame: input, update, collisions, draw. Any contract violation
    /// aborts the frame and is returned to the driver.
    pub fn frame(
        &mut self,
        dt: f32,
        pointer: &Pointer,
        surface: &mut dyn Surface,
    ) -> Result<Vec<CollisionEvent>, SceneError> {
        self.handle_input(dt, pointer)?;
        self.update(dt)?;
        let hits = self.collide();
        self.draw(surface)?;
        Ok(hits)
    }
}

impl TransformLookup for Scene {
    fn transform(&self, id: NodeId) -> Option<&Transform> {
        self.nodes.get(id).map(|node| &node.transform)
    }
}

impl Component for Scene {
    fn load(&mut self) -> Result<(), SceneError> {
        log::debug!("loading scene ({} nodes)", self.len());
        self.load_children(Owner::Root)
    }

    fn initialise(&mut self) -> Result<(), SceneError> {
        self.initialise_children(Owner::Root)
    }

    fn begin(&mut self) -> Result<(), SceneError> {
        self.root.lifecycle.begin()
    }

    fn handle_input(&mut self, dt: f32, pointer: &Pointer) -> Result<(), SceneError> {
        if !self.root.lifecycle.should_handle_input() {
            return Ok(());
        }
        self.handle_input_children(Owner::Root, dt, pointer)
    }

    fn update(&mut self, dt: f32) -> Result<(), SceneError> {
        if !self.root.lifecycle.should_update() {
            return Ok(());
        }
        self.update_children(Owner::Root, dt)
    }

    fn draw(&mut self, surface: &mut dyn Surface) -> Result<(), SceneError> {
        if !self.root.lifecycle.should_draw() {
            return Ok(());
        }
        self.draw_children(Owner::Root, surface)
    }

    fn die(&mut self) -> Result<(), SceneError> {
        self.die_children(Owner::Root)
    }

    fn show(&mut self, cascade: bool) -> Result<(), SceneError> {
        self.show_children(Owner::Root, cascade)
    }

    fn hide(&mut self, cascade: bool) -> Result<(), SceneError> {
        self.hide_children(Owner::Root, cascade)
    }
}

/// Mutable cursor on one node, with the scene behind it.
pub struct NodeMut<'a> {
    scene: &'a mut Scene,
    id: NodeId,
}

impl<'a> NodeMut<'a> {
    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn node(&self) -> Result<&SceneNode, SceneError> {
        self.scene.get(self.id)
    }

    pub fn node_mut(&mut self) -> Result<&mut SceneNode, SceneError> {
        self.scene.get_mut(self.id)
    }

    pub fn scene(&self) -> &Scene {
        &*self.scene
    }

    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut *self.scene
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.scene.nodes.get(self.id).and_then(|node| node.parent())
    }

    pub fn world_position(&self) -> Result<Vec2, SceneError> {
        self.scene.world_position(self.id)
    }

    pub fn world_rotation(&self) -> Result<f32, SceneError> {
        self.scene.world_rotation(self.id)
    }

    /// Queue a new child under this node.
    pub fn add_child(&mut self, child: SceneNode) -> Result<NodeId, SceneError> {
        self.scene.add(Some(self.id), child)
    }

    pub fn remove_child(&mut self, child: NodeId) -> Result<(), SceneError> {
        self.scene.remove_child(Some(self.id), child)
    }
}

impl Component for NodeMut<'_> {
    fn load(&mut self) -> Result<(), SceneError> {
        self.scene.load_node(self.id)
    }

    fn initialise(&mut self) -> Result<(), SceneError> {
        self.scene.initialise_node(self.id)
    }

    fn begin(&mut self) -> Result<(), SceneError> {
        self.scene.begin_node(self.id)
    }

    fn handle_input(&mut self, dt: f32, pointer: &Pointer) -> Result<(), SceneError> {
        self.scene.handle_input_node(self.id, dt, pointer)
    }

    fn update(&mut self, dt: f32) -> Result<(), SceneError> {
        self.scene.update_node(self.id, dt)
    }

    fn draw(&mut self, surface: &mut dyn Surface) -> Result<(), SceneError> {
        self.scene.draw_node(self.id, surface)
    }

    fn die(&mut self) -> Result<(), SceneError> {
        self.scene.die_node(self.id)
    }

    fn show(&mut self, cascade: bool) -> Result<(), SceneError> {
        self.scene.show_node(self.id, cascade)
    }

    fn hide(&mut self, cascade: bool) -> Result<(), SceneError> {
        self.scene.hide_node(self.id, cascade)
    }
}
