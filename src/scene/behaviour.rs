//! Per-node game logic
//!
//! A node can carry one `Behaviour`. The scene calls its hooks after the
//! node's own lifecycle step, handing it a `NodeMut` so it can move the node,
//! read its collider, or add and remove children.

use std::any::Any;

use crate::error::SceneError;
use crate::input::Pointer;

use super::world::NodeMut;

/// Downcasting support for trait objects.
pub trait AsAny: Any {
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Hooks a node runs during its lifecycle. All default to doing nothing.
pub trait Behaviour: AsAny {
    /// Called once, right after the node begins and its collider exists.
    fn on_begin(&mut self, _node: &mut NodeMut<'_>) -> Result<(), SceneError> {
        Ok(())
    }

    /// Called after the collider has seen the pointer this frame.
    fn on_handle_input(
        &mut self,
        _node: &mut NodeMut<'_>,
        _dt: f32,
        _pointer: &Pointer,
    ) -> Result<(), SceneError> {
        Ok(())
    }

    /// Called before the collider is moved to the node's world position.
    fn on_update(&mut self, _node: &mut NodeMut<'_>, _dt: f32) -> Result<(), SceneError> {
        Ok(())
    }

    /// Called once when the node dies, before its children die.
    fn on_die(&mut self, _node: &mut NodeMut<'_>) -> Result<(), SceneError> {
        Ok(())
    }
}
