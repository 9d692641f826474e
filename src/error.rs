//! Scene errors
//!
//! Every variant is a broken lifecycle or ownership contract. They are
//! returned at the call site that detected them and propagated unchanged;
//! nothing inside the crate turns one back into a soft failure.

use crate::scene::NodeId;

/// A contract violation detected by the scene graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SceneError {
    /// `load()` called when the unit was already loaded
    AlreadyLoaded(String),
    /// `initialise()` called when the unit was already initialised
    AlreadyInitialised(String),
    /// `begin()` called before `load()`
    BeginBeforeLoad(String),
    /// `begin()` called before `initialise()`
    BeginBeforeInitialise(String),
    /// `begin()` called a second time
    AlreadyBegun(String),
    /// Attaching a node that already belongs to a container
    AlreadyParented(NodeId),
    /// Parenting a node under itself or one of its own descendants
    CyclicParent(NodeId),
    /// Removing or extracting a node the container does not hold
    NotAChild(NodeId),
    /// Non-trivial anchoring on a node without a parent node
    MissingParent(String),
    /// Texture asset could not be resolved, or was read before loading
    MissingTexture(String),
    /// Handle refers to a node that has been pruned
    StaleNode(NodeId),
}

impl std::fmt::Display for SceneError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SceneError::AlreadyLoaded(name) => write!(f, "'{}' was already loaded", name),
            SceneError::AlreadyInitialised(name) => {
                write!(f, "'{}' was already initialised", name)
            }
            SceneError::BeginBeforeLoad(name) => write!(f, "'{}' began before loading", name),
            SceneError::BeginBeforeInitialise(name) => {
                write!(f, "'{}' began before initialising", name)
            }
            SceneError::AlreadyBegun(name) => write!(f, "'{}' has already begun", name),
            SceneError::AlreadyParented(id) => {
                write!(f, "node {}:{} already has a parent", id.index(), id.generation())
            }
            SceneError::CyclicParent(id) => {
                write!(f, "node {}:{} would become its own ancestor", id.index(), id.generation())
            }
            SceneError::NotAChild(id) => {
                write!(f, "node {}:{} is not a child of this container", id.index(), id.generation())
            }
            SceneError::MissingParent(name) => {
                write!(f, "'{}' uses anchoring but has no parent", name)
            }
            SceneError::MissingTexture(asset) => write!(f, "texture '{}' is not available", asset),
            SceneError::StaleNode(id) => {
                write!(f, "node {}:{} no longer exists", id.index(), id.generation())
            }
        }
    }
}

impl std::error::Error for SceneError {}
