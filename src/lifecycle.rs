//! Lifecycle state machine
//!
//! Every scene object walks the same path:
//!
//! load -> initialise -> begin -> { handle_input, update, draw }* -> die
//!
//! `Lifecycle` holds the flags and enforces the ordering. The `Component`
//! trait is the interface composite objects implement; they do their own
//! work and then delegate to their `Lifecycle` (and their children)
//! explicitly, so each override keeps the base contract.

use crate::error::SceneError;
use crate::input::Pointer;
use crate::render::Surface;

/// The operations every lifecycle unit supports.
///
/// `handle_input` and `draw` do nothing unless overridden. The rest carry
/// contract checks and must be implemented, usually by delegating to a
/// `Lifecycle` after the implementor's own step.
pub trait Component {
    /// Acquire textures and data. Valid exactly once.
    fn load(&mut self) -> Result<(), SceneError>;

    /// Derive state from loaded data. Valid exactly once.
    fn initialise(&mut self) -> Result<(), SceneError>;

    /// First-update hook. Requires load and initialise, valid exactly once.
    fn begin(&mut self) -> Result<(), SceneError>;

    fn handle_input(&mut self, _dt: f32, _pointer: &Pointer) -> Result<(), SceneError> {
        Ok(())
    }

    /// Per-frame logic. Begins the unit first if that has not happened yet.
    fn update(&mut self, dt: f32) -> Result<(), SceneError>;

    fn draw(&mut self, _surface: &mut dyn Surface) -> Result<(), SceneError> {
        Ok(())
    }

    /// Mark dead and hide. Owners must forward this to their children.
    fn die(&mut self) -> Result<(), SceneError>;

    /// Enable input, update and draw (optionally for children too).
    fn show(&mut self, cascade: bool) -> Result<(), SceneError>;

    /// Disable input, update and draw (optionally for children too).
    fn hide(&mut self, cascade: bool) -> Result<(), SceneError>;
}

/// Lifecycle flags shared by every scene object and container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lifecycle {
    should_load: bool,
    should_initialise: bool,
    is_begun: bool,
    is_alive: bool,
    should_handle_input: bool,
    should_update: bool,
    should_draw: bool,
    name: String,
}

impl Lifecycle {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            should_load: true,
            should_initialise: true,
            is_begun: false,
            is_alive: true,
            should_handle_input: true,
            should_update: true,
            should_draw: true,
            name: name.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn should_load(&self) -> bool {
        self.should_load
    }

    pub fn should_initialise(&self) -> bool {
        self.should_initialise
    }

    pub fn is_begun(&self) -> bool {
        self.is_begun
    }

    pub fn is_alive(&self) -> bool {
        self.is_alive
    }

    pub fn should_handle_input(&self) -> bool {
        self.should_handle_input
    }

    pub fn should_update(&self) -> bool {
        self.should_update
    }

    pub fn should_draw(&self) -> bool {
        self.should_draw
    }

    // Setters are no-ops once dead: a dead unit stays inert.

    pub fn set_should_handle_input(&mut self, value: bool) {
        self.should_handle_input = value && self.is_alive;
    }

    pub fn set_should_update(&mut self, value: bool) {
        self.should_update = value && self.is_alive;
    }

    pub fn set_should_draw(&mut self, value: bool) {
        self.should_draw = value && self.is_alive;
    }

    fn set_active(&mut self, active: bool) {
        self.set_should_handle_input(active);
        self.set_should_update(active);
        self.set_should_draw(active);
    }
}

impl Default for Lifecycle {
    fn default() -> Self {
        Self::new("")
    }
}

impl Component for Lifecycle {
    fn load(&mut self) -> Result<(), SceneError> {
        if !self.should_load {
            return Err(SceneError::AlreadyLoaded(self.name.clone()));
        }
        self.should_load = false;
        Ok(())
    }

    fn initialise(&mut self) -> Result<(), SceneError> {
        if !self.should_initialise {
            return Err(SceneError::AlreadyInitialised(self.name.clone()));
        }
        self.should_initialise = false;
        Ok(())
    }

    fn begin(&mut self) -> Result<(), SceneError> {
        if self.should_load {
            return Err(SceneError::BeginBeforeLoad(self.name.clone()));
        }
        if self.should_initialise {
            return Err(SceneError::BeginBeforeInitialise(self.name.clone()));
        }
        if self.is_begun {
            return Err(SceneError::AlreadyBegun(self.name.clone()));
        }
        self.is_begun = true;
        Ok(())
    }

    fn update(&mut self, _dt: f32) -> Result<(), SceneError> {
        if !self.is_begun {
            self.begin()?;
        }
        debug_assert!(self.is_begun);
        Ok(())
    }

    fn die(&mut self) -> Result<(), SceneError> {
        self.is_alive = false;
        self.hide(true)
    }

    fn show(&mut self, _cascade: bool) -> Result<(), SceneError> {
        self.set_active(true);
        Ok(())
    }

    fn hide(&mut self, _cascade: bool) -> Result<(), SceneError> {
        self.set_active(false);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ready(name: &str) -> Lifecycle {
        let mut unit = Lifecycle::new(name);
        unit.load().unwrap();
        unit.initialise().unwrap();
        unit
    }

    #[test]
    fn test_fresh_unit_flags() {
        let unit = Lifecycle::new("fresh");
        assert!(unit.should_load());
        assert!(unit.should_initialise());
        assert!(!unit.is_begun());
        assert!(unit.is_alive());
        assert!(unit.should_handle_input() && unit.should_update() && unit.should_draw());
    }

    #[test]
    fn test_load_initialise_begin() {
        let mut unit = ready("unit");
        unit.begin().unwrap();

        assert!(!unit.should_load());
        assert!(!unit.should_initialise());
        assert!(unit.is_begun());
        assert_eq!(unit.begin(), Err(SceneError::AlreadyBegun("unit".to_string())));
    }

    #[test]
    fn test_double_load_and_initialise_rejected() {
        let mut unit = ready("twice");
        assert_eq!(unit.load(), Err(SceneError::AlreadyLoaded("twice".to_string())));
        assert_eq!(
            unit.initialise(),
            Err(SceneError::AlreadyInitialised("twice".to_string()))
        );
    }

    #[test]
    fn test_begin_requires_load_and_initialise() {
        let mut unit = Lifecycle::new("early");
        assert_eq!(unit.begin(), Err(SceneError::BeginBeforeLoad("early".to_string())));
        unit.load().unwrap();
        assert_eq!(
            unit.begin(),
            Err(SceneError::BeginBeforeInitialise("early".to_string()))
        );
        assert!(!unit.is_begun());
    }

    #[test]
    fn test_update_begins_lazily_once() {
        let mut unit = ready("lazy");
        unit.update(0.016).unwrap();
        assert!(unit.is_begun());
        // Second update must not try to begin again
        unit.update(0.016).unwrap();
        assert!(unit.is_begun());
    }

    #[test]
    fn test_death_is_irreversible() {
        let mut unit = ready("doomed");
        unit.die().unwrap();
        assert!(!unit.is_alive());

        unit.show(true).unwrap();
        unit.set_should_update(true);
        unit.die().unwrap();

        assert!(!unit.is_alive());
        assert!(!unit.should_handle_input());
        assert!(!unit.should_update());
        assert!(!unit.should_draw());
    }

    #[test]
    fn test_hide_is_idempotent_and_show_restores() {
        let mut once = Lifecycle::new("a");
        once.hide(true).unwrap();
        let mut twice = Lifecycle::new("a");
        twice.hide(true).unwrap();
        twice.hide(true).unwrap();
        assert_eq!(once, twice);

        twice.show(true).unwrap();
        assert!(twice.should_handle_input() && twice.should_update() && twice.should_draw());
        assert!(twice.is_alive());
    }
}
