//! Pointer state with edge detection

use crate::math::Vec2;

/// Pointer buttons the scene cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerButton {
    Left,
    Middle,
    Right,
}

/// Raw device state for a single frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerSample {
    pub position: Vec2,
    pub left_down: bool,
    pub middle_down: bool,
    pub right_down: bool,
    /// Wheel movement this frame (positive = away from the user)
    pub scroll: f32,
}

impl PointerSample {
    pub fn at(position: Vec2) -> Self {
        Self { position, ..Default::default() }
    }

    fn button(&self, button: PointerButton) -> bool {
        match button {
            PointerButton::Left => self.left_down,
            PointerButton::Middle => self.middle_down,
            PointerButton::Right => self.right_down,
        }
    }
}

/// Pointer state across two frames.
///
/// A click is reported on release (down last frame, up this frame) so
/// effects fire when the user lets go.
#[derive(Debug, Clone, Default)]
pub struct Pointer {
    current: PointerSample,
    previous: PointerSample,
    /// Swallows every query until the next `advance`
    flushed: bool,
}

impl Pointer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pointer resting at `position` with no button history.
    pub fn at(position: Vec2) -> Self {
        let sample = PointerSample::at(position);
        Self { current: sample, previous: sample, flushed: false }
    }

    /// Start a new frame with a fresh device sample.
    pub fn advance(&mut self, sample: PointerSample) {
        self.previous = self.current;
        self.current = sample;
        self.flushed = false;
    }

    pub fn position(&self) -> Vec2 {
        self.current.position
    }

    /// Released this frame after being held last frame.
    pub fn is_clicked(&self, button: PointerButton) -> bool {
        if self.flushed {
            return false;
        }
        !self.current.button(button) && self.previous.button(button)
    }

    pub fn is_down(&self, button: PointerButton) -> bool {
        if self.flushed {
            return false;
        }
        self.current.button(button)
    }

    pub fn any_down(&self) -> bool {
        self.is_down(PointerButton::Left)
            || self.is_down(PointerButton::Middle)
            || self.is_down(PointerButton::Right)
    }

    /// Movement since last frame
    pub fn drag_delta(&self) -> Vec2 {
        if self.flushed {
            return Vec2::ZERO;
        }
        self.current.position - self.previous.position
    }

    pub fn is_dragged(&self, button: PointerButton) -> bool {
        self.is_down(button) && self.drag_delta() != Vec2::ZERO
    }

    /// Wheel movement this frame
    pub fn scroll_delta(&self) -> f32 {
        if self.flushed {
            return 0.0;
        }
        self.current.scroll
    }

    pub fn has_scrolled(&self) -> bool {
        self.scroll_delta() != 0.0
    }

    /// Consume the pointer for the rest of this frame.
    pub fn flush(&mut self) {
        self.flushed = true;
    }

    pub fn is_flushed(&self) -> bool {
        self.flushed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(x: f32, y: f32, left: bool) -> PointerSample {
        PointerSample { left_down: left, ..PointerSample::at(Vec2::new(x, y)) }
    }

    #[test]
    fn test_click_fires_on_release() {
        let mut pointer = Pointer::new();
        pointer.advance(sample(0.0, 0.0, true));
        assert!(pointer.is_down(PointerButton::Left));
        assert!(!pointer.is_clicked(PointerButton::Left));

        pointer.advance(sample(0.0, 0.0, false));
        assert!(pointer.is_clicked(PointerButton::Left));
        assert!(!pointer.is_clicked(PointerButton::Right));

        pointer.advance(sample(0.0, 0.0, false));
        assert!(!pointer.is_clicked(PointerButton::Left));
    }

    #[test]
    fn test_drag_delta() {
        let mut pointer = Pointer::at(Vec2::new(10.0, 10.0));
        pointer.advance(sample(15.0, 7.0, true));
        assert_eq!(pointer.drag_delta(), Vec2::new(5.0, -3.0));
        assert!(pointer.is_dragged(PointerButton::Left));
    }

    #[test]
    fn test_flush_hides_everything_until_next_frame() {
        let mut pointer = Pointer::new();
        pointer.advance(sample(0.0, 0.0, true));
        pointer.advance(sample(3.0, 0.0, false));
        pointer.flush();

        assert!(!pointer.is_clicked(PointerButton::Left));
        assert!(!pointer.any_down());
        assert_eq!(pointer.drag_delta(), Vec2::ZERO);

        pointer.advance(sample(3.0, 0.0, false));
        assert!(!pointer.is_flushed());
    }

    #[test]
    fn test_scroll_is_per_frame() {
        let mut pointer = Pointer::new();
        assert!(!pointer.has_scrolled());

        pointer.advance(PointerSample { scroll: 1.5, ..PointerSample::default() });
        assert!(pointer.has_scrolled());
        assert!((pointer.scroll_delta() - 1.5).abs() < 0.001);

        pointer.flush();
        assert!(!pointer.has_scrolled());
        assert_eq!(pointer.scroll_delta(), 0.0);

        pointer.advance(PointerSample::default());
        assert!(!pointer.has_scrolled());
    }
}
