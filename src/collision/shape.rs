//! Collider shapes
//!
//! Two shapes exist: an axis-aligned box anchored at its top-left corner and
//! a circle anchored at its centre. `Shape` is a closed enum so every match
//! site has to handle a new shape when one is added.

use crate::input::{Pointer, PointerButton};
use crate::math::Vec2;

use super::{dispatch, narrow};

/// Axis-aligned box. `position` is the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxShape {
    pub position: Vec2,
    pub width: f32,
    pub height: f32,
}

impl BoxShape {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { position: Vec2::new(x, y), width, height }
    }

    pub fn from_size(position: Vec2, size: Vec2) -> Self {
        Self { position, width: size.x, height: size.y }
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    pub fn half_extents(&self) -> Vec2 {
        self.size() * 0.5
    }

    pub fn centre(&self) -> Vec2 {
        self.position + self.half_extents()
    }

    pub fn right(&self) -> f32 {
        self.position.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.position.y + self.height
    }

    /// Smallest box containing both.
    pub fn union(&self, other: &BoxShape) -> BoxShape {
        let min = self.position.min(other.position);
        let max = Vec2::new(self.right(), self.bottom())
            .max(Vec2::new(other.right(), other.bottom()));
        BoxShape::from_size(min, max - min)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleShape {
    /// Centre
    pub position: Vec2,
    pub radius: f32,
}

impl CircleShape {
    pub const fn new(x: f32, y: f32, radius: f32) -> Self {
        Self { position: Vec2::new(x, y), radius }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Box(BoxShape),
    Circle(CircleShape),
}

impl Shape {
    pub fn position(&self) -> Vec2 {
        match self {
            Shape::Box(b) => b.position,
            Shape::Circle(c) => c.position,
        }
    }

    pub fn set_position(&mut self, position: Vec2) {
        match self {
            Shape::Box(b) => b.position = position,
            Shape::Circle(c) => c.position = position,
        }
    }

    pub fn centre(&self) -> Vec2 {
        match self {
            Shape::Box(b) => b.centre(),
            Shape::Circle(c) => c.position,
        }
    }

    /// Move the shape so its centre lands on `centre`.
    pub fn set_centre(&mut self, centre: Vec2) {
        match self {
            Shape::Box(b) => b.position = centre - b.half_extents(),
            Shape::Circle(c) => c.position = centre,
        }
    }

    pub fn contains_point(&self, point: Vec2) -> bool {
        match self {
            Shape::Box(b) => narrow::box_contains_point(b, point),
            Shape::Circle(c) => narrow::circle_contains_point(c, point),
        }
    }

    /// Axis-aligned bounding box
    pub fn bounds(&self) -> BoxShape {
        match self {
            Shape::Box(b) => *b,
            Shape::Circle(c) => BoxShape::from_size(
                c.position - Vec2::splat(c.radius),
                Vec2::splat(c.radius * 2.0),
            ),
        }
    }

    pub fn collided_with(&self, other: &Shape) -> bool {
        dispatch::collided_with(self, other)
    }
}

/// Per-frame pointer flags for a collider.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PointerInteraction {
    pub is_mouse_over: bool,
    /// Pointer moved onto the shape this frame
    pub is_entered: bool,
    /// Pointer moved off the shape this frame
    pub is_exited: bool,
    /// Click released over the shape this frame
    pub is_clicked: bool,
    /// Any button held while over the shape
    pub is_pressed: bool,
    /// Toggled by each fresh click over the shape
    pub is_selected: bool,
}

/// A shape plus the pointer state computed against it.
///
/// The owning node re-centres it on its world position every update; the
/// collider never moves itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Collider {
    shape: Shape,
    interaction: PointerInteraction,
}

impl Collider {
    pub fn new(shape: Shape) -> Self {
        Self { shape, interaction: PointerInteraction::default() }
    }

    pub fn boxed(position: Vec2, size: Vec2) -> Self {
        Self::new(Shape::Box(BoxShape::from_size(position, size)))
    }

    pub fn circle(position: Vec2, radius: f32) -> Self {
        Self::new(Shape::Circle(CircleShape { position, radius }))
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn interaction(&self) -> &PointerInteraction {
        &self.interaction
    }

    pub fn position(&self) -> Vec2 {
        self.shape.position()
    }

    pub fn set_position(&mut self, position: Vec2) {
        self.shape.set_position(position);
    }

    pub fn centre(&self) -> Vec2 {
        self.shape.centre()
    }

    pub fn set_centre(&mut self, centre: Vec2) {
        self.shape.set_centre(centre);
    }

    pub fn contains_point(&self, point: Vec2) -> bool {
        self.shape.contains_point(point)
    }

    pub fn collided_with(&self, other: &Collider) -> bool {
        self.shape.collided_with(&other.shape)
    }

    /// Recompute the pointer flags for this frame.
    pub fn handle_input(&mut self, pointer: &Pointer) {
        let state = &mut self.interaction;
        let was_over = state.is_mouse_over;

        state.is_mouse_over = self.shape.contains_point(pointer.position());
        state.is_entered = state.is_mouse_over && !was_over;
        state.is_exited = !state.is_mouse_over && was_over;

        if pointer.is_clicked(PointerButton::Left) {
            state.is_selected = state.is_mouse_over && !state.is_selected;
            state.is_clicked = state.is_mouse_over;
        } else {
            state.is_clicked = false;
        }

        state.is_pressed = state.is_mouse_over && pointer.any_down();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::PointerSample;

    fn press(pointer: &mut Pointer, at: Vec2) {
        pointer.advance(PointerSample { left_down: true, ..PointerSample::at(at) });
    }

    fn release(pointer: &mut Pointer, at: Vec2) {
        pointer.advance(PointerSample::at(at));
    }

    #[test]
    fn test_box_centre_and_bounds() {
        let b = BoxShape::new(0.0, 10.0, 10.0, 20.0);
        assert_eq!(b.centre(), Vec2::new(5.0, 20.0));
        assert_eq!(Shape::Box(b).bounds(), b);

        let c = Shape::Circle(CircleShape::new(5.0, 5.0, 2.0));
        assert_eq!(c.bounds(), BoxShape::new(3.0, 3.0, 4.0, 4.0));
    }

    #[test]
    fn test_union_covers_both() {
        let a = BoxShape::new(0.0, 0.0, 10.0, 10.0);
        let b = BoxShape::new(-5.0, 20.0, 2.0, 2.0);
        assert_eq!(a.union(&b), BoxShape::new(-5.0, 0.0, 15.0, 22.0));
    }

    #[test]
    fn test_enter_and_exit_edges() {
        let mut collider = Collider::boxed(Vec2::ZERO, Vec2::new(10.0, 10.0));
        let mut pointer = Pointer::at(Vec2::new(50.0, 50.0));

        collider.handle_input(&pointer);
        assert!(!collider.interaction().is_mouse_over);

        release(&mut pointer, Vec2::new(5.0, 5.0));
        collider.handle_input(&pointer);
        assert!(collider.interaction().is_mouse_over);
        assert!(collider.interaction().is_entered);

        collider.handle_input(&pointer);
        assert!(!collider.interaction().is_entered);

        release(&mut pointer, Vec2::new(50.0, 5.0));
        collider.handle_input(&pointer);
        assert!(collider.interaction().is_exited);
        assert!(!collider.interaction().is_mouse_over);
    }

    #[test]
    fn test_click_toggles_selection() {
        let mut collider = Collider::circle(Vec2::ZERO, 10.0);
        let mut pointer = Pointer::at(Vec2::new(1.0, 1.0));

        press(&mut pointer, Vec2::new(1.0, 1.0));
        collider.handle_input(&pointer);
        assert!(collider.interaction().is_pressed);
        assert!(!collider.interaction().is_clicked);

        release(&mut pointer, Vec2::new(1.0, 1.0));
        collider.handle_input(&pointer);
        assert!(collider.interaction().is_clicked);
        assert!(collider.interaction().is_selected);

        // Holding still with no new click keeps the selection
        release(&mut pointer, Vec2::new(1.0, 1.0));
        collider.handle_input(&pointer);
        assert!(!collider.interaction().is_clicked);
        assert!(collider.interaction().is_selected);

        press(&mut pointer, Vec2::new(1.0, 1.0));
        release(&mut pointer, Vec2::new(1.0, 1.0));
        collider.handle_input(&pointer);
        assert!(!collider.interaction().is_selected);
    }

    #[test]
    fn test_click_elsewhere_deselects() {
        let mut collider = Collider::boxed(Vec2::ZERO, Vec2::new(10.0, 10.0));
        let mut pointer = Pointer::at(Vec2::new(5.0, 5.0));

        press(&mut pointer, Vec2::new(5.0, 5.0));
        release(&mut pointer, Vec2::new(5.0, 5.0));
        collider.handle_input(&pointer);
        assert!(collider.interaction().is_selected);

        press(&mut pointer, Vec2::new(80.0, 80.0));
        release(&mut pointer, Vec2::new(80.0, 80.0));
        collider.handle_input(&pointer);
        assert!(!collider.interaction().is_selected);
        assert!(!collider.interaction().is_clicked);
    }

    #[test]
    fn test_set_centre() {
        let mut collider = Collider::boxed(Vec2::ZERO, Vec2::new(10.0, 4.0));
        collider.set_centre(Vec2::new(50.0, 50.0));
        assert_eq!(collider.position(), Vec2::new(45.0, 48.0));
        assert_eq!(collider.centre(), Vec2::new(50.0, 50.0));

        let mut circle = Collider::circle(Vec2::ZERO, 3.0);
        circle.set_centre(Vec2::new(1.0, 2.0));
        assert_eq!(circle.position(), Vec2::new(1.0, 2.0));
    }

    #[test]
    fn test_set_position_moves_shape() {
        let mut collider = Collider::boxed(Vec2::ZERO, Vec2::new(4.0, 4.0));
        collider.set_position(Vec2::new(100.0, 100.0));
        assert!(collider.contains_point(Vec2::new(102.0, 102.0)));
        assert!(!collider.contains_point(Vec2::new(2.0, 2.0)));
    }
}
