//! Narrow phase
//!
//! Exact intersection tests. All comparisons are closed: shapes that touch
//! count as colliding, points on a boundary count as inside.

use crate::math::Vec2;

use super::shape::{BoxShape, CircleShape};

pub fn box_box(a: &BoxShape, b: &BoxShape) -> bool {
    let delta = (a.centre() - b.centre()).abs();
    let reach = a.half_extents() + b.half_extents();
    delta.x <= reach.x && delta.y <= reach.y
}

pub fn box_circle(rect: &BoxShape, circle: &CircleShape) -> bool {
    let delta = (rect.centre() - circle.position).abs();
    let half = rect.half_extents();

    // Too far out on either axis
    if delta.x > half.x + circle.radius || delta.y > half.y + circle.radius {
        return false;
    }

    // Inside the box's band on one axis
    if delta.x <= half.x || delta.y <= half.y {
        return true;
    }

    // Nearest feature is a corner
    let corner = delta - half;
    corner.length_squared() <= circle.radius * circle.radius
}

pub fn circle_circle(a: &CircleShape, b: &CircleShape) -> bool {
    let reach = a.radius + b.radius;
    (a.position - b.position).length_squared() <= reach * reach
}

pub fn box_contains_point(rect: &BoxShape, point: Vec2) -> bool {
    point.x >= rect.position.x
        && point.x <= rect.right()
        && point.y >= rect.position.y
        && point.y <= rect.bottom()
}

pub fn circle_contains_point(circle: &CircleShape, point: Vec2) -> bool {
    (circle.position - point).length_squared() <= circle.radius * circle.radius
}
