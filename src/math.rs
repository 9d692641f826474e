//! 2D math helpers
//!
//! Vectors come from macroquad (glam underneath). The helpers here are the
//! two operations the transform chain needs: angle wrapping and rotation.

use std::f32::consts::{PI, TAU};

pub use macroquad::math::{vec2, Rect, Vec2};

/// Wrap an angle in radians into (-PI, PI].
pub fn wrap_angle(angle: f32) -> f32 {
    let mut wrapped = angle % TAU;
    if wrapped <= -PI {
        wrapped += TAU;
    } else if wrapped > PI {
        wrapped -= TAU;
    }
    wrapped
}

/// Rotate a vector counter-clockwise by `angle` radians.
pub fn rotate(v: Vec2, angle: f32) -> Vec2 {
    let (sin, cos) = angle.sin_cos();
    Vec2::new(v.x * cos - v.y * sin, v.x * sin + v.y * cos)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_angle_range() {
        assert!((wrap_angle(PI) - PI).abs() < 0.001);
        assert!((wrap_angle(-PI) - PI).abs() < 0.001);
        assert!((wrap_angle(3.0 * PI) - PI).abs() < 0.001);
        assert!((wrap_angle(PI / 2.0 + TAU) - PI / 2.0).abs() < 0.001);
        assert!((wrap_angle(-PI / 2.0) + PI / 2.0).abs() < 0.001);
    }

    #[test]
    fn test_rotate_quarter_turn() {
        let r = rotate(Vec2::new(5.0, 0.0), PI / 2.0);
        assert!(r.x.abs() < 0.001);
        assert!((r.y - 5.0).abs() < 0.001);
    }
}
