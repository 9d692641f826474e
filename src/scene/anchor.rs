//! Anchoring
//!
//! An anchor says where a child's centre sits relative to its parent's
//! bounds. Depth pushes the child outward (positive) or inward (negative)
//! in units of half its own size along the anchored axis.

use bitflags::bitflags;

use crate::math::Vec2;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Anchor: u8 {
        const TOP = 1 << 0;
        const BOTTOM = 1 << 1;
        const LEFT = 1 << 2;
        const RIGHT = 1 << 3;
        const CENTRE = 1 << 4;

        const TOP_LEFT = Self::TOP.bits() | Self::LEFT.bits();
        const TOP_CENTRE = Self::TOP.bits() | Self::CENTRE.bits();
        const TOP_RIGHT = Self::TOP.bits() | Self::RIGHT.bits();
        const CENTRE_LEFT = Self::CENTRE.bits() | Self::LEFT.bits();
        const CENTRE_RIGHT = Self::CENTRE.bits() | Self::RIGHT.bits();
        const BOTTOM_LEFT = Self::BOTTOM.bits() | Self::LEFT.bits();
        const BOTTOM_CENTRE = Self::BOTTOM.bits() | Self::CENTRE.bits();
        const BOTTOM_RIGHT = Self::BOTTOM.bits() | Self::RIGHT.bits();
    }
}

impl Default for Anchor {
    fn default() -> Self {
        Anchor::CENTRE
    }
}

impl Anchor {
    /// Plain centre at depth zero needs no parent and leaves the position alone.
    pub fn is_trivial(self, depth: i32) -> bool {
        self == Anchor::CENTRE && depth == 0
    }
}

/// Local offset of a child of `size` anchored inside a parent of `parent_size`.
pub fn anchored_position(anchor: Anchor, depth: i32, size: Vec2, parent_size: Vec2) -> Vec2 {
    let depth = depth as f32;
    let reach_x = 0.5 * (parent_size.x + depth * size.x);
    let reach_y = 0.5 * (parent_size.y + depth * size.y);
    let y_sign = if anchor.contains(Anchor::TOP) { -1.0 } else { 1.0 };

    if anchor.contains(Anchor::CENTRE) {
        if anchor.intersects(Anchor::LEFT | Anchor::RIGHT) {
            let x_sign = if anchor.contains(Anchor::LEFT) { -1.0 } else { 1.0 };
            Vec2::new(x_sign * reach_x, 0.0)
        } else {
            Vec2::new(0.0, y_sign * reach_y)
        }
    } else {
        let mut position = Vec2::new(0.0, y_sign * reach_y);
        if anchor.contains(Anchor::LEFT) {
            position.x -= reach_x;
        } else if anchor.contains(Anchor::RIGHT) {
            position.x += reach_x;
        }
        position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PARENT: Vec2 = Vec2::new(100.0, 50.0);
    const CHILD: Vec2 = Vec2::new(10.0, 10.0);

    fn close(a: Vec2, b: Vec2) -> bool {
        (a - b).length() < 0.001
    }

    #[test]
    fn test_trivial_anchor() {
        assert!(Anchor::CENTRE.is_trivial(0));
        assert!(!Anchor::CENTRE.is_trivial(1));
        assert!(!Anchor::TOP_LEFT.is_trivial(0));
        assert_eq!(Anchor::default(), Anchor::CENTRE);
    }

    #[test]
    fn test_corner_anchors() {
        assert!(close(anchored_position(Anchor::TOP_LEFT, 0, CHILD, PARENT), Vec2::new(-50.0, -25.0)));
        assert!(close(anchored_position(Anchor::BOTTOM_RIGHT, -1, CHILD, PARENT), Vec2::new(45.0, 20.0)));
    }

    #[test]
    fn test_centre_horizontal_anchors() {
        assert!(close(anchored_position(Anchor::CENTRE_LEFT, 0, CHILD, PARENT), Vec2::new(-50.0, 0.0)));
        assert!(close(anchored_position(Anchor::CENTRE_RIGHT, 1, CHILD, PARENT), Vec2::new(55.0, 0.0)));
    }

    #[test]
    fn test_vertical_anchors_use_parent_height() {
        // Parent is wider than tall, so using the width here would give -55
        assert!(close(anchored_position(Anchor::TOP_CENTRE, 1, CHILD, PARENT), Vec2::new(0.0, -30.0)));
        assert!(close(anchored_position(Anchor::BOTTOM_CENTRE, -1, CHILD, PARENT), Vec2::new(0.0, 20.0)));
    }

    #[test]
    fn test_right_anchor_uses_child_width() {
        let tall = Vec2::new(10.0, 40.0);
        assert!(close(anchored_position(Anchor::TOP_RIGHT, 1, tall, PARENT), Vec2::new(55.0, -45.0)));
    }

    #[test]
    fn test_centre_with_depth_moves_down() {
        assert!(close(anchored_position(Anchor::CENTRE, 1, CHILD, PARENT), Vec2::new(0.0, 30.0)));
    }
}
