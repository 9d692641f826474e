//! Shape pair dispatch
//!
//! Routes a pair of shapes to the matching narrow-phase test. The match is
//! exhaustive, so a new `Shape` variant does not compile until every pairing
//! is handled here.

use super::narrow;
use super::shape::Shape;

pub fn collided_with(a: &Shape, b: &Shape) -> bool {
    match (a, b) {
        (Shape::Box(a), Shape::Box(b)) => narrow::box_box(a, b),
        (Shape::Box(rect), Shape::Circle(circle)) | (Shape::Circle(circle), Shape::Box(rect)) => {
            narrow::box_circle(rect, circle)
        }
        (Shape::Circle(a), Shape::Circle(b)) => narrow::circle_circle(a, b),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collision::shape::{BoxShape, CircleShape};

    #[test]
    fn test_dispatch_is_symmetric() {
        let rect = Shape::Box(BoxShape::new(0.0, 0.0, 10.0, 10.0));
        let near = Shape::Circle(CircleShape::new(-1.0, -1.0, 5.0));
        let far = Shape::Circle(CircleShape::new(-5.0, -5.0, 5.0));

        assert!(collided_with(&rect, &near));
        assert!(collided_with(&near, &rect));
        assert!(!collided_with(&rect, &far));
        assert!(!collided_with(&far, &rect));
    }

    #[test]
    fn test_dispatch_routes_same_kind() {
        let a = Shape::Box(BoxShape::new(0.0, 0.0, 10.0, 10.0));
        let b = Shape::Box(BoxShape::new(10.0, 0.0, 10.0, 10.0));
        assert!(collided_with(&a, &b));

        let c = Shape::Circle(CircleShape::new(0.0, 0.0, 1.0));
        let d = Shape::Circle(CircleShape::new(3.0, 0.0, 1.0));
        assert!(!collided_with(&c, &d));
    }
}
