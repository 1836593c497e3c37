//! Axis-aligned box geometry for the push game
//!
//! Everything on screen is treated as a single rectangle. Positions are the
//! top-left corner in screen space (y grows downward, so smaller y is higher).

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle (top-left corner + size)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    #[inline]
    pub fn x(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn y(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.size.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.size.y
    }

    /// Right edge (x + width)
    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    /// Bottom edge (y + height)
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }
}

/// Is `above` higher on screen than `below`? Compares vertical centers;
/// false when equal.
pub fn is_above(above: &Rect, below: &Rect) -> bool {
    above.center().y < below.center().y
}

/// Is `a` left of `b`? Compares horizontal centers; false when equal.
pub fn is_left(a: &Rect, b: &Rect) -> bool {
    a.center().x < b.center().x
}

/// Are `a` and `b` touching or intersecting? Touching edges count.
pub fn colliding(a: &Rect, b: &Rect) -> bool {
    let min_x = b.x() - a.width();
    let max_x = b.right();
    let min_y = b.y() - a.height();
    let max_y = b.bottom();

    a.x() >= min_x && a.x() <= max_x && a.y() >= min_y && a.y() <= max_y
}

/// Is `above`'s horizontal center strictly within `below`'s horizontal span?
///
/// Only the horizontal component is examined. Used as the "still on the
/// platform" check: an agent whose center leaves the span has fallen off.
pub fn directly_above(below: &Rect, above: &Rect) -> bool {
    let mid = above.center().x;
    mid > below.x() && mid < below.right()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_is_left_zero_width() {
        let a = Rect::new(0.0, 0.0, 0.0, 0.0);
        let b = Rect::new(2.0, 0.0, 0.0, 0.0);
        assert!(is_left(&a, &b));
        assert!(!is_left(&b, &a));

        let c = Rect::new(0.0, 0.0, 0.0, 0.0);
        assert!(!is_left(&a, &c));
        assert!(!is_left(&c, &a));
    }

    #[test]
    fn test_is_above() {
        let high = Rect::new(0.0, 10.0, 30.0, 30.0);
        let low = Rect::new(0.0, 50.0, 30.0, 30.0);
        assert!(is_above(&high, &low));
        assert!(!is_above(&low, &high));
        assert!(!is_above(&high, &high));
    }

    #[test]
    fn test_colliding_touching_edges() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let right_neighbour = Rect::new(10.0, 0.0, 10.0, 10.0);
        let below_neighbour = Rect::new(0.0, 10.0, 10.0, 10.0);
        let apart = Rect::new(10.5, 0.0, 10.0, 10.0);

        assert!(colliding(&a, &right_neighbour));
        assert!(colliding(&right_neighbour, &a));
        assert!(colliding(&a, &below_neighbour));
        assert!(!colliding(&a, &apart));
    }

    #[test]
    fn test_agent_resting_on_platform_collides() {
        let platform = Rect::new(50.0, 200.0, 200.0, 100.0);
        let agent = Rect::new(100.0, 170.0, 30.0, 30.0);
        assert!(colliding(&agent, &platform));

        let airborne = Rect::new(100.0, 160.0, 30.0, 30.0);
        assert!(!colliding(&airborne, &platform));
    }

    #[test]
    fn test_directly_above_platform_span() {
        let platform = Rect::new(100.0, 200.0, 200.0, 100.0);

        // Center at x=250
        let inside = Rect::new(235.0, 170.0, 30.0, 30.0);
        assert!(directly_above(&platform, &inside));

        // Center at x=310
        let drifted = Rect::new(295.0, 170.0, 30.0, 30.0);
        assert!(!directly_above(&platform, &drifted));

        // Exactly on the edge is not "within"
        let on_edge = Rect::new(85.0, 170.0, 30.0, 30.0);
        assert!(!directly_above(&platform, &on_edge));
    }

    proptest! {
        #[test]
        fn is_left_is_antisymmetric(
            xa in -500.0f32..500.0,
            xb in -500.0f32..500.0,
            w in 0.0f32..50.0,
        ) {
            let a = Rect::new(xa, 0.0, w, w);
            let b = Rect::new(xb, 0.0, w, w);
            prop_assert!(!(is_left(&a, &b) && is_left(&b, &a)));
            if a.center().x < b.center().x {
                prop_assert!(is_left(&a, &b));
                prop_assert!(!is_left(&b, &a));
            }
            if a.center().x == b.center().x {
                prop_assert!(!is_left(&a, &b) && !is_left(&b, &a));
            }
        }

        #[test]
        fn box_always_collides_with_itself(
            x in -500.0f32..500.0,
            y in -500.0f32..500.0,
            w in 0.1f32..100.0,
            h in 0.1f32..100.0,
        ) {
            let r = Rect::new(x, y, w, h);
            prop_assert!(colliding(&r, &r));
        }

        #[test]
        fn center_strictly_inside_span_is_above(
            px in -200.0f32..200.0,
            pw in 10.0f32..300.0,
            t in 0.05f32..0.95,
        ) {
            let platform = Rect::new(px, 200.0, pw, 50.0);
            // Zero width, so the center is exactly x
            let agent = Rect::new(px + t * pw, 170.0, 0.0, 30.0);
            prop_assert!(directly_above(&platform, &agent));
        }

        #[test]
        fn center_on_or_past_an_edge_is_not_above(
            px in -200.0f32..200.0,
            pw in 1.0f32..300.0,
            d in 0.0f32..300.0,
        ) {
            let platform = Rect::new(px, 200.0, pw, 50.0);
            let off_left = Rect::new(platform.x() - d, 170.0, 0.0, 30.0);
            let off_right = Rect::new(platform.right() + d, 170.0, 0.0, 30.0);
            prop_assert!(!directly_above(&platform, &off_left));
            prop_assert!(!directly_above(&platform, &off_right));

            let on_left = Rect::new(platform.x(), 170.0, 0.0, 30.0);
            let on_right = Rect::new(platform.right(), 170.0, 0.0, 30.0);
            prop_assert!(!directly_above(&platform, &on_left));
            prop_assert!(!directly_above(&platform, &on_right));
        }
    }
}
