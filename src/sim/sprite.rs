//! Shared drawable handle
//!
//! A `Sprite` is the positionable box an agent is drawn as. Cloning it gives
//! another handle to the same box, so a host can keep drawing an agent after
//! the match ends and the AI can watch its opponent without owning it.

use std::cell::Cell;
use std::rc::Rc;

use glam::Vec2;

use super::geometry::Rect;

#[derive(Debug, Clone, Default)]
pub struct Sprite {
    rect: Rc<Cell<Rect>>,
}

impl Sprite {
    pub fn new(rect: Rect) -> Self {
        Self {
            rect: Rc::new(Cell::new(rect)),
        }
    }

    /// Current bounding box (copied out)
    #[inline]
    pub fn rect(&self) -> Rect {
        self.rect.get()
    }

    #[inline]
    pub fn x(&self) -> f32 {
        self.rect().x()
    }

    #[inline]
    pub fn y(&self) -> f32 {
        self.rect().y()
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.rect().width()
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.rect().height()
    }

    pub fn set_position(&self, x: f32, y: f32) {
        let mut rect = self.rect.get();
        rect.pos = Vec2::new(x, y);
        self.rect.set(rect);
    }

    pub fn set_size(&self, width: f32, height: f32) {
        let mut rect = self.rect.get();
        rect.size = Vec2::new(width, height);
        self.rect.set(rect);
    }

    /// Do both handles point at the same box?
    pub fn same_as(&self, other: &Sprite) -> bool {
        Rc::ptr_eq(&self.rect, &other.rect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_position() {
        let sprite = Sprite::new(Rect::new(100.0, 170.0, 30.0, 30.0));
        let view = sprite.clone();

        sprite.set_position(120.0, 160.0);
        assert_eq!(view.x(), 120.0);
        assert_eq!(view.y(), 160.0);
        assert!(view.same_as(&sprite));
    }

    #[test]
    fn test_set_size_keeps_position() {
        let sprite = Sprite::new(Rect::new(5.0, 6.0, 1.0, 1.0));
        sprite.set_size(30.0, 40.0);
        assert_eq!(sprite.rect(), Rect::new(5.0, 6.0, 30.0, 40.0));
        assert!(!sprite.same_as(&Sprite::new(sprite.rect())));
    }
}
