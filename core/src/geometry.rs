//! Pixel-space rectangles used for control regions
//!
//! All regions live in window pixel coordinates with the origin at the
//! top-left corner and y growing downwards.

use glam::IVec2;

/// Axis-aligned rectangle in pixel space.
///
/// `x`/`y` is the top-left corner. A point is inside when
/// `x <= p.x < x + w` and `y <= p.y < y + h`, so zero-size rectangles
/// never contain anything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    /// Empty rectangle at the origin
    pub const ZERO: Self = Self::new(0, 0, 0, 0);

    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Rectangle of the given size with its top-left corner at `pos`
    pub fn from_pos_size(pos: IVec2, size: IVec2) -> Self {
        Self::new(pos.x, pos.y, size.x, size.y)
    }

    /// Rectangle of the given size at the origin
    pub fn with_size(w: i32, h: i32) -> Self {
        Self::new(0, 0, w, h)
    }

    pub fn pos(&self) -> IVec2 {
        IVec2::new(self.x, self.y)
    }

    pub fn size(&self) -> IVec2 {
        IVec2::new(self.w, self.h)
    }

    /// Exclusive right edge
    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    /// Exclusive bottom edge
    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    pub fn center(&self) -> IVec2 {
        IVec2::new(self.x + self.w / 2, self.y + self.h / 2)
    }

    pub fn is_empty(&self) -> bool {
        self.w <= 0 || self.h <= 0
    }

    pub fn contains(&self, p: IVec2) -> bool {
        p.x >= self.x && p.x < self.right() && p.y >= self.y && p.y < self.bottom()
    }

    /// Move the rectangle so that its center lands on `pos`
    pub fn set_center(&mut self, pos: IVec2) {
        self.x = pos.x - self.w / 2;
        self.y = pos.y - self.h / 2;
    }

    /// Same size, centered on `pos`
    pub fn centered_at(mut self, pos: IVec2) -> Self {
        self.set_center(pos);
        self
    }

    /// Shift the rectangle so it lies inside `bounds`.
    ///
    /// When the rectangle is larger than `bounds` along an axis, its
    /// top/left edge is aligned with the bounds.
    pub fn fit_in(&mut self, bounds: Rect) {
        if self.right() > bounds.right() {
            self.x = bounds.right() - self.w;
        }
        if self.x < bounds.x {
            self.x = bounds.x;
        }
        if self.bottom() > bounds.bottom() {
            self.y = bounds.bottom() - self.h;
        }
        if self.y < bounds.y {
            self.y = bounds.y;
        }
    }

    /// Grow by `extra` pixels in total per axis, split evenly on both sides
    pub fn inflated(&self, extra: IVec2) -> Self {
        Self::new(
            self.x - extra.x / 2,
            self.y - extra.y / 2,
            self.w + extra.x,
            self.h + extra.y,
        )
    }
}

/// Round up to the next even integer
pub fn make_even_rounded_up(v: i32) -> i32 {
    if v % 2 == 0 { v } else { v + 1 }
}
