//! Integer rectangles in logical window coordinates.

use crate::math::IVec2;

/// Axis-aligned rectangle with its origin at the top-left corner.
///
/// # Examples
/// ```
/// use stencilwin_core::geometry::Rect;
///
/// let frame = Rect::new(10, 20, 100, 50);
/// assert!(frame.contains(10, 20));
/// assert!(!frame.contains(110, 20));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    pub const fn origin(&self) -> IVec2 {
        IVec2::new(self.x, self.y)
    }

    pub const fn size(&self) -> Size {
        Size::new(self.w, self.h)
    }

    /// Right edge (exclusive).
    pub const fn right(&self) -> i32 {
        self.x + self.w
    }

    /// Bottom edge (exclusive).
    pub const fn bottom(&self) -> i32 {
        self.y + self.h
    }

    /// Half-open containment: the left/top edges are inside, right/bottom are not.
    pub const fn contains(&self, x: i32, y: i32) -> bool {
        self.x <= x && self.y <= y && self.x + self.w > x && self.y + self.h > y
    }

    pub const fn contains_point(&self, point: IVec2) -> bool {
        self.contains(point.x, point.y)
    }

    /// Strict overlap test; rectangles that only share an edge do not overlap.
    pub const fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.x + other.w
            && self.x + self.w > other.x
            && self.y < other.y + other.h
            && self.y + self.h > other.y
    }

    pub const fn translate(&self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy, self.w, self.h)
    }

    /// Grow the rectangle by `amount` on every side.
    pub const fn inflate(&self, amount: i32) -> Self {
        Self::new(
            self.x - amount,
            self.y - amount,
            self.w + amount * 2,
            self.h + amount * 2,
        )
    }

    /// Extend the rectangle upwards by `top` and downwards by `bottom`.
    pub const fn extend_vertical(&self, top: i32, bottom: i32) -> Self {
        Self::new(self.x, self.y - top, self.w, self.h + top + bottom)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const fn new(width: i32, height: i32) -> Self {
        Size { width, height }
    }
}
