//! Core domain types and operations
//!
//! This module defines pure geometric types and the opaque window identifier.
//! None of them know about Win32; the platform layer converts at the boundary.

/// Opaque native window identifier
///
/// The handle is only ever referenced here, never owned: the window manager
/// decides when it becomes invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct WindowHandle(pub isize);

impl WindowHandle {
    /// The null handle, meaning "no window"
    pub const NULL: WindowHandle = WindowHandle(0);

    pub fn is_null(&self) -> bool {
        self.0 == 0
    }
}

/// Screen position in real pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Rectangle in screen coordinates, stored as its four edges
///
/// The layout matches the native `RECT` structure field for field
/// (left, top, right, bottom as 32-bit signed integers, no padding).
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    /// Creates a rectangle from its edges
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Creates a rectangle from an origin and a size
    pub fn from_origin_size(origin: Point, width: i32, height: i32) -> Self {
        Self::new(origin.x, origin.y, origin.x + width, origin.y + height)
    }

    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }

    pub fn origin(&self) -> Point {
        Point::new(self.left, self.top)
    }

    /// Returns true if the rectangle has no area
    ///
    /// Degenerate rectangles are never used in placement math; callers treat
    /// them as unavailable and fall back.
    pub fn is_degenerate(&self) -> bool {
        self.width() <= 0 || self.height() <= 0
    }

    /// Returns true if `other` lies entirely inside this rectangle
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.left >= self.left
            && other.top >= self.top
            && other.right <= self.right
            && other.bottom <= self.bottom
    }
}
