//! Window geometry primitives
//!
//! Coordinates are signed so that deltas and partially off-screen origins
//! can be represented. One unit is one terminal cell.

use ratatui::layout::Rect;

/// A point in either window-local or global (terminal) coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl std::ops::Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Width and height pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// Position and size of the application window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WindowGeometry {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl WindowGeometry {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Convert a global position to window-local coordinates
    pub fn to_local(&self, global: Point) -> Point {
        global - self.origin()
    }

    /// Whether a global position falls inside the window
    pub fn contains(&self, global: Point) -> bool {
        global.x >= self.x
            && global.x < self.x + self.width
            && global.y >= self.y
            && global.y < self.y + self.height
    }

    /// Keep the window inside `bounds` by shifting its origin.
    ///
    /// Size is never reduced below `min`; if the bounds are smaller than that,
    /// the window is pinned to the bounds' origin and overflows right/down.
    pub fn fit_within(&mut self, bounds: Size, min: Size) {
        self.width = self.width.min(bounds.width).max(min.width);
        self.height = self.height.min(bounds.height).max(min.height);
        self.x = self.x.min(bounds.width - self.width).max(0);
        self.y = self.y.min(bounds.height - self.height).max(0);
    }

    /// The on-screen part of the window as a ratatui rect
    pub fn visible_rect(&self, screen: Rect) -> Rect {
        let left = self.x.max(screen.x as i32);
        let top = self.y.max(screen.y as i32);
        let right = (self.x + self.width).min(screen.right() as i32);
        let bottom = (self.y + self.height).min(screen.bottom() as i32);

        if right <= left || bottom <= top {
            return Rect::new(screen.x, screen.y, 0, 0);
        }

        Rect::new(
            left as u16,
            top as u16,
            (right - left) as u16,
            (bottom - top) as u16,
        )
    }
}
