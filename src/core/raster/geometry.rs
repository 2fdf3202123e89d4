//! Integer points and axis-aligned rectangles.

use serde::{Deserialize, Serialize};

/// A point on the integer pixel grid
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0, y: 0 };

    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle. `min` is inclusive, `max` is exclusive.
///
/// A rectangle with `max` not strictly greater than `min` on either axis is empty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub min: Point,
    pub max: Point,
}

impl Rect {
    pub fn new(min: Point, max: Point) -> Self {
        Self { min, max }
    }

    /// Rectangle of the given size whose top-left corner is `origin`
    pub fn from_origin_size(origin: Point, width: u32, height: u32) -> Self {
        Self {
            min: origin,
            max: Point::new(
                origin.x.saturating_add(width as i32),
                origin.y.saturating_add(height as i32),
            ),
        }
    }

    pub fn width(&self) -> u32 {
        (self.max.x - self.min.x).max(0) as u32
    }

    pub fn height(&self) -> u32 {
        (self.max.y - self.min.y).max(0) as u32
    }

    /// Number of pixels covered
    pub fn area(&self) -> u64 {
        self.width() as u64 * self.height() as u64
    }

    pub fn is_empty(&self) -> bool {
        self.min.x >= self.max.x || self.min.y >= self.max.y
    }

    /// Largest rectangle contained in both. Disjoint inputs yield the zero rectangle.
    pub fn intersect(&self, other: &Rect) -> Rect {
        let result = Rect {
            min: Point::new(self.min.x.max(other.min.x), self.min.y.max(other.min.y)),
            max: Point::new(self.max.x.min(other.max.x), self.max.y.min(other.max.y)),
        };
        if result.is_empty() {
            Rect::default()
        } else {
            result
        }
    }

    /// Smallest rectangle containing both. Empty rectangles contribute nothing.
    pub fn union(&self, other: &Rect) -> Rect {
        if self.is_empty() {
            return *other;
        }
        if other.is_empty() {
            return *self;
        }
        Rect {
            min: Point::new(self.min.x.min(other.min.x), self.min.y.min(other.min.y)),
            max: Point::new(self.max.x.max(other.max.x), self.max.y.max(other.max.y)),
        }
    }

    /// Offset that centers a `width`x`height` box inside this rectangle,
    /// relative to `min`. Integer division on both terms.
    pub fn center_offset(&self, width: u32, height: u32) -> Point {
        Point::new(
            (self.width() / 2) as i32 - (width / 2) as i32,
            (self.height() / 2) as i32 - (height / 2) as i32,
        )
    }
}
