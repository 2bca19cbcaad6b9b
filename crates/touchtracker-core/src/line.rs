//! Line segment drawn by a single touch.

use kurbo::{Line as KurboLine, Point, Vec2};
use serde::{Deserialize, Serialize};

/// A straight segment between the point where a touch began and where it
/// currently is (or where it ended).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Line {
    /// Start point.
    pub begin: Point,
    /// End point.
    pub end: Point,
}

impl Line {
    /// Create a new line.
    pub fn new(begin: Point, end: Point) -> Self {
        Self { begin, end }
    }

    /// Create a zero-length line at a single point.
    pub fn at(point: Point) -> Self {
        Self::new(point, point)
    }

    /// Get the length of the line.
    pub fn length(&self) -> f64 {
        (self.end - self.begin).hypot()
    }

    /// Point at parameter `t` along the segment (0 = begin, 1 = end).
    pub fn point_at(&self, t: f64) -> Point {
        Point::new(
            self.begin.x + (self.end.x - self.begin.x) * t,
            self.begin.y + (self.end.y - self.begin.y) * t,
        )
    }

    /// Move both endpoints by `delta`.
    pub fn translate(&mut self, delta: Vec2) {
        self.begin += delta;
        self.end += delta;
    }

    /// Get as a kurbo Line.
    pub fn as_kurbo(&self) -> KurboLine {
        KurboLine::new(self.begin, self.end)
    }
}

impl From<Line> for KurboLine {
    fn from(line: Line) -> Self {
        line.as_kurbo()
    }
}
