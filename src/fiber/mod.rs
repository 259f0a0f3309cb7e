pub mod interval;

pub use interval::Interval;

use crate::math::{Point3, TOLERANCE};

/// An axis-aligned sweep line at a fixed height, carrying the visible
/// intervals computed by the upstream visibility solver.
///
/// The parametric form is `P(t) = p1 + t * (p2 - p1)`, so interval
/// parameters in `[0, 1]` cover the fiber span.
#[derive(Debug, Clone)]
pub struct Fiber {
    /// Start point; its off-axis coordinates are the fiber's fixed position.
    pub p1: Point3,
    /// End point.
    pub p2: Point3,
    /// The visible intervals along this fiber.
    pub ints: Vec<Interval>,
}

impl Fiber {
    /// Creates a fiber from its two span points, with no intervals.
    #[must_use]
    pub fn new(p1: Point3, p2: Point3) -> Self {
        Self {
            p1,
            p2,
            ints: Vec::new(),
        }
    }

    /// Appends a visible interval.
    pub fn push_interval(&mut self, ival: Interval) {
        self.ints.push(ival);
    }

    /// `true` if the fiber carries no intervals.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ints.is_empty()
    }

    /// `true` if the fiber runs parallel to the x axis.
    #[must_use]
    pub fn x_parallel(&self) -> bool {
        let d = self.p2 - self.p1;
        d.x.abs() > TOLERANCE && d.y.abs() < TOLERANCE && d.z.abs() < TOLERANCE
    }

    /// `true` if the fiber runs parallel to the y axis.
    #[must_use]
    pub fn y_parallel(&self) -> bool {
        let d = self.p2 - self.p1;
        d.y.abs() > TOLERANCE && d.x.abs() < TOLERANCE && d.z.abs() < TOLERANCE
    }

    /// Maps a fiber parameter to a concrete point.
    #[must_use]
    pub fn point(&self, t: f64) -> Point3 {
        self.p1 + (self.p2 - self.p1) * t
    }
}
