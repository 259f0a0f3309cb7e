use crate::topology::VertexId;

/// A visible sub-segment of a [`Fiber`](super::Fiber), bounded by two
/// cutter-location parameters.
///
/// Besides its geometry the interval carries the builder's bookkeeping: the
/// `in_weave` flag marking whether its endpoints have been materialized as
/// vertices, and the ordered list of vertices known to lie on it.
#[derive(Debug, Clone)]
pub struct Interval {
    /// Parameter of the lower cutter-location point.
    pub lower: f64,
    /// Parameter of the upper cutter-location point.
    pub upper: f64,
    /// Set once the interval's endpoints exist in the weave.
    pub in_weave: bool,
    /// Vertices on this interval, paired with their coordinate along the
    /// fiber axis, kept sorted by that coordinate.
    verts: Vec<(VertexId, f64)>,
}

impl Interval {
    /// Creates an interval spanning `[lower, upper]` in fiber parameters.
    #[must_use]
    pub fn new(lower: f64, upper: f64) -> Self {
        Self {
            lower,
            upper,
            in_weave: false,
            verts: Vec::new(),
        }
    }

    /// Records a vertex at the given axis coordinate, keeping the list
    /// sorted. Returns the insertion index.
    pub fn insert_vertex(&mut self, v: VertexId, coord: f64) -> usize {
        let idx = self.verts.partition_point(|&(_, c)| c < coord);
        self.verts.insert(idx, (v, coord));
        idx
    }

    /// The recorded vertices in coordinate order.
    #[must_use]
    pub fn verts(&self) -> &[(VertexId, f64)] {
        &self.verts
    }

    /// The recorded vertex immediately below the one at `idx`, if any.
    #[must_use]
    pub fn vertex_below(&self, idx: usize) -> Option<VertexId> {
        idx.checked_sub(1).map(|i| self.verts[i].0)
    }

    /// The recorded vertex immediately above the one at `idx`, if any.
    #[must_use]
    pub fn vertex_above(&self, idx: usize) -> Option<VertexId> {
        self.verts.get(idx + 1).map(|&(v, _)| v)
    }
}
