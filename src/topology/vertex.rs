use crate::math::Point3;

use super::edge::EdgeId;

slotmap::new_key_type! {
    /// Unique identifier for a vertex in the weave store.
    pub struct VertexId;
}

/// Classification of a weave vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VertexType {
    /// Cutter-location point: an interval endpoint.
    Cl,
    /// Cutter-location point already consumed by downstream linking (reserved).
    ClDone,
    /// Adjacent point (reserved).
    Adj,
    /// Doubly adjacent point (reserved).
    TwoAdj,
    /// Computed crossing of an x-interval and a y-interval.
    Int,
}

/// Data associated with a weave vertex.
#[derive(Debug, Clone)]
pub struct VertexData {
    /// The 3D position of the vertex. The z coordinate is carried through
    /// but plays no part in the 2D topology.
    pub point: Point3,
    /// Vertex classification.
    pub kind: VertexType,
    /// Sequential index assigned by the owning store at insertion.
    pub index: usize,
    /// Outgoing half-edges; sorted counterclockwise by direction once the
    /// store has been linked.
    pub(crate) out: Vec<EdgeId>,
}

impl VertexData {
    pub(crate) fn new(point: Point3, kind: VertexType, index: usize) -> Self {
        Self {
            point,
            kind,
            index,
            out: Vec::new(),
        }
    }
}
