use super::face::FaceId;
use super::vertex::VertexId;

slotmap::new_key_type! {
    /// Unique identifier for a half-edge in the weave store.
    pub struct EdgeId;
}

/// A directed half-edge of the planar subdivision.
///
/// Half-edges always exist in twin pairs: one per direction of the same
/// undirected connection.
#[derive(Debug, Clone)]
pub struct EdgeData {
    /// Vertex this half-edge leaves from.
    pub source: VertexId,
    /// Vertex this half-edge points at.
    pub target: VertexId,
    /// The opposing direction of the same connection.
    pub twin: EdgeId,
    /// The following edge counterclockwise around this edge's face.
    /// `None` until the store has been linked.
    pub next: Option<EdgeId>,
    /// The face this half-edge bounds. `None` until face traversal.
    pub face: Option<FaceId>,
}
