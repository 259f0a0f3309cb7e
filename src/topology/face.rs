use crate::math::Point3;

use super::edge::EdgeId;

slotmap::new_key_type! {
    /// Unique identifier for a face in the weave store.
    pub struct FaceId;
}

/// Classification of a weave face.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaceType {
    /// Bounded material-side region; its boundary is a waterline loop.
    Incident,
    /// The unbounded complement region; its boundary walk is discarded.
    NonIncident,
}

/// Data associated with a weave face.
#[derive(Debug, Clone)]
pub struct FaceData {
    /// One half-edge on this face's boundary.
    pub edge: EdgeId,
    /// Face classification.
    pub kind: FaceType,
    /// Representative point of the face (midpoint of its boundary vertices).
    pub generator: Point3,
}
