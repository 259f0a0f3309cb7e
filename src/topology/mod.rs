pub mod edge;
pub mod face;
pub mod vertex;

pub use edge::{EdgeData, EdgeId};
pub use face::{FaceData, FaceId, FaceType};
pub use vertex::{VertexData, VertexId, VertexType};

use crate::error::TopologyError;
use crate::math::Point3;
use slotmap::SlotMap;

/// Central arena that owns the weave's planar subdivision.
///
/// Entities reference each other via typed IDs (generational indices),
/// avoiding self-referential structures and enabling safe mutation. Vertex
/// indices come from a counter owned by the store, so independent stores
/// never share state.
#[derive(Debug, Default)]
pub struct WeaveStore {
    vertices: SlotMap<VertexId, VertexData>,
    edges: SlotMap<EdgeId, EdgeData>,
    faces: SlotMap<FaceId, FaceData>,
    next_index: usize,
}

impl WeaveStore {
    /// Creates a new, empty weave store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Vertex operations ---

    /// Inserts a vertex and returns its ID.
    pub fn add_vertex(&mut self, point: Point3, kind: VertexType) -> VertexId {
        let index = self.next_index;
        self.next_index += 1;
        self.vertices.insert(VertexData::new(point, kind, index))
    }

    /// Returns a reference to the vertex data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn vertex(&self, id: VertexId) -> Result<&VertexData, TopologyError> {
        self.vertices
            .get(id)
            .ok_or(TopologyError::EntityNotFound("vertex"))
    }

    /// Iterates over all vertex data in the store.
    pub fn vertices(&self) -> impl Iterator<Item = &VertexData> + '_ {
        self.vertices.values()
    }

    /// Number of vertices in the store.
    #[must_use]
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Number of vertices of the given classification.
    #[must_use]
    pub fn vertex_type_count(&self, kind: VertexType) -> usize {
        self.vertices.values().filter(|v| v.kind == kind).count()
    }

    /// Number of edges incident to the given vertex (0 if unknown).
    #[must_use]
    pub fn degree(&self, id: VertexId) -> usize {
        self.vertices.get(id).map_or(0, |v| v.out.len())
    }

    // --- Edge operations ---

    /// Returns a reference to the half-edge data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn edge(&self, id: EdgeId) -> Result<&EdgeData, TopologyError> {
        self.edges
            .get(id)
            .ok_or(TopologyError::EntityNotFound("edge"))
    }

    /// Returns the half-edge from `a` to `b`, if the two are connected.
    #[must_use]
    pub fn find_edge(&self, a: VertexId, b: VertexId) -> Option<EdgeId> {
        let va = self.vertices.get(a)?;
        va.out
            .iter()
            .copied()
            .find(|&e| self.edges.get(e).is_some_and(|d| d.target == b))
    }

    /// Adds the half-edge pair `a -> b` / `b -> a` and registers both in the
    /// endpoints' outgoing rings. Always creates both directions.
    pub fn add_edge(&mut self, a: VertexId, b: VertexId) -> (EdgeId, EdgeId) {
        let e_ab = self.edges.insert_with_key(|k| EdgeData {
            source: a,
            target: b,
            twin: k,
            next: None,
            face: None,
        });
        let e_ba = self.edges.insert(EdgeData {
            source: b,
            target: a,
            twin: e_ab,
            next: None,
            face: None,
        });
        self.edges[e_ab].twin = e_ba;
        if let Some(va) = self.vertices.get_mut(a) {
            va.out.push(e_ab);
        }
        if let Some(vb) = self.vertices.get_mut(b) {
            vb.out.push(e_ba);
        }
        (e_ab, e_ba)
    }

    /// Adds a half-edge pair between `a` and `b` unless the two are already
    /// connected.
    pub fn connect(&mut self, a: VertexId, b: VertexId) {
        if self.find_edge(a, b).is_none() {
            self.add_edge(a, b);
        }
    }

    /// Removes both half-edges between `a` and `b`.
    ///
    /// # Errors
    ///
    /// Returns an error if the vertices are not connected.
    pub fn remove_edge(&mut self, a: VertexId, b: VertexId) -> Result<(), TopologyError> {
        let e_ab = self.find_edge(a, b).ok_or(TopologyError::EdgeNotFound)?;
        let e_ba = self
            .edges
            .get(e_ab)
            .map(|d| d.twin)
            .ok_or(TopologyError::EdgeNotFound)?;
        self.edges.remove(e_ab);
        self.edges.remove(e_ba);
        if let Some(va) = self.vertices.get_mut(a) {
            va.out.retain(|&e| e != e_ab);
        }
        if let Some(vb) = self.vertices.get_mut(b) {
            vb.out.retain(|&e| e != e_ba);
        }
        Ok(())
    }

    /// Iterates over all half-edge IDs.
    pub fn edge_ids(&self) -> impl Iterator<Item = EdgeId> + '_ {
        self.edges.keys()
    }

    /// Number of undirected connections (half of the half-edge count).
    #[must_use]
    pub fn num_edges(&self) -> usize {
        self.edges.len() / 2
    }

    // --- Face operations ---

    /// Inserts a face and returns its ID.
    pub fn add_face(&mut self, edge: EdgeId, kind: FaceType, generator: Point3) -> FaceId {
        self.faces.insert(FaceData {
            edge,
            kind,
            generator,
        })
    }

    /// Returns a reference to the face data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn face(&self, id: FaceId) -> Result<&FaceData, TopologyError> {
        self.faces
            .get(id)
            .ok_or(TopologyError::EntityNotFound("face"))
    }

    /// Iterates over all face data in the store.
    pub fn faces(&self) -> impl Iterator<Item = &FaceData> + '_ {
        self.faces.values()
    }

    /// Number of faces in the store.
    #[must_use]
    pub fn num_faces(&self) -> usize {
        self.faces.len()
    }

    pub(crate) fn set_face(&mut self, edge: EdgeId, face: FaceId) {
        if let Some(d) = self.edges.get_mut(edge) {
            d.face = Some(face);
        }
    }

    /// Drops all faces and detaches edges from them, so traversal can rerun.
    pub(crate) fn reset_faces(&mut self) {
        self.faces.clear();
        for d in self.edges.values_mut() {
            d.face = None;
        }
    }

    // --- Linking ---

    /// Sorts every vertex's outgoing ring counterclockwise by edge direction
    /// and assigns each half-edge's `next` pointer.
    ///
    /// The `next` of `a -> b` is the outgoing edge at `b` that follows the
    /// twin `b -> a` in clockwise rotation, which makes every bounded face a
    /// counterclockwise cycle and the unbounded face a clockwise walk.
    pub fn link_halfedges(&mut self) {
        let vids: Vec<VertexId> = self.vertices.keys().collect();
        for v in vids {
            let mut ring: Vec<(f64, EdgeId)> = Vec::new();
            for &e in &self.vertices[v].out {
                if let Some(d) = self.edges.get(e) {
                    if let (Some(s), Some(t)) =
                        (self.vertices.get(d.source), self.vertices.get(d.target))
                    {
                        let angle = (t.point.y - s.point.y).atan2(t.point.x - s.point.x);
                        ring.push((angle, e));
                    }
                }
            }
            ring.sort_by(|a, b| a.0.total_cmp(&b.0));
            self.vertices[v].out = ring.into_iter().map(|(_, e)| e).collect();
        }

        let eids: Vec<EdgeId> = self.edges.keys().collect();
        for e in eids {
            let (twin, target) = {
                let d = &self.edges[e];
                (d.twin, d.target)
            };
            let ring = &self.vertices[target].out;
            if let Some(pos) = ring.iter().position(|&x| x == twin) {
                let next = ring[(pos + ring.len() - 1) % ring.len()];
                self.edges[e].next = Some(next);
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn pt(x: f64, y: f64) -> Point3 {
        Point3::new(x, y, 0.0)
    }

    #[test]
    fn vertex_indices_are_sequential_per_store() {
        let mut s = WeaveStore::new();
        let a = s.add_vertex(pt(0.0, 0.0), VertexType::Cl);
        let b = s.add_vertex(pt(1.0, 0.0), VertexType::Int);
        assert_eq!(s.vertex(a).unwrap().index, 0);
        assert_eq!(s.vertex(b).unwrap().index, 1);

        // A fresh store starts over: no shared global counter.
        let mut s2 = WeaveStore::new();
        let c = s2.add_vertex(pt(5.0, 5.0), VertexType::Cl);
        assert_eq!(s2.vertex(c).unwrap().index, 0);
    }

    #[test]
    fn add_edge_creates_twin_pair() {
        let mut s = WeaveStore::new();
        let a = s.add_vertex(pt(0.0, 0.0), VertexType::Cl);
        let b = s.add_vertex(pt(1.0, 0.0), VertexType::Cl);
        let (e_ab, e_ba) = s.add_edge(a, b);
        assert_eq!(s.edge(e_ab).unwrap().twin, e_ba);
        assert_eq!(s.edge(e_ba).unwrap().twin, e_ab);
        assert_eq!(s.edge(e_ab).unwrap().source, a);
        assert_eq!(s.edge(e_ba).unwrap().source, b);
        assert_eq!(s.num_edges(), 1);
        assert_eq!(s.degree(a), 1);
        assert_eq!(s.degree(b), 1);
    }

    #[test]
    fn connect_guards_against_duplicates() {
        let mut s = WeaveStore::new();
        let a = s.add_vertex(pt(0.0, 0.0), VertexType::Cl);
        let b = s.add_vertex(pt(1.0, 0.0), VertexType::Cl);
        s.connect(a, b);
        s.connect(a, b);
        s.connect(b, a);
        assert_eq!(s.num_edges(), 1);
    }

    #[test]
    fn remove_edge_deletes_both_halves() {
        let mut s = WeaveStore::new();
        let a = s.add_vertex(pt(0.0, 0.0), VertexType::Cl);
        let b = s.add_vertex(pt(1.0, 0.0), VertexType::Cl);
        s.add_edge(a, b);
        s.remove_edge(b, a).unwrap();
        assert_eq!(s.num_edges(), 0);
        assert!(s.find_edge(a, b).is_none());
        assert!(s.find_edge(b, a).is_none());
        assert_eq!(s.degree(a), 0);
        assert_eq!(s.degree(b), 0);
    }

    #[test]
    fn remove_missing_edge_errors() {
        let mut s = WeaveStore::new();
        let a = s.add_vertex(pt(0.0, 0.0), VertexType::Cl);
        let b = s.add_vertex(pt(1.0, 0.0), VertexType::Cl);
        assert!(s.remove_edge(a, b).is_err());
    }

    #[test]
    fn vertex_type_counts() {
        let mut s = WeaveStore::new();
        s.add_vertex(pt(0.0, 0.0), VertexType::Cl);
        s.add_vertex(pt(1.0, 0.0), VertexType::Cl);
        s.add_vertex(pt(0.5, 0.5), VertexType::Int);
        assert_eq!(s.vertex_type_count(VertexType::Cl), 2);
        assert_eq!(s.vertex_type_count(VertexType::Int), 1);
        assert_eq!(s.vertex_type_count(VertexType::Adj), 0);
    }

    #[test]
    fn link_traverses_square_counterclockwise() {
        let mut s = WeaveStore::new();
        let a = s.add_vertex(pt(0.0, 0.0), VertexType::Cl);
        let b = s.add_vertex(pt(1.0, 0.0), VertexType::Cl);
        let c = s.add_vertex(pt(1.0, 1.0), VertexType::Cl);
        let d = s.add_vertex(pt(0.0, 1.0), VertexType::Cl);
        s.add_edge(a, b);
        s.add_edge(b, c);
        s.add_edge(c, d);
        s.add_edge(d, a);
        s.link_halfedges();

        let start = s.find_edge(a, b).unwrap();
        let mut e = start;
        let mut visited = Vec::new();
        loop {
            let data = s.edge(e).unwrap();
            visited.push(data.source);
            let next = data.next.unwrap();
            if next == start {
                break;
            }
            e = next;
        }
        assert_eq!(visited, vec![a, b, c, d]);
    }

    #[test]
    fn link_doubles_back_on_dangling_edge() {
        let mut s = WeaveStore::new();
        let a = s.add_vertex(pt(0.0, 0.0), VertexType::Cl);
        let b = s.add_vertex(pt(1.0, 0.0), VertexType::Cl);
        let (e_ab, e_ba) = s.add_edge(a, b);
        s.link_halfedges();
        assert_eq!(s.edge(e_ab).unwrap().next, Some(e_ba));
        assert_eq!(s.edge(e_ba).unwrap().next, Some(e_ab));
    }
}
