use std::collections::HashSet;

use crate::math::polygon_2d::{boundary_midpoint, signed_area_2d};
use crate::math::{Point3, TOLERANCE};
use crate::topology::{EdgeId, FaceType};

use super::Weave;

impl Weave {
    /// Traverses the built topology face by face.
    ///
    /// Links the half-edges, then repeatedly walks `next` pointers from an
    /// unvisited edge until the walk closes. Every walk becomes one face:
    /// counterclockwise (positive-area) walks bound material-side regions
    /// and their vertex sequences are retained as loops; the clockwise
    /// outer walk and degenerate zero-area walks are recorded as
    /// non-incident and discarded. Each half-edge is visited once, so the
    /// cost is linear in the edge count.
    pub fn face_traverse(&mut self) {
        self.store.link_halfedges();
        self.store.reset_faces();
        self.loops.clear();

        let edge_ids: Vec<EdgeId> = self.store.edge_ids().collect();
        let mut visited: HashSet<EdgeId> = HashSet::with_capacity(edge_ids.len());
        for start in edge_ids {
            if visited.contains(&start) {
                continue;
            }
            let mut walk_edges = Vec::new();
            let mut walk_verts = Vec::new();
            let mut e = start;
            loop {
                visited.insert(e);
                walk_edges.push(e);
                let Ok(data) = self.store.edge(e) else {
                    break;
                };
                walk_verts.push(data.source);
                match data.next {
                    Some(n) if n != start && !visited.contains(&n) => e = n,
                    _ => break,
                }
            }

            let mut points = Vec::with_capacity(walk_verts.len());
            for &v in &walk_verts {
                if let Ok(vd) = self.store.vertex(v) {
                    points.push(vd.point);
                }
            }
            let kind = if signed_area_2d(&points) > TOLERANCE {
                FaceType::Incident
            } else {
                FaceType::NonIncident
            };
            let face = self.store.add_face(start, kind, boundary_midpoint(&points));
            for &we in &walk_edges {
                self.store.set_face(we, face);
            }
            if kind == FaceType::Incident {
                self.loops.push(walk_verts);
            }
        }
    }

    /// The retained waterline loops, resolved to point sequences.
    ///
    /// Each loop is closed (the last vertex connects back to the first) and
    /// non-empty. Loop order across faces is unspecified.
    #[must_use]
    pub fn loops(&self) -> Vec<Vec<Point3>> {
        self.loops
            .iter()
            .map(|lp| {
                lp.iter()
                    .filter_map(|&v| self.store.vertex(v).ok().map(|d| d.point))
                    .collect()
            })
            .collect()
    }
}
