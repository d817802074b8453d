//------------------------------------------------------------------------------
// planar.rs
//------------------------------------------------------------------------------
// Wraps the constrained Delaunay triangulation the planarizer inserts
// into; everything spade-specific stays behind this module
//------------------------------------------------------------------------------

use crate::spade::{ConstrainedDelaunayTriangulation, InsertionError, Point2, Triangulation};
use crate::spade::handles::{FixedDirectedEdgeHandle, FixedFaceHandle, FixedVertexHandle,
    PossiblyOuterTag};

use crate::geometry::*;

pub(crate) type VertexKey = FixedVertexHandle;
pub(crate) type EdgeKey = FixedDirectedEdgeHandle;
pub(crate) type FaceKey = FixedFaceHandle<PossiblyOuterTag>;

pub(crate) struct Planar {
    cdt: ConstrainedDelaunayTriangulation<Point2<Coord>>
}

impl Planar {
    pub fn new() -> Planar {
        Planar { cdt: ConstrainedDelaunayTriangulation::new() }
    }

    // Coincident points deduplicate to the handle they already have
    pub fn insert(&mut self, p: Vec2) -> Result<VertexKey, InsertionError> {
        self.cdt.insert(Point2::new(p.x, p.y))
    }

    pub fn position(&self, v: VertexKey) -> Vec2 {
        let p = self.cdt.vertex(v).position();
        Vec2::new(p.x, p.y)
    }

    // Constraints between a vertex and itself are dropped; constraints
    // crossing existing ones are split at the intersection
    pub fn constrain(&mut self, a: VertexKey, b: VertexKey) {
        if a != b {
            self.cdt.add_constraint_and_split(a, b, |p| p);
        }
    }

    pub fn face_count(&self) -> usize {
        self.cdt.num_inner_faces() + 1
    }

    pub fn outer_face(&self) -> FaceKey {
        self.cdt.outer_face().fix()
    }

    // The directed edges whose left face is the given one. The outer
    // face is bounded by the convex hull, so it is found by scanning
    pub fn face_edges(&self, f: FaceKey) -> Vec<EdgeKey> {
        match self.cdt.face(f).as_inner() {
            Some(inner) => inner.adjacent_edges().iter().map(|e| e.fix()).collect(),
            None => self.cdt.directed_edges()
                .filter(|e| e.face().fix() == f)
                .map(|e| e.fix())
                .collect()
        }
    }

    pub fn edge_owner(&self, e: EdgeKey) -> FaceKey {
        self.cdt.directed_edge(e).face().fix()
    }

    pub fn neighbor(&self, e: EdgeKey) -> FaceKey {
        self.cdt.directed_edge(e).rev().face().fix()
    }

    pub fn is_constrained(&self, e: EdgeKey) -> bool {
        self.cdt.is_constraint_edge(e.as_undirected())
    }

    // Finite faces with their vertex positions, counterclockwise
    pub fn interior_triangles(&self) -> impl Iterator<Item = (FaceKey, [Vec2; 3])> + '_ {
        self.cdt.inner_faces().map(|face| {
            // The face key comes from an adjacent edge so the index
            // lives in the same space the outer face indexes into
            let key = face.adjacent_edges()[0].face().fix();
            let [a, b, c] = face.positions();
            (key, [Vec2::new(a.x, a.y), Vec2::new(b.x, b.y), Vec2::new(c.x, c.y)])
        })
    }
}
