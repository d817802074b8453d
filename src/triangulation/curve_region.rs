//------------------------------------------------------------------------------
// curve_region.rs
//------------------------------------------------------------------------------
// Triangulates a single curve patch locally and walks out its inside
// border, the chain of control points on the concave side that the
// planarizer splices in as straight constraints
//------------------------------------------------------------------------------

use crate::arrayvec::*;
use crate::derive_more::*;
use crate::spade::{DelaunayTriangulation, HasPosition, InsertionError, Point2, Triangulation};
use crate::spade::handles::FixedVertexHandle;

use crate::geometry::*;
use crate::curve::*;

// A vertex of an emitted curve face; order is the vertex's position in
// the inside border when it lies on it
#[derive(Copy, Clone, Debug, Constructor, Display)]
#[display(fmt = "({},{})", pos, tex)]
pub struct CurveVertex {
    pub pos: Vec2,
    pub tex: Vec3,
    pub order: Option<usize>
}

pub(crate) struct CurveRegion {
    pub faces: Vec<[CurveVertex; 3]>,
    pub border: ArrayVec<[CurveVertex; 4]>
}

struct PatchVertex {
    pos: Vec2,
    tex: Vec3
}

impl HasPosition for PatchVertex {
    type Scalar = Coord;
    fn position(&self) -> Point2<Coord> { Point2::new(self.pos.x, self.pos.y) }
}

// Triangles come out counterclockwise
fn oriented(a: CurveVertex, mut b: CurveVertex, mut c: CurveVertex) -> [CurveVertex; 3] {
    if (b.pos - a.pos).cross(c.pos - a.pos) < 0.0 { std::mem::swap(&mut b, &mut c); }
    [a, b, c]
}

fn is_degenerate(face: &[CurveVertex; 3]) -> bool {
    (face[1].pos - face[0].pos).cross(face[2].pos - face[0].pos).roughly_zero()
}

pub(crate) fn triangulate_patch(patch: &CurvePatch) -> Result<CurveRegion, InsertionError> {
    let mut local: DelaunayTriangulation<PatchVertex> = DelaunayTriangulation::new();

    let curve = &patch.curve;
    let points = [curve.a, curve.b, curve.c, curve.d];
    let mut handles = ArrayVec::<[FixedVertexHandle; 4]>::new();
    for (&pos, &tex) in points.iter().zip(patch.coeffs.iter()) {
        handles.push(local.insert(PatchVertex { pos, tex })?);
    }

    // Walk the inside border from p0: prefer an adjacent inside p1 or
    // p2 that was not visited yet, fall back to p3 otherwise. Identity
    // is by vertex handle, so duplicated points cannot loop the walk
    let mut border_handles = ArrayVec::<[FixedVertexHandle; 4]>::new();
    border_handles.push(handles[0]);

    let mut current = handles[0];
    while current != handles[3] && border_handles.len() < 4 {
        let mut next = handles[3];
        for &candidate in &[handles[1], handles[2]] {
            if border_handles.contains(&candidate) { continue; }
            if local.get_edge_from_neighbors(current, candidate).is_none() { continue; }
            if implicit(local.vertex(candidate).data().tex) <= 0.0 {
                next = candidate;
                break;
            }
        }
        border_handles.push(next);
        current = next;
    }

    let curve_vertex = |handle: FixedVertexHandle| {
        let vertex = local.vertex(handle);
        let data = vertex.data();
        let order = border_handles.iter().position(|&b| b == handle);
        CurveVertex::new(data.pos, data.tex, order)
    };

    let mut faces = Vec::new();
    for face in local.inner_faces() {
        let [a, b, c] = face.vertices();
        faces.push(oriented(
            curve_vertex(a.fix()), curve_vertex(b.fix()), curve_vertex(c.fix())));
    }
    faces.retain(|face| !is_degenerate(face));

    let border = border_handles.iter().map(|&h| curve_vertex(h)).collect();
    Ok(CurveRegion { faces, border })
}
