//------------------------------------------------------------------------------
// sink.rs
//------------------------------------------------------------------------------
// Provides the emitted vertex structures and the receiver every
// triangle is pushed into
//------------------------------------------------------------------------------

use crate::derive_more::*;

use crate::geometry::*;

#[derive(Copy, Clone, Debug, Constructor, Display)]
#[display(fmt = "({},{})", pos, coeff)]
pub struct TriangleVertex {
    pub pos: Vec2, pub coeff: Vec3
}

impl TriangleVertex {
    // Narrowed for GPU upload; the caller owns the precision contract
    pub fn narrowed(&self) -> TriangleVertexF32 {
        TriangleVertexF32 {
            pos: [self.pos.x as f32, self.pos.y as f32],
            coeff: [self.coeff.x as f32, self.coeff.y as f32, self.coeff.z as f32]
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TriangleVertexF32 {
    pub pos: [f32; 2], pub coeff: [f32; 3]
}

// The triangulation is generic over the receiver, so closures work
// without dynamic dispatch
pub trait TriangleReceiver {
    fn emit(&mut self, a: TriangleVertex, b: TriangleVertex, c: TriangleVertex);
}

impl<F: FnMut(TriangleVertex, TriangleVertex, TriangleVertex)> TriangleReceiver for F {
    fn emit(&mut self, a: TriangleVertex, b: TriangleVertex, c: TriangleVertex) {
        self(a, b, c)
    }
}
