//--------------------------------------------------------------------
// orientation.rs
//--------------------------------------------------------------------
// Keeps the sign of the implicit k³ - l·m consistent with the
// polygon winding: which classes flip, and what flipping means
//--------------------------------------------------------------------

use crate::geometry::*;

// The fragment test every texture triple is held against
pub fn implicit(coeff: Vec3) -> Coord {
    coeff.x * coeff.x * coeff.x - coeff.y * coeff.z
}

// Flip predicates per classification. The quadratic convention follows
// the original d3 < 0 rule; see DESIGN.md for the verification against
// the promoted-quadratic border
pub fn quadratic_flip(d3: Coord) -> bool { d3 < 0.0 }
pub fn serpentine_flip(d1: Coord) -> bool { d1 > 0.0 }
pub fn cusp_flip() -> bool { true }

// A loop flips when the sign of its second k coefficient agrees with
// the sign of d1
pub fn loop_flip(d1: Coord, c1_k: Coord) -> bool { d1 * c1_k > 0.0 }

// Flipping negates k and l of every triple; m never flips
pub fn flip_coefficients(coeffs: &mut [Vec3; 4]) {
    for triple in coeffs.iter_mut() {
        triple.x = -triple.x;
        triple.y = -triple.y;
    }
}
