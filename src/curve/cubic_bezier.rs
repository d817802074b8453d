//--------------------------------------------------------------------
// cubic_bezier.rs
//--------------------------------------------------------------------
// Represents a cubic Bézier curve
//--------------------------------------------------------------------

use crate::derive_more::*;

use crate::geometry::*;

// The cubic bezier structure
#[derive(Copy, Clone, Display)]
#[display(fmt = "CubicBezier({},{},{},{})", a, b, c, d)]
pub struct CubicBezier { pub a: Vec2, pub b: Vec2, pub c: Vec2, pub d: Vec2 }

fn lerp(p: Vec2, q: Vec2, t: Coord) -> Vec2 { p + t * (q - p) }

impl CubicBezier {
    pub fn at(&self, t: Coord) -> Vec2 {
        let ct = 1.0 - t;
        ct * ct * ct * self.a + 3.0 * ct * ct * t * self.b
            + 3.0 * ct * t * t * self.c + t * t * t * self.d
    }

    // Promote a quadratic to its exactly equivalent cubic
    pub fn from_quadratic(a: Vec2, ctl: Vec2, d: Vec2) -> CubicBezier {
        let b = a + 2.0 / 3.0 * (ctl - a);
        let c = d + 2.0 / 3.0 * (ctl - d);
        CubicBezier { a, b, c, d }
    }

    // de Casteljau split; both halves share the split point exactly
    pub fn split_at(&self, t: Coord) -> (CubicBezier, CubicBezier) {
        let ab = lerp(self.a, self.b, t);
        let bc = lerp(self.b, self.c, t);
        let cd = lerp(self.c, self.d, t);
        let abc = lerp(ab, bc, t);
        let bcd = lerp(bc, cd, t);
        let abcd = lerp(abc, bcd, t);

        (CubicBezier { a: self.a, b: ab, c: abc, d: abcd },
            CubicBezier { a: abcd, b: bcd, c: cd, d: self.d })
    }

    pub fn is_point(&self) -> bool {
        self.a == self.b && self.a == self.c && self.a == self.d
    }
}

impl std::fmt::Debug for CubicBezier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)
    }
}
