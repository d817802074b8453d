//--------------------------------------------------------------------
// classify.rs
//--------------------------------------------------------------------
// Projective classification of a cubic Bézier from the homogeneous
// triple products of its control points
//--------------------------------------------------------------------

use crate::derive_more::*;

use crate::geometry::*;
use super::cubic_bezier::*;

// The classification threshold, and the tighter one used when the
// halves of a subdivided loop are classified again
pub const CLASSIFY_EPSILON: Coord = 1e-3;
pub const RECLASSIFY_EPSILON: Coord = 1e-4;

#[derive(Clone, Copy, PartialEq, Eq, Display, Debug)]
pub enum CurveClass { LineOrPoint, Quadratic, Serpentine, Loop, Cusp }

// The classification along with the normalized, rounded d-vector that
// produced it; the coefficient tables consume both
#[derive(Clone, Copy, Debug)]
pub struct ClassifiedCubic {
    pub class: CurveClass,
    pub d1: Coord,
    pub d2: Coord,
    pub d3: Coord
}

impl ClassifiedCubic {
    pub fn discriminant(&self) -> Coord {
        self.d1 * self.d1 * (3.0 * self.d2 * self.d2 - 4.0 * self.d1 * self.d3)
    }
}

fn snap(v: Coord, epsilon: Coord) -> Coord {
    if v.abs() < epsilon { 0.0 } else { v }
}

pub fn classify(curve: &CubicBezier, epsilon: Coord) -> ClassifiedCubic {
    let line_or_point = ClassifiedCubic {
        class: CurveClass::LineOrPoint, d1: 0.0, d2: 0.0, d3: 0.0
    };

    if curve.is_point() { return line_or_point; }

    let b0 = Vec3::new(curve.a.x, curve.a.y, 1.0);
    let b1 = Vec3::new(curve.b.x, curve.b.y, 1.0);
    let b2 = Vec3::new(curve.c.x, curve.c.y, 1.0);
    let b3 = Vec3::new(curve.d.x, curve.d.y, 1.0);

    let a1 = b0.dot(b3.cross(b2));
    let a2 = b1.dot(b0.cross(b3));
    let a3 = b2.dot(b1.cross(b0));

    let d = Vec3::new(a1 - 2.0 * a2 + 3.0 * a3, -a2 + 3.0 * a3, 3.0 * a3);

    // A vanishing vector means the control points are collinear. The
    // components are signed areas, so "vanishing" is judged against the
    // squared coordinate magnitude: normalizing a vector made of
    // rounding residue would manufacture a spurious classification
    let magnitude = [curve.a, curve.b, curve.c, curve.d].iter()
        .map(|p| p.x.abs().max(p.y.abs()))
        .fold(0.0, Coord::max);
    let len = d.length();
    if !len.is_finite() || len <= 1e-12 * (magnitude * magnitude).max(1.0) {
        return line_or_point;
    }
    let d = d / len;

    let d1 = snap(d.x, epsilon);
    let d2 = snap(d.y, epsilon);
    let d3 = snap(d.z, epsilon);

    let classified = ClassifiedCubic { class: CurveClass::LineOrPoint, d1, d2, d3 };
    let class = if d1 == 0.0 && d2 == 0.0 && d3 == 0.0 { CurveClass::LineOrPoint }
        else if d1 == 0.0 && d2 == 0.0 { CurveClass::Quadratic }
        else {
            let discr = classified.discriminant();
            if discr > 0.0 { CurveClass::Serpentine }
            else if discr < 0.0 { CurveClass::Loop }
            else { CurveClass::Cusp }
        };

    ClassifiedCubic { class, ..classified }
}
