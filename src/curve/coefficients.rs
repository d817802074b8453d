//--------------------------------------------------------------------
// coefficients.rs
//--------------------------------------------------------------------
// Generates the Loop-Blinn texture coordinates of a cubic, splitting
// loops at an interior double point when required
// Available on https://www.microsoft.com/en-us/research/wp-content/uploads/2005/01/p1000-loop.pdf
//--------------------------------------------------------------------

use crate::arrayvec::*;

use crate::geometry::*;
use super::*;

// A classified cubic with one (k,l,m) triple per control point; the
// flip flag is already discharged when the patch leaves this module
#[derive(Copy, Clone, Debug)]
pub struct CurvePatch {
    pub curve: CubicBezier,
    pub coeffs: [Vec3; 4],
    pub flip: bool
}

pub type CurvePatches = ArrayVec<[CurvePatch; 2]>;

fn sqrt_or_zero(v: Coord) -> Coord {
    // Rounding at a classification boundary may push the radicand
    // slightly negative
    if v <= 0.0 { 0.0 } else { v.sqrt() }
}

fn quadratic_coefficients(c: &ClassifiedCubic) -> ([Vec3; 4], bool) {
    ([
        Vec3::zero(),
        Vec3::new(1.0 / 3.0, 0.0, 1.0 / 3.0),
        Vec3::new(2.0 / 3.0, 1.0 / 3.0, 2.0 / 3.0),
        Vec3::new(1.0, 1.0, 1.0)
    ], quadratic_flip(c.d3))
}

fn serpentine_coefficients(c: &ClassifiedCubic) -> ([Vec3; 4], bool) {
    let root = sqrt_or_zero(9.0 * c.d2 * c.d2 - 12.0 * c.d1 * c.d3);
    let ls = 3.0 * c.d2 - root;
    let lt = 6.0 * c.d1;
    let ms = 3.0 * c.d2 + root;
    let mt = 6.0 * c.d1;

    ([
        Vec3::new(ls * ms, ls * ls * ls, ms * ms * ms),
        Vec3::new((3.0 * ls * ms - ls * mt - lt * ms) / 3.0,
            ls * ls * (ls - lt), ms * ms * (ms - mt)),
        Vec3::new((lt * (mt - 2.0 * ms) + ls * (3.0 * ms - 2.0 * mt)) / 3.0,
            (lt - ls) * (lt - ls) * ls, (mt - ms) * (mt - ms) * ms),
        Vec3::new((lt - ls) * (mt - ms),
            -(lt - ls) * (lt - ls) * (lt - ls), -(mt - ms) * (mt - ms) * (mt - ms))
    ], serpentine_flip(c.d1))
}

fn loop_coefficients(c: &ClassifiedCubic) -> ([Vec3; 4], bool) {
    let root = sqrt_or_zero(4.0 * c.d1 * c.d3 - 3.0 * c.d2 * c.d2);
    let ls = c.d2 - root;
    let lt = 2.0 * c.d1;
    let ms = c.d2 + root;
    let mt = 2.0 * c.d1;

    let coeffs = [
        Vec3::new(ls * ms, ls * ls * ms, ls * ms * ms),
        Vec3::new((-ls * mt - lt * ms + 3.0 * ls * ms) / 3.0,
            ls * (ls * (mt - 3.0 * ms) + 2.0 * lt * ms) / -3.0,
            ms * (ls * (2.0 * mt - 3.0 * ms) + lt * ms) / -3.0),
        Vec3::new((lt * (mt - 2.0 * ms) + ls * (3.0 * ms - 2.0 * mt)) / 3.0,
            (lt - ls) * (ls * (2.0 * mt - 3.0 * ms) + lt * ms) / 3.0,
            (mt - ms) * (ls * (mt - 3.0 * ms) + 2.0 * lt * ms) / 3.0),
        Vec3::new((lt - ls) * (mt - ms),
            -(lt - ls) * (lt - ls) * (mt - ms), -(lt - ls) * (mt - ms) * (mt - ms))
    ];

    let flip = loop_flip(c.d1, coeffs[1].x);
    (coeffs, flip)
}

fn cusp_coefficients(c: &ClassifiedCubic) -> ([Vec3; 4], bool) {
    let ls = c.d3;
    let lt = 3.0 * c.d2;

    ([
        Vec3::new(ls, ls * ls * ls, 1.0),
        Vec3::new(ls - lt / 3.0, ls * ls * (ls - lt), 1.0),
        Vec3::new(ls - 2.0 * lt / 3.0, (ls - lt) * (ls - lt) * ls, 1.0),
        Vec3::new(ls - lt, (ls - lt) * (ls - lt) * (ls - lt), 1.0)
    ], cusp_flip())
}

fn coefficients(classified: &ClassifiedCubic) -> ([Vec3; 4], bool) {
    match classified.class {
        CurveClass::LineOrPoint => ([Vec3::zero(); 4], false),
        CurveClass::Quadratic => quadratic_coefficients(classified),
        CurveClass::Serpentine => serpentine_coefficients(classified),
        CurveClass::Loop => loop_coefficients(classified),
        CurveClass::Cusp => cusp_coefficients(classified)
    }
}

fn patch(curve: &CubicBezier, classified: &ClassifiedCubic) -> CurvePatch {
    let (mut coeffs, flip) = coefficients(classified);
    if flip { flip_coefficients(&mut coeffs); }
    CurvePatch { curve: *curve, coeffs, flip: false }
}

// The double-point parameters of a loop; t0 = ms/mt is checked first,
// matching the order the parameters are derived in
fn interior_double_point(c: &ClassifiedCubic) -> Option<Coord> {
    let root = sqrt_or_zero(4.0 * c.d1 * c.d3 - 3.0 * c.d2 * c.d2);
    let ls = c.d2 - root;
    let lt = 2.0 * c.d1;
    let ms = c.d2 + root;
    let mt = 2.0 * c.d1;

    let t0 = ms / mt;
    let t1 = ls / lt;
    if t0 > 0.0 && t0 < 1.0 { Some(t0) }
    else if t1 > 0.0 && t1 < 1.0 { Some(t1) }
    else { None }
}

// Classification plus coefficient generation. Loops whose double point
// lies inside the parameter range are split there, so that each half
// keeps a consistent implicit sign; a fully degenerate cubic yields no
// patch at all and is the caller's cue to fall back to a straight edge
pub fn curve_patches(curve: &CubicBezier) -> CurvePatches {
    let mut patches = CurvePatches::new();

    let classified = classify(curve, CLASSIFY_EPSILON);
    match classified.class {
        CurveClass::LineOrPoint => {}
        CurveClass::Loop => {
            if let Some(t) = interior_double_point(&classified) {
                let (left, right) = curve.split_at(t);
                patches.push(patch(&left, &classify(&left, RECLASSIFY_EPSILON)));
                patches.push(patch(&right, &classify(&right, RECLASSIFY_EPSILON)));
            } else {
                patches.push(patch(curve, &classified));
            }
        }
        _ => patches.push(patch(curve, &classified))
    }

    patches
}
