//------------------------------------------------------------------------------
// mod.rs
//------------------------------------------------------------------------------
// The top-level triangulator: walks the path into the constrained
// triangulation, marks the filled faces by parity and emits the
// interior plus the accumulated curve faces
//------------------------------------------------------------------------------

mod planar;
mod fill_mark;
mod curve_region;
mod sink;

pub use curve_region::CurveVertex;
pub use sink::*;

use crate::spade::InsertionError;
use crate::thiserror::Error;
use crate::tracing::{debug, trace};

use crate::geometry::*;
use crate::curve::*;
use crate::path::*;
use curve_region::*;
use fill_mark::*;
use planar::*;

// Interior faces carry a triple whose implicit is -1, so the fragment
// test always keeps them
const INTERIOR_COEFF: Vec3 = Vec3 { x: 0.0, y: 1.0, z: 1.0 };

#[derive(Debug, Error)]
pub enum TriangulateError {
    #[error("path contains a non-finite point {0}")]
    NonFinitePoint(Vec2),
    #[error("path element issued before the first MoveTo")]
    PathNotStarted,
    #[error("triangulation backend rejected a point: {0}")]
    Backend(InsertionError)
}

impl From<InsertionError> for TriangulateError {
    fn from(e: InsertionError) -> TriangulateError { TriangulateError::Backend(e) }
}

struct Triangulator {
    planar: Planar,
    curve_faces: Vec<[TriangleVertex; 3]>
}

impl Triangulator {
    fn new() -> Triangulator {
        Triangulator { planar: Planar::new(), curve_faces: Vec::new() }
    }

    // Insertion phase: straight elements become constraints directly,
    // curved elements contribute their inside borders
    fn process(&mut self, path: impl IntoIterator<Item = PathElement>)
        -> Result<(), TriangulateError>
    {
        let mut current: Option<VertexKey> = None;
        let mut begin: Option<VertexKey> = None;

        for element in path {
            if let Some(p) = element.non_finite_point() {
                return Err(TriangulateError::NonFinitePoint(p));
            }
            trace!("{}", element);

            match element {
                PathElement::MoveTo(p) => {
                    // A dangling subpath is implicitly closed
                    if let (Some(c), Some(b)) = (current, begin) {
                        self.planar.constrain(c, b);
                    }
                    let v = self.planar.insert(p)?;
                    current = Some(v);
                    begin = Some(v);
                }
                PathElement::LineTo(p) => {
                    let c = current.ok_or(TriangulateError::PathNotStarted)?;
                    let v = self.planar.insert(p)?;
                    self.planar.constrain(c, v);
                    current = Some(v);
                }
                PathElement::QuadTo(ctl, target) => {
                    let c = current.ok_or(TriangulateError::PathNotStarted)?;
                    let curve = CubicBezier::from_quadratic(self.planar.position(c), ctl, target);
                    current = Some(self.insert_cubic(c, &curve)?);
                }
                PathElement::CubicTo(c1, c2, target) => {
                    let c = current.ok_or(TriangulateError::PathNotStarted)?;
                    let curve = CubicBezier {
                        a: self.planar.position(c), b: c1, c: c2, d: target
                    };
                    current = Some(self.insert_cubic(c, &curve)?);
                }
                PathElement::Close => {
                    let c = current.ok_or(TriangulateError::PathNotStarted)?;
                    let b = begin.ok_or(TriangulateError::PathNotStarted)?;
                    self.planar.constrain(c, b);
                    current = Some(b);
                }
            }
        }

        // End of stream closes a dangling subpath too
        if let (Some(c), Some(b)) = (current, begin) {
            self.planar.constrain(c, b);
        }
        Ok(())
    }

    // A classified cubic contributes its curve faces and chains its
    // inside border as constraints; a degenerate one collapses to a
    // single straight constraint
    fn insert_cubic(&mut self, from: VertexKey, curve: &CubicBezier)
        -> Result<VertexKey, TriangulateError>
    {
        let patches = curve_patches(curve);
        debug!("cubic {} produced {} patches", curve, patches.len());

        if patches.is_empty() {
            let v = self.planar.insert(curve.d)?;
            self.planar.constrain(from, v);
            return Ok(v);
        }

        let mut current = from;
        for patch in &patches {
            let region = triangulate_patch(patch)?;
            for [a, b, c] in region.faces {
                self.curve_faces.push([
                    TriangleVertex::new(a.pos, a.tex),
                    TriangleVertex::new(b.pos, b.tex),
                    TriangleVertex::new(c.pos, c.tex)
                ]);
            }

            for vertex in region.border.iter().skip(1) {
                let v = self.planar.insert(vertex.pos)?;
                self.planar.constrain(current, v);
                current = v;
            }
        }
        Ok(current)
    }

    // Emission phase: filled interior first, curve faces after
    fn emit(&self, mark: &FillMark, receiver: &mut impl TriangleReceiver) {
        for (face, [a, b, c]) in self.planar.interior_triangles() {
            if mark.inside(face) {
                receiver.emit(
                    TriangleVertex::new(a, INTERIOR_COEFF),
                    TriangleVertex::new(b, INTERIOR_COEFF),
                    TriangleVertex::new(c, INTERIOR_COEFF));
            }
        }

        for face in &self.curve_faces {
            receiver.emit(face[0], face[1], face[2]);
        }
    }
}

// Triangulate one outline into the receiver. Nothing is emitted until
// the whole path went in, so a failed call emits nothing at all
pub fn triangulate(path: impl IntoIterator<Item = PathElement>,
    receiver: &mut impl TriangleReceiver) -> Result<(), TriangulateError>
{
    let mut triangulator = Triangulator::new();
    triangulator.process(path)?;

    let mark = FillMark::mark(&triangulator.planar);
    triangulator.emit(&mark, receiver);
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::approx::assert_abs_diff_eq;

    struct Collector {
        interior: Vec<[TriangleVertex; 3]>,
        curved: Vec<[TriangleVertex; 3]>
    }

    impl Collector {
        fn new() -> Collector { Collector { interior: Vec::new(), curved: Vec::new() } }

        fn accept(&mut self, a: TriangleVertex, b: TriangleVertex, c: TriangleVertex) {
            if a.coeff == INTERIOR_COEFF && b.coeff == INTERIOR_COEFF
                && c.coeff == INTERIOR_COEFF {
                self.interior.push([a, b, c]);
            } else {
                self.curved.push([a, b, c]);
            }
        }

        fn run(path: &[PathElement]) -> Collector {
            let mut collector = Collector::new();
            let mut sink = |a: TriangleVertex, b: TriangleVertex, c: TriangleVertex| {
                collector.accept(a, b, c)
            };
            triangulate(path.iter().copied(), &mut sink).unwrap();
            collector
        }

        fn interior_area(&self) -> Coord {
            self.interior.iter().map(|[a, b, c]| {
                ((b.pos - a.pos).cross(c.pos - a.pos) / 2.0).abs()
            }).sum()
        }
    }

    fn vec2(x: Coord, y: Coord) -> Vec2 { Vec2::new(x, y) }

    #[test]
    fn test_square_outline() {
        let collector = Collector::run(&[
            PathElement::MoveTo(vec2(0.0, 0.0)),
            PathElement::LineTo(vec2(10.0, 0.0)),
            PathElement::LineTo(vec2(10.0, 10.0)),
            PathElement::LineTo(vec2(0.0, 10.0)),
            PathElement::Close
        ]);

        assert_eq!(collector.interior.len(), 2);
        assert!(collector.curved.is_empty());
        assert_abs_diff_eq!(collector.interior_area(), 100.0, epsilon = 1e-9);
    }

    #[test]
    fn test_unclosed_outline_is_closed_implicitly() {
        let open = Collector::run(&[
            PathElement::MoveTo(vec2(0.0, 0.0)),
            PathElement::LineTo(vec2(10.0, 0.0)),
            PathElement::LineTo(vec2(10.0, 10.0)),
            PathElement::LineTo(vec2(0.0, 10.0))
        ]);

        assert_eq!(open.interior.len(), 2);
        assert_abs_diff_eq!(open.interior_area(), 100.0, epsilon = 1e-9);
    }

    #[test]
    fn test_quadratic_glyph_stroke() {
        let collector = Collector::run(&[
            PathElement::MoveTo(vec2(0.0, 0.0)),
            PathElement::QuadTo(vec2(5.0, 10.0), vec2(10.0, 0.0)),
            PathElement::Close
        ]);

        // The inside border is the chord, so every filled pixel comes
        // from the curve faces' negative side
        assert_eq!(collector.curved.len(), 2);
        assert!(collector.interior.is_empty());

        // Curve faces stay within the control polygon
        for face in &collector.curved {
            for v in face {
                assert!(v.pos.x >= 0.0 && v.pos.x <= 10.0);
                assert!(v.pos.y >= 0.0 && v.pos.y <= 20.0 / 3.0 + 1e-9);
            }
        }
    }

    #[test]
    fn test_quadratic_matches_its_promoted_cubic() {
        let quad = Collector::run(&[
            PathElement::MoveTo(vec2(0.0, 0.0)),
            PathElement::QuadTo(vec2(5.0, 10.0), vec2(10.0, 0.0)),
            PathElement::Close
        ]);
        let cubic = Collector::run(&[
            PathElement::MoveTo(vec2(0.0, 0.0)),
            PathElement::CubicTo(vec2(10.0 / 3.0, 20.0 / 3.0),
                vec2(20.0 / 3.0, 20.0 / 3.0), vec2(10.0, 0.0)),
            PathElement::Close
        ]);

        assert_eq!(quad.interior.len(), cubic.interior.len());
        assert_eq!(quad.curved.len(), cubic.curved.len());
        assert_abs_diff_eq!(quad.interior_area(), cubic.interior_area(), epsilon = 1e-9);

        // Same fill region: the curved cover has the same area over the
        // same vertex set. The control points are cocircular here, so
        // the local Delaunay may pick either diagonal and the faces
        // themselves need not pair up
        let area = |faces: &[[TriangleVertex; 3]]| -> Coord {
            faces.iter().map(|[a, b, c]| {
                ((b.pos - a.pos).cross(c.pos - a.pos) / 2.0).abs()
            }).sum()
        };
        assert_abs_diff_eq!(area(&quad.curved), area(&cubic.curved), epsilon = 1e-9);

        let corners = |faces: &[[TriangleVertex; 3]]| -> Vec<(i64, i64)> {
            let mut rounded: Vec<_> = faces.iter().flatten()
                .map(|v| ((v.pos.x * 1e6).round() as i64, (v.pos.y * 1e6).round() as i64))
                .collect();
            rounded.sort_unstable();
            rounded.dedup();
            rounded
        };
        assert_eq!(corners(&quad.curved), corners(&cubic.curved));
    }

    #[test]
    fn test_collinear_cubic_collapses_to_an_edge() {
        let collector = Collector::run(&[
            PathElement::MoveTo(vec2(0.0, 0.0)),
            PathElement::CubicTo(vec2(3.0, 0.0), vec2(7.0, 0.0), vec2(10.0, 0.0)),
            PathElement::LineTo(vec2(10.0, 10.0)),
            PathElement::LineTo(vec2(0.0, 10.0)),
            PathElement::Close
        ]);

        assert!(collector.curved.is_empty());
        assert_abs_diff_eq!(collector.interior_area(), 100.0, epsilon = 1e-9);
    }

    #[test]
    fn test_nested_rings_fill_by_parity() {
        let square = |lo: Coord, hi: Coord| vec![
            PathElement::MoveTo(vec2(lo, lo)),
            PathElement::LineTo(vec2(hi, lo)),
            PathElement::LineTo(vec2(hi, hi)),
            PathElement::LineTo(vec2(lo, hi)),
            PathElement::Close
        ];

        let mut path = square(0.0, 40.0);
        path.extend(square(10.0, 30.0));
        path.extend(square(15.0, 25.0));
        let collector = Collector::run(&path);

        // Ring between 0..40 and 10..30 plus the innermost square:
        // 1600 - 400 + 100
        assert!(collector.curved.is_empty());
        assert_abs_diff_eq!(collector.interior_area(), 1300.0, epsilon = 1e-9);
    }

    #[test]
    fn test_serpentine_path() {
        let collector = Collector::run(&[
            PathElement::MoveTo(vec2(0.0, 0.0)),
            PathElement::CubicTo(vec2(10.0, 60.0), vec2(50.0, -60.0), vec2(90.0, 0.0)),
            PathElement::Close
        ]);

        assert!(!collector.curved.is_empty());
    }

    #[test]
    fn test_loop_path_emits_both_halves() {
        let plain = Collector::run(&[
            PathElement::MoveTo(vec2(0.0, 0.0)),
            PathElement::CubicTo(vec2(140.0, 100.0), vec2(-40.0, 100.0), vec2(100.0, 0.0)),
            PathElement::Close
        ]);

        // Two patches' worth of faces
        assert!(plain.curved.len() >= 2);
    }

    #[test]
    fn test_non_finite_point_is_rejected_before_emission() {
        let path = [
            PathElement::MoveTo(vec2(0.0, 0.0)),
            PathElement::LineTo(vec2(10.0, 0.0)),
            PathElement::LineTo(vec2(Coord::NAN, 10.0)),
            PathElement::Close
        ];

        let mut emitted = 0;
        let mut sink = |_: TriangleVertex, _: TriangleVertex, _: TriangleVertex| emitted += 1;
        let result = triangulate(path.iter().copied(), &mut sink);
        assert!(matches!(result, Err(TriangulateError::NonFinitePoint(_))));
        assert_eq!(emitted, 0);
    }

    #[test]
    fn test_element_before_move_to_is_rejected() {
        let mut sink = |_: TriangleVertex, _: TriangleVertex, _: TriangleVertex| {};
        let result = triangulate(
            [PathElement::LineTo(vec2(1.0, 1.0))].iter().copied(), &mut sink);
        assert!(matches!(result, Err(TriangulateError::PathNotStarted)));
    }

    #[test]
    fn test_empty_path_emits_nothing() {
        let mut emitted = 0;
        let mut sink = |_: TriangleVertex, _: TriangleVertex, _: TriangleVertex| emitted += 1;
        triangulate(std::iter::empty(), &mut sink).unwrap();
        assert_eq!(emitted, 0);
    }
}
