//------------------------------------------------------------------------------
// mod.rs
//------------------------------------------------------------------------------
// Provides the PathElement stream the triangulator consumes
//------------------------------------------------------------------------------

use std::fmt::*;

use crate::geometry::*;

// The PathElement enum
#[derive(Clone, Copy)]
pub enum PathElement {
    MoveTo(Vec2),
    LineTo(Vec2),
    QuadTo(Vec2, Vec2),
    CubicTo(Vec2, Vec2, Vec2),
    Close
}

// Implementing the display
impl Display for PathElement {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            PathElement::MoveTo(target) => write!(f, "MoveTo({})", target),
            PathElement::LineTo(target) => write!(f, "LineTo({})", target),
            PathElement::QuadTo(c, t) => write!(f, "QuadTo({}, {})", c, t),
            PathElement::CubicTo(c1, c2, t) => write!(f, "CubicTo({}, {}, {})", c1, c2, t),
            PathElement::Close => write!(f, "Close()"),
        }
    }
}

impl PathElement {
    // The first control point carrying a non-finite coordinate, if any
    pub fn non_finite_point(&self) -> Option<Vec2> {
        fn check(points: &[Vec2]) -> Option<Vec2> {
            points.iter().find(|p| !p.is_finite()).copied()
        }

        match self {
            PathElement::MoveTo(p) | PathElement::LineTo(p) => check(&[*p]),
            PathElement::QuadTo(c, t) => check(&[*c, *t]),
            PathElement::CubicTo(c1, c2, t) => check(&[*c1, *c2, *t]),
            PathElement::Close => None,
        }
    }
}

// The Path is just a vector of path elements
pub type Path = Vec<PathElement>;
