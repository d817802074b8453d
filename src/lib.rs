//--------------------------------------------------------------------
// lib.rs
//--------------------------------------------------------------------
// Declaration of all modules occurs here
//--------------------------------------------------------------------

extern crate arrayvec;
extern crate derive_more;
extern crate spade;
extern crate thiserror;
extern crate tracing;

#[cfg(test)]
extern crate approx;

mod geometry;
mod curve;
mod path;
mod triangulation;

pub use geometry::{Coord, Geometry, Vec2, Vec3};
pub use curve::*;
pub use path::*;
pub use triangulation::*;
