//--------------------------------------------------------------------
// coord_utils.rs
//--------------------------------------------------------------------
// Provides utilities to work with the coordinate class
//--------------------------------------------------------------------

use super::*;

pub const EPSILON: Coord = 1.0 / 32768.0;
pub const EPSILON2: Coord = EPSILON * EPSILON;

// Some utility functions for Coord
// trait used only for implementation
pub trait Geometry where Self: Sized {
    fn roughly_zero(self) -> bool;
    fn roughly_zero_squared(self) -> bool;
}

impl Geometry for Coord {
    fn roughly_zero(self) -> bool { self > -EPSILON && self < EPSILON }
    fn roughly_zero_squared(self) -> bool { self > -EPSILON2 && self < EPSILON2 }
}
