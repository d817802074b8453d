//--------------------------------------------------------------------
// vec2.rs
//--------------------------------------------------------------------
// Provides a two-element vector class
//--------------------------------------------------------------------

use crate::derive_more::*;

use super::*;

// Vec2
#[derive(Copy, Clone, Add, Sub, Mul, Div, AddAssign, SubAssign, Neg, PartialEq,
    MulAssign, DivAssign, From, Into, Display, Constructor)]
#[display(fmt = "({},{})", x, y)]
pub struct Vec2 { pub x: Coord, pub y: Coord }

impl Vec2 {
    pub fn dot(&self, other: Vec2) -> Coord { self.x * other.x + self.y * other.y }
    pub fn cross(&self, other: Vec2) -> Coord { self.x * other.y - self.y * other.x }

    pub fn length_sq(&self) -> Coord { self.dot(*self) }

    pub fn is_finite(&self) -> bool { self.x.is_finite() && self.y.is_finite() }

    pub fn roughly_equals(&self, other: Vec2) -> bool { (*self - other).length_sq().roughly_zero_squared() }
}

// Implement scalar * mul as required
impl core::ops::Mul<Vec2> for Coord {
    type Output = Vec2;
    fn mul(self, rhs: Vec2) -> Vec2 { Vec2::new(self * rhs.x, self * rhs.y) }
}

impl std::fmt::Debug for Vec2 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)
    }
}
