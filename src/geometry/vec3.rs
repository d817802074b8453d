//--------------------------------------------------------------------
// vec3.rs
//--------------------------------------------------------------------
// Provides a three-element vector class, used both for homogeneous
// control points and for the (k,l,m) texture triples
//--------------------------------------------------------------------

use crate::derive_more::*;

use super::*;

// Vec3
#[derive(Copy, Clone, Add, Sub, Mul, Div, AddAssign, SubAssign, Neg, PartialEq,
    MulAssign, DivAssign, From, Into, Display, Constructor)]
#[display(fmt = "({},{},{})", x, y, z)]
pub struct Vec3 { pub x: Coord, pub y: Coord, pub z: Coord }

impl Vec3 {
    pub fn zero() -> Vec3 { Vec3 { x: 0.0, y: 0.0, z: 0.0 } }

    pub fn dot(&self, other: Vec3) -> Coord {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn cross(&self, other: Vec3) -> Vec3 {
        Vec3 {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x
        }
    }

    pub fn length_sq(&self) -> Coord { self.dot(*self) }
    pub fn length(&self) -> Coord { self.length_sq().sqrt() }
}

// Implement scalar * mul as required
impl core::ops::Mul<Vec3> for Coord {
    type Output = Vec3;
    fn mul(self, rhs: Vec3) -> Vec3 { Vec3::new(self * rhs.x, self * rhs.y, self * rhs.z) }
}

impl std::fmt::Debug for Vec3 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)
    }
}
