//--------------------------------------------------------------------
// geometry.rs
//--------------------------------------------------------------------
// Provides the geometric constructs used in the project
//--------------------------------------------------------------------

mod coord_utils;
mod vec2;
mod vec3;

pub type Coord = f64;

pub use coord_utils::*;
pub use vec2::*;
pub use vec3::*;
