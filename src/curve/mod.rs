//--------------------------------------------------------------------
// curve.rs
//--------------------------------------------------------------------
// Provides the cubic Bézier type, its projective classification and
// the Loop-Blinn coefficient generation
//--------------------------------------------------------------------

mod cubic_bezier;
mod classify;
mod coefficients;
mod orientation;

pub use cubic_bezier::*;
pub use classify::*;
pub use coefficients::*;
pub use orientation::*;
