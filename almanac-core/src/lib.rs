//! Foundation crate for the almanac workspace.
//!
//! Provides the pieces every higher layer shares: physical constants, the
//! unified error type, 3x3 rotation matrices, and the Earth-orientation
//! models (mean obliquity, IAU 2000B nutation, IAU 2006 precession) as
//! pure functions of Terrestrial Time.
//!
//! Nothing here performs I/O or holds mutable state; all computations are
//! deterministic functions of their arguments.

pub mod constants;
pub mod errors;
pub mod matrix;
pub mod nutation;
pub mod obliquity;
pub mod precession;

pub use errors::{AstroError, AstroResult};
pub use matrix::RotationMatrix3;
pub use nutation::{iau2000b, nutation_matrix, NutationAngles};
pub use obliquity::{mean_obliquity, EarthTilt};
pub use precession::precession_matrix;
