//! Coordinate machinery for the almanac workspace.
//!
//! Positions are [`AstroVector`] values, Cartesian AU triples tagged
//! with the [`AstroTime`](almanac_time::AstroTime) they refer to. This
//! crate converts them between angular forms (spherical, equatorial,
//! horizontal, ecliptic) and rotates them between the four orientation
//! frames through the functions in [`frames`].

pub mod ecliptic;
pub mod frames;
pub mod observer;
pub mod refraction;
pub mod spherical;
pub mod topocentric;
pub mod vector;

pub use ecliptic::{ecliptic, EclipticCoordinates};
pub use frames::{
    combine_rotation, identity_rotation, inverse_rotation, rotate_vector, rotation_ecl_eqd,
    rotation_ecl_eqj, rotation_ecl_hor, rotation_eqd_ecl, rotation_eqd_eqj, rotation_eqd_hor,
    rotation_eqj_ecl, rotation_eqj_eqd, rotation_eqj_hor, rotation_hor_ecl, rotation_hor_eqd,
    rotation_hor_eqj,
};
pub use observer::Observer;
pub use refraction::{inverse_refraction_angle, refraction_angle, Refraction};
pub use spherical::{
    equator_from_vector, horizon_from_vector, sphere_from_vector, vector_from_equator,
    vector_from_horizon, vector_from_sphere, Equatorial, Spherical,
};
pub use topocentric::{horizon, HorizontalCoordinates};
pub use vector::{angle_between, AstroVector};
