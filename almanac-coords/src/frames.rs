//! Rotation matrices between the four orientation frames.
//!
//! The frames are EQJ (J2000 mean equator), EQD (true equator of date),
//! ECL (J2000 ecliptic), and HOR (the observer's horizon). For every
//! ordered pair there is a `rotation_<from>_<to>` function; the two
//! date-independent ECL/EQJ rotations take no time argument, and the
//! HOR rotations also need an observer. All twelve return matrices that
//! act on column vectors in the [`RotationMatrix3`] convention, so
//! chaining and inverting reduce to products and transposes.

use almanac_core::constants::{DEG2RAD, OBLIQUITY_J2000_RAD};
use almanac_core::{nutation_matrix, precession_matrix, EarthTilt, RotationMatrix3};
use almanac_time::{sidereal_time, AstroTime};

use crate::observer::Observer;
use crate::vector::AstroVector;

/// The rotation that changes nothing; useful as a fold seed.
pub fn identity_rotation() -> RotationMatrix3 {
    RotationMatrix3::identity()
}

/// The rotation that applies `a` first, then `b`.
pub fn combine_rotation(a: &RotationMatrix3, b: &RotationMatrix3) -> RotationMatrix3 {
    b.multiply(a)
}

/// The exact inverse of a frame rotation (its transpose).
pub fn inverse_rotation(rotation: &RotationMatrix3) -> RotationMatrix3 {
    rotation.transpose()
}

/// Applies a frame rotation to a vector, preserving its time tag.
pub fn rotate_vector(rotation: &RotationMatrix3, vector: &AstroVector) -> AstroVector {
    let out = rotation.apply_to_vector([vector.x, vector.y, vector.z]);
    AstroVector::new(out[0], out[1], out[2], vector.t)
}

/// EQJ to ECL: a fixed rotation about the x axis by the J2000 obliquity.
pub fn rotation_eqj_ecl() -> RotationMatrix3 {
    let c = OBLIQUITY_J2000_RAD.cos();
    let s = OBLIQUITY_J2000_RAD.sin();
    RotationMatrix3::from_rows([[1.0, 0.0, 0.0], [0.0, c, s], [0.0, -s, c]])
}

/// ECL to EQJ.
pub fn rotation_ecl_eqj() -> RotationMatrix3 {
    rotation_eqj_ecl().transpose()
}

/// EQJ to EQD: precession to the date's mean equator, then nutation to
/// the true equator.
pub fn rotation_eqj_eqd(time: AstroTime) -> RotationMatrix3 {
    let tilt = EarthTilt::at(time.tt);
    nutation_matrix(&tilt).multiply(&precession_matrix(time.tt))
}

/// EQD to EQJ.
pub fn rotation_eqd_eqj(time: AstroTime) -> RotationMatrix3 {
    rotation_eqj_eqd(time).transpose()
}

/// EQD to HOR: rows are the observer's north, west, and zenith unit
/// vectors, spun from local to Greenwich orientation by the sidereal
/// angle.
///
/// In the resulting frame x points north, y west, z up; see
/// [`horizon_from_vector`](crate::spherical::horizon_from_vector) for
/// the azimuth reading of that layout.
pub fn rotation_eqd_hor(time: AstroTime, observer: &Observer) -> RotationMatrix3 {
    let phi = observer.latitude * DEG2RAD;
    let sinlat = phi.sin();
    let coslat = phi.cos();
    let lam = observer.longitude * DEG2RAD;
    let sinlon = lam.sin();
    let coslon = lam.cos();

    let uze = [coslat * coslon, coslat * sinlon, sinlat];
    let une = [-sinlat * coslon, -sinlat * sinlon, coslat];
    let uwe = [sinlon, -coslon, 0.0];

    let spin_angle = -15.0 * sidereal_time(&time);
    let un = spin(spin_angle, une);
    let uw = spin(spin_angle, uwe);
    let uz = spin(spin_angle, uze);

    RotationMatrix3::from_rows([un, uw, uz])
}

/// HOR to EQD.
pub fn rotation_hor_eqd(time: AstroTime, observer: &Observer) -> RotationMatrix3 {
    rotation_eqd_hor(time, observer).transpose()
}

/// EQJ to HOR.
pub fn rotation_eqj_hor(time: AstroTime, observer: &Observer) -> RotationMatrix3 {
    combine_rotation(&rotation_eqj_eqd(time), &rotation_eqd_hor(time, observer))
}

/// HOR to EQJ.
pub fn rotation_hor_eqj(time: AstroTime, observer: &Observer) -> RotationMatrix3 {
    rotation_eqj_hor(time, observer).transpose()
}

/// ECL to EQD.
pub fn rotation_ecl_eqd(time: AstroTime) -> RotationMatrix3 {
    combine_rotation(&rotation_ecl_eqj(), &rotation_eqj_eqd(time))
}

/// EQD to ECL.
pub fn rotation_eqd_ecl(time: AstroTime) -> RotationMatrix3 {
    rotation_ecl_eqd(time).transpose()
}

/// ECL to HOR.
pub fn rotation_ecl_hor(time: AstroTime, observer: &Observer) -> RotationMatrix3 {
    combine_rotation(&rotation_ecl_eqd(time), &rotation_eqd_hor(time, observer))
}

/// HOR to ECL.
pub fn rotation_hor_ecl(time: AstroTime, observer: &Observer) -> RotationMatrix3 {
    rotation_ecl_hor(time, observer).transpose()
}

// Rotates a vector about the z axis by `angle` degrees, clockwise as
// seen from the +z direction.
fn spin(angle: f64, pos: [f64; 3]) -> [f64; 3] {
    let angr = angle * DEG2RAD;
    let c = angr.cos();
    let s = angr.sin();
    [c * pos[0] + s * pos[1], c * pos[1] - s * pos[0], pos[2]]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_time() -> AstroTime {
        AstroTime::from_ut(7937.5)
    }

    fn sample_observer() -> Observer {
        Observer::new(28.5, -80.6, 12.0).unwrap()
    }

    fn assert_identity(m: &RotationMatrix3) {
        assert!(
            m.max_difference(&RotationMatrix3::identity()) < 1e-12,
            "not identity:\n{}",
            m
        );
    }

    #[test]
    fn test_every_pair_inverts() {
        let time = sample_time();
        let obs = sample_observer();
        assert_identity(&rotation_eqj_ecl().multiply(&rotation_ecl_eqj()));
        assert_identity(&rotation_eqj_eqd(time).multiply(&rotation_eqd_eqj(time)));
        assert_identity(&rotation_eqd_hor(time, &obs).multiply(&rotation_hor_eqd(time, &obs)));
        assert_identity(&rotation_eqj_hor(time, &obs).multiply(&rotation_hor_eqj(time, &obs)));
        assert_identity(&rotation_ecl_eqd(time).multiply(&rotation_eqd_ecl(time)));
        assert_identity(&rotation_ecl_hor(time, &obs).multiply(&rotation_hor_ecl(time, &obs)));
    }

    #[test]
    fn test_all_matrices_are_rotations() {
        let time = sample_time();
        let obs = sample_observer();
        for m in [
            rotation_eqj_ecl(),
            rotation_eqj_eqd(time),
            rotation_eqd_hor(time, &obs),
            rotation_eqj_hor(time, &obs),
            rotation_ecl_eqd(time),
            rotation_ecl_hor(time, &obs),
        ] {
            assert!(m.is_rotation_matrix(1e-12), "{}", m);
        }
    }

    #[test]
    fn test_composed_path_matches_direct() {
        // ECL -> EQJ -> EQD -> HOR composed stepwise must equal the
        // direct ECL -> HOR matrix.
        let time = sample_time();
        let obs = sample_observer();
        let stepwise = combine_rotation(
            &combine_rotation(&rotation_ecl_eqj(), &rotation_eqj_eqd(time)),
            &rotation_eqd_hor(time, &obs),
        );
        let direct = rotation_ecl_hor(time, &obs);
        assert!(stepwise.max_difference(&direct) < 1e-14);
    }

    #[test]
    fn test_ecliptic_pole_tilts_by_obliquity() {
        let pole = rotation_eqj_ecl().apply_to_vector([0.0, 0.0, 1.0]);
        assert!((pole[2] - OBLIQUITY_J2000_RAD.cos()).abs() < 1e-15);
        assert!(pole[0].abs() < 1e-15);
    }

    #[test]
    fn test_observer_position_maps_near_zenith() {
        // The observer's own geocentric position, taken to the horizon
        // frame, points almost straight up. The residual is the
        // geodetic/geocentric latitude difference on the ellipsoid.
        let time = sample_time();
        let obs = sample_observer();
        let pos = obs.geocentric_position(time);
        let hor = rotate_vector(&rotation_eqj_hor(time, &obs), &pos);
        let altitude = (hor.z / hor.length()).asin().to_degrees();
        assert!(altitude > 89.5, "altitude = {}", altitude);
    }

    #[test]
    fn test_rotate_vector_keeps_time_tag() {
        let time = sample_time();
        let v = AstroVector::new(1.0, 2.0, 3.0, time);
        let out = rotate_vector(&rotation_eqj_ecl(), &v);
        assert_eq!(out.t, time);
    }

    #[test]
    fn test_identity_and_combine() {
        let a = rotation_eqj_ecl();
        let combined = combine_rotation(&identity_rotation(), &a);
        assert!(combined.max_difference(&a) < 1e-15);
        let inv = inverse_rotation(&a);
        assert_identity(&combine_rotation(&a, &inv));
    }
}
