//! IAU 2006 precession, as a rotation between the J2000 mean equator and
//! the mean equator of date.
//!
//! The model is the four-angle (eps0, psi_A, omega_A, chi_A) formulation.
//! The polynomial coefficients are secular series in Julian centuries of
//! TT; they are numerically delicate but the whole model remains a pure
//! function of time.

use crate::constants::{ASEC2RAD, DAYS_PER_JULIAN_CENTURY};
use crate::matrix::RotationMatrix3;

/// Rotation matrix taking mean-equator-J2000 coordinates to
/// mean-equator-of-date coordinates at `tt_days` (TT days since J2000).
///
/// The inverse transformation is the exact transpose.
pub fn precession_matrix(tt_days: f64) -> RotationMatrix3 {
    let t = tt_days / DAYS_PER_JULIAN_CENTURY;
    let eps0 = 84381.406;

    let psia = ((((-0.0000000951 * t + 0.000132851) * t - 0.00114045) * t - 1.0790069) * t
        + 5038.481507)
        * t;

    let omegaa = ((((0.0000003337 * t - 0.000000467) * t - 0.00772503) * t + 0.0512623) * t
        - 0.025754)
        * t
        + eps0;

    let chia = ((((-0.0000000560 * t + 0.000170663) * t - 0.00121197) * t - 2.3814292) * t
        + 10.556403)
        * t;

    let eps0 = eps0 * ASEC2RAD;
    let psia = psia * ASEC2RAD;
    let omegaa = omegaa * ASEC2RAD;
    let chia = chia * ASEC2RAD;

    let (sa, ca) = eps0.sin_cos();
    let (sb, cb) = (-psia).sin_cos();
    let (sc, cc) = (-omegaa).sin_cos();
    let (sd, cd) = chia.sin_cos();

    let xx = cd * cb - sb * sd * cc;
    let yx = cd * sb * ca + sd * cc * cb * ca - sa * sd * sc;
    let zx = cd * sb * sa + sd * cc * cb * sa + ca * sd * sc;
    let xy = -sd * cb - sb * cd * cc;
    let yy = -sd * sb * ca + cd * cc * cb * ca - sa * cd * sc;
    let zy = -sd * sb * sa + cd * cc * cb * sa + ca * cd * sc;
    let xz = sb * sc;
    let yz = -sc * cb * ca - sa * cc;
    let zz = -sc * cb * sa + cc * ca;

    RotationMatrix3::from_rows([[xx, yx, zx], [xy, yy, zy], [xz, yz, zz]])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_at_j2000() {
        let p = precession_matrix(0.0);
        assert!(p.max_difference(&RotationMatrix3::identity()) < 1e-9);
    }

    #[test]
    fn test_orthonormal_across_centuries() {
        for &tt in &[-73050.0, -36525.0, 0.0, 36525.0, 73050.0] {
            let p = precession_matrix(tt);
            assert!(p.is_rotation_matrix(1e-12), "tt = {}", tt);
        }
    }

    #[test]
    fn test_general_precession_rate() {
        // The equinox precesses ~50.3 arcsec/year; after one century a
        // vector toward the J2000 equinox moves ~1.4 degrees.
        let p = precession_matrix(DAYS_PER_JULIAN_CENTURY);
        let v = p.apply_to_vector([1.0, 0.0, 0.0]);
        let angle = v[0].clamp(-1.0, 1.0).acos().to_degrees();
        assert!(angle > 1.2 && angle < 1.6, "angle = {}", angle);
    }
}
