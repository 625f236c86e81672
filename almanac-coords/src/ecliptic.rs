//! Ecliptic angular coordinates.

use almanac_core::constants::{OBLIQUITY_J2000_RAD, RAD2DEG};

use crate::vector::AstroVector;

/// A position expressed against an ecliptic plane: the rotated Cartesian
/// components plus ecliptic latitude and longitude in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EclipticCoordinates {
    pub ex: f64,
    pub ey: f64,
    pub ez: f64,
    /// Ecliptic latitude in degrees, [-90, +90].
    pub elat: f64,
    /// Ecliptic longitude in degrees, [0, 360).
    pub elon: f64,
}

/// Converts a J2000 equatorial vector to J2000 ecliptic coordinates.
pub fn ecliptic(equ: &AstroVector) -> EclipticCoordinates {
    rotate_equatorial_to_ecliptic(equ, OBLIQUITY_J2000_RAD)
}

/// Tilts an equatorial vector onto an ecliptic plane with the given
/// obliquity and reads off the angles.
///
/// Callers working in the true equator of date pass the true obliquity
/// of that date instead of the J2000 value.
pub fn rotate_equatorial_to_ecliptic(
    pos: &AstroVector,
    obliq_radians: f64,
) -> EclipticCoordinates {
    let cos_ob = obliq_radians.cos();
    let sin_ob = obliq_radians.sin();
    let ex = pos.x;
    let ey = pos.y * cos_ob + pos.z * sin_ob;
    let ez = -pos.y * sin_ob + pos.z * cos_ob;
    let xyproj = (ex * ex + ey * ey).sqrt();
    let mut elon = 0.0;
    if xyproj > 0.0 {
        elon = RAD2DEG * ey.atan2(ex);
        if elon < 0.0 {
            elon += 360.0;
        }
    }
    let elat = RAD2DEG * ez.atan2(xyproj);
    EclipticCoordinates { ex, ey, ez, elat, elon }
}

#[cfg(test)]
mod tests {
    use super::*;
    use almanac_time::AstroTime;

    fn v(x: f64, y: f64, z: f64) -> AstroVector {
        AstroVector::new(x, y, z, AstroTime::from_ut(0.0))
    }

    #[test]
    fn test_x_axis_unchanged() {
        // The x axis lies in both planes.
        let ecl = ecliptic(&v(1.0, 0.0, 0.0));
        assert_eq!(ecl.elon, 0.0);
        assert!(ecl.elat.abs() < 1e-15);
    }

    #[test]
    fn test_equatorial_pole_latitude() {
        let ecl = ecliptic(&v(0.0, 0.0, 1.0));
        let expected = 90.0 - OBLIQUITY_J2000_RAD.to_degrees();
        assert!((ecl.elat - expected).abs() < 1e-12);
    }

    #[test]
    fn test_longitude_wraps_positive() {
        let ecl = ecliptic(&v(1.0, -0.1, 0.0));
        assert!(ecl.elon > 270.0 && ecl.elon < 360.0, "elon = {}", ecl.elon);
    }
}
