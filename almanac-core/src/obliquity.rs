//! Mean obliquity of the ecliptic and the combined Earth-tilt record.

use crate::constants::{DAYS_PER_JULIAN_CENTURY, DEG2RAD};
use crate::nutation::{iau2000b, NutationAngles};

/// Mean obliquity of the ecliptic in degrees at `tt_days` (TT days since
/// J2000), from the IAU 2006 polynomial.
pub fn mean_obliquity(tt_days: f64) -> f64 {
    let t = tt_days / DAYS_PER_JULIAN_CENTURY;
    let asec = ((((-0.0000000434 * t - 0.000000576) * t + 0.00200340) * t - 0.0001831) * t
        - 46.836769)
        * t
        + 84381.406;
    asec / 3600.0
}

/// Earth orientation angles at one moment: nutation, mean and true
/// obliquity, and the equation of the equinoxes.
///
/// This is the deterministic Earth-orientation input consumed by the
/// of-date frames and by apparent sidereal time.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EarthTilt {
    /// TT days since J2000 at which the angles were evaluated.
    pub tt: f64,
    /// Nutation in longitude, arcseconds.
    pub dpsi: f64,
    /// Nutation in obliquity, arcseconds.
    pub deps: f64,
    /// Mean obliquity of the ecliptic, degrees.
    pub mobl: f64,
    /// True obliquity of the ecliptic (mean + nutation), degrees.
    pub tobl: f64,
    /// Equation of the equinoxes, seconds of time.
    pub ee: f64,
}

impl EarthTilt {
    /// Evaluates the tilt angles at `tt_days` (TT days since J2000).
    pub fn at(tt_days: f64) -> Self {
        let NutationAngles { dpsi, deps } = iau2000b(tt_days);
        let mobl = mean_obliquity(tt_days);
        let tobl = mobl + deps / 3600.0;
        let ee = dpsi * (mobl * DEG2RAD).cos() / 15.0;
        Self {
            tt: tt_days,
            dpsi,
            deps,
            mobl,
            tobl,
            ee,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_obliquity_j2000() {
        // 84381.406 arcsec = 23.4392794... degrees at J2000.
        let obl = mean_obliquity(0.0);
        assert!((obl - 84381.406 / 3600.0).abs() < 1e-12);
    }

    #[test]
    fn test_mean_obliquity_decreases() {
        // Obliquity is shrinking by ~47 arcsec per century in this era.
        let now = mean_obliquity(0.0);
        let later = mean_obliquity(DAYS_PER_JULIAN_CENTURY);
        assert!(later < now);
        assert!((now - later) * 3600.0 > 46.0);
        assert!((now - later) * 3600.0 < 48.0);
    }

    #[test]
    fn test_tilt_true_obliquity_combines_nutation() {
        let tilt = EarthTilt::at(7000.0);
        assert!((tilt.tobl - tilt.mobl - tilt.deps / 3600.0).abs() < 1e-15);
        assert!(tilt.mobl > 23.0 && tilt.mobl < 24.0);
    }

    #[test]
    fn test_equation_of_equinoxes_is_small() {
        // |ee| stays below ~1.2 seconds of time.
        for &tt in &[-10000.0, 0.0, 5000.0, 20000.0] {
            let tilt = EarthTilt::at(tt);
            assert!(tilt.ee.abs() < 1.5);
        }
    }
}
