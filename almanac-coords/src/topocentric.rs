//! Apparent horizontal coordinates for a given observer.

use almanac_core::constants::{DEG2RAD, RAD2DEG};
use almanac_time::AstroTime;

use crate::frames::rotation_eqd_hor;
use crate::observer::Observer;
use crate::refraction::{refraction_angle, Refraction};

/// Azimuth/altitude of a body, plus its RA/Dec adjusted for the same
/// refraction so the two readings stay consistent.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HorizontalCoordinates {
    /// Degrees clockwise from north, [0, 360).
    pub azimuth: f64,
    /// Degrees above the horizon, [-90, +90].
    pub altitude: f64,
    /// Right ascension in sidereal hours, refracted when refraction is on.
    pub ra: f64,
    /// Declination in degrees, refracted when refraction is on.
    pub dec: f64,
}

/// Projects equator-of-date angles onto the observer's sky.
///
/// `ra` is in sidereal hours, `dec` in degrees, both in the true equator
/// of date. With a refraction model selected, the altitude is lifted by
/// the model and the returned RA/Dec are re-derived from the lifted
/// direction.
pub fn horizon(
    time: AstroTime,
    observer: &Observer,
    ra: f64,
    dec: f64,
    refraction: Refraction,
) -> HorizontalCoordinates {
    let rot = rotation_eqd_hor(time, observer);
    let uz = rot.rows()[2];

    let dec_rad = dec * DEG2RAD;
    let ra_rad = ra * 15.0 * DEG2RAD;
    let cosdc = dec_rad.cos();
    let p = [
        cosdc * ra_rad.cos(),
        cosdc * ra_rad.sin(),
        dec_rad.sin(),
    ];
    let [pn, pw, pz] = rot.apply_to_vector(p);

    let mut proj = (pn * pn + pw * pw).sqrt();
    let mut az = 0.0;
    if proj > 0.0 {
        az = -RAD2DEG * pw.atan2(pn);
        if az < 0.0 {
            az += 360.0;
        }
        if az >= 360.0 {
            az -= 360.0;
        }
    }
    let mut zd = RAD2DEG * proj.atan2(pz);
    let mut hor_ra = ra;
    let mut hor_dec = dec;

    if refraction != Refraction::None {
        let zd0 = zd;
        let refr = refraction_angle(refraction, 90.0 - zd);
        zd -= refr;
        if refr > 0.0 && zd > 3.0e-4 {
            // Slide the direction vector along the vertical circle to
            // the refracted zenith distance, then read RA/Dec off the
            // moved vector.
            let sinzd = (zd * DEG2RAD).sin();
            let coszd = (zd * DEG2RAD).cos();
            let sinzd0 = (zd0 * DEG2RAD).sin();
            let coszd0 = (zd0 * DEG2RAD).cos();
            let mut pr = [0.0; 3];
            for j in 0..3 {
                pr[j] = (p[j] - coszd0 * uz[j]) / sinzd0 * sinzd + uz[j] * coszd;
            }
            proj = (pr[0] * pr[0] + pr[1] * pr[1]).sqrt();
            if proj > 0.0 {
                hor_ra = RAD2DEG * pr[1].atan2(pr[0]) / 15.0;
                if hor_ra < 0.0 {
                    hor_ra += 24.0;
                }
            } else {
                hor_ra = 0.0;
            }
            hor_dec = RAD2DEG * pr[2].atan2(proj);
        }
    }

    HorizontalCoordinates {
        azimuth: az,
        altitude: 90.0 - zd,
        ra: hor_ra,
        dec: hor_dec,
    }
}
