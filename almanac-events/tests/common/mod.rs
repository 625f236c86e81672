//! A self-contained analytic sky model for exercising the event
//! searches end to end.
//!
//! Orbits are circles in the J2000 ecliptic plane traversed at the mean
//! rate, with a radial eccentricity modulation where a test needs
//! apsides. The numbers are nowhere near arcsecond-accurate, but every
//! geometric relationship the searches rely on (synodic cycles, seasons,
//! elongation windows, horizon crossings) comes out right.

// Not every test binary uses every helper.
#![allow(dead_code)]

use almanac_core::constants::DEG2RAD;
use almanac_core::{AstroError, AstroResult};
use almanac_coords::frames::{rotate_vector, rotation_ecl_eqj};
use almanac_coords::AstroVector;
use almanac_events::{
    angle_from_sun, ecliptic_longitude, Body, Ephemeris, IlluminationInfo, IlluminationSource,
};
use almanac_time::AstroTime;

pub const MOON_MEAN_DIST_AU: f64 = 0.00257;
pub const MOON_ECC: f64 = 0.0549;
pub const MOON_SIDEREAL_MONTH: f64 = 27.321582;
pub const MOON_ANOMALISTIC_MONTH: f64 = 27.55455;
pub const MARS_ECC: f64 = 0.0934;

pub struct ToySky;

// Mean longitude at J2000 in degrees, period in days, radius in AU.
fn planet_elements(body: Body) -> Option<(f64, f64, f64)> {
    match body {
        Body::Mercury => Some((250.0, 87.969, 0.387)),
        Body::Venus => Some((182.0, 224.701, 0.723)),
        Body::Earth => Some((100.46, 365.256, 1.0)),
        Body::Mars => Some((355.45, 686.980, 1.524)),
        _ => None,
    }
}

// A position in the J2000 ecliptic plane, rotated into EQJ.
fn ecl_position(lon_deg: f64, radius: f64, time: AstroTime) -> AstroVector {
    let lon = lon_deg * DEG2RAD;
    let ecl = AstroVector::new(radius * lon.cos(), radius * lon.sin(), 0.0, time);
    rotate_vector(&rotation_ecl_eqj(), &ecl)
}

// Geocentric Moon: constant sidereal rate in longitude, radial
// modulation on the anomalistic cycle with perigee at t = 0.
fn geo_moon(time: AstroTime) -> AstroVector {
    let lon = 218.32 + 360.0 * time.tt / MOON_SIDEREAL_MONTH;
    let dist = MOON_MEAN_DIST_AU
        * (1.0 - MOON_ECC * (2.0 * std::f64::consts::PI * time.tt / MOON_ANOMALISTIC_MONTH).cos());
    ecl_position(lon, dist, time)
}

impl Ephemeris for ToySky {
    fn helio_vector(&self, body: Body, time: AstroTime) -> AstroResult<AstroVector> {
        if body == Body::Sun {
            return Ok(AstroVector::new(0.0, 0.0, 0.0, time));
        }
        if body == Body::Moon {
            let e = self.helio_vector(Body::Earth, time)?;
            let m = geo_moon(time);
            return Ok(AstroVector::new(e.x + m.x, e.y + m.y, e.z + m.z, time));
        }
        let (l0, period, radius) = planet_elements(body)
            .ok_or_else(|| AstroError::invalid_body(body.name()))?;
        let lon = l0 + 360.0 * time.tt / period;
        let radius = if body == Body::Mars {
            radius * (1.0 - MARS_ECC * (2.0 * std::f64::consts::PI * time.tt / period).cos())
        } else {
            radius
        };
        Ok(ecl_position(lon, radius, time))
    }
}

// Toy Venus magnitude: a parabola in the relative heliocentric
// longitude, brightest when Venus leads or trails the Earth by 20
// degrees. That puts the peak inside the (10, 30) search window.
impl IlluminationSource for ToySky {
    fn illumination(&self, body: Body, time: AstroTime) -> AstroResult<IlluminationInfo> {
        if body != Body::Venus {
            return Err(AstroError::invalid_body(body.name()));
        }
        let rlon = relative_longitude(self, body, time)?;
        let mag = -4.0 + ((rlon.abs() - 20.0) / 50.0).powi(2);
        Ok(IlluminationInfo {
            mag,
            phase_angle: angle_from_sun(self, body, time)?,
            helio_dist: self.helio_vector(body, time)?.length(),
            ring_tilt: 0.0,
        })
    }
}

/// Heliocentric longitude of `body` minus the Earth's, in (-180, +180].
pub fn relative_longitude<E: Ephemeris>(
    eph: &E,
    body: Body,
    time: AstroTime,
) -> AstroResult<f64> {
    let plon = ecliptic_longitude(eph, body, time)?;
    let elon = ecliptic_longitude(eph, Body::Earth, time)?;
    let mut diff = plon - elon;
    while diff <= -180.0 {
        diff += 360.0;
    }
    while diff > 180.0 {
        diff -= 360.0;
    }
    Ok(diff)
}
