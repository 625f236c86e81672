//! Angular-geometry helpers shared by the event searches.

use almanac_core::constants::{C_AUDAY, DEG2RAD};
use almanac_core::{AstroError, AstroResult, EarthTilt};
use almanac_coords::frames::{rotation_eqj_eqd, rotate_vector};
use almanac_coords::{
    angle_between, ecliptic, equator_from_vector, AstroVector, Equatorial, Observer,
};
use almanac_coords::ecliptic::{rotate_equatorial_to_ecliptic, EclipticCoordinates};
use almanac_time::AstroTime;

use crate::body::Body;
use crate::provider::{Aberration, Ephemeris};

/// Wraps an angle difference into (-180, +180] degrees.
pub fn longitude_offset(diff: f64) -> f64 {
    let mut offset = diff;
    while offset <= -180.0 {
        offset += 360.0;
    }
    while offset > 180.0 {
        offset -= 360.0;
    }
    offset
}

/// Wraps an angle into [0, 360) degrees.
pub fn normalize_longitude(lon: f64) -> f64 {
    let mut lon = lon;
    while lon < 0.0 {
        lon += 360.0;
    }
    while lon >= 360.0 {
        lon -= 360.0;
    }
    lon
}

/// Topocentric RA/Dec of a body for a surface observer.
///
/// With `ofdate` the answer is in the true equator of date (the frame
/// the horizon projection wants); otherwise it stays in J2000.
pub fn equator<E: Ephemeris>(
    eph: &E,
    body: Body,
    time: AstroTime,
    observer: &Observer,
    ofdate: bool,
    aberration: Aberration,
) -> AstroResult<Equatorial> {
    let gc_observer = observer.geocentric_position(time);
    let gc = eph.geo_vector(body, time, aberration)?;
    let j2000 = AstroVector::new(
        gc.x - gc_observer.x,
        gc.y - gc_observer.y,
        gc.z - gc_observer.z,
        time,
    );
    if !ofdate {
        return Ok(equator_from_vector(&j2000));
    }
    let datevect = rotate_vector(&rotation_eqj_eqd(time), &j2000);
    Ok(equator_from_vector(&datevect))
}

/// Apparent geocentric ecliptic coordinates of the Sun, in the true
/// ecliptic of date.
///
/// Backdates the Earth by one AU of light travel; without that, season
/// times come out about eight minutes early.
pub fn sun_position<E: Ephemeris>(eph: &E, time: AstroTime) -> AstroResult<EclipticCoordinates> {
    let adjusted = time.add_days(-1.0 / C_AUDAY);
    let earth = eph.helio_vector(Body::Earth, adjusted)?;
    let sun2000 = AstroVector::new(-earth.x, -earth.y, -earth.z, adjusted);
    let sun_ofdate = rotate_vector(&rotation_eqj_eqd(adjusted), &sun2000);
    let true_obliq = DEG2RAD * EarthTilt::at(adjusted.tt).tobl;
    Ok(rotate_equatorial_to_ecliptic(&sun_ofdate, true_obliq))
}

/// Heliocentric ecliptic longitude of a body in degrees, J2000 ecliptic.
///
/// The Sun has no heliocentric longitude (`InvalidBody`).
pub fn ecliptic_longitude<E: Ephemeris>(
    eph: &E,
    body: Body,
    time: AstroTime,
) -> AstroResult<f64> {
    if body == Body::Sun {
        return Err(AstroError::invalid_body("Sun"));
    }
    let hv = eph.helio_vector(body, time)?;
    Ok(ecliptic(&hv).elon)
}

/// Angle between a body and the Sun as seen from the Earth, in degrees.
pub fn angle_from_sun<E: Ephemeris>(eph: &E, body: Body, time: AstroTime) -> AstroResult<f64> {
    if body == Body::Earth {
        return Err(AstroError::EarthNotAllowed);
    }
    let sv = eph.geo_vector(Body::Sun, time, Aberration::Corrected)?;
    let bv = eph.geo_vector(body, time, Aberration::Corrected)?;
    angle_between(&sv, &bv)
}

/// Geocentric ecliptic longitude of a body relative to the Sun's, in
/// [0, 360) degrees.
///
/// 0 is conjunction with the Sun; 180 means opposite the Sun in
/// longitude.
pub fn longitude_from_sun<E: Ephemeris>(
    eph: &E,
    body: Body,
    time: AstroTime,
) -> AstroResult<f64> {
    if body == Body::Earth {
        return Err(AstroError::EarthNotAllowed);
    }
    let sv = eph.geo_vector(Body::Sun, time, Aberration::Corrected)?;
    let se = ecliptic(&sv);
    let bv = eph.geo_vector(body, time, Aberration::Corrected)?;
    let be = ecliptic(&bv);
    Ok(normalize_longitude(be.elon - se.elon))
}

/// The Moon's phase angle in [0, 360) degrees: 0 new, 90 first quarter,
/// 180 full, 270 third quarter.
pub fn moon_phase<E: Ephemeris>(eph: &E, time: AstroTime) -> AstroResult<f64> {
    longitude_from_sun(eph, Body::Moon, time)
}
