//! Spherical and equatorial angular forms and their vector conversions.

use almanac_core::constants::{DEG2RAD, RAD2DEG};
use almanac_time::AstroTime;

use crate::refraction::{inverse_refraction_angle, refraction_angle, Refraction};
use crate::vector::AstroVector;

/// Latitude/longitude/distance form of a position.
///
/// `lat` is in degrees [-90, +90], `lon` in degrees [0, 360), `dist`
/// in AU.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Spherical {
    pub lat: f64,
    pub lon: f64,
    pub dist: f64,
}

/// Equatorial angular coordinates: right ascension in sidereal hours,
/// declination in degrees, distance in AU.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Equatorial {
    pub ra: f64,
    pub dec: f64,
    pub dist: f64,
}

/// Converts a vector to spherical form.
///
/// A zero vector maps to `lat = lon = dist = 0`; on the poles `lon` is 0.
pub fn sphere_from_vector(vector: &AstroVector) -> Spherical {
    let xyproj = vector.x * vector.x + vector.y * vector.y;
    let dist = (xyproj + vector.z * vector.z).sqrt();
    if xyproj == 0.0 {
        let lat = if vector.z == 0.0 {
            0.0
        } else if vector.z < 0.0 {
            -90.0
        } else {
            90.0
        };
        return Spherical { lat, lon: 0.0, dist };
    }
    let mut lon = RAD2DEG * vector.y.atan2(vector.x);
    if lon < 0.0 {
        lon += 360.0;
    }
    let lat = RAD2DEG * vector.z.atan2(xyproj.sqrt());
    Spherical { lat, lon, dist }
}

/// Converts spherical form back to a vector tagged with `time`.
pub fn vector_from_sphere(sphere: &Spherical, time: AstroTime) -> AstroVector {
    let lat_rad = sphere.lat * DEG2RAD;
    let lon_rad = sphere.lon * DEG2RAD;
    let rcos = sphere.dist * lat_rad.cos();
    AstroVector {
        x: rcos * lon_rad.cos(),
        y: rcos * lon_rad.sin(),
        z: sphere.dist * lat_rad.sin(),
        t: time,
    }
}

/// Reads a vector in an equatorial frame as RA/Dec angles.
pub fn equator_from_vector(vector: &AstroVector) -> Equatorial {
    let sphere = sphere_from_vector(vector);
    Equatorial {
        ra: sphere.lon / 15.0,
        dec: sphere.lat,
        dist: sphere.dist,
    }
}

/// Builds an equatorial-frame vector from RA/Dec angles.
pub fn vector_from_equator(equ: &Equatorial, time: AstroTime) -> AstroVector {
    let sphere = Spherical {
        lat: equ.dec,
        lon: 15.0 * equ.ra,
        dist: equ.dist,
    };
    vector_from_sphere(&sphere, time)
}

/// Reads a horizon-frame vector as azimuth/altitude, optionally applying
/// refraction to the altitude.
///
/// The returned `lon` is azimuth measured clockwise from north; `lat` is
/// the (possibly refracted) altitude.
pub fn horizon_from_vector(vector: &AstroVector, refraction: Refraction) -> Spherical {
    let sphere = sphere_from_vector(vector);
    Spherical {
        lat: sphere.lat + refraction_angle(refraction, sphere.lat),
        lon: toggle_azimuth(sphere.lon),
        dist: sphere.dist,
    }
}

/// Builds a horizon-frame vector from azimuth/altitude, undoing the given
/// refraction correction first.
pub fn vector_from_horizon(
    sphere: &Spherical,
    time: AstroTime,
    refraction: Refraction,
) -> AstroVector {
    let lat = sphere.lat + inverse_refraction_angle(refraction, sphere.lat);
    let unrefracted = Spherical {
        lat,
        lon: toggle_azimuth(sphere.lon),
        dist: sphere.dist,
    };
    vector_from_sphere(&unrefracted, time)
}

// The horizon frame's internal longitude runs counterclockwise from
// north (through west); azimuth runs clockwise (through east). The same
// mirror converts in both directions.
fn toggle_azimuth(azimuth: f64) -> f64 {
    let mirrored = 360.0 - azimuth;
    if mirrored >= 360.0 {
        mirrored - 360.0
    } else {
        mirrored
    }
}
