//! Geographic observers and their geocentric position.

use almanac_core::constants::{DEG2RAD, EARTH_FLATTENING, EARTH_RADIUS_METERS, KM_PER_AU};
use almanac_core::{nutation_matrix, precession_matrix, AstroError, AstroResult, EarthTilt};
use almanac_time::{sidereal_time, AstroTime};

use crate::vector::AstroVector;

/// A point on the Earth's surface.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Observer {
    /// Geodetic latitude in degrees, [-90, +90].
    pub latitude: f64,
    /// Longitude in degrees east of Greenwich, normalized to [-180, +180).
    pub longitude: f64,
    /// Height above the reference ellipsoid in meters.
    pub height: f64,
}

impl Observer {
    /// Creates an observer, validating the latitude and wrapping the
    /// longitude into [-180, +180).
    pub fn new(latitude: f64, longitude: f64, height: f64) -> AstroResult<Self> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(AstroError::observer_out_of_range(latitude));
        }
        Ok(Self {
            latitude,
            longitude: (longitude + 180.0).rem_euclid(360.0) - 180.0,
            height,
        })
    }

    /// The observer's position relative to the Earth's center, in the
    /// J2000 equatorial frame.
    ///
    /// The ellipsoidal surface point is formed in the true equator of
    /// date, then rotated back through nutation and precession.
    pub fn geocentric_position(&self, time: AstroTime) -> AstroVector {
        let gast = sidereal_time(&time);
        let pos_eqd = terra(self, gast);
        let tilt = EarthTilt::at(time.tt);
        let mean = nutation_matrix(&tilt).transpose().apply_to_vector(pos_eqd);
        let eqj = precession_matrix(time.tt).transpose().apply_to_vector(mean);
        AstroVector::new(eqj[0], eqj[1], eqj[2], time)
    }
}

/// Observer position in the true-equator-of-date frame, in AU, given the
/// Greenwich apparent sidereal time in hours.
fn terra(observer: &Observer, st_hours: f64) -> [f64; 3] {
    let erad_km = EARTH_RADIUS_METERS / 1000.0;
    let df2 = EARTH_FLATTENING * EARTH_FLATTENING;
    let phi = observer.latitude * DEG2RAD;
    let sinphi = phi.sin();
    let cosphi = phi.cos();
    let c = 1.0 / (cosphi * cosphi + df2 * sinphi * sinphi).sqrt();
    let s = df2 * c;
    let ht_km = observer.height / 1000.0;
    let ach = erad_km * c + ht_km;
    let ash = erad_km * s + ht_km;
    let stlocl = (15.0 * st_hours + observer.longitude) * DEG2RAD;
    [
        ach * cosphi * stlocl.cos() / KM_PER_AU,
        ach * cosphi * stlocl.sin() / KM_PER_AU,
        ash * sinphi / KM_PER_AU,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latitude_validation() {
        assert!(Observer::new(90.0001, 0.0, 0.0).is_err());
        assert!(Observer::new(-91.0, 0.0, 0.0).is_err());
        assert!(Observer::new(89.9, 0.0, 0.0).is_ok());
    }

    #[test]
    fn test_longitude_wrap() {
        let obs = Observer::new(0.0, 190.0, 0.0).unwrap();
        assert!((obs.longitude - (-170.0)).abs() < 1e-12);
        let obs = Observer::new(0.0, -180.0, 0.0).unwrap();
        assert_eq!(obs.longitude, -180.0);
        let obs = Observer::new(0.0, 180.0, 0.0).unwrap();
        assert_eq!(obs.longitude, -180.0);
    }

    #[test]
    fn test_geocentric_distance_is_earth_radius() {
        let obs = Observer::new(35.0, -110.0, 0.0).unwrap();
        let pos = obs.geocentric_position(AstroTime::from_ut(8000.0));
        let dist_km = pos.length() * KM_PER_AU;
        // Between the polar and equatorial radii.
        assert!(dist_km > 6350.0 && dist_km < 6380.0, "dist = {} km", dist_km);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let obs = Observer::new(51.4778, -0.0015, 46.0).unwrap();
        let json = serde_json::to_string(&obs).unwrap();
        let back: Observer = serde_json::from_str(&json).unwrap();
        assert_eq!(obs, back);
    }

    #[test]
    fn test_polar_observer_near_axis() {
        let obs = Observer::new(90.0, 0.0, 0.0).unwrap();
        let pos = obs.geocentric_position(AstroTime::from_ut(0.0));
        // At the pole the position barely moves off the rotation axis,
        // and precession since J2000 is tiny at the epoch itself.
        let axis_offset = (pos.x * pos.x + pos.y * pos.y).sqrt() / pos.length();
        assert!(axis_offset < 0.01, "offset = {}", axis_offset);
    }
}
