//! Hour-angle, rise, and set searches for a surface observer.

use almanac_core::constants::{
    MOON_RADIUS_AU, RAD2DEG, REFRACTION_NEAR_HORIZON, SOLAR_DAYS_PER_SIDEREAL_DAY, SUN_RADIUS_AU,
};
use almanac_core::{AstroError, AstroResult};
use almanac_coords::topocentric::{horizon, HorizontalCoordinates};
use almanac_coords::{Observer, Refraction};
use almanac_time::{sidereal_time, AstroTime};

use crate::body::Body;
use crate::geometry::equator;
use crate::provider::{Aberration, Ephemeris};
use crate::search::search;

/// Whether a rise/set search looks for the body coming up or going down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Rise,
    Set,
}

/// An hour-angle event with the body's horizontal position at that
/// moment.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HourAngleInfo {
    pub time: AstroTime,
    pub hor: HorizontalCoordinates,
}

/// Finds the first time at or after `start` when the body reaches the
/// given hour angle for the observer.
///
/// Hour angle is in sidereal hours, [0, 24): 0 is culmination on the
/// meridian, 12 the lowest point below it. Each step converts the
/// remaining sidereal offset into solar days; the loop stops when the
/// offset drops under 0.1 seconds.
pub fn search_hour_angle<E: Ephemeris>(
    eph: &E,
    body: Body,
    observer: &Observer,
    hour_angle: f64,
    start: AstroTime,
) -> AstroResult<HourAngleInfo> {
    if body == Body::Earth {
        return Err(AstroError::EarthNotAllowed);
    }

    let mut time = start;
    let mut first = true;
    loop {
        let gast = sidereal_time(&time);
        let ofdate = equator(eph, body, time, observer, true, Aberration::Corrected)?;
        let mut delta_sidereal_hours =
            ((hour_angle + ofdate.ra - observer.longitude / 15.0) - gast) % 24.0;
        if first {
            // Always search forward from the start time.
            if delta_sidereal_hours < 0.0 {
                delta_sidereal_hours += 24.0;
            }
            first = false;
        } else {
            // After the first step, take whichever direction is closer.
            if delta_sidereal_hours < -12.0 {
                delta_sidereal_hours += 24.0;
            } else if delta_sidereal_hours > 12.0 {
                delta_sidereal_hours -= 24.0;
            }
        }

        if delta_sidereal_hours.abs() * 3600.0 < 0.1 {
            let hor = horizon(time, observer, ofdate.ra, ofdate.dec, Refraction::Normal);
            return Ok(HourAngleInfo { time, hor });
        }

        let delta_days = (delta_sidereal_hours / 24.0) * SOLAR_DAYS_PER_SIDEREAL_DAY;
        time = time.add_days(delta_days);
    }
}

// Signed altitude of the body's upper limb above the nominal horizon,
// with the fixed near-horizon refraction folded in. Positive in the
// direction of the sought event, so the search always looks for an
// ascending crossing.
fn peak_altitude<E: Ephemeris>(
    eph: &E,
    body: Body,
    radius_au: f64,
    direction: Direction,
    observer: &Observer,
    time: AstroTime,
) -> AstroResult<f64> {
    let ofdate = equator(eph, body, time, observer, true, Aberration::Corrected)?;
    let hor = horizon(time, observer, ofdate.ra, ofdate.dec, Refraction::None);
    let alt = hor.altitude + RAD2DEG * (radius_au / ofdate.dist);
    let signed = alt + REFRACTION_NEAR_HORIZON;
    Ok(match direction {
        Direction::Rise => signed,
        Direction::Set => -signed,
    })
}

/// Finds the next rise or set of a body, up to `limit_days` after
/// `start`.
///
/// Rises and sets are bracketed between hour-angle events: a rise lies
/// between the body's lowest point and the following culmination, a set
/// between a culmination and the following lowest point. Within each
/// bracket the root of the limb altitude is refined by [`search`].
/// `Ok(None)` means no event inside the limit, which is the normal
/// answer in polar day or night.
pub fn search_rise_set<E: Ephemeris>(
    eph: &E,
    body: Body,
    observer: &Observer,
    direction: Direction,
    start: AstroTime,
    limit_days: f64,
) -> AstroResult<Option<AstroTime>> {
    if body == Body::Earth {
        return Err(AstroError::EarthNotAllowed);
    }
    let radius_au = match body {
        Body::Sun => SUN_RADIUS_AU,
        Body::Moon => MOON_RADIUS_AU,
        _ => 0.0,
    };
    let (ha_before, ha_after) = match direction {
        // The bottom happens before a rise, culmination after it.
        Direction::Rise => (12.0, 0.0),
        // Culmination happens before a set, the bottom after it.
        Direction::Set => (0.0, 12.0),
    };

    let altitude =
        |time: AstroTime| peak_altitude(eph, body, radius_au, direction, observer, time);

    let mut time_before;
    let mut alt_before = altitude(start)?;
    if alt_before > 0.0 {
        // Already past the event; wait for the next "before" extreme.
        let evt = search_hour_angle(eph, body, observer, ha_before, start)?;
        time_before = evt.time;
        alt_before = altitude(time_before)?;
    } else {
        time_before = start;
    }
    let mut evt_after = search_hour_angle(eph, body, observer, ha_after, time_before)?;
    let mut alt_after = altitude(evt_after.time)?;

    loop {
        if alt_before <= 0.0 && alt_after > 0.0 {
            if let Some(event_time) = search(altitude, time_before, evt_after.time, 1.0)? {
                return Ok(Some(event_time));
            }
        }
        let evt_before = search_hour_angle(eph, body, observer, ha_before, evt_after.time)?;
        evt_after = search_hour_angle(eph, body, observer, ha_after, evt_before.time)?;
        if evt_before.time.ut >= start.ut + limit_days {
            return Ok(None);
        }
        time_before = evt_before.time;
        alt_before = altitude(time_before)?;
        alt_after = altitude(evt_after.time)?;
    }
}
