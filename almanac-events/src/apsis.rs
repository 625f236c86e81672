//! Lunar and planetary apsis searches (perigee/apogee and
//! perihelion/aphelion).

use almanac_core::constants::{KM_PER_AU, MEAN_ANOMALISTIC_MONTH};
use almanac_core::{AstroError, AstroResult};
use almanac_time::AstroTime;

use crate::body::Body;
use crate::provider::{Aberration, Ephemeris};
use crate::search::search;

/// Whether an apsis is the nearest or farthest point of the orbit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ApsisKind {
    /// Perigee / perihelion.
    Pericenter,
    /// Apogee / aphelion.
    Apocenter,
}

/// One apsis event.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ApsisInfo {
    pub time: AstroTime,
    pub kind: ApsisKind,
    /// Distance between the two bodies at the event, in AU.
    pub dist_au: f64,
    /// The same distance in kilometers.
    pub dist_km: f64,
}

impl ApsisInfo {
    fn new(time: AstroTime, kind: ApsisKind, dist_au: f64) -> Self {
        Self {
            time,
            kind,
            dist_au,
            dist_km: dist_au * KM_PER_AU,
        }
    }
}

fn moon_distance<E: Ephemeris>(eph: &E, time: AstroTime) -> AstroResult<f64> {
    Ok(eph.geo_vector(Body::Moon, time, Aberration::None)?.length())
}

// Central finite difference of a distance function, scaled by
// `direction` so the sought extreme is always an ascending root.
fn distance_slope<D>(distance: &D, direction: f64, time: AstroTime) -> AstroResult<f64>
where
    D: Fn(AstroTime) -> AstroResult<f64>,
{
    let dt = 0.001;
    let r1 = distance(time.add_days(-dt / 2.0))?;
    let r2 = distance(time.add_days(dt / 2.0))?;
    Ok(direction * (r2 - r1) / dt)
}

fn search_apsis<D>(
    distance: D,
    start: AstroTime,
    increment: f64,
    span_days: f64,
    label: &str,
) -> AstroResult<ApsisInfo>
where
    D: Fn(AstroTime) -> AstroResult<f64>,
{
    let mut t1 = start;
    let mut m1 = distance_slope(&distance, 1.0, t1)?;
    let mut covered = 0.0;
    while covered < span_days {
        let t2 = t1.add_days(increment);
        let m2 = distance_slope(&distance, 1.0, t2)?;
        if m1 * m2 <= 0.0 {
            // The radial speed changes sign inside [t1, t2]: an apsis.
            // An upward crossing is the distance minimum; a downward
            // one is searched with the slope negated.
            let (direction, kind) = if m1 < m2 {
                (1.0, ApsisKind::Pericenter)
            } else {
                (-1.0, ApsisKind::Apocenter)
            };
            let apsis_time = search(
                |time| distance_slope(&distance, direction, time),
                t1,
                t2,
                1.0,
            )?
            .ok_or_else(|| {
                AstroError::internal(format!("{} slope root lost after bracketing", label))
            })?;
            let dist = distance(apsis_time)?;
            return Ok(ApsisInfo::new(apsis_time, kind, dist));
        }
        t1 = t2;
        m1 = m2;
        covered += increment;
    }
    // The slope alternates sign twice per orbit; scanning two periods
    // without a crossing cannot happen for a sane provider.
    Err(AstroError::internal(format!(
        "no {} found in {} days",
        label, span_days
    )))
}

/// Finds the first lunar perigee or apogee at or after `start`.
///
/// The geocentric lunar distance is scanned in 5-day steps over at most
/// two anomalistic months for a sign change of its time derivative.
pub fn search_lunar_apsis<E: Ephemeris>(eph: &E, start: AstroTime) -> AstroResult<ApsisInfo> {
    search_apsis(
        |time| moon_distance(eph, time),
        start,
        5.0,
        2.0 * MEAN_ANOMALISTIC_MONTH,
        "lunar apsis",
    )
}

/// Finds the lunar apsis following `apsis`.
///
/// Perigee and apogee alternate about 13.8 days apart, so the next
/// search starts 11 days in; a repeat of the same kind is `Internal`.
pub fn next_lunar_apsis<E: Ephemeris>(
    eph: &E,
    apsis: &ApsisInfo,
) -> AstroResult<ApsisInfo> {
    let next = search_lunar_apsis(eph, apsis.time.add_days(11.0))?;
    if next.kind == apsis.kind {
        return Err(AstroError::internal(format!(
            "consecutive lunar apsides both {:?}",
            next.kind
        )));
    }
    Ok(next)
}

/// Finds the first perihelion or aphelion of a planet at or after
/// `start`, scanning the heliocentric distance in period/6 steps.
pub fn search_planet_apsis<E: Ephemeris>(
    eph: &E,
    body: Body,
    start: AstroTime,
) -> AstroResult<ApsisInfo> {
    let period = body
        .orbital_period()
        .ok_or_else(|| AstroError::invalid_body(body.name()))?;
    search_apsis(
        |time| Ok(eph.helio_vector(body, time)?.length()),
        start,
        period / 6.0,
        2.0 * period,
        "planet apsis",
    )
}

/// Finds the planetary apsis following `apsis`, skipping a quarter
/// period ahead.
pub fn next_planet_apsis<E: Ephemeris>(
    eph: &E,
    body: Body,
    apsis: &ApsisInfo,
) -> AstroResult<ApsisInfo> {
    let period = body
        .orbital_period()
        .ok_or_else(|| AstroError::invalid_body(body.name()))?;
    let next = search_planet_apsis(eph, body, apsis.time.add_days(period / 4.0))?;
    if next.kind == apsis.kind {
        return Err(AstroError::internal(format!(
            "consecutive {} apsides both {:?}",
            body, next.kind
        )));
    }
    Ok(next)
}
