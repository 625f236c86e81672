//! Moon phase and quarter searches.

use almanac_core::constants::MEAN_SYNODIC_MONTH;
use almanac_core::{AstroError, AstroResult};
use almanac_time::AstroTime;

use crate::geometry::{longitude_offset, moon_phase};
use crate::provider::Ephemeris;
use crate::search::search;

/// One lunar quarter event: `quarter` is 0 new, 1 first quarter, 2
/// full, 3 third quarter.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoonQuarterInfo {
    pub quarter: u8,
    pub time: AstroTime,
}

/// Finds when the Moon's phase angle reaches `target_lon` degrees,
/// within `limit_days` after `start`.
///
/// The phase repeats every synodic month, but lunar eccentricity moves
/// individual events up to about 0.85 days off the mean prediction, so
/// the root is searched in a +/-0.9-day window around it. `Ok(None)`
/// means the event lands past `limit_days`.
pub fn search_moon_phase<E: Ephemeris>(
    eph: &E,
    target_lon: f64,
    start: AstroTime,
    limit_days: f64,
) -> AstroResult<Option<AstroTime>> {
    let uncertainty = 0.9;
    let mut ya = longitude_offset(moon_phase(eph, start)? - target_lon);
    if ya > 0.0 {
        // Force the estimate forward in time.
        ya -= 360.0;
    }
    let est_dt = -(MEAN_SYNODIC_MONTH * ya) / 360.0;
    let dt1 = est_dt - uncertainty;
    if dt1 > limit_days {
        return Ok(None);
    }
    let dt2 = limit_days.min(est_dt + uncertainty);
    let t1 = start.add_days(dt1);
    let t2 = start.add_days(dt2);
    search(
        |time| Ok(longitude_offset(moon_phase(eph, time)? - target_lon)),
        t1,
        t2,
        1.0,
    )
}

/// The first quarter event (new, first quarter, full, or third quarter)
/// at or after `start`.
pub fn search_moon_quarter<E: Ephemeris>(
    eph: &E,
    start: AstroTime,
) -> AstroResult<MoonQuarterInfo> {
    let angres = moon_phase(eph, start)?;
    let quarter = ((1 + (angres / 90.0).floor() as i64) % 4) as u8;
    let time = search_moon_phase(eph, 90.0 * f64::from(quarter), start, 10.0)?
        .ok_or_else(|| AstroError::internal("moon quarter not found within 10 days"))?;
    Ok(MoonQuarterInfo { quarter, time })
}

/// The quarter event following `mq`.
///
/// Quarters are about 7.4 days apart, so the next search starts 6 days
/// in; the found quarter must advance by exactly one step around the
/// cycle.
pub fn next_moon_quarter<E: Ephemeris>(
    eph: &E,
    mq: &MoonQuarterInfo,
) -> AstroResult<MoonQuarterInfo> {
    let next = search_moon_quarter(eph, mq.time.add_days(6.0))?;
    if next.quarter != (mq.quarter + 1) % 4 {
        return Err(AstroError::internal(format!(
            "moon quarter {} followed {} instead of {}",
            next.quarter,
            mq.quarter,
            (mq.quarter + 1) % 4
        )));
    }
    Ok(next)
}
