//! Apparent solar longitude search and the equinox/solstice times.

use almanac_core::{AstroError, AstroResult};
use almanac_time::AstroTime;

use crate::geometry::{longitude_offset, sun_position};
use crate::provider::Ephemeris;
use crate::search::search;

/// The two equinoxes and two solstices of one calendar year, in
/// chronological order.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SeasonsInfo {
    /// Sun longitude 0: northward equinox (March).
    pub mar_equinox: AstroTime,
    /// Sun longitude 90: northern solstice (June).
    pub jun_solstice: AstroTime,
    /// Sun longitude 180: southward equinox (September).
    pub sep_equinox: AstroTime,
    /// Sun longitude 270: southern solstice (December).
    pub dec_solstice: AstroTime,
}

/// Finds when the Sun's apparent ecliptic longitude reaches
/// `target_lon` degrees, within `limit_days` after `start`.
///
/// The window must be short enough (under about a year) that the
/// longitude passes the target at most once; `Ok(None)` means it does
/// not pass at all.
pub fn search_sun_longitude<E: Ephemeris>(
    eph: &E,
    target_lon: f64,
    start: AstroTime,
    limit_days: f64,
) -> AstroResult<Option<AstroTime>> {
    let t2 = start.add_days(limit_days);
    search(
        |time| Ok(longitude_offset(sun_position(eph, time)?.elon - target_lon)),
        start,
        t2,
        1.0,
    )
}

fn find_season_change<E: Ephemeris>(
    eph: &E,
    target_lon: f64,
    year: i32,
    month: u32,
    day: u32,
) -> AstroResult<AstroTime> {
    let start = AstroTime::make(year, month, day, 0, 0, 0.0)?;
    search_sun_longitude(eph, target_lon, start, 20.0)?.ok_or_else(|| {
        AstroError::internal(format!(
            "sun longitude {} not reached near {}-{:02}-{:02}",
            target_lon, year, month, day
        ))
    })
}

/// The equinoxes and solstices of `year`.
///
/// Each event is searched in a 20-day window opening on the 10th of the
/// month it always falls in, so a missing root can only mean a broken
/// ephemeris provider (`Internal`).
pub fn seasons<E: Ephemeris>(eph: &E, year: i32) -> AstroResult<SeasonsInfo> {
    Ok(SeasonsInfo {
        mar_equinox: find_season_change(eph, 0.0, year, 3, 10)?,
        jun_solstice: find_season_change(eph, 90.0, year, 6, 10)?,
        sep_equinox: find_season_change(eph, 180.0, year, 9, 10)?,
        dec_solstice: find_season_change(eph, 270.0, year, 12, 10)?,
    })
}
