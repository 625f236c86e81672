//! Elongation, relative longitude, and the maximum-elongation and
//! peak-magnitude searches for the inner planets.

use almanac_core::constants::SECONDS_PER_DAY;
use almanac_core::{AstroError, AstroResult};
use almanac_time::AstroTime;

use crate::body::Body;
use crate::geometry::{angle_from_sun, ecliptic_longitude, longitude_from_sun, longitude_offset};
use crate::provider::{Ephemeris, IlluminationSource};
use crate::search::search;

/// Which side of the Sun a body stands on, as seen from the Earth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Visibility {
    /// West of the Sun; best seen before sunrise.
    Morning,
    /// East of the Sun; best seen after sunset.
    Evening,
}

/// A body's angular relation to the Sun at one moment.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElongationInfo {
    pub time: AstroTime,
    pub visibility: Visibility,
    /// Angle between the body and the Sun in degrees, [0, 180].
    pub elongation: f64,
    /// Absolute ecliptic-longitude separation in degrees, [0, 180].
    pub ecliptic_separation: f64,
}

/// The body's elongation and visibility at `time`.
pub fn elongation<E: Ephemeris>(
    eph: &E,
    body: Body,
    time: AstroTime,
) -> AstroResult<ElongationInfo> {
    let lon = longitude_from_sun(eph, body, time)?;
    let (visibility, ecliptic_separation) = if lon > 180.0 {
        (Visibility::Morning, 360.0 - lon)
    } else {
        (Visibility::Evening, lon)
    };
    Ok(ElongationInfo {
        time,
        visibility,
        elongation: angle_from_sun(eph, body, time)?,
        ecliptic_separation,
    })
}

fn rlon_offset<E: Ephemeris>(
    eph: &E,
    body: Body,
    time: AstroTime,
    direction: f64,
    target_rel_lon: f64,
) -> AstroResult<f64> {
    let plon = ecliptic_longitude(eph, body, time)?;
    let elon = ecliptic_longitude(eph, Body::Earth, time)?;
    Ok(longitude_offset(direction * (elon - plon) - target_rel_lon))
}

/// Finds when the heliocentric longitude difference between a planet
/// and the Earth reaches `target_rel_lon` degrees.
///
/// 0 targets conjunction for a superior planet (or inferior conjunction
/// for an inferior one); 180 targets opposition. Convergence is
/// Newton-like stepping scaled by the synodic period, with the period
/// estimate adapted near the target to absorb orbital eccentricity.
pub fn search_relative_longitude<E: Ephemeris>(
    eph: &E,
    body: Body,
    target_rel_lon: f64,
    start: AstroTime,
) -> AstroResult<AstroTime> {
    if body == Body::Earth {
        return Err(AstroError::EarthNotAllowed);
    }
    if body == Body::Moon || body == Body::Sun {
        return Err(AstroError::invalid_body(body.name()));
    }
    let mut syn = body.synodic_period()?;
    let direction = if body.is_superior() { 1.0 } else { -1.0 };

    let mut error_angle = rlon_offset(eph, body, start, direction, target_rel_lon)?;
    if error_angle > 0.0 {
        // Force the search forward in time.
        error_angle -= 360.0;
    }
    let mut time = start;
    for _ in 0..100 {
        let day_adjust = (-error_angle / 360.0) * syn;
        time = time.add_days(day_adjust);
        if day_adjust.abs() * SECONDS_PER_DAY < 1.0 {
            return Ok(time);
        }
        let prev_angle = error_angle;
        error_angle = rlon_offset(eph, body, time, direction, target_rel_lon)?;
        if prev_angle.abs() < 30.0 && prev_angle != error_angle {
            // Close to the target the local synodic rate may differ
            // from the mean (Mercury and Mars especially); rescale the
            // period by the observed convergence ratio.
            let ratio = prev_angle / (prev_angle - error_angle);
            if ratio > 0.5 && ratio < 2.0 {
                syn *= ratio;
            }
        }
    }
    Err(AstroError::non_convergence(
        format!("relative longitude of {}", body),
        100,
    ))
}

// Negated time derivative of the elongation, so a maximum becomes an
// ascending root.
fn neg_elong_slope<E: Ephemeris>(eph: &E, body: Body, time: AstroTime) -> AstroResult<f64> {
    let dt = 0.1;
    let e1 = angle_from_sun(eph, body, time.add_days(-dt / 2.0))?;
    let e2 = angle_from_sun(eph, body, time.add_days(dt / 2.0))?;
    Ok((e1 - e2) / dt)
}

// Relative-longitude windows, in degrees, inside which the slope
// function is smooth and brackets exactly one extreme.
fn elongation_window(body: Body) -> AstroResult<(f64, f64)> {
    match body {
        Body::Mercury => Ok((50.0, 85.0)),
        Body::Venus => Ok((40.0, 50.0)),
        other => Err(AstroError::invalid_body(other.name())),
    }
}

// Chooses the seek window [rlon_lo, rlon_hi] and any backup offset in
// days from the current relative longitude. At exactly +s2 the positive
// window has already closed, so the negative one is next.
fn choose_window(rlon: f64, s1: f64, s2: f64, syn: f64) -> (f64, f64, f64) {
    if rlon >= -s1 && rlon < s1 {
        // Between the cusps; seek forward to the [+s1, +s2] window.
        (0.0, s1, s2)
    } else if rlon >= s2 || rlon < -s2 {
        // Past the positive window; seek the next [-s2, -s1] window.
        (0.0, -s2, -s1)
    } else if rlon >= 0.0 {
        // Inside [+s1, +s2): back up a quarter period so the window
        // opening is found behind us.
        (-syn / 4.0, s1, s2)
    } else {
        // Inside [-s2, -s1): same, on the negative side.
        (-syn / 4.0, -s2, -s1)
    }
}

// Positions a [t1, t2] bracket whose relative longitude runs from
// rlon_lo to rlon_hi, chosen so `start` is never inside the cusp near
// relative longitude 0 or 180 where the slope is discontinuous.
fn bracket_by_relative_longitude<E: Ephemeris>(
    eph: &E,
    body: Body,
    s1: f64,
    s2: f64,
    syn: f64,
    start: AstroTime,
) -> AstroResult<(AstroTime, AstroTime)> {
    let plon = ecliptic_longitude(eph, body, start)?;
    let elon = ecliptic_longitude(eph, Body::Earth, start)?;
    let rlon = longitude_offset(plon - elon);

    let (adjust_days, rlon_lo, rlon_hi) = choose_window(rlon, s1, s2, syn);

    let t_start = start.add_days(adjust_days);
    let t1 = search_relative_longitude(eph, body, rlon_lo, t_start)?;
    let t2 = search_relative_longitude(eph, body, rlon_hi, t1)?;
    Ok((t1, t2))
}

/// Finds the next greatest elongation of Mercury or Venus at or after
/// `start`.
///
/// The event is bracketed between two relative-longitude marks chosen
/// per body, then refined as the ascending root of the negated
/// elongation slope. If the found event precedes `start` (the bracket
/// can reach backward), the search repeats once from past the bracket.
pub fn search_max_elongation<E: Ephemeris>(
    eph: &E,
    body: Body,
    start: AstroTime,
) -> AstroResult<ElongationInfo> {
    let (s1, s2) = elongation_window(body)?;
    let syn = body.synodic_period()?;
    let mut start = start;
    for _ in 0..2 {
        let (t1, t2) = bracket_by_relative_longitude(eph, body, s1, s2, syn, start)?;

        // The bracket must straddle the maximum: elongation still
        // increasing at t1, already decreasing at t2.
        let m1 = neg_elong_slope(eph, body, t1)?;
        if m1 >= 0.0 {
            return Err(AstroError::internal("elongation bracket does not open rising"));
        }
        let m2 = neg_elong_slope(eph, body, t2)?;
        if m2 <= 0.0 {
            return Err(AstroError::internal("elongation bracket does not close falling"));
        }

        let found = search(|time| neg_elong_slope(eph, body, time), t1, t2, 10.0)?
            .ok_or_else(|| AstroError::internal("elongation slope root lost after bracketing"))?;

        if found.tt >= start.tt {
            return elongation(eph, body, found);
        }
        // The event was in the past; move past this window and retry.
        start = t2.add_days(1.0);
    }
    Err(AstroError::non_convergence(
        format!("maximum elongation of {}", body),
        2,
    ))
}

// Finite-difference slope of the visual magnitude.
fn mag_slope<I: IlluminationSource>(
    illum: &I,
    body: Body,
    time: AstroTime,
) -> AstroResult<f64> {
    let dt = 0.01;
    let y1 = illum.illumination(body, time.add_days(-dt / 2.0))?;
    let y2 = illum.illumination(body, time.add_days(dt / 2.0))?;
    Ok((y2.mag - y1.mag) / dt)
}

/// Finds the next peak visual brightness of Venus at or after `start`.
///
/// Only Venus has a useful magnitude maximum between conjunctions; the
/// event is bracketed at relative longitudes 10 and 30 degrees and
/// refined as the ascending root of the magnitude slope (magnitude
/// decreases toward peak brightness).
pub fn search_peak_magnitude<E: Ephemeris, I: IlluminationSource>(
    eph: &E,
    illum: &I,
    start: AstroTime,
) -> AstroResult<AstroTime> {
    let body = Body::Venus;
    let (s1, s2) = (10.0, 30.0);
    let syn = body.synodic_period()?;
    let mut start = start;
    for _ in 0..2 {
        let (t1, t2) = bracket_by_relative_longitude(eph, body, s1, s2, syn, start)?;

        let m1 = mag_slope(illum, body, t1)?;
        if m1 >= 0.0 {
            return Err(AstroError::internal("magnitude bracket does not open falling"));
        }
        let m2 = mag_slope(illum, body, t2)?;
        if m2 <= 0.0 {
            return Err(AstroError::internal("magnitude bracket does not close rising"));
        }

        let found = search(|time| mag_slope(illum, body, time), t1, t2, 10.0)?
            .ok_or_else(|| AstroError::internal("magnitude slope root lost after bracketing"))?;

        if found.tt >= start.tt {
            return Ok(found);
        }
        start = t2.add_days(1.0);
    }
    Err(AstroError::non_convergence("peak magnitude of Venus", 2))
}
