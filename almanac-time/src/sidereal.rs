//! Earth rotation angle and Greenwich apparent sidereal time.

use crate::AstroTime;
use almanac_core::constants::DAYS_PER_JULIAN_CENTURY;
use almanac_core::EarthTilt;

/// Earth rotation angle in degrees, [0, 360).
///
/// A linear function of UT1 (approximated here by UT), split into two
/// terms to preserve precision over long spans.
pub fn era(time: &AstroTime) -> f64 {
    let thet1 = 0.779_057_273_264_0 + 0.002_737_811_911_354_48 * time.ut;
    let thet3 = time.ut % 1.0;
    let mut theta = 360.0 * ((thet1 + thet3) % 1.0);
    if theta < 0.0 {
        theta += 360.0;
    }
    theta
}

/// Greenwich apparent sidereal time in sidereal hours, [0, 24).
///
/// Earth rotation angle plus the IAU 2006 precession polynomial plus the
/// equation of the equinoxes.
pub fn sidereal_time(time: &AstroTime) -> f64 {
    let t = time.tt / DAYS_PER_JULIAN_CENTURY;
    let eqeq = 15.0 * EarthTilt::at(time.tt).ee;
    let theta = era(time);
    let st = eqeq
        + 0.014506
        + ((((-0.0000000368 * t - 0.000029956) * t - 0.00000044) * t + 1.3915817) * t
            + 4612.156534)
            * t;
    let mut gst = ((st / 3600.0 + theta) % 360.0) / 15.0;
    if gst < 0.0 {
        gst += 24.0;
    }
    gst
}
