//! Atmospheric refraction models for horizon-frame altitudes.

use almanac_core::constants::DEG2RAD;

/// Which refraction correction to apply when converting to or from the
/// horizon frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Refraction {
    /// No correction; geometric altitudes.
    None,
    /// The Saemundsson formula, with the correction tapered off below
    /// -1 degree so it vanishes at the nadir.
    Normal,
    /// The raw Saemundsson formula clamped at -1 degree, matching the
    /// behavior of the JPL Horizons system. Provided for comparing
    /// output against Horizons; `Normal` is the better default.
    JplHor,
}

/// Refraction correction in degrees for a given true altitude.
///
/// The result is the angle to ADD to the geometric altitude to get the
/// apparent altitude. Returns 0 for altitudes outside [-90, +90].
pub fn refraction_angle(refraction: Refraction, altitude: f64) -> f64 {
    if !(-90.0..=90.0).contains(&altitude) {
        return 0.0;
    }
    if refraction == Refraction::None {
        return 0.0;
    }
    // Saemundsson's formula for 10 C and 1010 mb, in arcminutes.
    let hd = altitude.max(-1.0);
    let mut refr = (1.02 / ((hd + 10.3 / (hd + 5.11)) * DEG2RAD).tan()) / 60.0;
    if refraction == Refraction::Normal && altitude < -1.0 {
        // Taper linearly to zero between -1 and -90 degrees. The formula
        // has no physical meaning that far down, but the correction must
        // not jump when a search crosses the horizon from below.
        refr *= (altitude + 90.0) / 89.0;
    }
    refr
}

/// The inverse problem: given an apparent (refracted) altitude, find the
/// correction that was applied, as a non-positive angle in degrees.
///
/// Adding the result to the apparent altitude recovers the true altitude.
pub fn inverse_refraction_angle(refraction: Refraction, bent_altitude: f64) -> f64 {
    if !(-90.0..=90.0).contains(&bent_altitude) {
        return 0.0;
    }
    let mut altitude = bent_altitude - refraction_angle(refraction, bent_altitude);
    loop {
        let diff = (altitude + refraction_angle(refraction, altitude)) - bent_altitude;
        if diff.abs() < 1.0e-14 {
            return altitude - bent_altitude;
        }
        altitude -= diff;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_none_is_zero() {
        assert_eq!(refraction_angle(Refraction::None, 10.0), 0.0);
    }

    #[test]
    fn test_horizon_value() {
        // At the horizon the standard correction is about 34 arcminutes.
        let refr = refraction_angle(Refraction::Normal, 0.0);
        assert!((refr - 34.0 / 60.0).abs() < 0.02, "refr = {}", refr);
    }

    #[test]
    fn test_out_of_range_altitude_is_zero() {
        assert_eq!(refraction_angle(Refraction::Normal, 91.0), 0.0);
        assert_eq!(refraction_angle(Refraction::Normal, -90.5), 0.0);
    }

    #[test]
    fn test_normal_vanishes_at_nadir() {
        let refr = refraction_angle(Refraction::Normal, -90.0);
        assert!(refr.abs() < 1e-12, "refr = {}", refr);
    }

    #[test]
    fn test_jplhor_clamps_below_minus_one() {
        let at_clamp = refraction_angle(Refraction::JplHor, -1.0);
        assert_eq!(refraction_angle(Refraction::JplHor, -30.0), at_clamp);
    }

    #[test]
    fn test_inverse_round_trip() {
        for &alt in &[-5.0, -1.0, -0.2, 0.0, 0.5, 3.0, 20.0, 80.0] {
            let bent = alt + refraction_angle(Refraction::Normal, alt);
            let back = bent + inverse_refraction_angle(Refraction::Normal, bent);
            assert!((back - alt).abs() < 1e-12, "alt = {}, back = {}", alt, back);
        }
    }
}
