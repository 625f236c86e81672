//! The delta-T model: the difference TT - UT in seconds.
//!
//! Inside the observational era the model is a static table of measured
//! values, binary-searched and linearly interpolated. Outside the table
//! the long-term parabola `-20 + 32 u^2` seconds (u in centuries from
//! 1820) takes over, shifted so the model stays continuous at both table
//! ends. The whole model is a deterministic pure function of UT with no
//! global state.

use almanac_core::constants::Y2000_IN_MJD;

/// One measured (MJD, delta-T seconds) sample.
#[derive(Debug, Clone, Copy)]
struct DtEntry {
    mjd: f64,
    dt: f64,
}

const fn e(mjd: f64, dt: f64) -> DtEntry {
    DtEntry { mjd, dt }
}

/// Historical delta-T table, from ancient eclipse records through modern
/// almanac predictions.
#[rustfmt::skip]
static DT: [DtEntry; 90] = [
    e(-72638.0, 38.0),    e(-65333.0, 26.0),    e(-58028.0, 21.0),
    e(-50724.0, 21.1),    e(-43419.0, 13.5),    e(-39766.0, 13.7),
    e(-36114.0, 14.8),    e(-32461.0, 15.7),    e(-28809.0, 15.6),
    e(-25156.0, 13.3),    e(-21504.0, 12.6),    e(-17852.0, 11.2),
    e(-14200.0, 11.13),   e(-10547.0, 7.95),    e(-6895.0, 6.22),
    e(-3242.0, 6.55),     e(-1416.0, 7.26),     e(410.0, 7.35),
    e(2237.0, 5.92),      e(4063.0, 1.04),      e(5889.0, -3.19),
    e(7715.0, -5.36),     e(9542.0, -5.74),     e(11368.0, -5.86),
    e(13194.0, -6.41),    e(15020.0, -2.70),    e(16846.0, 3.92),
    e(18672.0, 10.38),    e(20498.0, 17.19),    e(22324.0, 21.41),
    e(24151.0, 23.63),    e(25977.0, 24.02),    e(27803.0, 23.91),
    e(29629.0, 24.35),    e(31456.0, 26.76),    e(33282.0, 29.15),
    e(35108.0, 31.07),    e(36934.0, 33.150),   e(38761.0, 35.738),
    e(40587.0, 40.182),   e(42413.0, 45.477),   e(44239.0, 50.540),
    e(44605.0, 51.3808),  e(44970.0, 52.1668),  e(45335.0, 52.9565),
    e(45700.0, 53.7882),  e(46066.0, 54.3427),  e(46431.0, 54.8712),
    e(46796.0, 55.3222),  e(47161.0, 55.8197),  e(47527.0, 56.3000),
    e(47892.0, 56.8553),  e(48257.0, 57.5653),  e(48622.0, 58.3092),
    e(48988.0, 59.1218),  e(49353.0, 59.9845),  e(49718.0, 60.7853),
    e(50083.0, 61.6287),  e(50449.0, 62.2950),  e(50814.0, 62.9659),
    e(51179.0, 63.4673),  e(51544.0, 63.8285),  e(51910.0, 64.0908),
    e(52275.0, 64.2998),  e(52640.0, 64.4734),  e(53005.0, 64.5736),
    e(53371.0, 64.6876),  e(53736.0, 64.8452),  e(54101.0, 65.1464),
    e(54466.0, 65.4573),  e(54832.0, 65.7768),  e(55197.0, 66.0699),
    e(55562.0, 66.3246),  e(55927.0, 66.6030),  e(56293.0, 66.9069),
    e(56658.0, 67.2810),  e(57023.0, 67.6439),  e(57388.0, 68.1024),
    e(57754.0, 68.5927),  e(58119.0, 68.9676),  e(58484.0, 69.2201),
    e(58849.0, 69.87),    e(59214.0, 70.39),    e(59580.0, 70.91),
    e(59945.0, 71.40),    e(60310.0, 71.88),    e(60675.0, 72.36),
    e(61041.0, 72.83),    e(61406.0, 73.32),    e(61680.0, 73.66),
];

/// Long-term parabola in seconds, `u` measured in centuries from 1820.
fn long_term_parabola(mjd: f64) -> f64 {
    let year = 2000.0 + (mjd - Y2000_IN_MJD) / 365.2425;
    let u = (year - 1820.0) / 100.0;
    -20.0 + 32.0 * u * u
}

/// Delta-T in seconds at the given Modified Julian Date.
pub fn delta_t(mjd: f64) -> f64 {
    let first = &DT[0];
    let last = &DT[DT.len() - 1];

    if mjd <= first.mjd {
        // Anchor the parabola to the first tabulated value so the model
        // is continuous at the boundary.
        return first.dt + long_term_parabola(mjd) - long_term_parabola(first.mjd);
    }
    if mjd >= last.mjd {
        return last.dt + long_term_parabola(mjd) - long_term_parabola(last.mjd);
    }

    // Binary search for the bracketing pair, then interpolate linearly.
    let mut lo = 0usize;
    let mut hi = DT.len() - 2;
    loop {
        debug_assert!(lo <= hi, "delta-t bracket search failed");
        let c = (lo + hi) / 2;
        if mjd < DT[c].mjd {
            hi = c - 1;
        } else if mjd > DT[c + 1].mjd {
            lo = c + 1;
        } else {
            let frac = (mjd - DT[c].mjd) / (DT[c + 1].mjd - DT[c].mjd);
            return DT[c].dt + frac * (DT[c + 1].dt - DT[c].dt);
        }
    }
}

/// Terrestrial Time in days since J2000 for the given Universal Time.
pub fn terrestrial_time(ut: f64) -> f64 {
    ut + delta_t(ut + Y2000_IN_MJD) / 86400.0
}
