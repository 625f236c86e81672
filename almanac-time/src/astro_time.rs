//! The (UT, TT) time pair used throughout the workspace.

use std::fmt;

use crate::calendar::{calendar_from_ut, ut_from_calendar};
use crate::delta_t::terrestrial_time;
use almanac_core::AstroResult;

/// One moment, carried in two time scales at once.
///
/// `ut` counts real days since the J2000 epoch (2000-01-01 12:00 UTC) in
/// Universal Time, the rotation-based civil scale. `tt` is the same moment
/// in Terrestrial Time, the uniform dynamical scale the orbital models
/// need. `tt` is always derived from `ut` through the delta-T model, so
/// the pair can never disagree.
///
/// `AstroTime` is an immutable value; [`add_days`](Self::add_days)
/// produces a new value and recomputes `tt` from the shifted `ut` because
/// delta-T itself drifts with the date.
///
/// ```
/// use almanac_time::AstroTime;
///
/// let t = AstroTime::make(2018, 12, 2, 18, 30, 12.543).unwrap();
/// assert!((t.ut - 6910.270978506945).abs() < 1e-12);
/// assert!((t.tt - 6910.271779431480).abs() < 1e-12);
/// assert_eq!(t.to_string(), "2018-12-02T18:30:12.543Z");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AstroTime {
    /// Days since J2000 in Universal Time.
    pub ut: f64,
    /// Days since J2000 in Terrestrial Time.
    pub tt: f64,
}

impl AstroTime {
    /// Creates a time from a UT day offset; `tt` follows from delta-T.
    pub fn from_ut(ut: f64) -> Self {
        Self {
            ut,
            tt: terrestrial_time(ut),
        }
    }

    /// Creates a time from proleptic Gregorian calendar fields (UTC).
    ///
    /// Fails with `InvalidDate` when the fields do not form a valid
    /// date/time.
    pub fn make(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: f64,
    ) -> AstroResult<Self> {
        Ok(Self::from_ut(ut_from_calendar(
            year, month, day, hour, minute, second,
        )?))
    }

    /// Returns a new time shifted by `days` (which may be negative or
    /// fractional). `tt` is recomputed, not shifted.
    pub fn add_days(&self, days: f64) -> Self {
        Self::from_ut(self.ut + days)
    }
}

impl fmt::Display for AstroTime {
    /// ISO-8601 projection with millisecond precision, e.g.
    /// `2018-12-02T18:30:12.543Z`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = calendar_from_ut(self.ut);
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}.{:03}Z",
            c.year, c.month, c.day, c.hour, c.minute, c.second, c.millisecond
        )
    }
}
