//! Proleptic Gregorian calendar conversion.
//!
//! Forward conversion (calendar fields to days since J2000) uses the
//! ERFA `cal2jd` integer algorithm. The reverse direction uses the
//! era-based civil-from-day-number algorithm. Both directions are exact
//! over the whole proleptic range this workspace supports.

use almanac_core::{AstroError, AstroResult};

/// Calendar fields split out of a time value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    pub millisecond: u32,
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

/// Validates calendar fields and returns UT days since the J2000 epoch
/// (2000-01-01 12:00).
pub fn ut_from_calendar(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: f64,
) -> AstroResult<f64> {
    if !(1..=12).contains(&month) {
        return Err(AstroError::invalid_date(
            year,
            month as i32,
            day as i32,
            "month out of range",
        ));
    }
    if day < 1 || day > days_in_month(year, month) {
        return Err(AstroError::invalid_date(
            year,
            month as i32,
            day as i32,
            "day out of range for month",
        ));
    }
    if hour > 23 || minute > 59 || !(0.0..60.0).contains(&second) {
        return Err(AstroError::invalid_date(
            year,
            month as i32,
            day as i32,
            "time of day out of range",
        ));
    }

    // ERFA cal2jd: MJD at 0h of the given civil date. Integer division
    // truncates toward zero, as the algorithm expects.
    let my = (month as i32 - 14) / 12;
    let iypmy = year + my;
    let mjd = ((1461 * (iypmy + 4800)) / 4 + (367 * (month as i32 - 2 - 12 * my)) / 12
        - (3 * ((iypmy + 4900) / 100)) / 4
        + day as i32
        - 2_432_076) as f64;

    let day_fraction = (3600.0 * hour as f64 + 60.0 * minute as f64 + second) / 86_400.0;

    // J2000 is MJD 51544.5 (noon); ut counts days from that instant.
    Ok((mjd - 51_544.5) + day_fraction)
}

/// Splits UT days since J2000 into calendar fields, rounded to the
/// nearest millisecond.
pub fn calendar_from_ut(ut: f64) -> CalendarDate {
    // Milliseconds from 2000-01-01T00:00 (midnight before the epoch).
    let total_ms = (ut * 86_400_000.0).round() as i64 + 43_200_000;
    let days = total_ms.div_euclid(86_400_000);
    let ms_of_day = total_ms.rem_euclid(86_400_000);

    let (year, month, day) = civil_from_day_number(days);
    let millisecond = (ms_of_day % 1000) as u32;
    let seconds_of_day = ms_of_day / 1000;

    CalendarDate {
        year,
        month,
        day,
        hour: (seconds_of_day / 3600) as u32,
        minute: ((seconds_of_day / 60) % 60) as u32,
        second: (seconds_of_day % 60) as u32,
        millisecond,
    }
}

/// Era-based day-number to civil date, `days` counted from 2000-01-01.
fn civil_from_day_number(days: i64) -> (i32, u32, u32) {
    // Rebase onto 1970-01-01 and then the 400-year era origin 0000-03-01.
    let z = days + 10_957 + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = (doy - (153 * mp + 2) / 5 + 1) as u32;
    let month = (if mp < 10 { mp + 3 } else { mp - 9 }) as u32;
    let mut year = yoe + era * 400;
    if month <= 2 {
        year += 1;
    }
    (year as i32, month, day)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_j2000_is_zero() {
        let ut = ut_from_calendar(2000, 1, 1, 12, 0, 0.0).unwrap();
        assert_eq!(ut, 0.0);
    }

    #[test]
    fn test_midnight_before_epoch() {
        let ut = ut_from_calendar(2000, 1, 1, 0, 0, 0.0).unwrap();
        assert_eq!(ut, -0.5);
    }

    #[test]
    fn test_known_date() {
        let ut = ut_from_calendar(2018, 12, 2, 18, 30, 12.543).unwrap();
        assert!((ut - 6910.270978506945).abs() < 1e-12);
    }

    #[test]
    fn test_rejects_month_13() {
        assert!(matches!(
            ut_from_calendar(2000, 13, 1, 0, 0, 0.0),
            Err(AstroError::InvalidDate { .. })
        ));
    }

    #[test]
    fn test_rejects_february_30() {
        assert!(ut_from_calendar(2001, 2, 29, 0, 0, 0.0).is_err());
        assert!(ut_from_calendar(2001, 2, 30, 0, 0, 0.0).is_err());
        // 2000 is a leap year (divisible by 400).
        assert!(ut_from_calendar(2000, 2, 29, 0, 0, 0.0).is_ok());
        // 1900 is not.
        assert!(ut_from_calendar(1900, 2, 29, 0, 0, 0.0).is_err());
    }

    #[test]
    fn test_rejects_bad_time_of_day() {
        assert!(ut_from_calendar(2000, 1, 1, 24, 0, 0.0).is_err());
        assert!(ut_from_calendar(2000, 1, 1, 0, 60, 0.0).is_err());
        assert!(ut_from_calendar(2000, 1, 1, 0, 0, 60.0).is_err());
        assert!(ut_from_calendar(2000, 1, 1, 0, 0, -0.1).is_err());
    }

    #[test]
    fn test_round_trip_through_calendar() {
        let cases = [
            (1950, 6, 15, 3, 45, 30.0),
            (2000, 1, 1, 12, 0, 0.0),
            (2018, 12, 2, 18, 30, 12.543),
            (2100, 2, 28, 23, 59, 59.999),
        ];
        for &(y, mo, d, h, mi, s) in &cases {
            let ut = ut_from_calendar(y, mo, d, h, mi, s).unwrap();
            let cal = calendar_from_ut(ut);
            assert_eq!((cal.year, cal.month, cal.day), (y, mo, d));
            assert_eq!((cal.hour, cal.minute), (h, mi));
            let got = cal.second as f64 + cal.millisecond as f64 / 1000.0;
            assert!((got - s).abs() < 2e-3, "{:?}", cal);
        }
    }
}
