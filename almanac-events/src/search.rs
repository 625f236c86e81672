//! Generic search for an ascending zero-crossing of a smooth function
//! of time.

use almanac_core::constants::SECONDS_PER_DAY;
use almanac_core::{AstroError, AstroResult};
use almanac_time::AstroTime;

// One successful quadratic fit: the interpolated root and the slope of
// the parabola there.
struct QuadResult {
    ut: f64,
    df_dt: f64,
}

// Fits a parabola through (-1, fa), (0, fm), (+1, fb) in the affine
// variable x = (t - tm) / dt and returns its single root inside
// [-1, +1], or None when the fit is flat, has no real root in range, or
// has two (which would leave the choice ambiguous).
fn quad_interp(tm: f64, dt: f64, fa: f64, fm: f64, fb: f64) -> Option<QuadResult> {
    let q = (fb + fa) / 2.0 - fm;
    let r = (fb - fa) / 2.0;
    let s = fm;

    let x;
    if q == 0.0 {
        // A straight line.
        if r == 0.0 {
            return None;
        }
        x = -s / r;
        if !(-1.0..=1.0).contains(&x) {
            return None;
        }
    } else {
        let u = r * r - 4.0 * q * s;
        if u <= 0.0 {
            return None;
        }
        let ru = u.sqrt();
        let x1 = (-r + ru) / (2.0 * q);
        let x2 = (-r - ru) / (2.0 * q);
        if (-1.0..=1.0).contains(&x1) {
            if (-1.0..=1.0).contains(&x2) {
                return None;
            }
            x = x1;
        } else if (-1.0..=1.0).contains(&x2) {
            x = x2;
        } else {
            return None;
        }
    }

    Some(QuadResult {
        ut: tm + x * dt,
        df_dt: (2.0 * q * x + r) / dt,
    })
}

/// Finds the time in `[t1, t2]` where `f` ascends through zero.
///
/// `f` must be negative before the event and non-negative after it; the
/// window must contain at most one such crossing. Each iteration first
/// attempts quadratic interpolation through the endpoints and midpoint,
/// accepting the interpolated root when its estimated time error is
/// under `dt_tolerance_seconds`, and otherwise bisects toward whichever
/// half still holds the sign change.
///
/// Returns `Ok(None)` when no ascending crossing exists in the window
/// (or the window holds more than one, making the answer ambiguous).
/// An error from `f` aborts the search immediately; more than 20
/// iterations is `SearchNonConvergence`.
pub fn search<F>(
    mut f: F,
    t1: AstroTime,
    t2: AstroTime,
    dt_tolerance_seconds: f64,
) -> AstroResult<Option<AstroTime>>
where
    F: FnMut(AstroTime) -> AstroResult<f64>,
{
    let dt_days = (dt_tolerance_seconds / SECONDS_PER_DAY).abs();
    let mut t1 = t1;
    let mut t2 = t2;
    let mut f1 = f(t1)?;
    let mut f2 = f(t2)?;
    let mut fmid = 0.0;
    let mut calc_fmid = true;

    const ITER_LIMIT: u32 = 20;
    for _ in 0..ITER_LIMIT {
        let dt = (t2.tt - t1.tt) / 2.0;
        let tmid = t1.add_days(dt);
        if dt.abs() < dt_days {
            return Ok(Some(tmid));
        }

        if calc_fmid {
            fmid = f(tmid)?;
        } else {
            calc_fmid = true;
        }

        if let Some(q) = quad_interp(tmid.ut, t2.ut - tmid.ut, f1, fmid, f2) {
            let tq = AstroTime::from_ut(q.ut);
            let fq = f(tq)?;
            if q.df_dt != 0.0 {
                let dt_guess = (fq / q.df_dt).abs();
                if dt_guess < dt_days {
                    return Ok(Some(tq));
                }

                // Re-bracket around the interpolated root, padded a
                // little, but only when it tightens the window a lot.
                let dt_guess = dt_guess * 1.2;
                if dt_guess < dt / 10.0 {
                    let tleft = tq.add_days(-dt_guess);
                    let tright = tq.add_days(dt_guess);
                    if (tleft.ut - t1.ut) * (tleft.ut - t2.ut) < 0.0
                        && (tright.ut - t1.ut) * (tright.ut - t2.ut) < 0.0
                    {
                        let fleft = f(tleft)?;
                        let fright = f(tright)?;
                        if fleft < 0.0 && fright >= 0.0 {
                            f1 = fleft;
                            f2 = fright;
                            t1 = tleft;
                            t2 = tright;
                            fmid = fq;
                            calc_fmid = false;
                            continue;
                        }
                    }
                }
            }
        }

        // Bisect toward the half that still holds the sign change.
        if f1 < 0.0 && fmid >= 0.0 {
            t2 = tmid;
            f2 = fmid;
            continue;
        }
        if fmid < 0.0 && f2 >= 0.0 {
            t1 = tmid;
            f1 = fmid;
            continue;
        }

        // No ascending crossing in this window, or more than one.
        return Ok(None);
    }

    Err(AstroError::non_convergence("search", ITER_LIMIT))
}
