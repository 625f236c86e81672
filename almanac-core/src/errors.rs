//! Error types shared across the almanac workspace.
//!
//! A single unified error enum covers the failure modes of the whole
//! computation stack: calendar validation, unsupported bodies, model range
//! limits, observer validation, degenerate vectors, and solver
//! non-convergence.
//!
//! # "Not found" is not an error
//!
//! Event searches distinguish two very different outcomes:
//!
//! - the event does not occur inside the requested window (no sunrise above
//!   the arctic circle in June, no moon phase within the day limit); this
//!   is a *normal* result, returned as `Ok(None)`;
//! - a solver precondition was violated (root finder exceeded its iteration
//!   cap, light-travel iteration diverged); this is
//!   [`SearchNonConvergence`](AstroError::SearchNonConvergence) and must
//!   propagate.
//!
//! # Usage
//!
//! ```
//! use almanac_core::{AstroError, AstroResult};
//!
//! fn check_latitude(lat: f64) -> AstroResult<()> {
//!     if !(-90.0..=90.0).contains(&lat) {
//!         return Err(AstroError::observer_out_of_range(lat));
//!     }
//!     Ok(())
//! }
//! ```

use thiserror::Error;

/// Unified error type for astronomical calculations.
///
/// Use the constructor methods ([`invalid_date`](Self::invalid_date),
/// [`invalid_body`](Self::invalid_body), etc.) for consistent creation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AstroError {
    /// Invalid proleptic Gregorian calendar input (e.g. February 30, month 13).
    #[error("Invalid date {year}-{month:02}-{day:02}: {message}")]
    InvalidDate {
        year: i32,
        month: i32,
        day: i32,
        message: String,
    },

    /// The body is not supported by the calling function.
    #[error("Invalid body for this operation: {body}")]
    InvalidBody { body: String },

    /// The Earth was passed where it is disallowed (geocentric functions).
    #[error("The Earth is not allowed as the body for this operation")]
    EarthNotAllowed,

    /// The body is valid but the time is outside the supported model window.
    #[error("Time {tt_days} days from J2000 is outside the supported range for {body}")]
    OutOfRange { body: String, tt_days: f64 },

    /// Observer latitude outside [-90, +90] degrees.
    #[error("Observer latitude {latitude} is outside [-90, +90] degrees")]
    ObserverOutOfRange { latitude: f64 },

    /// A vector too small to define a direction.
    #[error("Vector is too small to have a direction")]
    BadVector,

    /// A numeric solver exceeded its iteration cap. Indicates a violated
    /// precondition in the caller, never a normal outcome.
    #[error("Solver did not converge in {context}: exceeded {iterations} iterations")]
    SearchNonConvergence { context: String, iterations: u32 },

    /// An internal invariant was broken (a bug, not a caller mistake).
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Convenience alias for `Result<T, AstroError>`.
pub type AstroResult<T> = Result<T, AstroError>;

impl AstroError {
    /// Creates an [`InvalidDate`](Self::InvalidDate) error.
    pub fn invalid_date(year: i32, month: i32, day: i32, reason: &str) -> Self {
        Self::InvalidDate {
            year,
            month,
            day,
            message: reason.to_string(),
        }
    }

    /// Creates an [`InvalidBody`](Self::InvalidBody) error.
    pub fn invalid_body(body: impl Into<String>) -> Self {
        Self::InvalidBody { body: body.into() }
    }

    /// Creates an [`OutOfRange`](Self::OutOfRange) error.
    pub fn out_of_range(body: impl Into<String>, tt_days: f64) -> Self {
        Self::OutOfRange {
            body: body.into(),
            tt_days,
        }
    }

    /// Creates an [`ObserverOutOfRange`](Self::ObserverOutOfRange) error.
    pub fn observer_out_of_range(latitude: f64) -> Self {
        Self::ObserverOutOfRange { latitude }
    }

    /// Creates a [`SearchNonConvergence`](Self::SearchNonConvergence) error.
    pub fn non_convergence(context: impl Into<String>, iterations: u32) -> Self {
        Self::SearchNonConvergence {
            context: context.into(),
            iterations,
        }
    }

    /// Creates an [`Internal`](Self::Internal) error.
    pub fn internal(reason: impl Into<String>) -> Self {
        Self::Internal(reason.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_date_message() {
        let err = AstroError::invalid_date(2000, 13, 1, "month out of range");
        assert_eq!(
            err.to_string(),
            "Invalid date 2000-13-01: month out of range"
        );
    }

    #[test]
    fn test_invalid_body_message() {
        let err = AstroError::invalid_body("Sun");
        assert!(err.to_string().contains("Sun"));
    }

    #[test]
    fn test_observer_out_of_range() {
        let err = AstroError::observer_out_of_range(91.0);
        assert!(err.to_string().contains("91"));
    }

    #[test]
    fn test_non_convergence_message() {
        let err = AstroError::non_convergence("search", 20);
        assert!(err.to_string().contains("search"));
        assert!(err.to_string().contains("20"));
    }

    #[test]
    fn test_send_sync() {
        fn _assert_send<T: Send>() {}
        fn _assert_sync<T: Sync>() {}
        _assert_send::<AstroError>();
        _assert_sync::<AstroError>();
    }
}
