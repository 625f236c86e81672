//! Provider traits connecting the event searches to an ephemeris model.
//!
//! The searches never compute planetary positions themselves; they ask
//! an [`Ephemeris`] for heliocentric vectors and derive everything else.
//! Any model with the right accuracy plugs in, from full series
//! expansions down to the analytic toy orbits the integration tests use.

use almanac_core::constants::C_AUDAY;
use almanac_core::{AstroError, AstroResult};
use almanac_coords::AstroVector;
use almanac_time::AstroTime;

use crate::body::Body;

/// Whether geocentric vectors include the aberration of light.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Aberration {
    Corrected,
    None,
}

/// A source of solar-system positions.
pub trait Ephemeris {
    /// Heliocentric position of `body` in the EQJ frame, in AU.
    ///
    /// The Sun maps to the zero vector. May fail with `InvalidBody` for
    /// bodies the provider does not model, or `OutOfRange` for times
    /// outside its validity span.
    fn helio_vector(&self, body: Body, time: AstroTime) -> AstroResult<AstroVector>;

    /// Geocentric position of `body` in the EQJ frame, corrected for
    /// light travel time.
    ///
    /// The light-time loop backdates the body until the implied delay
    /// stabilizes below a nanoday. With `Aberration::Corrected` the
    /// Earth is backdated by the same delay, which folds in the
    /// first-order aberration of the moving Earth. Providers with a
    /// native geocentric lunar model should override this for the Moon.
    fn geo_vector(
        &self,
        body: Body,
        time: AstroTime,
        aberration: Aberration,
    ) -> AstroResult<AstroVector> {
        if body == Body::Earth {
            return Ok(AstroVector::new(0.0, 0.0, 0.0, time));
        }

        let mut earth = self.helio_vector(Body::Earth, time)?;
        let mut ltime = time;
        for _ in 0..10 {
            let h = self.helio_vector(body, ltime)?;
            if aberration == Aberration::Corrected {
                earth = self.helio_vector(Body::Earth, ltime)?;
            }
            let geo = AstroVector::new(h.x - earth.x, h.y - earth.y, h.z - earth.z, time);
            if body == Body::Sun {
                // The Sun is the heliocentric origin; no further
                // correction converges anything.
                return Ok(geo);
            }
            let ltime2 = time.add_days(-geo.length() / C_AUDAY);
            if (ltime2.tt - ltime.tt).abs() < 1.0e-9 {
                return Ok(geo);
            }
            ltime = ltime2;
        }
        Err(AstroError::non_convergence(
            format!("light-travel time for {}", body),
            10,
        ))
    }
}

/// Visual-magnitude information for a body at one moment.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IlluminationInfo {
    /// Apparent visual magnitude.
    pub mag: f64,
    /// Sun-body-Earth angle in degrees.
    pub phase_angle: f64,
    /// Distance from the Sun in AU.
    pub helio_dist: f64,
    /// Saturn ring tilt in degrees as seen from the Earth; 0 elsewhere.
    pub ring_tilt: f64,
}

/// A source of apparent-brightness data, used by the peak-magnitude
/// search.
pub trait IlluminationSource {
    fn illumination(&self, body: Body, time: AstroTime) -> AstroResult<IlluminationInfo>;
}
