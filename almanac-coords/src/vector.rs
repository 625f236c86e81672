//! Time-tagged Cartesian vectors.

use almanac_core::constants::{KM_PER_AU, RAD2DEG};
use almanac_core::{AstroError, AstroResult};
use almanac_time::AstroTime;

/// A Cartesian position in astronomical units, tagged with the moment it
/// refers to.
///
/// The tag travels with the vector through every rotation and conversion,
/// so a chain of frame changes can never silently mix epochs.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AstroVector {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    /// The moment this position refers to.
    pub t: AstroTime,
}

impl AstroVector {
    pub fn new(x: f64, y: f64, z: f64, t: AstroTime) -> Self {
        Self { x, y, z, t }
    }

    /// Euclidean length in AU.
    pub fn length(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Euclidean length in kilometers.
    pub fn length_km(&self) -> f64 {
        KM_PER_AU * self.length()
    }
}

/// Angle between two vectors in degrees, [0, 180].
///
/// Fails with `BadVector` when either vector is too short for the
/// direction to be meaningful.
pub fn angle_between(a: &AstroVector, b: &AstroVector) -> AstroResult<f64> {
    let r = a.length() * b.length();
    if r < 1.0e-8 {
        return Err(AstroError::BadVector);
    }
    let dot = (a.x * b.x + a.y * b.y + a.z * b.z) / r;
    if dot <= -1.0 {
        Ok(180.0)
    } else if dot >= 1.0 {
        Ok(0.0)
    } else {
        Ok(RAD2DEG * dot.acos())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(x: f64, y: f64, z: f64) -> AstroVector {
        AstroVector::new(x, y, z, AstroTime::from_ut(0.0))
    }

    #[test]
    fn test_length() {
        assert!((v(3.0, 4.0, 12.0).length() - 13.0).abs() < 1e-15);
    }

    #[test]
    fn test_angle_between_axes() {
        let a = v(1.0, 0.0, 0.0);
        let b = v(0.0, 1.0, 0.0);
        assert!((angle_between(&a, &b).unwrap() - 90.0).abs() < 1e-12);
    }

    #[test]
    fn test_angle_between_opposite() {
        let a = v(1.0, 1.0, 0.0);
        let b = v(-2.0, -2.0, 0.0);
        assert!((angle_between(&a, &b).unwrap() - 180.0).abs() < 1e-12);
    }

    #[test]
    fn test_angle_between_parallel_is_zero_despite_rounding() {
        // Dot products of parallel vectors can land a hair above 1.
        let a = v(0.1, 0.2, 0.3);
        let b = v(0.2, 0.4, 0.6);
        assert_eq!(angle_between(&a, &b).unwrap(), 0.0);
    }

    #[test]
    fn test_angle_between_rejects_tiny_vectors() {
        let a = v(1e-9, 0.0, 0.0);
        let b = v(0.0, 1.0, 0.0);
        assert!(matches!(angle_between(&a, &b), Err(AstroError::BadVector)));
    }
}
