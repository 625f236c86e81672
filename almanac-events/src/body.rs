//! Solar-system bodies and their mean orbital periods.

use almanac_core::constants::{EARTH_ORBITAL_PERIOD, MEAN_SYNODIC_MONTH};
use almanac_core::{AstroError, AstroResult};

/// A body the event searches can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Body {
    Mercury,
    Venus,
    Earth,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
    Sun,
    Moon,
}

impl Body {
    /// Mean heliocentric orbital period in days; `None` for the Sun and
    /// the Moon.
    pub fn orbital_period(self) -> Option<f64> {
        match self {
            Body::Mercury => Some(87.969),
            Body::Venus => Some(224.701),
            Body::Earth => Some(365.256),
            Body::Mars => Some(686.980),
            Body::Jupiter => Some(4332.589),
            Body::Saturn => Some(10759.22),
            Body::Uranus => Some(30685.4),
            Body::Neptune => Some(60189.0),
            Body::Pluto => Some(90560.0),
            Body::Sun | Body::Moon => None,
        }
    }

    /// True for planets orbiting outside the Earth's orbit.
    pub fn is_superior(self) -> bool {
        matches!(
            self,
            Body::Mars | Body::Jupiter | Body::Saturn | Body::Uranus | Body::Neptune | Body::Pluto
        )
    }

    /// Mean synodic period in days: how often the body repeats a given
    /// geometry relative to the Sun as seen from the Earth.
    ///
    /// Fails with `EarthNotAllowed` for the Earth itself and
    /// `InvalidBody` for the Sun. The Moon's synodic period is the mean
    /// synodic month.
    pub fn synodic_period(self) -> AstroResult<f64> {
        match self {
            Body::Earth => Err(AstroError::EarthNotAllowed),
            Body::Moon => Ok(MEAN_SYNODIC_MONTH),
            Body::Sun => Err(AstroError::invalid_body("Sun")),
            _ => {
                let tp = self.orbital_period().ok_or_else(|| {
                    AstroError::internal("planet missing an orbital period")
                })?;
                Ok((EARTH_ORBITAL_PERIOD / (EARTH_ORBITAL_PERIOD / tp - 1.0)).abs())
            }
        }
    }

    /// Display name, matching the variant spelling.
    pub fn name(self) -> &'static str {
        match self {
            Body::Mercury => "Mercury",
            Body::Venus => "Venus",
            Body::Earth => "Earth",
            Body::Mars => "Mars",
            Body::Jupiter => "Jupiter",
            Body::Saturn => "Saturn",
            Body::Uranus => "Uranus",
            Body::Neptune => "Neptune",
            Body::Pluto => "Pluto",
            Body::Sun => "Sun",
            Body::Moon => "Moon",
        }
    }
}

impl std::fmt::Display for Body {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synodic_period_mars() {
        // Mars repeats opposition roughly every 780 days.
        let syn = Body::Mars.synodic_period().unwrap();
        assert!((syn - 779.9).abs() < 1.0, "syn = {}", syn);
    }

    #[test]
    fn test_synodic_period_mercury() {
        let syn = Body::Mercury.synodic_period().unwrap();
        assert!((syn - 115.88).abs() < 0.1, "syn = {}", syn);
    }

    #[test]
    fn test_synodic_period_moon() {
        assert_eq!(Body::Moon.synodic_period().unwrap(), MEAN_SYNODIC_MONTH);
    }

    #[test]
    fn test_earth_rejected() {
        assert!(matches!(
            Body::Earth.synodic_period(),
            Err(AstroError::EarthNotAllowed)
        ));
    }

    #[test]
    fn test_superior_split() {
        assert!(!Body::Venus.is_superior());
        assert!(!Body::Mercury.is_superior());
        assert!(Body::Mars.is_superior());
        assert!(Body::Pluto.is_superior());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let json = serde_json::to_string(&Body::Saturn).unwrap();
        let back: Body = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Body::Saturn);
    }
}
