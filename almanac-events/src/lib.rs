//! Astronomical event searches over a pluggable ephemeris.
//!
//! The crate supplies the generic ascending-root [`search`], the
//! [`Ephemeris`] and [`IlluminationSource`] provider traits, and the
//! event searches built on them: rise/set and hour angle, moon phases
//! and quarters, lunar and planetary apsides, elongations, relative
//! longitude, seasons, and peak magnitude. Position models stay outside
//! this crate; anything implementing [`Ephemeris`] plugs in.

pub mod apsis;
pub mod body;
pub mod elongation;
pub mod geometry;
pub mod moon;
pub mod provider;
pub mod rise_set;
pub mod search;
pub mod seasons;

pub use apsis::{
    next_lunar_apsis, next_planet_apsis, search_lunar_apsis, search_planet_apsis, ApsisInfo,
    ApsisKind,
};
pub use body::Body;
pub use elongation::{
    elongation, search_max_elongation, search_peak_magnitude, search_relative_longitude,
    ElongationInfo, Visibility,
};
pub use geometry::{
    angle_from_sun, ecliptic_longitude, equator, longitude_from_sun, moon_phase, sun_position,
};
pub use moon::{next_moon_quarter, search_moon_phase, search_moon_quarter, MoonQuarterInfo};
pub use provider::{Aberration, Ephemeris, IlluminationInfo, IlluminationSource};
pub use rise_set::{search_hour_angle, search_rise_set, Direction, HourAngleInfo};
pub use search::search;
pub use seasons::{search_sun_longitude, seasons, SeasonsInfo};
