//! Physical and conversion constants shared across the workspace.
//!
//! Values follow the DE405/IAU conventions used by the rest of the stack.
//! Angle constants carry enough digits that conversions round-trip at
//! `f64` precision.

/// Degrees to radians.
pub const DEG2RAD: f64 = 0.017453292519943296;

/// Radians to degrees.
pub const RAD2DEG: f64 = 57.295779513082321;

/// Arcseconds in a full circle.
pub const ASEC360: f64 = 1_296_000.0;

/// Arcseconds to radians.
pub const ASEC2RAD: f64 = 4.848136811095359935899141e-6;

/// Seconds in a civil day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Julian Date of the J2000 epoch (2000-01-01 12:00 TT).
pub const J2000_JD: f64 = 2_451_545.0;

/// Offset between Julian Date and Modified Julian Date.
pub const MJD_BASIS: f64 = 2_400_000.5;

/// The J2000 epoch expressed in MJD.
pub const Y2000_IN_MJD: f64 = J2000_JD - MJD_BASIS;

/// Days per Julian century.
pub const DAYS_PER_JULIAN_CENTURY: f64 = 36_525.0;

/// Speed of light in AU/day.
pub const C_AUDAY: f64 = 173.144_632_684_669_3;

/// Equatorial Earth radius in meters.
pub const EARTH_RADIUS_METERS: f64 = 6_378_136.6;

/// Astronomical unit in meters.
pub const AU_METERS: f64 = 1.495_978_706_909_893_2e11;

/// Kilometers per astronomical unit.
pub const KM_PER_AU: f64 = 1.495_978_706_909_893_2e8;

/// Earth oblateness flattening factor (1 - f).
pub const EARTH_FLATTENING: f64 = 1.0 - 0.003_352_819_697_896;

/// Mean solar days per sidereal day.
pub const SOLAR_DAYS_PER_SIDEREAL_DAY: f64 = 0.997_269_571_759_259_2;

/// Mean length of the synodic month (new moon to new moon), days.
pub const MEAN_SYNODIC_MONTH: f64 = 29.530_588;

/// Mean length of the anomalistic month (perigee to perigee), days.
pub const MEAN_ANOMALISTIC_MONTH: f64 = 27.554_55;

/// Earth's orbital period in days.
pub const EARTH_ORBITAL_PERIOD: f64 = 365.256;

/// Refraction at the visible horizon, degrees (34 arcminutes).
pub const REFRACTION_NEAR_HORIZON: f64 = 34.0 / 60.0;

/// Radius of the Sun in AU.
pub const SUN_RADIUS_AU: f64 = 4.6505e-3;

/// Equatorial radius of the Moon in AU.
pub const MOON_RADIUS_AU: f64 = 1.15717e-5;

/// Mean obliquity of the J2000 ecliptic, radians.
pub const OBLIQUITY_J2000_RAD: f64 = 0.409_092_600_595_990_12;
