//! Time scales for the almanac workspace.
//!
//! The central type is [`AstroTime`], a (UT, TT) pair measured in days
//! since the J2000 epoch. Calendar conversion, the delta-T model tying
//! the two scales together, and sidereal time live here.

pub mod astro_time;
pub mod calendar;
pub mod delta_t;
pub mod sidereal;

pub use astro_time::AstroTime;
pub use calendar::CalendarDate;
pub use delta_t::delta_t;
pub use sidereal::{era, sidereal_time};
