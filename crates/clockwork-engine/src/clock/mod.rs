//! Analog clock driven by a pendulum.
//!
//! The displayed time is never read from a wall clock: it is the time the
//! user set plus two clock seconds for every full pendulum period since.

pub mod config;
pub mod hands;
pub mod model;
pub mod pendulum;
pub mod time;

pub use config::ClockConfig;
pub use hands::{HandAngles, HandKind};
pub use model::{ClockModel, CLOCK_SECONDS_PER_PERIOD};
pub use pendulum::Pendulum;
pub use time::{ClockTime, SECONDS_PER_CYCLE};
