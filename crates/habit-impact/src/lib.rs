//! Environmental impact estimation for a sustainable habit tracker.
//!
//! [`impact`] maps an action type, quantity and unit to estimated CO2, water and tree savings
//! using a read-only [`impact::RateTable`]. [`tracking`] layers action logging, per-user totals
//! and goal/challenge progress on top of the estimator.

pub mod config;
pub mod error;
pub mod impact;
pub mod telemetry;
pub mod tracking;
