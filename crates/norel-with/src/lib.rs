//! Journey state model, payment schedule and supporting mock data behind the
//! NOREL WITH subscription dashboard.

pub mod billing;
pub mod config;
pub mod error;
pub mod journey;
pub mod profile;
pub mod telemetry;
