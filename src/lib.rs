//! Facade over the Stellar Travel Simulator workspace crates.
//!
//! Front-ends depend on this package and reach the members through stable
//! module names rather than tracking each crate individually.

pub use stellar_config as config;
pub use stellar_core::{constants, units};
pub use stellar_export as export;
pub use stellar_mission as mission;
pub use stellar_profile as profile;

/// Returns the version of the library for smoke tests.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
