//! Constants and shared numeric helpers for the Stellar Travel Simulator workspace.

/// Physical constants in easy-to-reason-about units.
pub mod constants {
    /// Speed of light (km/s).
    pub const SPEED_OF_LIGHT: f64 = 299_792.458;
    /// Kilometres per light-year.
    pub const LIGHT_YEAR_KM: f64 = 9.461e12;
    /// Simplified Hubble constant (km/s per megaparsec), held fixed over the trip.
    pub const HUBBLE_CONSTANT: f64 = 70.0;
    /// Light-years per megaparsec.
    pub const MPC_TO_LY: f64 = 3.26156e6;
}

/// Basic unit conversion and rounding helpers.
pub mod units {
    use super::constants::MPC_TO_LY;

    /// Convert light-years to megaparsecs.
    #[inline]
    pub fn ly_to_mpc(v: f64) -> f64 {
        v / MPC_TO_LY
    }

    /// Convert megaparsecs to light-years.
    #[inline]
    pub fn mpc_to_ly(v: f64) -> f64 {
        v * MPC_TO_LY
    }

    /// Convert a percentage of light speed to a dimensionless fraction.
    #[inline]
    pub fn percent_to_fraction(v: f64) -> f64 {
        v / 100.0
    }

    /// Round to `decimals` decimal places.
    #[inline]
    pub fn round_dp(v: f64, decimals: i32) -> f64 {
        let factor = 10f64.powi(decimals);
        (v * factor).round() / factor
    }
}
