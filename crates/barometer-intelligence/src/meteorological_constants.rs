// ABOUTME: Meteorological formula coefficients and neutral defaults used by feature derivation
// ABOUTME: Heat index, wind chill, Magnus dew point, pressure trend bands, and seasonal propensity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Barometer Contributors

//! Meteorological constants
//!
//! Coefficients for the standard apparent-temperature and dew-point
//! approximations, plus the fixed values used when a day has no weather
//! observation.

/// Heat index (Rothfusz regression), evaluated in Fahrenheit
///
/// Reference: NWS Technical Attachment SR 90-23
/// <https://www.wpc.ncep.noaa.gov/html/heatindex_equation.shtml>
pub mod heat_index {
    /// Minimum temperature (Celsius) for the heat index to apply
    pub const MIN_TEMPERATURE_CELSIUS: f64 = 27.0;
    /// Minimum relative humidity (percent) for the heat index to apply
    pub const MIN_HUMIDITY_PERCENT: f64 = 40.0;

    /// Regression coefficients c1..c9
    pub const C1: f64 = -42.379;
    /// Coefficient on T
    pub const C2: f64 = 2.049_015_23;
    /// Coefficient on RH
    pub const C3: f64 = 10.143_331_27;
    /// Coefficient on T*RH
    pub const C4: f64 = -0.224_755_41;
    /// Coefficient on T^2
    pub const C5: f64 = -0.006_837_83;
    /// Coefficient on RH^2
    pub const C6: f64 = -0.054_817_17;
    /// Coefficient on T^2*RH
    pub const C7: f64 = 0.001_228_74;
    /// Coefficient on T*RH^2
    pub const C8: f64 = 0.000_852_82;
    /// Coefficient on T^2*RH^2
    pub const C9: f64 = -0.000_001_99;
}

/// Wind chill (JAG/TI 2001), wind speed in m/s
///
/// Reference: Environment Canada wind chill index; coefficients rescaled
/// from the km/h form (11.37 and 0.3965 multiplied by 3.6^0.16).
pub mod wind_chill {
    /// Maximum temperature (Celsius) for wind chill to apply
    pub const MAX_TEMPERATURE_CELSIUS: f64 = 10.0;
    /// Wind speed (km/h) that must be exceeded for wind chill to apply
    pub const MIN_WIND_SPEED_KMH: f64 = 4.8;
    /// Constant term
    pub const BASE: f64 = 13.12;
    /// Coefficient on T
    pub const TEMPERATURE_COEF: f64 = 0.6215;
    /// Coefficient on v^0.16
    pub const WIND_COEF: f64 = -13.956;
    /// Coefficient on T*v^0.16
    pub const MIXED_COEF: f64 = 0.4867;
    /// Exponent applied to wind speed
    pub const WIND_EXPONENT: f64 = 0.16;
}

/// Magnus-Tetens dew point approximation
pub mod dew_point {
    /// Magnus coefficient a
    pub const MAGNUS_A: f64 = 17.27;
    /// Magnus coefficient b (Celsius)
    pub const MAGNUS_B: f64 = 237.7;
    /// Floor applied to humidity so ln(RH) stays finite
    pub const MIN_HUMIDITY_PERCENT: f64 = 1.0;
}

/// 24-hour pressure change bands (hPa)
pub mod pressure_trend {
    /// Above this change the trend is "rapidly rising"
    pub const RAPID_CHANGE_HPA: f64 = 3.0;
    /// Above this change the trend is "rising"
    pub const CHANGE_HPA: f64 = 1.0;
}

/// Rolling history windows used for lagged symptom features
pub mod rolling_windows {
    /// Prior days checked for a recent occurrence
    pub const RECENT_OCCURRENCE_DAYS: usize = 3;
    /// Prior days averaged for intensity
    pub const INTENSITY_AVERAGE_DAYS: usize = 7;
}

/// Values used for days without an observation
pub mod neutral_defaults {
    /// Mild temperature (Celsius)
    pub const TEMPERATURE_CELSIUS: f64 = 20.0;
    /// Mid-range humidity (percent)
    pub const HUMIDITY_PERCENT: f64 = 50.0;
    /// Standard atmosphere (hPa)
    pub const PRESSURE_HPA: f64 = 1013.25;
    /// Light breeze (km/h)
    pub const WIND_SPEED_KMH: f64 = 10.0;
    /// Moderate UV index
    pub const UV_INDEX: f64 = 5.0;
    /// Even odds of precipitation
    pub const PRECIPITATION_PROBABILITY: f64 = 0.5;
    /// Midpoint seasonal factor
    pub const SEASONAL_FACTOR: f64 = 0.5;
}

/// Seasonal symptom propensity by calendar month (January first).
///
/// A coarse proxy: winter months highest, summer lowest.
pub const SEASONAL_FACTOR_BY_MONTH: [f64; 12] = [
    1.0, // January
    0.9, // February
    0.7, // March
    0.5, // April
    0.3, // May
    0.2, // June
    0.1, // July
    0.2, // August
    0.4, // September
    0.6, // October
    0.8, // November
    0.9, // December
];
