//! The turbulence index and its severity categories.

use crate::{
    error::{AnalysisError, Result},
    humidity::relative_humidity,
    observation::Observation,
};
use metfor::{Celsius, HectoPascal, Knots};
use std::fmt::Display;
use strum_macros::EnumIter;

/// Weights controlling how much each variable contributes to the turbulence index.
///
/// Weights are expected to be non-negative. They do not have to sum to one, although the
/// reference set returned by `Default` does. `assess_turbulence` applies whatever it is given,
/// so run weights from an untrusted source through `checked` first.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightConfig {
    /// Weight for the sustained wind speed term.
    pub wind_speed: f64,
    /// Weight for the temperature term.
    pub temperature: f64,
    /// Weight for the pressure departure term.
    pub pressure: f64,
    /// Weight for the relative humidity term.
    pub humidity: f64,
}

impl Default for WeightConfig {
    /// The reference weights, 0.4 / 0.3 / 0.2 / 0.1.
    #[inline]
    fn default() -> Self {
        WeightConfig {
            wind_speed: 0.4,
            temperature: 0.3,
            pressure: 0.2,
            humidity: 0.1,
        }
    }
}

impl WeightConfig {
    /// Build a `WeightConfig`, validating that the weights can produce a usable index.
    ///
    /// Any negative weight, or all weights zero, is rejected with
    /// `AnalysisError::UnusableWeights`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use turbulence_analysis::WeightConfig;
    ///
    /// assert!(WeightConfig::checked(0.4, 0.3, 0.2, 0.1).is_ok());
    /// assert!(WeightConfig::checked(2.0, 0.0, 0.0, 0.0).is_ok());
    /// assert!(WeightConfig::checked(-0.4, 0.3, 0.2, 0.1).is_err());
    /// assert!(WeightConfig::checked(0.0, 0.0, 0.0, 0.0).is_err());
    /// ```
    pub fn checked(
        wind_speed: f64,
        temperature: f64,
        pressure: f64,
        humidity: f64,
    ) -> Result<Self> {
        let any_negative =
            wind_speed < 0.0 || temperature < 0.0 || pressure < 0.0 || humidity < 0.0;
        let all_zero =
            wind_speed == 0.0 && temperature == 0.0 && pressure == 0.0 && humidity == 0.0;

        if any_negative || all_zero {
            Err(AnalysisError::UnusableWeights)
        } else {
            Ok(WeightConfig {
                wind_speed,
                temperature,
                pressure,
                humidity,
            })
        }
    }
}

/// Turbulence severity category.
///
/// Categories are ordered by severity, `Low < Moderate < High < Severe < Extreme`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, Hash, PartialOrd, Ord)]
pub enum TurbulenceCategory {
    /// Index up to and including 0.2.
    Low,
    /// Index above 0.2, up to and including 0.4.
    Moderate,
    /// Index above 0.4, up to and including 0.6.
    High,
    /// Index above 0.6, up to and including 0.8.
    Severe,
    /// Index above 0.8.
    Extreme,
}

impl TurbulenceCategory {
    /// The category for a turbulence index value.
    ///
    /// The bands have inclusive upper bounds at 0.2, 0.4, 0.6, and 0.8, and the top band is open
    /// ended.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use turbulence_analysis::TurbulenceCategory;
    ///
    /// assert_eq!(TurbulenceCategory::from_index(0.2), TurbulenceCategory::Low);
    /// assert_eq!(TurbulenceCategory::from_index(0.5), TurbulenceCategory::High);
    /// assert_eq!(TurbulenceCategory::from_index(2.0), TurbulenceCategory::Extreme);
    /// ```
    #[inline]
    pub fn from_index(index: f64) -> Self {
        use TurbulenceCategory::*;

        if index <= 0.2 {
            Low
        } else if index <= 0.4 {
            Moderate
        } else if index <= 0.6 {
            High
        } else if index <= 0.8 {
            Severe
        } else {
            Extreme
        }
    }
}

impl Display for TurbulenceCategory {
    fn fmt(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(formatter, "{:?}", self)
    }
}

/// The result of assessing one observation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TurbulenceAssessment {
    /// The composite turbulence index, between 0 and 1.
    pub index: f64,
    /// Severity category the index falls in.
    pub category: TurbulenceCategory,
    /// Sustained wind speed the index was computed from.
    pub wind_speed: Knots,
    /// Temperature the index was computed from.
    pub temperature: Celsius,
    /// Pressure the index was computed from.
    pub pressure: HectoPascal,
    /// Relative humidity in percent, rounded to one decimal place.
    pub relative_humidity: f64,
}

/// Compute the turbulence index and severity category for an observation.
///
/// Four weighted terms are summed: wind speed over 50 knots, absolute temperature over 40°C,
/// absolute pressure departure from 980 hPa over 50 hPa, and relative humidity over 100%. Each
/// term is an unbounded ratio, only the final sum is capped at 1.0. The relative humidity is
/// derived from the observation's temperature and dew point on every call, there is no cached
/// state anywhere.
///
/// The weights are applied as given, see `WeightConfig` for the expectations they carry.
///
/// # Examples
///
/// ```rust
/// use turbulence_analysis::{assess_turbulence, TurbulenceCategory, WeightConfig};
/// # use turbulence_analysis::doctest::make_test_observation;
///
/// let obs = make_test_observation();
/// let assessment = assess_turbulence(&obs, WeightConfig::default());
///
/// assert!(assessment.index <= 1.0);
/// assert_eq!(assessment.category, TurbulenceCategory::from_index(assessment.index));
/// ```
#[inline]
pub fn assess_turbulence(obs: &Observation, weights: WeightConfig) -> TurbulenceAssessment {
    let Knots(wind_speed) = obs.wind_speed();
    let Celsius(temperature) = obs.temperature();
    let HectoPascal(pressure) = obs.pressure();

    let relative_humidity = relative_humidity(obs.temperature(), obs.dew_point());

    let mut index = 0.0;
    index += (wind_speed / 50.0) * weights.wind_speed;
    index += (temperature.abs() / 40.0) * weights.temperature;
    index += ((pressure - 980.0).abs() / 50.0) * weights.pressure;
    index += (relative_humidity / 100.0) * weights.humidity;

    let index = index.min(1.0);

    TurbulenceAssessment {
        index,
        category: TurbulenceCategory::from_index(index),
        wind_speed: obs.wind_speed(),
        temperature: obs.temperature(),
        pressure: obs.pressure(),
        relative_humidity,
    }
}
