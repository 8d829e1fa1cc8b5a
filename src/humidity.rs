//! Humidity formulas used by the turbulence index.

use metfor::{Celsius, HectoPascal};

/// Saturation vapor pressure over liquid water.
///
/// Magnus type approximation using the 6.11 / 7.5 / 237.7 coefficient set. The coefficients are
/// part of the turbulence index definition, changing them changes every published index value.
#[inline]
pub fn saturation_vapor_pressure(temperature: Celsius) -> HectoPascal {
    let Celsius(t) = temperature;

    HectoPascal(6.11 * 10.0_f64.powf((7.5 * t) / (237.7 + t)))
}

/// Relative humidity (percent) from temperature and dew point, rounded to the nearest tenth of
/// a percent.
///
/// The result is not clamped, a dew point above the temperature yields a value over 100.
#[inline]
pub fn relative_humidity(temperature: Celsius, dew_point: Celsius) -> f64 {
    let HectoPascal(svp) = saturation_vapor_pressure(temperature);
    let HectoPascal(svp_dew) = saturation_vapor_pressure(dew_point);

    let rh = 100.0 * (svp_dew / svp);

    (rh * 10.0).round() / 10.0
}
