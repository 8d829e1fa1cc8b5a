//! Data type and methods to store a decoded surface weather observation.

use chrono::NaiveDateTime;
use metfor::{Celsius, HectoPascal, Knots};

pub use self::station_info::StationInfo;

/// Standard atmosphere sea level pressure.
///
/// Substituted whenever a report carries no decodable pressure group.
pub const STANDARD_PRESSURE: HectoPascal = HectoPascal(1013.25);

/// The surface variables decoded from a single METAR report.
///
/// Every numeric field holds an already resolved value: decoding substitutes a documented
/// default for any group that is absent or malformed, so the fields are always finite and
/// never missing. The defaults are calm wind, 0°C temperature and dew point, and
/// `STANDARD_PRESSURE`.
///
#[derive(Clone, Debug, PartialEq)]
pub struct Observation {
    // Station info
    station: StationInfo,

    // Issue time reported by the data source, not decoded from the report text.
    observation_time: Option<NaiveDateTime>,

    // Surface variables
    wind_speed: Knots,
    temperature: Celsius,
    dew_point: Celsius,
    pressure: HectoPascal,

    // The undecoded report, retained for display and audit.
    raw_text: String,
}

impl Default for Observation {
    #[inline]
    fn default() -> Self {
        Observation {
            station: StationInfo::default(),
            observation_time: None,
            wind_speed: Knots(0.0),
            temperature: Celsius(0.0),
            dew_point: Celsius(0.0),
            pressure: STANDARD_PRESSURE,
            raw_text: String::new(),
        }
    }
}

impl Observation {
    /// Create a new observation with default values. This is a proxy for default with a clearer
    /// name.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use metfor::Knots;
    /// use turbulence_analysis::{Observation, STANDARD_PRESSURE};
    ///
    /// let obs = Observation::new();
    /// assert_eq!(obs.wind_speed(), Knots(0.0));
    /// assert_eq!(obs.pressure(), STANDARD_PRESSURE);
    /// ```
    #[inline]
    pub fn new() -> Self {
        Observation::default()
    }

    /// Builder function for setting the station info.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use turbulence_analysis::{Observation, StationInfo};
    ///
    /// let stn = StationInfo::new(47.46, -122.31);
    /// let _obs = Observation::new().with_station_info(stn);
    /// ```
    #[inline]
    pub fn with_station_info(mut self, new_value: StationInfo) -> Self {
        self.station = new_value;
        self
    }

    /// Get the station info.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use turbulence_analysis::StationInfo;
    /// # use turbulence_analysis::doctest::make_test_observation;
    ///
    /// let obs = make_test_observation();
    /// let stn: &StationInfo = obs.station_info();
    ///
    /// println!("{:?}", stn);
    /// ```
    #[inline]
    pub fn station_info(&self) -> &StationInfo {
        &self.station
    }

    /// Builder method to set the observation time.
    ///
    /// # Examples
    /// ```rust
    /// use turbulence_analysis::Observation;
    /// use chrono::NaiveDate;
    ///
    /// let otime = NaiveDate::from_ymd(2019, 1, 1).and_hms(12, 0, 0);
    /// let _obs = Observation::new().with_observation_time(otime);
    /// let _obs = Observation::new().with_observation_time(Some(otime));
    /// ```
    #[inline]
    pub fn with_observation_time<T>(mut self, observation_time: T) -> Self
    where
        Option<NaiveDateTime>: From<T>,
    {
        self.observation_time = Option::from(observation_time);
        self
    }

    /// Time the report was issued, as reported by the data source.
    #[inline]
    pub fn observation_time(&self) -> Option<NaiveDateTime> {
        self.observation_time
    }

    /// Builder method for the sustained wind speed.
    ///
    /// # Examples
    ///```rust
    /// use metfor::{Knots, MetersPSec};
    /// use turbulence_analysis::Observation;
    ///
    /// let _obs = Observation::new().with_wind_speed(Knots(12.0));
    /// let _obs = Observation::new().with_wind_speed(MetersPSec(6.2));
    ///```
    #[inline]
    pub fn with_wind_speed<S>(mut self, value: S) -> Self
    where
        Knots: From<S>,
    {
        self.wind_speed = Knots::from(value);
        self
    }

    /// Get the sustained wind speed.
    #[inline]
    pub fn wind_speed(&self) -> Knots {
        self.wind_speed
    }

    /// Builder method for the surface temperature.
    ///
    /// # Examples
    ///```rust
    /// use metfor::{Celsius, Fahrenheit, Kelvin};
    /// use turbulence_analysis::Observation;
    ///
    /// let _obs = Observation::new().with_temperature(Celsius(20.0));
    /// let _obs = Observation::new().with_temperature(Kelvin(290.0));
    /// let _obs = Observation::new().with_temperature(Fahrenheit(72.1));
    ///```
    #[inline]
    pub fn with_temperature<T>(mut self, value: T) -> Self
    where
        Celsius: From<T>,
    {
        self.temperature = Celsius::from(value);
        self
    }

    /// Get the surface temperature.
    #[inline]
    pub fn temperature(&self) -> Celsius {
        self.temperature
    }

    /// Builder method for the surface dew point.
    ///
    /// # Examples
    ///```rust
    /// use metfor::{Celsius, Fahrenheit, Kelvin};
    /// use turbulence_analysis::Observation;
    ///
    /// let _obs = Observation::new().with_dew_point(Celsius(9.0));
    /// let _obs = Observation::new().with_dew_point(Kelvin(282.15));
    /// let _obs = Observation::new().with_dew_point(Fahrenheit(48.2));
    ///```
    #[inline]
    pub fn with_dew_point<T>(mut self, value: T) -> Self
    where
        Celsius: From<T>,
    {
        self.dew_point = Celsius::from(value);
        self
    }

    /// Get the surface dew point.
    #[inline]
    pub fn dew_point(&self) -> Celsius {
        self.dew_point
    }

    /// Builder method for the station pressure.
    ///
    /// # Examples
    ///```rust
    /// use metfor::{HectoPascal, Millibar};
    /// use turbulence_analysis::Observation;
    ///
    /// let _obs = Observation::new().with_pressure(HectoPascal(1021.5));
    /// let _obs = Observation::new().with_pressure(Millibar(1021.5));
    ///```
    #[inline]
    pub fn with_pressure<P>(mut self, value: P) -> Self
    where
        HectoPascal: From<P>,
    {
        self.pressure = HectoPascal::from(value);
        self
    }

    /// Get the station pressure.
    #[inline]
    pub fn pressure(&self) -> HectoPascal {
        self.pressure
    }

    /// Builder method for the raw report text.
    ///
    /// # Examples
    ///```rust
    /// use turbulence_analysis::Observation;
    ///
    /// let obs = Observation::new()
    ///     .with_raw_text("EGLL 241750Z 25010KT 9999 SCT030 17/09 Q1021");
    /// assert_eq!(obs.raw_text(), "EGLL 241750Z 25010KT 9999 SCT030 17/09 Q1021");
    ///```
    #[inline]
    pub fn with_raw_text<S>(mut self, text: S) -> Self
    where
        S: Into<String>,
    {
        self.raw_text = text.into();
        self
    }

    /// Get the raw report text this observation was decoded from.
    #[inline]
    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }
}

// FIXME: only configure for test and doc tests, not possible as of 1.41
#[doc(hidden)]
pub mod doctest {
    use super::*;

    pub fn make_test_observation() -> super::Observation {
        Observation::new()
            .with_station_info(StationInfo::new(51.4775, -0.4614).with_ident("EGLL".to_owned()))
            .with_wind_speed(Knots(10.0))
            .with_temperature(Celsius(17.0))
            .with_dew_point(Celsius(9.0))
            .with_pressure(HectoPascal(1021.0))
            .with_raw_text("EGLL 241750Z 25010KT 9999 SCT030 17/09 Q1021")
    }
}


mod station_info;
