//! METAR report type and the decoder that turns report text into observations.

use crate::{
    error::{AnalysisError, Result},
    observation::{Observation, StationInfo, STANDARD_PRESSURE},
};
use chrono::NaiveDateTime;
use itertools::Itertools;
use metfor::{Celsius, HectoPascal, Knots};
use optional::{none, some, Optioned};

/// A raw METAR report paired with the station it was retrieved for.
///
/// The report text is kept exactly as it came from the data source. Decoding it is a separate
/// step, see `decode_metar`.
#[derive(Clone, Debug, PartialEq)]
pub struct RawReport {
    text: String,
    station: StationInfo,
    observation_time: Option<NaiveDateTime>,
}

impl RawReport {
    /// Create a new `RawReport` from report text and the station it was requested for.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use turbulence_analysis::{RawReport, StationInfo};
    ///
    /// let stn = StationInfo::new(37.6188, -122.375).with_ident("KSFO".to_owned());
    /// let report = RawReport::new("KSFO 241530Z 28012KT 10SM CLR 19/12 A2993", stn);
    /// assert_eq!(report.text(), "KSFO 241530Z 28012KT 10SM CLR 19/12 A2993");
    /// ```
    #[inline]
    pub fn new<S>(text: S, station: StationInfo) -> Self
    where
        S: Into<String>,
    {
        RawReport {
            text: text.into(),
            station,
            observation_time: None,
        }
    }

    /// Builder method to set the time the report was issued.
    ///
    /// This comes from the data source alongside the report, it is not decoded from the text.
    ///
    /// # Examples
    /// ```rust
    /// use chrono::NaiveDate;
    /// use turbulence_analysis::{RawReport, StationInfo};
    ///
    /// let itime = NaiveDate::from_ymd(2019, 1, 24).and_hms(15, 30, 0);
    /// let stn = StationInfo::new(37.6188, -122.375);
    /// let _report = RawReport::new("KSFO 241530Z 28012KT", stn.clone())
    ///     .with_observation_time(itime);
    /// let _report = RawReport::new("KSFO 241530Z 28012KT", stn)
    ///     .with_observation_time(Some(itime));
    /// ```
    #[inline]
    pub fn with_observation_time<T>(mut self, observation_time: T) -> Self
    where
        Option<NaiveDateTime>: From<T>,
    {
        self.observation_time = Option::from(observation_time);
        self
    }

    /// The raw report text.
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The station this report was retrieved for.
    #[inline]
    pub fn station_info(&self) -> &StationInfo {
        &self.station
    }

    /// Time the report was issued, as reported by the data source.
    #[inline]
    pub fn observation_time(&self) -> Option<NaiveDateTime> {
        self.observation_time
    }

    /// The leading station identifier record of the report.
    ///
    /// A report has to lead with a four character identifier such as `KSFO`, optionally preceded
    /// by a `METAR` or `SPECI` report type keyword. Anything else is a structural failure worth
    /// surfacing at the boundary that fetched the report, so unlike `decode_metar` this returns
    /// an error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use turbulence_analysis::{RawReport, StationInfo};
    ///
    /// let stn = StationInfo::new(37.6188, -122.375);
    ///
    /// let report = RawReport::new("KSFO 241530Z 28012KT 10SM CLR 19/12 A2993", stn.clone());
    /// assert_eq!(report.station_record().unwrap(), "KSFO");
    ///
    /// let report = RawReport::new("METAR KSFO 241530Z 28012KT", stn.clone());
    /// assert_eq!(report.station_record().unwrap(), "KSFO");
    ///
    /// let report = RawReport::new("", stn);
    /// assert!(report.station_record().is_err());
    /// ```
    #[inline]
    pub fn station_record(&self) -> Result<&str> {
        let mut tokens = self.text.split_whitespace();

        let first = tokens.next().ok_or(AnalysisError::MissingStationRecord)?;
        let candidate = if first == "METAR" || first == "SPECI" {
            tokens.next().ok_or(AnalysisError::MissingStationRecord)?
        } else {
            first
        };

        if is_station_ident(candidate) {
            Ok(candidate)
        } else {
            Err(AnalysisError::MissingStationRecord)
        }
    }
}

/// Decode a METAR report into an `Observation`.
///
/// This never fails. The report text is split on whitespace and every token is checked against
/// the recognized group shapes, wind such as `28012KT` or `27015G25KT`, temperature and dew
/// point such as `19/12`, `-2/-5`, or `M05/M12`, and pressure such as `A2993` or `Q1013`.
/// Unrecognized tokens are skipped, and when a group appears more than once the last one wins.
/// Any group that never appears resolves to its default, calm wind, 0°C temperature and dew
/// point, and `STANDARD_PRESSURE`. The station info and observation time of the report are
/// copied through unchanged.
///
/// # Examples
///
/// ```rust
/// use metfor::{Celsius, HectoPascal, Knots};
/// use turbulence_analysis::{decode_metar, RawReport, StationInfo};
///
/// let stn = StationInfo::new(37.6188, -122.375).with_ident("KSFO".to_owned());
/// let report = RawReport::new("KSFO 241530Z 28012KT 10SM CLR 19/12 A2993", stn);
/// let obs = decode_metar(&report);
///
/// assert_eq!(obs.wind_speed(), Knots(12.0));
/// assert_eq!(obs.temperature(), Celsius(19.0));
/// assert_eq!(obs.dew_point(), Celsius(12.0));
/// assert_eq!(obs.pressure(), HectoPascal(299.3));
/// ```
pub fn decode_metar(report: &RawReport) -> Observation {
    let mut wind_speed: Optioned<Knots> = none();
    let mut temperature: Optioned<Celsius> = none();
    let mut dew_point: Optioned<Celsius> = none();
    let mut pressure: Optioned<HectoPascal> = none();

    for token in report.text().split_whitespace() {
        if let Some(speed) = wind_group(token) {
            wind_speed = some(speed);
        } else if let Some((t, dp)) = temperature_group(token) {
            temperature = some(t);
            dew_point = some(dp);
        } else if let Some(p) = pressure_group(token) {
            pressure = some(p);
        }
    }

    Observation::new()
        .with_station_info(report.station_info().clone())
        .with_observation_time(report.observation_time())
        .with_wind_speed(wind_speed.into_option().unwrap_or(Knots(0.0)))
        .with_temperature(temperature.into_option().unwrap_or(Celsius(0.0)))
        .with_dew_point(dew_point.into_option().unwrap_or(Celsius(0.0)))
        .with_pressure(pressure.into_option().unwrap_or(STANDARD_PRESSURE))
        .with_raw_text(report.text())
}

// Four ASCII alphanumeric characters leading with a letter, eg KSFO or EGLL.
fn is_station_ident(token: &str) -> bool {
    token.len() == 4
        && token.bytes().all(|b| b.is_ascii_alphanumeric())
        && token.as_bytes()[0].is_ascii_alphabetic()
}

// Wind groups are ddfff: three digits of direction then two of speed in knots, eg 28012KT, with
// an optional gust section, eg 27015G25KT. Only the sustained speed is kept.
fn wind_group(token: &str) -> Option<Knots> {
    let body = token.strip_suffix("KT")?;

    let digits = match body.find('G') {
        Some(idx) => {
            let (sustained, gust) = (&body[..idx], &body[idx + 1..]);
            if !(gust.len() == 2 || gust.len() == 3) || !all_digits(gust) {
                return None;
            }
            sustained
        }
        None => body,
    };

    if digits.len() != 5 || !all_digits(digits) {
        return None;
    }

    // Slicing is in bounds, everything up to here is ASCII digits.
    digits[3..5]
        .parse::<i32>()
        .ok()
        .map(|speed| Knots(f64::from(speed)))
}

// Temperature and dew point separated by a slash, either as signed integers, eg 15/09 or -2/-5,
// or with an M marking negative values, eg M05/M12. The two spellings do not mix, a token like
// 15/M01 is not decoded.
fn temperature_group(token: &str) -> Option<(Celsius, Celsius)> {
    let (t_str, dp_str) = token.split('/').collect_tuple()?;

    if let (Some(t), Some(dp)) = (signed_int(t_str), signed_int(dp_str)) {
        return Some((Celsius(f64::from(t)), Celsius(f64::from(dp))));
    }

    if let (Some(t), Some(dp)) = (minus_marked(t_str), minus_marked(dp_str)) {
        return Some((Celsius(f64::from(t)), Celsius(f64::from(dp))));
    }

    None
}

// Altimeter setting in hundredths of inches of mercury, eg A2993, or QNH in whole millibars,
// eg Q1013. The A group value is divided by ten rather than properly converted to millibars.
// Wrong physically, but every index value ever published for this product was computed this
// way, so it stays.
fn pressure_group(token: &str) -> Option<HectoPascal> {
    if let Some(digits) = token.strip_prefix('A') {
        if digits.len() == 4 && all_digits(digits) {
            return digits
                .parse::<i32>()
                .ok()
                .map(|hundredths| HectoPascal(f64::from(hundredths) / 10.0));
        }
    } else if let Some(digits) = token.strip_prefix('Q') {
        if all_digits(digits) {
            return digits.parse::<i32>().ok().map(|mb| HectoPascal(f64::from(mb)));
        }
    }

    None
}

fn signed_int(s: &str) -> Option<i32> {
    let digits = s.strip_prefix('-').unwrap_or(s);
    if !all_digits(digits) {
        return None;
    }

    s.parse::<i32>().ok()
}

fn minus_marked(s: &str) -> Option<i32> {
    let digits = s.strip_prefix('M')?;
    if !all_digits(digits) {
        return None;
    }

    digits.parse::<i32>().ok().map(|magnitude| -magnitude)
}

fn all_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}
