#![warn(missing_docs)]
//! Functions and data types for deriving airport turbulence assessments from raw METAR weather
//! reports.
//!
//! Decoding and assessment are two separate, pure steps. `decode_metar` turns the report text
//! of a `RawReport` into an `Observation` and never fails, absent or malformed groups resolve
//! to documented defaults instead. `assess_turbulence` reduces an observation to a composite
//! index between 0 and 1 and one of five severity categories. Both steps are referentially
//! transparent, the same input always produces bit for bit the same output, so results can be
//! recomputed or cached freely.
//!
//! # Examples
//!
//! ```rust
//! use metfor::{Celsius, HectoPascal, Knots};
//! use turbulence_analysis::{
//!     assess_turbulence, decode_metar, RawReport, StationInfo, TurbulenceCategory, WeightConfig,
//! };
//!
//! let station = StationInfo::new(37.6188, -122.375).with_ident("KSFO".to_owned());
//! let report = RawReport::new("KSFO 241530Z 28012KT 10SM CLR 19/12 A2993", station);
//!
//! let observation = decode_metar(&report);
//! assert_eq!(observation.wind_speed(), Knots(12.0));
//! assert_eq!(observation.temperature(), Celsius(19.0));
//! assert_eq!(observation.dew_point(), Celsius(12.0));
//! assert_eq!(observation.pressure(), HectoPascal(299.3));
//!
//! let assessment = assess_turbulence(&observation, WeightConfig::default());
//! assert_eq!(assessment.index, 1.0);
//! assert_eq!(assessment.category, TurbulenceCategory::Extreme);
//! ```

//
// API
//
pub use crate::{
    error::{AnalysisError, Result},
    humidity::{relative_humidity, saturation_vapor_pressure},
    metar::{decode_metar, RawReport},
    observation::{Observation, StationInfo, STANDARD_PRESSURE},
    turbulence::{assess_turbulence, TurbulenceAssessment, TurbulenceCategory, WeightConfig},
};

#[doc(hidden)]
pub use crate::observation::doctest;

//
// Internal use only
//

mod error;
mod humidity;
mod metar;
mod observation;
mod turbulence;
