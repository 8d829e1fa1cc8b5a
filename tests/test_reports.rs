//! End to end checks, from raw METAR report text through decoding to the final assessment.

use metfor::{Celsius, HectoPascal, Knots};
use turbulence_analysis::{
    assess_turbulence, decode_metar, AnalysisError, Observation, RawReport, StationInfo,
    TurbulenceCategory, WeightConfig,
};

fn approx_equal(tgt: f64, guess: f64, tol: f64) -> bool {
    assert!(tol > 0.0);

    (tgt - guess).abs() < tol
}

fn report_for(ident: &str, latitude: f64, longitude: f64, text: &str) -> RawReport {
    let station = StationInfo::new(latitude, longitude).with_ident(ident.to_owned());
    RawReport::new(text, station)
}

#[test]
fn altimeter_group_report() {
    let report = report_for(
        "KSFO",
        37.6188,
        -122.375,
        "KSFO 241530Z 28012KT 10SM CLR 19/12 A2993",
    );
    let obs = decode_metar(&report);

    assert_eq!(obs.wind_speed(), Knots(12.0));
    assert_eq!(obs.temperature(), Celsius(19.0));
    assert_eq!(obs.dew_point(), Celsius(12.0));
    assert_eq!(obs.pressure(), HectoPascal(299.3));
    assert_eq!(obs.station_info().ident(), Some("KSFO"));

    // The divided by ten altimeter value sits hundreds of millibars from the 980 reference, so
    // the pressure term alone saturates the index.
    let assessment = assess_turbulence(&obs, WeightConfig::default());
    assert_eq!(assessment.relative_humidity, 63.9);
    assert_eq!(assessment.index, 1.0);
    assert_eq!(assessment.category, TurbulenceCategory::Extreme);
}

#[test]
fn altimeter_group_report_warm_and_dry() {
    let report = report_for(
        "KDFW",
        32.8968,
        -97.038,
        "KDFW 241553Z 18008KT 15SM CLR 28/15 A3008",
    );
    let obs = decode_metar(&report);

    assert_eq!(obs.wind_speed(), Knots(8.0));
    assert_eq!(obs.temperature(), Celsius(28.0));
    assert_eq!(obs.dew_point(), Celsius(15.0));
    assert_eq!(obs.pressure(), HectoPascal(300.8));

    let assessment = assess_turbulence(&obs, WeightConfig::default());
    assert_eq!(assessment.relative_humidity, 45.2);
    assert_eq!(assessment.index, 1.0);
    assert_eq!(assessment.category, TurbulenceCategory::Extreme);
}

#[test]
fn qnh_group_report_high_category() {
    let report = report_for(
        "EGLL",
        51.4775,
        -0.4614,
        "EGLL 241750Z 25010KT 9999 SCT030 17/09 Q1021",
    );
    let obs = decode_metar(&report);

    assert_eq!(obs.wind_speed(), Knots(10.0));
    assert_eq!(obs.temperature(), Celsius(17.0));
    assert_eq!(obs.dew_point(), Celsius(9.0));
    assert_eq!(obs.pressure(), HectoPascal(1021.0));

    let assessment = assess_turbulence(&obs, WeightConfig::default());
    assert_eq!(assessment.relative_humidity, 59.3);
    assert!(approx_equal(assessment.index, 0.4308, 1.0e-9));
    assert_eq!(assessment.category, TurbulenceCategory::High);
}

#[test]
fn below_zero_report_moderate_category() {
    let report = report_for(
        "UUEE",
        55.9728,
        37.4147,
        "UUEE 241500Z 33015KT 9999 OVC015 M05/M10 Q1002",
    );
    let obs = decode_metar(&report);

    assert_eq!(obs.wind_speed(), Knots(15.0));
    assert_eq!(obs.temperature(), Celsius(-5.0));
    assert_eq!(obs.dew_point(), Celsius(-10.0));
    assert_eq!(obs.pressure(), HectoPascal(1002.0));

    let assessment = assess_turbulence(&obs, WeightConfig::default());
    assert_eq!(assessment.relative_humidity, 67.9);
    assert!(approx_equal(assessment.index, 0.3134, 1.0e-9));
    assert_eq!(assessment.category, TurbulenceCategory::Moderate);
}

#[test]
fn calm_report_low_category() {
    let report = report_for(
        "LFPG",
        49.0097,
        2.5479,
        "LFPG 241600Z 00000KT 9999 BKN040 02/01 Q0990",
    );
    let obs = decode_metar(&report);

    assert_eq!(obs.wind_speed(), Knots(0.0));
    assert_eq!(obs.temperature(), Celsius(2.0));
    assert_eq!(obs.dew_point(), Celsius(1.0));
    assert_eq!(obs.pressure(), HectoPascal(990.0));

    let assessment = assess_turbulence(&obs, WeightConfig::default());
    assert_eq!(assessment.relative_humidity, 93.1);
    assert!(approx_equal(assessment.index, 0.1481, 1.0e-9));
    assert_eq!(assessment.category, TurbulenceCategory::Low);
}

#[test]
fn stormy_report_severe_category() {
    let report = report_for(
        "URMM",
        44.2251,
        43.0819,
        "URMM 241200Z 09045KT 2000 SN M30/M35 Q0965",
    );
    let obs = decode_metar(&report);

    assert_eq!(obs.wind_speed(), Knots(45.0));
    assert_eq!(obs.temperature(), Celsius(-30.0));
    assert_eq!(obs.dew_point(), Celsius(-35.0));
    assert_eq!(obs.pressure(), HectoPascal(965.0));

    let assessment = assess_turbulence(&obs, WeightConfig::default());
    assert_eq!(assessment.relative_humidity, 61.4);
    assert!(approx_equal(assessment.index, 0.7064, 1.0e-9));
    assert_eq!(assessment.category, TurbulenceCategory::Severe);
}

#[test]
fn empty_report_gets_all_defaults() {
    let report = report_for("KSFO", 37.6188, -122.375, "");
    let obs = decode_metar(&report);

    assert_eq!(
        obs,
        Observation::new().with_station_info(report.station_info().clone())
    );

    // Defaulted fields still assess cleanly. Saturated humidity at 0/0 plus the standard
    // pressure departure from 980 lands in the Moderate band.
    let assessment = assess_turbulence(&obs, WeightConfig::default());
    assert_eq!(assessment.relative_humidity, 100.0);
    assert!(approx_equal(assessment.index, 0.233, 1.0e-9));
    assert_eq!(assessment.category, TurbulenceCategory::Moderate);
}

#[test]
fn mixed_sign_temperature_group_is_ignored() {
    let report = report_for(
        "LFPG",
        49.0097,
        2.5479,
        "LFPG 241600Z 00000KT 9999 02/M03 Q0990",
    );
    let obs = decode_metar(&report);

    assert_eq!(obs.temperature(), Celsius(0.0));
    assert_eq!(obs.dew_point(), Celsius(0.0));
    assert_eq!(obs.pressure(), HectoPascal(990.0));

    let assessment = assess_turbulence(&obs, WeightConfig::default());
    assert_eq!(assessment.relative_humidity, 100.0);
    assert!(approx_equal(assessment.index, 0.14, 1.0e-9));
    assert_eq!(assessment.category, TurbulenceCategory::Low);
}

#[test]
fn station_record_check() {
    let report = report_for(
        "EGLL",
        51.4775,
        -0.4614,
        "METAR EGLL 241750Z 25010KT 9999 SCT030 17/09 Q1021",
    );
    assert_eq!(report.station_record().unwrap(), "EGLL");

    let report = report_for("EGLL", 51.4775, -0.4614, "");
    assert_eq!(
        report.station_record(),
        Err(AnalysisError::MissingStationRecord)
    );

    let report = report_for("EGLL", 51.4775, -0.4614, "241750Z 25010KT");
    assert_eq!(
        report.station_record(),
        Err(AnalysisError::MissingStationRecord)
    );
}

#[test]
fn custom_weights_end_to_end() {
    let weights = WeightConfig::checked(0.25, 0.25, 0.25, 0.25).unwrap();

    let report = report_for(
        "EGLL",
        51.4775,
        -0.4614,
        "EGLL 241750Z 25010KT 9999 SCT030 17/09 Q1021",
    );
    let obs = decode_metar(&report);
    let assessment = assess_turbulence(&obs, weights);

    assert!(approx_equal(assessment.index, 0.5095, 1.0e-9));
    assert_eq!(assessment.category, TurbulenceCategory::High);
}

#[test]
fn repeated_runs_are_bit_identical() {
    let report = report_for(
        "UUEE",
        55.9728,
        37.4147,
        "UUEE 241500Z 33015KT 9999 OVC015 M05/M10 Q1002",
    );

    let first = assess_turbulence(&decode_metar(&report), WeightConfig::default());
    let second = assess_turbulence(&decode_metar(&report), WeightConfig::default());

    assert_eq!(first, second);
    assert_eq!(first.index.to_bits(), second.index.to_bits());
}
