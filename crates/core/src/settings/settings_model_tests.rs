use super::ProjectionSettings;
use crate::errors::Error;

#[test]
fn test_defaults_are_valid() {
    let settings = ProjectionSettings::default();
    assert_eq!(settings.history_months, 3);
    assert_eq!(settings.recent_window_points, 7);
    assert_eq!(settings.overview_months, 12);
    assert_eq!(settings.timezone, "America/Sao_Paulo");
    assert!(settings.validate().is_ok());
}

#[test]
fn test_from_json_fills_missing_keys() {
    let settings = ProjectionSettings::from_json(r#"{"historyMonths": 6}"#).unwrap();
    assert_eq!(settings.history_months, 6);
    assert_eq!(settings.recent_window_points, 7);
    assert_eq!(settings.timezone, "America/Sao_Paulo");
}

#[test]
fn test_from_json_rejects_bad_values() {
    let err = ProjectionSettings::from_json(r#"{"recentWindowPoints": 1}"#).unwrap_err();
    assert!(matches!(err, Error::InvalidConfigValue(_)));

    let err = ProjectionSettings::from_json(r#"{"timezone": "Nowhere/Land"}"#).unwrap_err();
    assert!(matches!(err, Error::InvalidConfigValue(_)));

    let err = ProjectionSettings::from_json(r#"{"overviewMonths": 0}"#).unwrap_err();
    assert!(matches!(err, Error::InvalidConfigValue(_)));

    let err = ProjectionSettings::from_json(r#"{"historyMonths": 99}"#).unwrap_err();
    assert!(matches!(err, Error::InvalidConfigValue(_)));
}

#[test]
fn test_from_json_rejects_malformed_json() {
    let err = ProjectionSettings::from_json("{not json").unwrap_err();
    assert!(matches!(err, Error::Validation(_)));
}

#[test]
fn test_history_months_zero_is_allowed() {
    let settings = ProjectionSettings {
        history_months: 0,
        ..ProjectionSettings::default()
    };
    assert!(settings.validate().is_ok());
}
