use figdata::{DigitizerConfig, MarkerStyle};

#[test]
fn yaml_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("figdata.yaml");

    let mut cfg = DigitizerConfig::default();
    cfg.title = "Brammer Fig. 7".to_string();
    cfg.precision = 4;
    cfg.markers.show_values = true;
    cfg.save_yaml(&path).unwrap();

    let loaded = DigitizerConfig::load_yaml(&path).unwrap();
    assert_eq!(loaded.title, "Brammer Fig. 7");
    assert_eq!(loaded.precision, 4);
    assert!(loaded.markers.show_values);
    assert_eq!(loaded.window_size, cfg.window_size);
}

#[test]
fn defaults_match_output_precision() {
    let cfg = DigitizerConfig::default();
    assert_eq!(cfg.precision, figdata::DEFAULT_PRECISION);
    assert_eq!(cfg.markers, MarkerStyle::default());
}

#[test]
fn missing_config_file_is_an_io_error() {
    let Err(err) = DigitizerConfig::load_yaml("/nonexistent/figdata.yaml") else {
        panic!("expected an error");
    };
    assert!(matches!(err, figdata::DigitizeError::Io(_)));
}
