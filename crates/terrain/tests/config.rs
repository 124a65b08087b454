use terrain::CraterConfig;

#[test]
fn default_config_is_valid() {
    assert_eq!(CraterConfig::default().validate(), Ok(()));
}

#[test]
fn rejects_degenerate_grids() {
    let config = CraterConfig {
        segments: 0,
        ..CraterConfig::default()
    };
    assert!(config.validate().is_err());

    let config = CraterConfig {
        extent: -10.0,
        ..CraterConfig::default()
    };
    let err = config.validate().expect_err("negative extent");
    assert!(err.contains("extent"), "{err}");
}

#[test]
fn rejects_opacity_out_of_range() {
    let config = CraterConfig {
        water_opacity: 1.5,
        ..CraterConfig::default()
    };
    assert!(config.validate().is_err());
}
