use syringe_dose_calculator::config::{self, Config, ConfigError};
use syringe_dose_calculator::syringe::SyringeProfile;

#[test]
fn missing_file_creates_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    let cfg = config::load_from(&path).expect("load");
    assert_eq!(cfg, Config::default());
    assert!(path.exists());
}

#[test]
fn saved_settings_load_back() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    let cfg = Config {
        language: "ko".into(),
        default_syringe: SyringeProfile::U30,
        decimal_places: 3,
        ..Config::default()
    };
    config::save_to(&cfg, &path).expect("save");
    let loaded = config::load_from(&path).expect("load");
    assert_eq!(loaded, cfg);
}

#[test]
fn partial_file_fills_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "default_syringe = \"U50\"\n").expect("write");
    let loaded = config::load_from(&path).expect("load");
    assert_eq!(loaded.default_syringe, SyringeProfile::U50);
    assert_eq!(loaded.decimal_places, 2);
    assert_eq!(loaded.scale, Config::default().scale);
}

#[test]
fn broken_file_is_a_parse_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "decimal_places = \"two\"\n").expect("write");
    let err = config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn unusable_scale_geometry_falls_back_to_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        "decimal_places = 3\n[scale]\npadding = 0.0\ntrack_width = -10.0\n",
    )
    .expect("write");
    let loaded = config::load_from(&path).expect("load");
    assert_eq!(loaded.decimal_places, 3);
    assert_eq!(loaded.scale, Config::default().scale);
    assert!(loaded.scale.total_width() > 0.0);
}

#[test]
fn custom_scale_geometry_is_kept() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[scale]\ntrack_width = 300.0\n").expect("write");
    let loaded = config::load_from(&path).expect("load");
    assert_eq!(loaded.scale.track_width, 300.0);
    assert_eq!(loaded.scale.padding, Config::default().scale.padding);
}
