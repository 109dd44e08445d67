//! config.toml 로드/저장 테스트.
use unit_converter::config::{self, Config};
use unit_converter::Category;

#[test]
fn missing_file_is_created_with_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    let cfg = config::load_or_create(&path).expect("load");
    assert_eq!(cfg, Config::default());
    assert!(path.exists());
}

#[test]
fn read_only_load_does_not_create_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    let cfg = config::load_or_fallback(&path);
    assert_eq!(cfg, Config::default());
    assert!(!path.exists());
}

#[test]
fn read_only_load_falls_back_on_bad_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "default_category = \"weight\"\n").expect("write");
    assert_eq!(config::load_or_fallback(&path), Config::default());

    std::fs::write(&path, "default_category = \"time\"\n").expect("write");
    assert_eq!(config::load_or_fallback(&path).default_category, Category::Time);
}

#[test]
fn saved_config_round_trips() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    let mut cfg = Config::default();
    cfg.language = "ko".into();
    cfg.default_category = Category::Time;
    cfg.default_units.time.to = "hour".into();
    cfg.save_to(&path).expect("save");

    let loaded = config::load_from(&path).expect("load");
    assert_eq!(loaded, cfg);
}

#[test]
fn partial_file_fills_in_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "default_category = \"volume\"\n").expect("write");
    let cfg = config::load_from(&path).expect("load");
    assert_eq!(cfg.default_category, Category::Volume);
    assert_eq!(cfg.language, "auto");
    assert_eq!(cfg.default_units.volume.from, "liter");
}

#[test]
fn unknown_default_units_are_reset() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        "[default_units.mass]\nfrom = \"stone\"\nto = \"gram\"\n",
    )
    .expect("write");
    let cfg = config::load_from(&path).expect("load");
    assert_eq!(cfg.default_units.mass.from, "kilogram");
    assert_eq!(cfg.default_units.mass.to, "pound");
}

#[test]
fn malformed_file_is_a_parse_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "default_category = \"weight\"\n").expect("write");
    let err = config::load_from(&path).unwrap_err();
    assert!(matches!(err, config::ConfigError::Parse(_)), "{err}");
}
