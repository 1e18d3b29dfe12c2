use crate::load_config_from;
use std::fs;
use std::path::PathBuf;

fn scratch_dir() -> PathBuf {
    let dir = std::env::temp_dir().join(format!("noor-config-{}", uuid::Uuid::new_v4()));
    fs::create_dir_all(&dir).expect("Failed to create scratch config dir");
    dir
}

#[test]
fn test_missing_files_fall_back_to_defaults() {
    let dir = scratch_dir();

    let config = load_config_from(&dir, "debug", "NOOR_UNUSED_PREFIX_A").unwrap();

    assert_eq!(config.app.locale, "en");
    assert_eq!(config.prayer.method, "muslim_world_league");
    assert_eq!(config.prayer.cache_capacity, 32);
    assert!(!config.storage.persist_bookmarks);
    assert_eq!(config.location.timezone, "Asia/Riyadh");
}

#[test]
fn test_run_env_file_overrides_default_file() {
    let dir = scratch_dir();
    fs::write(
        dir.join("default.toml"),
        r#"
[location]
latitude = 51.5072
longitude = -0.1276
timezone = "Europe/London"

[prayer]
method = "muslim_world_league"

[prayer.adjustments]
dhuhr = 2
"#,
    )
    .unwrap();
    fs::write(
        dir.join("release.toml"),
        r#"
[prayer]
method = "umm_al_qura"
madhab = "hanafi"
"#,
    )
    .unwrap();

    let config = load_config_from(&dir, "release", "NOOR_UNUSED_PREFIX_B").unwrap();

    assert_eq!(config.location.timezone, "Europe/London");
    assert!((config.location.latitude - 51.5072).abs() < 1e-9);
    assert_eq!(config.prayer.method, "umm_al_qura");
    assert_eq!(config.prayer.madhab, "hanafi");
    assert_eq!(config.prayer.adjustments.get("dhuhr"), Some(&2));
}

#[test]
fn test_environment_overrides_files() {
    let dir = scratch_dir();
    fs::write(
        dir.join("default.toml"),
        r#"
[storage]
dir = "/tmp/from-file"
"#,
    )
    .unwrap();

    std::env::set_var("NOORENVTEST_STORAGE__DIR", "/tmp/from-env");
    std::env::set_var("NOORENVTEST_STORAGE__PERSIST_BOOKMARKS", "true");
    let config = load_config_from(&dir, "debug", "NOORENVTEST").unwrap();
    std::env::remove_var("NOORENVTEST_STORAGE__DIR");
    std::env::remove_var("NOORENVTEST_STORAGE__PERSIST_BOOKMARKS");

    assert_eq!(config.storage.dir, "/tmp/from-env");
    assert!(config.storage.persist_bookmarks);
}
