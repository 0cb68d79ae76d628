use tempfile::tempdir;
use washbook_config::{Config, ConfigManager};

#[test]
fn default_config_has_non_empty_fields() {
    let cfg = Config::default();

    assert!(!cfg.currency.is_empty());
    assert!(!cfg.locale.is_empty());
    assert!(!cfg.business_name.is_empty());
}

#[test]
fn config_manager_persists_and_loads_config() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::new(dir.path().join("config.json"), dir.path().join("backups"));

    let mut cfg = Config::default();
    cfg.upi_id = Some("shineautospa@upi".to_string());
    cfg.business_name = "Shine Auto Spa".to_string();

    manager.save(&cfg).expect("save config");
    let loaded = manager.load().expect("load config");

    assert_eq!(loaded.upi_id.as_deref(), Some("shineautospa@upi"));
    assert_eq!(loaded.business_name, "Shine Auto Spa");
}

#[test]
fn missing_config_file_yields_defaults() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::new(dir.path().join("config.json"), dir.path().join("backups"));
    let loaded = manager.load().expect("load defaults");
    assert_eq!(loaded.currency, "INR");
    assert!(loaded.upi_id.is_none());
}

#[test]
fn backups_can_be_listed_and_restored() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::new(dir.path().join("config.json"), dir.path().join("backups"));

    let mut cfg = Config::default();
    cfg.upi_id = Some("old@upi".to_string());
    let name = manager.backup(&cfg, Some("pre change")).expect("backup");
    assert!(name.contains("pre-change"));

    let listed = manager.list_backups().expect("list");
    assert!(listed.contains(&name));

    let restored = manager.restore(&name).expect("restore");
    assert_eq!(restored.upi_id.as_deref(), Some("old@upi"));
}

#[test]
fn backups_are_pruned_to_retention() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_retention(
        dir.path().join("config.json"),
        dir.path().join("backups"),
        3,
    );

    let cfg = Config::default();
    for note in ["one", "two", "three", "four", "five"] {
        manager.backup(&cfg, Some(note)).expect("backup");
    }

    let listed = manager.list_backups().expect("list");
    assert_eq!(listed.len(), 3);
}

#[test]
fn restoring_a_missing_backup_fails_cleanly() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::new(dir.path().join("config.json"), dir.path().join("backups"));
    let err = manager.restore("config_19700101_0000.json").expect_err("must fail");
    assert!(err.to_string().contains("not found"), "unexpected error: {err}");
}
