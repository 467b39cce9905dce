use super::*;

#[test]
fn default_config_is_valid() {
    let cfg = WizardConfig::default();
    cfg.validate().unwrap();
    assert_eq!(cfg.offer(TicketType::Vip).unwrap().price, Price::Usd(50));
    assert_eq!(cfg.upload.tick_interval(), Duration::from_millis(100));
}

#[test]
fn price_display() {
    assert_eq!(Price::Free.to_string(), "Free");
    assert_eq!(Price::Usd(150).to_string(), "$150");
}

#[test]
fn partial_json_falls_back_to_defaults() {
    let cfg: WizardConfig =
        serde_json::from_str(r#"{ "store_path": "data/tickets.json" }"#).unwrap();
    assert_eq!(cfg.store_path, PathBuf::from("data/tickets.json"));
    assert_eq!(cfg.catalog.len(), 3);
    cfg.validate().unwrap();
}

#[test]
fn validate_rejects_duplicate_or_missing_tiers() {
    let mut cfg = WizardConfig::default();
    cfg.catalog.pop();
    assert!(cfg.validate().is_err());

    let mut cfg = WizardConfig::default();
    let dup = cfg.catalog[0].clone();
    cfg.catalog.push(dup);
    assert!(cfg.validate().is_err());
}

#[test]
fn validate_rejects_bad_upload_step() {
    let mut cfg = WizardConfig::default();
    cfg.upload.step_percent = 0;
    assert!(cfg.validate().is_err());
    cfg.upload.step_percent = 101;
    assert!(cfg.validate().is_err());
}

#[test]
fn from_path_reads_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("wizard.json");
    std::fs::write(
        &path,
        r#"{ "event": { "name": "RustConf", "tagline": "t", "location": "l", "date_line": "d" },
             "upload": { "step_percent": 25, "tick_interval_ms": 0 } }"#,
    )
    .unwrap();
    let cfg = WizardConfig::from_path(&path).unwrap();
    assert_eq!(cfg.event.name, "RustConf");
    assert_eq!(cfg.upload.step_percent, 25);

    assert!(WizardConfig::from_path(&dir.path().join("missing.json")).is_err());
}
