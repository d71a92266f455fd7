// ==========================================
// ConfigManager 集成测试
// ==========================================
// 测试目标: 验证配置文件加载与计划规则覆写
// ==========================================


use dsrp_core::api::PaymentApi;
use dsrp_core::config::{config_keys, ConfigError, ConfigManager};
use rust_decimal::Decimal;
use std::io::Write;
use tempfile::NamedTempFile;
use test_helpers::ApprovedWorkBuilder;

/// 写入临时配置文件（需要保持存活）
fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write config");
    file
}

#[test]
fn test_load_overrides_from_file() {
    let file = write_config(
        r#"{
            "max_shared_cost": "50000",
            "interim_max_ratio": 0.5,
            "interim_report_days": 45
        }"#,
    );

    let manager = ConfigManager::load_from_file(file.path()).expect("Failed to load config");
    let rules = manager.get_program_rules().expect("Rules should be valid");

    assert_eq!(rules.max_shared_cost, Decimal::from(50_000));
    assert_eq!(rules.interim_max_ratio, Decimal::new(5, 1));
    assert_eq!(rules.interim_report_days, 45);
    // 未覆写的保持默认
    assert_eq!(rules.final_max_ratio, Decimal::new(30, 2));
    assert_eq!(rules.default_page_size, 25);
}

#[test]
fn test_missing_file_is_read_error() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let result = ConfigManager::load_from_file(dir.path().join("absent.json"));

    assert!(matches!(result, Err(ConfigError::FileReadError { .. })));
}

#[test]
fn test_malformed_file_is_format_error() {
    let file = write_config("{ not json");
    let result = ConfigManager::load_from_file(file.path());

    assert!(matches!(result, Err(ConfigError::FileFormatError { .. })));
}

#[test]
fn test_non_scalar_value_rejected() {
    let file = write_config(r#"{"max_shared_cost": [1, 2]}"#);
    let result = ConfigManager::load_from_file(file.path());

    match result {
        Err(ConfigError::ValueError { key, .. }) => assert_eq!(key, config_keys::MAX_SHARED_COST),
        other => panic!("Expected ValueError, got {:?}", other),
    }
}

#[test]
fn test_invalid_values_rejected() {
    let mut manager = ConfigManager::new();
    manager.set(config_keys::CONTRIBUTION_RATIO, "-0.5");
    assert!(manager.get_program_rules().is_err());

    let mut manager = ConfigManager::new();
    manager.set(config_keys::DEFAULT_PAGE_SIZE, "0");
    assert!(manager.get_program_rules().is_err());

    let mut manager = ConfigManager::new();
    manager.set(config_keys::INTERIM_REPORT_DAYS, "thirty");
    assert!(manager.get_program_rules().is_err());
}

#[test]
fn test_snapshot_reflects_effective_rules() {
    let mut manager = ConfigManager::new();
    manager.set(config_keys::MAX_SHARED_COST, "75000");

    let snapshot = manager.get_config_snapshot().expect("Snapshot should serialize");
    let value: serde_json::Value = serde_json::from_str(&snapshot).unwrap();

    assert_eq!(value["max_shared_cost"], "75000");
    assert_eq!(value["default_page_size"], "25");
}

#[test]
fn test_payment_api_uses_configured_rules() {
    let file = write_config(r#"{"interim_max_ratio": "0.40"}"#);
    let manager = ConfigManager::load_from_file(file.path()).unwrap();
    let api = PaymentApi::from_config(&manager).expect("Config should be valid");

    let work = ApprovedWorkBuilder::new(1, "1.1").shared_cost(10_000).build();
    let result = api
        .calculate_contribution("interim", &work, Some(Decimal::from(20_000)))
        .unwrap();

    assert_eq!(result.max_amount, Decimal::from(4_000));
    assert_eq!(result.estimated_financial_contribution, Decimal::from(4_000));
}
