//! Integration tests for configuration loading

use hrnet::prelude::*;
use std::io::Write;

#[test]
fn test_load_from_yaml_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
storage:
  key: hr_employees
  quota_bytes: 5242880
query:
  default_items_per_page: 25
  max_items_per_page: 50
  page_size_options: [10, 25, 50]
form:
  fallback: require_all
"#
    )
    .unwrap();

    let config = HrnetConfig::from_yaml_file(file.path()).unwrap();
    assert_eq!(config.storage.key, "hr_employees");
    assert_eq!(config.storage.quota_bytes, Some(5_242_880));
    assert_eq!(config.query.default_items_per_page, 25);
    assert_eq!(config.query.page_size_options, vec![10, 25, 50]);
    assert_eq!(config.form.fallback, FallbackPolicy::RequireAll);
}

#[test]
fn test_missing_file() {
    let err = HrnetConfig::from_yaml_file("/nonexistent/hrnet.yaml").unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}

#[test]
fn test_malformed_yaml() {
    let err = HrnetConfig::from_yaml_str("query: [not, a, map]").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn test_unknown_fallback_policy() {
    let err = HrnetConfig::from_yaml_str("form:\n  fallback: guess\n").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn test_store_uses_configured_slot_and_page_size() {
    let config = HrnetConfig::from_yaml_str(
        "storage:\n  key: staff\nquery:\n  default_items_per_page: 2\n  max_items_per_page: 2\n  page_size_options: [2]\n",
    )
    .unwrap();
    let store = EmployeeStore::with_config(InMemoryKeyValueStore::new(), &config);
    for name in ["A", "B", "C"] {
        store
            .append(NewEmployee {
                first_name: name.to_string(),
                ..Default::default()
            })
            .unwrap();
    }

    assert!(store.backend().get("staff").unwrap().is_some());
    let page = store.search(&QueryParams::default().with_items_per_page(0));
    assert_eq!(page.items.len(), 2);
    assert_eq!(page.total_pages(), 2);
}
