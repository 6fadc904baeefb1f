//! Configuration Tests.

use std::io::Write;

use gridvm_core::common::ConfigError;
use gridvm_core::common::constants::MAX_IO_SIZE;
use gridvm_core::config::{Config, Dialect};
use pretty_assertions::assert_eq;
use rstest::rstest;

#[test]
fn defaults() {
    let config = Config::default();
    assert_eq!(config.machine.io_size, 16);
    assert_eq!(config.machine.dialect, Dialect::Stack);
    assert_eq!(config.general.max_steps, None);
    assert!(!config.general.trace_instructions);
    assert!(config.validate().is_ok());
}

#[test]
fn empty_object_uses_defaults() {
    assert_eq!(Config::from_json("{}").unwrap(), Config::default());
}

#[test]
fn partial_sections_fill_in_defaults() {
    let config = Config::from_json(r#"{ "machine": { "dialect": "Register" } }"#).unwrap();
    assert_eq!(config.machine.io_size, 16);
    assert_eq!(config.machine.dialect, Dialect::Register);
}

#[rstest]
#[case("Stack", Dialect::Stack)]
#[case("stack", Dialect::Stack)]
#[case("STACK_OPERANDS", Dialect::Stack)]
#[case("Register", Dialect::Register)]
#[case("register", Dialect::Register)]
#[case("REGISTER_OPERANDS", Dialect::Register)]
fn dialect_names(#[case] name: &str, #[case] expected: Dialect) {
    let json = format!(r#"{{ "machine": {{ "dialect": "{name}" }} }}"#);
    assert_eq!(Config::from_json(&json).unwrap().machine.dialect, expected);
}

#[test]
fn zero_grid_size_is_rejected() {
    let err = Config::from_json(r#"{ "machine": { "io_size": 0 } }"#).unwrap_err();
    assert!(matches!(err, ConfigError::ZeroGridSize));
}

#[rstest]
#[case(65_537)]
#[case(usize::MAX)]
fn oversized_grid_is_rejected(#[case] io_size: usize) {
    let json = format!(r#"{{ "machine": {{ "io_size": {io_size} }} }}"#);
    let err = Config::from_json(&json).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::GridTooLarge { size, max: MAX_IO_SIZE } if size == io_size
    ));
}

#[test]
fn largest_grid_is_accepted() {
    let mut config = Config::default();
    config.machine.io_size = MAX_IO_SIZE;
    assert!(config.validate().is_ok());

    config.machine.io_size += 1;
    assert!(matches!(config.validate(), Err(ConfigError::GridTooLarge { .. })));
}

#[rstest]
#[case(r#"{ "machine": { "dialect": "QUEUE" } }"#)]
#[case(r#"{ "general": { "max_steps": -5 } }"#)]
#[case("not json")]
fn malformed_json_is_rejected(#[case] json: &str) {
    assert!(matches!(Config::from_json(json), Err(ConfigError::Json(_))));
}

#[test]
fn serializes_back_to_equal_config() {
    let config = Config::from_json(
        r#"{ "general": { "max_steps": 500 }, "machine": { "io_size": 5, "dialect": "REGISTER_OPERANDS" } }"#,
    )
    .unwrap();
    let json = serde_json::to_string(&config).unwrap();
    assert_eq!(Config::from_json(&json).unwrap(), config);
}

#[test]
fn load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{ "general": {{ "trace_instructions": true }} }}"#).unwrap();

    let config = Config::load(file.path()).unwrap();
    assert!(config.general.trace_instructions);

    let err = Config::load(file.path().with_extension("missing")).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}
