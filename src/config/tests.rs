use super::*;
use crate::patterns::{BUILTIN_PATTERNS, Pattern};
use std::fs;
use tempfile::TempDir;

fn texts(set: &IgnorePatternSet) -> Vec<&str> {
    set.iter().map(Pattern::as_str).collect()
}

#[test]
fn test_config_loads_defaults() {
    let config = TreeConfig::defaults().expect("Should load default config");

    assert_eq!(config.max_depth, 7);
    assert_eq!(config.ignore_file, ".gitignore");
    assert!(config.extra_patterns.is_empty());
    assert!(config.use_builtin_patterns);
    assert_eq!(config.builtin_patterns, None);
}

#[test]
fn test_project_file_overrides_defaults() {
    let figment = Figment::new()
        .merge(Toml::string(DEFAULT_CONFIG))
        .merge(Toml::string(
            r#"
max_depth = 2
ignore_file = ".treeignore"
extra_patterns = ["dist/"]
"#,
        ));

    let config = TreeConfig::from_figment(figment).unwrap();
    assert_eq!(config.max_depth, 2);
    assert_eq!(config.ignore_file, ".treeignore");
    assert_eq!(config.extra_patterns, vec!["dist/".to_string()]);
    assert!(config.use_builtin_patterns);
}

#[test]
fn test_invalid_value_is_an_error() {
    let figment = Figment::new()
        .merge(Toml::string(DEFAULT_CONFIG))
        .merge(Toml::string("max_depth = \"deep\""));

    let err = TreeConfig::from_figment(figment).unwrap_err();
    assert!(err.to_string().contains("Failed to parse configuration"));
}

#[test]
fn test_load_reads_project_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    fs::write(temp_dir.path().join(PROJECT_CONFIG_FILE), "max_depth = 3\n")?;

    let config = TreeConfig::load(temp_dir.path(), None)?;
    assert_eq!(config.max_depth, 3);
    Ok(())
}

#[test]
fn test_missing_custom_config_is_an_error() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let missing = temp_dir.path().join("nope.toml");

    let err = TreeConfig::load(temp_dir.path(), Some(&missing)).unwrap_err();
    assert!(err.to_string().contains("Config file not found"));
    Ok(())
}

#[test]
fn test_ignore_patterns_order() -> Result<()> {
    let temp_dir = TempDir::new()?;
    fs::write(temp_dir.path().join(".gitignore"), "# comment\n/target\nlog\n")?;

    let mut config = TreeConfig::defaults()?;
    config.extra_patterns = vec!["tmp/".to_string()];

    let set = config.ignore_patterns(temp_dir.path())?;
    let texts = texts(&set);
    assert_eq!(&texts[..3], &["target", "log", "tmp/"]);
    assert_eq!(&texts[3..], BUILTIN_PATTERNS);
    Ok(())
}

#[test]
fn test_builtins_can_be_disabled_or_replaced() -> Result<()> {
    let temp_dir = TempDir::new()?;

    let mut config = TreeConfig::defaults()?;
    config.use_builtin_patterns = false;
    assert!(config.ignore_patterns(temp_dir.path())?.is_empty());

    config.use_builtin_patterns = true;
    config.builtin_patterns = Some(vec![".git".to_string(), "target/".to_string()]);
    let set = config.ignore_patterns(temp_dir.path())?;
    assert_eq!(texts(&set), vec![".git", "target/"]);
    Ok(())
}

#[test]
fn test_builtin_patterns_key_replaces_stock_list() {
    let figment = Figment::new()
        .merge(Toml::string(DEFAULT_CONFIG))
        .merge(Toml::string("builtin_patterns = [\".git\", \"dist/\"]"));

    let config = TreeConfig::from_figment(figment).unwrap();
    assert_eq!(
        config.builtin_patterns,
        Some(vec![".git".to_string(), "dist/".to_string()])
    );
}
