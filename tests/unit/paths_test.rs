//! Unit tests for XDG directory resolution and default file locations

use std::env;
use std::path::{Path, PathBuf};

use serial_test::serial;
use tally::configs::{
    default_answers_path, expand_path, find_config_file, get_default_config_dir,
    get_default_data_dir,
};

struct EnvGuard {
    key: &'static str,
    previous: Option<String>,
}

impl EnvGuard {
    fn set(key: &'static str, value: &str) -> Self {
        let previous = env::var(key).ok();
        unsafe { env::set_var(key, value) };
        Self { key, previous }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match &self.previous {
            Some(value) => unsafe { env::set_var(self.key, value) },
            None => unsafe { env::remove_var(self.key) },
        }
    }
}

#[test]
#[serial]
fn test_config_dir_uses_absolute_xdg_value() {
    let _guard = EnvGuard::set("XDG_CONFIG_HOME", "/tmp/xdg-config");

    assert_eq!(
        get_default_config_dir().unwrap(),
        PathBuf::from("/tmp/xdg-config/tally")
    );
}

#[test]
#[serial]
fn test_config_dir_ignores_relative_xdg_value() {
    let _guard = EnvGuard::set("XDG_CONFIG_HOME", "relative/config");

    let home = dirs::home_dir().unwrap();
    assert_eq!(
        get_default_config_dir().unwrap(),
        home.join(".config").join("tally")
    );
}

#[test]
#[serial]
fn test_data_dir_ignores_empty_xdg_value() {
    let _guard = EnvGuard::set("XDG_DATA_HOME", "");

    let home = dirs::home_dir().unwrap();
    assert_eq!(
        get_default_data_dir().unwrap(),
        home.join(".local").join("share").join("tally")
    );
}

#[test]
#[serial]
fn test_default_answers_path_uses_form_stem() {
    let _guard = EnvGuard::set("XDG_DATA_HOME", "/tmp/xdg-data");

    assert_eq!(
        default_answers_path(Path::new("/forms/household.toml")).unwrap(),
        PathBuf::from("/tmp/xdg-data/tally/answers/household.json")
    );
}

#[test]
fn test_default_answers_path_needs_a_file_name() {
    assert!(default_answers_path(Path::new("/")).is_err());
}

#[test]
fn test_find_config_file_rejects_missing_cli_path() {
    let err = find_config_file(Some(PathBuf::from("/definitely/not/here/tally.toml")))
        .unwrap_err();
    assert!(err.to_string().contains("does not exist"));
}

#[test]
fn test_find_config_file_accepts_existing_cli_path() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let path = temp_dir.path().join("custom.toml");
    std::fs::write(&path, "").unwrap();

    assert_eq!(find_config_file(Some(path.clone())).unwrap(), Some(path));
}

#[test]
#[serial]
fn test_expand_path_substitutes_variables() {
    let _guard = EnvGuard::set("TALLY_TEST_FORMS", "/srv/forms");

    assert_eq!(
        expand_path(PathBuf::from("$TALLY_TEST_FORMS/survey.toml")).unwrap(),
        PathBuf::from("/srv/forms/survey.toml")
    );
}
