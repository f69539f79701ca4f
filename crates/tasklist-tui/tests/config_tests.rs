/*
[INPUT]:  YAML files on disk and TASKLIST_* environment variables
[OUTPUT]: Test results for configuration loading
[POS]:    Integration tests - configuration
[UPDATE]: When config fields, sources, or validation change
*/

use std::io::Write;
use std::sync::{Mutex, MutexGuard};

use tasklist_tui::AppConfig;
use tasklist_tui::config::default_config_path;

// Environment variables are process-wide; loading tests take this lock.
static ENV_LOCK: Mutex<()> = Mutex::new(());

fn env_lock() -> MutexGuard<'static, ()> {
    ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn yaml_file(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
    write!(file, "{content}").unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_load_explicit_file() {
    let _env = env_lock();
    let file = yaml_file(
        "ui:\n  tick_interval_ms: 100\n  show_logs: true\nprompts:\n  duplicate_title: Already there\n",
    );

    let config = AppConfig::load(Some(file.path())).unwrap();
    assert_eq!(config.ui.tick_interval_ms, 100);
    assert!(config.ui.show_logs);
    assert_eq!(config.prompts.duplicate_title, "Already there");
    assert_eq!(config.prompts.remove_title, "Remove item");
}

#[test]
fn test_load_rejects_invalid_file() {
    let _env = env_lock();
    let file = yaml_file("log:\n  level: \"\"\n");

    let err = AppConfig::load(Some(file.path())).unwrap_err();
    assert!(format!("{err:#}").contains("log.level"));
}

#[test]
fn test_dump_is_loadable() {
    let _env = env_lock();
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, AppConfig::default().to_yaml().unwrap()).unwrap();

    let config = AppConfig::from_file(&path).unwrap();
    assert_eq!(config, AppConfig::default());
}

#[test]
fn test_environment_overrides_file_values() {
    let _env = env_lock();
    let file = yaml_file(
        "ui:\n  show_logs: false\n  tick_interval_ms: 100\nprompts:\n  remove_title: Remove item\n",
    );
    let vars = [
        ("TASKLIST_UI__SHOW_LOGS", "true"),
        ("TASKLIST_UI__TICK_INTERVAL_MS", "300"),
        ("TASKLIST_PROMPTS__REMOVE_TITLE", "Remover"),
    ];
    // SAFETY: every test touching the environment holds ENV_LOCK.
    unsafe {
        for (key, value) in vars {
            std::env::set_var(key, value);
        }
    }

    let result = AppConfig::load(Some(file.path()));

    unsafe {
        for (key, _) in vars {
            std::env::remove_var(key);
        }
    }

    let config = result.unwrap();
    assert!(config.ui.show_logs);
    assert_eq!(config.ui.tick_interval_ms, 300);
    assert_eq!(config.prompts.remove_title, "Remover");
    assert_eq!(config.prompts.remove_message, "Are you sure you want to remove this item?");
}

#[test]
fn test_default_path_ends_with_app_dir() {
    if let Some(path) = default_config_path() {
        assert!(path.ends_with("tasklist/config.yaml"));
    }
}
