use super::load::{default_config_path, default_log_path, resolve_config_path};
use super::schema::*;
use crate::i18n::Language;
use std::sync::{Mutex, OnceLock};

static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

fn env_lock() -> std::sync::MutexGuard<'static, ()> {
    ENV_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

struct EnvGuard {
    key: &'static str,
    old: Option<std::ffi::OsString>,
}

impl EnvGuard {
    fn set(key: &'static str, val: &str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::set_var(key, val);
        }
        Self { key, old }
    }

    fn remove(key: &'static str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::remove_var(key);
        }
        Self { key, old }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match self.old.take() {
            Some(v) => unsafe {
                std::env::set_var(self.key, v);
            },
            None => unsafe {
                std::env::remove_var(self.key);
            },
        }
    }
}

#[test]
fn resolve_config_path_prefers_cadence_config_path() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("CADENCE_CONFIG_PATH", "/tmp/cadence-test-config.toml");
    assert_eq!(
        resolve_config_path().unwrap(),
        std::path::PathBuf::from("/tmp/cadence-test-config.toml")
    );
}

#[test]
fn default_config_path_prefers_xdg_config_home() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("XDG_CONFIG_HOME", "/tmp/xdg-config-home");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-should-not-win");

    let p = default_config_path().unwrap();
    assert_eq!(
        p,
        std::path::PathBuf::from("/tmp/xdg-config-home")
            .join("cadence")
            .join("config.toml")
    );
}

#[test]
fn default_config_path_falls_back_to_home_dot_config() {
    let _lock = env_lock();
    let _g1 = EnvGuard::remove("XDG_CONFIG_HOME");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-dir");

    let p = default_config_path().unwrap();
    assert_eq!(
        p,
        std::path::PathBuf::from("/tmp/home-dir")
            .join(".config")
            .join("cadence")
            .join("config.toml")
    );
}

#[test]
fn default_log_path_falls_back_to_local_state() {
    let _lock = env_lock();
    let _g1 = EnvGuard::remove("XDG_STATE_HOME");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-dir");

    assert_eq!(
        default_log_path().unwrap(),
        std::path::PathBuf::from("/tmp/home-dir/.local/state/cadence/cadence.log")
    );
}

#[test]
fn defaults_match_the_player_out_of_the_box() {
    let s = Settings::default();
    assert!(s.playback.auto_play);
    assert_eq!(s.playback.volume, 70);
    assert_eq!(s.playback.volume_step, 5);
    assert_eq!(s.ui.language, Language::Ru);
    assert_eq!(
        s.library.extensions,
        vec!["mp3", "wav", "ogg", "flac", "m4a", "aac", "wma"]
    );
    assert!(s.validate().is_ok());
}

#[test]
fn validate_rejects_out_of_range_values() {
    let mut s = Settings::default();
    s.playback.volume = 101;
    assert!(s.validate().is_err());

    let mut s = Settings::default();
    s.audio.tick_ms = 0;
    assert!(s.validate().is_err());

    let mut s = Settings::default();
    s.playback.volume_step = 0;
    assert!(s.validate().is_err());

    let mut s = Settings::default();
    s.library.extensions = vec!["  ".to_string()];
    assert!(s.validate().is_err());
}

#[test]
fn settings_load_from_config_file_and_parse_language_aliases() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[playback]
auto_play = false
volume = 40
volume_step = 10
scrub_seconds = 9

[audio]
tick_ms = 100
quit_fade_out_ms = 0

[ui]
language = "ukrainian"
header_text = "hello"
marquee_step_ms = 150

[library]
extensions = ["mp3"]
recursive = false
include_hidden = true
follow_links = false
max_depth = 3

[log]
file = "/tmp/cadence.log"
level = "debug"
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("CADENCE_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::remove("CADENCE__PLAYBACK__VOLUME");

    let s = Settings::load().unwrap();
    assert!(!s.playback.auto_play);
    assert_eq!(s.playback.volume, 40);
    assert_eq!(s.playback.volume_step, 10);
    assert_eq!(s.playback.scrub_seconds, 9);
    assert_eq!(s.audio.tick_ms, 100);
    assert_eq!(s.audio.quit_fade_out_ms, 0);
    assert_eq!(s.ui.language, Language::Uk);
    assert_eq!(s.ui.header_text, "hello");
    assert_eq!(s.ui.marquee_step_ms, 150);
    assert_eq!(s.library.extensions, vec!["mp3".to_string()]);
    assert!(!s.library.recursive);
    assert!(s.library.include_hidden);
    assert!(!s.library.follow_links);
    assert_eq!(s.library.max_depth, Some(3));
    assert_eq!(
        s.log.file.as_deref(),
        Some(std::path::Path::new("/tmp/cadence.log"))
    );
    assert_eq!(s.log.level, "debug");
}

#[test]
fn settings_env_overrides_config_file() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[playback]
volume = 70
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("CADENCE_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::set("CADENCE__PLAYBACK__VOLUME", "15");

    let s = Settings::load().unwrap();
    assert_eq!(s.playback.volume, 15);
}

#[test]
fn to_toml_output_parses_back_into_the_same_settings() {
    let mut s = Settings::default();
    s.ui.language = Language::En;
    s.playback.auto_play = false;

    let text = s.to_toml().unwrap();
    let parsed: Settings = toml::from_str(&text).unwrap();
    assert_eq!(parsed.ui.language, Language::En);
    assert!(!parsed.playback.auto_play);
    assert_eq!(parsed.library.extensions, s.library.extensions);
}
