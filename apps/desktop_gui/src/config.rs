//! Startup configuration for the desktop shell.
//!
//! `api_base` is fixed for the life of the process: defaults, then a
//! `notes.toml` next to the working directory, then environment variables,
//! then the command line, last writer wins.

use std::{collections::HashMap, fs};

use anyhow::{bail, Context};
use url::Url;

const DEFAULT_API_BASE: &str = "http://127.0.0.1:5000/api";
const SETTINGS_FILE: &str = "notes.toml";

#[derive(Debug, Clone)]
pub struct Settings {
    pub api_base: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
        }
    }
}

pub fn load_settings(cli_api_base: Option<String>) -> anyhow::Result<Settings> {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string(SETTINGS_FILE) {
        apply_file_settings(&mut settings, &raw);
    }

    if let Ok(v) = std::env::var("NOTES_API_BASE") {
        settings.api_base = v;
    }
    if let Ok(v) = std::env::var("APP__API_BASE") {
        settings.api_base = v;
    }

    if let Some(v) = cli_api_base {
        settings.api_base = v;
    }

    settings.api_base = normalize_api_base(&settings.api_base)?;
    Ok(settings)
}

fn apply_file_settings(settings: &mut Settings, raw: &str) {
    if let Ok(file_cfg) = toml::from_str::<HashMap<String, String>>(raw) {
        if let Some(v) = file_cfg.get("api_base") {
            settings.api_base = v.clone();
        }
    }
}

fn normalize_api_base(raw: &str) -> anyhow::Result<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        bail!("api base must not be empty");
    }
    Url::parse(trimmed).with_context(|| format!("invalid api base url '{trimmed}'"))?;
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_api_base_points_at_local_service() {
        let settings = Settings::default();
        assert_eq!(settings.api_base, "http://127.0.0.1:5000/api");
    }

    #[test]
    fn file_setting_overrides_default() {
        let mut settings = Settings::default();
        apply_file_settings(&mut settings, "api_base = \"https://notes.example.com/api\"\n");
        assert_eq!(settings.api_base, "https://notes.example.com/api");
    }

    #[test]
    fn unrelated_file_keys_are_ignored() {
        let mut settings = Settings::default();
        apply_file_settings(&mut settings, "theme = \"dark\"\n");
        assert_eq!(settings.api_base, "http://127.0.0.1:5000/api");
    }

    #[test]
    fn normalize_strips_whitespace_and_trailing_slashes() {
        assert_eq!(
            normalize_api_base(" http://127.0.0.1:5000/api/ ").expect("valid"),
            "http://127.0.0.1:5000/api"
        );
    }

    #[test]
    fn normalize_rejects_non_urls() {
        assert!(normalize_api_base("not a url").is_err());
        assert!(normalize_api_base("   ").is_err());
    }

    #[test]
    fn cli_flag_takes_precedence_and_is_normalized() {
        let settings =
            load_settings(Some("http://flag.example/api/".to_string())).expect("valid");
        assert_eq!(settings.api_base, "http://flag.example/api");
    }
}
