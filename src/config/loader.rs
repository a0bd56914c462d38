//! Settings-file overrides for [`GigaChatOptions`].

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use url::Url;

use super::GigaChatOptions;
use crate::Result;

/// Shape of the optional JSON settings document.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SettingsFile {
    authorization_key: Option<String>,
    scope: Option<String>,
    api_base_address: Option<String>,
    oauth_endpoint: Option<String>,
    default_model: Option<String>,
    response_character_limit: Option<i64>,
}

/// Builds [`GigaChatOptions`] from defaults plus an optional settings file.
pub struct OptionsLoader;

impl OptionsLoader {
    /// File looked up next to the executable when no path is given.
    pub const DEFAULT_FILE_NAME: &'static str = "gigachatsettings.json";

    /// Load options for `authorization_key`, merging overrides from
    /// `configuration_path` (or the default file location) when the file
    /// exists. A missing file is not an error; unreadable JSON is.
    pub fn load(
        authorization_key: impl Into<String>,
        configuration_path: Option<&Path>,
    ) -> Result<GigaChatOptions> {
        let base = GigaChatOptions::new(authorization_key)?;
        let path = match configuration_path {
            Some(path) => path.to_path_buf(),
            None => match Self::default_path() {
                Some(path) => path,
                None => return Ok(base),
            },
        };
        if !path.is_file() {
            return Ok(base);
        }
        debug!(path = %path.display(), "applying settings-file overrides");
        let contents = fs::read_to_string(&path)?;
        let file: SettingsFile = serde_json::from_str(&contents)?;
        Ok(merge(base, file))
    }

    fn default_path() -> Option<PathBuf> {
        let exe = std::env::current_exe().ok()?;
        Some(exe.parent()?.join(Self::DEFAULT_FILE_NAME))
    }
}

fn merge(base: GigaChatOptions, file: SettingsFile) -> GigaChatOptions {
    let authorization_key = select_text(file.authorization_key, base.authorization_key);
    let scope = select_text(file.scope, base.scope);
    let api_base_address = select_url(file.api_base_address.as_deref(), base.api_base_address);
    let oauth_endpoint = select_url(file.oauth_endpoint.as_deref(), base.oauth_endpoint);
    let default_model = select_text(file.default_model, base.default_model);
    let response_character_limit = match file.response_character_limit {
        Some(limit) if limit > 0 => limit as usize,
        _ => base.response_character_limit,
    };
    GigaChatOptions {
        authorization_key,
        scope,
        api_base_address,
        oauth_endpoint,
        default_model,
        response_character_limit,
        auth_scheme: base.auth_scheme,
    }
}

fn select_text(candidate: Option<String>, fallback: String) -> String {
    match candidate {
        Some(value) if !value.trim().is_empty() => value,
        _ => fallback,
    }
}

fn select_url(candidate: Option<&str>, fallback: Url) -> Url {
    let Some(candidate) = candidate else {
        return fallback;
    };
    if candidate.trim().is_empty() {
        return fallback;
    }
    // Malformed URLs in the file are ignored in favor of the default.
    Url::parse(candidate).unwrap_or(fallback)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> GigaChatOptions {
        GigaChatOptions::new("base-key").unwrap()
    }

    #[test]
    fn blank_values_fall_back() {
        let merged = merge(
            base(),
            SettingsFile {
                authorization_key: Some("  ".into()),
                scope: Some(String::new()),
                default_model: Some("GigaChat-Max".into()),
                ..SettingsFile::default()
            },
        );
        assert_eq!(merged.authorization_key, "base-key");
        assert_eq!(merged.scope, super::super::DEFAULT_SCOPE);
        assert_eq!(merged.default_model, "GigaChat-Max");
    }

    #[test]
    fn malformed_url_falls_back() {
        let merged = merge(
            base(),
            SettingsFile {
                api_base_address: Some("not a url".into()),
                oauth_endpoint: Some("https://oauth.example.test/token".into()),
                ..SettingsFile::default()
            },
        );
        assert_eq!(
            merged.api_base_address.as_str(),
            super::super::DEFAULT_API_BASE_ADDRESS
        );
        assert_eq!(
            merged.oauth_endpoint.as_str(),
            "https://oauth.example.test/token"
        );
    }

    #[test]
    fn non_positive_limit_ignored() {
        let merged = merge(
            base(),
            SettingsFile {
                response_character_limit: Some(0),
                ..SettingsFile::default()
            },
        );
        assert_eq!(merged.response_character_limit, 0);

        let merged = merge(
            base(),
            SettingsFile {
                response_character_limit: Some(-5),
                ..SettingsFile::default()
            },
        );
        assert_eq!(merged.response_character_limit, 0);

        let merged = merge(
            base(),
            SettingsFile {
                response_character_limit: Some(42),
                ..SettingsFile::default()
            },
        );
        assert_eq!(merged.response_character_limit, 42);
    }

    #[test]
    fn missing_file_yields_defaults() {
        let options = OptionsLoader::load(
            "key",
            Some(Path::new("/definitely/not/here/gigachatsettings.json")),
        )
        .unwrap();
        assert_eq!(options.authorization_key, "key");
        assert_eq!(options.scope, super::super::DEFAULT_SCOPE);
    }

    #[test]
    fn file_overrides_apply() {
        let dir = std::env::temp_dir();
        let path = dir.join(format!("gigachat-loader-test-{}.json", std::process::id()));
        fs::write(
            &path,
            r#"{"scope": "GIGACHAT_API_CORP", "responseCharacterLimit": 7, "oauthEndpoint": ""}"#,
        )
        .unwrap();
        let options = OptionsLoader::load("key", Some(&path)).unwrap();
        fs::remove_file(&path).ok();
        assert_eq!(options.scope, "GIGACHAT_API_CORP");
        assert_eq!(options.response_character_limit, 7);
        assert_eq!(
            options.oauth_endpoint.as_str(),
            super::super::DEFAULT_OAUTH_ENDPOINT
        );
    }
}
