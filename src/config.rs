use std::{path::PathBuf, time::Duration};

use url::Url;

use crate::error::{config::ConfigError, AppError};

const DEFAULT_CODES_API_URL: &str = "https://hoyo-codes.seria.moe/codes";
const DEFAULT_LIVESTREAM_API_URL: &str =
    "https://bbs-api-os.hoyolab.com/community/painter/wapi/circle/channel/guide/material";
const DEFAULT_EVENTS_API_URL: &str =
    "https://bbs-api-os.hoyolab.com/community/community_contribution/wapi/event/list";
const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 10;
const DEFAULT_LANGUAGE_CACHE_TTL_SECS: u64 = 300;

#[derive(Debug, Clone)]
pub struct Config {
    pub discord_bot_token: String,
    pub database_url: String,

    pub codes_api_url: String,
    pub livestream_api_url: String,
    pub events_api_url: String,
    pub upstream_timeout: Duration,

    pub language_cache_ttl: Duration,
    pub locales_dir: Option<PathBuf>,
    pub livestream_icon_map: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// Defaults are applied here once so the rest of the bot never re-derives them.
    ///
    /// # Arguments
    /// - `lookup` - Returns the value of a variable, or `None` if unset
    ///
    /// # Returns
    /// - `Ok(Config)` - Fully resolved configuration
    /// - `Err(AppError::ConfigErr)` - A required variable is missing or a value is invalid
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &str| {
            lookup(name)
                .filter(|v| !v.is_empty())
                .ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
        };

        Ok(Self {
            discord_bot_token: required("DISCORD_BOT_TOKEN")?,
            database_url: required("DATABASE_URL")?,
            codes_api_url: url_or_default(&lookup, "CODES_API_URL", DEFAULT_CODES_API_URL)?,
            livestream_api_url: url_or_default(
                &lookup,
                "LIVESTREAM_API_URL",
                DEFAULT_LIVESTREAM_API_URL,
            )?,
            events_api_url: url_or_default(&lookup, "EVENTS_API_URL", DEFAULT_EVENTS_API_URL)?,
            upstream_timeout: secs_or_default(
                &lookup,
                "UPSTREAM_TIMEOUT_SECS",
                DEFAULT_UPSTREAM_TIMEOUT_SECS,
            )?,
            language_cache_ttl: secs_or_default(
                &lookup,
                "LANGUAGE_CACHE_TTL_SECS",
                DEFAULT_LANGUAGE_CACHE_TTL_SECS,
            )?,
            locales_dir: lookup("LOCALES_DIR")
                .filter(|v| !v.is_empty())
                .map(PathBuf::from),
            livestream_icon_map: lookup("LIVESTREAM_ICON_MAP")
                .filter(|v| !v.is_empty())
                .map(PathBuf::from),
        })
    }
}

fn url_or_default<F>(lookup: &F, name: &str, default: &str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(value) = lookup(name).filter(|v| !v.is_empty()) else {
        return Ok(default.to_string());
    };

    Url::parse(&value).map_err(|e| ConfigError::InvalidValue {
        name: name.to_string(),
        value: value.clone(),
        reason: e.to_string(),
    })?;

    Ok(value)
}

fn secs_or_default<F>(lookup: &F, name: &str, default: u64) -> Result<Duration, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(value) = lookup(name).filter(|v| !v.is_empty()) else {
        return Ok(Duration::from_secs(default));
    };

    let secs = value
        .parse::<u64>()
        .map_err(|e| ConfigError::InvalidValue {
            name: name.to_string(),
            value: value.clone(),
            reason: e.to_string(),
        })?;

    Ok(Duration::from_secs(secs))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    /// Expected: defaults applied for every optional variable
    #[test]
    fn applies_defaults() {
        let config = Config::from_lookup(lookup_from(&[
            ("DISCORD_BOT_TOKEN", "token"),
            ("DATABASE_URL", "sqlite::memory:"),
        ]))
        .unwrap();

        assert_eq!(config.codes_api_url, DEFAULT_CODES_API_URL);
        assert_eq!(config.upstream_timeout, Duration::from_secs(10));
        assert_eq!(config.language_cache_ttl, Duration::from_secs(300));
        assert!(config.locales_dir.is_none());
    }

    /// Expected: Err(MissingEnvVar) naming the token variable
    #[test]
    fn missing_token_is_reported() {
        let result = Config::from_lookup(lookup_from(&[("DATABASE_URL", "sqlite::memory:")]));

        match result {
            Err(AppError::ConfigErr(ConfigError::MissingEnvVar(name))) => {
                assert_eq!(name, "DISCORD_BOT_TOKEN")
            }
            other => panic!("unexpected result: {:?}", other.map(|_| ())),
        }
    }

    /// Expected: Err(InvalidValue) for a malformed URL and a non-numeric timeout
    #[test]
    fn rejects_invalid_values() {
        let bad_url = Config::from_lookup(lookup_from(&[
            ("DISCORD_BOT_TOKEN", "token"),
            ("DATABASE_URL", "sqlite::memory:"),
            ("CODES_API_URL", "not a url"),
        ]));
        assert!(matches!(
            bad_url,
            Err(AppError::ConfigErr(ConfigError::InvalidValue { .. }))
        ));

        let bad_timeout = Config::from_lookup(lookup_from(&[
            ("DISCORD_BOT_TOKEN", "token"),
            ("DATABASE_URL", "sqlite::memory:"),
            ("UPSTREAM_TIMEOUT_SECS", "ten"),
        ]));
        assert!(matches!(
            bad_timeout,
            Err(AppError::ConfigErr(ConfigError::InvalidValue { .. }))
        ));
    }
}
