//! String tables and lookup.
//!
//! Tables are flat JSON objects of `key -> template`. Templates use `{name}` placeholders.
//! A missing key falls back to the English table, then to the key itself.

use std::{collections::HashMap, path::Path, sync::Arc};

use crate::{error::AppError, service::i18n::language_cache::{LanguageCache, DEFAULT_LANGUAGE}};

const EMBEDDED_EN: &str = include_str!("../../../locales/en.json");

pub struct Translator {
    tables: HashMap<String, HashMap<String, String>>,
    languages: Arc<LanguageCache>,
}

impl Translator {
    /// Creates a translator with the embedded English table.
    ///
    /// # Returns
    /// - `Ok(Translator)` - Translator with English loaded
    /// - `Err(AppError::JsonErr)` - The embedded table is malformed
    pub fn new(languages: Arc<LanguageCache>) -> Result<Self, AppError> {
        let mut tables = HashMap::new();
        tables.insert(
            DEFAULT_LANGUAGE.to_string(),
            serde_json::from_str::<HashMap<String, String>>(EMBEDDED_EN)?,
        );

        Ok(Self { tables, languages })
    }

    /// Loads every `<lang>.json` file in a directory.
    ///
    /// Keys in a loaded file override the same keys already present for that language.
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of tables loaded
    /// - `Err(AppError)` - The directory or a table could not be read or parsed
    pub fn load_dir(&mut self, dir: &Path) -> Result<usize, AppError> {
        let mut loaded = 0;

        for entry in std::fs::read_dir(dir)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            let Some(lang) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };

            let table: HashMap<String, String> =
                serde_json::from_str(&std::fs::read_to_string(&path)?)?;
            self.tables.entry(lang.to_string()).or_default().extend(table);
            loaded += 1;
        }

        tracing::info!("Loaded {} locale tables from {}", loaded, dir.display());

        Ok(loaded)
    }

    /// Binds the translator to a guild's language.
    pub async fn for_guild(&self, guild_id: u64) -> Localized<'_> {
        Localized {
            translator: self,
            lang: self.languages.language_for(guild_id).await,
        }
    }

    /// Binds the translator to the default language, for messages owned by the bot itself.
    pub fn default_language(&self) -> Localized<'_> {
        Localized {
            translator: self,
            lang: DEFAULT_LANGUAGE.to_string(),
        }
    }

    /// Looks up a string in the guild's language and fills in the placeholders.
    pub async fn get_string(&self, key: &str, guild_id: u64, replacements: &[(&str, &str)]) -> String {
        self.for_guild(guild_id).await.get(key, replacements)
    }

    /// Translates upstream reward text into the guild's language.
    pub async fn get_reward_string(&self, reward_text: Option<&str>, guild_id: u64) -> String {
        self.for_guild(guild_id).await.reward(reward_text)
    }

    fn template(&self, lang: &str, key: &str) -> Option<&str> {
        self.tables
            .get(lang)
            .and_then(|t| t.get(key))
            .or_else(|| self.tables.get(DEFAULT_LANGUAGE).and_then(|t| t.get(key)))
            .map(String::as_str)
    }
}

/// Translator bound to one language.
pub struct Localized<'a> {
    translator: &'a Translator,
    lang: String,
}

impl Localized<'_> {
    pub fn lang(&self) -> &str {
        &self.lang
    }

    /// Looks up `key` and replaces each `{name}` placeholder.
    pub fn get(&self, key: &str, replacements: &[(&str, &str)]) -> String {
        let mut text = self
            .translator
            .template(&self.lang, key)
            .unwrap_or(key)
            .to_string();

        for (name, value) in replacements {
            text = text.replace(&format!("{{{}}}", name), value);
        }

        text
    }

    /// Translates reward text such as `"60 Primogem, 10000 Mora"`.
    ///
    /// Each comma-separated entry keeps its amount and has its item name looked up under
    /// `reward_item.<name>`; unknown items are kept as written. Missing or blank text yields
    /// the `reward.none` line so a code is never posted without a reward line.
    pub fn reward(&self, reward_text: Option<&str>) -> String {
        let text = reward_text.map(str::trim).unwrap_or_default();
        if text.is_empty() {
            return self.get("reward.none", &[]);
        }

        text.split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(|part| match part.split_once(' ') {
                Some((amount, name)) if amount.chars().all(|c| c.is_ascii_digit()) => {
                    format!("{} {}", amount, self.item(name.trim()))
                }
                _ => self.item(part),
            })
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn item(&self, name: &str) -> String {
        let key = format!("reward_item.{}", name);
        match self.translator.template(&self.lang, &key) {
            Some(translated) => translated.to_string(),
            None => name.to_string(),
        }
    }
}
