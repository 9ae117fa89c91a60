//! Reward icon lookup for livestream codes.
//!
//! The livestream feed only describes rewards by icon URL. The icon map turns the icon's
//! file stem into an English item name, which the translator localizes later.

use std::{collections::HashMap, path::Path};

use crate::error::AppError;

const EMBEDDED_ICONS: &str = include_str!("../../../locales/livestream_icons.json");

#[derive(Debug, Clone, Default)]
pub struct IconMap {
    names: HashMap<String, String>,
}

impl IconMap {
    /// Creates a map with the built-in icon table.
    ///
    /// # Returns
    /// - `Ok(IconMap)` - Map with the built-in entries
    /// - `Err(AppError::JsonErr)` - The built-in table is malformed
    pub fn embedded() -> Result<Self, AppError> {
        Ok(Self {
            names: serde_json::from_str(EMBEDDED_ICONS)?,
        })
    }

    /// Loads a JSON object of `{ "<icon file stem>": "<item name>" }` from disk.
    ///
    /// Entries from the file are added to the map and replace entries with the same stem.
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of entries read from the file
    /// - `Err(AppError)` - The file could not be read or parsed
    pub fn extend_from_file(&mut self, path: &Path) -> Result<usize, AppError> {
        let text = std::fs::read_to_string(path)?;
        let names: HashMap<String, String> = serde_json::from_str(&text)?;
        let count = names.len();

        self.names.extend(names);

        tracing::info!(
            "Loaded {} livestream reward icons from {} ({} total)",
            count,
            path.display(),
            self.names.len()
        );

        Ok(count)
    }

    pub fn from_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self {
            names: entries
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    /// Describes a code's rewards as `"<amount> <item>"` entries joined with `", "`.
    ///
    /// Icons that are not in the map are dropped. An empty string means no reward could be
    /// identified.
    ///
    /// # Arguments
    /// - `items` - `(icon_url, amount)` pairs as listed by the feed
    pub fn describe<'a>(&self, items: impl IntoIterator<Item = (&'a str, i64)>) -> String {
        items
            .into_iter()
            .filter_map(|(url, amount)| {
                let name = self.names.get(icon_key(url))?;
                Some(format!("{} {}", amount, name))
            })
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Reduces an icon URL to its file stem, ignoring query string and extension.
fn icon_key(url: &str) -> &str {
    let path = url.split(['?', '#']).next().unwrap_or(url);
    let file = path.rsplit('/').next().unwrap_or(path);

    match file.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem,
        _ => file,
    }
}
