//! Localization for outgoing messages.
//!
//! The `Translator` owns the string tables and resolves a guild's language through the
//! shared `LanguageCache`. Builders bind a translator to one guild with `for_guild` and
//! then look strings up synchronously.

pub mod language_cache;
pub mod translator;

pub use language_cache::{LanguageCache, DEFAULT_LANGUAGE};
pub use translator::{Localized, Translator};
