//! Per-guild delivery configuration.

use std::collections::{HashMap, HashSet};

use crate::{
    error::AppError,
    model::game::Game,
    util::parse::{parse_optional_u64, parse_u64_from_string},
};

/// At-most-once owner alert state for a guild.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlertState {
    pub channel_missing_notified: bool,
    pub permission_missing_notified: bool,
    /// Missing permission list the permission alert was sent for.
    pub permission_missing: Option<String>,
}

impl AlertState {
    /// Whether a permission alert still needs to be sent.
    ///
    /// Once one has been sent, every later permission failure in the guild is suppressed,
    /// whatever the destination or permission set, until setup clears the flag.
    pub fn permission_alert_due(&self) -> bool {
        !self.permission_missing_notified
    }
}

/// Notification destinations configured for a guild.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuildConfig {
    pub guild_id: u64,
    pub channel_id: u64,
    pub livestream_channel_id: Option<u64>,
    pub threads: HashMap<Game, u64>,
    pub roles: HashMap<Game, u64>,
    pub alerts: AlertState,
}

impl GuildConfig {
    /// Converts an entity model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(GuildConfig)` - Converted config with snowflakes parsed
    /// - `Err(AppError::InternalErr)` - A stored snowflake is not numeric
    pub fn from_entity(entity: entity::guild_config::Model) -> Result<Self, AppError> {
        let mut threads = HashMap::new();
        let mut roles = HashMap::new();

        for (game, thread, role) in [
            (Game::Genshin, entity.genshin_thread_id, entity.genshin_role_id),
            (Game::StarRail, entity.hsr_thread_id, entity.hsr_role_id),
            (Game::Zenless, entity.zzz_thread_id, entity.zzz_role_id),
        ] {
            if let Some(id) = parse_optional_u64(thread)? {
                threads.insert(game, id);
            }
            if let Some(id) = parse_optional_u64(role)? {
                roles.insert(game, id);
            }
        }

        Ok(Self {
            guild_id: parse_u64_from_string(entity.guild_id)?,
            channel_id: parse_u64_from_string(entity.channel_id)?,
            livestream_channel_id: parse_optional_u64(entity.livestream_channel_id)?,
            threads,
            roles,
            alerts: AlertState {
                channel_missing_notified: entity.channel_missing_notified,
                permission_missing_notified: entity.permission_missing_notified,
                permission_missing: entity.permission_missing_permission,
            },
        })
    }

    pub fn thread_for(&self, game: Game) -> Option<u64> {
        self.threads.get(&game).copied()
    }

    pub fn role_for(&self, game: Game) -> Option<u64> {
        self.roles.get(&game).copied()
    }
}

/// Resolved delivery preferences for a guild.
///
/// Every optional setting is resolved to its default here, once, when the settings row
/// is loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryPreferences {
    pub auto_send: bool,
    pub to_channel: bool,
    pub to_threads: bool,
    /// Games explicitly switched off by the favorite-games filter.
    pub disabled_games: HashSet<Game>,
}

impl Default for DeliveryPreferences {
    fn default() -> Self {
        Self {
            auto_send: true,
            to_channel: true,
            to_threads: true,
            disabled_games: HashSet::new(),
        }
    }
}

impl DeliveryPreferences {
    pub fn from_entity(entity: entity::guild_settings::Model) -> Self {
        let mut disabled_games = HashSet::new();

        if entity.favorite_games_enabled {
            for (game, flag) in [
                (Game::Genshin, entity.favorite_genshin),
                (Game::StarRail, entity.favorite_hkrpg),
                (Game::Zenless, entity.favorite_nap),
            ] {
                if flag == Some(false) {
                    disabled_games.insert(game);
                }
            }
        }

        Self {
            auto_send: entity.auto_send_enabled,
            to_channel: entity.auto_send_channel.unwrap_or(true),
            to_threads: entity.auto_send_threads.unwrap_or(true),
            disabled_games,
        }
    }

    /// Whether codes for `game` should be delivered to this guild at all.
    pub fn allows(&self, game: Game) -> bool {
        self.auto_send && !self.disabled_games.contains(&game)
    }
}

/// A guild's config joined with its resolved preferences.
#[derive(Debug, Clone)]
pub struct GuildTarget {
    pub config: GuildConfig,
    pub prefs: DeliveryPreferences,
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::fixture;

    fn settings(guild_id: &str) -> entity::guild_settings::Model {
        entity::guild_settings::Model {
            guild_id: guild_id.to_string(),
            auto_send_enabled: true,
            auto_send_channel: None,
            auto_send_threads: None,
            favorite_games_enabled: false,
            favorite_genshin: None,
            favorite_hkrpg: None,
            favorite_nap: None,
        }
    }

    #[test]
    fn converts_config_with_threads_and_roles() {
        let mut entity = fixture::guild_config_entity();
        entity.hsr_thread_id = Some("555".to_string());
        entity.zzz_role_id = Some("777".to_string());
        entity.genshin_role_id = Some(String::new());

        let config = GuildConfig::from_entity(entity).unwrap();

        assert_eq!(config.guild_id, 987654321);
        assert_eq!(config.thread_for(Game::StarRail), Some(555));
        assert_eq!(config.thread_for(Game::Genshin), None);
        assert_eq!(config.role_for(Game::Zenless), Some(777));
        assert_eq!(config.role_for(Game::Genshin), None);
    }

    #[test]
    fn rejects_non_numeric_channel() {
        let mut entity = fixture::guild_config_entity();
        entity.channel_id = "general".to_string();

        assert!(GuildConfig::from_entity(entity).is_err());
    }

    #[test]
    fn unset_options_default_to_enabled() {
        let prefs = DeliveryPreferences::from_entity(settings("1"));

        assert!(prefs.to_channel);
        assert!(prefs.to_threads);
        assert!(Game::ALL.iter().all(|g| prefs.allows(*g)));
    }

    #[test]
    fn favorites_only_exclude_explicitly_disabled_games() {
        let mut entity = settings("1");
        entity.favorite_games_enabled = true;
        entity.favorite_genshin = Some(true);
        entity.favorite_hkrpg = Some(false);

        let prefs = DeliveryPreferences::from_entity(entity);

        assert!(prefs.allows(Game::Genshin));
        assert!(!prefs.allows(Game::StarRail));
        assert!(prefs.allows(Game::Zenless));
    }

    #[test]
    fn favorites_ignored_when_filter_disabled() {
        let mut entity = settings("1");
        entity.favorite_hkrpg = Some(false);

        let prefs = DeliveryPreferences::from_entity(entity);

        assert!(prefs.allows(Game::StarRail));
    }

    #[test]
    fn disabled_auto_send_blocks_every_game() {
        let mut entity = settings("1");
        entity.auto_send_enabled = false;

        let prefs = DeliveryPreferences::from_entity(entity);

        assert!(!prefs.allows(Game::Genshin));
    }

    #[test]
    fn permission_alert_due_until_notified() {
        let mut alerts = AlertState::default();
        assert!(alerts.permission_alert_due());

        alerts.permission_missing_notified = true;
        alerts.permission_missing = Some("Embed Links".to_string());
        assert!(!alerts.permission_alert_due());
    }
}
