pub use super::guild_config::Entity as GuildConfig;
pub use super::guild_language::Entity as GuildLanguage;
pub use super::guild_settings::Entity as GuildSettings;
pub use super::livestream_code::Entity as LivestreamCode;
pub use super::livestream_tracking::Entity as LivestreamTracking;
pub use super::redemption_code::Entity as RedemptionCode;
