mod guild_config;
mod guild_settings;
mod livestream;
mod redemption_code;
