use crate::{data::guild_settings::GuildSettingsRepository, error::AppError, model::game::Game};
use test_utils::{builder::TestBuilder, factory};

mod get_all;
