use crate::{data::guild_config::GuildConfigRepository, error::AppError, model::game::Game};
use sea_orm::EntityTrait;
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod get_all;
mod mark_channel_missing_notified;
mod mark_permission_missing_notified;
