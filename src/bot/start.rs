use serenity::all::{Client, GatewayIntents};

use crate::{bot::handler::Handler, config::Config, error::AppError};

/// Builds the Discord client without connecting.
///
/// The client's HTTP handle can be shared before the gateway connection starts.
///
/// # Arguments
/// - `config` - Application configuration holding the bot token
/// - `handler` - Gateway event handler
///
/// # Returns
/// - `Ok(Client)` - Client ready to be started
/// - `Err(AppError)` - Client construction failed
pub async fn init_bot(config: &Config, handler: Handler) -> Result<Client, AppError> {
    let intents = GatewayIntents::GUILDS;

    let client = Client::builder(&config.discord_bot_token, intents)
        .event_handler(handler)
        .await?;

    Ok(client)
}

/// Connects to the gateway and runs until shutdown.
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
