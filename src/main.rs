use std::sync::Arc;

use hoyo_code_sender::{
    bot::{self, handler::Handler},
    config::Config,
    error::AppError,
    scheduler, startup,
    service::messenger::SerenityMessenger,
    state::AppState,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let (languages, translator) = startup::setup_translator(&config, &db)?;
    let upstream = startup::setup_upstream_client(&config)?;
    let icons = startup::setup_icon_map(&config)?;

    let handler = Handler::new(db.clone(), languages.clone());
    let client = bot::start::init_bot(&config, handler).await?;
    let messenger = Arc::new(SerenityMessenger::new(client.http.clone()));

    let state = AppState::new(
        db,
        messenger,
        Arc::new(upstream),
        translator,
        languages,
        Arc::new(icons),
    );

    let _scheduler = scheduler::start_scheduler(state).await?;

    bot::start::start_bot(client).await
}
