//! Livestream tracking.
//!
//! Polls the livestream feed per game, records newly found codes and advances each
//! tracking record through its states.

use chrono::Utc;

use crate::{
    data::{livestream::LivestreamRepository, redemption_code::RedemptionCodeRepository},
    error::AppError,
    model::{
        game::Game,
        livestream::{compute_state, LivestreamState, LivestreamTracking},
        message::OutgoingMessage,
    },
    service::{
        builder::NotificationBuilder,
        fanout::{settle, BatchReport},
        livestream::distribution::LivestreamDistributor,
        upstream::livestream::parse_material,
    },
    state::AppState,
};

pub struct LivestreamTracker<'a> {
    state: &'a AppState,
}

impl<'a> LivestreamTracker<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// Polls every game concurrently.
    ///
    /// # Returns
    /// - `BatchReport` - State of each game's latest record after the poll, or `None` if the
    ///   game has no record
    pub async fn poll_all(&self) -> BatchReport<Game, Option<LivestreamState>> {
        let jobs = Game::ALL
            .into_iter()
            .map(|game| (game, self.poll_game(game)))
            .collect();

        settle("Livestream poll", jobs).await
    }

    /// Advances the latest tracking record of one game.
    ///
    /// Only a Searching record hits the livestream feed. Codes found by the poll are
    /// recorded, copied into the code store and distributed right away. A Found record that
    /// was never distributed is distributed again.
    ///
    /// # Returns
    /// - `Ok(Some(state))` - State after the poll
    /// - `Ok(None)` - The game has no tracking record
    /// - `Err(AppError)` - The record could not be read or the codes could not be stored
    pub async fn poll_game(&self, game: Game) -> Result<Option<LivestreamState>, AppError> {
        let repo = LivestreamRepository::new(&self.state.db);

        let Some(tracking) = repo.latest_for_game(game).await? else {
            return Ok(None);
        };

        let state = compute_state(&tracking, Utc::now().timestamp());
        tracing::debug!("Livestream {} {} is {:?}", game, tracking.version, state);

        let should_distribute = match state {
            LivestreamState::Searching => self.search(&tracking).await?,
            LivestreamState::Found => {
                tracing::info!(
                    "Livestream {} {} was found but not distributed, retrying",
                    game,
                    tracking.version
                );
                true
            }
            _ => false,
        };

        if should_distribute {
            if let Err(e) = LivestreamDistributor::new(self.state)
                .distribute_if_ready(game)
                .await
            {
                tracing::error!("Livestream distribution for {} failed: {}", game, e);
            }
        }

        let tracking = repo.find_by_id(tracking.id).await?.unwrap_or(tracking);
        let state = compute_state(&tracking, Utc::now().timestamp());

        self.sync_tracking_message(&tracking, state).await;

        Ok(Some(state))
    }

    /// Fetches the feed and records any codes.
    ///
    /// # Returns
    /// - `Ok(true)` - At least one code was recorded; the record is now Found
    /// - `Ok(false)` - The feed failed or listed no codes yet
    async fn search(&self, tracking: &LivestreamTracking) -> Result<bool, AppError> {
        let game = tracking.game;

        let material = match self.state.upstream.fetch_livestream(game).await {
            Ok(material) => material,
            Err(e) => {
                tracing::warn!("Failed to fetch livestream feed for {}: {}", game, e);
                return Ok(false);
            }
        };

        let parse = parse_material(&material, &self.state.icons);

        LivestreamRepository::new(&self.state.db)
            .record_codes(tracking.id, &parse.codes, parse.expected_code_count)
            .await?;

        if parse.codes.is_empty() {
            return Ok(false);
        }

        tracing::info!(
            "Found {} livestream codes for {} {} (expected {:?})",
            parse.codes.len(),
            game,
            tracking.version,
            parse.expected_code_count
        );

        let codes: Vec<(String, Option<String>)> = parse
            .codes
            .iter()
            .map(|c| {
                let reward = Some(c.title.clone()).filter(|t| !t.is_empty());
                (c.code.clone(), reward)
            })
            .collect();

        if let Err(e) = RedemptionCodeRepository::new(&self.state.db)
            .upsert_active(game, &codes)
            .await
        {
            tracing::error!("Failed to copy livestream codes for {} into the code store: {}", game, e);
        }

        Ok(true)
    }

    /// Edits the companion tracking message, if the record has one.
    async fn sync_tracking_message(&self, tracking: &LivestreamTracking, state: LivestreamState) {
        let (Some(channel_id), Some(message_id)) =
            (tracking.tracking_channel_id, tracking.tracking_message_id)
        else {
            return;
        };

        let codes = match LivestreamRepository::new(&self.state.db)
            .get_codes(tracking.id)
            .await
        {
            Ok(codes) => codes,
            Err(e) => {
                tracing::warn!("Failed to load codes for tracking {}: {}", tracking.id, e);
                return;
            }
        };

        let text = self.state.translator.default_language();
        let embed = NotificationBuilder::new(&text).tracking_status(tracking, state, &codes);

        if let Err(e) = self
            .state
            .messenger
            .edit_message(channel_id, message_id, &OutgoingMessage::embed(embed))
            .await
        {
            tracing::warn!(
                "Failed to update tracking message {} in channel {}: {}",
                message_id,
                channel_id,
                e
            );
        }
    }
}
