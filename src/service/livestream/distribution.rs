//! Livestream code distribution.
//!
//! Fans a Found livestream record out to every guild's livestream destination once.

use chrono::Utc;

use crate::{
    data::livestream::LivestreamRepository,
    error::AppError,
    model::{
        game::Game,
        livestream::{compute_state, LivestreamCode, LivestreamState, LivestreamTracking},
        message::OutgoingMessage,
    },
    service::{
        builder::NotificationBuilder,
        fanout::{
            delivery::{Destination, GuildDeliverer},
            settle,
        },
        guild::GuildService,
    },
    state::AppState,
};

/// What a distribution attempt did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DistributionOutcome {
    /// The latest record is not in the Found state.
    NotReady,
    /// Another caller already claimed the record.
    AlreadyClaimed,
    /// This caller claimed the record and fanned out.
    Distributed { guilds: usize },
}

pub struct LivestreamDistributor<'a> {
    state: &'a AppState,
}

impl<'a> LivestreamDistributor<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// Distributes the latest record of a game if it is ready.
    ///
    /// The record is claimed with a compare-and-swap on `distributed` before any message is
    /// sent, so concurrent callers for the same record fan out at most once. Guild targets
    /// are loaded before the claim so a failed read never consumes it. The language table is
    /// reloaded alongside them so per-guild jobs read it from memory.
    ///
    /// # Arguments
    /// - `game` - Game whose latest tracking record should be distributed
    ///
    /// # Returns
    /// - `Ok(DistributionOutcome)` - Whether this call distributed
    /// - `Err(AppError)` - The record, its codes or the guild targets could not be read
    pub async fn distribute_if_ready(&self, game: Game) -> Result<DistributionOutcome, AppError> {
        let db = &self.state.db;
        let repo = LivestreamRepository::new(db);

        let Some(tracking) = repo.latest_for_game(game).await? else {
            return Ok(DistributionOutcome::NotReady);
        };
        if compute_state(&tracking, Utc::now().timestamp()) != LivestreamState::Found {
            return Ok(DistributionOutcome::NotReady);
        }

        let guild_service = GuildService::new(db, &self.state.languages);
        let (codes, targets, _) = tokio::try_join!(
            async { repo.get_codes(tracking.id).await.map_err(AppError::from) },
            guild_service.load_targets(),
            async { self.state.languages.prime().await.map_err(AppError::from) },
        )?;

        if codes.is_empty() {
            tracing::warn!(
                "Livestream {} {} is marked found without codes",
                game,
                tracking.version
            );
            return Ok(DistributionOutcome::NotReady);
        }

        if !repo.claim_distribution(tracking.id).await? {
            tracing::debug!("Livestream {} {} already claimed", game, tracking.version);
            return Ok(DistributionOutcome::AlreadyClaimed);
        }

        let banner = self.banner_for(&tracking).await;

        let state = self.state;
        let tracking = &tracking;
        let codes: &[LivestreamCode] = &codes;
        let banner = banner.as_deref();

        let jobs = targets
            .into_iter()
            .filter(|target| target.prefs.allows(game))
            .map(|target| {
                let guild_id = target.config.guild_id;
                let job = async move {
                    let text = state.translator.for_guild(guild_id).await;
                    let embed = NotificationBuilder::new(&text).livestream_codes(tracking, codes, banner);

                    GuildDeliverer::new(state)
                        .deliver(
                            target,
                            Destination::Livestream,
                            vec![(game, OutgoingMessage::embed(embed))],
                        )
                        .await
                };
                (guild_id, job)
            })
            .collect();

        let report = settle("Livestream distribution", jobs).await;
        let guilds = report
            .successes()
            .filter(|(_, d)| d.channel_sends + d.thread_sends > 0)
            .count();

        tracing::info!(
            "Distributed {} livestream codes for {} {} to {} guilds ({} failed)",
            codes.len(),
            game,
            tracking.version,
            guilds,
            report.failed()
        );

        Ok(DistributionOutcome::Distributed { guilds })
    }

    /// Returns the stored banner, or looks one up in the events feed and stores it.
    ///
    /// Any failure yields `None`; the embed is sent without an image.
    async fn banner_for(&self, tracking: &LivestreamTracking) -> Option<String> {
        if let Some(url) = &tracking.banner_url {
            return Some(url.clone());
        }

        match self
            .state
            .upstream
            .fetch_event_banner(tracking.game, &tracking.version)
            .await
        {
            Ok(Some(url)) => {
                if let Err(e) = LivestreamRepository::new(&self.state.db)
                    .set_banner_url(tracking.id, &url)
                    .await
                {
                    tracing::warn!("Failed to store banner for tracking {}: {}", tracking.id, e);
                }
                Some(url)
            }
            Ok(None) => None,
            Err(e) => {
                tracing::warn!(
                    "Failed to look up banner for {} {}: {}",
                    tracking.game,
                    tracking.version,
                    e
                );
                None
            }
        }
    }
}
