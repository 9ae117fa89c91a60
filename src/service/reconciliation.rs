//! Code reconciliation cycle.
//!
//! Each cycle diffs the upstream code lists against the persisted code store and
//! classifies codes as new, expired or reactivated. Only new codes are announced. A game
//! whose fetch failed is left out of expiry and reactivation for that cycle, so an
//! unreachable upstream never expires codes.

use std::collections::{BTreeMap, HashMap, HashSet};

use futures_util::future::join_all;

use crate::{
    data::redemption_code::RedemptionCodeRepository,
    error::AppError,
    model::{
        code::{CodeKey, CodeRecord, UpstreamCode},
        game::Game,
        guild::GuildTarget,
        message::OutgoingMessage,
    },
    service::{
        builder::NotificationBuilder,
        fanout::{
            delivery::{Destination, GuildDeliverer, GuildDelivery},
            settle, BatchReport,
        },
        guild::GuildService,
    },
    state::AppState,
};

/// Result of diffing one snapshot of the store against the upstream lists.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Classification {
    /// Active upstream codes not yet in the store.
    pub new: Vec<CodeRecord>,
    /// Stored active codes missing from their game's successful fetch.
    pub expired: Vec<CodeKey>,
    /// Stored expired codes listed as active again.
    pub reactivated: Vec<CodeKey>,
}

impl Classification {
    pub fn is_empty(&self) -> bool {
        self.new.is_empty() && self.expired.is_empty() && self.reactivated.is_empty()
    }

    /// New codes grouped by game, in game order.
    pub fn new_by_game(&self) -> BTreeMap<Game, Vec<CodeRecord>> {
        let mut grouped: BTreeMap<Game, Vec<CodeRecord>> = BTreeMap::new();
        for record in &self.new {
            grouped.entry(record.game).or_default().push(record.clone());
        }
        grouped
    }
}

/// Classifies codes against one consistent snapshot of the store.
///
/// # Arguments
/// - `persisted` - Every stored code record at cycle start
/// - `fetched` - Upstream lists of the games whose fetch succeeded this cycle
///
/// # Returns
/// - `Classification` - Disjoint new, expired and reactivated sets
pub fn classify(persisted: &[CodeRecord], fetched: &HashMap<Game, Vec<UpstreamCode>>) -> Classification {
    let mut active: HashSet<CodeKey> = HashSet::new();
    let mut classification = Classification::default();

    let stored: HashSet<CodeKey> = persisted.iter().map(CodeRecord::key).collect();

    for game in Game::ALL {
        let Some(codes) = fetched.get(&game) else {
            continue;
        };

        for code in codes.iter().filter(|c| c.is_active()) {
            let key = CodeKey::new(game, code.code.trim());
            if key.code.is_empty() || !active.insert(key.clone()) {
                continue;
            }

            if !stored.contains(&key) {
                classification.new.push(CodeRecord {
                    game,
                    code: key.code,
                    is_expired: false,
                    reward: code.rewards.clone().filter(|r| !r.trim().is_empty()),
                });
            }
        }
    }

    for record in persisted.iter().filter(|r| fetched.contains_key(&r.game)) {
        let key = record.key();
        match (record.is_expired, active.contains(&key)) {
            (false, false) => classification.expired.push(key),
            (true, true) => classification.reactivated.push(key),
            _ => {}
        }
    }

    classification
}

/// Summary of one cycle, logged by the scheduler.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CycleSummary {
    pub new: usize,
    pub expired: usize,
    pub reactivated: usize,
    pub failed_games: Vec<Game>,
    pub guilds_notified: usize,
}

pub struct ReconciliationService<'a> {
    state: &'a AppState,
}

impl<'a> ReconciliationService<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// Runs one reconciliation cycle.
    ///
    /// Loads codes, guilds and languages in one batch, fetches every game concurrently,
    /// classifies, writes the three sets concurrently and announces the new codes.
    ///
    /// # Returns
    /// - `Ok(CycleSummary)` - The cycle completed, possibly with per-game or per-guild failures
    /// - `Err(AppError)` - The initial batch read failed; nothing was fetched or written
    pub async fn run_cycle(&self) -> Result<CycleSummary, AppError> {
        let db = &self.state.db;
        let code_repo = RedemptionCodeRepository::new(db);
        let guild_service = GuildService::new(db, &self.state.languages);

        let (persisted, targets, _) = tokio::try_join!(
            async { code_repo.get_all().await.map_err(AppError::from) },
            guild_service.load_targets(),
            async { self.state.languages.prime().await.map_err(AppError::from) },
        )?;

        let (fetched, failed_games) = self.fetch_all().await;
        let classification = classify(&persisted, &fetched);

        let mut summary = CycleSummary {
            new: classification.new.len(),
            expired: classification.expired.len(),
            reactivated: classification.reactivated.len(),
            failed_games,
            guilds_notified: 0,
        };

        if classification.is_empty() {
            return Ok(summary);
        }

        let (inserted, expired, reactivated) = tokio::join!(
            code_repo.insert_new(&classification.new),
            code_repo.mark_expired(&classification.expired),
            code_repo.mark_active(&classification.reactivated),
        );

        if let Err(e) = &expired {
            tracing::error!("Failed to mark {} codes expired: {}", summary.expired, e);
        }
        if let Err(e) = &reactivated {
            tracing::error!("Failed to reactivate {} codes: {}", summary.reactivated, e);
        }
        if let Err(e) = inserted {
            tracing::error!(
                "Failed to store {} new codes, skipping notification: {}",
                summary.new,
                e
            );
            return Ok(summary);
        }

        let new_by_game = classification.new_by_game();
        if !new_by_game.is_empty() {
            let report = self.notify(targets, &new_by_game).await;
            summary.guilds_notified = report
                .successes()
                .filter(|(_, d)| d.channel_sends + d.thread_sends > 0)
                .count();
        }

        Ok(summary)
    }

    /// Fetches every game concurrently.
    ///
    /// # Returns
    /// - `(fetched, failed)` - Lists of the games that succeeded, and the games that failed
    async fn fetch_all(&self) -> (HashMap<Game, Vec<UpstreamCode>>, Vec<Game>) {
        let results = join_all(Game::ALL.map(|game| async move {
            (game, self.state.upstream.fetch_codes(game).await)
        }))
        .await;

        let mut fetched = HashMap::new();
        let mut failed = Vec::new();

        for (game, result) in results {
            match result {
                Ok(codes) => {
                    fetched.insert(game, codes);
                }
                Err(e) => {
                    tracing::warn!("Failed to fetch codes for {}: {}", game, e);
                    failed.push(game);
                }
            }
        }

        (fetched, failed)
    }

    /// Announces new codes to every guild that accepts at least one of the games.
    async fn notify(
        &self,
        targets: Vec<GuildTarget>,
        new_by_game: &BTreeMap<Game, Vec<CodeRecord>>,
    ) -> BatchReport<u64, GuildDelivery> {
        let state = self.state;

        let jobs = targets
            .into_iter()
            .filter(|target| new_by_game.keys().any(|game| target.prefs.allows(*game)))
            .map(|target| {
                let guild_id = target.config.guild_id;
                let job = async move {
                    let text = state.translator.for_guild(guild_id).await;
                    let builder = NotificationBuilder::new(&text);
                    let messages = new_by_game
                        .iter()
                        .map(|(game, codes)| {
                            (*game, OutgoingMessage::embed(builder.new_codes(*game, codes)))
                        })
                        .collect();

                    GuildDeliverer::new(state)
                        .deliver(target, Destination::Codes, messages)
                        .await
                };
                (guild_id, job)
            })
            .collect();

        settle("New code notification", jobs).await
    }
}
