//! Embed builders for every message the bot sends.
//!
//! Builders are bound to one guild's language through `Localized` and never contain text
//! of their own; every visible string comes from the string tables.

use crate::{
    model::{
        code::CodeRecord,
        game::Game,
        livestream::{LivestreamCode, LivestreamState, LivestreamTracking},
        message::NotificationEmbed,
    },
    service::i18n::Localized,
};

/// Color of owner alert embeds.
const ALERT_COLOR: u32 = 0xE74C3C;

pub struct NotificationBuilder<'a> {
    text: &'a Localized<'a>,
}

impl<'a> NotificationBuilder<'a> {
    pub fn new(text: &'a Localized<'a>) -> Self {
        Self { text }
    }

    fn game_name(&self, game: Game) -> String {
        self.text.get(game.name_key(), &[])
    }

    /// Builds the composite announcement for one game's new codes.
    ///
    /// One block per code with the code, its translated reward and a redeem link. Codes
    /// without reward text still get the "no reward" line.
    pub fn new_codes(&self, game: Game, codes: &[CodeRecord]) -> NotificationEmbed {
        let description = codes
            .iter()
            .map(|record| {
                self.text.get(
                    "codes.entry",
                    &[
                        ("code", record.code.as_str()),
                        ("reward", self.text.reward(record.reward.as_deref()).as_str()),
                        ("url", game.redeem_url(&record.code).as_str()),
                    ],
                )
            })
            .collect::<Vec<_>>()
            .join("\n\n");

        NotificationEmbed {
            title: self.text.get("codes.title", &[("game", self.game_name(game).as_str())]),
            description,
            color: game.color(),
            url: None,
            image_url: None,
            footer: Some(self.text.get("codes.footer", &[])),
        }
    }

    /// Builds the announcement for codes discovered during a special program.
    pub fn livestream_codes(
        &self,
        tracking: &LivestreamTracking,
        codes: &[LivestreamCode],
        banner_url: Option<&str>,
    ) -> NotificationEmbed {
        let mut blocks = vec![self.text.get("livestream.description", &[])];

        for code in codes {
            let reward = if code.title.trim().is_empty() {
                self.text.get("livestream.unknown_reward", &[])
            } else {
                self.text.reward(Some(&code.title))
            };

            let mut block = self.text.get(
                "codes.entry",
                &[
                    ("code", code.code.as_str()),
                    ("reward", reward.as_str()),
                    ("url", tracking.game.redeem_url(&code.code).as_str()),
                ],
            );
            if let Some(expire_at) = code.expire_at {
                block.push('\n');
                block.push_str(
                    &self
                        .text
                        .get("livestream.expires", &[("timestamp", expire_at.to_string().as_str())]),
                );
            }
            blocks.push(block);
        }

        NotificationEmbed {
            title: self.text.get(
                "livestream.title",
                &[
                    ("game", self.game_name(tracking.game).as_str()),
                    ("version", tracking.version.as_str()),
                ],
            ),
            description: blocks.join("\n\n"),
            color: tracking.game.color(),
            url: None,
            image_url: banner_url.map(str::to_string),
            footer: Some(self.text.get("codes.footer", &[])),
        }
    }

    /// Builds the companion tracking message showing a record's current state.
    pub fn tracking_status(
        &self,
        tracking: &LivestreamTracking,
        state: LivestreamState,
        codes: &[LivestreamCode],
    ) -> NotificationEmbed {
        let state_label = self.text.get(state.label_key(), &[]);
        let mut lines = vec![self
            .text
            .get("livestream.tracking.status", &[("state", state_label.as_str())])];

        lines.push(match tracking.stream_time {
            Some(time) => self
                .text
                .get("livestream.tracking.stream_time", &[("timestamp", time.to_string().as_str())]),
            None => self.text.get("livestream.tracking.no_stream_time", &[]),
        });

        let found = codes.len().to_string();
        lines.push(match tracking.expected_code_count {
            Some(expected) => self.text.get(
                "livestream.tracking.codes",
                &[("found", found.as_str()), ("expected", expected.to_string().as_str())],
            ),
            None => self
                .text
                .get("livestream.tracking.codes_unknown_total", &[("found", found.as_str())]),
        });

        for code in codes {
            lines.push(format!("`{}`", code.code));
        }

        NotificationEmbed {
            title: self.text.get(
                "livestream.tracking.title",
                &[
                    ("game", self.game_name(tracking.game).as_str()),
                    ("version", tracking.version.as_str()),
                ],
            ),
            description: lines.join("\n"),
            color: tracking.game.color(),
            url: None,
            image_url: tracking.banner_url.clone(),
            footer: None,
        }
    }

    /// Owner DM sent when the notification channel cannot be found.
    pub fn channel_missing(&self, guild_id: u64, channel_id: u64) -> NotificationEmbed {
        NotificationEmbed {
            title: self.text.get("alert.channel_missing.title", &[]),
            description: self.text.get(
                "alert.channel_missing.description",
                &[
                    ("channel", channel_id.to_string().as_str()),
                    ("guild", guild_id.to_string().as_str()),
                ],
            ),
            color: ALERT_COLOR,
            ..Default::default()
        }
    }

    /// Owner DM sent when the bot lacks permissions in a destination.
    pub fn permission_missing(
        &self,
        guild_id: u64,
        channel_id: u64,
        permissions: &str,
    ) -> NotificationEmbed {
        NotificationEmbed {
            title: self.text.get("alert.permission_missing.title", &[]),
            description: self.text.get(
                "alert.permission_missing.description",
                &[
                    ("channel", channel_id.to_string().as_str()),
                    ("guild", guild_id.to_string().as_str()),
                    ("permissions", permissions),
                ],
            ),
            color: ALERT_COLOR,
            ..Default::default()
        }
    }
}
