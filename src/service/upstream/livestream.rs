//! HoYoLAB livestream material feed.
//!
//! The feed nests codes inside `data.modules[].exchange_group.bonuses[]`. Which module
//! carries the exchange group has changed between programs, so every module is scanned.

use std::collections::HashSet;

use serde::{Deserialize, Deserializer};

use crate::{
    error::upstream::UpstreamError,
    model::{
        game::Game,
        livestream::{DiscoveredCode, LivestreamParse},
    },
    service::livestream::icons::IconMap,
};

use super::{HoyolabResponse, UpstreamClient};

#[derive(Debug, Default, Deserialize)]
pub struct LivestreamMaterial {
    #[serde(default, deserialize_with = "null_as_default")]
    pub modules: Vec<LivestreamModule>,
}

#[derive(Debug, Default, Deserialize)]
pub struct LivestreamModule {
    #[serde(default)]
    pub exchange_group: Option<ExchangeGroup>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ExchangeGroup {
    #[serde(default, deserialize_with = "null_as_default")]
    pub bonuses: Vec<ExchangeBonus>,
    #[serde(default)]
    pub bonuses_summary: Option<BonusesSummary>,
}

#[derive(Debug, Default, Deserialize)]
pub struct BonusesSummary {
    #[serde(default)]
    pub code_count: Option<i32>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ExchangeBonus {
    #[serde(default, deserialize_with = "null_as_default")]
    pub exchange_code: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub icon_bonuses: Vec<IconBonus>,
    #[serde(default)]
    pub offline_at: Option<FlexibleTimestamp>,
}

#[derive(Debug, Default, Deserialize)]
pub struct IconBonus {
    #[serde(default, deserialize_with = "null_as_default")]
    pub bonus_num: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub icon_url: String,
}

/// Treats an explicit `null` like a missing key.
///
/// The feed sends `null` for empty lists and codes in some modules.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Unix timestamp the feed sends either as a number or as a numeric string.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum FlexibleTimestamp {
    Number(i64),
    Text(String),
}

impl FlexibleTimestamp {
    /// Returns the timestamp in seconds, or `None` for zero and unparseable values.
    pub fn seconds(&self) -> Option<i64> {
        let value = match self {
            FlexibleTimestamp::Number(n) => *n,
            FlexibleTimestamp::Text(s) => s.trim().parse().ok()?,
        };

        (value > 0).then_some(value)
    }
}

/// Extracts the codes from a livestream material response.
///
/// Walks every module that carries an exchange group, skips blank codes and codes already
/// seen earlier in the same response, and keeps the first advertised code count.
///
/// # Arguments
/// - `material` - Decoded `data` payload of the feed
/// - `icons` - Map used to turn reward icons into reward names
///
/// # Returns
/// - `LivestreamParse` - Codes in feed order plus the expected count, if advertised
pub fn parse_material(material: &LivestreamMaterial, icons: &IconMap) -> LivestreamParse {
    let mut seen = HashSet::new();
    let mut parse = LivestreamParse::default();

    for group in material
        .modules
        .iter()
        .filter_map(|m| m.exchange_group.as_ref())
    {
        if parse.expected_code_count.is_none() {
            parse.expected_code_count = group
                .bonuses_summary
                .as_ref()
                .and_then(|s| s.code_count)
                .filter(|count| *count > 0);
        }

        for bonus in &group.bonuses {
            let code = bonus.exchange_code.trim();
            if code.is_empty() || !seen.insert(code.to_string()) {
                continue;
            }

            parse.codes.push(DiscoveredCode {
                code: code.to_string(),
                title: icons.describe(
                    bonus
                        .icon_bonuses
                        .iter()
                        .map(|b| (b.icon_url.as_str(), b.bonus_num)),
                ),
                expire_at: bonus.offline_at.as_ref().and_then(FlexibleTimestamp::seconds),
            });
        }
    }

    parse
}

impl UpstreamClient {
    /// Fetches the livestream material for a game.
    ///
    /// # Returns
    /// - `Ok(LivestreamMaterial)` - Decoded payload
    /// - `Err(UpstreamError)` - Transport failure or non-zero retcode
    pub async fn fetch_livestream(&self, game: Game) -> Result<LivestreamMaterial, UpstreamError> {
        let response: HoyolabResponse<LivestreamMaterial> = self
            .get_json(
                &self.livestream_url,
                &[("game_id", game.hoyolab_id().to_string())],
            )
            .await?;

        response.into_data()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::{
        matchers::{method, path, query_param},
        Mock, MockServer, ResponseTemplate,
    };

    use super::*;
    use crate::service::upstream::test_support::client_for;

    fn icons() -> IconMap {
        IconMap::from_entries([("primogem_icon", "Primogem"), ("mora_icon", "Mora")])
    }

    fn material(value: serde_json::Value) -> LivestreamMaterial {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn parses_codes_from_every_module() {
        let material = material(json!({
            "modules": [
                { "kv": {} },
                { "exchange_group": {
                    "bonuses": [{
                        "exchange_code": "LIVE1",
                        "offline_at": "1735819200",
                        "icon_bonuses": [
                            { "bonus_num": 100, "icon_url": "https://cdn.example/primogem_icon.png" },
                            { "bonus_num": 10000, "icon_url": "https://cdn.example/mora_icon.png" }
                        ]
                    }],
                    "bonuses_summary": { "code_count": 3 }
                }},
                { "exchange_group": {
                    "bonuses": [
                        { "exchange_code": "LIVE2", "offline_at": 1735819200 },
                        { "exchange_code": "LIVE1" },
                        { "exchange_code": "  " }
                    ]
                }}
            ]
        }));

        let parse = parse_material(&material, &icons());

        assert_eq!(parse.expected_code_count, Some(3));
        assert_eq!(parse.codes.len(), 2);
        assert_eq!(parse.codes[0].code, "LIVE1");
        assert_eq!(parse.codes[0].title, "100 Primogem, 10000 Mora");
        assert_eq!(parse.codes[0].expire_at, Some(1_735_819_200));
        assert_eq!(parse.codes[1].code, "LIVE2");
        assert_eq!(parse.codes[1].title, "");
        assert_eq!(parse.codes[1].expire_at, Some(1_735_819_200));
    }

    #[test]
    fn null_fields_are_treated_as_missing() {
        let material = material(json!({
            "modules": [
                { "exchange_group": { "bonuses": null, "bonuses_summary": null } },
                { "exchange_group": {
                    "bonuses": [
                        { "exchange_code": null, "icon_bonuses": null },
                        { "exchange_code": "REAL", "icon_bonuses": null, "offline_at": null },
                        { "exchange_code": "ICONS", "icon_bonuses": [
                            { "bonus_num": null, "icon_url": null },
                            { "bonus_num": 60, "icon_url": "https://cdn.example/primogem_icon.png" }
                        ]}
                    ]
                }},
                { "exchange_group": null }
            ]
        }));

        let parse = parse_material(&material, &icons());

        assert_eq!(parse.codes.len(), 2);
        assert_eq!(parse.codes[0].code, "REAL");
        assert_eq!(parse.codes[0].title, "");
        assert_eq!(parse.codes[0].expire_at, None);
        assert_eq!(parse.codes[1].title, "60 Primogem");
    }

    #[test]
    fn null_module_list_decodes_empty() {
        let parse = parse_material(&material(json!({ "modules": null })), &icons());

        assert!(parse.codes.is_empty());
    }

    #[test]
    fn empty_material_yields_nothing() {
        let parse = parse_material(&material(json!({ "modules": [] })), &icons());

        assert!(parse.codes.is_empty());
        assert_eq!(parse.expected_code_count, None);
    }

    #[test]
    fn zero_timestamps_are_absent() {
        assert_eq!(FlexibleTimestamp::Number(0).seconds(), None);
        assert_eq!(FlexibleTimestamp::Text("0".to_string()).seconds(), None);
        assert_eq!(FlexibleTimestamp::Text("soon".to_string()).seconds(), None);
        assert_eq!(FlexibleTimestamp::Number(42).seconds(), Some(42));
    }

    #[tokio::test]
    async fn fetches_material_by_hoyolab_id() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/livestream"))
            .and(query_param("game_id", "8"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "retcode": 0,
                "message": "OK",
                "data": { "modules": [{ "exchange_group": {
                    "bonuses": [{ "exchange_code": "ZZZLIVE" }]
                }}]}
            })))
            .mount(&server)
            .await;

        let material = client_for(&server.uri())
            .fetch_livestream(Game::Zenless)
            .await
            .unwrap();

        assert_eq!(parse_material(&material, &icons()).codes[0].code, "ZZZLIVE");
    }

    #[tokio::test]
    async fn non_zero_retcode_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/livestream"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "retcode": -1,
                "message": "system busy",
                "data": null
            })))
            .mount(&server)
            .await;

        let result = client_for(&server.uri()).fetch_livestream(Game::Genshin).await;

        assert!(matches!(result, Err(UpstreamError::Api { retcode: -1, .. })));
    }
}
