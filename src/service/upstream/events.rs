use serde::Deserialize;

use crate::{error::upstream::UpstreamError, model::game::Game};

use super::{HoyolabResponse, UpstreamClient};

#[derive(Debug, Default, Deserialize)]
struct EventList {
    #[serde(default)]
    list: Vec<EventEntry>,
}

#[derive(Debug, Default, Deserialize)]
struct EventEntry {
    #[serde(default)]
    name: String,
    #[serde(default)]
    banner_url: String,
}

impl UpstreamClient {
    /// Looks up the banner of the event announcing a version's special program.
    ///
    /// Picks the first event whose name mentions the version and that has a banner.
    ///
    /// # Returns
    /// - `Ok(Some(url))` - Banner found
    /// - `Ok(None)` - No matching event is listed
    /// - `Err(UpstreamError)` - The feed could not be read
    pub async fn fetch_event_banner(
        &self,
        game: Game,
        version: &str,
    ) -> Result<Option<String>, UpstreamError> {
        let response: HoyolabResponse<EventList> = self
            .get_json(
                &self.events_url,
                &[
                    ("gids", game.hoyolab_id().to_string()),
                    ("page_size", "15".to_string()),
                    ("size", "15".to_string()),
                ],
            )
            .await?;

        Ok(response
            .into_data()?
            .list
            .into_iter()
            .find(|e| e.name.contains(version) && !e.banner_url.is_empty())
            .map(|e| e.banner_url))
    }
}
