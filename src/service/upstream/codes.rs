use crate::{
    error::upstream::UpstreamError,
    model::{
        code::{UpstreamCode, UpstreamCodeList},
        game::Game,
    },
};

use super::UpstreamClient;

impl UpstreamClient {
    /// Fetches the current code list for a game.
    ///
    /// Returns every entry the API lists, active or not; callers filter on `is_active`.
    ///
    /// # Arguments
    /// - `game` - Game to fetch codes for
    ///
    /// # Returns
    /// - `Ok(Vec<UpstreamCode>)` - Codes listed by the API, possibly empty
    /// - `Err(UpstreamError)` - Timeout, non-2xx status, network failure or malformed body
    pub async fn fetch_codes(&self, game: Game) -> Result<Vec<UpstreamCode>, UpstreamError> {
        let list: UpstreamCodeList = self
            .get_json(&self.codes_url, &[("game", game.api_id().to_string())])
            .await?;

        Ok(list.codes)
    }
}
