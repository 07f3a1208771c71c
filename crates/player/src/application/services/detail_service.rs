//! Detail Service - fetches the full record behind the detail popup

use std::sync::Arc;

use poketeam_domain::{CreatureDetail, CreatureId};

use crate::application::dto::PokemonDetailResponse;
use crate::application::ServiceError;
use crate::config::PlayerConfig;
use crate::ports::outbound::RawApiPort;

pub struct DetailService {
    api: Arc<dyn RawApiPort>,
    config: PlayerConfig,
}

impl DetailService {
    pub fn new(api: Arc<dyn RawApiPort>, config: &PlayerConfig) -> Self {
        Self {
            api,
            config: config.clone(),
        }
    }

    /// Fetch and shape the detail record for `id`.
    ///
    /// When the API has no official artwork the catalogue sprite is used.
    pub async fn fetch_detail(&self, id: CreatureId) -> Result<CreatureDetail, ServiceError> {
        let value = self.api.get_json(&format!("/pokemon/{}", id)).await?;
        let response: PokemonDetailResponse =
            serde_json::from_value(value).map_err(ServiceError::decode)?;

        if response.artwork_url().is_none() {
            tracing::debug!("No official artwork for {}, using catalogue sprite", id);
        }
        Ok(response.into_detail(self.config.sprite_url(id.get())))
    }
}
