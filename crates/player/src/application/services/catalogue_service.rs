//! Catalogue Service - fetches the creature listing shown by the list view

use std::sync::Arc;

use poketeam_domain::{CreatureId, CreatureSummary};

use crate::application::dto::PokemonListResponse;
use crate::application::ServiceError;
use crate::config::PlayerConfig;
use crate::ports::outbound::RawApiPort;

/// Loads the first `catalogue_limit` creatures in catalogue order.
///
/// Ids come from list position and sprites from
/// [`PlayerConfig::sprite_url`], so one request is enough for the whole listing.
pub struct CatalogueService {
    api: Arc<dyn RawApiPort>,
    config: PlayerConfig,
}

impl CatalogueService {
    pub fn new(api: Arc<dyn RawApiPort>, config: &PlayerConfig) -> Self {
        Self {
            api,
            config: config.clone(),
        }
    }

    pub async fn fetch_catalogue(&self) -> Result<Vec<CreatureSummary>, ServiceError> {
        let value = self
            .api
            .get_json(&format!("/pokemon?limit={}", self.config.catalogue_limit))
            .await?;
        let listing: PokemonListResponse =
            serde_json::from_value(value).map_err(ServiceError::decode)?;

        let entries: Vec<CreatureSummary> = listing
            .results
            .into_iter()
            .enumerate()
            .map(|(index, resource)| {
                let id = CreatureId::from_position(index);
                CreatureSummary::new(id, resource.name, self.config.sprite_url(id.get()))
            })
            .collect();

        tracing::debug!("Fetched {} catalogue entries", entries.len());
        Ok(entries)
    }
}
