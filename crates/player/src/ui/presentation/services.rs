//! Service providers for the presentation layer
//!
//! Components reach application services through these hooks instead of
//! constructing infrastructure adapters themselves.

use dioxus::prelude::*;
use std::sync::Arc;

use crate::application::services::{CatalogueService, DetailService};
use crate::config::PlayerConfig;
use crate::ports::outbound::RawApiPort;

/// All services wrapped for context provision
#[derive(Clone)]
pub struct Services {
    pub catalogue: Arc<CatalogueService>,
    pub detail: Arc<DetailService>,
}

impl Services {
    /// Create all services over one API port
    pub fn new(raw_api: Arc<dyn RawApiPort>, config: &PlayerConfig) -> Self {
        Self {
            catalogue: Arc::new(CatalogueService::new(raw_api.clone(), config)),
            detail: Arc::new(DetailService::new(raw_api, config)),
        }
    }
}

/// Hook to access the CatalogueService from context
pub fn use_catalogue_service() -> Arc<CatalogueService> {
    let services = use_context::<Services>();
    services.catalogue.clone()
}

/// Hook to access the DetailService from context
pub fn use_detail_service() -> Arc<DetailService> {
    let services = use_context::<Services>();
    services.detail.clone()
}
