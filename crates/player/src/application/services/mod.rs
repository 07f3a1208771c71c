//! Application services

pub mod catalogue_service;
pub mod detail_service;
pub mod team_store;

pub use catalogue_service::CatalogueService;
pub use detail_service::DetailService;
pub use team_store::TeamStore;
