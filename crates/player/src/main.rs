//! PokéTeam Player - composition root binary.

use std::sync::Arc;

#[cfg(not(target_arch = "wasm32"))]
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use poketeam_player::config::PlayerConfig;
use poketeam_player::infrastructure::http_client::ApiAdapter;
use poketeam_player::ports::outbound::RawApiPort;

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    {
        // A missing .env file is fine
        let _ = dotenvy::dotenv();

        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "poketeam_player=debug,dioxus=info".into()),
            )
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        tracing_wasm::set_as_global_default();
    }

    tracing::info!("Starting PokéTeam Player");

    let config = PlayerConfig::from_env().unwrap_or_else(|e| {
        tracing::error!("Invalid configuration, using defaults: {}", e);
        PlayerConfig::default()
    });

    // Platform
    let platform = poketeam_player::infrastructure::platform::create_platform(&config);

    // HTTP
    let raw_api: Arc<dyn RawApiPort> = Arc::new(ApiAdapter::new(&config));

    dioxus::LaunchBuilder::new()
        .with_context(platform)
        .with_context(poketeam_player::presentation::Services::new(
            raw_api, &config,
        ))
        .launch(poketeam_player::ui::app);
}
