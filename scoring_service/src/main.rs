use anyhow::Result;
use std::sync::Arc;

use scoring_service::api::server::{start_api_server, AppState};
use scoring_service::config::Config;
use scoring_service::model::IdentityModel;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env();
    let state = AppState::new(Arc::new(IdentityModel));

    log::info!(
        "starting scoring service v{} on {}",
        env!("CARGO_PKG_VERSION"),
        config.bind_addr()
    );

    start_api_server(&config, state).await
}
