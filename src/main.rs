mod app;
mod config;
mod db;
mod error;
mod state;
mod telemetry;
mod users;

use crate::{config::AppConfig, state::AppState, telemetry::LogFormat};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    telemetry::init(LogFormat::from_env());

    let config = AppConfig::from_env()?;
    let app_state = AppState::init(&config).await?;

    app::serve(app::build_app(app_state), &config).await
}
