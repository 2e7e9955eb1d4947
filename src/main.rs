use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use log::info;

use danceloop::web::{create_router, AppState};
use danceloop::transcript::YoutubeTranscriptClient;
use danceloop::AppConfig;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let config = AppConfig::from_env();
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));

    let state = Arc::new(AppState {
        transcripts: Arc::new(YoutubeTranscriptClient::new()),
        config,
    });

    let app = create_router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("server running on {addr}");
    axum::serve(listener, app).await?;

    Ok(())
}
