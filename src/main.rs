use log::info;

use sastra::server;
use sastra::{Studio, StudioConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>>
{   env_logger::Builder::from_env(
      env_logger::Env::default().default_filter_or("info")
    ).init();

    let config = StudioConfig::from_env();
    let studio = Studio::new(&config)?;
    info!(
      "Providers in order: {:?}",
      studio.gateway().configured()
    );

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    info!("Listening on {}", listener.local_addr()?);
    axum::serve(listener, server::router(studio)).await?;
    Ok(())
}
