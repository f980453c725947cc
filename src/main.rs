/**
 * Contact Relay Server Entry Point
 *
 * Loads the environment, initializes tracing, assembles the application
 * through the composition root, and serves it.
 */

use std::net::SocketAddr;

use contact_relay::server::{create_app, ServerConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file if present
    dotenv::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&env_filter))
        .init();

    let config = ServerConfig::from_env()?;
    let port = config.port;
    let email_user = config.smtp.username.clone();
    let receiver = config.receiver_email.clone();

    let app = create_app(config).await?;

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("Contact relay backend started");
    tracing::info!("Server running on http://{addr}");
    tracing::info!("Email user: {email_user}");
    tracing::info!("Receiver: {receiver}");

    axum::serve(listener, app).await?;

    Ok(())
}
