//! globe-relay: presence fan-out for the visitor globe.
//!
//! Clients connect to `/parties/{party}/{room}?_pk={id}`. Every located
//! connection becomes a marker: joins are announced to the whole room and
//! leaves to everyone left behind. Locations come from edge headers; the
//! relay does no geolocation of its own.

mod connection;
mod request;
mod room;
mod server;

use clap::Parser;
use tokio::net::TcpListener;

use crate::room::RoomStore;

#[derive(Parser)]
#[command(name = "globe-relay", about = "Presence relay for the visitor globe")]
struct Args {
    /// Port to listen on.
    #[arg(short, long, default_value_t = 1999)]
    port: u16,

    /// Address to bind.
    #[arg(long, default_value = "0.0.0.0")]
    bind: String,

    /// Log level override (e.g. "globe_relay=debug").
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    let directive = args.log_level.as_deref().unwrap_or("globe_relay=info");
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| directive.into()),
        )
        .init();

    let addr = format!("{}:{}", args.bind, args.port);
    let listener = match TcpListener::bind(&addr).await {
        Ok(l) => l,
        Err(e) => {
            tracing::error!(addr = %addr, error = %e, "Failed to bind TCP listener");
            std::process::exit(1);
        }
    };

    tracing::info!("globe-relay listening on {}", addr);

    let store = RoomStore::new();
    tokio::select! {
        _ = server::serve(listener, store.clone()) => {}
        _ = tokio::signal::ctrl_c() => {
            let rooms = store.room_count().await;
            tracing::info!(rooms, "Shutting down");
        }
    }
}
