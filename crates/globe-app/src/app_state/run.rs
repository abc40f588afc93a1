//! The host event loop.

use std::future::Future;
use std::time::Duration;

use globe_common::{ConnectionId, GlobeError};
use globe_config::GlobeAppConfig;
use globe_presence::{ChannelEvent, PresenceChannel};
use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;

use super::core::GlobeApp;
use super::init::{channel_config, globe_options, mount_surface};

/// Run until Ctrl-C.
pub async fn run(config: GlobeAppConfig) -> Result<(), GlobeError> {
    run_until(config, tokio::signal::ctrl_c()).await
}

/// Mount the globe, join the presence room and animate until `shutdown`
/// resolves. Tears down the channel before the globe.
pub(super) async fn run_until<F>(config: GlobeAppConfig, shutdown: F) -> Result<(), GlobeError>
where
    F: Future,
{
    let options = globe_options(&config.globe)?;
    let surface = mount_surface(&config.render, &options);
    let self_id = ConnectionId::new();
    let mut app = GlobeApp::mount(options, surface, self_id.clone())?;

    let (channel, mut events) = if config.presence.enabled {
        let (channel, events) = PresenceChannel::connect(channel_config(&config.presence, self_id))?;
        (Some(channel), Some(events))
    } else {
        tracing::info!("Presence disabled, showing an empty globe");
        (None, None)
    };

    let frame_rate = config.render.frame_rate.max(1);
    let mut ticker = tokio::time::interval(Duration::from_secs_f64(1.0 / f64::from(frame_rate)));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    tokio::pin!(shutdown);
    loop {
        tokio::select! {
            event = next_event(&mut events) => match event {
                Some(event) => app.handle_channel_event(event),
                None => {
                    tracing::warn!("Presence channel ended");
                    events = None;
                }
            },
            _ = ticker.tick() => app.on_frame(),
            _ = &mut shutdown => {
                tracing::info!("Shutdown requested");
                break;
            }
        }
    }

    let mut was_connected = false;
    if let Some(channel) = channel {
        was_connected = channel.is_connected().await;
        channel.shutdown().await;
    }
    tracing::info!(
        frames = app.frames(),
        visitors = app.visitors(),
        was_connected,
        "Globe stopping"
    );
    drop(app);
    Ok(())
}

/// Next channel event, or never when there is no channel.
async fn next_event(events: &mut Option<mpsc::Receiver<ChannelEvent>>) -> Option<ChannelEvent> {
    match events {
        Some(rx) => rx.recv().await,
        None => std::future::pending().await,
    }
}
