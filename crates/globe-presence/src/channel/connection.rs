//! Background WebSocket connection loop with auto-reconnect.

use std::sync::Arc;
use std::time::Duration;

use futures_util::{SinkExt, StreamExt};
use globe_common::PresenceError;
use tokio::sync::{mpsc, RwLock};
use tokio_tungstenite::tungstenite::Message as WsMessage;
use tracing::{debug, error, info, warn};

use super::types::{ChannelCommand, ChannelConfig, ChannelEvent};
use crate::protocol::decode;

/// How a connected session ended.
enum SessionEnd {
    /// Asked to close, or nobody listens for events anymore.
    Closed,
    /// Remote closed or the socket failed; reconnect.
    Lost,
}

/// Background task managing the WebSocket connection with auto-reconnect.
pub(crate) async fn connection_loop(
    config: ChannelConfig,
    url: String,
    connected: Arc<RwLock<bool>>,
    event_tx: mpsc::Sender<ChannelEvent>,
    mut command_rx: mpsc::Receiver<ChannelCommand>,
) {
    let mut reconnect_delay = config.reconnect_delay_secs.max(1);
    let timeout = Duration::from_secs(config.connect_timeout_secs);

    loop {
        info!(room = %config.room, host = %config.host, "Connecting to presence room");

        match tokio::time::timeout(timeout, tokio_tungstenite::connect_async(&url)).await {
            Ok(Ok((ws_stream, _))) => {
                reconnect_delay = config.reconnect_delay_secs.max(1);
                *connected.write().await = true;
                let _ = event_tx.send(ChannelEvent::Connected).await;

                let (mut ws_write, mut ws_read) = ws_stream.split();

                let end = loop {
                    tokio::select! {
                        cmd = command_rx.recv() => {
                            match cmd {
                                Some(ChannelCommand::Close) | None => {
                                    let _ = ws_write.send(WsMessage::Close(None)).await;
                                    break SessionEnd::Closed;
                                }
                            }
                        }
                        frame = ws_read.next() => {
                            match frame {
                                Some(Ok(WsMessage::Text(text))) => match decode(&text) {
                                    Ok(msg) => {
                                        if event_tx.send(ChannelEvent::Message(msg)).await.is_err() {
                                            let _ = ws_write.send(WsMessage::Close(None)).await;
                                            break SessionEnd::Closed;
                                        }
                                    }
                                    Err(e) => {
                                        warn!(error = %e, "Dropping malformed presence frame");
                                        debug!(text = %text.as_str(), "Malformed frame body");
                                    }
                                },
                                Some(Ok(WsMessage::Ping(data))) => {
                                    let _ = ws_write.send(WsMessage::Pong(data)).await;
                                }
                                Some(Ok(WsMessage::Close(_))) | None => {
                                    info!("Presence room closed connection");
                                    break SessionEnd::Lost;
                                }
                                Some(Err(e)) => {
                                    warn!(error = %e, "WebSocket error");
                                    break SessionEnd::Lost;
                                }
                                Some(Ok(_)) => {}
                            }
                        }
                    }
                };

                *connected.write().await = false;
                let _ = event_tx.send(ChannelEvent::Disconnected).await;

                if let SessionEnd::Closed = end {
                    info!("Presence channel closed");
                    return;
                }
            }
            Ok(Err(e)) => {
                error!(error = %e, "Failed to connect to presence room");
                let err = PresenceError::ConnectFailed(e.to_string());
                let _ = event_tx.send(ChannelEvent::Error(err.to_string())).await;
            }
            Err(_elapsed) => {
                let err = PresenceError::Timeout(config.connect_timeout_secs);
                error!(error = %err, "Presence connect attempt timed out");
                let _ = event_tx.send(ChannelEvent::Error(err.to_string())).await;
            }
        }

        // Exponential backoff, still honouring a close request while waiting.
        info!(delay = reconnect_delay, "Reconnecting in {} seconds", reconnect_delay);
        tokio::select! {
            _ = tokio::time::sleep(Duration::from_secs(reconnect_delay)) => {}
            cmd = command_rx.recv() => {
                match cmd {
                    Some(ChannelCommand::Close) | None => return,
                }
            }
        }
        reconnect_delay = (reconnect_delay * 2).min(config.max_reconnect_delay_secs.max(1));
    }
}
