//! Public handle for the presence room connection.

use std::sync::Arc;
use std::time::Duration;

use globe_common::{ConnectionId, PresenceError};
use tokio::sync::{mpsc, RwLock};
use tokio::task::JoinHandle;
use tracing::debug;

use super::connection::connection_loop;
use super::types::{ChannelCommand, ChannelConfig, ChannelEvent};

/// Handle to one presence room subscription.
///
/// The connection lives in a background task. Dropping the handle aborts
/// that task; [`PresenceChannel::shutdown`] closes the socket gracefully
/// first.
pub struct PresenceChannel {
    command_tx: mpsc::Sender<ChannelCommand>,
    connected: Arc<RwLock<bool>>,
    connection_id: ConnectionId,
    task: Option<JoinHandle<()>>,
}

impl PresenceChannel {
    /// Start the background connection. Must be called inside a tokio runtime.
    /// Returns `(channel, event_receiver)`.
    pub fn connect(
        config: ChannelConfig,
    ) -> Result<(Self, mpsc::Receiver<ChannelEvent>), PresenceError> {
        let url = config.ws_url()?;
        let (event_tx, event_rx) = mpsc::channel(256);
        let (command_tx, command_rx) = mpsc::channel(8);
        let connected = Arc::new(RwLock::new(false));
        let connection_id = config.connection_id.clone();

        let task = tokio::spawn(connection_loop(
            config,
            url,
            Arc::clone(&connected),
            event_tx,
            command_rx,
        ));

        Ok((
            Self {
                command_tx,
                connected,
                connection_id,
                task: Some(task),
            },
            event_rx,
        ))
    }

    /// The id the room uses for our own marker.
    pub fn connection_id(&self) -> &ConnectionId {
        &self.connection_id
    }

    pub async fn is_connected(&self) -> bool {
        *self.connected.read().await
    }

    /// Send a close frame and wait (bounded) for the connection task to end.
    pub async fn shutdown(mut self) {
        let _ = self.command_tx.send(ChannelCommand::Close).await;
        if let Some(task) = self.task.take() {
            if tokio::time::timeout(Duration::from_secs(2), task).await.is_err() {
                debug!("Presence task did not stop in time");
            }
        }
    }
}

impl Drop for PresenceChannel {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}
