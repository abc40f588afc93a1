//! Room store: room key → connected peers and their positions.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use globe_common::Location;
use globe_presence::{Position, PresenceMessage};
use tokio::sync::{mpsc, RwLock};

/// Identifies one accepted connection, independent of its `_pk`.
pub type SessionId = u64;

/// One connection in a room. Dropping it closes the connection's queue.
struct Peer {
    session: SessionId,
    tx: mpsc::Sender<String>,
    position: Option<Position>,
}

type Peers = HashMap<String, Peer>;

/// Thread-safe room store.
#[derive(Clone, Default)]
pub struct RoomStore {
    rooms: Arc<RwLock<HashMap<String, Peers>>>,
    next_session: Arc<AtomicU64>,
}

impl RoomStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a connection.
    ///
    /// A located newcomer is announced to every peer, itself included.
    /// Returns the session token for [`RoomStore::leave`] and the
    /// `add-marker` frames for the peers already present, which the caller
    /// sends to the newcomer directly. A previous connection under the same
    /// id is replaced and its queue closed.
    pub async fn join(
        &self,
        room: &str,
        id: &str,
        tx: mpsc::Sender<String>,
        location: Option<Location>,
    ) -> (SessionId, Vec<String>) {
        let session = self.next_session.fetch_add(1, Ordering::Relaxed);
        let position = location.map(|loc| Position {
            id: id.to_string(),
            lat: loc.lat,
            lng: loc.lng,
        });

        let mut rooms = self.rooms.write().await;
        let peers = rooms.entry(room.to_string()).or_default();

        let backlog = peers
            .iter()
            .filter(|(peer_id, _)| peer_id.as_str() != id)
            .filter_map(|(_, peer)| peer.position.clone())
            .map(|position| PresenceMessage::AddMarker { position }.encode())
            .collect();

        let replaced = peers.insert(
            id.to_string(),
            Peer {
                session,
                tx,
                position: position.clone(),
            },
        );
        if let Some(old) = replaced {
            tracing::info!(room = %room, id = %id, old_session = old.session, "Connection id reused, closing old peer");
        }

        if let Some(position) = position {
            broadcast(room, peers, PresenceMessage::AddMarker { position }.encode());
        }

        (session, backlog)
    }

    /// Unregister a connection and tell the rest of the room.
    ///
    /// Only removes the entry if it still belongs to `session`; a newer
    /// connection reusing the id is left alone.
    pub async fn leave(&self, room: &str, id: &str, session: SessionId) {
        let mut rooms = self.rooms.write().await;
        let Some(peers) = rooms.get_mut(room) else {
            return;
        };

        let owned = peers.get(id).is_some_and(|peer| peer.session == session);
        if !owned {
            return;
        }
        peers.remove(id);

        broadcast(room, peers, PresenceMessage::remove(id).encode());

        if peers.is_empty() {
            rooms.remove(room);
            tracing::debug!(room = %room, "Room empty, dropped");
        }
    }

    /// Number of connections in `room`.
    pub async fn peer_count(&self, room: &str) -> usize {
        self.rooms.read().await.get(room).map_or(0, |p| p.len())
    }

    pub async fn room_count(&self) -> usize {
        self.rooms.read().await.len()
    }
}

/// Queue `frame` for every peer in the room.
///
/// A peer whose queue is full or closed can no longer be kept in sync, so
/// it is evicted: its queue closes, its connection ends and the client
/// reconnects to a fresh backlog. The rest of the room is told it left.
fn broadcast(room: &str, peers: &mut Peers, frame: String) {
    let mut pending = vec![frame];
    while let Some(frame) = pending.pop() {
        let stalled: Vec<String> = peers
            .iter()
            .filter(|(_, peer)| peer.tx.try_send(frame.clone()).is_err())
            .map(|(peer_id, _)| peer_id.clone())
            .collect();

        for peer_id in stalled {
            let Some(peer) = peers.remove(&peer_id) else {
                continue;
            };
            tracing::warn!(room = %room, peer = %peer_id, "Peer queue full or closed, evicting");
            if peer.position.is_some() {
                pending.push(PresenceMessage::remove(&peer_id).encode());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use globe_presence::decode;
    use tokio::sync::mpsc::error::TryRecvError;

    fn recv_all(rx: &mut mpsc::Receiver<String>) -> Vec<PresenceMessage> {
        let mut out = Vec::new();
        while let Ok(frame) = rx.try_recv() {
            out.push(decode(&frame).unwrap());
        }
        out
    }

    #[tokio::test]
    async fn newcomer_is_announced_to_everyone() {
        let store = RoomStore::new();
        let (tx_a, mut rx_a) = mpsc::channel(16);
        let (tx_b, mut rx_b) = mpsc::channel(16);

        let (_, backlog) = store
            .join("main/globe", "a", tx_a, Some(Location::new(1.0, 2.0)))
            .await;
        assert!(backlog.is_empty());
        assert_eq!(recv_all(&mut rx_a), vec![PresenceMessage::add("a", 1.0, 2.0)]);

        let (_, backlog) = store
            .join("main/globe", "b", tx_b, Some(Location::new(3.0, 4.0)))
            .await;
        let backlog: Vec<_> = backlog.iter().map(|f| decode(f).unwrap()).collect();
        assert_eq!(backlog, vec![PresenceMessage::add("a", 1.0, 2.0)]);
        assert_eq!(recv_all(&mut rx_a), vec![PresenceMessage::add("b", 3.0, 4.0)]);
        assert_eq!(recv_all(&mut rx_b), vec![PresenceMessage::add("b", 3.0, 4.0)]);
        assert_eq!(store.peer_count("main/globe").await, 2);
    }

    #[tokio::test]
    async fn unlocated_connection_produces_no_marker() {
        let store = RoomStore::new();
        let (tx_a, mut rx_a) = mpsc::channel(16);
        let (tx_b, _rx_b) = mpsc::channel(16);

        store.join("r", "a", tx_a, Some(Location::new(1.0, 2.0))).await;
        recv_all(&mut rx_a);

        let (_, backlog) = store.join("r", "b", tx_b, None).await;
        assert_eq!(backlog.len(), 1);
        assert!(recv_all(&mut rx_a).is_empty());
        assert_eq!(store.peer_count("r").await, 2);
    }

    #[tokio::test]
    async fn leave_notifies_others_and_drops_empty_room() {
        let store = RoomStore::new();
        let (tx_a, mut rx_a) = mpsc::channel(16);
        let (tx_b, mut rx_b) = mpsc::channel(16);

        let (session_a, _) = store.join("r", "a", tx_a, Some(Location::new(0.0, 0.0))).await;
        let (session_b, _) = store.join("r", "b", tx_b, Some(Location::new(0.0, 0.0))).await;
        recv_all(&mut rx_a);
        recv_all(&mut rx_b);

        store.leave("r", "b", session_b).await;
        assert_eq!(recv_all(&mut rx_a), vec![PresenceMessage::remove("b")]);
        assert!(recv_all(&mut rx_b).is_empty());

        store.leave("r", "a", session_a).await;
        assert_eq!(store.room_count().await, 0);
    }

    #[tokio::test]
    async fn reused_id_closes_old_queue_and_survives_stale_leave() {
        let store = RoomStore::new();
        let (old_tx, mut old_rx) = mpsc::channel(16);
        let (new_tx, _new_rx) = mpsc::channel(16);

        let (old_session, _) = store.join("r", "a", old_tx, None).await;
        store.join("r", "a", new_tx, None).await;
        assert_eq!(old_rx.try_recv(), Err(TryRecvError::Disconnected));

        store.leave("r", "a", old_session).await;
        assert_eq!(store.peer_count("r").await, 1);
    }

    #[tokio::test]
    async fn full_queue_evicts_peer_instead_of_losing_frames() {
        let store = RoomStore::new();
        let (tx_a, mut rx_a) = mpsc::channel(1);
        let (tx_b, mut rx_b) = mpsc::channel(16);

        // a's own add fills its single slot.
        store.join("r", "a", tx_a, Some(Location::new(1.0, 1.0))).await;
        let (session_b, backlog) = store.join("r", "b", tx_b, Some(Location::new(2.0, 2.0))).await;
        assert_eq!(backlog.len(), 1);

        // a is gone: its queue drains what it had, then reports closed.
        assert_eq!(recv_all(&mut rx_a), vec![PresenceMessage::add("a", 1.0, 1.0)]);
        assert_eq!(rx_a.try_recv(), Err(TryRecvError::Disconnected));
        assert_eq!(store.peer_count("r").await, 1);

        // b saw itself arrive and a leave, so its globe stays consistent.
        assert_eq!(
            recv_all(&mut rx_b),
            vec![PresenceMessage::add("b", 2.0, 2.0), PresenceMessage::remove("a")]
        );

        store.leave("r", "b", session_b).await;
        assert_eq!(store.room_count().await, 0);
    }

    #[tokio::test]
    async fn rooms_are_isolated() {
        let store = RoomStore::new();
        let (tx_a, mut rx_a) = mpsc::channel(16);
        let (tx_b, _rx_b) = mpsc::channel(16);

        store.join("one", "a", tx_a, Some(Location::new(0.0, 0.0))).await;
        recv_all(&mut rx_a);
        let (_, backlog) = store.join("two", "b", tx_b, Some(Location::new(5.0, 5.0))).await;
        assert!(backlog.is_empty());
        assert!(recv_all(&mut rx_a).is_empty());
    }
}
