//! Per-connection handler: register in the room, then forward room frames.

use std::net::SocketAddr;

use futures_util::{SinkExt, StreamExt};
use tokio::net::TcpStream;
use tokio::sync::mpsc;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::WebSocketStream;

use crate::request::JoinRequest;
use crate::room::RoomStore;

/// Handle a single upgraded connection until it closes.
pub async fn handle_connection(
    ws: WebSocketStream<TcpStream>,
    addr: SocketAddr,
    join: JoinRequest,
    store: RoomStore,
) {
    let (mut sink, mut stream) = ws.split();
    let room = join.room_key();
    let id = join.connection_id.clone();

    let (tx, mut rx) = mpsc::channel::<String>(256);
    let (session, backlog) = store.join(&room, &id, tx, join.location).await;
    let peers = store.peer_count(&room).await;

    tracing::info!(
        peer = %addr,
        room = %room,
        id = %id,
        session,
        located = join.location.is_some(),
        peers,
        "Client joined"
    );

    for frame in backlog {
        if sink.send(Message::Text(frame.into())).await.is_err() {
            store.leave(&room, &id, session).await;
            return;
        }
    }

    loop {
        tokio::select! {
            frame = rx.recv() => match frame {
                Some(frame) => {
                    if sink.send(Message::Text(frame.into())).await.is_err() {
                        break;
                    }
                }
                // The room let go of us: evicted or replaced by a newer
                // connection with the same id.
                None => {
                    tracing::info!(peer = %addr, room = %room, id = %id, "Dropped by room, closing");
                    let _ = sink.send(Message::Close(None)).await;
                    break;
                }
            },

            frame = stream.next() => {
                match frame {
                    Some(Ok(Message::Ping(data))) => {
                        let _ = sink.send(Message::Pong(data)).await;
                    }
                    Some(Ok(Message::Close(_))) | None => break,
                    Some(Err(e)) => {
                        tracing::debug!(peer = %addr, error = %e, "WS error");
                        break;
                    }
                    // Clients only listen; anything else they send is ignored.
                    Some(Ok(_)) => {}
                }
            }
        }
    }

    tracing::info!(peer = %addr, room = %room, id = %id, "Client left");
    store.leave(&room, &id, session).await;
}
