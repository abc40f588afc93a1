//! Accept loop: WebSocket handshake with request inspection.

use tokio::net::TcpListener;
use tokio_tungstenite::accept_hdr_async;
use tokio_tungstenite::tungstenite::handshake::server::{ErrorResponse, Request, Response};
use tokio_tungstenite::tungstenite::http::StatusCode;

use crate::connection::handle_connection;
use crate::request::{parse_join, JoinRequest};
use crate::room::RoomStore;

/// Accept connections forever.
pub async fn serve(listener: TcpListener, store: RoomStore) {
    loop {
        match listener.accept().await {
            Ok((stream, addr)) => {
                let store = store.clone();
                tokio::spawn(async move {
                    let mut join: Option<JoinRequest> = None;
                    let callback = |req: &Request, resp: Response| {
                        let target = req
                            .uri()
                            .path_and_query()
                            .map(|pq| pq.as_str())
                            .unwrap_or("/");
                        match parse_join(target, req.headers()) {
                            Ok(parsed) => {
                                join = Some(parsed);
                                Ok(resp)
                            }
                            Err(reason) => {
                                let mut err = ErrorResponse::new(Some(reason));
                                *err.status_mut() = StatusCode::NOT_FOUND;
                                Err(err)
                            }
                        }
                    };

                    match accept_hdr_async(stream, callback).await {
                        Ok(ws) => match join {
                            Some(join) => handle_connection(ws, addr, join, store).await,
                            None => tracing::warn!(peer = %addr, "Upgrade without room"),
                        },
                        Err(e) => {
                            tracing::warn!(peer = %addr, error = %e, "WS handshake failed");
                        }
                    }
                });
            }
            Err(e) => {
                tracing::warn!(error = %e, "TCP accept error");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_util::StreamExt;
    use globe_presence::{decode, PresenceMessage};
    use std::time::Duration;
    use tokio_tungstenite::tungstenite::client::IntoClientRequest;
    use tokio_tungstenite::tungstenite::http::HeaderValue;
    use tokio_tungstenite::tungstenite::Message;
    use tokio_tungstenite::{MaybeTlsStream, WebSocketStream};

    type Client = WebSocketStream<MaybeTlsStream<tokio::net::TcpStream>>;

    async fn start() -> u16 {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        tokio::spawn(serve(listener, RoomStore::new()));
        port
    }

    async fn connect(port: u16, id: &str, lat: &'static str, lng: &'static str) -> Client {
        let url = format!("ws://127.0.0.1:{port}/parties/main/globe?_pk={id}");
        let mut req = url.into_client_request().unwrap();
        req.headers_mut()
            .insert("cf-iplatitude", HeaderValue::from_static(lat));
        req.headers_mut()
            .insert("cf-iplongitude", HeaderValue::from_static(lng));
        let (ws, _) = tokio_tungstenite::connect_async(req).await.unwrap();
        ws
    }

    async fn next_message(ws: &mut Client) -> PresenceMessage {
        loop {
            let frame = tokio::time::timeout(Duration::from_secs(5), ws.next())
                .await
                .expect("timed out waiting for frame")
                .expect("stream ended")
                .unwrap();
            if let Message::Text(text) = frame {
                return decode(&text).unwrap();
            }
        }
    }

    #[tokio::test]
    async fn peers_see_each_other_join_and_leave() {
        let port = start().await;

        let mut a = connect(port, "a", "10", "20").await;
        assert_eq!(next_message(&mut a).await, PresenceMessage::add("a", 10.0, 20.0));

        let mut b = connect(port, "b", "-5", "7.5").await;
        let mut seen_by_b = vec![next_message(&mut b).await, next_message(&mut b).await];
        seen_by_b.sort_by(|x, y| x.id().cmp(y.id()));
        assert_eq!(
            seen_by_b,
            vec![
                PresenceMessage::add("a", 10.0, 20.0),
                PresenceMessage::add("b", -5.0, 7.5),
            ]
        );
        assert_eq!(next_message(&mut a).await, PresenceMessage::add("b", -5.0, 7.5));

        b.close(None).await.unwrap();
        assert_eq!(next_message(&mut a).await, PresenceMessage::remove("b"));
    }

    #[tokio::test]
    async fn reconnect_with_same_id_closes_old_socket() {
        let port = start().await;

        let mut old = connect(port, "a", "10", "20").await;
        assert_eq!(next_message(&mut old).await, PresenceMessage::add("a", 10.0, 20.0));

        let mut new = connect(port, "a", "10", "20").await;
        assert_eq!(next_message(&mut new).await, PresenceMessage::add("a", 10.0, 20.0));

        let closed = loop {
            match tokio::time::timeout(Duration::from_secs(5), old.next())
                .await
                .expect("old socket never closed")
            {
                Some(Ok(Message::Close(_))) | None | Some(Err(_)) => break true,
                Some(Ok(_)) => continue,
            }
        };
        assert!(closed);
    }

    #[tokio::test]
    async fn unknown_path_is_rejected() {
        let port = start().await;
        let url = format!("ws://127.0.0.1:{port}/elsewhere");
        assert!(tokio_tungstenite::connect_async(url).await.is_err());
    }
}
