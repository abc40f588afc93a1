//! Applying presence channel events to the marker store.

use globe_presence::ChannelEvent;

use super::core::GlobeApp;

impl GlobeApp {
    /// Route one event from the presence channel.
    pub fn handle_channel_event(&mut self, event: ChannelEvent) {
        match event {
            ChannelEvent::Connected => {
                tracing::info!(id = %self.self_id, "Presence connected");
            }
            ChannelEvent::Message(message) => {
                let change = self.store.apply(&message, self.self_id.as_str());
                tracing::debug!(id = message.id(), ?change, "Presence message applied");
            }
            ChannelEvent::Disconnected => {
                // The room replays every marker after a reconnect.
                tracing::info!("Presence disconnected, clearing markers");
                self.store.clear();
            }
            ChannelEvent::Error(e) => {
                tracing::warn!(error = %e, "Presence channel error");
            }
        }
        self.refresh_visitors();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use globe_common::{ConnectionId, Location, PEER_MARKER_SIZE, SELF_MARKER_SIZE};
    use globe_presence::{decode, PresenceMessage};
    use globe_renderer::{GlobeOptions, HeadlessSurface};

    fn app(self_id: &str) -> GlobeApp {
        GlobeApp::mount(
            GlobeOptions::default(),
            Box::new(HeadlessSurface::new()),
            ConnectionId::from(self_id),
        )
        .unwrap()
    }

    /// Feed a raw frame the way the channel would: decoded or dropped.
    fn feed(app: &mut GlobeApp, frame: &str) {
        if let Ok(message) = decode(frame) {
            app.handle_channel_event(ChannelEvent::Message(message));
        }
    }

    #[test]
    fn add_then_remove_updates_markers_and_count() {
        let mut app = app("me");
        feed(
            &mut app,
            r#"{"type":"add-marker","position":{"id":"abc","lat":10,"lng":20}}"#,
        );
        let markers = app.store.snapshot();
        assert_eq!(markers.len(), 1);
        assert_eq!(markers[0].location, Location::new(10.0, 20.0));
        assert_eq!(markers[0].size, PEER_MARKER_SIZE);
        assert_eq!(app.visitors(), 1);

        feed(&mut app, r#"{"type":"remove","id":"abc"}"#);
        assert!(app.store.is_empty());
        assert_eq!(app.visitors(), 0);
    }

    #[test]
    fn own_marker_is_larger() {
        let mut app = app("me");
        app.handle_channel_event(ChannelEvent::Message(PresenceMessage::add("me", 1.0, 2.0)));
        assert_eq!(app.store.get("me").unwrap().size, SELF_MARKER_SIZE);
    }

    #[test]
    fn malformed_frame_leaves_store_unchanged() {
        let mut app = app("me");
        feed(&mut app, r#"{"type":"add-marker","position":{"id":"a","lat":1,"lng":2}}"#);
        feed(&mut app, "not json");
        feed(&mut app, r#"{"type":"add-marker"}"#);
        assert_eq!(app.visitors(), 1);
        assert!(app.store.get("a").is_some());
    }

    #[test]
    fn duplicate_add_does_not_double_count() {
        let mut app = app("me");
        app.handle_channel_event(ChannelEvent::Message(PresenceMessage::add("a", 1.0, 2.0)));
        app.handle_channel_event(ChannelEvent::Message(PresenceMessage::add("a", 3.0, 4.0)));
        assert_eq!(app.visitors(), 1);
        assert_eq!(app.store.get("a").unwrap().location, Location::new(3.0, 4.0));
    }

    #[test]
    fn disconnect_clears_markers() {
        let mut app = app("me");
        app.handle_channel_event(ChannelEvent::Message(PresenceMessage::add("a", 1.0, 2.0)));
        app.handle_channel_event(ChannelEvent::Message(PresenceMessage::add("me", 0.0, 0.0)));
        app.handle_channel_event(ChannelEvent::Disconnected);
        assert_eq!(app.visitors(), 0);
        assert_eq!(app.shown_visitors, 0);
    }

    #[test]
    fn errors_and_connects_do_not_touch_store() {
        let mut app = app("me");
        app.handle_channel_event(ChannelEvent::Message(PresenceMessage::add("a", 1.0, 2.0)));
        app.handle_channel_event(ChannelEvent::Error("boom".into()));
        app.handle_channel_event(ChannelEvent::Connected);
        assert_eq!(app.visitors(), 1);
    }
}
