//! `GlobeApp` struct definition and frame entry point.

use globe_common::{ConnectionId, RendererError};
use globe_renderer::{GlobeBridge, GlobeOptions, GlobeSurface, MarkerStore};

/// Everything the host keeps alive while the globe is mounted.
pub struct GlobeApp {
    pub(super) store: MarkerStore,
    pub(super) bridge: GlobeBridge,
    /// Our own connection id; markers under it are drawn larger.
    pub(super) self_id: ConnectionId,
    /// Last visitor count reported to the log.
    pub(super) shown_visitors: usize,
}

impl GlobeApp {
    pub fn mount(
        options: GlobeOptions,
        surface: Box<dyn GlobeSurface>,
        self_id: ConnectionId,
    ) -> Result<Self, RendererError> {
        Ok(Self {
            store: MarkerStore::new(),
            bridge: GlobeBridge::new(options, surface)?,
            self_id,
            shown_visitors: 0,
        })
    }

    /// One animation frame.
    pub fn on_frame(&mut self) {
        self.bridge.on_render(&self.store);
    }

    /// Visitors currently on the globe, including ourselves.
    pub fn visitors(&self) -> usize {
        self.store.visitors()
    }

    pub fn frames(&self) -> u64 {
        self.bridge.frames()
    }

    /// Log the visitor count when it moved since the last call.
    pub(super) fn refresh_visitors(&mut self) {
        let visitors = self.store.visitors();
        if visitors != self.shown_visitors {
            tracing::info!(visitors, "Visitor count changed");
            self.shown_visitors = visitors;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use globe_renderer::HeadlessSurface;

    #[test]
    fn frames_draw_the_store() {
        let mut app = GlobeApp::mount(
            GlobeOptions::default(),
            Box::new(HeadlessSurface::new()),
            ConnectionId::from("me"),
        )
        .unwrap();
        app.store.upsert("me", 0.0, 0.0, true);
        app.on_frame();
        app.on_frame();
        assert_eq!(app.frames(), 2);
        assert_eq!(app.visitors(), 1);
    }

    #[test]
    fn zero_sized_globe_is_rejected() {
        let options = GlobeOptions {
            width: 0,
            ..GlobeOptions::default()
        };
        let result = GlobeApp::mount(
            options,
            Box::new(HeadlessSurface::new()),
            ConnectionId::new(),
        );
        assert!(matches!(result, Err(RendererError::InvalidSize { .. })));
    }
}
