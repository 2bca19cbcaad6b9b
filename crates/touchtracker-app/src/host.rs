//! Host that logs the tracker's requests instead of driving a window.

use kurbo::Point;
use touchtracker_core::SurfaceHost;

/// Counts redraws and logs each context menu change.
#[derive(Debug, Default)]
pub struct LoggingHost {
    /// Total redraw requests.
    pub redraws: usize,
    /// Anchor of the visible context menu, if any.
    pub menu_anchor: Option<Point>,
}

impl LoggingHost {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SurfaceHost for LoggingHost {
    fn request_redraw(&mut self) {
        self.redraws += 1;
    }

    fn show_context_menu(&mut self, anchor: Point) {
        log::info!("Context menu [Delete] at ({:.1}, {:.1})", anchor.x, anchor.y);
        self.menu_anchor = Some(anchor);
    }

    fn hide_context_menu(&mut self) {
        log::info!("Context menu hidden");
        self.menu_anchor = None;
    }
}
