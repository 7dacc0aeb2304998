//! Stencil clipping.
//!
//! Each visible top-level window stamps its id over its outer frame, back to
//! front, so the front-most window owns every pixel it covers. Client and
//! non-client painting then test against the root's id.

use crate::Ui;
use crate::message::Message;
use crate::window::WindowId;
use stencilwin_core::geometry::Rect;
use stencilwin_core::profiling::profile_function;

/// Stencil value for a window id. Top-level ids always fit in 8 bits.
#[inline]
pub fn stencil_value(id: u32) -> u8 {
    (id & 0xff) as u8
}

impl Ui {
    /// Rebuild the stencil buffer from the current z-order.
    pub fn repaint_stencil(&mut self) {
        profile_function!();

        let screen = self.screen_rect();
        self.renderer.set_viewport(screen);
        self.renderer.set_projection(0, 0, screen.w, screen.h);
        self.renderer.begin_stencil_pass();

        for window in self.top_level.clone() {
            if self.window(window).is_some_and(|w| w.visible) {
                self.send(window, Message::PaintStencil);
            }
        }

        self.renderer.end_stencil_pass();
        self.stencil_passes += 1;
        tracing::trace!(pass = self.stencil_passes, "Stencil rebuilt");
    }

    /// Default `PaintStencil`: stamp the root id over the outer frame grown
    /// by one pixel.
    pub fn paint_window_stencil(&mut self, window: WindowId) {
        let root = self.get_root(window);
        let (Some(area), Some(r)) = (self.outer_screen_frame(window), self.window(root)) else {
            return;
        };
        let value = stencil_value(r.id);
        self.renderer.write_stencil(value, area.inflate(1));
    }

    /// Number of completed stencil rebuilds.
    pub fn stencil_passes(&self) -> u64 {
        self.stencil_passes
    }

    pub(crate) fn outer_screen_frame(&self, window: WindowId) -> Option<Rect> {
        let frame = self.screen_frame(window)?;
        let w = self.window(window)?;
        Some(frame.extend_vertical(
            w.titlebar_height(&self.config),
            w.statusbar_height(&self.config),
        ))
    }
}
