//! Modal dialogs.

use crate::Ui;
use crate::error::UiResult;
use crate::flags::WindowFlags;
use crate::message::Payload;
use crate::window::{Procedure, WindowId};
use stencilwin_core::geometry::Rect;
use stencilwin_core::profiling;

impl Ui {
    /// Run a modal dialog until it is closed or the system quits.
    ///
    /// `parent` is disabled for the duration. Each iteration calls `pump`
    /// to feed input and then flushes the queue. Returns the code passed to
    /// [`end_dialog`](Ui::end_dialog), or 0 if the dialog closed any other
    /// way.
    pub fn show_dialog(
        &mut self,
        title: &str,
        frame: Rect,
        parent: Option<WindowId>,
        proc: Procedure,
        init: Option<Payload>,
        mut pump: impl FnMut(&mut Ui),
    ) -> UiResult<i32> {
        self.dialog_result = 0;
        let dialog = self.create_window(title, WindowFlags::DIALOG_GROUP, frame, None, proc, init)?;
        tracing::debug!(%dialog, title, "Dialog opened");

        if let Some(parent) = parent {
            let _ = self.enable_window(parent, false);
        }
        self.show_window(dialog, true)?;

        while self.running && self.is_window(dialog) {
            pump(self);
            self.flush();
            profiling::new_frame();
        }

        if let Some(parent) = parent {
            let _ = self.enable_window(parent, true);
        }
        tracing::debug!(code = self.dialog_result, "Dialog closed");
        Ok(self.dialog_result)
    }

    /// Record `code` as the dialog result and destroy the dialog.
    pub fn end_dialog(&mut self, dialog: WindowId, code: i32) -> UiResult<()> {
        self.dialog_result = code;
        self.destroy_window(dialog)
    }
}
