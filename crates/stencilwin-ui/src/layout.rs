//! Flow layout of child controls from declarative definitions.
//!
//! Definitions are placed left to right and wrap to a new line when the next
//! one would cross the parent's right padding. A spacer definition forces a
//! line break without creating a window.

use crate::Ui;
use crate::error::UiResult;
use crate::flags::WindowFlags;
use crate::window::{Procedure, WindowId};
use stencilwin_core::geometry::Rect;
use stencilwin_core::profiling::profile_function;

/// Inset from the parent's edges.
pub const WINDOW_PADDING: i32 = 4;
/// Gap between controls and between lines.
pub const LINE_PADDING: i32 = 5;
/// Height used when a definition leaves it at 0.
pub const CONTROL_HEIGHT: i32 = 10;

/// Width value meaning "fill the parent minus padding".
pub const FILL_WIDTH: i32 = -1;

/// Declarative description of one child control.
#[derive(Debug, Clone)]
pub struct WindowDef {
    /// `None` marks a line-break spacer.
    pub proc: Option<Procedure>,
    pub text: String,
    /// Control id assigned after creation.
    pub id: u32,
    pub w: i32,
    pub h: i32,
    pub flags: WindowFlags,
}

impl WindowDef {
    pub fn new(proc: Procedure, text: &str, id: u32, w: i32, h: i32) -> Self {
        Self {
            proc: Some(proc),
            text: text.to_owned(),
            id,
            w,
            h,
            flags: WindowFlags::NONE,
        }
    }

    pub fn space() -> Self {
        Self {
            proc: None,
            text: String::new(),
            id: 0,
            w: 0,
            h: 0,
            flags: WindowFlags::NONE,
        }
    }

    pub fn with_flags(mut self, flags: WindowFlags) -> Self {
        self.flags = flags;
        self
    }

    pub fn is_space(&self) -> bool {
        self.proc.is_none()
    }
}

impl Ui {
    /// Create one child from `def` at `frame`, assigning `def.id` as its id.
    ///
    /// Spacers create nothing and return `None`.
    pub fn create_window_from_def(
        &mut self,
        def: &WindowDef,
        frame: Rect,
        parent: WindowId,
    ) -> UiResult<Option<WindowId>> {
        let Some(proc) = def.proc.clone() else {
            return Ok(None);
        };
        let window = self.create_window(&def.text, def.flags, frame, Some(parent), proc, None)?;
        if let Some(w) = self.window_mut(window) {
            w.id = def.id;
        }
        Ok(Some(window))
    }

    /// Lay out and create `defs` as children of `parent`.
    pub fn load_window_children(&mut self, parent: WindowId, defs: &[WindowDef]) -> UiResult<Vec<WindowId>> {
        profile_function!();

        let parent_width = self.require(parent)?.frame.w;
        let mut x = WINDOW_PADDING;
        let mut y = WINDOW_PADDING;
        let mut created = Vec::with_capacity(defs.len());

        for def in defs {
            let w = if def.w == FILL_WIDTH {
                parent_width - WINDOW_PADDING * 2
            } else {
                def.w
            };
            let h = if def.h == 0 { CONTROL_HEIGHT } else { def.h };

            if def.is_space() || x + w > parent_width - WINDOW_PADDING {
                x = WINDOW_PADDING;
                y = self
                    .children(parent)
                    .iter()
                    .filter_map(|&c| self.window(c))
                    .map(|c| c.frame.bottom())
                    .fold(y, i32::max)
                    + LINE_PADDING;
            }

            let Some(window) = self.create_window_from_def(def, Rect::new(x, y, w, h), parent)? else {
                continue;
            };
            // Create handlers may grow the frame, so advance by the real width.
            x += self.window(window).map_or(w, |c| c.frame.w) + LINE_PADDING;
            created.push(window);
        }

        tracing::debug!(%parent, count = created.len(), "Loaded child windows");
        Ok(created)
    }
}
