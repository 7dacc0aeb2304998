//! Window tree operations.
//!
//! Top-level windows live in a back-to-front list and each holds one of the
//! 255 stencil ids. Children are numbered per parent in creation order and
//! their frames are relative to the root's client area.

use crate::Ui;
use crate::error::{UiError, UiResult};
use crate::flags::WindowFlags;
use crate::message::{Message, Payload};
use crate::window::{Procedure, Window, WindowId, clamp_text};
use stencilwin_core::geometry::Rect;
use stencilwin_core::math::ivec2;
use stencilwin_core::profiling::profile_function;

/// Highest id a top-level window can hold; 0 is the empty stencil.
pub const MAX_TOP_LEVEL_ID: u32 = 255;

impl Ui {
    /// Create a window and deliver its `Create` message.
    ///
    /// Top-level windows take the lowest free id in `1..=255`; children take
    /// their parent's next sequential id. The new window becomes the focused
    /// window without focus notifications.
    pub fn create_window(
        &mut self,
        title: &str,
        flags: WindowFlags,
        frame: Rect,
        parent: Option<WindowId>,
        proc: Procedure,
        init: Option<Payload>,
    ) -> UiResult<WindowId> {
        profile_function!();

        let id = match parent {
            Some(p) => {
                let pw = self.window_mut(p).ok_or(UiError::ParentNotFound(p))?;
                pw.child_id += 1;
                pw.child_id
            }
            None => self.allocate_top_level_id()?,
        };

        let window = WindowId::from_slot(
            self.windows
                .push(Window::new(id, title, flags, frame, proc, parent)),
        );

        match parent.and_then(|p| self.window_mut(p)) {
            Some(pw) => pw.children.push(window),
            None => self.top_level.push(window),
        }
        self.focused = Some(window);

        tracing::debug!(%window, id, title, ?flags, "Created window");

        self.send(window, Message::Create(init));
        self.post_refresh_stencil();
        if parent.is_some() {
            self.invalidate_window(window);
        }
        Ok(window)
    }

    fn allocate_top_level_id(&self) -> UiResult<u32> {
        let mut used = [false; MAX_TOP_LEVEL_ID as usize + 1];
        for w in self.top_level.iter().filter_map(|&t| self.window(t)) {
            if let Some(slot) = used.get_mut(w.id as usize) {
                *slot = true;
            }
        }
        (1..=MAX_TOP_LEVEL_ID)
            .find(|&id| !used[id as usize])
            .ok_or_else(|| {
                tracing::warn!("All {} top-level window ids are in use", MAX_TOP_LEVEL_ID);
                UiError::TooManyWindows
            })
    }

    /// Destroy `window` and its subtree.
    ///
    /// The window receives `Destroy` while still linked. Afterwards it loses
    /// focus, capture and tracking, its hooks and pending messages are
    /// dropped, and every handle to it goes stale.
    pub fn destroy_window(&mut self, window: WindowId) -> UiResult<()> {
        profile_function!();
        self.require(window)?;

        self.post_refresh_stencil();
        self.invalidate_overlaps(window);
        self.send(window, Message::Destroy);

        // The procedure may already have torn itself down.
        if !self.is_alive(window) {
            return Ok(());
        }

        if self.focused == Some(window) {
            self.set_focus(None);
        }
        if self.captured == Some(window) {
            self.set_capture(None);
        }
        if self.tracked == Some(window) {
            self.track_mouse(None);
        }
        self.pointer.forget(window);

        let w = self.require_mut(window)?;
        w.toolbar_buttons.clear();
        let parent = w.parent;
        let children = std::mem::take(&mut w.children);

        match parent.and_then(|p| self.window_mut(p)) {
            Some(pw) => pw.children.retain(|&c| c != window),
            None => self.top_level.retain(|&t| t != window),
        }

        self.hooks.remove_owner(window);
        self.queue.purge(window);

        for child in children {
            // Children may already be gone if a Destroy handler removed them.
            let _ = self.destroy_window(child);
        }

        self.windows.try_remove(window.slot());
        tracing::debug!(%window, "Destroyed window");
        Ok(())
    }

    /// Destroy every child of `window`.
    pub fn clear_window_children(&mut self, window: WindowId) -> UiResult<()> {
        let children = self.require(window)?.children.clone();
        for child in children {
            let _ = self.destroy_window(child);
        }
        if let Some(w) = self.window_mut(window) {
            w.child_id = 0;
        }
        Ok(())
    }

    /// Move the frame origin to `(x, y)`.
    pub fn move_window(&mut self, window: WindowId, x: i32, y: i32) -> UiResult<()> {
        self.require(window)?;
        self.post(window, Message::Resize);
        self.post_refresh_stencil();
        self.invalidate_overlaps(window);
        self.invalidate_window(window);

        let w = self.require_mut(window)?;
        w.frame.x = x;
        w.frame.y = y;
        Ok(())
    }

    /// Resize the frame. Non-positive dimensions are ignored.
    pub fn resize_window(&mut self, window: WindowId, width: i32, height: i32) -> UiResult<()> {
        self.require(window)?;
        self.post(window, Message::Resize);
        self.post_refresh_stencil();
        self.invalidate_overlaps(window);
        self.invalidate_window(window);

        let w = self.require_mut(window)?;
        if width > 0 {
            w.frame.w = width;
        }
        if height > 0 {
            w.frame.h = height;
        }
        Ok(())
    }

    /// Raise the root of `window` to the front of the top-level list.
    ///
    /// The root is repainted either way; `ALWAYS_IN_BACK` roots keep their
    /// position.
    pub fn move_to_top(&mut self, window: WindowId) {
        let root = self.get_root(window);
        let Some(flags) = self.window(root).map(Window::flags) else {
            return;
        };

        self.post_refresh_stencil();
        self.invalidate_window(root);

        if flags.contains(WindowFlags::ALWAYS_IN_BACK) {
            return;
        }
        if let Some(index) = self.top_level.iter().position(|&t| t == root) {
            self.top_level.remove(index);
            self.top_level.push(root);
        }
    }

    /// Show or hide `window`.
    ///
    /// Showing raises and focuses it. Hiding repaints what it covered and
    /// clears focus, capture and tracking if it held them.
    pub fn show_window(&mut self, window: WindowId, visible: bool) -> UiResult<()> {
        self.require(window)?;
        self.post_refresh_stencil();

        if visible {
            self.move_to_top(window);
            self.set_focus(Some(window));
        } else {
            self.invalidate_overlaps(window);
            if self.focused == Some(window) {
                self.set_focus(None);
            }
            if self.captured == Some(window) {
                self.set_capture(None);
            }
            if self.tracked == Some(window) {
                self.track_mouse(None);
            }
        }

        self.require_mut(window)?.visible = visible;
        self.post(window, Message::ShowWindow(visible));
        Ok(())
    }

    /// Enable or disable `window`. Disabling drops its focus.
    pub fn enable_window(&mut self, window: WindowId, enable: bool) -> UiResult<()> {
        self.require(window)?;
        if !enable && self.focused == Some(window) {
            self.set_focus(None);
        }
        self.require_mut(window)?.disabled = !enable;
        self.invalidate_window(window);
        Ok(())
    }

    /// Queue a repaint: `NcPaint` for top-level windows, then `Paint`.
    pub fn invalidate_window(&mut self, window: WindowId) {
        let Some(w) = self.window(window) else {
            return;
        };
        if w.parent.is_none() {
            self.post(window, Message::NcPaint);
        }
        self.post(window, Message::Paint);
    }

    /// Repaint every other visible top-level window that `window` overlaps.
    pub(crate) fn invalidate_overlaps(&mut self, window: WindowId) {
        let Some(area) = self.outer_screen_frame(window) else {
            return;
        };
        if !self.window(window).is_some_and(|w| w.visible) {
            return;
        }
        let overlapping: Vec<_> = self
            .top_level
            .iter()
            .copied()
            .filter(|&t| t != window)
            .filter(|&t| {
                self.window(t).is_some_and(|w| {
                    w.visible && w.outer_frame(&self.config).overlaps(&area)
                })
            })
            .collect();
        for t in overlapping {
            self.invalidate_window(t);
        }
    }

    /// Top-level window under the point, letting it refine the answer.
    ///
    /// Scans back to front over visible windows whose outer frame contains
    /// the point; an enabled match is sent `HitTest` in frame-local
    /// coordinates and may substitute a child. The last match wins.
    pub fn find_window_at(&mut self, x: i32, y: i32) -> Option<WindowId> {
        profile_function!();
        let mut found = None;
        for window in self.top_level.clone() {
            let Some(w) = self.window(window) else {
                continue;
            };
            if !w.visible || !w.outer_frame(&self.config).contains(x, y) {
                continue;
            }
            found = Some(window);
            if w.disabled {
                continue;
            }
            let mut msg = Message::HitTest {
                point: ivec2(x - w.frame.x, y - w.frame.y),
                result: found,
            };
            self.send_mut(window, &mut msg);
            if let Message::HitTest { result, .. } = msg {
                found = result;
            }
        }
        found
    }

    /// Follow parents up to the top-level window. Stale handles map to themselves.
    pub fn get_root(&self, window: WindowId) -> WindowId {
        let mut current = window;
        while let Some(parent) = self.parent(current) {
            current = parent;
        }
        current
    }

    /// Whether `window` is alive and still attached to the top-level list.
    pub fn is_window(&self, window: WindowId) -> bool {
        self.is_alive(window) && self.top_level.contains(&self.get_root(window))
    }

    /// Depth-first search of the subtree for a window with control id `id`.
    pub fn get_window_item(&self, window: WindowId, id: u32) -> Option<WindowId> {
        for &child in self.children(window) {
            if self.window(child).is_some_and(|c| c.id == id) {
                return Some(child);
            }
            if let Some(found) = self.get_window_item(child, id) {
                return Some(found);
            }
        }
        None
    }

    /// Set the text of the item with control id `id` and repaint it.
    pub fn set_window_item_text(&mut self, window: WindowId, id: u32, text: &str) -> UiResult<()> {
        let item = self
            .get_window_item(window, id)
            .ok_or(UiError::WindowNotFound(window))?;
        self.require_mut(item)?.title = clamp_text(text);
        self.invalidate_window(item);
        Ok(())
    }

    /// Frame in screen coordinates; children are offset by their root's
    /// position and scroll.
    pub fn screen_frame(&self, window: WindowId) -> Option<Rect> {
        let w = self.window(window)?;
        if w.parent.is_none() {
            return Some(w.frame);
        }
        let root = self.window(self.get_root(window))?;
        Some(w.frame.translate(
            root.frame.x - root.scroll.x,
            root.frame.y - root.scroll.y,
        ))
    }

    /// Title bar plus toolbar height of `window`, 0 for stale handles.
    pub fn titlebar_height(&self, window: WindowId) -> i32 {
        self.window(window)
            .map_or(0, |w| w.titlebar_height(&self.config))
    }

    pub fn window_title_bar_y(&self, window: WindowId) -> Option<i32> {
        self.window(window).map(|w| w.title_bar_y(&self.config))
    }
}
