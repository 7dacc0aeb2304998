//! Focus, mouse capture, hover tracking and tab traversal.
//!
//! At most one window holds each of the three roles. Every change notifies
//! the windows involved before the role moves.
//!
//! Tab order is a depth-first walk: a window's children come before the
//! window itself, then its later siblings, then the continuation of its
//! parent. Windows marked `notabstop` and hidden windows are skipped.

use crate::Ui;
use crate::message::Message;
use crate::window::WindowId;

impl Ui {
    pub fn focused(&self) -> Option<WindowId> {
        self.focused
    }

    pub fn captured(&self) -> Option<WindowId> {
        self.captured
    }

    pub fn tracked(&self) -> Option<WindowId> {
        self.tracked
    }

    /// Move keyboard focus to `window`.
    ///
    /// A no-op when it already has focus. Otherwise the old holder leaves
    /// text editing mode and is posted `KillFocus`; the new one is posted
    /// `SetFocus`. Both are repainted.
    pub fn set_focus(&mut self, window: Option<WindowId>) {
        if window == self.focused {
            return;
        }
        let window = window.filter(|&w| self.is_alive(w));
        let previous = self.focused;
        tracing::trace!(?previous, ?window, "Focus change");

        if let Some(old) = previous {
            self.post(old, Message::KillFocus { next: window });
            self.invalidate_window(old);
        }
        if let Some(new) = window {
            self.post(new, Message::SetFocus { previous });
            self.invalidate_window(new);
        }

        if let Some(w) = previous.and_then(|w| self.window_mut(w)) {
            w.editing = false;
        }
        self.focused = window;
    }

    /// Route mouse input to `window` regardless of position. Silent.
    pub fn set_capture(&mut self, window: Option<WindowId>) {
        self.captured = window.filter(|&w| self.is_alive(w));
    }

    /// Start tracking hover for `window`.
    ///
    /// The previously tracked window is sent `MouseLeave` synchronously and
    /// repainted.
    pub fn track_mouse(&mut self, window: Option<WindowId>) {
        if window == self.tracked {
            return;
        }
        let window = window.filter(|&w| self.is_alive(w));
        if let Some(old) = self.tracked {
            self.send(old, Message::MouseLeave { next: window });
            self.invalidate_window(old);
        }
        self.tracked = window;
    }

    /// Next tab stop after `window`.
    ///
    /// With `allow_current`, `window` itself is a candidate once its
    /// children have been considered, and the search never leaves
    /// `window`'s subtree or its later siblings. Without it, climbing to a
    /// parent re-enters the
    /// parent's children, so traversal cycles within the innermost parent
    /// that has a tab stop.
    pub fn next_tab_stop(&self, window: Option<WindowId>, allow_current: bool) -> Option<WindowId> {
        let mut climbed = Vec::new();
        self.tab_walk(window?, allow_current, &mut climbed)
    }

    fn tab_walk(
        &self,
        window: WindowId,
        allow_current: bool,
        climbed: &mut Vec<WindowId>,
    ) -> Option<WindowId> {
        let w = self.window(window)?;

        if let Some(&first) = w.children.first() {
            if let Some(found) = self.tab_walk(first, true, climbed) {
                return Some(found);
            }
        }
        if allow_current && w.visible && !w.notabstop {
            return Some(window);
        }
        if let Some(sibling) = self.next_sibling(window) {
            if let Some(found) = self.tab_walk(sibling, true, climbed) {
                return Some(found);
            }
        }

        // Only the starting window climbs; a searched subtree reports back.
        if allow_current {
            return None;
        }
        let parent = w.parent?;
        if climbed.contains(&parent) {
            return None;
        }
        climbed.push(parent);
        self.tab_walk(parent, false, climbed)
    }

    /// Tab stop whose successor is `window`.
    ///
    /// Walks forward from `window` until the walk returns to it. A top-level
    /// window the walk never comes back to resolves through its first tab
    /// stop instead. Bounded by the number of live windows.
    pub fn prev_tab_stop(&self, window: WindowId) -> Option<WindowId> {
        let w = self.window(window)?;
        if let Some(prev) = self.predecessor(window) {
            return Some(prev);
        }
        if w.parent.is_some() {
            return None;
        }
        let first = self.next_tab_stop(Some(window), false)?;
        self.predecessor(first)
    }

    fn predecessor(&self, target: WindowId) -> Option<WindowId> {
        let mut current = target;
        for _ in 0..=self.window_count() {
            let next = self.cycle_next(current)?;
            if next == target {
                return Some(current);
            }
            current = next;
        }
        None
    }

    /// Focus the next tab stop, wrapping to the first one.
    pub fn focus_next(&mut self) {
        let next = match self.focused {
            Some(current) => self.cycle_next(current),
            None => self.first_tab_stop(),
        };
        if next.is_some() {
            self.set_focus(next);
        }
    }

    /// Focus the previous tab stop.
    pub fn focus_prev(&mut self) {
        let prev = match self.focused {
            Some(current) => self.prev_tab_stop(current),
            None => self.first_tab_stop(),
        };
        if prev.is_some() {
            self.set_focus(prev);
        }
    }

    fn first_tab_stop(&self) -> Option<WindowId> {
        self.next_tab_stop(self.top_level.first().copied(), true)
    }

    fn cycle_next(&self, window: WindowId) -> Option<WindowId> {
        self.next_tab_stop(Some(window), false)
            .or_else(|| self.first_tab_stop())
    }

    pub(crate) fn next_sibling(&self, window: WindowId) -> Option<WindowId> {
        let siblings = match self.parent(window) {
            Some(parent) => self.children(parent),
            None => self.top_level.as_slice(),
        };
        let index = siblings.iter().position(|&s| s == window)?;
        siblings.get(index + 1).copied()
    }
}
