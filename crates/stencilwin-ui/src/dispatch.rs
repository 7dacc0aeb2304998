//! Synchronous and deferred message delivery.
//!
//! `send` calls the hooks for the message kind, then core pre-processing,
//! then the window's procedure. When the procedure passes, the default
//! behavior runs before core post-processing.
//!
//! `post` stores the message in the coalescing queue. `flush` delivers what
//! was pending when it started plus one round of messages posted while
//! delivering.

use crate::Ui;
use crate::flags::WindowFlags;
use crate::hooks::HookId;
use crate::message::{Dispatch, Message, MessageKind, Reply};
use crate::queue::{PostedMessage, Target};
use crate::stencil::stencil_value;
use crate::theme;
use crate::window::{WindowId, clamp_text};
use std::rc::Rc;
use stencilwin_core::geometry::Rect;
use stencilwin_core::profiling::{profile_function, profile_scope};

impl Ui {
    /// Deliver `msg` to `window` immediately.
    pub fn send(&mut self, window: WindowId, msg: Message) -> Dispatch {
        let mut msg = msg;
        self.send_mut(window, &mut msg)
    }

    /// Like [`send`](Ui::send), leaving the message readable afterwards so
    /// out-fields such as the hit test result can be inspected.
    pub fn send_mut(&mut self, window: WindowId, msg: &mut Message) -> Dispatch {
        profile_function!();

        if !self.is_alive(window) {
            tracing::trace!(%window, kind = ?msg.kind(), "send to stale window");
            return Dispatch::NoTarget;
        }

        self.run_hooks(window, msg);

        // A hook may have destroyed the target.
        let Some(proc) = self.window(window).map(|w| w.proc.clone()) else {
            return Dispatch::NoTarget;
        };

        self.before_procedure(window, msg);

        let dispatch = match proc.call(self, window, msg) {
            Reply::Handled(value) => Dispatch::Handled(value),
            Reply::Unhandled => {
                self.default_procedure(window, msg);
                Dispatch::Defaulted
            }
        };

        self.after_procedure(window, msg);
        dispatch
    }

    /// Queue `msg` for `window`, replacing any pending message of the same kind.
    pub fn post(&mut self, window: WindowId, msg: Message) {
        if !self.is_alive(window) {
            tracing::trace!(%window, kind = ?msg.kind(), "post to stale window ignored");
            return;
        }
        self.queue.push(Target::Window(window), msg);
    }

    /// Queue a screen-wide stencil rebuild. Repeated requests coalesce.
    pub fn post_refresh_stencil(&mut self) {
        self.queue.push(Target::Screen, Message::RefreshStencil);
    }

    /// Deliver pending messages.
    ///
    /// Messages posted while flushing are delivered in the same call, but
    /// only for one extra round; anything posted during that round waits for
    /// the next flush.
    pub fn flush(&mut self) {
        profile_function!();

        let pending = self.queue.len();
        self.drain(pending);

        let reposted = self.queue.len();
        if reposted > 0 {
            self.drain(reposted);
        }

        self.renderer.flush();
    }

    fn drain(&mut self, count: usize) {
        profile_scope!("drain");
        for _ in 0..count {
            match self.queue.pop() {
                None => break,
                Some(None) => continue,
                Some(Some(posted)) => self.deliver(posted),
            }
        }
    }

    fn deliver(&mut self, posted: PostedMessage) {
        self.queue.record_delivery();
        match (posted.target, posted.message) {
            (_, Message::RefreshStencil) => self.repaint_stencil(),
            (Target::Window(window), message) => {
                self.send(window, message);
            }
            (Target::Screen, message) => {
                tracing::warn!(kind = ?message.kind(), "screen target only accepts stencil refreshes");
            }
        }
    }

    /// Observe every message of `kind` before its target's procedure.
    ///
    /// Hooks with an `owner` are removed when that window is destroyed.
    pub fn register_hook(
        &mut self,
        kind: MessageKind,
        owner: Option<WindowId>,
        hook: impl Fn(&mut Ui, WindowId, &Message) + 'static,
    ) -> HookId {
        tracing::debug!(?kind, ?owner, "Registering hook");
        self.hooks.register(kind, owner, Rc::new(hook))
    }

    pub fn deregister_hook(&mut self, hook: HookId) -> bool {
        self.hooks.deregister(hook)
    }

    fn run_hooks(&mut self, window: WindowId, msg: &Message) {
        for hook in self.hooks.matching(msg.kind()) {
            hook(self, window, msg);
        }
    }

    fn before_procedure(&mut self, window: WindowId, msg: &mut Message) {
        match msg {
            Message::NcPaint => self.paint_non_client(window),
            Message::Paint => self.prepare_client_paint(window),
            Message::StatusBar(text) => {
                if let Some(w) = self.window_mut(window) {
                    w.statusbar_text = clamp_text(text);
                }
                self.invalidate_window(window);
            }
            Message::AddToolbarButtons(buttons) => {
                if let Some(w) = self.window_mut(window) {
                    w.toolbar_buttons = buttons.clone();
                }
                self.invalidate_window(window);
            }
            _ => {}
        }
    }

    fn default_procedure(&mut self, window: WindowId, msg: &mut Message) {
        let Some(w) = self.window(window) else {
            return;
        };

        match msg {
            Message::Paint => {
                let children: Vec<_> = w.children.clone();
                for child in children {
                    if self.window(child).is_some_and(|c| c.visible) {
                        self.send(child, Message::Paint);
                    }
                }
            }
            Message::Wheel { dx, dy } => {
                let flags = w.flags;
                if !flags.scrolls() {
                    return;
                }
                let (dx, dy) = (*dx, *dy);
                let Some(w) = self.window_mut(window) else {
                    return;
                };
                let before = w.scroll;
                if flags.contains(WindowFlags::HSCROLL) {
                    w.scroll.x = (w.scroll.x + dx).min(0);
                }
                if flags.contains(WindowFlags::VSCROLL) {
                    w.scroll.y = (w.scroll.y - dy).max(0);
                }
                if w.scroll != before {
                    self.invalidate_window(window);
                }
            }
            Message::PaintStencil => self.paint_window_stencil(window),
            Message::HitTest { point, result } => {
                for &child in &w.children {
                    let Some(c) = self.window(child) else {
                        continue;
                    };
                    if c.visible && !c.notabstop && c.frame.contains_point(*point) {
                        *result = Some(child);
                    }
                }
            }
            Message::NcLButtonUp(pos) => {
                if !w.flags.contains(WindowFlags::TOOLBAR) {
                    return;
                }
                let config = &self.config;
                let x = w.frame.x + 2;
                let y = w.frame.y - config.toolbar_height + 2;
                let size = config.toolbar_icon_size;
                let hit = w.toolbar_buttons.iter().enumerate().find_map(|(i, button)| {
                    let left = x + i as i32 * config.toolbar_spacing;
                    let bounds = Rect::new(left, y, size, size);
                    bounds.contains_point(*pos).then_some(button.ident)
                });
                if let Some(ident) = hit {
                    tracing::debug!(%window, ident, "Toolbar button clicked");
                    self.send(window, Message::ToolbarButtonClick { ident });
                }
            }
            _ => {}
        }
    }

    fn after_procedure(&mut self, window: WindowId, msg: &Message) {
        if !matches!(msg, Message::Paint) {
            return;
        }
        let Some(w) = self.window(window) else {
            return;
        };
        if !w.disabled {
            return;
        }
        let Some(frame) = self.screen_frame(window) else {
            return;
        };
        let screen = self.screen_rect();
        self.renderer.set_viewport(screen);
        self.renderer.set_projection(0, 0, screen.w, screen.h);
        self.renderer.fill_rect(theme::disabled_overlay(), frame);
    }

    /// Clip and project client painting to the window's root.
    fn prepare_client_paint(&mut self, window: WindowId) {
        let root = self.get_root(window);
        let Some(r) = self.window(root) else {
            return;
        };
        let (frame, scroll, value) = (r.frame, r.scroll, stencil_value(r.id));
        self.renderer.set_stencil_test(value);
        self.renderer.set_viewport(frame);
        self.renderer
            .set_projection(scroll.x, scroll.y, frame.w + scroll.x, frame.h + scroll.y);
    }
}
