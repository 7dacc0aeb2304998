//! Routing platform input to windows.
//!
//! Mouse positions arrive in logical screen coordinates. A press on a title
//! bar starts a drag, a press on the bottom-right grip starts a resize, and
//! everything else is delivered to the captured window or the window under
//! the pointer in that window's local coordinates.

use crate::Ui;
use crate::flags::WindowFlags;
use crate::message::{Key, Message};
use crate::window::WindowId;
use stencilwin_core::geometry::Rect;
use stencilwin_core::math::IVec2;
use stencilwin_core::profiling::profile_function;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// A platform event, already scaled to logical coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    Quit,
    TextInput(String),
    KeyDown { key: Key, shift: bool },
    KeyUp { key: Key },
    JoyAxis { axis: u8, value: i16 },
    JoyButtonDown(u32),
    JoyButtonUp(u32),
    MouseMove { pos: IVec2, delta: IVec2 },
    /// Raw wheel deltas; scaled by the configured sensitivity on delivery.
    Wheel { pos: IVec2, dx: i32, dy: i32 },
    MouseDown { pos: IVec2, button: MouseButton },
    MouseUp { pos: IVec2, button: MouseButton },
}

/// In-progress title bar drag or grip resize.
#[derive(Debug, Default)]
pub(crate) struct PointerState {
    pub(crate) dragging: Option<WindowId>,
    pub(crate) resizing: Option<WindowId>,
    /// Pointer offset from the dragged frame's origin.
    pub(crate) drag_anchor: IVec2,
}

impl PointerState {
    pub(crate) fn forget(&mut self, window: WindowId) {
        if self.dragging == Some(window) {
            self.dragging = None;
        }
        if self.resizing == Some(window) {
            self.resizing = None;
        }
    }
}

impl Ui {
    pub fn dragging(&self) -> Option<WindowId> {
        self.pointer.dragging
    }

    pub fn resizing(&self) -> Option<WindowId> {
        self.pointer.resizing
    }

    /// Route one platform event.
    pub fn dispatch_input(&mut self, event: InputEvent) {
        profile_function!();
        match event {
            InputEvent::Quit => self.quit(),
            InputEvent::TextInput(text) => {
                if let Some(focused) = self.focused {
                    self.send(focused, Message::TextInput(text));
                }
            }
            InputEvent::KeyDown { key, shift } => {
                let Some(focused) = self.focused else {
                    return;
                };
                let handled = self.send(focused, Message::KeyDown(key)).is_handled();
                if !handled && key == Key::TAB {
                    if shift {
                        self.focus_prev();
                    } else {
                        self.focus_next();
                    }
                }
            }
            InputEvent::KeyUp { key } => self.send_to_focused(Message::KeyUp(key)),
            InputEvent::JoyAxis { axis, value } => {
                self.send_to_focused(Message::JoyAxisMotion { axis, value })
            }
            InputEvent::JoyButtonDown(button) => {
                self.send_to_focused(Message::JoyButtonDown(button))
            }
            InputEvent::JoyButtonUp(button) => self.send_to_focused(Message::JoyButtonUp(button)),
            InputEvent::MouseMove { pos, delta } => self.pointer_moved(pos, delta),
            InputEvent::Wheel { pos, dx, dy } => {
                let Some(window) = self.pointer_target(pos) else {
                    return;
                };
                if self.window(window).is_some_and(|w| w.disabled) {
                    return;
                }
                let sensitivity = self.config.scroll_sensitivity;
                self.send(
                    window,
                    Message::Wheel {
                        dx: -dx * sensitivity,
                        dy: dy * sensitivity,
                    },
                );
            }
            InputEvent::MouseDown { pos, button } => self.pointer_pressed(pos, button),
            InputEvent::MouseUp { pos, button } => self.pointer_released(pos, button),
        }
    }

    fn send_to_focused(&mut self, msg: Message) {
        if let Some(focused) = self.focused {
            self.send(focused, msg);
        }
    }

    fn pointer_target(&mut self, pos: IVec2) -> Option<WindowId> {
        match self.captured {
            Some(captured) => Some(captured),
            None => self.find_window_at(pos.x, pos.y),
        }
    }

    /// Screen point in the window's client coordinates, including scroll.
    fn local_point(&self, window: WindowId, pos: IVec2) -> IVec2 {
        match (self.screen_frame(window), self.window(window)) {
            (Some(frame), Some(w)) => pos - frame.origin() + w.scroll,
            _ => pos,
        }
    }

    fn pointer_moved(&mut self, pos: IVec2, delta: IVec2) {
        if let Some(dragged) = self.pointer.dragging {
            let origin = pos - self.pointer.drag_anchor;
            let _ = self.move_window(dragged, origin.x, origin.y);
        } else if let Some(resized) = self.pointer.resizing {
            if let Some(frame) = self.window(resized).map(|w| w.frame) {
                let _ = self.resize_window(resized, pos.x - frame.x, pos.y - frame.y);
            }
        } else if let Some(window) = self.pointer_target(pos) {
            let enabled = self.window(window).is_some_and(|w| !w.disabled);
            let local = self.local_point(window, pos);
            let owns_input = self.captured == Some(window) || self.focused == Some(window);
            if enabled && local.y >= 0 && owns_input {
                self.send(window, Message::MouseMove { pos: local, delta });
            }
        }

        if let Some(tracked) = self.tracked {
            let inside = self
                .screen_frame(tracked)
                .is_some_and(|frame| frame.contains_point(pos));
            if !inside {
                self.track_mouse(None);
            }
        }
    }

    fn pointer_pressed(&mut self, pos: IVec2, button: MouseButton) {
        let Some(window) = self.pointer_target(pos) else {
            return;
        };
        let Some(w) = self.window(window) else {
            return;
        };
        if w.disabled {
            return;
        }
        let (frame, flags, top_level) = (w.frame, w.flags, w.parent.is_none());

        if top_level {
            self.move_to_top(window);
        } else {
            self.set_focus(Some(window));
        }

        let local = self.local_point(window, pos);
        let grip = self.config.resize_handle;
        let captured = self.captured == Some(window);
        let offset = pos - frame.origin();

        if top_level
            && !captured
            && !flags.contains(WindowFlags::NO_RESIZE)
            && offset.x >= frame.w - grip
            && offset.y >= frame.h - grip
        {
            tracing::trace!(%window, "Resize started");
            self.pointer.resizing = Some(window);
        } else if top_level && !captured && pos.y < frame.y {
            tracing::trace!(%window, "Drag started");
            self.pointer.dragging = Some(window);
            self.pointer.drag_anchor = pos - frame.origin();
        } else if self.focused == Some(window) {
            let make = match button {
                MouseButton::Left => Message::LButtonDown,
                MouseButton::Right => Message::RButtonDown,
                MouseButton::Middle => return,
            };
            if !self.route_to_child(window, local, make) {
                self.send(window, make(local));
            }
        }
    }

    fn pointer_released(&mut self, pos: IVec2, button: MouseButton) {
        if let Some(dragged) = self.pointer.dragging.take() {
            self.finish_drag(dragged, pos, button);
            return;
        }
        if let Some(resized) = self.pointer.resizing.take() {
            self.set_focus(Some(resized));
            return;
        }

        let Some(window) = self.pointer_target(pos) else {
            return;
        };
        if self.window(window).is_none_or(|w| w.disabled) {
            return;
        }
        self.set_focus(Some(window));

        let in_client = self
            .screen_frame(window)
            .is_some_and(|frame| pos.y >= frame.y);
        if in_client || self.captured == Some(window) {
            let make = match button {
                MouseButton::Left => Message::LButtonUp,
                MouseButton::Right => Message::RButtonUp,
                MouseButton::Middle => return,
            };
            let local = self.local_point(window, pos);
            if !self.route_to_child(window, local, make) {
                self.send(window, make(local));
            }
        } else if button == MouseButton::Left {
            self.send(window, Message::NcLButtonUp(pos));
        }
    }

    fn finish_drag(&mut self, window: WindowId, pos: IVec2, button: MouseButton) {
        let Some(w) = self.window(window) else {
            return;
        };
        let (frame, flags) = (w.frame, w.flags);
        let config = &self.config;
        let title_bar = Rect::new(
            frame.x,
            frame.y - w.titlebar_height(config),
            frame.w,
            config.titlebar_height,
        );
        // Integer division puts the close control within one button width
        // of its anchor.
        let slot = (frame.right() - config.control_button_padding - pos.x)
            / config.control_button_width;

        if flags.has_title() && slot == 0 && title_bar.contains_point(pos) {
            tracing::debug!(%window, "Close control released");
            if flags.contains(WindowFlags::DIALOG) {
                let _ = self.end_dialog(window, -1);
            } else {
                let _ = self.show_window(window, false);
            }
            return;
        }

        if button == MouseButton::Left {
            self.send(window, Message::NcLButtonUp(pos));
        }
        self.set_focus(Some(window));
    }

    /// Offer a client press or release to the child under `local`.
    fn route_to_child(
        &mut self,
        window: WindowId,
        local: IVec2,
        make: fn(IVec2) -> Message,
    ) -> bool {
        let children = self.children(window).to_vec();
        for child in children {
            let hit = self
                .window(child)
                .is_some_and(|c| c.visible && c.frame.contains_point(local));
            if hit && self.send(child, make(local)).is_handled() {
                return true;
            }
        }
        false
    }
}
