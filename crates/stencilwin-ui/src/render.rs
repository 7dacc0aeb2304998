//! Drawing backend abstraction.
//!
//! The window system only issues fills, text, icons and stencil state
//! changes; a backend maps them onto a real renderer. [`NullBackend`] drops
//! everything and [`RecordingBackend`] keeps a log for inspection.

use crate::theme::Color;
use parking_lot::Mutex;
use std::sync::Arc;
use stencilwin_core::geometry::Rect;

pub trait RenderBackend {
    fn set_viewport(&mut self, rect: Rect);

    /// Orthographic projection mapping `left..right` and `top..bottom` onto the viewport.
    fn set_projection(&mut self, left: i32, top: i32, right: i32, bottom: i32);

    fn fill_rect(&mut self, color: Color, rect: Rect);

    fn draw_text(&mut self, text: &str, x: i32, y: i32, color: Color);

    fn draw_icon8(&mut self, icon: u32, x: i32, y: i32, color: Color);

    fn draw_icon16(&mut self, icon: u32, x: i32, y: i32, color: Color);

    /// Clear the stencil buffer to 0 and disable color writes.
    fn begin_stencil_pass(&mut self);

    /// Stamp `value` into the stencil buffer over `rect`.
    fn write_stencil(&mut self, value: u8, rect: Rect);

    /// Re-enable color writes.
    fn end_stencil_pass(&mut self);

    /// Only pass fragments whose stencil equals `value`.
    fn set_stencil_test(&mut self, value: u8);

    /// Submit pending work.
    fn flush(&mut self) {}
}

/// Backend that draws nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullBackend;

impl RenderBackend for NullBackend {
    fn set_viewport(&mut self, _rect: Rect) {}
    fn set_projection(&mut self, _left: i32, _top: i32, _right: i32, _bottom: i32) {}
    fn fill_rect(&mut self, _color: Color, _rect: Rect) {}
    fn draw_text(&mut self, _text: &str, _x: i32, _y: i32, _color: Color) {}
    fn draw_icon8(&mut self, _icon: u32, _x: i32, _y: i32, _color: Color) {}
    fn draw_icon16(&mut self, _icon: u32, _x: i32, _y: i32, _color: Color) {}
    fn begin_stencil_pass(&mut self) {}
    fn write_stencil(&mut self, _value: u8, _rect: Rect) {}
    fn end_stencil_pass(&mut self) {}
    fn set_stencil_test(&mut self, _value: u8) {}
}

/// One recorded backend call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawCall {
    Viewport(Rect),
    Projection {
        left: i32,
        top: i32,
        right: i32,
        bottom: i32,
    },
    FillRect {
        color: Color,
        rect: Rect,
    },
    Text {
        text: String,
        x: i32,
        y: i32,
        color: Color,
    },
    Icon8 {
        icon: u32,
        x: i32,
        y: i32,
    },
    Icon16 {
        icon: u32,
        x: i32,
        y: i32,
    },
    BeginStencil,
    WriteStencil {
        value: u8,
        rect: Rect,
    },
    EndStencil,
    StencilTest(u8),
    Flush,
}

/// Backend that records every call.
///
/// Clones share the same log, so a test can hand one clone to the
/// [`Ui`](crate::Ui) and inspect the other.
#[derive(Debug, Default, Clone)]
pub struct RecordingBackend {
    calls: Arc<Mutex<Vec<DrawCall>>>,
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<DrawCall> {
        self.calls.lock().clone()
    }

    pub fn clear(&self) {
        self.calls.lock().clear();
    }

    pub fn len(&self) -> usize {
        self.calls.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.calls.lock().is_empty()
    }

    pub fn count(&self, predicate: impl Fn(&DrawCall) -> bool) -> usize {
        self.calls.lock().iter().filter(|call| predicate(call)).count()
    }

    /// Stencil writes in the order they were issued.
    pub fn stencil_writes(&self) -> Vec<(u8, Rect)> {
        self.calls
            .lock()
            .iter()
            .filter_map(|call| match call {
                DrawCall::WriteStencil { value, rect } => Some((*value, *rect)),
                _ => None,
            })
            .collect()
    }

    /// Strings passed to `draw_text`.
    pub fn texts(&self) -> Vec<String> {
        self.calls
            .lock()
            .iter()
            .filter_map(|call| match call {
                DrawCall::Text { text, .. } => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: DrawCall) {
        self.calls.lock().push(call);
    }
}

impl RenderBackend for RecordingBackend {
    fn set_viewport(&mut self, rect: Rect) {
        self.record(DrawCall::Viewport(rect));
    }

    fn set_projection(&mut self, left: i32, top: i32, right: i32, bottom: i32) {
        self.record(DrawCall::Projection {
            left,
            top,
            right,
            bottom,
        });
    }

    fn fill_rect(&mut self, color: Color, rect: Rect) {
        self.record(DrawCall::FillRect { color, rect });
    }

    fn draw_text(&mut self, text: &str, x: i32, y: i32, color: Color) {
        self.record(DrawCall::Text {
            text: text.to_owned(),
            x,
            y,
            color,
        });
    }

    fn draw_icon8(&mut self, icon: u32, x: i32, y: i32, _color: Color) {
        self.record(DrawCall::Icon8 { icon, x, y });
    }

    fn draw_icon16(&mut self, icon: u32, x: i32, y: i32, _color: Color) {
        self.record(DrawCall::Icon16 { icon, x, y });
    }

    fn begin_stencil_pass(&mut self) {
        self.record(DrawCall::BeginStencil);
    }

    fn write_stencil(&mut self, value: u8, rect: Rect) {
        self.record(DrawCall::WriteStencil { value, rect });
    }

    fn end_stencil_pass(&mut self) {
        self.record(DrawCall::EndStencil);
    }

    fn set_stencil_test(&mut self, value: u8) {
        self.record(DrawCall::StencilTest(value));
    }

    fn flush(&mut self) {
        self.record(DrawCall::Flush);
    }
}
