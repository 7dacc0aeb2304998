//! Window chrome drawing.
//!
//! The free functions are shared with widget procedures; `paint_non_client`
//! draws the frame, title bar, toolbar and status bar of a top-level window.

use crate::Ui;
use crate::flags::WindowFlags;
use crate::message::ToolbarButton;
use crate::render::RenderBackend;
use crate::stencil::stencil_value;
use crate::theme::{self, Color};
use crate::window::WindowId;
use stencilwin_core::geometry::Rect;
use stencilwin_core::profiling::profile_function;

/// Icon index of the close control in the 8px icon set.
pub const ICON8_CLOSE: u32 = 0;

/// One-pixel outline just outside `rect`.
pub fn draw_focused(r: &mut dyn RenderBackend, rect: Rect) {
    draw_outline(r, rect, theme::FOCUSED, theme::FOCUSED);
}

/// Raised border just outside `rect`: light top-left, dark bottom-right.
pub fn draw_bevel(r: &mut dyn RenderBackend, rect: Rect) {
    draw_outline(r, rect, theme::LIGHT_EDGE, theme::DARK_EDGE);
    r.fill_rect(theme::FLARE, Rect::new(rect.x - 1, rect.y - 1, 1, 1));
}

fn draw_outline(r: &mut dyn RenderBackend, rect: Rect, light: Color, dark: Color) {
    let Rect { x, y, w, h } = rect;
    r.fill_rect(light, Rect::new(x - 1, y - 1, w + 2, 1));
    r.fill_rect(light, Rect::new(x - 1, y - 1, 1, h + 2));
    r.fill_rect(dark, Rect::new(x + w, y, 1, h + 1));
    r.fill_rect(dark, Rect::new(x, y + h, w + 1, 1));
}

/// Push button face with `dx`/`dy` edge thickness.
pub fn draw_button(r: &mut dyn RenderBackend, rect: Rect, dx: i32, dy: i32, pressed: bool) {
    let Rect { x, y, w, h } = rect;
    let (outer, inner, face) = if pressed {
        (theme::DARK_EDGE, theme::LIGHT_EDGE, theme::PANEL_DARK_BG)
    } else {
        (theme::LIGHT_EDGE, theme::DARK_EDGE, theme::PANEL_BG)
    };
    r.fill_rect(outer, Rect::new(x - dx, y - dy, w + dx + dy, h + dx + dy));
    r.fill_rect(inner, Rect::new(x, y, w + dx, h + dy));
    r.fill_rect(face, rect);
    if pressed {
        r.fill_rect(theme::FLARE, Rect::new(x + w, y + h, dx, dy));
    } else {
        r.fill_rect(theme::FLARE, Rect::new(x - dx, y - dy, dx, dy));
    }
}

struct Chrome {
    id: u32,
    frame: Rect,
    flags: WindowFlags,
    title: String,
    statusbar_text: String,
    toolbar_buttons: Vec<ToolbarButton>,
    titlebar_height: i32,
    title_bar_y: i32,
    focused: bool,
}

impl Ui {
    /// Default `NcPaint`: panel, title bar, toolbar and status bar.
    pub(crate) fn paint_non_client(&mut self, window: WindowId) {
        profile_function!();

        let Some(w) = self.window(window) else {
            return;
        };
        let chrome = Chrome {
            id: w.id,
            frame: w.frame,
            flags: w.flags,
            title: w.title.clone(),
            statusbar_text: w.statusbar_text.clone(),
            toolbar_buttons: w.toolbar_buttons.clone(),
            titlebar_height: w.titlebar_height(&self.config),
            title_bar_y: w.title_bar_y(&self.config),
            focused: self.focused == Some(window),
        };

        let screen = self.screen_rect();
        let config = self.config.clone();
        let r = self.renderer.as_mut();
        r.set_stencil_test(stencil_value(chrome.id));
        r.set_viewport(screen);
        r.set_projection(0, 0, screen.w, screen.h);

        if !chrome.flags.contains(WindowFlags::TRANSPARENT) {
            draw_panel(r, &chrome, config.resize_handle);
        }

        if chrome.flags.has_title() {
            let Rect { x, y, w, .. } = chrome.frame;
            let t = chrome.titlebar_height;
            r.fill_rect(theme::PANEL_DARK_BG, Rect::new(x, y - t, w, t));
            let close_x = x + w - config.control_button_width - config.control_button_padding;
            r.draw_icon8(ICON8_CLOSE, close_x, chrome.title_bar_y, theme::TEXT_NORMAL);
            r.draw_text(&chrome.title, x + 2, chrome.title_bar_y, theme::TEXT_NORMAL);
        }

        if chrome.flags.contains(WindowFlags::TOOLBAR) {
            let t = config.toolbar_height;
            let band = Rect::new(
                chrome.frame.x + 1,
                chrome.frame.y - t + 1,
                chrome.frame.w - 2,
                t - 2,
            );
            draw_bevel(r, band);
            r.fill_rect(theme::PANEL_BG, band);
            for (i, button) in chrome.toolbar_buttons.iter().enumerate() {
                let color = if button.active {
                    theme::TEXT_SUCCESS
                } else {
                    theme::TEXT_NORMAL
                };
                let left = band.x + i as i32 * config.toolbar_spacing;
                r.draw_icon16(button.icon, left + 2, band.y + 2, theme::DARK_EDGE);
                r.draw_icon16(button.icon, left + 1, band.y + 1, color);
            }
        }

        if chrome.flags.contains(WindowFlags::STATUS_BAR) {
            let Rect { x, y, w, h } = chrome.frame;
            r.fill_rect(
                theme::STATUSBAR_BG,
                Rect::new(x, y + h, w, config.statusbar_height),
            );
            r.draw_text(&chrome.statusbar_text, x + 2, y + h + 2, theme::TEXT_NORMAL);
        }
    }
}

fn draw_panel(r: &mut dyn RenderBackend, chrome: &Chrome, grip: i32) {
    let t = chrome.titlebar_height;
    let Rect { x, w, .. } = chrome.frame;
    let y = chrome.frame.y - t;
    let h = chrome.frame.h + t;
    let outline = Rect::new(x, y, w, h);

    if chrome.focused {
        draw_focused(r, outline);
    } else {
        draw_bevel(r, outline);
    }
    if !chrome.flags.contains(WindowFlags::NO_RESIZE) {
        r.fill_rect(theme::LIGHT_EDGE, Rect::new(x + w, y + h - grip + 1, 1, grip));
        r.fill_rect(theme::LIGHT_EDGE, Rect::new(x + w - grip + 1, y + h, grip, 1));
    }
    if !chrome.flags.contains(WindowFlags::NO_FILL) {
        r.fill_rect(theme::PANEL_BG, outline);
    }
}
