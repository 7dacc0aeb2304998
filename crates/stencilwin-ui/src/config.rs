//! Window system configuration.

use stencilwin_core::geometry::Size;

/// Metrics and input tuning for a [`Ui`](crate::Ui).
///
/// All distances are logical pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct UiConfig {
    /// Logical screen size; the stencil pass and non-client painting cover it.
    pub screen: Size,
    pub titlebar_height: i32,
    pub toolbar_height: i32,
    pub statusbar_height: i32,
    /// Side of the square bottom-right resize grip.
    pub resize_handle: i32,
    pub control_button_width: i32,
    pub control_button_padding: i32,
    /// Horizontal distance between toolbar buttons.
    pub toolbar_spacing: i32,
    pub toolbar_icon_size: i32,
    /// Multiplier applied to wheel deltas before they reach a window.
    pub scroll_sensitivity: i32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            screen: Size::new(1440, 960),
            titlebar_height: 12,
            toolbar_height: 20,
            statusbar_height: 12,
            resize_handle: 8,
            control_button_width: 8,
            control_button_padding: 2,
            toolbar_spacing: 18,
            toolbar_icon_size: 16,
            scroll_sensitivity: 5,
        }
    }
}

impl UiConfig {
    /// Set the logical screen size.
    pub fn with_screen(mut self, width: i32, height: i32) -> Self {
        self.screen = Size::new(width, height);
        self
    }
}
