//! Window attribute flags.

use bitflags::bitflags;

bitflags! {
    /// Attributes fixed at window creation.
    ///
    /// The bit positions are part of the public contract: applications and
    /// serialized window definitions refer to them by value.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct WindowFlags: u32 {
        /// No changes from the defaults.
        const NONE           = 0;

        // Chrome

        /// No title bar (and no close control).
        const NO_TITLE       = 1 << 0;
        /// Skip the panel background and border.
        const TRANSPARENT    = 1 << 1;
        /// Wheel input scrolls vertically.
        const VSCROLL        = 1 << 2;
        /// Wheel input scrolls horizontally.
        const HSCROLL        = 1 << 3;
        /// No bottom-right resize handle.
        const NO_RESIZE      = 1 << 4;
        /// Draw the border but not the panel fill.
        const NO_FILL        = 1 << 5;

        // Stacking

        const ALWAYS_ON_TOP  = 1 << 6;
        /// Pinned at its position in the top-level list; never raised.
        const ALWAYS_IN_BACK = 1 << 7;
        /// Created invisible.
        const HIDDEN         = 1 << 8;
        /// The tray does not list this window.
        const NO_TRAY_BUTTON = 1 << 9;
        /// Closing ends the dialog instead of hiding the window.
        const DIALOG         = 1 << 10;

        // Extra non-client bands

        /// A toolbar band sits between the title bar and the client area.
        const TOOLBAR        = 1 << 11;
        /// A status bar band sits below the client area.
        const STATUS_BAR     = 1 << 12;
    }
}

impl WindowFlags {
    /// Flags that enable wheel scrolling on either axis.
    pub const SCROLL_GROUP: Self = Self::VSCROLL.union(Self::HSCROLL);

    /// Flags applied to windows created by `show_dialog`.
    pub const DIALOG_GROUP: Self = Self::VSCROLL
        .union(Self::DIALOG)
        .union(Self::NO_TRAY_BUTTON);

    #[inline]
    pub fn has_title(&self) -> bool {
        !self.contains(Self::NO_TITLE)
    }

    #[inline]
    pub fn scrolls(&self) -> bool {
        self.intersects(Self::SCROLL_GROUP)
    }
}
