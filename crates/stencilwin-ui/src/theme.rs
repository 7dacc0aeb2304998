//! Fixed chrome palette, packed as `0xAARRGGBB`.

pub type Color = u32;

/// Main panel / window background.
pub const PANEL_BG: Color = 0xff3c3c3c;
pub const PANEL_DARK_BG: Color = 0xff2c2c2c;
/// Top-left edge of beveled elements.
pub const LIGHT_EDGE: Color = 0xff7f7f7f;
/// Bottom-right edge of beveled elements.
pub const DARK_EDGE: Color = 0xff1a1a1a;
pub const FLARE: Color = 0xffcfcfcf;
pub const FOCUSED: Color = 0xff5ec4f3;

pub const TEXT_NORMAL: Color = 0xffc0c0c0;
pub const TEXT_DISABLED: Color = 0xff808080;
pub const TEXT_SUCCESS: Color = 0xff44ff44;

pub const STATUSBAR_BG: Color = 0xff2c2c2c;

/// Half-transparent panel tint drawn over disabled windows.
pub const fn disabled_overlay() -> Color {
    (PANEL_BG & 0x00ff_ffff) | 0x8000_0000
}
