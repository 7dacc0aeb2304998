//! Window records, handles and procedures.

use crate::Ui;
use crate::config::UiConfig;
use crate::flags::WindowFlags;
use crate::message::{Message, Reply, ToolbarButton};
use std::any::Any;
use std::fmt;
use std::rc::Rc;
use stencilwin_core::alloc::IndexSlot;
use stencilwin_core::geometry::Rect;
use stencilwin_core::math::IVec2;

/// Longest title or status bar text a window keeps, in characters.
pub const MAX_TEXT_LEN: usize = 63;

/// Generational handle to a window.
///
/// Handles outlive their windows safely: once a window is destroyed every
/// lookup through an old handle fails instead of reaching a reused slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WindowId(IndexSlot);

impl WindowId {
    pub(crate) fn from_slot(slot: IndexSlot) -> Self {
        Self(slot)
    }

    pub(crate) fn slot(self) -> IndexSlot {
        self.0
    }
}

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}v{}", self.0.index(), self.0.generation())
    }
}

/// Behavior attached to a window.
///
/// Returning [`Reply::Unhandled`] lets the core run its default behavior for
/// the message. Any closure with the matching signature is a procedure.
pub trait WindowProc {
    fn handle(&self, ui: &mut Ui, window: WindowId, msg: &mut Message) -> Reply;
}

impl<F> WindowProc for F
where
    F: Fn(&mut Ui, WindowId, &mut Message) -> Reply,
{
    fn handle(&self, ui: &mut Ui, window: WindowId, msg: &mut Message) -> Reply {
        self(ui, window, msg)
    }
}

/// Shared handle to a [`WindowProc`].
///
/// Procedures are compared by identity, which is how callers recognize which
/// kind of window they are looking at.
#[derive(Clone)]
pub struct Procedure(Rc<dyn WindowProc>);

impl Procedure {
    pub fn new(proc: impl WindowProc + 'static) -> Self {
        Self(Rc::new(proc))
    }

    /// Wrap a closure; its argument types are inferred from the signature.
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(&mut Ui, WindowId, &mut Message) -> Reply + 'static,
    {
        Self(Rc::new(f))
    }

    /// A procedure that leaves every message to the default behavior.
    pub fn passthrough() -> Self {
        Self::from_fn(|_, _, _| Reply::Unhandled)
    }

    pub fn ptr_eq(&self, other: &Procedure) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    pub fn call(&self, ui: &mut Ui, window: WindowId, msg: &mut Message) -> Reply {
        self.0.handle(ui, window, msg)
    }
}

impl fmt::Debug for Procedure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Procedure({:p})", Rc::as_ptr(&self.0) as *const ())
    }
}

/// A node in the window tree.
///
/// A window without a parent is top-level: it owns a stencil id, chrome and a
/// place in the z-order. Child frames are relative to the root's client area.
pub struct Window {
    pub frame: Rect,
    /// Stencil id for top-level windows, control id for children.
    pub id: u32,
    pub scroll: IVec2,
    pub(crate) flags: WindowFlags,
    pub(crate) proc: Procedure,
    pub(crate) child_id: u32,
    pub hovered: bool,
    pub editing: bool,
    /// Excluded from tab traversal and default hit testing.
    pub notabstop: bool,
    pub pressed: bool,
    pub value: bool,
    pub(crate) visible: bool,
    pub(crate) disabled: bool,
    pub(crate) title: String,
    pub(crate) statusbar_text: String,
    pub cursor_pos: i32,
    pub(crate) toolbar_buttons: Vec<ToolbarButton>,
    pub userdata: Option<Box<dyn Any>>,
    pub userdata2: Option<Box<dyn Any>>,
    pub(crate) parent: Option<WindowId>,
    pub(crate) children: Vec<WindowId>,
}

impl Window {
    pub(crate) fn new(
        id: u32,
        title: &str,
        flags: WindowFlags,
        frame: Rect,
        proc: Procedure,
        parent: Option<WindowId>,
    ) -> Self {
        Self {
            frame,
            id,
            scroll: IVec2::ZERO,
            flags,
            proc,
            child_id: 0,
            hovered: false,
            editing: false,
            notabstop: false,
            pressed: false,
            value: false,
            visible: !flags.contains(WindowFlags::HIDDEN),
            disabled: false,
            title: clamp_text(title),
            statusbar_text: String::new(),
            cursor_pos: 0,
            toolbar_buttons: Vec::new(),
            userdata: None,
            userdata2: None,
            parent,
            children: Vec::new(),
        }
    }

    pub fn flags(&self) -> WindowFlags {
        self.flags
    }

    pub fn procedure(&self) -> &Procedure {
        &self.proc
    }

    pub fn parent(&self) -> Option<WindowId> {
        self.parent
    }

    pub fn is_top_level(&self) -> bool {
        self.parent.is_none()
    }

    /// Children in creation order.
    pub fn children(&self) -> &[WindowId] {
        &self.children
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Replace the title, keeping at most [`MAX_TEXT_LEN`] characters.
    pub fn set_title(&mut self, title: &str) {
        self.title = clamp_text(title);
    }

    pub fn statusbar_text(&self) -> &str {
        &self.statusbar_text
    }

    pub fn toolbar_buttons(&self) -> &[ToolbarButton] {
        &self.toolbar_buttons
    }

    pub fn userdata<T: Any>(&self) -> Option<&T> {
        self.userdata.as_deref().and_then(|data| data.downcast_ref())
    }

    pub fn userdata_mut<T: Any>(&mut self) -> Option<&mut T> {
        self.userdata.as_deref_mut().and_then(|data| data.downcast_mut())
    }

    /// Height of the title bar plus the toolbar band.
    pub fn titlebar_height(&self, config: &UiConfig) -> i32 {
        let mut height = 0;
        if self.flags.has_title() {
            height += config.titlebar_height;
        }
        if self.flags.contains(WindowFlags::TOOLBAR) {
            height += config.toolbar_height;
        }
        height
    }

    pub fn statusbar_height(&self, config: &UiConfig) -> i32 {
        if self.flags.contains(WindowFlags::STATUS_BAR) {
            config.statusbar_height
        } else {
            0
        }
    }

    /// Baseline for title text and the close control.
    pub fn title_bar_y(&self, config: &UiConfig) -> i32 {
        self.frame.y + 2 - self.titlebar_height(config)
    }

    /// The frame grown to cover the title bar, toolbar and status bar.
    pub fn outer_frame(&self, config: &UiConfig) -> Rect {
        self.frame
            .extend_vertical(self.titlebar_height(config), self.statusbar_height(config))
    }
}

impl fmt::Debug for Window {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Window")
            .field("id", &self.id)
            .field("title", &self.title)
            .field("frame", &self.frame)
            .field("flags", &self.flags)
            .field("visible", &self.visible)
            .field("disabled", &self.disabled)
            .field("parent", &self.parent)
            .field("children", &self.children.len())
            .finish_non_exhaustive()
    }
}

pub(crate) fn clamp_text(text: &str) -> String {
    text.chars().take(MAX_TEXT_LEN).collect()
}
