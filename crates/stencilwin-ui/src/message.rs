//! Message kinds, payloads and dispatch results.
//!
//! A [`Message`] is what a window procedure receives. Every message maps to a
//! numeric [`MessageKind`]; the kind is what hooks subscribe to and what the
//! deferred queue coalesces on. Kinds below [`MessageKind::USER`] belong to
//! the core, kinds at or above it belong to applications and widgets.

use crate::window::WindowId;
use std::any::Any;
use std::fmt;
use stencilwin_core::math::IVec2;

/// Numeric message kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MessageKind(pub u32);

impl MessageKind {
    pub const CREATE: Self = Self(0);
    pub const DESTROY: Self = Self(1);
    pub const SHOW_WINDOW: Self = Self(2);
    pub const NC_PAINT: Self = Self(3);
    pub const NC_LBUTTON_UP: Self = Self(4);
    pub const PAINT: Self = Self(5);
    /// Reserved: intercepted by the flush loop, never delivered to a window.
    pub const REFRESH_STENCIL: Self = Self(6);
    pub const PAINT_STENCIL: Self = Self(7);
    pub const SET_FOCUS: Self = Self(8);
    pub const KILL_FOCUS: Self = Self(9);
    pub const HIT_TEST: Self = Self(10);
    pub const COMMAND: Self = Self(11);
    pub const TEXT_INPUT: Self = Self(12);
    pub const WHEEL: Self = Self(13);
    pub const MOUSE_MOVE: Self = Self(14);
    pub const MOUSE_LEAVE: Self = Self(15);
    pub const LBUTTON_DOWN: Self = Self(16);
    pub const LBUTTON_UP: Self = Self(17);
    pub const RBUTTON_DOWN: Self = Self(18);
    pub const RBUTTON_UP: Self = Self(19);
    pub const RESIZE: Self = Self(20);
    pub const KEY_DOWN: Self = Self(21);
    pub const KEY_UP: Self = Self(22);
    pub const JOY_BUTTON_DOWN: Self = Self(23);
    pub const JOY_BUTTON_UP: Self = Self(24);
    pub const JOY_AXIS_MOTION: Self = Self(25);
    pub const STATUS_BAR: Self = Self(26);

    /// First kind of the application range.
    pub const USER: Self = Self(1000);

    /// Replace a window's toolbar buttons.
    pub const ADD_TOOLBAR_BUTTONS: Self = Self::user(7);
    /// Sent to a toolbar window when one of its buttons is clicked.
    pub const TOOLBAR_BUTTON_CLICK: Self = Self::user(8);

    /// Kind `offset` places into the application range.
    pub const fn user(offset: u32) -> Self {
        Self(Self::USER.0 + offset)
    }

    pub const fn is_user(self) -> bool {
        self.0 >= Self::USER.0
    }
}

/// Notification codes carried by [`Message::Command`].
pub mod notify {
    pub const EN_UPDATE: u16 = 100;
    pub const BN_CLICKED: u16 = 101;
    pub const CBN_SELCHANGE: u16 = 102;
}

/// Keyboard scancode, using USB HID usage ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Key(pub u32);

impl Key {
    pub const RETURN: Self = Self(40);
    pub const ESCAPE: Self = Self(41);
    pub const BACKSPACE: Self = Self(42);
    pub const TAB: Self = Self(43);
    pub const SPACE: Self = Self(44);
}

/// One toolbar button; `ident` is reported back on click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolbarButton {
    pub icon: u32,
    pub ident: i32,
    pub active: bool,
}

/// Opaque payload for creation parameters and application messages.
pub struct Payload(Box<dyn Any>);

impl Payload {
    pub fn new<T: Any>(value: T) -> Self {
        Self(Box::new(value))
    }

    pub fn is<T: Any>(&self) -> bool {
        self.0.is::<T>()
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.0.downcast_ref()
    }

    pub fn downcast_mut<T: Any>(&mut self) -> Option<&mut T> {
        self.0.downcast_mut()
    }

    /// Take the value out, or give the payload back if the type is wrong.
    pub fn downcast<T: Any>(self) -> Result<T, Payload> {
        self.0.downcast::<T>().map(|boxed| *boxed).map_err(Payload)
    }
}

impl fmt::Debug for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Payload(..)")
    }
}

/// A message delivered to a window procedure.
///
/// Points in client messages are local to the receiving window's frame and
/// include its scroll offset; non-client points are screen coordinates.
#[derive(Debug)]
pub enum Message {
    /// First message a window receives, carrying the creation payload.
    Create(Option<Payload>),
    Destroy,
    ShowWindow(bool),
    /// Paint title bar, toolbar, status bar and panel.
    NcPaint,
    NcLButtonUp(IVec2),
    Paint,
    RefreshStencil,
    PaintStencil,
    SetFocus {
        previous: Option<WindowId>,
    },
    KillFocus {
        next: Option<WindowId>,
    },
    /// `result` holds the current match; procedures overwrite it to claim
    /// the point for a specific child.
    HitTest {
        point: IVec2,
        result: Option<WindowId>,
    },
    Command {
        id: u32,
        code: u16,
        sender: Option<WindowId>,
    },
    TextInput(String),
    Wheel {
        dx: i32,
        dy: i32,
    },
    MouseMove {
        pos: IVec2,
        delta: IVec2,
    },
    MouseLeave {
        next: Option<WindowId>,
    },
    LButtonDown(IVec2),
    LButtonUp(IVec2),
    RButtonDown(IVec2),
    RButtonUp(IVec2),
    Resize,
    KeyDown(Key),
    KeyUp(Key),
    JoyButtonDown(u32),
    JoyButtonUp(u32),
    JoyAxisMotion {
        axis: u8,
        value: i16,
    },
    /// Replace the status bar text.
    StatusBar(String),
    AddToolbarButtons(Vec<ToolbarButton>),
    ToolbarButtonClick {
        ident: i32,
    },
    /// Application-defined message; `kind` should be in the user range.
    User {
        kind: MessageKind,
        wparam: u32,
        lparam: Option<Payload>,
    },
}

impl Message {
    pub fn kind(&self) -> MessageKind {
        match self {
            Message::Create(_) => MessageKind::CREATE,
            Message::Destroy => MessageKind::DESTROY,
            Message::ShowWindow(_) => MessageKind::SHOW_WINDOW,
            Message::NcPaint => MessageKind::NC_PAINT,
            Message::NcLButtonUp(_) => MessageKind::NC_LBUTTON_UP,
            Message::Paint => MessageKind::PAINT,
            Message::RefreshStencil => MessageKind::REFRESH_STENCIL,
            Message::PaintStencil => MessageKind::PAINT_STENCIL,
            Message::SetFocus { .. } => MessageKind::SET_FOCUS,
            Message::KillFocus { .. } => MessageKind::KILL_FOCUS,
            Message::HitTest { .. } => MessageKind::HIT_TEST,
            Message::Command { .. } => MessageKind::COMMAND,
            Message::TextInput(_) => MessageKind::TEXT_INPUT,
            Message::Wheel { .. } => MessageKind::WHEEL,
            Message::MouseMove { .. } => MessageKind::MOUSE_MOVE,
            Message::MouseLeave { .. } => MessageKind::MOUSE_LEAVE,
            Message::LButtonDown(_) => MessageKind::LBUTTON_DOWN,
            Message::LButtonUp(_) => MessageKind::LBUTTON_UP,
            Message::RButtonDown(_) => MessageKind::RBUTTON_DOWN,
            Message::RButtonUp(_) => MessageKind::RBUTTON_UP,
            Message::Resize => MessageKind::RESIZE,
            Message::KeyDown(_) => MessageKind::KEY_DOWN,
            Message::KeyUp(_) => MessageKind::KEY_UP,
            Message::JoyButtonDown(_) => MessageKind::JOY_BUTTON_DOWN,
            Message::JoyButtonUp(_) => MessageKind::JOY_BUTTON_UP,
            Message::JoyAxisMotion { .. } => MessageKind::JOY_AXIS_MOTION,
            Message::StatusBar(_) => MessageKind::STATUS_BAR,
            Message::AddToolbarButtons(_) => MessageKind::ADD_TOOLBAR_BUTTONS,
            Message::ToolbarButtonClick { .. } => MessageKind::TOOLBAR_BUTTON_CLICK,
            Message::User { kind, .. } => *kind,
        }
    }

    /// Build an application message.
    pub fn user(kind: MessageKind, wparam: u32, lparam: Option<Payload>) -> Self {
        debug_assert!(kind.is_user(), "{:?} is not in the user range", kind);
        Message::User {
            kind,
            wparam,
            lparam,
        }
    }

    /// `BN_CLICKED`-style notification sent from a control to its root.
    pub fn command(id: u32, code: u16, sender: WindowId) -> Self {
        Message::Command {
            id,
            code,
            sender: Some(sender),
        }
    }
}

/// What a procedure did with a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reply {
    /// Claimed; default handling is skipped and the value returned to the sender.
    Handled(i32),
    /// Not claimed; the core runs its default behavior.
    Unhandled,
}

impl Reply {
    pub const HANDLED: Self = Reply::Handled(1);

    pub fn from_bool(handled: bool) -> Self {
        if handled { Self::HANDLED } else { Self::Unhandled }
    }
}

/// Outcome of a `send`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// The procedure claimed the message.
    Handled(i32),
    /// The procedure passed and the default behavior ran.
    Defaulted,
    /// The target handle was stale.
    NoTarget,
}

impl Dispatch {
    pub fn is_handled(&self) -> bool {
        matches!(self, Dispatch::Handled(_))
    }

    /// The procedure's value, or 0 when it did not claim the message.
    pub fn value(&self) -> i32 {
        match self {
            Dispatch::Handled(value) => *value,
            Dispatch::Defaulted | Dispatch::NoTarget => 0,
        }
    }
}
