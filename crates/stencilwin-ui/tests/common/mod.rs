//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;
use stencilwin_core::geometry::Rect;
use stencilwin_ui::{
    Message, MessageKind, Procedure, Reply, Ui, UiConfig, WindowFlags, WindowId, notify,
};

/// What a recording procedure saw.
#[derive(Debug, Clone, PartialEq)]
pub struct Seen {
    pub window: WindowId,
    pub kind: MessageKind,
    /// Command id, user wparam or toolbar ident, when the message has one.
    pub value: Option<i64>,
    pub sender: Option<WindowId>,
}

pub type Log = Rc<RefCell<Vec<Seen>>>;

pub fn ui() -> Ui {
    Ui::new(UiConfig::default())
}

pub fn new_log() -> Log {
    Rc::new(RefCell::new(Vec::new()))
}

/// Procedure that logs every message and leaves it to the default behavior.
pub fn recorder(log: &Log) -> Procedure {
    let log = log.clone();
    Procedure::from_fn(move |_ui, window, msg| {
        let (value, sender) = match msg {
            Message::Command { id, sender, .. } => (Some(*id as i64), *sender),
            Message::User { wparam, .. } => (Some(*wparam as i64), None),
            Message::ToolbarButtonClick { ident } => (Some(*ident as i64), None),
            _ => (None, None),
        };
        log.borrow_mut().push(Seen {
            window,
            kind: msg.kind(),
            value,
            sender,
        });
        Reply::Unhandled
    })
}

/// Push button: press on left-down, report `BN_CLICKED` to the root on left-up.
pub fn button() -> Procedure {
    Procedure::from_fn(|ui, window, msg| match msg {
        Message::LButtonDown(_) => {
            if let Some(w) = ui.window_mut(window) {
                w.pressed = true;
            }
            ui.invalidate_window(window);
            Reply::HANDLED
        }
        Message::LButtonUp(_) => {
            let Some(w) = ui.window_mut(window) else {
                return Reply::Unhandled;
            };
            w.pressed = false;
            let id = w.id;
            let root = ui.get_root(window);
            ui.send(root, Message::command(id, notify::BN_CLICKED, window));
            ui.invalidate_window(window);
            Reply::HANDLED
        }
        _ => Reply::Unhandled,
    })
}

pub fn kinds_for(log: &Log, window: WindowId) -> Vec<MessageKind> {
    log.borrow()
        .iter()
        .filter(|seen| seen.window == window)
        .map(|seen| seen.kind)
        .collect()
}

pub fn count_kind(log: &Log, window: WindowId, kind: MessageKind) -> usize {
    log.borrow()
        .iter()
        .filter(|seen| seen.window == window && seen.kind == kind)
        .count()
}

pub fn top_level(ui: &mut Ui, frame: Rect, proc: Procedure) -> WindowId {
    ui.create_window("window", WindowFlags::NONE, frame, None, proc, None)
        .expect("top-level window")
}

pub fn child(ui: &mut Ui, parent: WindowId, frame: Rect, proc: Procedure) -> WindowId {
    ui.create_window("child", WindowFlags::NONE, frame, Some(parent), proc, None)
        .expect("child window")
}
