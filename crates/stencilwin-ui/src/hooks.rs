//! Global message hooks.
//!
//! A hook observes every message of one kind before the target's procedure
//! sees it. Hooks cannot consume a message.

use crate::Ui;
use crate::message::{Message, MessageKind};
use crate::window::WindowId;
use std::rc::Rc;
use stencilwin_core::alloc::HashMap;

/// Callback invoked with the target window and the message.
pub type HookFn = dyn Fn(&mut Ui, WindowId, &Message);

/// Handle returned by [`Ui::register_hook`](crate::Ui::register_hook).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HookId(u64);

struct HookEntry {
    id: HookId,
    owner: Option<WindowId>,
    func: Rc<HookFn>,
}

#[derive(Default)]
pub struct HookRegistry {
    by_kind: HashMap<MessageKind, Vec<HookEntry>>,
    next_id: u64,
}

impl HookRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(
        &mut self,
        kind: MessageKind,
        owner: Option<WindowId>,
        func: Rc<HookFn>,
    ) -> HookId {
        self.next_id += 1;
        let id = HookId(self.next_id);
        self.by_kind
            .entry(kind)
            .or_default()
            .push(HookEntry { id, owner, func });
        id
    }

    pub fn deregister(&mut self, id: HookId) -> bool {
        let mut removed = false;
        self.by_kind.retain(|_, hooks| {
            let before = hooks.len();
            hooks.retain(|hook| hook.id != id);
            removed |= hooks.len() != before;
            !hooks.is_empty()
        });
        removed
    }

    /// Drop every hook owned by `owner`.
    pub fn remove_owner(&mut self, owner: WindowId) -> usize {
        let mut removed = 0;
        self.by_kind.retain(|_, hooks| {
            let before = hooks.len();
            hooks.retain(|hook| hook.owner != Some(owner));
            removed += before - hooks.len();
            !hooks.is_empty()
        });
        removed
    }

    /// Hooks for `kind`, newest first.
    pub fn matching(&self, kind: MessageKind) -> Vec<Rc<HookFn>> {
        self.by_kind
            .get(&kind)
            .map(|hooks| hooks.iter().rev().map(|hook| hook.func.clone()).collect())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.by_kind.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.by_kind.is_empty()
    }
}
