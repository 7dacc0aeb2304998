//! Window tree lifecycle, ids and z-order.

mod common;

use common::*;
use stencilwin_core::geometry::Rect;
use stencilwin_ui::{
    Message, MessageKind, Payload, Procedure, Reply, UiError, WindowFlags,
};

fn frame() -> Rect {
    Rect::new(10, 30, 100, 80)
}

#[test]
fn test_top_level_ids_are_unique() {
    let mut ui = ui();
    let windows: Vec<_> = (0..20)
        .map(|_| top_level(&mut ui, frame(), Procedure::passthrough()))
        .collect();

    let mut ids: Vec<u32> = windows.iter().map(|&w| ui.window(w).unwrap().id).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 20);
    assert!(ids.iter().all(|&id| (1..=255).contains(&id)));
}

#[test]
fn test_child_ids_are_unique_per_parent() {
    let mut ui = ui();
    let a = top_level(&mut ui, frame(), Procedure::passthrough());
    let b = top_level(&mut ui, frame(), Procedure::passthrough());
    for _ in 0..5 {
        child(&mut ui, a, Rect::new(0, 0, 10, 10), Procedure::passthrough());
        child(&mut ui, b, Rect::new(0, 0, 10, 10), Procedure::passthrough());
    }

    for parent in [a, b] {
        let ids: Vec<u32> = ui
            .children(parent)
            .iter()
            .map(|&c| ui.window(c).unwrap().id)
            .collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }
}

#[test]
fn test_too_many_top_level_windows() {
    let mut ui = ui();
    for _ in 0..255 {
        top_level(&mut ui, frame(), Procedure::passthrough());
    }
    let err = ui
        .create_window("extra", WindowFlags::NONE, frame(), None, Procedure::passthrough(), None)
        .unwrap_err();
    assert_eq!(err, UiError::TooManyWindows);
    assert_eq!(ui.top_level_windows().len(), 255);
}

#[test]
fn test_create_with_stale_parent_fails() {
    let mut ui = ui();
    let parent = top_level(&mut ui, frame(), Procedure::passthrough());
    ui.destroy_window(parent).unwrap();

    let err = ui
        .create_window("orphan", WindowFlags::NONE, frame(), Some(parent), Procedure::passthrough(), None)
        .unwrap_err();
    assert_eq!(err, UiError::ParentNotFound(parent));
}

#[test]
fn test_create_delivers_payload_and_focuses() {
    let mut ui = ui();
    let seen = std::rc::Rc::new(std::cell::Cell::new(0_u32));
    let proc = {
        let seen = seen.clone();
        Procedure::from_fn(move |_ui, _window, msg| {
            if let Message::Create(Some(payload)) = msg {
                if let Some(value) = payload.downcast_ref::<u32>() {
                    seen.set(*value);
                }
            }
            Reply::Unhandled
        })
    };

    let window = ui
        .create_window("init", WindowFlags::NONE, frame(), None, proc, Some(Payload::new(77_u32)))
        .unwrap();
    assert_eq!(seen.get(), 77);
    assert_eq!(ui.focused(), Some(window));
    assert!(ui.window(window).unwrap().is_visible());
}

#[test]
fn test_hidden_flag() {
    let mut ui = ui();
    let window = ui
        .create_window("hidden", WindowFlags::HIDDEN, frame(), None, Procedure::passthrough(), None)
        .unwrap();
    assert!(!ui.window(window).unwrap().is_visible());
}

#[test]
fn test_move_to_top() {
    let mut ui = ui();
    let a = top_level(&mut ui, frame(), Procedure::passthrough());
    let b = top_level(&mut ui, frame(), Procedure::passthrough());
    let c = top_level(&mut ui, frame(), Procedure::passthrough());

    ui.move_to_top(a);
    assert_eq!(ui.top_level_windows(), &[b, c, a]);

    // Raising a child raises its root.
    let inner = child(&mut ui, b, Rect::new(0, 0, 5, 5), Procedure::passthrough());
    ui.move_to_top(inner);
    assert_eq!(ui.top_level_windows().last(), Some(&b));
}

#[test]
fn test_always_in_back_is_pinned() {
    let mut ui = ui();
    let desktop = ui
        .create_window("desktop", WindowFlags::ALWAYS_IN_BACK, frame(), None, Procedure::passthrough(), None)
        .unwrap();
    let a = top_level(&mut ui, frame(), Procedure::passthrough());

    ui.move_to_top(desktop);
    assert_eq!(ui.top_level_windows(), &[desktop, a]);
}

#[test]
fn test_destroy_is_recursive_and_handles_go_stale() {
    let mut ui = ui();
    let log = new_log();
    let root = top_level(&mut ui, frame(), recorder(&log));
    let inner = child(&mut ui, root, Rect::new(0, 0, 20, 20), recorder(&log));
    let leaf = child(&mut ui, inner, Rect::new(0, 0, 5, 5), recorder(&log));

    ui.destroy_window(root).unwrap();

    for window in [root, inner, leaf] {
        assert!(!ui.is_alive(window));
        assert!(ui.window(window).is_none());
        assert_eq!(count_kind(&log, window, MessageKind::DESTROY), 1);
    }
    assert!(ui.top_level_windows().is_empty());
    assert_eq!(ui.window_count(), 0);
    assert_eq!(ui.destroy_window(root), Err(UiError::WindowNotFound(root)));
}

#[test]
fn test_destroyed_slot_reuse_does_not_revive_handle() {
    let mut ui = ui();
    let old = top_level(&mut ui, frame(), Procedure::passthrough());
    ui.destroy_window(old).unwrap();
    let new = top_level(&mut ui, frame(), Procedure::passthrough());

    assert_ne!(old, new);
    assert!(!ui.is_alive(old));
    assert_eq!(ui.send(old, Message::Paint), stencilwin_ui::Dispatch::NoTarget);
}

#[test]
fn test_destroy_clears_exclusive_references() {
    let mut ui = ui();
    let window = top_level(&mut ui, frame(), Procedure::passthrough());
    ui.set_focus(Some(window));
    ui.set_capture(Some(window));
    ui.track_mouse(Some(window));

    ui.destroy_window(window).unwrap();
    assert_eq!(ui.focused(), None);
    assert_eq!(ui.captured(), None);
    assert_eq!(ui.tracked(), None);
}

#[test]
fn test_destroy_purges_pending_messages() {
    let mut ui = ui();
    let log = new_log();
    let survivor = top_level(&mut ui, Rect::new(500, 500, 10, 10), recorder(&log));
    let doomed = top_level(&mut ui, frame(), recorder(&log));
    ui.flush();

    ui.post(doomed, Message::user(MessageKind::USER, 1, None));
    ui.post(survivor, Message::user(MessageKind::USER, 2, None));
    ui.destroy_window(doomed).unwrap();
    ui.post(doomed, Message::user(MessageKind::USER, 3, None));
    ui.flush();

    assert_eq!(count_kind(&log, doomed, MessageKind::USER), 0);
    assert_eq!(count_kind(&log, survivor, MessageKind::USER), 1);
}

#[test]
fn test_clear_window_children_resets_ids() {
    let mut ui = ui();
    let root = top_level(&mut ui, frame(), Procedure::passthrough());
    child(&mut ui, root, Rect::new(0, 0, 5, 5), Procedure::passthrough());
    child(&mut ui, root, Rect::new(0, 0, 5, 5), Procedure::passthrough());

    ui.clear_window_children(root).unwrap();
    assert!(ui.children(root).is_empty());

    let again = child(&mut ui, root, Rect::new(0, 0, 5, 5), Procedure::passthrough());
    assert_eq!(ui.window(again).unwrap().id, 1);
}

#[test]
fn test_window_items() {
    let mut ui = ui();
    let root = top_level(&mut ui, frame(), Procedure::passthrough());
    let group = child(&mut ui, root, Rect::new(0, 0, 50, 50), Procedure::passthrough());
    let nested = child(&mut ui, group, Rect::new(0, 0, 5, 5), Procedure::passthrough());
    ui.window_mut(nested).unwrap().id = 42;

    assert_eq!(ui.get_window_item(root, 42), Some(nested));
    assert_eq!(ui.get_window_item(root, 99), None);

    ui.set_window_item_text(root, 42, "renamed").unwrap();
    assert_eq!(ui.window(nested).unwrap().title(), "renamed");
    assert!(ui.set_window_item_text(root, 99, "x").is_err());
}

#[test]
fn test_is_window() {
    let mut ui = ui();
    let root = top_level(&mut ui, frame(), Procedure::passthrough());
    let inner = child(&mut ui, root, Rect::new(0, 0, 5, 5), Procedure::passthrough());
    assert!(ui.is_window(root));
    assert!(ui.is_window(inner));

    ui.destroy_window(root).unwrap();
    assert!(!ui.is_window(root));
    assert!(!ui.is_window(inner));
}

#[test]
fn test_show_and_hide() {
    let mut ui = ui();
    let log = new_log();
    let a = top_level(&mut ui, frame(), recorder(&log));
    let b = top_level(&mut ui, frame(), Procedure::passthrough());
    ui.flush();

    ui.show_window(a, false).unwrap();
    assert!(!ui.window(a).unwrap().is_visible());
    ui.flush();
    assert_eq!(count_kind(&log, a, MessageKind::SHOW_WINDOW), 1);

    ui.show_window(a, true).unwrap();
    assert!(ui.window(a).unwrap().is_visible());
    assert_eq!(ui.focused(), Some(a));
    assert_eq!(ui.top_level_windows(), &[b, a]);
}

#[test]
fn test_hiding_focused_window_clears_focus() {
    let mut ui = ui();
    let window = top_level(&mut ui, frame(), Procedure::passthrough());
    ui.set_capture(Some(window));
    ui.show_window(window, false).unwrap();
    assert_eq!(ui.focused(), None);
    assert_eq!(ui.captured(), None);
}

#[test]
fn test_move_and_resize() {
    let mut ui = ui();
    let log = new_log();
    let window = top_level(&mut ui, frame(), recorder(&log));
    ui.flush();

    ui.move_window(window, 200, 150).unwrap();
    ui.resize_window(window, 300, 0).unwrap();
    assert_eq!(ui.window(window).unwrap().frame, Rect::new(200, 150, 300, 80));

    ui.flush();
    // Both calls posted Resize; the second replaced the first.
    assert_eq!(count_kind(&log, window, MessageKind::RESIZE), 1);
}

#[test]
fn test_enable_window() {
    let mut ui = ui();
    let window = top_level(&mut ui, frame(), Procedure::passthrough());
    ui.enable_window(window, false).unwrap();
    assert!(ui.window(window).unwrap().is_disabled());
    assert_eq!(ui.focused(), None);

    ui.enable_window(window, true).unwrap();
    assert!(!ui.window(window).unwrap().is_disabled());
}

#[test]
fn test_operations_on_stale_handles() {
    let mut ui = ui();
    let window = top_level(&mut ui, frame(), Procedure::passthrough());
    ui.destroy_window(window).unwrap();

    let missing = Err(UiError::WindowNotFound(window));
    assert_eq!(ui.move_window(window, 0, 0), missing);
    assert_eq!(ui.resize_window(window, 1, 1), missing);
    assert_eq!(ui.show_window(window, true), missing);
    assert_eq!(ui.enable_window(window, true), missing);
    assert_eq!(ui.screen_frame(window), None);
    assert_eq!(ui.titlebar_height(window), 0);
}
