//! Platform input routing: drags, resizes, the close control and clicks.

mod common;

use common::*;
use stencilwin_core::geometry::Rect;
use stencilwin_core::math::{IVec2, ivec2};
use stencilwin_ui::{InputEvent, Key, MessageKind, MouseButton, Procedure, WindowFlags};

fn frame() -> Rect {
    Rect::new(100, 100, 200, 150)
}

fn press(ui: &mut stencilwin_ui::Ui, pos: IVec2) {
    ui.dispatch_input(InputEvent::MouseDown {
        pos,
        button: MouseButton::Left,
    });
}

fn release(ui: &mut stencilwin_ui::Ui, pos: IVec2) {
    ui.dispatch_input(InputEvent::MouseUp {
        pos,
        button: MouseButton::Left,
    });
}

fn move_to(ui: &mut stencilwin_ui::Ui, pos: IVec2) {
    ui.dispatch_input(InputEvent::MouseMove {
        pos,
        delta: IVec2::ZERO,
    });
}

#[test]
fn test_title_bar_drag_moves_window() {
    let mut ui = ui();
    let log = new_log();
    let window = top_level(&mut ui, frame(), recorder(&log));

    press(&mut ui, ivec2(150, 95));
    assert_eq!(ui.dragging(), Some(window));

    move_to(&mut ui, ivec2(250, 195));
    assert_eq!(ui.window(window).unwrap().frame, Rect::new(200, 200, 200, 150));

    release(&mut ui, ivec2(250, 195));
    assert_eq!(ui.dragging(), None);
    assert_eq!(count_kind(&log, window, MessageKind::NC_LBUTTON_UP), 1);
    assert!(ui.window(window).unwrap().is_visible());
}

#[test]
fn test_press_raises_top_level_window() {
    let mut ui = ui();
    let back = top_level(&mut ui, frame(), Procedure::passthrough());
    let front = top_level(&mut ui, Rect::new(400, 100, 100, 100), Procedure::passthrough());

    press(&mut ui, ivec2(150, 150));
    assert_eq!(ui.top_level_windows(), &[front, back]);
}

#[test]
fn test_grip_resizes_window() {
    let mut ui = ui();
    let window = top_level(&mut ui, frame(), Procedure::passthrough());

    press(&mut ui, ivec2(295, 245));
    assert_eq!(ui.resizing(), Some(window));

    move_to(&mut ui, ivec2(350, 300));
    assert_eq!(ui.window(window).unwrap().frame, Rect::new(100, 100, 250, 200));

    release(&mut ui, ivec2(350, 300));
    assert_eq!(ui.resizing(), None);
    assert_eq!(ui.focused(), Some(window));
}

#[test]
fn test_no_resize_window_gets_click_instead() {
    let mut ui = ui();
    let log = new_log();
    let window = ui
        .create_window("fixed", WindowFlags::NO_RESIZE, frame(), None, recorder(&log), None)
        .unwrap();

    press(&mut ui, ivec2(295, 245));
    assert_eq!(ui.resizing(), None);
    assert_eq!(count_kind(&log, window, MessageKind::LBUTTON_DOWN), 1);
}

#[test]
fn test_close_control_hides_window() {
    let mut ui = ui();
    let window = top_level(&mut ui, frame(), Procedure::passthrough());

    press(&mut ui, ivec2(295, 95));
    release(&mut ui, ivec2(295, 95));

    assert!(!ui.window(window).unwrap().is_visible());
    assert_eq!(ui.focused(), None);
    assert!(ui.is_window(window));
}

#[test]
fn test_close_control_ends_dialog() {
    let mut ui = ui();
    let owner = top_level(&mut ui, Rect::new(500, 500, 50, 50), Procedure::passthrough());

    let code = ui
        .show_dialog("Confirm", frame(), Some(owner), Procedure::passthrough(), None, |ui| {
            press(ui, ivec2(295, 95));
            release(ui, ivec2(295, 95));
        })
        .unwrap();

    assert_eq!(code, -1);
    assert_eq!(ui.top_level_windows(), &[owner]);
    assert!(!ui.window(owner).unwrap().is_disabled());
}

#[test]
fn test_click_reaches_child_button() {
    let mut ui = ui();
    let log = new_log();
    let root = top_level(&mut ui, frame(), recorder(&log));
    let ok = child(&mut ui, root, Rect::new(10, 10, 50, 20), button());
    ui.window_mut(ok).unwrap().id = 101;

    press(&mut ui, ivec2(120, 115));
    assert_eq!(ui.focused(), Some(ok));
    assert!(ui.window(ok).unwrap().pressed);

    release(&mut ui, ivec2(120, 115));
    assert!(!ui.window(ok).unwrap().pressed);

    let commands: Vec<_> = log
        .borrow()
        .iter()
        .filter(|seen| seen.kind == MessageKind::COMMAND)
        .map(|seen| (seen.window, seen.value, seen.sender))
        .collect();
    assert_eq!(commands, vec![(root, Some(101), Some(ok))]);
}

#[test]
fn test_wheel_is_scaled_by_sensitivity() {
    let mut ui = ui();
    let window = ui
        .create_window("list", WindowFlags::VSCROLL, frame(), None, Procedure::passthrough(), None)
        .unwrap();

    ui.dispatch_input(InputEvent::Wheel {
        pos: ivec2(150, 150),
        dx: 0,
        dy: -2,
    });
    assert_eq!(ui.window(window).unwrap().scroll, ivec2(0, 10));
}

#[test]
fn test_disabled_window_ignores_pointer() {
    let mut ui = ui();
    let log = new_log();
    let window = top_level(&mut ui, frame(), recorder(&log));
    let other = top_level(&mut ui, Rect::new(400, 100, 100, 100), Procedure::passthrough());
    ui.enable_window(window, false).unwrap();
    log.borrow_mut().clear();

    press(&mut ui, ivec2(150, 150));
    release(&mut ui, ivec2(150, 150));
    ui.dispatch_input(InputEvent::Wheel {
        pos: ivec2(150, 150),
        dx: 0,
        dy: 1,
    });

    assert_eq!(ui.top_level_windows(), &[window, other]);
    assert_eq!(count_kind(&log, window, MessageKind::LBUTTON_DOWN), 0);
    assert_eq!(count_kind(&log, window, MessageKind::LBUTTON_UP), 0);
    assert_eq!(count_kind(&log, window, MessageKind::WHEEL), 0);
}

#[test]
fn test_mouse_move_goes_to_focused_window_only() {
    let mut ui = ui();
    let log = new_log();
    let a = top_level(&mut ui, Rect::new(0, 100, 100, 100), recorder(&log));
    let b = top_level(&mut ui, Rect::new(200, 100, 100, 100), recorder(&log));
    assert_eq!(ui.focused(), Some(b));

    move_to(&mut ui, ivec2(50, 150));
    move_to(&mut ui, ivec2(250, 150));
    // Title bar area is above the client origin.
    move_to(&mut ui, ivec2(250, 95));

    assert_eq!(count_kind(&log, a, MessageKind::MOUSE_MOVE), 0);
    assert_eq!(count_kind(&log, b, MessageKind::MOUSE_MOVE), 1);
}

#[test]
fn test_capture_receives_presses_anywhere() {
    let mut ui = ui();
    let log = new_log();
    let window = top_level(&mut ui, Rect::new(0, 100, 100, 100), recorder(&log));
    ui.set_capture(Some(window));

    press(&mut ui, ivec2(700, 700));
    assert_eq!(ui.dragging(), None);
    assert_eq!(count_kind(&log, window, MessageKind::LBUTTON_DOWN), 1);
}

#[test]
fn test_tracking_released_when_pointer_leaves() {
    let mut ui = ui();
    let log = new_log();
    let window = top_level(&mut ui, frame(), recorder(&log));
    ui.track_mouse(Some(window));

    move_to(&mut ui, ivec2(150, 150));
    assert_eq!(ui.tracked(), Some(window));

    move_to(&mut ui, ivec2(10, 10));
    assert_eq!(ui.tracked(), None);
    assert_eq!(count_kind(&log, window, MessageKind::MOUSE_LEAVE), 1);
}

#[test]
fn test_keyboard_goes_to_focused_window() {
    let mut ui = ui();
    let log = new_log();
    let a = top_level(&mut ui, frame(), recorder(&log));
    let b = top_level(&mut ui, Rect::new(400, 100, 100, 100), recorder(&log));
    ui.set_focus(Some(a));

    ui.dispatch_input(InputEvent::TextInput("hi".into()));
    ui.dispatch_input(InputEvent::KeyUp { key: Key::SPACE });
    ui.dispatch_input(InputEvent::JoyButtonDown(2));
    ui.dispatch_input(InputEvent::JoyAxis { axis: 1, value: -300 });

    assert_eq!(
        kinds_for(&log, a)
            .into_iter()
            .filter(|&k| k != MessageKind::CREATE)
            .collect::<Vec<_>>(),
        vec![
            MessageKind::TEXT_INPUT,
            MessageKind::KEY_UP,
            MessageKind::JOY_BUTTON_DOWN,
            MessageKind::JOY_AXIS_MOTION,
        ]
    );
    assert_eq!(kinds_for(&log, b), vec![MessageKind::CREATE]);
}

#[test]
fn test_quit_stops_the_system() {
    let mut ui = ui();
    assert!(ui.is_running());
    ui.dispatch_input(InputEvent::Quit);
    assert!(!ui.is_running());
}
