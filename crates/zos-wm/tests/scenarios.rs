//! End-to-end window layer scenarios
//!
//! These drive the shell engine the way a host adapter would: string kind
//! ids, raw pointer coordinates and tray clicks.

use zos_wm::{
    clamp_position, clamp_size, InputResult, ShellEngine, Size, Vec2, Viewport, WindowConfig,
    WindowKind,
};

const VIEWPORT: Viewport = Viewport::new(1200.0, 800.0, 64.0);

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 0.001
}

fn engine() -> ShellEngine {
    ShellEngine::new(VIEWPORT)
}

/// Chat window at (100, 150) sized 480x350
fn engine_with_placed_chat() -> (ShellEngine, u64) {
    let mut engine = engine();
    let id = engine.windows.open_with(WindowConfig {
        position: Some(Vec2::new(100.0, 150.0)),
        size: Some(Size::new(480.0, 350.0)),
        ..WindowConfig::new(WindowKind::Chat)
    });
    (engine, id)
}

#[test]
fn test_default_chat_fills_content_area() {
    let mut engine = engine();
    let id = engine.open_by_id("chat", None).unwrap();
    let window = engine.windows.get(id).unwrap();

    assert!(approx(window.size.width, 960.0));
    assert!(approx(window.size.height, 588.8));
    assert!(approx(window.position.x, 120.0));
    assert!(approx(window.position.y, 137.6));
    assert_eq!(window.title, "Conversation 1");
}

#[test]
fn test_second_chat_cascades() {
    let mut engine = engine();
    let first = engine.open(WindowKind::Chat, None);
    let second = engine.open(WindowKind::Chat, None);

    let a = engine.windows.get(first).unwrap().position;
    let b = engine.windows.get(second).unwrap().position;
    assert!(approx(b.x - a.x, 30.0));
    assert!(approx(b.y - a.y, 30.0));
    assert_eq!(engine.windows.count_of_kind(WindowKind::Chat), 2);
}

#[test]
fn test_title_bar_drag_commits_delta() {
    let (mut engine, id) = engine_with_placed_chat();

    assert_eq!(engine.start_move_drag(id, 200.0, 160.0), InputResult::Handled);
    engine.handle_pointer_move(250.0, 140.0);
    engine.handle_pointer_up();

    assert_eq!(engine.windows.get(id).unwrap().position, Vec2::new(150.0, 130.0));
}

#[test]
fn test_drag_is_clamped_under_header() {
    let (mut engine, id) = engine_with_placed_chat();

    engine.handle_pointer_down(200.0, 160.0);
    engine.handle_pointer_move(200.0, -400.0);
    engine.handle_pointer_up();

    assert_eq!(engine.windows.get(id).unwrap().position.y, 64.0);
}

#[test]
fn test_tray_restore_touches_only_target() {
    let mut engine = engine();
    let first = engine.open(WindowKind::Chat, None);
    let second = engine.open(WindowKind::Chat, None);
    engine.minimize_window(first);
    engine.minimize_window(second);

    let tray = engine.tray_items();
    assert_eq!(tray.len(), 2);
    assert_eq!(tray[0].id, first);
    assert_eq!(tray[1].id, second);

    let first_before = engine.windows.get(first).unwrap().clone();
    engine.tray_click(second);

    let restored = engine.windows.get(second).unwrap();
    assert!(!restored.is_minimized);
    assert_eq!(restored.z_index, engine.windows.top_z());
    assert_eq!(engine.windows.get(first).unwrap(), &first_before);

    let tray = engine.tray_items();
    assert_eq!(tray.len(), 1);
    assert_eq!(tray[0].id, first);
}

#[test]
fn test_non_finite_geometry_falls_back() {
    let size = Size::new(480.0, 350.0);
    assert_eq!(
        clamp_position(Vec2::new(f32::NAN, f32::NAN), size, &VIEWPORT),
        Vec2::new(100.0, 150.0)
    );
    assert_eq!(
        clamp_size(Size::new(f32::NAN, f32::NAN), Vec2::new(100.0, 150.0), &VIEWPORT),
        Size::new(480.0, 350.0)
    );
}

#[test]
fn test_settings_is_singleton() {
    let mut engine = engine();
    let a = engine.open_by_id("settings", None).unwrap();
    let b = engine.open_by_id("settings", None).unwrap();
    assert_eq!(a, b);
    assert_eq!(engine.windows.count_of_kind(WindowKind::Settings), 1);
}

#[test]
fn test_minimize_restore_keeps_geometry() {
    let (mut engine, id) = engine_with_placed_chat();
    let before = engine.windows.get(id).unwrap().rect();

    engine.minimize_window(id);
    engine.focus_window(id);

    let window = engine.windows.get(id).unwrap();
    assert!(!window.is_minimized);
    assert_eq!(window.rect(), before);
}

#[test]
fn test_west_resize_stops_at_floor_without_jump() {
    let (mut engine, id) = engine_with_placed_chat();

    assert_eq!(engine.start_resize_drag(id, "w", 100.0, 300.0), InputResult::Handled);
    engine.handle_pointer_move(200.0, 300.0);
    {
        let window = engine.windows.get(id).unwrap();
        assert_eq!(window.size.width, 380.0);
        assert_eq!(window.position.x, 200.0);
    }

    // Past the floor: width and x hold their last valid values
    engine.handle_pointer_move(400.0, 300.0);
    engine.handle_pointer_move(500.0, 300.0);
    let window = engine.windows.get(id).unwrap();
    assert_eq!(window.size.width, 380.0);
    assert_eq!(window.position.x, 200.0);
    engine.handle_pointer_up();
}

#[test]
fn test_north_resize_into_header_keeps_bottom_edge() {
    let mut engine = engine();
    let id = engine.windows.open_with(WindowConfig {
        position: Some(Vec2::new(100.0, 100.0)),
        size: Some(Size::new(480.0, 350.0)),
        ..WindowConfig::new(WindowKind::Chat)
    });

    assert_eq!(engine.start_resize_drag(id, "n", 300.0, 100.0), InputResult::Handled);
    engine.handle_pointer_move(300.0, 10.0);
    engine.handle_pointer_up();

    let rect = engine.windows.get(id).unwrap().rect();
    assert_eq!(rect.y, 64.0);
    assert_eq!(rect.height, 386.0);
    assert_eq!(rect.bottom(), 450.0);
}

#[test]
fn test_west_resize_past_left_edge_keeps_right_edge() {
    let mut engine = engine();
    let id = engine.windows.open_with(WindowConfig {
        position: Some(Vec2::new(0.0, 150.0)),
        size: Some(Size::new(300.0, 350.0)),
        ..WindowConfig::new(WindowKind::Chat)
    });

    assert_eq!(engine.start_resize_drag(id, "w", 0.0, 300.0), InputResult::Handled);
    engine.handle_pointer_move(-400.0, 300.0);
    engine.handle_pointer_up();

    let rect = engine.windows.get(id).unwrap().rect();
    assert_eq!(rect.x, -400.0);
    assert_eq!(rect.width, 700.0);
    assert_eq!(rect.right(), 300.0);
}

#[test]
fn test_observer_sees_multi_instance_opens() {
    use std::cell::RefCell;
    use std::rc::Rc;

    let seen = Rc::new(RefCell::new(Vec::new()));
    let mut engine = engine();
    let sink = Rc::clone(&seen);
    engine
        .windows
        .on_window_opened(move |title: &str, id| sink.borrow_mut().push((title.to_string(), id)));

    let chat = engine.open(WindowKind::Chat, None);
    engine.open(WindowKind::Account, None);

    assert_eq!(*seen.borrow(), vec![("Conversation 1".to_string(), chat)]);
}

#[test]
fn test_close_during_drag_is_tolerated() {
    let (mut engine, id) = engine_with_placed_chat();
    engine.handle_pointer_down(200.0, 160.0);
    engine.close_window(id);

    assert_eq!(engine.handle_pointer_move(260.0, 200.0), InputResult::Handled);
    assert_eq!(engine.handle_pointer_up(), InputResult::Handled);
    assert!(engine.windows.is_empty());
}

#[test]
fn test_taskbar_marks_active_window() {
    let mut engine = engine();
    let chat = engine.open(WindowKind::Chat, None);
    let settings = engine.open(WindowKind::Settings, None);

    let items = engine.taskbar_items();
    assert_eq!(items.len(), 2);
    assert!(items.iter().any(|item| item.id == settings && item.is_active));

    engine.taskbar_click(chat);
    let items = engine.taskbar_items();
    assert!(items.iter().any(|item| item.id == chat && item.is_active));
    assert!(items.iter().any(|item| item.id == settings && !item.is_active));
}
