//! Tests for object management, focus and key routing.

use wdg_common::{Align, Geometry, Key, TerminalColor, WdgError, WidgetId};
use wdg_config::ColorScheme;
use wdg_curses::Screen;

use super::*;
use crate::placement::Placement;
use crate::widget::WidgetColors;
use crate::window::WindowOptions;

fn dispatcher() -> Dispatcher {
    Dispatcher::new(Screen::headless(60, 20), &ColorScheme::default())
}

fn at(x: usize, y: usize, cols: usize, lines: usize) -> Placement {
    Placement::absolute(Geometry::new(x, y, cols, lines))
}

fn titled(title: &str) -> WindowOptions {
    WindowOptions {
        title: Some(title.into()),
        ..WindowOptions::default()
    }
}

#[test]
fn new_registers_the_color_scheme() {
    let wdg = dispatcher();
    let palette = wdg.screen().palette();
    assert_eq!(
        palette.get(WidgetColors::STANDARD.focus),
        (TerminalColor::YELLOW, TerminalColor::BLACK)
    );
    assert_eq!(
        palette.get(WidgetColors::STANDARD.window),
        (TerminalColor::Default, TerminalColor::Default)
    );
    assert!(wdg.is_empty());
    assert_eq!(wdg.focused(), None);
}

#[test]
fn create_assigns_increasing_ids_and_draws_nothing() {
    let mut wdg = dispatcher();
    let a = wdg.create_window(at(0, 0, 10, 5), WindowOptions::default());
    let b = wdg.create_window(at(10, 0, 10, 5), WindowOptions::default());
    assert_eq!((a, b), (WidgetId(1), WidgetId(2)));
    assert_eq!(wdg.len(), 2);
    assert_eq!(wdg.ids(), vec![a, b]);
    assert!(!wdg.window(a).unwrap().is_drawn());
    assert_eq!(wdg.screen().update_count(), 0);
    assert_eq!(wdg.core(a).unwrap().colors, WidgetColors::STANDARD);
}

#[test]
fn draw_makes_the_window_visible() {
    let mut wdg = dispatcher();
    let id = wdg.create_window(at(0, 0, 20, 10), titled("Status"));
    wdg.set_title(id, "Status", Align::Center).unwrap();
    wdg.draw(id).unwrap();
    assert!(wdg.core(id).unwrap().flags.visible);
    assert_eq!(wdg.screen().row_text(0), "┌──────Status──────┐");
}

#[test]
fn unknown_ids_are_reported() {
    let mut wdg = dispatcher();
    let ghost = WidgetId(99);
    assert!(matches!(wdg.draw(ghost), Err(WdgError::UnknownWidget(_))));
    assert!(matches!(wdg.focus(ghost), Err(WdgError::UnknownWidget(_))));
    assert!(matches!(wdg.destroy(ghost), Err(WdgError::UnknownWidget(_))));
    assert!(matches!(
        wdg.set_title(ghost, "x", Align::Left),
        Err(WdgError::UnknownWidget(_))
    ));
    assert!(!wdg.draw(ghost).unwrap_err().is_fatal());
}

#[test]
fn focus_moves_between_windows() {
    let mut wdg = dispatcher();
    let a = wdg.create_window(at(0, 0, 10, 5), WindowOptions::default());
    let b = wdg.create_window(at(10, 0, 10, 5), WindowOptions::default());

    wdg.focus(a).unwrap();
    assert_eq!(wdg.focused(), Some(a));
    assert!(wdg.core(a).unwrap().flags.focused);

    wdg.focus(b).unwrap();
    assert_eq!(wdg.focused(), Some(b));
    assert!(!wdg.core(a).unwrap().flags.focused);
    assert!(wdg.core(b).unwrap().flags.focused);
    assert!(!wdg.screen().cell(0, 0).unwrap().attrs.bold);
    assert!(wdg.screen().cell(0, 10).unwrap().attrs.bold);
}

#[test]
fn focus_next_and_prev_cycle_in_creation_order() {
    let mut wdg = dispatcher();
    let ids: Vec<_> = (0..3)
        .map(|i| wdg.create_window(at(i * 10, 0, 10, 5), WindowOptions::default()))
        .collect();

    wdg.focus_next().unwrap();
    assert_eq!(wdg.focused(), Some(ids[0]));
    wdg.focus_next().unwrap();
    assert_eq!(wdg.focused(), Some(ids[1]));
    wdg.focus_next().unwrap();
    wdg.focus_next().unwrap();
    assert_eq!(wdg.focused(), Some(ids[0]));
    wdg.focus_prev().unwrap();
    assert_eq!(wdg.focused(), Some(ids[2]));
}

#[test]
fn focus_next_without_objects_is_a_no_op() {
    let mut wdg = dispatcher();
    wdg.focus_next().unwrap();
    assert_eq!(wdg.focused(), None);
}

#[test]
fn keys_go_to_the_focused_window() {
    let mut wdg = dispatcher();
    let a = wdg.create_window(at(0, 0, 20, 5), WindowOptions::default());
    let b = wdg.create_window(at(20, 0, 20, 5), WindowOptions::default());
    wdg.focus(b).unwrap();
    wdg.draw(a).unwrap();

    wdg.dispatch_key(Key::Char('z')).unwrap();
    assert_eq!(wdg.window(b).unwrap().content().unwrap().row_text(0), "key 122 (z)");
    assert_eq!(wdg.window(a).unwrap().content().unwrap().row_text(0), "");
}

#[test]
fn keys_without_focus_are_dropped() {
    let mut wdg = dispatcher();
    wdg.create_window(at(0, 0, 20, 5), WindowOptions::default());
    wdg.dispatch_key(Key::Char('q')).unwrap();
    assert_eq!(wdg.len(), 1);
}

#[test]
fn quit_key_destroys_the_focused_window_and_moves_focus() {
    let mut wdg = dispatcher();
    let a = wdg.create_window(at(0, 0, 20, 5), titled("a"));
    let b = wdg.create_window(at(20, 0, 20, 5), titled("b"));
    let c = wdg.create_window(at(40, 0, 20, 5), titled("c"));
    wdg.focus(b).unwrap();

    wdg.dispatch_key(Key::Char('q')).unwrap();
    assert_eq!(wdg.ids(), vec![a, c]);
    assert_eq!(wdg.focused(), Some(c));
    assert!(wdg.core(c).unwrap().flags.focused);
    // b's area has been wiped.
    assert_eq!(wdg.screen().cell(0, 20).unwrap().c, ' ');

    wdg.dispatch_key(Key::Char('q')).unwrap();
    assert_eq!(wdg.focused(), Some(a));
    wdg.dispatch_key(Key::Char('q')).unwrap();
    assert!(wdg.is_empty());
    assert_eq!(wdg.focused(), None);
}

#[test]
fn destroying_an_unfocused_window_keeps_the_focus() {
    let mut wdg = dispatcher();
    let a = wdg.create_window(at(0, 0, 20, 5), WindowOptions::default());
    let b = wdg.create_window(at(20, 0, 20, 5), WindowOptions::default());
    wdg.focus(a).unwrap();
    wdg.destroy(b).unwrap();
    assert_eq!(wdg.focused(), Some(a));
    assert_eq!(wdg.len(), 1);
}

#[test]
fn set_placement_redraws_visible_windows_only() {
    let mut wdg = dispatcher();
    let shown = wdg.create_window(at(0, 0, 20, 5), WindowOptions::default());
    let hidden = wdg.create_window(at(0, 10, 20, 5), WindowOptions::default());
    wdg.draw(shown).unwrap();

    wdg.set_placement(shown, at(30, 0, 10, 5)).unwrap();
    assert_eq!(
        wdg.window(shown).unwrap().frame().unwrap().geometry(),
        Geometry::new(30, 0, 10, 5)
    );

    wdg.set_placement(hidden, at(30, 10, 10, 5)).unwrap();
    assert!(!wdg.window(hidden).unwrap().is_drawn());
    assert_eq!(wdg.core(hidden).unwrap().placement, at(30, 10, 10, 5));
}

#[test]
fn screen_resize_relayouts_edge_relative_windows() {
    let mut wdg = dispatcher();
    let right_half = wdg.create_window(Placement::new(-20, 0, 0, 0), WindowOptions::default());
    wdg.draw(right_half).unwrap();
    assert_eq!(
        wdg.window(right_half).unwrap().frame().unwrap().geometry(),
        Geometry::new(40, 0, 20, 20)
    );

    wdg.resize_screen(80, 30).unwrap();
    assert_eq!(wdg.screen().size(), (80, 30));
    let window = wdg.window(right_half).unwrap();
    assert_eq!(window.frame().unwrap().geometry(), Geometry::new(60, 0, 20, 30));
    assert_eq!(window.content().unwrap().geometry(), Geometry::new(61, 1, 18, 28));
    assert_eq!(wdg.screen().cell(0, 60).unwrap().c, '┌');
}

#[test]
fn screen_too_small_is_fatal() {
    let mut wdg = dispatcher();
    let id = wdg.create_window(Placement::FULL, WindowOptions::default());
    wdg.draw(id).unwrap();
    let err = wdg.resize_screen(1, 1).unwrap_err();
    assert!(err.is_fatal());
}

#[test]
fn print_reaches_the_content_area() {
    let mut wdg = dispatcher();
    let id = wdg.create_window(at(0, 0, 20, 5), WindowOptions::default());
    wdg.draw(id).unwrap();
    wdg.print(id, 1, 0, format_args!("{}%", 50)).unwrap();
    assert_eq!(wdg.screen().row_text(1), "│ 50%              │");
}

#[test]
fn destroy_all_clears_everything() {
    let mut wdg = dispatcher();
    let a = wdg.create_window(at(0, 0, 20, 5), WindowOptions::default());
    wdg.create_window(at(20, 0, 20, 5), WindowOptions::default());
    wdg.focus(a).unwrap();
    wdg.destroy_all();
    assert!(wdg.is_empty());
    assert_eq!(wdg.focused(), None);
    assert_eq!(wdg.screen().row_text(0), "");
}

#[test]
fn redraw_all_repairs_overlapping_relayouts() {
    let mut wdg = dispatcher();
    let a = wdg.create_window(at(0, 0, 30, 5), titled("a"));
    let b = wdg.create_window(at(30, 0, 30, 5), titled("b"));
    wdg.draw(a).unwrap();
    wdg.draw(b).unwrap();

    // Swap the halves: b's old frame lies under a's new one.
    wdg.core_mut(a).unwrap().placement = at(30, 0, 30, 5);
    wdg.core_mut(b).unwrap().placement = at(0, 0, 30, 5);
    wdg.resize_screen(60, 20).unwrap();
    wdg.redraw_all().unwrap();

    assert_eq!(wdg.screen().cell(0, 0).unwrap().c, '┌');
    assert_eq!(wdg.screen().cell(0, 29).unwrap().c, '┐');
    assert_eq!(wdg.screen().cell(0, 30).unwrap().c, '┌');
    assert_eq!(wdg.screen().cell(0, 59).unwrap().c, '┐');
    assert_eq!(wdg.screen().cell(0, 33).unwrap().c, 'a');
    assert_eq!(wdg.screen().cell(0, 3).unwrap().c, 'b');
}

#[test]
fn redraw_all_skips_hidden_objects() {
    let mut wdg = dispatcher();
    let id = wdg.create_window(at(0, 0, 10, 5), WindowOptions::default());
    wdg.redraw_all().unwrap();
    assert!(!wdg.window(id).unwrap().is_drawn());
}

#[test]
fn resize_screen_resizes_every_object_despite_a_failure() {
    let mut wdg = dispatcher();
    let short = wdg.create_window(Placement::new(0, 0, 20, -18), WindowOptions::default());
    let right = wdg.create_window(Placement::new(-20, 0, 0, 0), WindowOptions::default());
    wdg.draw(short).unwrap();
    wdg.draw(right).unwrap();

    // 19 lines leave the first window a single line.
    let err = wdg.resize_screen(70, 19).unwrap_err();
    assert!(matches!(err, WdgError::WindowTooSmall { cols: 20, lines: 1 }));
    assert_eq!(
        wdg.window(right).unwrap().frame().unwrap().geometry(),
        Geometry::new(50, 0, 20, 19)
    );
    assert_eq!(wdg.screen().cell(0, 50).unwrap().c, '┌');
    assert_eq!(wdg.screen().cell(18, 69).unwrap().c, '┘');
}

#[test]
fn destroying_the_focused_window_succeeds_when_the_next_cannot_draw() {
    let mut wdg = dispatcher();
    let tiny = wdg.create_window(at(0, 0, 1, 5), WindowOptions::default());
    let shown = wdg.create_window(at(20, 0, 20, 5), WindowOptions::default());
    let last = wdg.create_window(at(40, 0, 1, 5), WindowOptions::default());
    wdg.focus(shown).unwrap();

    wdg.destroy(last).unwrap();
    wdg.dispatch_key(Key::Char('q')).unwrap();
    assert_eq!(wdg.ids(), vec![tiny]);
    assert!(!wdg.window(tiny).unwrap().is_drawn());
    assert_eq!(wdg.screen().cell(0, 20).unwrap().c, ' ');
}
