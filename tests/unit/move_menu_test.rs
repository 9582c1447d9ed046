//! Unit tests for the move-menu state machine and its listener resource.

use std::sync::Arc;

use shelfmark::card::move_menu::{MoveMenu, PointerListenerRegistry};

fn new_menu() -> (MoveMenu, Arc<PointerListenerRegistry>) {
    let listeners = Arc::new(PointerListenerRegistry::new());
    (MoveMenu::new(listeners.clone()), listeners)
}

#[test]
fn starts_closed_with_no_listener() {
    let (menu, listeners) = new_menu();
    assert!(!menu.is_open());
    assert_eq!(listeners.active_count(), 0);
}

#[test]
fn opening_registers_exactly_one_listener() {
    let (mut menu, listeners) = new_menu();
    menu.toggle();
    assert!(menu.is_open());
    assert_eq!(listeners.active_count(), 1);
}

#[test]
fn toggle_close_releases_the_listener() {
    let (mut menu, listeners) = new_menu();
    menu.toggle();
    menu.toggle();
    assert!(!menu.is_open());
    assert_eq!(listeners.active_count(), 0);
}

#[test]
fn outside_pointer_closes_and_releases() {
    let (mut menu, listeners) = new_menu();
    menu.toggle();
    menu.pointer_down(false);
    assert!(!menu.is_open());
    assert_eq!(listeners.active_count(), 0);
}

#[test]
fn inside_pointer_keeps_the_menu_open() {
    let (mut menu, listeners) = new_menu();
    menu.toggle();
    menu.pointer_down(true);
    assert!(menu.is_open());
    assert_eq!(listeners.active_count(), 1);
}

#[test]
fn pointer_down_while_closed_is_a_no_op() {
    let (mut menu, listeners) = new_menu();
    menu.pointer_down(false);
    menu.pointer_down(true);
    assert!(!menu.is_open());
    assert_eq!(listeners.active_count(), 0);
}

#[test]
fn close_while_closed_is_a_no_op() {
    let (mut menu, listeners) = new_menu();
    menu.close();
    assert!(!menu.is_open());
    assert_eq!(listeners.active_count(), 0);
}

#[test]
fn repeated_cycles_do_not_leak_listeners() {
    let (mut menu, listeners) = new_menu();
    for _ in 0..50 {
        menu.toggle();
        assert_eq!(listeners.active_count(), 1);
        menu.pointer_down(false);
        assert_eq!(listeners.active_count(), 0);
    }
}

#[test]
fn dropping_an_open_menu_releases_the_listener() {
    let (mut menu, listeners) = new_menu();
    menu.toggle();
    assert_eq!(listeners.active_count(), 1);
    drop(menu);
    assert_eq!(listeners.active_count(), 0);
}

#[test]
fn dropping_a_closed_menu_changes_nothing() {
    let (menu, listeners) = new_menu();
    drop(menu);
    assert_eq!(listeners.active_count(), 0);
}

#[test]
fn two_menus_hold_independent_subscriptions() {
    let listeners = Arc::new(PointerListenerRegistry::new());
    let mut first = MoveMenu::new(listeners.clone());
    let mut second = MoveMenu::new(listeners.clone());
    first.toggle();
    second.toggle();
    assert_eq!(listeners.active_count(), 2);
    first.close();
    assert_eq!(listeners.active_count(), 1);
    assert!(second.is_open());
    second.close();
    assert_eq!(listeners.active_count(), 0);
}
