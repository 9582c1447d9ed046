//! Unit tests for the JSON event dispatch layer.

use std::sync::Mutex;

use serde_json::{json, Value};
use shelfmark::app::App;
use shelfmark::event_handler::handle_event;
use shelfmark::managers::library::LibraryTrait;
use shelfmark::services::api_client::MissingConfigPolicy;

fn new_app() -> Mutex<App> {
    Mutex::new(App::new(MissingConfigPolicy::Placeholder).unwrap())
}

fn add_bookmark(app: &Mutex<App>, url: &str, title: &str) -> String {
    let result = handle_event(app, "library.add", &json!({"url": url, "title": title})).unwrap();
    result["id"].as_str().unwrap().to_string()
}

#[test]
fn library_add_creates_a_bookmark_and_its_card() {
    let app = new_app();
    let id = add_bookmark(&app, "https://example.com", "Example");
    let a = app.lock().unwrap();
    assert!(a.library.get_bookmark(&id).is_some());
    assert!(a.card(&id).is_some());
}

#[test]
fn toggle_favorite_flips_the_flag() {
    let app = new_app();
    let id = add_bookmark(&app, "https://example.com", "Example");
    handle_event(&app, "card.toggle_favorite", &json!({"id": id})).unwrap();
    assert!(app.lock().unwrap().library.get_bookmark(&id).unwrap().is_favorite);
}

#[test]
fn delete_removes_bookmark_and_card() {
    let app = new_app();
    let id = add_bookmark(&app, "https://example.com", "Example");
    handle_event(&app, "card.delete", &json!({"id": id})).unwrap();
    let a = app.lock().unwrap();
    assert!(a.library.get_bookmark(&id).is_none());
    assert!(a.card(&id).is_none());
}

#[test]
fn delete_with_open_menu_releases_the_listener() {
    let app = new_app();
    let id = add_bookmark(&app, "https://example.com", "Example");
    handle_event(&app, "card.menu_toggle", &json!({"id": id})).unwrap();
    assert_eq!(app.lock().unwrap().listeners.active_count(), 1);
    handle_event(&app, "card.delete", &json!({"id": id})).unwrap();
    assert_eq!(app.lock().unwrap().listeners.active_count(), 0);
}

#[test]
fn menu_toggle_reports_the_new_state() {
    let app = new_app();
    let id = add_bookmark(&app, "https://example.com", "Example");
    let opened = handle_event(&app, "card.menu_toggle", &json!({"id": id})).unwrap();
    assert_eq!(opened["open"], Value::Bool(true));
    let closed = handle_event(&app, "card.menu_toggle", &json!({"id": id})).unwrap();
    assert_eq!(closed["open"], Value::Bool(false));
}

#[test]
fn menu_select_moves_and_closes() {
    let app = new_app();
    let folder = handle_event(&app, "folder.create", &json!({"name": "Work", "color": "#58a6ff"}))
        .unwrap()["id"]
        .as_str()
        .unwrap()
        .to_string();
    let id = add_bookmark(&app, "https://example.com", "Example");

    handle_event(&app, "card.menu_toggle", &json!({"id": id})).unwrap();
    handle_event(&app, "card.menu_select", &json!({"id": id, "folder_id": folder})).unwrap();

    let a = app.lock().unwrap();
    assert_eq!(
        a.library.get_bookmark(&id).unwrap().folder_id.as_deref(),
        Some(folder.as_str())
    );
    assert!(!a.card(&id).unwrap().menu_open());
    assert_eq!(a.listeners.active_count(), 0);
}

#[test]
fn menu_select_with_null_folder_unfiles() {
    let app = new_app();
    let folder = handle_event(&app, "folder.create", &json!({"name": "Work"})).unwrap()["id"]
        .as_str()
        .unwrap()
        .to_string();
    let id = add_bookmark(&app, "https://example.com", "Example");
    {
        let mut a = app.lock().unwrap();
        LibraryTrait::move_bookmark(&mut a.library, &id, Some(&folder)).unwrap();
    }

    handle_event(&app, "card.menu_toggle", &json!({"id": id})).unwrap();
    handle_event(&app, "card.menu_select", &json!({"id": id, "folder_id": null})).unwrap();
    assert_eq!(app.lock().unwrap().library.get_bookmark(&id).unwrap().folder_id, None);
}

#[test]
fn pointer_down_elsewhere_closes_open_menus() {
    let app = new_app();
    let id = add_bookmark(&app, "https://example.com", "Example");
    handle_event(&app, "card.menu_toggle", &json!({"id": id})).unwrap();
    handle_event(&app, "pointer.down", &json!({})).unwrap();
    let a = app.lock().unwrap();
    assert!(!a.card(&id).unwrap().menu_open());
    assert_eq!(a.listeners.active_count(), 0);
}

#[test]
fn pointer_down_inside_own_menu_keeps_it_open() {
    let app = new_app();
    let id = add_bookmark(&app, "https://example.com", "Example");
    handle_event(&app, "card.menu_toggle", &json!({"id": id})).unwrap();
    handle_event(&app, "pointer.down", &json!({"menu_card_id": id})).unwrap();
    assert!(app.lock().unwrap().card(&id).unwrap().menu_open());
}

#[test]
fn pointer_down_inside_one_menu_closes_the_others() {
    let app = new_app();
    let first = add_bookmark(&app, "https://example.com/a", "A");
    let second = add_bookmark(&app, "https://example.com/b", "B");
    handle_event(&app, "card.menu_toggle", &json!({"id": first})).unwrap();
    handle_event(&app, "card.menu_toggle", &json!({"id": second})).unwrap();

    handle_event(&app, "pointer.down", &json!({"menu_card_id": second})).unwrap();
    let a = app.lock().unwrap();
    assert!(!a.card(&first).unwrap().menu_open());
    assert!(a.card(&second).unwrap().menu_open());
    assert_eq!(a.listeners.active_count(), 1);
}

#[test]
fn library_render_returns_the_card_grid() {
    let app = new_app();
    add_bookmark(&app, "https://www.example.com", "Example");
    let result = handle_event(&app, "library.render", &json!({})).unwrap();
    let html = result["html"].as_str().unwrap();
    assert!(html.contains("card-grid"));
    assert!(html.contains("example.com"));
}

#[test]
fn unknown_action_is_an_error() {
    let app = new_app();
    let err = handle_event(&app, "nope", &json!({})).unwrap_err();
    assert!(err.contains("unknown action"));
}

#[test]
fn missing_id_is_an_error() {
    let app = new_app();
    assert!(handle_event(&app, "card.delete", &json!({})).is_err());
    assert!(handle_event(&app, "card.menu_toggle", &json!({})).is_err());
}

#[test]
fn unknown_bookmark_id_is_an_error() {
    let app = new_app();
    let err = handle_event(&app, "card.delete", &json!({"id": "missing"})).unwrap_err();
    assert!(err.contains("unknown bookmark"));
}
