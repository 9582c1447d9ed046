//! UI event dispatch for Shelfmark.
//!
//! The webview shell forwards user interactions as JSON messages; this
//! module routes them to the card instances and the library via the `App`
//! struct. Kept separate from the shell so it can be unit-tested without a
//! window.

use std::sync::Mutex;

use serde_json::{json, Value};

use crate::app::App;
use crate::managers::library::LibraryTrait;

/// Dispatches one UI event to the appropriate handler.
///
/// Returns `Ok(Value)` on success or `Err(String)` with an error message.
pub fn handle_event(app: &Mutex<App>, action: &str, params: &Value) -> Result<Value, String> {
    match action {
        // ─── Card intents ───
        "card.toggle_favorite" => {
            let id = params.get("id").and_then(|v| v.as_str()).ok_or("missing id")?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            if !a.toggle_favorite(id) {
                return Err(format!("unknown bookmark: {}", id));
            }
            Ok(json!({"ok": true}))
        }
        "card.delete" => {
            let id = params.get("id").and_then(|v| v.as_str()).ok_or("missing id")?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            if !a.delete(id) {
                return Err(format!("unknown bookmark: {}", id));
            }
            Ok(json!({"ok": true}))
        }

        // ─── Move menu ───
        "card.menu_toggle" => {
            let id = params.get("id").and_then(|v| v.as_str()).ok_or("missing id")?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            if !a.toggle_menu(id) {
                return Err(format!("unknown bookmark: {}", id));
            }
            let open = a.card(id).map(|c| c.menu_open()).unwrap_or(false);
            Ok(json!({"open": open}))
        }
        "card.menu_select" => {
            let id = params.get("id").and_then(|v| v.as_str()).ok_or("missing id")?;
            // A null or absent folder_id selects "Unfiled".
            let folder_id = params.get("folder_id").and_then(|v| v.as_str());
            let mut a = app.lock().map_err(|e| e.to_string())?;
            if !a.menu_select(id, folder_id) {
                return Err(format!("unknown bookmark: {}", id));
            }
            Ok(json!({"ok": true}))
        }
        "pointer.down" => {
            // `menu_card_id` names the card whose open-menu subtree contained
            // the pointer target; absent means the pointer landed elsewhere.
            let inside = params.get("menu_card_id").and_then(|v| v.as_str());
            let mut a = app.lock().map_err(|e| e.to_string())?;
            a.pointer_down(inside);
            Ok(json!({"ok": true}))
        }

        // ─── Library ───
        "library.render" => {
            let mut a = app.lock().map_err(|e| e.to_string())?;
            let html = a.render_cards(chrono::Utc::now());
            Ok(json!({"html": html}))
        }
        "library.add" => {
            let url = params.get("url").and_then(|v| v.as_str()).ok_or("missing url")?;
            let title = params.get("title").and_then(|v| v.as_str()).ok_or("missing title")?;
            let folder = params.get("folder_id").and_then(|v| v.as_str());
            let mut a = app.lock().map_err(|e| e.to_string())?;
            let id = a
                .library
                .add_bookmark(url, title, folder)
                .map_err(|e| e.to_string())?;
            a.sync_cards();
            Ok(json!({"id": id}))
        }
        "folder.create" => {
            let name = params.get("name").and_then(|v| v.as_str()).ok_or("missing name")?;
            let color = params
                .get("color")
                .and_then(|v| v.as_str())
                .unwrap_or("#8b949e");
            let mut a = app.lock().map_err(|e| e.to_string())?;
            let id = a.library.create_folder(name, color);
            Ok(json!({"id": id}))
        }

        _ => Err(format!("unknown action: {}", action)),
    }
}
