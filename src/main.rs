//! Shelfmark — a personal bookmarking app with a card-based UI.
//!
//! Entry point: opens the webview shell when built with the `gui` feature.
//! Without it, runs a console demo exercising the headless core.

#[cfg(feature = "gui")]
fn main() {
    shelfmark::ui::webview_app::run();
}

#[cfg(not(feature = "gui"))]
fn main() {
    println!();
    println!("╔══════════════════════════════════════════════════════════╗");
    println!("║            Shelfmark v{} — Demo Mode                  ║", env!("CARGO_PKG_VERSION"));
    println!("║       Personal bookmarking with a card-based UI          ║");
    println!("╚══════════════════════════════════════════════════════════╝");
    println!();

    demo_library();
    demo_card();
    demo_move_menu();
    demo_client();
}

#[cfg(not(feature = "gui"))]
fn demo_library() {
    use shelfmark::managers::library::{Library, LibraryTrait};

    println!("── Library ──");
    let mut library = Library::new();
    let reading = library.create_folder("Reading", "#3fb950");
    let id = library
        .add_bookmark("https://www.rust-lang.org/learn", "Learn Rust", Some(&reading))
        .expect("folder exists");
    let _ = library.add_bookmark("https://github.com", "GitHub", None);
    println!("  {} bookmarks, {} folders", library.bookmark_count(), library.list_folders().len());
    library.move_bookmark(&id, None).expect("bookmark exists");
    println!(
        "  moved '{}' to Unfiled",
        library.get_bookmark(&id).map(|b| b.title.as_str()).unwrap_or("?")
    );
    println!();
}

#[cfg(not(feature = "gui"))]
fn demo_card() {
    use std::sync::Arc;

    use shelfmark::card::move_menu::PointerListenerRegistry;
    use shelfmark::card::BookmarkCard;
    use shelfmark::types::bookmark::{Bookmark, Folder};

    println!("── Card ──");
    let bookmark = Bookmark {
        id: "demo".to_string(),
        url: "https://www.example.com/articles/1".to_string(),
        title: "An example article".to_string(),
        created_at: (chrono::Utc::now() - chrono::Duration::hours(3)).to_rfc3339(),
        is_favorite: true,
        folder_id: Some("f1".to_string()),
    };
    let folders = vec![Folder {
        id: "f1".to_string(),
        name: "Reading".to_string(),
        color: "#3fb950".to_string(),
    }];

    let card = BookmarkCard::new("demo", Arc::new(PointerListenerRegistry::new()));
    let view = card.view(&bookmark, &folders, chrono::Utc::now());
    println!("  domain: {}", view.domain);
    println!("  saved:  {}", view.time_label);
    if let Some(badge) = &view.folder_badge {
        println!("  folder: {} ({})", badge.name, badge.color);
    }
    println!();
}

#[cfg(not(feature = "gui"))]
fn demo_move_menu() {
    use std::sync::Arc;

    use shelfmark::card::move_menu::{MoveMenu, PointerListenerRegistry};

    println!("── Move menu ──");
    let listeners = Arc::new(PointerListenerRegistry::new());
    let mut menu = MoveMenu::new(listeners.clone());
    menu.toggle();
    println!("  open, listeners: {}", listeners.active_count());
    menu.pointer_down(false);
    println!("  outside click → closed, listeners: {}", listeners.active_count());
    println!();
}

#[cfg(not(feature = "gui"))]
fn demo_client() {
    use shelfmark::services::api_client::{ApiClient, MissingConfigPolicy};

    println!("── Client factory ──");
    match ApiClient::from_env(MissingConfigPolicy::Placeholder) {
        Ok(client) => println!(
            "  endpoint: {} (placeholder: {})",
            client.base_url(),
            client.is_placeholder()
        ),
        Err(err) => println!("  {}", err),
    }
    println!();
}
