//! The bookmark card: one interactive card per saved link.
//!
//! The card is a projection of `(bookmark, folders, now)` plus a single
//! piece of transient UI state, the move menu. It never owns or mutates
//! source-of-truth data: every durable change is reported upward through
//! [`CardHost`] and the caller re-renders from its updated collection.

pub mod display;
pub mod move_menu;
pub mod render;

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::card::move_menu::{MoveMenu, PointerListenerRegistry};
use crate::types::bookmark::{Bookmark, Folder};

/// Callback contract through which the card reports user intents.
///
/// Arguments are values only; no return value is consumed. The card assumes
/// the host does not fail — any error arising from handling an intent is the
/// host's responsibility.
pub trait CardHost {
    fn delete_bookmark(&mut self, id: &str);
    /// Receives the bookmark's *current* favorite state, not the desired one.
    fn toggle_favorite(&mut self, id: &str, currently_favorite: bool);
    /// `folder_id` of `None` means "unfiled".
    fn move_bookmark(&mut self, bookmark_id: &str, folder_id: Option<&str>);
}

/// The assigned-folder badge shown in the card footer.
#[derive(Debug, Clone, PartialEq)]
pub struct FolderBadge {
    pub name: String,
    pub color: String,
}

/// One selectable row of the move menu.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuEntry {
    /// `None` for the "Unfiled" entry.
    pub folder_id: Option<String>,
    pub label: String,
    /// Swatch color; the "Unfiled" entry has none.
    pub color: Option<String>,
    /// Marks the bookmark's current assignment. The entry stays selectable;
    /// re-selecting it is a legal no-op move request.
    pub current: bool,
}

/// Everything the renderer needs for one card, fully derived.
///
/// Given the same bookmark, folder collection and clock reading, the view
/// is identical — derivation has no side effects.
#[derive(Debug, Clone, PartialEq)]
pub struct CardView {
    pub id: String,
    pub title: String,
    pub url: String,
    pub domain: String,
    pub favicon_url: String,
    pub time_label: String,
    pub is_favorite: bool,
    pub folder_badge: Option<FolderBadge>,
    pub menu_open: bool,
    pub menu_entries: Vec<MenuEntry>,
}

/// One card instance: a bookmark id plus its move-menu state.
pub struct BookmarkCard {
    bookmark_id: String,
    menu: MoveMenu,
}

impl BookmarkCard {
    pub fn new(bookmark_id: impl Into<String>, listeners: Arc<PointerListenerRegistry>) -> Self {
        Self {
            bookmark_id: bookmark_id.into(),
            menu: MoveMenu::new(listeners),
        }
    }

    pub fn bookmark_id(&self) -> &str {
        &self.bookmark_id
    }

    pub fn menu_open(&self) -> bool {
        self.menu.is_open()
    }

    /// Derives the card's display state from an immutable snapshot.
    pub fn view(&self, bookmark: &Bookmark, folders: &[Folder], now: DateTime<Utc>) -> CardView {
        let domain = display::domain(&bookmark.url);
        let favicon_url = display::favicon_url(&domain);

        let folder_badge = bookmark.folder_id.as_deref().and_then(|fid| {
            folders.iter().find(|f| f.id == fid).map(|f| FolderBadge {
                name: f.name.clone(),
                color: f.color.clone(),
            })
        });

        CardView {
            id: bookmark.id.clone(),
            title: bookmark.title.clone(),
            url: bookmark.url.clone(),
            favicon_url,
            domain,
            time_label: display::time_ago(&bookmark.created_at, now),
            is_favorite: bookmark.is_favorite,
            folder_badge,
            menu_open: self.menu.is_open(),
            menu_entries: Self::menu_entries(bookmark, folders),
        }
    }

    /// Builds the move-menu rows: "Unfiled" first, then the folders in the
    /// supplied order. An unmatched non-null `folder_id` marks no entry
    /// current; that is the only effect of a stale reference.
    pub fn menu_entries(bookmark: &Bookmark, folders: &[Folder]) -> Vec<MenuEntry> {
        let mut entries = Vec::with_capacity(folders.len() + 1);
        entries.push(MenuEntry {
            folder_id: None,
            label: "Unfiled".to_string(),
            color: None,
            current: bookmark.folder_id.is_none(),
        });
        for folder in folders {
            entries.push(MenuEntry {
                folder_id: Some(folder.id.clone()),
                label: folder.name.clone(),
                color: Some(folder.color.clone()),
                current: bookmark.folder_id.as_deref() == Some(folder.id.as_str()),
            });
        }
        entries
    }

    /// Reports a favorite toggle with the bookmark's current state.
    pub fn toggle_favorite(&self, currently_favorite: bool, host: &mut dyn CardHost) {
        host.toggle_favorite(&self.bookmark_id, currently_favorite);
    }

    /// Reports a delete. No confirmation step and no local removal; the
    /// caller's collection update drives the re-render.
    pub fn delete(&self, host: &mut dyn CardHost) {
        host.delete_bookmark(&self.bookmark_id);
    }

    /// The move trigger control was activated.
    pub fn toggle_menu(&mut self) {
        self.menu.toggle();
    }

    /// A menu entry was selected. Fires the move callback first, then
    /// closes the menu. Ignored while the menu is closed, since a closed
    /// menu renders no selectable entries.
    pub fn select_entry(&mut self, folder_id: Option<&str>, host: &mut dyn CardHost) {
        if !self.menu.is_open() {
            return;
        }
        host.move_bookmark(&self.bookmark_id, folder_id);
        self.menu.close();
    }

    /// A document-level pointer-down was observed; `inside_menu` says
    /// whether it landed within this card's open menu subtree.
    pub fn pointer_down(&mut self, inside_menu: bool) {
        self.menu.pointer_down(inside_menu);
    }
}
