//! App core for Shelfmark.
//!
//! Holds the bookmark library, the remote client, the shared pointer
//! listener registry and one [`BookmarkCard`] per bookmark. Card instances
//! persist across renders so menu state survives; removing a bookmark drops
//! its card, which releases any open-menu listener through `Drop`.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::card::move_menu::PointerListenerRegistry;
use crate::card::{render, BookmarkCard};
use crate::managers::library::{Library, LibraryTrait};
use crate::services::api_client::{ApiClient, MissingConfigPolicy};
use crate::types::errors::{ApiError, ConfigError};

/// Central application struct.
pub struct App {
    pub library: Library,
    pub client: ApiClient,
    pub listeners: Arc<PointerListenerRegistry>,
    cards: HashMap<String, BookmarkCard>,
}

impl App {
    /// Creates a new App. With `MissingConfigPolicy::Placeholder` this
    /// succeeds even in an environment that carries no backend
    /// configuration; the client then fails at call time instead.
    pub fn new(policy: MissingConfigPolicy) -> Result<Self, ConfigError> {
        Ok(Self {
            library: Library::new(),
            client: ApiClient::from_env(policy)?,
            listeners: Arc::new(PointerListenerRegistry::new()),
            cards: HashMap::new(),
        })
    }

    /// Replaces the library with the remote collection and re-syncs cards.
    pub async fn refresh_from_remote(&mut self) -> Result<(), ApiError> {
        let folders = self.client.fetch_folders().await?;
        let bookmarks = self.client.fetch_bookmarks().await?;
        self.library.replace(bookmarks, folders);
        self.sync_cards();
        Ok(())
    }

    /// Creates cards for new bookmarks and drops cards whose bookmark is
    /// gone. Dropping a card with an open menu releases its listener.
    pub fn sync_cards(&mut self) {
        let library = &self.library;
        self.cards
            .retain(|id, _| library.get_bookmark(id).is_some());
        for bookmark in self.library.list_bookmarks() {
            if !self.cards.contains_key(&bookmark.id) {
                self.cards.insert(
                    bookmark.id.clone(),
                    BookmarkCard::new(bookmark.id.clone(), self.listeners.clone()),
                );
            }
        }
    }

    pub fn card(&self, id: &str) -> Option<&BookmarkCard> {
        self.cards.get(id)
    }

    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    /// Favorite toggle intent for one card. Returns false for an unknown id.
    pub fn toggle_favorite(&mut self, id: &str) -> bool {
        let current = match self.library.get_bookmark(id) {
            Some(b) => b.is_favorite,
            None => return false,
        };
        let card = match self.cards.get(id) {
            Some(c) => c,
            None => return false,
        };
        card.toggle_favorite(current, &mut self.library);
        true
    }

    /// Delete intent for one card. Returns false for an unknown id.
    pub fn delete(&mut self, id: &str) -> bool {
        match self.cards.get(id) {
            Some(card) => card.delete(&mut self.library),
            None => return false,
        }
        self.sync_cards();
        true
    }

    /// Move-trigger activation for one card.
    pub fn toggle_menu(&mut self, id: &str) -> bool {
        match self.cards.get_mut(id) {
            Some(card) => {
                card.toggle_menu();
                true
            }
            None => false,
        }
    }

    /// Menu selection for one card; `folder_id` of `None` means "Unfiled".
    pub fn menu_select(&mut self, id: &str, folder_id: Option<&str>) -> bool {
        match self.cards.get_mut(id) {
            Some(card) => {
                card.select_entry(folder_id, &mut self.library);
                true
            }
            None => false,
        }
    }

    /// Document-level pointer-down. `inside_menu_of` names the card whose
    /// open-menu subtree contained the event target, if any; every other
    /// open menu closes.
    pub fn pointer_down(&mut self, inside_menu_of: Option<&str>) {
        for (id, card) in self.cards.iter_mut() {
            card.pointer_down(inside_menu_of == Some(id.as_str()));
        }
    }

    /// Renders the card grid for the current collection.
    pub fn render_cards(&mut self, now: DateTime<Utc>) -> String {
        self.sync_cards();
        let folders = self.library.list_folders().to_vec();
        let mut html = String::with_capacity(1024 * self.library.bookmark_count().max(1));
        html.push_str("<div class=\"card-grid\">");
        for bookmark in self.library.list_bookmarks() {
            if let Some(card) = self.cards.get(&bookmark.id) {
                let view = card.view(bookmark, &folders, now);
                html.push_str(&render::render_card(&view));
            }
        }
        html.push_str("</div>");
        html
    }
}
