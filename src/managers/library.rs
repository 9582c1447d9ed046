//! In-memory bookmark library.
//!
//! The library is the collection owner standing behind the card callbacks:
//! cards report intents, the library applies them, and the UI re-renders
//! from the updated collection. Folder order is insertion order and is the
//! order the move menu receives.

use uuid::Uuid;

use crate::card::CardHost;
use crate::types::bookmark::{Bookmark, Folder};
use crate::types::errors::LibraryError;

/// Trait defining bookmark library operations.
pub trait LibraryTrait {
    fn add_bookmark(
        &mut self,
        url: &str,
        title: &str,
        folder_id: Option<&str>,
    ) -> Result<String, LibraryError>;
    fn remove_bookmark(&mut self, id: &str) -> Result<(), LibraryError>;
    /// Flips the favorite flag. Returns the new state.
    fn toggle_favorite(&mut self, id: &str) -> Result<bool, LibraryError>;
    fn move_bookmark(&mut self, id: &str, folder_id: Option<&str>) -> Result<(), LibraryError>;
    fn get_bookmark(&self, id: &str) -> Option<&Bookmark>;
    fn list_bookmarks(&self) -> &[Bookmark];
    fn bookmark_count(&self) -> usize;
    fn create_folder(&mut self, name: &str, color: &str) -> String;
    fn delete_folder(&mut self, id: &str) -> Result<(), LibraryError>;
    fn list_folders(&self) -> &[Folder];
}

/// In-memory bookmark library.
pub struct Library {
    bookmarks: Vec<Bookmark>,
    folders: Vec<Folder>,
}

impl Library {
    pub fn new() -> Self {
        Self {
            bookmarks: Vec::new(),
            folders: Vec::new(),
        }
    }

    fn now_rfc3339() -> String {
        chrono::Utc::now().to_rfc3339()
    }

    fn find_bookmark_index(&self, id: &str) -> Option<usize> {
        self.bookmarks.iter().position(|b| b.id == id)
    }

    fn folder_exists(&self, folder_id: &str) -> bool {
        self.folders.iter().any(|f| f.id == folder_id)
    }

    /// Replaces the whole collection with a snapshot fetched from the
    /// backend. Folder order is kept as delivered.
    pub fn replace(&mut self, bookmarks: Vec<Bookmark>, folders: Vec<Folder>) {
        self.bookmarks = bookmarks;
        self.folders = folders;
    }
}

impl Default for Library {
    fn default() -> Self {
        Self::new()
    }
}

impl LibraryTrait for Library {
    /// Adds a new bookmark. Returns the generated bookmark ID.
    fn add_bookmark(
        &mut self,
        url: &str,
        title: &str,
        folder_id: Option<&str>,
    ) -> Result<String, LibraryError> {
        if let Some(fid) = folder_id {
            if !self.folder_exists(fid) {
                return Err(LibraryError::FolderNotFound(fid.to_string()));
            }
        }

        let id = Uuid::new_v4().to_string();
        self.bookmarks.push(Bookmark {
            id: id.clone(),
            url: url.to_string(),
            title: title.to_string(),
            created_at: Self::now_rfc3339(),
            is_favorite: false,
            folder_id: folder_id.map(str::to_string),
        });
        Ok(id)
    }

    fn remove_bookmark(&mut self, id: &str) -> Result<(), LibraryError> {
        let idx = self
            .find_bookmark_index(id)
            .ok_or_else(|| LibraryError::NotFound(id.to_string()))?;
        self.bookmarks.remove(idx);
        Ok(())
    }

    fn toggle_favorite(&mut self, id: &str) -> Result<bool, LibraryError> {
        let idx = self
            .find_bookmark_index(id)
            .ok_or_else(|| LibraryError::NotFound(id.to_string()))?;
        let bookmark = &mut self.bookmarks[idx];
        bookmark.is_favorite = !bookmark.is_favorite;
        Ok(bookmark.is_favorite)
    }

    /// Moves a bookmark to a folder, or unfiles it when `folder_id` is `None`.
    /// Moving to the folder it is already in is accepted and changes nothing.
    fn move_bookmark(&mut self, id: &str, folder_id: Option<&str>) -> Result<(), LibraryError> {
        if let Some(fid) = folder_id {
            if !self.folder_exists(fid) {
                return Err(LibraryError::FolderNotFound(fid.to_string()));
            }
        }
        let idx = self
            .find_bookmark_index(id)
            .ok_or_else(|| LibraryError::NotFound(id.to_string()))?;
        self.bookmarks[idx].folder_id = folder_id.map(str::to_string);
        Ok(())
    }

    fn get_bookmark(&self, id: &str) -> Option<&Bookmark> {
        self.bookmarks.iter().find(|b| b.id == id)
    }

    fn list_bookmarks(&self) -> &[Bookmark] {
        &self.bookmarks
    }

    fn bookmark_count(&self) -> usize {
        self.bookmarks.len()
    }

    /// Creates a new folder. Returns the generated folder ID.
    fn create_folder(&mut self, name: &str, color: &str) -> String {
        let id = Uuid::new_v4().to_string();
        self.folders.push(Folder {
            id: id.clone(),
            name: name.to_string(),
            color: color.to_string(),
        });
        id
    }

    /// Deletes a folder. Bookmarks filed under it become unfiled.
    fn delete_folder(&mut self, id: &str) -> Result<(), LibraryError> {
        let idx = self
            .folders
            .iter()
            .position(|f| f.id == id)
            .ok_or_else(|| LibraryError::FolderNotFound(id.to_string()))?;
        self.folders.remove(idx);
        for bookmark in &mut self.bookmarks {
            if bookmark.folder_id.as_deref() == Some(id) {
                bookmark.folder_id = None;
            }
        }
        Ok(())
    }

    fn list_folders(&self) -> &[Folder] {
        &self.folders
    }
}

/// The card contract carries no return channel, so operation errors are
/// dropped here; a delete or move naming a record that no longer exists
/// simply leaves the collection unchanged.
impl CardHost for Library {
    fn delete_bookmark(&mut self, id: &str) {
        let _ = self.remove_bookmark(id);
    }

    fn toggle_favorite(&mut self, id: &str, _currently_favorite: bool) {
        let _ = LibraryTrait::toggle_favorite(self, id);
    }

    fn move_bookmark(&mut self, bookmark_id: &str, folder_id: Option<&str>) {
        let _ = LibraryTrait::move_bookmark(self, bookmark_id, folder_id);
    }
}
