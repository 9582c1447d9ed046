use serde::{Deserialize, Serialize};

/// Represents a saved bookmark.
///
/// `created_at` is an RFC 3339 timestamp string as delivered by the backend;
/// it stays a string here and is only parsed when a display label is derived.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bookmark {
    pub id: String,
    pub url: String,
    pub title: String,
    pub created_at: String,
    pub is_favorite: bool,
    pub folder_id: Option<String>,
}

/// Represents a folder a bookmark may be filed under.
///
/// `color` is a CSS color value, used as a swatch in the move menu and, at
/// reduced opacity, as the background tint of the folder badge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Folder {
    pub id: String,
    pub name: String,
    pub color: String,
}
