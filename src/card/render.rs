//! HTML rendering for a derived [`CardView`].
//!
//! The fragment is plain markup with `data-action` attributes; the webview
//! shell wires those to IPC messages (stopping event bubbling so an inner
//! control click never counts as opening or selecting the card). The open
//! link is a real anchor targeting a new browsing context and goes through
//! no callback at all.

use crate::card::CardView;

/// Escapes text for use in HTML content and attribute values.
pub fn html_escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Renders one bookmark card as an HTML fragment.
pub fn render_card(view: &CardView) -> String {
    let id = html_escape(&view.id);
    let url = html_escape(&view.url);
    let mut html = String::with_capacity(1024);

    html.push_str(&format!("<div class=\"card\" data-card-id=\"{}\">", id));
    html.push_str("<div class=\"card-body\">");

    // Header: favicon + domain + actions
    html.push_str("<div class=\"card-header\">");
    html.push_str("<div class=\"card-site\">");
    if !view.domain.is_empty() {
        // A failed favicon fetch hides the image; the domain text stays.
        html.push_str(&format!(
            "<img class=\"favicon\" src=\"{}\" alt=\"\" onerror=\"this.style.display='none'\">",
            html_escape(&view.favicon_url)
        ));
    }
    html.push_str(&format!(
        "<span class=\"domain\">{}</span>",
        html_escape(&view.domain)
    ));
    html.push_str("</div>");

    html.push_str("<div class=\"card-actions\">");
    html.push_str(&format!(
        "<button class=\"icon-btn{}\" data-action=\"toggle-favorite\" title=\"{}\">{}</button>",
        if view.is_favorite { " favorite" } else { "" },
        if view.is_favorite {
            "Remove from favorites"
        } else {
            "Add to favorites"
        },
        if view.is_favorite { "★" } else { "☆" }
    ));

    // Move trigger + dropdown
    html.push_str(&format!("<div class=\"move-wrap\" data-menu-for=\"{}\">", id));
    html.push_str(
        "<button class=\"icon-btn\" data-action=\"menu-toggle\" title=\"Move to folder\">▾</button>",
    );
    if view.menu_open {
        html.push_str("<div class=\"move-menu\">");
        for entry in &view.menu_entries {
            let current = if entry.current { " current" } else { "" };
            let folder_attr = entry.folder_id.as_deref().unwrap_or("");
            let swatch = match &entry.color {
                Some(color) => format!(
                    "<span class=\"swatch\" style=\"background:{}\"></span>",
                    html_escape(color)
                ),
                None => "<span class=\"swatch unfiled\"></span>".to_string(),
            };
            html.push_str(&format!(
                "<button class=\"menu-entry{}\" data-action=\"menu-select\" data-folder-id=\"{}\">{}{}</button>",
                current,
                html_escape(folder_attr),
                swatch,
                html_escape(&entry.label)
            ));
        }
        html.push_str("</div>");
    }
    html.push_str("</div>");

    html.push_str(&format!(
        "<a class=\"icon-btn\" href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\" \
         onclick=\"event.stopPropagation()\" title=\"Open link\">↗</a>",
        url
    ));
    html.push_str(
        "<button class=\"icon-btn danger\" data-action=\"delete\" title=\"Delete\">✕</button>",
    );
    html.push_str("</div>"); // card-actions
    html.push_str("</div>"); // card-header

    html.push_str(&format!(
        "<h3 class=\"card-title\">{}</h3>",
        html_escape(&view.title)
    ));
    html.push_str(&format!("<p class=\"card-url\">{}</p>", url));
    html.push_str("</div>"); // card-body

    // Footer: time label + folder badge + favorite marker
    html.push_str("<div class=\"card-footer\">");
    html.push_str(&format!(
        "<span class=\"time\">{}</span>",
        html_escape(&view.time_label)
    ));
    html.push_str("<div class=\"footer-meta\">");
    if let Some(badge) = &view.folder_badge {
        let color = html_escape(&badge.color);
        // Two-digit alpha suffix tints the badge with the folder color.
        html.push_str(&format!(
            "<span class=\"folder-badge\" style=\"background:{}12;color:{}\">{}</span>",
            color,
            color,
            html_escape(&badge.name)
        ));
    }
    if view.is_favorite {
        html.push_str("<span class=\"favorite-marker\">★</span>");
    }
    html.push_str("</div>");
    html.push_str("</div>"); // card-footer

    html.push_str("</div>"); // card
    html
}
