//! Pure display derivations for the bookmark card.
//!
//! Every function here is deterministic given its inputs (including the
//! caller-supplied clock reading) and never fails: malformed input degrades
//! to an empty string so the card renders in a reduced but non-crashing state.

use chrono::{DateTime, Utc};
use url::Url;

const MS_PER_MINUTE: i64 = 60_000;
const MS_PER_HOUR: i64 = 3_600_000;
const MS_PER_DAY: i64 = 86_400_000;

/// Formats how long ago `created_at` was relative to `now`.
///
/// Buckets, first match wins: "Just now" (< 1 minute), "{m}m ago"
/// (< 60 minutes), "{h}h ago" (< 24 hours), "Yesterday" (exactly 1 elapsed
/// day), "{d}d ago" (< 7 days), otherwise an abbreviated month + day such
/// as "Feb 3". Divisions are integer floor divisions over elapsed
/// milliseconds; an elapsed time in the past of `created_at` clamps to zero.
///
/// An unparseable `created_at` yields an empty label.
pub fn time_ago(created_at: &str, now: DateTime<Utc>) -> String {
    let created = match DateTime::parse_from_rfc3339(created_at) {
        Ok(dt) => dt.with_timezone(&Utc),
        Err(_) => return String::new(),
    };

    let diff_ms = (now - created).num_milliseconds().max(0);
    let diff_mins = diff_ms / MS_PER_MINUTE;
    let diff_hours = diff_ms / MS_PER_HOUR;
    let diff_days = diff_ms / MS_PER_DAY;

    if diff_mins < 1 {
        "Just now".to_string()
    } else if diff_mins < 60 {
        format!("{}m ago", diff_mins)
    } else if diff_hours < 24 {
        format!("{}h ago", diff_hours)
    } else if diff_days == 1 {
        "Yesterday".to_string()
    } else if diff_days < 7 {
        format!("{}d ago", diff_days)
    } else {
        created.format("%b %-d").to_string()
    }
}

/// Extracts the display domain from a bookmark URL.
///
/// One leading `www.` is stripped; a `www` appearing anywhere else in the
/// hostname is kept. A URL that does not parse as absolute, or has no host
/// (e.g. `mailto:`), yields an empty string rather than an error.
pub fn domain(url: &str) -> String {
    match Url::parse(url) {
        Ok(parsed) => {
            let host = parsed.host_str().unwrap_or("");
            host.strip_prefix("www.").unwrap_or(host).to_string()
        }
        Err(_) => String::new(),
    }
}

/// Builds the favicon image URL for a display domain.
///
/// Purely a string template; the image is fetched by the rendering engine
/// and hides itself on load failure, so no validation happens here.
pub fn favicon_url(domain: &str) -> String {
    format!("https://www.google.com/s2/favicons?domain={}&sz=64", domain)
}
