//! NASA API Types
//!
//! Wire types for the "picture of the day" endpoint and the image-search
//! endpoint, plus the flattened [`GalaxyCard`] the home screen renders.

use serde::{Deserialize, Serialize};

/// Astronomy Picture of the Day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Apod {
    pub url: String,
    pub title: String,
    pub date: String,
    pub explanation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hdurl: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub copyright: Option<String>,
}

/// Top-level image-search response
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    pub collection: SearchCollection,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchCollection {
    #[serde(default)]
    pub items: Vec<SearchItem>,
}

/// One search hit: the image links and its metadata records
#[derive(Debug, Clone, Deserialize)]
pub struct SearchItem {
    #[serde(default)]
    pub links: Vec<SearchLink>,
    #[serde(default)]
    pub data: Vec<SearchData>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchLink {
    pub href: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchData {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub date_created: String,
    #[serde(default)]
    pub description: String,
}

/// A galaxy entry ready for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalaxyCard {
    pub image_url: String,
    pub title: String,
    pub date_created: String,
    pub description: String,
}

impl GalaxyCard {
    /// `links[0].href` plus `data[0]`; `None` when either is missing
    pub fn from_item(item: SearchItem) -> Option<Self> {
        let image_url = item.links.into_iter().next()?.href;
        let data = item.data.into_iter().next()?;
        Some(Self {
            image_url,
            title: data.title,
            date_created: data.date_created,
            description: data.description,
        })
    }

    /// Creation date as `YYYY-MM-DD`; the raw value when it does not parse
    pub fn display_date(&self) -> String {
        format_date(&self.date_created)
    }
}

/// Render an RFC 3339 timestamp as a calendar date
pub fn format_date(raw: &str) -> String {
    match chrono::DateTime::parse_from_rfc3339(raw) {
        Ok(dt) => dt.format("%Y-%m-%d").to_string(),
        Err(_) => raw.to_string(),
    }
}

/// First `max_chars` characters followed by `...`
///
/// The ellipsis is always appended, matching the collapsed card text.
pub fn excerpt(text: &str, max_chars: usize) -> String {
    let cut: String = text.chars().take(max_chars).collect();
    format!("{}...", cut)
}
