#[cfg(feature = "serde0")]
use serde::{Deserialize, Serialize};

use crate::text::{char_len, truncate_chars};

/// Display cap for `full_content`, before the ellipsis marker.
pub const MAX_DISPLAY_LEN: usize = 497;

/// Marker appended to truncated display text.
const ELLIPSIS: &str = "...";

/// Bodies must exceed this many chars to be fed to the summarizer.
pub const MIN_SUMMARY_INPUT_LEN: usize = 100;

/// `published` value when the provider supplied none.
pub const NO_PUBLISHED_PLACEHOLDER: &str = "N/A";

/// `original_summary` value when the provider supplied none.
pub const NO_FEED_SUMMARY_PLACEHOLDER: &str = "No summary available.";

/// `generated_summary` value when the body was missing or too short.
pub const SUMMARY_UNAVAILABLE_PLACEHOLDER: &str =
    "Summary not available (full content too short or not extracted cleanly).";

/// One syndicated item after the full pipeline ran over it.
///
/// Records are assembled fresh per fetch cycle and immutable once returned;
/// `link` is the unique key within a cycle. `full_content` is either cleaned
/// body text capped at 500 chars or one of the fixed placeholder strings,
/// never raw markup.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde0", derive(Serialize, Deserialize))]
pub struct ArticleRecord {
    /// Provider-supplied title.
    pub title: String,
    /// The url of the article page.
    pub link: String,
    /// Provider-supplied timestamp, verbatim.
    pub published: String,
    /// Provider-supplied teaser.
    pub original_summary: String,
    /// Cleaned body excerpt or a diagnostic placeholder.
    pub full_content: String,
    /// Extractive summary or the fixed unavailable placeholder.
    pub generated_summary: String,
}

impl ArticleRecord {
    /// Seed a record from a feed item, content fields still empty. Entries
    /// without a link cannot be processed and yield `None`.
    pub(crate) fn from_feed_item(item: &rss::Item) -> Option<Self> {
        let link = item.link()?.to_string();
        Some(Self {
            title: item.title().unwrap_or_default().to_string(),
            link,
            published: item
                .pub_date()
                .unwrap_or(NO_PUBLISHED_PLACEHOLDER)
                .to_string(),
            original_summary: item
                .description()
                .unwrap_or(NO_FEED_SUMMARY_PLACEHOLDER)
                .to_string(),
            full_content: String::new(),
            generated_summary: String::new(),
        })
    }
}

/// Outcome of extracting one article page.
#[derive(Debug, Clone, PartialEq)]
pub enum ArticleBody {
    /// Cleaned body text, already capped for summarization.
    Text(String),
    /// A fixed diagnostic placeholder; the content counts as absent.
    Unavailable(String),
}

impl ArticleBody {
    pub(crate) fn unavailable<T: ToString>(placeholder: T) -> Self {
        ArticleBody::Unavailable(placeholder.to_string())
    }

    /// The body text eligible for summarization: present and longer than
    /// [`MIN_SUMMARY_INPUT_LEN`] chars. Placeholders are never scoreable.
    pub fn scoreable_text(&self) -> Option<&str> {
        match self {
            ArticleBody::Text(text) if char_len(text) > MIN_SUMMARY_INPUT_LEN => Some(text),
            _ => None,
        }
    }

    /// The `full_content` field form: body truncated to
    /// [`MAX_DISPLAY_LEN`] chars plus an ellipsis, or the placeholder.
    pub fn into_display(self) -> String {
        match self {
            ArticleBody::Text(text) => {
                if char_len(&text) > MAX_DISPLAY_LEN {
                    let mut display = truncate_chars(&text, MAX_DISPLAY_LEN).to_string();
                    display.push_str(ELLIPSIS);
                    display
                } else {
                    text
                }
            }
            ArticleBody::Unavailable(placeholder) => placeholder,
        }
    }
}
