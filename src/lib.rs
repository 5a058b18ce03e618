//! Aggregates articles from web syndication feeds, isolates the main body
//! text of each article page and produces short extractive summaries.
//!
//! The pipeline runs feed entry by feed entry: [`Clipper::fetch`] pulls a
//! feed, fetches every article page, extracts the main content region,
//! strips boilerplate and attaches a frequency-scored summary. Failures are
//! rendered as placeholder text inside the returned records, never as
//! errors.

pub use article::{ArticleBody, ArticleRecord};
pub use error::PressclipError;
pub use extract::{ContentExtractor, DefaultContentExtractor};
pub use feed::{Clipper, ClipperBuilder, Config, ConfigBuilder};
pub use stopwords::StopWords;
pub use summarize::{summarize, Summarizer};

pub mod article;
pub mod clean;
mod error;
pub mod extract;
pub mod feed;
pub mod stopwords;
pub mod summarize;
pub mod text;

/// Rexported to implement custom extractors.
pub use select;
