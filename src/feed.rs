use std::time::Duration;

use futures::stream::{self, StreamExt};
use log::{debug, warn};
use reqwest::header::{HeaderMap, USER_AGENT};
use reqwest::{Client, IntoUrl};
use rss::Channel;
use select::document::Document;
use url::Url;

use anyhow::{Context, Result};

use crate::article::{ArticleBody, ArticleRecord, SUMMARY_UNAVAILABLE_PLACEHOLDER};
use crate::error::PressclipError;
use crate::extract::{ContentExtractor, DefaultContentExtractor};
use crate::summarize::Summarizer;

/// Aggregates syndication feeds into processed [`ArticleRecord`]s.
///
/// One `Clipper` owns the http client, the extractor strategy and the
/// summarizer; it keeps no state between [`Clipper::fetch`] calls.
#[derive(Debug)]
pub struct Clipper<TExtract: ContentExtractor = DefaultContentExtractor> {
    /// The [`reqwest::Client`] that drives requests.
    client: Client,
    /// Content extraction strategy for article pages.
    ///
    /// Default is [`DefaultContentExtractor`].
    extractor: TExtract,
    /// Extractive summarizer applied to each usable article body.
    summarizer: Summarizer,
    /// Configuration for fetching and summarization.
    config: Config,
}

impl Clipper {
    /// Convenience method for creating a new [`ClipperBuilder`]
    ///
    /// Same as calling [`ClipperBuilder::default`]
    #[inline]
    pub fn builder() -> ClipperBuilder {
        ClipperBuilder::default()
    }
}

impl<TExtract: ContentExtractor> Clipper<TExtract> {
    /// Pull up to `max_articles` entries from `feed_url` and run the
    /// extraction and summarization pipeline over each of them, in feed
    /// order.
    ///
    /// Feed-level failures are absorbed: an invalid url, transport errors,
    /// unparseable payloads and empty feeds all yield an empty vec.
    /// Article-level failures surface as placeholder text inside the
    /// affected record and never abort the remaining entries.
    pub async fn fetch<T: IntoUrl>(&self, feed_url: T, max_articles: usize) -> Vec<ArticleRecord> {
        let url = match feed_url.into_url() {
            Ok(url) => url,
            Err(err) => {
                warn!("discarding feed with invalid url: {}", err);
                return Vec::new();
            }
        };

        let channel = match self.download_channel(url.clone()).await {
            Ok(channel) => channel,
            Err(err) => {
                warn!("discarding feed {}: {}", url, err);
                return Vec::new();
            }
        };

        let records = channel
            .into_items()
            .into_iter()
            .take(max_articles)
            .filter_map(|item| match ArticleRecord::from_feed_item(&item) {
                Some(record) => Some(record),
                None => {
                    warn!("skipping feed entry without a link: {:?}", item.title());
                    None
                }
            });

        stream::iter(records)
            .map(|record| self.process_record(record))
            .buffered(self.config.max_concurrent_articles)
            .collect()
            .await
    }

    /// Download and parse the feed itself.
    async fn download_channel(&self, url: Url) -> Result<Channel, PressclipError> {
        let resp = self.client.get(url).send().await?;
        if !resp.status().is_success() {
            return Err(PressclipError::NoHttpSuccessResponse {
                status: resp.status(),
            });
        }
        let body = resp.bytes().await?;
        Channel::read_from(&body[..]).map_err(|error| PressclipError::FeedParseError { error })
    }

    /// Runs extraction and summarization for one feed entry. Never fails;
    /// failures are rendered into the record's text fields.
    async fn process_record(&self, mut record: ArticleRecord) -> ArticleRecord {
        let body = self.article_body(&record.link).await;
        record.generated_summary = match body.scoreable_text() {
            Some(text) => self
                .summarizer
                .summarize(text, self.config.summary_sentences),
            None => SUMMARY_UNAVAILABLE_PLACEHOLDER.to_string(),
        };
        record.full_content = body.into_display();
        record
    }

    /// Fetch one article page and extract its body. Transport and parse
    /// failures become placeholder text.
    async fn article_body(&self, link: &str) -> ArticleBody {
        match self.download_document(link).await {
            Ok(doc) => self.extractor.body_text(&doc),
            Err(err) => {
                debug!("no content for {}: {}", link, err);
                ArticleBody::unavailable(err)
            }
        }
    }

    async fn download_document(&self, url: &str) -> Result<Document, PressclipError> {
        let resp = self.client.get(url).send().await?;
        if !resp.status().is_success() {
            return Err(PressclipError::NoHttpSuccessResponse {
                status: resp.status(),
            });
        }
        let body = resp.bytes().await?;
        Document::from_read(&body[..]).map_err(|_| PressclipError::ReadDocumentError { body })
    }
}

#[derive(Debug, Default)]
pub struct ClipperBuilder {
    config: Option<Config>,
    summarizer: Option<Summarizer>,
}

impl ClipperBuilder {
    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    pub fn summarizer(mut self, summarizer: Summarizer) -> Self {
        self.summarizer = Some(summarizer);
        self
    }

    pub fn build_with_extractor<TExtract: ContentExtractor>(
        self,
        extractor: TExtract,
    ) -> Result<Clipper<TExtract>> {
        let config = self.config.unwrap_or_default();

        let mut headers = HeaderMap::with_capacity(1);
        headers.insert(
            USER_AGENT,
            config
                .browser_user_agent
                .parse()
                .context("Failed to parse user agent header.")?,
        );

        let client = Client::builder()
            .timeout(config.request_timeout)
            .default_headers(headers)
            .build()?;

        Ok(Clipper {
            client,
            extractor,
            summarizer: self.summarizer.unwrap_or_default(),
            config,
        })
    }

    pub fn build(self) -> Result<Clipper> {
        self.build_with_extractor(DefaultContentExtractor::default())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Timeout for requests.
    request_timeout: Duration,
    /// The user-agent used for requests.
    browser_user_agent: String,
    /// Number of sentences in a generated summary.
    summary_sentences: usize,
    /// Upper bound on concurrently processed feed entries.
    max_concurrent_articles: usize,
}

impl Config {
    /// Default timeout for requests made inside `pressclip`.
    pub const DEFAULT_REQ_TIMEOUT_SEC: u64 = 7;

    /// Default number of sentences in a generated summary.
    pub const DEFAULT_SUMMARY_SENTENCES: usize = 3;

    /// Default bound on concurrently processed feed entries.
    pub const DEFAULT_MAX_CONCURRENT_ARTICLES: usize = 4;

    /// Default user agent for `pressclip`.
    #[inline]
    pub(crate) fn user_agent() -> String {
        format!("pressclip/{}", env!("CARGO_PKG_VERSION"))
    }

    /// Convenience method to create a [`ConfigBuilder`]
    #[inline]
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::builder().build()
    }
}

#[derive(Debug, Default)]
pub struct ConfigBuilder {
    /// Timeout for requests.
    request_timeout: Option<Duration>,
    /// The user-agent used for requests.
    browser_user_agent: Option<String>,
    /// Number of sentences in a generated summary.
    summary_sentences: Option<usize>,
    /// Upper bound on concurrently processed feed entries.
    max_concurrent_articles: Option<usize>,
}

impl ConfigBuilder {
    pub fn request_timeout(mut self, request_timeout: Duration) -> Self {
        self.request_timeout = Some(request_timeout);
        self
    }

    pub fn browser_user_agent<T: ToString>(mut self, browser_user_agent: T) -> Self {
        self.browser_user_agent = Some(browser_user_agent.to_string());
        self
    }

    pub fn summary_sentences(mut self, summary_sentences: usize) -> Self {
        self.summary_sentences = Some(summary_sentences);
        self
    }

    pub fn max_concurrent_articles(mut self, max_concurrent_articles: usize) -> Self {
        self.max_concurrent_articles = Some(max_concurrent_articles);
        self
    }

    pub fn build(self) -> Config {
        Config {
            request_timeout: self
                .request_timeout
                .unwrap_or_else(|| Duration::from_secs(Config::DEFAULT_REQ_TIMEOUT_SEC)),
            browser_user_agent: self
                .browser_user_agent
                .unwrap_or_else(|| Config::user_agent()),
            summary_sentences: self
                .summary_sentences
                .unwrap_or(Config::DEFAULT_SUMMARY_SENTENCES),
            // a zero bound would stall the stream
            max_concurrent_articles: self
                .max_concurrent_articles
                .unwrap_or(Config::DEFAULT_MAX_CONCURRENT_ARTICLES)
                .max(1),
        }
    }
}
