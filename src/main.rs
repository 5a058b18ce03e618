use std::io::Read;
use std::path::PathBuf;
use std::time::Duration;

use structopt::StructOpt;
use url::Url;

use pressclip::{ArticleRecord, Clipper, Config};

#[derive(Debug, StructOpt)]
#[structopt(
    name = "pressclip",
    about = "Feed aggregation, article extraction and summarization."
)]
enum App {
    #[structopt(
        name = "fetch",
        about = "Aggregate feeds into summarized article records."
    )]
    Fetch {
        #[structopt(name = "feeds", help = "The urls of the syndication feeds to aggregate.")]
        feeds: Vec<Url>,
        #[structopt(flatten)]
        opts: Opts,
    },
    #[structopt(name = "summarize", about = "Summarize plain text from a file or stdin.")]
    Summarize {
        #[structopt(
            help = "File with the text to summarize, stdin if omitted.",
            parse(from_os_str)
        )]
        input: Option<PathBuf>,
        #[structopt(
            long = "sentences",
            short = "n",
            default_value = "3",
            help = "Number of sentences to keep."
        )]
        sentences: usize,
    },
}

impl App {
    async fn run(self) -> anyhow::Result<()> {
        match self {
            App::Fetch { feeds, opts } => {
                let clipper = Clipper::builder().config(opts.as_config()).build()?;

                let mut records = Vec::new();
                for feed in &feeds {
                    records.extend(clipper.fetch(feed.clone(), opts.per_feed).await);
                }

                let include = keyword_list(opts.keywords.as_deref());
                let exclude = keyword_list(opts.exclude_keywords.as_deref());
                let mut kept: Vec<ArticleRecord> = records
                    .into_iter()
                    .filter(|record| keep_record(record, &include, &exclude))
                    .collect();
                kept.truncate(opts.limit.max(1).min(50));

                Self::write(opts.output, &kept).await
            }
            App::Summarize { input, sentences } => {
                let text = match input {
                    Some(path) => tokio::fs::read_to_string(path).await?,
                    None => {
                        let mut buf = String::new();
                        std::io::stdin().read_to_string(&mut buf)?;
                        buf
                    }
                };
                println!("{}", pressclip::summarize(&text, sentences));
                Ok(())
            }
        }
    }

    /// Writes the records as json.
    ///
    /// If an output file is configured, the records are stored there,
    /// otherwise printed to std::out.
    async fn write(out: Option<PathBuf>, records: &[ArticleRecord]) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(records)?;
        if let Some(out) = out {
            tokio::fs::write(out, json).await?;
        } else {
            println!("{}", json);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, StructOpt)]
pub struct Opts {
    #[structopt(
        long = "per-feed",
        default_value = "25",
        help = "Number of entries processed per feed."
    )]
    per_feed: usize,
    #[structopt(
        long = "limit",
        default_value = "10",
        help = "Number of articles kept after filtering, clamped to 1..=50."
    )]
    limit: usize,
    #[structopt(
        long = "keywords",
        help = "Comma separated keywords, keep articles matching any of them."
    )]
    keywords: Option<String>,
    #[structopt(
        long = "exclude-keywords",
        help = "Comma separated keywords, drop articles matching any of them."
    )]
    exclude_keywords: Option<String>,
    #[structopt(long = "timeout", help = "Per request timeout in seconds.")]
    timeout: Option<u64>,
    #[structopt(long = "user-agent", help = "The user-agent used for requests.")]
    user_agent: Option<String>,
    #[structopt(
        long = "output",
        short = "o",
        help = "The file to store the records as json.",
        parse(from_os_str)
    )]
    output: Option<PathBuf>,
}

impl Opts {
    fn as_config(&self) -> Config {
        let mut config = Config::builder();
        if let Some(timeout) = self.timeout {
            config = config.request_timeout(Duration::from_secs(timeout));
        }
        if let Some(user_agent) = self.user_agent.clone() {
            config = config.browser_user_agent(user_agent);
        }
        config.build()
    }
}

/// Splits a comma separated keyword list, lowercased, empty entries dropped.
fn keyword_list(raw: Option<&str>) -> Vec<String> {
    raw.unwrap_or_default()
        .split(',')
        .map(|keyword| keyword.trim().to_lowercase())
        .filter(|keyword| !keyword.is_empty())
        .collect()
}

/// Case-insensitive substring matching over every text field of the record:
/// keep on any include hit (when includes exist), drop on any exclude hit.
fn keep_record(record: &ArticleRecord, include: &[String], exclude: &[String]) -> bool {
    let haystacks = [
        record.title.to_lowercase(),
        record.original_summary.to_lowercase(),
        record.full_content.to_lowercase(),
        record.generated_summary.to_lowercase(),
    ];
    let matches =
        |keyword: &String| haystacks.iter().any(|haystack| haystack.contains(keyword.as_str()));

    if !include.is_empty() && !include.iter().any(matches) {
        return false;
    }
    !exclude.iter().any(matches)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    Ok(App::from_args().run().await?)
}
