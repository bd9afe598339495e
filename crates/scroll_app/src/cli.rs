use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;
use scroll_logging::LogDestination;

/// Follows a paginated product listing the way infinite scroll would and
/// saves every item it finds.
#[derive(Debug, Parser)]
#[command(name = "listing-scroll", version, about)]
pub struct Args {
    /// Listing page to start from.
    pub url: String,

    /// RON file with selectors and fetch settings.
    #[arg(long)]
    pub profile: Option<PathBuf>,

    /// Directory that receives listing.json.
    #[arg(long, default_value = "output")]
    pub output: PathBuf,

    /// Upper bound on follow-up page requests.
    #[arg(long, default_value_t = 50)]
    pub max_pages: u32,

    /// How many times each failed page may be retried.
    #[arg(long, default_value_t = 0)]
    pub retries: u32,

    #[arg(long, default_value_t = 1000)]
    pub retry_delay_ms: u64,

    #[arg(long, value_enum, default_value_t = LogTarget::Terminal)]
    pub log: LogTarget,

    /// Log at debug level.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn level(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogTarget {
    Terminal,
    File,
    Both,
}

impl From<LogTarget> for LogDestination {
    fn from(target: LogTarget) -> Self {
        match target {
            LogTarget::Terminal => LogDestination::Terminal,
            LogTarget::File => LogDestination::File,
            LogTarget::Both => LogDestination::Both,
        }
    }
}
