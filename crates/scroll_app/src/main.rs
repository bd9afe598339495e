mod cli;
mod config;
mod harvest;

use anyhow::Context;
use clap::Parser;
use scroll_engine::write_listing_export;
use scroll_logging::scroll_info;

use crate::cli::Args;
use crate::config::ScrollProfile;
use crate::harvest::{harvest, HarvestLimits};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    scroll_logging::initialize(args.log.into(), args.level());

    let profile = ScrollProfile::load(args.profile.as_deref())?;
    let limits = HarvestLimits {
        max_fetches: args.max_pages,
        retries: args.retries,
        retry_delay: std::time::Duration::from_millis(args.retry_delay_ms),
    };

    let export = harvest(&args.url, &profile, limits).await?;
    let path = write_listing_export(&args.output, &export)
        .with_context(|| format!("failed to write output to {:?}", args.output))?;

    scroll_info!(
        "Wrote {} items from pages {}..={} to {:?} (end of data: {})",
        export.items.len(),
        export.first_page,
        export.last_page,
        path,
        export.end_of_data
    );
    Ok(())
}
