use std::collections::BTreeSet;
use std::time::Duration;

use anyhow::Context;
use scroll_core::{ContentItem, Phase};
use scroll_engine::{
    ExportedItem, ListingExport, ListingView, PageLoader, ReqwestFetcher, ScrollController,
    SelectorMarkup,
};
use scroll_logging::{scroll_debug, scroll_info, scroll_warn};

use crate::config::ScrollProfile;

#[derive(Debug, Clone, Copy)]
pub struct HarvestLimits {
    pub max_fetches: u32,
    pub retries: u32,
    pub retry_delay: Duration,
}

/// Headless stand-in for the rendered listing: it keeps what would be shown.
#[derive(Debug, Default)]
pub struct HarvestView {
    items: Vec<ExportedItem>,
    retry_message: Option<String>,
    url: Option<String>,
}

impl HarvestView {
    fn seed(&mut self, page: u32, items: Vec<ContentItem>) {
        self.items.extend(items.into_iter().map(|item| ExportedItem {
            page,
            html: item.html,
        }));
    }

    fn pages(&self) -> BTreeSet<u32> {
        self.items.iter().map(|item| item.page).collect()
    }
}

impl ListingView for HarvestView {
    fn observe_trigger(&mut self) {
        scroll_debug!("Watching load trigger");
    }

    fn disconnect_observer(&mut self) {
        scroll_debug!("Stopped watching load trigger");
    }

    fn hide_legacy_pagination(&mut self) {}

    fn set_loading_visible(&mut self, visible: bool) {
        scroll_debug!("Loading indicator visible={}", visible);
    }

    fn append_items(&mut self, page: u32, items: Vec<ContentItem>) {
        self.seed(page, items);
    }

    fn push_history(&mut self, url: &str) {
        self.url = Some(url.to_string());
    }

    fn content_appended(&mut self, page: u32, count: usize) {
        scroll_debug!("Page {} added {} items", page, count);
    }

    fn hide_trigger(&mut self) {
        scroll_debug!("Load trigger hidden");
    }

    fn show_retry(&mut self, message: &str) {
        self.retry_message = Some(message.to_string());
    }

    fn hide_retry(&mut self) {
        self.retry_message = None;
    }

    fn reload(&mut self) {}
}

type Harvester = ScrollController<ReqwestFetcher, SelectorMarkup, HarvestView>;

/// Opens `url` and keeps pulling pages until the listing ends or a limit is hit.
pub async fn harvest(
    url: &str,
    profile: &ScrollProfile,
    limits: HarvestLimits,
) -> anyhow::Result<ListingExport> {
    let markup = SelectorMarkup::new(&profile.markup).context("invalid markup profile")?;
    let fetcher =
        ReqwestFetcher::new(profile.fetch.to_settings()).context("failed to set up http client")?;
    let loader = PageLoader::new(fetcher, markup);
    let mut controller: Harvester =
        ScrollController::new(loader, HarvestView::default(), profile.policy());

    let snapshot = controller
        .open(url)
        .await
        .with_context(|| format!("failed to load listing {}", url))?;
    let first_page = controller.state().page().current_page;
    controller.view_mut().seed(first_page, snapshot.items);

    if controller.state().phase() == Phase::Inert {
        scroll_warn!("{} has no scrollable listing; exporting the first page only", url);
    }

    let mut fetches = 0;
    let mut retries_left = limits.retries;
    let mut reached = first_page;
    while controller.state().can_request() && fetches < limits.max_fetches {
        fetches += 1;
        let current = controller.state().page().current_page;
        if current > reached {
            reached = current;
            retries_left = limits.retries;
        }
        if controller.view().retry_message.is_some() {
            if retries_left == 0 {
                scroll_warn!("Giving up after page {}", controller.state().page().current_page);
                break;
            }
            retries_left -= 1;
            tokio::time::sleep(limits.retry_delay).await;
            controller.retry().await;
        } else {
            controller.trigger_intersected(true).await;
        }
    }
    if controller.state().can_request() && controller.view().retry_message.is_none() {
        scroll_info!("Stopped after {} page requests", limits.max_fetches);
    }
    let end_of_data = controller.state().phase() == Phase::Exhausted;
    controller.teardown().await;

    let last_page = controller.state().page().current_page;
    let view = controller.into_view();
    Ok(ListingExport {
        source_url: url.to_string(),
        final_url: view.url.clone(),
        first_page,
        last_page,
        pages_loaded: view.pages().len() as u32,
        end_of_data,
        harvested_utc: chrono::Utc::now().to_rfc3339(),
        items: view.items,
    })
}
