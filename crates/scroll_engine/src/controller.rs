use std::collections::VecDeque;
use std::time::Instant;

use scroll_core::{
    update, ContentItem, Effect, LoadPolicy, LoadSource, Msg, Phase, ScrollDebouncer,
    ScrollMetrics, ScrollState,
};
use scroll_logging::{scroll_debug, scroll_info, scroll_warn};
use url::Url;

use crate::{Fetcher, ListingSnapshot, LoadError, MarkupReader, PageLoader};

/// The view layer that owns the rendered listing.
///
/// Every method is a direct order from the controller; implementations only
/// render, they never decide.
pub trait ListingView {
    /// Start reporting load-trigger visibility.
    fn observe_trigger(&mut self);
    fn disconnect_observer(&mut self);
    fn hide_legacy_pagination(&mut self);
    fn set_loading_visible(&mut self, visible: bool);
    /// Append items after everything already shown, keeping their order.
    fn append_items(&mut self, page: u32, items: Vec<ContentItem>);
    /// Replace the visible URL without a reload.
    fn push_history(&mut self, url: &str);
    /// Lets other widgets re-initialise on the new items.
    fn content_appended(&mut self, page: u32, count: usize);
    fn hide_trigger(&mut self);
    fn show_retry(&mut self, message: &str);
    fn hide_retry(&mut self);
    fn reload(&mut self);
}

pub trait Clock {
    fn now(&self) -> Instant;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Owns one listing's pagination state and carries out its effects.
///
/// All methods take `&mut self` and await fetches inline, so at most one page
/// request is ever outstanding.
pub struct ScrollController<F, M, V, C = SystemClock> {
    state: ScrollState,
    loader: PageLoader<F, M>,
    view: V,
    clock: C,
    debouncer: ScrollDebouncer,
}

impl<F, M, V> ScrollController<F, M, V, SystemClock>
where
    F: Fetcher,
    M: MarkupReader,
    V: ListingView,
{
    pub fn new(loader: PageLoader<F, M>, view: V, policy: LoadPolicy) -> Self {
        Self::with_clock(loader, view, policy, SystemClock)
    }
}

impl<F, M, V, C> ScrollController<F, M, V, C>
where
    F: Fetcher,
    M: MarkupReader,
    V: ListingView,
    C: Clock,
{
    pub fn with_clock(loader: PageLoader<F, M>, view: V, policy: LoadPolicy, clock: C) -> Self {
        Self {
            state: ScrollState::with_policy(policy),
            debouncer: ScrollDebouncer::new(policy.debounce),
            loader,
            view,
            clock,
        }
    }

    pub fn state(&self) -> &ScrollState {
        &self.state
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn into_view(self) -> V {
        self.view
    }

    /// Fetches the starting page and initialises from it.
    pub async fn open(&mut self, url: &str) -> Result<ListingSnapshot, LoadError> {
        let listing = self.loader.load_listing(url).await?;
        self.initialize(listing.location, &listing.snapshot).await;
        Ok(listing.snapshot)
    }

    /// Runs pagination inference on an already-read page.
    pub async fn initialize(&mut self, location: Url, snapshot: &ListingSnapshot) -> Phase {
        if !snapshot.prerequisites.satisfied() {
            scroll_info!(
                "Infinite scroll not activated for {}: container={} trigger={}",
                location,
                snapshot.prerequisites.has_container,
                snapshot.prerequisites.has_trigger
            );
        }
        self.dispatch(Msg::Initialize {
            location,
            prerequisites: snapshot.prerequisites,
            signal: snapshot.signal.clone(),
        })
        .await;
        let page = self.state.page();
        scroll_info!(
            "Pagination: current={} total={:?} more={}",
            page.current_page,
            page.total_pages,
            self.state.has_more_pages()
        );
        self.state.phase()
    }

    pub async fn trigger_intersected(&mut self, intersecting: bool) {
        self.dispatch(Msg::TriggerIntersected { intersecting }).await;
    }

    /// Records a raw scroll event; it is acted on by [`Self::tick`] once scrolling settles.
    pub fn on_scroll(&mut self, metrics: ScrollMetrics) {
        self.debouncer.on_scroll(self.clock.now(), metrics);
    }

    /// Releases a settled scroll position, if any, into the controller.
    pub async fn tick(&mut self) {
        if let Some(metrics) = self.debouncer.poll(self.clock.now()) {
            self.dispatch(Msg::ScrollSettled(metrics)).await;
        }
    }

    pub async fn request_load(&mut self, source: LoadSource) {
        scroll_debug!("Load requested by {:?}", source);
        self.dispatch(Msg::LoadRequested(source)).await;
    }

    pub async fn retry(&mut self) {
        self.request_load(LoadSource::Retry).await;
    }

    pub async fn history_navigated(&mut self) {
        self.dispatch(Msg::HistoryNavigated).await;
    }

    /// Stops all further triggering. Safe to call more than once.
    pub async fn teardown(&mut self) {
        self.dispatch(Msg::Teardown).await;
    }

    async fn dispatch(&mut self, msg: Msg) {
        let mut inbox = VecDeque::from([msg]);
        while let Some(msg) = inbox.pop_front() {
            let state = std::mem::take(&mut self.state);
            let (state, effects) = update(state, msg);
            self.state = state;
            for effect in effects {
                if let Some(follow_up) = self.run_effect(effect).await {
                    inbox.push_back(follow_up);
                }
            }
        }
    }

    async fn run_effect(&mut self, effect: Effect) -> Option<Msg> {
        match effect {
            Effect::ObserveTrigger => self.view.observe_trigger(),
            Effect::DisconnectObserver => self.view.disconnect_observer(),
            Effect::HideLegacyPagination => self.view.hide_legacy_pagination(),
            Effect::ShowLoading => self.view.set_loading_visible(true),
            Effect::HideLoading => self.view.set_loading_visible(false),
            Effect::FetchPage { page, url } => {
                scroll_info!("Loading page {} from {}", page, url);
                let outcome = self.loader.load_page(&url).await;
                return Some(Msg::PageLoaded { page, outcome });
            }
            Effect::AppendItems { page, items } => {
                scroll_info!("Appending {} items from page {}", items.len(), page);
                self.view.append_items(page, items);
            }
            Effect::PushHistory { url } => self.view.push_history(&url),
            Effect::ContentAppended { page, count } => self.view.content_appended(page, count),
            Effect::HideTrigger => {
                scroll_info!(
                    "End of listing after page {}",
                    self.state.page().current_page
                );
                self.view.hide_trigger();
            }
            Effect::ShowRetry { message } => {
                scroll_warn!("{}", message);
                self.view.show_retry(&message);
            }
            Effect::HideRetry => self.view.hide_retry(),
            Effect::ReloadPage => self.view.reload(),
        }
        None
    }
}
