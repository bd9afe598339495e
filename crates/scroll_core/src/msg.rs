use url::Url;

use crate::{ContentItem, PaginationSignal, Prerequisites, ScrollMetrics};

/// Who asked for more content outside the viewport triggers. Every source
/// goes through the same guard as intersection and scroll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadSource {
    /// Explicit "load more" request, e.g. a debug button.
    Manual,
    /// The user accepted the retry affordance.
    Retry,
}

/// Result of fetching and parsing one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageOutcome {
    /// Items extracted from the page, possibly none.
    Items(Vec<ContentItem>),
    /// The server answered "not found".
    NotFound,
    /// Any other failure; the page may be requested again later.
    Failed { reason: String },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// Page markup was read; runs inference once.
    Initialize {
        location: Url,
        prerequisites: Prerequisites,
        signal: PaginationSignal,
    },
    /// The load trigger entered or left the viewport.
    TriggerIntersected { intersecting: bool },
    /// Debounced scroll position.
    ScrollSettled(ScrollMetrics),
    LoadRequested(LoadSource),
    /// A fetch issued through `Effect::FetchPage` finished.
    PageLoaded { page: u32, outcome: PageOutcome },
    /// Browser back/forward.
    HistoryNavigated,
    Teardown,
    NoOp,
}
