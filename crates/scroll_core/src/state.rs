use url::Url;

use crate::view_model::ScrollViewModel;
use crate::LoadPolicy;

/// One render-ready unit of listed content, kept as opaque markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentItem {
    pub html: String,
}

impl ContentItem {
    pub fn new(html: impl Into<String>) -> Self {
        Self { html: html.into() }
    }
}

/// Total page count as far as it is known.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TotalPages {
    Known(u32),
    /// More pages are assumed until an empty batch or a not-found response.
    #[default]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageState {
    pub current_page: u32,
    pub total_pages: TotalPages,
    pub is_loading: bool,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            current_page: 1,
            total_pages: TotalPages::Known(1),
            is_loading: false,
        }
    }
}

impl PageState {
    pub fn has_more_pages(&self) -> bool {
        match self.total_pages {
            TotalPages::Known(total) => self.current_page < total,
            TotalPages::Unknown => true,
        }
    }

    pub(crate) fn mark_exhausted(&mut self) {
        self.total_pages = TotalPages::Known(self.current_page);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Not initialized, or the page is not a paginated listing.
    #[default]
    Inert,
    Idle,
    Loading,
    Exhausted,
    TornDown,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PendingFetch {
    pub(crate) page: u32,
    pub(crate) url: Url,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScrollState {
    policy: LoadPolicy,
    active: bool,
    torn_down: bool,
    observing: bool,
    page: PageState,
    location: Option<Url>,
    pending: Option<PendingFetch>,
    retry_message: Option<String>,
    items_appended: usize,
    dirty: bool,
}

impl ScrollState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: LoadPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    pub fn policy(&self) -> LoadPolicy {
        self.policy
    }

    pub fn page(&self) -> &PageState {
        &self.page
    }

    pub fn location(&self) -> Option<&Url> {
        self.location.as_ref()
    }

    pub fn phase(&self) -> Phase {
        if self.torn_down {
            Phase::TornDown
        } else if !self.active {
            Phase::Inert
        } else if self.page.is_loading {
            Phase::Loading
        } else if !self.page.has_more_pages() {
            Phase::Exhausted
        } else {
            Phase::Idle
        }
    }

    pub fn has_more_pages(&self) -> bool {
        self.active && self.page.has_more_pages()
    }

    pub fn is_loading(&self) -> bool {
        self.page.is_loading
    }

    /// Whether a new fetch may start right now.
    pub fn can_request(&self) -> bool {
        self.active && !self.torn_down && !self.page.is_loading && self.page.has_more_pages()
    }

    pub fn view(&self) -> ScrollViewModel {
        ScrollViewModel {
            phase: self.phase(),
            current_page: self.page.current_page,
            total_pages: self.page.total_pages,
            loading: self.page.is_loading,
            retry_message: self.retry_message.clone(),
            items_appended: self.items_appended,
            location: self.location.as_ref().map(Url::to_string),
            dirty: self.dirty,
        }
    }

    /// Returns whether anything changed since the last call and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn activate(&mut self, location: Url, page: PageState) {
        self.active = true;
        self.observing = true;
        self.location = Some(location);
        self.page = page;
        self.dirty = true;
    }

    pub(crate) fn is_observing(&self) -> bool {
        self.observing
    }

    pub(crate) fn tear_down(&mut self) -> bool {
        if self.torn_down {
            return false;
        }
        self.torn_down = true;
        let was_observing = std::mem::take(&mut self.observing);
        self.dirty = true;
        was_observing
    }

    /// Marks the start of a fetch and returns the page and URL to request.
    pub(crate) fn begin_fetch(&mut self) -> Option<(u32, Url)> {
        let location = self.location.as_ref()?;
        let page = self.page.current_page.checked_add(1)?;
        let url = crate::location::with_page_param(location, page);
        self.page.is_loading = true;
        self.pending = Some(PendingFetch {
            page,
            url: url.clone(),
        });
        self.dirty = true;
        Some((page, url))
    }

    /// Clears the outstanding fetch if it matches `page`.
    pub(crate) fn finish_fetch(&mut self, page: u32) -> Option<PendingFetch> {
        if self.pending.as_ref().map(|pending| pending.page) != Some(page) {
            return None;
        }
        self.page.is_loading = false;
        self.dirty = true;
        self.pending.take()
    }

    pub(crate) fn advance(&mut self, pending: PendingFetch, appended: usize) {
        self.page.current_page = pending.page;
        self.location = Some(pending.url);
        self.items_appended += appended;
    }

    pub(crate) fn exhaust(&mut self) {
        self.page.mark_exhausted();
        self.dirty = true;
    }

    pub(crate) fn set_retry(&mut self, message: Option<String>) -> Option<String> {
        self.dirty = true;
        std::mem::replace(&mut self.retry_message, message)
    }

    pub(crate) fn retry_visible(&self) -> bool {
        self.retry_message.is_some()
    }
}
