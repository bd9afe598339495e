use crate::ContentItem;

/// Side effects requested by [`crate::update`]; executed by the driver in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Start watching the load trigger for viewport intersection.
    ObserveTrigger,
    /// Stop watching the load trigger.
    DisconnectObserver,
    /// Hide the page-by-page navigation UI.
    HideLegacyPagination,
    ShowLoading,
    HideLoading,
    /// Fetch the rendered HTML of `page` from `url`.
    FetchPage { page: u32, url: String },
    /// Append items, in order, to the live content container.
    AppendItems { page: u32, items: Vec<ContentItem> },
    /// Replace the visible URL without reloading.
    PushHistory { url: String },
    /// Broadcast that new content was appended.
    ContentAppended { page: u32, count: usize },
    /// End-of-data reached: hide the load trigger for good.
    HideTrigger,
    ShowRetry { message: String },
    HideRetry,
    /// Back/forward navigation: reload the whole page.
    ReloadPage,
}
