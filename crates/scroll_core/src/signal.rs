use url::Url;

use crate::location::page_from_query;
use crate::{PageState, TotalPages};

/// Raw pagination hints read from a listing page. None of them is guaranteed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PaginationSignal {
    /// Text of every numbered pagination link, in document order.
    pub link_labels: Vec<String>,
    /// Text of the link marked as active/current.
    pub active_label: Option<String>,
    /// A "next" link is present.
    pub has_next_link: bool,
    /// Page count published by the page itself, when the theme exposes one.
    pub declared_pages: Option<u32>,
}

/// Page elements the controller looks for before it activates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Prerequisites {
    pub has_container: bool,
    pub has_trigger: bool,
    /// Numbered pagination to hide once scrolling takes over. Optional.
    pub has_legacy_pagination: bool,
}

impl Prerequisites {
    pub fn satisfied(&self) -> bool {
        self.has_container && self.has_trigger
    }
}

/// Leading-integer parse of a page label: `" 3 "` and `"3a"` give 3, `"…"` and `"0"` give `None`.
pub fn parse_page_number(label: &str) -> Option<u32> {
    let trimmed = label.trim();
    let digits_end = trimmed
        .char_indices()
        .find(|(_, ch)| !ch.is_ascii_digit())
        .map_or(trimmed.len(), |(idx, _)| idx);
    trimmed[..digits_end]
        .parse::<u32>()
        .ok()
        .filter(|page| *page > 0)
}

/// Infers the starting page state from pagination hints and the page URL.
///
/// Links give the current (active) and highest page. When they enumerate
/// nothing beyond the first page, an active label above 1 still names the
/// current page; failing that, the `page` query parameter does. The total is
/// then one more than the current page with a next link, or
/// [`TotalPages::Unknown`] without one. Otherwise a next link on the last
/// enumerated page proves one more page, and a declared count fills in when
/// the links stop short.
pub fn infer_page_state(signal: &PaginationSignal, location: &Url) -> PageState {
    let mut current = signal
        .active_label
        .as_deref()
        .and_then(parse_page_number)
        .unwrap_or(1);

    let mut total = signal
        .link_labels
        .iter()
        .filter_map(|label| parse_page_number(label))
        .fold(1, u32::max);

    if total <= current && !signal.has_next_link {
        if let Some(declared) = signal.declared_pages.filter(|pages| *pages > 0) {
            total = declared;
        }
    }

    let total_pages = if total <= 1 {
        if current <= 1 {
            current = page_from_query(location).unwrap_or(1);
        }
        if signal.has_next_link {
            TotalPages::Known(current.saturating_add(1))
        } else {
            TotalPages::Unknown
        }
    } else {
        if signal.has_next_link && total <= current {
            total = current.saturating_add(1);
        }
        TotalPages::Known(total.max(current))
    };

    PageState {
        current_page: current,
        total_pages,
        is_loading: false,
    }
}
