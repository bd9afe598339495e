use url::Url;

use crate::signal::parse_page_number;

/// Query parameter carrying the page number.
pub const PAGE_PARAM: &str = "page";

/// Returns `location` with the `page` parameter set to `page`.
///
/// The first existing `page` pair is replaced in place and any later duplicates
/// are dropped; without one the pair is appended. Other pairs keep their order.
pub fn with_page_param(location: &Url, page: u32) -> Url {
    let mut replaced = false;
    let mut pairs: Vec<(String, String)> = Vec::new();
    for (key, value) in location.query_pairs() {
        if key == PAGE_PARAM {
            if !replaced {
                pairs.push((key.into_owned(), page.to_string()));
                replaced = true;
            }
        } else {
            pairs.push((key.into_owned(), value.into_owned()));
        }
    }
    if !replaced {
        pairs.push((PAGE_PARAM.to_string(), page.to_string()));
    }

    let mut next = location.clone();
    next.query_pairs_mut().clear().extend_pairs(pairs);
    next
}

/// Page number from the `page` query parameter, if present and parsable.
pub fn page_from_query(location: &Url) -> Option<u32> {
    location
        .query_pairs()
        .find(|(key, _)| key == PAGE_PARAM)
        .and_then(|(_, value)| parse_page_number(&value))
}
