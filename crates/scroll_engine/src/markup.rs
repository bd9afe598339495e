use std::collections::HashSet;

use scraper::{Html, Selector};
use scroll_core::{parse_page_number, ContentItem, PaginationSignal, Prerequisites};
use serde::{Deserialize, Serialize};

/// CSS selectors that adapt the controller to one storefront theme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkupProfile {
    pub container: String,
    /// Matched only inside `container`.
    pub item: String,
    pub load_trigger: String,
    pub legacy_pagination: String,
    pub page_links: String,
    pub active_link: String,
    pub next_link: String,
    /// Attribute some themes use to publish the total page count.
    pub declared_pages_attr: Option<String>,
}

impl Default for MarkupProfile {
    fn default() -> Self {
        Self {
            container: "#product-grid".to_string(),
            item: ".st-col-item".to_string(),
            load_trigger: ".load-more-trigger".to_string(),
            legacy_pagination: ".pagination-area, .paginatoin-area".to_string(),
            page_links: ".pagination-box li.number a".to_string(),
            active_link: ".pagination-box li.active a".to_string(),
            next_link: ".pagination-box li.next a".to_string(),
            declared_pages_attr: Some("data-paginate-pages".to_string()),
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ProfileError {
    #[error("invalid selector for {field} ({selector:?}): {message}")]
    InvalidSelector {
        field: &'static str,
        selector: String,
        message: String,
    },
}

/// Everything the controller reads from the page it starts on.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListingSnapshot {
    pub prerequisites: Prerequisites,
    pub signal: PaginationSignal,
    /// Items already rendered on the starting page.
    pub items: Vec<ContentItem>,
}

/// Reads listing structure out of HTML.
pub trait MarkupReader: Send + Sync {
    fn read_listing(&self, html: &str) -> ListingSnapshot;
    fn extract_items(&self, html: &str) -> Vec<ContentItem>;
}

#[derive(Debug)]
pub struct SelectorMarkup {
    container: Selector,
    item: Selector,
    load_trigger: Selector,
    legacy_pagination: Selector,
    page_links: Selector,
    active_link: Selector,
    next_link: Selector,
    declared_pages: Option<(Selector, String)>,
}

impl SelectorMarkup {
    pub fn new(profile: &MarkupProfile) -> Result<Self, ProfileError> {
        let declared_pages = match profile.declared_pages_attr.as_deref() {
            Some(attr) => Some((
                compile("declared_pages_attr", &format!("[{attr}]"))?,
                attr.to_string(),
            )),
            None => None,
        };

        Ok(Self {
            container: compile("container", &profile.container)?,
            item: compile("item", &profile.item)?,
            load_trigger: compile("load_trigger", &profile.load_trigger)?,
            legacy_pagination: compile("legacy_pagination", &profile.legacy_pagination)?,
            page_links: compile("page_links", &profile.page_links)?,
            active_link: compile("active_link", &profile.active_link)?,
            next_link: compile("next_link", &profile.next_link)?,
            declared_pages,
        })
    }

    fn items_in(&self, doc: &Html) -> Vec<ContentItem> {
        let mut seen = HashSet::new();
        let mut items = Vec::new();
        for container in doc.select(&self.container) {
            for item in container.select(&self.item) {
                if seen.insert(item.id()) {
                    items.push(ContentItem::new(item.html()));
                }
            }
        }
        items
    }

    fn signal_in(&self, doc: &Html) -> PaginationSignal {
        let link_labels = doc
            .select(&self.page_links)
            .map(|link| link.text().collect::<String>())
            .collect();
        let active_label = doc
            .select(&self.active_link)
            .next()
            .map(|link| link.text().collect::<String>());
        let declared_pages = self.declared_pages.as_ref().and_then(|(selector, attr)| {
            doc.select(selector)
                .find_map(|el| el.value().attr(attr).and_then(parse_page_number))
        });

        PaginationSignal {
            link_labels,
            active_label,
            has_next_link: doc.select(&self.next_link).next().is_some(),
            declared_pages,
        }
    }
}

impl MarkupReader for SelectorMarkup {
    fn read_listing(&self, html: &str) -> ListingSnapshot {
        let doc = Html::parse_document(html);
        ListingSnapshot {
            prerequisites: Prerequisites {
                has_container: doc.select(&self.container).next().is_some(),
                has_trigger: doc.select(&self.load_trigger).next().is_some(),
                has_legacy_pagination: doc.select(&self.legacy_pagination).next().is_some(),
            },
            signal: self.signal_in(&doc),
            items: self.items_in(&doc),
        }
    }

    fn extract_items(&self, html: &str) -> Vec<ContentItem> {
        self.items_in(&Html::parse_document(html))
    }
}

fn compile(field: &'static str, selector: &str) -> Result<Selector, ProfileError> {
    Selector::parse(selector).map_err(|err| ProfileError::InvalidSelector {
        field,
        selector: selector.to_string(),
        message: err.to_string(),
    })
}
