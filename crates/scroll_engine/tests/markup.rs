mod common;

use pretty_assertions::assert_eq;
use scroll_core::{ContentItem, PaginationSignal, Prerequisites};
use scroll_engine::{MarkupProfile, MarkupReader, ProfileError, SelectorMarkup};

fn markup() -> SelectorMarkup {
    SelectorMarkup::new(&MarkupProfile::default()).expect("default profile compiles")
}

#[test]
fn reads_signal_prerequisites_and_items() {
    let html = common::listing_page(1, 3, &[1, 2, 3], Some(2), true);
    let snapshot = markup().read_listing(&html);

    assert_eq!(
        snapshot.prerequisites,
        Prerequisites {
            has_container: true,
            has_trigger: true,
            has_legacy_pagination: true,
        }
    );
    assert_eq!(
        snapshot.signal,
        PaginationSignal {
            link_labels: vec!["1".to_string(), "2".to_string(), "3".to_string()],
            active_label: Some("2".to_string()),
            has_next_link: true,
            declared_pages: None,
        }
    );
    assert_eq!(snapshot.items.len(), 3);
}

#[test]
fn items_outside_container_are_ignored() {
    let html = r#"<html><body>
        <div class="st-col-item">stray</div>
        <div id="product-grid">
            <div class="st-col-item">a</div>
            <div class="st-col-item">b</div>
        </div>
    </body></html>"#;

    let items = markup().extract_items(html);
    assert_eq!(
        items,
        vec![
            ContentItem::new(r#"<div class="st-col-item">a</div>"#),
            ContentItem::new(r#"<div class="st-col-item">b</div>"#),
        ]
    );
}

#[test]
fn missing_trigger_is_reported() {
    let html = r#"<html><body><div id="product-grid"></div></body></html>"#;
    let snapshot = markup().read_listing(html);
    assert!(snapshot.prerequisites.has_container);
    assert!(!snapshot.prerequisites.has_trigger);
    assert!(!snapshot.prerequisites.has_legacy_pagination);
    assert!(!snapshot.prerequisites.satisfied());
    assert_eq!(snapshot.signal, PaginationSignal::default());
}

#[test]
fn declared_page_count_is_read_from_attribute() {
    let html = r#"<html><body>
        <div id="product-grid" data-paginate-pages="8"></div>
        <div class="load-more-trigger"></div>
    </body></html>"#;
    let snapshot = markup().read_listing(html);
    assert_eq!(snapshot.signal.declared_pages, Some(8));
}

#[test]
fn custom_profile_selectors_are_used() {
    let profile = MarkupProfile {
        container: "ul.results".to_string(),
        item: "li.hit".to_string(),
        load_trigger: "#sentinel".to_string(),
        declared_pages_attr: None,
        ..MarkupProfile::default()
    };
    let markup = SelectorMarkup::new(&profile).unwrap();
    let html = r#"<ul class="results"><li class="hit">1</li><li>ad</li><li class="hit">2</li></ul><span id="sentinel"></span>"#;

    let snapshot = markup.read_listing(html);
    assert!(snapshot.prerequisites.satisfied());
    assert_eq!(snapshot.items.len(), 2);
}

#[test]
fn invalid_selector_names_the_field() {
    let profile = MarkupProfile {
        item: "div[".to_string(),
        ..MarkupProfile::default()
    };
    let err = SelectorMarkup::new(&profile).unwrap_err();
    assert!(matches!(err, ProfileError::InvalidSelector { field: "item", .. }));
}
