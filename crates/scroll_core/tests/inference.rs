use scroll_core::{infer_page_state, parse_page_number, PaginationSignal, TotalPages};
use url::Url;

fn listing() -> Url {
    Url::parse("https://shop.example.com/collections/all").unwrap()
}

fn labels(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|label| label.to_string()).collect()
}

#[test]
fn links_active_and_next_give_known_total() {
    let signal = PaginationSignal {
        link_labels: labels(&["1", "2", "3"]),
        active_label: Some("2".to_string()),
        has_next_link: true,
        declared_pages: None,
    };

    let page = infer_page_state(&signal, &listing());
    assert_eq!(page.current_page, 2);
    assert_eq!(page.total_pages, TotalPages::Known(3));
    assert!(!page.is_loading);
    assert!(page.has_more_pages());
}

#[test]
fn no_signal_at_all_leaves_total_unknown() {
    let page = infer_page_state(&PaginationSignal::default(), &listing());
    assert_eq!(page.current_page, 1);
    assert_eq!(page.total_pages, TotalPages::Unknown);
    assert!(page.has_more_pages());
}

#[test]
fn next_link_on_last_enumerated_page_adds_one() {
    let signal = PaginationSignal {
        link_labels: labels(&["1", "2", "3"]),
        active_label: Some("3".to_string()),
        has_next_link: true,
        declared_pages: None,
    };

    let page = infer_page_state(&signal, &listing());
    assert_eq!(page.current_page, 3);
    assert_eq!(page.total_pages, TotalPages::Known(4));
}

#[test]
fn query_parameter_is_fallback_when_links_are_missing() {
    let location = Url::parse("https://shop.example.com/collections/all?page=4").unwrap();

    let with_next = PaginationSignal {
        has_next_link: true,
        ..PaginationSignal::default()
    };
    let page = infer_page_state(&with_next, &location);
    assert_eq!(page.current_page, 4);
    assert_eq!(page.total_pages, TotalPages::Known(5));

    let page = infer_page_state(&PaginationSignal::default(), &location);
    assert_eq!(page.current_page, 4);
    assert_eq!(page.total_pages, TotalPages::Unknown);
}

#[test]
fn active_label_wins_over_query_when_only_next_link_exists() {
    let signal = PaginationSignal {
        link_labels: Vec::new(),
        active_label: Some("2".to_string()),
        has_next_link: true,
        declared_pages: None,
    };

    let page = infer_page_state(&signal, &listing());
    assert_eq!(page.current_page, 2);
    assert_eq!(page.total_pages, TotalPages::Known(3));

    let stale_query = Url::parse("https://shop.example.com/collections/all?page=7").unwrap();
    let page = infer_page_state(&signal, &stale_query);
    assert_eq!(page.current_page, 2);
    assert_eq!(page.total_pages, TotalPages::Known(3));
}

#[test]
fn active_label_without_next_link_keeps_total_open() {
    let signal = PaginationSignal {
        active_label: Some("3".to_string()),
        ..PaginationSignal::default()
    };

    let page = infer_page_state(&signal, &listing());
    assert_eq!(page.current_page, 3);
    assert_eq!(page.total_pages, TotalPages::Unknown);
}

#[test]
fn unparsable_active_label_defaults_to_first_page() {
    let signal = PaginationSignal {
        link_labels: labels(&["1", "2", "…", "9"]),
        active_label: Some("…".to_string()),
        has_next_link: false,
        declared_pages: None,
    };

    let page = infer_page_state(&signal, &listing());
    assert_eq!(page.current_page, 1);
    assert_eq!(page.total_pages, TotalPages::Known(9));
}

#[test]
fn declared_page_count_fills_in_when_links_stop_short() {
    let signal = PaginationSignal {
        link_labels: labels(&["1", "2"]),
        active_label: Some("2".to_string()),
        has_next_link: false,
        declared_pages: Some(7),
    };

    let page = infer_page_state(&signal, &listing());
    assert_eq!(page.current_page, 2);
    assert_eq!(page.total_pages, TotalPages::Known(7));
}

#[test]
fn active_page_beyond_links_is_clamped_into_total() {
    let signal = PaginationSignal {
        link_labels: labels(&["1", "2", "3"]),
        active_label: Some("5".to_string()),
        has_next_link: false,
        declared_pages: None,
    };

    let page = infer_page_state(&signal, &listing());
    assert_eq!(page.current_page, 5);
    assert_eq!(page.total_pages, TotalPages::Known(5));
    assert!(!page.has_more_pages());
}

#[test]
fn page_labels_use_leading_integer() {
    assert_eq!(parse_page_number(" 3 "), Some(3));
    assert_eq!(parse_page_number("12abc"), Some(12));
    assert_eq!(parse_page_number("Next"), None);
    assert_eq!(parse_page_number("0"), None);
    assert_eq!(parse_page_number(""), None);
}
