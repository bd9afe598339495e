#![allow(dead_code)]

/// Renders a storefront collection page in the default theme's markup.
pub fn listing_page(first_item: usize, count: usize, links: &[u32], active: Option<u32>, next: bool) -> String {
    let items: String = (first_item..first_item + count)
        .map(|n| format!(r#"<div class="st-col-item" data-id="{n}"><a href="/products/p{n}">Product {n}</a></div>"#))
        .collect();

    let mut pagination = String::new();
    for page in links {
        let class = if Some(*page) == active { "number active" } else { "number" };
        pagination.push_str(&format!(r#"<li class="{class}"><a href="?page={page}">{page}</a></li>"#));
    }
    if next {
        pagination.push_str(r#"<li class="next"><a href="?page=next">&raquo;</a></li>"#);
    }

    format!(
        r#"<!doctype html>
<html><head><title>All products</title></head>
<body>
  <div id="product-grid" class="row">{items}</div>
  <div class="loading-spinner" style="display:none"></div>
  <div class="load-more-trigger"></div>
  <div class="pagination-area"><ul class="pagination-box">{pagination}</ul></div>
</body></html>"#
    )
}

/// A follow-up page carrying only items.
pub fn items_page(first_item: usize, count: usize) -> String {
    listing_page(first_item, count, &[], None, false)
}
