//! Scroll engine: page fetching, markup reading and effect execution.
mod controller;
mod decode;
mod export;
mod fetch;
mod loader;
mod markup;
mod response;

pub use controller::{Clock, ListingView, ScrollController, SystemClock};
pub use decode::{decode_page, DecodeError, DecodedPage};
pub use export::{
    ensure_output_dir, write_listing_export, ExportError, ExportedItem, ListingExport,
    LISTING_FILENAME,
};
pub use fetch::{FetchSettings, Fetcher, ReqwestFetcher};
pub use loader::{LoadError, LoadedListing, PageLoader};
pub use markup::{ListingSnapshot, MarkupProfile, MarkupReader, ProfileError, SelectorMarkup};
pub use response::{FetchError, PageResponse};
