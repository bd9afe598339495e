//! Scroll core: pure pagination state machine and view-model helpers.
mod effect;
mod location;
mod msg;
mod scroll;
mod signal;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use location::{page_from_query, with_page_param, PAGE_PARAM};
pub use msg::{LoadSource, Msg, PageOutcome};
pub use scroll::{LoadPolicy, ScrollDebouncer, ScrollMetrics};
pub use signal::{infer_page_state, parse_page_number, PaginationSignal, Prerequisites};
pub use state::{ContentItem, PageState, Phase, ScrollState, TotalPages};
pub use update::update;
pub use view_model::ScrollViewModel;
