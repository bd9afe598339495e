use crate::{Phase, TotalPages};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScrollViewModel {
    pub phase: Phase,
    pub current_page: u32,
    pub total_pages: TotalPages,
    pub loading: bool,
    pub retry_message: Option<String>,
    pub items_appended: usize,
    pub location: Option<String>,
    pub dirty: bool,
}
