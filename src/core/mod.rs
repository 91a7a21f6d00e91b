// Core derivation exports
pub mod industries;
pub mod pagination;
pub mod tags;

pub use industries::{canonical_industry, toggle_industry, INDUSTRIES};
pub use pagination::{is_valid_page_change, page_window, MAX_PAGE_BUTTONS, PER_PAGE};
pub use tags::{derive_industry_tags, derive_stage_tags, STAGE_LABELS};
