//! Storefront state: count reconciliation, pagination, and ranking.
//!
//! The upstream exposes two independent sources of truth for "how many
//! agents exist" (a count endpoint and an optional `total` on the list
//! response), and commits to neither's shape. Everything here exists to
//! turn that into a stable browsing experience.

mod browser;
mod count;
mod pager;
mod rank;

pub use browser::StoreBrowser;
pub use count::{extract_count, extract_positive};
pub use pager::{DEFAULT_PAGE_SIZE, PageWindow, Pager};
pub use rank::ranked_by_tokens;
