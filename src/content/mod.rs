//! Content pages

pub mod models;
pub mod service;

pub use models::{Page, PageStatus};
pub use service::{PageLookupError, get_public_page};
