//! Document store seam
//!
//! Layout only needs ordered, read-only records. Where they live is up to
//! the store; a JSON file store ships behind the `serde` feature.

#[cfg(feature = "serde")]
mod json;

#[cfg(feature = "serde")]
pub use json::{JsonMenuStore, StoreData};

use crate::document::{MenuDocument, Template};
use crate::types::Result;
use std::future::Future;

/// Read contract of a menu store
pub trait MenuStore {
    /// The menu with its template, sections ordered by position and items
    /// ordered by position within each section
    fn fetch_document(&self, menu_id: &str) -> impl Future<Output = Result<MenuDocument>> + Send;

    fn list_templates(&self) -> impl Future<Output = Result<Vec<Template>>> + Send;
}
