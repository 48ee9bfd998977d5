pub mod api;
pub mod models;
pub mod urls;

use models::{Category, ContentItem, Section};
use std::future::Future;

/// Read side of the remote catalog, as used by the browsing controller.
pub trait Catalog {
    fn list_categories(
        &self,
        section: Section,
    ) -> impl Future<Output = anyhow::Result<Vec<Category>>> + Send;

    /// `category_id == None` lists the whole section.
    fn list_items(
        &self,
        section: Section,
        category_id: Option<&str>,
    ) -> impl Future<Output = anyhow::Result<Vec<ContentItem>>> + Send;
}
