//! Generic read, delete and toggle flows for content collections.
//!
//! Each collection contributes its user-facing noun through [`Resource`];
//! inserts and updates are handled by the per-collection repositories.

use domain::models::{PageQuery, PublicView, ResourceKey};
use persistence::entities::{
    AnnouncementEntity, EnquiryEntity, GalleryImageEntity, SlideEntity, SyllabusEntryEntity,
};
use persistence::{Collection, CollectionRepository, Filter, Toggle};
use shared::pagination::PageRequest;
use sqlx::PgPool;

use crate::error::ApiError;
use crate::response::Page;

/// HTTP-facing description of a collection.
pub trait Resource: Collection {
    /// Body message when a lookup misses.
    const NOT_FOUND: &'static str;
    /// Key of the item array in paginated responses.
    const LIST_KEY: &'static str;
    const DEFAULT_PAGE_SIZE: u32 = 20;
}

impl Resource for EnquiryEntity {
    const NOT_FOUND: &'static str = "Enquiry not found.";
    const LIST_KEY: &'static str = "enquiries";
}

impl Resource for AnnouncementEntity {
    const NOT_FOUND: &'static str = "Announcement not found.";
    const LIST_KEY: &'static str = "announcements";
}

impl Resource for GalleryImageEntity {
    const NOT_FOUND: &'static str = "Image not found.";
    const LIST_KEY: &'static str = "images";
}

impl Resource for SlideEntity {
    const NOT_FOUND: &'static str = "Slide not found.";
    const LIST_KEY: &'static str = "slides";
}

impl Resource for SyllabusEntryEntity {
    const NOT_FOUND: &'static str = "Syllabus not found.";
    const LIST_KEY: &'static str = "syllabus";
    const DEFAULT_PAGE_SIZE: u32 = 50;
}

pub struct ResourceService<E> {
    repo: CollectionRepository<E>,
}

impl<E: Resource> ResourceService<E> {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repo: CollectionRepository::new(pool),
        }
    }

    /// Parses a path id. A value that cannot address any record is a miss.
    pub fn key(raw: &str) -> Result<ResourceKey, ApiError> {
        ResourceKey::parse(raw, Some(E::BUSINESS_ID_PREFIX)).ok_or_else(Self::not_found)
    }

    pub fn not_found() -> ApiError {
        ApiError::NotFound(E::NOT_FOUND.to_string())
    }

    /// Turns a repository miss into `NotFound`.
    pub fn found<T>(record: Option<T>) -> Result<T, ApiError> {
        record.ok_or_else(Self::not_found)
    }

    pub async fn get(&self, raw: &str) -> Result<E::Model, ApiError> {
        let key = Self::key(raw)?;
        Self::found(self.repo.find(&key).await?)
    }

    pub async fn list_all(&self, filters: &[Filter]) -> Result<Vec<E::Model>, ApiError> {
        Ok(self.repo.list_all(filters).await?)
    }

    pub async fn list_page(
        &self,
        filters: &[Filter],
        query: &PageQuery,
    ) -> Result<Page<E::Model>, ApiError> {
        let page = PageRequest::new(query.page, query.limit, E::DEFAULT_PAGE_SIZE);
        let (items, total) = self.repo.list_page(filters, page).await?;
        Ok(Page::new(E::LIST_KEY, items, page.info(total)))
    }

    pub async fn delete(&self, raw: &str) -> Result<E::Model, ApiError> {
        let key = Self::key(raw)?;
        Self::found(self.repo.delete(&key).await?)
    }
}

impl<E> ResourceService<E>
where
    E: Resource,
    E::Model: PublicView,
{
    /// Visible records in public order, creator stripped.
    pub async fn list_public(&self, filters: &[Filter]) -> Result<Vec<E::Model>, ApiError> {
        let records = self.repo.list_public(filters).await?;
        Ok(records.into_iter().map(PublicView::into_public).collect())
    }
}

impl<E: Resource + Toggle> ResourceService<E> {
    pub async fn toggle(&self, raw: &str) -> Result<E::Model, ApiError> {
        let key = Self::key(raw)?;
        Self::found(self.repo.toggle_active(&key).await?)
    }
}

/// Success message for a toggle, e.g. "Slide activated successfully.".
pub fn toggle_message(noun: &str, is_active: bool) -> String {
    let state = if is_active { "activated" } else { "deactivated" };
    format!("{} {} successfully.", noun, state)
}
