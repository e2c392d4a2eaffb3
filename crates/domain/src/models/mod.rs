//! Domain models for the Excellence Academy backend.

pub mod account;
pub mod announcement;
pub mod campus;
pub mod enquiry;
pub mod gallery;
pub mod slide;
pub mod syllabus;

pub use account::{Account, AccountSummary, Role};
pub use announcement::Announcement;
pub use campus::Branch;
pub use enquiry::{Enquiry, EnquiryStatus};
pub use gallery::{GalleryBranch, GalleryCategory, GalleryImage};
pub use slide::Slide;
pub use syllabus::{SchoolClass, Subject, SyllabusEntry};

use serde::{Deserialize, Deserializer};
use uuid::Uuid;

/// How a path parameter addresses a record.
///
/// Records are reachable by their opaque UUID and by their business id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceKey {
    Id(Uuid),
    BusinessId(String),
}

impl ResourceKey {
    /// Parses a raw path segment for a collection using `prefix`.
    ///
    /// Returns `None` when the value is neither a UUID nor a well-formed
    /// business id of that collection; such a value can never match.
    pub fn parse(raw: &str, prefix: Option<&str>) -> Option<Self> {
        let raw = raw.trim();
        if let Ok(id) = Uuid::parse_str(raw) {
            return Some(Self::Id(id));
        }
        match prefix {
            Some(prefix) if shared::business_id::is_valid(prefix, raw) => {
                Some(Self::BusinessId(raw.to_string()))
            }
            _ => None,
        }
    }
}

/// Records shown on the public site without their creator reference.
pub trait PublicView {
    /// Removes the owner reference before the record leaves the admin surface.
    fn strip_owner(&mut self);

    fn into_public(mut self) -> Self
    where
        Self: Sized,
    {
        self.strip_owner();
        self
    }
}

/// Query parameters for paginated admin lists.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

/// Distinguishes an absent JSON field from an explicit `null`.
///
/// Use with `#[serde(default, deserialize_with = "deserialize_some")]` on an
/// `Option<Option<T>>` field: absent stays `None`, `null` becomes `Some(None)`.
pub fn deserialize_some<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}
