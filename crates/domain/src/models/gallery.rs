//! Gallery image domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::{deserialize_some, PublicView};

/// Business id prefix for gallery images.
pub const GALLERY_ID_PREFIX: &str = "IMG";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GalleryCategory {
    Campus,
    Classrooms,
    Sports,
    Events,
    Activities,
}

impl GalleryCategory {
    pub const ALL: [GalleryCategory; 5] = [
        GalleryCategory::Campus,
        GalleryCategory::Classrooms,
        GalleryCategory::Sports,
        GalleryCategory::Events,
        GalleryCategory::Activities,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GalleryCategory::Campus => "Campus",
            GalleryCategory::Classrooms => "Classrooms",
            GalleryCategory::Sports => "Sports",
            GalleryCategory::Events => "Events",
            GalleryCategory::Activities => "Activities",
        }
    }
}

/// Campus tag of an image. `All` marks images shared by every campus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GalleryBranch {
    #[serde(rename = "North Campus")]
    NorthCampus,
    #[serde(rename = "South Campus")]
    SouthCampus,
    #[serde(rename = "East Campus")]
    EastCampus,
    All,
}

impl GalleryBranch {
    pub fn as_str(&self) -> &'static str {
        match self {
            GalleryBranch::NorthCampus => "North Campus",
            GalleryBranch::SouthCampus => "South Campus",
            GalleryBranch::EastCampus => "East Campus",
            GalleryBranch::All => "All",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryImage {
    pub id: Uuid,
    pub image_id: String,
    pub title: String,
    pub category: GalleryCategory,
    pub image_url: String,
    pub description: Option<String>,
    pub branch: Option<GalleryBranch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uploaded_by: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PublicView for GalleryImage {
    fn strip_owner(&mut self) {
        self.uploaded_by = None;
    }
}

/// Request payload for adding an image.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateGalleryImageRequest {
    #[validate(
        length(min = 2, max = 200, message = "Title must be at least 2 characters"),
        custom(function = "shared::validation::validate_not_blank")
    )]
    pub title: String,

    pub category: GalleryCategory,

    #[validate(url(message = "Invalid image URL"))]
    pub image_url: String,

    #[validate(length(max = 500, message = "Description must be at most 500 characters"))]
    pub description: Option<String>,

    pub branch: Option<GalleryBranch>,
}

/// Request payload for updating an image (partial update).
///
/// `null` on `description` or `branch` clears the stored value.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateGalleryImageRequest {
    #[validate(
        length(min = 2, max = 200, message = "Title must be at least 2 characters"),
        custom(function = "shared::validation::validate_not_blank")
    )]
    pub title: Option<String>,

    pub category: Option<GalleryCategory>,

    #[validate(url(message = "Invalid image URL"))]
    pub image_url: Option<String>,

    #[serde(default, deserialize_with = "deserialize_some")]
    #[validate(length(max = 500, message = "Description must be at most 500 characters"))]
    pub description: Option<Option<String>>,

    #[serde(default, deserialize_with = "deserialize_some")]
    pub branch: Option<Option<GalleryBranch>>,
}

/// Public gallery filters. `branch=All` disables the campus filter.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GalleryQuery {
    pub category: Option<GalleryCategory>,
    pub branch: Option<GalleryBranch>,
}

impl GalleryQuery {
    /// The campus tag to filter on, if any.
    pub fn branch_filter(&self) -> Option<GalleryBranch> {
        self.branch.filter(|b| *b != GalleryBranch::All)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_request_valid() {
        let req: CreateGalleryImageRequest = serde_json::from_value(json!({
            "title": "Science Lab",
            "category": "Classrooms",
            "imageUrl": "https://cdn.example.com/lab.jpg",
            "branch": "All"
        }))
        .unwrap();
        assert!(req.validate().is_ok());
        assert_eq!(req.branch, Some(GalleryBranch::All));
    }

    #[test]
    fn test_create_request_rejects_bad_url() {
        let req: CreateGalleryImageRequest = serde_json::from_value(json!({
            "title": "Science Lab",
            "category": "Classrooms",
            "imageUrl": "not a url"
        }))
        .unwrap();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_unknown_category_fails_to_parse() {
        let result = serde_json::from_value::<CreateGalleryImageRequest>(json!({
            "title": "Science Lab",
            "category": "Library",
            "imageUrl": "https://cdn.example.com/lab.jpg"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_branch_filter_ignores_all() {
        let all = GalleryQuery {
            category: None,
            branch: Some(GalleryBranch::All),
        };
        assert_eq!(all.branch_filter(), None);

        let north = GalleryQuery {
            category: None,
            branch: Some(GalleryBranch::NorthCampus),
        };
        assert_eq!(north.branch_filter(), Some(GalleryBranch::NorthCampus));
    }

    #[test]
    fn test_category_names() {
        for category in GalleryCategory::ALL {
            assert_eq!(
                serde_json::to_value(category).unwrap(),
                json!(category.as_str())
            );
        }
    }

    #[test]
    fn test_update_request_distinguishes_null_from_absent() {
        let cleared: UpdateGalleryImageRequest =
            serde_json::from_value(json!({ "description": null, "branch": null })).unwrap();
        assert_eq!(cleared.description, Some(None));
        assert_eq!(cleared.branch, Some(None));

        let set: UpdateGalleryImageRequest =
            serde_json::from_value(json!({ "branch": "North Campus" })).unwrap();
        assert_eq!(set.branch, Some(Some(GalleryBranch::NorthCampus)));
        assert_eq!(set.description, None);

        let long: UpdateGalleryImageRequest =
            serde_json::from_value(json!({ "description": "d".repeat(501) })).unwrap();
        assert!(long.validate().is_err());
    }
}
