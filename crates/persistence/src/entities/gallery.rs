//! Gallery image entity (database row mapping).

use chrono::{DateTime, Utc};
use domain::models::{GalleryBranch, GalleryCategory, GalleryImage};
use sqlx::FromRow;
use uuid::Uuid;

/// Database enum for gallery_category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "gallery_category")]
pub enum GalleryCategoryDb {
    Campus,
    Classrooms,
    Sports,
    Events,
    Activities,
}

impl From<GalleryCategoryDb> for GalleryCategory {
    fn from(db: GalleryCategoryDb) -> Self {
        match db {
            GalleryCategoryDb::Campus => GalleryCategory::Campus,
            GalleryCategoryDb::Classrooms => GalleryCategory::Classrooms,
            GalleryCategoryDb::Sports => GalleryCategory::Sports,
            GalleryCategoryDb::Events => GalleryCategory::Events,
            GalleryCategoryDb::Activities => GalleryCategory::Activities,
        }
    }
}

impl From<GalleryCategory> for GalleryCategoryDb {
    fn from(category: GalleryCategory) -> Self {
        match category {
            GalleryCategory::Campus => GalleryCategoryDb::Campus,
            GalleryCategory::Classrooms => GalleryCategoryDb::Classrooms,
            GalleryCategory::Sports => GalleryCategoryDb::Sports,
            GalleryCategory::Events => GalleryCategoryDb::Events,
            GalleryCategory::Activities => GalleryCategoryDb::Activities,
        }
    }
}

/// Database enum for gallery_branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "gallery_branch")]
pub enum GalleryBranchDb {
    #[sqlx(rename = "North Campus")]
    NorthCampus,
    #[sqlx(rename = "South Campus")]
    SouthCampus,
    #[sqlx(rename = "East Campus")]
    EastCampus,
    All,
}

impl From<GalleryBranchDb> for GalleryBranch {
    fn from(db: GalleryBranchDb) -> Self {
        match db {
            GalleryBranchDb::NorthCampus => GalleryBranch::NorthCampus,
            GalleryBranchDb::SouthCampus => GalleryBranch::SouthCampus,
            GalleryBranchDb::EastCampus => GalleryBranch::EastCampus,
            GalleryBranchDb::All => GalleryBranch::All,
        }
    }
}

impl From<GalleryBranch> for GalleryBranchDb {
    fn from(branch: GalleryBranch) -> Self {
        match branch {
            GalleryBranch::NorthCampus => GalleryBranchDb::NorthCampus,
            GalleryBranch::SouthCampus => GalleryBranchDb::SouthCampus,
            GalleryBranch::EastCampus => GalleryBranchDb::EastCampus,
            GalleryBranch::All => GalleryBranchDb::All,
        }
    }
}

/// Database row mapping for the gallery_images table.
#[derive(Debug, Clone, FromRow)]
pub struct GalleryImageEntity {
    pub id: Uuid,
    pub image_id: String,
    pub title: String,
    pub category: GalleryCategoryDb,
    pub image_url: String,
    pub description: Option<String>,
    pub branch: Option<GalleryBranchDb>,
    pub uploaded_by: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<GalleryImageEntity> for GalleryImage {
    fn from(entity: GalleryImageEntity) -> Self {
        Self {
            id: entity.id,
            image_id: entity.image_id,
            title: entity.title,
            category: entity.category.into(),
            image_url: entity.image_url,
            description: entity.description,
            branch: entity.branch.map(Into::into),
            uploaded_by: entity.uploaded_by,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_mapping_roundtrip() {
        for category in GalleryCategory::ALL {
            assert_eq!(GalleryCategory::from(GalleryCategoryDb::from(category)), category);
        }
    }

    #[test]
    fn test_branch_all_maps() {
        assert_eq!(GalleryBranchDb::from(GalleryBranch::All), GalleryBranchDb::All);
        assert_eq!(GalleryBranch::from(GalleryBranchDb::EastCampus), GalleryBranch::EastCampus);
    }
}
