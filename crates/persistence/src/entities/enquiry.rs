//! Enquiry entity (database row mapping).

use chrono::{DateTime, Utc};
use domain::models::{Branch, Enquiry, EnquiryStatus};
use sqlx::FromRow;
use uuid::Uuid;

/// Database enum for campus_branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "campus_branch")]
pub enum BranchDb {
    #[sqlx(rename = "North Campus")]
    NorthCampus,
    #[sqlx(rename = "South Campus")]
    SouthCampus,
    #[sqlx(rename = "East Campus")]
    EastCampus,
}

impl From<BranchDb> for Branch {
    fn from(db: BranchDb) -> Self {
        match db {
            BranchDb::NorthCampus => Branch::NorthCampus,
            BranchDb::SouthCampus => Branch::SouthCampus,
            BranchDb::EastCampus => Branch::EastCampus,
        }
    }
}

impl From<Branch> for BranchDb {
    fn from(branch: Branch) -> Self {
        match branch {
            Branch::NorthCampus => BranchDb::NorthCampus,
            Branch::SouthCampus => BranchDb::SouthCampus,
            Branch::EastCampus => BranchDb::EastCampus,
        }
    }
}

/// Database enum for enquiry_status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "enquiry_status", rename_all = "lowercase")]
pub enum EnquiryStatusDb {
    Pending,
    Contacted,
    Enrolled,
    Rejected,
}

impl From<EnquiryStatusDb> for EnquiryStatus {
    fn from(db: EnquiryStatusDb) -> Self {
        match db {
            EnquiryStatusDb::Pending => EnquiryStatus::Pending,
            EnquiryStatusDb::Contacted => EnquiryStatus::Contacted,
            EnquiryStatusDb::Enrolled => EnquiryStatus::Enrolled,
            EnquiryStatusDb::Rejected => EnquiryStatus::Rejected,
        }
    }
}

impl From<EnquiryStatus> for EnquiryStatusDb {
    fn from(status: EnquiryStatus) -> Self {
        match status {
            EnquiryStatus::Pending => EnquiryStatusDb::Pending,
            EnquiryStatus::Contacted => EnquiryStatusDb::Contacted,
            EnquiryStatus::Enrolled => EnquiryStatusDb::Enrolled,
            EnquiryStatus::Rejected => EnquiryStatusDb::Rejected,
        }
    }
}

/// Database row mapping for the enquiries table.
#[derive(Debug, Clone, FromRow)]
pub struct EnquiryEntity {
    pub id: Uuid,
    pub enquiry_id: String,
    pub student_name: String,
    pub parent_name: String,
    pub email: String,
    pub phone: String,
    pub branch: BranchDb,
    pub grade: String,
    pub message: Option<String>,
    pub status: EnquiryStatusDb,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<EnquiryEntity> for Enquiry {
    fn from(entity: EnquiryEntity) -> Self {
        Self {
            id: entity.id,
            enquiry_id: entity.enquiry_id,
            student_name: entity.student_name,
            parent_name: entity.parent_name,
            email: entity.email,
            phone: entity.phone,
            branch: entity.branch.into(),
            grade: entity.grade,
            message: entity.message,
            status: entity.status.into(),
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

/// One `GROUP BY status` row of the statistics query.
#[derive(Debug, Clone, FromRow)]
pub struct StatusCountRow {
    pub status: EnquiryStatusDb,
    pub count: i64,
}

/// One `GROUP BY branch` row of the statistics query.
#[derive(Debug, Clone, FromRow)]
pub struct BranchCountRow {
    pub branch: BranchDb,
    pub count: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_branch_mapping_roundtrip() {
        for branch in Branch::ALL {
            assert_eq!(Branch::from(BranchDb::from(branch)), branch);
        }
    }

    #[test]
    fn test_status_mapping_roundtrip() {
        for status in EnquiryStatus::ALL {
            assert_eq!(EnquiryStatus::from(EnquiryStatusDb::from(status)), status);
        }
    }
}
