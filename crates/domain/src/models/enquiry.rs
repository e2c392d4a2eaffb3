//! Admission enquiry domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::campus::Branch;

/// Business id prefix for enquiries.
pub const ENQUIRY_ID_PREFIX: &str = "ENQ";

/// Follow-up state of an enquiry. Any state may move to any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EnquiryStatus {
    #[default]
    Pending,
    Contacted,
    Enrolled,
    Rejected,
}

impl EnquiryStatus {
    pub const ALL: [EnquiryStatus; 4] = [
        EnquiryStatus::Pending,
        EnquiryStatus::Contacted,
        EnquiryStatus::Enrolled,
        EnquiryStatus::Rejected,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EnquiryStatus::Pending => "pending",
            EnquiryStatus::Contacted => "contacted",
            EnquiryStatus::Enrolled => "enrolled",
            EnquiryStatus::Rejected => "rejected",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|st| st.as_str() == s)
    }
}

/// An admission enquiry submitted from the public site.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Enquiry {
    pub id: Uuid,
    pub enquiry_id: String,
    pub student_name: String,
    pub parent_name: String,
    pub email: String,
    pub phone: String,
    pub branch: Branch,
    pub grade: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub status: EnquiryStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

lazy_static::lazy_static! {
    /// Digits with optional leading `+` and common separators.
    pub static ref PHONE_REGEX: regex::Regex =
        regex::Regex::new(r"^\+?[0-9][0-9 ()\-]*[0-9]$").unwrap();
}

/// Request payload for submitting an enquiry.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateEnquiryRequest {
    #[validate(
        length(min = 2, max = 100, message = "Student name must be at least 2 characters"),
        custom(function = "shared::validation::validate_not_blank")
    )]
    pub student_name: String,

    #[validate(
        length(min = 2, max = 100, message = "Parent name must be at least 2 characters"),
        custom(function = "shared::validation::validate_not_blank")
    )]
    pub parent_name: String,

    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    #[validate(
        length(min = 10, max = 20, message = "Phone number must be at least 10 characters"),
        regex(path = "*PHONE_REGEX", message = "Phone number may contain only digits, spaces, '+', '-' and parentheses")
    )]
    pub phone: String,

    pub branch: Branch,

    #[validate(length(min = 1, max = 20, message = "Please select a grade"))]
    pub grade: String,

    #[validate(length(max = 2000, message = "Message must be at most 2000 characters"))]
    pub message: Option<String>,
}

/// Request payload for `PATCH /api/enquiries/:id/status`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateEnquiryStatusRequest {
    pub status: EnquiryStatus,
}

/// Receipt returned to the public submitter.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnquiryReceipt {
    pub enquiry_id: String,
    pub student_name: String,
    pub branch: Branch,
}

impl From<&Enquiry> for EnquiryReceipt {
    fn from(e: &Enquiry) -> Self {
        Self {
            enquiry_id: e.enquiry_id.clone(),
            student_name: e.student_name.clone(),
            branch: e.branch,
        }
    }
}

/// Query parameters for the admin enquiry list.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EnquiryListQuery {
    pub branch: Option<Branch>,
    pub status: Option<EnquiryStatus>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

/// Per-status totals across all enquiries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub total: i64,
    pub pending: i64,
    pub contacted: i64,
    pub enrolled: i64,
    pub rejected: i64,
}

impl StatusCounts {
    /// Builds the totals from `(status, count)` rows.
    pub fn from_rows<I>(rows: I) -> Self
    where
        I: IntoIterator<Item = (EnquiryStatus, i64)>,
    {
        rows.into_iter()
            .fold(Self::default(), |mut acc, (status, count)| {
                acc.total += count;
                match status {
                    EnquiryStatus::Pending => acc.pending += count,
                    EnquiryStatus::Contacted => acc.contacted += count,
                    EnquiryStatus::Enrolled => acc.enrolled += count,
                    EnquiryStatus::Rejected => acc.rejected += count,
                }
                acc
            })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BranchCount {
    pub branch: Branch,
    pub count: i64,
}

/// Payload of `GET /api/enquiries/stats`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnquiryStats {
    pub overall: StatusCounts,
    pub by_branch: Vec<BranchCount>,
}
