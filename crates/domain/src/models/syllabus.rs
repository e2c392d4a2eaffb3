//! Syllabus document domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::{deserialize_some, PublicView};

/// Business id prefix for syllabus entries.
pub const SYLLABUS_ID_PREFIX: &str = "SYL";

/// School year. Ordering follows the year number, so `Class 2 < Class 10`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SchoolClass {
    #[serde(rename = "Class 1")]
    Class1,
    #[serde(rename = "Class 2")]
    Class2,
    #[serde(rename = "Class 3")]
    Class3,
    #[serde(rename = "Class 4")]
    Class4,
    #[serde(rename = "Class 5")]
    Class5,
    #[serde(rename = "Class 6")]
    Class6,
    #[serde(rename = "Class 7")]
    Class7,
    #[serde(rename = "Class 8")]
    Class8,
    #[serde(rename = "Class 9")]
    Class9,
    #[serde(rename = "Class 10")]
    Class10,
    #[serde(rename = "Class 11")]
    Class11,
    #[serde(rename = "Class 12")]
    Class12,
}

impl SchoolClass {
    pub const ALL: [SchoolClass; 12] = [
        SchoolClass::Class1,
        SchoolClass::Class2,
        SchoolClass::Class3,
        SchoolClass::Class4,
        SchoolClass::Class5,
        SchoolClass::Class6,
        SchoolClass::Class7,
        SchoolClass::Class8,
        SchoolClass::Class9,
        SchoolClass::Class10,
        SchoolClass::Class11,
        SchoolClass::Class12,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SchoolClass::Class1 => "Class 1",
            SchoolClass::Class2 => "Class 2",
            SchoolClass::Class3 => "Class 3",
            SchoolClass::Class4 => "Class 4",
            SchoolClass::Class5 => "Class 5",
            SchoolClass::Class6 => "Class 6",
            SchoolClass::Class7 => "Class 7",
            SchoolClass::Class8 => "Class 8",
            SchoolClass::Class9 => "Class 9",
            SchoolClass::Class10 => "Class 10",
            SchoolClass::Class11 => "Class 11",
            SchoolClass::Class12 => "Class 12",
        }
    }

    /// Parses `"Class 7"` or the bare year number `"7"`.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s) || c.as_str()[6..] == *s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Subject {
    English,
    Mathematics,
    Science,
    #[serde(rename = "Social Studies")]
    SocialStudies,
    Hindi,
    #[serde(rename = "Computer Science")]
    ComputerScience,
    Physics,
    Chemistry,
    Biology,
    History,
    Geography,
    Economics,
    #[serde(rename = "Business Studies")]
    BusinessStudies,
    Accountancy,
    #[serde(rename = "Political Science")]
    PoliticalScience,
    #[serde(rename = "Physical Education")]
    PhysicalEducation,
    Art,
    Music,
}

impl Subject {
    pub fn as_str(&self) -> &'static str {
        match self {
            Subject::English => "English",
            Subject::Mathematics => "Mathematics",
            Subject::Science => "Science",
            Subject::SocialStudies => "Social Studies",
            Subject::Hindi => "Hindi",
            Subject::ComputerScience => "Computer Science",
            Subject::Physics => "Physics",
            Subject::Chemistry => "Chemistry",
            Subject::Biology => "Biology",
            Subject::History => "History",
            Subject::Geography => "Geography",
            Subject::Economics => "Economics",
            Subject::BusinessStudies => "Business Studies",
            Subject::Accountancy => "Accountancy",
            Subject::PoliticalScience => "Political Science",
            Subject::PhysicalEducation => "Physical Education",
            Subject::Art => "Art",
            Subject::Music => "Music",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyllabusEntry {
    pub id: Uuid,
    pub syllabus_id: String,
    pub title: String,
    pub class: SchoolClass,
    pub subject: Subject,
    pub academic_year: String,
    pub description: Option<String>,
    pub file_url: String,
    pub file_size: Option<String>,
    pub is_active: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uploaded_by: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PublicView for SyllabusEntry {
    fn strip_owner(&mut self) {
        self.uploaded_by = None;
    }
}

fn default_active() -> bool {
    true
}

/// Request payload for publishing a syllabus document.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateSyllabusRequest {
    #[validate(
        length(min = 1, max = 200, message = "Title must be 1-200 characters"),
        custom(function = "shared::validation::validate_not_blank")
    )]
    pub title: String,

    pub class: SchoolClass,

    pub subject: Subject,

    #[validate(
        length(min = 4, max = 20, message = "Academic year is required"),
        custom(function = "shared::validation::validate_not_blank")
    )]
    pub academic_year: String,

    #[validate(length(max = 500, message = "Description must be at most 500 characters"))]
    pub description: Option<String>,

    #[validate(url(message = "Invalid file URL"))]
    pub file_url: String,

    #[validate(length(max = 50, message = "File size must be at most 50 characters"))]
    pub file_size: Option<String>,

    #[serde(default = "default_active")]
    pub is_active: bool,
}

/// Request payload for updating a syllabus entry (partial update).
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSyllabusRequest {
    #[validate(
        length(min = 1, max = 200, message = "Title must be 1-200 characters"),
        custom(function = "shared::validation::validate_not_blank")
    )]
    pub title: Option<String>,

    pub class: Option<SchoolClass>,

    pub subject: Option<Subject>,

    #[validate(
        length(min = 4, max = 20, message = "Academic year is required"),
        custom(function = "shared::validation::validate_not_blank")
    )]
    pub academic_year: Option<String>,

    #[serde(default, deserialize_with = "deserialize_some")]
    #[validate(length(max = 500, message = "Description must be at most 500 characters"))]
    pub description: Option<Option<String>>,

    #[validate(url(message = "Invalid file URL"))]
    pub file_url: Option<String>,

    #[serde(default, deserialize_with = "deserialize_some")]
    #[validate(length(max = 50, message = "File size must be at most 50 characters"))]
    pub file_size: Option<Option<String>>,

    pub is_active: Option<bool>,
}

/// Filters shared by the public and admin syllabus lists.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SyllabusQuery {
    pub class: Option<SchoolClass>,
    pub subject: Option<Subject>,
}
