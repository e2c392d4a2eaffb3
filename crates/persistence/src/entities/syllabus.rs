//! Syllabus entry entity (database row mapping).

use chrono::{DateTime, Utc};
use domain::models::{SchoolClass, Subject, SyllabusEntry};
use sqlx::FromRow;
use uuid::Uuid;

/// Database enum for school_class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "school_class")]
pub enum SchoolClassDb {
    #[sqlx(rename = "Class 1")]
    Class1,
    #[sqlx(rename = "Class 2")]
    Class2,
    #[sqlx(rename = "Class 3")]
    Class3,
    #[sqlx(rename = "Class 4")]
    Class4,
    #[sqlx(rename = "Class 5")]
    Class5,
    #[sqlx(rename = "Class 6")]
    Class6,
    #[sqlx(rename = "Class 7")]
    Class7,
    #[sqlx(rename = "Class 8")]
    Class8,
    #[sqlx(rename = "Class 9")]
    Class9,
    #[sqlx(rename = "Class 10")]
    Class10,
    #[sqlx(rename = "Class 11")]
    Class11,
    #[sqlx(rename = "Class 12")]
    Class12,
}

impl From<SchoolClassDb> for SchoolClass {
    fn from(db: SchoolClassDb) -> Self {
        match db {
            SchoolClassDb::Class1 => SchoolClass::Class1,
            SchoolClassDb::Class2 => SchoolClass::Class2,
            SchoolClassDb::Class3 => SchoolClass::Class3,
            SchoolClassDb::Class4 => SchoolClass::Class4,
            SchoolClassDb::Class5 => SchoolClass::Class5,
            SchoolClassDb::Class6 => SchoolClass::Class6,
            SchoolClassDb::Class7 => SchoolClass::Class7,
            SchoolClassDb::Class8 => SchoolClass::Class8,
            SchoolClassDb::Class9 => SchoolClass::Class9,
            SchoolClassDb::Class10 => SchoolClass::Class10,
            SchoolClassDb::Class11 => SchoolClass::Class11,
            SchoolClassDb::Class12 => SchoolClass::Class12,
        }
    }
}

impl From<SchoolClass> for SchoolClassDb {
    fn from(class: SchoolClass) -> Self {
        match class {
            SchoolClass::Class1 => SchoolClassDb::Class1,
            SchoolClass::Class2 => SchoolClassDb::Class2,
            SchoolClass::Class3 => SchoolClassDb::Class3,
            SchoolClass::Class4 => SchoolClassDb::Class4,
            SchoolClass::Class5 => SchoolClassDb::Class5,
            SchoolClass::Class6 => SchoolClassDb::Class6,
            SchoolClass::Class7 => SchoolClassDb::Class7,
            SchoolClass::Class8 => SchoolClassDb::Class8,
            SchoolClass::Class9 => SchoolClassDb::Class9,
            SchoolClass::Class10 => SchoolClassDb::Class10,
            SchoolClass::Class11 => SchoolClassDb::Class11,
            SchoolClass::Class12 => SchoolClassDb::Class12,
        }
    }
}

/// Database enum for syllabus_subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "syllabus_subject")]
pub enum SubjectDb {
    English,
    Mathematics,
    Science,
    #[sqlx(rename = "Social Studies")]
    SocialStudies,
    Hindi,
    #[sqlx(rename = "Computer Science")]
    ComputerScience,
    Physics,
    Chemistry,
    Biology,
    History,
    Geography,
    Economics,
    #[sqlx(rename = "Business Studies")]
    BusinessStudies,
    Accountancy,
    #[sqlx(rename = "Political Science")]
    PoliticalScience,
    #[sqlx(rename = "Physical Education")]
    PhysicalEducation,
    Art,
    Music,
}

impl From<SubjectDb> for Subject {
    fn from(db: SubjectDb) -> Self {
        match db {
            SubjectDb::English => Subject::English,
            SubjectDb::Mathematics => Subject::Mathematics,
            SubjectDb::Science => Subject::Science,
            SubjectDb::SocialStudies => Subject::SocialStudies,
            SubjectDb::Hindi => Subject::Hindi,
            SubjectDb::ComputerScience => Subject::ComputerScience,
            SubjectDb::Physics => Subject::Physics,
            SubjectDb::Chemistry => Subject::Chemistry,
            SubjectDb::Biology => Subject::Biology,
            SubjectDb::History => Subject::History,
            SubjectDb::Geography => Subject::Geography,
            SubjectDb::Economics => Subject::Economics,
            SubjectDb::BusinessStudies => Subject::BusinessStudies,
            SubjectDb::Accountancy => Subject::Accountancy,
            SubjectDb::PoliticalScience => Subject::PoliticalScience,
            SubjectDb::PhysicalEducation => Subject::PhysicalEducation,
            SubjectDb::Art => Subject::Art,
            SubjectDb::Music => Subject::Music,
        }
    }
}

impl From<Subject> for SubjectDb {
    fn from(subject: Subject) -> Self {
        match subject {
            Subject::English => SubjectDb::English,
            Subject::Mathematics => SubjectDb::Mathematics,
            Subject::Science => SubjectDb::Science,
            Subject::SocialStudies => SubjectDb::SocialStudies,
            Subject::Hindi => SubjectDb::Hindi,
            Subject::ComputerScience => SubjectDb::ComputerScience,
            Subject::Physics => SubjectDb::Physics,
            Subject::Chemistry => SubjectDb::Chemistry,
            Subject::Biology => SubjectDb::Biology,
            Subject::History => SubjectDb::History,
            Subject::Geography => SubjectDb::Geography,
            Subject::Economics => SubjectDb::Economics,
            Subject::BusinessStudies => SubjectDb::BusinessStudies,
            Subject::Accountancy => SubjectDb::Accountancy,
            Subject::PoliticalScience => SubjectDb::PoliticalScience,
            Subject::PhysicalEducation => SubjectDb::PhysicalEducation,
            Subject::Art => SubjectDb::Art,
            Subject::Music => SubjectDb::Music,
        }
    }
}

/// Database row mapping for the syllabus_entries table.
#[derive(Debug, Clone, FromRow)]
pub struct SyllabusEntryEntity {
    pub id: Uuid,
    pub syllabus_id: String,
    pub title: String,
    pub class: SchoolClassDb,
    pub subject: SubjectDb,
    pub academic_year: String,
    pub description: Option<String>,
    pub file_url: String,
    pub file_size: Option<String>,
    pub is_active: bool,
    pub uploaded_by: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<SyllabusEntryEntity> for SyllabusEntry {
    fn from(entity: SyllabusEntryEntity) -> Self {
        Self {
            id: entity.id,
            syllabus_id: entity.syllabus_id,
            title: entity.title,
            class: entity.class.into(),
            subject: entity.subject.into(),
            academic_year: entity.academic_year,
            description: entity.description,
            file_url: entity.file_url,
            file_size: entity.file_size,
            is_active: entity.is_active,
            uploaded_by: entity.uploaded_by,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}
