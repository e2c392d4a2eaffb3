//! Entity definitions (database row mappings).

pub mod account;
pub mod announcement;
pub mod enquiry;
pub mod gallery;
pub mod slide;
pub mod syllabus;

pub use account::{AccountEntity, AccountRoleDb};
pub use announcement::AnnouncementEntity;
pub use enquiry::{BranchCountRow, BranchDb, EnquiryEntity, EnquiryStatusDb, StatusCountRow};
pub use gallery::{GalleryBranchDb, GalleryCategoryDb, GalleryImageEntity};
pub use slide::SlideEntity;
pub use syllabus::{SchoolClassDb, SubjectDb, SyllabusEntryEntity};
