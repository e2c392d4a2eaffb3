//! Repository implementations for database operations.

pub mod account;
pub mod announcement;
pub mod enquiry;
pub mod gallery;
pub mod slide;
pub mod syllabus;

pub use account::AccountRepository;
pub use announcement::AnnouncementRepository;
pub use enquiry::EnquiryRepository;
pub use gallery::GalleryRepository;
pub use slide::SlideRepository;
pub use syllabus::SyllabusRepository;
