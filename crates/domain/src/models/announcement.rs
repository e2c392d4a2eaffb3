//! Announcement domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use uuid::Uuid;
use validator::{Validate, ValidationError};

use super::{deserialize_some, PublicView};

/// Business id prefix for announcements.
pub const ANNOUNCEMENT_ID_PREFIX: &str = "ANN";

/// A notice shown on the public site during its active window.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Announcement {
    pub id: Uuid,
    pub announcement_id: String,
    pub title: String,
    pub message: String,
    pub is_important: bool,
    pub is_pinned: bool,
    pub start_date: DateTime<Utc>,
    pub expiry_date: Option<DateTime<Utc>>,
    pub is_active: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Announcement {
    /// True when the announcement is visible to the public at `now`.
    ///
    /// Visible means active, already started, and not yet expired. The
    /// expiry instant itself is still inside the window.
    pub fn is_visible_at(&self, now: DateTime<Utc>) -> bool {
        self.is_active
            && self.start_date <= now
            && self.expiry_date.map_or(true, |expiry| expiry >= now)
    }

    /// Public ordering: pinned first, then important, then newest start.
    pub fn public_cmp(&self, other: &Self) -> Ordering {
        other
            .is_pinned
            .cmp(&self.is_pinned)
            .then_with(|| other.is_important.cmp(&self.is_important))
            .then_with(|| other.start_date.cmp(&self.start_date))
    }
}

impl PublicView for Announcement {
    fn strip_owner(&mut self) {
        self.created_by = None;
    }
}

/// Filters and orders announcements for the public site.
pub fn visible_announcements(
    mut announcements: Vec<Announcement>,
    now: DateTime<Utc>,
) -> Vec<Announcement> {
    announcements.retain(|a| a.is_visible_at(now));
    announcements.sort_by(Announcement::public_cmp);
    announcements
}

fn validate_create_window(req: &CreateAnnouncementRequest) -> Result<(), ValidationError> {
    check_window(req.start_date, req.expiry_date)
}

fn validate_update_window(req: &UpdateAnnouncementRequest) -> Result<(), ValidationError> {
    match req.expiry_date {
        Some(expiry) => check_window(req.start_date, expiry),
        None => Ok(()),
    }
}

fn check_window(
    start: Option<DateTime<Utc>>,
    expiry: Option<DateTime<Utc>>,
) -> Result<(), ValidationError> {
    match (start, expiry) {
        (Some(start), Some(expiry)) if expiry < start => {
            let mut err = ValidationError::new("expiry_before_start");
            err.message = Some("Expiry date must be on or after the start date".into());
            Err(err)
        }
        _ => Ok(()),
    }
}

/// Request payload for creating an announcement.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_create_window"))]
pub struct CreateAnnouncementRequest {
    #[validate(
        length(min = 1, max = 200, message = "Title must be 1-200 characters"),
        custom(function = "shared::validation::validate_not_blank")
    )]
    pub title: String,

    #[validate(
        length(min = 1, max = 1000, message = "Message must be 1-1000 characters"),
        custom(function = "shared::validation::validate_not_blank")
    )]
    pub message: String,

    #[serde(default)]
    pub is_important: bool,

    #[serde(default)]
    pub is_pinned: bool,

    /// Defaults to the creation instant when absent.
    pub start_date: Option<DateTime<Utc>>,

    pub expiry_date: Option<DateTime<Utc>>,

    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

/// Request payload for updating an announcement (partial update).
///
/// `expiryDate: null` clears the expiry; an absent field leaves it alone.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_update_window"))]
pub struct UpdateAnnouncementRequest {
    #[validate(
        length(min = 1, max = 200, message = "Title must be 1-200 characters"),
        custom(function = "shared::validation::validate_not_blank")
    )]
    pub title: Option<String>,

    #[validate(
        length(min = 1, max = 1000, message = "Message must be 1-1000 characters"),
        custom(function = "shared::validation::validate_not_blank")
    )]
    pub message: Option<String>,

    pub is_important: Option<bool>,

    pub is_pinned: Option<bool>,

    pub start_date: Option<DateTime<Utc>>,

    #[serde(default, deserialize_with = "deserialize_some")]
    pub expiry_date: Option<Option<DateTime<Utc>>>,

    pub is_active: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use serde_json::json;

    fn at(day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, day, 9, 0, 0).unwrap()
    }

    fn announcement(title: &str) -> Announcement {
        Announcement {
            id: Uuid::new_v4(),
            announcement_id: shared::business_id::generate(ANNOUNCEMENT_ID_PREFIX),
            title: title.to_string(),
            message: "School closed for the winter break".to_string(),
            is_important: false,
            is_pinned: false,
            start_date: at(1),
            expiry_date: None,
            is_active: true,
            created_by: Some(Uuid::new_v4()),
            created_at: at(1),
            updated_at: at(1),
        }
    }

    #[test]
    fn test_visible_without_expiry() {
        let a = announcement("a");
        assert!(a.is_visible_at(at(1)));
        assert!(a.is_visible_at(at(20)));
    }

    #[test]
    fn test_not_visible_before_start() {
        let mut a = announcement("a");
        a.start_date = at(5);
        assert!(!a.is_visible_at(at(4)));
        assert!(a.is_visible_at(at(5)));
    }

    #[test]
    fn test_expiry_boundary_is_inclusive() {
        let mut a = announcement("a");
        a.expiry_date = Some(at(10));
        assert!(a.is_visible_at(at(10)));
        assert!(!a.is_visible_at(at(10) + Duration::seconds(1)));
    }

    #[test]
    fn test_inactive_never_visible() {
        let mut a = announcement("a");
        a.is_active = false;
        assert!(!a.is_visible_at(at(2)));
    }

    #[test]
    fn test_public_ordering() {
        let mut plain_new = announcement("plain-new");
        plain_new.start_date = at(3);
        let plain_old = announcement("plain-old");
        let mut important = announcement("important");
        important.is_important = true;
        let mut pinned = announcement("pinned");
        pinned.is_pinned = true;
        let mut pinned_important = announcement("pinned-important");
        pinned_important.is_pinned = true;
        pinned_important.is_important = true;

        let ordered = visible_announcements(
            vec![plain_old, important, plain_new, pinned, pinned_important],
            at(4),
        );
        let titles: Vec<&str> = ordered.iter().map(|a| a.title.as_str()).collect();
        assert_eq!(
            titles,
            ["pinned-important", "pinned", "important", "plain-new", "plain-old"]
        );
    }

    #[test]
    fn test_visible_announcements_filters() {
        let mut expired = announcement("expired");
        expired.expiry_date = Some(at(2));
        let live = announcement("live");

        let ordered = visible_announcements(vec![expired, live], at(3));
        assert_eq!(ordered.len(), 1);
        assert_eq!(ordered[0].title, "live");
    }

    #[test]
    fn test_into_public_strips_creator() {
        let json = serde_json::to_value(announcement("a").into_public()).unwrap();
        assert!(json.get("createdBy").is_none());
        assert!(json.get("announcementId").is_some());
    }

    #[test]
    fn test_create_request_defaults() {
        let req: CreateAnnouncementRequest = serde_json::from_value(json!({
            "title": "Sports Day",
            "message": "Annual sports day on Friday"
        }))
        .unwrap();
        assert!(req.is_active);
        assert!(!req.is_pinned);
        assert!(!req.is_important);
        assert!(req.start_date.is_none());
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_create_request_rejects_long_title() {
        let req: CreateAnnouncementRequest = serde_json::from_value(json!({
            "title": "x".repeat(201),
            "message": "m"
        }))
        .unwrap();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_create_request_rejects_inverted_window() {
        let req: CreateAnnouncementRequest = serde_json::from_value(json!({
            "title": "Exam",
            "message": "Exam week",
            "startDate": "2025-03-10T00:00:00Z",
            "expiryDate": "2025-03-01T00:00:00Z"
        }))
        .unwrap();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_update_request_expiry_tristate() {
        let absent: UpdateAnnouncementRequest = serde_json::from_value(json!({})).unwrap();
        assert_eq!(absent.expiry_date, None);

        let cleared: UpdateAnnouncementRequest =
            serde_json::from_value(json!({ "expiryDate": null })).unwrap();
        assert_eq!(cleared.expiry_date, Some(None));

        let set: UpdateAnnouncementRequest =
            serde_json::from_value(json!({ "expiryDate": "2025-06-01T00:00:00Z" })).unwrap();
        assert!(matches!(set.expiry_date, Some(Some(_))));
    }
}
