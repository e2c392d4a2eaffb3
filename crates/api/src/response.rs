//! Response envelope helpers.
//!
//! Every body is `{success, message?, data?}`.

use axum::{http::StatusCode, Json};
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use shared::pagination::PageInfo;

#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

pub type ApiResponse<T> = (StatusCode, Json<Envelope<T>>);

/// 200 with data only.
pub fn ok<T: Serialize>(data: T) -> ApiResponse<T> {
    (
        StatusCode::OK,
        Json(Envelope {
            success: true,
            message: None,
            data: Some(data),
        }),
    )
}

/// 200 with a message and data.
pub fn ok_with_message<T: Serialize>(message: impl Into<String>, data: T) -> ApiResponse<T> {
    (
        StatusCode::OK,
        Json(Envelope {
            success: true,
            message: Some(message.into()),
            data: Some(data),
        }),
    )
}

/// 201 with a message and the created record.
pub fn created<T: Serialize>(message: impl Into<String>, data: T) -> ApiResponse<T> {
    (
        StatusCode::CREATED,
        Json(Envelope {
            success: true,
            message: Some(message.into()),
            data: Some(data),
        }),
    )
}

/// 200 with a message and no data.
pub fn message(message: impl Into<String>) -> ApiResponse<()> {
    (
        StatusCode::OK,
        Json(Envelope {
            success: true,
            message: Some(message.into()),
            data: None,
        }),
    )
}

/// Failure body used by errors and the fallback handler.
pub fn failure(message: impl Into<String>) -> Envelope<()> {
    Envelope {
        success: false,
        message: Some(message.into()),
        data: None,
    }
}

/// A page of records serialized as `{<key>: [...], pagination: {...}}`.
#[derive(Debug)]
pub struct Page<T> {
    key: &'static str,
    items: Vec<T>,
    pagination: PageInfo,
}

impl<T> Page<T> {
    pub fn new(key: &'static str, items: Vec<T>, pagination: PageInfo) -> Self {
        Self {
            key,
            items,
            pagination,
        }
    }
}

impl<T: Serialize> Serialize for Page<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry(self.key, &self.items)?;
        map.serialize_entry("pagination", &self.pagination)?;
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_ok_envelope_omits_message() {
        let (status, Json(body)) = ok(vec![1, 2]);
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            serde_json::to_value(body).unwrap(),
            json!({ "success": true, "data": [1, 2] })
        );
    }

    #[test]
    fn test_created_envelope() {
        let (status, Json(body)) = created("Slide created successfully.", json!({ "order": 1 }));
        assert_eq!(status, StatusCode::CREATED);
        let value = serde_json::to_value(body).unwrap();
        assert_eq!(value["message"], "Slide created successfully.");
        assert_eq!(value["data"]["order"], 1);
    }

    #[test]
    fn test_message_only_has_no_data() {
        let (_, Json(body)) = message("Image deleted successfully.");
        let value = serde_json::to_value(body).unwrap();
        assert!(value.get("data").is_none());
        assert_eq!(value["success"], true);
    }

    #[test]
    fn test_failure_envelope() {
        let value = serde_json::to_value(failure("Route not found")).unwrap();
        assert_eq!(value, json!({ "success": false, "message": "Route not found" }));
    }

    #[test]
    fn test_page_serialization() {
        let page = Page::new(
            "enquiries",
            vec!["a", "b"],
            PageInfo {
                total: 25,
                page: 2,
                limit: 20,
                total_pages: 2,
            },
        );
        assert_eq!(
            serde_json::to_value(page).unwrap(),
            json!({
                "enquiries": ["a", "b"],
                "pagination": { "total": 25, "page": 2, "limit": 20, "totalPages": 2 }
            })
        );
    }
}
