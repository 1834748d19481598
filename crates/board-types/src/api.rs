use serde::{Deserialize, Serialize};

// -- Requests --

#[derive(Debug, Clone, Deserialize)]
pub struct UserRequest {
    pub username: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CategoryRequest {
    pub category_name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MessageRequest {
    pub message: String,
    pub user_id: i64,
    pub category_id: i64,
}

// -- Responses --

/// Body returned by every successful create, update and delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuccessResponse {
    pub message: String,
    pub data: String,
}

/// Body returned by list endpoints when the table is empty, and by the
/// admin endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoticeResponse {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}
