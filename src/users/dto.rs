use serde::{Deserialize, Serialize};

/// Request body shared by create and full-replace update. All five
/// fields are required; a body that omits one is rejected at
/// deserialization instead of silently unsetting the column.
#[derive(Debug, Deserialize)]
pub struct UserPayload {
    pub name: String,
    pub age: i32,
    pub rating: f64,
    pub phone: String,
    pub languages: Vec<String>,
}

/// Optional query thresholds for the list route. Each filter that is
/// present is applied independently as a strict greater-than.
#[derive(Debug, Default, Deserialize)]
pub struct ListUsersQuery {
    pub age: Option<i32>,
    pub rating: Option<f64>,
}

/// Success envelope used by every JSON response.
#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub success: bool,
    pub message: String,
    pub data: T,
}

impl<T> Envelope<T> {
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data,
        }
    }
}
