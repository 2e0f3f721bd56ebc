//! Request and response bodies

pub mod reviews;
pub mod users;

use serde::Serialize;

/// `status` field of every successful response
pub const SUCCESS: &str = "success";

/// `{ "status": "success", "data": ... }`
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub status: &'static str,
    pub data: T,
}

impl<T: Serialize> DataResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            status: SUCCESS,
            data,
        }
    }
}

/// `{ "status": "success", "message": ... }`
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: SUCCESS,
            message: Some(message.into()),
        }
    }

    pub fn empty() -> Self {
        Self {
            status: SUCCESS,
            message: None,
        }
    }
}
