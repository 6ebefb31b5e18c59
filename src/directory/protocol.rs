//! Directory HTTP Protocol
//!
//! Route paths, query parameters and the fixed response bodies of the directory API.
//!
//! Failure bodies are sentinels: small fixed mappings whose exact keys and strings are
//! part of the public contract (`{"Data": "Not found"}`, `{"error": "exists already"}`, ...).
//! They are kept byte-for-byte; the status code carries the outcome class.

use serde::{Deserialize, Serialize};

// --- API Endpoints ---

/// Greeting route.
pub const ENDPOINT_INDEX: &str = "/";
/// Read one record by id (range-restricted).
pub const ENDPOINT_GET_STUDENT: &str = "/get-student/:student_id";
/// Read the first record with a given name.
pub const ENDPOINT_GET_BY_NAME: &str = "/get-by-name";
/// Create a record under a client-chosen id.
pub const ENDPOINT_CREATE: &str = "/create-stu/:student_id";
/// Partially update a record.
pub const ENDPOINT_UPDATE: &str = "/update-student/:student_id";
/// Remove a record.
pub const ENDPOINT_DELETE: &str = "/delete/:student_id";

// --- Request parameters ---

/// Query string of `GET /get-by-name`.
#[derive(Debug, Deserialize)]
pub struct GetByNameParams {
    /// Exact name to look for. A missing name matches nothing.
    pub name: Option<String>,
    /// Required by the API but has no effect on the lookup.
    pub test: i64,
}

// --- Response bodies ---

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct IndexResponse {
    pub name: String,
}

impl IndexResponse {
    pub fn greeting() -> Self {
        Self {
            name: "First Data".to_string(),
        }
    }
}

/// `{"Data": "Not found"}`: lookup by id or name found nothing.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct NotFoundResponse {
    #[serde(rename = "Data")]
    pub data: String,
}

impl NotFoundResponse {
    pub fn sentinel() -> Self {
        Self {
            data: "Not found".to_string(),
        }
    }
}

/// `{"error": "exists already"}`: create on a taken id.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConflictResponse {
    pub error: String,
}

impl ConflictResponse {
    pub fn sentinel() -> Self {
        Self {
            error: "exists already".to_string(),
        }
    }
}

/// `{"er": "student not exist"}`: update on an absent id.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpdateMissResponse {
    pub er: String,
}

impl UpdateMissResponse {
    pub fn sentinel() -> Self {
        Self {
            er: "student not exist".to_string(),
        }
    }
}

/// `{"errr": "not"}`: delete on an absent id.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeleteMissResponse {
    pub errr: String,
}

impl DeleteMissResponse {
    pub fn sentinel() -> Self {
        Self {
            errr: "not".to_string(),
        }
    }
}

/// `{"msg": "done"}`: successful delete.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeleteResponse {
    pub msg: String,
}

impl DeleteResponse {
    pub fn done() -> Self {
        Self {
            msg: "done".to_string(),
        }
    }
}

/// Body of every input rejection (bad id, out-of-range id, invalid record, bad query).
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct DetailResponse {
    pub detail: String,
}

impl DetailResponse {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}
