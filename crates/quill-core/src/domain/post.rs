use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Post read model - one row of the list/read projection, with category
/// name and status label already joined in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: i32,
    pub image: String,
    pub category: String,
    pub title: String,
    pub description: String,
    pub date: DateTime<Utc>,
    pub content: String,
    pub status: String,
    pub likes_count: i32,
}

/// Raw create/update body, before the validation gate.
///
/// Fields are kept as loose JSON values so the gate can tell a missing
/// field apart from a mistyped one and report the right failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PostPayload {
    #[serde(default)]
    pub title: Option<Value>,
    #[serde(default)]
    pub image: Option<Value>,
    #[serde(default)]
    pub category_id: Option<Value>,
    #[serde(default)]
    pub description: Option<Value>,
    #[serde(default)]
    pub content: Option<Value>,
    #[serde(default)]
    pub status_id: Option<Value>,
}

/// Validated write model - the six client-supplied columns, typed.
/// Only produced by [`validate`](super::validate::validate), so any
/// `PostDraft` reaching a store has passed the gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostDraft {
    pub title: String,
    pub image: String,
    pub category_id: i32,
    pub description: String,
    pub content: String,
    pub status_id: i32,
}
