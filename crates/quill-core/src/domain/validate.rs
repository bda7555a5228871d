//! The validation gate for post payloads.
//!
//! Presence is checked for every field first, then types, both in a fixed
//! field order. The first failing check wins and becomes the whole result;
//! errors are not aggregated. Callers must run this before issuing any
//! mutating statement.

use std::fmt;

use serde_json::Value;
use thiserror::Error;

use super::post::{PostDraft, PostPayload};

/// The payload fields the gate knows about, in check order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    Image,
    CategoryId,
    Description,
    Content,
    StatusId,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Title => "Title",
            Field::Image => "Image",
            Field::CategoryId => "Category ID",
            Field::Description => "Description",
            Field::Content => "Content",
            Field::StatusId => "Status ID",
        };
        f.write_str(name)
    }
}

/// A single validation failure, naming the offending field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    Missing(Field),

    #[error("{0} must be a string type")]
    NotAString(Field),

    #[error("{0} must be a number type")]
    NotANumber(Field),
}

/// Run the gate over a raw payload, producing a typed draft on success.
pub fn validate(payload: &PostPayload) -> Result<PostDraft, ValidationError> {
    require(&payload.title, Field::Title)?;
    require(&payload.image, Field::Image)?;
    require(&payload.category_id, Field::CategoryId)?;
    require(&payload.description, Field::Description)?;
    require(&payload.content, Field::Content)?;
    require(&payload.status_id, Field::StatusId)?;

    Ok(PostDraft {
        title: string_of(&payload.title, Field::Title)?,
        image: string_of(&payload.image, Field::Image)?,
        category_id: id_of(&payload.category_id, Field::CategoryId)?,
        description: string_of(&payload.description, Field::Description)?,
        content: string_of(&payload.content, Field::Content)?,
        status_id: id_of(&payload.status_id, Field::StatusId)?,
    })
}

/// Present means non-null and, for strings, non-empty.
fn require(value: &Option<Value>, field: Field) -> Result<(), ValidationError> {
    match value {
        None | Some(Value::Null) => Err(ValidationError::Missing(field)),
        Some(Value::String(s)) if s.is_empty() => Err(ValidationError::Missing(field)),
        Some(_) => Ok(()),
    }
}

fn string_of(value: &Option<Value>, field: Field) -> Result<String, ValidationError> {
    match value {
        Some(Value::String(s)) => Ok(s.clone()),
        _ => Err(ValidationError::NotAString(field)),
    }
}

/// Lookup ids must be JSON numbers that fit an i32 column.
fn id_of(value: &Option<Value>, field: Field) -> Result<i32, ValidationError> {
    match value {
        Some(Value::Number(n)) => n
            .as_i64()
            .and_then(|v| i32::try_from(v).ok())
            .ok_or(ValidationError::NotANumber(field)),
        _ => Err(ValidationError::NotANumber(field)),
    }
}
