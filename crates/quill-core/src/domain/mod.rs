//! Domain types - the post entity and its write-side payloads.

mod post;
pub mod validate;

pub use post::{Post, PostDraft, PostPayload};
pub use validate::{ValidationError, validate};
