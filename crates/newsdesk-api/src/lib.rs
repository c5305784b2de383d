//! Shared API crate for newsdesk consumers
//!
//! This crate provides technology-agnostic types for every consumer of the
//! newsdesk core (the public site, the editing panel, store backends).
//!
//! # Architecture
//!
//! - `content`: Content entity types (Article, Podcast, Video, Status)
//! - `draft`: The tagged in-progress edit union and its sentinel id
//! - `subscriber`: Subscriber rows for the mailing list
//!
//! # Design Principles
//!
//! - Technology-agnostic: no store- or frontend-specific dependencies
//! - Type-safe errors: structured error handling across the store boundary
//! - Drafts carry their kind explicitly; nothing infers a kind from which
//!   fields happen to be present

use serde::{Deserialize, Serialize};

pub mod content;
pub mod draft;
pub mod subscriber;

// Re-export content types
pub use content::{
    Article, ContentItem, ContentKind, Podcast, RelatedLink, Status, Video, ARTICLE_CATEGORIES,
    CATEGORY_ALL, CATEGORY_MORE, DEFAULT_AUTHOR, VIDEO_CATEGORIES,
};

// Re-export draft types
pub use draft::{Draft, PREVIEW_DRAFT_ID};

pub use subscriber::Subscriber;

/// Structured error types for store operations.
///
/// These errors cross the store boundary and let callers special-case
/// conditions the UI renders differently (a duplicate subscription is a
/// friendly notice, not a failure banner).
#[derive(Debug, Clone, Serialize, Deserialize, thiserror::Error)]
pub enum StoreError {
    #[error("{collection} row not found: {id}")]
    NotFound { collection: String, id: String },

    #[error("{collection} write rejected: {message}")]
    Rejected { collection: String, message: String },

    /// Distinguished duplicate-subscription condition. Hosted backends map
    /// the store's unique-violation code (Postgres `23505`) to this variant.
    #[error("already subscribed: {email}")]
    AlreadySubscribed { email: String },

    #[error("store unavailable: {message}")]
    Unavailable { message: String },

    #[error("media upload failed: {message}")]
    UploadFailed { message: String },
}

impl StoreError {
    pub fn rejected(kind: ContentKind, message: impl Into<String>) -> Self {
        StoreError::Rejected {
            collection: kind.collection().to_string(),
            message: message.into(),
        }
    }

    pub fn not_found(kind: ContentKind, id: impl Into<String>) -> Self {
        StoreError::NotFound {
            collection: kind.collection().to_string(),
            id: id.into(),
        }
    }
}
