//! Core library for the newsdesk publication site and editing panel.
//!
//! The crate is organized around three pieces:
//!
//! - `store`: the boundary traits for the hosted content store plus an
//!   in-memory reference backend
//! - `state`: the content-state container that mediates every mutation
//!   through the store and keeps the local collections consistent
//! - `projection`: the pure derivation of what a viewer should see, merging
//!   filters and the in-progress draft into the authoritative collections
//!
//! The presentation layer consumes [`Projection`] values and feeds filter,
//! search, and edit actions back into [`ContentState`]; it never touches the
//! store directly.

pub mod projection;
pub mod state;
pub mod store;
pub mod testing;

// Re-export the shared API types for convenience
pub use newsdesk_api::{
    Article, ContentItem, ContentKind, Draft, Podcast, RelatedLink, Status, StoreError,
    Subscriber, Video, CATEGORY_ALL, CATEGORY_MORE, DEFAULT_AUTHOR, PREVIEW_DRAFT_ID,
};

pub use projection::{breaking_articles, featured_article, project, Projection};
pub use state::ContentState;
pub use store::{ContentCrud, ContentStore, MediaStore, MemoryStore, Subscriptions};
