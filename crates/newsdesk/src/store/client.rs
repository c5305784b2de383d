//! ContentStore trait and related traits
//!
//! This module defines the boundary between the core and whatever hosted
//! store actually persists content. The core never talks to a transport
//! directly; it goes through these traits.
//!
//! # Trait Architecture
//!
//! The boundary is split into 3 focused traits that backends can implement
//! selectively:
//!
//! - `ContentCrud`: per-collection CRUD for articles, podcasts and videos
//! - `Subscriptions`: the mailing list (insert-only from the public side)
//! - `MediaStore`: blob upload returning a public URL
//!
//! The `ContentStore` supertrait combines all three for convenience; a
//! backend implementing all three satisfies it automatically via the blanket
//! impl.

use async_trait::async_trait;
use newsdesk_api::{Article, Podcast, StoreError, Subscriber, Video};

/// Per-collection CRUD operations for content rows.
///
/// Listing returns rows ordered by creation time, newest first. Inserts
/// ignore any id on the payload and return the created row with the
/// store-assigned id; updates return the updated row as the store sees it.
///
/// # Example
///
/// ```rust,no_run
/// use newsdesk::store::ContentCrud;
/// use newsdesk_api::Article;
///
/// async fn example(store: impl ContentCrud) -> Result<(), newsdesk_api::StoreError> {
///     let mut article = Article::new("Titular", "Economía", "Cuerpo");
///     article.image = "https://example.com/a.jpg".to_string();
///
///     let created = store.insert_article(article).await?;
///     assert!(!created.id.is_empty());
///
///     store.delete_article(&created.id).await?;
///     Ok(())
/// }
/// ```
#[async_trait]
pub trait ContentCrud: Send + Sync {
    // ===== Articles =====

    /// List all article rows, newest first.
    async fn list_articles(&self) -> Result<Vec<Article>, StoreError>;

    /// Insert an article; the store assigns the id.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Rejected` if the store refuses the row
    /// (validation), `StoreError::Unavailable` on transport failure.
    async fn insert_article(&self, article: Article) -> Result<Article, StoreError>;

    /// Update the article with the given id, returning the stored row.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no row has that id.
    async fn update_article(&self, id: &str, article: Article) -> Result<Article, StoreError>;

    /// Delete the article with the given id.
    async fn delete_article(&self, id: &str) -> Result<(), StoreError>;

    // ===== Podcasts =====

    async fn list_podcasts(&self) -> Result<Vec<Podcast>, StoreError>;

    async fn insert_podcast(&self, podcast: Podcast) -> Result<Podcast, StoreError>;

    async fn update_podcast(&self, id: &str, podcast: Podcast) -> Result<Podcast, StoreError>;

    async fn delete_podcast(&self, id: &str) -> Result<(), StoreError>;

    // ===== Videos =====

    async fn list_videos(&self) -> Result<Vec<Video>, StoreError>;

    async fn insert_video(&self, video: Video) -> Result<Video, StoreError>;

    async fn update_video(&self, id: &str, video: Video) -> Result<Video, StoreError>;

    async fn delete_video(&self, id: &str) -> Result<(), StoreError>;
}

/// Mailing-list operations.
#[async_trait]
pub trait Subscriptions: Send + Sync {
    /// Add an email to the subscriber list.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::AlreadySubscribed` when the email is already on
    /// the list, leaving the list unchanged. Callers render that condition
    /// as a friendly notice, not a failure.
    async fn subscribe(&self, email: &str) -> Result<Subscriber, StoreError>;

    /// List all subscribers, newest first. Admin-side only.
    async fn list_subscribers(&self) -> Result<Vec<Subscriber>, StoreError>;

    /// Remove a subscriber. Admin-side only.
    async fn unsubscribe(&self, email: &str) -> Result<(), StoreError>;
}

/// Media blob storage.
#[async_trait]
pub trait MediaStore: Send + Sync {
    /// Store a blob under the given folder and return its public URL.
    ///
    /// On failure the caller keeps its previous image reference; no partial
    /// URL is ever handed out.
    async fn upload_media(&self, bytes: &[u8], folder: &str) -> Result<String, StoreError>;
}

/// Full store boundary: content CRUD, subscriptions and media upload.
///
/// Blanket-implemented for any type providing the three component traits.
pub trait ContentStore: ContentCrud + Subscriptions + MediaStore {}

impl<T: ContentCrud + Subscriptions + MediaStore> ContentStore for T {}
