//! In-memory implementation of the store boundary
//!
//! This module provides a simple Vec-based implementation for testing and as
//! a reference implementation. It implements all three store traits, so it
//! satisfies `ContentStore` via the blanket impl.

use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use newsdesk_api::{Article, ContentItem, ContentKind, Podcast, StoreError, Subscriber, Video};

use super::client::{ContentCrud, MediaStore, Subscriptions};

/// In-memory content store.
///
/// This is a lightweight, non-persistent backend useful for:
/// - Unit testing without a hosted store
/// - Mocking in frontend development
/// - Reference implementation for documentation
///
/// Ids are generated from a deterministic counter, so the same sequence of
/// operations always produces the same ids.
///
/// # Example
///
/// ```rust,no_run
/// use newsdesk::store::{ContentCrud, MemoryStore};
/// use newsdesk_api::Article;
///
/// async fn example() -> Result<(), newsdesk_api::StoreError> {
///     let store = MemoryStore::new();
///
///     let created = store
///         .insert_article(Article::new("Titular", "Economía", "Cuerpo"))
///         .await?;
///     let listed = store.list_articles().await?;
///
///     assert_eq!(listed[0].id, created.id);
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    state: Arc<RwLock<MemoryState>>,
}

#[derive(Debug, Default)]
struct MemoryState {
    articles: Vec<StoredRow<Article>>,
    podcasts: Vec<StoredRow<Podcast>>,
    videos: Vec<StoredRow<Video>>,
    subscribers: Vec<Subscriber>,
    uploads: Vec<String>,
    /// Counter for deterministic id generation (increments with each insert).
    next_id: u64,
}

/// A content row plus the store-side creation timestamp used for ordering.
#[derive(Debug, Clone)]
struct StoredRow<T> {
    created_at: DateTime<Utc>,
    row: T,
}

/// Listings come back ordered by creation time, newest first. Rows created
/// within the same clock tick fall back to insertion order, newest first.
fn list_of<T: Clone>(rows: &[StoredRow<T>]) -> Vec<T> {
    let mut indexed: Vec<_> = rows.iter().enumerate().collect();
    indexed.sort_by(|(ia, a), (ib, b)| b.created_at.cmp(&a.created_at).then(ib.cmp(ia)));
    indexed.into_iter().map(|(_, r)| r.row.clone()).collect()
}

fn update_in<T: ContentItem>(
    rows: &mut [StoredRow<T>],
    kind: ContentKind,
    id: &str,
    mut row: T,
) -> Result<T, StoreError> {
    let slot = rows
        .iter_mut()
        .find(|r| r.row.id() == id)
        .ok_or_else(|| StoreError::not_found(kind, id))?;

    // The id is never client-writable, even through an update payload.
    row.set_id(id.to_string());
    slot.row = row.clone();
    Ok(row)
}

fn delete_from<T: ContentItem>(
    rows: &mut Vec<StoredRow<T>>,
    kind: ContentKind,
    id: &str,
) -> Result<(), StoreError> {
    let before = rows.len();
    rows.retain(|r| r.row.id() != id);
    if rows.len() == before {
        return Err(StoreError::not_found(kind, id));
    }
    Ok(())
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generate a deterministic row id using the counter.
    fn generate_id(state: &mut MemoryState) -> String {
        state.next_id += 1;
        state.next_id.to_string()
    }

    /// Hosted stores reject rows failing column constraints; the memory
    /// store mirrors that for the one constraint every collection shares.
    fn require_title(kind: ContentKind, title: &str) -> Result<(), StoreError> {
        if title.trim().is_empty() {
            return Err(StoreError::rejected(kind, "title must not be empty"));
        }
        Ok(())
    }

    fn insert_row<T: ContentItem>(state_rows: &mut Vec<StoredRow<T>>, id: String, mut row: T) -> T {
        row.set_id(id);
        state_rows.push(StoredRow {
            created_at: Utc::now(),
            row: row.clone(),
        });
        row
    }

    /// Number of media blobs uploaded so far.
    pub fn upload_count(&self) -> usize {
        self.state.read().unwrap().uploads.len()
    }
}

#[async_trait]
impl ContentCrud for MemoryStore {
    async fn list_articles(&self) -> Result<Vec<Article>, StoreError> {
        Ok(list_of(&self.state.read().unwrap().articles))
    }

    async fn insert_article(&self, article: Article) -> Result<Article, StoreError> {
        Self::require_title(ContentKind::Article, &article.title)?;
        let mut state = self.state.write().unwrap();
        let id = Self::generate_id(&mut state);
        Ok(Self::insert_row(&mut state.articles, id, article))
    }

    async fn update_article(&self, id: &str, article: Article) -> Result<Article, StoreError> {
        Self::require_title(ContentKind::Article, &article.title)?;
        let mut state = self.state.write().unwrap();
        update_in(&mut state.articles, ContentKind::Article, id, article)
    }

    async fn delete_article(&self, id: &str) -> Result<(), StoreError> {
        let mut state = self.state.write().unwrap();
        delete_from(&mut state.articles, ContentKind::Article, id)
    }

    async fn list_podcasts(&self) -> Result<Vec<Podcast>, StoreError> {
        Ok(list_of(&self.state.read().unwrap().podcasts))
    }

    async fn insert_podcast(&self, podcast: Podcast) -> Result<Podcast, StoreError> {
        Self::require_title(ContentKind::Podcast, &podcast.title)?;
        let mut state = self.state.write().unwrap();
        let id = Self::generate_id(&mut state);
        Ok(Self::insert_row(&mut state.podcasts, id, podcast))
    }

    async fn update_podcast(&self, id: &str, podcast: Podcast) -> Result<Podcast, StoreError> {
        Self::require_title(ContentKind::Podcast, &podcast.title)?;
        let mut state = self.state.write().unwrap();
        update_in(&mut state.podcasts, ContentKind::Podcast, id, podcast)
    }

    async fn delete_podcast(&self, id: &str) -> Result<(), StoreError> {
        let mut state = self.state.write().unwrap();
        delete_from(&mut state.podcasts, ContentKind::Podcast, id)
    }

    async fn list_videos(&self) -> Result<Vec<Video>, StoreError> {
        Ok(list_of(&self.state.read().unwrap().videos))
    }

    async fn insert_video(&self, video: Video) -> Result<Video, StoreError> {
        Self::require_title(ContentKind::Video, &video.title)?;
        let mut state = self.state.write().unwrap();
        let id = Self::generate_id(&mut state);
        Ok(Self::insert_row(&mut state.videos, id, video))
    }

    async fn update_video(&self, id: &str, video: Video) -> Result<Video, StoreError> {
        Self::require_title(ContentKind::Video, &video.title)?;
        let mut state = self.state.write().unwrap();
        update_in(&mut state.videos, ContentKind::Video, id, video)
    }

    async fn delete_video(&self, id: &str) -> Result<(), StoreError> {
        let mut state = self.state.write().unwrap();
        delete_from(&mut state.videos, ContentKind::Video, id)
    }
}

#[async_trait]
impl Subscriptions for MemoryStore {
    async fn subscribe(&self, email: &str) -> Result<Subscriber, StoreError> {
        if email.trim().is_empty() {
            return Err(StoreError::Rejected {
                collection: "subscriptions".to_string(),
                message: "email must not be empty".to_string(),
            });
        }

        let mut state = self.state.write().unwrap();
        if state.subscribers.iter().any(|s| s.email == email) {
            return Err(StoreError::AlreadySubscribed {
                email: email.to_string(),
            });
        }

        let subscriber = Subscriber::new(email);
        state.subscribers.push(subscriber.clone());
        Ok(subscriber)
    }

    async fn list_subscribers(&self) -> Result<Vec<Subscriber>, StoreError> {
        let state = self.state.read().unwrap();
        Ok(state.subscribers.iter().rev().cloned().collect())
    }

    async fn unsubscribe(&self, email: &str) -> Result<(), StoreError> {
        let mut state = self.state.write().unwrap();
        let before = state.subscribers.len();
        state.subscribers.retain(|s| s.email != email);
        if state.subscribers.len() == before {
            return Err(StoreError::NotFound {
                collection: "subscriptions".to_string(),
                id: email.to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl MediaStore for MemoryStore {
    async fn upload_media(&self, bytes: &[u8], folder: &str) -> Result<String, StoreError> {
        if bytes.is_empty() {
            return Err(StoreError::UploadFailed {
                message: "empty payload".to_string(),
            });
        }

        let url = format!("memory://{}/{}", folder, uuid::Uuid::new_v4());
        self.state.write().unwrap().uploads.push(url.clone());
        Ok(url)
    }
}
