//! Content state: the authoritative in-memory copy of the collections plus
//! the transient editing state.
//!
//! All mutations go through the store; local collections are only updated
//! after the store confirms, so there is never an optimistic row to roll
//! back. The projection engine reads this state and never mutates it.

use std::collections::HashSet;

use newsdesk_api::{
    Article, ContentItem, ContentKind, Draft, Podcast, StoreError, Subscriber, Video, CATEGORY_ALL,
};
use tracing::{debug, warn};

use crate::store::ContentStore;

pub mod clock;


use clock::MutationClock;

/// Last-synced collections, filters, and the in-progress edit.
///
/// Owns the store handle; the presentation layer holds this by reference and
/// never reaches the store directly.
#[derive(Debug)]
pub struct ContentState<S> {
    store: S,
    news: Vec<Article>,
    podcasts: Vec<Podcast>,
    videos: Vec<Video>,
    selected_category: String,
    search_query: String,
    changed_ids: HashSet<String>,
    preview_mode: bool,
    draft: Option<Draft>,
    clock: MutationClock,
}

impl<S: ContentStore> ContentState<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            news: Vec::new(),
            podcasts: Vec::new(),
            videos: Vec::new(),
            selected_category: CATEGORY_ALL.to_string(),
            search_query: String::new(),
            changed_ids: HashSet::new(),
            preview_mode: false,
            draft: None,
            clock: MutationClock::default(),
        }
    }

    /// Fetch all three collections, newest first.
    ///
    /// A collection whose fetch fails is logged and left empty so the site
    /// can still render the others; `load` itself never fails.
    pub async fn load(&mut self) {
        match self.store.list_articles().await {
            Ok(rows) => self.news = rows,
            Err(e) => warn!(collection = "news", error = %e, "load failed, rendering without it"),
        }
        match self.store.list_podcasts().await {
            Ok(rows) => self.podcasts = rows,
            Err(e) => {
                warn!(collection = "podcasts", error = %e, "load failed, rendering without it")
            }
        }
        match self.store.list_videos().await {
            Ok(rows) => self.videos = rows,
            Err(e) => warn!(collection = "videos", error = %e, "load failed, rendering without it"),
        }
    }

    // ===== Articles =====

    pub async fn create_article(&mut self, article: Article) -> Result<Article, StoreError> {
        let row = self.store.insert_article(article).await?;
        apply_created(&mut self.news, &mut self.changed_ids, row.clone());
        Ok(row)
    }

    pub async fn update_article(&mut self, id: &str, article: Article) -> Result<Article, StoreError> {
        let ticket = self.clock.begin(ContentKind::Article, id);
        let row = self.store.update_article(id, article).await?;
        if self.clock.admit(&ticket) {
            apply_updated(&mut self.news, &mut self.changed_ids, &row);
        } else {
            debug!(collection = "news", id, "discarding stale update result");
        }
        Ok(row)
    }

    pub async fn delete_article(&mut self, id: &str) -> Result<(), StoreError> {
        let ticket = self.clock.begin(ContentKind::Article, id);
        self.store.delete_article(id).await?;
        if self.clock.admit(&ticket) {
            apply_deleted(&mut self.news, &mut self.changed_ids, id);
            self.clock.retire(ContentKind::Article, id);
        }
        Ok(())
    }

    // ===== Podcasts =====

    pub async fn create_podcast(&mut self, podcast: Podcast) -> Result<Podcast, StoreError> {
        let row = self.store.insert_podcast(podcast).await?;
        apply_created(&mut self.podcasts, &mut self.changed_ids, row.clone());
        Ok(row)
    }

    pub async fn update_podcast(&mut self, id: &str, podcast: Podcast) -> Result<Podcast, StoreError> {
        let ticket = self.clock.begin(ContentKind::Podcast, id);
        let row = self.store.update_podcast(id, podcast).await?;
        if self.clock.admit(&ticket) {
            apply_updated(&mut self.podcasts, &mut self.changed_ids, &row);
        } else {
            debug!(collection = "podcasts", id, "discarding stale update result");
        }
        Ok(row)
    }

    pub async fn delete_podcast(&mut self, id: &str) -> Result<(), StoreError> {
        let ticket = self.clock.begin(ContentKind::Podcast, id);
        self.store.delete_podcast(id).await?;
        if self.clock.admit(&ticket) {
            apply_deleted(&mut self.podcasts, &mut self.changed_ids, id);
            self.clock.retire(ContentKind::Podcast, id);
        }
        Ok(())
    }

    // ===== Videos =====

    pub async fn create_video(&mut self, video: Video) -> Result<Video, StoreError> {
        let row = self.store.insert_video(video).await?;
        apply_created(&mut self.videos, &mut self.changed_ids, row.clone());
        Ok(row)
    }

    pub async fn update_video(&mut self, id: &str, video: Video) -> Result<Video, StoreError> {
        let ticket = self.clock.begin(ContentKind::Video, id);
        let row = self.store.update_video(id, video).await?;
        if self.clock.admit(&ticket) {
            apply_updated(&mut self.videos, &mut self.changed_ids, &row);
        } else {
            debug!(collection = "videos", id, "discarding stale update result");
        }
        Ok(row)
    }

    pub async fn delete_video(&mut self, id: &str) -> Result<(), StoreError> {
        let ticket = self.clock.begin(ContentKind::Video, id);
        self.store.delete_video(id).await?;
        if self.clock.admit(&ticket) {
            apply_deleted(&mut self.videos, &mut self.changed_ids, id);
            self.clock.retire(ContentKind::Video, id);
        }
        Ok(())
    }

    // ===== Editing state =====

    /// Replace the active draft; `None` clears it.
    pub fn set_draft(&mut self, draft: Option<Draft>) {
        self.draft = draft;
    }

    /// Toggle whether projections overlay the draft.
    pub fn set_preview_mode(&mut self, on: bool) {
        self.preview_mode = on;
    }

    pub fn set_category(&mut self, category: impl Into<String>) {
        self.selected_category = category.into();
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    /// Empty the changed-id set and drop the active draft. Idempotent.
    pub fn clear_changes(&mut self) {
        self.changed_ids.clear();
        self.draft = None;
    }

    // ===== Pass-throughs =====

    /// Subscribe an email, surfacing the duplicate condition distinctly.
    pub async fn subscribe(&mut self, email: &str) -> Result<Subscriber, StoreError> {
        self.store.subscribe(email).await
    }

    /// Upload an image and return its public URL. On failure the caller's
    /// current image reference stays as it was.
    pub async fn upload_image(&mut self, bytes: &[u8], folder: &str) -> Result<String, StoreError> {
        self.store.upload_media(bytes, folder).await
    }

    /// Direct store access for admin-side operations outside the content
    /// state (subscriber listing and removal).
    pub fn store(&self) -> &S {
        &self.store
    }

    // ===== Accessors =====

    pub fn news(&self) -> &[Article] {
        &self.news
    }

    pub fn podcasts(&self) -> &[Podcast] {
        &self.podcasts
    }

    pub fn videos(&self) -> &[Video] {
        &self.videos
    }

    pub fn selected_category(&self) -> &str {
        &self.selected_category
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn changed_ids(&self) -> &HashSet<String> {
        &self.changed_ids
    }

    pub fn preview_mode(&self) -> bool {
        self.preview_mode
    }

    pub fn draft(&self) -> Option<&Draft> {
        self.draft.as_ref()
    }
}

fn apply_created<T: ContentItem>(list: &mut Vec<T>, changed: &mut HashSet<String>, row: T) {
    changed.insert(row.id().to_string());
    list.insert(0, row);
}

fn apply_updated<T: ContentItem>(list: &mut [T], changed: &mut HashSet<String>, row: &T) {
    if let Some(slot) = list.iter_mut().find(|r| r.id() == row.id()) {
        *slot = row.clone();
    }
    // The store confirmed the mutation even if the row is missing locally.
    changed.insert(row.id().to_string());
}

/// A deleted row leaves both structures in one step; there is no state where
/// an id is changed but absent.
fn apply_deleted<T: ContentItem>(list: &mut Vec<T>, changed: &mut HashSet<String>, id: &str) {
    list.retain(|r| r.id() != id);
    changed.remove(id);
}
