//! Shared fixtures for unit and integration tests.
//!
//! Public so the `tests/` directory can use them; not part of the supported
//! API surface.

use async_trait::async_trait;
use newsdesk_api::{Article, Podcast, Status, StoreError, Subscriber, Video};

use crate::store::{ContentCrud, MediaStore, MemoryStore, Subscriptions};

/// Install the fmt subscriber for tests, reading `RUST_LOG`. Safe to call
/// from every test; later calls are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// A memory store pre-populated with a small mixed-visibility data set.
///
/// Insertion order (and therefore id assignment) is fixed: articles 1-3,
/// podcast 4, video 5. Article 3 is hidden.
pub async fn seeded_store() -> anyhow::Result<MemoryStore> {
    let store = MemoryStore::new();

    let mut featured = Article::new(
        "Nuevas medidas económicas impulsan el crecimiento regional",
        "Economía",
        "El gobierno regional anunció un paquete de medidas destinadas a fortalecer la economía local.",
    )
    .featured();
    featured.subtitle = Some("El paquete incluye incentivos fiscales".to_string());
    featured.date = "22 de enero de 2025".to_string();
    store.insert_article(featured).await?;

    let mut breaking = Article::new(
        "Avances en la investigación médica local",
        "Salud",
        "Investigadores de la universidad presentaron resultados prometedores.",
    )
    .breaking();
    breaking.date = "21 de enero de 2025".to_string();
    store.insert_article(breaking).await?;

    store
        .insert_article(
            Article::new(
                "Borrador sobre el nuevo plan urbano",
                "Urbanismo",
                "Texto en preparación.",
            )
            .with_status(Status::Hidden),
        )
        .await?;

    let mut episode = Podcast::new(
        "La mañana informativa",
        "Resumen diario de las noticias de la región.",
    );
    episode.duration = "45:00".to_string();
    store.insert_podcast(episode).await?;

    let mut clip = Video::new(
        "Entrevista al intendente",
        "Entrevistas",
        "Conversación sobre los proyectos para este año.",
    );
    clip.duration = "12:30".to_string();
    store.insert_video(clip).await?;

    Ok(store)
}

/// Store wrapper that fails selected collections, for exercising partial
/// load behavior and surfaced mutation errors.
///
/// A failing collection fails for every operation on it; everything else is
/// delegated to the wrapped [`MemoryStore`].
#[derive(Debug, Clone, Default)]
pub struct FailingStore {
    inner: MemoryStore,
    fail_articles: bool,
    fail_podcasts: bool,
    fail_videos: bool,
}

impl FailingStore {
    pub fn wrapping(inner: MemoryStore) -> Self {
        Self {
            inner,
            ..Self::default()
        }
    }

    pub fn fail_articles(mut self) -> Self {
        self.fail_articles = true;
        self
    }

    pub fn fail_podcasts(mut self) -> Self {
        self.fail_podcasts = true;
        self
    }

    pub fn fail_videos(mut self) -> Self {
        self.fail_videos = true;
        self
    }

    fn gate(flag: bool, collection: &str) -> Result<(), StoreError> {
        if flag {
            return Err(StoreError::Unavailable {
                message: format!("{collection}: injected failure"),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl ContentCrud for FailingStore {
    async fn list_articles(&self) -> Result<Vec<Article>, StoreError> {
        Self::gate(self.fail_articles, "news")?;
        self.inner.list_articles().await
    }

    async fn insert_article(&self, article: Article) -> Result<Article, StoreError> {
        Self::gate(self.fail_articles, "news")?;
        self.inner.insert_article(article).await
    }

    async fn update_article(&self, id: &str, article: Article) -> Result<Article, StoreError> {
        Self::gate(self.fail_articles, "news")?;
        self.inner.update_article(id, article).await
    }

    async fn delete_article(&self, id: &str) -> Result<(), StoreError> {
        Self::gate(self.fail_articles, "news")?;
        self.inner.delete_article(id).await
    }

    async fn list_podcasts(&self) -> Result<Vec<Podcast>, StoreError> {
        Self::gate(self.fail_podcasts, "podcasts")?;
        self.inner.list_podcasts().await
    }

    async fn insert_podcast(&self, podcast: Podcast) -> Result<Podcast, StoreError> {
        Self::gate(self.fail_podcasts, "podcasts")?;
        self.inner.insert_podcast(podcast).await
    }

    async fn update_podcast(&self, id: &str, podcast: Podcast) -> Result<Podcast, StoreError> {
        Self::gate(self.fail_podcasts, "podcasts")?;
        self.inner.update_podcast(id, podcast).await
    }

    async fn delete_podcast(&self, id: &str) -> Result<(), StoreError> {
        Self::gate(self.fail_podcasts, "podcasts")?;
        self.inner.delete_podcast(id).await
    }

    async fn list_videos(&self) -> Result<Vec<Video>, StoreError> {
        Self::gate(self.fail_videos, "videos")?;
        self.inner.list_videos().await
    }

    async fn insert_video(&self, video: Video) -> Result<Video, StoreError> {
        Self::gate(self.fail_videos, "videos")?;
        self.inner.insert_video(video).await
    }

    async fn update_video(&self, id: &str, video: Video) -> Result<Video, StoreError> {
        Self::gate(self.fail_videos, "videos")?;
        self.inner.update_video(id, video).await
    }

    async fn delete_video(&self, id: &str) -> Result<(), StoreError> {
        Self::gate(self.fail_videos, "videos")?;
        self.inner.delete_video(id).await
    }
}

#[async_trait]
impl Subscriptions for FailingStore {
    async fn subscribe(&self, email: &str) -> Result<Subscriber, StoreError> {
        self.inner.subscribe(email).await
    }

    async fn list_subscribers(&self) -> Result<Vec<Subscriber>, StoreError> {
        self.inner.list_subscribers().await
    }

    async fn unsubscribe(&self, email: &str) -> Result<(), StoreError> {
        self.inner.unsubscribe(email).await
    }
}

#[async_trait]
impl MediaStore for FailingStore {
    async fn upload_media(&self, bytes: &[u8], folder: &str) -> Result<String, StoreError> {
        self.inner.upload_media(bytes, folder).await
    }
}
