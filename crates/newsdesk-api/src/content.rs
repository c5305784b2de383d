//! Content entity types shared by the site and the editing panel.
//!
//! All three entity kinds carry a server-assigned `id` and an optional
//! publication `Status`. An absent status means the row predates the status
//! column and must be treated as published everywhere visibility is decided.

use serde::{Deserialize, Serialize};

/// Category sentinel that disables article filtering entirely.
pub const CATEGORY_ALL: &str = "Todas";

/// Catch-all navigation entry; behaves like [`CATEGORY_ALL`] when filtering.
pub const CATEGORY_MORE: &str = "Más";

/// House byline used when an article has no author.
pub const DEFAULT_AUTHOR: &str = "Redacción";

/// Editorial categories offered by the article form.
pub const ARTICLE_CATEGORIES: &[&str] = &[
    "Economía",
    "Salud",
    "Tecnología",
    "Urbanismo",
    "Medio Ambiente",
    "Educación",
    "Deportes",
    "Internacionales",
    "Nacionales",
    "Región",
];

/// Categories offered by the video form (a separate set from articles).
pub const VIDEO_CATEGORIES: &[&str] = &[
    "Entrevistas",
    "Reportajes",
    "Deportes",
    "Cultura",
    "Tecnología",
];

/// Publication status of a content row.
///
/// Stored as `Option<Status>`; `None` is equivalent to `Published`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Published,
    Hidden,
    Draft,
    Pending,
}

/// The three content collections plus the subscriber list, named after the
/// store's collection identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContentKind {
    Article,
    Podcast,
    Video,
}

impl ContentKind {
    /// Store collection name for this kind.
    pub const fn collection(&self) -> &'static str {
        match self {
            ContentKind::Article => "news",
            ContentKind::Podcast => "podcasts",
            ContentKind::Video => "videos",
        }
    }
}

/// A labelled external link attached to an article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelatedLink {
    pub label: String,
    pub url: String,
}

/// A news article.
///
/// `date` and `time` are free-form display strings and are never parsed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    #[serde(default)]
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    pub content: String,
    pub category: String,
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub breaking: bool,
    #[serde(default)]
    pub links: Vec<RelatedLink>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
}

impl Article {
    /// Create an article with the given headline fields and empty defaults.
    pub fn new(
        title: impl Into<String>,
        category: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id: String::new(),
            title: title.into(),
            subtitle: None,
            content: content.into(),
            category: category.into(),
            date: String::new(),
            time: None,
            image: String::new(),
            author: None,
            tags: Vec::new(),
            featured: false,
            breaking: false,
            links: Vec::new(),
            status: None,
        }
    }

    /// Builder: set the publication status.
    pub fn with_status(mut self, status: Status) -> Self {
        self.status = Some(status);
        self
    }

    /// Builder: mark as the featured article.
    pub fn featured(mut self) -> Self {
        self.featured = true;
        self
    }

    /// Builder: mark as breaking news.
    pub fn breaking(mut self) -> Self {
        self.breaking = true;
        self
    }

    /// Byline to display, falling back to the house byline.
    pub fn byline(&self) -> &str {
        self.author.as_deref().unwrap_or(DEFAULT_AUTHOR)
    }
}

/// An audio episode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Podcast {
    #[serde(default)]
    pub id: String,
    pub title: String,
    pub description: String,
    pub duration: String,
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default)]
    pub live: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
}

impl Podcast {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: String::new(),
            title: title.into(),
            description: description.into(),
            duration: String::new(),
            image: String::new(),
            link: None,
            live: false,
            status: None,
        }
    }

    pub fn with_status(mut self, status: Status) -> Self {
        self.status = Some(status);
        self
    }
}

/// A video episode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Video {
    #[serde(default)]
    pub id: String,
    pub title: String,
    pub description: String,
    pub thumbnail: String,
    pub duration: String,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
}

impl Video {
    pub fn new(
        title: impl Into<String>,
        category: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: String::new(),
            title: title.into(),
            description: description.into(),
            thumbnail: String::new(),
            duration: String::new(),
            category: category.into(),
            source_url: None,
            status: None,
        }
    }

    pub fn with_status(mut self, status: Status) -> Self {
        self.status = Some(status);
        self
    }
}

/// Common surface of the three content kinds.
///
/// The projection engine works against this trait so the overlay and
/// visibility rules are written once.
pub trait ContentItem: Clone {
    fn id(&self) -> &str;

    fn set_id(&mut self, id: String);

    fn status(&self) -> Option<Status>;

    /// Whether a public projection may show this row: status absent or
    /// published.
    fn is_visible(&self) -> bool {
        matches!(self.status(), None | Some(Status::Published))
    }
}

impl ContentItem for Article {
    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn status(&self) -> Option<Status> {
        self.status
    }
}

impl ContentItem for Podcast {
    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn status(&self) -> Option<Status> {
        self.status
    }
}

impl ContentItem for Video {
    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn status(&self) -> Option<Status> {
        self.status
    }
}
