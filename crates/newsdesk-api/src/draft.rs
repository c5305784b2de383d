//! The in-progress edit draft.
//!
//! A draft is the full shape of its target entity plus an explicit kind tag.
//! The tag replaces the old habit of sniffing which fields happen to be set
//! (a body field "meaning" article, a thumbnail "meaning" video), which broke
//! down as soon as two kinds shared a field name.

use serde::{Deserialize, Serialize};

use crate::content::{Article, ContentKind, Podcast, Video};

/// Sentinel id assigned to a new, unsaved draft when it is projected.
///
/// The store has not assigned a real id yet, but the preview still needs a
/// stable identifier so changed-row highlighting matches consistently. A
/// single well-known constant guarantees that.
pub const PREVIEW_DRAFT_ID: &str = "preview-draft";

/// An unsaved copy of an entity's fields being edited in the admin panel.
///
/// The editing form rebuilds the entire draft on every field change; a draft
/// is always a complete value, never a partial patch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Draft {
    Article(Article),
    Podcast(Podcast),
    Video(Video),
}

impl Draft {
    /// The target entity's id; empty for a new, unsaved item.
    pub fn id(&self) -> &str {
        match self {
            Draft::Article(a) => &a.id,
            Draft::Podcast(p) => &p.id,
            Draft::Video(v) => &v.id,
        }
    }

    pub fn kind(&self) -> ContentKind {
        match self {
            Draft::Article(_) => ContentKind::Article,
            Draft::Podcast(_) => ContentKind::Podcast,
            Draft::Video(_) => ContentKind::Video,
        }
    }

    /// Whether this draft has no stored counterpart yet.
    pub fn is_new(&self) -> bool {
        self.id().is_empty()
    }

    /// The id the projection should highlight for this draft.
    pub fn display_id(&self) -> &str {
        if self.is_new() {
            PREVIEW_DRAFT_ID
        } else {
            self.id()
        }
    }
}
