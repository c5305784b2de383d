//! End-to-end editing session against the in-memory store: load, browse,
//! draft, preview, save, and clean up, all through the public API.

use newsdesk::testing::{init_tracing, seeded_store};
use newsdesk::{
    breaking_articles, featured_article, project, Article, ContentCrud, ContentState, Draft,
    Status, PREVIEW_DRAFT_ID,
};

#[tokio::test]
async fn test_full_editing_session() {
    init_tracing();
    let mut state = ContentState::new(seeded_store().await.unwrap());
    state.load().await;

    // The public site: hidden article excluded, home layout derived.
    let projection = project(&state);
    assert_eq!(projection.news.len(), 2);
    let featured = featured_article(&projection.news).unwrap();
    assert_eq!(
        featured.title,
        "Nuevas medidas económicas impulsan el crecimiento regional"
    );
    assert_eq!(breaking_articles(&projection.news).len(), 1);

    // The operator starts a brand-new article and previews it.
    let mut unsaved = Article::new("Obras en la costanera", "Urbanismo", "Cuerpo del artículo.");
    unsaved.date = "23 de enero de 2025".to_string();
    state.set_draft(Some(Draft::Article(unsaved.clone())));
    state.set_preview_mode(true);

    let projection = project(&state);
    assert_eq!(projection.news.len(), 3);
    assert_eq!(projection.news[0].id, PREVIEW_DRAFT_ID);
    assert!(projection.changed_ids.contains(PREVIEW_DRAFT_ID));

    // Saving persists it; the sentinel row becomes a real one.
    let saved = state.create_article(unsaved).await.unwrap();
    state.set_draft(None);
    state.set_preview_mode(false);

    let projection = project(&state);
    assert_eq!(projection.news[0].id, saved.id);
    assert!(projection.changed_ids.contains(&saved.id));
    assert!(!projection.changed_ids.contains(PREVIEW_DRAFT_ID));

    // Publishing the hidden draft article makes it publicly visible.
    let hidden_id = "3";
    assert!(projection.news.iter().all(|a| a.id != hidden_id));

    let mut published = state
        .news()
        .iter()
        .find(|a| a.id == hidden_id)
        .cloned()
        .unwrap();
    published.status = Some(Status::Published);
    state.update_article(hidden_id, published).await.unwrap();

    let projection = project(&state);
    assert!(projection.news.iter().any(|a| a.id == hidden_id));

    // Deleting removes the row and its highlight in one step.
    state.delete_article(&saved.id).await.unwrap();
    let projection = project(&state);
    assert!(projection.news.iter().all(|a| a.id != saved.id));
    assert!(!projection.changed_ids.contains(&saved.id));

    state.clear_changes();
    assert!(project(&state).changed_ids.is_empty());
}

#[tokio::test]
async fn test_preview_of_existing_row_does_not_persist_anything() {
    let mut state = ContentState::new(seeded_store().await.unwrap());
    state.load().await;

    let mut edited = state.news()[1].clone();
    let id = edited.id.clone();
    edited.title = "Titular reescrito".to_string();
    state.set_draft(Some(Draft::Article(edited)));
    state.set_preview_mode(true);

    let projection = project(&state);
    let shown = projection.news.iter().find(|a| a.id == id).unwrap();
    assert_eq!(shown.title, "Titular reescrito");

    // Discarding the draft restores the stored row.
    state.set_draft(None);
    let projection = project(&state);
    let shown = projection.news.iter().find(|a| a.id == id).unwrap();
    assert_ne!(shown.title, "Titular reescrito");
    assert_eq!(state.store().list_articles().await.unwrap().len(), 3);
}

#[tokio::test]
async fn test_filters_compose_on_the_projection() {
    let mut state = ContentState::new(seeded_store().await.unwrap());
    state.load().await;

    state.set_category("Salud");
    let projection = project(&state);
    assert_eq!(projection.news.len(), 1);
    assert_eq!(projection.news[0].category, "Salud");
    // Episodes ignore the category filter.
    assert_eq!(projection.podcasts.len(), 1);
    assert_eq!(projection.videos.len(), 1);

    state.set_search_query("intendente");
    let projection = project(&state);
    assert!(projection.news.is_empty());
    assert!(projection.podcasts.is_empty());
    assert_eq!(projection.videos.len(), 1);
}
