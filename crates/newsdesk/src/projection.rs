//! Projection engine: the pure derivation of what a viewer sees.
//!
//! Given the authoritative collections, the active draft, the preview flag
//! and the filters, compute the three display lists. This is a pure function
//! of content state: no store access, no mutation, deterministic output.
//!
//! Per collection the derivation runs in a fixed order:
//!
//! 1. Base selection: published rows, with the draft overlaid when preview
//!    mode is on and the draft targets this collection. A draft for an
//!    existing row replaces that row wholesale (the stored status no longer
//!    matters, which is how an operator previews hidden content); a draft
//!    for a new row is prepended under the [`PREVIEW_DRAFT_ID`] sentinel.
//! 2. Category filter, articles only: exact, case-sensitive match unless the
//!    selected category is one of the sentinels.
//! 3. Search filter, all kinds: case-insensitive substring over the display
//!    text fields.
//!
//! Steps 2 and 3 only drop rows; the order established by step 1 survives.

use std::collections::HashSet;

use newsdesk_api::{
    Article, ContentItem, Draft, Podcast, Video, CATEGORY_ALL, CATEGORY_MORE, PREVIEW_DRAFT_ID,
};
use serde::Serialize;

use crate::state::ContentState;
use crate::store::ContentStore;

/// The computed display lists plus the ids the admin view highlights.
#[derive(Debug, Clone, Serialize)]
pub struct Projection {
    pub news: Vec<Article>,
    pub podcasts: Vec<Podcast>,
    pub videos: Vec<Video>,
    pub changed_ids: HashSet<String>,
}

/// Project the current content state into display lists.
pub fn project<S: ContentStore>(state: &ContentState<S>) -> Projection {
    compute(
        state.news(),
        state.podcasts(),
        state.videos(),
        state.draft(),
        state.preview_mode(),
        state.selected_category(),
        state.search_query(),
        state.changed_ids(),
    )
}

#[allow(clippy::too_many_arguments)]
fn compute(
    news: &[Article],
    podcasts: &[Podcast],
    videos: &[Video],
    draft: Option<&Draft>,
    preview_mode: bool,
    selected_category: &str,
    query: &str,
    changed: &HashSet<String>,
) -> Projection {
    // The draft only shapes the lists in preview mode; the changed-id union
    // below applies whenever a draft is active.
    let overlay_draft = if preview_mode { draft } else { None };

    let article_draft = match overlay_draft {
        Some(Draft::Article(a)) => Some(a),
        _ => None,
    };
    let podcast_draft = match overlay_draft {
        Some(Draft::Podcast(p)) => Some(p),
        _ => None,
    };
    let video_draft = match overlay_draft {
        Some(Draft::Video(v)) => Some(v),
        _ => None,
    };

    let news = overlay(news, article_draft)
        .into_iter()
        .filter(|a| category_passes(selected_category, &a.category))
        .filter(|a| {
            matches_query(
                query,
                [
                    a.title.as_str(),
                    a.subtitle.as_deref().unwrap_or(""),
                    a.content.as_str(),
                ],
            )
        })
        .collect();

    let podcasts = overlay(podcasts, podcast_draft)
        .into_iter()
        .filter(|p| matches_query(query, [p.title.as_str(), p.description.as_str()]))
        .collect();

    let videos = overlay(videos, video_draft)
        .into_iter()
        .filter(|v| matches_query(query, [v.title.as_str(), v.description.as_str()]))
        .collect();

    let mut changed_ids = changed.clone();
    if let Some(d) = draft {
        // An item being edited always renders as changed, saved or not.
        changed_ids.insert(d.display_id().to_string());
    }

    Projection {
        news,
        podcasts,
        videos,
        changed_ids,
    }
}

/// Step 1: published rows with the draft overlaid.
fn overlay<T: ContentItem>(rows: &[T], draft: Option<&T>) -> Vec<T> {
    match draft {
        None => rows.iter().filter(|r| r.is_visible()).cloned().collect(),
        Some(d) if d.id().is_empty() => {
            let mut first = d.clone();
            first.set_id(PREVIEW_DRAFT_ID.to_string());

            let mut out = Vec::with_capacity(rows.len() + 1);
            out.push(first);
            out.extend(rows.iter().filter(|r| r.is_visible()).cloned());
            out
        }
        Some(d) => rows
            .iter()
            .filter_map(|r| {
                if r.id() == d.id() {
                    // Full replace: the draft's fields win entirely, and the
                    // stored row's status cannot hide it.
                    Some(d.clone())
                } else if r.is_visible() {
                    Some(r.clone())
                } else {
                    None
                }
            })
            .collect(),
    }
}

/// Step 2: exact, case-sensitive category match with two sentinel no-ops.
fn category_passes(selected: &str, category: &str) -> bool {
    selected == CATEGORY_ALL || selected == CATEGORY_MORE || selected == category
}

/// Step 3: case-insensitive substring match over the given fields.
fn matches_query<'a>(query: &str, haystacks: impl IntoIterator<Item = &'a str>) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    haystacks
        .into_iter()
        .any(|h| h.to_lowercase().contains(&needle))
}

/// The home layout's lead story: the first featured article, else the first
/// article. First match wins; nothing enforces that only one is featured.
pub fn featured_article(news: &[Article]) -> Option<&Article> {
    news.iter().find(|a| a.featured).or_else(|| news.first())
}

/// The home layout's side column: breaking, non-featured items in list order.
pub fn breaking_articles(news: &[Article]) -> Vec<&Article> {
    news.iter().filter(|a| !a.featured && a.breaking).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use newsdesk_api::Status;
    use proptest::prelude::*;

    fn article(id: &str, title: &str, category: &str) -> Article {
        let mut a = Article::new(title, category, format!("Cuerpo de {title}"));
        a.id = id.to_string();
        a
    }

    fn podcast(id: &str, title: &str) -> Podcast {
        let mut p = Podcast::new(title, format!("Descripción de {title}"));
        p.id = id.to_string();
        p
    }

    fn video(id: &str, title: &str) -> Video {
        let mut v = Video::new(title, "Entrevistas", format!("Descripción de {title}"));
        v.id = id.to_string();
        v
    }

    fn compute_news(
        news: &[Article],
        draft: Option<&Draft>,
        preview: bool,
        category: &str,
        query: &str,
    ) -> Projection {
        compute(
            news,
            &[],
            &[],
            draft,
            preview,
            category,
            query,
            &HashSet::new(),
        )
    }

    #[test]
    fn test_hidden_article_is_absent_without_preview() {
        let news = vec![article("1", "A", "Economía").with_status(Status::Hidden)];
        let projection = compute_news(&news, None, false, CATEGORY_ALL, "");
        assert!(projection.news.is_empty());
    }

    #[test]
    fn test_draft_overlay_shows_hidden_article() {
        let hidden = article("1", "A", "Economía").with_status(Status::Hidden);
        let news = vec![hidden.clone()];
        let draft = Draft::Article(hidden.clone());

        let projection = compute_news(&news, Some(&draft), true, CATEGORY_ALL, "");
        assert_eq!(projection.news, vec![hidden]);
    }

    #[test]
    fn test_draft_replace_is_not_a_merge() {
        let stored = article("1", "Titular viejo", "Economía").with_status(Status::Hidden);
        let mut edited = article("1", "Titular nuevo", "Salud");
        edited.subtitle = Some("Último momento".to_string());
        let draft = Draft::Article(edited.clone());

        let projection = compute_news(&[stored], Some(&draft), true, CATEGORY_ALL, "");
        // The displayed entry is exactly the draft, stored fields included.
        assert_eq!(projection.news, vec![edited]);
    }

    #[test]
    fn test_draft_overlay_ignored_without_preview_mode() {
        let hidden = article("1", "A", "Economía").with_status(Status::Hidden);
        let draft = Draft::Article(hidden.clone());

        let projection = compute_news(&[hidden], Some(&draft), false, CATEGORY_ALL, "");
        assert!(projection.news.is_empty());
        // The draft still marks its row as changed.
        assert!(projection.changed_ids.contains("1"));
    }

    #[test]
    fn test_new_draft_is_prepended_under_the_sentinel_id() {
        let news = vec![article("1", "Existente", "Economía")];
        let draft = Draft::Article(article("", "Sin guardar", "Salud"));

        let projection = compute_news(&news, Some(&draft), true, CATEGORY_ALL, "");
        assert_eq!(projection.news.len(), 2);
        assert_eq!(projection.news[0].id, PREVIEW_DRAFT_ID);
        assert_eq!(projection.news[0].title, "Sin guardar");
        assert_eq!(projection.news[1].id, "1");
        assert!(projection.changed_ids.contains(PREVIEW_DRAFT_ID));
    }

    #[test]
    fn test_new_draft_does_not_unhide_the_rest_of_the_list() {
        let news = vec![
            article("1", "Visible", "Economía"),
            article("2", "Oculta", "Economía").with_status(Status::Hidden),
        ];
        let draft = Draft::Article(article("", "Sin guardar", "Salud"));

        let projection = compute_news(&news, Some(&draft), true, CATEGORY_ALL, "");
        let ids: Vec<&str> = projection.news.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec![PREVIEW_DRAFT_ID, "1"]);
    }

    #[test]
    fn test_replace_overlay_keeps_other_rows_filtered() {
        let news = vec![
            article("1", "Editada", "Economía").with_status(Status::Hidden),
            article("2", "Oculta", "Economía").with_status(Status::Pending),
            article("3", "Visible", "Economía"),
        ];
        let draft = Draft::Article(news[0].clone());

        let projection = compute_news(&news, Some(&draft), true, CATEGORY_ALL, "");
        let ids: Vec<&str> = projection.news.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);
    }

    #[test]
    fn test_category_filter_scenarios() {
        let news = vec![article("1", "A", "Economía")];

        let projection = compute_news(&news, None, false, "Salud", "");
        assert!(projection.news.is_empty());

        let projection = compute_news(&news, None, false, CATEGORY_ALL, "");
        assert_eq!(projection.news.len(), 1);

        let projection = compute_news(&news, None, false, CATEGORY_MORE, "");
        assert_eq!(projection.news.len(), 1);

        let projection = compute_news(&news, None, false, "Economía", "");
        assert_eq!(projection.news.len(), 1);

        // Case-sensitive: a lowercase selection matches nothing.
        let projection = compute_news(&news, None, false, "economía", "");
        assert!(projection.news.is_empty());
    }

    #[test]
    fn test_category_filter_does_not_touch_episodes() {
        let projection = compute(
            &[],
            &[podcast("1", "Episodio")],
            &[video("2", "Clip")],
            None,
            false,
            "Salud",
            "",
            &HashSet::new(),
        );
        assert_eq!(projection.podcasts.len(), 1);
        assert_eq!(projection.videos.len(), 1);
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let mut a = article("1", "Medidas económicas", "Economía");
        a.subtitle = Some("Último momento".to_string());

        let projection = compute_news(&[a.clone()], None, false, CATEGORY_ALL, "ECONÓMICAS");
        assert_eq!(projection.news.len(), 1);

        // Subtitle and body are searched too.
        let projection = compute_news(&[a.clone()], None, false, CATEGORY_ALL, "último");
        assert_eq!(projection.news.len(), 1);
        let projection = compute_news(&[a.clone()], None, false, CATEGORY_ALL, "cuerpo");
        assert_eq!(projection.news.len(), 1);

        let projection = compute_news(&[a], None, false, CATEGORY_ALL, "deporte");
        assert!(projection.news.is_empty());
    }

    #[test]
    fn test_search_covers_episode_descriptions() {
        let projection = compute(
            &[],
            &[podcast("1", "Episodio")],
            &[video("2", "Clip")],
            None,
            false,
            CATEGORY_ALL,
            "descripción de episodio",
            &HashSet::new(),
        );
        assert_eq!(projection.podcasts.len(), 1);
        assert!(projection.videos.is_empty());
    }

    #[test]
    fn test_draft_of_one_kind_leaves_other_collections_alone() {
        let news = vec![article("1", "A", "Economía").with_status(Status::Hidden)];
        let podcasts = vec![podcast("1", "Episodio")];
        let draft = Draft::Podcast(podcasts[0].clone());

        let projection = compute(
            &news,
            &podcasts,
            &[],
            Some(&draft),
            true,
            CATEGORY_ALL,
            "",
            &HashSet::new(),
        );
        // The hidden article stays hidden; only the podcast list is overlaid.
        assert!(projection.news.is_empty());
        assert_eq!(projection.podcasts.len(), 1);
    }

    #[test]
    fn test_changed_ids_union_draft() {
        let mut changed = HashSet::new();
        changed.insert("9".to_string());
        let draft = Draft::Article(article("1", "A", "Economía"));

        let projection = compute(
            &[],
            &[],
            &[],
            Some(&draft),
            true,
            CATEGORY_ALL,
            "",
            &changed,
        );
        assert!(projection.changed_ids.contains("9"));
        assert!(projection.changed_ids.contains("1"));
    }

    #[test]
    fn test_featured_first_match_wins() {
        let mut first = article("1", "Primera", "Economía");
        let mut second = article("2", "Segunda", "Salud");

        assert_eq!(featured_article(&[]), None);

        // No featured article: the first item is the fallback.
        assert_eq!(
            featured_article(&[first.clone(), second.clone()]).unwrap().id,
            "1"
        );

        second.featured = true;
        assert_eq!(
            featured_article(&[first.clone(), second.clone()]).unwrap().id,
            "2"
        );

        // Two featured articles: first match wins.
        first.featured = true;
        assert_eq!(featured_article(&[first, second]).unwrap().id, "1");
    }

    #[test]
    fn test_breaking_articles_skip_the_featured_one() {
        let featured = article("1", "Primera", "Economía").featured().breaking();
        let side = article("2", "Segunda", "Salud").breaking();
        let regular = article("3", "Tercera", "Salud");

        let news = vec![featured, side, regular];
        let side_ids: Vec<&str> = breaking_articles(&news).iter().map(|a| a.id.as_str()).collect();
        assert_eq!(side_ids, vec!["2"]);
    }

    // ===== Property tests =====

    fn arb_status() -> impl Strategy<Value = Option<Status>> {
        prop_oneof![
            Just(None),
            Just(Some(Status::Published)),
            Just(Some(Status::Hidden)),
            Just(Some(Status::Draft)),
            Just(Some(Status::Pending)),
        ]
    }

    fn arb_news() -> impl Strategy<Value = Vec<Article>> {
        prop::collection::vec(
            (
                "[a-zñ ]{1,12}",
                prop::sample::select(vec!["Economía", "Salud", "Deportes"]),
                arb_status(),
            ),
            0..8,
        )
        .prop_map(|rows| {
            rows.into_iter()
                .enumerate()
                .map(|(i, (title, category, status))| {
                    let mut a = Article::new(title, category, "Cuerpo");
                    a.id = i.to_string();
                    a.status = status;
                    a
                })
                .collect()
        })
    }

    proptest! {
        #[test]
        fn prop_without_preview_exactly_the_visible_rows_show(news in arb_news()) {
            let projection = compute_news(&news, None, false, CATEGORY_ALL, "");
            let expected: Vec<Article> =
                news.iter().filter(|a| a.is_visible()).cloned().collect();
            prop_assert_eq!(projection.news, expected);
        }

        #[test]
        fn prop_unpublished_rows_never_show_regardless_of_filters(
            news in arb_news(),
            category in prop::sample::select(vec!["Todas", "Más", "Economía", "Salud"]),
            query in "[a-zñ]{0,4}",
        ) {
            let projection = compute_news(&news, None, false, category, &query);
            prop_assert!(projection.news.iter().all(|a| a.is_visible()));
        }

        #[test]
        fn prop_filters_preserve_relative_order(
            news in arb_news(),
            category in prop::sample::select(vec!["Todas", "Más", "Economía", "Salud"]),
            query in "[a-zñ]{0,4}",
        ) {
            let projection = compute_news(&news, None, false, category, &query);

            // The projected list is a subsequence of the authoritative one.
            let mut base = news.iter();
            for shown in &projection.news {
                prop_assert!(base.any(|a| a == shown));
            }
        }

        #[test]
        fn prop_search_admits_iff_substring(news in arb_news(), query in "[a-zñ]{1,4}") {
            let projection = compute_news(&news, None, false, CATEGORY_ALL, &query);
            let needle = query.to_lowercase();

            for a in news.iter().filter(|a| a.is_visible()) {
                let haystack = format!(
                    "{} {} {}",
                    a.title.to_lowercase(),
                    a.subtitle.as_deref().unwrap_or("").to_lowercase(),
                    a.content.to_lowercase()
                );
                let admitted = projection.news.iter().any(|p| p.id == a.id);
                let matches = a.title.to_lowercase().contains(&needle)
                    || a.subtitle.as_deref().unwrap_or("").to_lowercase().contains(&needle)
                    || a.content.to_lowercase().contains(&needle);
                prop_assert_eq!(admitted, matches, "query {:?} vs {:?}", needle, haystack);
            }
        }

        #[test]
        fn prop_existing_draft_overlay_is_exact(news in arb_news(), pick in 0..8usize) {
            prop_assume!(!news.is_empty());
            let target = &news[pick % news.len()];

            let mut edited = target.clone();
            edited.title = format!("{} (editado)", edited.title);
            let draft = Draft::Article(edited.clone());

            let projection = compute_news(&news, Some(&draft), true, CATEGORY_ALL, "");
            let shown = projection.news.iter().find(|a| a.id == target.id);
            prop_assert_eq!(shown, Some(&edited));
        }
    }
}
