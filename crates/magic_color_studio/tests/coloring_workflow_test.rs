//! Tests for coloring existing pages.

mod test_utils;

use magic_color_core::{ColoringPage, ImageRef, PageId, ViewMode};
use magic_color_gallery::{GalleryStore, decode};
use magic_color_storage::{KeyValueStore, MemoryStore};
use magic_color_studio::{COLORING_NOTICE, ColorStep, ColoringReport, Outcome, Phase, Studio};
use std::sync::Arc;
use test_utils::{FakeGenerator, colored_y, line_art_x};

const KEY: &str = "pages";

fn dinosaur() -> ColoringPage {
    ColoringPage::from_parts("dino", "A cute dinosaur", line_art_x(), 1_700_000_000_000)
}

fn studio_with(store: Arc<MemoryStore>) -> anyhow::Result<Studio<Arc<MemoryStore>>> {
    let mut gallery = GalleryStore::new(store, KEY);
    gallery.insert(ColoringPage::from_parts(
        "other",
        "A happy cat eating pizza",
        ImageRef::Remote("https://picsum.photos/seed/cat/800/800".to_string()),
        5,
    ))?;
    gallery.insert(dinosaur())?;
    Ok(Studio::new(gallery))
}

fn dino_id() -> PageId {
    PageId::from("dino")
}

#[tokio::test]
async fn test_coloring_attaches_colored_variant() -> anyhow::Result<()> {
    let mut studio = studio_with(Arc::new(MemoryStore::new()))?;
    let generator = FakeGenerator::succeeding();

    assert!(studio.select(&dino_id()));
    let report = studio.color_selected(&generator).await;
    assert_eq!(report, ColoringReport::Colored);

    let page = studio.gallery().get(&dino_id()).expect("page present");
    assert_eq!(page.colored_url().as_ref(), Some(&colored_y()));
    assert_eq!(page.prompt(), "A cute dinosaur");
    assert_eq!(page.line_art_url(), &line_art_x());
    assert_eq!(page.created_at(), 1_700_000_000_000);

    assert_eq!(studio.view_mode(), ViewMode::Colored);
    assert_eq!(studio.displayed_image(), Some(&colored_y()));
    assert_eq!(studio.last_coloring(), Some(Outcome::Succeeded));
    assert_eq!(generator.prompts(), vec!["A cute dinosaur".to_string()]);
    Ok(())
}

#[tokio::test]
async fn test_coloring_is_memoized() -> anyhow::Result<()> {
    let mut studio = studio_with(Arc::new(MemoryStore::new()))?;
    let generator = FakeGenerator::succeeding();

    studio.select(&dino_id());
    studio.color_selected(&generator).await;

    // Reopen so the view starts in line mode again
    studio.close();
    studio.select(&dino_id());
    assert_eq!(studio.view_mode(), ViewMode::Line);

    let report = studio.color_selected(&generator).await;
    assert_eq!(report, ColoringReport::AlreadyColored);
    assert_eq!(studio.view_mode(), ViewMode::Colored);
    assert_eq!(generator.color_calls(), 1);
    Ok(())
}

#[tokio::test]
async fn test_coloring_is_persisted() -> anyhow::Result<()> {
    let store = Arc::new(MemoryStore::new());
    let mut studio = studio_with(store.clone())?;

    studio.select(&dino_id());
    studio.color_selected(&FakeGenerator::succeeding()).await;

    let saved = decode(&store.get(KEY)?.expect("gallery saved"))?;
    let ids: Vec<&str> = saved.iter().map(|p| p.id().as_str()).collect();
    assert_eq!(ids, vec!["dino", "other"]);
    assert_eq!(saved[0].colored_url().as_ref(), Some(&colored_y()));
    assert!(saved[1].colored_url().is_none());
    Ok(())
}

#[tokio::test]
async fn test_failure_leaves_page_untouched() -> anyhow::Result<()> {
    let store = Arc::new(MemoryStore::new());
    let mut studio = studio_with(store.clone())?;
    let generator = FakeGenerator::failing();

    studio.select(&dino_id());
    let report = studio.color_selected(&generator).await;
    assert_eq!(report, ColoringReport::Failed);

    assert_eq!(studio.gallery().get(&dino_id()), Some(&dinosaur()));
    assert_eq!(studio.notice().map(|n| n.message), Some(COLORING_NOTICE));
    assert_eq!(studio.view_mode(), ViewMode::Line);
    assert_eq!(studio.coloring_phase(), Phase::Idle);
    assert_eq!(studio.last_coloring(), Some(Outcome::Failed));
    assert!(store.get(KEY)?.is_none());

    // The user may try again
    assert_eq!(
        studio.color_selected(&FakeGenerator::succeeding()).await,
        ColoringReport::Colored
    );
    Ok(())
}

#[tokio::test]
async fn test_nothing_open_is_ignored() -> anyhow::Result<()> {
    let mut studio = studio_with(Arc::new(MemoryStore::new()))?;
    let generator = FakeGenerator::succeeding();

    assert_eq!(studio.color_selected(&generator).await, ColoringReport::Ignored);
    assert_eq!(generator.color_calls(), 0);
    Ok(())
}

#[test]
fn test_second_trigger_while_busy_is_ignored() -> anyhow::Result<()> {
    let mut studio = studio_with(Arc::new(MemoryStore::new()))?;
    studio.select(&dino_id());

    let ColorStep::Request(request) = studio.begin_coloring() else {
        panic!("expected a coloring request");
    };
    assert_eq!(request.page_id(), &dino_id());
    assert_eq!(request.line_art(), &line_art_x());
    assert!(studio.is_coloring());
    assert_eq!(studio.begin_coloring(), ColorStep::Ignored);

    studio.complete_coloring(request, Ok(colored_y()));
    assert!(!studio.is_coloring());
    Ok(())
}

#[test]
fn test_result_after_close_still_attaches() -> anyhow::Result<()> {
    let mut studio = studio_with(Arc::new(MemoryStore::new()))?;
    studio.select(&dino_id());
    let ColorStep::Request(request) = studio.begin_coloring() else {
        panic!("expected a coloring request");
    };

    studio.close();
    assert!(studio.select(&PageId::from("other")));

    let report = studio.complete_coloring(request, Ok(colored_y()));
    assert_eq!(report, ColoringReport::Colored);
    assert!(studio.gallery().get(&dino_id()).is_some_and(|p| p.is_colored()));

    // The page now open is not switched
    assert_eq!(studio.view_mode(), ViewMode::Line);
    Ok(())
}

#[test]
fn test_generation_and_coloring_are_independent() -> anyhow::Result<()> {
    let mut studio = studio_with(Arc::new(MemoryStore::new()))?;
    studio.set_prompt("A castle in the clouds");
    let generation = studio.begin_generation().expect("request issued");

    studio.select(&dino_id());
    let ColorStep::Request(coloring) = studio.begin_coloring() else {
        panic!("expected a coloring request");
    };
    assert!(studio.is_generating());
    assert!(studio.is_coloring());

    studio.complete_coloring(coloring, Ok(colored_y()));
    let created = studio.complete_generation(generation, Ok(line_art_x()));

    assert!(created.is_some());
    assert_eq!(studio.gallery().len(), 3);
    assert!(studio.gallery().get(&dino_id()).is_some_and(|p| p.is_colored()));
    Ok(())
}
