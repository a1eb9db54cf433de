//! Unit tests for the engine crate.

use std::path::Path;
use std::time::Duration;

use serde_json::json;
use tempfile::TempDir;

use cheatsheet_loader::{LoadOutcome, MountId};

use super::{
    App, ContentLocation, MountedView, NavigationError, Route, ScrollRequest, Settings, ThemeMode,
    VerseCheatsheet, ViewLoad,
};

fn write_content(dir: &Path) {
    let verses = json!({
        "categories": [
            {
                "name": "Faith",
                "verses": [{ "reference": "Heb 11:1", "text": "Now faith is the substance of things to be hoped for" }]
            },
            {
                "name": "The Papacy",
                "description": "Peter and his successors",
                "subcategories": [
                    { "name": "The Rock", "verses": [{ "reference": "Mt 16:18", "text": "Thou art Peter" }] },
                    { "name": "The Keys", "verses": [{ "reference": "Mt 16:19", "text": "I will give to thee the keys" }] }
                ]
            },
            { "name": "Purgatory" }
        ]
    });
    let heresies = json!({
        "catholic_teachings_about_jesus": ["Jesus is true God", "Jesus is true man"],
        "heresies": [
            { "name": "Arianism", "false_teaching": "The Son is a creature", "catholic_truth": "The Son is God" }
        ]
    });
    std::fs::write(
        dir.join("bible_verse_cheatsheet.json"),
        serde_json::to_vec(&verses).unwrap(),
    )
    .unwrap();
    std::fs::write(
        dir.join("heresies_checklist.json"),
        serde_json::to_vec(&heresies).unwrap(),
    )
    .unwrap();
}

fn test_settings(dir: &Path) -> Settings {
    Settings {
        content: ContentLocation::Directory(dir.to_path_buf()),
        ..Settings::default()
    }
}

fn test_app() -> (App, TempDir) {
    let dir = tempfile::tempdir().expect("temp content dir");
    write_content(dir.path());
    let app = App::from_settings(&test_settings(dir.path())).expect("directory source builds");
    (app, dir)
}

/// Drain load events until the mounted view stops loading.
async fn settle(app: &mut App) {
    for _ in 0..500 {
        app.process_load_events();
        if !app.is_loading() {
            return;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    panic!("view never finished loading");
}

#[tokio::test]
async fn starts_on_verses_and_loads_in_order() {
    let (mut app, _dir) = test_app();
    assert_eq!(app.route(), Route::Verses);
    assert_eq!(app.location(), "/");
    assert!(app.is_loading());

    settle(&mut app).await;
    let names: Vec<_> = app.verses().unwrap().category_names().collect();
    assert_eq!(names, ["Faith", "The Papacy", "Purgatory"]);
    assert_eq!(app.expanded_section(), None);
}

#[tokio::test]
async fn start_route_comes_from_settings() {
    let dir = tempfile::tempdir().unwrap();
    write_content(dir.path());
    let settings = Settings {
        start_route: Route::Heresies,
        theme: ThemeMode::Dark,
        ..test_settings(dir.path())
    };
    let mut app = App::from_settings(&settings).unwrap();
    settle(&mut app).await;
    assert_eq!(app.active_tab(), 1);
    assert_eq!(app.heresies().unwrap().heresies[0].name, "Arianism");
    assert_eq!(app.theme(), ThemeMode::Dark);
}

#[tokio::test]
async fn expanding_one_section_collapses_the_other() {
    let (mut app, _dir) = test_app();
    settle(&mut app).await;

    assert!(app.expand_section("Faith"));
    app.move_cursor(1);
    app.toggle_section();

    assert_eq!(app.expanded_section(), Some("The Papacy"));
    assert!(!app.accordion().is_expanded("Faith"));
    assert_eq!(app.take_scroll_request(), ScrollRequest::Reveal(1));
    assert_eq!(app.take_scroll_request(), ScrollRequest::None);

    app.toggle_section();
    assert_eq!(app.expanded_section(), None);
}

#[tokio::test]
async fn expand_unknown_section_is_ignored() {
    let (mut app, _dir) = test_app();
    settle(&mut app).await;
    assert!(!app.expand_section("Indulgences"));
    assert_eq!(app.expanded_section(), None);
}

#[tokio::test]
async fn cursor_is_clamped_to_sections() {
    let (mut app, _dir) = test_app();
    settle(&mut app).await;
    app.move_cursor(-3);
    assert_eq!(app.cursor(), 0);
    app.move_cursor(10);
    assert_eq!(app.cursor(), 2);
    assert_eq!(app.take_scroll_request(), ScrollRequest::Follow(2));
}

#[tokio::test]
async fn switching_views_collapses_and_resets_scroll() {
    let (mut app, _dir) = test_app();
    settle(&mut app).await;
    app.expand_section("The Papacy");
    app.set_scroll_max(50);
    app.scroll_by(20);
    assert!(app.is_scrolled());

    app.select_tab(1).unwrap();

    assert_eq!(app.route(), Route::Heresies);
    assert_eq!(app.location(), "/heresies");
    assert_eq!(app.expanded_section(), None);
    assert_eq!(app.scroll().offset(), 0);
    assert_eq!(app.cursor(), 0);
    assert!(app.is_loading());

    settle(&mut app).await;
    assert_eq!(app.heresies().unwrap().catholic_teachings_about_jesus.len(), 2);

    // Coming back remounts the verse view with nothing expanded.
    app.navigate("/").unwrap();
    assert!(app.verses().is_none());
    settle(&mut app).await;
    assert_eq!(app.expanded_section(), None);
    assert_eq!(app.verses().unwrap().categories.len(), 3);
}

#[tokio::test]
async fn selecting_active_tab_is_a_no_op() {
    let (mut app, _dir) = test_app();
    settle(&mut app).await;
    app.expand_section("Faith");
    let mount = app.mount_id();

    app.select_tab(0).unwrap();
    app.navigate("/").unwrap();

    assert_eq!(app.mount_id(), mount);
    assert_eq!(app.expanded_section(), Some("Faith"));
    assert!(app.verses().is_some());
}

#[tokio::test]
async fn unknown_navigation_targets_are_rejected() {
    let (mut app, _dir) = test_app();
    assert_eq!(
        app.navigate("/saints"),
        Err(NavigationError::UnknownPath("/saints".to_string()))
    );
    assert_eq!(app.select_tab(5), Err(NavigationError::UnknownTab(5)));
    assert_eq!(app.route(), Route::Verses);
}

#[tokio::test]
async fn tabs_cycle_both_ways() {
    let (mut app, _dir) = test_app();
    app.next_tab();
    assert_eq!(app.route(), Route::Heresies);
    app.next_tab();
    assert_eq!(app.route(), Route::Verses);
    app.prev_tab();
    assert_eq!(app.active_tab(), 1);
}

#[tokio::test]
async fn late_load_after_unmount_is_dropped() {
    let (mut app, _dir) = test_app();
    let stale = app.mount_id();
    app.select_tab(1).unwrap();
    settle(&mut app).await;
    assert!(app.heresies().is_some());

    // The verse load for the old mount resolves now; it must not disturb anything.
    let late = ViewLoad::Verses(LoadOutcome {
        mount: stale,
        result: Ok(VerseCheatsheet {
            categories: Vec::new(),
        }),
    });
    app.load_tx.send(late).unwrap();
    assert!(!app.process_load_events());
    assert!(app.heresies().is_some());
    assert!(matches!(app.view(), MountedView::Heresies(_)));
}

#[tokio::test]
async fn stale_load_for_same_view_kind_is_dropped() {
    let (mut app, _dir) = test_app();
    settle(&mut app).await;
    app.reload();
    let current = app.mount_id();
    assert!(current > MountId::first());

    let stale = ViewLoad::Verses(LoadOutcome {
        mount: MountId::first(),
        result: Ok(VerseCheatsheet {
            categories: Vec::new(),
        }),
    });
    app.load_tx.send(stale).unwrap();
    assert!(!app.process_load_events());
    assert!(app.is_loading());

    settle(&mut app).await;
    assert_eq!(app.verses().unwrap().categories.len(), 3);
}

#[tokio::test]
async fn reload_discards_expansion_and_scroll() {
    let (mut app, _dir) = test_app();
    settle(&mut app).await;
    assert!(app.expand_section("The Papacy"));
    app.set_scroll_max(40);
    app.set_scroll_offset(20);
    let before = app.mount_id();

    app.reload();
    assert!(app.is_loading());
    assert!(app.mount_id() > before);
    assert_eq!(app.take_scroll_request(), ScrollRequest::None);
    settle(&mut app).await;

    assert_eq!(app.expanded_section(), None);
    assert_eq!(app.cursor(), 0);
    assert_eq!(app.scroll().offset(), 0);
    assert!(app.verses().is_some());
}

#[tokio::test]
async fn failed_load_shows_generic_error_and_shell_stays_usable() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("bible_verse_cheatsheet.json"),
        b"{\"sections\": []}",
    )
    .unwrap();
    let mut app = App::from_settings(&test_settings(dir.path())).unwrap();
    settle(&mut app).await;

    assert_eq!(app.view().error(), Some("Failed to fetch data"));
    assert!(app.verses().is_none());

    app.toggle_theme();
    app.select_tab(1).unwrap();
    settle(&mut app).await;
    assert_eq!(app.view().error(), Some("Failed to fetch data"));
    assert_eq!(app.route(), Route::Heresies);
}

#[tokio::test]
async fn theme_toggles_once_per_call() {
    let (mut app, _dir) = test_app();
    assert_eq!(app.theme(), ThemeMode::Light);
    app.toggle_theme();
    assert_eq!(app.theme(), ThemeMode::Dark);
    app.toggle_theme();
    assert_eq!(app.theme(), ThemeMode::Light);
}

#[tokio::test]
async fn page_scroll_uses_viewport_height() {
    let (mut app, _dir) = test_app();
    app.set_viewport_height(12);
    app.set_scroll_max(100);
    app.scroll_page(true);
    assert_eq!(app.scroll().offset(), 10);
    app.scroll_page(false);
    assert_eq!(app.scroll().offset(), 0);
    app.scroll_to_bottom();
    assert_eq!(app.scroll().offset(), 100);
}

#[test]
fn quit_is_sticky() {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap();
    let _guard = runtime.enter();
    let dir = tempfile::tempdir().unwrap();
    let mut app = App::from_settings(&test_settings(dir.path())).unwrap();
    assert!(!app.should_quit());
    app.request_quit();
    assert!(app.should_quit());
}
