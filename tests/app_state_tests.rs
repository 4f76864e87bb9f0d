//! Application state tests
//!
//! Tests for section collapse/visibility defaults, tab selection, search,
//! navigation, and toast lifecycle.

use glyphref::dataset::filter::Selector;
use glyphref::dataset::{Category, Character, Dataset};
use glyphref::ui::app::{Row, SectionState, DEFAULT_EXPANDED_LIMIT};
use glyphref::ui::theme::Theme;
use glyphref::ui::toast::TOAST_DURATION;
use glyphref::ui::App;
use std::time::{Duration, Instant};

fn category(id: &str, name: &str, code_points: &[u32]) -> Category {
    Category {
        id: id.to_string(),
        name: name.to_string(),
        icon: "#".to_string(),
        items: code_points
            .iter()
            .map(|&cp| Character::from_code_point(cp, &format!("Character {cp}")).expect("valid"))
            .collect(),
    }
}

/// Eight categories of four characters each, so default-collapse and
/// proximity behavior are both exercised.
fn test_dataset() -> Dataset {
    Dataset {
        categories: (0..8)
            .map(|i| {
                let base = 0x2500 + i * 16;
                category(
                    &format!("cat{i}"),
                    &format!("Category {i}"),
                    &[base, base + 1, base + 2, base + 3],
                )
            })
            .collect(),
    }
}

fn create_test_app() -> App {
    App::new(test_dataset(), Theme::default_theme().clone())
}

#[test]
fn test_default_collapse_beyond_sixth_under_all() {
    let app = create_test_app();
    for i in 0..8 {
        let state = app.section(&format!("cat{i}"));
        assert_eq!(
            state.is_collapsed(),
            i >= DEFAULT_EXPANDED_LIMIT,
            "category {i}"
        );
    }
}

#[test]
fn test_single_category_tab_starts_expanded() {
    let mut app = create_test_app();
    // Walk to the last tab (cat7), collapsed by default under All.
    for _ in 0..8 {
        app.next_tab();
    }
    assert_eq!(app.selector, Selector::One("cat7".to_string()));
    assert!(!app.section("cat7").is_collapsed());
}

#[test]
fn test_section_visibility_is_one_shot() {
    let mut state = SectionState::new(false);
    assert!(!state.is_visible());
    state.reveal();
    assert!(state.is_visible());
    // No transition back exists; a second reveal is a no-op.
    state.reveal();
    assert!(state.is_visible());
}

#[test]
fn test_collapse_is_independent_of_visibility() {
    let mut state = SectionState::new(true);
    state.reveal();
    assert!(state.is_visible());
    assert!(state.is_collapsed(), "reveal must not expand");
    state.toggle_collapsed();
    assert!(!state.is_collapsed());
    assert!(state.is_visible());
}

#[test]
fn test_collapsed_section_renders_header_only_even_when_visible() {
    let mut app = create_test_app();
    app.viewport_rows = 100;
    app.update_visibility();

    // cat6 defaults to collapsed; after the proximity pass it is visible
    // but must still contribute only its header row.
    assert!(app.section("cat6").is_visible());
    let header_count = app
        .rows()
        .iter()
        .filter(|r| matches!(r, Row::Header { cat } if app.view()[*cat].category.id == "cat6"))
        .count();
    let item_count = app
        .rows()
        .iter()
        .filter(|r| matches!(r, Row::Item { cat, .. } if app.view()[*cat].category.id == "cat6"))
        .count();
    assert_eq!(header_count, 1);
    assert_eq!(item_count, 0);
}

#[test]
fn test_expanded_but_not_visible_shows_placeholder() {
    let mut app = create_test_app();
    // A tiny viewport: sections far down stay NotVisible.
    app.viewport_rows = 2;
    app.update_visibility();

    let rows = app.rows();
    assert!(
        rows.iter().any(|r| matches!(r, Row::Placeholder { .. })),
        "some expanded section should still be waiting on proximity"
    );
    // The first section is within the margin and fully materialized.
    assert!(app.section("cat0").is_visible());
    assert!(matches!(rows[1], Row::Item { cat: 0, item: 0 }));
}

#[test]
fn test_scrolling_reveals_more_sections() {
    let mut app = create_test_app();
    app.viewport_rows = 2;
    app.update_visibility();
    let before = app.rows().len();

    // Jump the scroll well past everything and run the proximity pass
    // until the layout settles (each reveal can push later headers down).
    app.scroll = 100;
    for _ in 0..10 {
        app.update_visibility();
    }
    assert!(app.rows().len() > before);
    for i in 0..DEFAULT_EXPANDED_LIMIT {
        assert!(app.section(&format!("cat{i}")).is_visible(), "cat{i}");
    }
}

#[test]
fn test_navigation_wraps() {
    let mut app = create_test_app();
    app.viewport_rows = 100;
    app.update_visibility();

    let len = app.rows().len();
    assert!(len > 0);

    app.previous();
    assert_eq!(app.selected_index, len - 1);
    app.next();
    assert_eq!(app.selected_index, 0);
}

#[test]
fn test_tab_cycling_wraps() {
    let mut app = create_test_app();
    assert_eq!(app.tab_index(), 0);

    app.next_tab();
    assert_eq!(app.selector, Selector::One("cat0".to_string()));

    app.previous_tab();
    assert_eq!(app.selector, Selector::All);

    app.previous_tab();
    assert_eq!(app.selector, Selector::One("cat7".to_string()));
}

#[test]
fn test_tab_change_resets_selection_and_sections() {
    let mut app = create_test_app();
    app.viewport_rows = 100;
    app.update_visibility();
    app.next();
    app.next();
    assert_ne!(app.selected_index, 0);

    app.next_tab();
    assert_eq!(app.selected_index, 0);
    assert_eq!(app.scroll, 0);
    // Sections restart NotVisible after the remount.
    assert!(!app.section("cat0").is_visible());
}

#[test]
fn test_search_filters_counts() {
    let mut app = create_test_app();
    let total = app.total_count();
    assert_eq!(app.filtered_count(), total);

    app.enter_search_mode();
    for c in "2500".chars() {
        app.search_push_char(c);
    }
    // Decimal code points here are 4-digit numbers starting at 9472, so
    // only the hex label U+2500 matches.
    assert_eq!(app.filtered_count(), 1);

    app.exit_search_mode();
    assert_eq!(app.filtered_count(), total);
}

#[test]
fn test_query_edit_resets_selection() {
    let mut app = create_test_app();
    app.viewport_rows = 100;
    app.update_visibility();
    app.next();
    app.next();

    app.enter_search_mode();
    app.search_push_char('x');
    assert_eq!(app.selected_index, 0);
    assert_eq!(app.scroll, 0);
}

#[test]
fn test_copy_sets_toast() {
    let mut app = create_test_app();
    app.viewport_rows = 100;
    app.update_visibility();
    app.next(); // move from the header onto the first card
    assert!(matches!(app.selected_row(), Some(Row::Item { .. })));

    app.copy_selected_glyph();
    let toast = app.toast.as_ref().expect("toast shown");
    assert!(toast.message().starts_with("Copied"));

    app.copy_selected_entity();
    let toast = app.toast.as_ref().expect("toast shown");
    assert!(toast.message().contains("&#"));
}

#[test]
fn test_toast_replacement_and_expiry() {
    let mut app = create_test_app();
    let start = Instant::now();

    app.notify_at("A", start);
    app.notify_at("B", start + Duration::from_millis(100));
    assert_eq!(app.toast.as_ref().map(|t| t.message()), Some("B"));

    // Where the first toast's timer would have fired, "B" is still up.
    app.tick(start + TOAST_DURATION);
    assert_eq!(app.toast.as_ref().map(|t| t.message()), Some("B"));

    // Gone a full duration after the second call.
    app.tick(start + Duration::from_millis(100) + TOAST_DURATION);
    assert!(app.toast.is_none());
}

#[test]
fn test_activate_header_toggles_collapse() {
    let mut app = create_test_app();
    app.viewport_rows = 100;
    app.update_visibility();
    assert!(matches!(app.selected_row(), Some(Row::Header { cat: 0 })));

    assert!(!app.section("cat0").is_collapsed());
    app.activate_selected();
    assert!(app.section("cat0").is_collapsed());
    app.activate_selected();
    assert!(!app.section("cat0").is_collapsed());
}

#[test]
fn test_handle_left_jumps_from_card_to_header() {
    let mut app = create_test_app();
    app.viewport_rows = 100;
    app.update_visibility();
    app.next();
    app.next(); // second card of cat0

    app.handle_left();
    assert!(matches!(app.selected_row(), Some(Row::Header { cat: 0 })));

    // Left again collapses the section.
    app.handle_left();
    assert!(app.section("cat0").is_collapsed());

    // Right expands it back.
    app.handle_right();
    assert!(!app.section("cat0").is_collapsed());
}
