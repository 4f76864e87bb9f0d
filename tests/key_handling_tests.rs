//! Keyboard event handling tests
//!
//! Tests for keyboard input handling including quit keys, search mode,
//! navigation, and modal interactions.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use glyphref::dataset::Dataset;
use glyphref::ui::theme::Theme;
use glyphref::ui::App;

/// Helper to create a key event
fn key_event(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::empty()))
}

/// Helper to create a test app over the real catalog
fn create_test_app() -> App {
    App::new(Dataset::load(), Theme::default_theme().clone())
}

#[tokio::test]
async fn test_quit_with_q_key() {
    let mut app = create_test_app();

    assert!(!app.should_quit);

    // Manually simulate the key handling logic
    let event = key_event(KeyCode::Char('q'));
    if let Event::Key(key) = event {
        if key.code == KeyCode::Char('q') {
            app.should_quit = true;
        }
    }

    assert!(app.should_quit);
}

#[tokio::test]
async fn test_info_modal_toggle() {
    let mut app = create_test_app();

    assert!(!app.show_info);

    app.toggle_info();
    assert!(app.show_info);

    app.toggle_info();
    assert!(!app.show_info);
}

#[tokio::test]
async fn test_search_mode_enter_and_exit() {
    let mut app = create_test_app();

    assert!(!app.search_mode);

    app.enter_search_mode();
    assert!(app.search_mode);

    app.exit_search_mode();
    assert!(!app.search_mode);
    assert!(app.query.is_empty());
}

#[tokio::test]
async fn test_search_input_handling() {
    let mut app = create_test_app();
    app.enter_search_mode();

    app.search_push_char('s');
    app.search_push_char('t');
    app.search_push_char('a');
    app.search_push_char('r');
    assert_eq!(app.query, "star");

    app.search_pop_char();
    assert_eq!(app.query, "sta");
}

#[tokio::test]
async fn test_exit_search_clears_filter() {
    let mut app = create_test_app();
    let total = app.total_count();

    app.enter_search_mode();
    app.search_push_char('z');
    app.search_push_char('z');
    assert!(app.filtered_count() < total);

    // Esc both leaves search mode and restores the full catalog.
    app.exit_search_mode();
    assert_eq!(app.filtered_count(), total);
}

#[tokio::test]
async fn test_navigation_next_previous() {
    let mut app = create_test_app();
    app.viewport_rows = 50;

    app.next();
    assert_eq!(app.selected_index, 1);
    app.previous();
    assert_eq!(app.selected_index, 0);
}

#[tokio::test]
async fn test_tab_keys_cycle_categories() {
    let mut app = create_test_app();
    let tabs = app.dataset.categories.len() + 1;

    for i in 1..tabs {
        app.next_tab();
        assert_eq!(app.tab_index(), i);
    }
    app.next_tab();
    assert_eq!(app.tab_index(), 0, "wraps back to All");
}
