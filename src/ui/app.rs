//! Application state: query and tab selection, per-section render state,
//! keyboard navigation over the flattened row list, and the copy actions.

use std::collections::HashMap;
use std::time::Instant;

use crate::dataset::filter::{self, FilteredCategory, Selector};
use crate::dataset::Dataset;
use crate::ui::clipboard;
use crate::ui::theme::Theme;
use crate::ui::toast::Toast;

/// Under the "All" tab, categories beyond this many start collapsed.
pub const DEFAULT_EXPANDED_LIMIT: usize = 6;

/// A section's character rows materialize once its header scrolls within
/// this many rows of the viewport.
pub const VISIBILITY_MARGIN_ROWS: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    NotVisible,
    Visible,
}

/// Per-category render state: {NotVisible, Visible} x {Expanded, Collapsed}.
///
/// Visibility only ever moves forward; there is no transition back to
/// `NotVisible`. Collapse is independent and toggled solely by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionState {
    visibility: Visibility,
    collapsed: bool,
}

impl SectionState {
    pub fn new(default_collapsed: bool) -> Self {
        Self {
            visibility: Visibility::NotVisible,
            collapsed: default_collapsed,
        }
    }

    /// One-shot NotVisible -> Visible transition. Idempotent.
    pub fn reveal(&mut self) {
        self.visibility = Visibility::Visible;
    }

    pub fn toggle_collapsed(&mut self) {
        self.collapsed = !self.collapsed;
    }

    pub fn is_visible(&self) -> bool {
        self.visibility == Visibility::Visible
    }

    pub fn is_collapsed(&self) -> bool {
        self.collapsed
    }
}

/// One line of the scrollable body, addressing into the current filtered
/// view (`cat` indexes the filter result, not the dataset).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Row {
    /// Section header: icon, name, count, chevron.
    Header { cat: usize },
    /// Fixed-height stand-in shown while a section is expanded but has not
    /// yet scrolled near the viewport.
    Placeholder { cat: usize },
    /// One character card.
    Item { cat: usize, item: usize },
}

pub struct App {
    pub dataset: Dataset,
    pub theme: Theme,
    pub query: String,
    pub search_mode: bool,
    pub selector: Selector,
    /// Render state per category id. Reset whenever the selector changes,
    /// re-applying the defaults for the new view.
    sections: HashMap<String, SectionState>,
    pub selected_index: usize,
    pub scroll: usize,
    /// Body height in rows, as last reported by the terminal.
    pub viewport_rows: usize,
    pub toast: Option<Toast>,
    pub show_info: bool,
    pub should_quit: bool,
}

impl App {
    pub fn new(dataset: Dataset, theme: Theme) -> Self {
        let mut app = Self {
            dataset,
            theme,
            query: String::new(),
            search_mode: false,
            selector: Selector::All,
            sections: HashMap::new(),
            selected_index: 0,
            scroll: 0,
            viewport_rows: 0,
            toast: None,
            show_info: false,
            should_quit: false,
        };
        app.reset_sections();
        app
    }

    // -- filtered view ------------------------------------------------------

    /// Recompute the filtered view. Cheap enough to call per frame; the
    /// exporter recomputes the same predicate independently.
    pub fn view(&self) -> Vec<FilteredCategory<'_>> {
        filter::filter(&self.dataset, &self.query, &self.selector)
    }

    pub fn total_count(&self) -> usize {
        self.dataset.total_count()
    }

    pub fn filtered_count(&self) -> usize {
        filter::filtered_count(&self.view())
    }

    /// Flatten the filtered view into navigable rows, honoring each
    /// section's collapse and visibility state.
    pub fn rows(&self) -> Vec<Row> {
        let mut rows = Vec::new();
        for (cat, fc) in self.view().iter().enumerate() {
            rows.push(Row::Header { cat });
            let state = self.section(&fc.category.id);
            if state.is_collapsed() {
                continue;
            }
            if !state.is_visible() {
                rows.push(Row::Placeholder { cat });
                continue;
            }
            for item in 0..fc.items.len() {
                rows.push(Row::Item { cat, item });
            }
        }
        rows
    }

    pub fn selected_row(&self) -> Option<Row> {
        self.rows().get(self.selected_index).copied()
    }

    // -- section state ------------------------------------------------------

    pub fn section(&self, id: &str) -> SectionState {
        self.sections
            .get(id)
            .copied()
            .unwrap_or_else(|| SectionState::new(false))
    }

    /// Re-apply default section state for the current selector: under "All",
    /// categories beyond the sixth start collapsed; a single-category view
    /// starts expanded. Visibility restarts at `NotVisible`.
    fn reset_sections(&mut self) {
        self.sections.clear();
        for (i, category) in self.dataset.categories.iter().enumerate() {
            let default_collapsed =
                self.selector == Selector::All && i >= DEFAULT_EXPANDED_LIMIT;
            self.sections
                .insert(category.id.clone(), SectionState::new(default_collapsed));
        }
    }

    pub fn toggle_section(&mut self, id: &str) {
        if let Some(state) = self.sections.get_mut(id) {
            state.toggle_collapsed();
        }
    }

    /// Reveal every section whose header currently sits within the viewport
    /// plus the proximity margin. Called once per event-loop iteration; the
    /// revealed rows materialize on the next frame.
    pub fn update_visibility(&mut self) {
        let limit = self.scroll + self.viewport_rows + VISIBILITY_MARGIN_ROWS;
        let mut near: Vec<String> = Vec::new();
        {
            let view = self.view();
            for (pos, row) in self.rows().iter().enumerate() {
                if let Row::Header { cat } = row {
                    if pos < limit {
                        near.push(view[*cat].category.id.clone());
                    }
                }
            }
        }
        for id in near {
            if let Some(state) = self.sections.get_mut(&id) {
                state.reveal();
            }
        }
    }

    // -- navigation ---------------------------------------------------------

    pub fn next(&mut self) {
        let len = self.rows().len();
        if len > 0 {
            self.selected_index = (self.selected_index + 1) % len;
            self.scroll_to_selection();
        }
    }

    pub fn previous(&mut self) {
        let len = self.rows().len();
        if len > 0 {
            self.selected_index = if self.selected_index > 0 {
                self.selected_index - 1
            } else {
                len - 1
            };
            self.scroll_to_selection();
        }
    }

    fn scroll_to_selection(&mut self) {
        if self.viewport_rows == 0 {
            return;
        }
        if self.selected_index < self.scroll {
            self.scroll = self.selected_index;
        } else if self.selected_index >= self.scroll + self.viewport_rows {
            self.scroll = self.selected_index + 1 - self.viewport_rows;
        }
    }

    fn reset_position(&mut self) {
        self.selected_index = 0;
        self.scroll = 0;
    }

    /// Collapse the selected section, or jump from a card to its header.
    pub fn handle_left(&mut self) {
        match self.selected_row() {
            Some(Row::Header { cat }) => {
                let id = self.view()[cat].category.id.clone();
                if !self.section(&id).is_collapsed() {
                    self.toggle_section(&id);
                }
            }
            Some(Row::Item { cat, .. }) | Some(Row::Placeholder { cat }) => {
                let rows = self.rows();
                if let Some(pos) = rows
                    .iter()
                    .position(|r| matches!(r, Row::Header { cat: c } if *c == cat))
                {
                    self.selected_index = pos;
                    self.scroll_to_selection();
                }
            }
            None => {}
        }
    }

    /// Expand the selected section.
    pub fn handle_right(&mut self) {
        if let Some(Row::Header { cat }) = self.selected_row() {
            let id = self.view()[cat].category.id.clone();
            if self.section(&id).is_collapsed() {
                self.toggle_section(&id);
            }
        }
    }

    // -- tabs ---------------------------------------------------------------

    /// Tab strip position: 0 is "All", then one tab per category in dataset
    /// order.
    pub fn tab_index(&self) -> usize {
        match &self.selector {
            Selector::All => 0,
            Selector::One(id) => self
                .dataset
                .categories
                .iter()
                .position(|c| &c.id == id)
                .map_or(0, |i| i + 1),
        }
    }

    pub fn next_tab(&mut self) {
        let tabs = self.dataset.categories.len() + 1;
        self.set_tab((self.tab_index() + 1) % tabs);
    }

    pub fn previous_tab(&mut self) {
        let tabs = self.dataset.categories.len() + 1;
        self.set_tab((self.tab_index() + tabs - 1) % tabs);
    }

    fn set_tab(&mut self, index: usize) {
        self.selector = if index == 0 {
            Selector::All
        } else {
            Selector::One(self.dataset.categories[index - 1].id.clone())
        };
        self.reset_sections();
        self.reset_position();
    }

    // -- search -------------------------------------------------------------

    pub fn enter_search_mode(&mut self) {
        self.search_mode = true;
    }

    pub fn exit_search_mode(&mut self) {
        self.search_mode = false;
        self.query.clear();
        self.reset_position();
    }

    pub fn search_push_char(&mut self, c: char) {
        self.query.push(c);
        self.reset_position();
    }

    pub fn search_pop_char(&mut self) {
        self.query.pop();
        self.reset_position();
    }

    // -- actions ------------------------------------------------------------

    /// Primary interaction on a card: copy the glyph. The confirmation is
    /// shown regardless of which clipboard path ran.
    pub fn copy_selected_glyph(&mut self) {
        if let Some(Row::Item { cat, item }) = self.selected_row() {
            let (glyph, description) = {
                let view = self.view();
                let ch = view[cat].items[item];
                (ch.glyph.clone(), ch.description.clone())
            };
            clipboard::copy_text(&glyph);
            self.notify(format!("Copied {glyph} ({description})"));
        }
    }

    /// Secondary interaction on a card: copy the HTML entity.
    pub fn copy_selected_entity(&mut self) {
        if let Some(Row::Item { cat, item }) = self.selected_row() {
            let entity = self.view()[cat].items[item].entity();
            clipboard::copy_text(&entity);
            self.notify(format!("Copied entity {entity}"));
        }
    }

    /// Enter on a header toggles collapse; on a card it copies the glyph.
    pub fn activate_selected(&mut self) {
        match self.selected_row() {
            Some(Row::Header { cat }) => {
                let id = self.view()[cat].category.id.clone();
                self.toggle_section(&id);
            }
            Some(Row::Item { .. }) => self.copy_selected_glyph(),
            _ => {}
        }
    }

    pub fn notify(&mut self, message: impl Into<String>) {
        self.notify_at(message, Instant::now());
    }

    /// Replace the current toast and restart its clock. Exposed with an
    /// explicit instant so tests control time.
    pub fn notify_at(&mut self, message: impl Into<String>, now: Instant) {
        self.toast = Some(Toast::new(message, now));
    }

    pub fn notify_error(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast::error(message, Instant::now()));
    }

    /// Per-iteration housekeeping: drop an expired toast.
    pub fn tick(&mut self, now: Instant) {
        if self.toast.as_ref().is_some_and(|t| t.is_expired(now)) {
            self.toast = None;
        }
    }

    pub fn toggle_info(&mut self) {
        self.show_info = !self.show_info;
    }
}
