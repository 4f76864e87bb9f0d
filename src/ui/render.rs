//! Rendering functions for the glyphref TUI.
//!
//! Layout:
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │            Header (title + counts)              │
//! ├─────────────────────────────────────────────────┤
//! │            Tab strip (All | categories)         │
//! ├─────────────────────────────────────────────────┤
//! │            Search bar                           │
//! ├─────────────────────────────────────────────────┤
//! │                                                 │
//! │   Category sections (headers, cards, or         │
//! │   loading placeholders)                         │
//! │                                                 │
//! ├─────────────────────────────────────────────────┤
//! │            Footer (keys / toast)                │
//! └─────────────────────────────────────────────────┘
//! ```

use crate::ui::app::{App, Row};
use crate::ui::toast::ToastKind;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
    Frame,
};

/// Rows of the body area consumed by borders.
const BODY_CHROME_ROWS: u16 = 2;

pub fn render(frame: &mut Frame, app: &mut App) {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(1), // Tab strip
            Constraint::Length(1), // Search bar
            Constraint::Min(0),    // Body
            Constraint::Length(1), // Footer
        ])
        .split(frame.area());

    render_header(frame, app, main_chunks[0]);
    render_tabs(frame, app, main_chunks[1]);
    render_search(frame, app, main_chunks[2]);

    // Report the body height back to the app before drawing it; the
    // proximity observer and scroll clamping both depend on it.
    app.viewport_rows = main_chunks[3].height.saturating_sub(BODY_CHROME_ROWS) as usize;
    render_body(frame, app, main_chunks[3]);

    render_footer(frame, app, main_chunks[4]);

    if app.show_info {
        render_info_modal(frame, app);
    }
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let header_text = vec![Line::from(vec![
        Span::styled(
            "  Unicode & Emoji Reference ",
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("· {}/{} characters", app.filtered_count(), app.total_count()),
            Style::default().fg(theme.fg_dim),
        ),
    ])];

    let header = Paragraph::new(header_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.accent)),
        )
        .style(Style::default().bg(theme.bg));

    frame.render_widget(header, area);
}

fn render_tabs(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let active = app.tab_index();

    let tab_style = |is_active: bool| {
        if is_active {
            Style::default()
                .fg(theme.bg)
                .bg(theme.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.fg_dim)
        }
    };

    let mut spans: Vec<Span> = Vec::new();
    spans.push(Span::styled(
        format!(" All ({}) ", app.total_count()),
        tab_style(active == 0),
    ));
    spans.push(Span::raw(" "));
    for (i, category) in app.dataset.categories.iter().enumerate() {
        spans.push(Span::styled(
            format!(
                " {} {} ({}) ",
                category.icon,
                category.name,
                category.items.len()
            ),
            tab_style(active == i + 1),
        ));
        spans.push(Span::raw(" "));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_search(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let line = if app.search_mode {
        Line::from(vec![
            Span::styled(" /", Style::default().fg(theme.secondary)),
            Span::styled(
                app.query.clone(),
                Style::default()
                    .fg(theme.secondary)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("▌", Style::default().fg(theme.secondary)),
        ])
    } else if app.query.is_empty() {
        Line::from(Span::styled(
            " Press / to search by name, glyph, entity, or code point",
            Style::default().fg(theme.fg_dim),
        ))
    } else {
        Line::from(vec![
            Span::styled(" filter: ", Style::default().fg(theme.fg_dim)),
            Span::styled(app.query.clone(), Style::default().fg(theme.secondary)),
        ])
    };

    frame.render_widget(Paragraph::new(line), area);
}

fn render_body(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let view = app.view();

    if view.is_empty() {
        let empty = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "No characters found",
                Style::default().fg(theme.fg).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Try adjusting your search",
                Style::default().fg(theme.fg_dim),
            )),
        ])
        .centered()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.fg_dim)),
        );
        frame.render_widget(empty, area);
        return;
    }

    let rows = app.rows();
    let visible = rows
        .iter()
        .enumerate()
        .skip(app.scroll)
        .take(app.viewport_rows);

    let items: Vec<ListItem> = visible
        .map(|(pos, row)| {
            let is_selected = pos == app.selected_index;
            match *row {
                Row::Header { cat } => {
                    let fc = &view[cat];
                    let state = app.section(&fc.category.id);
                    let chevron = if state.is_collapsed() { "▶" } else { "▼" };
                    let content = format!(
                        "{} {} {} ({})",
                        chevron,
                        fc.category.icon,
                        fc.category.name,
                        fc.items.len()
                    );
                    let style = if is_selected {
                        Style::default()
                            .fg(theme.bg)
                            .bg(theme.accent)
                            .add_modifier(Modifier::BOLD)
                    } else {
                        Style::default()
                            .fg(theme.accent)
                            .add_modifier(Modifier::BOLD)
                    };
                    ListItem::new(content).style(style)
                }
                Row::Placeholder { .. } => ListItem::new("    ⋯ loading")
                    .style(Style::default().fg(theme.fg_dim)),
                Row::Item { cat, item } => {
                    let ch = view[cat].items[item];
                    let style = if is_selected {
                        Style::default().fg(theme.bg).bg(theme.accent)
                    } else {
                        Style::default().fg(theme.fg)
                    };
                    let line = Line::from(vec![
                        Span::raw(format!("    {:<3} ", ch.glyph)),
                        Span::raw(format!("{:<44} ", ch.description)),
                        Span::styled(
                            format!("{:<10} ", ch.entity()),
                            if is_selected {
                                style
                            } else {
                                Style::default().fg(theme.secondary)
                            },
                        ),
                        Span::styled(
                            ch.hex_label(),
                            if is_selected {
                                style
                            } else {
                                Style::default().fg(theme.fg_dim)
                            },
                        ),
                    ]);
                    ListItem::new(line).style(style)
                }
            }
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Characters")
            .border_style(Style::default().fg(theme.accent)),
    );

    frame.render_widget(list, area);
}

fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;

    // An active toast takes over the footer line.
    if let Some(toast) = &app.toast {
        let bg = match toast.kind() {
            ToastKind::Success => theme.success,
            ToastKind::Error => theme.error,
        };
        let footer = Paragraph::new(Span::styled(
            format!(" {} ", toast.message()),
            Style::default()
                .fg(theme.bg)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ));
        frame.render_widget(footer, area);
        return;
    }

    let help_text = if app.search_mode {
        "[Esc] Done  [↑↓] Navigate  [Enter] Copy glyph  type to filter"
    } else {
        "[↑↓/jk] Navigate  [←→/hl] Collapse/Expand  [Enter] Copy  [e] Copy entity  [Tab] Category  [/] Search  [p] PDF  [i] Info  [q] Quit"
    };

    let footer = Paragraph::new(help_text)
        .style(Style::default().fg(theme.fg_dim))
        .block(Block::default());

    frame.render_widget(footer, area);
}

fn render_info_modal(frame: &mut Frame, app: &App) {
    let theme = &app.theme;
    let area = centered_rect(56, 14, frame.area());

    let text = vec![
        Line::from(Span::styled(
            "Glyphref",
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Enter      copy the selected glyph"),
        Line::from("e          copy the HTML entity (&#...;)"),
        Line::from("/          search; Esc leaves search"),
        Line::from("Tab        next category tab (BackTab: previous)"),
        Line::from("← →        collapse / expand a section"),
        Line::from("p          export the current view as PDF"),
        Line::from("q          quit"),
        Line::from(""),
        Line::from(Span::styled(
            "Press i or Esc to close",
            Style::default().fg(theme.fg_dim),
        )),
    ];

    let modal = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Help ")
                .border_style(Style::default().fg(theme.accent)),
        )
        .style(Style::default().bg(theme.bg))
        .wrap(Wrap { trim: true });

    frame.render_widget(Clear, area);
    frame.render_widget(modal, area);
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect {
        x,
        y,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}
