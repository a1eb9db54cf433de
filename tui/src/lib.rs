//! TUI rendering for the cheatsheet reader using ratatui.
//!
//! The content pane is laid out line by line before rendering so the exact
//! height is known; that height feeds the engine's scroll bounds, and the
//! recorded section anchors resolve pending scroll requests.

mod heresies;
mod input;
mod theme;
mod verses;
mod wrap;

pub use input::{InputPump, handle_events, handle_key};
pub use theme::{Glyphs, Palette, glyphs, palette, spinner_frame, styles};

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Margin, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
};
use unicode_width::UnicodeWidthStr;

use cheatsheet_engine::{App, LoadState, MountedView, Route, ScrollRequest, ThemeMode};

use self::wrap::fit_to_width;

pub(crate) const APP_TITLE: &str = "Catholic Bible Cheatsheet";
pub(crate) const APP_SUBTITLE: &str = "Sacred Scripture & Catholic Teachings";
pub(crate) const ATTRIBUTION: &str = "Based on the Catholic Bible Cheatsheet from Dr. Taylor Marshall at the New Saint Thomas Institute (NSTI)";

const HEADER_HEIGHT: u16 = 4;
const CONTENT_MARGIN: u16 = 2;

/// Pre-wrapped content lines plus the line index of each section header.
#[derive(Debug, Default)]
pub(crate) struct ContentLayout {
    pub(crate) lines: Vec<Line<'static>>,
    pub(crate) anchors: Vec<usize>,
}

enum Body {
    Loading(&'static str),
    Failed(String),
    Content(ContentLayout),
}

fn loading_message(route: Route) -> &'static str {
    match route {
        Route::Verses => "Loading Bible verses...",
        Route::Heresies => "Loading heresies checklist...",
    }
}

/// Main draw function
pub fn draw(frame: &mut Frame, app: &mut App) {
    let palette = palette(app.theme());
    let glyphs = glyphs(app.ui_options());

    let bg_block = Block::default().style(
        Style::default()
            .bg(palette.bg_default)
            .fg(palette.text_primary),
    );
    frame.render_widget(bg_block, frame.area());

    let chunks = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT), // Header
        Constraint::Length(1),             // Tabs
        Constraint::Length(1),             // Spacer
        Constraint::Min(1),                // Content
        Constraint::Length(1),             // Status bar
    ])
    .split(frame.area());

    // Content first: it resolves the scroll offset the header accent reads.
    draw_content(frame, app, chunks[3], &palette, &glyphs);
    draw_header(frame, app, chunks[0], &palette, &glyphs);
    draw_tabs(frame, app, chunks[1], &palette, &glyphs);
    draw_status_bar(frame, app, chunks[4], &palette, &glyphs);
}

fn draw_header(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    // Accent the divider once the content has scrolled away from the top.
    let border_style = if app.is_scrolled() {
        Style::default().fg(palette.secondary)
    } else {
        Style::default().fg(palette.border)
    };
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(border_style)
        .style(Style::default().bg(palette.bg_paper));
    let inner = block.inner(area).inner(Margin {
        horizontal: 1,
        vertical: 0,
    });
    frame.render_widget(block, area);

    let (icon, label) = match app.theme() {
        ThemeMode::Light => (glyphs.theme_light, "light"),
        ThemeMode::Dark => (glyphs.theme_dark, "dark"),
    };
    let indicator = format!("{icon} {label} (t)");
    let [title_area, indicator_area] = Layout::horizontal([
        Constraint::Min(0),
        Constraint::Length(u16::try_from(indicator.width()).unwrap_or(u16::MAX)),
    ])
    .areas(Rect { height: 1, ..inner });

    frame.render_widget(
        Paragraph::new(Span::styled(APP_TITLE, styles::heading(palette))),
        title_area,
    );
    frame.render_widget(
        Paragraph::new(Span::styled(
            indicator,
            Style::default().fg(palette.secondary_dark),
        ))
        .alignment(Alignment::Right),
        indicator_area,
    );

    let width = usize::from(inner.width);
    let rest = Paragraph::new(vec![
        Line::styled(
            fit_to_width(APP_SUBTITLE, width),
            Style::default().fg(palette.text_secondary),
        ),
        Line::styled(fit_to_width(ATTRIBUTION, width), styles::note(palette)),
    ]);
    frame.render_widget(
        rest,
        Rect {
            y: inner.y.saturating_add(1),
            height: inner.height.saturating_sub(1),
            ..inner
        },
    );
}

fn draw_tabs(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let active = app.route();
    let mut spans = Vec::new();
    for (i, route) in Route::ALL.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(
                format!(" {} ", glyphs.separator),
                styles::muted(palette),
            ));
        }
        let label = format!(" {} {} ", route.tab_index() + 1, route.title());
        let style = if *route == active {
            styles::chip(palette)
        } else {
            Style::default().fg(palette.text_secondary)
        };
        spans.push(Span::styled(label, style));
    }
    frame.render_widget(Paragraph::new(Line::from(spans).centered()), area);
}

fn draw_content(frame: &mut Frame, app: &mut App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let text_area = area.inner(Margin {
        horizontal: CONTENT_MARGIN,
        vertical: 0,
    });
    let width = usize::from(text_area.width);

    let view = app.view();
    let body = match view {
        MountedView::Verses(LoadState::Ready(doc)) => {
            Body::Content(verses::layout(doc, app, width, palette, glyphs))
        }
        MountedView::Heresies(LoadState::Ready(doc)) => {
            Body::Content(heresies::layout(doc, width, palette, glyphs))
        }
        MountedView::Verses(LoadState::Failed(message))
        | MountedView::Heresies(LoadState::Failed(message)) => Body::Failed(message.clone()),
        MountedView::Verses(LoadState::Loading) | MountedView::Heresies(LoadState::Loading) => {
            Body::Loading(loading_message(view.route()))
        }
    };

    app.set_viewport_height(text_area.height);
    let request = app.take_scroll_request();

    let layout = match body {
        Body::Content(layout) => layout,
        Body::Loading(message) => {
            app.set_scroll_max(0);
            let spinner = spinner_frame(app.tick_count(), app.ui_options());
            let line = Line::from(vec![
                Span::styled(format!("{spinner} "), Style::default().fg(palette.primary)),
                Span::styled(message, Style::default().fg(palette.text_secondary)),
            ])
            .centered();
            frame.render_widget(Paragraph::new(vec![Line::default(), line]), text_area);
            return;
        }
        Body::Failed(message) => {
            app.set_scroll_max(0);
            let line = Line::styled(
                format!("Error: {message}"),
                Style::default()
                    .fg(palette.error)
                    .add_modifier(Modifier::BOLD),
            )
            .centered();
            frame.render_widget(Paragraph::new(vec![Line::default(), line]), text_area);
            return;
        }
    };

    let height = text_area.height;
    let total = u16::try_from(layout.lines.len()).unwrap_or(u16::MAX);
    app.set_scroll_max(total.saturating_sub(height));
    resolve_scroll_request(app, request, &layout.anchors, height);
    let scroll = app.scroll();
    let (scroll_offset, max_scroll) = (scroll.offset(), scroll.max());

    frame.render_widget(
        Paragraph::new(layout.lines).scroll((scroll_offset, 0)),
        text_area,
    );

    // Only render scrollbar when content exceeds viewport
    if max_scroll > 0 {
        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .begin_symbol(None)
            .end_symbol(None)
            .style(Style::default().fg(palette.border));
        let mut scrollbar_state =
            ScrollbarState::new(usize::from(max_scroll)).position(usize::from(scroll_offset));
        frame.render_stateful_widget(scrollbar, area, &mut scrollbar_state);
    }
}

fn resolve_scroll_request(app: &mut App, request: ScrollRequest, anchors: &[usize], height: u16) {
    let anchor_line = |index: usize| {
        anchors
            .get(index)
            .map(|&line| u16::try_from(line).unwrap_or(u16::MAX))
    };
    match request {
        ScrollRequest::None => {}
        ScrollRequest::Reveal(index) => {
            if let Some(line) = anchor_line(index) {
                app.set_scroll_offset(line);
            }
        }
        ScrollRequest::Follow(index) => {
            let Some(line) = anchor_line(index) else {
                return;
            };
            let offset = app.scroll().offset();
            if line < offset {
                app.set_scroll_offset(line);
            } else if height > 0 && line >= offset.saturating_add(height) {
                app.set_scroll_offset(line - height + 1);
            }
        }
    }
}

fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let hints: &[(&str, &str)] = if app.verses().is_some() {
        &[
            ("1/2", "tabs"),
            ("j/k", "move"),
            ("enter", "expand"),
            ("t", "theme"),
            ("q", "quit"),
        ]
    } else {
        &[("1/2", "tabs"), ("j/k", "scroll"), ("t", "theme"), ("q", "quit")]
    };

    let mut spans = vec![Span::raw(" ")];
    for (i, (key, action)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(
                format!(" {} ", glyphs.separator),
                styles::muted(palette),
            ));
        }
        spans.push(Span::styled(*key, styles::key_highlight(palette)));
        spans.push(Span::styled(format!(" {action}"), styles::key_hint(palette)));
    }

    let location = format!(
        "{} {} {} ",
        app.source_description(),
        glyphs.separator,
        app.location()
    );
    let [hints_area, location_area] = Layout::horizontal([
        Constraint::Min(0),
        Constraint::Length(u16::try_from(location.width()).unwrap_or(u16::MAX)),
    ])
    .areas(area);

    frame.render_widget(Paragraph::new(Line::from(spans)), hints_area);
    frame.render_widget(
        Paragraph::new(Span::styled(location, styles::muted(palette))).alignment(Alignment::Right),
        location_area,
    );
}
