//! Layout for the categorized-verse view.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use cheatsheet_engine::{App, CategoryBody, Verse, VerseCheatsheet};
use cheatsheet_types::sanitize_terminal_text;

use crate::theme::{Glyphs, Palette, styles};
use crate::wrap::{fit_to_width, wrap_text};
use crate::ContentLayout;

pub(crate) const TRANSLATION_NOTE: &str =
    "All Bible verses are from the Douay-Rheims, Complete: Challoner Revision Bible";
pub(crate) const NO_VERSES: &str = "No verses available";

const BODY_INDENT: usize = 4;

pub(crate) fn layout(
    doc: &VerseCheatsheet,
    app: &App,
    width: usize,
    palette: &Palette,
    glyphs: &Glyphs,
) -> ContentLayout {
    let mut out = ContentLayout::default();

    for line in wrap_text(TRANSLATION_NOTE, width) {
        out.lines
            .push(Line::styled(line, styles::note(palette)).centered());
    }
    out.lines.push(Line::styled(
        glyphs.rule.repeat(width),
        Style::default().fg(palette.secondary),
    ));
    out.lines.push(Line::default());

    for (index, category) in doc.categories.iter().enumerate() {
        let expanded = app.accordion().is_expanded(&category.name);
        out.anchors.push(out.lines.len());
        out.lines.push(section_header(
            &category.name,
            category.verse_count(),
            index == app.cursor(),
            expanded,
            width,
            palette,
            glyphs,
        ));

        if !expanded {
            continue;
        }

        let indent = " ".repeat(BODY_INDENT);
        let inner_width = width.saturating_sub(BODY_INDENT);

        if let Some(description) = &category.description {
            out.lines.push(Line::default());
            for line in wrap_text(&sanitize_terminal_text(description), inner_width) {
                out.lines.push(Line::styled(
                    format!("{indent}{line}"),
                    Style::default().fg(palette.text_secondary),
                ));
            }
        }
        out.lines.push(Line::default());

        match category.body() {
            CategoryBody::Subcategories(subcategories) => {
                for (i, sub) in subcategories.iter().enumerate() {
                    if i > 0 {
                        out.lines.push(Line::default());
                    }
                    out.lines.push(Line::from(vec![
                        Span::raw(indent.clone()),
                        Span::styled(
                            sanitize_terminal_text(&sub.name).into_owned(),
                            Style::default()
                                .fg(palette.secondary_dark)
                                .add_modifier(Modifier::BOLD),
                        ),
                    ]));
                    let name_width = sub.name.width().min(inner_width);
                    out.lines.push(Line::styled(
                        format!("{indent}{}", glyphs.rule.repeat(name_width)),
                        styles::rule(palette),
                    ));
                    push_verses(
                        &mut out.lines,
                        &sub.verses,
                        BODY_INDENT + 2,
                        width,
                        palette,
                        glyphs,
                    );
                }
            }
            CategoryBody::Verses(verses) => {
                push_verses(&mut out.lines, verses, BODY_INDENT, width, palette, glyphs);
            }
            CategoryBody::Empty => {
                out.lines.push(Line::styled(
                    format!("{indent}{NO_VERSES}"),
                    styles::muted(palette),
                ));
            }
        }
        out.lines.push(Line::default());
    }

    out
}

fn section_header(
    name: &str,
    verse_count: usize,
    selected: bool,
    expanded: bool,
    width: usize,
    palette: &Palette,
    glyphs: &Glyphs,
) -> Line<'static> {
    let name = sanitize_terminal_text(name).into_owned();
    let marker = if selected { glyphs.cursor } else { " " };
    let toggle = if expanded {
        glyphs.expanded
    } else {
        glyphs.collapsed
    };
    let count = match verse_count {
        1 => "1 verse".to_string(),
        n => format!("{n} verses"),
    };

    let lead_width = marker.width() + 1 + toggle.width() + 1;
    let name_room = width.saturating_sub(lead_width);
    let name_width = name.width().min(name_room);
    let spare = name_room - name_width;
    let (count, pad) = if spare > count.width() + 1 {
        let pad = spare - count.width();
        (count, pad)
    } else {
        (String::new(), spare)
    };

    let mut name_style = styles::heading(palette);
    if expanded {
        name_style = name_style.add_modifier(Modifier::UNDERLINED);
    }

    let line = Line::from(vec![
        Span::styled(marker.to_string(), Style::default().fg(palette.primary)),
        Span::raw(" "),
        Span::styled(
            toggle.to_string(),
            Style::default().fg(palette.secondary_dark),
        ),
        Span::raw(" "),
        Span::styled(fit_to_width(&name, name_width), name_style),
        Span::raw(" ".repeat(pad)),
        Span::styled(count, styles::muted(palette)),
    ]);

    if selected {
        line.style(Style::default().bg(palette.bg_highlight))
    } else {
        line
    }
}

/// One card per verse: reference chip, optional note, text behind a card edge.
fn push_verses(
    lines: &mut Vec<Line<'static>>,
    verses: &[Verse],
    indent: usize,
    width: usize,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let pad = " ".repeat(indent);
    let edge = format!("{} ", glyphs.card_edge);
    let text_width = width.saturating_sub(indent + edge.width());

    for (i, verse) in verses.iter().enumerate() {
        if i > 0 {
            lines.push(Line::default());
        }
        let reference = sanitize_terminal_text(&verse.reference);
        lines.push(Line::from(vec![
            Span::raw(pad.clone()),
            Span::styled(
                format!(" {} {reference} ", glyphs.reference),
                styles::chip(palette),
            ),
        ]));

        if let Some(note) = &verse.note {
            for line in wrap_text(&sanitize_terminal_text(note), text_width) {
                lines.push(Line::from(vec![
                    Span::raw(pad.clone()),
                    Span::styled(edge.clone(), Style::default().fg(palette.secondary)),
                    Span::styled(line, styles::note(palette)),
                ]));
            }
        }

        for line in wrap_text(&sanitize_terminal_text(&verse.text), text_width) {
            lines.push(Line::from(vec![
                Span::raw(pad.clone()),
                Span::styled(edge.clone(), Style::default().fg(palette.secondary)),
                Span::styled(line, styles::body(palette)),
            ]));
        }
    }
}
