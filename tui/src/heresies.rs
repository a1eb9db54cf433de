//! Layout for the heresies/teachings view.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use cheatsheet_engine::{HeresiesChecklist, Heresy};
use cheatsheet_types::sanitize_terminal_text;

use crate::theme::{Glyphs, Palette, styles};
use crate::wrap::{fit_to_width, wrap_text};
use crate::ContentLayout;

pub(crate) const TEACHINGS_HEADING: &str = "Catholic Teachings About Jesus";
pub(crate) const HERESIES_HEADING: &str = "Common Heresies";
pub(crate) const FALSE_TEACHING_LABEL: &str = "False Teaching:";
pub(crate) const CATHOLIC_TRUTH_LABEL: &str = "Catholic Truth:";

/// Content width from which false teaching and truth sit side by side.
pub(crate) const SIDE_BY_SIDE_MIN_WIDTH: usize = 80;

pub(crate) fn layout(
    doc: &HeresiesChecklist,
    width: usize,
    palette: &Palette,
    glyphs: &Glyphs,
) -> ContentLayout {
    let mut out = ContentLayout::default();

    push_heading(&mut out.lines, TEACHINGS_HEADING, width, palette, glyphs);
    let bullet = format!("  {} ", glyphs.teaching);
    let hang = " ".repeat(bullet.width());
    for teaching in &doc.catholic_teachings_about_jesus {
        let wrapped = wrap_text(
            &sanitize_terminal_text(teaching),
            width.saturating_sub(bullet.width()),
        );
        for (i, line) in wrapped.into_iter().enumerate() {
            let lead = if i == 0 {
                Span::styled(bullet.clone(), Style::default().fg(palette.primary))
            } else {
                Span::raw(hang.clone())
            };
            out.lines
                .push(Line::from(vec![lead, Span::styled(line, styles::body(palette))]));
        }
    }

    out.lines.push(Line::default());
    push_heading(&mut out.lines, HERESIES_HEADING, width, palette, glyphs);

    let count = doc.heresies.len();
    for (i, heresy) in doc.heresies.iter().enumerate() {
        out.lines.push(Line::styled(
            sanitize_terminal_text(&heresy.name).into_owned(),
            styles::heading(palette),
        ));
        if width >= SIDE_BY_SIDE_MIN_WIDTH {
            push_side_by_side(&mut out.lines, heresy, width, palette, glyphs);
        } else {
            push_stacked(&mut out.lines, heresy, width, palette, glyphs);
        }
        if i + 1 < count {
            out.lines.push(Line::default());
            out.lines.push(Line::styled(
                glyphs.rule.repeat(width),
                styles::rule(palette),
            ));
            out.lines.push(Line::default());
        }
    }

    out
}

fn push_heading(
    lines: &mut Vec<Line<'static>>,
    title: &str,
    width: usize,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    lines.push(Line::styled(title.to_string(), styles::heading(palette)).centered());
    lines.push(Line::styled(
        glyphs.rule.repeat(width),
        Style::default().fg(palette.secondary),
    ));
    lines.push(Line::default());
}

fn label_style(color: ratatui::style::Color) -> Style {
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

/// A label line followed by wrapped text, as (text, style) rows.
fn column(
    glyph: &str,
    label: &str,
    label_style: Style,
    text: &str,
    width: usize,
    palette: &Palette,
) -> Vec<(String, Style)> {
    let mut rows = vec![(format!("{glyph} {label}"), label_style)];
    rows.extend(
        wrap_text(&sanitize_terminal_text(text), width.saturating_sub(2))
            .into_iter()
            .map(|line| (format!("  {line}"), styles::body(palette))),
    );
    rows
}

fn push_side_by_side(
    lines: &mut Vec<Line<'static>>,
    heresy: &Heresy,
    width: usize,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let divider = format!(" {} ", glyphs.column_divider);
    let col_width = width.saturating_sub(divider.width()) / 2;
    let left = column(
        glyphs.false_teaching,
        FALSE_TEACHING_LABEL,
        label_style(palette.error),
        &heresy.false_teaching,
        col_width,
        palette,
    );
    let right = column(
        glyphs.truth,
        CATHOLIC_TRUTH_LABEL,
        label_style(palette.success),
        &heresy.catholic_truth,
        col_width,
        palette,
    );

    let blank = (String::new(), Style::default());
    for row in 0..left.len().max(right.len()) {
        let (l_text, l_style) = left.get(row).unwrap_or(&blank);
        let (r_text, r_style) = right.get(row).unwrap_or(&blank);
        lines.push(Line::from(vec![
            Span::styled(fit_to_width(l_text, col_width), *l_style),
            Span::styled(divider.clone(), styles::rule(palette)),
            Span::styled(r_text.clone(), *r_style),
        ]));
    }
}

fn push_stacked(
    lines: &mut Vec<Line<'static>>,
    heresy: &Heresy,
    width: usize,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let blocks = [
        column(
            glyphs.false_teaching,
            FALSE_TEACHING_LABEL,
            label_style(palette.error),
            &heresy.false_teaching,
            width,
            palette,
        ),
        column(
            glyphs.truth,
            CATHOLIC_TRUTH_LABEL,
            label_style(palette.success),
            &heresy.catholic_truth,
            width,
            palette,
        ),
    ];
    for block in blocks {
        for (text, style) in block {
            lines.push(Line::styled(text, style));
        }
    }
}
