//! Color palettes and glyphs.
//!
//! Deep red and gold on old lace for light mode; soft red and bright gold on
//! near-black for dark mode.

use ratatui::style::{Color, Modifier, Style};

use cheatsheet_types::ui::{ThemeMode, UiOptions};

mod light {
    use super::Color;

    pub const PRIMARY: Color = Color::Rgb(139, 0, 0); // deep red
    pub const SECONDARY: Color = Color::Rgb(218, 165, 32); // golden
    pub const SECONDARY_DARK: Color = Color::Rgb(184, 134, 11);
    pub const BG_DEFAULT: Color = Color::Rgb(253, 245, 230); // old lace
    pub const BG_PAPER: Color = Color::Rgb(255, 250, 240); // floral white
    pub const BG_HIGHLIGHT: Color = Color::Rgb(245, 228, 215);
    pub const BORDER: Color = Color::Rgb(226, 200, 186);
    pub const TEXT_PRIMARY: Color = Color::Rgb(47, 24, 16);
    pub const TEXT_SECONDARY: Color = Color::Rgb(92, 64, 51);
    pub const TEXT_MUTED: Color = Color::Rgb(150, 120, 105);
    pub const ERROR: Color = Color::Rgb(211, 47, 47);
    pub const SUCCESS: Color = Color::Rgb(46, 125, 50);
    pub const ON_PRIMARY: Color = Color::Rgb(255, 255, 254);
}

mod dark {
    use super::Color;

    pub const PRIMARY: Color = Color::Rgb(255, 107, 107); // soft red
    pub const SECONDARY: Color = Color::Rgb(255, 215, 0); // brighter gold
    pub const SECONDARY_DARK: Color = Color::Rgb(255, 192, 0);
    pub const BG_DEFAULT: Color = Color::Rgb(18, 18, 18);
    pub const BG_PAPER: Color = Color::Rgb(30, 30, 30);
    pub const BG_HIGHLIGHT: Color = Color::Rgb(48, 36, 36);
    pub const BORDER: Color = Color::Rgb(72, 50, 50);
    pub const TEXT_PRIMARY: Color = Color::Rgb(232, 232, 232);
    pub const TEXT_SECONDARY: Color = Color::Rgb(176, 176, 176);
    pub const TEXT_MUTED: Color = Color::Rgb(120, 120, 120);
    pub const ERROR: Color = Color::Rgb(244, 67, 54);
    pub const SUCCESS: Color = Color::Rgb(102, 187, 106);
    pub const ON_PRIMARY: Color = Color::Rgb(18, 18, 17);
}

/// Resolved palette. Every widget in a frame draws from the same one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub primary: Color,
    pub secondary: Color,
    pub secondary_dark: Color,
    pub bg_default: Color,
    pub bg_paper: Color,
    pub bg_highlight: Color,
    pub border: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub error: Color,
    pub success: Color,
    pub on_primary: Color,
}

impl Palette {
    #[must_use]
    pub fn light() -> Self {
        Self {
            primary: light::PRIMARY,
            secondary: light::SECONDARY,
            secondary_dark: light::SECONDARY_DARK,
            bg_default: light::BG_DEFAULT,
            bg_paper: light::BG_PAPER,
            bg_highlight: light::BG_HIGHLIGHT,
            border: light::BORDER,
            text_primary: light::TEXT_PRIMARY,
            text_secondary: light::TEXT_SECONDARY,
            text_muted: light::TEXT_MUTED,
            error: light::ERROR,
            success: light::SUCCESS,
            on_primary: light::ON_PRIMARY,
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            primary: dark::PRIMARY,
            secondary: dark::SECONDARY,
            secondary_dark: dark::SECONDARY_DARK,
            bg_default: dark::BG_DEFAULT,
            bg_paper: dark::BG_PAPER,
            bg_highlight: dark::BG_HIGHLIGHT,
            border: dark::BORDER,
            text_primary: dark::TEXT_PRIMARY,
            text_secondary: dark::TEXT_SECONDARY,
            text_muted: dark::TEXT_MUTED,
            error: dark::ERROR,
            success: dark::SUCCESS,
            on_primary: dark::ON_PRIMARY,
        }
    }

    /// Every color in the palette, for consistency checks.
    #[must_use]
    pub fn colors(&self) -> [Color; 13] {
        [
            self.primary,
            self.secondary,
            self.secondary_dark,
            self.bg_default,
            self.bg_paper,
            self.bg_highlight,
            self.border,
            self.text_primary,
            self.text_secondary,
            self.text_muted,
            self.error,
            self.success,
            self.on_primary,
        ]
    }
}

#[must_use]
pub fn palette(mode: ThemeMode) -> Palette {
    match mode {
        ThemeMode::Light => Palette::light(),
        ThemeMode::Dark => Palette::dark(),
    }
}

/// ASCII/Unicode glyphs for icons and spinners.
#[derive(Debug, Clone, Copy)]
pub struct Glyphs {
    pub collapsed: &'static str,
    pub expanded: &'static str,
    pub cursor: &'static str,
    pub reference: &'static str,
    pub card_edge: &'static str,
    pub teaching: &'static str,
    pub false_teaching: &'static str,
    pub truth: &'static str,
    pub rule: &'static str,
    pub column_divider: &'static str,
    pub theme_light: &'static str,
    pub theme_dark: &'static str,
    pub separator: &'static str,
    pub spinner_frames: &'static [&'static str],
}

const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const SPINNER_FRAMES_ASCII: &[&str] = &["|", "/", "-", "\\"];

#[must_use]
pub fn glyphs(options: UiOptions) -> Glyphs {
    if options.ascii_only {
        Glyphs {
            collapsed: ">",
            expanded: "v",
            cursor: ">",
            reference: "*",
            card_edge: "|",
            teaching: "+",
            false_teaching: "x",
            truth: "+",
            rule: "-",
            column_divider: "|",
            theme_light: "L",
            theme_dark: "D",
            separator: "|",
            spinner_frames: SPINNER_FRAMES_ASCII,
        }
    } else {
        Glyphs {
            collapsed: "▸",
            expanded: "▾",
            cursor: "▌",
            reference: "✦",
            card_edge: "│",
            teaching: "✠",
            false_teaching: "✗",
            truth: "✓",
            rule: "─",
            column_divider: "│",
            theme_light: "☀",
            theme_dark: "☾",
            separator: "·",
            spinner_frames: SPINNER_FRAMES,
        }
    }
}

#[must_use]
pub fn spinner_frame(tick: usize, options: UiOptions) -> &'static str {
    let frames = glyphs(options).spinner_frames;
    frames[tick % frames.len()]
}

/// Pre-defined styles for common UI elements.
pub mod styles {
    use super::{Modifier, Palette, Style};

    #[must_use]
    pub fn heading(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.primary)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn chip(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.on_primary)
            .bg(palette.primary)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn note(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.text_secondary)
            .add_modifier(Modifier::ITALIC)
    }

    #[must_use]
    pub fn body(palette: &Palette) -> Style {
        Style::default().fg(palette.text_primary)
    }

    #[must_use]
    pub fn muted(palette: &Palette) -> Style {
        Style::default().fg(palette.text_muted)
    }

    #[must_use]
    pub fn rule(palette: &Palette) -> Style {
        Style::default().fg(palette.border)
    }

    #[must_use]
    pub fn key_hint(palette: &Palette) -> Style {
        Style::default().fg(palette.text_muted)
    }

    #[must_use]
    pub fn key_highlight(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.secondary_dark)
            .add_modifier(Modifier::BOLD)
    }
}
