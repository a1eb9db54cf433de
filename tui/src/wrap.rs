//! Width-aware word wrapping.
//!
//! Content is wrapped before it reaches ratatui so the renderer knows the
//! exact line count, which scroll clamping and section anchors depend on.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Wrap `text` to `width` columns. Newlines are hard breaks, runs of
/// whitespace collapse to one space, and words wider than `width` are split
/// on grapheme boundaries. Always returns at least one line.
pub(crate) fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut line = String::new();
        let mut line_width = 0;

        for word in paragraph.split_whitespace() {
            let word_width = word.width();
            let gap = usize::from(line_width > 0);

            if line_width + gap + word_width <= width {
                if gap == 1 {
                    line.push(' ');
                }
                line.push_str(word);
                line_width += gap + word_width;
                continue;
            }

            if line_width > 0 {
                lines.push(std::mem::take(&mut line));
                line_width = 0;
            }

            if word_width <= width {
                line.push_str(word);
                line_width = word_width;
                continue;
            }

            for grapheme in word.graphemes(true) {
                let g_width = grapheme.width();
                if line_width + g_width > width && line_width > 0 {
                    lines.push(std::mem::take(&mut line));
                    line_width = 0;
                }
                line.push_str(grapheme);
                line_width += g_width;
            }
        }

        lines.push(line);
    }

    lines
}

/// Pad with spaces to exactly `width` columns (truncating if wider).
pub(crate) fn fit_to_width(text: &str, width: usize) -> String {
    let mut out = String::with_capacity(width);
    let mut used = 0;
    for grapheme in text.graphemes(true) {
        let g_width = grapheme.width();
        if used + g_width > width {
            break;
        }
        out.push_str(grapheme);
        used += g_width;
    }
    out.extend(std::iter::repeat_n(' ', width - used));
    out
}

#[cfg(test)]
mod tests {
    use unicode_width::UnicodeWidthStr;

    use super::{fit_to_width, wrap_text};

    #[test]
    fn wraps_on_word_boundaries() {
        assert_eq!(
            wrap_text("Now faith is the substance", 10),
            ["Now faith", "is the", "substance"]
        );
    }

    #[test]
    fn splits_words_wider_than_line() {
        assert_eq!(wrap_text("abcdefghij", 4), ["abcd", "efgh", "ij"]);
    }

    #[test]
    fn newlines_are_hard_breaks() {
        assert_eq!(wrap_text("one\n\ntwo", 20), ["one", "", "two"]);
        assert_eq!(wrap_text("", 20), [""]);
    }

    #[test]
    fn collapses_whitespace() {
        assert_eq!(wrap_text("  a   b\tc  ", 20), ["a b c"]);
    }

    #[test]
    fn wide_graphemes_respect_width() {
        for line in wrap_text("主の祈り 主の祈り 主の祈り", 9) {
            assert!(line.width() <= 9, "{line:?} is too wide");
        }
    }

    #[test]
    fn fit_pads_and_truncates() {
        assert_eq!(fit_to_width("ab", 4), "ab  ");
        assert_eq!(fit_to_width("abcdef", 4), "abcd");
        assert_eq!(fit_to_width("主主主", 5), "主主 ");
    }
}
