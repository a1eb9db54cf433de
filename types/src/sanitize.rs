//! Terminal text sanitization.
//!
//! Document bodies come from the network and are drawn straight into the
//! terminal, so escape sequences and control characters must never reach
//! the backend.

use std::borrow::Cow;
use std::iter::Peekable;

const ESC: char = '\x1b';
const BEL: char = '\x07';
const C1_CSI: char = '\u{009b}';

/// Strip ANSI escape sequences and control characters, keeping `\n` and `\t`.
///
/// Returns `Cow::Borrowed` when the input is already clean.
///
/// ```
/// use cheatsheet_types::sanitize_terminal_text;
///
/// assert_eq!(sanitize_terminal_text("Jn 3:16"), "Jn 3:16");
/// assert_eq!(sanitize_terminal_text("Jn\x1b[2J 3:16"), "Jn 3:16");
/// ```
#[must_use]
pub fn sanitize_terminal_text(input: &str) -> Cow<'_, str> {
    if !input.chars().any(is_disallowed) {
        return Cow::Borrowed(input);
    }

    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            ESC => skip_escape(&mut chars),
            C1_CSI => skip_csi(&mut chars),
            c if is_disallowed(c) => {}
            c => out.push(c),
        }
    }
    Cow::Owned(out)
}

fn is_disallowed(c: char) -> bool {
    match c {
        '\n' | '\t' => false,
        '\u{0}'..='\u{1f}' | '\u{7f}'..='\u{9f}' => true,
        _ => false,
    }
}

fn skip_escape<I: Iterator<Item = char>>(chars: &mut Peekable<I>) {
    match chars.next() {
        Some('[') => skip_csi(chars),
        Some(']' | 'P' | '^' | '_') => {
            // String sequences end at BEL or ST (ESC \).
            while let Some(c) = chars.next() {
                if c == BEL {
                    break;
                }
                if c == ESC {
                    if chars.peek() == Some(&'\\') {
                        chars.next();
                    }
                    break;
                }
            }
        }
        _ => {}
    }
}

fn skip_csi<I: Iterator<Item = char>>(chars: &mut Peekable<I>) {
    for c in chars.by_ref() {
        if ('\u{40}'..='\u{7e}').contains(&c) {
            break;
        }
    }
}
