//! Greedy column-based word wrapping.
//!
//! Tabs and raw newlines collapse into a single space; the two-character sequence `\n` in the
//! source text is an explicit line break. Widths are display columns (`unicode-width`), so CJK
//! text wraps at half the character count of ASCII text.

use std::collections::VecDeque;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub fn text_columns(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

/// Wraps `text` into lines of at most `width` columns, breaking at spaces where possible.
///
/// Spacing is kept as written: joining the lines with a single space gives back the text
/// (after whitespace collapsing) unless a word had to be split. Words wider than `width` are split at the column limit. A `width` of zero disables wrapping
/// (explicit `\n` breaks still apply). Never returns an empty vector.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let collapsed = collapse_breaking_whitespace(text);

    let mut lines: Vec<String> = Vec::new();
    for line in collapsed.split("\\n") {
        if width == 0 {
            lines.push(line.to_string());
        } else {
            lines.extend(wrap_line(line, width));
        }
    }

    if lines.is_empty() {
        vec![String::new()]
    } else {
        lines
    }
}

fn collapse_breaking_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_run = false;
    for ch in text.chars() {
        if matches!(ch, '\t' | '\n' | '\r') {
            if !in_run {
                out.push(' ');
            }
            in_run = true;
        } else {
            out.push(ch);
            in_run = false;
        }
    }
    out
}

/// Words and single spaces, in order. Every space is its own token so runs of spaces survive.
fn split_line_to_tokens(line: &str) -> VecDeque<String> {
    let mut tokens = VecDeque::new();
    for (idx, word) in line.split(' ').enumerate() {
        if idx > 0 {
            tokens.push_back(" ".to_string());
        }
        if !word.is_empty() {
            tokens.push_back(word.to_string());
        }
    }
    tokens
}

fn wrap_line(line: &str, width: usize) -> Vec<String> {
    let mut tokens = split_line_to_tokens(line);
    let mut out: Vec<String> = Vec::new();
    let mut cur = String::new();

    while let Some(tok) = tokens.pop_front() {
        if text_columns(&cur) + text_columns(&tok) <= width {
            cur.push_str(&tok);
            continue;
        }

        // The space a break lands on is the only one dropped.
        if tok == " " {
            out.push(std::mem::take(&mut cur));
            continue;
        }

        if !cur.is_empty() {
            if cur.ends_with(' ') {
                cur.pop();
            }
            if !cur.is_empty() {
                out.push(std::mem::take(&mut cur));
            }
            tokens.push_front(tok);
            continue;
        }

        // Token itself does not fit on an empty line; split by columns.
        let (head, tail) = split_at_columns(&tok, width);
        out.push(head);
        if !tail.is_empty() {
            tokens.push_front(tail);
        }
    }

    if !cur.is_empty() || out.is_empty() {
        out.push(cur);
    }
    out
}

/// Splits `token` after the last character that still fits in `width` columns. The head always
/// holds at least one character so callers make progress on over-wide glyphs.
pub fn split_at_columns(token: &str, width: usize) -> (String, String) {
    let mut used = 0usize;
    let mut split_at = token.len();
    for (idx, ch) in token.char_indices() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > width && idx > 0 {
            split_at = idx;
            break;
        }
        used += w;
    }
    let (head, tail) = token.split_at(split_at);
    (head.to_string(), tail.to_string())
}
