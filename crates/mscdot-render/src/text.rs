//! Text helpers for dot attribute values.

mod wrap;

pub use wrap::{split_at_columns, text_columns, wrap_text};

/// Escapes `text` for use inside a double-quoted dot string.
///
/// Every `"` becomes `\"`. A run of backslashes directly before a quote, or at the very end of
/// the text (where the closing quote follows), is doubled so it reads as literal backslashes and
/// cannot swallow the quote.
pub fn escape_quotes(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    let mut backslashes = 0usize;
    for ch in text.chars() {
        match ch {
            '\\' => {
                backslashes += 1;
                continue;
            }
            '"' => {
                push_backslashes(&mut out, backslashes * 2);
                out.push_str("\\\"");
            }
            _ => {
                push_backslashes(&mut out, backslashes);
                out.push(ch);
            }
        }
        backslashes = 0;
    }
    push_backslashes(&mut out, backslashes * 2);
    out
}

fn push_backslashes(out: &mut String, count: usize) {
    out.extend(std::iter::repeat_n('\\', count));
}

/// Renders `text` as the body of a quoted dot attribute value: wrapped at `width` columns,
/// fragments escaped and joined by line breaks.
pub fn render_attribute_text(text: &str, width: usize) -> String {
    wrap_text(text, width)
        .iter()
        .map(|line| escape_quotes(line))
        .collect::<Vec<_>>()
        .join("\n")
}
