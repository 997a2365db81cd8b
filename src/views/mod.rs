//! Text rendering of cards, grids, readings and page chrome.
//!
//! Views are plain values built from borrowed data; `render()` returns the
//! text to print. Click handlers are borrowed closures so a view never owns
//! application state.

pub mod card;
pub mod detail;
pub mod grid;
pub mod layout;
pub mod reading;

pub use card::{CardSize, CardView};
pub use detail::CardDetailView;
pub use grid::CardGridView;
pub use layout::{ErrorBanner, Layout, Navigation};
pub use reading::ReadingView;

/// Callback invoked with the clicked card.
pub type CardClick<'a> = &'a dyn Fn(&crate::cards::TarotCard);

/// Fit `text` into exactly `width` columns, truncating with an ellipsis.
pub(crate) fn fit(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len <= width {
        let pad = width - len;
        let left = pad / 2;
        format!("{}{}{}", " ".repeat(left), text, " ".repeat(pad - left))
    } else if width == 0 {
        String::new()
    } else {
        let mut cut: String = text.chars().take(width - 1).collect();
        cut.push('…');
        cut
    }
}

/// Greedy word wrap to `width` columns.
pub(crate) fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();

    for word in text.split_whitespace() {
        let needed = if line.is_empty() {
            word.chars().count()
        } else {
            line.chars().count() + 1 + word.chars().count()
        };
        if needed > width && !line.is_empty() {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

/// Place blocks of lines side by side, padding shorter blocks.
pub(crate) fn join_columns(blocks: &[Vec<String>], gap: usize) -> Vec<String> {
    let height = blocks.iter().map(Vec::len).max().unwrap_or(0);
    let widths: Vec<usize> = blocks
        .iter()
        .map(|b| b.iter().map(|l| l.chars().count()).max().unwrap_or(0))
        .collect();

    (0..height)
        .map(|row| {
            let mut out = String::new();
            for (i, block) in blocks.iter().enumerate() {
                if i > 0 {
                    out.push_str(&" ".repeat(gap));
                }
                let cell = block.get(row).map(String::as_str).unwrap_or("");
                out.push_str(cell);
                out.push_str(&" ".repeat(widths[i] - cell.chars().count()));
            }
            out.trim_end().to_string()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit() {
        assert_eq!(fit("abc", 7), "  abc  ");
        assert_eq!(fit("abcdef", 4), "abc…");
        assert_eq!(fit("x", 0), "");
    }

    #[test]
    fn test_wrap() {
        let lines = wrap("the quick brown fox jumps", 10);
        assert_eq!(lines, vec!["the quick", "brown fox", "jumps"]);
        assert!(wrap("", 10).is_empty());
    }

    #[test]
    fn test_join_columns() {
        let a = vec!["ab".to_string(), "cd".to_string()];
        let b = vec!["x".to_string()];
        assert_eq!(join_columns(&[a, b], 1), vec!["ab x", "cd"]);
    }
}
