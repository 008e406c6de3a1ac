//! Diagnostic formatting for error items
//!
//! Renders an item (usually one tagged `ItemType::ERROR`) as a report with
//! its location and, when the source text is available, the offending line
//! with a caret under the item's position.

use colored::Colorize;

use crate::item::LexItem;
use crate::registry;

/// Diagnostic information for displaying an item with context
pub struct Diagnostic {
    kind: String,
    message: String,
    pos: usize,
    line: usize,
    source: Option<String>,
}

impl Diagnostic {
    /// Create a new diagnostic from an item
    pub fn new<I: LexItem + ?Sized>(item: &I) -> Self {
        Self {
            kind: registry::name_of(item.item_type()),
            message: item.value().to_string(),
            pos: item.pos(),
            line: item.line(),
            source: None,
        }
    }

    /// Create a diagnostic with source code context.
    ///
    /// The item's `pos` is taken as a byte offset into `source`.
    pub fn with_source<I: LexItem + ?Sized>(item: &I, source: &str) -> Self {
        Self {
            source: Some(source.to_string()),
            ..Self::new(item)
        }
    }

    /// Format the diagnostic with color and context
    pub fn format(&self) -> String {
        let mut output = String::new();

        // Header
        output.push_str(&format!("{}: ", self.kind.red().bold()));
        output.push_str(&self.message);
        output.push('\n');

        output.push_str(&format!(
            "  {} line {}, pos {}\n",
            "-->".blue().bold(),
            self.line,
            self.pos
        ));

        if let Some(ref source) = self.source {
            output.push_str(&self.format_source_context(source));
        }

        output
    }

    /// Format the source line containing `pos`, plus its neighbours
    fn format_source_context(&self, source: &str) -> String {
        let mut output = String::new();

        if self.pos > source.len() || !source.is_char_boundary(self.pos) {
            return output;
        }

        let lines: Vec<&str> = source.split('\n').collect();
        let line_idx = source[..self.pos].matches('\n').count();
        let line_start = source[..self.pos].rfind('\n').map_or(0, |i| i + 1);
        let column = source[line_start..self.pos].chars().count();

        // Label with the caller's line counter when it looks sane
        let label = if self.line > line_idx { self.line } else { line_idx + 1 };
        let next_label = label.checked_add(1);
        let line_num_width = next_label.unwrap_or(label).to_string().len();

        if line_idx > 0 && label > 1 {
            output.push_str(&format!(
                "  {} {}\n",
                format!("{:width$}", label - 1, width = line_num_width).blue(),
                lines[line_idx - 1].trim_end_matches('\r')
            ));
        }

        output.push_str(&format!(
            "  {} {}\n",
            format!("{:width$}", label, width = line_num_width)
                .blue()
                .bold(),
            lines[line_idx].trim_end_matches('\r')
        ));

        let indicator_padding = " ".repeat(line_num_width + 3 + column);
        output.push_str(&format!("{}{}\n", indicator_padding, "^".red().bold()));

        if let (Some(next_label), true) = (next_label, line_idx + 1 < lines.len()) {
            output.push_str(&format!(
                "  {} {}\n",
                format!("{:width$}", next_label, width = line_num_width).blue(),
                lines[line_idx + 1].trim_end_matches('\r')
            ));
        }

        output
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.format())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::Item;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_diagnostic_without_source() {
        let item = Item::error(5, 2, "unexpected character");
        let diag = Diagnostic::new(&item);

        let formatted = diag.format();
        assert!(formatted.contains("Error"));
        assert!(formatted.contains("unexpected character"));
        assert!(formatted.contains("line 2, pos 5"));
    }

    #[test]
    fn test_diagnostic_with_source() {
        colored::control::set_override(false);
        let source = "let x = 42\nlet y = @\nlet z = 10";
        let item = Item::error(19, 2, "unexpected char '@'");
        let diag = Diagnostic::with_source(&item, source);

        let formatted = diag.format();
        let lines: Vec<&str> = formatted.lines().collect();
        assert_eq!(lines[0], "Error: unexpected char '@'");
        assert_eq!(lines[2], "  1 let x = 42");
        assert_eq!(lines[3], "  2 let y = @");
        assert_eq!(lines[4], "            ^");
        assert_eq!(lines[5], "  3 let z = 10");
    }

    #[test]
    fn test_diagnostic_position_out_of_range() {
        let item = Item::error(500, 1, "bad offset");
        let formatted = Diagnostic::with_source(&item, "short").format();
        assert!(formatted.contains("bad offset"));
        assert_eq!(formatted.lines().count(), 2);
    }

    #[test]
    fn test_diagnostic_not_on_char_boundary() {
        let item = Item::error(1, 1, "mid-char");
        let formatted = Diagnostic::with_source(&item, "é").format();
        assert_eq!(formatted.lines().count(), 2);
    }

    #[test]
    fn test_diagnostic_line_at_max() {
        colored::control::set_override(false);
        let item = Item::error(0, usize::MAX, "bad");
        let formatted = Diagnostic::with_source(&item, "a\nb").format();
        let lines: Vec<&str> = formatted.lines().collect();
        let width = usize::MAX.to_string().len();

        assert_eq!(lines[2], format!("  {} a", usize::MAX));
        assert_eq!(lines[3], format!("{}^", " ".repeat(width + 3)));
        // no row after the last representable line number
        assert_eq!(lines.len(), 4);
    }
}
