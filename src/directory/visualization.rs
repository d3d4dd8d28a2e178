//! Traversal-order projection used for diagnostic display.

use std::fmt;

/// Glyph used between names when no display override is configured
pub const DEFAULT_SEPARATOR: &str = "→";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VizToken {
    /// A contact name, in chain position
    Name(String),
    /// Adjacency between two consecutive nodes
    Separator,
}

impl VizToken {
    pub fn is_separator(&self) -> bool {
        matches!(self, VizToken::Separator)
    }
}

impl fmt::Display for VizToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VizToken::Name(name) => f.write_str(name),
            VizToken::Separator => f.write_str(DEFAULT_SEPARATOR),
        }
    }
}

/// Render tokens on one line, drawing separators with `separator`.
pub fn render_line(tokens: &[VizToken], separator: &str) -> String {
    tokens
        .iter()
        .map(|token| match token {
            VizToken::Name(name) => name.as_str(),
            VizToken::Separator => separator,
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_line() {
        let tokens = vec![
            VizToken::Name("A".to_string()),
            VizToken::Separator,
            VizToken::Name("B".to_string()),
        ];
        assert_eq!(render_line(&tokens, "->"), "A -> B");
        assert_eq!(render_line(&tokens, DEFAULT_SEPARATOR), "A → B");
        assert_eq!(render_line(&[], "->"), "");
    }

    #[test]
    fn test_display() {
        assert_eq!(VizToken::Separator.to_string(), "→");
        assert!(VizToken::Separator.is_separator());
        assert_eq!(VizToken::Name("Ana".to_string()).to_string(), "Ana");
    }
}
