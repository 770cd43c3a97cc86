#![allow(clippy::module_inception)]

use std::rc::Rc;

use crate::errors::errors::ErrorTip;

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

/// Byte offset into a source text, tagged with the source's name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position(pub u32, pub Rc<String>);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    /// Byte range of the span inside its source text.
    pub fn range(&self) -> std::ops::Range<usize> {
        self.start.0 as usize..self.end.0 as usize
    }

    /// Smallest span covering both `self` and `other`.
    pub fn to(&self, other: &Span) -> Span {
        Span {
            start: self.start.clone(),
            end: other.end.clone(),
        }
    }
}

/// Finds the line containing `position`.
///
/// Returns the 1-based line number, the line text and the column of `position`
/// within that line, or `None` if `position` lies past the end of `content`.
pub fn get_line_at_position(content: &str, position: u32) -> Option<(usize, String, usize)> {
    let pos = position as usize;

    if pos > content.len() {
        return None;
    }

    let mut start = 0;
    let mut line_number = 1;

    for line in content.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            return Some((line_number, line.to_string(), pos - start));
        }

        start = end;
        line_number += 1;
    }

    // End of input
    if content.is_empty() || content.ends_with('\n') {
        Some((line_number, String::new(), 0))
    } else {
        let last_line = content.rsplit('\n').next().unwrap_or("");
        Some((line_number - 1, last_line.to_string(), last_line.len()))
    }
}

/// Renders a diagnostic against the source it was produced from.
///
/// ```text
/// Error: UnexpectedToken (unknown token when expecting an expression: `)`)
/// -> shell
///   |
/// 1 | 1 + )
///   | ----^
/// ```
pub fn display_error(name: &str, tip: ErrorTip, position: &Position, source: &str) -> String {
    let mut out = String::new();

    if let ErrorTip::None = tip {
        out.push_str(&format!("Error: {}\n", name));
    } else {
        out.push_str(&format!("Error: {} ({})\n", name, tip));
    }
    out.push_str(&format!("-> {}\n", position.1));

    let Some((line, line_text, line_pos)) = get_line_at_position(source, position.0) else {
        return out;
    };

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    out.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    out.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;
    out.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));

    out
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let start = string
        .chars()
        .take_while(|c| *c == ' ' || *c == '\t')
        .count();

    (String::from(&string[start..]), start)
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::{display_error, get_line_at_position, Position};
    use crate::errors::errors::ErrorTip;

    #[test]
    fn test_get_line_at_position() {
        let content = "def foo(a)\n  a*2\n\nfoo(4)\n";

        let (line_number, line, line_pos) = get_line_at_position(content, 4).unwrap();
        assert_eq!(line_number, 1);
        assert_eq!(line, "def foo(a)\n");
        assert_eq!(line_pos, 4);

        let (line_number, line, line_pos) = get_line_at_position(content, 14).unwrap();
        assert_eq!(line_number, 2);
        assert_eq!(line, "  a*2\n");
        assert_eq!(line_pos, 3);

        let (line_number, line, line_pos) = get_line_at_position(content, 20).unwrap();
        assert_eq!(line_number, 4);
        assert_eq!(line, "foo(4)\n");
        assert_eq!(line_pos, 2);

        assert!(get_line_at_position(content, 400).is_none());
    }

    #[test]
    fn test_get_line_at_end_of_input() {
        let (line_number, line, line_pos) = get_line_at_position("1 + (2", 6).unwrap();
        assert_eq!(line_number, 1);
        assert_eq!(line, "1 + (2");
        assert_eq!(line_pos, 6);
    }

    #[test]
    fn test_display_error_points_at_column() {
        let position = Position(4, Rc::new(String::from("shell")));
        let rendered = display_error(
            "UnexpectedToken",
            ErrorTip::Suggestion(String::from("unexpected `)`")),
            &position,
            "1 + ) 2",
        );

        assert_eq!(
            rendered,
            "Error: UnexpectedToken (unexpected `)`)\n-> shell\n  |\n1 | 1 + ) 2\n  | ----^\n"
        );
    }
}
