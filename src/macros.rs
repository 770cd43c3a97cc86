//! Utility macros for the front end.
//!
//! - `MK_TOKEN!` - Creates a Token instance spanning a byte range of the source

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$start` - Byte offset of the first byte of the lexeme
/// * `$end` - Byte offset one past the last byte of the lexeme
/// * `$file` - `Rc<String>` naming the source
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Number("42"), 0, 2, lexer.file);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $start:expr, $end:expr, $file:expr) => {
        Token {
            kind: $kind,
            span: Span {
                start: Position($start as u32, Rc::clone(&$file)),
                end: Position($end as u32, Rc::clone(&$file)),
            },
        }
    };
}
