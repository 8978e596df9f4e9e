//! Structural transliteration of markup into text.

use super::frame::RenderStack;
use super::lexer::{Lexer, Token};
use crate::ydict::codec::charset;

/// Render markup as plain text.
///
/// Every paragraph break becomes one `\n` and every `\tab` one `\t`.
/// Nothing is trimmed, indented or decorated, and hidden blocks are kept,
/// which makes this the fallback when [`render_pretty`](super::render_pretty)
/// comes back empty.
pub fn render_plain(markup: &[u8]) -> String {
    let mut stack = RenderStack::new();
    let mut out = String::with_capacity(markup.len());

    for token in Lexer::new(markup) {
        if stack.apply(token) {
            continue;
        }
        match token {
            Token::ParagraphBreak => out.push('\n'),
            Token::Tab => out.push('\t'),
            Token::Hex(byte) | Token::Byte(byte) | Token::Literal(byte) => {
                charset::push_decoded(&mut out, byte, stack.top().phonetic)
            }
            Token::Unicode(c) => out.push(c),
            _ => {}
        }
    }

    out
}
