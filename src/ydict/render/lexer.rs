//! Tokenizer for the dictionary's RTF-like markup stream.
//!
//! Only the handful of control words the dictionary actually emits are
//! classified; every other control word or symbol becomes
//! [`Token::Ignored`] so unknown markup never stops the scan.

use log::trace;

/// One lexical unit of the markup stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// `{`
    GroupOpen,
    /// `}`
    GroupClose,
    /// `\par` or `\line`
    ParagraphBreak,
    /// `\pard`
    ParagraphReset,
    /// `\tab`
    Tab,
    /// `\cfN`
    StyleBucket(i32),
    /// `\saN`
    Margin(bool),
    /// `\fN`; `true` selects the phonetic font
    Font(bool),
    /// `\qc`
    Hidden,
    /// `\'hh`
    Hex(u8),
    /// `\uN`; the fallback byte that follows is already consumed
    Unicode(char),
    /// `\\`, `\{` or `\}`
    Literal(u8),
    /// A byte outside any control sequence
    Byte(u8),
    /// Any control word or symbol without meaning here
    Ignored,
}

/// Iterator over the [`Token`]s of a markup blob.
pub struct Lexer<'a> {
    input: &'a [u8],
    pos: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a [u8]) -> Self {
        Self { input, pos: 0 }
    }

    fn peek(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    fn control_sequence(&mut self) -> Option<Token> {
        // self.pos sits just past the backslash
        let next = self.peek()?;
        match next {
            b'\\' | b'{' | b'}' => {
                self.pos += 1;
                return Some(Token::Literal(next));
            }
            b'\'' => {
                if let Some(byte) = self.hex_pair(self.pos + 1) {
                    self.pos += 3;
                    return Some(Token::Hex(byte));
                }
            }
            _ => {}
        }

        let start = self.pos;
        while self.peek().is_some_and(|c| c.is_ascii_alphabetic()) {
            self.pos += 1;
        }
        let word = &self.input[start..self.pos];
        if word.is_empty() {
            // control symbol such as `\~` or `\-`: only the backslash is dropped
            return Some(Token::Ignored);
        }

        let param = self.parameter();
        if self.peek() == Some(b' ') {
            self.pos += 1;
        }

        let token = classify(word, param);
        if matches!(token, Token::Unicode(_)) && self.pos < self.input.len() {
            // skip the single fallback byte that follows \uN
            self.pos += 1;
        }
        if token == Token::Ignored {
            trace!("Ignoring control word \\{}", String::from_utf8_lossy(word));
        }
        Some(token)
    }

    fn hex_pair(&self, at: usize) -> Option<u8> {
        let hi = hex_value(*self.input.get(at)?)?;
        let lo = hex_value(*self.input.get(at + 1)?)?;
        Some((hi << 4) | lo)
    }

    /// Optional signed decimal parameter of a control word.
    fn parameter(&mut self) -> Option<i32> {
        let negative = match self.peek() {
            Some(b'-') => {
                self.pos += 1;
                true
            }
            Some(c) if c.is_ascii_digit() => false,
            _ => return None,
        };
        let mut value: i32 = 0;
        while let Some(c) = self.peek().filter(u8::is_ascii_digit) {
            value = value.saturating_mul(10).saturating_add(i32::from(c - b'0'));
            self.pos += 1;
        }
        Some(if negative { -value } else { value })
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let byte = self.peek()?;
        self.pos += 1;
        match byte {
            b'{' => Some(Token::GroupOpen),
            b'}' => Some(Token::GroupClose),
            b'\\' => self.control_sequence(),
            _ => Some(Token::Byte(byte)),
        }
    }
}

fn classify(word: &[u8], param: Option<i32>) -> Token {
    match (word, param) {
        (b"par" | b"line", _) => Token::ParagraphBreak,
        (b"pard", _) => Token::ParagraphReset,
        (b"tab", _) => Token::Tab,
        (b"qc", _) => Token::Hidden,
        (b"cf", Some(n)) => Token::StyleBucket(n),
        (b"sa", Some(n)) => Token::Margin(n != 0),
        (b"f", Some(n)) => Token::Font(n == 1),
        (b"u", Some(n)) => Token::Unicode(unicode_char(n)),
        _ => Token::Ignored,
    }
}

/// RTF writes code points above 0x7FFF as negative 16-bit values.
fn unicode_char(param: i32) -> char {
    let code = if param < 0 { param + 0x1_0000 } else { param };
    u32::try_from(code)
        .ok()
        .and_then(char::from_u32)
        .unwrap_or('?')
}

fn hex_value(c: u8) -> Option<u8> {
    (c as char).to_digit(16).map(|d| d as u8)
}
