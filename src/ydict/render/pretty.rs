//! Layout-aware rendering for terminal display.
//!
//! Text is gathered into a line buffer and committed at each paragraph
//! break. Committed lines are trimmed, runs of blank lines collapse to one,
//! phrase lines get a `- ` bullet and margin lines a two-space indent.

use super::frame::{RenderFrame, RenderStack};
use super::lexer::{Lexer, Token};
use crate::ydict::codec::charset;

/// Style bucket the dictionary uses for phrase and heading lines.
pub const PHRASE_STYLE_BUCKET: i32 = 2;

/// Part-of-speech headings that are printed without a bullet even when
/// they carry the phrase style.
pub const PART_OF_SPEECH_HEADERS: &[&str] = &[
    "n", "adj", "adv", "vt", "vi", "prep", "pron", "conj", "num", "det", "modal aux vb",
];

pub fn is_part_of_speech_header(text: &str) -> bool {
    PART_OF_SPEECH_HEADERS.contains(&trim_line(text))
}

fn trim_line(text: &str) -> &str {
    text.trim_matches(|c| matches!(c, ' ' | '\t' | '\r'))
}

fn is_blank(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\r')
}

/// Render markup into display text.
///
/// May return an empty string for a blob that is entirely hidden or has no
/// visible text; fall back to [`render_plain`](super::render_plain) then.
pub fn render_pretty(markup: &[u8]) -> String {
    let mut stack = RenderStack::new();
    let mut writer = LineWriter::with_capacity(markup.len());

    for token in Lexer::new(markup) {
        if stack.apply(token) {
            continue;
        }
        let frame = *stack.top();
        if frame.hidden {
            continue;
        }
        match token {
            Token::ParagraphBreak | Token::Byte(b'\n') => writer.paragraph_break(),
            Token::Byte(b'\r') => {}
            Token::Tab => writer.push_byte(b'\t', &frame),
            Token::Hex(byte) | Token::Byte(byte) | Token::Literal(byte) => {
                writer.push_byte(byte, &frame)
            }
            Token::Unicode(c) => writer.push_char(c, &frame),
            _ => {}
        }
    }

    writer.finish()
}

struct LineWriter {
    out: String,
    line: String,
    /// Frame in effect when the first character of `line` was placed.
    line_frame: Option<RenderFrame>,
    /// Consecutive newlines at the end of `out`.
    newline_run: usize,
}

impl LineWriter {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            out: String::with_capacity(capacity),
            line: String::with_capacity(256),
            line_frame: None,
            newline_run: 0,
        }
    }

    fn push_byte(&mut self, byte: u8, frame: &RenderFrame) {
        // indentation comes from \sa, not from source whitespace
        if self.line.is_empty() && is_blank(byte) {
            return;
        }
        self.line_frame.get_or_insert(*frame);
        charset::push_decoded(&mut self.line, byte, frame.phonetic);
    }

    fn push_char(&mut self, c: char, frame: &RenderFrame) {
        self.line_frame.get_or_insert(*frame);
        self.line.push(c);
    }

    fn commit_line(&mut self) {
        let Some(frame) = self.line_frame.take() else {
            return;
        };
        let text = trim_line(&self.line);
        if !text.is_empty() {
            self.newline_run = 0;
            if frame.margin {
                self.out.push_str("  ");
            }
            if frame.style_bucket == PHRASE_STYLE_BUCKET && !is_part_of_speech_header(text) {
                self.out.push_str("- ");
            }
            self.out.push_str(text);
        }
        self.line.clear();
    }

    fn paragraph_break(&mut self) {
        self.commit_line();
        // no leading newlines, at most one blank line
        if self.out.is_empty() || self.newline_run >= 2 {
            return;
        }
        self.out.push('\n');
        self.newline_run += 1;
    }

    fn finish(mut self) -> String {
        self.commit_line();
        self.out
    }
}
