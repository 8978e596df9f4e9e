//! Per-group rendering state.

use super::lexer::Token;

/// Formatting state of one nesting level of `{ ... }` groups.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderFrame {
    pub style_bucket: i32,
    pub phonetic: bool,
    pub hidden: bool,
    pub margin: bool,
}

/// Stack of [`RenderFrame`]s. Never empty: the root frame holds the defaults
/// and cannot be popped.
#[derive(Debug, Clone)]
pub struct RenderStack {
    frames: Vec<RenderFrame>,
}

impl Default for RenderStack {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderStack {
    pub fn new() -> Self {
        Self {
            frames: vec![RenderFrame::default()],
        }
    }

    /// Enter a group, inheriting the current state.
    pub fn push(&mut self) {
        let top = *self.top();
        self.frames.push(top);
    }

    /// Leave a group. A no-op on the root frame.
    pub fn pop(&mut self) {
        if self.frames.len() > 1 {
            self.frames.pop();
        }
    }

    pub fn top(&self) -> &RenderFrame {
        // frames always holds the root
        &self.frames[self.frames.len() - 1]
    }

    pub fn top_mut(&mut self) -> &mut RenderFrame {
        let last = self.frames.len() - 1;
        &mut self.frames[last]
    }

    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Apply a grouping or state-selector token.
    ///
    /// Returns `false` for tokens that produce output, leaving them to the renderer.
    pub fn apply(&mut self, token: Token) -> bool {
        match token {
            Token::GroupOpen => self.push(),
            Token::GroupClose => self.pop(),
            Token::ParagraphReset => {
                let top = self.top_mut();
                top.style_bucket = 0;
                top.margin = false;
            }
            Token::StyleBucket(n) => self.top_mut().style_bucket = n,
            Token::Margin(on) => self.top_mut().margin = on,
            Token::Font(phonetic) => self.top_mut().phonetic = phonetic,
            Token::Hidden => self.top_mut().hidden = true,
            _ => return false,
        }
        true
    }
}
