//! Markup rendering.
//!
//! Definitions are stored as a compact RTF-like stream. [`lexer`] splits it
//! into tokens, [`frame`] tracks the per-group state those tokens select,
//! and the two renderers assemble text from the same token stream:
//!
//! - [`render_plain`]: one newline per paragraph break, nothing else added
//! - [`render_pretty`]: trimmed lines, collapsed blank lines, bullets and indents
//!
//! Neither renderer can fail; malformed markup yields best-effort text.

pub mod frame;
pub mod lexer;
mod plain;
mod pretty;

pub use plain::render_plain;
pub use pretty::{is_part_of_speech_header, render_pretty, PART_OF_SPEECH_HEADERS, PHRASE_STYLE_BUCKET};

/// Output layout for a rendered definition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RenderMode {
    Plain,
    #[default]
    Pretty,
}

impl RenderMode {
    pub fn render(self, markup: &[u8]) -> String {
        match self {
            RenderMode::Plain => render_plain(markup),
            RenderMode::Pretty => render_pretty(markup),
        }
    }
}

/// Pretty rendering, falling back to plain when nothing visible remains.
pub fn render_best(markup: &[u8]) -> String {
    let pretty = render_pretty(markup);
    if pretty.is_empty() {
        render_plain(markup)
    } else {
        pretty
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &[u8] = b"{\\cf2 cat}\\par{\\f1 [k\\'98t]}\\par\\par{\\cf2 n}\\par\\sa60 kot";

    #[test]
    fn rendering_is_deterministic() {
        for mode in [RenderMode::Plain, RenderMode::Pretty] {
            assert_eq!(mode.render(SAMPLE), mode.render(SAMPLE));
        }
    }

    #[test]
    fn best_falls_back_to_plain_for_hidden_blobs() {
        assert_eq!(render_best(b"{\\qc only hidden}"), "only hidden");
        assert_eq!(render_best(b"shown"), "shown");
    }

    #[test]
    fn sample_entry_layout() {
        assert_eq!(render_pretty(SAMPLE), "- cat\n[kæt]\n\nn\n  kot");
        assert_eq!(render_plain(SAMPLE), "cat\n[kæt]\n\nn\nkot");
    }
}
