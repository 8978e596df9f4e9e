//! Exact and prefix lookup over the word table.
//!
//! The binary searches here assume the table is sorted byte-lexicographically
//! over the words as stored in the index file, i.e. their Windows-1250 bytes.
//! Real index files are not reliably sorted that way, so [`SearchIndex::find_word`]
//! always backs its fast path with a linear scan, and [`SearchIndex::suggest`]
//! scans linearly in file order. [`SearchIndex::lower_bound`] and
//! [`SearchIndex::find_first_with_prefix`] keep the sorted assumption and can
//! disagree with `suggest` on unsorted tables.

use std::borrow::Cow;
use encoding_rs::WINDOWS_1250;

use crate::ydict::types::models::WordEntry;

/// Read-only search view over a word table.
#[derive(Debug, Clone, Copy)]
pub struct SearchIndex<'a> {
    words: &'a [WordEntry],
}

impl<'a> SearchIndex<'a> {
    pub fn new(words: &'a [WordEntry]) -> Self {
        Self { words }
    }

    /// Index of the entry spelled exactly `word`.
    pub fn find_word(&self, word: &str) -> Option<usize> {
        if word.is_empty() {
            return None;
        }
        let pos = self.lower_bound(word);
        if self.words.get(pos).is_some_and(|e| e.word == word) {
            return Some(pos);
        }
        self.words.iter().position(|e| e.word == word)
    }

    /// First position whose word is not less than `key`, or the table length.
    ///
    /// Words are compared by their index file bytes, not by their UTF-8 form.
    pub fn lower_bound(&self, key: &str) -> usize {
        let key = index_bytes(key);
        self.words
            .partition_point(|e| index_bytes(&e.word).as_ref() < key.as_ref())
    }

    /// Position found by [`lower_bound`](Self::lower_bound), if its word starts
    /// with `prefix` (case-sensitive).
    pub fn find_first_with_prefix(&self, prefix: &str) -> Option<usize> {
        if prefix.is_empty() {
            return None;
        }
        let pos = self.lower_bound(prefix);
        self.words
            .get(pos)
            .filter(|e| e.word.starts_with(prefix))
            .map(|_| pos)
    }

    /// Up to `limit` indices whose words start with `prefix`, ignoring ASCII case,
    /// in file order.
    ///
    /// A leading `"to "` is stripped first, so `"to run"` finds `"run"`.
    pub fn suggest(&self, prefix: &str, limit: usize) -> Vec<usize> {
        if prefix.is_empty() || limit == 0 {
            return Vec::new();
        }
        let prefix = strip_infinitive(prefix);
        if prefix.is_empty() {
            return Vec::new();
        }
        self.words
            .iter()
            .enumerate()
            .filter(|(_, e)| starts_with_ignore_ascii_case(&e.word, prefix))
            .map(|(i, _)| i)
            .take(limit)
            .collect()
    }
}

/// `text` re-encoded as it is stored in the index file.
///
/// Characters outside the code page become numeric character references,
/// which can never equal a stored word.
fn index_bytes(text: &str) -> Cow<'_, [u8]> {
    let (bytes, _, _) = WINDOWS_1250.encode(text);
    bytes
}

fn strip_infinitive(prefix: &str) -> &str {
    match prefix.get(..3) {
        Some(head) if head.eq_ignore_ascii_case("to ") => &prefix[3..],
        _ => prefix,
    }
}

fn starts_with_ignore_ascii_case(word: &str, prefix: &str) -> bool {
    word.len() >= prefix.len()
        && word.as_bytes()[..prefix.len()].eq_ignore_ascii_case(prefix.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(words: &[&str]) -> Vec<WordEntry> {
        words
            .iter()
            .enumerate()
            .map(|(i, w)| WordEntry { word: w.to_string(), data_offset: i as u32 * 16 })
            .collect()
    }

    #[test]
    fn finds_words_in_sorted_table() {
        let words = table(&["apple", "banana", "cherry"]);
        let index = SearchIndex::new(&words);
        assert_eq!(index.find_word("banana"), Some(1));
        assert_eq!(index.find_word("durian"), None);
        assert_eq!(index.find_word(""), None);
    }

    #[test]
    fn linear_fallback_covers_unsorted_tables() {
        let words = table(&["Zulu", "apple", "Alpha", "mango", "Echo"]);
        let index = SearchIndex::new(&words);
        for (i, entry) in words.iter().enumerate() {
            assert_eq!(index.find_word(&entry.word), Some(i));
        }
    }

    #[test]
    fn lower_bound_and_prefix_on_sorted_table() {
        let words = table(&["apple", "apply", "banana"]);
        let index = SearchIndex::new(&words);
        assert_eq!(index.lower_bound("app"), 0);
        assert_eq!(index.lower_bound("b"), 2);
        assert_eq!(index.lower_bound("zzz"), 3);
        assert_eq!(index.find_first_with_prefix("appl"), Some(0));
        assert_eq!(index.find_first_with_prefix("ban"), Some(2));
        assert_eq!(index.find_first_with_prefix("Ban"), None);
        assert_eq!(index.find_first_with_prefix("c"), None);
    }

    #[test]
    fn sorted_order_follows_index_file_bytes() {
        // sorted as Windows-1250 (z 0x7A < ż 0xBF < ó 0xF3), not as UTF-8
        let words = table(&["zoo", "żaba", "ósmy"]);
        let index = SearchIndex::new(&words);
        assert_eq!(index.lower_bound("ż"), 1);
        assert_eq!(index.lower_bound("ó"), 2);
        assert_eq!(index.lower_bound("ü"), 3);
        assert_eq!(index.find_first_with_prefix("ż"), Some(1));
        assert_eq!(index.find_first_with_prefix("ó"), Some(2));
        assert_eq!(index.find_word("ósmy"), Some(2));
    }

    #[test]
    fn prefix_helpers_may_disagree_with_suggest_on_unsorted_tables() {
        let words = table(&["zebra", "apple"]);
        let index = SearchIndex::new(&words);
        assert_eq!(index.find_first_with_prefix("app"), None);
        assert_eq!(index.suggest("app", 5), vec![1]);
    }

    #[test]
    fn suggest_ignores_ascii_case_and_keeps_file_order() {
        let words = table(&["Runner", "apple", "run", "RUNT", "rum"]);
        let index = SearchIndex::new(&words);
        assert_eq!(index.suggest("run", 10), vec![0, 2, 3]);
        assert_eq!(index.suggest("RUN", 2), vec![0, 2]);
    }

    #[test]
    fn suggest_strips_infinitive_marker() {
        let words = table(&["ran", "run", "to"]);
        let index = SearchIndex::new(&words);
        assert_eq!(index.suggest("to run", 5), vec![1]);
        assert_eq!(index.suggest("To R", 5), vec![0, 1]);
        assert!(index.suggest("to ", 5).is_empty());
        assert_eq!(index.suggest("to", 5), vec![2]);
        // exact lookup keeps the marker
        assert_eq!(index.find_word("to run"), None);
    }

    #[test]
    fn suggest_empty_inputs() {
        let words = table(&["run"]);
        let index = SearchIndex::new(&words);
        assert!(index.suggest("", 5).is_empty());
        assert!(index.suggest("r", 0).is_empty());
    }

    #[test]
    fn suggest_handles_multibyte_words() {
        let words = table(&["żółw", "zoo"]);
        let index = SearchIndex::new(&words);
        assert_eq!(index.suggest("żó", 5), vec![0]);
        assert_eq!(index.suggest("z", 5), vec![1]);
    }
}
