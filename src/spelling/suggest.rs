//! Spelling suggestions backed by the trie dictionary.

use crate::spelling::levenshtein::levenshtein_distance_threshold;
use crate::trie::dictionary::Trie;

/// Maximum edit distance between a misspelled word and a suggested one.
pub const MAX_EDIT_DISTANCE: usize = 2;

/// Collect spelling suggestions for `word` from the dictionary.
///
/// Candidates are restricted to the stored words sharing the input's first
/// character, a heuristic that keeps the scan to a single subtree. Every
/// candidate within [`MAX_EDIT_DISTANCE`] is returned in traversal order;
/// no distance ranking is applied. An empty input, or a first character
/// with no stored words, yields no suggestions.
pub fn spelling_suggestions(trie: &Trie, word: &str) -> Vec<String> {
    let Some(first) = word.chars().next() else {
        return Vec::new();
    };

    trie.words_with_prefix(&first.to_string())
        .filter(|candidate| {
            levenshtein_distance_threshold(word, candidate, MAX_EDIT_DISTANCE).is_some()
        })
        .collect()
}
