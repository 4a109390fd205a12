//! The trie dictionary and its mutation and lookup operations.

use crate::spelling::suggest;
use crate::trie::node::TrieNode;
use crate::trie::traversal::Words;

/// A dictionary of words stored as a prefix tree.
///
/// The trie exclusively owns a root node that carries no character and is
/// never an end of word; every stored word is a root-to-node path whose
/// final node is marked as a word end. Because the root is never marked,
/// the empty string is never a stored word and all operations treat it as
/// absent.
///
/// # Examples
///
/// ```
/// use lexitrie::trie::Trie;
///
/// let mut trie = Trie::new();
/// assert!(trie.insert("cat"));
/// assert!(trie.insert("caterpillar"));
///
/// assert!(trie.search("cat"));
/// assert_eq!(trie.auto_suggest("cat"), vec!["cat", "caterpillar"]);
///
/// assert!(trie.delete("cat"));
/// assert!(!trie.search("cat"));
/// assert!(trie.search("caterpillar"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Trie {
    /// Root of the tree. Never removed, never an end of word.
    root: TrieNode,
    /// Number of words currently stored.
    len: usize,
}

impl Trie {
    /// Create a new empty trie.
    pub fn new() -> Self {
        Trie::default()
    }

    /// Build a trie from an iterator of words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = Trie::new();
        for word in words {
            trie.insert(word.as_ref());
        }
        trie
    }

    /// Get the number of words stored in the trie.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check whether the trie stores no words.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Get the root node of the tree.
    pub(crate) fn root(&self) -> &TrieNode {
        &self.root
    }

    /// Insert a word, returning `true` if it was newly added.
    ///
    /// Missing character edges are created along the way. Inserting a word
    /// that is already present returns `false` and leaves the trie
    /// unchanged. The empty string is rejected.
    pub fn insert(&mut self, word: &str) -> bool {
        if word.is_empty() {
            return false;
        }

        let mut current = &mut self.root;
        for c in word.chars() {
            current = current.child_or_insert(c);
        }

        if current.is_end_of_word() {
            // Word already exists in the trie
            return false;
        }

        current.set_end_of_word(true);
        self.len += 1;
        true
    }

    /// Check whether the exact word is stored in the trie.
    ///
    /// Returns `false` on any missing edge, including partial matches that
    /// only exist as prefixes of longer words.
    pub fn search(&self, word: &str) -> bool {
        self.node_at(word).is_some_and(TrieNode::is_end_of_word)
    }

    /// Delete a word, returning `true` if it existed and was removed.
    ///
    /// Nodes left childless and not terminating another word are pruned
    /// bottom-up; pruning stops at the first ancestor that still terminates
    /// a word or has other children. Deleting a word therefore never
    /// destroys a stored prefix of it, nor a longer word sharing its path.
    pub fn delete(&mut self, word: &str) -> bool {
        let chars: Vec<char> = word.chars().collect();
        let (removed, _) = Self::delete_below(&mut self.root, &chars);
        if removed {
            self.len -= 1;
        }
        removed
    }

    /// Recursive helper for [`delete`](Trie::delete).
    ///
    /// Returns `(removed, prune)`: whether the word was found and unmarked,
    /// and whether the visited node should be unlinked by its parent. The
    /// two signals are threaded separately through the unwind; only
    /// `removed` reaches the public contract. The root is passed in but
    /// never unlinked, since its caller ignores the prune signal.
    fn delete_below(node: &mut TrieNode, word: &[char]) -> (bool, bool) {
        let Some((&c, rest)) = word.split_first() else {
            if !node.is_end_of_word() {
                // The path exists but the word was never stored.
                return (false, false);
            }
            node.set_end_of_word(false);
            return (true, !node.has_children());
        };

        let Some(child) = node.child_mut(c) else {
            return (false, false);
        };

        let (removed, prune_child) = Self::delete_below(child, rest);
        if prune_child {
            node.remove_child(c);
            (removed, !node.has_children() && !node.is_end_of_word())
        } else {
            (removed, false)
        }
    }

    /// Collect every stored word that starts with the given prefix.
    ///
    /// The prefix itself is included when it is a stored word. Words come
    /// back in depth-first, ascending-character order, which is stable for
    /// a given word set regardless of insertion order. An unknown prefix
    /// yields an empty vector; the empty prefix yields every word.
    pub fn auto_suggest(&self, prefix: &str) -> Vec<String> {
        self.words_with_prefix(prefix).collect()
    }

    /// Collect every word stored in the trie.
    pub fn all_words(&self) -> Vec<String> {
        self.words().collect()
    }

    /// Lazily iterate over every word stored in the trie.
    pub fn words(&self) -> Words<'_> {
        Words::from_root(&self.root)
    }

    /// Lazily iterate over the stored words that start with the given prefix.
    pub fn words_with_prefix(&self, prefix: &str) -> Words<'_> {
        Words::from_prefix(self.node_at(prefix), prefix)
    }

    /// Get spelling suggestions for a possibly misspelled word.
    ///
    /// See [`suggest::spelling_suggestions`] for the candidate selection
    /// and distance threshold.
    pub fn spelling_suggestions(&self, word: &str) -> Vec<String> {
        suggest::spelling_suggestions(self, word)
    }

    /// Walk the path spelled by `prefix`, returning the node it ends at.
    fn node_at(&self, prefix: &str) -> Option<&TrieNode> {
        let mut current = &self.root;
        for c in prefix.chars() {
            current = current.child(c)?;
        }
        Some(current)
    }
}
