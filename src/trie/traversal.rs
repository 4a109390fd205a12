//! Lazy traversal over the words stored beneath a node.

use crate::trie::node::TrieNode;

/// Depth-first iterator over the words reachable from a starting node.
///
/// The starting node's own path is yielded first when it ends a word; each
/// child subtree follows in ascending character order, so the sequence is
/// deterministic for a given word set. The iterator borrows the tree and
/// carries no other state, so a fresh one restarts the walk from scratch.
#[derive(Debug, Clone)]
pub struct Words<'a> {
    /// Nodes yet to be visited, paired with the prefix spelling their path.
    /// The entry pushed last is visited first.
    stack: Vec<(&'a TrieNode, String)>,
}

impl<'a> Words<'a> {
    /// Traverse every word below the root node.
    pub(crate) fn from_root(root: &'a TrieNode) -> Self {
        Words {
            stack: vec![(root, String::new())],
        }
    }

    /// Traverse the words below the node located at `prefix`, if the path
    /// exists. A missing path produces an empty iterator.
    pub(crate) fn from_prefix(node: Option<&'a TrieNode>, prefix: &str) -> Self {
        Words {
            stack: node.map(|n| (n, prefix.to_string())).into_iter().collect(),
        }
    }
}

impl Iterator for Words<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        while let Some((node, prefix)) = self.stack.pop() {
            // Push children in reverse so the smallest character pops first.
            for (c, child) in node.children().rev() {
                let mut path = String::with_capacity(prefix.len() + c.len_utf8());
                path.push_str(&prefix);
                path.push(c);
                self.stack.push((child, path));
            }

            if node.is_end_of_word() {
                return Some(prefix);
            }
        }

        None
    }
}
