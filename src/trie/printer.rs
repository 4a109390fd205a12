//! Tree-structure rendering for inspection and debugging.

use std::fmt::Write;

use crate::trie::dictionary::Trie;
use crate::trie::node::TrieNode;

/// Render the structure of the trie as an indented tree.
///
/// The root is printed as `root`; every node below it is printed as its
/// character with `├─`/`└─` branch markers and `│` continuation lines.
/// Children appear in ascending character order, so the rendering is
/// deterministic for a given word set.
///
/// ```text
/// root
/// ├─a
/// │ └─s
/// └─t
///   └─o
/// ```
pub fn render_tree(trie: &Trie) -> String {
    let mut out = String::from("root\n");

    let root = trie.root();
    let child_count = root.child_count();
    for (i, (c, child)) in root.children().enumerate() {
        render_node(&mut out, c, child, "", i + 1 == child_count);
    }

    out
}

/// Append one node and its subtree to the rendered output.
fn render_node(out: &mut String, value: char, node: &TrieNode, indent: &str, is_last: bool) {
    let (branch, continuation) = if is_last { ("└─", "  ") } else { ("├─", "│ ") };

    // Writing into a String cannot fail.
    let _ = writeln!(out, "{indent}{branch}{value}");

    let child_indent = format!("{indent}{continuation}");
    let child_count = node.child_count();
    for (i, (c, child)) in node.children().enumerate() {
        render_node(out, c, child, &child_indent, i + 1 == child_count);
    }
}
