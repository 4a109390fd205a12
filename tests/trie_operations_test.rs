#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use lexitrie::spelling::levenshtein_distance;
    use lexitrie::trie::{Trie, render_tree};

    #[test]
    fn test_insert_then_search_holds_for_all_words() {
        let words = [
            "as", "astronaut", "asteroid", "are", "around", "cat", "cars", "cares",
            "careful", "carefully", "for", "follows", "forgot", "from", "front",
        ];

        let mut trie = Trie::new();
        for word in words {
            assert!(trie.insert(word), "first insert of {word} should be new");
        }
        for word in words {
            assert!(trie.search(word), "{word} should be found after insert");
        }
    }

    #[test]
    fn test_double_insert_signals_and_preserves_word_set() {
        let mut trie = Trie::from_words(["mellow", "mean", "money"]);
        let before = trie.all_words();

        assert!(!trie.insert("mean"));
        assert_eq!(trie.all_words(), before);
    }

    #[test]
    fn test_delete_then_search_is_false() {
        let mut trie = Trie::from_words(["monday", "monster"]);

        assert!(trie.delete("monday"));
        assert!(!trie.search("monday"));
        assert!(trie.search("monster"));
    }

    #[test]
    fn test_delete_of_absent_word_preserves_word_set() {
        let mut trie = Trie::from_words(["place", "plan", "planet"]);
        let before = trie.all_words();

        assert!(!trie.delete("plans"));
        assert_eq!(trie.all_words(), before);
    }

    #[test]
    fn test_prefix_safety() {
        let mut trie = Trie::new();
        trie.insert("cat");
        trie.insert("caterpillar");

        assert!(trie.delete("cat"));
        assert!(!trie.search("cat"));
        assert!(trie.search("caterpillar"));
    }

    #[test]
    fn test_auto_suggest_ordering() {
        let trie = Trie::from_words(["catastrophe", "catatonic", "caterpillar"]);

        assert_eq!(
            trie.auto_suggest("cat"),
            vec!["catastrophe", "catatonic", "caterpillar"]
        );
    }

    #[test]
    fn test_spelling_suggestions_within_threshold() {
        let trie = Trie::from_words(["cat", "caterpillar", "catastrophe"]);

        assert_eq!(
            trie.spelling_suggestions("caterpiller"),
            vec!["caterpillar"]
        );
    }

    #[test]
    fn test_levenshtein_base_cases() {
        assert_eq!(levenshtein_distance("", "planet"), 6);
        assert_eq!(levenshtein_distance("planet", ""), 6);
        assert_eq!(levenshtein_distance("planet", "planet"), 0);
    }

    #[test]
    fn test_insert_delete_round_trip_equals_set_difference() {
        let inserted = [
            "the", "their", "they", "there", "towards", "front", "from", "forgot",
        ];
        let deleted = ["their", "front", "absent"];

        let mut trie = Trie::new();
        for word in inserted {
            trie.insert(word);
        }
        let mut removed = BTreeSet::new();
        for word in deleted {
            if trie.delete(word) {
                removed.insert(word);
            }
        }

        let expected: Vec<&str> = inserted
            .iter()
            .copied()
            .filter(|w| !removed.contains(w))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        assert_eq!(trie.all_words(), expected);
        assert!(!removed.contains("absent"));
    }

    #[test]
    fn test_lazy_traversal_through_public_api() {
        let trie = Trie::from_words(["cares", "careful", "carefully", "cars", "cat"]);

        let first_two: Vec<String> = trie.words_with_prefix("car").take(2).collect();
        assert_eq!(first_two, vec!["careful", "carefully"]);
    }

    #[test]
    fn test_tree_rendering_matches_word_set() {
        let trie = Trie::from_words(["as", "at"]);

        let expected = "\
root
└─a
  ├─s
  └─t
";
        assert_eq!(render_tree(&trie), expected);
    }
}
