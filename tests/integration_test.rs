use std::collections::BTreeSet;
use std::sync::Arc;
use std::thread;

use mediumvec::{vec32, Vec32};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use suffix_tree::{CharType, SuffixTree, SuffixTreeError, TreeConfig};

#[cfg(test)]
mod tests {

    use super::*;

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn gen_random_string(rng: &mut StdRng, len: usize, alphabet_size: u64) -> Vec<u64> {
        (0..len).map(|_| rng.gen_range(0..alphabet_size)).collect()
    }

    fn naive_contains(text: &[u64], pattern: &[u64]) -> bool {
        pattern.is_empty() || text.windows(pattern.len()).any(|w| w == pattern)
    }

    fn naive_find_all(text: &[u64], pattern: &[u64]) -> Vec<usize> {
        if pattern.is_empty() {
            return (0..text.len()).collect();
        }
        text.windows(pattern.len())
            .enumerate()
            .filter(|(_, w)| *w == pattern)
            .map(|(i, _)| i)
            .collect()
    }

    #[test]
    fn test_banana() {
        init_logger();
        let tree: SuffixTree = "banana".parse().unwrap();
        assert_eq!(tree.leaf_count(), 7);
        assert_eq!(tree.suffixes().len(), 7);
        assert!(tree.contains_str("ana"));
        assert!(tree.contains_str("banana"));
        assert!(!tree.contains_str("nab"));
        assert!(!tree.contains_str("bananas"));
        assert_eq!(tree.find_all_str("ana"), vec![1, 3]);
        assert_eq!(tree.find_all_str("a"), vec![1, 3, 5]);
        assert!(tree.find_all_str("nab").is_empty());
    }

    #[test]
    fn test_empty_text() {
        let tree: SuffixTree = "".parse().unwrap();
        assert!(tree.is_empty());
        assert_eq!(tree.leaf_count(), 1);
        // root plus the terminator leaf
        assert_eq!(tree.node_count(), 2);
        assert_eq!(tree.suffixes(), vec![vec![CharType::MAX]]);
        assert!(tree.contains_str(""));
        assert!(!tree.contains_str("a"));
        assert!(tree.find_all_str("").is_empty());
    }

    #[test]
    fn test_repeated_char() {
        let tree: SuffixTree = "aaaa".parse().unwrap();
        assert_eq!(tree.leaf_count(), 5);
        assert!(tree.contains_str("aaa"));
        assert!(tree.contains_str("aaaa"));
        assert!(!tree.contains_str("aaaaa"));
        assert_eq!(tree.find_all_str("aa"), vec![0, 1, 2]);
    }

    #[test]
    fn test_terminator_collision_is_rejected() {
        let config = TreeConfig::default().with_terminator(b'$' as u64);
        let err = SuffixTree::from_bytes_with_config(b"ab$ab", config).unwrap_err();
        assert_eq!(err, SuffixTreeError::TerminatorInText { position: 2 });
        assert_eq!(
            err.to_string(),
            "text contains the terminator character at position 2"
        );

        let err = SuffixTree::new(vec![1, u64::MAX]).unwrap_err();
        assert_eq!(err, SuffixTreeError::TerminatorInText { position: 1 });
    }

    #[test]
    fn test_alphabet_bound() {
        let config = TreeConfig::default().with_alphabet_size(4).with_terminator(4);
        let tree = SuffixTree::with_config(vec![0, 1, 2, 3, 0, 1], config).unwrap();
        assert!(tree.contains_substring(&[3, 0]));
        // Out-of-alphabet queries just miss.
        assert!(!tree.contains_substring(&[9]));
        assert!(!tree.contains_substring(&[3, 4]));

        let err = SuffixTree::with_config(vec![0, 5], config).unwrap_err();
        assert!(matches!(err, SuffixTreeError::CharOutOfAlphabet { position: 1, ch: 5, .. }));

        let empty = TreeConfig::default().with_alphabet_size(0);
        assert_eq!(
            SuffixTree::with_config(Vec::new(), empty).unwrap_err(),
            SuffixTreeError::EmptyAlphabet
        );
    }

    #[test]
    fn test_case_insensitive() {
        let config = TreeConfig::default().case_insensitive(true);
        let tree = SuffixTree::from_bytes_with_config(b"MiSsIsSiPpI", config).unwrap();
        assert!(tree.contains_str("SSIS"));
        assert!(tree.contains_str("ssippi"));
        assert_eq!(tree.find_all_str("ISS"), vec![1, 4]);

        let strict: SuffixTree = "MiSsIsSiPpI".parse().unwrap();
        assert!(!strict.contains_str("ssis"));
    }

    #[test]
    fn test_is_suffix() {
        let s1 = vec32![1u64, 2, 3, 4, 5, 6];
        let tree = SuffixTree::new(s1[0..].to_vec()).unwrap();
        for i in 0..s1.len() {
            assert!(tree.is_suffix(&s1[i..]), "{:?} should be a suffix", &s1[i..]);
        }
        assert!(tree.is_suffix(&[]));
        assert!(!tree.is_suffix(&[1]));
        assert!(!tree.is_suffix(&[1, 2]));
        assert!(!tree.is_suffix(&[6, 7]));

        let tree: SuffixTree = "abab".parse().unwrap();
        assert!(tree.is_suffix_str("ab"));
        assert!(tree.is_suffix_str("b"));
        assert!(!tree.is_suffix_str("a"));
        assert!(!tree.is_suffix_str("aba"));
    }

    #[test]
    fn test_is_substr() {
        let s1: Vec32<u64> = vec32![1, 2, 3, 4, 5, 6];
        let tree = SuffixTree::new(s1[0..].to_vec()).unwrap();
        for i in 0..s1.len() {
            for j in i..s1.len() {
                assert!(
                    tree.contains_substring(&s1[i..(j + 1)]),
                    "{:?} should be a substring",
                    &s1[i..(j + 1)]
                );
            }
        }
        assert!(!tree.contains_substring(&[2, 3, 10]));
        assert!(!tree.contains_substring(&[3, 4, 50]));
    }

    #[test]
    fn test_suffixes_match_slicing() {
        for s in ["", "a", "banana", "mississippi", "abcabxabcd", "xyzxyzxyz"] {
            let tree: SuffixTree = s.parse().unwrap();
            let text: Vec<u64> = s.bytes().map(u64::from).collect();

            let from_tree: BTreeSet<Vec<u64>> = tree.suffixes().into_iter().collect();
            let expected: BTreeSet<Vec<u64>> = (0..=text.len())
                .map(|i| {
                    let mut suffix = text[i..].to_vec();
                    suffix.push(tree.terminator());
                    suffix
                })
                .collect();
            assert_eq!(tree.leaf_count(), text.len() + 1, "{s}");
            assert_eq!(from_tree, expected, "{s}");
        }
    }

    #[test]
    fn test_suffixes_are_sorted() {
        let tree: SuffixTree = "mississippi".parse().unwrap();
        let suffixes = tree.suffixes();
        let mut sorted = suffixes.clone();
        sorted.sort();
        assert_eq!(suffixes, sorted);
    }

    #[test]
    fn test_random_cross_check() {
        init_logger();
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let len = rng.gen_range(0..60);
            let alphabet_size = rng.gen_range(1..5);
            let text = gen_random_string(&mut rng, len, alphabet_size);
            let tree = SuffixTree::new(text.clone()).unwrap();

            assert_eq!(tree.leaf_count(), len + 1);
            assert_eq!(tree.suffixes().len(), len + 1);
            assert!(tree.node_count() <= 2 * (len + 1));

            for _ in 0..30 {
                let pattern = if len > 0 && rng.gen_bool(0.5) {
                    let start = rng.gen_range(0..len);
                    let end = rng.gen_range(start..=len);
                    text[start..end].to_vec()
                } else {
                    let plen = rng.gen_range(0..8);
                    gen_random_string(&mut rng, plen, alphabet_size + 1)
                };
                assert_eq!(
                    tree.contains_substring(&pattern),
                    naive_contains(&text, &pattern),
                    "text {text:?} pattern {pattern:?}"
                );
                assert_eq!(
                    tree.find_all(&pattern),
                    naive_find_all(&text, &pattern),
                    "text {text:?} pattern {pattern:?}"
                );
                assert_eq!(
                    tree.is_suffix(&pattern),
                    text.ends_with(&pattern),
                    "text {text:?} pattern {pattern:?}"
                );
            }
        }
    }

    #[test]
    fn test_shared_across_threads() {
        let tree: Arc<SuffixTree> = Arc::new("the quick brown fox".parse().unwrap());
        let handles: Vec<_> = ["quick", "fox", "brown f", "cat"]
            .into_iter()
            .map(|pattern| {
                let tree = Arc::clone(&tree);
                thread::spawn(move || tree.contains_str(pattern))
            })
            .collect();
        let found: Vec<bool> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(found, vec![true, true, true, false]);
    }

    #[test]
    #[ignore]
    fn test_long_input() {
        let mut rng = StdRng::seed_from_u64(7);
        let text = gen_random_string(&mut rng, 200_000, 4);
        let tree = SuffixTree::new(text.clone()).unwrap();
        assert_eq!(tree.leaf_count(), text.len() + 1);
        assert!(tree.contains_substring(&text[1000..1500]));
    }
}
