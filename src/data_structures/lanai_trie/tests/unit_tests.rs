// Copyright (c) 2025 Lanai Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Unit tests for insertion, lookup and node splitting.

use std::rc::Rc;

use test_case::test_case;

use crate::data_structures::lanai_trie::{ChildDispatch, LanaiTrie, LanaiTrieError, TrieConfig};

fn trie_with(dispatch: ChildDispatch) -> LanaiTrie<u32> {
    LanaiTrie::with_config(TrieConfig::new().with_dispatch(dispatch))
}

#[test_case(ChildDispatch::Linear ; "linear")]
#[test_case(ChildDispatch::Indexed ; "indexed")]
fn test_distinct_words(dispatch: ChildDispatch) {
    let mut trie = trie_with(dispatch);
    assert!(trie.insert("cat", 1, true).unwrap());
    assert!(trie.insert("car", 2, true).unwrap());
    assert!(trie.insert("dog", 3, true).unwrap());

    assert_eq!(trie.find("cat").unwrap(), Some(&1));
    assert_eq!(trie.find("car").unwrap(), Some(&2));
    assert_eq!(trie.find("dog").unwrap(), Some(&3));
    assert_eq!(trie.find("ca").unwrap(), None);
    assert_eq!(trie.len(), 3);
    trie.assert_invariants();
}

#[test_case(ChildDispatch::Linear ; "linear")]
#[test_case(ChildDispatch::Indexed ; "indexed")]
fn test_split_leaves_branch_without_value(dispatch: ChildDispatch) {
    let mut trie = trie_with(dispatch);
    trie.insert("tardis", 1, true).unwrap();
    trie.insert("tarbaby", 2, true).unwrap();

    assert_eq!(trie.find("tardis").unwrap(), Some(&1));
    assert_eq!(trie.find("tarbaby").unwrap(), Some(&2));
    assert_eq!(trie.find("tar").unwrap(), None);
    assert_eq!(trie.len(), 2);
    assert_eq!(trie.node_count(), 3);
    trie.assert_invariants();
}

#[test_case(ChildDispatch::Linear ; "linear")]
#[test_case(ChildDispatch::Indexed ; "indexed")]
fn test_duplicate_rejected_without_replace(dispatch: ChildDispatch) {
    let mut trie = trie_with(dispatch);
    assert!(trie.insert("a", 1, false).unwrap());
    assert_eq!(
        trie.insert("a", 2, false),
        Err(LanaiTrieError::DuplicateKey("a".to_string()))
    );
    assert_eq!(trie.find("a").unwrap(), Some(&1));
    assert_eq!(trie.len(), 1);
}

#[test_case(ChildDispatch::Linear ; "linear")]
#[test_case(ChildDispatch::Indexed ; "indexed")]
fn test_replace_keeps_size(dispatch: ChildDispatch) {
    let mut trie = trie_with(dispatch);
    assert!(trie.insert("a", 1, true).unwrap());
    assert!(!trie.insert("a", 2, true).unwrap());
    assert_eq!(trie.find("a").unwrap(), Some(&2));
    assert_eq!(trie.len(), 1);
}

#[test]
fn test_empty_trie_finds_nothing() {
    let trie: LanaiTrie<u32> = LanaiTrie::new();
    assert_eq!(trie.find("anything").unwrap(), None);
    assert!(!trie.contains("anything").unwrap());
    assert!(trie.is_empty());
    assert_eq!(trie.node_count(), 0);
}

#[test_case(&["tar", "tardis"] ; "shorter first")]
#[test_case(&["tardis", "tar"] ; "longer first")]
fn test_prefix_keys_are_independent(keys: &[&str]) {
    for dispatch in [ChildDispatch::Linear, ChildDispatch::Indexed] {
        let mut trie = trie_with(dispatch);
        for (value, key) in keys.iter().enumerate() {
            trie.insert(key, value as u32, false).unwrap();
        }
        for (value, key) in keys.iter().enumerate() {
            assert_eq!(trie.find(key).unwrap(), Some(&(value as u32)));
        }
        assert_eq!(trie.find("tard").unwrap(), None);
        assert_eq!(trie.find("tardiss").unwrap(), None);
        assert_eq!(trie.len(), 2);
        assert_eq!(trie.node_count(), 2);
        trie.assert_invariants();
    }
}

#[test]
fn test_key_ending_at_split_point_takes_truncated_node() {
    let mut trie = LanaiTrie::new();
    trie.insert("tardis", "blue box", true).unwrap();
    trie.insert("tar", "pitch", true).unwrap();

    assert_eq!(trie.render(), "tar => \"pitch\"\n  dis => \"blue box\"\n");
    trie.assert_invariants();
}

#[test]
fn test_branch_node_gains_value() {
    let mut trie = LanaiTrie::new();
    trie.insert("tardis", 1, false).unwrap();
    trie.insert("tarbaby", 2, false).unwrap();
    let nodes = trie.node_count();

    assert!(trie.insert("tar", 3, false).unwrap());
    assert_eq!(trie.find("tar").unwrap(), Some(&3));
    assert_eq!(trie.len(), 3);
    assert_eq!(trie.node_count(), nodes);

    assert_eq!(
        trie.insert("tar", 4, false),
        Err(LanaiTrieError::DuplicateKey("tar".to_string()))
    );
    trie.assert_invariants();
}

#[test]
fn test_rejected_insert_leaves_trie_untouched() {
    let mut trie = LanaiTrie::new();
    for (value, key) in ["romane", "romanus", "romulus", "rubens", "ruber"].iter().enumerate() {
        trie.insert(key, value, false).unwrap();
    }
    let before = trie.render();
    let stats = trie.stats();

    assert!(trie.insert("romulus", 99, false).is_err());
    assert!(trie.insert("", 99, true).is_err());

    assert_eq!(trie.render(), before);
    assert_eq!(trie.stats(), stats);
}

#[test_case("car", "cat" ; "lower then higher")]
#[test_case("cat", "car" ; "higher then lower")]
fn test_same_length_siblings(first: &str, second: &str) {
    let mut trie = LanaiTrie::new();
    trie.insert(first, first, true).unwrap();
    trie.insert(second, second, true).unwrap();

    assert_eq!(trie.find(first).unwrap(), Some(&first));
    assert_eq!(trie.find(second).unwrap(), Some(&second));
}

#[test]
fn test_tail_sibling_after_split() {
    let mut trie = LanaiTrie::new();
    for key in ["car", "cad", "cat"] {
        trie.insert(key, key, true).unwrap();
    }
    for key in ["car", "cad", "cat"] {
        assert_eq!(trie.find(key).unwrap(), Some(&key));
    }
    assert_eq!(trie.render(), "ca\n  r => \"car\"\n  d => \"cad\"\n  t => \"cat\"\n");
}

#[test]
fn test_consecutively_longer_keys() {
    let mut trie = LanaiTrie::new();
    for key in ["car", "cart", "carts"] {
        trie.insert(key, key.len(), true).unwrap();
    }
    for key in ["car", "cart", "carts"] {
        assert_eq!(trie.find(key).unwrap(), Some(&key.len()));
    }
    assert_eq!(trie.stats().max_depth, 3);
}

#[test]
fn test_children_sharing_parent_prefix() {
    let mut trie = LanaiTrie::new();
    for key in ["kill", "kills", "killed"] {
        trie.insert(key, key, true).unwrap();
    }
    for key in ["kill", "kills", "killed"] {
        assert_eq!(trie.find(key).unwrap(), Some(&key));
    }
    assert_eq!(trie.find("kille").unwrap(), None);
    trie.assert_invariants();
}

#[test]
fn test_split_moves_children_with_suffix() {
    let mut trie = trie_with(ChildDispatch::Indexed);
    trie.insert("romane", 1, true).unwrap();
    trie.insert("romanus", 2, true).unwrap();
    // "roman" now has children "e" and "us"; splitting it again at "rom"
    // must carry both of them into the split-off "an" node.
    trie.insert("romulus", 3, true).unwrap();

    assert_eq!(trie.find("romane").unwrap(), Some(&1));
    assert_eq!(trie.find("romanus").unwrap(), Some(&2));
    assert_eq!(trie.find("romulus").unwrap(), Some(&3));
    assert_eq!(trie.find("roman").unwrap(), None);
    assert_eq!(trie.find("rom").unwrap(), None);
    trie.assert_invariants();
}

#[test]
fn test_multibyte_keys() {
    let mut trie = LanaiTrie::new();
    trie.insert("héllo", 1, true).unwrap();
    trie.insert("hélp", 2, true).unwrap();
    trie.insert("日本語", 3, true).unwrap();
    trie.insert("日本", 4, true).unwrap();

    assert_eq!(trie.find("héllo").unwrap(), Some(&1));
    assert_eq!(trie.find("hélp").unwrap(), Some(&2));
    assert_eq!(trie.find("日本語").unwrap(), Some(&3));
    assert_eq!(trie.find("日本").unwrap(), Some(&4));
    assert_eq!(trie.find("hé").unwrap(), None);
    assert_eq!(trie.find("日").unwrap(), None);
    trie.assert_invariants();
}

#[test]
fn test_empty_key_rejected() {
    let mut trie = LanaiTrie::new();
    assert_eq!(trie.insert("", 1, true), Err(LanaiTrieError::EmptyKey));
    assert_eq!(trie.find(""), Err(LanaiTrieError::EmptyKey));
    assert!(trie.contains("").is_err());
    assert!(trie.is_empty());
}

#[test]
fn test_key_too_long_rejected() {
    let mut trie = LanaiTrie::with_config(TrieConfig::new().with_max_key_len(4));
    assert!(trie.insert("tars", 1, true).unwrap());
    assert_eq!(
        trie.insert("tardis", 2, true),
        Err(LanaiTrieError::KeyTooLong {
            key: "tardis".to_string(),
            max_len: 4,
        })
    );
    assert!(trie.find("tardis").is_err());
    // Length is counted in characters, not bytes
    assert!(trie.insert("日本語", 3, true).unwrap());
    assert_eq!(trie.len(), 2);
}

#[test]
fn test_case_insensitive_keys() {
    let mut trie = LanaiTrie::with_config(TrieConfig::new().with_case_sensitive(false));
    trie.insert("Content-Type", 1, true).unwrap();

    assert_eq!(trie.find("content-type").unwrap(), Some(&1));
    assert_eq!(trie.find("CONTENT-TYPE").unwrap(), Some(&1));
    assert_eq!(
        trie.insert("CONTENT-type", 2, false),
        Err(LanaiTrieError::DuplicateKey("content-type".to_string()))
    );
}

#[test]
fn test_case_sensitive_by_default() {
    let mut trie = LanaiTrie::new();
    trie.insert("Tar", 1, true).unwrap();
    trie.insert("tar", 2, true).unwrap();

    assert_eq!(trie.find("Tar").unwrap(), Some(&1));
    assert_eq!(trie.find("tar").unwrap(), Some(&2));
    assert_eq!(trie.len(), 2);
}

#[test]
fn test_borrowed_values_stay_with_caller() {
    let payloads = vec![String::from("first"), String::from("second")];
    let mut trie = LanaiTrie::new();
    trie.insert("one", &payloads[0], true).unwrap();
    trie.insert("two", &payloads[1], true).unwrap();

    assert_eq!(trie.find("two").unwrap().map(|s| s.as_str()), Some("second"));
    drop(trie);
    assert_eq!(payloads.len(), 2);
}

#[test]
fn test_destroy_releases_every_value_once() {
    let payload = Rc::new(());
    let mut trie = LanaiTrie::new();
    for key in ["cat", "car", "cart", "dog", "do", "tardis", "tarbaby", "tar"] {
        trie.insert(key, Rc::clone(&payload), true).unwrap();
    }
    // Replaced and rejected values are dropped on the spot
    trie.insert("cat", Rc::clone(&payload), true).unwrap();
    assert!(trie.insert("cat", Rc::clone(&payload), false).is_err());
    assert_eq!(Rc::strong_count(&payload), 1 + trie.len());

    let nodes = trie.node_count();
    assert_eq!(trie.destroy(), nodes);
    assert_eq!(Rc::strong_count(&payload), 1);
}

#[test]
fn test_clear_resets_trie() {
    let mut trie = LanaiTrie::new();
    trie.insert("cat", 1, true).unwrap();
    trie.insert("car", 2, true).unwrap();
    trie.clear();

    assert!(trie.is_empty());
    assert_eq!(trie.node_count(), 0);
    assert_eq!(trie.find("cat").unwrap(), None);

    trie.insert("car", 3, true).unwrap();
    assert_eq!(trie.find("car").unwrap(), Some(&3));
    trie.assert_invariants();
}

#[test]
fn test_deep_chain_stats() {
    let mut trie = LanaiTrie::new();
    let mut key = String::new();
    for depth in 1..=2_000 {
        key.push('a');
        trie.insert(&key, depth, true).unwrap();
    }

    let stats = trie.stats();
    assert_eq!(stats.keys, 2_000);
    assert_eq!(stats.max_depth, 2_000);
    assert_eq!(trie.find(&key).unwrap(), Some(&2_000));
    assert_eq!(trie.destroy(), 2_000);
}
