use typed_trie::{Error, Trie, TrieNode};

// Follows `key` from the root using only the public node API
fn node_at<'a>(trie: &'a Trie, key: &str) -> Option<&'a TrieNode> {
    key.chars()
        .try_fold(trie.root(), |node, c| node.get_child(c))
}

#[test]
fn test_insert_then_get() {
    let mut trie = Trie::new();

    assert!(trie.insert("alpha", 1_u64));
    assert!(trie.insert("beta", String::from("two")));
    assert!(trie.insert("gamma", (3_u8, 'c')));

    assert_eq!(trie.get_or_default::<u64>("alpha"), (1, true));
    assert_eq!(trie.get_or_default::<String>("beta"), ("two".to_string(), true));
    assert_eq!(trie.get_or_default::<(u8, char)>("gamma"), ((3, 'c'), true));
    assert_eq!(trie.len(), 3);
}

#[test]
fn test_duplicate_insert_keeps_first_value() {
    let mut trie = Trie::new();

    assert!(trie.insert("key", 1_i32));
    assert!(!trie.insert("key", 2_i32));
    assert!(!trie.insert("key", "different type"));

    assert_eq!(trie.get_or_default::<i32>("key"), (1, true));
    assert_eq!(trie.len(), 1);
}

#[test]
fn test_remove_missing_leaves_tree_unchanged() {
    let mut trie = Trie::new();
    trie.insert("apple", 1_i32);
    trie.insert("banana", 2_i32);
    let nodes = trie.root().node_count();

    assert!(!trie.remove("cherry"));
    assert!(!trie.remove("app"));
    assert!(!trie.remove("apples"));

    assert_eq!(trie.root().node_count(), nodes);
    assert_eq!(trie.get::<i32>("apple"), Some(1));
    assert_eq!(trie.get::<i32>("banana"), Some(2));
}

#[test]
fn test_insert_remove_get() {
    let mut trie = Trie::new();

    trie.insert("ephemeral", 9_u16);
    assert!(trie.remove("ephemeral"));

    assert_eq!(trie.get_or_default::<u16>("ephemeral"), (0, false));
    assert_eq!(trie.lookup::<u16>("ephemeral"), Err(Error::NotFound));
}

#[test]
fn test_pruning_after_remove() {
    let mut trie = Trie::new();
    trie.insert("app", 1_i32);
    trie.insert("apple", 2_i32);

    assert!(trie.remove("apple"));

    assert_eq!(trie.get::<i32>("app"), Some(1));

    // Nothing below "app" survives
    let app = node_at(&trie, "app").unwrap();
    assert!(app.is_terminal());
    assert!(!app.has_children());
    assert!(!app.has_child('l'));
    assert!(node_at(&trie, "appl").is_none());

    // root + a + p + p
    assert_eq!(trie.root().node_count(), 4);
    assert_eq!(trie.root().terminal_count(), 1);
}

#[test]
fn test_pruning_removes_whole_branch() {
    let mut trie = Trie::new();
    trie.insert("apple", 1_i32);
    trie.insert("banana", 2_i32);

    assert!(trie.remove("banana"));

    assert!(!trie.root().has_child('b'));
    assert!(trie.root().has_child('a'));
    assert_eq!(trie.root().node_count(), 6);
}

#[test]
fn test_type_mismatch() {
    let mut trie = Trie::new();
    trie.insert("x", 5_i32);

    assert_eq!(trie.get_or_default::<String>("x"), (String::new(), false));
    assert_eq!(trie.get_or_default::<i32>("x"), (5, true));

    match trie.lookup::<String>("x") {
        Err(Error::TypeMismatch { expected, found }) => {
            assert_eq!(expected, std::any::type_name::<String>());
            assert_eq!(found, std::any::type_name::<i32>());
        }
        other => panic!("expected a type mismatch, got {:?}", other),
    }

    // A mismatched lookup does not disturb the value
    assert!(trie.contains_key("x"));
}

#[test]
fn test_empty_key() {
    let mut trie = Trie::new();

    assert!(!trie.insert("", 1_i32));
    assert!(!trie.remove(""));
    assert_eq!(trie.get_or_default::<i32>(""), (0, false));

    assert_eq!(trie.try_insert("", 1_i32), Err(Error::EmptyKey));
    assert_eq!(trie.try_remove(""), Err(Error::EmptyKey));
    assert_eq!(trie.lookup::<i32>(""), Err(Error::EmptyKey));

    assert!(trie.is_empty());
    assert!(!trie.root().has_children());
}

#[test]
fn test_remove_is_not_repeatable() {
    let mut trie = Trie::new();
    trie.insert("once", ());

    assert!(trie.remove("once"));
    assert!(!trie.remove("once"));
    assert_eq!(trie.try_remove("once"), Err(Error::NotFound));
}

#[test]
fn test_root_is_never_terminal_or_removed() {
    let mut trie = Trie::new();
    for key in &["a", "ab", "abc", "b"] {
        trie.insert(key, key.len());
    }
    for key in &["abc", "a", "b", "ab"] {
        assert!(trie.remove(key));
    }

    let root = trie.root();
    assert_eq!(root.key_char(), TrieNode::ROOT_CHAR);
    assert!(!root.is_terminal());
    assert!(root.is_leaf());
}

#[test]
fn test_error_messages() {
    assert_eq!(Error::EmptyKey.to_string(), "key must not be empty");
    assert_eq!(Error::DuplicateKey.to_string(), "key is already present in the trie");

    let mismatch = Error::TypeMismatch {
        expected: "alloc::string::String",
        found: "i32",
    };
    assert_eq!(
        mismatch.to_string(),
        "value stored as `i32` was requested as `alloc::string::String`"
    );
}

#[test]
fn test_long_key_lifecycle() {
    let key: String = "abcdefghij".repeat(2_000);
    let mut trie = Trie::new();

    assert!(trie.insert(&key, String::from("deep")));
    assert_eq!(trie.get::<String>(&key), Some("deep".to_string()));
    assert_eq!(trie.root().node_count(), key.len() + 1);
    assert!(format!("{:?}", trie).contains("nodes: 20001"));

    assert!(trie.remove(&key));
    assert_eq!(trie.get::<String>(&key), None);
    assert_eq!(trie.root().node_count(), 1);

    assert!(trie.insert(&key, 7_u64));
    drop(trie);
}

#[test]
fn test_long_key_with_stored_prefix() {
    let key = "q".repeat(12_000);
    let prefix = &key[..6_000];
    let mut trie = Trie::new();

    trie.insert(&key, 1_u8);
    trie.insert(prefix, 2_u8);

    assert!(trie.remove(&key));

    let end = node_at(&trie, prefix).unwrap();
    assert!(end.is_terminal());
    assert!(end.is_leaf());
    assert_eq!(trie.root().node_count(), 6_001);
    assert_eq!(trie.get::<u8>(prefix), Some(2));
}
