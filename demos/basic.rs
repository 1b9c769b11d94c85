//! Examples of using the typed trie
use typed_trie::{Error, Trie};

fn main() {
    // Create a new trie
    let mut trie = Trie::new();

    // Each key may hold a value of its own type
    assert!(trie.insert("hello", 1_i32));
    assert!(trie.insert("help", String::from("manual")));
    assert!(trie.insert("world", vec![1.0_f32, 2.0]));

    // Lookups name the type they expect
    assert_eq!(trie.get::<i32>("hello"), Some(1));
    assert_eq!(trie.get::<String>("help"), Some("manual".to_string()));
    assert_eq!(trie.get::<Vec<f32>>("world"), Some(vec![1.0, 2.0]));

    // Asking for the wrong type is reported, not panicked on
    match trie.lookup::<u64>("hello") {
        Err(Error::TypeMismatch { expected, found }) => {
            println!("hello holds a {}, not a {}", found, expected);
        }
        other => panic!("unexpected lookup result: {:?}", other),
    }

    // Existing keys are never overwritten
    assert!(!trie.insert("hello", 2_i32));

    // Removing a key prunes the nodes only it used
    let before = trie.root().node_count();
    assert!(trie.remove("hello"));
    println!("removing \"hello\" freed {} node(s)", before - trie.root().node_count());

    assert_eq!(trie.get::<String>("help"), Some("manual".to_string()));
    println!("{:?}", trie);
}
