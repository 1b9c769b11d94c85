//! Sharing a trie between threads
use std::sync::Arc;
use std::thread;

use typed_trie::SharedTrie;

fn main() {
    let trie = Arc::new(SharedTrie::new());

    let handles: Vec<_> = (0..4_u32)
        .map(|worker| {
            let trie = Arc::clone(&trie);
            thread::spawn(move || {
                for i in 0..10_u32 {
                    trie.insert(&format!("worker{}/item{}", worker, i), worker * 10 + i);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    println!("stored {} keys", trie.len());
    assert_eq!(trie.get::<u32>("worker3/item7"), Some(37));

    let nodes = trie.with_root(|root| root.node_count());
    println!("using {} nodes", nodes);
}
