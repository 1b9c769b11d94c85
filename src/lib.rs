//! # Typed Trie
//!
//! A character trie mapping string keys to values whose type is chosen per key.
//!
//! Every key is stored as a path of nodes, one per character, starting below a
//! sentinel root. The node where a key ends is a *terminal* node and owns the
//! key's value behind a small type-erasure wrapper; all other nodes are plain
//! *path* nodes. Lookups name the type they expect and only succeed when it
//! matches the type the value was inserted with.
//!
//! ## Features
//!
//! - **Heterogeneous values**: `i32` under one key, `String` under another
//! - **First writer wins**: inserting an existing key is rejected, never merged
//! - **Pruning removal**: removing a key frees every path node only it needed
//! - **Shared access**: [`SharedTrie`] adds a reader/writer lock for use across threads
//!
//! ## Example
//!
//! ```rust
//! use typed_trie::Trie;
//!
//! let mut trie = Trie::new();
//!
//! assert!(trie.insert("answer", 42_i32));
//! assert!(trie.insert("greeting", String::from("hello")));
//!
//! assert_eq!(trie.get::<i32>("answer"), Some(42));
//! assert_eq!(trie.get::<String>("greeting"), Some("hello".to_string()));
//!
//! // The value exists, but not as a `String`
//! assert_eq!(trie.get::<String>("answer"), None);
//! ```

pub mod node;
mod sync;
mod trie;
mod value;

// Re-export public types
pub use crate::node::{NodeKind, TrieNode};
pub use crate::sync::SharedTrie;
pub use crate::trie::Trie;
pub use crate::value::TypedValue;

/// Errors that can occur in trie operations.
///
/// The boolean and `Option` returning methods fold every variant into
/// `false`/`None`; the `try_*` and `lookup` methods report which one occurred.
///
/// ```rust
/// use typed_trie::{Error, Trie};
///
/// let mut trie = Trie::new();
/// trie.try_insert("x", 5_i32).unwrap();
///
/// assert_eq!(trie.try_insert("x", 6_i32), Err(Error::DuplicateKey));
/// assert!(matches!(trie.lookup::<String>("x"), Err(Error::TypeMismatch { .. })));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The empty string is never a valid key
    #[error("key must not be empty")]
    EmptyKey,
    /// No value is stored under the key
    #[error("key is not present in the trie")]
    NotFound,
    /// A value is already stored under the key
    #[error("key is already present in the trie")]
    DuplicateKey,
    /// A value is stored under the key, but with a different type
    #[error("value stored as `{found}` was requested as `{expected}`")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },
}
