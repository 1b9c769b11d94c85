//! Thread-safe wrapper around [`Trie`].
//!
//! `SharedTrie` puts a reader/writer lock at the trie boundary: lookups share
//! the read lock, insertions and removals take the write lock. Each public
//! call holds the lock for exactly one trie operation.

use std::any::Any;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::node::TrieNode;
use crate::trie::Trie;
use crate::Error;

/// A [`Trie`] behind a reader/writer lock, for sharing through an `Arc`.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use std::thread;
/// use typed_trie::SharedTrie;
///
/// let trie = Arc::new(SharedTrie::new());
///
/// let handles: Vec<_> = (0..4_u32)
///     .map(|i| {
///         let trie = Arc::clone(&trie);
///         thread::spawn(move || trie.insert(&format!("key{}", i), i))
///     })
///     .collect();
///
/// for handle in handles {
///     assert!(handle.join().unwrap());
/// }
///
/// assert_eq!(trie.len(), 4);
/// assert_eq!(trie.get::<u32>("key2"), Some(2));
/// ```
#[derive(Debug, Default)]
pub struct SharedTrie {
    inner: RwLock<Trie>,
}

impl SharedTrie {
    /// Creates a new, empty shared trie.
    pub fn new() -> Self {
        Self::from_trie(Trie::new())
    }

    /// Wraps an existing trie.
    pub fn from_trie(trie: Trie) -> Self {
        SharedTrie {
            inner: RwLock::new(trie),
        }
    }

    /// Unwraps the trie, consuming the lock.
    pub fn into_inner(self) -> Trie {
        self.inner.into_inner().unwrap_or_else(PoisonError::into_inner)
    }

    // Every trie operation leaves the tree consistent at each point it can
    // unwind from, so a poisoned lock still guards a valid trie.
    fn read(&self) -> RwLockReadGuard<'_, Trie> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Trie> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// See [`Trie::insert`].
    pub fn insert<T>(&self, key: &str, value: T) -> bool
    where
        T: Any + Send + Sync,
    {
        self.write().insert(key, value)
    }

    /// See [`Trie::try_insert`].
    pub fn try_insert<T>(&self, key: &str, value: T) -> Result<(), Error>
    where
        T: Any + Send + Sync,
    {
        self.write().try_insert(key, value)
    }

    /// See [`Trie::remove`].
    pub fn remove(&self, key: &str) -> bool {
        self.write().remove(key)
    }

    /// See [`Trie::try_remove`].
    pub fn try_remove(&self, key: &str) -> Result<(), Error> {
        self.write().try_remove(key)
    }

    /// See [`Trie::get`].
    pub fn get<T>(&self, key: &str) -> Option<T>
    where
        T: Any + Clone,
    {
        self.read().get(key)
    }

    /// See [`Trie::lookup`].
    pub fn lookup<T>(&self, key: &str) -> Result<T, Error>
    where
        T: Any + Clone,
    {
        self.read().lookup(key)
    }

    /// See [`Trie::get_or_default`].
    pub fn get_or_default<T>(&self, key: &str) -> (T, bool)
    where
        T: Any + Clone + Default,
    {
        self.read().get_or_default(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.read().contains_key(key)
    }

    /// Runs `f` on the root node while holding the read lock.
    ///
    /// The root cannot outlive the lock, so it is only reachable inside `f`.
    pub fn with_root<R>(&self, f: impl FnOnce(&TrieNode) -> R) -> R {
        f(self.read().root())
    }
}

impl From<Trie> for SharedTrie {
    fn from(trie: Trie) -> Self {
        Self::from_trie(trie)
    }
}
