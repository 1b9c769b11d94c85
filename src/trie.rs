//! The main trie implementation.
//!
//! This module contains the `Trie` type, which provides the primary API for working
//! with the trie data structure.

use std::any::Any;
use std::fmt;

use tracing::{debug, trace};

use crate::node::{NodeKind, TrieNode};
use crate::value::TypedValue;
use crate::Error;

/// A character trie storing one value of any type per key.
///
/// Keys are walked one `char` at a time from a sentinel root. Intermediate
/// nodes are created on demand by [`insert`](Trie::insert) and pruned again by
/// [`remove`](Trie::remove) once no remaining key needs them.
///
/// The trie itself is not synchronized: mutation needs `&mut self`. Wrap it in
/// a [`SharedTrie`](crate::SharedTrie) to use it from several threads.
pub struct Trie {
    /// The root node of the trie
    root: TrieNode,

    /// The number of values stored in the trie
    size: usize,
}

impl Trie {
    /// Creates a new, empty trie.
    ///
    /// # Examples
    ///
    /// ```
    /// use typed_trie::Trie;
    ///
    /// let trie = Trie::new();
    /// assert!(trie.is_empty());
    /// ```
    pub fn new() -> Self {
        Trie {
            root: TrieNode::root(),
            size: 0,
        }
    }

    /// Returns the number of values stored in the trie.
    ///
    /// # Examples
    ///
    /// ```
    /// use typed_trie::Trie;
    ///
    /// let mut trie = Trie::new();
    /// assert_eq!(trie.len(), 0);
    ///
    /// trie.insert("hello", 42);
    /// assert_eq!(trie.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns `true` if the trie contains no values.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Read-only access to the root node, for inspecting the tree's shape.
    ///
    /// # Examples
    ///
    /// ```
    /// use typed_trie::Trie;
    ///
    /// let mut trie = Trie::new();
    /// trie.insert("ab", 1_u8);
    ///
    /// let a = trie.root().get_child('a').unwrap();
    /// assert!(!a.is_terminal());
    /// assert!(a.get_child('b').unwrap().is_terminal());
    /// ```
    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    /// Inserts `value` under `key`, returning `true` on success.
    ///
    /// Fails if `key` is empty or already holds a value; an existing value is
    /// never replaced.
    ///
    /// # Examples
    ///
    /// ```
    /// use typed_trie::Trie;
    ///
    /// let mut trie = Trie::new();
    ///
    /// assert!(trie.insert("hello", 1_i32));
    /// assert!(!trie.insert("hello", 2_i32));
    /// assert_eq!(trie.get::<i32>("hello"), Some(1));
    /// ```
    pub fn insert<T>(&mut self, key: &str, value: T) -> bool
    where
        T: Any + Send + Sync,
    {
        self.try_insert(key, value).is_ok()
    }

    /// Inserts `value` under `key`, reporting why an insertion was rejected.
    pub fn try_insert<T>(&mut self, key: &str, value: T) -> Result<(), Error>
    where
        T: Any + Send + Sync,
    {
        match self.insert_inner(key, TypedValue::new(value)) {
            Ok(created) => {
                self.size += 1;
                trace!(key, created, "inserted key");
                Ok(())
            }
            Err(err) => {
                debug!(key, error = %err, "insert rejected");
                Err(err)
            }
        }
    }

    // Returns the number of nodes created for the key
    fn insert_inner(&mut self, key: &str, value: TypedValue) -> Result<usize, Error> {
        let mut chars = key.chars();
        let last = chars.next_back().ok_or(Error::EmptyKey)?;

        // Reject duplicates before any node is created
        if self.find(key).map_or(false, TrieNode::is_terminal) {
            return Err(Error::DuplicateKey);
        }

        let mut created = 0;
        let mut parent = &mut self.root;

        for c in chars {
            if !parent.has_child(c) {
                created += 1;
            }
            parent = parent.child_or_insert(c);
        }

        // Splice the terminal node in place of the path node it replaces
        let node = match parent.remove_child(last) {
            Some(existing) => *existing,
            None => {
                created += 1;
                TrieNode::new(last)
            }
        };

        let inserted = parent
            .insert_child(last, Box::new(node.into_terminal(value)))
            .is_some();
        debug_assert!(inserted, "slot for '{}' was just vacated", last);

        Ok(created)
    }

    /// Removes the value stored under `key`, returning `true` on success.
    ///
    /// Path nodes left without children or a value are deleted, so removing
    /// a key frees every node that only it used.
    ///
    /// # Examples
    ///
    /// ```
    /// use typed_trie::Trie;
    ///
    /// let mut trie = Trie::new();
    /// trie.insert("app", 1_u32);
    /// trie.insert("apple", 2_u32);
    ///
    /// assert!(trie.remove("apple"));
    /// assert!(!trie.remove("apple"));
    ///
    /// assert_eq!(trie.get::<u32>("app"), Some(1));
    /// assert!(trie.root().get_child('a').unwrap()
    ///     .get_child('p').unwrap()
    ///     .get_child('p').unwrap()
    ///     .is_leaf());
    /// ```
    pub fn remove(&mut self, key: &str) -> bool {
        self.try_remove(key).is_ok()
    }

    /// Removes the value stored under `key`, reporting why a removal failed.
    ///
    /// Removing a prefix of a stored key that is not itself a key fails with
    /// [`Error::NotFound`].
    pub fn try_remove(&mut self, key: &str) -> Result<(), Error> {
        if key.is_empty() {
            debug!(key, error = %Error::EmptyKey, "remove rejected");
            return Err(Error::EmptyKey);
        }

        match self.remove_inner(key) {
            Ok(pruned) => {
                self.size -= 1;
                trace!(key, pruned, "removed key");
                Ok(())
            }
            Err(err) => {
                debug!(key, error = %err, "remove rejected");
                Err(err)
            }
        }
    }

    // Returns the number of nodes pruned. All lookups happen before the first
    // mutation, so an error leaves the tree untouched.
    fn remove_inner(&mut self, key: &str) -> Result<usize, Error> {
        let path: Vec<char> = key.chars().collect();
        let (&last, ancestors) = path.split_last().ok_or(Error::EmptyKey)?;

        // Walk the chain once, noting the deepest ancestor that still has a
        // reason to exist once this key is gone: the root, another key's
        // terminal node, or a fork towards other keys.
        let mut node = &self.root;
        let mut keep = 0;
        for (depth, &c) in path.iter().enumerate() {
            if node.is_terminal() || node.child_count() > 1 {
                keep = depth;
            }
            node = node.get_child(c).ok_or(Error::NotFound)?;
        }

        if !node.is_terminal() {
            return Err(Error::NotFound);
        }
        let prune = node.is_leaf();

        // Splice the path node in place of the terminal node it replaces
        let parent = self.node_at_mut(ancestors).ok_or(Error::NotFound)?;
        if let Some(terminal) = parent.remove_child(last) {
            parent.insert_child(last, Box::new((*terminal).into_path()));
        }

        if !prune {
            return Ok(0);
        }

        // Every node below `keep` on the path now has a single child and no
        // value, so the whole tail goes at once
        let survivor = self.node_at_mut(&path[..keep]).ok_or(Error::NotFound)?;
        survivor.remove_child(path[keep]);

        Ok(path.len() - keep)
    }

    /// Returns a copy of the value stored under `key`, if there is one and it
    /// was inserted as a `T`.
    ///
    /// # Examples
    ///
    /// ```
    /// use typed_trie::Trie;
    ///
    /// let mut trie = Trie::new();
    /// trie.insert("x", 5_i32);
    ///
    /// assert_eq!(trie.get::<i32>("x"), Some(5));
    /// assert_eq!(trie.get::<String>("x"), None);
    /// assert_eq!(trie.get::<i32>("y"), None);
    /// ```
    pub fn get<T>(&self, key: &str) -> Option<T>
    where
        T: Any + Clone,
    {
        self.lookup(key).ok()
    }

    /// Returns a copy of the value stored under `key`, reporting why a lookup
    /// failed.
    ///
    /// # Panics
    ///
    /// Panics if the terminal node's value is corrupted, i.e. tagged as `T`
    /// but not holding one.
    pub fn lookup<T>(&self, key: &str) -> Result<T, Error>
    where
        T: Any + Clone,
    {
        if key.is_empty() {
            return Err(Error::EmptyKey);
        }

        let node = self.find(key).ok_or(Error::NotFound)?;

        match node.kind() {
            NodeKind::Terminal(value) => value.downcast_ref::<T>().map(T::clone),
            NodeKind::Path => Err(Error::NotFound),
        }
    }

    /// Returns the value stored under `key` and `true`, or `T::default()` and
    /// `false` if the lookup fails for any reason.
    ///
    /// # Examples
    ///
    /// ```
    /// use typed_trie::Trie;
    ///
    /// let mut trie = Trie::new();
    /// trie.insert("x", 5_i32);
    ///
    /// assert_eq!(trie.get_or_default::<i32>("x"), (5, true));
    /// assert_eq!(trie.get_or_default::<String>("x"), (String::new(), false));
    /// assert_eq!(trie.get_or_default::<i32>(""), (0, false));
    /// ```
    pub fn get_or_default<T>(&self, key: &str) -> (T, bool)
    where
        T: Any + Clone + Default,
    {
        match self.lookup(key) {
            Ok(value) => (value, true),
            Err(_) => (T::default(), false),
        }
    }

    /// Returns `true` if a value of any type is stored under `key`.
    pub fn contains_key(&self, key: &str) -> bool {
        !key.is_empty() && self.find(key).map_or(false, TrieNode::is_terminal)
    }

    fn node_at_mut(&mut self, path: &[char]) -> Option<&mut TrieNode> {
        let mut node = &mut self.root;
        for &c in path {
            node = node.get_child_mut(c)?;
        }
        Some(node)
    }

    // Follows `key` from the root; the empty key resolves to the root itself
    fn find(&self, key: &str) -> Option<&TrieNode> {
        key.chars()
            .try_fold(&self.root, |node, c| node.get_child(c))
    }
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Trie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Trie")
            .field("size", &self.size)
            .field("nodes", &self.root.node_count())
            .finish()
    }
}
