//! Node implementation for the trie.
//!
//! A `TrieNode` stands for one character position on the path of one or more
//! keys. Nodes come in two kinds, recorded in [`NodeKind`]: plain path nodes,
//! and terminal nodes that end a stored key and own its value. Whether a node
//! is terminal is read straight off its kind, so the flag and the value can
//! never disagree.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fmt;
use std::mem;

use crate::value::TypedValue;

/// What a node carries besides its character and children.
#[derive(Debug)]
pub enum NodeKind {
    /// An intermediate character of one or more keys
    Path,
    /// The final character of a stored key, holding that key's value
    Terminal(TypedValue),
}

/// A single node of the trie.
///
/// Each node exclusively owns its children; there are no parent links and no
/// sharing between subtrees. Dropping, counting and debug-printing never
/// recurse, so a node may sit at the end of an arbitrarily long key.
pub struct TrieNode {
    /// The character this node represents
    key_char: char,

    /// Path or terminal, with the value in the latter case
    kind: NodeKind,

    /// Child nodes indexed by their character
    children: HashMap<char, Box<TrieNode>>,
}

impl TrieNode {
    /// Character held by the root node.
    pub const ROOT_CHAR: char = '\0';

    /// Creates a childless path node for `key_char`.
    pub fn new(key_char: char) -> Self {
        TrieNode {
            key_char,
            kind: NodeKind::Path,
            children: HashMap::new(),
        }
    }

    /// Creates the sentinel root node.
    pub fn root() -> Self {
        Self::new(Self::ROOT_CHAR)
    }

    /// Creates a childless terminal node for `key_char` holding `value`.
    pub fn with_value(key_char: char, value: TypedValue) -> Self {
        TrieNode {
            key_char,
            kind: NodeKind::Terminal(value),
            children: HashMap::new(),
        }
    }

    /// The character this node represents
    pub fn key_char(&self) -> char {
        self.key_char
    }

    /// Whether this is a path or a terminal node
    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    /// Returns `true` if a key ends at this node.
    pub fn is_terminal(&self) -> bool {
        matches!(self.kind, NodeKind::Terminal(_))
    }

    /// The value of the key ending here, if this is a terminal node.
    pub fn value(&self) -> Option<&TypedValue> {
        match &self.kind {
            NodeKind::Terminal(value) => Some(value),
            NodeKind::Path => None,
        }
    }

    /// Returns `true` if a child exists under `key_char`
    pub fn has_child(&self, key_char: char) -> bool {
        self.children.contains_key(&key_char)
    }

    /// Returns `true` if this node has at least one child
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Returns `true` if this node has no children
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns the number of direct children
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Borrows the child under `key_char`, if any
    pub fn get_child(&self, key_char: char) -> Option<&TrieNode> {
        self.children.get(&key_char).map(|child| &**child)
    }

    /// Mutably borrows the child under `key_char`, if any
    pub fn get_child_mut(&mut self, key_char: char) -> Option<&mut TrieNode> {
        self.children.get_mut(&key_char).map(|child| &mut **child)
    }

    /// Mutably borrows the child under `key_char`, adding an empty path node
    /// there first if there is none.
    pub fn child_or_insert(&mut self, key_char: char) -> &mut TrieNode {
        &mut **self
            .children
            .entry(key_char)
            .or_insert_with(|| Box::new(TrieNode::new(key_char)))
    }

    /// Iterates over the children in no particular order.
    pub fn children(&self) -> impl Iterator<Item = (char, &TrieNode)> {
        self.children.iter().map(|(&key_char, child)| (key_char, &**child))
    }

    /// Adds `child` under `key_char` and returns a borrow of it.
    ///
    /// Returns `None`, dropping `child`, if a child under `key_char` already
    /// exists or if `child` represents a different character.
    pub fn insert_child(&mut self, key_char: char, child: Box<TrieNode>) -> Option<&mut TrieNode> {
        if child.key_char != key_char {
            return None;
        }

        match self.children.entry(key_char) {
            Entry::Occupied(_) => None,
            Entry::Vacant(slot) => Some(&mut **slot.insert(child)),
        }
    }

    /// Detaches the child under `key_char`, if any.
    ///
    /// The child and its whole subtree are dropped unless the caller keeps the
    /// returned box.
    pub fn remove_child(&mut self, key_char: char) -> Option<Box<TrieNode>> {
        self.children.remove(&key_char)
    }

    /// Makes this node terminal with `value`, or a path node when `value` is
    /// `None`. Any previously held value is dropped.
    pub fn set_terminal(&mut self, value: Option<TypedValue>) {
        self.kind = match value {
            Some(value) => NodeKind::Terminal(value),
            None => NodeKind::Path,
        };
    }

    /// Converts this node into a terminal node holding `value`.
    ///
    /// The character and every child move into the returned node.
    pub fn into_terminal(mut self, value: TypedValue) -> TrieNode {
        let mut node = TrieNode::new(self.key_char);
        node.children = mem::take(&mut self.children);
        node.set_terminal(Some(value));
        node
    }

    /// Converts this node into a path node, dropping its value.
    ///
    /// The character and every child move into the returned node.
    pub fn into_path(mut self) -> TrieNode {
        let mut node = TrieNode::new(self.key_char);
        node.children = mem::take(&mut self.children);
        node.set_terminal(None);
        node
    }

    /// Returns the number of nodes in this subtree, this one included
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];

        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.children.values().map(|child| &**child));
        }

        count
    }

    /// Returns the number of values stored in this subtree
    pub fn terminal_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];

        while let Some(node) = stack.pop() {
            if node.is_terminal() {
                count += 1;
            }
            stack.extend(node.children.values().map(|child| &**child));
        }

        count
    }
}

impl Drop for TrieNode {
    // The default drop glue recurses once per level
    fn drop(&mut self) {
        let mut stack: Vec<Box<TrieNode>> = self.children.drain().map(|(_, child)| child).collect();

        while let Some(mut node) = stack.pop() {
            stack.extend(node.children.drain().map(|(_, child)| child));
        }
    }
}

impl fmt::Debug for TrieNode {
    // Lists child characters rather than descending into them
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut children: Vec<char> = self.children.keys().copied().collect();
        children.sort_unstable();

        f.debug_struct("TrieNode")
            .field("key_char", &self.key_char)
            .field("kind", &self.kind)
            .field("children", &children)
            .finish()
    }
}
