//! Recency List Module
//!
//! Tracks least-recently-used order for byte-budget eviction.
//!
//! Implemented as an arena-based doubly-linked list: nodes live in a
//! `Vec` and link to each other by index, with freed slots recycled
//! through a free list. All operations are O(1) and no unsafe code or
//! shared-ownership pointers are involved. Head = most recently used,
//! tail = least recently used.

use crate::cache::CacheKey;

/// Sentinel value for null links in the doubly-linked list.
const SENTINEL: usize = usize::MAX;

/// A node in the arena-based doubly-linked list.
///
/// `key` is `None` only while the slot sits on the free list.
#[derive(Debug)]
struct Node {
    key: Option<CacheKey>,
    prev: usize,
    next: usize,
}

// == Recency List ==
/// Ordered structure over live entry identities, head = most recent.
#[derive(Debug, Default)]
pub struct RecencyList {
    /// Arena of nodes; slots are recycled after detach/pop
    arena: Vec<Node>,
    /// Index of the most recently used node
    head: usize,
    /// Index of the least recently used node
    tail: usize,
    /// Free-list head for recycling removed slots
    free_head: usize,
    /// Number of live nodes
    len: usize,
}

impl RecencyList {
    // == Constructor ==
    /// Creates a new empty recency list.
    pub fn new() -> Self {
        Self {
            arena: Vec::new(),
            head: SENTINEL,
            tail: SENTINEL,
            free_head: SENTINEL,
            len: 0,
        }
    }

    // == Push Front ==
    /// Inserts a new identity at the head (most recent position) and
    /// returns its node index.
    ///
    /// The caller must not insert an identity that is already present;
    /// the entry table guarantees one node per live entry.
    pub fn push_front(&mut self, key: CacheKey) -> usize {
        let idx = self.alloc(key);
        self.link_front(idx);
        self.len += 1;
        idx
    }

    // == Move To Front ==
    /// Marks the node as most recently used. No-op if already at head.
    pub fn move_to_front(&mut self, idx: usize) {
        if self.head == idx {
            return;
        }
        self.unlink(idx);
        self.link_front(idx);
    }

    // == Pop Back ==
    /// Removes and returns the least recently used identity, or None
    /// when the list is empty.
    pub fn pop_back(&mut self) -> Option<CacheKey> {
        if self.tail == SENTINEL {
            return None;
        }
        let idx = self.tail;
        self.unlink(idx);
        Some(self.free(idx))
    }

    // == Detach ==
    /// Removes an arbitrary node by index and returns its identity.
    pub fn detach(&mut self, idx: usize) -> CacheKey {
        self.unlink(idx);
        self.free(idx)
    }

    // == Length ==
    /// Returns the number of live nodes.
    pub fn len(&self) -> usize {
        self.len
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    // == Keys ==
    /// Iterates identities from most to least recently used.
    pub fn keys(&self) -> impl Iterator<Item = &CacheKey> {
        let mut cursor = self.head;
        std::iter::from_fn(move || {
            if cursor == SENTINEL {
                return None;
            }
            let node = &self.arena[cursor];
            cursor = node.next;
            node.key.as_ref()
        })
    }

    // == Internal: slot management ==

    /// Takes a slot from the free list or grows the arena.
    fn alloc(&mut self, key: CacheKey) -> usize {
        if self.free_head != SENTINEL {
            let idx = self.free_head;
            self.free_head = self.arena[idx].next;
            self.arena[idx].key = Some(key);
            idx
        } else {
            self.arena.push(Node {
                key: Some(key),
                prev: SENTINEL,
                next: SENTINEL,
            });
            self.arena.len() - 1
        }
    }

    /// Returns a slot to the free list, extracting its identity.
    fn free(&mut self, idx: usize) -> CacheKey {
        let key = self.arena[idx]
            .key
            .take()
            .expect("recency node already freed");
        self.arena[idx].next = self.free_head;
        self.free_head = idx;
        self.len -= 1;
        key
    }

    /// Splices a detached node in at the head.
    fn link_front(&mut self, idx: usize) {
        self.arena[idx].prev = SENTINEL;
        self.arena[idx].next = self.head;
        if self.head != SENTINEL {
            self.arena[self.head].prev = idx;
        }
        self.head = idx;
        if self.tail == SENTINEL {
            self.tail = idx;
        }
    }

    /// Unlinks a node from its neighbors without freeing the slot.
    fn unlink(&mut self, idx: usize) {
        let (prev, next) = (self.arena[idx].prev, self.arena[idx].next);
        if prev != SENTINEL {
            self.arena[prev].next = next;
        } else {
            self.head = next;
        }
        if next != SENTINEL {
            self.arena[next].prev = prev;
        } else {
            self.tail = prev;
        }
    }
}
