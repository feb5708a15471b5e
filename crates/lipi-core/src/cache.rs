//! Bounded LRU cache of transliteration results.
//!
//! As the user types, the host re-transliterates the whole composing buffer
//! on every keystroke, and often asks for the committed form of the same
//! buffer moments later. Results are keyed by `(input, composing)`.
//!
//! The recency list is a doubly-linked list threaded through a slab of
//! nodes (indices, not pointers); lookups go through one hash map per
//! composing flag so that `get` can borrow the input as `&str`.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::trace;

const NIL: usize = usize::MAX;

#[derive(Debug)]
struct Node {
    input: String,
    composing: bool,
    value: String,
    prev: usize,
    next: usize,
}

#[derive(Debug)]
struct Lru {
    nodes: Vec<Node>,
    /// [non-composing, composing] input -> node index.
    index: [HashMap<String, usize>; 2],
    /// Most recently used.
    head: usize,
    /// Least recently used.
    tail: usize,
    capacity: usize,
}

impl Lru {
    fn new(capacity: usize) -> Self {
        Self {
            nodes: Vec::new(),
            index: [HashMap::new(), HashMap::new()],
            head: NIL,
            tail: NIL,
            capacity,
        }
    }

    fn len(&self) -> usize {
        self.index[0].len() + self.index[1].len()
    }

    fn detach(&mut self, idx: usize) {
        let (prev, next) = (self.nodes[idx].prev, self.nodes[idx].next);
        if prev == NIL {
            self.head = next;
        } else {
            self.nodes[prev].next = next;
        }
        if next == NIL {
            self.tail = prev;
        } else {
            self.nodes[next].prev = prev;
        }
        self.nodes[idx].prev = NIL;
        self.nodes[idx].next = NIL;
    }

    fn push_front(&mut self, idx: usize) {
        self.nodes[idx].prev = NIL;
        self.nodes[idx].next = self.head;
        if self.head != NIL {
            self.nodes[self.head].prev = idx;
        }
        self.head = idx;
        if self.tail == NIL {
            self.tail = idx;
        }
    }

    fn promote(&mut self, idx: usize) {
        if self.head != idx {
            self.detach(idx);
            self.push_front(idx);
        }
    }

    fn get(&mut self, input: &str, composing: bool) -> Option<&str> {
        let idx = *self.index[usize::from(composing)].get(input)?;
        self.promote(idx);
        Some(&self.nodes[idx].value)
    }

    fn put(&mut self, input: &str, composing: bool, value: String) {
        let slot = usize::from(composing);
        if let Some(&idx) = self.index[slot].get(input) {
            self.nodes[idx].value = value;
            self.promote(idx);
            return;
        }

        let idx = if self.len() >= self.capacity && self.tail != NIL {
            // Full: recycle the least recently used node in place.
            let idx = self.tail;
            self.detach(idx);
            let old = &mut self.nodes[idx];
            self.index[usize::from(old.composing)].remove(&old.input);
            trace!(evicted = %old.input, composing = old.composing, "cache evict");
            old.input.clear();
            old.input.push_str(input);
            old.composing = composing;
            old.value = value;
            idx
        } else {
            self.nodes.push(Node {
                input: input.to_string(),
                composing,
                value,
                prev: NIL,
                next: NIL,
            });
            self.nodes.len() - 1
        };
        self.push_front(idx);
        self.index[slot].insert(input.to_string(), idx);
    }

    fn clear(&mut self) {
        self.nodes.clear();
        self.index.iter_mut().for_each(HashMap::clear);
        self.head = NIL;
        self.tail = NIL;
    }
}

/// Thread-safe LRU cache keyed by `(input, composing)`.
#[derive(Debug)]
pub struct ResultCache {
    inner: Mutex<Lru>,
}

impl ResultCache {
    /// A capacity of zero is raised to one.
    pub fn new(capacity: usize) -> Self {
        Self {
            inner: Mutex::new(Lru::new(capacity.max(1))),
        }
    }

    /// Cached values are pure functions of their key, so a panic while the
    /// lock was held cannot leave a wrong value behind.
    fn lock(&self) -> MutexGuard<'_, Lru> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Look up a result and mark it most recently used.
    pub fn get(&self, input: &str, composing: bool) -> Option<String> {
        self.lock().get(input, composing).map(str::to_string)
    }

    /// Insert or replace a result, evicting the least recently used entry
    /// when full.
    pub fn put(&self, input: &str, composing: bool, value: String) {
        self.lock().put(input, composing, value);
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn capacity(&self) -> usize {
        self.lock().capacity
    }

    pub fn clear(&self) {
        self.lock().clear();
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::thread;

    use super::*;

    #[test]
    fn get_after_put() {
        let cache = ResultCache::new(4);
        cache.put("ka", false, "A".into());
        assert_eq!(cache.get("ka", false), Some("A".into()));
        assert_eq!(cache.get("ki", false), None);
    }

    #[test]
    fn composing_flag_is_part_of_the_key() {
        let cache = ResultCache::new(4);
        cache.put("k", false, "committed".into());
        cache.put("k", true, "composing".into());
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get("k", false), Some("committed".into()));
        assert_eq!(cache.get("k", true), Some("composing".into()));
    }

    #[test]
    fn put_existing_key_replaces_without_growing() {
        let cache = ResultCache::new(4);
        cache.put("ka", false, "A".into());
        cache.put("ka", false, "B".into());
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get("ka", false), Some("B".into()));
    }

    #[test]
    fn evicts_least_recently_used() {
        let cache = ResultCache::new(2);
        cache.put("a", false, "1".into());
        cache.put("b", false, "2".into());
        // Touch "a" so "b" becomes the eviction candidate.
        assert!(cache.get("a", false).is_some());
        cache.put("c", false, "3".into());
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get("b", false), None);
        assert_eq!(cache.get("a", false), Some("1".into()));
        assert_eq!(cache.get("c", false), Some("3".into()));
    }

    #[test]
    fn five_hundred_and_one_keys_leave_five_hundred() {
        let cache = ResultCache::new(500);
        for i in 0..501 {
            cache.put(&format!("k{i}"), i % 2 == 0, i.to_string());
        }
        assert_eq!(cache.len(), 500);
        assert_eq!(cache.get("k0", true), None);
        assert_eq!(cache.get("k1", false), Some("1".into()));
        assert_eq!(cache.get("k500", true), Some("500".into()));
    }

    #[test]
    fn eviction_follows_access_order_not_insertion_order() {
        let cache = ResultCache::new(3);
        for key in ["a", "b", "c"] {
            cache.put(key, false, key.into());
        }
        cache.get("a", false);
        cache.get("b", false);
        cache.put("d", false, "d".into());
        assert_eq!(cache.get("c", false), None);
        cache.put("e", false, "e".into());
        assert_eq!(cache.get("a", false), None);
        assert!(cache.get("b", false).is_some());
    }

    #[test]
    fn capacity_one() {
        let cache = ResultCache::new(0);
        assert_eq!(cache.capacity(), 1);
        cache.put("a", false, "1".into());
        cache.put("b", false, "2".into());
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get("b", false), Some("2".into()));
    }

    #[test]
    fn clear_empties_the_cache() {
        let cache = ResultCache::new(8);
        cache.put("a", false, "1".into());
        cache.put("b", true, "2".into());
        cache.clear();
        assert!(cache.is_empty());
        assert_eq!(cache.get("a", false), None);
        cache.put("c", false, "3".into());
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn concurrent_writers_stay_bounded() {
        let cache = Arc::new(ResultCache::new(64));
        let handles: Vec<_> = (0..8)
            .map(|t| {
                let cache = Arc::clone(&cache);
                thread::spawn(move || {
                    for i in 0..200 {
                        let key = format!("{}", i % 100);
                        cache.put(&key, t % 2 == 0, key.clone());
                        if let Some(v) = cache.get(&key, t % 2 == 0) {
                            assert_eq!(v, key);
                        }
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }
        assert!(cache.len() <= 64);
    }
}
