//! Bounded generator reply cache
//!
//! Keyed by a hash of the full prompt pair and token budget. Capacity is
//! fixed at construction; when full, the oldest entry is evicted. A zero
//! capacity disables caching entirely.

use std::collections::hash_map::DefaultHasher;
use std::collections::{HashMap, VecDeque};
use std::hash::{Hash, Hasher};

use parking_lot::Mutex;

struct CacheInner {
    entries: HashMap<u64, String>,
    order: VecDeque<u64>,
}

/// Fixed-capacity insertion-order cache for generated replies
pub struct ResponseCache {
    capacity: usize,
    inner: Mutex<CacheInner>,
}

impl ResponseCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            inner: Mutex::new(CacheInner {
                entries: HashMap::with_capacity(capacity),
                order: VecDeque::with_capacity(capacity),
            }),
        }
    }

    /// Cache key for a prompt pair and token budget
    pub fn key(system_prompt: &str, user_prompt: &str, max_tokens: u32) -> u64 {
        let mut hasher = DefaultHasher::new();
        system_prompt.hash(&mut hasher);
        user_prompt.hash(&mut hasher);
        max_tokens.hash(&mut hasher);
        hasher.finish()
    }

    pub fn get(&self, key: u64) -> Option<String> {
        self.inner.lock().entries.get(&key).cloned()
    }

    pub fn insert(&self, key: u64, reply: String) {
        if self.capacity == 0 {
            return;
        }
        let mut inner = self.inner.lock();
        if inner.entries.contains_key(&key) {
            inner.entries.insert(key, reply);
            return;
        }
        if inner.entries.len() >= self.capacity {
            if let Some(oldest) = inner.order.pop_front() {
                inner.entries.remove(&oldest);
            }
        }
        inner.entries.insert(key, reply);
        inner.order.push_back(key);
    }

    pub fn len(&self) -> usize {
        self.inner.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
