//! Binary min-heap with stable handles and in-place key decrease.
//!
//! `std::collections::BinaryHeap` has no way to lower the key of an entry
//! that is already queued, so searches built on it push duplicates and skip
//! stale ones on pop. [`PriorityQueue`] instead hands out a [`Handle`] per
//! entry and lets the caller sift that entry upward after improving its key.

/// Reference to an entry of a [`PriorityQueue`].
///
/// A handle stays valid until its entry is removed or the queue is cleared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Handle(usize);

#[derive(Debug, Clone)]
struct Slot<K, T> {
    key: K,
    item: Option<T>,
    /// Position in `heap`, `None` once removed.
    pos: Option<usize>,
}

/// Min-heap ordered by `K`. Ties are broken by heap structure only.
#[derive(Debug, Clone)]
pub struct PriorityQueue<K, T> {
    heap: Vec<usize>,
    slots: Vec<Slot<K, T>>,
}

impl<K: Ord + Copy, T> Default for PriorityQueue<K, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord + Copy, T> PriorityQueue<K, T> {
    pub fn new() -> Self {
        Self {
            heap: Vec::new(),
            slots: Vec::new(),
        }
    }

    pub fn with_capacity(n: usize) -> Self {
        Self {
            heap: Vec::with_capacity(n),
            slots: Vec::with_capacity(n),
        }
    }

    /// Number of queued entries.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Drop every entry. All outstanding handles become invalid.
    pub fn clear(&mut self) {
        self.heap.clear();
        self.slots.clear();
    }

    /// Queue `item` with priority `key`.
    pub fn insert(&mut self, key: K, item: T) -> Handle {
        let slot = self.slots.len();
        let pos = self.heap.len();
        self.slots.push(Slot {
            key,
            item: Some(item),
            pos: Some(pos),
        });
        self.heap.push(slot);
        self.sift_up(pos);
        Handle(slot)
    }

    /// The entry with the smallest key, without removing it.
    pub fn peek(&self) -> Option<(K, &T)> {
        let slot = &self.slots[*self.heap.first()?];
        slot.item.as_ref().map(|item| (slot.key, item))
    }

    /// Remove and return the entry with the smallest key, or `None` when the
    /// queue is empty.
    pub fn remove_min(&mut self) -> Option<(K, T)> {
        if self.heap.is_empty() {
            return None;
        }
        let last = self.heap.len() - 1;
        self.swap(0, last);
        let top = self.heap.pop()?;
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        let slot = &mut self.slots[top];
        slot.pos = None;
        let key = slot.key;
        slot.item.take().map(|item| (key, item))
    }

    /// Lower the key of a queued entry and restore heap order.
    ///
    /// Returns `false` without touching the heap if the handle no longer
    /// refers to a queued entry or if `key` is greater than the current key.
    pub fn decrease_key(&mut self, h: Handle, key: K) -> bool {
        let Some(slot) = self.slots.get_mut(h.0) else {
            return false;
        };
        let Some(pos) = slot.pos else {
            return false;
        };
        if key > slot.key {
            return false;
        }
        slot.key = key;
        self.sift_up(pos);
        true
    }

    /// Current key of a queued entry.
    pub fn key(&self, h: Handle) -> Option<K> {
        let slot = self.slots.get(h.0)?;
        slot.pos.map(|_| slot.key)
    }

    /// Whether the handle still refers to a queued entry.
    pub fn contains(&self, h: Handle) -> bool {
        self.key(h).is_some()
    }

    // -----------------------------------------------------------------------
    // Heap maintenance
    // -----------------------------------------------------------------------

    #[inline]
    fn key_at(&self, pos: usize) -> K {
        self.slots[self.heap[pos]].key
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.slots[self.heap[a]].pos = Some(a);
        self.slots[self.heap[b]].pos = Some(b);
    }

    fn sift_up(&mut self, mut pos: usize) {
        while pos > 0 {
            let parent = (pos - 1) / 2;
            if self.key_at(pos) >= self.key_at(parent) {
                break;
            }
            self.swap(pos, parent);
            pos = parent;
        }
    }

    fn sift_down(&mut self, mut pos: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * pos + 1;
            let right = left + 1;
            let mut smallest = pos;
            if left < len && self.key_at(left) < self.key_at(smallest) {
                smallest = left;
            }
            if right < len && self.key_at(right) < self.key_at(smallest) {
                smallest = right;
            }
            if smallest == pos {
                break;
            }
            self.swap(pos, smallest);
            pos = smallest;
        }
    }
}
