//! Materialization of one-pass sequences into a dense, indexable buffer.
//!
//! A source whose length is known up front (an exact `size_hint`) is copied
//! into a buffer of exactly that size. Otherwise the buffer starts empty, jumps
//! to [`INITIAL_CAPACITY`] on the first element and doubles every time it
//! fills up, so the total copying cost stays amortized O(n).

use tracing::trace;

/// Capacity allocated when the first element of an unsized source arrives.
pub const INITIAL_CAPACITY: usize = 4;

/// Factor applied to the capacity whenever the buffer is full.
pub const GROWTH_FACTOR: usize = 2;

/// Working storage with a logical capacity that may exceed its element count.
///
/// The logical capacity is tracked separately from the allocator's so that the
/// growth sequence is deterministic.
#[derive(Debug)]
pub(crate) struct Buffer<T> {
    items: Vec<T>,
    capacity: usize,
}

impl<T> Buffer<T> {
    pub(crate) fn new() -> Self {
        Self {
            items: Vec::new(),
            capacity: 0,
        }
    }

    pub(crate) fn with_exact_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.items.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub(crate) fn capacity(&self) -> usize {
        self.capacity
    }

    /// Appends an element, growing first if the buffer is full.
    pub(crate) fn push(&mut self, item: T) {
        if self.capacity == 0 {
            self.grow_to(INITIAL_CAPACITY);
        } else if self.items.len() == self.capacity {
            self.grow_to(self.capacity.max(1) * GROWTH_FACTOR);
        }
        self.items.push(item);
    }

    fn grow_to(&mut self, capacity: usize) {
        trace!(from = self.capacity, to = capacity, "growing buffer");
        let mut items = Vec::with_capacity(capacity);
        items.append(&mut self.items);
        self.items = items;
        self.capacity = capacity;
    }

    /// Drops the spare capacity and hands out exactly `len()` elements.
    pub(crate) fn into_vec(self) -> Vec<T> {
        let mut items = self.items;
        items.shrink_to_fit();
        items
    }
}

/// Copies every element of `source` into a buffer, in source order.
pub(crate) fn materialize<I: IntoIterator>(source: I) -> Buffer<I::Item> {
    let source = source.into_iter();
    let buffer = match source.size_hint() {
        (lower, Some(upper)) if lower == upper => {
            let mut buffer = Buffer::with_exact_capacity(lower);
            buffer.items.extend(source);
            if buffer.items.len() > buffer.capacity {
                buffer.capacity = buffer.items.len();
            }
            buffer
        }
        _ => {
            let mut buffer = Buffer::new();
            for item in source {
                buffer.push(item);
            }
            buffer
        }
    };
    trace!(count = buffer.len(), capacity = buffer.capacity(), "materialized sequence");
    buffer
}
