//! Fixed-capacity FIFO ring buffer
//!
//! Storage is allocated once at construction. Index arithmetic never leaves
//! this module; every accessor returns `Option` instead of indexing blindly.

use alloc::boxed::Box;

pub struct RingBuffer<T> {
    /// Circular storage, `None` in unoccupied slots
    slots: Box<[Option<T>]>,
    /// Slot holding the oldest element
    read_pos: usize,
    /// Slot the next element is written to
    write_pos: usize,
    /// Number of occupied slots
    len: usize,
}

impl<T> RingBuffer<T> {
    /// Create an empty ring holding at most `capacity` elements
    pub fn with_capacity(capacity: usize) -> Self {
        let mut slots = alloc::vec::Vec::with_capacity(capacity);
        slots.resize_with(capacity, || None);
        RingBuffer {
            slots: slots.into_boxed_slice(),
            read_pos: 0,
            write_pos: 0,
            len: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    /// Append to the back.
    /// Hands the value back if the ring is full.
    pub fn push(&mut self, value: T) -> Result<(), T> {
        if self.is_full() {
            return Err(value);
        }

        self.slots[self.write_pos] = Some(value);
        self.write_pos = (self.write_pos + 1) % self.capacity();
        self.len += 1;
        Ok(())
    }

    /// Remove the oldest element
    pub fn pop(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }

        let value = self.slots[self.read_pos].take();
        self.read_pos = (self.read_pos + 1) % self.capacity();
        self.len -= 1;
        value
    }

    /// Oldest element
    pub fn front(&self) -> Option<&T> {
        self.get(0)
    }

    /// Most recently pushed element
    pub fn back(&self) -> Option<&T> {
        match self.len {
            0 => None,
            len => self.get(len - 1),
        }
    }

    /// The `index`-th oldest element
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len {
            return None;
        }
        let slot = (self.read_pos + index) % self.capacity();
        self.slots[slot].as_ref()
    }

    pub fn clear(&mut self) {
        while self.pop().is_some() {}
    }

    /// Iterate from oldest to newest
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        (0..self.len).filter_map(move |index| self.get(index))
    }
}
