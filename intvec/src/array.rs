use core::fmt::{self, Debug};

use derive_more::Display;
use intvec_alloc::SlotBuffer;
use thiserror::Error;

use crate::config::Config;
use crate::DEFAULT_INITIAL_CAPACITY;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    #[display(fmt = "get")]
    Get,
    #[display(fmt = "set")]
    Set,
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("{access}: index out of bounds (index = {index}, len = {len})")]
pub struct IndexOutOfBounds {
    pub access: Access,
    pub index: usize,
    pub len: usize,
}

/// Capacity to grow to when an append finds the buffer full. Doubling alone
/// would leave a zero-capacity array stuck at zero.
pub fn grown_capacity(capacity: usize) -> usize {
    capacity.saturating_mul(2).max(1)
}

/// Growable array of `i32` backed by a single owned slot buffer.
///
/// Only the first `len` slots are live; the rest of the buffer is spare
/// capacity and is never observed.
#[derive(Clone)]
pub struct GrowableIntArray {
    buffer: SlotBuffer,
    len: usize,
}

impl GrowableIntArray {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_INITIAL_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        GrowableIntArray {
            buffer: SlotBuffer::alloc_zeroed(capacity),
            len: 0,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::with_capacity(config.initial_capacity())
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn size(&self) -> usize {
        self.len
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    pub fn get(&self, index: usize) -> Result<i32, IndexOutOfBounds> {
        self.check_index(Access::Get, index)?;
        Ok(self.buffer[index])
    }

    pub fn set(&mut self, index: usize, value: i32) -> Result<(), IndexOutOfBounds> {
        self.check_index(Access::Set, index)?;
        self.buffer[index] = value;
        Ok(())
    }

    /// Appends `value`, growing the buffer first if it is full. Growth
    /// replaces the backing buffer, so slices borrowed before the call
    /// cannot outlive it.
    pub fn append(&mut self, value: i32) {
        debug_assert!(self.len <= self.capacity());

        if self.len == self.capacity() {
            self.grow();
        }

        self.buffer[self.len] = value;
        self.len += 1;

        log::trace!("appended {value}: len={}, capacity={}", self.len, self.capacity());
        debug_assert!(self.len <= self.capacity());
    }

    fn check_index(&self, access: Access, index: usize) -> Result<(), IndexOutOfBounds> {
        if index < self.len {
            Ok(())
        } else {
            Err(IndexOutOfBounds { access, index, len: self.len })
        }
    }

    fn grow(&mut self) {
        let old_capacity = self.capacity();
        let new_capacity = grown_capacity(old_capacity);

        let mut buffer = SlotBuffer::alloc_zeroed(new_capacity);
        buffer[..self.len].copy_from_slice(&self.buffer[..self.len]);

        // old buffer is dropped here, once the copy is complete
        self.buffer = buffer;

        log::debug!("grew buffer: capacity {old_capacity} -> {new_capacity}, len={}", self.len);
    }

    fn live(&self) -> &[i32] {
        &self.buffer[..self.len]
    }
}

impl Default for GrowableIntArray {
    fn default() -> Self {
        Self::new()
    }
}

impl Debug for GrowableIntArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GrowableIntArray")
            .field("len", &self.len)
            .field("capacity", &self.capacity())
            .field("elements", &self.live())
            .finish()
    }
}

/// Renders live elements as `[1 2 3 ]`, each followed by a space.
impl fmt::Display for GrowableIntArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for value in self.live() {
            write!(f, "{value} ")?;
        }
        write!(f, "]")
    }
}
