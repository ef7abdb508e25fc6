//! # Particle Pool
//!
//! Fixed-capacity dense array with swap compaction.

use crate::error::{EmberError, EmberResult};

/// A dense pool for fixed-size `Copy` records.
///
/// Slots `[0, len)` are live, slots `[len, capacity)` hold stale data and are
/// reused on the next push. Removal moves the last live slot into the hole,
/// so order is not preserved but the live range stays packed.
///
/// # Thread Safety
///
/// This pool is NOT thread-safe. It is owned by one emitter on one thread.
///
/// # Example
///
/// ```rust,ignore
/// let mut pool: ParticlePool<Particle> = ParticlePool::try_new(10_000)?;
///
/// // Push - O(1), no heap allocation
/// let index = pool.push(Particle::default());
///
/// // Remove - O(1), last slot fills the hole
/// pool.swap_remove(0);
/// ```
#[derive(Debug, Clone)]
pub struct ParticlePool<T> {
    /// The storage array.
    storage: Box<[T]>,
    /// Number of live slots.
    len: usize,
}

impl<T: Copy + Default> ParticlePool<T> {
    /// Creates a pool with room for `capacity` records.
    ///
    /// All memory is pre-allocated upfront.
    ///
    /// # Errors
    ///
    /// Returns [`EmberError::Allocation`] if the storage cannot be reserved.
    pub fn try_new(capacity: usize) -> EmberResult<Self> {
        Ok(Self {
            storage: try_alloc_slice(capacity)?,
            len: 0,
        })
    }

    /// Creates a pool with no storage.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            storage: Box::default(),
            len: 0,
        }
    }

    /// Returns the total capacity.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    /// Returns the number of live records.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if no record is live.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns true if every slot is live.
    #[inline]
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.len == self.storage.len()
    }

    /// Returns the number of free slots.
    #[inline]
    #[must_use]
    pub fn free_count(&self) -> usize {
        self.storage.len() - self.len
    }

    /// Stores `value` in the first free slot.
    ///
    /// This is a **O(1)** operation with **zero heap allocations**.
    ///
    /// # Returns
    ///
    /// The slot index, or None if the pool is full.
    pub fn push(&mut self, value: T) -> Option<usize> {
        if self.is_full() {
            return None;
        }
        let index = self.len;
        self.storage[index] = value;
        self.len += 1;
        Some(index)
    }

    /// Removes the record at `index`, moving the last live record into its
    /// slot.
    ///
    /// # Returns
    ///
    /// The removed record, or None if `index` is not live.
    pub fn swap_remove(&mut self, index: usize) -> Option<T> {
        if index >= self.len {
            return None;
        }
        let removed = self.storage[index];
        let last = self.len - 1;
        if index != last {
            self.storage[index] = self.storage[last];
        }
        self.len = last;
        Some(removed)
    }

    /// Gets a live record.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    /// Gets a live record mutably.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(index)
    }

    /// The live records.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.storage[..self.len]
    }

    /// The live records, mutably.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.storage[..self.len]
    }

    /// Marks every slot free. Memory is kept.
    pub fn clear(&mut self) {
        self.len = 0;
    }
}

impl<T: Copy + Default> Default for ParticlePool<T> {
    fn default() -> Self {
        Self::empty()
    }
}

/// Allocates a default-filled boxed slice, reporting failure instead of
/// aborting.
///
/// # Errors
///
/// Returns [`EmberError::Allocation`] if the memory cannot be reserved.
pub fn try_alloc_slice<T: Copy + Default>(len: usize) -> EmberResult<Box<[T]>> {
    let mut storage = Vec::new();
    storage
        .try_reserve_exact(len)
        .map_err(|_| EmberError::Allocation {
            requested: len,
            element_size: std::mem::size_of::<T>(),
        })?;
    storage.resize(len, T::default());
    Ok(storage.into_boxed_slice())
}
