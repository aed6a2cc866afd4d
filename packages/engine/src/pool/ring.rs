//! Index arithmetic for the particle ring.
//!
//! The cursor keeps an explicit live count next to `head`, so "empty" and
//! "full" never have to be told apart from `head == tail`. Everything here is
//! plain integer math over `Copy` state; the pool owns the storage.

use std::iter::Chain;
use std::ops::Range;

/// Slot indices of the live range, oldest first.
pub type Slots = Chain<Range<usize>, Range<usize>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RingCursor {
    capacity: usize,
    head: usize,
    len: usize,
}

impl RingCursor {
    pub const fn new(capacity: usize) -> Self {
        RingCursor { capacity, head: 0, len: 0 }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Oldest live slot
    #[inline]
    pub fn head(&self) -> usize {
        self.head
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Next free slot
    #[inline]
    pub fn tail(&self) -> usize {
        if self.capacity == 0 {
            0
        } else {
            (self.head + self.len) % self.capacity
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.len == self.capacity
    }

    /// True while the live range runs past the end of storage back to 0,
    /// i.e. `tail <= head` with at least one live slot.
    #[inline]
    pub fn is_wrapped(&self) -> bool {
        self.len > 0 && self.tail() <= self.head
    }

    /// Live range split into its (at most two) contiguous runs:
    /// `head..end` and, when wrapped, `0..tail`.
    pub fn segments(&self) -> (Range<usize>, Range<usize>) {
        let end = self.head + self.len;
        if end <= self.capacity {
            (self.head..end, 0..0)
        } else {
            (self.head..self.capacity, 0..end - self.capacity)
        }
    }

    pub fn slots(&self) -> Slots {
        let (first, second) = self.segments();
        first.chain(second)
    }

    /// Slot holding the `index`-th oldest live particle
    pub fn slot(&self, index: usize) -> Option<usize> {
        if index >= self.len {
            return None;
        }
        Some((self.head + index) % self.capacity)
    }

    /// Claim the tail slot. `None` when full (drop-new).
    pub fn push(&mut self) -> Option<usize> {
        if self.is_full() {
            return None;
        }
        let slot = self.tail();
        self.len += 1;
        Some(slot)
    }

    /// Plan retiring the `expired` oldest slots. Pure: the cursor is not
    /// touched until [`RingCursor::apply`].
    pub fn plan_retirement(&self, expired: usize) -> Retirement {
        let count = expired.min(self.len);
        let head = if count == self.len {
            0
        } else {
            (self.head + count) % self.capacity
        };
        Retirement {
            head,
            first: self.head,
            count,
            capacity: self.capacity,
        }
    }

    pub fn apply(&mut self, retirement: &Retirement) {
        if retirement.count >= self.len {
            self.reset();
            return;
        }
        self.head = retirement.head;
        self.len -= retirement.count;
    }

    /// Canonical empty state: `head == tail == 0`, not wrapped.
    pub fn reset(&mut self) {
        self.head = 0;
        self.len = 0;
    }
}

/// Result of one retirement pass: the new head and the slots freed,
/// which always form a run starting at the old head.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Retirement {
    head: usize,
    first: usize,
    count: usize,
    capacity: usize,
}

impl Retirement {
    /// Head after the retirement is applied
    pub fn head(&self) -> usize {
        self.head
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Retired slot indices, oldest first
    pub fn slots(&self) -> impl Iterator<Item = usize> {
        let Retirement { first, count, capacity, .. } = *self;
        (0..count).map(move |i| (first + i) % capacity)
    }
}
