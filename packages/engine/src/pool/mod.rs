//! ParticlePool - fixed-capacity ring of smoke particles
//!
//! All particle state lives in one `Vec<f32>` allocated up front:
//!   [x0, y0, age0, x1, y1, age1, ...]
//! so the per-frame update and render passes walk linear memory.
//!
//! Live particles occupy the circular range `[head, tail)`. New particles go
//! in at the tail, old ones leave from the head, and a full pool drops new
//! emits instead of growing or overwriting.

mod ring;
mod slot;

pub use ring::{Retirement, RingCursor, Slots};
pub use slot::{offset, Particle, AGE, STRIDE, X, Y};

/// Largest capacity whose storage stays within `isize::MAX` bytes.
pub const MAX_CAPACITY: usize = isize::MAX as usize / (STRIDE * std::mem::size_of::<f32>());

#[derive(Debug, thiserror::Error)]
pub enum PoolError {
    #[error("capacity {capacity} exceeds the maximum of {max} particles")]
    CapacityTooLarge { capacity: usize, max: usize },
}

#[derive(Debug, Clone)]
pub struct ParticlePool {
    storage: Vec<f32>,
    cursor: RingCursor,
}

impl ParticlePool {
    /// Allocate a zeroed pool. Capacity 0 is allowed and accepts nothing;
    /// capacities above [`MAX_CAPACITY`] are clamped to it.
    pub fn new(capacity: usize) -> Self {
        if capacity > MAX_CAPACITY {
            log::warn!("particle pool capacity {capacity} clamped to {MAX_CAPACITY}");
        }
        Self::allocate(capacity.min(MAX_CAPACITY))
    }

    /// Like [`ParticlePool::new`] but refuses oversized capacities.
    pub fn try_new(capacity: usize) -> Result<Self, PoolError> {
        if capacity > MAX_CAPACITY {
            return Err(PoolError::CapacityTooLarge { capacity, max: MAX_CAPACITY });
        }
        Ok(Self::allocate(capacity))
    }

    fn allocate(capacity: usize) -> Self {
        if capacity == 0 {
            log::warn!("particle pool created with zero capacity; every emit will be dropped");
        } else {
            log::debug!("particle pool created with capacity {capacity}");
        }
        // capacity <= MAX_CAPACITY, so this cannot wrap
        let storage_len = capacity * STRIDE;
        Self {
            storage: vec![0.0; storage_len],
            cursor: RingCursor::new(capacity),
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.cursor.capacity()
    }

    /// Live particle count
    #[inline]
    pub fn len(&self) -> usize {
        self.cursor.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cursor.is_empty()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.cursor.is_full()
    }

    #[inline]
    pub fn head(&self) -> usize {
        self.cursor.head()
    }

    #[inline]
    pub fn tail(&self) -> usize {
        self.cursor.tail()
    }

    #[inline]
    pub fn is_wrapped(&self) -> bool {
        self.cursor.is_wrapped()
    }

    /// Emit a fresh particle (age 0) at `(x, y)`.
    ///
    /// Returns `false` and leaves the pool untouched when it is full.
    pub fn emit(&mut self, x: f32, y: f32) -> bool {
        let Some(slot) = self.cursor.push() else {
            return false;
        };
        Particle { x, y, age: 0.0 }.write(&mut self.storage, slot);
        true
    }

    /// Age every live particle by `elapsed`, then retire from the head.
    ///
    /// `retire` sees each live particle exactly once, oldest first, after its
    /// age has been advanced. Only the leading run of `true` answers retires:
    /// the first `false` keeps that particle and everything newer, so the
    /// live range never gets a hole. The head is moved once, after the pass.
    pub fn update<F>(&mut self, elapsed: f32, mut retire: F) -> Retirement
    where
        F: FnMut(Particle) -> bool,
    {
        let mut expired = 0usize;
        let mut expiring = true;

        for slot in self.cursor.slots() {
            fast!(self.storage, [offset(slot) + AGE] += elapsed);
            let verdict = retire(Particle::read(&self.storage, slot));
            if expiring && verdict {
                expired += 1;
            } else {
                expiring = false;
            }
        }

        let retirement = self.cursor.plan_retirement(expired);
        self.cursor.apply(&retirement);
        retirement
    }

    /// Read-only pass over live particles, oldest to newest.
    pub fn render<F>(&self, mut draw: F)
    where
        F: FnMut(Particle),
    {
        for slot in self.cursor.slots() {
            draw(Particle::read(&self.storage, slot));
        }
    }

    pub fn iter(&self) -> Particles<'_> {
        Particles {
            storage: &self.storage,
            slots: self.cursor.slots(),
        }
    }

    /// The `index`-th oldest live particle
    pub fn get(&self, index: usize) -> Option<Particle> {
        self.cursor
            .slot(index)
            .map(|slot| Particle::read(&self.storage, slot))
    }

    /// Retire everything at once.
    pub fn clear(&mut self) {
        self.cursor.reset();
    }

    /// Raw slot storage, `capacity * STRIDE` floats. Free slots hold stale data.
    pub fn as_slice(&self) -> &[f32] {
        &self.storage
    }
}

/// Iterator over live particles in emission order.
pub struct Particles<'a> {
    storage: &'a [f32],
    slots: Slots,
}

impl Iterator for Particles<'_> {
    type Item = Particle;

    fn next(&mut self) -> Option<Particle> {
        self.slots
            .next()
            .map(|slot| Particle::read(self.storage, slot))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.slots.size_hint()
    }
}

impl ExactSizeIterator for Particles<'_> {}

impl<'a> IntoIterator for &'a ParticlePool {
    type Item = Particle;
    type IntoIter = Particles<'a>;

    fn into_iter(self) -> Particles<'a> {
        self.iter()
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
