//! Column layout of one particle slot inside the pool storage.
//!
//! Slots are packed back to back: `[x0, y0, age0, x1, y1, age1, ...]`.

/// Floats per slot
pub const STRIDE: usize = 3;

pub const X: usize = 0;
pub const Y: usize = 1;
pub const AGE: usize = 2;

/// First storage index of `slot`
#[inline]
pub const fn offset(slot: usize) -> usize {
    slot * STRIDE
}

/// Copy of one live slot, handed to update/render callbacks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    /// Time since emission, in whatever unit the host passes as `elapsed`
    pub age: f32,
}

impl Particle {
    #[inline]
    pub(crate) fn read(storage: &[f32], slot: usize) -> Self {
        let base = offset(slot);
        Particle {
            x: *fast!(storage, [base + X]),
            y: *fast!(storage, [base + Y]),
            age: *fast!(storage, [base + AGE]),
        }
    }

    #[inline]
    pub(crate) fn write(self, storage: &mut [f32], slot: usize) {
        let base = offset(slot);
        fast!(storage, [base + X] = self.x);
        fast!(storage, [base + Y] = self.y);
        fast!(storage, [base + AGE] = self.age);
    }
}
