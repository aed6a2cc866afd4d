//! Zero-cost indexing for the particle storage
//!
//! Debug builds keep normal bounds-checked access (panics point at the bad
//! slot), release builds use unchecked access. Every index handed to these
//! macros is produced by the ring cursor, which keeps it below
//! `capacity * STRIDE`.
//!
//! Usage:
//! ```rust
//! use smoke_pool::fast;
//!
//! // [x0, y0, age0, x1, y1, age1]
//! let mut storage = vec![1.0_f32, 2.0, 0.0, 3.0, 4.0, 0.5];
//! let base = 3;
//!
//! // Read: fast!(slice, [index])
//! assert_eq!(*fast!(storage, [base]), 3.0);
//!
//! // Write: fast!(slice, [index] = value)
//! fast!(storage, [base + 1] = 8.0);
//! assert_eq!(storage[4], 8.0);
//!
//! // Accumulate: fast!(slice, [index] += value)
//! fast!(storage, [base + 2] += 0.25);
//! assert_eq!(storage[5], 0.75);
//! ```

/// Bounds-checked in debug, `get_unchecked` in release.
#[macro_export]
macro_rules! fast {
    // Read pattern: fast!(slice, [index])
    ($slice:expr, [$index:expr]) => {{
        #[cfg(debug_assertions)]
        {
            &$slice[$index]
        }
        #[cfg(not(debug_assertions))]
        {
            unsafe { $slice.get_unchecked($index) }
        }
    }};

    // Write pattern: fast!(slice, [index] = value)
    ($slice:expr, [$index:expr] = $val:expr) => {{
        #[cfg(debug_assertions)]
        {
            $slice[$index] = $val;
        }
        #[cfg(not(debug_assertions))]
        {
            unsafe { *$slice.get_unchecked_mut($index) = $val; }
        }
    }};

    // Accumulate pattern: fast!(slice, [index] += value)
    ($slice:expr, [$index:expr] += $val:expr) => {{
        #[cfg(debug_assertions)]
        {
            $slice[$index] += $val;
        }
        #[cfg(not(debug_assertions))]
        {
            unsafe { *$slice.get_unchecked_mut($index) += $val; }
        }
    }};
}
