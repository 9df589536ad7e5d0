//! A fixed-size N×N bit grid packed into a single unsigned integer.
//!
//! `no_std` friendly and allocation-free: a 10×10 grid fits in a `u128`.
//! Used for per-cell shot bookkeeping where only presence/absence matters.

use core::{fmt, mem};
use num_traits::{PrimInt, Unsigned, Zero};

/// Errors returned by bit grid operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitGridError {
    /// Requested grid size N*N exceeds the capacity of `T::BITS`.
    SizeTooLarge { n: usize, capacity: usize },
    /// Row or column index is out of bounds [0..N).
    OutOfBounds { row: usize, col: usize },
}

impl fmt::Display for BitGridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BitGridError::SizeTooLarge { n, capacity } => {
                write!(f, "grid of {}x{} cells exceeds {} backing bits", n, n, capacity)
            }
            BitGridError::OutOfBounds { row, col } => {
                write!(f, "cell ({}, {}) is outside the grid", row, col)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BitGridError {}

/// An N×N grid of flags stored in the unsigned integer `T`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct BitGrid<T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    bits: T,
}

impl<T, const N: usize> BitGrid<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    /// Create a new empty grid (all flags cleared) without a size check.
    #[inline]
    pub fn new() -> Self {
        BitGrid { bits: T::zero() }
    }

    /// Fallible constructor: `Err(SizeTooLarge)` if N*N exceeds `T::BITS`.
    pub fn try_new() -> Result<Self, BitGridError> {
        let capacity = mem::size_of::<T>() * 8;
        if N * N > capacity {
            Err(BitGridError::SizeTooLarge { n: N, capacity })
        } else {
            Ok(BitGrid { bits: T::zero() })
        }
    }

    /// Number of set flags.
    pub fn count_ones(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns true if no flag is set.
    pub fn is_empty(&self) -> bool {
        self.bits.is_zero()
    }

    /// Gets the flag at (row, col).
    pub fn get(&self, row: usize, col: usize) -> Result<bool, BitGridError> {
        self.check_bounds(row, col)?;
        let idx = row * N + col;
        Ok(((self.bits >> idx) & T::one()) != T::zero())
    }

    /// Sets the flag at (row, col).
    pub fn set(&mut self, row: usize, col: usize) -> Result<(), BitGridError> {
        self.check_bounds(row, col)?;
        let idx = row * N + col;
        self.bits = self.bits | (T::one() << idx);
        Ok(())
    }

    /// Clears the flag at (row, col).
    pub fn clear(&mut self, row: usize, col: usize) -> Result<(), BitGridError> {
        self.check_bounds(row, col)?;
        let idx = row * N + col;
        self.bits = self.bits & !(T::one() << idx);
        Ok(())
    }

    #[inline]
    fn check_bounds(&self, row: usize, col: usize) -> Result<(), BitGridError> {
        if row >= N || col >= N {
            Err(BitGridError::OutOfBounds { row, col })
        } else {
            Ok(())
        }
    }
}

impl<T, const N: usize> Default for BitGrid<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> fmt::Debug for BitGrid<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "BitGrid<{}>:", N)?;
        for r in 0..N {
            for c in 0..N {
                let flag = if ((self.bits >> (r * N + c)) & T::one()) != T::zero() {
                    '#'
                } else {
                    '.'
                };
                write!(f, "{} ", flag)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
