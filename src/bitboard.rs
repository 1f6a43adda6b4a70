//! A fixed-size bitboard implementation using const generics.
//!
//! Boards are an `N×N` grid packed row-major into an unsigned integer `T`,
//! so cell `index` maps to bit `index` and to `(index / N, index % N)`.
//! The type is `no_std` friendly and never allocates.

use core::ops::{BitOr, Not};
use core::{fmt, mem};
use num_traits::{PrimInt, Unsigned, Zero};

/// Errors returned by bitboard operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitBoardError {
    /// Cell index is out of bounds [0..N*N).
    IndexOutOfBounds { index: usize },
}

impl fmt::Display for BitBoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BitBoardError::IndexOutOfBounds { index } => {
                write!(f, "IndexOutOfBounds: index={}", index)
            }
        }
    }
}

/// A fixed-size N×N bitboard stored in the unsigned integer `T`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct BitBoard<T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    bits: T,
}

impl<T, const N: usize> BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    /// Number of usable bits in the board (`N * N`).
    pub const CELLS: usize = N * N;

    #[inline]
    fn mask() -> T {
        if Self::CELLS == mem::size_of::<T>() * 8 {
            !T::zero()
        } else {
            (T::one() << Self::CELLS) - T::one()
        }
    }

    /// Create a new empty bitboard.
    #[inline]
    pub fn new() -> Self {
        BitBoard { bits: T::zero() }
    }

    /// Returns the number of set bits.
    pub fn count_ones(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns true if no bits are set.
    pub fn is_empty(&self) -> bool {
        self.bits.is_zero()
    }

    /// Returns true if every board bit is set.
    pub fn is_full(&self) -> bool {
        self.bits == Self::mask()
    }

    /// Returns true if every bit of `other` is also set in `self`.
    pub fn contains(&self, other: &Self) -> bool {
        (self.bits & other.bits) == other.bits
    }

    /// Gets the bit at `index`.
    pub fn get(&self, index: usize) -> Result<bool, BitBoardError> {
        Self::check_bounds(index)?;
        Ok(((self.bits >> index) & T::one()) != T::zero())
    }

    /// Sets the bit at `index` to 1.
    pub fn set(&mut self, index: usize) -> Result<(), BitBoardError> {
        Self::check_bounds(index)?;
        self.bits = self.bits | (T::one() << index);
        Ok(())
    }

    /// Clears the bit at `index` to 0.
    pub fn clear(&mut self, index: usize) -> Result<(), BitBoardError> {
        Self::check_bounds(index)?;
        self.bits = self.bits & !(T::one() << index);
        Ok(())
    }

    #[inline]
    fn check_bounds(index: usize) -> Result<(), BitBoardError> {
        if index >= Self::CELLS {
            Err(BitBoardError::IndexOutOfBounds { index })
        } else {
            Ok(())
        }
    }

    /// Creates a bitboard from an iterator over cell indices.
    pub fn from_indices<I>(iter: I) -> Result<Self, BitBoardError>
    where
        I: IntoIterator<Item = usize>,
    {
        let mut board = Self::new();
        for index in iter {
            board.set(index)?;
        }
        Ok(board)
    }

    /// Iterator over the indices of set bits, in ascending order.
    #[inline]
    pub fn indices(&self) -> SetBits<T, N> {
        SetBits {
            bits: self.bits,
            idx: 0,
        }
    }
}

impl<T, const N: usize> Default for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> fmt::Debug for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BitBoard<{}>[", N)?;
        for r in 0..N {
            if r > 0 {
                f.write_str("/")?;
            }
            for c in 0..N {
                let set = ((self.bits >> (r * N + c)) & T::one()) != T::zero();
                f.write_str(if set { "1" } else { "0" })?;
            }
        }
        f.write_str("]")
    }
}

impl<T, const N: usize> BitOr for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        BitBoard {
            bits: self.bits | rhs.bits,
        }
    }
}

impl<T, const N: usize> Not for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;

    /// Complement within the board area; bits past `N*N` stay clear.
    fn not(self) -> Self {
        BitBoard {
            bits: !self.bits & Self::mask(),
        }
    }
}

/// Iterator over set bit indices of a [`BitBoard`].
pub struct SetBits<T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    bits: T,
    idx: usize,
}

impl<T, const N: usize> Iterator for SetBits<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        while self.idx < N * N {
            let i = self.idx;
            self.idx += 1;
            if ((self.bits >> i) & T::one()) != T::zero() {
                return Some(i);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type BB3 = BitBoard<u16, 3>;

    #[test]
    fn set_get_clear() {
        let mut bb = BB3::new();
        assert!(bb.is_empty());
        bb.set(4).unwrap();
        assert!(bb.get(4).unwrap());
        assert!(!bb.get(3).unwrap());
        assert_eq!(bb.count_ones(), 1);
        bb.clear(4).unwrap();
        assert!(bb.is_empty());
    }

    #[test]
    fn out_of_bounds() {
        let mut bb = BB3::new();
        assert_eq!(
            bb.set(9),
            Err(BitBoardError::IndexOutOfBounds { index: 9 })
        );
        assert!(bb.get(9).is_err());
        assert_eq!(
            BB3::from_indices([1, 12]),
            Err(BitBoardError::IndexOutOfBounds { index: 12 })
        );
    }

    #[test]
    fn not_stays_within_board() {
        let bb = BB3::from_indices([0, 8]).unwrap();
        let inv = !bb;
        assert_eq!(inv.count_ones(), 7);
        assert!((inv | bb).is_full());
        assert!(!inv.get(0).unwrap());
        assert_eq!(inv.indices().last(), Some(7));
    }

    #[test]
    fn indices_ascending() {
        let bb = BB3::from_indices([6, 2, 4]).unwrap();
        let got: Vec<usize> = bb.indices().collect();
        assert_eq!(got, vec![2, 4, 6]);
        assert!(bb.contains(&BB3::from_indices([2, 6]).unwrap()));
        assert!(!bb.contains(&BB3::from_indices([0]).unwrap()));
    }
}
