//! This module contains utility functionality needed for this crate. Most
//! prominently, it contains the definition of the [DigitSet] used for
//! detecting repeated digits and enumerating cage combinations.

use crate::error::{GridError, GridResult};

use std::collections::HashSet;
use std::hash::Hash;

const MIN_DIGIT: u8 = 1;
const MAX_DIGIT: u8 = 9;

/// A set of the Sudoku digits 1 to 9 that is implemented as a bit vector.
/// Each digit is represented by one bit of a `u16`, which makes copying and
/// membership checks trivial.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct DigitSet {
    bits: u16
}

fn bit(digit: u8) -> GridResult<u16> {
    if digit < MIN_DIGIT || digit > MAX_DIGIT {
        Err(GridError::InvalidNumber)
    }
    else {
        Ok(1 << digit)
    }
}

impl DigitSet {

    /// Creates a new, empty digit set.
    pub fn new() -> DigitSet {
        DigitSet {
            bits: 0
        }
    }

    /// Creates a new digit set which contains all digits from 1 to 9.
    pub fn full() -> DigitSet {
        DigitSet {
            bits: 0b11_1111_1110
        }
    }

    /// Indicates whether the given digit is contained in this set. Digits
    /// outside the range `[1, 9]` are never contained.
    pub fn contains(&self, digit: u8) -> bool {
        match bit(digit) {
            Ok(bit) => self.bits & bit != 0,
            Err(_) => false
        }
    }

    /// Inserts the given digit into this set. Returns `true` if it was not
    /// contained before and `false` otherwise.
    ///
    /// # Errors
    ///
    /// If `digit` is not in the range `[1, 9]`. In that case,
    /// `GridError::InvalidNumber` is returned.
    pub fn insert(&mut self, digit: u8) -> GridResult<bool> {
        let bit = bit(digit)?;
        let contained = self.bits & bit != 0;
        self.bits |= bit;
        Ok(!contained)
    }

    /// Inserts a digit that is known to be in the range `[1, 9]`, such as a
    /// non-zero digit read from a [Grid](crate::Grid).
    pub(crate) fn insert_unchecked(&mut self, digit: u8) {
        debug_assert!(digit >= MIN_DIGIT && digit <= MAX_DIGIT);
        self.bits |= 1 << digit;
    }

    /// Returns the set of all digits from 1 to 9 which are not contained in
    /// this set.
    pub fn complement(&self) -> DigitSet {
        DigitSet {
            bits: DigitSet::full().bits & !self.bits
        }
    }

    /// Gets the number of digits contained in this set.
    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Indicates whether this set contains no digits.
    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Returns an iterator over the digits in this set in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        (MIN_DIGIT..=MAX_DIGIT).filter(move |&d| self.contains(d))
    }
}

/// Determines whether the given iterator contains at least two equal elements
/// as defined by the [Eq](std::cmp::Eq) trait. The duplication detection is
/// implemented with a [HashSet](std::collections::HashSet), so it is required
/// that the item type implements the [Hash](std::hash::Hash) trait in a
/// consistent way.
pub(crate) fn contains_duplicate<I>(mut iter: I) -> bool
where
    I: Iterator,
    I::Item: Hash + Eq
{
    let mut set = HashSet::new();
    iter.any(|e| !set.insert(e))
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn new_set_is_empty() {
        let set = DigitSet::new();
        assert!(set.is_empty());
        assert!(!set.contains(1));
        assert!(!set.contains(9));
        assert_eq!(0, set.len());
    }

    #[test]
    fn full_set_contains_all_digits() {
        let set = DigitSet::full();
        assert_eq!(9, set.len());
        assert_eq!(vec![1, 2, 3, 4, 5, 6, 7, 8, 9],
            set.iter().collect::<Vec<_>>());
        assert!(!set.contains(0));
        assert!(!set.contains(10));
    }

    #[test]
    fn insert_reports_novelty() {
        let mut set = DigitSet::new();
        assert_eq!(Ok(true), set.insert(4));
        assert_eq!(Ok(false), set.insert(4));
        assert_eq!(Ok(true), set.insert(9));
        assert_eq!(vec![4, 9], set.iter().collect::<Vec<_>>());
    }

    #[test]
    fn complement_contains_missing_digits() {
        let mut set = DigitSet::new();
        set.insert(2).unwrap();
        set.insert_unchecked(7);

        assert_eq!(vec![1, 3, 4, 5, 6, 8, 9],
            set.complement().iter().collect::<Vec<_>>());
        assert!(DigitSet::full().complement().is_empty());
        assert_eq!(DigitSet::full(), DigitSet::new().complement());
    }

    #[test]
    fn out_of_range_digits_rejected() {
        let mut set = DigitSet::new();
        assert_eq!(Err(GridError::InvalidNumber), set.insert(0));
        assert_eq!(Err(GridError::InvalidNumber), set.insert(10));
    }

    #[test]
    fn duplicates_detected() {
        assert!(contains_duplicate(vec![1, 2, 3, 2].into_iter()));
        assert!(!contains_duplicate(vec![1, 2, 3].into_iter()));
        assert!(!contains_duplicate(Vec::<u8>::new().into_iter()));
    }
}
