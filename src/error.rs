//! Typed failures reported before any element is moved.

use core::fmt;

/// Typed failure of a sorting, selection, or median operation.
///
/// Every variant is reported before the array is mutated, so a failed operation has no
/// partial side effects. None of these conditions is retried or corrected internally.
///
/// # Examples
///
/// ```
/// use ndarray_order::{ndarray::arr1, Order1Ext, SortError};
///
/// let mut v = arr1(&[3, 1, 2]);
///
/// assert_eq!(v.sort_range(2, 1), Err(SortError::InvalidRange { from: 2, to: 1 }));
/// assert_eq!(v.sort_range(0, 4), Err(SortError::RangeOutOfBounds { to: 4, len: 3 }));
/// assert!(v == arr1(&[3, 1, 2]));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortError {
	/// The range start exceeds its end, `from > to`.
	InvalidRange {
		/// Start of the range (inclusive).
		from: usize,
		/// End of the range (exclusive).
		to: usize,
	},
	/// The range end exceeds the array length, `to > len`.
	///
	/// With `usize` bounds a negative range start cannot be expressed, so this is the
	/// only out-of-bounds condition left to report.
	RangeOutOfBounds {
		/// End of the range (exclusive).
		to: usize,
		/// Length of the array.
		len: usize,
	},
	/// The selection target does not address a position within the range, `k >= len`
	/// where `len` is the range length. Selecting from an empty range always fails
	/// with this variant.
	TargetOutOfRange {
		/// Requested order statistic, relative to the range start.
		k: usize,
		/// Length of the range.
		len: usize,
	},
	/// The bounded pivot stack of the quicksort ran out of capacity.
	///
	/// The stack holds 32 pending partition pairs which suffices for any array
	/// addressable on a 64-bit target, as the larger partition is pushed while the
	/// smaller one is processed immediately. Hitting this is a fail-fast symptom of a
	/// comparator that is not a total order.
	StackExhausted,
}

impl fmt::Display for SortError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match *self {
			Self::InvalidRange { from, to } => {
				write!(f, "invalid range, `from > to` ({from} > {to})")
			}
			Self::RangeOutOfBounds { to, len } => {
				write!(f, "range out of bounds, `to > len` ({to} > {len})")
			}
			Self::TargetOutOfRange { k, len } => {
				write!(f, "selection target out of range, `k >= len` ({k} >= {len})")
			}
			Self::StackExhausted => {
				write!(f, "pivot stack exhausted, comparator is not a total order")
			}
		}
	}
}

#[cfg(feature = "std")]
impl std::error::Error for SortError {}

#[cfg(feature = "std")]
#[cfg(test)]
mod test {
	use super::SortError;

	#[test]
	fn display() {
		assert_eq!(
			SortError::InvalidRange { from: 3, to: 1 }.to_string(),
			"invalid range, `from > to` (3 > 1)"
		);
		assert_eq!(
			SortError::RangeOutOfBounds { to: 9, len: 4 }.to_string(),
			"range out of bounds, `to > len` (9 > 4)"
		);
		assert_eq!(
			SortError::TargetOutOfRange { k: 4, len: 4 }.to_string(),
			"selection target out of range, `k >= len` (4 >= 4)"
		);
		assert_eq!(
			SortError::StackExhausted.to_string(),
			"pivot stack exhausted, comparator is not a total order"
		);
	}
}
