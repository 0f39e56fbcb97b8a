//! Range-based in-place [sorting], [selection], and median computation for 1-dimensional
//! (sub)views into [`ndarray`] arrays with arbitrary memory layout (e.g., non-contiguous),
//! with an optional index trace for re-ordering companion arrays consistently with the
//! sorted output.
//!
//! All operations work on a half-open sub-range `[from, to)` of the array, validate the
//! range before touching any element, and report violations as typed [`SortError`]
//! values instead of panicking. Elements outside the range are never moved.
//!
//! # Example
//!
//! ```
//! use ndarray_order::{ndarray::arr1, Order1Ext};
//!
//! let mut v = arr1(&[5, 3, 8, 1, 9, 2]);
//!
//! // Sorting returns an index trace: the element now at position `p` originally
//! // lived at position `indices[p]`, so companion arrays can be permuted alike.
//! let indices = v.sort_with_indices()?;
//!
//! assert!(v == arr1(&[1, 2, 3, 5, 8, 9]));
//! assert!(indices == arr1(&[3, 5, 1, 0, 2, 4]));
//! # Ok::<(), ndarray_order::SortError>(())
//! ```
//!
//! # Current Implementation
//!
//! Sorting is an iterative median-of-three quicksort with straight-insertion bailout
//! for small sub-ranges and a fixed-capacity pivot stack, *O*(*n* log *n*) comparisons
//! on average and *O*(log *n*) auxiliary space. Selection is the matching iterative
//! quickselect, expected *O*(*n*) time and *O*(1) space. The median is selection of the
//! `len / 2` order statistic plus one scan of the left partition for even lengths.
//! Sorting is unstable: equal elements may be reordered.
//!
//! [sorting]: https://en.wikipedia.org/wiki/Sorting_algorithm
//! [selection]: https://en.wikipedia.org/wiki/Selection_algorithm
//!
//! # Features
//!
//!   * `alloc` for the `*_with_indices` operations allocating the index trace.
//!   * `std` for `std::error::Error` on [`SortError`]. Enabled by `default`.

#![deny(
	missing_docs,
	rustdoc::broken_intra_doc_links,
	rustdoc::missing_crate_level_docs
)]
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

mod average;
mod error;
mod insertion_sort;
mod median;
mod quick_sort;
mod select;
mod trace;

pub use crate::{average::Average, error::SortError};

use crate::{median::median_view, quick_sort::quick_sort, select::select_nth};
use core::cmp::Ordering::{self, Less};
#[cfg(feature = "alloc")]
use ndarray::Array1;
use ndarray::{ArrayBase, Data, DataMut, Ix1, s};

pub use ndarray;

/// Checks the half-open range `[from, to)` against an array of length `len`.
fn check_range(from: usize, to: usize, len: usize) -> Result<(), SortError> {
	if from > to {
		return Err(SortError::InvalidRange { from, to });
	}
	if to > len {
		return Err(SortError::RangeOutOfBounds { to, len });
	}
	Ok(())
}

/// Extension trait for 1-dimensional [`ArrayBase<S, Ix1>`](`ArrayBase`) array or
/// (sub)view with arbitrary memory layout (e.g., non-contiguous) providing range-based
/// in-place sorting, order-statistic selection, and median computation.
///
/// Each operation exists in an intrinsic-order form requiring [`Ord`] and a `_by` form
/// taking a comparator defining a total order, and in a whole-array convenience form
/// next to the `_range` form taking explicit `[from, to)` bounds. An empty range is a
/// legal no-op for sorting and an error for selection and median, which need at least
/// one element to return.
pub trait Order1Ext<A, S>
where
	S: Data<Elem = A>,
{
	/// Sorts the whole array in ascending order.
	///
	/// Equivalent to [`sort_range`](Order1Ext::sort_range) over `[0, len)`.
	///
	/// # Errors
	///
	/// [`SortError::StackExhausted`] if the pivot stack overflows, which a type with a
	/// valid total order cannot cause.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_order::{ndarray::arr1, Order1Ext};
	///
	/// let mut v = arr1(&[5, 3, 8, 1, 9, 2]);
	///
	/// v.sort()?;
	/// assert!(v == arr1(&[1, 2, 3, 5, 8, 9]));
	/// # Ok::<(), ndarray_order::SortError>(())
	/// ```
	fn sort(&mut self) -> Result<(), SortError>
	where
		A: Ord,
		S: DataMut;
	/// Sorts the whole array with a comparator function.
	///
	/// The comparator must define a total ordering, otherwise the order of elements is
	/// unspecified and the sort may fail with [`SortError::StackExhausted`]. For
	/// example, while [`f64`] doesn't implement [`Ord`] because `NaN != NaN`,
	/// `partial_cmp` serves as comparator when the array contains no `NaN`.
	///
	/// # Errors
	///
	/// [`SortError::StackExhausted`] if the pivot stack overflows.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_order::{ndarray::arr1, Order1Ext};
	///
	/// let mut floats = arr1(&[5f64, 4.0, 1.0, 3.0, 2.0]);
	///
	/// floats.sort_by(|a, b| a.partial_cmp(b).unwrap())?;
	/// assert!(floats == arr1(&[1.0, 2.0, 3.0, 4.0, 5.0]));
	/// # Ok::<(), ndarray_order::SortError>(())
	/// ```
	fn sort_by<F>(&mut self, compare: F) -> Result<(), SortError>
	where
		F: FnMut(&A, &A) -> Ordering,
		S: DataMut;
	/// Sorts the sub-range `[from, to)` in ascending order, leaving all other elements
	/// untouched.
	///
	/// An empty range (`from == to`) is a no-op.
	///
	/// # Errors
	///
	/// [`SortError::InvalidRange`] if `from > to`, [`SortError::RangeOutOfBounds`] if
	/// `to > len`, both before any mutation, and [`SortError::StackExhausted`] if the
	/// pivot stack overflows.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_order::{ndarray::arr1, Order1Ext};
	///
	/// let mut v = arr1(&[9, 5, 3, 8, 0]);
	///
	/// v.sort_range(1, 4)?;
	/// assert!(v == arr1(&[9, 3, 5, 8, 0]));
	/// # Ok::<(), ndarray_order::SortError>(())
	/// ```
	fn sort_range(&mut self, from: usize, to: usize) -> Result<(), SortError>
	where
		A: Ord,
		S: DataMut;
	/// Sorts the sub-range `[from, to)` with a comparator function.
	///
	/// See [`sort_range`](Order1Ext::sort_range) for range semantics and errors.
	fn sort_range_by<F>(&mut self, from: usize, to: usize, compare: F) -> Result<(), SortError>
	where
		F: FnMut(&A, &A) -> Ordering,
		S: DataMut;

	/// Sorts the whole array, returning the index trace.
	///
	/// The trace starts as the identity permutation `[0, 1, ..., len - 1]` and is
	/// permuted by every exchange the sort performs, so afterwards the element at
	/// position `p` originally occupied position `trace[p]`. Indexing a companion
	/// array by the trace re-orders it consistently with the sorted output.
	///
	/// # Errors
	///
	/// [`SortError::StackExhausted`] if the pivot stack overflows.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_order::{ndarray::arr1, Order1Ext};
	///
	/// let mut v = arr1(&[5, 3, 8, 1, 9, 2]);
	/// let before = v.clone();
	///
	/// let indices = v.sort_with_indices()?;
	///
	/// assert!(indices == arr1(&[3, 5, 1, 0, 2, 4]));
	/// for (p, i) in indices.iter().enumerate() {
	///     assert_eq!(v[p], before[*i]);
	/// }
	/// # Ok::<(), ndarray_order::SortError>(())
	/// ```
	#[cfg(feature = "alloc")]
	fn sort_with_indices(&mut self) -> Result<Array1<usize>, SortError>
	where
		A: Ord,
		S: DataMut;
	/// Sorts the whole array with a comparator function, returning the index trace.
	///
	/// See [`sort_with_indices`](Order1Ext::sort_with_indices).
	#[cfg(feature = "alloc")]
	fn sort_with_indices_by<F>(&mut self, compare: F) -> Result<Array1<usize>, SortError>
	where
		F: FnMut(&A, &A) -> Ordering,
		S: DataMut;
	/// Sorts the sub-range `[from, to)`, returning the full-length index trace.
	///
	/// Positions outside `[from, to)` keep their identity value, matching the elements
	/// there which are left untouched. An empty range returns the identity trace.
	///
	/// # Errors
	///
	/// [`SortError::InvalidRange`] if `from > to`, [`SortError::RangeOutOfBounds`] if
	/// `to > len`, both before any mutation, and [`SortError::StackExhausted`] if the
	/// pivot stack overflows.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_order::{ndarray::arr1, Order1Ext};
	///
	/// let mut v = arr1(&[9, 5, 3, 8, 0]);
	///
	/// let indices = v.sort_range_with_indices(1, 4)?;
	///
	/// assert!(v == arr1(&[9, 3, 5, 8, 0]));
	/// assert!(indices == arr1(&[0, 2, 1, 3, 4]));
	/// # Ok::<(), ndarray_order::SortError>(())
	/// ```
	#[cfg(feature = "alloc")]
	fn sort_range_with_indices(
		&mut self,
		from: usize,
		to: usize,
	) -> Result<Array1<usize>, SortError>
	where
		A: Ord,
		S: DataMut;
	/// Sorts the sub-range `[from, to)` with a comparator function, returning the
	/// full-length index trace.
	///
	/// See [`sort_range_with_indices`](Order1Ext::sort_range_with_indices).
	#[cfg(feature = "alloc")]
	fn sort_range_with_indices_by<F>(
		&mut self,
		from: usize,
		to: usize,
		compare: F,
	) -> Result<Array1<usize>, SortError>
	where
		F: FnMut(&A, &A) -> Ordering,
		S: DataMut;

	/// Rearranges the whole array so position `k` holds its k-th smallest element, and
	/// returns a clone of it.
	///
	/// Equivalent to [`select_nth_range`](Order1Ext::select_nth_range) over `[0, len)`.
	fn select_nth(&mut self, k: usize) -> Result<A, SortError>
	where
		A: Ord + Clone,
		S: DataMut;
	/// Rearranges the whole array with a comparator function so position `k` holds its
	/// k-th smallest element, and returns a clone of it.
	///
	/// See [`select_nth_range_by`](Order1Ext::select_nth_range_by).
	fn select_nth_by<F>(&mut self, k: usize, compare: F) -> Result<A, SortError>
	where
		A: Clone,
		F: FnMut(&A, &A) -> Ordering,
		S: DataMut;
	/// Rearranges the sub-range `[from, to)` so position `from + k` holds the value a
	/// full ascending sort of the range would put there, and returns a clone of it.
	///
	/// Afterwards every element at `[from, from + k)` is less than or equal to the
	/// returned value and every element at `[from + k + 1, to)` greater than or equal,
	/// both sides in no particular order. Selecting is usually faster than sorting the
	/// whole range, expected *O*(*n*) instead of *O*(*n* log *n*). This operation is
	/// also known as "kth element" in other libraries.
	///
	/// # Errors
	///
	/// [`SortError::InvalidRange`] if `from > to`, [`SortError::RangeOutOfBounds`] if
	/// `to > len`, and [`SortError::TargetOutOfRange`] if `k >= to - from`, all before
	/// any mutation. An empty range always fails, as no position can be addressed.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_order::{ndarray::arr1, Order1Ext};
	///
	/// let mut v = arr1(&[5, 3, 8, 1, 9, 2]);
	///
	/// let third = v.select_nth_range(2, 0, 6)?;
	///
	/// assert_eq!(third, 3);
	/// assert!(v.iter().take(2).all(|value| *value <= 3));
	/// assert!(v.iter().skip(3).all(|value| *value >= 3));
	/// # Ok::<(), ndarray_order::SortError>(())
	/// ```
	fn select_nth_range(&mut self, k: usize, from: usize, to: usize) -> Result<A, SortError>
	where
		A: Ord + Clone,
		S: DataMut;
	/// Rearranges the sub-range `[from, to)` with a comparator function so position
	/// `from + k` holds its k-th smallest element, and returns a clone of it.
	///
	/// See [`select_nth_range`](Order1Ext::select_nth_range) for the partition
	/// invariant and errors.
	fn select_nth_range_by<F>(
		&mut self,
		k: usize,
		from: usize,
		to: usize,
		compare: F,
	) -> Result<A, SortError>
	where
		A: Clone,
		F: FnMut(&A, &A) -> Ordering,
		S: DataMut;

	/// Computes the median of the whole array, rearranging it as a side effect.
	///
	/// Equivalent to [`median_range`](Order1Ext::median_range) over `[0, len)`.
	fn median(&mut self) -> Result<A, SortError>
	where
		A: Ord + Average,
		S: DataMut;
	/// Computes the median of the whole array with a comparator and an averaging
	/// function, rearranging it as a side effect.
	///
	/// See [`median_range_by`](Order1Ext::median_range_by).
	fn median_by<F, G>(&mut self, compare: F, average: G) -> Result<A, SortError>
	where
		A: Clone,
		F: FnMut(&A, &A) -> Ordering,
		G: FnMut(&A, &A) -> A,
		S: DataMut;
	/// Computes the median of the sub-range `[from, to)`, rearranging it as a side
	/// effect.
	///
	/// Selects the `(to - from) / 2` order statistic of the range. For an odd range
	/// length that element is the median; for an even length the median is the
	/// [`Average`] of that element and the maximum of the left partition, the two
	/// middle elements of a full sort. Note the integer averaging caveat on
	/// [`Average`] for values near the type extremes.
	///
	/// # Errors
	///
	/// [`SortError::InvalidRange`] if `from > to`, [`SortError::RangeOutOfBounds`] if
	/// `to > len`, and [`SortError::TargetOutOfRange`] for an empty range, all before
	/// any mutation.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_order::{ndarray::arr1, Order1Ext};
	///
	/// let mut v = arr1(&[5, 3, 8, 1, 9, 2]);
	///
	/// // Even range length, the average of both middle elements 3 and 5.
	/// assert_eq!(v.median_range(0, 6)?, 4);
	/// // Odd range length, the middle element.
	/// assert_eq!(v.median_range(0, 5)?, 3);
	/// # Ok::<(), ndarray_order::SortError>(())
	/// ```
	fn median_range(&mut self, from: usize, to: usize) -> Result<A, SortError>
	where
		A: Ord + Average,
		S: DataMut;
	/// Computes the median of the sub-range `[from, to)` with a comparator and an
	/// averaging function, rearranging it as a side effect.
	///
	/// The averaging function is only invoked for even range lengths. Callers whose
	/// element type has no averaging semantics may pass `|a, _| a.clone()` to resolve
	/// the median to the lower middle element.
	///
	/// # Errors
	///
	/// Same as [`median_range`](Order1Ext::median_range).
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_order::{ndarray::arr1, Average, Order1Ext};
	///
	/// let mut v = arr1(&[5.0, 3.0, 8.0, 1.0, 9.0, 2.0]);
	///
	/// let median = v.median_range_by(0, 6, |a, b| a.partial_cmp(b).unwrap(), |a, b| {
	///     a.average(b)
	/// })?;
	///
	/// assert_eq!(median, 4.0);
	/// # Ok::<(), ndarray_order::SortError>(())
	/// ```
	fn median_range_by<F, G>(
		&mut self,
		from: usize,
		to: usize,
		compare: F,
		average: G,
	) -> Result<A, SortError>
	where
		A: Clone,
		F: FnMut(&A, &A) -> Ordering,
		G: FnMut(&A, &A) -> A,
		S: DataMut;
}

impl<A, S> Order1Ext<A, S> for ArrayBase<S, Ix1>
where
	S: Data<Elem = A>,
{
	#[inline]
	fn sort(&mut self) -> Result<(), SortError>
	where
		A: Ord,
		S: DataMut,
	{
		self.sort_range(0, self.len())
	}
	#[inline]
	fn sort_by<F>(&mut self, compare: F) -> Result<(), SortError>
	where
		F: FnMut(&A, &A) -> Ordering,
		S: DataMut,
	{
		self.sort_range_by(0, self.len(), compare)
	}
	fn sort_range(&mut self, from: usize, to: usize) -> Result<(), SortError>
	where
		A: Ord,
		S: DataMut,
	{
		check_range(from, to, self.len())?;
		quick_sort(self.slice_mut(s![from..to]), &mut (), &mut A::lt)
	}
	fn sort_range_by<F>(&mut self, from: usize, to: usize, mut compare: F) -> Result<(), SortError>
	where
		F: FnMut(&A, &A) -> Ordering,
		S: DataMut,
	{
		check_range(from, to, self.len())?;
		quick_sort(self.slice_mut(s![from..to]), &mut (), &mut |a: &A, b: &A| {
			compare(a, b) == Less
		})
	}

	#[cfg(feature = "alloc")]
	#[inline]
	fn sort_with_indices(&mut self) -> Result<Array1<usize>, SortError>
	where
		A: Ord,
		S: DataMut,
	{
		self.sort_range_with_indices(0, self.len())
	}
	#[cfg(feature = "alloc")]
	#[inline]
	fn sort_with_indices_by<F>(&mut self, compare: F) -> Result<Array1<usize>, SortError>
	where
		F: FnMut(&A, &A) -> Ordering,
		S: DataMut,
	{
		self.sort_range_with_indices_by(0, self.len(), compare)
	}
	#[cfg(feature = "alloc")]
	fn sort_range_with_indices(
		&mut self,
		from: usize,
		to: usize,
	) -> Result<Array1<usize>, SortError>
	where
		A: Ord,
		S: DataMut,
	{
		check_range(from, to, self.len())?;
		let mut indices = Array1::from_iter(0..self.len());
		quick_sort(
			self.slice_mut(s![from..to]),
			&mut indices.slice_mut(s![from..to]),
			&mut A::lt,
		)?;
		Ok(indices)
	}
	#[cfg(feature = "alloc")]
	fn sort_range_with_indices_by<F>(
		&mut self,
		from: usize,
		to: usize,
		mut compare: F,
	) -> Result<Array1<usize>, SortError>
	where
		F: FnMut(&A, &A) -> Ordering,
		S: DataMut,
	{
		check_range(from, to, self.len())?;
		let mut indices = Array1::from_iter(0..self.len());
		quick_sort(
			self.slice_mut(s![from..to]),
			&mut indices.slice_mut(s![from..to]),
			&mut |a: &A, b: &A| compare(a, b) == Less,
		)?;
		Ok(indices)
	}

	#[inline]
	fn select_nth(&mut self, k: usize) -> Result<A, SortError>
	where
		A: Ord + Clone,
		S: DataMut,
	{
		self.select_nth_range(k, 0, self.len())
	}
	#[inline]
	fn select_nth_by<F>(&mut self, k: usize, compare: F) -> Result<A, SortError>
	where
		A: Clone,
		F: FnMut(&A, &A) -> Ordering,
		S: DataMut,
	{
		self.select_nth_range_by(k, 0, self.len(), compare)
	}
	fn select_nth_range(&mut self, k: usize, from: usize, to: usize) -> Result<A, SortError>
	where
		A: Ord + Clone,
		S: DataMut,
	{
		check_range(from, to, self.len())?;
		let len = to - from;
		if k >= len {
			return Err(SortError::TargetOutOfRange { k, len });
		}
		select_nth(&mut self.slice_mut(s![from..to]), k, &mut A::lt);
		Ok(self[from + k].clone())
	}
	fn select_nth_range_by<F>(
		&mut self,
		k: usize,
		from: usize,
		to: usize,
		mut compare: F,
	) -> Result<A, SortError>
	where
		A: Clone,
		F: FnMut(&A, &A) -> Ordering,
		S: DataMut,
	{
		check_range(from, to, self.len())?;
		let len = to - from;
		if k >= len {
			return Err(SortError::TargetOutOfRange { k, len });
		}
		select_nth(&mut self.slice_mut(s![from..to]), k, &mut |a: &A, b: &A| {
			compare(a, b) == Less
		});
		Ok(self[from + k].clone())
	}

	#[inline]
	fn median(&mut self) -> Result<A, SortError>
	where
		A: Ord + Average,
		S: DataMut,
	{
		self.median_range(0, self.len())
	}
	#[inline]
	fn median_by<F, G>(&mut self, compare: F, average: G) -> Result<A, SortError>
	where
		A: Clone,
		F: FnMut(&A, &A) -> Ordering,
		G: FnMut(&A, &A) -> A,
		S: DataMut,
	{
		self.median_range_by(0, self.len(), compare, average)
	}
	fn median_range(&mut self, from: usize, to: usize) -> Result<A, SortError>
	where
		A: Ord + Average,
		S: DataMut,
	{
		self.median_range_by(from, to, A::cmp, |a, b| a.average(b))
	}
	fn median_range_by<F, G>(
		&mut self,
		from: usize,
		to: usize,
		mut compare: F,
		mut average: G,
	) -> Result<A, SortError>
	where
		A: Clone,
		F: FnMut(&A, &A) -> Ordering,
		G: FnMut(&A, &A) -> A,
		S: DataMut,
	{
		check_range(from, to, self.len())?;
		if from == to {
			return Err(SortError::TargetOutOfRange { k: 0, len: 0 });
		}
		Ok(median_view(
			&mut self.slice_mut(s![from..to]),
			&mut |a: &A, b: &A| compare(a, b) == Less,
			&mut average,
		))
	}
}

#[cfg(feature = "std")]
#[cfg(test)]
mod test {
	use super::{Average, Order1Ext, SortError};
	use ndarray::{Array1, arr1, arr2};
	use quickcheck_macros::quickcheck;

	#[test]
	fn scenario() {
		let mut v = arr1(&[5, 3, 8, 1, 9, 2]);
		let indices = v.sort_range_with_indices(0, 6).unwrap();
		assert_eq!(v, arr1(&[1, 2, 3, 5, 8, 9]));
		assert_eq!(indices, arr1(&[3, 5, 1, 0, 2, 4]));

		let mut v = arr1(&[5, 3, 8, 1, 9, 2]);
		let third = v.select_nth_range(2, 0, 6).unwrap();
		assert_eq!(third, 3);
		assert!(v.iter().take(2).all(|value| *value <= 3));
		assert!(v.iter().skip(3).all(|value| *value >= 3));

		let mut v = arr1(&[5.0, 3.0, 8.0, 1.0, 9.0, 2.0]);
		let median = v
			.median_by(|a, b| a.partial_cmp(b).unwrap(), |a, b| 0.5 * (a + b))
			.unwrap();
		assert_eq!(median, 4.0);
	}

	#[test]
	fn range_validation() {
		let mut v = arr1(&[3, 1, 2]);
		let invalid = SortError::InvalidRange { from: 2, to: 1 };
		let bounds = SortError::RangeOutOfBounds { to: 4, len: 3 };
		assert_eq!(v.sort_range(2, 1), Err(invalid));
		assert_eq!(v.sort_range(0, 4), Err(bounds));
		assert_eq!(v.sort_range_with_indices(2, 1).unwrap_err(), invalid);
		assert_eq!(v.sort_range_with_indices(0, 4).unwrap_err(), bounds);
		assert_eq!(v.select_nth_range(0, 2, 1), Err(invalid));
		assert_eq!(v.select_nth_range(0, 0, 4), Err(bounds));
		assert_eq!(v.median_range(2, 1), Err(invalid));
		assert_eq!(v.median_range(0, 4), Err(bounds));
		// Nothing was touched by any of the rejected calls.
		assert_eq!(v, arr1(&[3, 1, 2]));
	}

	#[test]
	fn target_validation() {
		let mut v = arr1(&[3, 1, 2]);
		assert_eq!(
			v.select_nth_range(2, 0, 2),
			Err(SortError::TargetOutOfRange { k: 2, len: 2 })
		);
		assert_eq!(
			v.select_nth_range(0, 1, 1),
			Err(SortError::TargetOutOfRange { k: 0, len: 0 })
		);
		assert_eq!(
			v.median_range(1, 1),
			Err(SortError::TargetOutOfRange { k: 0, len: 0 })
		);
		assert_eq!(v, arr1(&[3, 1, 2]));
	}

	#[test]
	fn select_and_median_over_all_ranges() {
		let original = [5, 3, 8, 1, 9, 2, 7];
		for from in 0..=original.len() {
			for to in from..=original.len() {
				let mut sorted = original[from..to].to_vec();
				sorted.sort_unstable();
				for k in 0..to - from {
					let mut array = arr1(&original);
					assert_eq!(array.select_nth_range(k, from, to).unwrap(), sorted[k]);
				}
				if to > from {
					let len = to - from;
					let expected = if len % 2 == 0 {
						sorted[len / 2].average(&sorted[len / 2 - 1])
					} else {
						sorted[len / 2]
					};
					let mut array = arr1(&original);
					assert_eq!(array.median_range(from, to).unwrap(), expected);
				}
			}
		}
	}

	#[test]
	fn empty_range_is_noop() {
		let mut v = arr1(&[3, 1, 2]);
		v.sort_range(1, 1).unwrap();
		assert_eq!(v, arr1(&[3, 1, 2]));
		let indices = v.sort_range_with_indices(3, 3).unwrap();
		assert_eq!(indices, arr1(&[0, 1, 2]));
	}

	#[test]
	fn non_contiguous_column() {
		let mut m = arr2(&[[9, 4], [5, 3], [3, 2], [8, 1], [0, 0]]);
		m.column_mut(0).sort_range(1, 4).unwrap();
		assert_eq!(m, arr2(&[[9, 4], [3, 3], [5, 2], [8, 1], [0, 0]]));
	}

	#[quickcheck]
	fn outside_range_untouched(xs: Vec<u32>, from: usize, to: usize) {
		if xs.is_empty() {
			return;
		}
		let from = from % xs.len();
		let to = from + to % (xs.len() - from + 1);
		let original = xs.clone();
		let mut array = Array1::from_vec(xs);
		array.sort_range(from, to).unwrap();
		for i in (0..from).chain(to..original.len()) {
			assert_eq!(array[i], original[i]);
		}
		for i in from + 1..to {
			assert!(array[i - 1] <= array[i]);
		}
	}

	#[quickcheck]
	fn trace_fidelity(xs: Vec<i32>, from: usize, to: usize) {
		if xs.is_empty() {
			return;
		}
		let from = from % xs.len();
		let to = from + to % (xs.len() - from + 1);
		let original = xs.clone();
		let mut array = Array1::from_vec(xs);
		let indices = array.sort_range_with_indices(from, to).unwrap();
		for i in 0..original.len() {
			assert_eq!(array[i], original[indices[i]]);
		}
		for (i, index) in indices.iter().enumerate().take(from) {
			assert_eq!(*index, i);
		}
		for (i, index) in indices.iter().enumerate().skip(to) {
			assert_eq!(*index, i);
		}
	}

	#[quickcheck]
	fn select_matches_sort(xs: Vec<i64>, k: usize) {
		if xs.is_empty() {
			return;
		}
		let k = k % xs.len();
		let mut sorted = xs.clone();
		sorted.sort_unstable();
		let mut array = Array1::from_vec(xs);
		assert_eq!(array.select_nth(k).unwrap(), sorted[k]);
	}

	#[quickcheck]
	fn comparator_paths_agree(xs: Vec<i32>) {
		let mut by_ord = Array1::from_vec(xs.clone());
		let mut by_cmp = Array1::from_vec(xs);
		by_ord.sort().unwrap();
		by_cmp.sort_by(|a, b| a.cmp(b)).unwrap();
		assert_eq!(by_ord, by_cmp);
	}
}
