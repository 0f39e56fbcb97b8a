//! Index-trace companion permuted in lockstep with the values.

use ndarray::ArrayViewMut1;

/// Companion buffer permuted in lockstep with the value buffer.
///
/// Every exchange the sorting and selection algorithms perform on the value view is
/// mirrored onto the trace, so one generic algorithm covers both the plain and the
/// index-trace variants of an operation.
pub trait Trace {
	/// Mirrors a swap of the value positions `a` and `b`.
	fn swap(&mut self, a: usize, b: usize);
}

/// Zero-cost no-op trace for the plain, non-indexed operations.
impl Trace for () {
	#[inline]
	fn swap(&mut self, _a: usize, _b: usize) {}
}

/// Index trace recording, for every position, the offset its element originally
/// occupied.
impl Trace for ArrayViewMut1<'_, usize> {
	#[inline]
	fn swap(&mut self, a: usize, b: usize) {
		ArrayViewMut1::swap(self, a, b);
	}
}
