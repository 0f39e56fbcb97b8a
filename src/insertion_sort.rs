//! Straight insertion sort, the small-range bailout of [`crate::quick_sort`].

use crate::trace::Trace;
use ndarray::ArrayViewMut1;

/// Sorts `v[l..=r]` by straight insertion, which is *O*(*n*^2) worst-case.
///
/// The quicksort finishes its small sub-ranges here instead of partitioning them
/// further. Elements are moved by adjacent swaps so the trace follows the exact same
/// permutation as the values.
pub fn insertion_sort_range<T, F, X>(
	v: &mut ArrayViewMut1<'_, T>,
	trace: &mut X,
	l: usize,
	r: usize,
	is_less: &mut F,
) where
	F: FnMut(&T, &T) -> bool,
	X: Trace,
{
	for j in l + 1..=r {
		let mut i = j;
		while i > l && is_less(&v[i], &v[i - 1]) {
			v.swap(i, i - 1);
			trace.swap(i, i - 1);
			i -= 1;
		}
	}
}

#[cfg(feature = "std")]
#[cfg(test)]
mod test {
	use super::insertion_sort_range;
	use ndarray::Array1;
	use quickcheck_macros::quickcheck;

	#[quickcheck]
	fn sorted(xs: Vec<u32>) {
		if xs.is_empty() {
			return;
		}
		let last = xs.len() - 1;
		let mut array = Array1::from_vec(xs);
		insertion_sort_range(&mut array.view_mut(), &mut (), 0, last, &mut u32::lt);
		for i in 1..array.len() {
			assert!(array[i - 1] <= array[i]);
		}
	}

	#[quickcheck]
	fn traced(xs: Vec<i16>) {
		if xs.is_empty() {
			return;
		}
		let last = xs.len() - 1;
		let original = xs.clone();
		let mut array = Array1::from_vec(xs);
		let mut indices = Array1::from_iter(0..array.len());
		insertion_sort_range(
			&mut array.view_mut(),
			&mut indices.view_mut(),
			0,
			last,
			&mut i16::lt,
		);
		for i in 0..array.len() {
			assert_eq!(array[i], original[indices[i]]);
		}
	}
}
