//! Iterative median-of-three quicksort with a bounded pivot stack, after Sedgewick,
//! "Implementing Quicksort Programs", Communications of the ACM 21 (1978).

use crate::{error::SortError, insertion_sort::insertion_sort_range, trace::Trace};
use ndarray::ArrayViewMut1;

/// Sub-ranges below this length are finished by straight insertion.
const SMALL_SORT: usize = 7;

/// Capacity of the pivot stack, 32 pending partition pairs.
///
/// The larger partition is always pushed while the smaller one is processed
/// immediately, so pending sub-ranges at least halve with every push and the stack
/// cannot legitimately outgrow this bound.
const NSTACK: usize = 64;

/// Sorts `v` ascending in place, which is *O*(*n* log *n*) on average.
///
/// Partitions around the median of the first, middle, and last element of each
/// sub-range using two converging scan pointers. The classic *O*(*n*^2) worst-case on
/// adversarial inputs is accepted in exchange for tight inner loops and no allocation.
/// Every swap is mirrored onto `trace`.
///
/// Fails with [`SortError::StackExhausted`] if more partitions become pending than the
/// fixed stack holds, which a well-behaved `is_less` cannot cause.
pub fn quick_sort<T, F, X>(
	mut v: ArrayViewMut1<'_, T>,
	trace: &mut X,
	is_less: &mut F,
) -> Result<(), SortError>
where
	F: FnMut(&T, &T) -> bool,
	X: Trace,
{
	let n = v.len();
	if n < 2 {
		return Ok(());
	}

	let mut stack = [0; NSTACK];
	let mut top = 0;
	let mut l = 0;
	let mut r = n - 1;

	loop {
		if r - l < SMALL_SORT {
			insertion_sort_range(&mut v, trace, l, r, is_less);
			if top == 0 {
				return Ok(());
			}
			// Pop the pending sub-range and begin a new round of partitioning.
			top -= 2;
			l = stack[top];
			r = stack[top + 1];
		} else {
			// Median-of-three: move the middle element next to the range start, then
			// order positions `l`, `l + 1`, `r` so `v[l] <= v[l + 1] <= v[r]`. The
			// pivot ends up at `l + 1` with sentinels on both sides.
			let mid = (l + r) >> 1;
			v.swap(mid, l + 1);
			trace.swap(mid, l + 1);
			if is_less(&v[r], &v[l]) {
				v.swap(l, r);
				trace.swap(l, r);
			}
			if is_less(&v[r], &v[l + 1]) {
				v.swap(l + 1, r);
				trace.swap(l + 1, r);
			}
			if is_less(&v[l + 1], &v[l]) {
				v.swap(l, l + 1);
				trace.swap(l, l + 1);
			}
			// Two converging scan pointers over the interior, pivot at `l + 1`.
			let mut i = l + 1;
			let mut j = r;
			loop {
				// Scan up for an element >= pivot.
				loop {
					i += 1;
					if !is_less(&v[i], &v[l + 1]) {
						break;
					}
				}
				// Scan down for an element <= pivot.
				loop {
					j -= 1;
					if !is_less(&v[l + 1], &v[j]) {
						break;
					}
				}
				// Pointers crossed, partitioning complete.
				if j < i {
					break;
				}
				v.swap(i, j);
				trace.swap(i, j);
			}
			// Insert the pivot at the partition boundary.
			v.swap(l + 1, j);
			trace.swap(l + 1, j);
			if top + 2 > NSTACK {
				return Err(SortError::StackExhausted);
			}
			// Push the larger partition, iterate on the smaller one.
			if r - i + 1 >= j - l {
				stack[top] = i;
				stack[top + 1] = r;
				top += 2;
				r = j - 1;
			} else {
				stack[top] = l;
				stack[top + 1] = j - 1;
				top += 2;
				l = i;
			}
		}
	}
}

#[cfg(feature = "std")]
#[cfg(test)]
mod test {
	use super::quick_sort;
	use ndarray::Array1;
	use quickcheck_macros::quickcheck;

	#[quickcheck]
	fn sorted(xs: Vec<u32>) {
		let mut sorted = xs.clone();
		sorted.sort_unstable();
		let sorted = Array1::from_vec(sorted);
		let mut array = Array1::from_vec(xs);
		quick_sort(array.view_mut(), &mut (), &mut u32::lt).unwrap();
		assert_eq!(array, sorted);
	}

	#[quickcheck]
	fn sorted_with_duplicates(xs: Vec<u8>) {
		let mut sorted = xs.clone();
		sorted.sort_unstable();
		let sorted = Array1::from_vec(sorted);
		let mut array = Array1::from_vec(xs);
		quick_sort(array.view_mut(), &mut (), &mut u8::lt).unwrap();
		assert_eq!(array, sorted);
	}

	#[quickcheck]
	fn idempotent(xs: Vec<i32>) {
		let mut array = Array1::from_vec(xs);
		quick_sort(array.view_mut(), &mut (), &mut i32::lt).unwrap();
		let once = array.clone();
		quick_sort(array.view_mut(), &mut (), &mut i32::lt).unwrap();
		assert_eq!(array, once);
	}

	#[quickcheck]
	fn traced(xs: Vec<i64>) {
		let original = xs.clone();
		let mut array = Array1::from_vec(xs);
		let mut indices = Array1::from_iter(0..array.len());
		quick_sort(array.view_mut(), &mut indices.view_mut(), &mut i64::lt).unwrap();
		for i in 0..array.len() {
			assert_eq!(array[i], original[indices[i]]);
		}
	}

	#[test]
	fn descending_run() {
		let mut array = Array1::from_iter((0..1000).rev());
		quick_sort(array.view_mut(), &mut (), &mut i32::lt).unwrap();
		assert_eq!(array, Array1::from_iter(0..1000));
	}

	#[test]
	fn random_large() {
		use rand::Rng;

		let mut rng = rand::rng();
		let xs = (0..10_000)
			.map(|_| rng.random_range(0..1000u32))
			.collect::<Vec<_>>();
		let mut sorted = xs.clone();
		sorted.sort_unstable();
		let mut array = Array1::from_vec(xs);
		quick_sort(array.view_mut(), &mut (), &mut u32::lt).unwrap();
		assert_eq!(array, Array1::from_vec(sorted));
	}
}
