//! Iterative quickselect sharing the partition discipline of [`crate::quick_sort`].

use ndarray::ArrayViewMut1;

/// Rearranges `v` so position `k` holds its k-th smallest element.
///
/// All elements left of `k` end up less than or equal to `v[k]` and all elements right
/// of it greater than or equal, both sides in no particular order. Expected *O*(*n*)
/// total work: after each partitioning only the side still containing `k` is
/// revisited, shrinking the working bounds from both ends where possible.
///
/// The caller guarantees `k < v.len()`.
pub fn select_nth<T, F>(v: &mut ArrayViewMut1<'_, T>, k: usize, is_less: &mut F)
where
	F: FnMut(&T, &T) -> bool,
{
	let mut l = 0;
	let mut r = v.len() - 1;
	loop {
		// Terminal case of one or two elements, order them directly.
		if r <= l + 1 {
			if r == l + 1 && is_less(&v[r], &v[l]) {
				v.swap(l, r);
			}
			return;
		}
		// Median-of-three pre-ordering, same as the quicksort.
		let mid = (l + r) >> 1;
		v.swap(mid, l + 1);
		if is_less(&v[r], &v[l]) {
			v.swap(l, r);
		}
		if is_less(&v[r], &v[l + 1]) {
			v.swap(l + 1, r);
		}
		if is_less(&v[l + 1], &v[l]) {
			v.swap(l, l + 1);
		}
		let mut i = l + 1;
		let mut j = r;
		loop {
			loop {
				i += 1;
				if !is_less(&v[i], &v[l + 1]) {
					break;
				}
			}
			loop {
				j -= 1;
				if !is_less(&v[l + 1], &v[j]) {
					break;
				}
			}
			if j < i {
				break;
			}
			v.swap(i, j);
		}
		v.swap(l + 1, j);
		// Keep only the side of the partition boundary that contains `k`.
		if j >= k {
			r = j - 1;
		}
		if j <= k {
			l = i;
		}
	}
}
