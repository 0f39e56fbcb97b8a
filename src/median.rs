//! Median as a special case of selection.

use crate::select::select_nth;
use ndarray::ArrayViewMut1;

/// Computes the median of `v`, rearranging it as a side effect.
///
/// Selects the `len / 2` order statistic. For odd lengths that is the median. For even
/// lengths the lower middle element is the maximum of the left partition the selection
/// produced, so a single scan over `v[..len / 2]` recovers it without a second
/// selection pass, and the median is the `average` of both middle elements.
///
/// The caller guarantees `v` is non-empty.
pub fn median_view<T, F, G>(v: &mut ArrayViewMut1<'_, T>, is_less: &mut F, average: &mut G) -> T
where
	T: Clone,
	F: FnMut(&T, &T) -> bool,
	G: FnMut(&T, &T) -> T,
{
	let n = v.len();
	let pos = n / 2;
	select_nth(v, pos, is_less);
	let upper = v[pos].clone();
	if n % 2 == 0 {
		// Maximum of the unordered left partition, the lower middle element.
		let mut lower = &v[0];
		for i in 1..pos {
			if is_less(lower, &v[i]) {
				lower = &v[i];
			}
		}
		average(&upper, lower)
	} else {
		upper
	}
}
