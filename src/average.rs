//! Averaging capability for median computation over even-length ranges.

/// Binary averaging capability required by median computation over even-length ranges.
///
/// The median of an even-length range is the average of the two middle elements, so
/// element types used with the intrinsic-order [`median`] path must state what their
/// average is. The provided default returns a clone of `self`, the first operand. That
/// degenerate fallback is intentional for types without averaging semantics: the median
/// of an even-length range then resolves to the lower middle element.
///
/// [`median`]: crate::Order1Ext::median
///
/// # Examples
///
/// ```
/// use ndarray_order::Average;
///
/// assert_eq!(3.average(&5), 4);
/// assert_eq!(3.average(&4), 3);
/// assert_eq!(3.0.average(&4.0), 3.5);
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Label(&'static str);
///
/// impl Average for Label {}
///
/// // No averaging semantics, the first operand wins.
/// assert_eq!(Label("a").average(&Label("b")), Label("a"));
/// ```
pub trait Average: Clone {
	/// Returns the average of `self` and `other`.
	#[inline]
	#[must_use]
	fn average(&self, other: &Self) -> Self {
		self.clone()
	}
}

/// Truncating sum-then-divide average, `(a + b) / 2` with division toward zero.
///
/// The intermediate sum is **not** widened: it wraps around on overflow before the
/// division, so averages of values near the type extremes are surprising, e.g.
/// `i32::MAX.average(&1)` is `i32::MIN / 2`. This matches the fixed-width reference
/// behavior that downstream consumers depend on bit-for-bit.
macro_rules! impl_average_int {
	($($t:ty),*) => {$(
		impl Average for $t {
			#[inline]
			fn average(&self, other: &Self) -> Self {
				self.wrapping_add(*other) / 2
			}
		}
	)*};
}

impl_average_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// Arithmetic mean, `0.5 * (a + b)`.
macro_rules! impl_average_float {
	($($t:ty),*) => {$(
		impl Average for $t {
			#[inline]
			fn average(&self, other: &Self) -> Self {
				0.5 * (self + other)
			}
		}
	)*};
}

impl_average_float!(f32, f64);

#[cfg(feature = "std")]
#[cfg(test)]
mod test {
	use super::Average;

	#[test]
	fn truncates_toward_zero() {
		assert_eq!(7.average(&4), 5);
		assert_eq!((-7).average(&-4), -5);
		assert_eq!(3u8.average(&4), 3);
	}

	#[test]
	fn wraps_on_overflow() {
		assert_eq!(i32::MAX.average(&1), i32::MIN / 2);
		assert_eq!(200u8.average(&100), 22);
	}

	#[test]
	fn float_mean() {
		assert_eq!(3.0f64.average(&5.0), 4.0);
		assert_eq!(1.0f32.average(&2.0), 1.5);
	}
}
