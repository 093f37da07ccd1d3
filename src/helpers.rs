use crate::memory::Primitive;

/// Squared euclidean distance between two points of the same dimensionality.
#[inline(always)]
pub(crate) fn squared_distance<T: Primitive>(a: &[T], b: &[T]) -> T {
    a.iter().cloned().zip(b.iter().cloned())
        .map(|(av, bv)| av - bv)        // <sample> - <centroid>
        .map(|v| v * v)                 // <vec_components> ^2
        .fold(T::zero(), |acc, v| acc + v)
}

/// Compares two floats the way their textual representation would:
/// NaN equals NaN, and `0.0` equals `-0.0`.
#[inline(always)]
pub(crate) fn repr_eq<T: Primitive>(a: T, b: T) -> bool {
    a == b || (a.is_nan() && b.is_nan())
}

#[cfg(test)]
macro_rules! assert_approx_eq {
	($left: expr, $right: expr, $tol: expr) => ({
		match ($left, $right, $tol) {
			(left_val , right_val, tol_val) => {
				let delta = (left_val - right_val).abs();
				if !(delta < tol_val) {
					panic!(
						"assertion failed: `(left ≈ right)` \
						(left: `{}`, right: `{}`) \
						with ∆={:1.1e} (allowed ∆={:e})",
						left_val , right_val, delta, tol_val
					)
				}
			}
		}
	});
	($left: expr, $right: expr) => (assert_approx_eq!(($left), ($right), 1e-15))
}

#[cfg(test)]
pub(crate) mod testing {
	use std::collections::HashMap;

	/// Asserts that both label vectors describe the same grouping of samples, regardless of
	/// which cluster index each group got. Returns the mapping (should -> actual).
	pub fn assert_same_grouping(should: &[usize], actual: &[usize]) -> HashMap<usize, usize> {
		assert_eq!(should.len(), actual.len());
		let mut idmap = HashMap::new();
		let mut idrevmap = HashMap::new();
		for idx in 0..should.len() {
			let (should_id, actual_id) = (should[idx], actual[idx]);
			if !idmap.contains_key(&should_id) {
				assert_eq!(idrevmap.contains_key(&actual_id), false,
					"Cluster {} used for two different groups. Actual: {:?}\nShould: {:?}", actual_id, actual, should);
				idmap.insert(should_id, actual_id);
				idrevmap.insert(actual_id, should_id);
			}
			if idmap[&should_id] != actual_id {
				panic!(
					"Cluster assignments different at idx {}.\nMapping(should -> actual): {:?}\nActual: {:?}\nShould: {:?}",
					idx, idmap, actual, should
				);
			}
		}
		idmap
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn squared_distance_sums_components() {
		assert_eq!(squared_distance(&[0.0f64, 0.0], &[3.0, 4.0]), 25.0);
		assert_eq!(squared_distance(&[1.5f32], &[1.5]), 0.0);
		assert!(squared_distance(&[1.0f64], &[f64::NAN]).is_nan());
	}

	#[test]
	fn repr_equality() {
		assert!(repr_eq(f64::NAN, f64::NAN));
		assert!(repr_eq(0.0f64, -0.0));
		assert!(repr_eq(1.25f32, 1.25));
		assert!(!repr_eq(1.0f64, 1.0 + f64::EPSILON));
		assert!(!repr_eq(f64::NAN, 0.0));
	}

	#[test]
	fn same_grouping_accepts_permuted_labels() {
		let map = testing::assert_same_grouping(&[0, 0, 1, 1], &[1, 1, 0, 0]);
		assert_eq!(map[&0], 1);
		assert_eq!(map[&1], 0);
	}

	#[test]
	#[should_panic]
	fn same_grouping_rejects_merged_groups() {
		testing::assert_same_grouping(&[0, 0, 1, 1], &[0, 0, 0, 0]);
	}
}
