use crate::memory::*;

/// Enum with the possible strategies for clusters that did not receive a single sample during an
/// iteration. The mean of zero samples is undefined, so something has to be decided for their centroids.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum EmptyClusterPolicy {
	/// Store the undefined mean (NaN) as the centroid's coordinates.
	/// A NaN coordinate never compares as the smallest distance, so the cluster stays empty for
	/// the rest of the calculation.
	#[default]
	Undefined,
	/// Leave the centroid's coordinates where they were before the iteration.
	Retain
}
impl EmptyClusterPolicy {
	/// Writes the new coordinates of one centroid, given the sum of its assigned samples and their count.
	pub(crate) fn apply<T: Primitive>(&self, centroid: &mut [T], sums: &[T], frequency: usize) {
		if frequency == 0 && *self == EmptyClusterPolicy::Retain {
			return;
		}
		// For frequency == 0 this divides 0/0, which is NaN.
		let divisor = T::from(frequency).unwrap_or_else(T::nan);
		centroid.iter_mut().zip(sums.iter().cloned())
			.for_each(|(c, s)| *c = s / divisor);
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn mean_of_assigned_samples() {
		let mut centroid = [0.0f64, 0.0];
		EmptyClusterPolicy::Undefined.apply(&mut centroid, &[3.0, 9.0], 3);
		assert_eq!(centroid, [1.0, 3.0]);
		EmptyClusterPolicy::Retain.apply(&mut centroid, &[4.0, 2.0], 2);
		assert_eq!(centroid, [2.0, 1.0]);
	}

	#[test]
	fn undefined_stores_nan() {
		let mut centroid = [7.0f32, -1.0];
		EmptyClusterPolicy::Undefined.apply(&mut centroid, &[0.0, 0.0], 0);
		assert!(centroid.iter().all(|c| c.is_nan()));
	}

	#[test]
	fn retain_keeps_previous() {
		let mut centroid = [7.0f64, -1.0];
		EmptyClusterPolicy::Retain.apply(&mut centroid, &[0.0, 0.0], 0);
		assert_eq!(centroid, [7.0, -1.0]);
	}

	#[test]
	fn default_is_undefined() {
		assert_eq!(EmptyClusterPolicy::default(), EmptyClusterPolicy::Undefined);
	}
}
