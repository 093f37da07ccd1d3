use crate::{helpers, memory::*};

/// Enum with possible convergence strategies.
/// These strategies specify when [`crate::KMeans::predict`] considers the centroids as converged, and stops
/// iterating before the iteration limit was reached.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConvergenceStrategy<T: Primitive> {
	/// The calculation stops once an iteration left every centroid coordinate exactly as it was.
	/// Coordinates compare the way they would print: NaN equals NaN, and `0.0` equals `-0.0`.
	/// Even the smallest drift in the least significant digit counts as movement.
	Exact,
	/// The calculation stops once no centroid coordinate moved by more than **threshold** during an iteration.
	/// ## Fields:
	/// - **threshold**: Largest per-coordinate movement that still counts as "not moved"
	MaxShift { threshold: T }
}
impl<T: Primitive> Default for ConvergenceStrategy<T> {
	fn default() -> Self { ConvergenceStrategy::Exact }
}
impl<T: Primitive> ConvergenceStrategy<T> {
	/// Compares the centroids from before an iteration with the ones after it.
	/// This is the check [`crate::KMeans::predict`] runs after every step, and can be used the same way
	/// when driving the calculation with [`crate::KMeans::step`].
	/// ## Returns
	/// - **true** if the calculation converged and should stop
	/// - **false** if the calculation should continue
	pub fn converged(&self, previous: &[T], current: &[T]) -> bool {
		if previous.len() != current.len() {
			return false;
		}
		let mut pairs = previous.iter().cloned().zip(current.iter().cloned());
		match *self {
			ConvergenceStrategy::Exact => pairs.all(|(p, c)| helpers::repr_eq(p, c)),
			ConvergenceStrategy::MaxShift { threshold } => pairs.all(|(p, c)| {
				if p.is_nan() || c.is_nan() {
					helpers::repr_eq(p, c)
				} else {
					(p - c).abs() <= threshold
				}
			})
		}
	}
}
