use crate::memory::*;
use rand::prelude::*;

/// Observed value range of one feature.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Boundary<T: Primitive> {
    pub min: T,
    pub max: T,
}

/// Calculates the `{min, max}` boundaries of every feature in one pass over the (sample-major) samples.
pub(crate) fn boundaries<T: Primitive>(samples: &[T], sample_dims: usize) -> Vec<Boundary<T>> {
    let mut boundaries = vec![Boundary { min: T::infinity(), max: T::neg_infinity() }; sample_dims];
    samples.chunks_exact(sample_dims).for_each(|s| {
        boundaries.iter_mut().zip(s.iter().cloned()).for_each(|(b, v)| {
            if v < b.min { b.min = v; }
            if v > b.max { b.max = v; }
        });
    });
    boundaries
}

/// Uniform random initialization method
///
/// ## Description
/// Every coordinate of every centroid is drawn independently and uniformly from the observed value range
/// of its feature: `u * (max - min) + min` with `u` in `[0, 1)`. Centroids are drawn in index order, the
/// features of one centroid in feature order.
pub(crate) fn calculate<T: Primitive>(samples: &[T], sample_dims: usize, k: usize, rnd: &mut dyn RngCore) -> Vec<T> {
    let boundaries = boundaries(samples, sample_dims);
    let mut centroids = Vec::with_capacity(k * sample_dims);
    for _ in 0..k {
        centroids.extend(boundaries.iter().map(|b| {
            let u: T = rnd.gen_range(T::zero()..T::one());
            u * (b.max - b.min) + b.min
        }));
    }
    centroids
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries_per_feature() {
        // samples: (1, -2), (4, 5), (-3, 0)
        let samples = vec![1.0f64, -2.0, 4.0, 5.0, -3.0, 0.0];
        let b = boundaries(&samples, 2);
        assert_eq!(b, vec![Boundary { min: -3.0, max: 4.0 }, Boundary { min: -2.0, max: 5.0 }]);
    }

    #[test]
    fn centroids_within_boundaries() {
        let samples = vec![0.0f64, 100.0, 10.0, 200.0, 5.0, 150.0];
        let mut rnd = StdRng::seed_from_u64(1337);
        let centroids = calculate(&samples, 2, 50, &mut rnd);
        assert_eq!(centroids.len(), 100);
        centroids.chunks_exact(2).for_each(|c| {
            assert!(c[0] >= 0.0 && c[0] <= 10.0, "{:?}", c);
            assert!(c[1] >= 100.0 && c[1] <= 200.0, "{:?}", c);
        });
    }

    #[test]
    fn degenerate_range_yields_constant() {
        let samples = vec![5.0f32, 5.0, 5.0];
        let mut rnd = StdRng::seed_from_u64(7);
        assert_eq!(calculate(&samples, 1, 3, &mut rnd), vec![5.0, 5.0, 5.0]);
    }

    #[test]
    fn seeded_generator_is_reproducible() {
        let samples = vec![0.0f64, 1.0, 2.0, 3.0];
        let a = calculate(&samples, 2, 4, &mut StdRng::seed_from_u64(42));
        let b = calculate(&samples, 2, 4, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }
}
