use crate::{helpers, memory::*, EmptyClusterPolicy, KMeans, KMeansState};

pub(crate) struct Lloyd<T> where T: Primitive {
	_p: std::marker::PhantomData<T>
}
impl<T> Lloyd<T> where T: Primitive {
    /// Assigns every sample to its nearest centroid and recalculates the state's inertia from scratch.
    /// Centroids are scanned in increasing index order and only a strictly smaller distance replaces
    /// the current best, so the first of several equally near centroids wins.
    pub(crate) fn update_cluster_assignments(data: &KMeans<T>, state: &mut KMeansState<T>) {
        let sample_dims = data.sample_dims;
        let (centroids, labels) = (&state.centroids, &mut state.labels);
        let mut inertia = T::zero();

        labels.clear();
        labels.extend(data.samples.chunks_exact(sample_dims).map(|s| {
            let mut best_dist = T::infinity();
            let mut best_idx = 0;
            centroids.chunks_exact(sample_dims).enumerate()
                .for_each(|(ci, c)| {
                    let dist = helpers::squared_distance(s, c);
                    if dist < best_dist {
                        best_dist = dist;
                        best_idx = ci;
                    }
                });
            inertia += best_dist;
            best_idx
        }));
        state.inertia = inertia;
    }

    /// Moves every centroid into the mean of its assigned samples.
    /// Returns the amount of clusters that did not receive any sample.
    pub(crate) fn update_centroids(data: &KMeans<T>, state: &mut KMeansState<T>, policy: EmptyClusterPolicy) -> usize {
        let sample_dims = data.sample_dims;
        let mut sums = vec![T::zero(); state.centroids.len()];

        let (centroid_frequency, labels) = (&mut state.centroid_frequency, &state.labels);
        centroid_frequency.iter_mut().for_each(|v| *v = 0);
        data.samples.chunks_exact(sample_dims)
            .zip(labels.iter().cloned())
            .for_each(|(s, centroid_id)| {
                centroid_frequency[centroid_id] += 1;
                sums.iter_mut().skip(centroid_id * sample_dims).take(sample_dims)
                    .zip(s.iter().cloned())
                    .for_each(|(c, sv)| *c += sv);
            });

        state.centroids.chunks_exact_mut(sample_dims)
            .zip(sums.chunks_exact(sample_dims))
            .zip(state.centroid_frequency.iter().cloned())
            .for_each(|((c, sum), cfreq)| policy.apply(c, sum, cfreq));

        state.centroid_frequency.iter().filter(|&&f| f == 0).count()
    }

    /// One full Lloyd iteration: assignment phase, followed by the update phase.
    pub(crate) fn step(data: &KMeans<T>, state: &mut KMeansState<T>) {
        Self::update_cluster_assignments(data, state);
        let empty_clusters = Self::update_centroids(data, state, data.empty_cluster_policy);
        state.iterations += 1;
        log::trace!("iteration {} - inertia: {:e} | empty clusters: {}", state.iterations, state.inertia, empty_clusters);
    }
}




#[cfg(test)]
mod tests {
    use super::*;
    use crate::helpers::testing::assert_same_grouping;

    fn engine(features: Vec<Vec<f64>>, centroids: Vec<f64>) -> KMeans<f64> {
        let k = centroids.len() / features.len();
        let mut kmean = KMeans::new(features, k).unwrap();
        kmean.state.centroids = centroids;
        kmean
    }

    #[test]
    fn assignment_and_update() {
        // 1 feature, samples 1,2,3 - centroids at 2 and 1337
        let kmean = engine(vec![vec![1.0, 2.0, 3.0]], vec![2.0, 1337.0]);
        let mut state = kmean.state.clone();
        Lloyd::update_cluster_assignments(&kmean, &mut state);
        assert_eq!(state.labels, vec![0, 0, 0]);
        assert_eq!(state.inertia, 2.0);

        let empty = Lloyd::update_centroids(&kmean, &mut state, EmptyClusterPolicy::Retain);
        assert_eq!(empty, 1);
        assert_eq!(state.centroid_frequency, vec![3, 0]);
        assert_eq!(state.centroids, vec![2.0, 1337.0]);
    }

    #[test]
    fn first_centroid_wins_ties() {
        // Both centroids are at the exact same spot: every sample must go to index 0
        let mut kmean = engine(vec![vec![0.0, 1.0, 2.0], vec![0.0, 1.0, 2.0]], vec![1.0, 1.0, 1.0, 1.0]);
        kmean.step();
        assert_eq!(kmean.state.labels, vec![0, 0, 0]);
        assert_eq!(kmean.state.centroid_frequency, vec![3, 0]);

        // Equidistant centroids on both sides of the sample
        let mut kmean = engine(vec![vec![5.0]], vec![4.0, 6.0, 4.0]);
        kmean.step();
        assert_eq!(kmean.state.labels, vec![0]);
        assert_eq!(kmean.state.inertia, 1.0);
    }

    #[test]
    fn inertia_is_recalculated_not_accumulated() {
        let mut kmean = engine(vec![vec![0.0, 1.0, 10.0, 11.0]], vec![0.5, 10.5]);
        kmean.step();
        assert_eq!(kmean.state.inertia, 1.0);
        kmean.step();
        assert_eq!(kmean.state.inertia, 1.0);
        assert_eq!(kmean.state.iterations, 2);
    }

    #[test]
    fn empty_cluster_becomes_undefined_and_stays_empty() {
        let mut kmean = engine(vec![vec![1.0, 2.0, 3.0], vec![0.0, 0.0, 0.0]], vec![2.0, 0.0, 1337.0, 0.0]);
        kmean.step();
        assert_eq!(kmean.state.labels, vec![0, 0, 0]);
        assert_eq!(kmean.state.centroid(0), &[2.0, 0.0]);
        assert!(kmean.state.centroid(1).iter().all(|c| c.is_nan()));

        // NaN centroids never win an assignment again
        kmean.step();
        assert_eq!(kmean.state.labels, vec![0, 0, 0]);
        assert_eq!(kmean.state.inertia, 2.0);
        assert!(kmean.state.centroid(1).iter().all(|c| c.is_nan()));
    }

    #[test]
    fn all_centroids_undefined_keeps_label_zero() {
        let mut kmean = engine(vec![vec![1.0, 2.0]], vec![f64::NAN, f64::NAN]);
        kmean.step();
        assert_eq!(kmean.state.labels, vec![0, 0]);
        assert_eq!(kmean.state.inertia, f64::INFINITY);
    }

    #[test]
    fn two_groups_in_one_step() {
        let mut kmean = engine(vec![vec![0.0, 0.0, 10.0, 10.0], vec![0.0, 1.0, 10.0, 11.0]], vec![10.0, 10.0, 0.0, 0.0]);
        kmean.step();
        assert_same_grouping(&[1, 1, 0, 0], &kmean.state.labels);
        assert_eq!(kmean.state.labels, vec![1, 1, 0, 0]);
        assert_eq!(kmean.state.centroids, vec![10.0, 10.5, 0.0, 0.5]);
        assert_eq!(kmean.state.centroid_frequency, vec![2, 2]);
        assert_eq!(kmean.state.inertia, 0.0 + 1.0 + 0.0 + 1.0);
    }
}
