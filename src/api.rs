use crate::{inits, memory::*, ConvergenceStrategy, EmptyClusterPolicy, KMeansError, Result};
use crate::variants::Lloyd;
use std::cell::RefCell;
use std::ops::DerefMut;
use rand::prelude::*;

/// Amount of clusters used by [`KMeans::with_default_clusters`].
pub const DEFAULT_CLUSTER_COUNT: usize = 3;
/// Iteration limit used by [`KMeans::predict`], when none is given.
pub const DEFAULT_MAX_ITERATIONS: usize = 100;

/// This is a structure holding various configuration options for a k-means calculation, such as
/// the random number generator to use for the centroid initialization, or the strategy used to detect convergence.
///
/// For a more detailed information about all possible options, have a look at [`KMeansConfigBuilder`].
pub struct KMeansConfig<T: Primitive> {
    /// Random number generator to use
    pub(crate) rnd: Box<RefCell<dyn RngCore>>,
    /// What happens to the centroid of a cluster without samples
    pub(crate) empty_cluster_policy: EmptyClusterPolicy,
    /// The convergence-strategy used by [`KMeans::predict`]
    pub(crate) convergence: ConvergenceStrategy<T>
}
impl<T: Primitive> Default for KMeansConfig<T> {
    fn default() -> Self {
        Self {
            rnd: Box::new(RefCell::new(rand::thread_rng())),
            empty_cluster_policy: EmptyClusterPolicy::default(),
            convergence: ConvergenceStrategy::default()
        }
    }
}
impl<T: Primitive> KMeansConfig<T> {
    /// Use the [`KMeansConfigBuilder`] to build a [`KMeansConfig`] instance.
    pub fn build() -> KMeansConfigBuilder<T> {
        KMeansConfigBuilder { config: KMeansConfig::default() }
    }
}
impl<T: Primitive> std::fmt::Debug for KMeansConfig<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KMeansConfig")
            .field("empty_cluster_policy", &self.empty_cluster_policy)
            .field("convergence", &self.convergence)
            .finish_non_exhaustive()
    }
}

pub struct KMeansConfigBuilder<T: Primitive> {
    config: KMeansConfig<T>
}
impl<T: Primitive> KMeansConfigBuilder<T> {
    /// Set the random number generator that should be used for the centroid initialization.
    /// Use a seeded generator for deterministically repeatable results.
    pub fn random_generator<R: RngCore + 'static>(mut self, rnd: R) -> Self {
        self.config.rnd = Box::new(RefCell::new(rnd)); self
    }
    /// Set what should happen to the centroid of a cluster that did not receive any sample in an iteration.
    /// For more information, see documentation of [`EmptyClusterPolicy`].
    /// ## Default
    /// [`EmptyClusterPolicy::Undefined`]
    pub fn empty_cluster_policy(mut self, policy: EmptyClusterPolicy) -> Self {
        self.config.empty_cluster_policy = policy; self
    }
    /// Set the convergence-strategy to use in [`KMeans::predict`]. For more information,
    /// see documentation of [`ConvergenceStrategy`].
    /// ## Default
    /// [`ConvergenceStrategy::Exact`]
    pub fn convergence(mut self, convergence: ConvergenceStrategy<T>) -> Self {
        self.config.convergence = convergence; self
    }
    /// Return the internally built configuration structure.
    pub fn build(self) -> KMeansConfig<T> { self.config }
}


/// This is the data-structure storing the current state of a k-means calculation, as returned by
/// [`KMeans::step`] and [`KMeans::predict`].
///
/// ## Generics
/// - **T**: Underlying primitive type that was used for the calculation
///
/// ## Fields
/// - **k**: The amount of clusters that were requested
/// - **inertia**: The total sum of squared distances from all samples to their respective centroids
/// - **centroids**: Current cluster centers [row-major] = [<centroid0>,<centroid1>,<centroid2>,...]
/// - **centroid_frequency**: Amount of samples in each cluster after the last iteration
/// - **labels**: Vector mapping each sample to its respective nearest cluster (empty before the first iteration)
/// - **iterations**: Amount of iterations that were calculated so far
#[derive(Clone, Debug)]
pub struct KMeansState<T: Primitive> {
    pub k: usize,
    pub inertia: T,
    pub centroids: Vec<T>,
    pub centroid_frequency: Vec<usize>,
    pub labels: Vec<usize>,
    pub iterations: usize,

    pub(crate) sample_dims: usize
}
impl<T: Primitive> KMeansState<T> {
    pub(crate) fn new(centroids: Vec<T>, sample_dims: usize, k: usize) -> Self {
        Self {
            k,
            inertia: T::zero(),
            centroids,
            centroid_frequency: vec![0usize;k],
            labels: Vec::new(),
            iterations: 0,
            sample_dims
        }
    }

    /// Amount of dimensions (features) of every centroid.
    pub fn sample_dims(&self) -> usize { self.sample_dims }

    /// Coordinates of the centroid with the given index.
    pub fn centroid(&self, idx: usize) -> &[T] {
        &self.centroids[idx * self.sample_dims..(idx + 1) * self.sample_dims]
    }

    /// Iterate over all centroids, in index order.
    pub fn iter_centroids(&self) -> impl Iterator<Item = &[T]> + '_ {
        // a state without dimensions has no centroids; chunks_exact() would panic on 0
        self.centroids.chunks_exact(self.sample_dims.max(1))
    }
}




/// Entrypoint of this crate's API-Surface.
///
/// Create an instance of this struct, giving the samples you want to cluster, and the amount of clusters.
/// The primitive type of the passed samples will be the type used internally for all calculations,
/// as well as the result as stored in the [`KMeansState`] structure.
///
/// Unlike a one-shot clustering function, an instance carries its calculation state: every call to
/// [`KMeans::step`] advances the clustering by exactly one Lloyd iteration, and [`KMeans::predict`] repeats
/// such steps until the centroids converged (or an iteration limit is reached).
pub struct KMeans<T> where T: Primitive {
    pub(crate) sample_cnt: usize,
    pub(crate) sample_dims: usize,
    pub(crate) samples: Vec<T>,
    pub(crate) empty_cluster_policy: EmptyClusterPolicy,
    pub(crate) convergence: ConvergenceStrategy<T>,
    pub(crate) state: KMeansState<T>
}
impl<T> KMeans<T> where T: Primitive {
    /// Create a new instance of the [`KMeans`] structure, using the default [`KMeansConfig`].
    /// See [`KMeans::with_config`] for details.
    pub fn new(samples: Vec<Vec<T>>, k: usize) -> Result<Self> {
        Self::with_config(samples, k, &KMeansConfig::default())
    }

    /// Create a new instance of the [`KMeans`] structure, searching for [`DEFAULT_CLUSTER_COUNT`] clusters.
    pub fn with_default_clusters(samples: Vec<Vec<T>>) -> Result<Self> {
        Self::new(samples, DEFAULT_CLUSTER_COUNT)
    }

    /// Create a new instance of the [`KMeans`] structure.
    ///
    /// The centroids are initialized right away: each coordinate is drawn uniformly from the value range
    /// the samples span in that feature.
    ///
    /// ## Arguments
    /// - **samples**: Sample matrix [feature-major] = [<feature0>,<feature1>,...], where every feature row
    ///   holds one value per sample
    /// - **k**: Amount of clusters to search for
    /// - **config**: [`KMeansConfig`] instance, containing several configuration options for the calculation.
    ///
    /// ## Errors
    /// - [`KMeansError::InvalidInput`] if the matrix has no features or no samples, or if **k** is 0
    /// - [`KMeansError::InconsistentShape`] if the feature rows differ in length
    pub fn with_config(samples: Vec<Vec<T>>, k: usize, config: &KMeansConfig<T>) -> Result<Self> {
        let sample_dims = samples.len();
        let sample_cnt = samples.first()
            .map(|row| row.len())
            .ok_or_else(|| KMeansError::InvalidInput("sample matrix has no features".into()))?;
        if let Some((feature, row)) = samples.iter().enumerate().find(|(_, row)| row.len() != sample_cnt) {
            return Err(KMeansError::InconsistentShape { feature, expected: sample_cnt, found: row.len() });
        }
        if sample_cnt == 0 {
            return Err(KMeansError::InvalidInput("sample matrix contains no samples".into()));
        }
        if k == 0 {
            return Err(KMeansError::InvalidInput("amount of clusters has to be positive".into()));
        }

        // Recopy into sample-major buffer, so that each sample is one contiguous slice
        let samples = transpose_features(&samples, sample_cnt);
        let centroids = inits::uniform::calculate(&samples, sample_dims, k, config.rnd.borrow_mut().deref_mut());
        log::debug!("initialized {} centroids for {} samples with {} features", k, sample_cnt, sample_dims);

        Ok(Self {
            sample_cnt,
            sample_dims,
            samples,
            empty_cluster_policy: config.empty_cluster_policy,
            convergence: config.convergence,
            state: KMeansState::new(centroids, sample_dims, k)
        })
    }

    /// Amount of clusters this instance searches for.
    pub fn n_clusters(&self) -> usize { self.state.k }
    /// Amount of features (dimensions) of each sample.
    pub fn n_features(&self) -> usize { self.sample_dims }
    /// Amount of samples being clustered.
    pub fn n_samples(&self) -> usize { self.sample_cnt }

    /// Current state of the calculation.
    pub fn state(&self) -> &KMeansState<T> { &self.state }

    /// Consume this instance, returning the state of the calculation.
    pub fn into_state(self) -> KMeansState<T> { self.state }

    /// Advance the calculation by exactly one Lloyd iteration.
    ///
    /// Every sample is assigned to its nearest centroid (the lowest index wins ties), the inertia is
    /// recalculated, and every centroid is then moved into the mean of its samples. Clusters without any
    /// sample are handled as configured by [`EmptyClusterPolicy`].
    ///
    /// ## Returns
    /// The updated [`KMeansState`].
    ///
    /// ## Example
    /// ```rust
    /// use kmeans_lloyd::*;
    ///
    /// let samples = vec![vec![0.0f64, 0.0, 10.0, 10.0], vec![0.0, 1.0, 10.0, 11.0]];
    /// let mut kmean = KMeans::new(samples, 2).unwrap();
    /// let state = kmean.step();
    /// assert_eq!(state.labels.len(), 4);
    /// assert!(state.labels.iter().all(|&l| l < 2));
    /// ```
    pub fn step(&mut self) -> &KMeansState<T> {
        let mut state = std::mem::replace(&mut self.state, KMeansState::new(Vec::new(), 0, 0));
        Lloyd::step(self, &mut state);
        self.state = state;
        &self.state
    }

    /// Repeat [`KMeans::step`] until the centroids converged, or **max_iter** iterations were calculated.
    ///
    /// Before every iteration, the centroids are remembered and afterwards compared to the new ones using
    /// the configured [`ConvergenceStrategy`]. The default [`ConvergenceStrategy::Exact`] only stops when
    /// an iteration did not change a single centroid coordinate.
    ///
    /// ## Arguments
    /// - **max_iter**: Limit the amount of iterations (**None** means [`DEFAULT_MAX_ITERATIONS`]).
    ///   `Some(0)` does not calculate anything and returns the current state.
    ///
    /// ## Returns
    /// The final [`KMeansState`].
    ///
    /// ## Example
    /// ```rust
    /// use kmeans_lloyd::*;
    /// use rand::SeedableRng;
    ///
    /// let samples = vec![vec![0.0f64, 0.0, 10.0, 10.0], vec![0.0, 1.0, 10.0, 11.0]];
    /// let conf = KMeansConfig::build()
    ///     .random_generator(rand::rngs::StdRng::seed_from_u64(1337))
    ///     .build();
    /// let mut kmean = KMeans::with_config(samples, 2, &conf).unwrap();
    /// let result = kmean.predict(None);
    ///
    /// println!("Centroids: {:?}", result.centroids);
    /// println!("Labels: {:?}", result.labels);
    /// println!("Inertia: {}", result.inertia);
    /// ```
    pub fn predict(&mut self, max_iter: Option<usize>) -> &KMeansState<T> {
        let max_iter = max_iter.unwrap_or(DEFAULT_MAX_ITERATIONS);
        let mut previous_centroids = Vec::with_capacity(self.state.centroids.len());

        for i in 1..=max_iter {
            previous_centroids.clear();
            previous_centroids.extend_from_slice(&self.state.centroids);
            self.step();
            if self.convergence.converged(&previous_centroids, &self.state.centroids) {
                log::debug!("converged after {} iterations - inertia: {:e}", i, self.state.inertia);
                return &self.state;
            }
        }
        log::debug!("stopped after reaching the iteration limit ({}) - inertia: {:e}", max_iter, self.state.inertia);
        &self.state
    }
}
