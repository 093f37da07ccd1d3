//! # kmeans-lloyd - API documentation
//!
//! kmeans-lloyd is a small rust library for the calculation of k-means-clustering, using Lloyd's algorithm.
//!
//! ## Design target
//! The calculation can be observed (and driven) one iteration at a time: an instance of [`KMeans`] owns its
//! samples and the current clustering state, and every call to [`KMeans::step`] advances the calculation by
//! exactly one iteration. [`KMeans::predict`] repeats these steps until the centroids stopped moving.
//! The API-surface is kept plain: samples are given as a plain feature-major matrix (`Vec<Vec<T>>`),
//! instead of any high-level arithmetics / matrix crate such as nalgebra or ndarray.
//!
//! ## Algorithm
//! - Initialization: every centroid coordinate is drawn uniformly from the value range its feature spans
//! - Assignment: every sample goes to its nearest centroid (squared euclidean distance, lowest index wins ties)
//! - Update: every centroid moves into the mean of its samples
//!
//! Clusters without samples are handled as configured by [`EmptyClusterPolicy`], and convergence is
//! detected using the configured [`ConvergenceStrategy`].
//!
//! ## Supported primitive types
//! - [`f32`]
//! - [`f64`]
//!
//! ## Example
//! ```rust
//! use kmeans_lloyd::*;
//!
//! fn main() {
//!     // 2 features, 4 samples: (0,0), (0,1), (10,10), (10,11)
//!     let samples = vec![
//!         vec![0.0f64, 0.0, 10.0, 10.0],
//!         vec![0.0, 1.0, 10.0, 11.0],
//!     ];
//!
//!     let mut kmean = KMeans::new(samples, 2).unwrap();
//!     let result = kmean.predict(None);
//!
//!     println!("Centroids: {:?}", result.centroids);
//!     println!("Labels: {:?}", result.labels);
//!     println!("Inertia: {}", result.inertia);
//! }
//! ```
//!
//! ## Example (stepping through the calculation)
//! ```rust
//! use kmeans_lloyd::*;
//! use rand::SeedableRng;
//!
//! fn main() {
//!     let samples = vec![vec![1.0f32, 1.5, 8.0, 9.0, 9.5]];
//!
//!     let conf = KMeansConfig::build()
//!         .random_generator(rand::rngs::StdRng::seed_from_u64(1337))
//!         .empty_cluster_policy(EmptyClusterPolicy::Retain)
//!         .build();
//!     let mut kmean = KMeans::with_config(samples, 2, &conf).unwrap();
//!
//!     for _ in 0..3 {
//!         let state = kmean.step();
//!         println!("Iteration {} - Inertia: {:.2}", state.iterations, state.inertia);
//!     }
//! }
//! ```
//!
//! ## Short API-Overview / Description
//! Entry-point of the library is the [`KMeans`] struct. It is generic over the underlying primitive type
//! used for the calculations, and takes over the sample data into its ownership on construction (see
//! [`KMeans::new`] and [`KMeans::with_config`]). Construction validates the sample matrix and fails with
//! a [`KMeansError`] if it can not be clustered.
//!
//! The calculation state (centroids, labels, inertia) is stored in a [`KMeansState`], which is handed out
//! as read-only reference by [`KMeans::step`] and [`KMeans::predict`].
//!
//! Log output (construction, iterations, convergence) is emitted through the [`log`] facade.

#[macro_use] mod helpers;
mod memory;
mod error;
mod api;
mod variants;
mod inits;
mod empty_cluster;
mod convergence;

pub use api::{KMeansState, KMeansConfig, KMeansConfigBuilder, KMeans, DEFAULT_CLUSTER_COUNT, DEFAULT_MAX_ITERATIONS};
pub use convergence::ConvergenceStrategy;
pub use empty_cluster::EmptyClusterPolicy;
pub use error::{KMeansError, Result};
pub use memory::Primitive;
