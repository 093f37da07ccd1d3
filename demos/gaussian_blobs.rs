use kmeans_lloyd::*;
use rand::prelude::*;

/// Normal distribution sampler (Marsaglia polar method).
/// Each accepted draw produces two independent values; the second one is kept for the next call.
struct GaussianSampler {
    pending: Option<f64>
}
impl GaussianSampler {
    fn new() -> Self { Self { pending: None } }

    fn sample<R: Rng + ?Sized>(&mut self, rnd: &mut R, mean: f64, stdev: f64) -> f64 {
        if let Some(v) = self.pending.take() {
            return stdev * v + mean;
        }
        loop {
            let v1 = 2.0 * rnd.gen::<f64>() - 1.0;
            let v2 = 2.0 * rnd.gen::<f64>() - 1.0;
            let s = v1 * v1 + v2 * v2;
            if s == 0.0 || s >= 1.0 {
                continue;
            }
            let factor = (-2.0 * s.ln() / s).sqrt();
            self.pending = Some(v2 * factor);
            return stdev * v1 * factor + mean;
        }
    }
}

/// 3 gaussian blobs with 150 samples each, centered somewhere in [5, 15) x [5, 15).
fn generate_blobs(rnd: &mut StdRng) -> Vec<Vec<f64>> {
    let (n_points, n_samples) = (3, 150);
    let mut gaussian = GaussianSampler::new();
    let mut samples = vec![Vec::with_capacity(n_points * n_samples), Vec::with_capacity(n_points * n_samples)];

    for _ in 0..n_points {
        let focal = (rnd.gen_range(5.0..15.0), rnd.gen_range(5.0..15.0));
        for _ in 0..n_samples {
            samples[0].push(gaussian.sample(rnd, focal.0, 1.0));
            samples[1].push(gaussian.sample(rnd, focal.1, 1.0));
        }
    }
    samples
}

fn main() {
    env_logger::init();
    let seed = std::env::args().nth(1).and_then(|s| s.parse().ok()).unwrap_or(1337u64);
    let mut rnd = StdRng::seed_from_u64(seed);
    let samples = generate_blobs(&mut rnd);

    let conf = KMeansConfig::build().random_generator(rnd).build();
    let mut kmean = KMeans::with_config(samples, DEFAULT_CLUSTER_COUNT, &conf).expect("valid sample matrix");

    let convergence = ConvergenceStrategy::<f64>::Exact;
    let mut prev_inertia = f64::INFINITY;
    for _ in 0..DEFAULT_MAX_ITERATIONS {
        let prev_centroids = kmean.state().centroids.clone();
        let state = kmean.step();
        println!("Iteration {} - Inertia: {:.2} -> {:.2} | Cluster sizes: {:?}",
            state.iterations, prev_inertia, state.inertia, state.centroid_frequency);
        prev_inertia = state.inertia;
        if convergence.converged(&prev_centroids, &state.centroids) {
            break;
        }
    }

    for (idx, centroid) in kmean.state().iter_centroids().enumerate() {
        println!("cluster {}: centroid ({:.3}, {:.3}), {} samples",
            idx + 1, centroid[0], centroid[1], kmean.state().centroid_frequency[idx]);
    }
}
