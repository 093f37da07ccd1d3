use kmeans_lloyd::*;

fn main() {
    let (sample_cnt, sample_dims, k, max_iter) = (20000, 20, 4, 100);

    // Generate some random data, [feature][sample]
    let samples: Vec<Vec<f64>> = (0..sample_dims)
        .map(|_| (0..sample_cnt).map(|_| rand::random()).collect())
        .collect();

    let mut kmean = KMeans::new(samples, k).expect("valid sample matrix");
    let result = kmean.predict(Some(max_iter));

    println!("Centroids: {:?}", result.centroids);
    println!("Iterations: {}", result.iterations);
    println!("Inertia: {}", result.inertia);
}
