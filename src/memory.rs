use num::{Float, NumCast, Zero};
use rand::distributions::uniform::SampleUniform;
use std::{
    fmt::{Debug, Display, LowerExp},
    iter::Sum,
    ops::{Add, AddAssign, Sub, SubAssign},
};

/// Primitive floating point types the clustering can be calculated with.
pub trait Primitive: Add + AddAssign + Sum + Sub + SubAssign + Zero + Float + NumCast + SampleUniform
                + PartialOrd + Copy + Default + Display + Debug + LowerExp + 'static {}
impl Primitive for f32 {}
impl Primitive for f64 {}


/// Re-copy a `[feature][sample]` matrix into a flat, sample-major buffer
/// `[<sample0>,<sample1>,<sample2>,...]`, where each sample is `features.len()` values long.
/// Row lengths have to be validated by the caller.
pub(crate) fn transpose_features<T: Primitive>(features: &[Vec<T>], sample_cnt: usize) -> Vec<T> {
    let sample_dims = features.len();
    let mut samples = vec![T::zero(); sample_cnt * sample_dims];
    for (d, row) in features.iter().enumerate() {
        for (s, v) in row.iter().cloned().enumerate() {
            samples[s * sample_dims + d] = v;
        }
    }
    samples
}
