//! Intensity statistics over a single tile
//!
//! Reductions accept any two-dimensional float array so they work on owned
//! tiles and on views alike. Sums are accumulated in `f64`.

use ndarray::{ArrayBase, Data, Ix2};
use num_traits::Float;

/// Smallest and largest value in the array, `None` when it is empty
pub fn intensity_range<A, S>(tile: &ArrayBase<S, Ix2>) -> Option<(A, A)>
where
    A: Float,
    S: Data<Elem = A>,
{
    let mut values = tile.iter().copied();
    let first = values.next()?;
    Some(values.fold((first, first), |(lo, hi), value| {
        (lo.min(value), hi.max(value))
    }))
}

/// Difference between the largest and smallest value, zero when empty
pub fn contrast<A, S>(tile: &ArrayBase<S, Ix2>) -> A
where
    A: Float,
    S: Data<Elem = A>,
{
    intensity_range(tile).map_or_else(A::zero, |(lo, hi)| hi - lo)
}

/// Arithmetic mean of all values, `None` when empty
pub fn mean<A, S>(tile: &ArrayBase<S, Ix2>) -> Option<f64>
where
    A: Float,
    S: Data<Elem = A>,
{
    if tile.is_empty() {
        return None;
    }
    let sum: f64 = tile.iter().filter_map(|value| value.to_f64()).sum();
    Some(sum / tile.len() as f64)
}

/// Population standard deviation (divides by N), zero when empty
pub fn population_std<A, S>(tile: &ArrayBase<S, Ix2>) -> f64
where
    A: Float,
    S: Data<Elem = A>,
{
    let Some(average) = mean(tile) else {
        return 0.0;
    };

    // Two-pass form avoids the cancellation of E[x^2] - E[x]^2
    let squared_deviations: f64 = tile
        .iter()
        .filter_map(|value| value.to_f64())
        .map(|value| (value - average).powi(2))
        .sum();
    (squared_deviations / tile.len() as f64).sqrt()
}
