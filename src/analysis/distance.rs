//! Pairwise Euclidean distance matrix between embedded state vectors.
//!
//! Optimizations:
//! - 4-lane SIMD accumulation with a scalar tail
//! - Parallel computation of output rows, each row written to a disjoint chunk

use rayon::prelude::*;
use wide::f64x4;

use crate::error::{Result, TextureError};
use crate::matrix::Matrix;

/// Euclidean distance between two vectors of the same length.
///
/// Vectors of different lengths are rejected with
/// [`TextureError::InvalidShape`] (`row` is 1, the second argument).
pub fn euclidean_distance(a: &[f64], b: &[f64]) -> Result<f64> {
    if a.len() != b.len() {
        return Err(TextureError::InvalidShape {
            row: 1,
            expected: a.len(),
            actual: b.len(),
        });
    }
    Ok(euclidean_kernel(a, b))
}

/// Unchecked kernel; callers guarantee `a.len() == b.len()`.
///
/// Lanes are accumulated in a fixed order, so swapping the arguments gives a
/// bit-identical result and `euclidean_kernel(a, a)` is exactly zero.
#[inline]
fn euclidean_kernel(a: &[f64], b: &[f64]) -> f64 {
    let n = a.len();

    let mut acc = f64x4::ZERO;
    let mut i = 0;
    while i + 4 <= n {
        let va = f64x4::new([a[i], a[i + 1], a[i + 2], a[i + 3]]);
        let vb = f64x4::new([b[i], b[i + 1], b[i + 2], b[i + 3]]);
        let diff = va - vb;
        acc += diff * diff;
        i += 4;
    }

    let mut sum = acc.reduce_add();
    for k in i..n {
        let d = a[k] - b[k];
        sum += d * d;
    }

    sum.sqrt()
}

/// Compute the `r x r` distance matrix for the rows of `embedding`.
///
/// `D[i, j]` is the Euclidean distance between rows `i` and `j`. The result is
/// symmetric with a zero diagonal.
pub fn distance_matrix(embedding: &Matrix<f64>) -> Matrix<f64> {
    let r = embedding.rows();
    if r == 0 {
        return Matrix::empty();
    }

    let mut data = vec![0.0f64; r * r];
    data.par_chunks_mut(r).enumerate().for_each(|(i, out)| {
        let vi = embedding.row(i);
        for (j, cell) in out.iter_mut().enumerate() {
            *cell = euclidean_kernel(vi, embedding.row(j));
        }
    });

    Matrix::from_raw(r, r, data)
}

/// Distance matrix from nested rows, rejecting rows of unequal length.
pub fn distance_matrix_from_rows(rows: &[Vec<f64>]) -> Result<Matrix<f64>> {
    let embedding = Matrix::from_rows(rows)?;
    Ok(distance_matrix(&embedding))
}
