//! Time-delay embedding.
//!
//! Reconstructs a pseudo phase space from a scalar series: row `i` of the
//! embedding holds `x[i], x[i + t], ..., x[i + (m - 1) t]` for dimension `m`
//! and delay `t`. The series must be longer than the embedding window span
//! `(m - 1) t`, otherwise there is no complete row.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TextureError};
use crate::matrix::Matrix;

/// Default embedding dimension (m).
pub const DEFAULT_DIMENSION: usize = 2;
/// Default embedding delay (t).
pub const DEFAULT_DELAY: usize = 1;

/// Embedding dimension and delay, always in that order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbeddingParams {
    /// Number of samples per delay vector (m).
    pub dimension: usize,
    /// Stride between consecutive samples in a vector (t).
    pub delay: usize,
}

impl Default for EmbeddingParams {
    fn default() -> Self {
        Self {
            dimension: DEFAULT_DIMENSION,
            delay: DEFAULT_DELAY,
        }
    }
}

impl EmbeddingParams {
    pub const fn new(dimension: usize, delay: usize) -> Self {
        Self { dimension, delay }
    }

    /// Number of delay vectors a series of `len` samples yields, or `None`
    /// when the parameters are zero or the window does not fit.
    #[inline]
    pub fn row_count(&self, len: usize) -> Option<usize> {
        if self.dimension == 0 || self.delay == 0 {
            return None;
        }
        let span = (self.dimension - 1).checked_mul(self.delay)?;
        len.checked_sub(span).filter(|&rows| rows > 0)
    }
}

/// Build the delay-embedding matrix of `series`.
///
/// The result has `n - (m - 1) t` rows of width `m`. Fails with
/// [`TextureError::InvalidEmbeddingParameters`] if that count is not positive
/// (including an empty series or a zero dimension/delay).
pub fn time_delay_embedding(series: &[f64], params: EmbeddingParams) -> Result<Matrix<f64>> {
    let EmbeddingParams { dimension, delay } = params;

    let rows = params
        .row_count(series.len())
        .ok_or(TextureError::InvalidEmbeddingParameters {
            len: series.len(),
            dimension,
            delay,
        })?;

    let mut data = Vec::with_capacity(rows * dimension);
    for i in 0..rows {
        data.extend(series[i..].iter().step_by(delay).take(dimension).copied());
    }

    Matrix::from_vec(rows, dimension, data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedding_unit_delay() {
        let series: Vec<f64> = (0..10).map(f64::from).collect();
        let v = time_delay_embedding(&series, EmbeddingParams::new(2, 1)).unwrap();

        assert_eq!(v.rows(), 9);
        assert_eq!(v.cols(), 2);
        assert_eq!(v.row(0), &[0.0, 1.0]);
        assert_eq!(v.row(8), &[8.0, 9.0]);
    }

    #[test]
    fn test_embedding_strided() {
        let series: Vec<f64> = (0..10).map(f64::from).collect();
        let v = time_delay_embedding(&series, EmbeddingParams::new(3, 2)).unwrap();

        // 10 - (3 - 1) * 2 = 6 rows
        assert_eq!(v.rows(), 6);
        assert_eq!(v.row(0), &[0.0, 2.0, 4.0]);
        assert_eq!(v.row(5), &[5.0, 7.0, 9.0]);
    }

    #[test]
    fn test_dimension_one_is_identity() {
        let series = [3.0, -1.0, 2.5];
        let v = time_delay_embedding(&series, EmbeddingParams::new(1, 7)).unwrap();
        assert_eq!(v.rows(), 3);
        assert_eq!(v.as_slice(), &series);
    }

    #[test]
    fn test_window_exactly_fits() {
        // n = (m - 1) t + 1 leaves exactly one row
        let series = [1.0, 2.0, 3.0, 4.0, 5.0];
        let v = time_delay_embedding(&series, EmbeddingParams::new(3, 2)).unwrap();
        assert_eq!(v.rows(), 1);
        assert_eq!(v.row(0), &[1.0, 3.0, 5.0]);
    }

    #[test]
    fn test_window_too_long() {
        let series = [1.0, 2.0, 3.0, 4.0];
        let err = time_delay_embedding(&series, EmbeddingParams::new(3, 2)).unwrap_err();
        assert!(matches!(
            err,
            TextureError::InvalidEmbeddingParameters {
                len: 4,
                dimension: 3,
                delay: 2
            }
        ));
    }

    #[test]
    fn test_zero_parameters_rejected() {
        let series = [1.0, 2.0, 3.0];
        assert!(time_delay_embedding(&series, EmbeddingParams::new(0, 1)).is_err());
        assert!(time_delay_embedding(&series, EmbeddingParams::new(2, 0)).is_err());
        assert!(time_delay_embedding(&[], EmbeddingParams::default()).is_err());
    }

    #[test]
    fn test_row_count() {
        let p = EmbeddingParams::new(4, 3);
        assert_eq!(p.row_count(10), Some(1));
        assert_eq!(p.row_count(9), None);
        assert_eq!(p.row_count(20), Some(11));
        assert_eq!(EmbeddingParams::new(usize::MAX, 2).row_count(10), None);
    }
}
