//! End-to-end composition: series -> embedding -> distances -> texture.

use tracing::debug;

use crate::analysis::{distance_matrix, encode_texture, time_delay_embedding, EmbeddingParams};
use crate::error::Result;
use crate::matrix::Matrix;

/// All intermediate matrices of one pipeline run.
#[derive(Debug, Clone)]
pub struct RecurrenceTexture {
    /// Delay vectors, one per row.
    pub embedding: Matrix<f64>,
    /// Pairwise distances between delay vectors.
    pub distances: Matrix<f64>,
    /// 8-bit neighbourhood codes, two smaller than `distances` on each side.
    pub texture: Matrix<u8>,
}

impl RecurrenceTexture {
    /// Run every stage on `series`.
    pub fn compute(series: &[f64], params: EmbeddingParams) -> Result<Self> {
        let embedding = time_delay_embedding(series, params)?;
        debug!(
            rows = embedding.rows(),
            dimension = params.dimension,
            delay = params.delay,
            "embedded series"
        );

        let distances = distance_matrix(&embedding);
        debug!(size = distances.rows(), "computed distance matrix");

        let texture = encode_texture(&distances)?;
        debug!(size = texture.rows(), "encoded texture");

        Ok(Self {
            embedding,
            distances,
            texture,
        })
    }
}

/// Compute only the texture matrix of `series`.
pub fn recurrence_texture(series: &[f64], params: EmbeddingParams) -> Result<Matrix<u8>> {
    RecurrenceTexture::compute(series, params).map(|run| run.texture)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TextureError;

    #[test]
    fn test_ramp_shapes() {
        let series: Vec<f64> = (0..10).map(f64::from).collect();
        let run = RecurrenceTexture::compute(&series, EmbeddingParams::new(2, 1)).unwrap();

        assert_eq!(run.embedding.rows(), 9);
        assert_eq!(run.distances.rows(), 9);
        assert!((run.distances[(0, 1)] - 2f64.sqrt()).abs() < 1e-12);
        assert_eq!((run.texture.rows(), run.texture.cols()), (7, 7));
    }

    #[test]
    fn test_constant_series_saturates() {
        let series = vec![5.0; 12];
        let texture = recurrence_texture(&series, EmbeddingParams::new(3, 2)).unwrap();
        assert_eq!(texture.rows(), 12 - 4 - 2);
        assert!(texture.as_slice().iter().all(|&c| c == 255));
    }

    #[test]
    fn test_short_series_gives_empty_texture() {
        let texture = recurrence_texture(&[1.0, 2.0, 3.0], EmbeddingParams::new(2, 1)).unwrap();
        assert!(texture.is_empty());
    }

    #[test]
    fn test_invalid_parameters_propagate() {
        let err = recurrence_texture(&[1.0, 2.0, 3.0], EmbeddingParams::new(3, 2)).unwrap_err();
        assert!(matches!(err, TextureError::InvalidEmbeddingParameters { .. }));
    }
}
