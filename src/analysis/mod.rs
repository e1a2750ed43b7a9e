//! Numeric stages of the recurrence texture pipeline.
//!
//! This module provides:
//! - Time-delay embedding of a scalar series
//! - Pairwise Euclidean distance matrix between delay vectors
//! - Local-binary-pattern encoding of the distance matrix
//! - Code histogram and entropy of the resulting texture

pub mod distance;
pub mod embedding;
pub mod statistics;
pub mod texture;

// Re-export commonly used items
pub use distance::{distance_matrix, distance_matrix_from_rows, euclidean_distance};
pub use embedding::{time_delay_embedding, EmbeddingParams, DEFAULT_DELAY, DEFAULT_DIMENSION};
pub use statistics::{code_entropy, code_histogram, TextureSummary};
pub use texture::{encode_texture, local_pattern, NEIGHBOR_OFFSETS};
