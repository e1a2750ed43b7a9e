//! Phasetex - recurrence textures from one-dimensional time series.
//!
//! A series is turned into an image-like matrix in three pure stages:
//! - Time-delay embedding into overlapping delay vectors
//! - Pairwise Euclidean distance matrix between those vectors
//! - Local-binary-pattern encoding of each interior distance cell into 8 bits
//!
//! The resulting texture can be rendered with a fixed palette via [`viz`].

pub mod analysis;
pub mod config;
pub mod error;
pub mod matrix;
pub mod pipeline;
pub mod series;
pub mod util;
pub mod viz;

pub use analysis::{
    distance_matrix, encode_texture, time_delay_embedding, EmbeddingParams, TextureSummary,
};
pub use config::Config;
pub use error::{Result, TextureError};
pub use matrix::Matrix;
pub use pipeline::{recurrence_texture, RecurrenceTexture};
