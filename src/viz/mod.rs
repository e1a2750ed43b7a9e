//! Image generation for texture matrices.
//!
//! The numeric pipeline ends at a matrix of 8-bit codes; this module maps
//! those codes through the fixed palette and encodes the result as an image.

mod generators;

pub use generators::{generate_texture_pixels, save_texture, texture_image, MAX_IMAGE_SIDE};
