//! Pixel generation and image output for texture matrices.

use std::path::Path;

use image::{Rgb, RgbImage};
use rayon::prelude::*;
use tracing::info;

use crate::error::{Result, TextureError};
use crate::matrix::Matrix;
use crate::util::color::code_to_rgb;

/// Map every code to its palette color, row-major.
pub fn generate_texture_pixels(texture: &Matrix<u8>) -> Vec<[u8; 3]> {
    texture
        .as_slice()
        .par_iter()
        .map(|&code| code_to_rgb(code))
        .collect()
}

/// Largest width or height, in pixels, of a rendered texture.
pub const MAX_IMAGE_SIDE: u32 = 16_384;

/// Render `texture` with each cell drawn as a `scale x scale` block.
///
/// A zero scale is treated as 1. An empty texture gives a 0x0 image. Fails
/// with [`TextureError::Config`] when either side would exceed
/// [`MAX_IMAGE_SIDE`].
pub fn texture_image(texture: &Matrix<u8>, scale: u32) -> Result<RgbImage> {
    let scale = scale.max(1);
    let side = |cells: usize| {
        u32::try_from(cells)
            .ok()
            .and_then(|c| c.checked_mul(scale))
            .filter(|&px| px <= MAX_IMAGE_SIDE)
            .ok_or_else(|| {
                TextureError::Config(format!(
                    "scale {scale} too large: {cells} cells exceed the {MAX_IMAGE_SIDE}px image limit"
                ))
            })
    };
    let width = side(texture.cols())?;
    let height = side(texture.rows())?;

    let pixels = generate_texture_pixels(texture);
    let cols = texture.cols();

    Ok(RgbImage::from_fn(width, height, |x, y| {
        let row = (y / scale) as usize;
        let col = (x / scale) as usize;
        Rgb(pixels[row * cols + col])
    }))
}

/// Write `texture` as an image at `path`, creating parent directories.
///
/// The format follows the file extension.
pub fn save_texture(texture: &Matrix<u8>, path: &Path, scale: u32) -> Result<()> {
    if texture.is_empty() {
        return Err(TextureError::EmptyTexture);
    }

    let img = texture_image(texture, scale)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| TextureError::io(parent, e))?;
    }

    img.save(path)?;

    info!(
        path = %path.display(),
        width = img.width(),
        height = img.height(),
        "saved texture image"
    );
    Ok(())
}
