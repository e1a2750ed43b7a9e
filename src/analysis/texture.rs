//! Local-binary-pattern encoding of a distance matrix.
//!
//! Every interior cell `(i, j)` of an `n x n` distance matrix is compared with
//! its 8 neighbours. Neighbour `k` (in [`NEIGHBOR_OFFSETS`] order) contributes
//! `2^k` when its value is greater than or equal to the centre. The border
//! row and column have no full neighbourhood and are dropped, so the texture
//! is `(n - 2) x (n - 2)`.

use rayon::prelude::*;

use crate::error::{Result, TextureError};
use crate::matrix::Matrix;

/// Neighbour offsets `(di, dj)`; index `k` carries bit weight `2^k`.
///
/// Order: top-left, top, top-right, left, right, bottom-left, bottom,
/// bottom-right. Changing it changes every code.
pub const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Encode the 8-neighbourhood of interior cell `(i, j)`.
///
/// Ties count as set bits (`>=`), so a flat neighbourhood encodes to 255.
///
/// # Panics
/// Panics if `(i, j)` is on the border or outside `d`.
#[inline]
pub fn local_pattern(d: &Matrix<f64>, i: usize, j: usize) -> u8 {
    let center = d[(i, j)];
    let mut code = 0u8;

    for (k, &(di, dj)) in NEIGHBOR_OFFSETS.iter().enumerate() {
        let ni = i.wrapping_add_signed(di);
        let nj = j.wrapping_add_signed(dj);
        if d[(ni, nj)] >= center {
            code |= 1 << k;
        }
    }

    code
}

/// Encode the whole texture matrix.
///
/// `T[i - 1, j - 1] = local_pattern(d, i, j)` for `i, j` in `1..n - 1`.
/// A matrix smaller than 3x3 gives an empty texture; a non-square one is
/// rejected with [`TextureError::NotSquare`].
pub fn encode_texture(d: &Matrix<f64>) -> Result<Matrix<u8>> {
    if !d.is_square() {
        return Err(TextureError::NotSquare {
            rows: d.rows(),
            cols: d.cols(),
        });
    }

    let n = d.rows();
    if n < 3 {
        return Ok(Matrix::empty());
    }

    let size = n - 2;
    let mut codes = vec![0u8; size * size];
    codes
        .par_chunks_mut(size)
        .enumerate()
        .for_each(|(row, out)| {
            let i = row + 1;
            for (col, code) in out.iter_mut().enumerate() {
                *code = local_pattern(d, i, col + 1);
            }
        });

    Ok(Matrix::from_raw(size, size, codes))
}
