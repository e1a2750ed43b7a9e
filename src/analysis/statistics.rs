//! Summary statistics over texture codes.
//!
//! A texture is a matrix of 8-bit codes, so its code distribution is a 256-bin
//! histogram and its Shannon entropy lies in `0..=8` bits: a periodic series
//! concentrates on a few codes, noise spreads across many.

use rayon::prelude::*;

use crate::matrix::Matrix;

/// Textures with fewer cells than this are counted sequentially.
const PARALLEL_THRESHOLD: usize = 64 * 1024;

/// Count occurrences of each code.
pub fn code_histogram(texture: &Matrix<u8>) -> [u32; 256] {
    let codes = texture.as_slice();

    if codes.len() < PARALLEL_THRESHOLD {
        let mut counts = [0u32; 256];
        for &code in codes {
            counts[code as usize] += 1;
        }
        return counts;
    }

    codes
        .par_chunks(PARALLEL_THRESHOLD)
        .map(|chunk| {
            let mut local = [0u32; 256];
            for &code in chunk {
                local[code as usize] += 1;
            }
            local
        })
        .reduce(
            || [0u32; 256],
            |mut acc, local| {
                for (a, l) in acc.iter_mut().zip(local.iter()) {
                    *a += l;
                }
                acc
            },
        )
}

/// Shannon entropy (bits) of a code histogram. Empty histograms give 0.
pub fn code_entropy(histogram: &[u32; 256]) -> f64 {
    let total: u64 = histogram.iter().map(|&c| u64::from(c)).sum();
    if total == 0 {
        return 0.0;
    }

    let total = total as f64;
    let mut entropy = 0.0;
    for &count in histogram {
        if count > 0 {
            let p = f64::from(count) / total;
            entropy -= p * p.log2();
        }
    }

    entropy
}

/// One-line description of a texture.
#[derive(Debug, Clone)]
pub struct TextureSummary {
    /// Number of codes in the texture.
    pub cells: usize,
    pub histogram: [u32; 256],
    /// Entropy of the code distribution in bits (0-8).
    pub entropy: f64,
    /// Most frequent code (lowest code wins ties); `None` for an empty texture.
    pub dominant_code: Option<u8>,
}

impl TextureSummary {
    pub fn from_texture(texture: &Matrix<u8>) -> Self {
        let histogram = code_histogram(texture);
        let entropy = code_entropy(&histogram);

        let dominant_code = histogram
            .iter()
            .enumerate()
            .filter(|(_, count)| **count > 0)
            .max_by(|(ia, a), (ib, b)| a.cmp(b).then(ib.cmp(ia)))
            .map(|(code, _)| code as u8);

        Self {
            cells: texture.as_slice().len(),
            histogram,
            entropy,
            dominant_code,
        }
    }
}
