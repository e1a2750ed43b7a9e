//! Color mapping for texture codes.
//!
//! A single fixed palette is used for every image: a viridis-inspired ramp
//! from deep purple (code 0, every neighbour closer than the centre) to
//! yellow (code 255, every neighbour at least as far).

use std::sync::OnceLock;

#[inline]
fn to_channel(x: f32) -> u8 {
    (x.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Viridis-inspired ramp for `t` in 0-1.
fn viridis(t: f32) -> [u8; 3] {
    let t = t.clamp(0.0, 1.0);

    let (r, g, b) = if t < 0.25 {
        // Deep purple to blue
        let s = t / 0.25;
        (0.27 - s * 0.04, 0.0 + s * 0.3, 0.33 + s * 0.22)
    } else if t < 0.5 {
        // Blue to teal
        let s = (t - 0.25) / 0.25;
        (0.23 - s * 0.11, 0.3 + s * 0.27, 0.55)
    } else if t < 0.75 {
        // Teal to green
        let s = (t - 0.5) / 0.25;
        (0.12 + s * 0.25, 0.57 + s * 0.18, 0.55 - s * 0.2)
    } else {
        // Green to yellow
        let s = (t - 0.75) / 0.25;
        (0.37 + s * 0.62, 0.75 + s * 0.16, 0.35 - s * 0.21)
    };

    [to_channel(r), to_channel(g), to_channel(b)]
}

fn palette() -> &'static [[u8; 3]; 256] {
    static PALETTE: OnceLock<[[u8; 3]; 256]> = OnceLock::new();
    PALETTE.get_or_init(|| {
        let mut lut = [[0u8; 3]; 256];
        for (code, entry) in lut.iter_mut().enumerate() {
            *entry = viridis(code as f32 / 255.0);
        }
        lut
    })
}

/// Palette color for a texture code.
#[inline]
pub fn code_to_rgb(code: u8) -> [u8; 3] {
    palette()[code as usize]
}
