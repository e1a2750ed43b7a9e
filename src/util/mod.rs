//! Utility functions shared across the crate.
//!
//! This module provides:
//! - The fixed texture palette

pub mod color;

pub use color::code_to_rgb;
