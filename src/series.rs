//! Input series: demo generators and file loaders.

use std::f64::consts::TAU;
use std::fs::File;
use std::path::Path;

use memmap2::Mmap;
use tracing::debug;

use crate::error::{Result, TextureError};

/// How a series file is interpreted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SeriesFormat {
    /// Text with numbers separated by whitespace or commas.
    #[default]
    Text,
    /// Raw binary; each byte is one sample.
    Bytes,
}

/// `len` samples of `cos(2π k / period)`.
pub fn cosine_wave(len: usize, period: f64) -> Vec<f64> {
    (0..len).map(|k| (TAU * k as f64 / period).cos()).collect()
}

/// Parse a textual series.
///
/// Tokens are separated by whitespace or commas. Lines whose first
/// non-blank character is `#` are comments.
pub fn parse_series(text: &str) -> Result<Vec<f64>> {
    let mut series = Vec::new();

    for (index, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.starts_with('#') {
            continue;
        }

        for token in line
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|t| !t.is_empty())
        {
            let value = token.parse::<f64>().map_err(|_| TextureError::Parse {
                line: index + 1,
                token: token.to_string(),
            })?;
            series.push(value);
        }
    }

    if series.is_empty() {
        return Err(TextureError::EmptySeries);
    }

    Ok(series)
}

/// Load a series from `path`.
///
/// Binary files are memory-mapped rather than read into memory.
pub fn load_series(path: &Path, format: SeriesFormat) -> Result<Vec<f64>> {
    let series = match format {
        SeriesFormat::Text => {
            let text = std::fs::read_to_string(path).map_err(|e| TextureError::io(path, e))?;
            parse_series(&text)?
        }
        SeriesFormat::Bytes => {
            let file = File::open(path).map_err(|e| TextureError::io(path, e))?;
            let len = file
                .metadata()
                .map_err(|e| TextureError::io(path, e))?
                .len();
            if len == 0 {
                return Err(TextureError::EmptySeries);
            }

            // SAFETY: the map is read-only and dropped before this call returns.
            let mmap = unsafe { Mmap::map(&file) }.map_err(|e| TextureError::io(path, e))?;
            mmap.iter().map(|&b| f64::from(b)).collect()
        }
    };

    debug!(path = %path.display(), samples = series.len(), "loaded series");
    Ok(series)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_cosine_wave() {
        let wave = cosine_wave(40, 20.0);
        assert_eq!(wave.len(), 40);
        assert!((wave[0] - 1.0).abs() < 1e-12);
        assert!((wave[10] + 1.0).abs() < 1e-12);
        assert!((wave[20] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_parse_mixed_separators() {
        let series = parse_series("# header\n1, 2.5\n-3e1\t4\n\n5,").unwrap();
        assert_eq!(series, vec![1.0, 2.5, -30.0, 4.0, 5.0]);
    }

    #[test]
    fn test_parse_reports_line() {
        let err = parse_series("1 2\n3 abc\n").unwrap_err();
        match err {
            TextureError::Parse { line, token } => {
                assert_eq!(line, 2);
                assert_eq!(token, "abc");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_parse_empty() {
        assert!(matches!(
            parse_series("# nothing\n\n"),
            Err(TextureError::EmptySeries)
        ));
    }

    #[test]
    fn test_load_text_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "0 1 2 3").unwrap();
        let series = load_series(file.path(), SeriesFormat::Text).unwrap();
        assert_eq!(series, vec![0.0, 1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_load_bytes_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[0u8, 7, 255]).unwrap();
        file.flush().unwrap();
        let series = load_series(file.path(), SeriesFormat::Bytes).unwrap();
        assert_eq!(series, vec![0.0, 7.0, 255.0]);
    }

    #[test]
    fn test_load_empty_bytes_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        assert!(matches!(
            load_series(file.path(), SeriesFormat::Bytes),
            Err(TextureError::EmptySeries)
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_series(Path::new("/nonexistent/series.txt"), SeriesFormat::Text).unwrap_err();
        assert!(matches!(err, TextureError::Io { .. }));
    }
}
