//! Report file loading and byte decoding.
//!
//! `powercfg /batteryreport` writes HTML as UTF-8 but the plain-text variant
//! is frequently UTF-16LE with a BOM. Decoding happens here so the parser
//! only ever sees `&str`.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors from loading a report file. Parsing itself never fails; only the
/// initial read can.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("report file is empty: {0}")]
    Empty(PathBuf),
}

/// Read a report file and decode it to a string.
pub fn load_report<P: AsRef<Path>>(path: P) -> Result<String, ReportError> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let content = decode_bytes(&bytes);
    if content.trim().is_empty() {
        return Err(ReportError::Empty(path.to_path_buf()));
    }
    Ok(content)
}

/// Decode report bytes, honoring a UTF-8, UTF-16LE, or UTF-16BE BOM.
/// Invalid sequences are replaced rather than rejected.
pub fn decode_bytes(bytes: &[u8]) -> String {
    match bytes {
        [0xFF, 0xFE, rest @ ..] => decode_utf16(rest, u16::from_le_bytes),
        [0xFE, 0xFF, rest @ ..] => decode_utf16(rest, u16::from_be_bytes),
        [0xEF, 0xBB, 0xBF, rest @ ..] => String::from_utf8_lossy(rest).into_owned(),
        _ => String::from_utf8_lossy(bytes).into_owned(),
    }
}

fn decode_utf16(bytes: &[u8], combine: fn([u8; 2]) -> u16) -> String {
    let units: Vec<u16> = bytes
        .chunks_exact(2)
        .map(|pair| combine([pair[0], pair[1]]))
        .collect();
    String::from_utf16_lossy(&units)
}
