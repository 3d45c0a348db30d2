//! Line-oriented dataset loading.
//!
//! One numeric literal per line. Surrounding whitespace is ignored, blank
//! lines are skipped, and `true`/`false` (any case) read as `1`/`0`.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use pd_core::{Error, Result};

/// Parse one value per line from `reader`.
pub fn parse_values<R: BufRead>(reader: R) -> Result<Vec<f64>> {
    let mut values = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let token = line.trim();
        if token.is_empty() {
            continue;
        }
        values.push(parse_token(token).ok_or_else(|| Error::Parse {
            line: idx + 1,
            content: token.to_string(),
        })?);
    }
    Ok(values)
}

fn parse_token(token: &str) -> Option<f64> {
    if token.eq_ignore_ascii_case("true") {
        return Some(1.0);
    }
    if token.eq_ignore_ascii_case("false") {
        return Some(0.0);
    }
    token.parse::<f64>().ok()
}

/// Read a dataset file from disk.
pub fn load_values<P: AsRef<Path>>(path: P) -> Result<Vec<f64>> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let values = parse_values(BufReader::new(file))?;
    tracing::debug!(path = %path.display(), n = values.len(), "dataset loaded");
    Ok(values)
}
