use std::io::ErrorKind;
use std::path::Path;

use crate::error::RankerError;

/// Read a source document and return its paragraphs in order.
///
/// A paragraph is a run of non-blank lines; blank or whitespace-only lines
/// separate paragraphs and are never returned.
pub fn read_paragraphs<P: AsRef<Path>>(path: P) -> Result<Vec<String>, RankerError> {
    let path = path.as_ref();

    let text = std::fs::read_to_string(path).map_err(|source| {
        if source.kind() == ErrorKind::NotFound {
            RankerError::SourceNotFound {
                path: path.to_path_buf(),
            }
        } else {
            RankerError::Parse {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    let paragraphs = parse_paragraphs(&text);
    tracing::debug!("Read {} paragraphs from {}", paragraphs.len(), path.display());
    Ok(paragraphs)
}

/// Split document text into trimmed, non-empty paragraphs
pub fn parse_paragraphs(text: &str) -> Vec<String> {
    let mut paragraphs = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            if !current.is_empty() {
                paragraphs.push(current.join("\n"));
                current.clear();
            }
        } else {
            current.push(line);
        }
    }

    if !current.is_empty() {
        paragraphs.push(current.join("\n"));
    }

    paragraphs
}
