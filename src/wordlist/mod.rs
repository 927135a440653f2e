//! Wordlist sources: lazy, line-by-line streaming over candidate files
//!
//! A wordlist is plain text, one candidate per line, UTF-8 with tolerant
//! per-line decoding. Files are never loaded whole; a handle streams lines so
//! arbitrarily large lists stay cheap. Re-reading a list means re-opening it.

use std::path::{Path, PathBuf};

use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::error::{PassProbeError, Result};

/// One line read from a wordlist
#[derive(Debug, Clone)]
pub struct LineRecord {
    /// 1-indexed line number
    pub number: u64,
    /// Trimmed candidate text, `None` when the line was not valid UTF-8
    pub text: Option<String>,
}

/// An open, named wordlist owned by exactly one scan for its lifetime
pub struct WordlistHandle {
    path: PathBuf,
    name: String,
    reader: BufReader<File>,
    line_number: u64,
    buf: Vec<u8>,
}

impl WordlistHandle {
    /// Open a wordlist file, failing fast when the path is unavailable
    pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = File::open(&path).await.map_err(|e| {
            PassProbeError::source_unavailable(path.to_string_lossy(), e.to_string())
        })?;

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.to_string_lossy().to_string());

        tracing::debug!(path = %path.display(), "Opened wordlist");

        Ok(Self {
            path,
            name,
            reader: BufReader::new(file),
            line_number: 0,
            buf: Vec::new(),
        })
    }

    /// Wordlist path as opened
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File basename, used in progress display
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Read the next line, `Ok(None)` at end of file
    ///
    /// Undecodable lines still advance the line counter but carry no text, so
    /// callers can count them as soft errors and continue.
    pub async fn next_line(&mut self) -> Result<Option<LineRecord>> {
        self.buf.clear();
        let n = self
            .reader
            .read_until(b'\n', &mut self.buf)
            .await
            .map_err(|e| {
                PassProbeError::io(e.to_string(), Some(self.path.to_string_lossy().to_string()))
            })?;

        if n == 0 {
            return Ok(None);
        }

        self.line_number += 1;
        let text = match std::str::from_utf8(&self.buf) {
            Ok(s) => Some(s.trim().to_string()),
            Err(_) => None,
        };

        Ok(Some(LineRecord {
            number: self.line_number,
            text,
        }))
    }
}
