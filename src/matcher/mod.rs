//! Dictionary matcher: streams one wordlist looking for the target password
//!
//! A scan moves Pending → Running → one of Matched, Exhausted, Cancelled or
//! Failed, and a terminal state is final; retry policy belongs to the caller.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

use crate::types::{MatchResult, ScanStatus};
use crate::wordlist::WordlistHandle;

/// Lines between best-effort progress callbacks
pub const PROGRESS_INTERVAL: u64 = 1000;

/// Scan a wordlist for an exact (or case-folded) match against the target
///
/// Stops reading the moment a match is found. The `stop` flag is checked
/// between line reads, so a cancellation is observed within one line-read
/// latency and reported as `Cancelled`, never conflated with a genuine
/// exhaustive no-match. Per-line errors land on the result; no error escapes
/// the scan.
pub async fn scan<F>(
    handle: &mut WordlistHandle,
    target: &str,
    case_sensitive: bool,
    stop: &AtomicBool,
    mut on_progress: F,
) -> MatchResult
where
    F: FnMut(u64),
{
    let start = Instant::now();
    let source = handle.path().to_string_lossy().to_string();
    let folded_target = if case_sensitive {
        None
    } else {
        Some(target.to_lowercase())
    };

    let mut lines_scanned: u64 = 0;
    let mut decode_errors: u64 = 0;

    loop {
        if stop.load(Ordering::Relaxed) {
            tracing::debug!(source = %source, lines = lines_scanned, "Scan cancelled");
            return MatchResult {
                source,
                status: ScanStatus::Cancelled,
                line_number: None,
                lines_scanned,
                decode_errors,
                elapsed: start.elapsed(),
                error: None,
            };
        }

        let record = match handle.next_line().await {
            Ok(Some(record)) => record,
            Ok(None) => {
                tracing::debug!(source = %source, lines = lines_scanned, "Scan exhausted");
                return MatchResult {
                    source,
                    status: ScanStatus::Exhausted,
                    line_number: None,
                    lines_scanned,
                    decode_errors,
                    elapsed: start.elapsed(),
                    error: None,
                };
            }
            Err(e) => {
                tracing::warn!(source = %source, error = %e, "Scan failed");
                return MatchResult {
                    source,
                    status: ScanStatus::Failed,
                    line_number: None,
                    lines_scanned,
                    decode_errors,
                    elapsed: start.elapsed(),
                    error: Some(e.to_string()),
                };
            }
        };

        lines_scanned = record.number;

        match record.text {
            None => decode_errors += 1,
            Some(candidate) => {
                let is_match = match &folded_target {
                    Some(folded) => candidate.to_lowercase() == *folded,
                    None => candidate == target,
                };
                if is_match {
                    tracing::debug!(source = %source, line = record.number, "Match found");
                    return MatchResult {
                        source,
                        status: ScanStatus::Matched,
                        line_number: Some(record.number),
                        lines_scanned,
                        decode_errors,
                        elapsed: start.elapsed(),
                        error: None,
                    };
                }
            }
        }

        if lines_scanned % PROGRESS_INTERVAL == 0 {
            on_progress(lines_scanned);
        }
    }
}
