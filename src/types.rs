//! Core types and structures for passprobe

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Character classes detected in a password
///
/// `alphabet_size` is the sum of the sizes of the flagged classes
/// (lower 26, upper 26, digit 10, symbol 32), never the count of distinct
/// characters actually used. Characters outside all four classes (e.g.
/// non-ASCII) count toward `length` but enable no class flag, so a password
/// made entirely of such characters has `alphabet_size == 0`. This is a
/// documented approximation, not an attempt at a "correct" cracking model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharsetProfile {
    pub has_lower: bool,
    pub has_upper: bool,
    pub has_digit: bool,
    pub has_symbol: bool,
    pub alphabet_size: u32,
    pub length: u32,
}

impl CharsetProfile {
    /// Number of character classes present
    pub fn class_count(&self) -> u32 {
        [self.has_lower, self.has_upper, self.has_digit, self.has_symbol]
            .iter()
            .filter(|&&f| f)
            .count() as u32
    }
}

/// Total brute-force keyspace, `alphabet_size ^ length`
///
/// Held as a base-2 logarithm so it never overflows at realistic bounds
/// (alphabet 94, length well past 64). The exact integer value is carried
/// alongside whenever it fits in a `u128`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Keyspace {
    Empty,
    Finite { log2: f64, exact: Option<u128> },
}

impl Keyspace {
    /// Compute `base ^ exp`. `base == 0` yields an empty keyspace.
    pub fn pow(base: u32, exp: u32) -> Self {
        if base == 0 {
            return Keyspace::Empty;
        }
        let log2 = exp as f64 * (base as f64).log2();
        let exact = (base as u128).checked_pow(exp);
        Keyspace::Finite { log2, exact }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Keyspace::Empty)
    }

    /// Base-2 logarithm of the keyspace, `None` when empty
    pub fn log2(&self) -> Option<f64> {
        match self {
            Keyspace::Empty => None,
            Keyspace::Finite { log2, .. } => Some(*log2),
        }
    }

    /// Approximate number of decimal digits
    pub fn approx_digits(&self) -> u32 {
        match self.log2() {
            None => 1,
            Some(l) => (l * std::f64::consts::LOG10_2).floor() as u32 + 1,
        }
    }
}

impl std::fmt::Display for Keyspace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Keyspace::Empty => write!(f, "0"),
            Keyspace::Finite {
                exact: Some(n), ..
            } => write!(f, "{}", n),
            Keyspace::Finite { log2, .. } => {
                write!(f, "≈10^{}", (log2 * std::f64::consts::LOG10_2).round() as u64)
            }
        }
    }
}

/// Estimated exhaustive-search time
///
/// Kept in log space for the same overflow reason as [`Keyspace`]; the plain
/// seconds value is materialized only when `f64` can represent it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CrackTime {
    Instant,
    Finite {
        log2_seconds: f64,
        seconds: Option<f64>,
    },
}

impl CrackTime {
    pub fn is_instant(&self) -> bool {
        matches!(self, CrackTime::Instant)
    }

    /// Base-2 logarithm of the estimated seconds, `None` when instant
    pub fn log2_seconds(&self) -> Option<f64> {
        match self {
            CrackTime::Instant => None,
            CrackTime::Finite { log2_seconds, .. } => Some(*log2_seconds),
        }
    }
}

/// Brute-force estimate for one password profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BruteForceEstimate {
    pub keyspace: Keyspace,
    pub guess_rate: f64,
    pub crack_time: CrackTime,
    pub human_duration: String,
}

/// Terminal state of a single wordlist scan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScanStatus {
    Matched,
    Exhausted,
    Cancelled,
    Failed,
}

impl std::fmt::Display for ScanStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScanStatus::Matched => write!(f, "matched"),
            ScanStatus::Exhausted => write!(f, "exhausted"),
            ScanStatus::Cancelled => write!(f, "cancelled"),
            ScanStatus::Failed => write!(f, "failed"),
        }
    }
}

/// Outcome of scanning one wordlist, produced exactly once per scan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    /// Wordlist path as supplied by the caller
    pub source: String,
    pub status: ScanStatus,
    /// 1-indexed line of the match, set only when `status == Matched`
    pub line_number: Option<u64>,
    pub lines_scanned: u64,
    /// Lines skipped because they were not valid UTF-8
    pub decode_errors: u64,
    pub elapsed: Duration,
    /// Failure detail, set only when `status == Failed`
    pub error: Option<String>,
}

impl MatchResult {
    pub fn matched(&self) -> bool {
        self.status == ScanStatus::Matched
    }
}

/// Configuration for an estimation session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionOptions {
    /// Compare wordlist entries case-sensitively
    pub case_sensitive: bool,
    /// Cancel remaining scans as soon as any scan matches
    pub stop_on_first_match: bool,
    /// Brute-force guesses per second for the estimator
    pub guess_rate: f64,
    /// Overall session deadline; elapsing it is an automatic cancel
    pub timeout: Option<Duration>,
    /// Maximum wordlist scans running at once
    pub concurrent_scans: usize,
    /// Skip dictionary scanning entirely (makes an empty wordlist set valid)
    pub brute_force_only: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            case_sensitive: false,
            stop_on_first_match: true,
            guess_rate: 1e9,
            timeout: None,
            concurrent_scans: 4,
            brute_force_only: false,
        }
    }
}

/// Best-effort progress notification emitted while a session runs
#[derive(Debug, Clone)]
pub enum ProgressEvent {
    ScanStarted {
        source: String,
    },
    ScanProgress {
        source: String,
        lines_scanned: u64,
    },
    ScanCompleted {
        source: String,
        result: MatchResult,
    },
    SessionCompleted,
}

/// Final report for one estimation session
///
/// `results` follows the caller-supplied wordlist order regardless of scan
/// completion order. `cancelled` reflects caller cancellation or a timeout,
/// not stop-on-first-match aborts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimationReport {
    pub profile: CharsetProfile,
    pub estimate: BruteForceEstimate,
    pub results: Vec<MatchResult>,
    pub matched_any: bool,
    pub cancelled: bool,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl EstimationReport {
    /// Number of wordlists that contained the password
    pub fn matched_count(&self) -> usize {
        self.results.iter().filter(|r| r.matched()).count()
    }

    /// Session wall time
    pub fn elapsed(&self) -> chrono::Duration {
        self.finished_at - self.started_at
    }
}
