//! Passprobe - educational password resistance estimator
//!
//! Estimates how resistant a password is to brute-force enumeration over its
//! derived character set and to dictionary lookup against local wordlists.
//! No password is ever cracked against a live target: the outputs are
//! time/complexity estimates and match/no-match results.

pub mod error;
pub mod matcher;
pub mod session;
pub mod strength;
pub mod types;
pub mod wordlist;

// Re-export commonly used types
pub use error::{PassProbeError, Result};
pub use types::{
    BruteForceEstimate, CharsetProfile, CrackTime, EstimationReport, Keyspace, MatchResult,
    ProgressEvent, ScanStatus, SessionOptions,
};

// Re-export main functionality
pub use session::{EstimationSession, SessionHandle};
pub use strength::{classify, estimate};
pub use wordlist::WordlistHandle;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Start an estimation session; must be called within a tokio runtime
pub fn start_session(
    password: impl Into<String>,
    wordlists: Vec<String>,
    options: SessionOptions,
) -> Result<SessionHandle> {
    EstimationSession::start(password, wordlists, options)
}
