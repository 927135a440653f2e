//! Estimation session: classifier + estimator up front, then concurrent
//! wordlist scans with bounded parallelism, cancellation and progress events

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use futures::future::join_all;
use parking_lot::Mutex;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::sync::Semaphore;

use crate::error::{PassProbeError, Result};
use crate::matcher;
use crate::strength;
use crate::types::{
    BruteForceEstimate, CharsetProfile, EstimationReport, MatchResult, ProgressEvent,
    ScanStatus, SessionOptions,
};
use crate::wordlist::WordlistHandle;

/// One evaluation of one password against a set of wordlists
pub struct EstimationSession;

impl EstimationSession {
    /// Start a session; must be called within a tokio runtime
    ///
    /// Validates input and computes the charset profile and brute-force
    /// estimate synchronously, then spawns the dictionary scans. An empty
    /// wordlist set is only valid with `brute_force_only`.
    pub fn start(
        password: impl Into<String>,
        wordlists: Vec<String>,
        options: SessionOptions,
    ) -> Result<SessionHandle> {
        if wordlists.is_empty() && !options.brute_force_only {
            return Err(PassProbeError::invalid_input(
                "no wordlists supplied; set brute_force_only to skip dictionary scanning",
            ));
        }

        let password = password.into();
        let profile = strength::classify(&password);
        let estimate = strength::estimate(&profile, options.guess_rate)?;

        let (events, progress) = mpsc::unbounded_channel();
        let stop = Arc::new(AtomicBool::new(false));
        let cancelled = Arc::new(AtomicBool::new(false));

        let scan_paths = if options.brute_force_only {
            Vec::new()
        } else {
            wordlists
        };

        tracing::debug!(
            wordlists = scan_paths.len(),
            alphabet_size = profile.alphabet_size,
            length = profile.length,
            "Starting estimation session"
        );

        let driver = tokio::spawn(run_session(
            password,
            scan_paths,
            options,
            profile,
            estimate.clone(),
            Arc::clone(&stop),
            Arc::clone(&cancelled),
            events,
        ));

        Ok(SessionHandle {
            profile,
            estimate,
            stop,
            cancelled,
            progress: Some(progress),
            driver,
        })
    }

    /// Run a session to completion and return the final report
    pub async fn run(
        password: impl Into<String>,
        wordlists: Vec<String>,
        options: SessionOptions,
    ) -> Result<EstimationReport> {
        Self::start(password, wordlists, options)?.result().await
    }
}

/// Handle to a running session
pub struct SessionHandle {
    profile: CharsetProfile,
    estimate: BruteForceEstimate,
    stop: Arc<AtomicBool>,
    cancelled: Arc<AtomicBool>,
    progress: Option<UnboundedReceiver<ProgressEvent>>,
    driver: tokio::task::JoinHandle<EstimationReport>,
}

impl SessionHandle {
    /// Charset profile, available immediately
    pub fn profile(&self) -> &CharsetProfile {
        &self.profile
    }

    /// Brute-force estimate, available immediately
    pub fn estimate(&self) -> &BruteForceEstimate {
        &self.estimate
    }

    /// Request cooperative cancellation; idempotent, callable at any time
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
        self.stop.store(true, Ordering::Relaxed);
    }

    /// Take the progress event stream; finite, ends at session completion
    ///
    /// Returns `None` on the second call. Dropping the receiver never affects
    /// the session.
    pub fn progress(&mut self) -> Option<UnboundedReceiver<ProgressEvent>> {
        self.progress.take()
    }

    /// Wait for the final report
    pub async fn result(self) -> Result<EstimationReport> {
        self.driver
            .await
            .map_err(|e| PassProbeError::internal(format!("session task failed: {}", e)))
    }
}

#[allow(clippy::too_many_arguments)]
async fn run_session(
    password: String,
    wordlists: Vec<String>,
    options: SessionOptions,
    profile: CharsetProfile,
    estimate: BruteForceEstimate,
    stop: Arc<AtomicBool>,
    cancelled: Arc<AtomicBool>,
    events: UnboundedSender<ProgressEvent>,
) -> EstimationReport {
    let started_at = Utc::now();

    // One slot per wordlist, written exactly once by its owning task; the
    // report keeps caller order no matter which scan finishes first.
    let slots: Arc<Mutex<Vec<Option<MatchResult>>>> =
        Arc::new(Mutex::new(vec![None; wordlists.len()]));
    let semaphore = Arc::new(Semaphore::new(options.concurrent_scans.max(1)));
    let password = Arc::new(password);

    let handles: Vec<_> = wordlists
        .iter()
        .enumerate()
        .map(|(idx, path)| {
            let path = path.clone();
            let password = Arc::clone(&password);
            let stop = Arc::clone(&stop);
            let slots = Arc::clone(&slots);
            let semaphore = Arc::clone(&semaphore);
            let events = events.clone();
            let case_sensitive = options.case_sensitive;
            let stop_on_first_match = options.stop_on_first_match;

            tokio::spawn(async move {
                let permit = semaphore.acquire_owned().await;
                let result = match permit {
                    Err(_) => failed_result(&path, "scan pool closed"),
                    Ok(_permit) => {
                        scan_one(&path, &password, case_sensitive, &stop, &events).await
                    }
                };

                if result.matched() && stop_on_first_match {
                    tracing::debug!(source = %path, "First match found, stopping remaining scans");
                    stop.store(true, Ordering::Relaxed);
                }

                slots.lock()[idx] = Some(result.clone());
                let _ = events.send(ProgressEvent::ScanCompleted {
                    source: path,
                    result,
                });
            })
        })
        .collect();

    let scans = join_all(handles);
    tokio::pin!(scans);

    match options.timeout {
        Some(deadline) => {
            tokio::select! {
                _ = &mut scans => {}
                _ = tokio::time::sleep(deadline) => {
                    tracing::warn!(
                        timeout_secs = deadline.as_secs_f64(),
                        "Session deadline elapsed, cancelling remaining scans"
                    );
                    cancelled.store(true, Ordering::Relaxed);
                    stop.store(true, Ordering::Relaxed);
                    // scans observe the flag between line reads and exit promptly
                    let _ = (&mut scans).await;
                }
            }
        }
        None => {
            let _ = scans.await;
        }
    }

    let results: Vec<MatchResult> = {
        let slots = slots.lock();
        wordlists
            .iter()
            .enumerate()
            .map(|(idx, path)| {
                slots[idx]
                    .clone()
                    .unwrap_or_else(|| failed_result(path, "scan task did not complete"))
            })
            .collect()
    };

    let matched_any = results.iter().any(|r| r.matched());
    let was_cancelled = cancelled.load(Ordering::Relaxed);

    tracing::info!(
        wordlists = results.len(),
        matched = results.iter().filter(|r| r.matched()).count(),
        cancelled = was_cancelled,
        "Session completed"
    );

    let _ = events.send(ProgressEvent::SessionCompleted);

    EstimationReport {
        profile,
        estimate,
        results,
        matched_any,
        cancelled: was_cancelled,
        started_at,
        finished_at: Utc::now(),
    }
}

/// Run one wordlist scan end to end, capturing every failure into the result
async fn scan_one(
    path: &str,
    password: &str,
    case_sensitive: bool,
    stop: &AtomicBool,
    events: &UnboundedSender<ProgressEvent>,
) -> MatchResult {
    if stop.load(Ordering::Relaxed) {
        return MatchResult {
            source: path.to_string(),
            status: ScanStatus::Cancelled,
            line_number: None,
            lines_scanned: 0,
            decode_errors: 0,
            elapsed: Duration::ZERO,
            error: None,
        };
    }

    let _ = events.send(ProgressEvent::ScanStarted {
        source: path.to_string(),
    });

    match WordlistHandle::open(path).await {
        Err(e) => {
            tracing::warn!(source = %path, error = %e, "Wordlist unavailable");
            failed_result(path, &e.to_string())
        }
        Ok(mut handle) => {
            let progress_events = events.clone();
            let progress_source = path.to_string();
            matcher::scan(&mut handle, password, case_sensitive, stop, |lines_scanned| {
                let _ = progress_events.send(ProgressEvent::ScanProgress {
                    source: progress_source.clone(),
                    lines_scanned,
                });
            })
            .await
        }
    }
}

fn failed_result(path: &str, message: &str) -> MatchResult {
    MatchResult {
        source: path.to_string(),
        status: ScanStatus::Failed,
        line_number: None,
        lines_scanned: 0,
        decode_errors: 0,
        elapsed: Duration::ZERO,
        error: Some(message.to_string()),
    }
}
