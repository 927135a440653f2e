//! Passprobe - password resistance estimator
//!
//! Thin CLI driver over the estimation engine: prints the charset profile and
//! brute-force estimate, then streams dictionary scan progress to the console.

use std::env;
use std::path::Path;
use std::process;
use std::time::Duration;

use passprobe::{
    PassProbeError, ProgressEvent, Result, ScanStatus, SessionOptions,
};

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();

    if args.is_empty() || args[0] == "--help" || args[0] == "-h" {
        print_help();
        return Ok(());
    }

    if let Err(e) = run(args).await {
        eprintln!("{}", e.user_message());
        process::exit(1);
    }

    Ok(())
}

async fn run(args: Vec<String>) -> Result<()> {
    let (password, wordlists, options, json) = parse_args(args)?;

    let mut session = passprobe::start_session(&password, wordlists, options)?;

    if json {
        // drop the event stream, just wait for the report
        let report = session.result().await?;
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let profile = *session.profile();
    let estimate = session.estimate().clone();

    println!("🔐 Passprobe v{}", passprobe::VERSION);
    println!("═══════════════════════════════════");
    println!();
    println!("Charset profile:");
    println!("   length: {}", profile.length);
    println!(
        "   classes: lower={} upper={} digit={} symbol={}",
        profile.has_lower, profile.has_upper, profile.has_digit, profile.has_symbol
    );
    println!("   alphabet size: {}", profile.alphabet_size);
    println!();
    println!("Brute-force estimate:");
    println!("   keyspace: {}", estimate.keyspace);
    println!("   guess rate: {:.0e} guesses/s", estimate.guess_rate);
    println!("   exhaustive search: {}", estimate.human_duration);
    println!();

    if let Some(mut events) = session.progress() {
        while let Some(event) = events.recv().await {
            match event {
                ProgressEvent::ScanStarted { source } => {
                    println!("--- Checking {} ---", basename(&source));
                }
                ProgressEvent::ScanProgress {
                    source,
                    lines_scanned,
                } => {
                    println!(
                        "{} line {} ... still scanning",
                        basename(&source),
                        lines_scanned
                    );
                }
                ProgressEvent::ScanCompleted { source, result } => match result.status {
                    ScanStatus::Matched => {
                        println!(
                            "*** Match found in {}, line {} ({:.2}s)",
                            basename(&source),
                            result.line_number.unwrap_or(0),
                            result.elapsed.as_secs_f64()
                        );
                    }
                    ScanStatus::Exhausted => {
                        println!(
                            "Completed {} with no match after {} lines ({:.2}s)",
                            basename(&source),
                            result.lines_scanned,
                            result.elapsed.as_secs_f64()
                        );
                    }
                    ScanStatus::Cancelled => {
                        println!(
                            "Cancelled {} after {} lines",
                            basename(&source),
                            result.lines_scanned
                        );
                    }
                    ScanStatus::Failed => {
                        println!(
                            "⚠️  {} failed: {}",
                            basename(&source),
                            result.error.unwrap_or_else(|| "unknown error".to_string())
                        );
                    }
                },
                ProgressEvent::SessionCompleted => {}
            }
        }
    }

    let report = session.result().await?;

    println!();
    println!("📈 Summary:");
    if report.results.is_empty() {
        println!("   dictionary scanning skipped (brute-force only)");
    } else if report.matched_any {
        println!(
            "   ❌ Weak password: found in {}/{} wordlists",
            report.matched_count(),
            report.results.len()
        );
    } else {
        println!(
            "   ✅ Not found in any of {} wordlists",
            report.results.len()
        );
    }
    if report.cancelled {
        println!("   ⚠️  Session cancelled before all scans finished");
    }
    println!("   ⏱️  Brute-force resistance: {}", report.estimate.human_duration);

    Ok(())
}

type ParsedArgs = (String, Vec<String>, SessionOptions, bool);

fn parse_args(args: Vec<String>) -> Result<ParsedArgs> {
    let mut options = SessionOptions::default();
    let mut json = false;
    let mut positionals = Vec::new();

    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--case-sensitive" => options.case_sensitive = true,
            "--scan-all" => options.stop_on_first_match = false,
            "--brute-force-only" => options.brute_force_only = true,
            "--json" => json = true,
            "--rate" => {
                let value = iter
                    .next()
                    .ok_or_else(|| PassProbeError::cli("--rate requires a value"))?;
                options.guess_rate = value
                    .parse()
                    .map_err(|_| PassProbeError::cli(format!("invalid rate '{}'", value)))?;
            }
            "--timeout" => {
                let value = iter
                    .next()
                    .ok_or_else(|| PassProbeError::cli("--timeout requires a value"))?;
                let secs: f64 = value
                    .parse()
                    .map_err(|_| PassProbeError::cli(format!("invalid timeout '{}'", value)))?;
                options.timeout = Some(Duration::from_secs_f64(secs));
            }
            other if other.starts_with("--") => {
                return Err(PassProbeError::cli(format!("unknown flag '{}'", other)));
            }
            _ => positionals.push(arg),
        }
    }

    let mut positionals = positionals.into_iter();
    let password = positionals
        .next()
        .ok_or_else(|| PassProbeError::cli("a password argument is required"))?;
    let wordlists: Vec<String> = positionals.collect();

    Ok((password, wordlists, options, json))
}

fn basename(path: &str) -> String {
    Path::new(path)
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string())
}

/// Print help information
fn print_help() {
    println!("🔐 Passprobe - password resistance estimator");
    println!("═══════════════════════════════════════════");
    println!();
    println!("USAGE:");
    println!("    passprobe <PASSWORD> [WORDLIST...] [FLAGS]");
    println!();
    println!("EXAMPLES:");
    println!("    passprobe hunter2 rockyou.txt common.txt   # dictionary + brute-force");
    println!("    passprobe 'C0mpl3x!' --brute-force-only    # keyspace estimate only");
    println!("    passprobe hunter2 rockyou.txt --scan-all   # scan every list fully");
    println!();
    println!("FLAGS:");
    println!("    --case-sensitive      Exact comparison (default: case-insensitive)");
    println!("    --scan-all            Do not stop at the first matching wordlist");
    println!("    --brute-force-only    Skip dictionary scanning entirely");
    println!("    --rate <N>            Brute-force guesses per second (default: 1e9)");
    println!("    --timeout <SECS>      Cancel scanning after this many seconds");
    println!("    --json                Emit the final report as JSON");
    println!();
    println!("Wordlists are plain text, one candidate per line. Missing files are");
    println!("reported per-source and never abort the other scans.");
}
