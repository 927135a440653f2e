//! Brute-force time and keyspace estimator

use crate::error::{PassProbeError, Result};
use crate::types::{BruteForceEstimate, CharsetProfile, CrackTime, Keyspace};

const MINUTE_SECS: f64 = 60.0;
const HOUR_SECS: f64 = 3_600.0;
const DAY_SECS: f64 = 86_400.0;
/// Julian year
const YEAR_SECS: f64 = 31_557_600.0;
/// Roughly 5000 years of written records
const RECORDED_HISTORY_SECS: f64 = 5_000.0 * YEAR_SECS;
/// Roughly 13.8 billion years
const UNIVERSE_AGE_SECS: f64 = 13.8e9 * YEAR_SECS;

/// Estimate exhaustive-search effort for a classified password
///
/// The keyspace is `alphabet_size ^ length`, kept in log space (with an exact
/// `u128` value when it fits) so nothing overflows for long passwords over the
/// full printable-ASCII alphabet. Fails with `InvalidInput` for a guess rate
/// that is zero, negative, or not finite.
pub fn estimate(profile: &CharsetProfile, guess_rate: f64) -> Result<BruteForceEstimate> {
    if !guess_rate.is_finite() || guess_rate <= 0.0 {
        return Err(PassProbeError::invalid_input(format!(
            "guess rate must be a positive finite number, got {}",
            guess_rate
        )));
    }

    let keyspace = if profile.length == 0 {
        Keyspace::Empty
    } else {
        Keyspace::pow(profile.alphabet_size, profile.length)
    };

    let crack_time = match keyspace.log2() {
        None => CrackTime::Instant,
        Some(log2_keyspace) => {
            let log2_seconds = log2_keyspace - guess_rate.log2();
            // exp2 stays finite well past any bucket we can name
            let seconds = if log2_seconds < 1_000.0 {
                Some(log2_seconds.exp2())
            } else {
                None
            };
            CrackTime::Finite {
                log2_seconds,
                seconds,
            }
        }
    };

    let human_duration = describe_duration(&crack_time);

    Ok(BruteForceEstimate {
        keyspace,
        guess_rate,
        crack_time,
        human_duration,
    })
}

/// Bucket a crack time into a human-readable duration
///
/// Thresholds are compared in log space, never by formatting huge floats.
pub fn describe_duration(crack_time: &CrackTime) -> String {
    let log2_seconds = match crack_time.log2_seconds() {
        None => return "instant".to_string(),
        Some(l) => l,
    };

    if log2_seconds < 0.0 {
        return "instant".to_string();
    }
    if log2_seconds < MINUTE_SECS.log2() {
        return format!("about {:.0} seconds", log2_seconds.exp2());
    }
    if log2_seconds < HOUR_SECS.log2() {
        return format!("about {:.0} minutes", log2_seconds.exp2() / MINUTE_SECS);
    }
    if log2_seconds < DAY_SECS.log2() {
        return format!("about {:.0} hours", log2_seconds.exp2() / HOUR_SECS);
    }
    if log2_seconds < YEAR_SECS.log2() {
        return format!("about {:.0} days", log2_seconds.exp2() / DAY_SECS);
    }
    if log2_seconds < RECORDED_HISTORY_SECS.log2() {
        return format!("about {:.0} years", log2_seconds.exp2() / YEAR_SECS);
    }
    if log2_seconds < UNIVERSE_AGE_SECS.log2() {
        return "longer than recorded history".to_string();
    }
    "longer than the age of the universe".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strength::classify;

    fn profile(alphabet_size: u32, length: u32) -> CharsetProfile {
        CharsetProfile {
            has_lower: alphabet_size >= 26,
            has_upper: false,
            has_digit: false,
            has_symbol: false,
            alphabet_size,
            length,
        }
    }

    #[test]
    fn test_rejects_bad_guess_rate() {
        let p = classify("abc");
        assert!(estimate(&p, 0.0).is_err());
        assert!(estimate(&p, -1.0).is_err());
        assert!(estimate(&p, f64::NAN).is_err());
        assert!(estimate(&p, f64::INFINITY).is_err());
    }

    #[test]
    fn test_empty_password_is_instant() {
        let est = estimate(&classify(""), 1e9).unwrap();
        assert!(est.keyspace.is_empty());
        assert!(est.crack_time.is_instant());
        assert_eq!(est.human_duration, "instant");
    }

    #[test]
    fn test_all_non_ascii_is_instant() {
        // no class detected: alphabet 0, keyspace defined as 0
        let est = estimate(&classify("ÿÿÿ"), 1e9).unwrap();
        assert!(est.keyspace.is_empty());
        assert!(est.crack_time.is_instant());
    }

    #[test]
    fn test_seconds_equals_keyspace_over_rate() {
        let rate = 1e6;
        let est = estimate(&profile(26, 8), rate).unwrap();
        let exact = match est.keyspace {
            Keyspace::Finite { exact: Some(n), .. } => n as f64,
            _ => panic!("expected exact keyspace"),
        };
        match est.crack_time {
            CrackTime::Finite {
                seconds: Some(s), ..
            } => {
                let expected = exact / rate;
                assert!((s - expected).abs() / expected < 1e-9);
            }
            _ => panic!("expected finite seconds"),
        }
    }

    #[test]
    fn test_monotonic_in_length() {
        let mut last = 0.0;
        for len in 1..=64 {
            let est = estimate(&profile(26, len), 1e9).unwrap();
            let l2 = est.keyspace.log2().unwrap();
            assert!(l2 > last);
            last = l2;
        }
    }

    #[test]
    fn test_monotonic_in_alphabet() {
        let small = estimate(&profile(26, 10), 1e9).unwrap();
        let large = estimate(&profile(94, 10), 1e9).unwrap();
        assert!(large.keyspace.log2().unwrap() > small.keyspace.log2().unwrap());
    }

    #[test]
    fn test_short_lowercase_is_instant() {
        // 26^4 / 1e9 is far below a second
        let est = estimate(&profile(26, 4), 1e9).unwrap();
        assert_eq!(est.human_duration, "instant");
    }

    #[test]
    fn test_duration_buckets() {
        let bucket = |secs: f64| {
            describe_duration(&CrackTime::Finite {
                log2_seconds: secs.log2(),
                seconds: Some(secs),
            })
        };
        assert_eq!(bucket(30.0), "about 30 seconds");
        assert_eq!(bucket(300.0), "about 5 minutes");
        assert_eq!(bucket(7_200.0), "about 2 hours");
        assert_eq!(bucket(259_200.0), "about 3 days");
        assert_eq!(bucket(63_115_200.0), "about 2 years");
        assert_eq!(bucket(10_000.0 * 31_557_600.0), "longer than recorded history");
    }

    #[test]
    fn test_astronomical_keyspace_does_not_overflow() {
        // full printable alphabet, length 64: way past u128 and every bucket
        let est = estimate(&profile(94, 64), 1e9).unwrap();
        assert_eq!(est.human_duration, "longer than the age of the universe");
        match est.crack_time {
            CrackTime::Finite { log2_seconds, .. } => assert!(log2_seconds.is_finite()),
            _ => panic!("expected finite crack time"),
        }
    }

    #[test]
    fn test_lowered_rate_increases_time() {
        let fast = estimate(&profile(26, 12), 1e9).unwrap();
        let slow = estimate(&profile(26, 12), 1e3).unwrap();
        assert!(
            slow.crack_time.log2_seconds().unwrap() > fast.crack_time.log2_seconds().unwrap()
        );
    }
}
