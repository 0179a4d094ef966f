//! Solution report for display and JSON output

use std::fmt;
use std::time::Duration;

use pow_core::{leading_zero_bits, Solution, SolverConfig};
use serde::{Deserialize, Serialize};

/// Everything needed to submit or audit a solved challenge
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolutionReport {
    /// Challenge prefix
    pub prefix: String,
    /// Required leading zero bits
    pub difficulty: u32,
    /// Winning nonce
    pub attempts: u64,
    /// Hashes computed, including the winning one
    pub hashes: u64,
    /// Winning digest as lowercase hex
    pub digest_hex: String,
    /// Winning digest as 256 binary digits
    pub digest_bits: String,
    /// Leading zero bits actually found
    pub leading_zero_bits: u32,
    /// Wall-clock search time
    pub elapsed_ms: u64,
    /// Hashes per second (0 when the search was too fast to time)
    pub hashrate: f64,
}

impl SolutionReport {
    /// Summarize `solution` for the challenge described by `config`.
    pub fn new(config: &SolverConfig, solution: &Solution, elapsed: Duration) -> Self {
        let hashes = solution.attempts.saturating_add(1);
        let secs = elapsed.as_secs_f64();
        let hashrate = if secs > 0.0 { hashes as f64 / secs } else { 0.0 };

        Self {
            prefix: config.prefix.clone(),
            difficulty: config.difficulty,
            attempts: solution.attempts,
            hashes,
            digest_hex: hex::encode(solution.digest),
            digest_bits: solution.digest_bits.clone(),
            leading_zero_bits: leading_zero_bits(&solution.digest),
            elapsed_ms: u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX),
            hashrate,
        }
    }

    /// Pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for SolutionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Found valid hash!")?;
        writeln!(f, "  Prefix: {:?}", self.prefix)?;
        writeln!(f, "  Difficulty: {} bits", self.difficulty)?;
        writeln!(f, "  Nonce: {}", self.attempts)?;
        writeln!(f, "  Hash: {}", self.digest_hex)?;
        writeln!(f, "  Bits: {}", self.digest_bits)?;
        writeln!(f, "  Leading zero bits: {}", self.leading_zero_bits)?;
        writeln!(f, "  Hashes computed: {}", self.hashes)?;
        writeln!(f, "  Time elapsed: {:.2}s", self.elapsed_ms as f64 / 1000.0)?;
        write!(f, "  Hashrate: {:.2} H/s", self.hashrate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pow_core::Solver;

    fn abc_report(elapsed: Duration) -> SolutionReport {
        let config = SolverConfig::new("abc", 8);
        let solution = Solver::new(config.clone()).unwrap().solve();
        SolutionReport::new(&config, &solution, elapsed)
    }

    #[test]
    fn test_report_fields() {
        let report = abc_report(Duration::from_millis(500));

        assert_eq!(report.prefix, "abc");
        assert_eq!(report.difficulty, 8);
        assert_eq!(report.attempts, 252);
        assert_eq!(report.hashes, 253);
        assert_eq!(
            report.digest_hex,
            "00e6fe2fa1d885b56b771f9f9098ddc018d72efb61c0e10367bb5a8b82289f6a"
        );
        assert_eq!(report.digest_bits.len(), 256);
        assert_eq!(report.leading_zero_bits, 8);
        assert_eq!(report.elapsed_ms, 500);
        assert!((report.hashrate - 506.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_elapsed_hashrate() {
        let report = abc_report(Duration::ZERO);
        assert_eq!(report.hashrate, 0.0);
    }

    #[test]
    fn test_json_output() {
        let report = abc_report(Duration::from_millis(500));
        let json = report.to_json().unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["attempts"], 252);
        assert_eq!(value["prefix"], "abc");
        assert_eq!(value["leading_zero_bits"], 8);

        let back: SolutionReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back, report);
    }

    #[test]
    fn test_display() {
        let text = abc_report(Duration::from_millis(1250)).to_string();

        assert!(text.starts_with("Found valid hash!"));
        assert!(text.contains("  Prefix: \"abc\""));
        assert!(text.contains("  Nonce: 252"));
        assert!(text.contains("  Hash: 00e6fe2f"));
        assert!(text.contains("  Time elapsed: 1.25s"));
    }
}
