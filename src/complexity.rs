//! Asymptotic cost summaries for each algorithm, plus a simple wall-clock
//! measurement of the three sequence strategies.

use std::fmt::Write;
use std::time::{Duration, Instant};

use crate::config::Settings;
use crate::sequence::{Family, Strategy, Term};

/// Time and space cost of one algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Complexity {
    pub algorithm: &'static str,
    pub time: &'static str,
    pub space: &'static str,
    pub best_for: Option<&'static str>,
}

impl Complexity {
    const fn new(algorithm: &'static str, time: &'static str, space: &'static str) -> Self {
        Self {
            algorithm,
            time,
            space,
            best_for: None,
        }
    }

    const fn best_for(mut self, note: &'static str) -> Self {
        self.best_for = Some(note);
        self
    }
}

pub fn fibonacci_profile() -> [Complexity; 3] {
    [
        Complexity::new("Iterative", "O(n)", "O(1)").best_for("Large n"),
        Complexity::new("Recursive", "O(2^n) (Exponential!)", "O(n) (Call stack)")
            .best_for("Small n, educational purposes"),
        Complexity::new("Memoized", "O(n)", "O(n)").best_for("Multiple queries"),
    ]
}

pub fn lucas_profile() -> [Complexity; 3] {
    [
        Complexity::new("Iterative", "O(n)", "O(1)"),
        Complexity::new("Recursive", "O(2^n)", "O(n)"),
        Complexity::new("Memoized", "O(n)", "O(n)"),
    ]
}

pub fn hanoi_profile() -> Complexity {
    Complexity::new(
        "Tower of Hanoi",
        "O(2^n) (Exponential - must make 2^n-1 moves)",
        "O(n) (Recursive call stack)",
    )
}

/// Rows of the side-by-side comparison of every algorithm.
pub fn comparison_table() -> [Complexity; 6] {
    [
        Complexity::new("Fibonacci Iterative", "O(n)", "O(1)"),
        Complexity::new("Fibonacci Recursive", "O(2^n)", "O(n)"),
        Complexity::new("Fibonacci Memoized", "O(n)", "O(n)"),
        Complexity::new("Lucas Iterative", "O(n)", "O(1)"),
        Complexity::new("Lucas Recursive", "O(2^n)", "O(n)"),
        Complexity::new("Tower of Hanoi", "O(2^n)", "O(n)"),
    ]
}

/// Renders a numbered per-family profile, one indented block per strategy.
pub fn render_profile(title: &str, profile: &[Complexity]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n{} Algorithm Complexities:", title);
    let _ = writeln!(out, "{}", "-".repeat(50));

    for (i, entry) in profile.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let _ = writeln!(out, "{}. {}:", i + 1, entry.algorithm);
        let _ = writeln!(out, "   Time: {}", entry.time);
        let _ = writeln!(out, "   Space: {}", entry.space);
        if let Some(note) = entry.best_for {
            let _ = writeln!(out, "   Best for: {}", note);
        }
    }

    out
}

pub fn render_hanoi_profile() -> String {
    let entry = hanoi_profile();
    let mut out = String::new();
    let _ = writeln!(out, "\nTower of Hanoi Complexities:");
    let _ = writeln!(out, "{}", "-".repeat(50));
    let _ = writeln!(out, "Time: {}", entry.time);
    let _ = writeln!(out, "Space: {}", entry.space);
    let _ = writeln!(out, "\nThis is optimal - cannot be solved in fewer moves!");
    out
}

/// Renders [`comparison_table`] with right-aligned columns of 20, 15 and 15.
pub fn render_comparison() -> String {
    let rule = "-".repeat(60);
    let mut out = String::new();
    let _ = writeln!(out, "\n{}", rule);
    let _ = writeln!(out, "COMPARISON OF COMPLEXITIES");
    let _ = writeln!(out, "{}", rule);
    let _ = writeln!(out, "{:>20}{:>15}{:>15}", "Algorithm", "Time", "Space");
    let _ = writeln!(out, "{}", rule);
    for entry in comparison_table() {
        let _ = writeln!(out, "{:>20}{:>15}{:>15}", entry.algorithm, entry.time, entry.space);
    }
    let _ = writeln!(out, "{}", rule);
    out
}

/// Outcome of running one strategy once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timing {
    Measured {
        strategy: Strategy,
        value: Term,
        elapsed: Duration,
    },
    /// Not run because `n` exceeded the strategy's limit.
    Skipped { strategy: Strategy, limit: i64 },
}

/// Runs each strategy once on `n` and records its wall-clock time.
///
/// A strategy is skipped when `n` is above its [`Settings::strategy_limit`].
pub fn measure(family: Family, n: i64, settings: &Settings) -> Vec<Timing> {
    Strategy::ALL
        .into_iter()
        .map(|strategy| {
            if let Some(limit) = settings.strategy_limit(strategy).filter(|&limit| n > limit) {
                return Timing::Skipped { strategy, limit };
            }
            let start = Instant::now();
            let value = family.compute(strategy, n);
            Timing::Measured {
                strategy,
                value,
                elapsed: start.elapsed(),
            }
        })
        .collect()
}

pub fn render_timings(family: Family, n: i64, timings: &[Timing]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\nMeasured running time for {}({}):", family, n);
    let _ = writeln!(out, "{}", "-".repeat(50));
    for timing in timings {
        match timing {
            Timing::Measured {
                strategy,
                value,
                elapsed,
            } => {
                let _ = writeln!(
                    out,
                    "{:<10} value = {:<20} time = {:?}",
                    strategy.name(),
                    value,
                    elapsed
                );
            }
            Timing::Skipped { strategy, limit } => {
                let _ = writeln!(
                    out,
                    "{:<10} skipped (too large for n > {})",
                    strategy.name(),
                    limit
                );
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profiles() {
        let fib = fibonacci_profile();
        assert_eq!(fib[0].time, "O(n)");
        assert_eq!(fib[2].best_for, Some("Multiple queries"));
        assert!(lucas_profile().iter().all(|entry| entry.best_for.is_none()));
        assert_eq!(comparison_table().len(), 6);
    }

    #[test]
    fn test_render_profile() {
        let text = render_profile("Fibonacci", &fibonacci_profile());
        assert!(text.contains("Fibonacci Algorithm Complexities:"));
        assert!(text.contains("2. Recursive:"));
        assert!(text.contains("   Best for: Large n"));
        assert!(!render_profile("Lucas", &lucas_profile()).contains("Best for"));
    }

    #[test]
    fn test_render_comparison_columns() {
        let text = render_comparison();
        let header = text
            .lines()
            .find(|line| line.trim_start().starts_with("Algorithm"))
            .expect("header line");
        assert_eq!(header.len(), 50);
        assert!(text.contains(&format!("{:>20}{:>15}{:>15}", "Tower of Hanoi", "O(2^n)", "O(n)")));
    }

    #[test]
    fn test_measure_skips_large_recursion() {
        let timings = measure(Family::Fibonacci, 35, &Settings::default());
        assert_eq!(timings.len(), 3);
        assert!(matches!(
            timings[1],
            Timing::Skipped {
                strategy: Strategy::Recursive,
                limit: 30
            }
        ));
        for timing in [timings[0], timings[2]] {
            match timing {
                Timing::Measured { value, .. } => assert_eq!(value, 9_227_465),
                Timing::Skipped { .. } => panic!("only recursion should be skipped"),
            }
        }
    }

    #[test]
    fn test_measure_runs_all_within_limit() {
        let timings = measure(Family::Lucas, 10, &Settings::default());
        assert!(timings
            .iter()
            .all(|t| matches!(t, Timing::Measured { value: 123, .. })));
        let text = render_timings(Family::Lucas, 10, &timings);
        assert!(text.contains("Lucas(10)"));
    }

    #[test]
    fn test_measure_skips_deep_memoization() {
        // Only the iterative strategy runs, so a huge position never recurses.
        let settings = Settings::default().with_memoized_limit(1_000);
        let timings = measure(Family::Fibonacci, 1_000_000, &settings);
        assert!(matches!(timings[0], Timing::Measured { .. }));
        assert!(matches!(
            timings[2],
            Timing::Skipped {
                strategy: Strategy::Memoized,
                limit: 1_000
            }
        ));
        let text = render_timings(Family::Fibonacci, 1_000_000, &timings);
        assert!(text.contains("Memoized   skipped (too large for n > 1000)"));
    }
}
