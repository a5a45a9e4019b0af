//! Tunable limits for the interactive shell.
//!
//! The engines run to completion for any argument, so every bound on input
//! size lives here and is enforced by the shell before an engine is called.

use crate::sequence::Strategy;

/// Largest position the naive recursive strategy is run for.
pub const DEFAULT_RECURSION_LIMIT: i64 = 30;

/// Positions above this ask for confirmation before comparing strategies.
pub const DEFAULT_CONFIRM_THRESHOLD: i64 = 40;

/// Largest position the memoized strategy is run for. Its recursion is `n`
/// frames deep, so this bounds stack use.
pub const DEFAULT_MEMOIZED_LIMIT: i64 = 10_000;

/// Positions above this ask for confirmation before listing a whole sequence.
pub const DEFAULT_SEQUENCE_LISTING_LIMIT: i64 = 100;

/// Disk counts above this ask for confirmation before listing every move.
pub const DEFAULT_HANOI_LISTING_LIMIT: u32 = 20;

/// Hard ceiling on sequence listings, confirmed or not.
pub const MAX_LISTED_TERMS: i64 = 1_000_000;

/// Hard ceiling on Hanoi listings, confirmed or not (2^25 - 1 moves).
pub const MAX_LISTED_DISKS: u32 = 25;

/// Shell behaviour settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Largest `n` for which the recursive strategy is evaluated.
    pub recursion_limit: i64,
    /// Largest `n` for which the memoized strategy is evaluated.
    pub memoized_limit: i64,
    /// `n` above which listing a sequence asks for confirmation.
    pub sequence_listing_limit: i64,
    /// `n` above which the strategy comparison asks "Continue anyway?".
    pub confirm_threshold: i64,
    /// Disk count above which a full move listing asks for confirmation.
    pub hanoi_listing_limit: u32,
    /// Emit ANSI clear-screen codes before each menu.
    pub clear_screen: bool,
    /// Wait for Enter after each result.
    pub pause: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            recursion_limit: DEFAULT_RECURSION_LIMIT,
            memoized_limit: DEFAULT_MEMOIZED_LIMIT,
            sequence_listing_limit: DEFAULT_SEQUENCE_LISTING_LIMIT,
            confirm_threshold: DEFAULT_CONFIRM_THRESHOLD,
            hanoi_listing_limit: DEFAULT_HANOI_LISTING_LIMIT,
            clear_screen: true,
            pause: true,
        }
    }
}

impl Settings {
    pub fn with_recursion_limit(mut self, limit: i64) -> Self {
        self.recursion_limit = limit;
        self
    }

    pub fn with_memoized_limit(mut self, limit: i64) -> Self {
        self.memoized_limit = limit;
        self
    }

    pub fn with_sequence_listing_limit(mut self, limit: i64) -> Self {
        self.sequence_listing_limit = limit;
        self
    }

    pub fn with_confirm_threshold(mut self, threshold: i64) -> Self {
        self.confirm_threshold = threshold;
        self
    }

    pub fn with_hanoi_listing_limit(mut self, limit: u32) -> Self {
        self.hanoi_listing_limit = limit;
        self
    }

    pub fn with_clear_screen(mut self, enable: bool) -> Self {
        self.clear_screen = enable;
        self
    }

    pub fn with_pause(mut self, enable: bool) -> Self {
        self.pause = enable;
        self
    }

    /// Largest position `strategy` may be run for, or `None` when unbounded.
    pub fn strategy_limit(&self, strategy: Strategy) -> Option<i64> {
        match strategy {
            Strategy::Iterative => None,
            Strategy::Recursive => Some(self.recursion_limit),
            Strategy::Memoized => Some(self.memoized_limit),
        }
    }

    /// Settings suited to scripted sessions: no screen clearing, no pauses.
    pub fn non_interactive() -> Self {
        Self::default().with_clear_screen(false).with_pause(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.recursion_limit, 30);
        assert_eq!(settings.memoized_limit, 10_000);
        assert_eq!(settings.sequence_listing_limit, 100);
        assert_eq!(settings.confirm_threshold, 40);
        assert_eq!(settings.hanoi_listing_limit, 20);
        assert!(settings.clear_screen);
        assert!(settings.pause);
    }

    #[test]
    fn test_thresholds_are_ordered() {
        let settings = Settings::default();
        assert!(settings.recursion_limit < settings.confirm_threshold);
        assert!(settings.recursion_limit < settings.memoized_limit);
        assert!(settings.sequence_listing_limit < MAX_LISTED_TERMS);
        assert!(settings.hanoi_listing_limit <= MAX_LISTED_DISKS);
    }

    #[test]
    fn test_builder() {
        let settings = Settings::non_interactive().with_recursion_limit(25);
        assert_eq!(settings.recursion_limit, 25);
        assert!(!settings.clear_screen);
        assert!(!settings.pause);
    }

    #[test]
    fn test_strategy_limits() {
        let settings = Settings::default().with_memoized_limit(500);
        assert_eq!(settings.strategy_limit(Strategy::Iterative), None);
        assert_eq!(settings.strategy_limit(Strategy::Recursive), Some(30));
        assert_eq!(settings.strategy_limit(Strategy::Memoized), Some(500));
    }
}
