//! Fibonacci and Lucas terms computed iteratively, by naive recursion and by memoized recursion.

use std::fmt;

/// Value of a single sequence term.
///
/// Terms are exact only while they fit in 64 bits (up to roughly n = 92 for
/// both families). Past that point additions wrap silently.
pub type Term = i64;

/// Sentinel marking a memo cache slot that has not been computed yet.
pub const UNSET: Term = -1;

/// A two-term linear recurrence `X(n) = X(n-1) + X(n-2)`, identified by its seeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    /// Seeds `F(0) = 0`, `F(1) = 1`.
    Fibonacci,
    /// Seeds `L(0) = 2`, `L(1) = 1`.
    Lucas,
}

/// How a term is evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    Iterative,
    Recursive,
    Memoized,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [Strategy::Iterative, Strategy::Recursive, Strategy::Memoized];

    pub fn name(self) -> &'static str {
        match self {
            Strategy::Iterative => "Iterative",
            Strategy::Recursive => "Recursive",
            Strategy::Memoized => "Memoized",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Family {
    pub const ALL: [Family; 2] = [Family::Fibonacci, Family::Lucas];

    /// The two base-case values `(X(0), X(1))`.
    pub fn seeds(self) -> (Term, Term) {
        match self {
            Family::Fibonacci => (0, 1),
            Family::Lucas => (2, 1),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Family::Fibonacci => "Fibonacci",
            Family::Lucas => "Lucas",
        }
    }

    /// Single-letter symbol used when listing terms, e.g. `F(3) = 2`.
    pub fn symbol(self) -> char {
        match self {
            Family::Fibonacci => 'F',
            Family::Lucas => 'L',
        }
    }

    // Negative positions are outside the domain. Lucas reports -1, while
    // Fibonacci echoes the position back unchanged.
    fn out_of_domain(self, n: i64) -> Term {
        match self {
            Family::Fibonacci => n,
            Family::Lucas => -1,
        }
    }

    /// Computes the `n`th term with a two-variable running accumulation.
    ///
    /// Runs in O(n) time and O(1) extra space. For `n < 0` Lucas returns `-1`
    /// and Fibonacci returns `n` itself.
    ///
    /// # Example
    /// ```
    /// use recursive_sequence_analyzer::sequence::Family;
    /// assert_eq!(Family::Fibonacci.iterative(10), 55);
    /// assert_eq!(Family::Lucas.iterative(10), 123);
    /// ```
    pub fn iterative(self, n: i64) -> Term {
        if n < 0 {
            return self.out_of_domain(n);
        }

        let (mut a, mut b) = self.seeds();
        if n == 0 {
            return a;
        }

        for _ in 2..=n {
            let next = a.wrapping_add(b);
            a = b;
            b = next;
        }

        b
    }

    /// Computes the `n`th term by direct, unmemoized tree recursion.
    ///
    /// Takes O(2^n) time and O(n) stack. No limit is imposed here; callers
    /// are expected to gate large `n` before calling.
    ///
    /// # Example
    /// ```
    /// use recursive_sequence_analyzer::sequence::Family;
    /// assert_eq!(Family::Lucas.recursive(5), 11);
    /// ```
    pub fn recursive(self, n: i64) -> Term {
        if n < 0 {
            return self.out_of_domain(n);
        }

        let (first, second) = self.seeds();
        match n {
            0 => first,
            1 => second,
            _ => self.recursive(n - 1).wrapping_add(self.recursive(n - 2)),
        }
    }

    /// Allocates a memo cache for positions `0..=n`, every slot set to [`UNSET`].
    ///
    /// The Lucas cache comes pre-seeded with its two base values. A negative
    /// `n` yields an empty cache.
    pub fn new_cache(self, n: i64) -> Vec<Term> {
        if n < 0 {
            return Vec::new();
        }

        let mut cache = vec![UNSET; n as usize + 1];
        if self == Family::Lucas {
            let (first, second) = self.seeds();
            cache[0] = first;
            if let Some(slot) = cache.get_mut(1) {
                *slot = second;
            }
        }
        cache
    }

    /// Computes the `n`th term by recursion, storing every intermediate term in `cache`.
    ///
    /// Each position is computed at most once, giving O(n) time and space.
    /// Base cases are answered before the cache is consulted, so a plain
    /// [`UNSET`]-filled slice works for both families.
    ///
    /// # Panics
    /// Panics if `n >= 2` and `cache` holds fewer than `n + 1` slots.
    ///
    /// # Example
    /// ```
    /// use recursive_sequence_analyzer::sequence::Family;
    /// let mut cache = Family::Fibonacci.new_cache(50);
    /// assert_eq!(Family::Fibonacci.memoized(50, &mut cache), 12_586_269_025);
    /// ```
    pub fn memoized(self, n: i64, cache: &mut [Term]) -> Term {
        if n < 0 {
            return self.out_of_domain(n);
        }

        let (first, second) = self.seeds();
        match n {
            0 => return first,
            1 => return second,
            _ => {}
        }

        let index = n as usize;
        if cache[index] != UNSET {
            return cache[index];
        }

        let value = self
            .memoized(n - 1, cache)
            .wrapping_add(self.memoized(n - 2, cache));
        cache[index] = value;
        value
    }

    /// Evaluates the `n`th term with the given strategy.
    ///
    /// The memoized strategy gets a fresh cache that is dropped on return.
    pub fn compute(self, strategy: Strategy, n: i64) -> Term {
        match strategy {
            Strategy::Iterative => self.iterative(n),
            Strategy::Recursive => self.recursive(n),
            Strategy::Memoized => {
                let mut cache = self.new_cache(n);
                self.memoized(n, &mut cache)
            }
        }
    }

    /// Generates the terms for positions `0..=n`, or an empty vector when `n < 0`.
    ///
    /// # Example
    /// ```
    /// use recursive_sequence_analyzer::sequence::Family;
    /// assert_eq!(Family::Lucas.sequence(4), vec![2, 1, 3, 4, 7]);
    /// ```
    pub fn sequence(self, n: i64) -> Vec<Term> {
        if n < 0 {
            return Vec::new();
        }

        let (first, second) = self.seeds();
        let mut terms = Vec::with_capacity(n as usize + 1);
        terms.push(first);
        if n >= 1 {
            terms.push(second);
        }

        for i in 2..=n as usize {
            let next = terms[i - 1].wrapping_add(terms[i - 2]);
            terms.push(next);
        }

        terms
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_values() {
        let fib = Family::Fibonacci;
        assert_eq!(fib.iterative(0), 0);
        assert_eq!(fib.iterative(1), 1);
        assert_eq!(fib.iterative(2), 1);
        assert_eq!(fib.iterative(10), 55);

        let lucas = Family::Lucas;
        assert_eq!(lucas.iterative(0), 2);
        assert_eq!(lucas.iterative(1), 1);
        assert_eq!(lucas.iterative(2), 3);
        assert_eq!(lucas.iterative(10), 123);
    }

    #[test]
    fn test_strategies_agree() {
        for family in Family::ALL {
            for n in 0..=30 {
                let expected = family.iterative(n);
                assert_eq!(family.recursive(n), expected, "{family} recursive({n})");
                let mut cache = vec![UNSET; n as usize + 1];
                assert_eq!(family.memoized(n, &mut cache), expected, "{family} memoized({n})");
                assert_eq!(family.compute(Strategy::Memoized, n), expected);
            }
        }
    }

    #[test]
    fn test_sequence_matches_iterative() {
        for family in Family::ALL {
            let terms = family.sequence(40);
            assert_eq!(terms.len(), 41);
            for (i, term) in terms.iter().enumerate() {
                assert_eq!(*term, family.iterative(i as i64));
            }
        }
    }

    #[test]
    fn test_negative_positions() {
        assert_eq!(Family::Fibonacci.iterative(-3), -3);
        assert_eq!(Family::Fibonacci.recursive(-3), -3);
        assert_eq!(Family::Lucas.iterative(-3), -1);
        assert_eq!(Family::Lucas.recursive(-1), -1);
        assert_eq!(Family::Lucas.memoized(-2, &mut []), -1);
        assert!(Family::Fibonacci.sequence(-1).is_empty());
        assert!(Family::Lucas.new_cache(-1).is_empty());
    }

    #[test]
    fn test_memo_cache_is_filled() {
        let mut cache = Family::Fibonacci.new_cache(10);
        assert!(cache.iter().all(|slot| *slot == UNSET));
        assert_eq!(Family::Fibonacci.memoized(10, &mut cache), 55);
        assert_eq!(cache[10], 55);
        assert_eq!(cache[5], 5);
        // Base cases are answered directly and never written.
        assert_eq!(cache[0], UNSET);
        assert_eq!(cache[1], UNSET);
    }

    #[test]
    fn test_lucas_cache_is_seeded() {
        assert_eq!(Family::Lucas.new_cache(0), vec![2]);
        assert_eq!(Family::Lucas.new_cache(3), vec![2, 1, UNSET, UNSET]);
    }

    #[test]
    fn test_large_positions() {
        assert_eq!(Family::Fibonacci.iterative(92), 7_540_113_804_746_346_429);
        let mut cache = Family::Fibonacci.new_cache(92);
        assert_eq!(Family::Fibonacci.memoized(92, &mut cache), 7_540_113_804_746_346_429);
        // Past the 64-bit range the additions wrap instead of panicking.
        let _ = Family::Fibonacci.iterative(100);
        let _ = Family::Lucas.sequence(120);
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        for family in Family::ALL {
            assert_eq!(family.sequence(25), family.sequence(25));
            assert_eq!(family.compute(Strategy::Memoized, 25), family.compute(Strategy::Memoized, 25));
            assert_eq!(family.recursive(20), family.recursive(20));
        }
    }
}
