//! Tower of Hanoi move generation, recursive and iterative, and the minimum move count.

use std::fmt;

/// One of the three rods of the puzzle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Peg {
    A,
    B,
    C,
}

impl Peg {
    fn index(self) -> usize {
        match self {
            Peg::A => 0,
            Peg::B => 1,
            Peg::C => 2,
        }
    }
}

impl fmt::Display for Peg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Peg::A => "A",
            Peg::B => "B",
            Peg::C => "C",
        };
        f.write_str(label)
    }
}

/// A single disk relocation.
///
/// `disk` is only known to the recursive generator; the iterative generator
/// reports peg pairs alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    /// 1-based position in the solution.
    pub step: u64,
    pub disk: Option<u32>,
    pub from: Peg,
    pub to: Peg,
}

impl Move {
    /// The `(from, to)` pair, ignoring step and disk.
    pub fn pegs(&self) -> (Peg, Peg) {
        (self.from, self.to)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.disk {
            Some(disk) => write!(
                f,
                "Step {}: Move disk {} from rod {} to rod {}",
                self.step, disk, self.from, self.to
            ),
            None => write!(
                f,
                "Step {}: Move disk from rod {} to rod {}",
                self.step, self.from, self.to
            ),
        }
    }
}

/// Minimum number of moves for `n` disks, `2^n - 1`.
///
/// Exact for every `n <= 64`; larger counts saturate at `u64::MAX`.
///
/// # Example
/// ```
/// use recursive_sequence_analyzer::hanoi::minimum_moves;
/// assert_eq!(minimum_moves(10), 1023);
/// ```
pub fn minimum_moves(n: u32) -> u64 {
    match n {
        0 => 0,
        1..=63 => (1u64 << n) - 1,
        _ => u64::MAX,
    }
}

/// Lists the moves that carry `n` disks from `from` to `to`, using `aux` as the spare rod.
///
/// Classic divide and conquer: park `n - 1` disks on `aux`, move disk `n`,
/// then bring the `n - 1` disks back on top of it. Steps are numbered from 1
/// in emission order.
///
/// # Example
/// ```
/// use recursive_sequence_analyzer::hanoi::{recursive_moves, Peg};
/// let moves = recursive_moves(3, Peg::A, Peg::C, Peg::B);
/// assert_eq!(moves.len(), 7);
/// assert_eq!(moves[3].disk, Some(3));
/// ```
pub fn recursive_moves(n: u32, from: Peg, to: Peg, aux: Peg) -> Vec<Move> {
    let mut moves = Vec::with_capacity(minimum_moves(n) as usize);
    collect_moves(n, from, to, aux, &mut moves);
    moves
}

fn collect_moves(n: u32, from: Peg, to: Peg, aux: Peg, moves: &mut Vec<Move>) {
    if n == 0 {
        return;
    }

    collect_moves(n - 1, from, aux, to, moves);
    moves.push(Move {
        step: moves.len() as u64 + 1,
        disk: Some(n),
        from,
        to,
    });
    collect_moves(n - 1, aux, to, from, moves);
}

/// Recursive solution for the standard setup: every disk from rod A to rod C via B.
pub fn solve_recursive(n: u32) -> Vec<Move> {
    recursive_moves(n, Peg::A, Peg::C, Peg::B)
}

// Disk stacks used by the iterative generator to orient each peg pair.
struct Rods {
    stacks: [Vec<u32>; 3],
}

impl Rods {
    fn new(n: u32, source: Peg) -> Self {
        let mut stacks: [Vec<u32>; 3] = Default::default();
        stacks[source.index()] = (1..=n).rev().collect();
        Rods { stacks }
    }

    fn top(&self, peg: Peg) -> Option<u32> {
        self.stacks[peg.index()].last().copied()
    }

    /// Orients the pair so the smaller top disk moves onto the other rod, then moves it.
    fn shift_between(&mut self, x: Peg, y: Peg) -> (Peg, Peg) {
        let (from, to) = match (self.top(x), self.top(y)) {
            (Some(a), Some(b)) if a > b => (y, x),
            (None, Some(_)) => (y, x),
            _ => (x, y),
        };

        if let Some(disk) = self.stacks[from.index()].pop() {
            self.stacks[to.index()].push(disk);
        }
        (from, to)
    }
}

/// Lists the moves for `n` disks from rod A to rod C without recursion.
///
/// The rod pair for move `i` is chosen by `i mod 3` alone: 1 pairs the
/// source with the target, 2 the source with the spare, 0 the spare with the
/// target. For an even number of disks the target and spare roles swap. Each
/// pair is then oriented so the smaller top disk moves. The resulting peg
/// transitions match [`solve_recursive`] move for move; only the disk labels
/// are left out.
///
/// # Example
/// ```
/// use recursive_sequence_analyzer::hanoi::{iterative_moves, solve_recursive, Move};
/// let iterative: Vec<_> = iterative_moves(4).iter().map(Move::pegs).collect();
/// let recursive: Vec<_> = solve_recursive(4).iter().map(Move::pegs).collect();
/// assert_eq!(iterative, recursive);
/// ```
pub fn iterative_moves(n: u32) -> Vec<Move> {
    let (source, mut target, mut spare) = (Peg::A, Peg::C, Peg::B);
    if n % 2 == 0 {
        std::mem::swap(&mut target, &mut spare);
    }

    let total = minimum_moves(n);
    let mut rods = Rods::new(n, source);
    let mut moves = Vec::with_capacity(total as usize);

    for step in 1..=total {
        let (x, y) = match step % 3 {
            1 => (source, target),
            2 => (source, spare),
            _ => (spare, target),
        };
        let (from, to) = rods.shift_between(x, y);
        moves.push(Move {
            step,
            disk: None,
            from,
            to,
        });
    }

    moves
}

#[cfg(test)]
mod tests {
    use super::*;

    fn peg_pairs(moves: &[Move]) -> Vec<(Peg, Peg)> {
        moves.iter().map(Move::pegs).collect()
    }

    #[test]
    fn test_minimum_moves() {
        assert_eq!(minimum_moves(1), 1);
        assert_eq!(minimum_moves(3), 7);
        assert_eq!(minimum_moves(10), 1023);
        assert_eq!(minimum_moves(62), (1u64 << 62) - 1);
        assert_eq!(minimum_moves(64), u64::MAX);
    }

    #[test]
    fn test_recursive_single_disk() {
        assert_eq!(
            solve_recursive(1),
            vec![Move { step: 1, disk: Some(1), from: Peg::A, to: Peg::C }]
        );
    }

    #[test]
    fn test_recursive_two_disks() {
        assert_eq!(
            solve_recursive(2),
            vec![
                Move { step: 1, disk: Some(1), from: Peg::A, to: Peg::B },
                Move { step: 2, disk: Some(2), from: Peg::A, to: Peg::C },
                Move { step: 3, disk: Some(1), from: Peg::B, to: Peg::C },
            ]
        );
    }

    #[test]
    fn test_move_counts() {
        for n in 1..=12 {
            let expected = minimum_moves(n) as usize;
            assert_eq!(solve_recursive(n).len(), expected);
            assert_eq!(iterative_moves(n).len(), expected);
        }
    }

    #[test]
    fn test_iterative_matches_recursive_pegs() {
        for n in 1..=10 {
            assert_eq!(
                peg_pairs(&iterative_moves(n)),
                peg_pairs(&solve_recursive(n)),
                "peg transitions differ for {n} disks"
            );
        }
    }

    #[test]
    fn test_steps_are_numbered_in_order() {
        for moves in [solve_recursive(5), iterative_moves(5)] {
            for (i, m) in moves.iter().enumerate() {
                assert_eq!(m.step, i as u64 + 1);
            }
        }
    }

    #[test]
    fn test_iterative_has_no_disk_labels() {
        assert!(iterative_moves(4).iter().all(|m| m.disk.is_none()));
    }

    #[test]
    fn test_custom_rods() {
        let moves = recursive_moves(2, Peg::C, Peg::A, Peg::B);
        assert_eq!(
            peg_pairs(&moves),
            vec![(Peg::C, Peg::B), (Peg::C, Peg::A), (Peg::B, Peg::A)]
        );
    }

    #[test]
    fn test_move_display() {
        let labelled = Move { step: 4, disk: Some(3), from: Peg::A, to: Peg::C };
        assert_eq!(labelled.to_string(), "Step 4: Move disk 3 from rod A to rod C");
        let bare = Move { step: 2, disk: None, from: Peg::B, to: Peg::A };
        assert_eq!(bare.to_string(), "Step 2: Move disk from rod B to rod A");
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        assert_eq!(solve_recursive(6), solve_recursive(6));
        assert_eq!(iterative_moves(6), iterative_moves(6));
    }
}
