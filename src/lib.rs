//! # Recursive Sequence Analyzer
//!
//! A teaching library for comparing algorithmic strategies on classic recursive problems:
//! the Fibonacci and Lucas sequences and the Tower of Hanoi puzzle. Each problem is solved
//! more than one way so the growth rates of the approaches can be observed side by side.
//!
//! ## Key Features
//! - **Three sequence strategies**: iterative accumulation, naive tree recursion and
//!   memoized recursion with a caller-owned cache.
//! - **Two Hanoi generators**: true divide-and-conquer recursion and an iterative scheme
//!   that picks each rod pair from the move number alone.
//! - **Complexity tables and timings**: asymptotic cost summaries plus a one-shot
//!   wall-clock measurement of each strategy.
//! - **ASCII growth graphs**: logarithmic bar charts of sequence values and move counts.
//! - **Interactive shell**: a menu-driven front end that validates input before any
//!   computation runs.
//!
//! ## Overview of Modules
//!
//! #### `sequence`
//! [`Family`](sequence::Family) (Fibonacci or Lucas) with `iterative`, `recursive`,
//! `memoized` and `sequence` operations. Terms are `i64` and wrap silently past the
//! 64-bit range (around n = 92).
//!
//! #### `hanoi`
//! [`minimum_moves`](hanoi::minimum_moves), [`recursive_moves`](hanoi::recursive_moves)
//! and [`iterative_moves`](hanoi::iterative_moves). Both generators produce the same
//! rod-to-rod transitions; only the recursive one labels the disk being moved.
//!
//! #### `complexity` and `graph`
//! Structured results for the complexity tables and growth charts, each with a
//! text renderer.
//!
//! #### `shell`
//! [`Shell`](shell::Shell) drives the menus over any `BufRead`/`Write` pair.
//!
//! ### Errors
//! - `AnalyzerError`: invalid input, closed input stream or an I/O failure. The
//!   computation engines themselves never fail.
//!
//! ## Usage Example
//! ```rust
//! use recursive_sequence_analyzer::hanoi::solve_recursive;
//! use recursive_sequence_analyzer::sequence::{Family, Strategy};
//!
//! assert_eq!(Family::Fibonacci.compute(Strategy::Memoized, 30), 832_040);
//! assert_eq!(solve_recursive(4).len(), 15);
//! ```

pub mod complexity;
pub mod config;
pub mod error;
pub mod graph;
pub mod hanoi;
pub mod logging;
pub mod sequence;
pub mod shell;

pub use config::Settings;
pub use error::{AnalyzerError, Result};
pub use shell::Shell;
