//! ASCII bar charts of sequence and Tower of Hanoi growth.

use std::fmt::Write;

use crate::hanoi::minimum_moves;
use crate::sequence::{Family, Term};

/// Most rows a graph will show.
pub const MAX_GRAPH_TERMS: i64 = 20;

/// Longest bar drawn, in characters.
pub const MAX_BAR_LEN: usize = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphRow {
    pub index: i64,
    pub value: Term,
    pub bar_len: usize,
}

// floor(log2(value + 1)), or zero when value + 1 is not positive.
fn log2_plus_one(value: Term) -> usize {
    value.wrapping_add(1).checked_ilog2().unwrap_or(0) as usize
}

/// Rows for positions `0..=n` of `family`, with `n` clamped to [`MAX_GRAPH_TERMS`].
///
/// Each bar is `2 * floor(log2(value + 1))` long, capped at [`MAX_BAR_LEN`].
pub fn sequence_rows(family: Family, n: i64) -> Vec<GraphRow> {
    let n = n.min(MAX_GRAPH_TERMS);
    (0..=n)
        .map(|index| {
            let value = family.iterative(index);
            GraphRow {
                index,
                value,
                bar_len: (log2_plus_one(value) * 2).min(MAX_BAR_LEN),
            }
        })
        .collect()
}

/// Rows for `1..=n` disks, with `n` clamped to [`MAX_GRAPH_TERMS`].
///
/// Each bar is `floor(log2(moves + 1))` long, which is the disk count itself.
pub fn hanoi_rows(n: i64) -> Vec<GraphRow> {
    let n = n.min(MAX_GRAPH_TERMS);
    (1..=n)
        .map(|index| {
            let value = minimum_moves(index as u32) as Term;
            GraphRow {
                index,
                value,
                bar_len: log2_plus_one(value).min(MAX_BAR_LEN),
            }
        })
        .collect()
}

pub fn render_sequence_graph(family: Family, rows: &[GraphRow]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n{} Sequence Growth:", family);
    let _ = writeln!(out, "n  Value  Graph");
    let _ = writeln!(out, "{}", "-".repeat(40));
    for row in rows {
        let _ = writeln!(
            out,
            "{:>2}  {:>6}  {}",
            row.index,
            row.value,
            "#".repeat(row.bar_len)
        );
    }
    out
}

pub fn render_hanoi_graph(rows: &[GraphRow]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\nTower of Hanoi Moves Growth:");
    let _ = writeln!(out, "Disks  Moves  Graph");
    let _ = writeln!(out, "{}", "-".repeat(40));
    for row in rows {
        let _ = writeln!(
            out,
            "{:>5}  {:>6}  {}",
            row.index,
            row.value,
            "*".repeat(row.bar_len)
        );
    }
    out
}
