//! Menu-driven text front end.
//!
//! [`Shell`] reads answers line by line from any [`BufRead`] and writes menus
//! and results to any [`Write`], so a whole session can be scripted. Input is
//! validated here; the engines are only ever called with in-domain arguments.

use std::io::{BufRead, Write};

use tracing::{debug, info, warn};

use crate::complexity;
use crate::config::{Settings, MAX_LISTED_DISKS, MAX_LISTED_TERMS};
use crate::error::{AnalyzerError, Result};
use crate::graph;
use crate::hanoi::{self, Move};
use crate::sequence::{Family, Strategy};

const CLEAR_SCREEN: &str = "\x1B[2J\x1B[1;1H";

/// Parses a whole decimal integer, surrounding whitespace allowed.
pub fn parse_integer(line: &str) -> Result<i64> {
    let trimmed = line.trim();
    trimmed
        .parse::<i64>()
        .map_err(|_| AnalyzerError::InvalidInput(format!("'{}' is not a whole number", trimmed)))
}

pub struct Shell<R, W> {
    input: R,
    output: W,
    settings: Settings,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W, settings: Settings) -> Self {
        Self {
            input,
            output,
            settings,
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs the main menu until the user picks "End Program" or input runs out.
    pub fn run(&mut self) -> Result<()> {
        match self.main_menu() {
            Err(AnalyzerError::EndOfInput) => {
                info!("Input closed, ending session");
                self.output.flush()?;
                Ok(())
            }
            other => other,
        }
    }

    fn main_menu(&mut self) -> Result<()> {
        loop {
            self.clear_screen()?;
            writeln!(self.output, "\n{}", "_".repeat(50))?;
            writeln!(self.output, "::::::::RECURSIVE SEQUENCE ANALYZER::::::::")?;
            writeln!(self.output, "{}", "_".repeat(50))?;
            writeln!(self.output, "Choose from the following menu:")?;
            writeln!(self.output, "1. Fibonacci Sequence Term Calculator")?;
            writeln!(self.output, "2. Lucas Sequence Term Calculator")?;
            writeln!(self.output, "3. Tower Of Hanoi Step Calculator")?;
            writeln!(self.output, "4. Time and Space Complexity Calculator")?;
            writeln!(self.output, "5. Visual Graphs")?;
            writeln!(self.output, "0. End Program")?;

            let choice = self.prompt_integer("Enter your choice: ")?;
            debug!(choice, "Main menu selection");

            match choice {
                0 => {
                    writeln!(self.output, "Thank you for using Recursive Sequence Analyzer!")?;
                    self.output.flush()?;
                    return Ok(());
                }
                1 => self.sequence_calculator(Family::Fibonacci)?,
                2 => self.sequence_calculator(Family::Lucas)?,
                3 => self.tower_of_hanoi()?,
                4 => self.efficiency_calculator()?,
                5 => self.graph_visualizer()?,
                _ => {
                    self.invalid_choice(choice, "Invalid choice! Please try again.")?;
                    self.pause()?;
                }
            }
        }
    }

    fn sequence_calculator(&mut self, family: Family) -> Result<()> {
        loop {
            self.clear_screen()?;
            self.header(&format!("{} SEQUENCE CALCULATOR", family.name().to_uppercase()))?;
            writeln!(self.output, "1. Calculate single term")?;
            writeln!(self.output, "2. Display sequence up to nth term")?;
            writeln!(self.output, "3. Compare iterative vs recursive vs memoized")?;
            writeln!(self.output, "0. Back to main menu")?;

            let choice = self.prompt_integer("Enter your choice: ")?;
            if choice == 0 {
                return Ok(());
            }
            if !(1..=3).contains(&choice) {
                self.invalid_choice(choice, "Invalid choice!")?;
                self.pause()?;
                continue;
            }

            let n = self.prompt_at_least(
                "Enter term position (starting from 0): ",
                0,
                "Position must be non-negative!",
            )?;
            debug!(%family, choice, n, "Sequence calculator request");

            match choice {
                1 => {
                    writeln!(self.output, "\n{}({}) = {}", family, n, family.iterative(n))?;
                }
                2 => {
                    if !self.confirm_sequence_listing(n)? {
                        self.pause()?;
                        continue;
                    }
                    writeln!(self.output, "\n{} sequence up to term {}:", family, n)?;
                    writeln!(self.output, "{}", "-".repeat(30))?;
                    for (i, term) in family.sequence(n).iter().enumerate() {
                        writeln!(self.output, "{}({}) = {}", family.symbol(), i, term)?;
                    }
                }
                _ => self.compare_strategies(family, n)?,
            }
            self.pause()?;
        }
    }

    fn compare_strategies(&mut self, family: Family, n: i64) -> Result<()> {
        let threshold = self.settings.confirm_threshold;
        if n > threshold {
            writeln!(
                self.output,
                "Warning: Recursive method will be slow for n > {}!",
                threshold
            )?;
            if self.prompt_integer("Continue anyway? (1=Yes, 0=No): ")? == 0 {
                return Ok(());
            }
        }

        let rule = "-".repeat(40);
        writeln!(self.output, "\n{}", rule)?;
        writeln!(self.output, "COMPARISON OF METHODS")?;
        writeln!(self.output, "{}", rule)?;

        for (i, strategy) in Strategy::ALL.into_iter().enumerate() {
            let gap = if i == 0 { "" } else { "\n" };
            if let Some(limit) = self.settings.strategy_limit(strategy).filter(|&limit| n > limit) {
                info!(n, limit, %strategy, "Skipping strategy");
                writeln!(
                    self.output,
                    "{}{} method: Skipped (too large for n > {})",
                    gap, strategy, limit
                )?;
                continue;
            }
            writeln!(self.output, "{}{} method:", gap, strategy)?;
            writeln!(self.output, "{}({}) = {}", family, n, family.compute(strategy, n))?;
        }

        writeln!(self.output, "{}", rule)?;
        Ok(())
    }

    fn tower_of_hanoi(&mut self) -> Result<()> {
        self.clear_screen()?;
        self.header("TOWER OF HANOI CALCULATOR")?;

        let disks = self.prompt_disks()?;

        writeln!(self.output, "\nChoose solution method:")?;
        writeln!(self.output, "1. Recursive solution with steps")?;
        writeln!(self.output, "2. Iterative solution")?;
        writeln!(self.output, "3. Calculate minimum moves only")?;
        let choice = self.prompt_integer("Enter choice: ")?;
        debug!(disks, choice, "Tower of Hanoi request");

        let minimum = hanoi::minimum_moves(disks);
        writeln!(self.output, "\nMinimum moves required: {}", minimum)?;

        match choice {
            1 => {
                if self.confirm_listing(disks)? {
                    writeln!(self.output, "\nRecursive solution steps:")?;
                    let moves = hanoi::solve_recursive(disks);
                    self.print_moves(&moves)?;
                    writeln!(self.output, "{}", "-".repeat(50))?;
                    writeln!(self.output, "Total steps: {}", moves.len())?;
                }
            }
            2 => {
                if self.confirm_listing(disks)? {
                    writeln!(self.output, "\nIterative solution steps:")?;
                    let moves = hanoi::iterative_moves(disks);
                    self.print_moves(&moves)?;
                    writeln!(self.output, "Total steps: {}", minimum)?;
                }
            }
            3 => {
                writeln!(self.output, "\nMinimum moves calculation:")?;
                writeln!(self.output, "Formula: 2^n - 1 = {}", minimum)?;
            }
            _ => self.invalid_choice(choice, "Invalid choice!")?,
        }

        self.pause()
    }

    fn print_moves(&mut self, moves: &[Move]) -> Result<()> {
        writeln!(self.output, "{}", "-".repeat(50))?;
        for m in moves {
            writeln!(self.output, "{}", m)?;
        }
        Ok(())
    }

    fn confirm_sequence_listing(&mut self, n: i64) -> Result<bool> {
        if n > MAX_LISTED_TERMS {
            warn!(n, max = MAX_LISTED_TERMS, "Refusing sequence listing");
            writeln!(
                self.output,
                "Error: Cannot list more than {} terms!",
                MAX_LISTED_TERMS
            )?;
            return Ok(false);
        }
        if n <= self.settings.sequence_listing_limit {
            return Ok(true);
        }
        writeln!(
            self.output,
            "Warning: listing {} terms will take a long time!",
            n + 1
        )?;
        Ok(self.prompt_integer("Continue anyway? (1=Yes, 0=No): ")? != 0)
    }

    fn confirm_listing(&mut self, disks: u32) -> Result<bool> {
        if disks > MAX_LISTED_DISKS {
            warn!(disks, max = MAX_LISTED_DISKS, "Refusing Hanoi listing");
            writeln!(
                self.output,
                "Error: Cannot list moves for more than {} disks!",
                MAX_LISTED_DISKS
            )?;
            return Ok(false);
        }
        if disks <= self.settings.hanoi_listing_limit {
            return Ok(true);
        }
        writeln!(
            self.output,
            "Warning: listing {} moves for {} disks will take a long time!",
            hanoi::minimum_moves(disks),
            disks
        )?;
        Ok(self.prompt_integer("Continue anyway? (1=Yes, 0=No): ")? != 0)
    }

    fn efficiency_calculator(&mut self) -> Result<()> {
        self.clear_screen()?;
        self.header("TIME AND SPACE COMPLEXITY CALCULATOR")?;
        writeln!(self.output, "Available analyses:")?;
        writeln!(self.output, "1. Fibonacci sequence complexities")?;
        writeln!(self.output, "2. Lucas sequence complexities")?;
        writeln!(self.output, "3. Tower of Hanoi complexities")?;
        writeln!(self.output, "4. Compare all methods")?;
        writeln!(self.output, "5. Measure running time")?;

        let choice = self.prompt_integer("Enter choice: ")?;
        debug!(choice, "Complexity calculator selection");

        match choice {
            1 => write!(
                self.output,
                "{}",
                complexity::render_profile("Fibonacci", &complexity::fibonacci_profile())
            )?,
            2 => write!(
                self.output,
                "{}",
                complexity::render_profile("Lucas", &complexity::lucas_profile())
            )?,
            3 => write!(self.output, "{}", complexity::render_hanoi_profile())?,
            4 => write!(self.output, "{}", complexity::render_comparison())?,
            5 => {
                let family = self.prompt_family()?;
                let n = self.prompt_at_least(
                    "Enter term position (starting from 0): ",
                    0,
                    "Position must be non-negative!",
                )?;
                let timings = complexity::measure(family, n, &self.settings);
                write!(self.output, "{}", complexity::render_timings(family, n, &timings))?;
            }
            _ => self.invalid_choice(choice, "Invalid choice!")?,
        }

        self.pause()
    }

    fn graph_visualizer(&mut self) -> Result<()> {
        self.clear_screen()?;
        self.header("VISUAL GRAPHS")?;
        writeln!(self.output, "Available graphs:")?;
        writeln!(self.output, "1. Fibonacci sequence growth")?;
        writeln!(self.output, "2. Lucas sequence growth")?;
        writeln!(self.output, "3. Tower of Hanoi moves growth")?;

        let choice = self.prompt_integer("Enter choice: ")?;
        if !(1..=3).contains(&choice) {
            self.invalid_choice(choice, "Invalid choice!")?;
            return self.pause();
        }

        let n = self.prompt_at_least(
            "Enter number of terms (1-20): ",
            0,
            "Number of terms must be non-negative!",
        )?;
        debug!(choice, n, "Graph request");

        let text = match choice {
            1 => graph::render_sequence_graph(
                Family::Fibonacci,
                &graph::sequence_rows(Family::Fibonacci, n),
            ),
            2 => graph::render_sequence_graph(Family::Lucas, &graph::sequence_rows(Family::Lucas, n)),
            _ => graph::render_hanoi_graph(&graph::hanoi_rows(n)),
        };
        write!(self.output, "{}", text)?;

        self.pause()
    }

    fn prompt_family(&mut self) -> Result<Family> {
        loop {
            match self.prompt_integer("Sequence (1=Fibonacci, 2=Lucas): ")? {
                1 => return Ok(Family::Fibonacci),
                2 => return Ok(Family::Lucas),
                other => self.invalid_choice(other, "Invalid choice!")?,
            }
        }
    }

    fn prompt_disks(&mut self) -> Result<u32> {
        loop {
            let n = self.prompt_at_least(
                "Enter number of disks (1-10 recommended): ",
                1,
                "Number of disks must be positive!",
            )?;
            match u32::try_from(n) {
                Ok(disks) => return Ok(disks),
                Err(_) => {
                    warn!(n, "Disk count out of range");
                    writeln!(self.output, "Error: Number of disks is too large!")?;
                }
            }
        }
    }

    /// Prompts until an integer `>= min` is entered.
    fn prompt_at_least(&mut self, prompt: &str, min: i64, message: &str) -> Result<i64> {
        loop {
            let value = self.prompt_integer(prompt)?;
            if value >= min {
                return Ok(value);
            }
            warn!(value, min, "Rejected out-of-range input");
            writeln!(self.output, "Error: {}", message)?;
        }
    }

    /// Prompts until a whole number is entered.
    fn prompt_integer(&mut self, prompt: &str) -> Result<i64> {
        loop {
            write!(self.output, "{}", prompt)?;
            self.output.flush()?;
            let line = self.read_line()?;
            match parse_integer(&line) {
                Ok(value) => return Ok(value),
                Err(err) => {
                    warn!(input = %line.trim(), "Rejected non-numeric input");
                    writeln!(self.output, "Error: {}", err)?;
                }
            }
        }
    }

    fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(AnalyzerError::EndOfInput);
        }
        Ok(line)
    }

    fn invalid_choice(&mut self, choice: i64, message: &str) -> Result<()> {
        warn!(choice, "Unknown menu choice");
        writeln!(self.output, "{}", message)?;
        Ok(())
    }

    fn header(&mut self, title: &str) -> Result<()> {
        let rule = "=".repeat(60);
        let width = (60 + title.len()) / 2;
        writeln!(self.output, "\n{}", rule)?;
        writeln!(self.output, "{:>width$}", title, width = width)?;
        writeln!(self.output, "{}\n", rule)?;
        Ok(())
    }

    fn clear_screen(&mut self) -> Result<()> {
        if self.settings.clear_screen {
            write!(self.output, "{}", CLEAR_SCREEN)?;
        }
        Ok(())
    }

    fn pause(&mut self) -> Result<()> {
        if !self.settings.pause {
            return Ok(());
        }
        write!(self.output, "\nPress Enter to continue...")?;
        self.output.flush()?;
        self.read_line()?;
        Ok(())
    }
}
