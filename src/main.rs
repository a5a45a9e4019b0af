use std::io;
use std::process::exit;

use recursive_sequence_analyzer::logging::{init_logging, parse_level};
use recursive_sequence_analyzer::{Settings, Shell};
use structopt::StructOpt;
use tracing::{error, info};

#[derive(Debug, StructOpt)]
#[structopt(
    name = "sequence-analyzer",
    about = "Compare iterative, recursive and memoized algorithms for Fibonacci, Lucas and the Tower of Hanoi"
)]
struct Opt {
    /// Do not clear the screen before each menu
    #[structopt(long)]
    no_clear: bool,

    /// Do not wait for Enter after each result
    #[structopt(long)]
    no_pause: bool,

    /// Largest term position the naive recursive method is run for
    #[structopt(long, default_value = "30", env = "ANALYZER_RECURSION_LIMIT")]
    recursion_limit: i64,

    /// Largest term position the memoized method is run for
    #[structopt(long, default_value = "10000", env = "ANALYZER_MEMOIZED_LIMIT")]
    memoized_limit: i64,

    /// Term position above which listing a whole sequence asks for confirmation
    #[structopt(long, default_value = "100", env = "ANALYZER_SEQUENCE_LISTING_LIMIT")]
    sequence_listing_limit: i64,

    /// Term position above which the method comparison asks for confirmation
    #[structopt(long, default_value = "40", env = "ANALYZER_CONFIRM_THRESHOLD")]
    confirm_threshold: i64,

    /// Disk count above which listing every Hanoi move asks for confirmation
    #[structopt(long, default_value = "20", env = "ANALYZER_HANOI_LISTING_LIMIT")]
    hanoi_listing_limit: u32,

    /// Log level (error, warn, info, debug, trace)
    #[structopt(long, default_value = "warn", env = "ANALYZER_LOG_LEVEL")]
    log_level: String,
}

fn main() {
    // Load .env file if present
    dotenv::dotenv().ok();

    let opt = Opt::from_args();

    let level = match parse_level(&opt.log_level) {
        Ok(level) => level,
        Err(err) => {
            eprintln!("{}", err);
            exit(1);
        }
    };
    let _ = init_logging(level);
    info!("Starting sequence analyzer with options: {:?}", opt);

    let settings = Settings::default()
        .with_clear_screen(!opt.no_clear)
        .with_pause(!opt.no_pause)
        .with_recursion_limit(opt.recursion_limit)
        .with_memoized_limit(opt.memoized_limit)
        .with_sequence_listing_limit(opt.sequence_listing_limit)
        .with_confirm_threshold(opt.confirm_threshold)
        .with_hanoi_listing_limit(opt.hanoi_listing_limit);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(stdin.lock(), stdout.lock(), settings);

    if let Err(err) = shell.run() {
        error!("Session aborted: {}", err);
        eprintln!("Error: {}", err);
        exit(1);
    }

    info!("Session finished");
}
