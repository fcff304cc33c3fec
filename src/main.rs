//! Boggle Solver - CLI
//!
//! Finds every dictionary word on a random or fixed letter grid.

use anyhow::{Context, Result};
use boggle_solver::{
    commands::{BenchmarkConfig, SolveConfig, check_word, run_benchmark, solve_board},
    core::Grid,
    lexicon::{Lexicon, load_from_file},
    output::{print_benchmark_result, print_check_result, print_solve_result},
};
use clap::{Args, Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::Duration;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "boggle_solver",
    about = "Boggle solver using prefix-pruned depth-first search",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dictionary: 'embedded' (default) or path to a newline-delimited word list
    #[arg(
        short,
        long,
        global = true,
        env = "BOGGLE_DICTIONARY",
        default_value = "embedded"
    )]
    dictionary: String,

    /// Show debug logging and search statistics
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Find every word on a board (default)
    Solve {
        #[command(flatten)]
        board: BoardArgs,

        /// Hide words shorter than this
        #[arg(short, long, default_value = "1")]
        min_length: usize,

        /// Search start cells in parallel
        #[arg(short, long)]
        parallel: bool,

        /// Stop searching after this many milliseconds
        #[arg(short, long)]
        timeout_ms: Option<u64>,
    },

    /// Check whether one word is in the dictionary and on the board
    Check {
        /// The word to look for
        word: String,

        #[command(flatten)]
        board: BoardArgs,
    },

    /// Measure search speed over many random boards
    Benchmark {
        /// Number of random boards to solve
        #[arg(short = 'n', long, default_value = "100")]
        boards: usize,

        /// Board width in cells
        #[arg(long, default_value = "4")]
        width: usize,

        /// Board height in cells
        #[arg(long, default_value = "4")]
        height: usize,

        /// Seed for the board sequence
        #[arg(short, long, default_value = "0")]
        seed: u64,

        /// Search start cells in parallel
        #[arg(short, long)]
        parallel: bool,
    },
}

#[derive(Args, Clone)]
struct BoardArgs {
    /// Fixed board as rows separated by '/', e.g. "SEAT/RNTO/IDEL/PAMS"
    #[arg(short, long)]
    board: Option<String>,

    /// Random board width in cells
    #[arg(long, default_value = "4")]
    width: usize,

    /// Random board height in cells
    #[arg(long, default_value = "4")]
    height: usize,

    /// Seed for the random board (fresh entropy if omitted)
    #[arg(short, long)]
    seed: Option<u64>,
}

impl Default for BoardArgs {
    fn default() -> Self {
        Self {
            board: None,
            width: 4,
            height: 4,
            seed: None,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let lexicon = load_lexicon(&cli.dictionary)?;

    // Default to Solve on a random 4x4 board if no command given
    let command = cli.command.unwrap_or(Commands::Solve {
        board: BoardArgs::default(),
        min_length: 1,
        parallel: false,
        timeout_ms: None,
    });

    match command {
        Commands::Solve {
            board,
            min_length,
            parallel,
            timeout_ms,
        } => {
            let config = SolveConfig {
                min_length,
                parallel,
                timeout: timeout_ms.map(Duration::from_millis),
            };
            run_solve_command(&board, &lexicon, &config, cli.verbose)
        }
        Commands::Check { word, board } => run_check_command(&word, &board, &lexicon),
        Commands::Benchmark {
            boards,
            width,
            height,
            seed,
            parallel,
        } => {
            let config = BenchmarkConfig {
                boards,
                width,
                height,
                seed,
                parallel,
                show_progress: true,
            };
            run_benchmark_command(&lexicon, &config)
        }
    }
}

/// Install the stderr log subscriber
///
/// `RUST_LOG` overrides the default level.
fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "boggle_solver=debug"
    } else {
        "boggle_solver=warn"
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Load the dictionary named by the -d flag
fn load_lexicon(source: &str) -> Result<Lexicon> {
    let lexicon = match source {
        "embedded" => Lexicon::embedded(),
        path => {
            load_from_file(path).with_context(|| format!("Cannot load dictionary '{path}'"))?
        }
    };

    if lexicon.is_empty() {
        tracing::warn!(source, "dictionary is empty, no words can be found");
    }

    Ok(lexicon)
}

/// Build the board from a literal or from a seeded random source
fn make_grid(args: &BoardArgs) -> Result<Grid> {
    if let Some(rows) = &args.board {
        return rows
            .parse::<Grid>()
            .with_context(|| format!("Invalid board '{rows}'"));
    }

    let seed = args.seed.unwrap_or_else(rand::random);
    println!("🎲 Random {}x{} board (seed {seed})", args.width, args.height);

    let mut rng = StdRng::seed_from_u64(seed);
    Grid::random(args.width, args.height, &mut rng).context("Invalid board dimensions")
}

fn run_solve_command(
    board: &BoardArgs,
    lexicon: &Lexicon,
    config: &SolveConfig,
    verbose: bool,
) -> Result<()> {
    let grid = make_grid(board)?;
    let result = solve_board(&grid, lexicon, config);
    print_solve_result(&result, verbose);
    Ok(())
}

fn run_check_command(word: &str, board: &BoardArgs, lexicon: &Lexicon) -> Result<()> {
    let grid = make_grid(board)?;
    let result = check_word(&grid, lexicon, word).map_err(|e| anyhow::anyhow!(e))?;
    print_check_result(&result);
    Ok(())
}

fn run_benchmark_command(lexicon: &Lexicon, config: &BenchmarkConfig) -> Result<()> {
    println!(
        "Running benchmark on {} random {}x{} boards...",
        config.boards, config.width, config.height
    );

    let result = run_benchmark(lexicon, config).context("Invalid board dimensions")?;
    print_benchmark_result(&result);
    Ok(())
}
