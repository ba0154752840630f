//! Word Ladder - CLI
//!
//! Word ladder game and solver with TUI and CLI modes, comparing breadth-first,
//! uniform-cost and A* search.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::fs::File;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use word_ladder::{
    commands::{
        CompareConfig, SurveyConfig, compare_algorithms, neighbors_of, run_simple, run_survey,
        solve_pair,
    },
    dictionary::{Dictionary, load_dictionary_or_builtin},
    game::{Game, GameMode, GameOptions, HintPolicy, load_word_pair},
    output::{print_comparison, print_neighbors, print_solve_result, print_survey},
    solver::{Algorithm, Solver},
};

/// Log file used while the TUI owns the terminal
const TUI_LOG_FILE: &str = "word_ladder.log";

#[derive(Parser)]
#[command(
    name = "word_ladder",
    about = "Word ladder game and solver with BFS, uniform-cost and A* search",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dictionary file, one word per line (built-in list when missing)
    #[arg(short, long, global = true, default_value = "dictionary.txt")]
    dictionary: PathBuf,

    /// Two-line file with a fixed start and end word
    #[arg(short, long, global = true)]
    pair_file: Option<PathBuf>,

    /// Game mode: beginner (default), advanced, challenge
    #[arg(short, long, global = true, default_value = "beginner", value_parser = parse_mode)]
    mode: GameMode,

    /// Search algorithm: BFS, UCS or A* (default)
    #[arg(short, long, global = true, default_value = "A*", value_parser = parse_algorithm)]
    algorithm: Algorithm,

    /// Seed for reproducible pairs and Challenge restrictions
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Hint policy once off the optimal ladder: from-start (default) or recompute
    #[arg(long, global = true, default_value = "from-start", value_parser = parse_hint_policy)]
    hint: HintPolicy,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI game (default)
    Play,

    /// Simple CLI game without TUI
    Simple,

    /// Solve one pair with the chosen algorithm
    Solve {
        start: String,
        end: String,

        /// Show every rung and the search statistics
        #[arg(short, long)]
        verbose: bool,
    },

    /// Time all three algorithms on one pair (random pair when omitted)
    Compare {
        start: Option<String>,
        end: Option<String>,

        /// Timed runs per algorithm
        #[arg(short, long, default_value = "5")]
        runs: usize,

        /// Run the algorithms concurrently
        #[arg(long)]
        parallel: bool,
    },

    /// Compare the algorithms over many random pairs
    Survey {
        /// Number of random pairs
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,
    },

    /// List the one-letter neighbors of a word
    Neighbors { word: String },
}

fn parse_mode(s: &str) -> Result<GameMode, String> {
    s.parse().map_err(|e: word_ladder::LadderError| e.to_string())
}

fn parse_algorithm(s: &str) -> Result<Algorithm, String> {
    s.parse().map_err(|e: word_ladder::LadderError| e.to_string())
}

fn parse_hint_policy(s: &str) -> Result<HintPolicy, String> {
    s.parse().map_err(|e: word_ladder::LadderError| e.to_string())
}

/// Install the tracing subscriber
///
/// The TUI draws on stdout, so play mode logs to a file instead of the terminal.
fn init_tracing(to_file: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let installed = if to_file {
        match File::create(TUI_LOG_FILE) {
            Ok(file) => builder
                .with_writer(Arc::new(file))
                .with_ansi(false)
                .try_init(),
            Err(_) => return,
        }
    } else {
        builder.with_writer(std::io::stderr).try_init()
    };

    if let Err(err) = installed {
        eprintln!("Logging disabled: {err}");
    }
}

fn main() -> Result<()> {
    let mut cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.take().unwrap_or(Commands::Play);
    init_tracing(matches!(command, Commands::Play));

    let dictionary = load_dictionary_or_builtin(&cli.dictionary);

    match command {
        Commands::Play => run_play_command(dictionary, &cli),
        Commands::Simple => run_simple_command(dictionary, &cli),
        Commands::Solve {
            start,
            end,
            verbose,
        } => run_solve_command(&dictionary, cli.algorithm, &start, &end, verbose),
        Commands::Compare {
            start,
            end,
            runs,
            parallel,
        } => run_compare_command(dictionary, &cli, start.zip(end), runs, parallel),
        Commands::Survey { count } => run_survey_command(&dictionary, &cli, count),
        Commands::Neighbors { word } => {
            let (word, neighbors) = neighbors_of(&word, &dictionary)?;
            print_neighbors(&word, &neighbors);
            Ok(())
        }
    }
}

fn game_options(cli: &Cli) -> GameOptions {
    GameOptions {
        mode: cli.mode,
        algorithm: cli.algorithm,
        hint_policy: cli.hint,
        seed: cli.seed,
        fixed_pair: cli.pair_file.as_ref().map(load_word_pair),
    }
}

fn run_play_command(dictionary: Dictionary, cli: &Cli) -> Result<()> {
    use word_ladder::interactive::{App, run_tui};

    let app = App::new(Game::new(dictionary, game_options(cli)))?;
    run_tui(app)
}

fn run_simple_command(dictionary: Dictionary, cli: &Cli) -> Result<()> {
    let mut game = Game::new(dictionary, game_options(cli));
    run_simple(&mut game)
}

fn run_solve_command(
    dictionary: &Dictionary,
    algorithm: Algorithm,
    start: &str,
    end: &str,
    verbose: bool,
) -> Result<()> {
    let solver = Solver::new(algorithm, dictionary);
    let result = solve_pair(&solver, start, end)?;
    print_solve_result(&result, verbose);
    Ok(())
}

fn run_compare_command(
    dictionary: Dictionary,
    cli: &Cli,
    pair: Option<(String, String)>,
    runs: usize,
    parallel: bool,
) -> Result<()> {
    let config = CompareConfig {
        runs,
        parallel,
        ..CompareConfig::default()
    };

    let report = if let Some((start, end)) = pair {
        compare_algorithms(&start, &end, &dictionary, config)?
    } else {
        let mut game = Game::new(dictionary, game_options(cli));
        let (pair, mode_config) = game.random_pair()?;
        println!("Random {} pair: {pair}", cli.mode);
        compare_algorithms(
            pair.start.text(),
            pair.end.text(),
            mode_config.playable_dictionary(),
            config,
        )?
    };

    print_comparison(&report);
    Ok(())
}

fn run_survey_command(dictionary: &Dictionary, cli: &Cli, count: usize) -> Result<()> {
    println!("Comparing algorithms on {count} random {} pairs...", cli.mode);

    let config = SurveyConfig {
        mode: cli.mode,
        algorithm: cli.algorithm,
        samples: count,
        seed: cli.seed,
        ..SurveyConfig::default()
    };
    let report = run_survey(dictionary, &config)?;
    print_survey(&report);
    Ok(())
}
