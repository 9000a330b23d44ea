//! Mastermind - CLI
//!
//! Console and full-screen Mastermind with automated codebreakers.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use mastermind::{
    commands::{
        PlayConfig, SolveConfig, analyze_code, print_test_all_statistics, random_secrets,
        run_assist, run_benchmark, run_play, run_test_all, solve_code,
    },
    console::Console,
    core::Code,
    game::{GameConfig, Role},
    output::{print_analysis_result, print_benchmark_result, print_solve_result},
    solver::{Solver, StrategyType},
};
use rand::SeedableRng;
use rand::rngs::StdRng;

#[derive(Parser)]
#[command(
    name = "mastermind",
    about = "Mastermind in the terminal, with automated codebreakers",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Strategy: narrowing (default), cycling, random, entropy, minimax
    #[arg(short, long, global = true, default_value = "narrowing")]
    strategy: String,

    /// Guesses allowed per game
    #[arg(short = 'g', long, global = true, default_value_t = mastermind::game::DEFAULT_MAX_GUESSES)]
    max_guesses: usize,

    /// Seed for secrets and the random strategy
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,
}

#[derive(Subcommand)]
enum Commands {
    /// Console game against the computer (default)
    Play {
        /// Play as codemaker or codebreaker instead of being asked
        #[arg(short, long)]
        role: Option<Role>,

        /// As codemaker, keep the secret to yourself and score each guess
        #[arg(long)]
        hidden: bool,
    },

    /// Get guess suggestions for a game played elsewhere
    Assist,

    /// Solve a specific secret code
    Solve {
        /// The secret, e.g. "royg" or "red orange yellow green"
        code: String,

        /// Show candidate counts and entropy per turn
        #[arg(short, long)]
        details: bool,
    },

    /// Analyze a code as an opening guess
    Analyze {
        /// Code to analyze
        code: String,
    },

    /// Benchmark solver performance on random secrets
    Benchmark {
        /// Number of random secrets to test
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,
    },

    /// Test solver on every possible secret
    TestAll {
        /// Limit number of secrets to test
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Full-screen codebreaker game
    Tui,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.verbose.log_level_filter())
        .parse_default_env()
        .init();

    let config = GameConfig::new(cli.max_guesses).context("invalid --max-guesses")?;
    let strategy = StrategyType::from_name(&cli.strategy, cli.seed)?;
    let solver = Solver::new(strategy);
    log::debug!("using {} strategy", solver.strategy());

    let mut rng = cli
        .seed
        .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);

    // Default to the console game if no command given
    let command = cli.command.unwrap_or(Commands::Play {
        role: None,
        hidden: false,
    });

    match command {
        Commands::Play { role, hidden } => {
            let play = PlayConfig {
                role,
                hidden_secret: hidden,
                game: config,
            };
            run_play(&mut Console::stdio(), &solver, &mut rng, play)
        }
        Commands::Assist => run_assist(&mut Console::stdio(), &solver),
        Commands::Solve { code, details } => {
            let secret = parse_code(&code)?;
            let result = solve_code(&SolveConfig { secret, game: config }, &solver)?;
            print_solve_result(&result, details);
            Ok(())
        }
        Commands::Analyze { code } => {
            let code = parse_code(&code)?;
            print_analysis_result(&analyze_code(&code, solver.guess_pool()));
            Ok(())
        }
        Commands::Benchmark { count } => {
            println!(
                "Running benchmark on {count} random secrets with the {} strategy...",
                solver.strategy()
            );
            let secrets = random_secrets(&mut rng, count);
            print_benchmark_result(&run_benchmark(&solver, &secrets, config));
            Ok(())
        }
        Commands::TestAll { limit } => {
            println!("\n{}", "═".repeat(70));
            println!(" Comprehensive Mastermind Solver Test ");
            println!("{}", "═".repeat(70));
            println!("\nStrategy: {}", solver.strategy());
            println!("Guess budget: {}\n", config.max_guesses);

            let stats = run_test_all(&solver, limit, config);
            print_test_all_statistics(&stats);
            Ok(())
        }
        Commands::Tui => {
            use mastermind::interactive::{App, run_tui};

            run_tui(App::new(solver, config, rng))
        }
    }
}

fn parse_code(text: &str) -> Result<Code> {
    text.parse()
        .with_context(|| format!("'{text}' is not a valid code"))
}
