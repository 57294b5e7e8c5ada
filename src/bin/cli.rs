//! Tic-Tac-Toe console game
//!
//! Play against the AI in the terminal, entering moves as 1-9.

use std::io::{self, Write};

use anyhow::Result;
use clap::Parser;
use log::LevelFilter;

use tictactoe::console::{self, ask_yes_no};
use tictactoe::{GameConfig, Player, SearchType};

/// Play tic-tac-toe against a perfect AI
#[derive(Parser, Debug)]
#[command(name = "tictactoe-cli", version, about)]
struct Args {
    /// Mark you play (x or o)
    #[arg(long, default_value_t = Player::X)]
    human: Player,

    /// Let the AI make the first move
    #[arg(long)]
    ai_first: bool,

    /// Search used by the AI (minimax or alphabeta)
    #[arg(long, default_value_t = SearchType::AlphaBeta)]
    search: SearchType,

    /// Ask who goes first and which search to use, like the classic game
    #[arg(long)]
    ask: bool,

    /// Increase log output (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    let mut config = GameConfig::new(args.human)
        .with_human_first(!args.ai_first)
        .with_search_type(args.search);

    if args.ask {
        let first = ask_yes_no("Do you want to go first?", &mut input, &mut output)?;
        let pruning = ask_yes_no("Use Alpha-Beta pruning?", &mut input, &mut output)?;
        config = config.with_human_first(first).with_search_type(if pruning {
            SearchType::AlphaBeta
        } else {
            SearchType::Minimax
        });
    }

    console::run(&config, &mut input, &mut output)?;
    output.flush()?;
    Ok(())
}
