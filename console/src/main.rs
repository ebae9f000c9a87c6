mod commands;
mod config;
mod game_loop;
mod input;
mod render;

use clap::{Parser, Subcommand, ValueEnum};
use std::io;
use std::path::PathBuf;
use tictactoe_common::config::{ConfigSerializer, YamlConfigSerializer};
use tictactoe_common::tictactoe::{
    FirstPlayerMode, Side, TicTacToeSession, TicTacToeSessionSettings,
};
use tictactoe_common::{log, logger};

use config::{CONFIG_FILE, Config, get_config_manager};
use game_loop::{GameLoopOptions, GameOutcome, Tally, run_game};

#[derive(Parser)]
#[command(name = "tictactoe", about = "Play tic-tac-toe against an exact minimax opponent")]
struct Args {
    #[arg(long)]
    use_log_prefix: bool,

    #[arg(long, default_value = CONFIG_FILE)]
    config: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Play against the AI (default)
    Play {
        #[arg(long, value_enum)]
        first: Option<FirstPlayerArg>,
    },
    /// Let the AI play both sides
    SelfPlay {
        /// Starting position, e.g. `X...O....`
        #[arg(long)]
        from: Option<String>,
        #[arg(long)]
        all_openings: bool,
    },
    /// Score every legal move of a position
    Analyze { board: String },
    /// Manage the config file
    Config {
        #[arg(long)]
        write_default: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum FirstPlayerArg {
    Ai,
    Human,
    Random,
}

impl From<FirstPlayerArg> for FirstPlayerMode {
    fn from(arg: FirstPlayerArg) -> Self {
        match arg {
            FirstPlayerArg::Ai => FirstPlayerMode::Ai,
            FirstPlayerArg::Human => FirstPlayerMode::Human,
            FirstPlayerArg::Random => FirstPlayerMode::Random,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Console".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config_manager = get_config_manager(&args.config);

    if let Some(Command::Config { write_default }) = &args.command {
        if *write_default {
            config_manager.set_config(&Config::default())?;
            log!("Wrote default config to {}", args.config.display());
        } else {
            let config = config_manager.get_config()?;
            print!("{}", YamlConfigSerializer::new().serialize(&config)?);
        }
        return Ok(());
    }

    let config = config_manager.get_config()?;
    log!("Loaded config from {}", args.config.display());

    let stdout = io::stdout();
    let mut output = stdout.lock();

    match args.command {
        None => play(&config, None, &mut output)?,
        Some(Command::Play { first }) => play(&config, first.map(Into::into), &mut output)?,
        Some(Command::SelfPlay { from, all_openings }) => {
            commands::run_self_play(from.as_deref(), all_openings, &mut output)?
        }
        Some(Command::Analyze { board }) => {
            commands::run_analyze(&board, &config.analysis, &mut output)?
        }
        Some(Command::Config { .. }) => {}
    }

    Ok(())
}

fn play<W: io::Write>(
    config: &Config,
    first: Option<FirstPlayerMode>,
    output: &mut W,
) -> Result<(), String> {
    let settings = TicTacToeSessionSettings {
        ai_side: Side::Maximizer,
        first_player_mode: first.unwrap_or(config.game.first_player),
    };
    let mut session = TicTacToeSession::new(&settings);
    let options = GameLoopOptions {
        show_search_stats: config.game.show_search_stats,
    };

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut tally = Tally::default();

    for round in 1..=config.game.rounds {
        if round > 1 {
            session.reset();
        }
        let first_player = if session.is_ai_turn() { "AI" } else { "human" };
        log!(
            "Starting game {} of {}, {} moves first",
            round,
            config.game.rounds,
            first_player
        );

        let outcome = run_game(&mut session, &mut input, output, &options)?;
        log!(
            "Game {} finished after {} moves: {:?}",
            round,
            session.history().len(),
            outcome
        );

        if outcome == GameOutcome::Abandoned {
            break;
        }
        tally.record(outcome);
    }

    if config.game.rounds > 1 {
        writeln!(
            output,
            "AI wins: {}, your wins: {}, ties: {}",
            tally.ai_wins, tally.human_wins, tally.ties
        )
        .map_err(|e| format!("Console I/O failed: {}", e))?;
    }

    Ok(())
}
