use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use xfcheckers::core::{load_settings, save_settings, settings_path, FirstTurn};
use xfcheckers::session::{run_demo, Session, SessionOutcome};

#[derive(Parser, Debug)]
#[command(name = "xfcheckers", version, about = "Two-player checkers in the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play a game on stdin/stdout
    Play {
        /// Settings file (defaults to the platform config directory)
        #[arg(long)]
        settings: Option<PathBuf>,

        /// Who moves first, overriding the settings file
        #[arg(long, value_enum)]
        first: Option<Seat>,
    },
    /// Replay the scripted opening and print the results
    Demo,
    /// Write the current settings (or defaults) to the settings file
    InitSettings {
        #[arg(long)]
        settings: Option<PathBuf>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Seat {
    One,
    Two,
    Random,
}

impl From<Seat> for FirstTurn {
    fn from(seat: Seat) -> Self {
        match seat {
            Seat::One => FirstTurn::PlayerOne,
            Seat::Two => FirstTurn::PlayerTwo,
            Seat::Random => FirstTurn::Random,
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Play {
        settings: None,
        first: None,
    }) {
        Command::Play { settings, first } => {
            let mut game_settings = load_settings(settings.as_deref());
            if let Some(seat) = first {
                game_settings.first_turn = seat.into();
            }

            let game = game_settings
                .new_game()
                .context("failed to set up the game from settings")?;

            let stdin = io::stdin();
            let mut stdout = io::stdout();
            let mut session = Session::new(game, game_settings.show_hints);
            match session.run(stdin.lock(), &mut stdout)? {
                SessionOutcome::Won { .. } => {}
                SessionOutcome::Quit | SessionOutcome::EndOfInput => {
                    writeln!(stdout)?;
                    writeln!(stdout, "Game abandoned")?;
                }
            }
        }
        Command::Demo => {
            let mut stdout = io::stdout();
            run_demo(&mut stdout).context("demo failed")?;
        }
        Command::InitSettings { settings } => {
            let path = settings.unwrap_or_else(settings_path);
            let current = load_settings(Some(&path));
            save_settings(&current, &path)
                .with_context(|| format!("failed to write settings to {}", path.display()))?;
            println!("Settings written to {}", path.display());
        }
    }

    Ok(())
}
