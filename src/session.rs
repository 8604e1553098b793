//! Text session driver
//!
//! Drives one game over any line-based input/output pair. Each line is a
//! command; illegal moves are reported and the player is asked again.
//!
//! # Commands
//!
//! - `x,y x,y` - move a piece (`x` is the row, `y` the column)
//! - `moves x,y` - list legal destinations for the piece at `x,y`
//! - `pieces` - list every piece on the board
//! - `status` - current player and piece counts
//! - `help`, `quit`

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use checkers_engine::{Checkers, Coordinate, GameStatus, ParseCoordinateError, Piece, Player, Role};
use thiserror::Error;
use tracing::debug;

use crate::core::CoreResult;

/// One parsed input line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move { from: Coordinate, to: Coordinate },
    Moves(Coordinate),
    Pieces,
    Status,
    Help,
    Quit,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("empty command")]
    Empty,

    #[error("unknown command `{0}`, type `help`")]
    Unknown(String),

    #[error(transparent)]
    Coordinate(#[from] ParseCoordinateError),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let words: Vec<&str> = line
            .split_whitespace()
            .filter(|word| *word != "->")
            .collect();

        match words.as_slice() {
            [] => Err(CommandError::Empty),
            ["quit" | "exit"] => Ok(Command::Quit),
            ["help"] => Ok(Command::Help),
            ["status"] => Ok(Command::Status),
            ["pieces"] => Ok(Command::Pieces),
            ["moves", at] => Ok(Command::Moves(at.parse()?)),
            [from, to] => Ok(Command::Move {
                from: from.parse()?,
                to: to.parse()?,
            }),
            _ => Err(CommandError::Unknown(line.trim().to_string())),
        }
    }
}

/// How a session ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    Won { winner: String },
    Quit,
    EndOfInput,
}

pub struct Session {
    game: Checkers,
    show_hints: bool,
}

impl Session {
    pub fn new(game: Checkers, show_hints: bool) -> Self {
        Self { game, show_hints }
    }

    pub fn game(&self) -> &Checkers {
        &self.game
    }

    /// Read commands until the game is won, the player quits or input ends
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, output: &mut W) -> io::Result<SessionOutcome> {
        let mut lines = input.lines();

        loop {
            write!(output, "{} to move> ", self.game.current_player().name())?;
            output.flush()?;

            let Some(line) = lines.next().transpose()? else {
                return Ok(SessionOutcome::EndOfInput);
            };

            let command = match line.parse::<Command>() {
                Ok(command) => command,
                Err(CommandError::Empty) => continue,
                Err(e) => {
                    writeln!(output, "error: {}", e)?;
                    continue;
                }
            };

            match command {
                Command::Quit => return Ok(SessionOutcome::Quit),
                Command::Help => write_help(output)?,
                Command::Status => self.write_status(output)?,
                Command::Pieces => write_pieces(&self.game, output)?,
                Command::Moves(at) => self.write_moves(at, output)?,
                Command::Move { from, to } => {
                    if let Some(outcome) = self.play(from, to, output)? {
                        return Ok(outcome);
                    }
                }
            }
        }
    }

    fn play<W: Write>(&mut self, from: Coordinate, to: Coordinate, output: &mut W) -> io::Result<Option<SessionOutcome>> {
        let mover = self.game.current_player().name().to_string();

        match self.game.try_move(from, to) {
            Ok(report) => {
                write!(output, "ok: {} moved {} -> {}", mover, report.from, report.to)?;
                if let Some((at, _)) = report.captured {
                    write!(output, ", captured {}", at)?;
                }
                if report.promoted {
                    write!(output, ", promoted to queen")?;
                }
                writeln!(output)?;
            }
            Err(reason) => {
                writeln!(output, "illegal: {}", reason)?;
                if self.show_hints {
                    self.write_moves(from, output)?;
                }
                return Ok(None);
            }
        }

        if let GameStatus::Won { winner } = self.game.status() {
            let winner = self
                .game
                .player(winner)
                .map(|p| p.name().to_string())
                .unwrap_or_default();
            debug!("[SESSION] Game over, {} wins", winner);
            writeln!(output, "{} wins!", winner)?;
            return Ok(Some(SessionOutcome::Won { winner }));
        }

        Ok(None)
    }

    fn write_moves<W: Write>(&self, at: Coordinate, output: &mut W) -> io::Result<()> {
        let destinations = self.game.possible_moves(at);
        if destinations.is_empty() {
            return writeln!(output, "hint: no legal moves from {}", at);
        }

        let listed: Vec<String> = destinations.iter().map(ToString::to_string).collect();
        writeln!(output, "hint: legal moves from {}: {}", at, listed.join(" "))
    }

    fn write_status<W: Write>(&self, output: &mut W) -> io::Result<()> {
        writeln!(output, "turn: {}", self.game.current_player().name())?;
        write_counts(&self.game, output)
    }
}

fn write_help<W: Write>(output: &mut W) -> io::Result<()> {
    writeln!(output, "commands:")?;
    writeln!(output, "  x,y x,y    move a piece (x = row, y = column)")?;
    writeln!(output, "  moves x,y  list legal destinations")?;
    writeln!(output, "  pieces     list every piece")?;
    writeln!(output, "  status     current player and piece counts")?;
    writeln!(output, "  quit")
}

fn write_counts<W: Write>(game: &Checkers, output: &mut W) -> io::Result<()> {
    for player in [game.player_one(), game.player_two()] {
        writeln!(output, "{}: {} pieces", player.name(), player.pawn_count())?;
    }
    Ok(())
}

fn owner_name<'a>(game: &'a Checkers, piece: &Piece) -> &'a str {
    game.player(piece.player()).map(Player::name).unwrap_or("?")
}

/// One line per piece: row, column, owner and role
pub fn write_pieces<W: Write>(game: &Checkers, output: &mut W) -> io::Result<()> {
    for (coord, piece) in game.board().iter() {
        let role = match piece.role() {
            Role::Regular => "regular",
            Role::Queen => "queen",
        };
        writeln!(
            output,
            "Row: {}, Col: {}, Player: {}, Role: {}",
            coord.x,
            coord.y,
            owner_name(game, piece),
            role
        )?;
    }
    Ok(())
}

/// Replay the scripted opening: a few rejected moves, two steps and a capture
pub fn run_demo<W: Write>(output: &mut W) -> CoreResult<()> {
    let one = Player::new("first");
    let first = one.id();
    let mut game = Checkers::new(one, Player::new("second"))?;
    game.init(Some(first))?;
    writeln!(output, "Current player: {}", game.current_player().name())?;

    let script: [(&str, (i32, i32), (i32, i32)); 7] = [
        ("Move into an occupied coordinate", (0, 0), (1, 1)),
        ("Move other player's piece", (7, 7), (6, 6)),
        ("Move straight while only diagonals are allowed", (2, 2), (3, 2)),
        ("Move first player's piece diagonally", (2, 2), (3, 3)),
        ("Move second player's piece diagonally", (5, 5), (4, 4)),
        ("Move into a square held by the other player", (3, 3), (4, 4)),
        ("Jump and capture the piece on 4,4", (3, 3), (5, 5)),
    ];

    for (label, from, to) in script {
        let applied = game.move_piece(from.into(), to.into());
        writeln!(
            output,
            "{} {} -> {}: {}",
            label,
            Coordinate::from(from),
            Coordinate::from(to),
            applied
        )?;
    }

    write_counts(&game, output)?;
    write_pieces(&game, output)?;
    Ok(())
}
