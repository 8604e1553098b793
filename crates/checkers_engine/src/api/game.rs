//! Game lifecycle management
//!
//! Construction, setup and the low-level board mutations that keep player
//! piece counts in step with the board.

use rand::Rng;
use tracing::{debug, info};

use crate::board::Board;
use crate::config::EngineConfig;
use crate::coordinate::Coordinate;
use crate::error::{CheckersError, CheckersResult};
use crate::piece::Piece;
use crate::player::{Player, PlayerId};
use crate::types::{Checkers, Orientation, Seat};

impl Checkers {
    /// Create a game on the standard 8x8 board
    ///
    /// The board stays empty until [`Checkers::init`] is called.
    ///
    /// # Errors
    ///
    /// [`CheckersError::DuplicatePlayer`] if both players share an identity.
    pub fn new(player_one: Player, player_two: Player) -> CheckersResult<Self> {
        Self::with_config(player_one, player_two, EngineConfig::default())
    }

    /// Create a game with custom board geometry
    pub fn with_config(
        player_one: Player,
        player_two: Player,
        config: EngineConfig,
    ) -> CheckersResult<Self> {
        config.validate()?;

        if player_one.id() == player_two.id() {
            return Err(CheckersError::DuplicatePlayer {
                id: player_one.id(),
            });
        }

        let first = player_one.id();
        Ok(Self {
            player_one,
            player_two,
            current_player_turn: first,
            first_turn_player: first,
            config,
            orientation_one: Orientation::leading(config.board_size),
            orientation_two: Orientation::trailing(),
            board: Board::new(config.board_size),
        })
    }

    /// Set up a fresh game
    ///
    /// Wipes the board, picks who moves first and places every player's
    /// regular pieces. Passing `None` picks the first player at random.
    ///
    /// # Errors
    ///
    /// [`CheckersError::UnknownPlayer`] if `first_turn` is neither registered player.
    /// The game is left untouched in that case.
    pub fn init(&mut self, first_turn: Option<PlayerId>) -> CheckersResult<()> {
        self.init_with_rng(first_turn, &mut rand::rng())
    }

    /// [`Checkers::init`] with a caller-supplied random source
    pub fn init_with_rng<R: Rng + ?Sized>(
        &mut self,
        first_turn: Option<PlayerId>,
        rng: &mut R,
    ) -> CheckersResult<()> {
        let rows_needed = i32::try_from(self.config.rows_needed()).map_err(|_| {
            CheckersError::InvalidConfig {
                message: format!("{} setup rows per player", self.config.rows_needed()),
            }
        })?;

        let first = match first_turn {
            Some(id) => {
                self.seat_of(id).ok_or(CheckersError::UnknownPlayer { id })?;
                id
            }
            None if rng.random_bool(0.5) => self.player_one.id(),
            None => self.player_two.id(),
        };

        self.reset_board();
        self.current_player_turn = first;
        self.first_turn_player = first;

        let size = self.config.board_size;
        let (one, two) = if first == self.player_one.id() {
            (Orientation::leading(size), Orientation::trailing())
        } else {
            (Orientation::trailing(), Orientation::leading(size))
        };
        self.orientation_one = one;
        self.orientation_two = two;

        let home_rows = (0..rows_needed).map(|row| (row, Seat::One));
        let far_rows = (size - rows_needed..size).rev().map(|row| (row, Seat::Two));

        for (row, seat) in home_rows.chain(far_rows) {
            let owner = self.seat(seat).id();
            for col in 0..size {
                let coord = Coordinate::new(row, col);
                if !self.board.is_habitable(coord) {
                    continue;
                }
                self.add_piece(Piece::new(owner), coord)?;
            }
        }

        info!(
            "[INIT] New game: {} ({}) vs {} ({}), {} moves first",
            self.player_one.name(),
            self.player_one.pawn_count(),
            self.player_two.name(),
            self.player_two.pawn_count(),
            self.current_player().name()
        );

        Ok(())
    }

    /// Remove every piece and zero both counters
    pub fn reset_board(&mut self) {
        self.board.clear();
        self.player_one.reset_pawn_count();
        self.player_two.reset_pawn_count();
    }

    /// Place a piece and credit its owner
    ///
    /// # Errors
    ///
    /// - [`CheckersError::NotHabitable`] if `coord` is occupied, light or off the board
    /// - [`CheckersError::UnknownPlayer`] if the piece's owner is not registered
    pub fn add_piece(&mut self, piece: Piece, coord: Coordinate) -> CheckersResult<()> {
        let seat = self
            .seat_of(piece.player())
            .ok_or(CheckersError::UnknownPlayer { id: piece.player() })?;

        if !coord.in_bounds(self.config.board_size) || !self.board.place(piece, coord) {
            return Err(CheckersError::not_habitable(coord));
        }

        self.seat_mut(seat).increase_pawn_count();
        Ok(())
    }

    /// Remove the piece at `coord` and debit its owner
    ///
    /// # Errors
    ///
    /// [`CheckersError::NoPieceAt`] if the square is empty.
    pub fn remove_piece(&mut self, coord: Coordinate) -> CheckersResult<Piece> {
        let piece = self
            .board
            .take(coord)
            .ok_or_else(|| CheckersError::no_piece_at(coord))?;

        if let Some(seat) = self.seat_of(piece.player()) {
            self.seat_mut(seat).decrease_pawn_count();
        }
        Ok(piece)
    }

    /// Promote the piece at `coord` if it stands on its owner's promotion row
    ///
    /// Returns `true` when the piece is on that row (already a queen or not).
    pub fn promote_if_reached(&mut self, coord: Coordinate) -> bool {
        let Some(owner) = self.board.piece_at(coord).map(Piece::player) else {
            return false;
        };
        let Some(seat) = self.seat_of(owner) else {
            return false;
        };

        if self.seat_orientation(seat).promotion_row != coord.x {
            return false;
        }

        let board_size = self.config.board_size;
        if let Some(piece) = self.board.piece_at_mut(coord) {
            if !piece.is_queen() {
                debug!("[PROMOTION] Piece at {} becomes a queen", coord);
            }
            piece.promote(board_size);
        }
        true
    }

    pub(crate) fn toggle_turn(&mut self) {
        self.current_player_turn = if self.current_player_turn == self.player_one.id() {
            self.player_two.id()
        } else {
            self.player_one.id()
        };
    }
}
