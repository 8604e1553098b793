//! Move validation and execution
//!
//! Validation is a pure read of the board. Execution runs only after the full
//! validation succeeded, so a move is applied completely or not at all.

use tracing::{debug, info, warn};

use crate::constants::MAX_PATH_OCCUPANTS;
use crate::coordinate::Coordinate;
use crate::error::{IllegalMove, MoveResult};
use crate::types::{Checkers, MoveReport};

impl Checkers {
    /// Check a move against every rule, reporting the first one broken
    ///
    /// Rules are checked in this order:
    /// 1. origin and destination differ on both axes
    /// 2. a piece stands on the origin
    /// 3. it belongs to the player on turn
    /// 4. the destination is on the board
    /// 5. the destination is habitable
    /// 6. a regular piece moves toward its promotion row
    /// 7. the path holds at most the mover and one other piece
    /// 8. that other piece, if any, belongs to the opponent
    /// 9. the move is a true diagonal
    /// 10. the distance is within reach (one extra step when capturing)
    pub fn check_move(&self, from: Coordinate, to: Coordinate) -> MoveResult<()> {
        if from.x == to.x || from.y == to.y {
            return Err(IllegalMove::NotDiagonalStep { from, to });
        }

        let piece = self
            .board
            .piece_at(from)
            .ok_or(IllegalMove::NoPiece { from })?;

        if piece.player() != self.current_player_turn {
            return Err(IllegalMove::NotYourPiece { from });
        }

        let board_size = self.config.board_size;
        if !to.in_bounds(board_size) {
            return Err(IllegalMove::OutOfBounds { to });
        }

        if !self.board.is_habitable(to) {
            return Err(IllegalMove::DestinationBlocked { to });
        }

        if !piece.is_queen() {
            let orientation = self
                .seat_of(piece.player())
                .map(|seat| self.seat_orientation(seat))
                .ok_or(IllegalMove::NotYourPiece { from })?;
            if !orientation.allows(from, to) {
                return Err(IllegalMove::WrongDirection { from, to });
            }
        }

        let occupied = self.board.occupied_on_path(from, to);
        if occupied.len() > MAX_PATH_OCCUPANTS {
            return Err(IllegalMove::TooManyPieces {
                from,
                to,
                occupied: occupied.len(),
            });
        }

        let mut max_step = piece.max_step();
        if occupied.len() == MAX_PATH_OCCUPANTS {
            max_step = (board_size as u32).min(piece.max_step() + 1);

            // Scan back from the destination, skipping the mover's own square
            let jumped = occupied.iter().rev().find(|&&coord| coord != from);
            if let Some(&at) = jumped {
                let victim = self.board.piece_at(at).map(|p| p.player());
                if victim == Some(piece.player()) {
                    return Err(IllegalMove::SelfCapture { at });
                }
            }
        }

        let dx = (to.x - from.x).unsigned_abs();
        let dy = (to.y - from.y).unsigned_abs();
        if dx != dy {
            return Err(IllegalMove::NotDiagonal { from, to });
        }

        if dx > max_step || dy > max_step {
            return Err(IllegalMove::TooFar {
                distance: dx.max(dy),
                max_step,
            });
        }

        Ok(())
    }

    /// Check if a move is legal for the player on turn
    pub fn validate_move(&self, from: Coordinate, to: Coordinate) -> bool {
        self.check_move(from, to).is_ok()
    }

    /// Validate and apply a move
    ///
    /// On success the mover is relocated, a jumped piece is removed, the mover
    /// is promoted if it reached its promotion row and the turn passes.
    ///
    /// # Errors
    ///
    /// The broken rule as an [`IllegalMove`]. Nothing changes in that case.
    pub fn try_move(&mut self, from: Coordinate, to: Coordinate) -> MoveResult<MoveReport> {
        if let Err(reason) = self.check_move(from, to) {
            debug!("[MOVE] Rejected {} -> {}: {}", from, to, reason);
            return Err(reason);
        }

        // First occupant is the mover itself, the second is the jumped piece
        let occupied = self.board.occupied_on_path(from, to);
        let jumped = occupied.get(1).copied();

        let Some(piece) = self.board.take(from) else {
            return Err(IllegalMove::NoPiece { from });
        };
        if !self.board.place(piece, to) {
            self.board.place(piece, from);
            return Err(IllegalMove::DestinationBlocked { to });
        }

        let captured = match jumped {
            Some(at) => match self.remove_piece(at) {
                Ok(victim) => Some((at, victim)),
                Err(e) => {
                    warn!("[MOVE] Jumped piece vanished at {}: {}", at, e);
                    self.board.take(to);
                    self.board.place(piece, from);
                    return Err(IllegalMove::NoPiece { from: at });
                }
            },
            None => None,
        };

        let was_queen = self.board.piece_at(to).is_some_and(|p| p.is_queen());
        self.promote_if_reached(to);
        let promoted = !was_queen && self.board.piece_at(to).is_some_and(|p| p.is_queen());

        let mover = self.current_player().name().to_string();
        self.toggle_turn();

        match captured {
            Some((at, _)) => info!("[MOVE] {} moved {} -> {}, captured {}", mover, from, to, at),
            None => info!("[MOVE] {} moved {} -> {}", mover, from, to),
        }
        if promoted {
            info!("[MOVE] {}'s piece promoted to queen at {}", mover, to);
        }
        if let Some(winner) = self.winner() {
            info!(
                "[MOVE] Game won by {}",
                self.player(winner).map(|p| p.name()).unwrap_or_default()
            );
        }

        Ok(MoveReport {
            from,
            to,
            captured,
            promoted,
        })
    }

    /// Apply a move if legal
    ///
    /// Returns `false` and leaves the game unchanged when the move is illegal.
    pub fn move_piece(&mut self, from: Coordinate, to: Coordinate) -> bool {
        self.try_move(from, to).is_ok()
    }

    /// Every destination the piece at `from` may legally move to right now
    pub fn possible_moves(&self, from: Coordinate) -> Vec<Coordinate> {
        let size = self.config.board_size;
        (0..size)
            .flat_map(|x| (0..size).map(move |y| Coordinate::new(x, y)))
            .filter(|&to| self.validate_move(from, to))
            .collect()
    }
}
