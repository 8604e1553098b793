//! Board representation
//!
//! A sparse map from [`Coordinate`] to [`Piece`]: only occupied squares are
//! present. The board itself never touches player counters; the engine wraps
//! [`Board::place`] and [`Board::take`] with that bookkeeping.
//!
//! Invariant: every key is a dark square (`x` and `y` share parity).

use std::collections::BTreeMap;

use crate::coordinate::Coordinate;
use crate::piece::Piece;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: i32,
    squares: BTreeMap<Coordinate, Piece>,
}

impl Board {
    pub fn new(size: i32) -> Self {
        Self {
            size,
            squares: BTreeMap::new(),
        }
    }

    /// Side length
    pub fn size(&self) -> i32 {
        self.size
    }

    /// Read-only view of every occupied square
    pub fn as_map(&self) -> &BTreeMap<Coordinate, Piece> {
        &self.squares
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Coordinate, &Piece)> {
        self.squares.iter()
    }

    pub fn len(&self) -> usize {
        self.squares.len()
    }

    pub fn is_empty(&self) -> bool {
        self.squares.is_empty()
    }

    /// Piece at `coord`, if any. Off-board coordinates are simply empty.
    #[inline]
    pub fn piece_at(&self, coord: Coordinate) -> Option<&Piece> {
        self.squares.get(&coord)
    }

    #[inline]
    pub(crate) fn piece_at_mut(&mut self, coord: Coordinate) -> Option<&mut Piece> {
        self.squares.get_mut(&coord)
    }

    /// Check if a piece could rest on `coord`: unoccupied and dark
    #[inline]
    pub fn is_habitable(&self, coord: Coordinate) -> bool {
        !self.squares.contains_key(&coord) && coord.is_dark()
    }

    /// Occupied coordinates on the line from `start` to `dest`, both included,
    /// in path order.
    ///
    /// The walk length is the row distance and each axis moves by `+1` or `-1`
    /// per step. Inputs that are not a true diagonal still produce a walk;
    /// callers check the diagonal separately. Only occupied squares are
    /// visited, so any pair of `i32` coordinates is accepted.
    pub fn occupied_on_path(&self, start: Coordinate, dest: Coordinate) -> Vec<Coordinate> {
        let x_step: i64 = if start.x > dest.x { -1 } else { 1 };
        let y_step: i64 = if start.y > dest.y { -1 } else { 1 };
        let distance = i64::from(start.x.abs_diff(dest.x));

        let mut on_path: Vec<(i64, Coordinate)> = self
            .squares
            .keys()
            .filter_map(|&coord| {
                // Step index along the walk, taken from the row axis
                let step = (i64::from(coord.x) - i64::from(start.x)) * x_step;
                let dy = i64::from(coord.y) - i64::from(start.y);
                ((0..=distance).contains(&step) && dy == step * y_step).then_some((step, coord))
            })
            .collect();

        on_path.sort_unstable_by_key(|(step, _)| *step);
        on_path.into_iter().map(|(_, coord)| coord).collect()
    }

    /// Insert a piece. Rejects non-habitable squares without mutating.
    pub(crate) fn place(&mut self, piece: Piece, coord: Coordinate) -> bool {
        if !self.is_habitable(coord) {
            return false;
        }
        self.squares.insert(coord, piece);
        true
    }

    pub(crate) fn take(&mut self, coord: Coordinate) -> Option<Piece> {
        self.squares.remove(&coord)
    }

    pub(crate) fn clear(&mut self) {
        self.squares.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::Player;

    fn board_with(coords: &[(i32, i32)]) -> Board {
        let owner = Player::new("first").id();
        let mut board = Board::new(8);
        for &(x, y) in coords {
            assert!(board.place(Piece::new(owner), Coordinate::new(x, y)));
        }
        board
    }

    #[test]
    fn test_habitable_requires_dark_and_empty() {
        let board = board_with(&[(2, 2)]);
        assert!(!board.is_habitable(Coordinate::new(2, 2)), "Occupied square");
        assert!(!board.is_habitable(Coordinate::new(2, 3)), "Light square");
        assert!(board.is_habitable(Coordinate::new(3, 3)), "Empty dark square");
    }

    #[test]
    fn test_habitable_implies_dark_everywhere() {
        let board = board_with(&[(0, 0), (1, 1), (5, 3)]);
        for x in -2..10 {
            for y in -2..10 {
                let coord = Coordinate::new(x, y);
                if board.is_habitable(coord) {
                    assert_eq!((x + y).rem_euclid(2), 0, "{coord} should be dark");
                }
            }
        }
    }

    #[test]
    fn test_occupied_on_path_extreme_coordinates() {
        let board = board_with(&[(0, 0), (3, 3)]);

        let path = board.occupied_on_path(
            Coordinate::new(i32::MIN, i32::MIN),
            Coordinate::new(i32::MAX, i32::MAX),
        );
        assert_eq!(path, vec![Coordinate::new(0, 0), Coordinate::new(3, 3)]);

        let reversed = board.occupied_on_path(
            Coordinate::new(i32::MAX, i32::MAX),
            Coordinate::new(i32::MIN, i32::MIN),
        );
        assert_eq!(reversed, vec![Coordinate::new(3, 3), Coordinate::new(0, 0)]);

        // Row walk is long but the column runs off before reaching any piece
        let missed = board.occupied_on_path(Coordinate::new(i32::MIN, 5), Coordinate::new(i32::MAX, 0));
        assert!(missed.is_empty());
    }

    #[test]
    fn test_place_rejects_light_square() {
        let mut board = Board::new(8);
        let owner = Player::new("first").id();
        assert!(!board.place(Piece::new(owner), Coordinate::new(0, 1)));
        assert!(board.is_empty());
    }

    #[test]
    fn test_occupied_on_path_in_order() {
        let board = board_with(&[(3, 3), (4, 4), (6, 6)]);
        let path = board.occupied_on_path(Coordinate::new(3, 3), Coordinate::new(6, 6));
        assert_eq!(
            path,
            vec![
                Coordinate::new(3, 3),
                Coordinate::new(4, 4),
                Coordinate::new(6, 6)
            ]
        );

        let reversed = board.occupied_on_path(Coordinate::new(6, 6), Coordinate::new(3, 3));
        assert_eq!(reversed.first(), Some(&Coordinate::new(6, 6)));
        assert_eq!(reversed.last(), Some(&Coordinate::new(3, 3)));
    }

    #[test]
    fn test_occupied_on_path_mixed_directions() {
        let board = board_with(&[(5, 1), (4, 2)]);
        let path = board.occupied_on_path(Coordinate::new(5, 1), Coordinate::new(3, 3));
        assert_eq!(path, vec![Coordinate::new(5, 1), Coordinate::new(4, 2)]);
    }

    #[test]
    fn test_occupied_on_path_non_diagonal_walks_by_row_distance() {
        let board = board_with(&[(2, 2), (3, 3)]);
        // Column delta is 4 but the walk still takes one step per row
        let path = board.occupied_on_path(Coordinate::new(2, 2), Coordinate::new(4, 6));
        assert_eq!(path, vec![Coordinate::new(2, 2), Coordinate::new(3, 3)]);
    }
}
