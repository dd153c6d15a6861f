/// Board width in columns.
pub const WIDTH: usize = 7;
/// Board height in playable rows.
pub const HEIGHT: usize = 6;
/// Number of stones on a completely full board.
pub const MAX_STONES: u32 = (WIDTH * HEIGHT) as u32;

/// Bits reserved per column: the playable cells plus one sentinel bit above
/// them. The sentinel is never set by a play; it marks a full column and
/// keeps the shift-based alignment tests from bleeding across columns.
const COL_STRIDE: usize = HEIGHT + 1;

/// Packed board state: 7 columns × 7 bits in a `u64`, bit 0 of each column
/// at the bottom. `current` always means "stones of the side to move" and is
/// reinterpreted after every play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    current: u64,
    mask: u64,
    moves: u32,
}

impl Position {
    /// Empty board, first player to move.
    pub fn new() -> Self {
        Position {
            current: 0,
            mask: 0,
            moves: 0,
        }
    }

    /// Number of stones played so far.
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Whether the board holds all 42 stones.
    pub fn is_full(&self) -> bool {
        self.moves == MAX_STONES
    }

    /// True iff `col` still has room for a stone.
    pub fn can_play(&self, col: usize) -> bool {
        self.mask & Self::top_mask(col) == 0
    }

    /// Drop a stone for the side to move into `col`, returning the new
    /// position. Copy-based: siblings in a search tree never share state.
    ///
    /// Precondition: `can_play(col)`. Not checked in release builds; the
    /// caller validates (see `GameState::apply_move` for the checked layer).
    pub fn play(&self, col: usize) -> Position {
        debug_assert!(self.can_play(col));
        let mut next = *self;
        // The opponent's stones become the new mover's stones.
        next.current ^= next.mask;
        // Adding the bottom bit carries up to the lowest empty cell.
        next.mask |= next.mask + Self::bottom_mask(col);
        next.moves += 1;
        next
    }

    /// True iff dropping a stone into `col` completes four in a row for the
    /// side to move. Pure; the position is not modified.
    pub fn is_winning_move(&self, col: usize) -> bool {
        let stones =
            self.current | ((self.mask + Self::bottom_mask(col)) & Self::column_mask(col));
        let stride = COL_STRIDE as u32;
        Self::aligned(stones, 1)            // vertical
            || Self::aligned(stones, stride)     // horizontal
            || Self::aligned(stones, stride - 1) // diagonal, falling
            || Self::aligned(stones, stride + 1) // diagonal, rising
    }

    /// Canonical key identifying (board, side to move) for memoization.
    ///
    /// `current + mask` is injective over reachable states: `current` is a
    /// subset of `mask`, each column occupies a 7-bit lane of which at most
    /// 6 low bits are set, so addition carries never cross a lane, and
    /// within a lane the sum `(2^h - 1) + c` determines both the column
    /// height `h` and the mover's stones `c`.
    pub fn key(&self) -> u64 {
        self.current + self.mask
    }

    /// Stone at (`col`, `row`), `row` 0 at the bottom: `None` if empty,
    /// otherwise `Some(true)` iff it belongs to the side to move.
    pub fn cell(&self, col: usize, row: usize) -> Option<bool> {
        let bit = 1u64 << (col * COL_STRIDE + row);
        if self.mask & bit == 0 {
            None
        } else {
            Some(self.current & bit != 0)
        }
    }

    /// Four consecutive bits along `stride` collapse to a nonzero result.
    fn aligned(stones: u64, stride: u32) -> bool {
        let pairs = stones & (stones >> stride);
        pairs & (pairs >> (2 * stride)) != 0
    }

    fn bottom_mask(col: usize) -> u64 {
        1u64 << (col * COL_STRIDE)
    }

    fn top_mask(col: usize) -> u64 {
        1u64 << (col * COL_STRIDE + HEIGHT)
    }

    fn column_mask(col: usize) -> u64 {
        ((1u64 << COL_STRIDE) - 1) << (col * COL_STRIDE)
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new()
    }
}
