use std::fmt;

use super::{Player, Position, HEIGHT, MAX_STONES, WIDTH};
use crate::error::MoveError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

/// Validated game state for the shell: a [`Position`] plus whose turn it is
/// and whether the game has ended. Transitions are immutable, and unlike the
/// raw `Position` every move is checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameState {
    position: Position,
    current_player: Player,
    outcome: Option<GameOutcome>,
}

impl GameState {
    /// Create initial game state
    pub fn initial() -> Self {
        GameState {
            position: Position::new(),
            current_player: Player::Red, // Red starts
            outcome: None,
        }
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to the underlying position
    pub fn position(&self) -> &Position {
        &self.position
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// Get list of legal columns (not full)
    pub fn legal_actions(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }

        (0..WIDTH)
            .filter(|&col| self.position.can_play(col))
            .collect()
    }

    /// Apply a move and return new state (immutable)
    pub fn apply_move(&self, column: usize) -> Result<GameState, MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }
        if column >= WIDTH {
            return Err(MoveError::InvalidColumn(column));
        }
        if !self.position.can_play(column) {
            return Err(MoveError::ColumnFull(column));
        }

        // The win test must run before the play, while `current` still means
        // the mover's stones.
        let outcome = if self.position.is_winning_move(column) {
            Some(GameOutcome::Winner(self.current_player))
        } else if self.position.moves() + 1 == MAX_STONES {
            Some(GameOutcome::Draw)
        } else {
            None
        };

        Ok(GameState {
            position: self.position.play(column),
            current_player: self.current_player.other(),
            outcome,
        })
    }
}

impl fmt::Display for GameState {
    /// Render the grid as text, top row first.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  0 1 2 3 4 5 6")?;
        for row in (0..HEIGHT).rev() {
            write!(f, "{} ", HEIGHT - 1 - row)?;
            for col in 0..WIDTH {
                let token = match self.position.cell(col, row) {
                    None => '.',
                    Some(true) => self.current_player.symbol(),
                    Some(false) => self.current_player.other().symbol(),
                };
                write!(f, "{token} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = GameState::initial();
        assert_eq!(state.current_player(), Player::Red);
        assert!(!state.is_terminal());
        assert_eq!(state.legal_actions(), vec![0, 1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_apply_move() {
        let state = GameState::initial();
        let new_state = state.apply_move(3).unwrap();

        assert_eq!(new_state.current_player(), Player::Yellow);
        assert_eq!(new_state.position().moves(), 1);
        // The stone at the bottom of col 3 is Red's, not the side to move's.
        assert_eq!(new_state.position().cell(3, 0), Some(false));
    }

    #[test]
    fn test_invalid_column_rejected() {
        let state = GameState::initial();
        assert_eq!(state.apply_move(7), Err(MoveError::InvalidColumn(7)));
    }

    #[test]
    fn test_full_column_rejected() {
        let mut state = GameState::initial();
        for _ in 0..HEIGHT {
            state = state.apply_move(0).unwrap();
        }
        assert_eq!(state.apply_move(0), Err(MoveError::ColumnFull(0)));
    }

    #[test]
    fn test_win_detection() {
        let mut state = GameState::initial();

        // Red wins with a horizontal line on the bottom row.
        for col in 0..4 {
            state = state.apply_move(col).unwrap(); // Red
            if col < 3 {
                state = state.apply_move(col).unwrap(); // Yellow (row above)
            }
        }

        assert!(state.is_terminal());
        assert_eq!(state.outcome(), Some(GameOutcome::Winner(Player::Red)));
        assert!(state.legal_actions().is_empty());
        assert_eq!(state.apply_move(6), Err(MoveError::GameOver));
    }

    #[test]
    fn test_vertical_win_by_yellow() {
        let mut state = GameState::initial();
        // Red spreads out, Yellow stacks col 5.
        for &col in &[0, 5, 1, 5, 2, 5, 6, 5] {
            state = state.apply_move(col).unwrap();
        }
        assert_eq!(state.outcome(), Some(GameOutcome::Winner(Player::Yellow)));
    }

    #[test]
    fn test_display_renders_grid() {
        let state = GameState::initial().apply_move(3).unwrap();
        let rendered = state.to_string();
        assert!(rendered.starts_with("  0 1 2 3 4 5 6"));
        // One Red stone at the bottom of the center column.
        assert_eq!(rendered.matches('R').count(), 1);
        assert_eq!(rendered.matches('.').count(), 41);
    }
}
