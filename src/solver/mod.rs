//! The search engine: fail-soft negamax with alpha-beta pruning, theoretical
//! score-window narrowing, static center-out move ordering, and memoization
//! through a transposition table.
//!
//! Scores are mate-distance encoded: positive is a forced win for the side
//! to move, larger meaning sooner; 0 is a proven draw; negative is a forced
//! loss, symmetric in magnitude. A win needs at least 4 own stones on the
//! board, which caps every true score at ±18 on the 7×6 grid.

mod table;

pub use table::{Bound, TranspositionTable, TtEntry};

use log::debug;

use crate::config::SolverConfig;
use crate::game::{Position, HEIGHT, MAX_STONES, WIDTH};

/// Score of the slowest possible forced loss.
pub const MIN_SCORE: i32 = -((WIDTH * HEIGHT) as i32) / 2 + 3;
/// Score of the fastest possible forced win.
pub const MAX_SCORE: i32 = ((WIDTH * HEIGHT) as i32 + 1) / 2 - 3;

/// Static column visit order: center first, alternating outward. Central
/// columns sit on more winning lines, so trying them first raises the
/// alpha-beta cutoff rate without any per-position bookkeeping.
pub const EXPLORATION_ORDER: [usize; WIDTH] = [3, 4, 2, 5, 1, 6, 0];

/// Exact solver for one search session. Owns the transposition table and the
/// node counter, so independent queries never share ambient state.
#[derive(Debug)]
pub struct Solver {
    table: TranspositionTable,
    nodes: u64,
    log_interval: u64,
}

impl Solver {
    pub fn new() -> Self {
        Self::with_config(&SolverConfig::default())
    }

    pub fn with_config(config: &SolverConfig) -> Self {
        Solver {
            table: TranspositionTable::with_capacity(config.table_capacity),
            nodes: 0,
            log_interval: config.log_interval,
        }
    }

    /// Nodes visited by the most recent query.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// The memoization cache, for diagnostics.
    pub fn table(&self) -> &TranspositionTable {
        &self.table
    }

    /// Exact value of `pos` for the side to move, searched over the full
    /// score window. Runs to completion; there is no partial result.
    pub fn solve(&mut self, pos: &Position) -> i32 {
        self.nodes = 0;
        let score = self.negamax(*pos, -MAX_SCORE, MAX_SCORE);
        debug!(
            "solved to score {score} ({} nodes, {} table entries)",
            self.nodes,
            self.table.len()
        );
        score
    }

    /// Best column for the side to move, or `None` if the board is full.
    ///
    /// The empty board short-circuits to the center column by symmetry, an
    /// immediately winning column is returned without search, and ties break
    /// toward the most central column tried first.
    pub fn best_move(&mut self, pos: &Position) -> Option<usize> {
        self.nodes = 0;
        if pos.moves() == 0 {
            return Some(WIDTH / 2);
        }

        let mut best: Option<(usize, i32)> = None;
        for col in EXPLORATION_ORDER {
            if !pos.can_play(col) {
                continue;
            }
            if pos.is_winning_move(col) {
                return Some(col);
            }
            let floor = best.map_or(MIN_SCORE, |(_, score)| score);
            let score = -self.negamax(pos.play(col), -MAX_SCORE, -floor);
            if best.is_none() || score > floor {
                best = Some((col, score));
            }
        }

        if let Some((col, score)) = best {
            debug!("best move {col} scores {score} ({} nodes)", self.nodes);
        }
        best.map(|(col, _)| col)
    }

    fn negamax(&mut self, pos: Position, mut alpha: i32, mut beta: i32) -> i32 {
        self.nodes += 1;
        if self.log_interval > 0 && self.nodes % self.log_interval == 0 {
            debug!("{} nodes searched...", self.nodes);
        }

        if pos.is_full() {
            return 0; // draw
        }

        let remaining = (MAX_STONES - pos.moves()) as i8;
        let key = pos.key();
        if let Some(entry) = self.table.probe(key, remaining) {
            let value = i32::from(entry.value);
            match entry.bound {
                Bound::Exact => return value,
                Bound::Lower => {
                    if value >= beta {
                        return value;
                    }
                    if value > alpha {
                        alpha = value;
                    }
                }
                Bound::Upper => {
                    if value <= alpha {
                        return value;
                    }
                    if value < beta {
                        beta = value;
                    }
                }
            }
        }

        // A win in one ply dominates any deeper line, so don't recurse.
        for col in EXPLORATION_ORDER {
            if pos.can_play(col) && pos.is_winning_move(col) {
                return (MAX_STONES as i32 + 1 - pos.moves() as i32) / 2;
            }
        }

        // No immediate win exists, so the best reachable score is bounded by
        // a win two plies from now. An empty window is already proven.
        let max_possible = (MAX_STONES as i32 - 1 - pos.moves() as i32) / 2;
        if beta > max_possible {
            beta = max_possible;
            if alpha >= beta {
                return beta;
            }
        }

        let alpha_in = alpha;
        let mut best = MIN_SCORE;
        for col in EXPLORATION_ORDER {
            if !pos.can_play(col) {
                continue;
            }
            let score = -self.negamax(pos.play(col), -beta, -alpha);
            if score >= beta {
                self.table.store(key, score, remaining, Bound::Lower);
                return score;
            }
            if score > best {
                best = score;
            }
            if score > alpha {
                alpha = score;
            }
        }

        let bound = if best <= alpha_in { Bound::Upper } else { Bound::Exact };
        self.table.store(key, best, remaining, bound);
        best
    }
}

impl Default for Solver {
    fn default() -> Self {
        Self::new()
    }
}
