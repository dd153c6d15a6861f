//! # Connect Four Solver
//!
//! A perfect-play solver for standard 7×6 Connect Four. Given any reachable
//! position it computes the exact game-theoretic value (win, draw, or loss,
//! with mate distance) and the best move, using a bitboard position encoding
//! and negamax search with alpha-beta pruning, score-window narrowing, and a
//! transposition table. This is an exact solver, not a heuristic evaluator:
//! a query either proves a value or does not return.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: bitboard position, player, state machine
//! - [`solver`] — Search engine: negamax, move ordering, transposition table
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod solver;
