//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `make_unmake.rs` - Make/undo move correctness
//! - `movegen.rs` - Pseudo-legal and legal move generation
//! - `castling.rs` - Castling availability and rights bookkeeping
//! - `eval.rs` - Material evaluation and terminal scores
//! - `search.rs` - Negamax search behavior
//! - `perft.rs` - Node-count tests for move generation
//! - `proptest.rs` - Property-based tests

mod castling;
mod eval;
mod perft;
