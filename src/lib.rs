//! # holdem_equity
//!
//! A fully offline, deterministic Texas Hold'em win-probability estimator.
//!
//! Given the hero's two hole cards, any known community cards, and a number
//! of opponents with unknown hands, the engine runs a Monte Carlo
//! simulation over the unseen cards and reports the probability of winning
//! the pot (split pots counted fractionally), together with a play/fold
//! recommendation against the pot-odds threshold `1 / (opponents + 1)`.
//!
//! ## How it works
//!
//! 1. Build an [`EquityRequest`] with the hero's cards, the known board,
//!    the opponent count, the number of trials, and an optional RNG seed.
//! 2. Call [`estimate_equity`] — the engine removes the known cards from
//!    the deck and, for each trial, deals the missing board cards and every
//!    opponent's hole cards without replacement, scores each hand's best
//!    five-card combination, and credits the hero a split-pot-aware win
//!    share.
//! 3. The returned [`EquityReport`] carries the win probability, the
//!    pot-odds threshold, and the play/fold recommendation — ready for any
//!    caller to display.
//!
//! ## Key features
//!
//! - **Deterministic**: pass `rng_seed: Some(u64)` to reproduce the exact
//!   same estimate every time — useful for tests and regression tracking.
//! - **Split-pot aware**: a trial where the hero ties the best hand with
//!   `k` others credits `1/(k+1)`, not a full win.
//! - **Total over valid inputs**: [`EquityRequest::validate`] rejects
//!   malformed shapes and duplicate cards up front; the simulation itself
//!   never fails and always returns a probability in [0, 1].
//! - **Cancellable**: [`equity_engine::estimate_cancellable`] polls a flag
//!   between batches of trials and discards partial sums on cancellation.
//!
//! ## Quick start
//!
//! ```rust
//! use holdem_equity::{estimate_equity, Card, EquityRequest};
//!
//! // Pocket aces, no board yet, one opponent:
//! let hero = [Card::from_code(12).unwrap(), Card::from_code(25).unwrap()];
//! let mut request = EquityRequest::new(hero);
//! request.rng_seed = Some(42);
//!
//! let report = estimate_equity(&request).expect("request is well-formed");
//! assert!(report.win_probability >= 0.0 && report.win_probability <= 1.0);
//! assert!(report.should_play); // ~85% win probability against a 50% threshold
//! ```

pub mod client_adapter;
pub mod equity_engine;

// Convenience re-exports so callers can use `holdem_equity::estimate_equity`
// directly without reaching into `equity_engine::`.
pub use equity_engine::{
    decision_threshold, estimate_equity, Card, EquityError, EquityReport, EquityRequest,
    HandCategory, HandScore, Rank, Street, Suit,
};
