//! Monte Carlo equity estimation.
//!
//! Each trial completes the board and deals every opponent from the unseen
//! portion of the deck, scores all hands with the exhaustive evaluator, and
//! credits the hero a split-pot-aware win share. The accumulated share over
//! all trials is the win probability; the decision layer compares it to the
//! pot-odds threshold `1 / (opponents + 1)`.

use std::sync::atomic::{AtomicBool, Ordering};

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::equity_engine::deck;
use crate::equity_engine::evaluator;
use crate::equity_engine::models::{Card, EquityError, EquityReport, EquityRequest, Street};

/// How many trials run between cancellation checks.
const CANCEL_POLL_INTERVAL: u32 = 512;

/// Pot-odds break-even point against an even share of a pot with
/// `opponents + 1` players.
pub fn decision_threshold(opponents: u8) -> f64 {
    1.0 / (f64::from(opponents) + 1.0)
}

/// Estimate the hero's win probability with an explicit RNG.
///
/// Caller contract (see [`EquityRequest::validate`]): hero and board cards
/// are mutually distinct, `board.len() <= 5`, `opponents` in 1..=8 and
/// `trials > 0`. Returns a probability in [0, 1].
pub fn estimate<R: Rng>(
    hero: [Card; 2],
    board: &[Card],
    opponents: u8,
    trials: u32,
    rng: &mut R,
) -> f64 {
    run_trials(hero, board, opponents, trials, rng, None)
        .expect("estimation without a cancel flag always completes")
}

/// Like [`estimate`], but polls `cancel` every few hundred trials. On
/// cancellation the partial sum is discarded and `None` returned — a
/// partial probability is never exposed.
pub fn estimate_cancellable<R: Rng>(
    hero: [Card; 2],
    board: &[Card],
    opponents: u8,
    trials: u32,
    rng: &mut R,
    cancel: &AtomicBool,
) -> Option<f64> {
    run_trials(hero, board, opponents, trials, rng, Some(cancel))
}

/// Validate `request`, run the simulation, and attach the decision layer.
///
/// This is the single entry point callers outside the crate go through;
/// `rng_seed: Some(..)` reproduces the exact same estimate every time.
pub fn estimate_equity(request: &EquityRequest) -> Result<EquityReport, EquityError> {
    request.validate()?;

    let mut rng: StdRng = match request.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    debug!(
        "estimating equity: hero={}{} board=[{}] opponents={} trials={}",
        request.hero[0],
        request.hero[1],
        request
            .board
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(" "),
        request.opponents,
        request.trials,
    );

    let win_probability = estimate(
        request.hero,
        &request.board,
        request.opponents,
        request.trials,
        &mut rng,
    );
    let threshold = decision_threshold(request.opponents);
    debug!("win probability {win_probability:.4} against threshold {threshold:.4}");

    Ok(EquityReport {
        win_probability,
        threshold,
        should_play: win_probability >= threshold,
        street: Street::from_board_len(request.board.len()),
        opponents: request.opponents,
        trials: request.trials,
    })
}

fn run_trials<R: Rng>(
    hero: [Card; 2],
    board: &[Card],
    opponents: u8,
    trials: u32,
    rng: &mut R,
    cancel: Option<&AtomicBool>,
) -> Option<f64> {
    debug_assert!(board.len() <= 5);
    debug_assert!(trials > 0);

    // The exclusion set never changes across trials, so the base deck is
    // built once and each trial shuffles a copy of it.
    let mut excluded = Vec::with_capacity(2 + board.len());
    excluded.extend_from_slice(&hero);
    excluded.extend_from_slice(board);
    let base_deck = deck::remaining_deck(&excluded);

    let missing = 5 - board.len();
    let draw_count = missing + 2 * opponents as usize;

    let mut working = base_deck.clone();
    let mut final_board: Vec<Card> = Vec::with_capacity(5);
    let mut hand: Vec<Card> = Vec::with_capacity(7);
    let mut credit = 0.0f64;

    for trial in 0..trials {
        if let Some(flag) = cancel {
            if trial % CANCEL_POLL_INTERVAL == 0 && flag.load(Ordering::Relaxed) {
                return None;
            }
        }

        working.copy_from_slice(&base_deck);
        let drawn = deck::draw(&mut working, draw_count, rng);

        final_board.clear();
        final_board.extend_from_slice(board);
        final_board.extend_from_slice(&drawn[..missing]);

        hand.clear();
        hand.extend_from_slice(&hero);
        hand.extend_from_slice(&final_board);
        let hero_score = evaluator::best_rank(&hand);

        // Opponents receive their hole cards in draw order.
        let mut best = hero_score;
        let mut tie_count = 1u32;
        for opp in 0..opponents as usize {
            let hole = &drawn[missing + 2 * opp..missing + 2 * opp + 2];
            hand.clear();
            hand.extend_from_slice(hole);
            hand.extend_from_slice(&final_board);
            let score = evaluator::best_rank(&hand);
            if score > best {
                best = score;
                tie_count = 1;
            } else if score == best {
                tie_count += 1;
            }
        }

        if hero_score == best {
            credit += 1.0 / f64::from(tie_count);
        }
    }

    Some(credit / f64::from(trials))
}
