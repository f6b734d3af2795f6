//! Exhaustive five-card hand ranking.
//!
//! [`rank_five`] classifies exactly five cards into one of the nine hand
//! categories and packs the category plus kicker ranks into a single
//! totally-ordered [`HandScore`]. [`best_rank`] lifts that to 5–7 cards by
//! scoring every five-card subset (at most C(7,5) = 21) and keeping the
//! maximum.

use crate::equity_engine::models::{Card, HandCategory, HandScore};

/// Best five-card score among all subsets of `cards` (5 to 7 cards).
pub fn best_rank(cards: &[Card]) -> HandScore {
    let n = cards.len();
    debug_assert!((5..=7).contains(&n), "best_rank needs 5-7 cards, got {n}");

    let mut best = HandScore(0);
    for a in 0..n - 4 {
        for b in a + 1..n - 3 {
            for c in b + 1..n - 2 {
                for d in c + 1..n - 1 {
                    for e in d + 1..n {
                        let score =
                            rank_five([cards[a], cards[b], cards[c], cards[d], cards[e]]);
                        if score > best {
                            best = score;
                        }
                    }
                }
            }
        }
    }
    best
}

/// Score exactly five cards.
///
/// Category precedence, first match wins: straight flush, quads, full house,
/// flush, straight, trips, two pair, one pair, high card. The wheel
/// (A-2-3-4-5) counts as a straight with high card 5. Within a category,
/// kicker ranks break ties in the order the category defines.
pub fn rank_five(cards: [Card; 5]) -> HandScore {
    // Fixed-size count table indexed by rank (2..=14); no per-call maps.
    let mut counts = [0u8; 15];
    for card in &cards {
        counts[card.rank.0 as usize] += 1;
    }

    let is_flush = cards.iter().all(|c| c.suit == cards[0].suit);

    // Unique ranks, descending.
    let unique: Vec<u8> = (2..=14u8).rev().filter(|&r| counts[r as usize] > 0).collect();

    let mut straight_high = 0u8;
    let is_straight = unique.len() == 5
        && if unique[0] - unique[4] == 4 {
            straight_high = unique[0];
            true
        } else if unique == [14, 5, 4, 3, 2] {
            // Wheel: the ace plays low.
            straight_high = 5;
            true
        } else {
            false
        };

    if is_straight && is_flush {
        return encode(HandCategory::StraightFlush, &[straight_high]);
    }

    // Rank groups as (count, rank), largest group first, ties by rank.
    let mut groups: Vec<(u8, u8)> = unique
        .iter()
        .map(|&r| (counts[r as usize], r))
        .collect();
    groups.sort_by(|a, b| b.0.cmp(&a.0).then(b.1.cmp(&a.1)));

    if let [(4, quad), (1, kicker)] = groups[..] {
        return encode(HandCategory::FourOfAKind, &[quad, kicker]);
    }
    if let [(3, trips), (2, pair)] = groups[..] {
        return encode(HandCategory::FullHouse, &[trips, pair]);
    }
    if is_flush {
        return encode(HandCategory::Flush, &unique);
    }
    if is_straight {
        return encode(HandCategory::Straight, &[straight_high]);
    }
    match groups[..] {
        [(3, trips), (1, hi), (1, lo)] => encode(HandCategory::ThreeOfAKind, &[trips, hi, lo]),
        [(2, hi), (2, lo), (1, kicker)] => encode(HandCategory::TwoPair, &[hi, lo, kicker]),
        [(2, pair), (1, k1), (1, k2), (1, k3)] => {
            encode(HandCategory::OnePair, &[pair, k1, k2, k3])
        }
        _ => encode(HandCategory::HighCard, &unique),
    }
}

/// Pack category and kickers as base-15 digits; missing kickers are zero.
fn encode(category: HandCategory, kickers: &[u8]) -> HandScore {
    let mut score = category as u32;
    for i in 0..5 {
        score = score * 15 + u32::from(kickers.get(i).copied().unwrap_or(0));
    }
    HandScore(score)
}
