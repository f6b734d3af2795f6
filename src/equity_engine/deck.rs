use rand::Rng;
use crate::equity_engine::models::Card;

/// Every card not in `excluded`, in ascending wire-code order.
///
/// The exclusion set is the caller's known cards (hero hole cards plus any
/// board cards); it is assumed duplicate-free, so the result always holds
/// `52 - excluded.len()` cards.
pub fn remaining_deck(excluded: &[Card]) -> Vec<Card> {
    let mut known = [false; 52];
    for card in excluded {
        known[card.code() as usize] = true;
    }
    (0u8..52)
        .filter(|&code| !known[code as usize])
        .filter_map(Card::from_code)
        .collect()
}

/// Draw `count` cards without replacement via a partial Fisher-Yates pass:
/// each slot `i` swaps with a uniformly chosen slot in `i..len`, so the
/// prefix is a uniform `count`-permutation of the deck. Only the prefix is
/// shuffled; a trial never needs more than 21 cards from a 50-card deck.
pub fn draw<'a, R: Rng>(deck: &'a mut [Card], count: usize, rng: &mut R) -> &'a [Card] {
    debug_assert!(count <= deck.len(), "cannot draw {count} from {}", deck.len());
    for i in 0..count {
        let j = rng.gen_range(i..deck.len());
        deck.swap(i, j);
    }
    &deck[..count]
}
