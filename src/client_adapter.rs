//! Data-level seam to the (out-of-scope) presentation layer.
//!
//! The surrounding clients speak in card tokens — a rank token (`1`–`13`,
//! or `a`/`j`/`q`/`k`, case-insensitive, where 1 means Ace) followed by a
//! suit letter (`s`/`h`/`d`/`c`) — and in raw 0..51 wire codes. This module
//! translates both into [`Card`]s (lifting Ace from rank 1 to rank 14 before
//! anything touches the engine), applies the caller-side precondition checks
//! the engine contract demands, and renders an [`EquityReport`] as the JSON
//! shape clients display.

use serde_json::{json, Value};

use crate::equity_engine::models::{Card, EquityError, EquityRequest, EquityReport, Rank, Suit};

fn suit_from_letter(letter: char) -> Option<Suit> {
    match letter.to_ascii_lowercase() {
        's' => Some(Suit::Spades),
        'h' => Some(Suit::Hearts),
        'd' => Some(Suit::Diamonds),
        'c' => Some(Suit::Clubs),
        _ => None,
    }
}

/// Try to read one card token at the start of `chars`.
/// Returns the card and how many characters the token used.
fn match_card(chars: &[char]) -> Option<(Card, usize)> {
    let first = chars.first()?.to_ascii_lowercase();

    // Candidate client ranks (1..=13, 1 = Ace) with their token lengths,
    // longest token first so "10"-"13" win over a bare "1".
    let mut candidates: [(u8, usize); 2] = [(0, 0); 2];
    let mut n = 0;
    match first {
        'a' => { candidates[0] = (1, 1); n = 1; }
        'j' => { candidates[0] = (11, 1); n = 1; }
        'q' => { candidates[0] = (12, 1); n = 1; }
        'k' => { candidates[0] = (13, 1); n = 1; }
        _ if first.is_ascii_digit() => {
            let d1 = first as u8 - b'0';
            if let Some(d2) = chars.get(1).filter(|c| c.is_ascii_digit()) {
                let two = d1 * 10 + (*d2 as u8 - b'0');
                if (1..=13).contains(&two) {
                    candidates[n] = (two, 2);
                    n += 1;
                }
            }
            if (1..=13).contains(&d1) {
                candidates[n] = (d1, 1);
                n += 1;
            }
        }
        _ => return None,
    }

    for &(client_rank, len) in &candidates[..n] {
        if let Some(suit) = chars.get(len).copied().and_then(suit_from_letter) {
            // Clients send Ace as rank 1; the engine plays it as 14.
            let rank = if client_rank == 1 { Rank(14) } else { Rank(client_rank) };
            return Some((Card::new(rank, suit), len + 1));
        }
    }
    None
}

/// Scan free-form text for card tokens, in order of appearance.
/// Non-token characters are skipped, so tokens may be embedded in prose.
pub fn parse_cards(text: &str) -> Vec<Card> {
    let chars: Vec<char> = text.chars().collect();
    let mut cards = Vec::new();
    let mut i = 0;
    while i < chars.len() {
        match match_card(&chars[i..]) {
            Some((card, used)) => {
                cards.push(card);
                i += used;
            }
            None => i += 1,
        }
    }
    cards
}

/// Parse a single token ("as", "1s", "10h", "13d") into a card.
pub fn parse_card(token: &str) -> Result<Card, EquityError> {
    let chars: Vec<char> = token.trim().chars().collect();
    match match_card(&chars) {
        Some((card, used)) if used == chars.len() => Ok(card),
        _ => Err(EquityError::UnknownCardToken(token.to_string())),
    }
}

/// Decode a batch of raw 0..51 wire codes.
pub fn parse_codes(codes: &[u8]) -> Result<Vec<Card>, EquityError> {
    codes
        .iter()
        .map(|&code| Card::from_code(code).ok_or(EquityError::CardCodeOutOfRange(code)))
        .collect()
}

/// Assemble a validated [`EquityRequest`] from client inputs.
///
/// `hand_text` must contain exactly two card tokens; `board_text`, when
/// present, three to five. The opponent count is clamped to 1..=8 the way
/// the clients do, rather than rejected. Duplicates across hand and board
/// are an error.
pub fn parse_request(
    hand_text: &str,
    board_text: Option<&str>,
    opponents: i64,
) -> Result<EquityRequest, EquityError> {
    let hero_cards = parse_cards(hand_text);
    if hero_cards.len() != 2 {
        return Err(EquityError::HeroCardCount(hero_cards.len()));
    }

    let board = board_text.map(parse_cards).unwrap_or_default();

    let request = EquityRequest {
        hero: [hero_cards[0], hero_cards[1]],
        board,
        opponents: opponents.clamp(1, 8) as u8,
        trials: EquityRequest::DEFAULT_TRIALS,
        rng_seed: None,
    };
    request.validate()?;
    Ok(request)
}

/// Render a report as the JSON object clients display: whole-number
/// percentages, the street label, and the enter/fold flag.
pub fn to_client_report(report: &EquityReport) -> Value {
    json!({
        "win_rate": report.win_percent(),
        "threshold": report.threshold_percent(),
        "should_enter": report.should_play,
        "street": report.street.to_string(),
        "opponents": report.opponents,
        "trials": report.trials,
    })
}
