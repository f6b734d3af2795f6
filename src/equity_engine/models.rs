use std::fmt;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Card primitives
// ---------------------------------------------------------------------------

/// Suits in wire-code order: `code / 13` yields 0 = Spades .. 3 = Clubs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Suit {
    Spades,
    Hearts,
    Diamonds,
    Clubs,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs];

    pub fn index(self) -> u8 {
        match self {
            Suit::Spades => 0,
            Suit::Hearts => 1,
            Suit::Diamonds => 2,
            Suit::Clubs => 3,
        }
    }

    pub fn from_index(index: u8) -> Option<Suit> {
        Suit::ALL.get(index as usize).copied()
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Suit::Spades => write!(f, "s"),
            Suit::Hearts => write!(f, "h"),
            Suit::Diamonds => write!(f, "d"),
            Suit::Clubs => write!(f, "c"),
        }
    }
}

/// Rank 2..=14 where 14 = Ace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Rank(pub u8);

impl Rank {
    pub fn symbol(self) -> &'static str {
        match self.0 {
            2 => "2", 3 => "3", 4 => "4", 5 => "5", 6 => "6",
            7 => "7", 8 => "8", 9 => "9", 10 => "T",
            11 => "J", 12 => "Q", 13 => "K", 14 => "A",
            _ => "?",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    pub fn new(rank: Rank, suit: Suit) -> Card {
        Card { rank, suit }
    }

    /// Decode the 0..51 wire code: `rank = code % 13 + 2`, `suit = code / 13`.
    /// Returns `None` for codes outside the deck.
    pub fn from_code(code: u8) -> Option<Card> {
        if code >= 52 {
            return None;
        }
        let suit = Suit::from_index(code / 13)?;
        Some(Card { rank: Rank(code % 13 + 2), suit })
    }

    /// The 0..51 wire code this card occupies in the deck.
    pub fn code(self) -> u8 {
        self.suit.index() * 13 + (self.rank.0 - 2)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

// ---------------------------------------------------------------------------
// Hand scores
// ---------------------------------------------------------------------------

/// The nine hand categories, weakest to strongest. The discriminant is the
/// leading base-15 digit of a [`HandScore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum HandCategory {
    HighCard,
    OnePair,
    TwoPair,
    ThreeOfAKind,
    Straight,
    Flush,
    FullHouse,
    FourOfAKind,
    StraightFlush,
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            HandCategory::HighCard => "High Card",
            HandCategory::OnePair => "One Pair",
            HandCategory::TwoPair => "Two Pair",
            HandCategory::ThreeOfAKind => "Three of a Kind",
            HandCategory::Straight => "Straight",
            HandCategory::Flush => "Flush",
            HandCategory::FullHouse => "Full House",
            HandCategory::FourOfAKind => "Four of a Kind",
            HandCategory::StraightFlush => "Straight Flush",
        };
        write!(f, "{}", s)
    }
}

/// Total order over all five-card hands: category and up to five kicker
/// ranks packed as digits of a base-15 number (the largest kicker, Ace = 14,
/// fits in one digit). Higher = stronger; equal score = split pot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct HandScore(pub u32);

impl HandScore {
    /// 15^5 — one slot per kicker digit below the category digit.
    const KICKER_SPACE: u32 = 759_375;

    pub fn category(self) -> HandCategory {
        match self.0 / Self::KICKER_SPACE {
            0 => HandCategory::HighCard,
            1 => HandCategory::OnePair,
            2 => HandCategory::TwoPair,
            3 => HandCategory::ThreeOfAKind,
            4 => HandCategory::Straight,
            5 => HandCategory::Flush,
            6 => HandCategory::FullHouse,
            7 => HandCategory::FourOfAKind,
            _ => HandCategory::StraightFlush,
        }
    }
}

// ---------------------------------------------------------------------------
// Streets
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Street {
    Preflop,
    Flop,
    Turn,
    River,
}

impl Street {
    /// Derive the street from the number of known board cards.
    pub fn from_board_len(len: usize) -> Street {
        match len {
            0 => Street::Preflop,
            3 => Street::Flop,
            4 => Street::Turn,
            _ => Street::River,
        }
    }
}

impl fmt::Display for Street {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Street::Preflop => write!(f, "Preflop"),
            Street::Flop => write!(f, "Flop"),
            Street::Turn => write!(f, "Turn"),
            Street::River => write!(f, "River"),
        }
    }
}

// ---------------------------------------------------------------------------
// Request / report types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EquityRequest {
    pub hero: [Card; 2],
    /// Known community cards: empty preflop, then 3, 4 or 5.
    pub board: Vec<Card>,
    /// Number of opponents with unknown hole cards, 1..=8.
    pub opponents: u8,
    pub trials: u32,
    /// `Some(seed)` makes the simulation reproducible; `None` uses entropy.
    pub rng_seed: Option<u64>,
}

impl EquityRequest {
    pub const DEFAULT_TRIALS: u32 = 10_000;

    /// Heads-up request with no board and the default trial count.
    pub fn new(hero: [Card; 2]) -> EquityRequest {
        EquityRequest {
            hero,
            board: Vec::new(),
            opponents: 1,
            trials: Self::DEFAULT_TRIALS,
            rng_seed: None,
        }
    }

    /// Reject the precondition violations of the estimate contract before
    /// any simulation runs. The estimator itself assumes a validated
    /// request and never errors mid-loop.
    pub fn validate(&self) -> Result<(), EquityError> {
        if !matches!(self.board.len(), 0 | 3 | 4 | 5) {
            return Err(EquityError::BoardCardCount(self.board.len()));
        }
        if !(1..=8).contains(&self.opponents) {
            return Err(EquityError::OpponentCountOutOfRange(self.opponents));
        }
        if self.trials == 0 {
            return Err(EquityError::ZeroTrials);
        }
        let mut seen = [false; 52];
        for card in self.hero.iter().chain(self.board.iter()) {
            let code = card.code() as usize;
            if seen[code] {
                return Err(EquityError::DuplicateCard(*card));
            }
            seen[code] = true;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EquityReport {
    /// Estimated win probability in [0, 1], split pots counted fractionally.
    pub win_probability: f64,
    /// Pot-odds break-even point: `1 / (opponents + 1)`.
    pub threshold: f64,
    /// `win_probability >= threshold`.
    pub should_play: bool,
    pub street: Street,
    pub opponents: u8,
    pub trials: u32,
}

impl EquityReport {
    /// Win probability rounded to a whole percentage for display.
    pub fn win_percent(&self) -> u8 {
        (self.win_probability * 100.0).round() as u8
    }

    /// Threshold rounded to a whole percentage for display.
    pub fn threshold_percent(&self) -> u8 {
        (self.threshold * 100.0).round() as u8
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Precondition violations rejected before simulation. All of these are
/// caller mistakes; a validated request never fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EquityError {
    HeroCardCount(usize),
    BoardCardCount(usize),
    DuplicateCard(Card),
    OpponentCountOutOfRange(u8),
    ZeroTrials,
    CardCodeOutOfRange(u8),
    UnknownCardToken(String),
}

impl fmt::Display for EquityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EquityError::HeroCardCount(n) => {
                write!(f, "hero must hold exactly 2 cards (got {})", n)
            }
            EquityError::BoardCardCount(n) => {
                write!(f, "board must have 0, 3, 4 or 5 cards (got {})", n)
            }
            EquityError::DuplicateCard(card) => {
                write!(f, "card {} appears more than once", card)
            }
            EquityError::OpponentCountOutOfRange(n) => {
                write!(f, "opponent count must be 1..=8 (got {})", n)
            }
            EquityError::ZeroTrials => write!(f, "trial count must be positive"),
            EquityError::CardCodeOutOfRange(code) => {
                write!(f, "card code {} is outside 0..52", code)
            }
            EquityError::UnknownCardToken(token) => {
                write!(f, "unrecognised card token '{}'", token)
            }
        }
    }
}

impl std::error::Error for EquityError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_code_round_trips_for_the_whole_deck() {
        for code in 0u8..52 {
            let card = Card::from_code(code).expect("codes 0..52 are all valid");
            assert_eq!(card.code(), code, "round trip failed for code {code}");
        }
    }

    #[test]
    fn card_codes_outside_the_deck_are_rejected() {
        assert_eq!(Card::from_code(52), None);
        assert_eq!(Card::from_code(u8::MAX), None);
    }

    #[test]
    fn card_display_matches_wire_encoding() {
        // code 0 = lowest spade, code 12 = ace of spades, code 51 = ace of clubs
        assert_eq!(Card::from_code(0).unwrap().to_string(), "2s");
        assert_eq!(Card::from_code(12).unwrap().to_string(), "As");
        assert_eq!(Card::from_code(25).unwrap().to_string(), "Ah");
        assert_eq!(Card::from_code(51).unwrap().to_string(), "Ac");
    }

    #[test]
    fn street_follows_board_length() {
        assert_eq!(Street::from_board_len(0), Street::Preflop);
        assert_eq!(Street::from_board_len(3), Street::Flop);
        assert_eq!(Street::from_board_len(4), Street::Turn);
        assert_eq!(Street::from_board_len(5), Street::River);
    }

    #[test]
    fn request_defaults() {
        let hero = [Card::from_code(12).unwrap(), Card::from_code(25).unwrap()];
        let request = EquityRequest::new(hero);
        assert_eq!(request.trials, 10_000);
        assert_eq!(request.opponents, 1);
        assert!(request.board.is_empty());
        assert!(request.rng_seed.is_none());
        assert!(request.validate().is_ok());
    }

    #[test]
    fn validate_rejects_duplicates_and_bad_shapes() {
        let a = Card::from_code(12).unwrap();
        let b = Card::from_code(25).unwrap();

        let mut request = EquityRequest::new([a, a]);
        assert_eq!(request.validate(), Err(EquityError::DuplicateCard(a)));

        request = EquityRequest::new([a, b]);
        request.board = vec![Card::from_code(0).unwrap(), Card::from_code(1).unwrap()];
        assert_eq!(request.validate(), Err(EquityError::BoardCardCount(2)));

        request = EquityRequest::new([a, b]);
        request.board = vec![Card::from_code(0).unwrap(), Card::from_code(1).unwrap(), a];
        assert_eq!(request.validate(), Err(EquityError::DuplicateCard(a)));

        request = EquityRequest::new([a, b]);
        request.opponents = 0;
        assert_eq!(request.validate(), Err(EquityError::OpponentCountOutOfRange(0)));
        request.opponents = 9;
        assert_eq!(request.validate(), Err(EquityError::OpponentCountOutOfRange(9)));

        request = EquityRequest::new([a, b]);
        request.trials = 0;
        assert_eq!(request.validate(), Err(EquityError::ZeroTrials));
    }

    #[test]
    fn hand_score_decodes_its_category() {
        assert_eq!(HandScore(0).category(), HandCategory::HighCard);
        assert_eq!(HandScore(8 * 759_375).category(), HandCategory::StraightFlush);
        assert!(HandCategory::FourOfAKind < HandCategory::StraightFlush);
    }
}
