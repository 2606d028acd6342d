use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::training_engine::error::TrainerError;

// ---------------------------------------------------------------------------
// Card primitives
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Suit::Clubs => write!(f, "c"),
            Suit::Diamonds => write!(f, "d"),
            Suit::Hearts => write!(f, "h"),
            Suit::Spades => write!(f, "s"),
        }
    }
}

impl TryFrom<char> for Suit {
    type Error = TrainerError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_lowercase() {
            'c' | '♣' => Ok(Suit::Clubs),
            'd' | '♦' => Ok(Suit::Diamonds),
            'h' | '♥' => Ok(Suit::Hearts),
            's' | '♠' => Ok(Suit::Spades),
            _ => Err(TrainerError::InvalidCard(format!("unknown suit '{c}'"))),
        }
    }
}

/// Rank 2..=14 where 14 = Ace.
///
/// Only valid ranks can be built, so downstream code indexes by rank freely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub struct Rank(pub(crate) u8);

impl Rank {
    pub const ACE: Rank = Rank(14);

    pub fn new(value: u8) -> Option<Rank> {
        (2..=14).contains(&value).then_some(Rank(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// All thirteen ranks, deuce first.
    pub fn all() -> impl DoubleEndedIterator<Item = Rank> {
        (2u8..=14).map(Rank)
    }

    pub fn symbol(self) -> &'static str {
        match self.0 {
            2 => "2", 3 => "3", 4 => "4", 5 => "5", 6 => "6",
            7 => "7", 8 => "8", 9 => "9", 10 => "T",
            11 => "J", 12 => "Q", 13 => "K", 14 => "A",
            _ => "?",
        }
    }

    pub fn from_symbol(c: char) -> Option<Rank> {
        let value = match c.to_ascii_uppercase() {
            '2'..='9' => c as u8 - b'0',
            'T' => 10,
            'J' => 11,
            'Q' => 12,
            'K' => 13,
            'A' => 14,
            _ => return None,
        };
        Some(Rank(value))
    }
}

impl TryFrom<u8> for Rank {
    type Error = TrainerError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Rank::new(value).ok_or_else(|| TrainerError::InvalidCard(format!("rank {value} outside 2..=14")))
    }
}

impl From<Rank> for u8 {
    fn from(rank: Rank) -> u8 {
        rank.0
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Card { rank, suit }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

/// Parses `"As"`, `"Td"` and the client-style `"10h"`.
impl FromStr for Card {
    type Err = TrainerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars: Vec<char> = s.chars().collect();
        let suit_char = chars
            .pop()
            .ok_or_else(|| TrainerError::InvalidCard("empty card".to_string()))?;
        let rank = match chars.as_slice() {
            ['1', '0'] => Rank(10),
            [c] => Rank::from_symbol(*c)
                .ok_or_else(|| TrainerError::InvalidCard(format!("unknown rank in '{s}'")))?,
            _ => return Err(TrainerError::InvalidCard(format!("malformed card '{s}'"))),
        };
        Ok(Card { rank, suit: Suit::try_from(suit_char)? })
    }
}

// ---------------------------------------------------------------------------
// Table metadata
// ---------------------------------------------------------------------------

/// Six-max seats, declared in preflop acting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Position {
    UTG,
    HJ,   // Hijack
    CO,   // Cutoff
    BTN,  // Button
    SB,   // Small Blind
    BB,   // Big Blind
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Position::UTG => "UTG",
            Position::HJ  => "Hijack",
            Position::CO  => "Cutoff",
            Position::BTN => "Button",
            Position::SB  => "Small Blind",
            Position::BB  => "Big Blind",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Position {
    type Err = TrainerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "UTG" => Ok(Position::UTG),
            "HJ"  => Ok(Position::HJ),
            "CO"  => Ok(Position::CO),
            "BTN" => Ok(Position::BTN),
            "SB"  => Ok(Position::SB),
            "BB"  => Ok(Position::BB),
            other => Err(TrainerError::InvalidHandInput(format!("unknown position '{other}'"))),
        }
    }
}

impl Position {
    pub const ALL: [Position; 6] = [
        Position::UTG, Position::HJ, Position::CO,
        Position::BTN, Position::SB, Position::BB,
    ];

    /// Short table code, e.g. `"BTN"`.
    pub fn code(self) -> &'static str {
        match self {
            Position::UTG => "UTG",
            Position::HJ  => "HJ",
            Position::CO  => "CO",
            Position::BTN => "BTN",
            Position::SB  => "SB",
            Position::BB  => "BB",
        }
    }

    /// Acting order relative to the dealer: the small blind acts first
    /// after the button, the button acts last.
    pub fn order_from_dealer(self) -> u8 {
        match self {
            Position::SB  => 0,
            Position::BB  => 1,
            Position::UTG => 2,
            Position::HJ  => 3,
            Position::CO  => 4,
            Position::BTN => 5,
        }
    }
}

/// The betting context the hero is acting in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scenario {
    /// Folded to hero; first voluntary action.
    Open,
    /// Facing a single open-raise.
    FacingRaise,
    /// Hero opened and faces a 3-bet.
    FacingThreeBet,
    /// Hero 3-bet and faces a 4-bet.
    FacingFourBet,
}

impl Scenario {
    pub const ALL: [Scenario; 4] = [
        Scenario::Open, Scenario::FacingRaise,
        Scenario::FacingThreeBet, Scenario::FacingFourBet,
    ];
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Scenario::Open           => "open",
            Scenario::FacingRaise    => "facing a raise",
            Scenario::FacingThreeBet => "facing a 3-bet",
            Scenario::FacingFourBet  => "facing a 4-bet",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Scenario {
    type Err = TrainerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "open" | "rfi" => Ok(Scenario::Open),
            "facing_raise" | "vs_open" => Ok(Scenario::FacingRaise),
            "facing_three_bet" | "vs_3bet" => Ok(Scenario::FacingThreeBet),
            "facing_four_bet" | "vs_4bet" => Ok(Scenario::FacingFourBet),
            other => Err(TrainerError::InvalidHandInput(format!("unknown scenario '{other}'"))),
        }
    }
}

/// A preflop action. `Raise` covers opens, 3-bets, 4-bets and all-ins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Raise,
    Call,
    Fold,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Raise => write!(f, "raise"),
            Action::Call  => write!(f, "call"),
            Action::Fold  => write!(f, "fold"),
        }
    }
}

impl FromStr for Action {
    type Err = TrainerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "raise" | "r" | "allin" | "all-in" | "shove" => Ok(Action::Raise),
            "call" | "c" => Ok(Action::Call),
            "fold" | "f" => Ok(Action::Fold),
            other => Err(TrainerError::InvalidHandInput(format!("unknown action '{other}'"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_cards_in_both_ten_styles() {
        let a: Card = "Td".parse().unwrap();
        let b: Card = "10d".parse().unwrap();
        assert_eq!(a, b);
        assert_eq!(a.to_string(), "Td");
        assert_eq!("As".parse::<Card>().unwrap(), Card::new(Rank::ACE, Suit::Spades));
    }

    #[test]
    fn rejects_malformed_cards() {
        assert!("".parse::<Card>().is_err());
        assert!("1s".parse::<Card>().is_err());
        assert!("Ax".parse::<Card>().is_err());
        assert!("AKs".parse::<Card>().is_err());
    }

    #[test]
    fn ranks_outside_deuce_to_ace_are_rejected() {
        assert_eq!(Rank::new(14), Some(Rank::ACE));
        assert_eq!(Rank::new(2).map(Rank::value), Some(2));
        for bad in [0u8, 1, 15, 255] {
            assert!(Rank::new(bad).is_none(), "{bad}");
        }
        assert!(serde_json::from_str::<Card>(r#"{"rank":1,"suit":"Spades"}"#).is_err());
        assert!(serde_json::from_str::<Card>(r#"{"rank":15,"suit":"Spades"}"#).is_err());
        let ace: Card = serde_json::from_str(r#"{"rank":14,"suit":"Spades"}"#).unwrap();
        assert_eq!(ace, "As".parse().unwrap());
        assert_eq!(serde_json::to_string(&ace).unwrap(), r#"{"rank":14,"suit":"Spades"}"#);
    }

    #[test]
    fn button_acts_last_relative_to_dealer() {
        let last = Position::ALL.iter().max_by_key(|p| p.order_from_dealer()).unwrap();
        let first = Position::ALL.iter().min_by_key(|p| p.order_from_dealer()).unwrap();
        assert_eq!(*last, Position::BTN);
        assert_eq!(*first, Position::SB);
    }

    #[test]
    fn position_codes_round_trip() {
        for pos in Position::ALL {
            assert_eq!(pos.code().parse::<Position>().unwrap(), pos);
        }
    }

    #[test]
    fn actions_and_scenarios_parse_aliases() {
        assert_eq!("shove".parse::<Action>().unwrap(), Action::Raise);
        assert_eq!(" Fold ".parse::<Action>().unwrap(), Action::Fold);
        assert!("check".parse::<Action>().is_err());
        assert_eq!("vs_3bet".parse::<Scenario>().unwrap(), Scenario::FacingThreeBet);
        assert_eq!("open".parse::<Scenario>().unwrap(), Scenario::Open);
    }

    #[test]
    fn action_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Action::Raise).unwrap(), "\"raise\"");
        assert_eq!(serde_json::to_string(&Scenario::FacingThreeBet).unwrap(), "\"facing_three_bet\"");
    }
}
