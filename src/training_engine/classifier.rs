//! Reduces two hole cards to one of the 169 canonical starting hands.
//!
//! - 13 pocket pairs (`AA` .. `22`), 6 combos each
//! - 78 suited hands (`AKs` .. `32s`), 4 combos each
//! - 78 offsuit hands (`AKo` .. `32o`), 12 combos each

use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::training_engine::{
    error::{Result, TrainerError},
    models::{Card, Rank},
};

/// Number of strategically distinct starting hands.
pub const LABEL_COUNT: usize = 169;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HandKind {
    Pair,
    Suited,
    Offsuit,
}

/// A canonical starting-hand label such as `AKs`, `QQ` or `72o`.
///
/// `high >= low` always holds; pairs carry no suitedness marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct HandLabel {
    high: Rank,
    low: Rank,
    kind: HandKind,
}

impl HandLabel {
    /// Orders the ranks; `suited` is ignored for pairs.
    pub fn new(a: Rank, b: Rank, suited: bool) -> Self {
        let (high, low) = if a >= b { (a, b) } else { (b, a) };
        let kind = if high == low {
            HandKind::Pair
        } else if suited {
            HandKind::Suited
        } else {
            HandKind::Offsuit
        };
        HandLabel { high, low, kind }
    }

    pub fn pair(rank: Rank) -> Self {
        Self::new(rank, rank, false)
    }

    pub fn high(&self) -> Rank {
        self.high
    }

    pub fn low(&self) -> Rank {
        self.low
    }

    pub fn kind(&self) -> HandKind {
        self.kind
    }

    pub fn is_pair(&self) -> bool {
        self.kind == HandKind::Pair
    }

    pub fn is_suited(&self) -> bool {
        self.kind == HandKind::Suited
    }

    /// Rank distance between the two cards; 0 for pairs, 1 for connectors.
    pub fn gap(&self) -> u8 {
        self.high.0 - self.low.0
    }

    /// Number of concrete two-card combos behind this label.
    pub fn combos(&self) -> u8 {
        match self.kind {
            HandKind::Pair => 6,
            HandKind::Suited => 4,
            HandKind::Offsuit => 12,
        }
    }

    /// Position in the 13x13 starting-hand grid, row-major from `AA`.
    ///
    /// Pairs sit on the diagonal, suited hands above it and offsuit hands
    /// below it, so every label maps to a unique value in `0..169`.
    pub fn index(&self) -> usize {
        let hi = (14 - self.high.0) as usize;
        let lo = (14 - self.low.0) as usize;
        match self.kind {
            HandKind::Pair | HandKind::Suited => hi * 13 + lo,
            HandKind::Offsuit => lo * 13 + hi,
        }
    }

    /// Inverse of [`HandLabel::index`].
    pub fn from_index(index: usize) -> Option<Self> {
        if index >= LABEL_COUNT {
            return None;
        }
        let row = (index / 13) as u8;
        let col = (index % 13) as u8;
        let (a, b) = (Rank(14 - row), Rank(14 - col));
        Some(Self::new(a, b, row < col))
    }

    /// All 169 labels in grid order.
    pub fn all() -> impl Iterator<Item = HandLabel> {
        (0..LABEL_COUNT).filter_map(HandLabel::from_index)
    }
}

impl fmt::Display for HandLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            HandKind::Pair => write!(f, "{}{}", self.high, self.low),
            HandKind::Suited => write!(f, "{}{}s", self.high, self.low),
            HandKind::Offsuit => write!(f, "{}{}o", self.high, self.low),
        }
    }
}

impl FromStr for HandLabel {
    type Err = TrainerError;

    fn from_str(s: &str) -> Result<Self> {
        let chars: Vec<char> = s.trim().chars().collect();
        let bad = || TrainerError::InvalidHandInput(format!("'{s}' is not a hand label"));
        let rank = |c: char| Rank::from_symbol(c).ok_or_else(bad);
        match chars.as_slice() {
            [a, b] => {
                let (a, b) = (rank(*a)?, rank(*b)?);
                if a != b {
                    // "AK" names two labels; callers that want both go through range notation.
                    return Err(bad());
                }
                Ok(HandLabel::pair(a))
            }
            [a, b, m] => {
                let (a, b) = (rank(*a)?, rank(*b)?);
                if a == b {
                    return Err(bad());
                }
                match m.to_ascii_lowercase() {
                    's' => Ok(HandLabel::new(a, b, true)),
                    'o' => Ok(HandLabel::new(a, b, false)),
                    _ => Err(bad()),
                }
            }
            _ => Err(bad()),
        }
    }
}

impl From<HandLabel> for String {
    fn from(label: HandLabel) -> Self {
        label.to_string()
    }
}

impl TryFrom<String> for HandLabel {
    type Error = TrainerError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

/// Canonical label for two distinct hole cards; order does not matter.
pub fn classify(a: Card, b: Card) -> Result<HandLabel> {
    if a == b {
        return Err(TrainerError::InvalidHandInput(format!("{a} given twice")));
    }
    Ok(HandLabel::new(a.rank, b.rank, a.suit == b.suit))
}

/// Same as [`classify`] for callers holding a slice.
pub fn classify_cards(cards: &[Card]) -> Result<HandLabel> {
    match cards {
        [a, b] => classify(*a, *b),
        _ => Err(TrainerError::InvalidHandInput(format!(
            "a starting hand has exactly 2 cards, got {}",
            cards.len()
        ))),
    }
}
