//! The static preflop policy: one entry per `(Position, Scenario)`.
//!
//! Every entry splits the 169 labels into a raise tier, a call tier and the
//! implicit fold tier. Each tier carries the frequency its action is taken
//! with and the action that takes the remaining share.
//!
//! All chart data lives in [`STANDARD_CHART`]. It is compiled once, on first
//! use, into the shared [`PolicyTable::standard`] instance and never mutated.

use std::collections::HashMap;

use log::debug;
use once_cell::sync::Lazy;

use crate::training_engine::{
    classifier::HandLabel,
    error::{Result, TrainerError},
    models::{Action, Position, Scenario},
    range::{parse_range, LabelSet},
};

/// How often a tier's action is taken, and what happens the rest of the time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TierMix {
    pub frequency: f64,
    pub remainder: Action,
}

impl TierMix {
    pub const fn new(frequency: f64, remainder: Action) -> Self {
        TierMix { frequency, remainder }
    }

    /// A tier that is always played the same way.
    pub const fn pure() -> Self {
        TierMix { frequency: 1.0, remainder: Action::Fold }
    }
}

/// Which tier a label falls into for a given entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Raise,
    Call,
    Fold,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PolicyEntry {
    raise: LabelSet,
    call: LabelSet,
    raise_mix: TierMix,
    call_mix: TierMix,
}

impl PolicyEntry {
    /// Validates that the tiers are disjoint and frequencies lie in `[0, 1]`.
    pub fn new(raise: LabelSet, call: LabelSet, raise_mix: TierMix, call_mix: TierMix) -> Result<Self> {
        let overlap = raise.intersection(&call);
        if !overlap.is_empty() {
            return Err(TrainerError::InvalidRange(format!(
                "raise and call tiers overlap on {overlap:?}"
            )));
        }
        for mix in [raise_mix, call_mix] {
            if !(0.0..=1.0).contains(&mix.frequency) {
                return Err(TrainerError::InvalidRange(format!(
                    "tier frequency {} outside [0, 1]",
                    mix.frequency
                )));
            }
        }
        Ok(PolicyEntry { raise, call, raise_mix, call_mix })
    }

    pub fn raise_set(&self) -> &LabelSet {
        &self.raise
    }

    pub fn call_set(&self) -> &LabelSet {
        &self.call
    }

    pub fn raise_mix(&self) -> TierMix {
        self.raise_mix
    }

    pub fn call_mix(&self) -> TierMix {
        self.call_mix
    }

    pub fn tier_of(&self, label: HandLabel) -> Tier {
        if self.raise.contains(label) {
            Tier::Raise
        } else if self.call.contains(label) {
            Tier::Call
        } else {
            Tier::Fold
        }
    }

    /// Labels that are neither raised nor called.
    pub fn fold_set(&self) -> LabelSet {
        HandLabel::all()
            .filter(|&l| self.tier_of(l) == Tier::Fold)
            .collect()
    }
}

/// One row of chart data, written in range notation.
#[derive(Debug, Clone, Copy)]
pub struct ChartRow {
    pub position: Position,
    pub scenario: Scenario,
    pub raise: &'static str,
    pub raise_mix: TierMix,
    pub call: &'static str,
    pub call_mix: TierMix,
}

const OPEN: TierMix = TierMix::new(0.9, Action::Fold);
const OPEN_EARLY: TierMix = TierMix::new(0.85, Action::Fold);
const THREE_BET: TierMix = TierMix::new(0.85, Action::Call);
const FLAT: TierMix = TierMix::new(0.75, Action::Fold);
const JAM: TierMix = TierMix::new(0.9, Action::Call);

/// Six-max cash-game chart, 100 BB deep.
///
/// Spots that cannot occur (UTG facing an open, the big blind opening,
/// the big blind facing a 3-bet it could not have faced) have no row.
pub const STANDARD_CHART: &[ChartRow] = &[
    // ---- Open -------------------------------------------------------------
    ChartRow {
        position: Position::UTG, scenario: Scenario::Open,
        raise: "55+, A2s+, K9s+, Q9s+, J9s+, T9s, 98s, 87s, 76s, ATo+, KJo+, QJo",
        raise_mix: OPEN_EARLY,
        call: "", call_mix: TierMix::pure(),
    },
    ChartRow {
        position: Position::HJ, scenario: Scenario::Open,
        raise: "33+, A2s+, K8s+, Q9s+, J9s+, T8s+, 97s+, 87s, 76s, 65s, A9o+, KTo+, QTo+, JTo",
        raise_mix: OPEN_EARLY,
        call: "", call_mix: TierMix::pure(),
    },
    ChartRow {
        position: Position::CO, scenario: Scenario::Open,
        raise: "22+, A2s+, K5s+, Q8s+, J8s+, T8s+, 97s+, 86s+, 75s+, 64s+, 54s, \
                A7o+, A5o, K9o+, Q9o+, J9o+, T9o",
        raise_mix: OPEN,
        call: "", call_mix: TierMix::pure(),
    },
    ChartRow {
        position: Position::BTN, scenario: Scenario::Open,
        raise: "22+, A2s+, K2s+, Q4s+, J6s+, T6s+, 96s+, 85s+, 74s+, 63s+, 53s+, 43s, \
                A2o+, K8o+, Q9o+, J8o+, T8o+, 98o, 87o",
        raise_mix: OPEN,
        call: "", call_mix: TierMix::pure(),
    },
    ChartRow {
        position: Position::SB, scenario: Scenario::Open,
        raise: "22+, A2s+, K6s+, Q8s+, J8s+, T8s+, 98s, 87s, A7o+, A5o, KTo+, QTo+, JTo",
        raise_mix: TierMix::new(0.8, Action::Call),
        call: "K2s-K5s, Q2s-Q7s, J5s-J7s, T6s-T7s, 96s-97s, 75s-76s, 86s, 65s, 54s, \
               A2o-A4o, A6o, K7o-K9o, Q9o, J9o, T9o, 98o",
        call_mix: TierMix::new(0.7, Action::Fold),
    },
    // ---- Facing a single raise --------------------------------------------
    ChartRow {
        position: Position::HJ, scenario: Scenario::FacingRaise,
        raise: "QQ+, AK, A5s",
        raise_mix: THREE_BET,
        call: "JJ-88, AQs, AJs, KQs, QJs, JTs, T9s",
        call_mix: FLAT,
    },
    ChartRow {
        position: Position::CO, scenario: Scenario::FacingRaise,
        raise: "QQ+, AK, AQs, KQs, A5s-A4s",
        raise_mix: THREE_BET,
        call: "JJ-77, AJs, ATs, KJs, QJs, JTs, T9s, 98s, AQo",
        call_mix: FLAT,
    },
    ChartRow {
        position: Position::BTN, scenario: Scenario::FacingRaise,
        raise: "JJ+, AK, AQs, KQs, A5s-A4s, 76s, 65s",
        raise_mix: THREE_BET,
        call: "TT-55, AJs-ATs, KJs-KTs, QJs-QTs, JTs, T9s, 98s, 87s, AQo, AJo, KQo",
        call_mix: FLAT,
    },
    ChartRow {
        position: Position::SB, scenario: Scenario::FacingRaise,
        raise: "TT+, AK, AQs, AJs, KQs, A5s-A3s, AQo",
        raise_mix: TierMix::new(0.9, Action::Fold),
        call: "", call_mix: TierMix::pure(),
    },
    ChartRow {
        position: Position::BB, scenario: Scenario::FacingRaise,
        raise: "QQ+, AK, AQs, KQs, A5s-A4s, 65s, 54s",
        raise_mix: TierMix::new(0.75, Action::Call),
        call: "JJ-22, AJs-A6s, A3s-A2s, KJs-K6s, Q6s+, J7s+, T7s+, 97s+, 86s+, 75s+, 64s, 53s, \
               AQo-A8o, KTo+, QTo+, JTo, T9o",
        call_mix: TierMix::new(0.85, Action::Fold),
    },
    // ---- Opened, facing a 3-bet -------------------------------------------
    ChartRow {
        position: Position::UTG, scenario: Scenario::FacingThreeBet,
        raise: "KK+, AKs",
        raise_mix: JAM,
        call: "QQ-TT, AKo, AQs, AJs, KQs",
        call_mix: FLAT,
    },
    ChartRow {
        position: Position::HJ, scenario: Scenario::FacingThreeBet,
        raise: "KK+, AKs, A5s",
        raise_mix: THREE_BET,
        call: "QQ-99, AKo, AQs, AJs, KQs, QJs, JTs",
        call_mix: FLAT,
    },
    ChartRow {
        position: Position::CO, scenario: Scenario::FacingThreeBet,
        raise: "QQ+, AK, A5s-A4s",
        raise_mix: THREE_BET,
        call: "JJ-88, AQs-ATs, KQs, KJs, QJs, JTs, T9s, AQo",
        call_mix: FLAT,
    },
    ChartRow {
        position: Position::BTN, scenario: Scenario::FacingThreeBet,
        raise: "QQ+, AK, A5s-A3s",
        raise_mix: THREE_BET,
        call: "JJ-66, AQs-A9s, KTs+, QTs+, JTs, T9s, 98s, 87s, AQo, KQo",
        call_mix: FLAT,
    },
    ChartRow {
        position: Position::SB, scenario: Scenario::FacingThreeBet,
        raise: "QQ+, AK, A5s-A4s",
        raise_mix: THREE_BET,
        call: "JJ-88, AQs-ATs, KQs, KJs, QJs",
        call_mix: FLAT,
    },
    // ---- 3-bet, facing a 4-bet --------------------------------------------
    ChartRow {
        position: Position::HJ, scenario: Scenario::FacingFourBet,
        raise: "KK+, AKs", raise_mix: JAM,
        call: "QQ, AKo", call_mix: TierMix::new(0.7, Action::Fold),
    },
    ChartRow {
        position: Position::CO, scenario: Scenario::FacingFourBet,
        raise: "KK+, AKs", raise_mix: JAM,
        call: "QQ-JJ, AKo", call_mix: TierMix::new(0.7, Action::Fold),
    },
    ChartRow {
        position: Position::BTN, scenario: Scenario::FacingFourBet,
        raise: "QQ+, AKs", raise_mix: JAM,
        call: "JJ-TT, AKo, AQs", call_mix: TierMix::new(0.7, Action::Fold),
    },
    ChartRow {
        position: Position::SB, scenario: Scenario::FacingFourBet,
        raise: "KK+, AKs", raise_mix: JAM,
        call: "QQ-JJ, AKo", call_mix: TierMix::new(0.7, Action::Fold),
    },
    ChartRow {
        position: Position::BB, scenario: Scenario::FacingFourBet,
        raise: "QQ+, AK", raise_mix: JAM,
        call: "JJ-TT, AQs", call_mix: TierMix::new(0.7, Action::Fold),
    },
];

static STANDARD: Lazy<PolicyTable> = Lazy::new(|| {
    PolicyTable::from_chart(STANDARD_CHART).expect("built-in chart compiles")
});

/// Immutable lookup from `(Position, Scenario)` to its [`PolicyEntry`].
#[derive(Debug, Clone, Default)]
pub struct PolicyTable {
    entries: HashMap<(Position, Scenario), PolicyEntry>,
}

impl PolicyTable {
    /// The shared built-in table.
    pub fn standard() -> &'static PolicyTable {
        &STANDARD
    }

    /// Compile chart rows; a repeated key or an overlapping entry is an error.
    pub fn from_chart(rows: &[ChartRow]) -> Result<Self> {
        let mut entries = HashMap::with_capacity(rows.len());
        for row in rows {
            let entry = PolicyEntry::new(
                parse_range(row.raise)?,
                parse_range(row.call)?,
                row.raise_mix,
                row.call_mix,
            )?;
            if entries.insert((row.position, row.scenario), entry).is_some() {
                return Err(TrainerError::InvalidRange(format!(
                    "duplicate chart row for {:?} / {:?}",
                    row.position, row.scenario
                )));
            }
        }
        debug!("compiled policy table with {} entries", entries.len());
        Ok(PolicyTable { entries })
    }

    pub fn entry(&self, position: Position, scenario: Scenario) -> Result<&PolicyEntry> {
        self.entries
            .get(&(position, scenario))
            .ok_or(TrainerError::UnknownPolicyKey { position, scenario })
    }

    pub fn contains(&self, position: Position, scenario: Scenario) -> bool {
        self.entries.contains_key(&(position, scenario))
    }

    /// All keys with an entry, sorted.
    pub fn keys(&self) -> Vec<(Position, Scenario)> {
        let mut keys: Vec<_> = self.entries.keys().copied().collect();
        keys.sort();
        keys
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
