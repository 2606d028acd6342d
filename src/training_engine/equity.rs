//! Didactic equity estimate shown next to a recommendation.
//!
//! This is a rule-of-thumb score on a 0..100 scale, not a solver value. It is
//! kept apart from the policy table: the resolver only sees the
//! [`EquityModel`] trait, so a real equity source can replace the heuristic
//! without touching grading or statistics.

use serde::{Deserialize, Serialize};

use crate::training_engine::{classifier::HandLabel, models::Position};

pub trait EquityModel {
    /// Estimated equity of `label` played from `position`, in `[0, 100]`.
    fn estimate(&self, label: HandLabel, position: Position) -> f64;
}

/// Weights for [`HeuristicEquity`]. Every field has a default so partial
/// JSON overrides are accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EquityWeights {
    /// Starting score for any hand.
    pub base: f64,
    /// Score for `AA`-level high cards; scaled linearly down to `22`.
    pub high_cards: f64,
    /// Flat bonus for any pocket pair.
    pub pair: f64,
    /// Extra pair bonus per rank above deuces.
    pub pair_step: f64,
    pub suited: f64,
    /// Bonus for touching ranks (`T9`).
    pub connector: f64,
    /// Bonus for one-gappers (`T8`).
    pub one_gap: f64,
    /// Bonus per step of acting order after the dealer.
    pub position_step: f64,
}

impl Default for EquityWeights {
    fn default() -> Self {
        EquityWeights {
            base: 30.0,
            high_cards: 35.0,
            pair: 20.0,
            pair_step: 1.25,
            suited: 4.0,
            connector: 3.0,
            one_gap: 1.5,
            position_step: 1.0,
        }
    }
}

/// Pair bonus + high-card sum + suited bonus + connector bonus + position
/// bonus, clamped to `[0, 100]`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HeuristicEquity {
    pub weights: EquityWeights,
}

impl HeuristicEquity {
    pub fn new(weights: EquityWeights) -> Self {
        HeuristicEquity { weights }
    }
}

impl EquityModel for HeuristicEquity {
    fn estimate(&self, label: HandLabel, position: Position) -> f64 {
        let w = &self.weights;
        // 4 (2+2) .. 28 (A+A)
        let rank_sum = (label.high().0 + label.low().0) as f64;
        let mut score = w.base + (rank_sum - 4.0) / 24.0 * w.high_cards;

        if label.is_pair() {
            score += w.pair + (label.high().0 - 2) as f64 * w.pair_step;
        } else {
            if label.is_suited() {
                score += w.suited;
            }
            score += match label.gap() {
                1 => w.connector,
                2 => w.one_gap,
                _ => 0.0,
            };
        }
        score += position.order_from_dealer() as f64 * w.position_step;
        score.clamp(0.0, 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn est(label: &str, pos: Position) -> f64 {
        HeuristicEquity::default().estimate(label.parse().unwrap(), pos)
    }

    #[test]
    fn premium_hands_score_high() {
        assert!(est("AKs", Position::BTN) > 70.0);
        assert_eq!(est("AA", Position::BTN), 100.0);
    }

    #[test]
    fn later_position_scores_higher() {
        assert!(est("JTs", Position::BTN) > est("JTs", Position::CO));
        assert!(est("JTs", Position::CO) > est("JTs", Position::UTG));
        assert!(est("JTs", Position::UTG) > est("JTs", Position::SB));
    }

    #[test]
    fn suited_and_connected_beat_offsuit_gapped() {
        assert!(est("98s", Position::HJ) > est("98o", Position::HJ));
        assert!(est("98o", Position::HJ) > est("94o", Position::HJ));
        assert!(est("97o", Position::HJ) > est("96o", Position::HJ));
    }

    #[test]
    fn always_within_bounds() {
        let loud = HeuristicEquity::new(EquityWeights { base: 500.0, ..Default::default() });
        let quiet = HeuristicEquity::new(EquityWeights { base: -500.0, ..Default::default() });
        for label in HandLabel::all() {
            for pos in Position::ALL {
                assert_eq!(loud.estimate(label, pos), 100.0);
                assert_eq!(quiet.estimate(label, pos), 0.0);
                let e = HeuristicEquity::default().estimate(label, pos);
                assert!((0.0..=100.0).contains(&e), "{label} {pos:?} -> {e}");
            }
        }
    }

    #[test]
    fn partial_weights_fill_from_defaults() {
        let w: EquityWeights = serde_json::from_str(r#"{ "suited": 10.0 }"#).unwrap();
        assert_eq!(w.suited, 10.0);
        assert_eq!(w.base, EquityWeights::default().base);
    }
}
