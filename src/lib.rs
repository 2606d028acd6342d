//! # preflop_trainer
//!
//! Hand-classification and policy-resolution engine for a preflop training
//! exercise.
//!
//! ## How it works
//!
//! 1. A fresh [`Deck`] is shuffled per hand and deals the hero two cards.
//! 2. [`classify`] reduces them to one of the 169 canonical labels (`AKs`,
//!    `QQ`, `72o`).
//! 3. [`resolve`] looks the label up in the static [`PolicyTable`] for the
//!    seat and betting [`Scenario`], returning a [`Decision`] with a frequency
//!    and a didactic equity estimate.
//! 4. [`evaluate`] grades the trainee's [`Action`] into a [`Verdict`].
//! 5. [`SessionStats`] folds verdicts into accuracy, streaks and a
//!    per-position breakdown; [`SessionRecord`] is what storage keeps.
//!
//! [`TrainingSession`] runs the whole loop.
//!
//! ## Quick start
//!
//! ```rust
//! use preflop_trainer::{
//!     classify, evaluate, resolve, Action, Card, Position, Scenario, SessionStats, Spot,
//! };
//!
//! let a: Card = "As".parse().unwrap();
//! let b: Card = "Ks".parse().unwrap();
//! let label = classify(a, b).unwrap();
//! assert_eq!(label.to_string(), "AKs");
//!
//! let decision = resolve(label, Position::BTN, Scenario::Open);
//! assert_eq!(decision.action, Action::Raise);
//!
//! let spot = Spot { label, position: Position::BTN, scenario: Scenario::Open };
//! let verdict = evaluate(Action::Raise, &decision, &spot);
//!
//! let mut stats = SessionStats::new();
//! stats.record(&verdict, Position::BTN);
//! assert_eq!(stats.correct_count(), 1);
//! ```
//!
//! ## Drill sessions
//!
//! ```rust
//! use preflop_trainer::{Action, TrainerConfig, TrainingSession};
//!
//! let mut session = TrainingSession::new(&TrainerConfig::default(), Some(42)).unwrap();
//! let drill = session.next_drill().unwrap();
//! println!("{} in the {} ({})", drill.label, drill.position, drill.scenario);
//! let verdict = session.submit(Action::Fold).unwrap();
//! println!("{}", verdict.explanation_text);
//! let record = session.into_record();
//! assert_eq!(record.total_hands, 1);
//! ```

pub mod training_engine;

// Convenience re-exports so callers can use `preflop_trainer::resolve`
// directly without reaching into `training_engine::`.
pub use training_engine::{
    classify, classify_cards, deal_hand, evaluate, parse_range, resolve, Action, Card,
    DealtHand, Decision, Deck, Drill, EquityModel, EquityWeights, Grader, GradingMode,
    HandKind, HandLabel, HeuristicEquity, LabelSet, PolicyEntry, PolicyTable, Position, Rank,
    Resolver, Result, Scenario, SessionRecord, SessionStats, Spot, Suit, Tier, TierMix,
    TrainerConfig, TrainerError, TrainingSession, Verdict,
};

#[cfg(test)]
mod tests;
