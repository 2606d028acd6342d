//! Core training engine: hand classification, policy lookup, grading and
//! session statistics.
//!
//! ## Module overview
//!
//! | Module       | Purpose |
//! |--------------|---------|
//! | `models`     | Shared types: cards, positions, scenarios, actions |
//! | `deck`       | 52-card deck with Fisher-Yates shuffle and duplicate-free dealing |
//! | `classifier` | Two cards → one of 169 canonical labels |
//! | `range`      | Range notation (`22+, ATs+, T9s-54s`) compiled into label sets |
//! | `policy`     | Static `(position, scenario)` chart, built once |
//! | `equity`     | Didactic equity heuristic behind the `EquityModel` trait |
//! | `resolver`   | Label + position + scenario → `Decision` |
//! | `verdict`    | Submitted action + `Decision` → `Verdict` |
//! | `stats`      | Running accuracy, streaks and per-position breakdown |
//! | `session`    | Drill loop tying the pipeline together |
//! | `config`     | JSON-loadable engine settings |
//! | `error`      | `TrainerError` |

pub mod classifier;
pub mod config;
pub mod deck;
pub mod equity;
pub mod error;
pub mod models;
pub mod policy;
pub mod range;
pub mod resolver;
pub mod session;
pub mod stats;
pub mod verdict;

// Re-export the public API surface so callers can use
// `training_engine::classify` without reaching into sub-modules.
pub use classifier::{classify, classify_cards, HandKind, HandLabel};
pub use config::TrainerConfig;
pub use deck::{deal_hand, DealtHand, Deck};
pub use equity::{EquityModel, EquityWeights, HeuristicEquity};
pub use error::{Result, TrainerError};
pub use models::{Action, Card, Position, Rank, Scenario, Suit};
pub use policy::{PolicyEntry, PolicyTable, Tier, TierMix};
pub use range::{parse_range, LabelSet};
pub use resolver::{resolve, Decision, Resolver, Spot};
pub use session::{Drill, TrainingSession};
pub use stats::{SessionRecord, SessionStats};
pub use verdict::{evaluate, Grader, GradingMode, Verdict};
