use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::training_engine::{
    equity::EquityWeights,
    error::Result,
    models::{Position, Scenario},
    verdict::{GradingMode, FULL_SCORE},
};

fn default_correct_score() -> u32 {
    FULL_SCORE
}

fn default_positions() -> Vec<Position> {
    Position::ALL.to_vec()
}

fn default_scenarios() -> Vec<Scenario> {
    Scenario::ALL.to_vec()
}

/// Engine settings.
///
/// # Example JSON
///
/// ```json
/// {
///   "grading": "mixed_support",
///   "correct_score": 100,
///   "equity": { "suited": 5.0 },
///   "positions": ["CO", "BTN"],
///   "scenarios": ["open"]
/// }
/// ```
///
/// Every field is optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainerConfig {
    #[serde(default)]
    pub grading: GradingMode,

    #[serde(default = "default_correct_score")]
    pub correct_score: u32,

    #[serde(default)]
    pub equity: EquityWeights,

    /// Seats a drill session deals to.
    #[serde(default = "default_positions")]
    pub positions: Vec<Position>,

    /// Betting contexts a drill session samples.
    #[serde(default = "default_scenarios")]
    pub scenarios: Vec<Scenario>,
}

impl Default for TrainerConfig {
    fn default() -> Self {
        Self {
            grading: GradingMode::default(),
            correct_score: default_correct_score(),
            equity: EquityWeights::default(),
            positions: default_positions(),
            scenarios: default_scenarios(),
        }
    }
}

impl TrainerConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::training_engine::error::TrainerError;

    #[test]
    fn empty_object_gives_defaults() {
        assert_eq!(TrainerConfig::from_json("{}").unwrap(), TrainerConfig::default());
    }

    #[test]
    fn overrides_are_applied() {
        let cfg = TrainerConfig::from_json(
            r#"{ "grading": "mixed_support", "positions": ["BTN"], "equity": { "suited": 9.0 } }"#,
        )
        .unwrap();
        assert_eq!(cfg.grading, GradingMode::MixedSupport);
        assert_eq!(cfg.positions, vec![Position::BTN]);
        assert_eq!(cfg.equity.suited, 9.0);
        assert_eq!(cfg.correct_score, 100);
        assert_eq!(cfg.scenarios.len(), 4);
    }

    #[test]
    fn bad_json_is_a_config_error() {
        assert!(matches!(
            TrainerConfig::from_json(r#"{ "grading": "lenient" }"#),
            Err(TrainerError::Config(_))
        ));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        assert!(matches!(
            TrainerConfig::from_path("/nonexistent/trainer.json"),
            Err(TrainerError::Io(_))
        ));
    }
}
