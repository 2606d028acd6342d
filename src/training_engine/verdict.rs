//! Grades a submitted action against a resolved [`Decision`].
//!
//! Grading is a pure function of its inputs; recording the result is the
//! statistics tracker's job.

use serde::{Deserialize, Serialize};

use crate::training_engine::{
    models::Action,
    resolver::{Decision, Spot},
};

/// Points for a correct answer under the default grader.
pub const FULL_SCORE: u32 = 100;

/// How mixed recommendations are graded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GradingMode {
    /// Only the primary action is correct; binary scoring.
    #[default]
    Strict,
    /// Any action the policy takes with nonzero frequency is correct. The
    /// minority action earns credit in proportion to its share.
    MixedSupport,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Verdict {
    pub correct: bool,
    pub recommended_action: Action,
    pub submitted_action: Action,
    pub score_delta: u32,
    pub explanation_text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grader {
    pub mode: GradingMode,
    pub correct_score: u32,
}

impl Default for Grader {
    fn default() -> Self {
        Grader { mode: GradingMode::Strict, correct_score: FULL_SCORE }
    }
}

impl Grader {
    pub fn new(mode: GradingMode, correct_score: u32) -> Self {
        Grader { mode, correct_score }
    }

    pub fn evaluate(&self, submitted: Action, decision: &Decision, spot: &Spot) -> Verdict {
        let (correct, score_delta) = self.score(submitted, decision);
        Verdict {
            correct,
            recommended_action: decision.action,
            submitted_action: submitted,
            score_delta,
            explanation_text: explain(submitted, decision, spot, correct),
        }
    }

    fn score(&self, submitted: Action, decision: &Decision) -> (bool, u32) {
        if submitted == decision.action {
            return (true, self.correct_score);
        }
        match self.mode {
            GradingMode::Strict => (false, 0),
            GradingMode::MixedSupport => {
                let share = decision.share(submitted);
                if share <= 0.0 {
                    return (false, 0);
                }
                let primary = decision.frequency.max(share);
                let credit = (self.correct_score as f64 * share / primary).round() as u32;
                (true, credit)
            }
        }
    }
}

/// Grade with binary scoring.
pub fn evaluate(submitted: Action, decision: &Decision, spot: &Spot) -> Verdict {
    Grader::default().evaluate(submitted, decision, spot)
}

fn percent(share: f64) -> u32 {
    (share * 100.0).round() as u32
}

fn explain(submitted: Action, decision: &Decision, spot: &Spot, correct: bool) -> String {
    let Spot { label, position, scenario } = *spot;
    let recommended = decision.action;
    let equity = decision.equity_estimate;

    if submitted == recommended {
        let how_often = if decision.is_mixed() {
            format!(" ({}% of the time)", percent(decision.frequency))
        } else {
            String::new()
        };
        return format!(
            "Correct. With {label} in the {position} ({scenario}) the policy says \
             {recommended}{how_often}. Estimated equity {equity:.0}/100."
        );
    }

    let submitted_share = percent(decision.share(submitted));
    if correct {
        format!(
            "Acceptable. With {label} in the {position} ({scenario}) the policy prefers \
             {recommended} ({}% of the time) but also plays {submitted} {submitted_share}% \
             of the time. Estimated equity {equity:.0}/100.",
            percent(decision.frequency)
        )
    } else {
        let gap = percent(decision.frequency) - submitted_share.min(percent(decision.frequency));
        format!(
            "Incorrect. With {label} in the {position} ({scenario}) you chose {submitted}, \
             the policy plays {recommended} {}% of the time and {submitted} {submitted_share}%, \
             a gap of {gap} points. Estimated equity {equity:.0}/100.",
            percent(decision.frequency)
        )
    }
}
