use log::debug;
use serde::{Deserialize, Serialize};

use crate::training_engine::{
    classifier::HandLabel,
    equity::{EquityModel, HeuristicEquity},
    models::{Action, Position, Scenario},
    policy::{PolicyTable, Tier},
};

/// The hand, seat and betting context being decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Spot {
    pub label: HandLabel,
    pub position: Position,
    pub scenario: Scenario,
}

/// A resolved recommendation.
///
/// `action` is taken with `frequency`; when the tier is mixed, `remainder`
/// names the action that takes the rest.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Decision {
    pub action: Action,
    pub frequency: f64,
    pub equity_estimate: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remainder: Option<Action>,
}

impl Decision {
    /// How often the policy takes `action` here, in `[0, 1]`.
    pub fn share(&self, action: Action) -> f64 {
        if action == self.action {
            self.frequency
        } else if Some(action) == self.remainder {
            1.0 - self.frequency
        } else {
            0.0
        }
    }

    pub fn is_mixed(&self) -> bool {
        self.remainder.is_some()
    }
}

/// Looks up the policy table and attaches an equity estimate.
///
/// Holds only shared references, so one resolver can serve any number of
/// sessions.
#[derive(Debug, Clone)]
pub struct Resolver<'t, E = HeuristicEquity> {
    table: &'t PolicyTable,
    equity: E,
}

impl Resolver<'static, HeuristicEquity> {
    /// Built-in table with the default heuristic.
    pub fn standard() -> Self {
        Resolver::new(PolicyTable::standard(), HeuristicEquity::default())
    }
}

impl<'t, E: EquityModel> Resolver<'t, E> {
    pub fn new(table: &'t PolicyTable, equity: E) -> Self {
        Resolver { table, equity }
    }

    pub fn table(&self) -> &'t PolicyTable {
        self.table
    }

    pub fn resolve(&self, label: HandLabel, position: Position, scenario: Scenario) -> Decision {
        let equity_estimate = self.equity.estimate(label, position);
        let entry = match self.table.entry(position, scenario) {
            Ok(entry) => entry,
            Err(e) => {
                debug!("{e}; defaulting {label} to fold");
                return Decision { action: Action::Fold, frequency: 1.0, equity_estimate, remainder: None };
            }
        };

        let (action, mix) = match entry.tier_of(label) {
            Tier::Raise => (Action::Raise, Some(entry.raise_mix())),
            Tier::Call => (Action::Call, Some(entry.call_mix())),
            Tier::Fold => (Action::Fold, None),
        };
        let (frequency, remainder) = match mix {
            Some(mix) if mix.frequency < 1.0 && mix.remainder != action => {
                (mix.frequency, Some(mix.remainder))
            }
            _ => (1.0, None),
        };
        let decision = Decision { action, frequency, equity_estimate, remainder };
        debug!("resolved {label} {position:?}/{scenario:?} -> {decision:?}");
        decision
    }

    pub fn resolve_spot(&self, spot: &Spot) -> Decision {
        self.resolve(spot.label, spot.position, spot.scenario)
    }
}

/// Resolve against the built-in table with the default heuristic.
pub fn resolve(label: HandLabel, position: Position, scenario: Scenario) -> Decision {
    Resolver::standard().resolve(label, position, scenario)
}
