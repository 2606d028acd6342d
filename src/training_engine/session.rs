//! A training session: deal, classify, resolve, grade, record.
//!
//! Each drill gets a fresh shuffled deck. The session owns the only mutable
//! state (the RNG, the pending drill and the stats); the policy table is
//! borrowed and shared.

use log::{debug, info};
use rand::{rngs::StdRng, Rng, RngCore, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::training_engine::{
    classifier::{classify, HandLabel},
    config::TrainerConfig,
    deck::deal_hand,
    equity::HeuristicEquity,
    error::{Result, TrainerError},
    models::{Action, Card, Position, Scenario},
    policy::PolicyTable,
    resolver::{Decision, Resolver, Spot},
    stats::{SessionRecord, SessionStats},
    verdict::{Grader, Verdict},
};

/// One dealt question awaiting an answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Drill {
    pub drill_id: String,
    pub hand: [Card; 2],
    pub label: HandLabel,
    pub position: Position,
    pub scenario: Scenario,
}

impl Drill {
    pub fn spot(&self) -> Spot {
        Spot { label: self.label, position: self.position, scenario: self.scenario }
    }
}

/// Generate a drill ID such as `"BTN-OP-1A2B3C4D"`.
fn make_drill_id(position: Position, scenario: Scenario, rng: &mut impl RngCore) -> String {
    let prefix = match scenario {
        Scenario::Open           => "OP",
        Scenario::FacingRaise    => "VR",
        Scenario::FacingThreeBet => "V3",
        Scenario::FacingFourBet  => "V4",
    };
    format!("{}-{}-{:08X}", position.code(), prefix, rng.next_u32())
}

pub struct TrainingSession<'t> {
    rng: StdRng,
    resolver: Resolver<'t, HeuristicEquity>,
    grader: Grader,
    pool: Vec<(Position, Scenario)>,
    stats: SessionStats,
    pending: Option<Drill>,
}

impl TrainingSession<'static> {
    /// Session over the built-in policy table.
    ///
    /// `Some(seed)` makes every drill reproducible; `None` seeds from entropy.
    pub fn new(config: &TrainerConfig, rng_seed: Option<u64>) -> Result<Self> {
        Self::with_table(PolicyTable::standard(), config, rng_seed)
    }
}

impl<'t> TrainingSession<'t> {
    pub fn with_table(table: &'t PolicyTable, config: &TrainerConfig, rng_seed: Option<u64>) -> Result<Self> {
        let pool: Vec<(Position, Scenario)> = table
            .keys()
            .into_iter()
            .filter(|(p, s)| config.positions.contains(p) && config.scenarios.contains(s))
            .collect();
        if pool.is_empty() {
            return Err(TrainerError::EmptyDrillPool);
        }
        let rng = match rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None       => StdRng::from_entropy(),
        };
        info!("training session started with {} spots, grading {:?}", pool.len(), config.grading);
        Ok(TrainingSession {
            rng,
            resolver: Resolver::new(table, HeuristicEquity::new(config.equity.clone())),
            grader: Grader::new(config.grading, config.correct_score),
            pool,
            stats: SessionStats::new(),
            pending: None,
        })
    }

    /// Continue a stored session.
    pub fn restore(mut self, record: &SessionRecord) -> Self {
        self.stats = SessionStats::from_record(record);
        self
    }

    /// Deal the next drill, replacing any unanswered one.
    pub fn next_drill(&mut self) -> Result<Drill> {
        let (position, scenario) = self.pool[self.rng.gen_range(0..self.pool.len())];
        let dealt = deal_hand(&mut self.rng, 0)?;
        let label = classify(dealt.hole[0], dealt.hole[1])?;
        let drill = Drill {
            drill_id: make_drill_id(position, scenario, &mut self.rng),
            hand: dealt.hole,
            label,
            position,
            scenario,
        };
        debug!("drill {} -> {label} {position:?}/{scenario:?}", drill.drill_id);
        self.pending = Some(drill.clone());
        Ok(drill)
    }

    pub fn pending(&self) -> Option<&Drill> {
        self.pending.as_ref()
    }

    /// Answer the pending drill. Each drill is graded and recorded once.
    pub fn submit(&mut self, action: Action) -> Result<Verdict> {
        let drill = self.pending.take().ok_or(TrainerError::NoActiveDrill)?;
        Ok(self.grade(drill.spot(), action))
    }

    /// Grade and record an externally supplied spot.
    pub fn grade(&mut self, spot: Spot, action: Action) -> Verdict {
        let decision = self.resolver.resolve_spot(&spot);
        let verdict = self.grader.evaluate(action, &decision, &spot);
        self.stats.record(&verdict, spot.position);
        debug!(
            "{} {:?}: submitted {action}, recommended {} -> {}",
            spot.label, spot.position, verdict.recommended_action, verdict.score_delta
        );
        verdict
    }

    /// Look up the recommendation without grading anything.
    pub fn recommend(&self, spot: &Spot) -> Decision {
        self.resolver.resolve_spot(spot)
    }

    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    pub fn reset(&mut self) {
        self.pending = None;
        self.stats.reset();
    }

    /// Hand the stats over to storage at teardown.
    pub fn into_record(self) -> SessionRecord {
        info!(
            "training session ended: {} hands, best streak {}",
            self.stats.total_hands(),
            self.stats.best_streak()
        );
        self.stats.to_record()
    }
}
