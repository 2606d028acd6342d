//! Running session statistics.
//!
//! Per-position accuracy is derived on read from raw correct/total counters,
//! so it always equals a recomputation from the full verdict history.
//! [`SessionRecord`] is the serialized shape handed to storage.

use std::collections::BTreeMap;

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::training_engine::{models::Position, verdict::Verdict};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Tally {
    correct: u32,
    total: u32,
}

impl Tally {
    fn accuracy(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.correct as f64 / self.total as f64 * 100.0
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionStats {
    total_hands: u32,
    correct_count: u32,
    current_streak: u32,
    best_streak: u32,
    total_score: u64,
    by_position: BTreeMap<Position, Tally>,
}

impl SessionStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one verdict into the aggregates.
    pub fn record(&mut self, verdict: &Verdict, position: Position) {
        self.total_hands += 1;
        self.total_score += verdict.score_delta as u64;
        if verdict.correct {
            self.correct_count += 1;
            self.current_streak += 1;
            self.best_streak = self.best_streak.max(self.current_streak);
        } else {
            self.current_streak = 0;
        }
        let tally = self.by_position.entry(position).or_default();
        tally.total += 1;
        if verdict.correct {
            tally.correct += 1;
        }
    }

    pub fn reset(&mut self) {
        info!("resetting session stats after {} hands", self.total_hands);
        *self = Self::default();
    }

    pub fn total_hands(&self) -> u32 {
        self.total_hands
    }

    pub fn correct_count(&self) -> u32 {
        self.correct_count
    }

    pub fn current_streak(&self) -> u32 {
        self.current_streak
    }

    pub fn best_streak(&self) -> u32 {
        self.best_streak
    }

    /// Sum of every verdict's score delta.
    pub fn total_score(&self) -> u64 {
        self.total_score
    }

    /// Overall accuracy in percent; 0 before the first hand.
    pub fn accuracy(&self) -> f64 {
        Tally { correct: self.correct_count, total: self.total_hands }.accuracy()
    }

    pub fn hands_at(&self, position: Position) -> u32 {
        self.by_position.get(&position).map_or(0, |t| t.total)
    }

    pub fn correct_at(&self, position: Position) -> u32 {
        self.by_position.get(&position).map_or(0, |t| t.correct)
    }

    /// Accuracy in percent for one position; 0 for an unplayed position.
    pub fn accuracy_for(&self, position: Position) -> f64 {
        self.by_position.get(&position).map_or(0.0, Tally::accuracy)
    }

    /// Only positions with at least one hand appear.
    pub fn per_position_counts(&self) -> BTreeMap<Position, u32> {
        self.by_position.iter().map(|(&p, t)| (p, t.total)).collect()
    }

    /// Only positions with at least one hand appear.
    pub fn per_position_accuracy(&self) -> BTreeMap<Position, f64> {
        self.by_position.iter().map(|(&p, t)| (p, t.accuracy())).collect()
    }

    pub fn to_record(&self) -> SessionRecord {
        SessionRecord {
            total_hands: self.total_hands,
            correct_count: self.correct_count,
            current_streak: self.current_streak,
            best_streak: self.best_streak,
            total_score: self.total_score,
            per_position_counts: self.per_position_counts(),
            per_position_accuracy: self.per_position_accuracy(),
        }
    }

    /// Rebuild stats from a stored record.
    ///
    /// Per-position correct counts are recovered from accuracy and count.
    /// Inconsistent records are clamped into a valid state.
    pub fn from_record(record: &SessionRecord) -> Self {
        let mut by_position = BTreeMap::new();
        for (&position, &total) in &record.per_position_counts {
            if total == 0 {
                continue;
            }
            let acc = record.per_position_accuracy.get(&position).copied().unwrap_or(0.0);
            let correct = (acc.clamp(0.0, 100.0) / 100.0 * total as f64).round() as u32;
            by_position.insert(position, Tally { correct: correct.min(total), total });
        }

        let mut stats = SessionStats {
            total_hands: record.total_hands,
            correct_count: record.correct_count,
            current_streak: record.current_streak,
            best_streak: record.best_streak,
            total_score: record.total_score,
            by_position,
        };
        if stats.correct_count > stats.total_hands {
            warn!(
                "stored record has {} correct of {} hands; clamping",
                stats.correct_count, stats.total_hands
            );
            stats.correct_count = stats.total_hands;
        }
        if stats.current_streak > stats.correct_count {
            warn!("stored streak {} exceeds correct count; clamping", stats.current_streak);
            stats.current_streak = stats.correct_count;
        }
        stats.best_streak = stats.best_streak.clamp(stats.current_streak, stats.correct_count);
        let positional: u32 = stats.by_position.values().map(|t| t.total).sum();
        if positional != stats.total_hands {
            warn!(
                "per-position counts sum to {positional}, record says {} hands",
                stats.total_hands
            );
        }
        info!("restored session: {} hands, {:.1}% accuracy", stats.total_hands, stats.accuracy());
        stats
    }
}

/// Storage shape of [`SessionStats`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    pub total_hands: u32,
    pub correct_count: u32,
    pub current_streak: u32,
    pub best_streak: u32,
    #[serde(default)]
    pub total_score: u64,
    #[serde(default)]
    pub per_position_counts: BTreeMap<Position, u32>,
    #[serde(default)]
    pub per_position_accuracy: BTreeMap<Position, f64>,
}

impl From<&SessionStats> for SessionRecord {
    fn from(stats: &SessionStats) -> Self {
        stats.to_record()
    }
}

impl From<&SessionRecord> for SessionStats {
    fn from(record: &SessionRecord) -> Self {
        SessionStats::from_record(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::training_engine::models::Action;

    fn verdict(correct: bool) -> Verdict {
        Verdict {
            correct,
            recommended_action: Action::Raise,
            submitted_action: if correct { Action::Raise } else { Action::Fold },
            score_delta: if correct { 100 } else { 0 },
            explanation_text: String::new(),
        }
    }

    #[test]
    fn streak_resets_on_a_miss() {
        let mut stats = SessionStats::new();
        for _ in 0..3 {
            stats.record(&verdict(true), Position::BTN);
        }
        stats.record(&verdict(false), Position::BTN);
        assert_eq!(stats.current_streak(), 0);
        assert_eq!(stats.best_streak(), 3);
        assert_eq!(stats.total_hands(), 4);
        assert_eq!(stats.correct_count(), 3);
        assert_eq!(stats.total_score(), 300);
        assert!((stats.accuracy() - 75.0).abs() < 1e-9);
    }

    #[test]
    fn best_streak_tracks_longest_run() {
        let mut stats = SessionStats::new();
        let pattern = [true, true, false, true, true, true, true, false, true];
        for c in pattern {
            stats.record(&verdict(c), Position::CO);
            assert!(stats.best_streak() >= stats.current_streak());
        }
        assert_eq!(stats.best_streak(), 4);
        assert_eq!(stats.current_streak(), 1);
    }

    #[test]
    fn per_position_accuracy_matches_incremental_mean() {
        let mut stats = SessionStats::new();
        let mut running = 0.0f64;
        let mut count = 0u32;
        let seq = [true, false, false, true, true, false, true];
        for c in seq {
            stats.record(&verdict(c), Position::SB);
            let old = count as f64;
            count += 1;
            running = (running * old + if c { 100.0 } else { 0.0 }) / count as f64;
            assert!((stats.accuracy_for(Position::SB) - running).abs() < 1e-9);
        }
        assert_eq!(stats.hands_at(Position::SB), 7);
        assert_eq!(stats.correct_at(Position::SB), 4);
    }

    #[test]
    fn unplayed_positions_are_absent_and_zero() {
        let mut stats = SessionStats::new();
        stats.record(&verdict(true), Position::UTG);
        assert!(!stats.per_position_counts().contains_key(&Position::BB));
        assert!(!stats.per_position_accuracy().contains_key(&Position::BB));
        assert_eq!(stats.accuracy_for(Position::BB), 0.0);
    }

    #[test]
    fn reset_zeroes_everything() {
        let mut stats = SessionStats::new();
        stats.record(&verdict(true), Position::UTG);
        stats.record(&verdict(false), Position::HJ);
        stats.reset();
        assert_eq!(stats, SessionStats::new());
        assert!(stats.per_position_counts().is_empty());
        assert_eq!(stats.accuracy(), 0.0);
    }

    #[test]
    fn record_uses_storage_key_names() {
        let mut stats = SessionStats::new();
        stats.record(&verdict(true), Position::BTN);
        let v = serde_json::to_value(stats.to_record()).unwrap();
        assert_eq!(v["totalHands"], 1);
        assert_eq!(v["perPositionCounts"]["BTN"], 1);
        assert_eq!(v["perPositionAccuracy"]["BTN"], 100.0);
    }

    #[test]
    fn restore_rebuilds_counters() {
        let mut stats = SessionStats::new();
        for (c, p) in [(true, Position::BTN), (false, Position::BTN), (true, Position::BB)] {
            stats.record(&verdict(c), p);
        }
        let json = serde_json::to_string(&stats.to_record()).unwrap();
        let record: SessionRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(SessionStats::from_record(&record), stats);
    }

    #[test]
    fn restore_clamps_inconsistent_records() {
        let record = SessionRecord {
            total_hands: 2,
            correct_count: 5,
            current_streak: 9,
            best_streak: 1,
            ..Default::default()
        };
        let stats = SessionStats::from_record(&record);
        assert_eq!(stats.correct_count(), 2);
        assert_eq!(stats.current_streak(), 2);
        assert_eq!(stats.best_streak(), 2);
    }
}
