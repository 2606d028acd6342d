//! Cross-module tests for the `preflop_trainer` crate.
//!
//! Included from `lib.rs` under `#[cfg(test)]`.
//!
//! # Coverage
//!
//! | Group | What is tested |
//! |-------|----------------|
//! | Classifier | Symmetry over every ordered pair; exactly 169 labels |
//! | Deck integrity | Hole + full board never repeat a card; shuffle is ~uniform |
//! | Policy | Disjoint tiers everywhere; resolution is deterministic |
//! | Pipeline | Concrete classify → resolve → evaluate cases |
//! | Stats | Accuracy identity after arbitrary sequences; streak example |

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::training_engine::{
    classify, deal_hand, evaluate, resolve, Action, Card, Deck, HandLabel, PolicyTable, Position,
    Rank, Scenario, SessionStats, Spot, Suit, TrainerConfig, TrainingSession,
};

// ── helpers ──────────────────────────────────────────────────────────────────

fn full_deck() -> Vec<Card> {
    Suit::ALL
        .iter()
        .flat_map(|&s| Rank::all().map(move |r| Card::new(r, s)))
        .collect()
}

fn card(s: &str) -> Card {
    s.parse().unwrap()
}

fn label(s: &str) -> HandLabel {
    s.parse().unwrap()
}

/// Five seeds that span different RNG states.
const SEEDS: [u64; 5] = [1, 42, 999, 0xDEAD_BEEF, 7];

// ── classifier ───────────────────────────────────────────────────────────────

#[test]
fn classify_is_symmetric_and_has_169_images() {
    let deck = full_deck();
    let mut labels = HashSet::new();
    let mut pairs = 0usize;
    for (i, &a) in deck.iter().enumerate() {
        for &b in &deck[i + 1..] {
            let ab = classify(a, b).unwrap();
            let ba = classify(b, a).unwrap();
            assert_eq!(ab, ba, "{a}{b}");
            labels.insert(ab.to_string());
            pairs += 1;
        }
    }
    assert_eq!(pairs, 1326);
    assert_eq!(labels.len(), 169);
}

#[test]
fn concrete_labels() {
    assert_eq!(classify(card("As"), card("Ks")).unwrap().to_string(), "AKs");
    assert_eq!(classify(card("7h"), card("2d")).unwrap().to_string(), "72o");
    assert_eq!(classify(card("Td"), card("Tc")).unwrap().to_string(), "TT");
}

// ── deck integrity ───────────────────────────────────────────────────────────

#[test]
fn hole_cards_and_full_board_never_repeat() {
    let mut rng = StdRng::seed_from_u64(2024);
    for _ in 0..500 {
        let dealt = deal_hand(&mut rng, 5).unwrap();
        let all: HashSet<Card> = dealt.hole.iter().chain(dealt.board.iter()).copied().collect();
        assert_eq!(all.len(), 7);
    }
}

#[test]
fn shuffle_is_roughly_uniform_per_position() {
    const TRIALS: usize = 26_000;
    let deck = full_deck();
    let index_of = |c: &Card| deck.iter().position(|d| d == c).unwrap();

    let mut counts = vec![[0u32; 52]; 52];
    let mut rng = StdRng::seed_from_u64(0x5EED);
    for _ in 0..TRIALS {
        let mut d = Deck::new_shuffled(&mut rng);
        for (pos, c) in d.deal(52).unwrap().iter().enumerate() {
            counts[index_of(c)][pos] += 1;
        }
    }
    // Expected 500 per cell; allow 25% either way.
    let expected = (TRIALS / 52) as f64;
    for (ci, row) in counts.iter().enumerate() {
        for (pos, &n) in row.iter().enumerate() {
            let dev = (n as f64 - expected).abs() / expected;
            assert!(dev < 0.25, "card {} at {pos}: {n} (expected {expected})", deck[ci]);
        }
    }
}

// ── policy ───────────────────────────────────────────────────────────────────

#[test]
fn no_entry_raises_and_calls_the_same_label() {
    let table = PolicyTable::standard();
    assert!(!table.is_empty());
    for (pos, scen) in table.keys() {
        let e = table.entry(pos, scen).unwrap();
        for l in HandLabel::all() {
            assert!(!(e.raise_set().contains(l) && e.call_set().contains(l)), "{l} {pos:?}/{scen:?}");
        }
    }
}

#[test]
fn resolve_is_deterministic_across_calls() {
    for seed in SEEDS {
        let mut rng = StdRng::seed_from_u64(seed);
        for _ in 0..50 {
            let l = HandLabel::from_index(rng.gen_range(0..169)).unwrap();
            let p = Position::ALL[rng.gen_range(0..6)];
            let s = Scenario::ALL[rng.gen_range(0..4)];
            assert_eq!(resolve(l, p, s), resolve(l, p, s));
        }
    }
}

#[test]
fn every_decision_is_well_formed() {
    for l in HandLabel::all() {
        for p in Position::ALL {
            for s in Scenario::ALL {
                let d = resolve(l, p, s);
                assert!((0.0..=1.0).contains(&d.frequency));
                assert!((0.0..=100.0).contains(&d.equity_estimate));
                let total: f64 = [Action::Raise, Action::Call, Action::Fold]
                    .iter()
                    .map(|&a| d.share(a))
                    .sum();
                assert!((total - 1.0).abs() < 1e-9, "{l} {p:?}/{s:?} shares sum to {total}");
            }
        }
    }
}

// ── pipeline ─────────────────────────────────────────────────────────────────

#[test]
fn aks_on_the_button_is_an_open_raise() {
    let d = resolve(label("AKs"), Position::BTN, Scenario::Open);
    assert_eq!(d.action, Action::Raise);
    assert!((d.frequency - 0.9).abs() < 1e-9);
    assert!(d.equity_estimate > 70.0);
}

#[test]
fn seven_deuce_under_the_gun_is_a_fold() {
    let d = resolve(label("72o"), Position::UTG, Scenario::Open);
    assert_eq!(d.action, Action::Fold);
    assert_eq!(d.frequency, 1.0);
}

#[test]
fn three_right_then_one_wrong() {
    let mut stats = SessionStats::new();
    let spot = Spot { label: label("AKs"), position: Position::BTN, scenario: Scenario::Open };
    let d = resolve(spot.label, spot.position, spot.scenario);
    for _ in 0..3 {
        stats.record(&evaluate(Action::Raise, &d, &spot), spot.position);
    }
    stats.record(&evaluate(Action::Call, &d, &spot), spot.position);
    assert_eq!(stats.current_streak(), 0);
    assert_eq!(stats.best_streak(), 3);
    assert_eq!(stats.total_hands(), 4);
    assert_eq!(stats.correct_count(), 3);
}

// ── stats ────────────────────────────────────────────────────────────────────

#[test]
fn accuracy_identity_holds_for_random_sessions() {
    for seed in SEEDS {
        let mut session = TrainingSession::new(&TrainerConfig::default(), Some(seed)).unwrap();
        let mut rng = StdRng::seed_from_u64(seed ^ 0xABCD);
        for _ in 0..300 {
            session.next_drill().unwrap();
            let action = [Action::Raise, Action::Call, Action::Fold][rng.gen_range(0..3)];
            session.submit(action).unwrap();

            let stats = session.stats();
            assert!(stats.correct_count() <= stats.total_hands());
            let expected = stats.correct_count() as f64 / stats.total_hands() as f64 * 100.0;
            assert!((stats.accuracy() - expected).abs() < 1e-9);
            let positional: u32 = stats.per_position_counts().values().sum();
            assert_eq!(positional, stats.total_hands());
            for (pos, acc) in stats.per_position_accuracy() {
                let derived = stats.correct_at(pos) as f64 / stats.hands_at(pos) as f64 * 100.0;
                assert!((acc - derived).abs() < 1e-9);
            }
        }
    }
}

#[test]
fn empty_stats_report_zero() {
    let stats = SessionStats::new();
    assert_eq!(stats.accuracy(), 0.0);
    assert_eq!(stats.accuracy_for(Position::CO), 0.0);
    assert!(stats.per_position_accuracy().is_empty());
}
