//! A scripted training session end to end.
//!
//! Run with: `RUST_LOG=debug cargo run --example session`
//!
//! 1. **Single spot**: classify AKs, resolve it on the button, grade a raise.
//! 2. **Drill loop**: twelve seeded drills answered by a naive "play pairs
//!    and suited hands" trainee, under strict and mixed-support grading.
//! 3. **Storage handoff**: the session record as JSON, then restored.

use preflop_trainer::{
    classify, evaluate, resolve, Action, Card, Drill, GradingMode, Position, Scenario,
    SessionRecord, Spot, TrainerConfig, TrainingSession,
};

/// The trainee: raises pairs and suited broadways, calls other suited hands,
/// folds everything else.
fn naive_answer(drill: &Drill) -> Action {
    let l = drill.label;
    if l.is_pair() || (l.is_suited() && l.low().value() >= 10) {
        Action::Raise
    } else if l.is_suited() {
        Action::Call
    } else {
        Action::Fold
    }
}

fn print_drill(drill: &Drill) {
    println!(
        "  [{}] {}{} ({})  {}  {}",
        drill.drill_id, drill.hand[0], drill.hand[1], drill.label, drill.position, drill.scenario
    );
}

fn run(grading: GradingMode, seed: u64) -> Result<SessionRecord, preflop_trainer::TrainerError> {
    let config = TrainerConfig { grading, ..Default::default() };
    let mut session = TrainingSession::new(&config, Some(seed))?;
    for _ in 0..12 {
        let drill = session.next_drill()?;
        print_drill(&drill);
        let verdict = session.submit(naive_answer(&drill))?;
        let mark = if verdict.correct { "✓" } else { "✗" };
        println!("      {mark} +{:<3} {}", verdict.score_delta, verdict.explanation_text);
    }
    let stats = session.stats();
    println!();
    println!(
        "  {} hands, {} correct ({:.1}%), best streak {}, score {}",
        stats.total_hands(),
        stats.correct_count(),
        stats.accuracy(),
        stats.best_streak(),
        stats.total_score()
    );
    for (pos, acc) in stats.per_position_accuracy() {
        println!("    {:<4} {:>2} hands  {:>5.1}%", pos.code(), stats.hands_at(pos), acc);
    }
    Ok(session.into_record())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    println!();
    println!("══ Single spot ══");
    println!();
    let a: Card = "As".parse()?;
    let b: Card = "Ks".parse()?;
    let label = classify(a, b)?;
    let decision = resolve(label, Position::BTN, Scenario::Open);
    let spot = Spot { label, position: Position::BTN, scenario: Scenario::Open };
    println!("  {label} on the button: {}", serde_json::to_string(&decision)?);
    println!("  {}", evaluate(Action::Raise, &decision, &spot).explanation_text);

    println!();
    println!("══ Drill loop, strict grading (seed 1001) ══");
    println!();
    run(GradingMode::Strict, 1001)?;

    println!();
    println!("══ Drill loop, mixed-support grading (seed 1001) ══");
    println!();
    let record = run(GradingMode::MixedSupport, 1001)?;

    println!();
    println!("══ Storage handoff ══");
    println!();
    let json = serde_json::to_string_pretty(&record)?;
    println!("{json}");
    let stored: SessionRecord = serde_json::from_str(&json)?;
    let resumed = TrainingSession::new(&TrainerConfig::default(), None)?.restore(&stored);
    println!();
    println!("  resumed with {} hands on record", resumed.stats().total_hands());
    Ok(())
}
