use log::debug;
use rand::Rng;

use crate::training_engine::{
    error::{Result, TrainerError},
    models::{Card, Rank, Suit},
};

/// Community cards never exceed a full runout.
pub const MAX_BOARD_CARDS: usize = 5;

/// A standard 52-card deck that can be shuffled and dealt from.
///
/// Dealt cards are never handed out again; the only way to get them back is
/// to build a new deck.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
    cursor: usize,
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck {
    /// A fresh deck in suit-major, rank-ascending order.
    pub fn new() -> Self {
        let cards = Suit::ALL
            .iter()
            .flat_map(|&suit| Rank::all().map(move |rank| Card { rank, suit }))
            .collect();
        Deck { cards, cursor: 0 }
    }

    /// Build a fresh deck and shuffle it with `rng`.
    pub fn new_shuffled<R: Rng>(rng: &mut R) -> Self {
        let mut deck = Self::new();
        deck.shuffle(rng);
        deck
    }

    /// Fisher-Yates over the undealt remainder.
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        let rest = &mut self.cards[self.cursor..];
        for i in (1..rest.len()).rev() {
            let j = rng.gen_range(0..=i);
            rest.swap(i, j);
        }
    }

    /// Deal one card.
    pub fn deal_one(&mut self) -> Result<Card> {
        let card = *self.cards.get(self.cursor).ok_or(TrainerError::InsufficientCards {
            requested: 1,
            remaining: 0,
        })?;
        self.cursor += 1;
        Ok(card)
    }

    /// Deal the next `n` cards; the deck keeps the remainder.
    ///
    /// Fails without dealing anything when fewer than `n` cards remain.
    pub fn deal(&mut self, n: usize) -> Result<Vec<Card>> {
        let remaining = self.remaining();
        if n > remaining {
            return Err(TrainerError::InsufficientCards { requested: n, remaining });
        }
        let dealt = self.cards[self.cursor..self.cursor + n].to_vec();
        self.cursor += n;
        Ok(dealt)
    }

    /// Remaining cards available.
    pub fn remaining(&self) -> usize {
        self.cards.len() - self.cursor
    }

    /// The undealt cards, in dealing order.
    pub fn remainder(&self) -> &[Card] {
        &self.cards[self.cursor..]
    }

    /// All dealt cards so far (useful for integrity checks).
    pub fn dealt_cards(&self) -> &[Card] {
        &self.cards[..self.cursor]
    }
}

/// Two hole cards plus the community cards dealt alongside them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DealtHand {
    pub hole: [Card; 2],
    pub board: Vec<Card>,
}

/// Deal hero hand (2 cards) + board cards from a freshly shuffled deck.
pub fn deal_hand<R: Rng>(rng: &mut R, board_cards: usize) -> Result<DealtHand> {
    if board_cards > MAX_BOARD_CARDS {
        return Err(TrainerError::InvalidHandInput(format!(
            "a board holds at most {MAX_BOARD_CARDS} cards, asked for {board_cards}"
        )));
    }
    let mut deck = Deck::new_shuffled(rng);
    let hole = [deck.deal_one()?, deck.deal_one()?];
    let board = deck.deal(board_cards)?;
    debug!("dealt {}{} board [{}]", hole[0], hole[1], board_str(&board));
    Ok(DealtHand { hole, board })
}

/// Format board as space-separated string (e.g. "Ac Ks 7h").
pub fn board_str(board: &[Card]) -> String {
    board.iter().map(|c| c.to_string()).collect::<Vec<_>>().join(" ")
}
