//! Range notation compiled into fixed-size label sets.
//!
//! Policy data is written the way charts are usually published:
//!
//! ```text
//! 22+, A2s+, KTs+, ATo+, QJo, T9s-54s, A5s-A2s, AK
//! ```
//!
//! | Token      | Meaning |
//! |------------|---------|
//! | `QQ`, `AKs`, `AKo` | one label |
//! | `AK`       | `AKs` and `AKo` |
//! | `77+`      | `77` up to `AA` |
//! | `ATs+`     | kicker climbs to one below the high card: `ATs AJs AQs AKs` |
//! | `22-55`    | pairs between the endpoints |
//! | `A2s-A5s`  | same high card, kickers between the endpoints |
//! | `T9s-54s`  | same gap, both ranks slide (connectors, one-gappers) |

use std::fmt;
use std::str::FromStr;

use crate::training_engine::{
    classifier::{HandLabel, LABEL_COUNT},
    error::{Result, TrainerError},
    models::Rank,
};

/// A set of canonical labels with O(1) membership.
#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub struct LabelSet {
    bits: [u64; 3],
}

impl LabelSet {
    pub const fn empty() -> Self {
        LabelSet { bits: [0; 3] }
    }

    /// Every one of the 169 labels.
    pub fn full() -> Self {
        HandLabel::all().collect()
    }

    pub fn insert(&mut self, label: HandLabel) {
        let i = label.index();
        self.bits[i / 64] |= 1 << (i % 64);
    }

    pub fn contains(&self, label: HandLabel) -> bool {
        let i = label.index();
        self.bits[i / 64] & (1 << (i % 64)) != 0
    }

    pub fn len(&self) -> usize {
        self.bits.iter().map(|w| w.count_ones() as usize).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.iter().all(|&w| w == 0)
    }

    pub fn union(&self, other: &LabelSet) -> LabelSet {
        let mut bits = self.bits;
        for (w, o) in bits.iter_mut().zip(other.bits) {
            *w |= o;
        }
        LabelSet { bits }
    }

    pub fn intersection(&self, other: &LabelSet) -> LabelSet {
        let mut bits = self.bits;
        for (w, o) in bits.iter_mut().zip(other.bits) {
            *w &= o;
        }
        LabelSet { bits }
    }

    pub fn is_disjoint(&self, other: &LabelSet) -> bool {
        self.intersection(other).is_empty()
    }

    /// Labels in grid order.
    pub fn iter(&self) -> impl Iterator<Item = HandLabel> + '_ {
        (0..LABEL_COUNT)
            .filter(|&i| self.bits[i / 64] & (1 << (i % 64)) != 0)
            .filter_map(HandLabel::from_index)
    }

    /// Share of the 1,326 two-card combos this set covers, in `[0, 1]`.
    pub fn combo_fraction(&self) -> f64 {
        let combos: u32 = self.iter().map(|l| l.combos() as u32).sum();
        combos as f64 / 1326.0
    }
}

impl FromIterator<HandLabel> for LabelSet {
    fn from_iter<I: IntoIterator<Item = HandLabel>>(iter: I) -> Self {
        let mut set = LabelSet::empty();
        for label in iter {
            set.insert(label);
        }
        set
    }
}

impl fmt::Debug for LabelSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter().map(|l| l.to_string())).finish()
    }
}

impl FromStr for LabelSet {
    type Err = TrainerError;

    fn from_str(s: &str) -> Result<Self> {
        parse_range(s)
    }
}

/// Non-pair endpoint suitedness; `None` means both.
type Suitedness = Option<bool>;

#[derive(Debug, Clone, Copy)]
struct Endpoint {
    high: Rank,
    low: Rank,
    suited: Suitedness,
}

impl Endpoint {
    fn is_pair(&self) -> bool {
        self.high == self.low
    }

    fn labels(&self) -> Vec<HandLabel> {
        if self.is_pair() {
            return vec![HandLabel::pair(self.high)];
        }
        match self.suited {
            Some(s) => vec![HandLabel::new(self.high, self.low, s)],
            None => vec![
                HandLabel::new(self.high, self.low, true),
                HandLabel::new(self.high, self.low, false),
            ],
        }
    }
}

fn invalid(token: &str, why: &str) -> TrainerError {
    TrainerError::InvalidRange(format!("'{token}': {why}"))
}

fn parse_endpoint(token: &str) -> Result<Endpoint> {
    let chars: Vec<char> = token.chars().collect();
    let rank = |c: char| Rank::from_symbol(c).ok_or_else(|| invalid(token, "unknown rank"));
    let (a, b, suited) = match chars.as_slice() {
        [a, b] => (rank(*a)?, rank(*b)?, None),
        [a, b, m] => {
            let suited = match m.to_ascii_lowercase() {
                's' => true,
                'o' => false,
                _ => return Err(invalid(token, "expected 's' or 'o'")),
            };
            (rank(*a)?, rank(*b)?, Some(suited))
        }
        _ => return Err(invalid(token, "expected two ranks and an optional s/o")),
    };
    if a == b && suited.is_some() {
        return Err(invalid(token, "pairs take no suitedness marker"));
    }
    let (high, low) = if a >= b { (a, b) } else { (b, a) };
    Ok(Endpoint { high, low, suited })
}

fn expand_plus(token: &str, start: Endpoint) -> Result<Vec<HandLabel>> {
    if start.is_pair() {
        return Ok((start.high.0..=14).map(|r| HandLabel::pair(Rank(r))).collect());
    }
    let mut out = Vec::new();
    for kicker in start.low.0..start.high.0 {
        out.extend(Endpoint { low: Rank(kicker), ..start }.labels());
    }
    if out.is_empty() {
        return Err(invalid(token, "nothing to expand"));
    }
    Ok(out)
}

fn expand_dash(token: &str, a: Endpoint, b: Endpoint) -> Result<Vec<HandLabel>> {
    if a.suited != b.suited || a.is_pair() != b.is_pair() {
        return Err(invalid(token, "endpoints differ in kind"));
    }
    if a.is_pair() {
        let (lo, hi) = (a.high.0.min(b.high.0), a.high.0.max(b.high.0));
        return Ok((lo..=hi).map(|r| HandLabel::pair(Rank(r))).collect());
    }
    let mut out = Vec::new();
    if a.high == b.high {
        let (lo, hi) = (a.low.0.min(b.low.0), a.low.0.max(b.low.0));
        for kicker in lo..=hi {
            out.extend(Endpoint { low: Rank(kicker), ..a }.labels());
        }
    } else if a.high.0 - a.low.0 == b.high.0 - b.low.0 {
        let gap = a.high.0 - a.low.0;
        let (lo, hi) = (a.high.0.min(b.high.0), a.high.0.max(b.high.0));
        for top in lo..=hi {
            out.extend(Endpoint { high: Rank(top), low: Rank(top - gap), ..a }.labels());
        }
    } else {
        return Err(invalid(token, "endpoints share neither a high card nor a gap"));
    }
    Ok(out)
}

/// Compile a comma- or whitespace-separated range string into a set.
pub fn parse_range(notation: &str) -> Result<LabelSet> {
    let mut set = LabelSet::empty();
    for token in notation.split(|c: char| c == ',' || c.is_whitespace()).filter(|t| !t.is_empty()) {
        let labels = if let Some(start) = token.strip_suffix('+') {
            expand_plus(token, parse_endpoint(start)?)?
        } else if let Some((a, b)) = token.split_once('-') {
            expand_dash(token, parse_endpoint(a)?, parse_endpoint(b)?)?
        } else {
            parse_endpoint(token)?.labels()
        };
        for label in labels {
            set.insert(label);
        }
    }
    Ok(set)
}
