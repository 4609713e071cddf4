use serde::{Serialize, Deserialize};
use std::fmt;
use std::str::FromStr;
use crate::wheel_layout::Label;

/// Label shown when a scripted loss lands next to a bet on zero.
pub const ZERO_NEAR_MISS: u8 = 32;

/// Predetermined win/lose decision for each spin of a session.
/// Index `i` decides spin `i + 1`; the length is the session's spin limit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OutcomeScript(Vec<bool>);

/// Result of a single spin, derived from the script and the bet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    pub won: bool,
    pub landed: Label,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecideError {
    NoSelection,
    ScriptExhausted { spin_index: usize, len: usize },
}

impl fmt::Display for DecideError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoSelection => write!(f, "no number selected"),
            Self::ScriptExhausted { spin_index, len } => {
                write!(f, "spin {} is past the end of a {}-spin script", spin_index + 1, len)
            }
        }
    }
}

impl std::error::Error for DecideError {}

impl Outcome {
    /// Amount credited when the spin resolves. The stake itself is debited at spin time.
    pub fn amount_delta(&self, stake: i64, payout_multiplier: i64) -> i64 {
        if self.won {
            stake.saturating_mul(payout_multiplier)
        } else {
            0
        }
    }
}

/// The label a losing spin lands on. Fixed rather than random so the
/// rotation solver always has a concrete target distinct from the bet.
pub fn near_miss(selected: Label) -> Label {
    if selected == Label::ZERO {
        Label::new(ZERO_NEAR_MISS).unwrap_or(Label::ZERO)
    } else {
        Label::ZERO
    }
}

impl OutcomeScript {
    pub fn new(decisions: Vec<bool>) -> Self {
        Self(decisions)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, spin_index: usize) -> Option<bool> {
        self.0.get(spin_index).copied()
    }

    pub fn decisions(&self) -> &[bool] {
        &self.0
    }

    pub fn decide(&self, spin_index: usize, selected: Option<Label>) -> Result<Outcome, DecideError> {
        let selected = selected.ok_or(DecideError::NoSelection)?;
        let won = self.get(spin_index).ok_or(DecideError::ScriptExhausted {
            spin_index,
            len: self.len(),
        })?;

        let landed = if won { selected } else { near_miss(selected) };
        Ok(Outcome { won, landed })
    }
}

impl Default for OutcomeScript {
    /// Two wins followed by the limit-reached loss.
    fn default() -> Self {
        Self(vec![true, true, false])
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseScriptError(pub String);

impl fmt::Display for ParseScriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid outcome '{}' (expected win or lose)", self.0)
    }
}

impl std::error::Error for ParseScriptError {}

impl FromStr for OutcomeScript {
    type Err = ParseScriptError;

    /// Parses a comma separated list such as `win,win,lose`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split(',')
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(|token| match token.to_ascii_lowercase().as_str() {
                "win" | "w" | "true" => Ok(true),
                "lose" | "loss" | "l" | "false" => Ok(false),
                _ => Err(ParseScriptError(token.to_string())),
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}

impl fmt::Display for OutcomeScript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tokens: Vec<&str> = self.0.iter().map(|&won| if won { "win" } else { "lose" }).collect();
        write!(f, "{}", tokens.join(","))
    }
}
