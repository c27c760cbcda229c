use crate::Utility;
use crate::game::Ply;
use crate::game::Turn;
use serde::Serialize;

/// one applied transition: the classification the node had, the ply
/// that resolved it, and any immediate per-player rewards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Step {
    pub turn: Turn,
    pub ply: Ply,
    pub rewards: Vec<Utility>,
}

/// the record of one full episode: every step taken plus the terminal
/// returns, one utility per player.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trace {
    pub steps: Vec<Step>,
    pub returns: Vec<Utility>,
}

impl Trace {
    pub fn len(&self) -> usize {
        self.steps.len()
    }
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl std::fmt::Display for Trace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for step in &self.steps {
            writeln!(f, "{} {}", step.turn, step.ply)?;
        }
        let returns = self
            .returns
            .iter()
            .map(|u| u.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        write!(f, "XX [{}]", returns)
    }
}
