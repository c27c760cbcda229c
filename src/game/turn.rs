use crate::Player;
use serde::Deserialize;
use serde::Serialize;

/// node classification. exactly one variant holds at any point in an
/// episode, and Terminal is absorbing.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub enum Turn {
    Chance,
    Simultaneous,
    Choice(Player),
    Terminal,
}

impl Turn {
    pub fn is_chance(&self) -> bool {
        matches!(self, Self::Chance)
    }
    pub fn is_simultaneous(&self) -> bool {
        matches!(self, Self::Simultaneous)
    }
    pub fn is_choice(&self) -> bool {
        matches!(self, Self::Choice(_))
    }
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Terminal)
    }
    pub fn position(&self) -> Option<Player> {
        match self {
            Self::Choice(p) => Some(*p),
            _ => None,
        }
    }
}

impl std::fmt::Display for Turn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Choice(p) => write!(f, "P{}", p),
            Self::Simultaneous => write!(f, "**"),
            Self::Terminal => write!(f, "XX"),
            Self::Chance => write!(f, "??"),
        }
    }
}
