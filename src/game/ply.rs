use super::action::Action;
use serde::Deserialize;
use serde::Serialize;

/// one element of a state's history. chance and single-player nodes
/// append a Single; simultaneous nodes append the whole joint vector
/// atomically, one action per player in seat order.
#[derive(Debug, Clone, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub enum Ply {
    Single(Action),
    Joint(Vec<Action>),
}

impl std::fmt::Display for Ply {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Single(a) => write!(f, "{}", a),
            Self::Joint(v) => {
                let joint = v
                    .iter()
                    .map(|a| a.to_string())
                    .collect::<Vec<_>>()
                    .join(" ");
                write!(f, "{}", joint)
            }
        }
    }
}
