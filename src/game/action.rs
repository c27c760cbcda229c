use serde::Deserialize;
use serde::Serialize;

/// an integer action identifier in `[0, Spec::actions)`. its meaning is
/// game-specific and resolved relative to the node it is played at,
/// through [crate::game::State::action_to_string].
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Action(u32);

impl Action {
    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

/// u32 isomorphism
impl From<u32> for Action {
    fn from(n: u32) -> Self {
        Self(n)
    }
}
impl From<Action> for u32 {
    fn from(a: Action) -> u32 {
        a.0
    }
}

/// usize injection, for indexing into legal-action tables
impl From<usize> for Action {
    fn from(n: usize) -> Self {
        Self(n as u32)
    }
}
impl From<Action> for usize {
    fn from(a: Action) -> usize {
        a.0 as usize
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
