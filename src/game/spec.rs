use super::tensor::Shape;
use crate::Utility;

/// the immutable descriptor of a registered game. constructed once at
/// load time, shared read-only by every episode derived from it.
#[derive(Debug, Clone, PartialEq)]
pub struct Spec {
    pub(crate) name: String,
    pub(crate) players: usize,
    pub(crate) actions: usize,
    pub(crate) depth: usize,
    pub(crate) min_utility: Utility,
    pub(crate) max_utility: Utility,
    pub(crate) sum: Option<Utility>,
    pub(crate) info_shape: Shape,
    pub(crate) observation_shape: Shape,
}

impl Spec {
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn players(&self) -> usize {
        self.players
    }
    /// exclusive upper bound on action identifiers, across all players
    /// and node kinds
    pub fn actions(&self) -> usize {
        self.actions
    }
    /// upper bound on ply count. the traversal driver treats overrun as
    /// a rules defect
    pub fn depth(&self) -> usize {
        self.depth
    }
    pub fn utility(&self) -> (Utility, Utility) {
        (self.min_utility, self.max_utility)
    }
    /// Some(u) for constant-sum games: terminal returns sum to u
    pub fn sum(&self) -> Option<Utility> {
        self.sum
    }
    pub fn info_shape(&self) -> &Shape {
        &self.info_shape
    }
    pub fn observation_shape(&self) -> &Shape {
        &self.observation_shape
    }
}

impl std::fmt::Display for Spec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({}p, {} actions, depth {})",
            self.name, self.players, self.actions, self.depth
        )
    }
}
