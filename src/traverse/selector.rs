use crate::Player;
use crate::game::Action;
use crate::game::Odds;

/// the injected action-selection strategy, polymorphic over node kind.
/// the driver restricts every call to the legal/outcome set for the
/// current node; implementations must answer from the offered set.
pub trait Selector {
    /// pick one outcome from a chance distribution
    fn chance(&mut self, odds: &Odds) -> Action;
    /// pick the acting player's action at a single-player node
    fn choose(&mut self, player: Player, legal: &[Action]) -> Action;
    /// pick one action per player at a simultaneous node. the default
    /// asks each player independently
    fn joint(&mut self, legal: &[Vec<Action>]) -> Vec<Action> {
        legal
            .iter()
            .enumerate()
            .map(|(player, actions)| self.choose(player, actions))
            .collect()
    }
}

/// uniform-random selection with caller-owned, seedable randomness:
/// chance outcomes by their declared probabilities, decisions uniformly.
#[derive(Debug)]
pub struct Uniform(rand::rngs::SmallRng);

impl Uniform {
    pub fn seeded(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::SmallRng::seed_from_u64(seed))
    }
}

impl Default for Uniform {
    fn default() -> Self {
        Self::seeded(rand::random::<u64>())
    }
}

impl Selector for Uniform {
    fn chance(&mut self, odds: &Odds) -> Action {
        odds.sample(&mut self.0)
    }
    fn choose(&mut self, _: Player, legal: &[Action]) -> Action {
        use rand::Rng;
        legal[self.0.random_range(0..legal.len())]
    }
}
