//! N-player rock paper scissors, one round. the whole game is a single
//! simultaneous node: every player commits a hand independently, the
//! joint commitment resolves atomically, and pairwise duels settle a
//! zero-sum payoff. the engine's reference simultaneous-move game.

use crate::Player;
use crate::Probability;
use crate::Utility;
use crate::game::Action;
use crate::game::Error;
use crate::game::Game;
use crate::game::Layout;
use crate::game::Ply;
use crate::game::Rules;
use crate::game::Shape;
use crate::game::Spec;
use crate::game::Turn;
use crate::game::registry;
use crate::game::registry::Params;
use std::sync::Arc;

const HANDS: [&str; 3] = ["Rock", "Paper", "Scissors"];

pub fn load(params: &Params) -> Result<Arc<dyn Game>, Error> {
    registry::expect_keys("rps", params, &["players"])?;
    let players = registry::int_param("rps", params, "players", 3, 2..=5)? as usize;
    let shape = Shape::new(vec![players, HANDS.len()], Layout::Concatenated);
    Ok(Arc::new(Rps {
        spec: Spec {
            name: "rps".to_string(),
            players,
            actions: HANDS.len(),
            depth: 1,
            min_utility: -((players - 1) as Utility),
            max_utility: (players - 1) as Utility,
            sum: Some(0.),
            info_shape: shape.clone(),
            observation_shape: shape,
        },
    }))
}

#[derive(Debug)]
struct Rps {
    spec: Spec,
}

impl Game for Rps {
    fn spec(&self) -> &Spec {
        &self.spec
    }
    fn root(&self) -> Box<dyn Rules> {
        Box::new(RpsState {
            players: self.spec.players,
            committed: None,
        })
    }
}

#[derive(Debug, Clone)]
struct RpsState {
    players: usize,
    committed: Option<Vec<Action>>,
}

/// +1 if a beats b, -1 if b beats a, 0 on a tie. hands are cyclic:
/// each one beats the hand before it mod 3
fn duel(a: Action, b: Action) -> Utility {
    match (3 + a.index() - b.index()) % 3 {
        0 => 0.,
        1 => 1.,
        _ => -1.,
    }
}

impl Rules for RpsState {
    fn turn(&self) -> Turn {
        match self.committed {
            None => Turn::Simultaneous,
            Some(_) => Turn::Terminal,
        }
    }

    fn legal(&self, player: Player) -> Vec<Action> {
        match self.committed.is_none() && player < self.players {
            true => (0..HANDS.len()).map(Action::from).collect(),
            false => vec![],
        }
    }

    fn outcomes(&self) -> Vec<(Action, Probability)> {
        vec![]
    }

    fn apply(&mut self, ply: &Ply) {
        match ply {
            Ply::Joint(hands) => self.committed = Some(hands.clone()),
            Ply::Single(_) => unreachable!("simultaneous nodes take joint plies"),
        }
    }

    fn payoff(&self) -> Vec<Utility> {
        let hands = self.committed.as_ref().expect("terminal");
        (0..self.players)
            .map(|i| {
                (0..self.players)
                    .filter(|j| *j != i)
                    .map(|j| duel(hands[i], hands[j]))
                    .sum()
            })
            .collect()
    }

    /// one plane of 3 per player: zeros while hands are hidden, one-hot
    /// once the joint commitment resolves
    fn info_tensor(&self, player: Player) -> Option<Vec<f32>> {
        self.observation_tensor(player)
    }

    fn observation_tensor(&self, player: Player) -> Option<Vec<f32>> {
        if player >= self.players {
            return None;
        }
        let mut encoding = vec![0.; self.players * HANDS.len()];
        if let Some(hands) = &self.committed {
            for (seat, hand) in hands.iter().enumerate() {
                encoding[seat * HANDS.len() + hand.index()] = 1.;
            }
        }
        Some(encoding)
    }

    fn describe(&self, _: Option<Player>, action: Action) -> String {
        HANDS[action.index()].to_string()
    }

    fn render(&self) -> String {
        match &self.committed {
            None => "RPS: all hands hidden".to_string(),
            Some(hands) => {
                let reveal = hands
                    .iter()
                    .map(|h| HANDS[h.index()])
                    .collect::<Vec<_>>()
                    .join(" ");
                format!("RPS: {}", reveal)
            }
        }
    }

    fn duplicate(&self) -> Box<dyn Rules> {
        Box::new(self.clone())
    }
}
