//! N-player Kuhn poker. a deck of `players + 1` ranked cards, one ante
//! each, one hidden card dealt per seat through a run of chance nodes,
//! then a single betting pass: pass or bet one chip; once somebody bets,
//! everyone else calls or folds; showdown among the players still in.
//! small enough to enumerate, rich enough to exercise chance nodes,
//! decision nodes, imperfect-information tensors, and multi-ply
//! serialization.

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

const PASS: usize = 0;
const BET: usize = 1;

pub fn load(params: &Params) -> Result<Arc<dyn Game>, Error> {
    registry::expect_keys("kuhn", params, &["players"])?;
    let players = registry::int_param("kuhn", params, "players", 2, 2..=10)? as usize;
    let deck = players + 1;
    let rounds = 2 * players - 1;
    Ok(Arc::new(Kuhn {
        spec: Spec {
            name: "kuhn".to_string(),
            players,
            // deal identifiers are card ranks, so they dominate the bound
            actions: deck,
            depth: players + rounds,
            min_utility: -2.,
            max_utility: 2. * (players - 1) as Utility,
            sum: Some(0.),
            info_shape: Shape::new(vec![players + deck + 2 * rounds], Layout::Concatenated),
            observation_shape: Shape::new(vec![players + deck + players], Layout::Concatenated),
        },
    }))
}

#[derive(Debug)]
struct Kuhn {
    spec: Spec,
}

impl Game for Kuhn {
    fn spec(&self) -> &Spec {
        &self.spec
    }
    fn root(&self) -> Box<dyn Rules> {
        Box::new(KuhnState {
            players: self.spec.players,
            cards: Vec::new(),
            bets: Vec::new(),
        })
    }
}

#[derive(Debug, Clone)]
struct KuhnState {
    players: usize,
    /// rank dealt to each seat, filled in seat order by the chance run
    cards: Vec<u8>,
    /// betting decisions in acting order, true = bet/call
    bets: Vec<bool>,
}

impl KuhnState {
    fn deck(&self) -> usize {
        self.players + 1
    }
    fn first_bettor(&self) -> Option<usize> {
        self.bets.iter().position(|b| *b)
    }
    /// betting closes after one full pass, extended wrap-around to let
    /// everyone respond to the first bet
    fn decisions_needed(&self) -> usize {
        match self.first_bettor() {
            None => self.players,
            Some(b) => self.players + b,
        }
    }
    fn actor(&self) -> Player {
        self.bets.len() % self.players
    }
    /// did this seat put the extra chip in (bet or call)? their last
    /// decision is binding; seats before the bettor act twice
    fn raised(&self, player: Player) -> bool {
        self.bets
            .iter()
            .enumerate()
            .filter(|(k, _)| k % self.players == player)
            .next_back()
            .map(|(_, b)| *b)
            .unwrap_or(false)
    }
    fn contribution(&self, player: Player) -> Utility {
        match self.raised(player) {
            true => 2.,
            false => 1.,
        }
    }
    fn undealt(&self) -> Vec<u8> {
        (0..self.deck() as u8)
            .filter(|rank| !self.cards.contains(rank))
            .collect()
    }
}

impl Rules for KuhnState {
    fn turn(&self) -> Turn {
        if self.cards.len() < self.players {
            Turn::Chance
        } else if self.bets.len() >= self.decisions_needed() {
            Turn::Terminal
        } else {
            Turn::Choice(self.actor())
        }
    }

    fn legal(&self, player: Player) -> Vec<Action> {
        match self.turn() {
            Turn::Choice(p) if p == player => vec![Action::from(PASS), Action::from(BET)],
            _ => vec![],
        }
    }

    fn outcomes(&self) -> Vec<(Action, Probability)> {
        let undealt = self.undealt();
        let p = 1. / undealt.len() as Probability;
        undealt
            .into_iter()
            .map(|rank| (Action::from(rank as usize), p))
            .collect()
    }

    fn apply(&mut self, ply: &Ply) {
        let action = match ply {
            Ply::Single(a) => *a,
            Ply::Joint(_) => unreachable!("kuhn has no simultaneous nodes"),
        };
        match self.cards.len() < self.players {
            true => self.cards.push(action.index() as u8),
            false => self.bets.push(action.index() == BET),
        }
    }

    fn payoff(&self) -> Vec<Utility> {
        let showdown = (0..self.players)
            .filter(|p| match self.first_bettor() {
                None => true,
                Some(_) => self.raised(*p),
            })
            .collect::<Vec<_>>();
        let winner = showdown
            .into_iter()
            .max_by_key(|p| self.cards[*p])
            .expect("bettor is always in the showdown");
        let pot = (0..self.players).map(|p| self.contribution(p)).sum::<Utility>();
        (0..self.players)
            .map(|p| match p == winner {
                true => pot - self.contribution(p),
                false => -self.contribution(p),
            })
            .collect()
    }

    /// seat one-hot, own card one-hot, then two entries per betting
    /// slot marking pass or bet
    fn info_tensor(&self, player: Player) -> Option<Vec<f32>> {
        if player >= self.players || self.cards.len() < self.players {
            return None;
        }
        let rounds = 2 * self.players - 1;
        let mut encoding = vec![0.; self.players + self.deck() + 2 * rounds];
        encoding[player] = 1.;
        encoding[self.players + self.cards[player] as usize] = 1.;
        for (slot, bet) in self.bets.iter().enumerate() {
            let base = self.players + self.deck() + 2 * slot;
            match bet {
                false => encoding[base] = 1.,
                true => encoding[base + 1] = 1.,
            }
        }
        Some(encoding)
    }

    /// seat one-hot, own card one-hot, per-seat pot contributions
    fn observation_tensor(&self, player: Player) -> Option<Vec<f32>> {
        if player >= self.players || self.cards.len() < self.players {
            return None;
        }
        let mut encoding = vec![0.; self.players + self.deck() + self.players];
        encoding[player] = 1.;
        encoding[self.players + self.cards[player] as usize] = 1.;
        for seat in 0..self.players {
            encoding[self.players + self.deck() + seat] = self.contribution(seat);
        }
        Some(encoding)
    }

    fn describe(&self, player: Option<Player>, action: Action) -> String {
        match player {
            None => format!("Deal:{}", action),
            Some(_) => match action.index() {
                PASS => "Pass".to_string(),
                BET => "Bet".to_string(),
                id => format!("Action:{}", id),
            },
        }
    }

    fn render(&self) -> String {
        let cards = self
            .cards
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        let bets = self
            .bets
            .iter()
            .map(|b| if *b { 'b' } else { 'p' })
            .collect::<String>();
        format!("kuhn [{}] [{}] {}", cards, bets, self.turn())
    }

    fn duplicate(&self) -> Box<dyn Rules> {
        Box::new(self.clone())
    }
}
