use super::action::Action;
use super::error::Error;
use super::odds::Odds;
use super::ply::Ply;
use super::spec::Spec;
use super::tensor::Tensor;
use super::turn::Turn;
use crate::Player;
use crate::Probability;
use crate::Utility;
use std::sync::Arc;

/// the immutable game descriptor plus the factory for fresh episodes.
/// shared read-only across all states and across threads; a State is
/// never shared, only deep-cloned.
pub trait Game: std::fmt::Debug + Send + Sync {
    fn spec(&self) -> &Spec;
    /// the initial node. never Terminal for a game with at least one ply
    fn root(&self) -> Box<dyn Rules>;
}

/// the game-local rule implementation behind a [State]. methods are only
/// invoked after the engine has validated the legality contract, so an
/// implementation may assume:
/// - `apply` receives a Single ply at Chance/Choice nodes and a Joint
///   ply of exactly `players` legal actions at Simultaneous nodes
/// - `outcomes` is only consulted at Chance nodes
/// - `payoff` is only consulted at Terminal nodes
///
/// all methods except `apply` take `&self` and must be side-effect-free,
/// so inspection is repeatable and cloning is cheap.
pub trait Rules: std::fmt::Debug + Send {
    fn turn(&self) -> Turn;
    /// legal actions for an acting player. must be non-empty for every
    /// acting player at any non-terminal node
    fn legal(&self, player: Player) -> Vec<Action>;
    /// the raw outcome distribution at a chance node
    fn outcomes(&self) -> Vec<(Action, Probability)>;
    fn apply(&mut self, ply: &Ply);
    /// one utility per player, defined at Terminal only
    fn payoff(&self) -> Vec<Utility>;
    /// immediate per-player rewards accrued by the latest ply. empty
    /// means the game only pays at termination
    fn rewards(&self) -> Vec<Utility> {
        vec![]
    }
    /// flat information-state encoding, None where this node kind has no
    /// per-player view
    fn info_tensor(&self, player: Player) -> Option<Vec<f32>>;
    /// flat observation encoding, None where this node kind has no
    /// per-player view
    fn observation_tensor(&self, player: Player) -> Option<Vec<f32>>;
    /// render an action id for a player (None = chance). pure; range
    /// checks are the engine's job
    fn describe(&self, player: Option<Player>, action: Action) -> String;
    fn render(&self) -> String;
    fn duplicate(&self) -> Box<dyn Rules>;
}

/// the mutable per-episode state machine. owns its history exclusively;
/// validates every transition against the current [Turn] classification
/// and surfaces violations as named [Error]s rather than correcting
/// them. randomness never lives here: a chance branch is decided by
/// whichever sampled outcome the caller supplies.
#[derive(Debug)]
pub struct State {
    game: Arc<dyn Game>,
    rules: Box<dyn Rules>,
    history: Vec<Ply>,
}

impl Clone for State {
    fn clone(&self) -> Self {
        Self {
            game: Arc::clone(&self.game),
            rules: self.rules.duplicate(),
            history: self.history.clone(),
        }
    }
}

impl State {
    pub fn root(game: Arc<dyn Game>) -> Self {
        let rules = game.root();
        debug_assert!(!rules.turn().is_terminal());
        Self {
            game,
            rules,
            history: Vec::new(),
        }
    }

    pub fn game(&self) -> &Arc<dyn Game> {
        &self.game
    }
    pub fn spec(&self) -> &Spec {
        self.game.spec()
    }
    pub fn turn(&self) -> Turn {
        self.rules.turn()
    }
    pub fn is_terminal(&self) -> bool {
        self.turn().is_terminal()
    }
    pub fn history(&self) -> &[Ply] {
        &self.history
    }
    /// the single acting player at a Choice node
    pub fn current_player(&self) -> Option<Player> {
        self.turn().position()
    }
    /// every player who must commit an action at this node: empty at
    /// Chance/Terminal, one at Choice, all at Simultaneous
    pub fn acting(&self) -> Vec<Player> {
        match self.turn() {
            Turn::Choice(p) => vec![p],
            Turn::Simultaneous => (0..self.spec().players()).collect(),
            Turn::Chance | Turn::Terminal => vec![],
        }
    }

    /// the legal set for one player at this node. empty for players who
    /// are not acting here
    pub fn legal_actions(&self, player: Player) -> Vec<Action> {
        match self.turn() {
            Turn::Choice(p) if p == player => self.rules.legal(player),
            Turn::Simultaneous if player < self.spec().players() => self.rules.legal(player),
            _ => vec![],
        }
    }

    /// the validated outcome distribution at a Chance node. inspection
    /// is side-effect-free and repeatable
    pub fn chance_outcomes(&self) -> Result<Odds, Error> {
        let turn = self.turn();
        match turn {
            Turn::Chance => Odds::try_from(self.rules.outcomes()),
            _ => Err(Error::NotAvailable {
                turn,
                what: "chance outcomes",
            }),
        }
    }

    /// apply one action at a Chance or Choice node
    pub fn apply(&mut self, action: Action) -> Result<(), Error> {
        let turn = self.turn();
        match turn {
            Turn::Terminal => Err(Error::TerminalAction {
                ply: Ply::Single(action),
            }),
            Turn::Simultaneous => Err(Error::IllegalAction {
                turn,
                player: None,
                ply: Ply::Single(action),
            }),
            Turn::Chance => {
                let odds = self.chance_outcomes()?;
                match odds.contains(action) {
                    true => self.transition(Ply::Single(action)),
                    false => Err(Error::IllegalAction {
                        turn,
                        player: None,
                        ply: Ply::Single(action),
                    }),
                }
            }
            Turn::Choice(p) => {
                let legal = self.rules.legal(p);
                if legal.is_empty() {
                    Err(Error::NoLegalActions { turn, player: p })
                } else if !legal.contains(&action) {
                    Err(Error::IllegalAction {
                        turn,
                        player: Some(p),
                        ply: Ply::Single(action),
                    })
                } else {
                    self.transition(Ply::Single(action))
                }
            }
        }
    }

    /// apply one action per player at a Simultaneous node, as a single
    /// atomic joint transition. nothing is applied unless every player's
    /// action passes validation
    pub fn apply_all(&mut self, actions: &[Action]) -> Result<(), Error> {
        let turn = self.turn();
        match turn {
            Turn::Terminal => Err(Error::TerminalAction {
                ply: Ply::Joint(actions.to_vec()),
            }),
            Turn::Simultaneous => {
                if actions.len() != self.spec().players() {
                    return Err(Error::IllegalAction {
                        turn,
                        player: None,
                        ply: Ply::Joint(actions.to_vec()),
                    });
                }
                for (player, action) in actions.iter().enumerate() {
                    let legal = self.rules.legal(player);
                    if legal.is_empty() {
                        return Err(Error::NoLegalActions { turn, player });
                    }
                    if !legal.contains(action) {
                        return Err(Error::IllegalAction {
                            turn,
                            player: Some(player),
                            ply: Ply::Joint(actions.to_vec()),
                        });
                    }
                }
                self.transition(Ply::Joint(actions.to_vec()))
            }
            _ => Err(Error::IllegalAction {
                turn,
                player: None,
                ply: Ply::Joint(actions.to_vec()),
            }),
        }
    }

    /// append the validated ply and let the rules recompute the node
    /// classification. deterministic given the prior state and the ply
    fn transition(&mut self, ply: Ply) -> Result<(), Error> {
        self.rules.apply(&ply);
        self.history.push(ply);
        Ok(())
    }

    /// per-player utilities, defined once Terminal and fixed thereafter
    pub fn returns(&self) -> Result<Vec<Utility>, Error> {
        let turn = self.turn();
        match turn {
            Turn::Terminal => {
                let returns = self.rules.payoff();
                debug_assert!(returns.len() == self.spec().players());
                debug_assert!(returns.iter().all(|u| {
                    let (lo, hi) = self.spec().utility();
                    *u >= lo && *u <= hi
                }));
                Ok(returns)
            }
            _ => Err(Error::NotAvailable {
                turn,
                what: "returns",
            }),
        }
    }

    /// immediate rewards accrued by the latest ply, zero-filled for
    /// games that only pay at termination
    pub fn rewards(&self) -> Vec<Utility> {
        let rewards = self.rules.rewards();
        match rewards.is_empty() {
            true => vec![0.; self.spec().players()],
            false => rewards,
        }
    }

    pub fn information_state_tensor(&self, player: Player) -> Result<Tensor, Error> {
        let turn = self.turn();
        let shape = self.spec().info_shape().clone();
        self.rules
            .info_tensor(player)
            .map(|data| Tensor::new(data, shape))
            .ok_or(Error::NotAvailable {
                turn,
                what: "information state tensor",
            })
    }

    pub fn observation_tensor(&self, player: Player) -> Result<Tensor, Error> {
        let turn = self.turn();
        let shape = self.spec().observation_shape().clone();
        self.rules
            .observation_tensor(player)
            .map(|data| Tensor::new(data, shape))
            .ok_or(Error::NotAvailable {
                turn,
                what: "observation tensor",
            })
    }

    /// render an action id as human-readable text. pure over
    /// (state, player, action); only range bounds are checked here
    pub fn action_to_string(
        &self,
        player: Option<Player>,
        action: Action,
    ) -> Result<String, Error> {
        let in_range = action.index() < self.spec().actions();
        let seated = player.map(|p| p < self.spec().players()).unwrap_or(true);
        match in_range && seated {
            true => Ok(self.rules.describe(player, action)),
            false => Err(Error::Undescribable { player, action }),
        }
    }
}

impl std::fmt::Display for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.rules.render())
    }
}
