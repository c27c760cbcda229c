use super::selector::Selector;
use super::trace::Step;
use super::trace::Trace;
use crate::game::Error;
use crate::game::Game;
use crate::game::Ply;
use crate::game::State;
use crate::game::Turn;
use std::sync::Arc;

/// drive a state from wherever it stands to Terminal. at each step the
/// node is classified, the selector is offered exactly the legal or
/// outcome set for that classification, the answer is re-validated and
/// applied, and the transition is appended to the trace. iteration is
/// bounded by the game's declared depth; overrunning it means the rules
/// mis-declared their length and fails the episode.
pub fn run(state: &mut State, selector: &mut dyn Selector) -> Result<Trace, Error> {
    let depth = state.spec().depth();
    let mut steps = Vec::new();
    while !state.is_terminal() {
        if state.history().len() >= depth {
            return Err(Error::NonTerminating { depth });
        }
        let turn = state.turn();
        let ply = match turn {
            Turn::Chance => {
                let odds = state.chance_outcomes()?;
                let action = selector.chance(&odds);
                if !odds.contains(action) {
                    return Err(Error::IllegalAction {
                        turn,
                        player: None,
                        ply: Ply::Single(action),
                    });
                }
                state.apply(action)?;
                Ply::Single(action)
            }
            Turn::Choice(player) => {
                let legal = state.legal_actions(player);
                if legal.is_empty() {
                    return Err(Error::NoLegalActions { turn, player });
                }
                let action = selector.choose(player, &legal);
                if !legal.contains(&action) {
                    return Err(Error::IllegalAction {
                        turn,
                        player: Some(player),
                        ply: Ply::Single(action),
                    });
                }
                state.apply(action)?;
                Ply::Single(action)
            }
            Turn::Simultaneous => {
                let legal = state
                    .acting()
                    .into_iter()
                    .map(|player| {
                        let actions = state.legal_actions(player);
                        match actions.is_empty() {
                            true => Err(Error::NoLegalActions { turn, player }),
                            false => Ok(actions),
                        }
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                let joint = selector.joint(&legal);
                state.apply_all(&joint)?;
                Ply::Joint(joint)
            }
            Turn::Terminal => unreachable!("loop condition"),
        };
        let rewards = state.rewards();
        log::debug!("{} {}", turn, ply);
        steps.push(Step { turn, ply, rewards });
    }
    let returns = state.returns()?;
    log::debug!("terminal after {} plies: {:?}", steps.len(), returns);
    Ok(Trace { steps, returns })
}

/// one fresh episode from the game's initial state
pub fn play(game: &Arc<dyn Game>, selector: &mut dyn Selector) -> Result<Trace, Error> {
    let mut state = State::root(Arc::clone(game));
    run(&mut state, selector)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Player;
    use crate::Probability;
    use crate::Utility;
    use crate::game::Action;
    use crate::game::Layout;
    use crate::game::Odds;
    use crate::game::Rules;
    use crate::game::Shape;
    use crate::game::Spec;
    use crate::game::registry;
    use crate::game::registry::Params;
    use crate::traverse::Uniform;

    fn toy_spec(players: usize, depth: usize) -> Spec {
        Spec {
            name: "toy".to_string(),
            players,
            actions: 1,
            depth,
            min_utility: 0.,
            max_utility: 0.,
            sum: None,
            info_shape: Shape::new(vec![1], Layout::Concatenated),
            observation_shape: Shape::new(vec![1], Layout::Concatenated),
        }
    }

    #[test]
    fn episodes_terminate_within_declared_depth() {
        for name in registry::registered() {
            let game = registry::load(name, &Params::new()).unwrap();
            for seed in 0..16 {
                let ref mut selector = Uniform::seeded(seed);
                let trace = play(&game, selector).unwrap();
                assert!(trace.len() <= game.spec().depth());
                assert_eq!(trace.returns.len(), game.spec().players());
            }
        }
    }

    #[test]
    fn constant_sum_holds_at_termination() {
        for name in registry::registered() {
            let game = registry::load(name, &Params::new()).unwrap();
            let sum = game.spec().sum().unwrap();
            for seed in 0..16 {
                let ref mut selector = Uniform::seeded(seed);
                let trace = play(&game, selector).unwrap();
                let total = trace.returns.iter().sum::<f32>();
                assert!((total - sum).abs() < 1e-5, "returns {:?}", trace.returns);
            }
        }
    }

    #[test]
    fn every_step_was_offered_before_applied() {
        struct Spy {
            inner: Uniform,
            offered: Vec<usize>,
        }
        impl Selector for Spy {
            fn chance(&mut self, odds: &Odds) -> Action {
                self.offered.push(odds.len());
                self.inner.chance(odds)
            }
            fn choose(&mut self, player: Player, legal: &[Action]) -> Action {
                self.offered.push(legal.len());
                self.inner.choose(player, legal)
            }
        }
        let game = registry::load("kuhn", &Params::new()).unwrap();
        let mut selector = Spy {
            inner: Uniform::seeded(3),
            offered: Vec::new(),
        };
        let trace = play(&game, &mut selector).unwrap();
        assert_eq!(selector.offered.len(), trace.len());
        assert!(selector.offered.iter().all(|n| *n > 0));
    }

    #[test]
    fn rejects_selector_outside_offered_set() {
        struct Rogue;
        impl Selector for Rogue {
            fn chance(&mut self, _: &Odds) -> Action {
                Action::from(99u32)
            }
            fn choose(&mut self, _: Player, _: &[Action]) -> Action {
                Action::from(99u32)
            }
        }
        let game = registry::load("kuhn", &Params::new()).unwrap();
        let result = play(&game, &mut Rogue);
        assert!(matches!(result, Err(Error::IllegalAction { .. })));
    }

    #[test]
    fn overrunning_declared_depth_fails_the_episode() {
        #[derive(Debug, Clone)]
        struct Spin;
        impl Rules for Spin {
            fn turn(&self) -> Turn {
                Turn::Choice(0)
            }
            fn legal(&self, _: Player) -> Vec<Action> {
                vec![Action::from(0u32)]
            }
            fn outcomes(&self) -> Vec<(Action, Probability)> {
                vec![]
            }
            fn apply(&mut self, _: &Ply) {}
            fn payoff(&self) -> Vec<Utility> {
                vec![]
            }
            fn info_tensor(&self, _: Player) -> Option<Vec<f32>> {
                None
            }
            fn observation_tensor(&self, _: Player) -> Option<Vec<f32>> {
                None
            }
            fn describe(&self, _: Option<Player>, action: Action) -> String {
                action.to_string()
            }
            fn render(&self) -> String {
                "spin".to_string()
            }
            fn duplicate(&self) -> Box<dyn Rules> {
                Box::new(self.clone())
            }
        }
        #[derive(Debug)]
        struct Spinner(Spec);
        impl Game for Spinner {
            fn spec(&self) -> &Spec {
                &self.0
            }
            fn root(&self) -> Box<dyn Rules> {
                Box::new(Spin)
            }
        }
        let game: Arc<dyn Game> = Arc::new(Spinner(toy_spec(1, 8)));
        let ref mut selector = Uniform::seeded(0);
        let result = play(&game, selector);
        assert_eq!(result, Err(Error::NonTerminating { depth: 8 }));
    }

    #[test]
    fn driver_fails_fast_on_an_empty_legal_set() {
        #[derive(Debug, Clone)]
        struct Mute;
        impl Rules for Mute {
            fn turn(&self) -> Turn {
                Turn::Choice(0)
            }
            fn legal(&self, _: Player) -> Vec<Action> {
                vec![]
            }
            fn outcomes(&self) -> Vec<(Action, Probability)> {
                vec![]
            }
            fn apply(&mut self, _: &Ply) {}
            fn payoff(&self) -> Vec<Utility> {
                vec![]
            }
            fn info_tensor(&self, _: Player) -> Option<Vec<f32>> {
                None
            }
            fn observation_tensor(&self, _: Player) -> Option<Vec<f32>> {
                None
            }
            fn describe(&self, _: Option<Player>, action: Action) -> String {
                action.to_string()
            }
            fn render(&self) -> String {
                "mute".to_string()
            }
            fn duplicate(&self) -> Box<dyn Rules> {
                Box::new(self.clone())
            }
        }
        #[derive(Debug)]
        struct Muted(Spec);
        impl Game for Muted {
            fn spec(&self) -> &Spec {
                &self.0
            }
            fn root(&self) -> Box<dyn Rules> {
                Box::new(Mute)
            }
        }
        let game: Arc<dyn Game> = Arc::new(Muted(toy_spec(1, 8)));
        let ref mut selector = Uniform::seeded(0);
        let result = play(&game, selector);
        assert_eq!(
            result,
            Err(Error::NoLegalActions {
                turn: Turn::Choice(0),
                player: 0,
            })
        );
    }

    #[test]
    fn resumes_partway_through_an_episode() {
        let game = registry::load("kuhn", &Params::new()).unwrap();
        let mut state = State::root(std::sync::Arc::clone(&game));
        let deal = state.chance_outcomes().unwrap().actions().next().unwrap();
        state.apply(deal).unwrap();
        let ref mut selector = Uniform::seeded(11);
        let trace = run(&mut state, selector).unwrap();
        assert!(state.is_terminal());
        assert!(trace.len() + 1 <= game.spec().depth());
    }
}
