//! canonical text snapshots of a [State], sufficient to resume an
//! episode by replay. the format is the ordered action history and
//! nothing else: one line per ply, joint actions space-separated in seat
//! order. derived fields are never written; trailing whitespace and
//! blank lines are insignificant on the way back in.

use super::action::Action;
use super::error::Error;
use super::ply::Ply;
use super::state::Game;
use super::state::State;
use super::turn::Turn;
use std::sync::Arc;

/// the canonical snapshot of a state: a pure function of its history
pub fn serialize(state: &State) -> String {
    state
        .history()
        .iter()
        .map(|ply| ply.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

/// rebuild a state by replaying the decoded history from the game's
/// initial node, through the same validation `apply` performs. malformed
/// text and non-replayable actions both surface as
/// [Error::Deserialization], carrying the offending line
pub fn deserialize(game: Arc<dyn Game>, text: &str) -> Result<State, Error> {
    let mut state = State::root(game);
    for (index, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let actions = line
            .split_whitespace()
            .map(|token| {
                token
                    .parse::<u32>()
                    .map(Action::from)
                    .map_err(|_| Error::Deserialization {
                        line: index + 1,
                        reason: format!("not an action id: {:?}", token),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;
        match state.turn() {
            Turn::Simultaneous => state.apply_all(&actions),
            _ if actions.len() == 1 => state.apply(actions[0]),
            _ => Err(Error::IllegalAction {
                turn: state.turn(),
                player: None,
                ply: Ply::Joint(actions.clone()),
            }),
        }
        .map_err(|e| Error::Deserialization {
            line: index + 1,
            reason: e.to_string(),
        })?;
    }
    Ok(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::registry;
    use crate::game::registry::Params;
    use crate::traverse::Selector;
    use crate::traverse::Uniform;

    /// observational equivalence: classification, acting players, legal
    /// sets, and returns where terminal
    fn assert_equivalent(a: &State, b: &State) {
        assert_eq!(a.turn(), b.turn());
        assert_eq!(a.acting(), b.acting());
        for player in 0..a.spec().players() {
            assert_eq!(a.legal_actions(player), b.legal_actions(player));
        }
        if a.is_terminal() {
            assert_eq!(a.returns().unwrap(), b.returns().unwrap());
        }
    }

    #[test]
    fn round_trip_at_every_ply() {
        for name in registry::registered() {
            let game = registry::load(name, &Params::new()).unwrap();
            let ref mut selector = Uniform::seeded(42);
            let mut state = State::root(Arc::clone(&game));
            loop {
                let replayed = deserialize(Arc::clone(&game), &serialize(&state)).unwrap();
                assert_equivalent(&state, &replayed);
                if state.is_terminal() {
                    break;
                }
                match state.turn() {
                    Turn::Chance => {
                        let odds = state.chance_outcomes().unwrap();
                        state.apply(selector.chance(&odds)).unwrap();
                    }
                    Turn::Choice(p) => {
                        let legal = state.legal_actions(p);
                        state.apply(selector.choose(p, &legal)).unwrap();
                    }
                    Turn::Simultaneous => {
                        let legal = state
                            .acting()
                            .into_iter()
                            .map(|p| state.legal_actions(p))
                            .collect::<Vec<_>>();
                        state.apply_all(&selector.joint(&legal)).unwrap();
                    }
                    Turn::Terminal => unreachable!(),
                }
            }
        }
    }

    #[test]
    fn serialization_is_deterministic() {
        let game = registry::load("kuhn", &Params::new()).unwrap();
        let mut state = State::root(Arc::clone(&game));
        let deal = state.chance_outcomes().unwrap().actions().next().unwrap();
        state.apply(deal).unwrap();
        assert_eq!(serialize(&state), serialize(&state.clone()));
    }

    #[test]
    fn trailing_whitespace_is_insignificant() {
        let game = registry::load("kuhn", &Params::new()).unwrap();
        let mut state = State::root(Arc::clone(&game));
        let deal = state.chance_outcomes().unwrap().actions().next().unwrap();
        state.apply(deal).unwrap();
        let text = format!("{}  \n\n", serialize(&state));
        let replayed = deserialize(Arc::clone(&game), &text).unwrap();
        assert_equivalent(&state, &replayed);
    }

    #[test]
    fn malformed_text_fails() {
        let game = registry::load("kuhn", &Params::new()).unwrap();
        let result = deserialize(game, "0\nbanana\n");
        assert!(matches!(result, Err(Error::Deserialization { .. })));
    }

    #[test]
    fn illegal_replay_fails() {
        let game = registry::load("kuhn", &Params::new()).unwrap();
        // 99 is never a legal deal
        let result = deserialize(game, "99\n");
        assert!(matches!(result, Err(Error::Deserialization { .. })));
    }

    #[test]
    fn overlong_replay_fails() {
        let game = registry::load("rps", &Params::new()).unwrap();
        // second joint ply replays into a terminal state
        let result = deserialize(game, "0 1 2\n0 1 2\n");
        assert!(matches!(result, Err(Error::Deserialization { .. })));
    }
}
