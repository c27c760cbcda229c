//! explicit name → constructor registry. games are registered in the
//! static table below at compile time; nothing is discovered at runtime.

use super::error::Error;
use super::state::Game;
use std::collections::BTreeMap;
use std::sync::Arc;

/// a typed game parameter value
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(i64),
    Real(f64),
    Text(String),
    Flag(bool),
}

impl Value {
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{}", n),
            Self::Real(x) => write!(f, "{}", x),
            Self::Text(s) => write!(f, "{}", s),
            Self::Flag(b) => write!(f, "{}", b),
        }
    }
}

/// named parameters supplied at load time
pub type Params = BTreeMap<String, Value>;

type Ctor = fn(&Params) -> Result<Arc<dyn Game>, Error>;

const REGISTRY: &[(&str, Ctor)] = &[
    ("kuhn", crate::games::kuhn::load),
    ("rps", crate::games::rps::load),
];

/// all registered game names
pub fn registered() -> Vec<&'static str> {
    REGISTRY.iter().map(|(name, _)| *name).collect()
}

/// construct an immutable game descriptor by name
pub fn load(name: &str, params: &Params) -> Result<Arc<dyn Game>, Error> {
    REGISTRY
        .iter()
        .find(|(registered, _)| *registered == name)
        .ok_or_else(|| Error::UnknownGame(name.to_string()))
        .and_then(|(_, ctor)| ctor(params))
}

/// reject parameter keys a game does not declare
pub(crate) fn expect_keys(game: &str, params: &Params, allowed: &[&str]) -> Result<(), Error> {
    match params.keys().find(|k| !allowed.contains(&k.as_str())) {
        None => Ok(()),
        Some(key) => Err(Error::InvalidParameter {
            game: game.to_string(),
            key: key.clone(),
            reason: "unrecognized parameter".to_string(),
        }),
    }
}

/// read an integer parameter, defaulting when absent, bounding its domain
pub(crate) fn int_param(
    game: &str,
    params: &Params,
    key: &str,
    default: i64,
    domain: std::ops::RangeInclusive<i64>,
) -> Result<i64, Error> {
    let value = match params.get(key) {
        None => default,
        Some(value) => value.as_int().ok_or_else(|| Error::InvalidParameter {
            game: game.to_string(),
            key: key.to_string(),
            reason: format!("expected an integer, got {}", value),
        })?,
    };
    match domain.contains(&value) {
        true => Ok(value),
        false => Err(Error::InvalidParameter {
            game: game.to_string(),
            key: key.to_string(),
            reason: format!(
                "{} outside supported range {}..={}",
                value,
                domain.start(),
                domain.end()
            ),
        }),
    }
}
