use super::action::Action;
use super::ply::Ply;
use super::turn::Turn;
use crate::Player;
use crate::Probability;

/// every named failure of the engine. contract violations
/// (IllegalAction, TerminalAction, NoLegalActions, BadOutcomes,
/// NonTerminating) are fatal to the episode and never silently
/// corrected; Deserialization and NotAvailable are the recoverable
/// classes.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// game name not present in the registry
    UnknownGame(String),
    /// unrecognized parameter key, or value outside its declared domain
    InvalidParameter {
        game: String,
        key: String,
        reason: String,
    },
    /// action outside the legal/outcome set at the current node
    IllegalAction {
        turn: Turn,
        player: Option<Player>,
        ply: Ply,
    },
    /// action applied to an absorbing Terminal node
    TerminalAction { ply: Ply },
    /// an acting player with an empty legal set at a non-terminal node
    NoLegalActions { turn: Turn, player: Player },
    /// a chance distribution that is empty, negative, or off by more
    /// than the declared tolerance
    BadOutcomes { sum: Probability, reason: String },
    /// snapshot text that cannot be decoded or replayed
    Deserialization { line: usize, reason: String },
    /// traversal exceeded the game's declared maximum length
    NonTerminating { depth: usize },
    /// per-player view requested where the classification has none
    NotAvailable { turn: Turn, what: &'static str },
    /// action identifier outside the describable range for the codec
    Undescribable {
        player: Option<Player>,
        action: Action,
    },
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownGame(name) => {
                write!(f, "unknown game: {}", name)
            }
            Self::InvalidParameter { game, key, reason } => {
                write!(f, "invalid parameter {:?} for {}: {}", key, game, reason)
            }
            Self::IllegalAction { turn, player, ply } => match player {
                Some(p) => write!(f, "illegal action at {}: player {} played {}", turn, p, ply),
                None => write!(f, "illegal action at {}: {}", turn, ply),
            },
            Self::TerminalAction { ply } => {
                write!(f, "action applied to terminal state: {}", ply)
            }
            Self::NoLegalActions { turn, player } => {
                write!(f, "no legal actions at {} for player {}", turn, player)
            }
            Self::BadOutcomes { sum, reason } => {
                write!(f, "bad chance distribution (sum {}): {}", sum, reason)
            }
            Self::Deserialization { line, reason } => {
                write!(f, "deserialization failed at line {}: {}", line, reason)
            }
            Self::NonTerminating { depth } => {
                write!(f, "traversal exceeded declared maximum length {}", depth)
            }
            Self::NotAvailable { turn, what } => {
                write!(f, "{} not available at {}", what, turn)
            }
            Self::Undescribable { player, action } => match player {
                Some(p) => write!(f, "undescribable action {} for player {}", action, p),
                None => write!(f, "undescribable chance outcome {}", action),
            },
        }
    }
}

impl std::error::Error for Error {}
