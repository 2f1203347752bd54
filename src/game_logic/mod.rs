pub mod imposter;

pub use imposter::{GameCommand, GameError, GameEvent, GamePhase, ImposterGame, RoundOutcome};
