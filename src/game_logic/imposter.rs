use std::sync::Arc;

use thiserror::Error;

use crate::content::WordCatalog;
use crate::rng::Chooser;

const MIN_PLAYERS: usize = 2;
const FINAL_TWO: usize = 2;

/// Where a round currently stands. Every transition goes through
/// [`ImposterGame::apply`]; a command that does not fit the current phase is
/// rejected with [`GameError::InvalidAction`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GamePhase {
    Setup,
    /// One player at a time looks at the device. `showing: false` is the
    /// pass-the-device prompt, `showing: true` is the role screen.
    Reveal { showing: bool },
    Discussion,
    Voting,
    End { outcome: RoundOutcome },
}

impl GamePhase {
    pub fn name(&self) -> &'static str {
        match self {
            GamePhase::Setup => "setup",
            GamePhase::Reveal { showing: false } => "awaiting-reveal",
            GamePhase::Reveal { showing: true } => "showing-role",
            GamePhase::Discussion => "discussion",
            GamePhase::Voting => "voting",
            GamePhase::End { .. } => "end",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    /// The eliminated player was the imposter.
    GroupWins,
    /// The imposter survived into the final two.
    ImposterWins,
}

// Player actions (presentation layer -> engine)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameCommand {
    AddPlayer { name: String },
    Reset,
    StartRound,
    Reveal,
    HideAndPass,
    ProceedToVote,
    CastVote { voter: String, target: String },
    NewRound,
}

impl GameCommand {
    fn name(&self) -> &'static str {
        match self {
            GameCommand::AddPlayer { .. } => "add-player",
            GameCommand::Reset => "reset",
            GameCommand::StartRound => "start-round",
            GameCommand::Reveal => "reveal",
            GameCommand::HideAndPass => "hide-and-pass",
            GameCommand::ProceedToVote => "proceed-to-vote",
            GameCommand::CastVote { .. } => "cast-vote",
            GameCommand::NewRound => "new-round",
        }
    }
}

// Game events (engine -> presentation layer)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    PlayerAdded { name: String },
    RoundStarted { round: u32, category: String },
    VoteRecorded { voter: String, remaining: usize },
    VotesTied { cycle: u32 },
    PlayerEliminated { name: String },
    RoundEnded { outcome: RoundOutcome },
    GameReset,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("{action} is not valid during the {phase} phase")]
    InvalidAction {
        action: &'static str,
        phase: &'static str,
    },
    #[error("need at least {min} players to start, have {count}")]
    NotEnoughPlayers { count: usize, min: usize },
    #[error("unknown or eliminated voter: {0}")]
    UnknownVoter(String),
    #[error("unknown or eliminated vote target: {0}")]
    UnknownTarget(String),
    #[error("{0} cannot vote for themselves")]
    SelfVote(String),
    #[error("{0} has already voted this cycle")]
    AlreadyVoted(String),
}

/// The shared game record and its round engine.
///
/// One instance per session, owned by the front-end driving it. All rule
/// enforcement lives here; screens only mirror the state. Category, word and
/// imposter draws go through the injected [`Chooser`].
#[derive(Debug)]
pub struct ImposterGame {
    pub phase: GamePhase,
    /// Everyone who joined during setup, in insertion order.
    pub players: Vec<String>,
    /// Players still in the current round, in `players` order.
    pub alive: Vec<String>,
    /// Players voted out this round, in elimination order.
    pub eliminated: Vec<String>,
    /// Completed-session counter, display only.
    pub round: u32,
    /// Discussion/voting iterations this round; grows on every tied vote.
    pub cycle: u32,
    pub category: Option<String>,
    pub word: Option<String>,
    pub imposter: Option<String>,
    /// Cursor into `alive` while roles are being shown.
    pub reveal_index: usize,
    /// Voter -> target pairs in cast order, one entry per voter.
    pub votes: Vec<(String, String)>,

    catalog: Arc<WordCatalog>,
    chooser: Box<dyn Chooser>,
}

impl ImposterGame {
    pub fn new(catalog: Arc<WordCatalog>, chooser: Box<dyn Chooser>) -> Self {
        Self {
            phase: GamePhase::Setup,
            players: Vec::new(),
            alive: Vec::new(),
            eliminated: Vec::new(),
            round: 1,
            cycle: 1,
            category: None,
            word: None,
            imposter: None,
            reveal_index: 0,
            votes: Vec::new(),
            catalog,
            chooser,
        }
    }

    /// Applies one player action and returns the events it produced.
    pub fn apply(&mut self, command: GameCommand) -> Result<Vec<GameEvent>, GameError> {
        tracing::trace!(command = command.name(), phase = self.phase.name(), "Applying command");
        match command {
            GameCommand::AddPlayer { name } => self.handle_add_player(name),
            GameCommand::Reset => Ok(self.handle_reset()),
            GameCommand::StartRound => self.handle_start_round(),
            GameCommand::Reveal => self.handle_reveal(),
            GameCommand::HideAndPass => self.handle_hide_and_pass(),
            GameCommand::ProceedToVote => self.handle_proceed_to_vote(),
            GameCommand::CastVote { voter, target } => self.handle_cast_vote(voter, target),
            GameCommand::NewRound => self.handle_new_round(),
        }
    }

    /// The player whose turn it is to look at the device, if roles are
    /// being revealed.
    pub fn current_reveal_player(&self) -> Option<&str> {
        match self.phase {
            GamePhase::Reveal { .. } => self.alive.get(self.reveal_index).map(String::as_str),
            _ => None,
        }
    }

    /// Next voter: the first living player without a recorded vote.
    pub fn current_voter(&self) -> Option<&str> {
        if !matches!(self.phase, GamePhase::Voting) {
            return None;
        }
        self.alive
            .iter()
            .find(|p| !self.has_voted(p))
            .map(String::as_str)
    }

    pub fn is_imposter(&self, name: &str) -> bool {
        self.imposter.as_deref() == Some(name)
    }

    pub fn can_start(&self) -> bool {
        self.players.len() >= MIN_PLAYERS
    }

    fn has_voted(&self, name: &str) -> bool {
        self.votes.iter().any(|(voter, _)| voter.as_str() == name)
    }

    fn invalid(&self, action: &'static str) -> GameError {
        GameError::InvalidAction {
            action,
            phase: self.phase.name(),
        }
    }

    fn handle_add_player(&mut self, name: String) -> Result<Vec<GameEvent>, GameError> {
        if self.phase != GamePhase::Setup {
            return Err(self.invalid("add-player"));
        }

        let name = name.trim().to_string();
        if name.is_empty() || self.players.contains(&name) {
            // Blank and duplicate names are ignored, matching the setup
            // screen's behavior of doing nothing on a repeated add.
            tracing::debug!(player = %name, "Ignoring blank or duplicate player name");
            return Ok(Vec::new());
        }

        self.players.push(name.clone());
        tracing::debug!(player = %name, players.count = self.players.len(), "Player added");
        Ok(vec![GameEvent::PlayerAdded { name }])
    }

    fn handle_reset(&mut self) -> Vec<GameEvent> {
        self.players.clear();
        self.round = 1;
        self.clear_round_state();
        self.phase = GamePhase::Setup;
        tracing::debug!("Game reset to setup");
        vec![GameEvent::GameReset]
    }

    fn clear_round_state(&mut self) {
        self.alive.clear();
        self.eliminated.clear();
        self.cycle = 1;
        self.category = None;
        self.word = None;
        self.imposter = None;
        self.reveal_index = 0;
        self.votes.clear();
    }

    fn handle_start_round(&mut self) -> Result<Vec<GameEvent>, GameError> {
        if self.phase != GamePhase::Setup {
            return Err(self.invalid("start-round"));
        }
        self.begin_round()
    }

    fn handle_new_round(&mut self) -> Result<Vec<GameEvent>, GameError> {
        if !matches!(self.phase, GamePhase::End { .. }) {
            return Err(self.invalid("new-round"));
        }
        self.round += 1;
        self.begin_round()
    }

    fn begin_round(&mut self) -> Result<Vec<GameEvent>, GameError> {
        if self.players.len() < MIN_PLAYERS {
            return Err(GameError::NotEnoughPlayers {
                count: self.players.len(),
                min: MIN_PLAYERS,
            });
        }

        // Draw order is fixed: category, then word, then imposter.
        let catalog = Arc::clone(&self.catalog);
        let categories = catalog.categories();
        let category = &categories[self.chooser.choose_index(categories.len())];
        let word = category.words[self.chooser.choose_index(category.words.len())].clone();
        let imposter = self.players[self.chooser.choose_index(self.players.len())].clone();
        let category_name = category.name.clone();

        self.alive = self.players.clone();
        self.eliminated.clear();
        self.cycle = 1;
        self.votes.clear();
        self.reveal_index = 0;
        self.category = Some(category_name.clone());
        self.word = Some(word);
        self.imposter = Some(imposter);
        self.phase = GamePhase::Reveal { showing: false };

        tracing::info!(
            round = self.round,
            players.count = self.players.len(),
            category = %category_name,
            "Round started"
        );
        tracing::debug!(word = ?self.word, imposter = ?self.imposter, "Round secrets drawn");

        Ok(vec![GameEvent::RoundStarted {
            round: self.round,
            category: category_name,
        }])
    }

    fn handle_reveal(&mut self) -> Result<Vec<GameEvent>, GameError> {
        match self.phase {
            GamePhase::Reveal { showing: false } => {
                self.phase = GamePhase::Reveal { showing: true };
                Ok(Vec::new())
            }
            _ => Err(self.invalid("reveal")),
        }
    }

    fn handle_hide_and_pass(&mut self) -> Result<Vec<GameEvent>, GameError> {
        match self.phase {
            GamePhase::Reveal { showing: true } => {
                self.reveal_index += 1;
                if self.reveal_index >= self.alive.len() {
                    self.phase = GamePhase::Discussion;
                    tracing::debug!("All roles shown, moving to discussion");
                } else {
                    self.phase = GamePhase::Reveal { showing: false };
                }
                Ok(Vec::new())
            }
            _ => Err(self.invalid("hide-and-pass")),
        }
    }

    fn handle_proceed_to_vote(&mut self) -> Result<Vec<GameEvent>, GameError> {
        if self.phase != GamePhase::Discussion {
            return Err(self.invalid("proceed-to-vote"));
        }
        self.phase = GamePhase::Voting;
        Ok(Vec::new())
    }

    fn handle_cast_vote(
        &mut self,
        voter: String,
        target: String,
    ) -> Result<Vec<GameEvent>, GameError> {
        if self.phase != GamePhase::Voting {
            return Err(self.invalid("cast-vote"));
        }
        if !self.alive.contains(&voter) {
            return Err(GameError::UnknownVoter(voter));
        }
        if self.has_voted(&voter) {
            return Err(GameError::AlreadyVoted(voter));
        }
        if !self.alive.contains(&target) {
            return Err(GameError::UnknownTarget(target));
        }
        if voter == target {
            return Err(GameError::SelfVote(voter));
        }

        self.votes.push((voter.clone(), target.clone()));
        let remaining = self.alive.iter().filter(|p| !self.has_voted(p)).count();
        tracing::debug!(voter = %voter, target = %target, remaining, "Vote recorded");

        let mut events = vec![GameEvent::VoteRecorded { voter, remaining }];
        if remaining == 0 {
            events.extend(self.resolve_votes());
        }
        Ok(events)
    }

    /// Tallies the completed voting cycle and advances the round: a tie
    /// eliminates nobody, a decisive result removes the top target and runs
    /// the win checks.
    fn resolve_votes(&mut self) -> Vec<GameEvent> {
        // Tally in cast order so the earliest-seen name leads the top set.
        let mut tally: Vec<(String, usize)> = Vec::new();
        for (_, target) in &self.votes {
            match tally.iter_mut().find(|(name, _)| name == target) {
                Some((_, count)) => *count += 1,
                None => tally.push((target.clone(), 1)),
            }
        }

        let top = tally.iter().map(|(_, count)| *count).max().unwrap_or(0);
        let top_set: Vec<&String> = tally
            .iter()
            .filter(|(_, count)| *count == top)
            .map(|(name, _)| name)
            .collect();

        if top_set.len() != 1 {
            self.votes.clear();
            self.cycle += 1;
            self.phase = GamePhase::Discussion;
            tracing::info!(cycle = self.cycle, "Vote tied, nobody eliminated");
            return vec![GameEvent::VotesTied { cycle: self.cycle }];
        }

        let eliminated = top_set[0].clone();
        self.alive.retain(|p| p != &eliminated);
        self.eliminated.push(eliminated.clone());
        tracing::info!(player = %eliminated, votes.count = top, "Player eliminated");

        let mut events = vec![GameEvent::PlayerEliminated {
            name: eliminated.clone(),
        }];

        if self.is_imposter(&eliminated) {
            self.phase = GamePhase::End {
                outcome: RoundOutcome::GroupWins,
            };
            events.push(GameEvent::RoundEnded {
                outcome: RoundOutcome::GroupWins,
            });
        } else if self.alive.len() == FINAL_TWO
            && self
                .imposter
                .as_ref()
                .is_some_and(|imposter| self.alive.contains(imposter))
        {
            self.phase = GamePhase::End {
                outcome: RoundOutcome::ImposterWins,
            };
            events.push(GameEvent::RoundEnded {
                outcome: RoundOutcome::ImposterWins,
            });
        } else {
            self.votes.clear();
            self.cycle += 1;
            self.phase = GamePhase::Discussion;
        }
        events
    }
}
