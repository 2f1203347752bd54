// src/ui.rs

//! Terminal front-end: renders the current phase and turns line input into
//! engine commands. Rule enforcement stays in the engine; this layer only
//! mirrors the guards the screens need.

use std::io::{self, BufRead, Write};

use crate::error::Result as AppResult;
use crate::game_logic::{GameCommand, GameEvent, GamePhase, ImposterGame, RoundOutcome};

enum Input {
    Command(GameCommand),
    Noop,
    Quit,
}

pub fn run(game: &mut ImposterGame) -> AppResult<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        render(game);
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break; // stdin closed
        };
        let line = line?;

        match read_input(game, line.trim()) {
            Input::Quit => break,
            Input::Noop => {}
            Input::Command(command) => match game.apply(command) {
                Ok(events) => {
                    for event in &events {
                        print_notice(event);
                    }
                }
                Err(err) => println!("!! {err}"),
            },
        }
    }

    Ok(())
}

fn read_input(game: &ImposterGame, input: &str) -> Input {
    if input.eq_ignore_ascii_case("quit") {
        return Input::Quit;
    }

    match &game.phase {
        GamePhase::Setup => {
            if let Some(name) = input.strip_prefix("add ") {
                Input::Command(GameCommand::AddPlayer {
                    name: name.to_string(),
                })
            } else if input == "start" {
                if game.can_start() {
                    Input::Command(GameCommand::StartRound)
                } else {
                    println!("Add at least 2 players first.");
                    Input::Noop
                }
            } else if input == "reset" {
                Input::Command(GameCommand::Reset)
            } else {
                println!("Commands: add <name>, start, reset, quit");
                Input::Noop
            }
        }
        GamePhase::Reveal { showing: false } => Input::Command(GameCommand::Reveal),
        GamePhase::Reveal { showing: true } => Input::Command(GameCommand::HideAndPass),
        GamePhase::Discussion => Input::Command(GameCommand::ProceedToVote),
        GamePhase::Voting => {
            if input.is_empty() {
                println!("Type the name of the player you vote to eliminate.");
                return Input::Noop;
            }
            match game.current_voter() {
                Some(voter) => Input::Command(GameCommand::CastVote {
                    voter: voter.to_string(),
                    target: input.to_string(),
                }),
                None => Input::Noop,
            }
        }
        GamePhase::End { .. } => {
            if input == "again" {
                Input::Command(GameCommand::NewRound)
            } else if input == "reset" {
                Input::Command(GameCommand::Reset)
            } else {
                println!("Commands: again, reset, quit");
                Input::Noop
            }
        }
    }
}

fn render(game: &ImposterGame) {
    println!();
    match &game.phase {
        GamePhase::Setup => render_setup(game),
        GamePhase::Reveal { showing: false } => render_pass_prompt(game),
        GamePhase::Reveal { showing: true } => render_role(game),
        GamePhase::Discussion => render_discussion(game),
        GamePhase::Voting => render_voting(game),
        GamePhase::End { outcome } => render_end(game, *outcome),
    }
}

fn render_setup(game: &ImposterGame) {
    println!("== SETUP ==");
    println!("Add players (min 2), then start.");
    println!();
    println!("Rules:");
    println!("  - one hidden imposter, everyone else sees the word");
    println!("  - discuss, then vote players out");
    println!("  - a tied vote eliminates nobody");
    println!("  - final two with the imposter means the imposter wins");
    println!();
    if game.players.is_empty() {
        println!("Players: none yet");
    } else {
        println!("Players: {}", game.players.join(", "));
    }
    println!("[add <name> | start | reset | quit]");
}

fn render_pass_prompt(game: &ImposterGame) {
    let player = game.current_reveal_player().unwrap_or("?");
    println!("== PASS THE DEVICE ==");
    println!(
        "Player: {} ({}/{})",
        player,
        game.reveal_index + 1,
        game.alive.len()
    );
    println!("Category: {}", game.category.as_deref().unwrap_or("?"));
    println!("[press Enter to reveal your role]");
}

fn render_role(game: &ImposterGame) {
    let player = game.current_reveal_player().unwrap_or("?");
    println!("== YOUR ROLE ==");
    println!("Category: {}", game.category.as_deref().unwrap_or("?"));
    if game.is_imposter(player) {
        println!("{player}, YOU ARE THE IMPOSTER.");
        println!("Secret word: ???");
    } else {
        println!("{player}, you are not the imposter.");
        println!("Secret word: {}", game.word.as_deref().unwrap_or("?"));
    }
    println!("[press Enter to hide and pass the device]");
}

fn render_discussion(game: &ImposterGame) {
    println!("== DISCUSSION (cycle {}) ==", game.cycle);
    println!("Give one-word clues, then move on to the vote.");
    println!("[press Enter to start voting]");
}

fn render_voting(game: &ImposterGame) {
    println!("== VOTING ==");
    match game.current_voter() {
        Some(voter) => {
            let candidates: Vec<&str> = game
                .alive
                .iter()
                .map(String::as_str)
                .filter(|name| *name != voter)
                .collect();
            println!("Voter: {voter}");
            println!("Candidates: {}", candidates.join(", "));
            println!("[type a name to vote]");
        }
        None => println!("Counting votes..."),
    }
}

fn render_end(game: &ImposterGame, outcome: RoundOutcome) {
    println!("== ROUND OVER ==");
    match outcome {
        RoundOutcome::GroupWins => println!("GROUP WINS! The imposter was voted out."),
        RoundOutcome::ImposterWins => println!("IMPOSTER WINS! Final two reached."),
    }
    println!("Secret word: {}", game.word.as_deref().unwrap_or("?"));
    println!("Imposter: {}", game.imposter.as_deref().unwrap_or("?"));
    println!("Eliminated: {}", game.eliminated.join(", "));
    println!("[again | reset | quit]");
}

fn print_notice(event: &GameEvent) {
    match event {
        GameEvent::PlayerAdded { name } => println!("Added {name}."),
        GameEvent::RoundStarted { round, category } => {
            println!("Round {round} started in category {category}.")
        }
        GameEvent::VoteRecorded { voter, remaining } => {
            println!("{voter} voted ({remaining} to go).")
        }
        GameEvent::VotesTied { cycle } => {
            println!("The vote was tied, nobody is eliminated. On to cycle {cycle}.")
        }
        GameEvent::PlayerEliminated { name } => println!("{name} has been eliminated."),
        GameEvent::RoundEnded { outcome } => match outcome {
            RoundOutcome::GroupWins => println!("The group caught the imposter!"),
            RoundOutcome::ImposterWins => println!("The imposter survived to the final two!"),
        },
        GameEvent::GameReset => println!("Players cleared."),
    }
}
