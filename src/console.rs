//! Line-oriented terminal driver.
//!
//! Reads commands from stdin and prints board updates as session events
//! arrive, including the bot's delayed replies.

use crate::session::{GameEvent, GameSession};
use crate::view::GameView;
use anyhow::Result;
use rewind_tictactoe::{GameStatus, Position};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::{debug, info, instrument};

/// A parsed console command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleCommand {
    /// Place a mark for the active player.
    Move(usize),
    /// Travel to a history step.
    Jump(usize),
    /// Start over.
    Reset,
    /// Print the board.
    View,
    /// Print the view as JSON.
    Json,
    /// List history steps.
    History,
    /// Print usage.
    Help,
    /// Leave.
    Quit,
}

impl ConsoleCommand {
    /// Parses one input line.
    pub fn parse(line: &str) -> Result<Self, String> {
        let mut words = line.split_whitespace();
        let head = words
            .next()
            .ok_or_else(|| "Empty command".to_string())?
            .to_lowercase();
        let rest = words.collect::<Vec<_>>().join(" ");

        match head.as_str() {
            "move" | "m" => parse_square(&rest).map(ConsoleCommand::Move),
            "jump" | "j" => rest
                .parse::<usize>()
                .map(ConsoleCommand::Jump)
                .map_err(|_| format!("Invalid step: {:?}", rest)),
            "reset" | "again" => Ok(ConsoleCommand::Reset),
            "view" | "v" => Ok(ConsoleCommand::View),
            "json" => Ok(ConsoleCommand::Json),
            "history" | "h" => Ok(ConsoleCommand::History),
            "help" | "?" => Ok(ConsoleCommand::Help),
            "quit" | "exit" | "q" => Ok(ConsoleCommand::Quit),
            _ => parse_square(line).map(ConsoleCommand::Move),
        }
    }
}

fn parse_square(input: &str) -> Result<usize, String> {
    // Out-of-range numbers pass through so the game reports them.
    if let Ok(index) = input.trim().parse::<usize>() {
        return Ok(index);
    }
    Position::from_label_or_number(input)
        .map(Position::to_index)
        .ok_or_else(|| format!("Unknown command or square: {:?}", input.trim()))
}

const HELP: &str = "\
Commands:
  <0-8> | move <square>   place a mark (index or label, e.g. 'center')
  jump <step>             travel back to a history step
  history                 list history steps
  view | json             show the board
  reset                   start a new game
  quit                    leave";

/// Runs the interactive loop until `quit` or end of input.
#[instrument(skip_all)]
pub async fn run(session: GameSession, mut events: mpsc::UnboundedReceiver<GameEvent>) -> Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("{}\n", HELP);
    print_view(&session.view());

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    info!("End of input");
                    break;
                };
                if line.trim().is_empty() {
                    continue;
                }
                match ConsoleCommand::parse(&line) {
                    Ok(ConsoleCommand::Quit) => break,
                    Ok(command) => handle(&session, command)?,
                    Err(e) => println!("{}", e),
                }
            }
            Some(event) = events.recv() => report(&session, event),
        }
    }

    info!("Leaving game");
    Ok(())
}

fn handle(session: &GameSession, command: ConsoleCommand) -> Result<()> {
    debug!(?command, "Console command");
    match command {
        ConsoleCommand::Move(index) => {
            if let Err(e) = session.request_move(index) {
                println!("Move rejected: {}", e);
            }
        }
        ConsoleCommand::Jump(step) => {
            if let Err(e) = session.request_jump(step) {
                println!("Jump rejected: {}", e);
            }
        }
        ConsoleCommand::Reset => session.request_reset(),
        ConsoleCommand::View => print_view(&session.view()),
        ConsoleCommand::Json => println!("{}", session.view().to_json()?),
        ConsoleCommand::History => print_history(&session.view()),
        ConsoleCommand::Help => println!("{}", HELP),
        ConsoleCommand::Quit => {}
    }
    Ok(())
}

fn report(session: &GameSession, event: GameEvent) {
    match event {
        GameEvent::MoveMade {
            player,
            position,
            by_bot,
            ..
        } => {
            let who = if by_bot { " (bot)" } else { "" };
            println!("\n{}{} -> {}", player, who, position);
            print_view(&session.view());
        }
        GameEvent::BotArmed { .. } => println!("Bot is thinking..."),
        GameEvent::Jumped { step } => {
            println!("\nTravelled to step {}", step);
            print_view(&session.view());
        }
        GameEvent::GameOver { status } => match status {
            GameStatus::Won { player, .. } => println!("{} Won! Type 'reset' to play again.", player),
            GameStatus::Tied => println!("Game Tied! Type 'reset' to play again."),
            GameStatus::InProgress => {}
        },
        GameEvent::Reset { .. } => {
            println!("\nNew game");
            print_view(&session.view());
        }
    }
}

fn print_view(view: &GameView) {
    println!("{}\n{}", view.board_text, view.headline);
}

fn print_history(view: &GameView) {
    for step in &view.steps {
        let marker = if step.current { ">" } else { " " };
        let state = if step.selectable { "" } else { " (disabled)" };
        println!("{} {}: {}{}", marker, step.index, step.label, state);
    }
}
