//! Fairmove CLI
//!
//! Interactive provably-fair rock-paper-scissors against the computer.
//! The computer commits to its move (HMAC-SHA256 tag shown before you
//! move) and reveals the key afterwards so the commitment can be
//! checked.

use clap::Parser;
use fairmove_core::{GameEngine, GameError, MoveList, Outcome, RoundResult};
use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Provably-fair generalized rock-paper-scissors.
///
/// Supply moves in cyclic strength order: each move beats the following
/// half of the list.
#[derive(Parser, Debug)]
#[command(name = "fairmove", version, about)]
struct Args {
    /// Move tokens: an odd number (>= 3) of unique names
    #[arg(required = true, num_args = 1..)]
    moves: Vec<String>,
}

/// Parsed user input for one prompt
enum Input {
    Exit,
    Help,
    Move(usize),
    Invalid,
}

/// One interactive session owning the engine
struct Session {
    engine: GameEngine,
}

impl Session {
    fn new(engine: GameEngine) -> Self {
        Self { engine }
    }

    fn run(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        let stdin = io::stdin();
        let mut lines = stdin.lock().lines();

        println!("Welcome to the rock-paper-scissors game!");
        println!("Enter '?' or 'help' to see the game rules and moves.");

        loop {
            let commitment = self.engine.start_round()?;
            debug!(%commitment, "round committed");

            println!();
            println!("HMAC: {commitment}");
            self.print_menu();

            loop {
                print!("Your move: ");
                io::stdout().flush()?;

                let line = match lines.next() {
                    Some(line) => line?,
                    None => {
                        println!();
                        return self.quit();
                    }
                };

                match self.parse(line.trim()) {
                    Input::Exit => return self.quit(),
                    Input::Help => self.print_help(),
                    Input::Move(index) => {
                        let token = match self.engine.moves().get(index - 1) {
                            Some(token) => token.to_string(),
                            None => {
                                self.print_menu();
                                continue;
                            }
                        };
                        match self.engine.submit_move(&token) {
                            Ok(result) => {
                                info!(
                                    round_id = %result.round_id,
                                    outcome = %result.outcome,
                                    "round resolved"
                                );
                                print_result(&result);
                                break;
                            }
                            Err(err @ (GameError::InvalidMove(_) | GameError::UnknownMove(_))) => {
                                println!("Invalid input: {err}.");
                                self.print_menu();
                            }
                            Err(err) => return Err(err.into()),
                        }
                    }
                    Input::Invalid => {
                        println!("Invalid input. Please enter a move number, '?', or 0 to exit.");
                        self.print_menu();
                    }
                }
            }
        }
    }

    fn quit(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        self.engine.terminate()?;
        println!("Thanks for playing! Goodbye!");
        Ok(())
    }

    fn parse(&self, input: &str) -> Input {
        match input {
            "0" | "exit" => Input::Exit,
            "?" | "help" => Input::Help,
            _ => match input.parse::<usize>() {
                Ok(index) if (1..=self.engine.moves().len()).contains(&index) => Input::Move(index),
                _ => Input::Invalid,
            },
        }
    }

    fn print_menu(&self) {
        println!("Available moves:");
        for (index, token) in self.engine.moves().iter().enumerate() {
            println!("{} - {}", index + 1, token);
        }
        println!("0 - Exit");
    }

    fn print_help(&self) {
        println!("Help:");
        for row in self.engine.outcome_table().grid() {
            println!("{}", row.join("\t"));
        }
    }
}

fn print_result(result: &RoundResult) {
    println!("Your move: {}", result.user_move);
    println!("Computer move: {}", result.computer_move);
    match result.outcome {
        Outcome::Win => println!("You win!"),
        Outcome::Lose => println!("You lose!"),
        Outcome::Draw => println!("It's a draw!"),
    }
    println!("HMAC key: {}", result.revealed_key);
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let moves = match MoveList::new(args.moves) {
        Ok(moves) => moves,
        Err(err) => {
            eprintln!("Error: incorrect arguments: {err}.");
            eprintln!("Please provide an odd number (>=3) of unique moves.");
            eprintln!("Example: fairmove Rock Paper Scissors");
            return ExitCode::FAILURE;
        }
    };

    let mut session = Session::new(GameEngine::new(moves));
    match session.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
