//! Console frontend for Earth Messenger.
//!
//! A blocking readline loop over a single [`GameSession`]. The loop owns
//! the terminal concerns: the prompt, quitting, rendering engine errors in
//! yellow, and polling the game status after every turn so the outro is
//! printed the moment the outcome is decided.

use std::io::{self, BufRead, Write};
use std::process;

use clap::Parser;
use colored::Colorize;

use em_content::{INTRO, build_world, outro};
use em_engine::GameSession;

#[derive(Parser)]
#[command(
    name = "em",
    about = "Earth Messenger — humanity's last text adventure",
    version
)]
struct Cli {
    /// Name of the messenger
    #[arg(short, long, default_value = "Messenger")]
    name: String,

    /// Skip the opening narration
    #[arg(long)]
    skip_intro: bool,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), String> {
    let world = build_world().map_err(|e| e.to_string())?;
    let mut session =
        GameSession::new(world, cli.name.as_str()).map_err(|e| e.to_string())?;

    if !cli.skip_intro {
        println!("{INTRO}\n");
    }
    println!("{}\n", session.opening());
    println!("Type 'help' for commands, 'quit' to give up.\n");

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            // Input exhausted mid-game is a collaborator failure.
            Ok(0) => return Err("unexpected end of input".to_string()),
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let input = line.trim();
        if input.eq_ignore_ascii_case("quit") || input.eq_ignore_ascii_case("q") {
            println!("You power down the console. The stars will wait.");
            break;
        }

        match session.process(input) {
            Ok(output) => {
                if !output.is_empty() {
                    println!("{output}\n");
                }
            }
            Err(e) => {
                println!("{}\n", e.to_string().yellow());
            }
        }

        let status = session.status();
        if status.is_over() {
            println!("{}", outro(status.did_win()));
            break;
        }
    }

    Ok(())
}
