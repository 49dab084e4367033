//! CLI SET example.
//!
//! Run with an optional directory of card images to check that every card
//! has an asset: `cargo run --example cli_set -- path/to/kaarten`.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, BufRead};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use setrs::board::{COLUMNS, ROWS};
use setrs::{
    AssetCatalog, ComputerMove, Control, Event, Flow, Game, GameOptions, GameState, Report,
    SelectOutcome, Snapshot, Verdict,
};

enum Input {
    Events(Vec<Event>),
    Unknown(String),
}

fn main() {
    let catalog = match std::env::args().nth(1) {
        Some(dir) => match AssetCatalog::from_dir(&dir) {
            Ok(catalog) => catalog,
            Err(err) => {
                eprintln!("Cannot load card assets from {dir}: {err}");
                std::process::exit(1);
            }
        },
        None => AssetCatalog::canonical(),
    };

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut game = Game::new(GameOptions::default(), seed);

    let (sender, receiver) = mpsc::channel();
    let ticking = Arc::new(AtomicBool::new(false));

    spawn_ticker(sender.clone(), Arc::clone(&ticking));
    spawn_reader(sender);

    println!("SET CLI example (type 'q' to quit)");
    print_screen(&game.snapshot(), &catalog);

    for input in receiver {
        let events = match input {
            Input::Events(events) => events,
            Input::Unknown(line) => {
                println!("Unknown command: {line}");
                continue;
            }
        };

        for event in events {
            if matches!(event, Event::Select(slot) if slot >= setrs::BOARD_SIZE) {
                println!("That slot is not on the board.");
                continue;
            }

            let before = game.state();
            let (flow, report) = game.dispatch(event);
            ticking.store(game.ticker_active(), Ordering::SeqCst);

            let redraw = report.is_some() || event != Event::Tick;
            if let Some(report) = report {
                announce(report);
            }

            match flow {
                Flow::Quit => {
                    println!("Goodbye.");
                    return;
                }
                Flow::Continue(state) if redraw || state != before => {
                    print_screen(&game.snapshot(), &catalog);
                }
                Flow::Continue(_) => {}
            }
        }
    }
}

fn announce(report: Report) {
    match report {
        Report::Computer(ComputerMove::ClaimedSet(slots)) => {
            println!("Time's up! The computer found a set at {slots:?}.");
        }
        Report::Computer(ComputerMove::ForcedReplace) => {
            println!("Time's up! No set on the board, slots 0-2 were replaced.");
        }
        Report::Select(SelectOutcome::Claimed(slots)) => println!("SET! {slots:?}"),
        Report::Select(SelectOutcome::Rejected(slots)) => println!("Not a set: {slots:?}"),
        Report::Select(SelectOutcome::Selected | SelectOutcome::Deselected) => {}
    }
}

fn spawn_ticker(sender: mpsc::Sender<Input>, ticking: Arc<AtomicBool>) {
    thread::spawn(move || {
        loop {
            thread::sleep(Duration::from_secs(1));
            if ticking.load(Ordering::SeqCst)
                && sender.send(Input::Events(vec![Event::Tick])).is_err()
            {
                break;
            }
        }
    });
}

fn spawn_reader(sender: mpsc::Sender<Input>) {
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            let Ok(line) = line else {
                break;
            };
            if sender.send(parse_line(&line)).is_err() {
                break;
            }
        }
        let _ = sender.send(Input::Events(vec![Event::Quit]));
    });
}

fn parse_line(line: &str) -> Input {
    let line = line.trim().to_lowercase();
    let event = match line.as_str() {
        "q" | "quit" => Event::Quit,
        "+" | "up" => Event::Control(Control::MoreTime),
        "-" | "down" => Event::Control(Control::LessTime),
        "s" | "start" => Event::Control(Control::Start),
        "r" | "replay" => Event::Control(Control::Replay),
        "" => return Input::Events(Vec::new()),
        _ => {
            let slots: Result<Vec<usize>, _> =
                line.split_whitespace().map(str::parse::<usize>).collect();
            return match slots {
                Ok(slots) => Input::Events(slots.into_iter().map(Event::Select).collect()),
                Err(_) => Input::Unknown(line),
            };
        }
    };
    Input::Events(vec![event])
}

fn print_screen(snapshot: &Snapshot, catalog: &AssetCatalog) {
    match snapshot.state {
        GameState::Home => {
            println!("\n=== SET ===");
            println!("Time per round: {} seconds", snapshot.round_seconds);
            println!("[+] more time  [-] less time  [s] start");
        }
        GameState::Playing => print_board(snapshot, catalog),
        GameState::End => {
            let Some(result) = snapshot.result else {
                return;
            };
            let verdict = match result.verdict {
                Verdict::Win => colorize("YOU WIN", "32"),
                Verdict::Lose => colorize("YOU LOSE", "31"),
            };
            println!("\n{verdict}");
            if result.is_tie() {
                println!("(a tie counts as a loss)");
            }
            println!("Your Score: {}", result.scores.player);
            println!("Computer Score: {}", result.scores.computer);
            println!("[r] play again");
        }
    }
}

fn print_board(snapshot: &Snapshot, catalog: &AssetCatalog) {
    println!();
    for row in 0..ROWS {
        let cells: Vec<String> = (0..COLUMNS)
            .map(|column| {
                let slot = row * COLUMNS + column;
                let label = snapshot.board.slots()[slot]
                    .and_then(|card| catalog.resolve(&card))
                    .unwrap_or("-");
                let text = format!("{slot:>2}: {label:<24}");
                if snapshot.selection.contains(slot) {
                    colorize(&text, "32")
                } else {
                    text
                }
            })
            .collect();
        println!("{}", cells.join(" "));
    }
    println!(
        "Time: {}s | Player: {} | Computer: {} | Cards left: {}",
        snapshot.timer,
        snapshot.scores.player,
        snapshot.scores.computer,
        snapshot.cards_remaining
    );
    println!("Pick three slots, e.g. '2 5 9'.");
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
