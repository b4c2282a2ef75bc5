use clap::{Parser, Subcommand};
use log::debug;
use rs_connections::*;
use std::error::Error;
use std::fs::File;
use std::io;
use std::io::BufRead;

/// Used when no answers file is given.
const SAMPLE_ANSWER_KEY: [[&str; GROUP_SIZE]; NUM_GROUPS] = [
    ["bass", "flounder", "salmon", "trout"],
    ["ant", "drill", "island", "opal"],
    ["bucks", "heat", "jazz", "nets"],
    ["are", "queue", "sea", "why"],
];

const TILE_WIDTH: usize = 14;

/// Play a Connections-style puzzle, where 16 words must be split into four groups of four.
#[derive(Parser, Debug)]
#[clap(author, version, about)]
struct Args {
    /// Path to an answer key, with one group of four comma-separated words on each line. A
    /// built-in sample puzzle is used if this is not set.
    #[clap(short = 'f', long)]
    answers_file: Option<String>,

    /// Log every selection and guess. Overridden by `RUST_LOG`.
    #[clap(short, long)]
    verbose: bool,

    #[clap(subcommand)]
    mode: Mode,
}

#[derive(Subcommand, Debug)]
enum Mode {
    /// Replay a list of commands, e.g. "0 1 2 3 g". Numbers toggle tiles and 'g' submits a guess.
    Script { commands: String },
    /// Play by entering tile numbers, tile words, or 'g' on stdin.
    Interactive,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    let default_level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let grid = match &args.answers_file {
        Some(path) => {
            println!("Answers file: {}", path);
            Grid::from_reader(io::BufReader::new(File::open(path)?))?
        }
        None => Grid::from_groups(SAMPLE_ANSWER_KEY)?,
    };
    debug!(
        "Loaded grid: {:?}",
        grid.iter().map(Item::text).collect::<Vec<&str>>()
    );
    let mut game = GameEngine::new(grid);

    match args.mode {
        Mode::Script { commands } => run_script(&mut game, &commands)?,
        Mode::Interactive => play_interactive_game(&mut game)?,
    }

    if game.outcome() == Some(GameOutcome::Lost) {
        std::process::exit(1);
    }
    Ok(())
}

fn run_script(game: &mut GameEngine, script: &str) -> Result<(), ScriptError> {
    let commands = parse_script(script)?;
    for command in commands {
        let result = game.apply(command);
        report(game, &result);
        if let Ok(CommandResult::Guessed(_)) = result {
            print_board(&game.snapshot());
        }
    }
    finish(game);
    Ok(())
}

fn play_interactive_game(game: &mut GameEngine) -> io::Result<()> {
    println!(
        "Find four groups of four words that share something in common.\n\n\
         Enter a tile's number or word to select or deselect it, and 'g' to submit your guess.\n\
         Several commands can be given on one line. Enter 'quit' to give up."
    );
    print_board(&game.snapshot());

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().eq_ignore_ascii_case("quit") {
            break;
        }
        let mut guessed = false;
        for token in line
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|token| !token.is_empty())
        {
            let command = match token.parse::<Command>() {
                Ok(command) => command,
                Err(e) => match game.grid().index_of(token) {
                    Some(index) => Command::Toggle(index),
                    None => {
                        println!("{}", e);
                        continue;
                    }
                },
            };
            let result = game.apply(command);
            report(game, &result);
            guessed |= matches!(result, Ok(CommandResult::Guessed(_)));
        }
        if game.is_terminal() {
            break;
        }
        if guessed {
            print_board(&game.snapshot());
        } else {
            print_selection(game);
        }
    }
    finish(game);
    Ok(())
}

fn report(game: &GameEngine, result: &Result<CommandResult, EngineError>) {
    match result {
        Ok(CommandResult::Toggled(SelectionChanged::Selected(index))) => {
            println!("Selected {}.", tile_text(game, *index));
        }
        Ok(CommandResult::Toggled(SelectionChanged::Deselected(index))) => {
            println!("Deselected {}.", tile_text(game, *index));
        }
        Ok(CommandResult::Toggled(SelectionChanged::SelectionFull)) => {
            println!(
                "You can only select {} tiles. Deselect one first.",
                GROUP_SIZE
            );
        }
        Ok(CommandResult::Guessed(GuessOutcome::Correct(group_id))) => {
            println!("Correct! That's the {:?} group.", group_id.color());
        }
        Ok(CommandResult::Guessed(GuessOutcome::Incorrect)) => {
            println!("Not quite.");
        }
        Err(e) => println!("{}", e),
    }
}

fn tile_text(game: &GameEngine, index: usize) -> &str {
    game.grid().item_at(index).map_or("?", Item::text)
}

fn print_selection(game: &GameEngine) {
    let selected: Vec<&str> = game
        .selection()
        .iter()
        .map(|index| tile_text(game, *index))
        .collect();
    println!("Selected: {}", selected.join(", "));
}

fn print_board(view: &GameStateView) {
    for row in view.tiles.chunks(GROUP_SIZE) {
        println!();
        for tile in row {
            let label = match tile.group_id {
                Some(group_id) if tile.solved => format!("{}({})", tile.text, group_id.color()),
                _ if tile.selected => format!("[{}]", tile.text),
                _ => format!("{:>2} {}", tile.index, tile.text),
            };
            print!("{:<width$}", label, width = TILE_WIDTH);
        }
    }
    println!("\n\nMistakes remaining: {}", view.mistakes_remaining);
}

fn finish(game: &GameEngine) {
    match game.outcome() {
        Some(GameOutcome::Won) => println!("You win!"),
        Some(GameOutcome::Lost) => println!("You lose!"),
        None => {
            println!("Game not finished.");
            return;
        }
    }
    for guess in game.guess_history() {
        let colors: Vec<String> = guess
            .colors()
            .iter()
            .map(|color| color.to_string())
            .collect();
        println!("{}", colors.join(" "));
    }
}
