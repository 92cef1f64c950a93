use anyhow::{anyhow, bail, Context, Result};
use clap::Parser;
use flexi_logger::Logger;
use rand::{rngs::StdRng, SeedableRng};
use std::io::{self, BufRead, Write};
use wordgrid::{Dictionary, GameSession, MoveOutcome, Player};

#[derive(Parser, Debug)]
#[command(name = "wordgrid", version, about = "Play a word game on a 9x9 board")]
struct Config {
    /// Sorted word list, one word per line
    #[arg(short = 'w', long)]
    wordlist: String,

    /// Seed for the tile bag, to replay a game
    #[arg(short = 's', long)]
    seed: Option<u64>,

    /// Log level, used if RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_level: String,
}

const HELP: &str = "\
commands:
  place SLOT ROW COL [LETTER]  put a rack letter on the board (LETTER for a blank)
  remove ROW COL               take a tile of this move back
  recall                       take all tiles of this move back
  submit                       submit the move
  board | rack | score         show the game
  end                          end the game
  quit";

enum Command {
    Place {
        slot: usize,
        row: usize,
        col: usize,
        letter: Option<char>,
    },
    Remove {
        row: usize,
        col: usize,
    },
    Recall,
    Submit,
    Board,
    Rack,
    Score,
    End,
    Help,
    Quit,
}

fn number(arg: Option<&str>, name: &str) -> Result<usize> {
    let arg = arg.ok_or_else(|| anyhow!("missing {}", name))?;
    arg.parse()
        .with_context(|| format!("invalid {} \"{}\"", name, arg))
}

fn parse_command(line: &str) -> Result<Command> {
    let mut args = line.split_whitespace();
    let command = match args.next().unwrap_or("help") {
        "place" | "p" => Command::Place {
            slot: number(args.next(), "slot")?,
            row: number(args.next(), "row")?,
            col: number(args.next(), "col")?,
            letter: args.next().and_then(|s| s.chars().next()),
        },
        "remove" | "r" => Command::Remove {
            row: number(args.next(), "row")?,
            col: number(args.next(), "col")?,
        },
        "recall" => Command::Recall,
        "submit" | "s" => Command::Submit,
        "board" => Command::Board,
        "rack" => Command::Rack,
        "score" => Command::Score,
        "end" => Command::End,
        "help" | "?" => Command::Help,
        "quit" | "q" => Command::Quit,
        other => bail!("unknown command \"{}\"", other),
    };
    Ok(command)
}

fn show_score(session: &GameSession) {
    for &player in &[Player::One, Player::Two] {
        println!("{}: {}", player, session.score(player));
    }
    println!("{} tiles in the bag", session.tiles_in_bag());
}

/// Run one command. Returns false when the session should stop.
fn execute(session: &mut GameSession, command: Command) -> Result<bool> {
    match command {
        Command::Place {
            slot,
            row,
            col,
            letter,
        } => match letter {
            Some(letter) => session.place_blank(slot, row, col, letter)?,
            None => session.place_tile(slot, row, col)?,
        },
        Command::Remove { row, col } => session.remove_tile(row, col)?,
        Command::Recall => session.recall_tiles()?,
        Command::Submit => match session.submit_move()? {
            MoveOutcome::Accepted { score, words } => {
                println!("{} for {} points", words.join(", "), score);
            }
            MoveOutcome::Rejected(rejection) => println!("rejected: {}", rejection),
        },
        Command::Board => println!("{}", session.board()),
        Command::Rack => println!("{}", session.rack(session.current_player())),
        Command::Score => show_score(session),
        Command::End => {
            let result = session.end_game();
            show_score(session);
            println!("{}", result);
        }
        Command::Help => println!("{}", HELP),
        Command::Quit => return Ok(false),
    }
    Ok(true)
}

fn main() -> Result<()> {
    let config = Config::parse();

    let _logger = Logger::try_with_env_or_str(&config.log_level)?
        .format(flexi_logger::colored_default_format)
        .start()?;

    let dictionary = Dictionary::from_file(&config.wordlist)
        .context("can not start without a dictionary")?;
    let mut session = match config.seed {
        Some(seed) => GameSession::with_seed(dictionary, seed),
        None => GameSession::new(dictionary, StdRng::from_entropy()),
    };
    log::info!("{}", session.dictionary());
    println!("{}", HELP);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        if !session.is_over() {
            print!(
                "{} [{}]> ",
                session.current_player(),
                session.rack(session.current_player())
            );
        } else {
            print!("> ");
        }
        io::stdout().flush()?;
        let line = match lines.next() {
            Some(line) => line?,
            None => break,
        };
        let result = parse_command(&line).and_then(|command| execute(&mut session, command));
        match result {
            Ok(true) => {}
            Ok(false) => break,
            Err(e) => println!("error: {:#}", e),
        }
    }
    Ok(())
}
