//! Line-oriented console for playing TipOver.
//!
//! Reads one command per line and writes responses to any `Write`, so the
//! same shell runs against stdin/stdout or an in-memory script.

use std::io::{self, BufRead, Write};

use tracing::warn;

use crate::game::{MoveOutcome, TipOverGame};
use crate::puzzle::Direction;

const COMMANDS: &[(&str, &str)] = &[
    ("load", "{board-file-name}: Load a new game board file."),
    ("reload", ": Load the most recent file again."),
    ("move", "{north|south|east|west}: Go in given direction, possibly tipping a tower."),
    ("hint", ": Make the next move for me."),
    ("show", ": Display the board."),
    ("help", ": Show this list of commands."),
    ("quit", ": Leave the game."),
];

const LEGAL_DIRECTIONS: &str = "Legal directions are\n[NORTH, EAST, SOUTH, WEST]";

pub struct Shell<R, W> {
    game: Option<TipOverGame>,
    input: R,
    out: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(game: Option<TipOverGame>, input: R, out: W) -> Self {
        Self { game, input, out }
    }

    /// Process commands until `quit` or end of input.
    pub fn run(&mut self) -> io::Result<()> {
        let mut line = String::new();
        if self.game.is_some() {
            self.announce_loaded()?;
        } else {
            write!(self.out, "Board file name: ")?;
            self.out.flush()?;
            if self.input.read_line(&mut line)? == 0 {
                writeln!(self.out)?;
                return Ok(());
            }
            match line.trim() {
                "" => writeln!(self.out, "No file loaded.")?,
                file => self.load(file)?,
            }
        }

        loop {
            write!(self.out, "> ")?;
            self.out.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                writeln!(self.out)?;
                return Ok(());
            }

            let mut words = line.split_whitespace();
            let Some(command) = words.next() else {
                continue;
            };
            let args: Vec<&str> = words.collect();

            match (command.to_ascii_lowercase().as_str(), args.as_slice()) {
                ("quit" | "exit", _) => return Ok(()),
                ("load", [file]) => self.load(file)?,
                ("reload", []) => self.reload()?,
                ("move", [direction]) => self.make_move(direction)?,
                ("hint", []) => self.hint()?,
                ("show", []) => self.show()?,
                ("help", _) => self.help()?,
                (name, _) if COMMANDS.iter().any(|(known, _)| *known == name) => {
                    writeln!(self.out, "Wrong number of arguments for '{}'.", name)?;
                    self.help()?;
                }
                _ => writeln!(
                    self.out,
                    "Unrecognized command: {}. Type 'help' for a list of commands.",
                    command
                )?,
            }
        }
    }

    fn announce_loaded(&mut self) -> io::Result<()> {
        writeln!(self.out, "New file loaded.")?;
        if let Some(game) = &self.game {
            if game.is_solved() {
                writeln!(self.out, "YOU WON!")?;
            }
            write!(self.out, "{}", game.current())?;
        }
        Ok(())
    }

    fn load(&mut self, file: &str) -> io::Result<()> {
        match TipOverGame::load(file) {
            Ok(game) => {
                self.game = Some(game);
                self.announce_loaded()
            }
            Err(err) => {
                warn!(file, error = %err, "failed to load puzzle");
                writeln!(self.out, "Invalid file.")
            }
        }
    }

    fn reload(&mut self) -> io::Result<()> {
        let Some(game) = self.game.as_mut() else {
            return writeln!(self.out, "No file loaded.");
        };
        match game.reload() {
            Ok(()) => self.announce_loaded(),
            Err(err) => {
                warn!(error = %err, "failed to reload puzzle");
                writeln!(self.out, "Invalid file.")
            }
        }
    }

    fn make_move(&mut self, direction: &str) -> io::Result<()> {
        let Some(game) = self.game.as_mut() else {
            return writeln!(self.out, "No file loaded.");
        };
        let outcome = match direction.parse::<Direction>() {
            Ok(direction) => game.make_move(direction),
            Err(_) if game.is_solved() => MoveOutcome::AlreadySolved,
            Err(_) => MoveOutcome::Illegal,
        };
        self.report(outcome, LEGAL_DIRECTIONS)
    }

    fn hint(&mut self) -> io::Result<()> {
        let Some(game) = self.game.as_mut() else {
            return writeln!(self.out, "No file loaded.");
        };
        let outcome = game.hint();
        self.report(outcome, "Unsolvable board")
    }

    fn report(&mut self, outcome: MoveOutcome, refusal: &str) -> io::Result<()> {
        match outcome {
            MoveOutcome::Moved { tipped, solved } => {
                if tipped {
                    writeln!(self.out, "A tower has been tipped over.")?;
                }
                self.show()?;
                if solved {
                    writeln!(self.out, "YOU WON!")?;
                }
                Ok(())
            }
            MoveOutcome::AlreadySolved => writeln!(self.out, "You won! No more moves are needed."),
            MoveOutcome::Illegal | MoveOutcome::Unsolvable => writeln!(self.out, "{}", refusal),
        }
    }

    fn show(&mut self) -> io::Result<()> {
        match &self.game {
            Some(game) => write!(self.out, "{}", game.current()),
            None => writeln!(self.out, "No file loaded."),
        }
    }

    fn help(&mut self) -> io::Result<()> {
        for (name, description) in COMMANDS {
            writeln!(self.out, "  {}{}", name, description)?;
        }
        Ok(())
    }
}
