use std::str::FromStr;

use anyhow::{Context, bail};
use minefield_core::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// One line of player input.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Reveal(Coord, Coord),
    Flag(Coord, Coord),
    Reset,
    NewGame,
    Configure {
        cols: usize,
        rows: usize,
        mines: usize,
    },
    Show,
    Help,
    Quit,
}

pub const HELP: &str = "\
commands:
  r <x> <y>               reveal a cell
  f <x> <y>               toggle a flag
  reset                   hide every cell, same mines
  new                     new game, same size
  set <cols> <rows> <n>   new game with another size and mine count
  show                    redraw the board
  quit";

impl FromStr for Command {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> anyhow::Result<Self> {
        let mut words = line.split_whitespace();
        let Some(name) = words.next() else {
            bail!("empty command");
        };
        let args: Vec<&str> = words.collect();

        let command = match (name, args.as_slice()) {
            ("r" | "reveal", [x, y]) => Self::Reveal(coord(x)?, coord(y)?),
            ("f" | "flag", [x, y]) => Self::Flag(coord(x)?, coord(y)?),
            ("reset", []) => Self::Reset,
            ("n" | "new", []) => Self::NewGame,
            ("set", [cols, rows, mines]) => Self::Configure {
                cols: number(cols)?,
                rows: number(rows)?,
                mines: number(mines)?,
            },
            ("s" | "show", []) => Self::Show,
            ("h" | "help" | "?", []) => Self::Help,
            ("q" | "quit" | "exit", []) => Self::Quit,
            _ => bail!("unknown command {line:?}, try `help`"),
        };
        Ok(command)
    }
}

fn coord(word: &str) -> anyhow::Result<Coord> {
    word.parse()
        .with_context(|| format!("invalid coordinate {word:?}"))
}

fn number(word: &str) -> anyhow::Result<usize> {
    word.parse()
        .with_context(|| format!("invalid number {word:?}"))
}

/// What a command did, for the adapter to report.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Event {
    Revealed(RevealOutcome),
    Lost,
    Won,
    Flagged(bool),
    Reset,
    NewGame,
    Show,
    Help,
    Quit,
}

/// A board plus the random source used to rebuild it.
pub struct Session {
    board: Board,
    rng: SmallRng,
}

impl Session {
    pub fn new(config: BoardConfig, win_rule: WinRule, seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let board = Board::create(config, &mut rng).with_win_rule(win_rule);
        Self { board, rng }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn apply(&mut self, command: Command) -> minefield_core::Result<Event> {
        use Command::*;

        Ok(match command {
            Reveal(x, y) => {
                let was_finished = self.board.is_finished();
                let outcome = self.board.reveal(x, y)?;
                match self.board.state() {
                    _ if was_finished => Event::Revealed(outcome),
                    BoardState::Lost => Event::Lost,
                    BoardState::Won => Event::Won,
                    BoardState::Ready | BoardState::Active => Event::Revealed(outcome),
                }
            }
            Flag(x, y) => Event::Flagged(self.board.toggle_flag(x, y)?),
            Reset => {
                self.board.reset_board();
                Event::Reset
            }
            NewGame => {
                self.board.renew(&mut self.rng);
                Event::NewGame
            }
            Configure { cols, rows, mines } => {
                let config = BoardConfig::new(cols, rows, mines)?;
                self.board.regenerate(config, &mut self.rng);
                Event::NewGame
            }
            Show => Event::Show,
            Help => Event::Help,
            Quit => Event::Quit,
        })
    }
}
