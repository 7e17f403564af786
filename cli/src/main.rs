use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use minefield_core::{RevealOutcome, Settings, WinRule};

use session::{Command, Event, HELP, Session};

mod render;
mod session;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum WinRuleArg {
    /// Won when as many cells are revealed as there are mines
    Faithful,
    /// Won when every safe cell is revealed
    SafeCells,
}

impl From<WinRuleArg> for WinRule {
    fn from(arg: WinRuleArg) -> Self {
        match arg {
            WinRuleArg::Faithful => WinRule::RevealedEqualsMines,
            WinRuleArg::SafeCells => WinRule::AllSafeRevealed,
        }
    }
}

/// Terminal Minesweeper.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// TOML settings file with `columns`, `rows`, `mines` and `font_size`
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    cols: Option<usize>,
    #[arg(long)]
    rows: Option<usize>,
    #[arg(long)]
    mines: Option<usize>,
    /// Seed for mine placement, random when omitted
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long, value_enum, default_value_t = WinRuleArg::SafeCells)]
    win_rule: WinRuleArg,
    #[command(flatten)]
    verbosity: Verbosity<WarnLevel>,
}

impl Args {
    /// Settings file first, then command line overrides.
    fn settings(&self) -> anyhow::Result<Settings> {
        let mut settings = match &self.config {
            Some(path) => load_settings(path)?,
            None => Settings::default(),
        };
        if let Some(cols) = self.cols {
            settings.columns = cols;
        }
        if let Some(rows) = self.rows {
            settings.rows = rows;
        }
        if let Some(mines) = self.mines {
            settings.mines = mines;
        }
        Ok(settings)
    }
}

fn load_settings(path: &Path) -> anyhow::Result<Settings> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading settings from {}", path.display()))?;
    toml::from_str(&text).with_context(|| format!("parsing settings in {}", path.display()))
}

fn describe(event: Event) -> Option<&'static str> {
    match event {
        Event::Lost => Some("YOU LOSE!"),
        Event::Won => Some("YOU WIN!"),
        Event::Revealed(RevealOutcome::Mine) => Some("that was a mine"),
        Event::Reset => Some("board reset"),
        Event::NewGame => Some("new game"),
        _ => None,
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.verbosity.tracing_level_filter())
        .with_writer(io::stderr)
        .init();

    let settings = args.settings()?;
    let config = settings.board_config()?;
    log::debug!("font size {} is display only", settings.font_size);

    let seed = args.seed.unwrap_or_else(rand::random);
    log::info!("seed {seed}");
    let mut session = Session::new(config, args.win_rule.into(), seed);

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", render::render(session.board()))?;
    writeln!(stdout, "type `help` for commands")?;

    for line in io::stdin().lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let command: Command = match line.parse() {
            Ok(command) => command,
            Err(err) => {
                writeln!(stdout, "{err:#}")?;
                continue;
            }
        };
        log::debug!("command: {command:?}");

        match session.apply(command) {
            Ok(Event::Quit) => break,
            Ok(Event::Help) => writeln!(stdout, "{HELP}")?,
            Ok(event) => {
                writeln!(stdout, "{}", render::render(session.board()))?;
                if let Some(message) = describe(event) {
                    writeln!(stdout, "{message}")?;
                }
            }
            Err(err) => writeln!(stdout, "{err}")?,
        }
    }

    Ok(())
}
