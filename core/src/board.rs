use alloc::vec::Vec;
use ndarray::Array2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoardState {
    Ready,
    Active,
    Won,
    Lost,
}

impl BoardState {
    pub const fn is_ready(self) -> bool {
        matches!(self, Self::Ready)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::Ready
    }
}

/// How [`Board::check_win`] decides a game is won.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum WinRule {
    /// Won once the number of revealed cells equals the mine count.
    ///
    /// This is the rule the game has always shipped with. It does not match classic Minesweeper,
    /// where every safe cell has to be opened, and can fire early on a board whose mine count is
    /// smaller than the safe area.
    #[default]
    RevealedEqualsMines,
    /// Won once every non-mine cell is revealed and no mine is.
    AllSafeRevealed,
}

/// The board engine: mine layout, per-cell values and the player's reveal/flag state.
#[derive(Clone, Debug, PartialEq)]
pub struct Board {
    config: BoardConfig,
    cells: Array2<Cell>,
    revealed_count: CellCount,
    flagged_count: CellCount,
    state: BoardState,
    win_rule: WinRule,
    triggered_mine: Option<Coord2>,
}

impl Board {
    /// Builds a board with mines sampled from `rng`.
    pub fn create<R: Rng + ?Sized>(config: BoardConfig, rng: &mut R) -> Self {
        let layout = random_layout(config, rng);
        Self::with_config(config, &layout)
    }

    pub fn generate<G: MineLayoutGenerator>(config: BoardConfig, generator: G) -> Self {
        let layout = generator.generate(config);
        Self::with_config(config, &layout)
    }

    /// Builds a board around a fixed layout, which must satisfy the usual size and density bounds.
    pub fn from_layout(layout: &MineLayout) -> Result<Self> {
        let (cols, rows) = layout.size();
        let config = BoardConfig::new(
            cols.into(),
            rows.into(),
            layout.mine_count().into(),
        )?;
        Ok(Self::with_config(config, layout))
    }

    fn with_config(config: BoardConfig, layout: &MineLayout) -> Self {
        let mut cells: Array2<Cell> = Array2::from_shape_fn(
            (usize::from(config.rows()), usize::from(config.cols())),
            |(y, x)| {
                if layout[(x as Coord, y as Coord)] {
                    Cell::new(CellValue::Mine)
                } else {
                    Cell::default()
                }
            },
        );

        for ((y, x), cell) in cells.indexed_iter_mut() {
            if !cell.value.is_mine() {
                cell.value = CellValue::Count(layout.adjacent_mine_count((x as Coord, y as Coord)));
            }
        }

        log::debug!(
            "created {}x{} board with {} mines",
            config.cols(),
            config.rows(),
            config.mines()
        );

        Self {
            config,
            cells,
            revealed_count: 0,
            flagged_count: 0,
            state: BoardState::default(),
            win_rule: WinRule::default(),
            triggered_mine: None,
        }
    }

    /// Full rebuild with new parameters. The current board is replaced only once the new one is
    /// complete.
    pub fn regenerate<R: Rng + ?Sized>(&mut self, config: BoardConfig, rng: &mut R) {
        let win_rule = self.win_rule;
        *self = Self::create(config, rng).with_win_rule(win_rule);
    }

    /// Full rebuild with the current parameters and fresh mine positions.
    pub fn renew<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.regenerate(self.config, rng);
    }

    pub fn with_win_rule(mut self, win_rule: WinRule) -> Self {
        self.win_rule = win_rule;
        self
    }

    pub fn config(&self) -> BoardConfig {
        self.config
    }

    pub fn cols(&self) -> Coord {
        self.config.cols()
    }

    pub fn rows(&self) -> Coord {
        self.config.rows()
    }

    pub fn mine_count(&self) -> CellCount {
        self.config.mines()
    }

    pub fn revealed_count(&self) -> CellCount {
        self.revealed_count
    }

    /// Every flag set on the board, including flags left on cells that were revealed later.
    pub fn flagged_count(&self) -> CellCount {
        self.flagged_count
    }

    /// Flags still sitting on covered cells, which is what a mines-left counter should subtract.
    pub fn covered_flag_count(&self) -> CellCount {
        self.cells
            .iter()
            .filter(|cell| cell.flagged && !cell.revealed)
            .count() as CellCount
    }

    pub fn state(&self) -> BoardState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn win_rule(&self) -> WinRule {
        self.win_rule
    }

    pub fn set_win_rule(&mut self, win_rule: WinRule) {
        self.win_rule = win_rule;
    }

    /// The mine whose reveal lost the game.
    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let (cols, rows) = self.config.size();
        if coords.0 < cols && coords.1 < rows {
            Ok(coords)
        } else {
            Err(BoardError::OutOfBounds {
                x: coords.0,
                y: coords.1,
                cols,
                rows,
            })
        }
    }

    pub fn cell_state(&self, x: Coord, y: Coord) -> Result<CellState> {
        let coords = self.validate_coords((x, y))?;
        Ok(self.cells[coords.to_nd_index()].into())
    }

    /// Number of mines among the neighbors of `(x, y)`, computed from the stored values.
    pub fn neighbor_mine_count(&self, x: Coord, y: Coord) -> Result<u8> {
        let coords = self.validate_coords((x, y))?;
        Ok(self
            .cells
            .iter_neighbors(coords)
            .filter(|&pos| self.cells[pos.to_nd_index()].value.is_mine())
            .count() as u8)
    }

    /// Mine coordinates in row-major order, for showing every mine once the game is lost.
    pub fn mine_positions(&self) -> impl Iterator<Item = Coord2> + '_ {
        self.cells
            .indexed_iter()
            .filter(|(_, cell)| cell.value.is_mine())
            .map(|((y, x), _)| (x as Coord, y as Coord))
    }

    pub fn reveal(&mut self, x: Coord, y: Coord) -> Result<RevealOutcome> {
        let coords = self.validate_coords((x, y))?;
        let cell = &mut self.cells[coords.to_nd_index()];
        let outcome = RevealOutcome::from(cell.value);

        if cell.revealed {
            log::trace!("({x}, {y}) already revealed");
            return Ok(outcome);
        }

        cell.revealed = true;
        self.revealed_count += 1;

        let revealed = match outcome {
            RevealOutcome::Mine => 1,
            RevealOutcome::Empty => 1 + self.flood_reveal(coords),
            RevealOutcome::Numbered(_) => 1,
        };
        log::trace!("({x}, {y}) revealed {revealed} cells: {outcome:?}");

        if outcome.is_loss() {
            self.end_game(false, Some(coords));
        } else if self.check_win() {
            self.end_game(true, None);
        } else if self.state.is_ready() {
            self.state = BoardState::Active;
        }

        Ok(outcome)
    }

    /// Opens the region around an already revealed empty cell. Cells are marked when pushed so
    /// none is visited twice. Returns how many cells were newly revealed.
    fn flood_reveal(&mut self, start: Coord2) -> CellCount {
        let mut newly_revealed = 0;
        let mut to_visit = Vec::from([start]);

        while let Some(coords) = to_visit.pop() {
            for pos in self.cells.iter_neighbors(coords) {
                let cell = &mut self.cells[pos.to_nd_index()];
                if cell.revealed {
                    continue;
                }

                cell.revealed = true;
                newly_revealed += 1;

                if cell.value.is_empty() {
                    to_visit.push(pos);
                }
            }
        }

        self.revealed_count += newly_revealed;
        newly_revealed
    }

    pub fn set_flag(&mut self, x: Coord, y: Coord, flagged: bool) -> Result<()> {
        let coords = self.validate_coords((x, y))?;
        let cell = &mut self.cells[coords.to_nd_index()];

        match (cell.flagged, flagged) {
            (false, true) => self.flagged_count += 1,
            (true, false) => self.flagged_count -= 1,
            _ => {}
        }
        cell.flagged = flagged;
        Ok(())
    }

    /// Flips the flag on `(x, y)` and returns the new value.
    pub fn toggle_flag(&mut self, x: Coord, y: Coord) -> Result<bool> {
        let flagged = !self.cell_state(x, y)?.flagged;
        self.set_flag(x, y, flagged)?;
        Ok(flagged)
    }

    /// Evaluates the board's [`WinRule`] against the current reveal state.
    pub fn check_win(&self) -> bool {
        match self.win_rule {
            WinRule::RevealedEqualsMines => self.revealed_count == self.config.mines(),
            WinRule::AllSafeRevealed => {
                !self.mine_positions().any(|pos| self.cells[pos.to_nd_index()].revealed)
                    && self.revealed_count == self.config.safe_cells()
            }
        }
    }

    /// Hides every cell and clears all flags, keeping the mine layout.
    pub fn reset_board(&mut self) {
        self.cells.iter_mut().for_each(Cell::hide);
        self.revealed_count = 0;
        self.flagged_count = 0;
        self.state = BoardState::Ready;
        self.triggered_mine = None;
    }

    fn end_game(&mut self, won: bool, triggered_mine: Option<Coord2>) {
        if self.state.is_finished() {
            return;
        }

        self.state = if won {
            BoardState::Won
        } else {
            BoardState::Lost
        };
        self.triggered_mine = triggered_mine;
    }
}
