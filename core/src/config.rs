use serde::{Deserialize, Serialize};

use crate::*;

/// Smallest allowed column or row count.
pub const MIN_SIDE: usize = 3;

/// Largest allowed column or row count.
pub const MAX_SIDE: usize = 100;

/// Mines may cover at most this share of the board.
pub const MAX_MINE_PERCENT: usize = 20;

pub const MIN_FONT_SIZE: u32 = 14;
pub const MAX_FONT_SIZE: u32 = 72;

/// Validated board dimensions and mine count.
///
/// The only way to obtain one is through [`BoardConfig::new`], so every board built from a
/// config satisfies the size and density bounds.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BoardConfig {
    cols: Coord,
    rows: Coord,
    mines: CellCount,
}

impl BoardConfig {
    /// Checks rows, then columns, then the mine cap, and reports the first violation.
    pub fn new(cols: usize, rows: usize, mines: usize) -> Result<Self> {
        if !(MIN_SIDE..=MAX_SIDE).contains(&rows) {
            return Err(ConfigViolation::Rows(rows).into());
        }
        if !(MIN_SIDE..=MAX_SIDE).contains(&cols) {
            return Err(ConfigViolation::Columns(cols).into());
        }
        let max = Self::max_mines(cols, rows);
        if mines > max {
            return Err(ConfigViolation::TooManyMines { mines, max }.into());
        }

        // bounds above keep every value well inside the narrow types
        Ok(Self {
            cols: cols as Coord,
            rows: rows as Coord,
            mines: mines as CellCount,
        })
    }

    /// Largest mine count accepted for a `cols` x `rows` board.
    pub const fn max_mines(cols: usize, rows: usize) -> usize {
        cols * rows * MAX_MINE_PERCENT / 100
    }

    pub const fn cols(&self) -> Coord {
        self.cols
    }

    pub const fn rows(&self) -> Coord {
        self.rows
    }

    pub const fn size(&self) -> Coord2 {
        (self.cols, self.rows)
    }

    pub const fn mines(&self) -> CellCount {
        self.mines
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.cols, self.rows)
    }

    pub const fn safe_cells(&self) -> CellCount {
        self.total_cells() - self.mines
    }
}

/// Values a settings source hands to the game: board parameters plus display font size.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub columns: usize,
    pub rows: usize,
    pub mines: usize,
    /// Display only, the engine ignores it.
    pub font_size: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            columns: 5,
            rows: 5,
            mines: 5,
            font_size: MIN_FONT_SIZE,
        }
    }
}

impl Settings {
    pub fn board_config(&self) -> Result<BoardConfig> {
        let config = BoardConfig::new(self.columns, self.rows, self.mines)?;
        if !(MIN_FONT_SIZE..=MAX_FONT_SIZE).contains(&self.font_size) {
            return Err(ConfigViolation::FontSize(self.font_size).into());
        }
        Ok(config)
    }
}

impl From<BoardConfig> for Settings {
    fn from(config: BoardConfig) -> Self {
        Self {
            columns: config.cols.into(),
            rows: config.rows.into(),
            mines: config.mines.into(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn violation(result: Result<BoardConfig>) -> ConfigViolation {
        match result {
            Err(BoardError::InvalidConfiguration(violation)) => violation,
            other => panic!("expected invalid configuration, got {other:?}"),
        }
    }

    #[test]
    fn accepts_bounds() {
        let small = BoardConfig::new(3, 3, 1).unwrap();
        assert_eq!(small.size(), (3, 3));
        assert_eq!(small.safe_cells(), 8);

        let large = BoardConfig::new(100, 100, 2000).unwrap();
        assert_eq!(large.total_cells(), 10_000);
        assert_eq!(large.mines(), 2000);
    }

    #[test]
    fn rejects_sides_out_of_range() {
        assert_eq!(violation(BoardConfig::new(2, 5, 0)), ConfigViolation::Columns(2));
        assert_eq!(violation(BoardConfig::new(101, 5, 0)), ConfigViolation::Columns(101));
        assert_eq!(violation(BoardConfig::new(5, 2, 0)), ConfigViolation::Rows(2));
        assert_eq!(violation(BoardConfig::new(5, 1000, 0)), ConfigViolation::Rows(1000));
    }

    #[test]
    fn rows_are_checked_before_columns() {
        assert_eq!(violation(BoardConfig::new(1, 1, 0)), ConfigViolation::Rows(1));
    }

    #[test]
    fn mine_cap_is_a_fifth_of_the_area_rounded_down() {
        for (cols, rows) in [(3, 3), (4, 4), (5, 5), (7, 9), (100, 100)] {
            let max = cols * rows / 5;
            assert!(BoardConfig::new(cols, rows, max).is_ok());
            assert_eq!(
                violation(BoardConfig::new(cols, rows, max + 1)),
                ConfigViolation::TooManyMines { mines: max + 1, max }
            );
        }
    }

    #[test]
    fn zero_mines_is_allowed() {
        assert_eq!(BoardConfig::new(3, 3, 0).unwrap().mines(), 0);
    }

    #[test]
    fn settings_validate_font_size() {
        let mut settings = Settings::default();
        assert_eq!(settings.board_config().unwrap(), BoardConfig::new(5, 5, 5).unwrap());

        settings.font_size = 80;
        assert_eq!(
            settings.board_config(),
            Err(BoardError::InvalidConfiguration(ConfigViolation::FontSize(80)))
        );
    }

    #[test]
    fn settings_round_trip_from_config() {
        let config = BoardConfig::new(9, 9, 10).unwrap();
        let settings = Settings::from(config);
        assert_eq!(settings.board_config().unwrap(), config);
    }
}
