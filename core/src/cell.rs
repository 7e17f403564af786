use serde::{Deserialize, Serialize};

/// What a cell holds: a mine, or the number of mines around it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellValue {
    Mine,
    Count(u8),
}

impl CellValue {
    pub const fn is_mine(self) -> bool {
        matches!(self, Self::Mine)
    }

    /// A non-mine cell with no adjacent mines.
    pub const fn is_empty(self) -> bool {
        matches!(self, Self::Count(0))
    }
}

impl Default for CellValue {
    fn default() -> Self {
        Self::Count(0)
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct Cell {
    pub(crate) value: CellValue,
    pub(crate) revealed: bool,
    pub(crate) flagged: bool,
}

impl Cell {
    pub(crate) const fn new(value: CellValue) -> Self {
        Self {
            value,
            revealed: false,
            flagged: false,
        }
    }

    pub(crate) fn hide(&mut self) {
        self.revealed = false;
        self.flagged = false;
    }
}

/// Snapshot of a single cell for presentation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellState {
    pub value: CellValue,
    pub revealed: bool,
    pub flagged: bool,
}

impl From<Cell> for CellState {
    fn from(cell: Cell) -> Self {
        Self {
            value: cell.value,
            revealed: cell.revealed,
            flagged: cell.flagged,
        }
    }
}

/// Result of revealing a cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    /// Stepped on a mine.
    Mine,
    /// No adjacent mines, the surrounding region was cascaded open.
    Empty,
    /// 1 to 8 adjacent mines.
    Numbered(u8),
}

impl RevealOutcome {
    pub const fn is_loss(self) -> bool {
        matches!(self, Self::Mine)
    }
}

impl From<CellValue> for RevealOutcome {
    fn from(value: CellValue) -> Self {
        match value {
            CellValue::Mine => Self::Mine,
            CellValue::Count(0) => Self::Empty,
            CellValue::Count(count) => Self::Numbered(count),
        }
    }
}
