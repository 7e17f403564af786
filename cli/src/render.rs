use minefield_core::*;

const HIDDEN: char = '#';
const FLAG: char = 'F';
const EMPTY: char = '.';
const MINE: char = '*';
const TRIGGERED: char = 'X';

/// Glyph for one cell. Once the game is lost every mine is shown, and the one that was stepped
/// on is marked apart.
fn glyph(board: &Board, x: Coord, y: Coord, state: CellState) -> char {
    let lost = board.state() == BoardState::Lost;
    match state.value {
        CellValue::Mine if board.triggered_mine() == Some((x, y)) => TRIGGERED,
        CellValue::Mine if lost || state.revealed => MINE,
        _ if state.revealed => match state.value {
            CellValue::Count(0) => EMPTY,
            CellValue::Count(count) => char::from(b'0' + count),
            CellValue::Mine => MINE,
        },
        _ if state.flagged => FLAG,
        _ => HIDDEN,
    }
}

/// Draws the board with column numbers on top and row numbers on the left.
pub fn render(board: &Board) -> String {
    let width = board.cols().max(board.rows()).to_string().len();

    let header: String = (0..board.cols()).map(|x| format!(" {x:>width$}")).collect();
    let mut lines = vec![format!("{:width$} {header}", "")];

    for y in 0..board.rows() {
        let cells: String = (0..board.cols())
            .map(|x| {
                let state = board.cell_state(x, y).expect("in bounds");
                format!(" {:>width$}", glyph(board, x, y, state))
            })
            .collect();
        lines.push(format!("{y:>width$} {cells}"));
    }

    lines.push(format!(
        "mines: {}  flags: {}  revealed: {}",
        board.mine_count(),
        board.covered_flag_count(),
        board.revealed_count()
    ));
    lines.join("\n")
}
