use thiserror::Error;

/// Errors raised while reading board coordinates, diagrams or names typed by a user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Square text was not a file `a`-`h` followed by a rank `1`-`8`.
    #[error("invalid square '{0}'")]
    InvalidSquare(String),

    /// A board diagram did not have exactly eight rows.
    #[error("expected 8 board rows, got {0}")]
    RowCount(usize),

    /// A diagram row did not have exactly eight cells.
    #[error("board row {row} has {len} cells, expected 8")]
    RowLength { row: usize, len: usize },

    /// No puzzle is registered under this key.
    #[error("unknown puzzle '{0}'")]
    UnknownPuzzle(String),
}
