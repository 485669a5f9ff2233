use thiserror::Error;

pub type Result<T> = std::result::Result<T, GaussError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GaussError {
    #[error("parse error: {0}")]
    Parse(String),
    #[error("the matrix has no rows")]
    EmptyMatrix,
    #[error("row {row} has no coefficients")]
    EmptyRow { row: usize },
    #[error("not all rows have the same number of coefficients: row {row} has {found}, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("row {row} breaks row-echelon form: its leading coefficient is not right of the one above")]
    NotEchelon { row: usize },
    #[error("division by zero")]
    DivisionByZero,
}
