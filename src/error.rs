use crate::common::Int;

/// A dice definition, notation or modifier that cannot be built.
#[derive(thiserror::Error, Debug, Clone, Eq, PartialEq)]
pub enum SyntaxError {
    #[error("a die must have at least 2 sides, {0} given")]
    TooFewSides(Int),
    #[error("the dice notation {0:?} is invalid or not supported")]
    InvalidNotation(String),
    #[error("the operator {0:?} is invalid or not supported")]
    InvalidOperator(String),
    #[error("the operator {operator:?} cannot be used with the value {value}")]
    OperatorValueMismatch { operator: String, value: Int },
}

impl SyntaxError {
    pub fn invalid_notation(notation: impl ToString) -> Self {
        Self::InvalidNotation(notation.to_string())
    }
}

/// A replication quantity below 1.
#[derive(thiserror::Error, Debug, Clone, Eq, PartialEq)]
#[error("the quantity must be a positive integer, {0} given")]
pub struct IllegalValue(pub Int);

#[derive(thiserror::Error, Debug, Clone, Eq, PartialEq)]
pub enum Error {
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
    #[error(transparent)]
    IllegalValue(#[from] IllegalValue),
    #[error("too many dice: {requested} requested, the limit is {limit}")]
    TooManyDice { requested: usize, limit: usize },
}
