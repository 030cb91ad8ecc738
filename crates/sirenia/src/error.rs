use std::fmt::Display;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error(
        "{operator} coordinate assignment takes no options, but got: {}",
        .options.join(", ")
    )]
    Configuration {
        operator: &'static str,
        options: Vec<String>,
    },

    #[error(transparent)]
    Graph(#[from] sirenia_layers::Error),

    #[error("invalid layered graph: {message}")]
    InvalidInput { message: String },

    #[error("separation between {left} and {right} must be finite and non-negative, but was {gap}")]
    InvalidSeparation { left: String, right: String, gap: f64 },

    #[error("position overflow: {message}")]
    Overflow { message: String },

    /// A precondition the algorithm established itself did not hold; the input graph was built
    /// inconsistently.
    #[error("internal invariant violated: {message}")]
    InvariantViolation { message: String },
}

impl Error {
    pub(crate) fn missing(what: &str, key: impl Display) -> Self {
        Self::InvariantViolation {
            message: format!("no {what} recorded for {key}"),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
