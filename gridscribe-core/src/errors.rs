use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScribeError {
    /// Requested field name is not in the observation's field list.
    FieldNotFound { name: String },
    /// Grid construction or typed access hit the wrong shape.
    MalformedGrid { message: String },
    /// Field-name and field-array lists differ in length.
    MismatchedFields { names: usize, arrays: usize },
}

impl fmt::Display for ScribeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScribeError::FieldNotFound { name } => {
                write!(f, "observation field '{}' not found", name)
            }
            ScribeError::MalformedGrid { message } => {
                write!(f, "malformed grid: {}", message)
            }
            ScribeError::MismatchedFields { names, arrays } => {
                write!(
                    f,
                    "observation has {} field names but {} arrays",
                    names, arrays
                )
            }
        }
    }
}

impl std::error::Error for ScribeError {}

pub type ScribeResult<T> = Result<T, ScribeError>;
