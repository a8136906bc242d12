use std::fmt;

#[derive(Debug, PartialEq)]
pub(crate) enum FormatError {
    Output,
    Serialize,
}

impl std::error::Error for FormatError {}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::Output => write!(f, "Failed to output data"),
            FormatError::Serialize => write!(f, "Failed to serialize data"),
        }
    }
}
