use std::fmt;

#[derive(Debug, PartialEq)]
pub(crate) enum CollectionError {
    Output,
    Serialize,
    Format,
}

impl std::error::Error for CollectionError {}

impl fmt::Display for CollectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CollectionError::Output => write!(f, "Failed to output data"),
            CollectionError::Serialize => write!(f, "Failed to serialize data"),
            CollectionError::Format => write!(f, "Unknown formatter provided"),
        }
    }
}
