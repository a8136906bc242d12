use std::fmt;

#[derive(Debug, PartialEq)]
pub enum TomlError {
    NoFile,
    BadToml,
    Collection,
}

impl std::error::Error for TomlError {}

impl fmt::Display for TomlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TomlError::NoFile => write!(f, "Failed to read TOML file"),
            TomlError::BadToml => write!(f, "Failed to parse TOML data"),
            TomlError::Collection => write!(f, "Failed to run collection"),
        }
    }
}
