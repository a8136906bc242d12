use std::fmt;

#[derive(Debug)]
pub enum WinArtifactError {
    BadToml,
    UserAssist,
    Output,
    Report,
}

impl std::error::Error for WinArtifactError {}

impl fmt::Display for WinArtifactError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WinArtifactError::BadToml => write!(f, "Failed to parse TOML data"),
            WinArtifactError::UserAssist => write!(f, "Failed to parse UserAssist"),
            WinArtifactError::Output => write!(f, "Failed to output data"),
            WinArtifactError::Report => write!(f, "Failed to output comparison report"),
        }
    }
}
