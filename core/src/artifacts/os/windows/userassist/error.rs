use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAssistError {
    RegistryStore,
    ScanInProgress,
    ScanFailed,
    NoUsers,
}

impl std::error::Error for UserAssistError {}

impl fmt::Display for UserAssistError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserAssistError::RegistryStore => write!(f, "Could not open Registry data"),
            UserAssistError::ScanInProgress => write!(f, "A UserAssist scan is already running"),
            UserAssistError::ScanFailed => write!(f, "UserAssist scan did not complete"),
            UserAssistError::NoUsers => write!(f, "No users to scan"),
        }
    }
}
