use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum RegistryError {
    /**Key does not exist for the identity */
    MissingKey,
    /**Key exists but could not be opened or enumerated */
    OpenKey,
    /**A single value could not be read */
    ReadValue,
    /**The backing store itself could not be loaded */
    StoreUnavailable,
}

impl std::error::Error for RegistryError {}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::MissingKey => write!(f, "Registry key does not exist"),
            RegistryError::OpenKey => write!(f, "Could not open Registry key"),
            RegistryError::ReadValue => write!(f, "Could not read Registry value"),
            RegistryError::StoreUnavailable => write!(f, "Registry data is unavailable"),
        }
    }
}
