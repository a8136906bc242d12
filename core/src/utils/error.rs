use std::fmt;

#[derive(Debug, PartialEq)]
pub enum UtilsError {
    Regex,
    CreateDirectory,
    LogFile,
    CompressCreate,
    GzipFinish,
    Local,
    UnsupportedOutput,
}

impl std::error::Error for UtilsError {}

impl fmt::Display for UtilsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UtilsError::Regex => write!(f, "Invalid regex provided"),
            UtilsError::CreateDirectory => write!(f, "Could not create directory(ies)"),
            UtilsError::LogFile => write!(f, "Could not create log file"),
            UtilsError::CompressCreate => write!(f, "Could not compress data"),
            UtilsError::GzipFinish => write!(f, "Could not complete gzip compression"),
            UtilsError::Local => write!(f, "Failed output data to local directory"),
            UtilsError::UnsupportedOutput => write!(f, "Unsupported output destination"),
        }
    }
}
