use crate::{
    artifacts::windows_collection::windows_collection,
    error::TomlError,
    filesystem::files::read_file,
    structs::toml::AssistToml,
    utils::logging::create_log_file,
};
use log::{error, info};
use simplelog::{Config, WriteLogger};
use std::str::from_utf8;

/// Parse a TOML file at provided path
pub fn parse_toml_file(path: &str) -> Result<(), TomlError> {
    let buffer_results = read_file(path);
    let buffer = match buffer_results {
        Ok(results) => results,
        Err(err) => {
            error!("[assist-core] Could not read TOML file {path}: {err:?}");
            return Err(TomlError::NoFile);
        }
    };

    parse_toml_data(&buffer)
}

/// Parse an already read TOML file
pub fn parse_toml_data(data: &[u8]) -> Result<(), TomlError> {
    let toml_results = toml::from_str(from_utf8(data).unwrap_or_default());
    let collector: AssistToml = match toml_results {
        Ok(results) => results,
        Err(err) => {
            error!("[assist-core] Could not parse TOML data: {err:?}");
            return Err(TomlError::BadToml);
        }
    };
    assist_collection(&collector)
}

/// Setup logging then collect every artifact in the TOML config
pub fn assist_collection(collector: &AssistToml) -> Result<(), TomlError> {
    if let Ok((log_file, level)) = create_log_file(&collector.output) {
        let _ = WriteLogger::init(level, Config::default(), log_file);
    }

    let result = windows_collection(collector);
    match result {
        Ok(_) => info!("[assist-core] Core parsed UserAssist TOML data"),
        Err(err) => {
            error!("[assist-core] Core failed to parse UserAssist TOML data: {err:?}");
            return Err(TomlError::Collection);
        }
    }
    Ok(())
}
