use super::{error::UtilsError, uuid::generate_uuid};
use crate::structs::toml::Output;
use log::{error, LevelFilter};
use std::{
    fs::{create_dir_all, File, OpenOptions},
    io::Write,
};

/// Create log output file and logging level based on TOML `Output` configuration
pub(crate) fn create_log_file(output: &Output) -> Result<(File, LevelFilter), UtilsError> {
    let path = format!("{}/{}", output.directory, output.name);
    let result = create_dir_all(&path);
    match result {
        Ok(_) => {}
        Err(err) => {
            error!(
                "[assist-core] Failed to create logging output directory for {path}. Error: {err:?}"
            );
            return Err(UtilsError::CreateDirectory);
        }
    }

    let output_result = File::create(format!("{path}/{}.log", generate_uuid()));
    let log_file = match output_result {
        Ok(result) => result,
        Err(err) => {
            error!("[assist-core] Failed to create log file at {path}. Error: {err:?}");
            return Err(UtilsError::LogFile);
        }
    };

    Ok((log_file, log_level(output.logging.as_deref())))
}

/// Map the configured level name to a filter. Anything unknown is `Warn`
pub(crate) fn log_level(level: Option<&str>) -> LevelFilter {
    match level.unwrap_or_default().to_lowercase().as_str() {
        "error" => LevelFilter::Error,
        "info" => LevelFilter::Info,
        "debug" => LevelFilter::Debug,
        _ => LevelFilter::Warn,
    }
}

/// Create and update a simple `status.log` file to track our output data
pub(crate) fn collection_status(
    artifact_name: &str,
    output: &Output,
    output_name: &str,
) -> Result<(), UtilsError> {
    let path = format!("{}/{}", output.directory, output.name);
    let result = create_dir_all(&path);
    match result {
        Ok(_) => {}
        Err(err) => {
            error!(
                "[assist-core] Failed to create status output directory for {path}. Error: {err:?}"
            );
            return Err(UtilsError::CreateDirectory);
        }
    }

    let status_log = format!("{path}/status.log");
    let status_result = OpenOptions::new().append(true).create(true).open(status_log);

    let mut status = match status_result {
        Ok(result) => result,
        Err(err) => {
            error!("[assist-core] Failed to open or create status.log at {path}. Error: {err:?}");
            return Err(UtilsError::LogFile);
        }
    };

    /*
     * Maps artifact names to the uuid filename
     * Ex: userassist:c639679b-40ec-4aca-9ed1-dc740c38731c.csv
     */
    let status_message = format!("{artifact_name}:{output_name}\n");
    let write_result = status.write_all(status_message.as_bytes());
    match write_result {
        Ok(_) => {}
        Err(err) => {
            error!("[assist-core] Failed to update status.log at {path}. Error: {err:?}");
        }
    }
    Ok(())
}
