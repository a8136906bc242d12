use super::{
    error::WinArtifactError,
    userassist::{parser::grab_userassist, report::usage_report},
};
use crate::{
    artifacts::output::output_artifact,
    output::formats::report::text_format,
    structs::{artifacts::os::windows::UserAssistOptions, toml::Output},
    utils::time,
};
use log::{error, info};

/// Get Windows `UserAssist` entries. Returns every file written
pub(crate) fn userassist(
    options: &UserAssistOptions,
    output: &Output,
) -> Result<Vec<String>, WinArtifactError> {
    let start_time = time::time_now();

    let assist_results = grab_userassist(options);
    let assist_data = match assist_results {
        Ok(results) => results,
        Err(err) => {
            error!("[assist-core] Failed to parse UserAssist: {err:?}");
            return Err(WinArtifactError::UserAssist);
        }
    };
    if assist_data.is_empty() {
        info!("[assist-core] No UserAssist data found");
    }

    let output_name = "userassist";
    let mut written = Vec::new();
    match output_artifact(&assist_data, output_name, output, &start_time) {
        Ok(result) => written.push(result),
        Err(err) => {
            error!("[assist-core] Could not output UserAssist: {err:?}");
            return Err(WinArtifactError::Output);
        }
    }

    if !options.report.unwrap_or(false) {
        return Ok(written);
    }

    let report = usage_report(&assist_data).to_string();
    match text_format(&report, "userassist_report", output) {
        Ok(result) => written.push(result),
        Err(err) => {
            error!("[assist-core] Could not output UserAssist report: {err:?}");
            return Err(WinArtifactError::Report);
        }
    }
    Ok(written)
}
