use super::os::windows::{artifacts::userassist, error::WinArtifactError};
use crate::structs::toml::AssistToml;
use log::{error, info, warn};

/// Run every artifact listed in a collection TOML
pub(crate) fn windows_collection(collector: &AssistToml) -> Result<(), WinArtifactError> {
    let mut failed = 0;
    for artifacts in &collector.artifacts {
        match artifacts.artifact_name.as_str() {
            "userassist" => {
                let artifact = match &artifacts.userassist {
                    Some(result) => result,
                    None => {
                        warn!("[assist-core] userassist artifact has no options");
                        continue;
                    }
                };
                let results = userassist(artifact, &collector.output);
                match results {
                    Ok(files) => info!("Collected UserAssist into {files:?}"),
                    Err(err) => {
                        error!("[assist-core] Failed to parse UserAssist, error: {err:?}");
                        failed += 1;
                        continue;
                    }
                }
            }
            _ => warn!(
                "[assist-core] Unsupported artifact: {}",
                artifacts.artifact_name
            ),
        }
    }

    if failed != 0 && failed == collector.artifacts.len() {
        return Err(WinArtifactError::UserAssist);
    }
    Ok(())
}
