use super::{compression::compress_gzip_data, error::UtilsError};
use crate::{output::local::output::local_output, structs::toml::Output};
use log::error;

/**
 * Write finished artifact bytes to the configured destination.
 * Returns the final file name (uuid + extension) that was written
 */
pub(crate) fn final_output(
    artifact_data: &[u8],
    output: &Output,
    output_name: &str,
    extension: &str,
) -> Result<String, UtilsError> {
    let mut extension = extension.to_string();
    let compressed;
    let data: &[u8] = if output.compress {
        compressed = compress_gzip_data(artifact_data)?;
        extension = format!("{extension}.gz");
        &compressed
    } else {
        artifact_data
    };

    match output.output.as_str() {
        "local" => {
            let local_result = local_output(data, output, output_name, &extension);
            match local_result {
                Ok(_) => {}
                Err(err) => {
                    error!("[assist-core] Failed to output to local system: {err:?}");
                    return Err(UtilsError::Local);
                }
            }
        }
        _ => {
            error!("[assist-core] Unknown output destination: {}", output.output);
            return Err(UtilsError::UnsupportedOutput);
        }
    }
    Ok(format!("{output_name}.{extension}"))
}
