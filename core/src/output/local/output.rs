use super::error::LocalError;
use crate::structs::toml::Output;
use log::error;
use std::{
    fs::{create_dir_all, OpenOptions},
    io::Write,
};

/// Output to local directory provided by TOML input
pub(crate) fn local_output(
    data: &[u8],
    output: &Output,
    output_name: &str,
    extension: &str,
) -> Result<(), LocalError> {
    let output_path = format!("{}/{}", output.directory, output.name);

    let result = create_dir_all(&output_path);
    match result {
        Ok(_) => {}
        Err(err) => {
            error!(
                "[assist-core] Failed to create output directory for {output_path}. Error: {err:?}"
            );
            return Err(LocalError::CreateDirectory);
        }
    }

    let file_result = OpenOptions::new()
        .append(true)
        .create(true)
        .open(format!("{output_path}/{output_name}.{extension}"));

    let mut output_file = match file_result {
        Ok(results) => results,
        Err(err) => {
            error!("[assist-core] Failed to create output file {output_name} at {output_path}. Error: {err:?}");
            return Err(LocalError::CreateFile);
        }
    };

    let write_result = output_file.write_all(data);
    match write_result {
        Ok(_) => {}
        Err(err) => {
            error!("[assist-core] Failed to write output to file {output_name} at {output_path}. Error: {err:?}");
            return Err(LocalError::WriteFile);
        }
    }
    Ok(())
}
