use super::error::FormatError;
use crate::{
    structs::toml::Output,
    utils::{
        logging::collection_status,
        output::final_output,
        time::{time_now, unixepoch_to_iso},
        uuid::generate_uuid,
    },
};
use log::{error, info};
use serde_json::{json, Value};

/// Output to `jsonl` files. Every array entry becomes a line carrying the collection metadata
pub(crate) fn jsonl_format(
    serde_data: &mut Value,
    output_name: &str,
    output: &Output,
    start_time: &u64,
) -> Result<String, FormatError> {
    let uuid = generate_uuid();
    let metadata = json![{
        "endpoint_id": output.endpoint_id,
        "uuid": uuid,
        "id": output.collection_id,
        "artifact_name": output_name,
        "complete_time": unixepoch_to_iso(time_now() as i64),
        "start_time": unixepoch_to_iso(*start_time as i64),
    }];

    let mut json_lines = Vec::new();
    match serde_data.as_array_mut() {
        // If array is empty just output metadata
        Some(entries) if !entries.is_empty() => {
            for entry in entries {
                if entry.is_object() {
                    entry["collection_metadata"] = metadata.clone();
                }
                json_lines.push(create_line(entry)?);
            }
        }
        _ => json_lines.push(create_line(&metadata)?),
    }

    let output_result = final_output(json_lines.join("").as_bytes(), output, &uuid, "jsonl");
    let file_name = match output_result {
        Ok(result) => {
            info!("[assist-core] {output_name} jsonl output success");
            result
        }
        Err(err) => {
            error!("[assist-core] Failed to output {output_name} jsonl: {err:?}");
            return Err(FormatError::Output);
        }
    };

    let _ = collection_status(output_name, output, &file_name);
    Ok(file_name)
}

/// Serialize one value as a newline terminated JSON line
fn create_line(value: &Value) -> Result<String, FormatError> {
    let serde_result = serde_json::to_string(value);
    match serde_result {
        Ok(result) => Ok(format!("{result}\n")),
        Err(err) => {
            error!("[assist-core] Failed to serialize jsonl line: {err:?}");
            Err(FormatError::Serialize)
        }
    }
}
