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

/// Output artifact data as a single `json` document with collection metadata
pub(crate) fn json_format(
    serde_data: &Value,
    output_name: &str,
    output: &Output,
    start_time: &u64,
) -> Result<String, FormatError> {
    let uuid = generate_uuid();

    let collection_output = json![{
        "metadata": {
            "endpoint_id": output.endpoint_id,
            "id": output.collection_id,
            "uuid": uuid,
            "artifact_name": output_name,
            "complete_time": unixepoch_to_iso(time_now() as i64),
            "start_time": unixepoch_to_iso(*start_time as i64),
        },
        "data": serde_data,
    }];

    let serde_collection_results = serde_json::to_vec_pretty(&collection_output);
    let serde_collection = match serde_collection_results {
        Ok(results) => results,
        Err(err) => {
            error!("[assist-core] Failed to serialize {output_name}: {err:?}");
            return Err(FormatError::Serialize);
        }
    };

    let output_result = final_output(&serde_collection, output, &uuid, "json");
    let file_name = match output_result {
        Ok(result) => {
            info!("[assist-core] {output_name} json output success");
            result
        }
        Err(err) => {
            error!("[assist-core] Failed to output {output_name} json: {err:?}");
            return Err(FormatError::Output);
        }
    };

    let _ = collection_status(output_name, output, &file_name);
    Ok(file_name)
}
