use crate::{
    artifacts::error::CollectionError,
    output::formats::{csv::csv_format, json::json_format, jsonl::jsonl_format},
    structs::toml::Output,
};
use common::windows::ArtifactRecord;
use log::error;

/// Output `UserAssist` records in the configured format. Returns the file name written
pub(crate) fn output_artifact(
    records: &[ArtifactRecord],
    output_name: &str,
    output: &Output,
    start_time: &u64,
) -> Result<String, CollectionError> {
    let format = output.format.to_lowercase();
    if format == "csv" {
        return match csv_format(records, output_name, output) {
            Ok(result) => Ok(result),
            Err(err) => {
                error!("[assist-core] Could not output csv data: {err:?}");
                Err(CollectionError::Output)
            }
        };
    }

    let serde_data_result = serde_json::to_value(records);
    let mut serde_data = match serde_data_result {
        Ok(results) => results,
        Err(err) => {
            error!("[assist-core] Failed to serialize {output_name}: {err:?}");
            return Err(CollectionError::Serialize);
        }
    };

    let output_status = if format == "json" {
        json_format(&serde_data, output_name, output, start_time)
    } else if format == "jsonl" {
        jsonl_format(&mut serde_data, output_name, output, start_time)
    } else {
        error!("[assist-core] Unknown formatter provided: {}", output.format);
        return Err(CollectionError::Format);
    };
    match output_status {
        Ok(result) => Ok(result),
        Err(err) => {
            error!("[assist-core] Could not output data: {err:?}");
            Err(CollectionError::Output)
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        artifacts::{error::CollectionError, output::output_artifact},
        structs::toml::Output,
        utils::time,
    };
    use common::windows::{ArtifactRecord, LayoutStatus, OwnerGroup};

    fn output_options(name: &str, format: &str, directory: &str, compress: bool) -> Output {
        Output {
            name: name.to_string(),
            directory: directory.to_string(),
            format: format.to_string(),
            compress,
            endpoint_id: String::from("abcd"),
            collection_id: 0,
            output: String::from("local"),
            logging: None,
        }
    }

    fn records() -> Vec<ArtifactRecord> {
        vec![ArtifactRecord {
            encoded_name: String::from("pzq.rkr"),
            decoded_name: String::from("cmd.exe"),
            folder_path: String::new(),
            owner_group: OwnerGroup::ExecutableLaunches,
            owner_identity: String::from("alice"),
            run_count: 2,
            focus_count: 1,
            focus_duration_ms: 1000,
            last_executed: None,
            last_executed_raw: 0,
            layout_status: LayoutStatus::Modern,
            source: String::from("memory:alice"),
        }]
    }

    #[test]
    fn test_output_artifact() {
        let start_time = time::time_now();
        for format in ["json", "jsonl", "csv", "CSV"] {
            let output = output_options("output_test", format, "./tmp", false);
            let name = output_artifact(&records(), "userassist", &output, &start_time).unwrap();
            assert!(name.ends_with(&format!(".{}", format.to_lowercase())));
        }
    }

    #[test]
    fn test_output_artifact_compressed() {
        let start_time = time::time_now();
        let output = output_options("output_test", "jsonl", "./tmp", true);
        let name = output_artifact(&records(), "userassist", &output, &start_time).unwrap();
        assert!(name.ends_with(".jsonl.gz"));
    }

    #[test]
    fn test_unknown_format() {
        let output = output_options("output_test", "parquet", "./tmp", false);
        let result = output_artifact(&records(), "userassist", &output, &0);
        assert_eq!(result, Err(CollectionError::Format));
    }
}
