use super::error::FormatError;
use crate::{
    structs::toml::Output,
    utils::{
        logging::collection_status,
        output::final_output,
        time::{datetime_to_iso, format_duration},
        uuid::generate_uuid,
    },
};
use common::windows::{ArtifactRecord, LayoutStatus};
use csv::{QuoteStyle, Writer, WriterBuilder};
use log::{error, info};

/// Spreadsheet tools need the UTF-8 byte order mark to detect the encoding
const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

const HEADER: [&str; 8] = [
    "DecodedName",
    "EncodedName",
    "RunCount",
    "LastExecuted",
    "FocusCount",
    "FocusTime",
    "Guid",
    "Username",
];

/// Output `UserAssist` records as csv. Returns the name of the file written
pub(crate) fn csv_format(
    records: &[ArtifactRecord],
    output_name: &str,
    output: &Output,
) -> Result<String, FormatError> {
    let csv_result = csv_bytes(records);
    let csv_data = match csv_result {
        Ok(result) => result,
        Err(err) => {
            error!("[assist-core] Could not create csv data: {err:?}");
            return Err(FormatError::Serialize);
        }
    };

    let uuid = generate_uuid();
    let output_result = final_output(&csv_data, output, &uuid, "csv");
    let file_name = match output_result {
        Ok(result) => {
            info!("[assist-core] {output_name} csv output success");
            result
        }
        Err(err) => {
            error!("[assist-core] Failed to output {output_name} csv: {err:?}");
            return Err(FormatError::Output);
        }
    };

    let _ = collection_status(output_name, output, &file_name);
    Ok(file_name)
}

/// Write the tabular projection of the records. One row per record
pub(crate) fn csv_bytes(records: &[ArtifactRecord]) -> Result<Vec<u8>, csv::Error> {
    let mut writer = csv_writer();
    writer.write_record(HEADER)?;

    for record in records {
        let run_count = record.run_count.to_string();
        let last_execution = last_execution_label(record);
        let focus_count = record.focus_count.to_string();
        let focus_time = format_duration(record.focus_duration_ms);

        writer.write_record([
            record.decoded_name.as_str(),
            record.encoded_name.as_str(),
            run_count.as_str(),
            last_execution.as_str(),
            focus_count.as_str(),
            focus_time.as_str(),
            record.owner_group.guid(),
            record.owner_identity.as_str(),
        ])?;
    }

    let mut data = UTF8_BOM.to_vec();
    let rows = match writer.into_inner() {
        Ok(result) => result,
        Err(err) => return Err(err.into_error().into()),
    };
    data.extend(rows);
    Ok(data)
}

fn csv_writer() -> Writer<Vec<u8>> {
    WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .from_writer(Vec::new())
}

/// Text shown for the last execution column
pub(crate) fn last_execution_label(record: &ArtifactRecord) -> String {
    match record.layout_status {
        LayoutStatus::Modern => match &record.last_executed {
            Some(timestamp) => datetime_to_iso(timestamp),
            None if record.last_executed_raw == 0 => String::from("Never"),
            None => String::from("Invalid timestamp"),
        },
        LayoutStatus::Legacy => String::from("Unknown (legacy format)"),
        LayoutStatus::Invalid => String::from("Invalid data"),
    }
}
