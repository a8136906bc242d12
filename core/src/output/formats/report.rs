use super::error::FormatError;
use crate::{
    structs::toml::Output,
    utils::{logging::collection_status, output::final_output, uuid::generate_uuid},
};
use log::{error, info};

/// Write a plain text report next to the artifact output
pub(crate) fn text_format(
    report: &str,
    output_name: &str,
    output: &Output,
) -> Result<String, FormatError> {
    let uuid = generate_uuid();
    let output_result = final_output(report.as_bytes(), output, &uuid, "txt");
    let file_name = match output_result {
        Ok(result) => {
            info!("[assist-core] {output_name} report output success");
            result
        }
        Err(err) => {
            error!("[assist-core] Failed to output {output_name} report: {err:?}");
            return Err(FormatError::Output);
        }
    };

    let _ = collection_status(output_name, output, &file_name);
    Ok(file_name)
}

#[cfg(test)]
mod tests {
    use super::text_format;
    use crate::structs::toml::Output;
    use std::fs::read_to_string;

    #[test]
    fn test_text_format() {
        let output = Output {
            name: String::from("report_format_test"),
            directory: String::from("./tmp"),
            format: String::from("csv"),
            output: String::from("local"),
            ..Default::default()
        };
        let name = text_format("User: alice\n", "userassist_report", &output).unwrap();
        assert!(name.ends_with(".txt"));

        let written = read_to_string(format!("./tmp/report_format_test/{name}")).unwrap();
        assert_eq!(written, "User: alice\n");
    }
}
