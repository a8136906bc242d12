use super::artifacts::os::windows::UserAssistOptions;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct AssistToml {
    pub output: Output,
    pub artifacts: Vec<Artifacts>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Output {
    pub name: String,
    pub endpoint_id: String,
    pub collection_id: u64,
    pub directory: String,
    /**Destination type. Only `local` is supported */
    pub output: String,
    /**csv, json or jsonl */
    pub format: String,
    pub compress: bool,
    pub logging: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Artifacts {
    /**Based on artifact parse one of the artifact types */
    pub artifact_name: String,
    pub userassist: Option<UserAssistOptions>,
}
