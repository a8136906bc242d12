use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct UserAssistOptions {
    /**Registry export (JSON) to read `UserAssist` keys from */
    pub alt_file: Option<String>,
    /**Profiles to scan. Every identity in the export when empty */
    pub users: Option<Vec<String>>,
    /**Swap Known Folder GUIDs in decoded names for their paths */
    pub resolve_descriptions: Option<bool>,
    /**Also write the per user comparison report */
    pub report: Option<bool>,
}
