use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

/// Registry path shared by every `UserAssist` category key
pub const USERASSIST_BASE: &str = r"Software\Microsoft\Windows\CurrentVersion\Explorer\UserAssist";

/// One decoded `UserAssist` value
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArtifactRecord {
    /**ROT13 value name exactly as stored */
    pub encoded_name: String,
    pub decoded_name: String,
    /**Decoded name with a leading Known Folder GUID swapped for its path. Empty if not resolved */
    pub folder_path: String,
    pub owner_group: OwnerGroup,
    pub owner_identity: String,
    pub run_count: u32,
    pub focus_count: u32,
    pub focus_duration_ms: u32,
    pub last_executed: Option<DateTime<Utc>>,
    /**FILETIME as stored. Zero when never executed or when the layout has no timestamp */
    pub last_executed_raw: u64,
    pub layout_status: LayoutStatus,
    /**Where the value was read from (registry export file, hive, etc) */
    pub source: String,
}

impl ArtifactRecord {
    /// Counters and timestamp were actually present in the binary data.
    /// Zeroed counters on `Legacy` or `Invalid` records mean "not recorded"
    pub fn has_usage_fields(&self) -> bool {
        self.layout_status == LayoutStatus::Modern
    }

    /// A non-zero timestamp was stored but could not be converted to a date
    pub fn has_unconvertible_timestamp(&self) -> bool {
        self.has_usage_fields() && self.last_executed_raw != 0 && self.last_executed.is_none()
    }
}

/// Which decoding path produced a record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LayoutStatus {
    Modern,
    Legacy,
    Invalid,
}

impl fmt::Display for LayoutStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutStatus::Modern => write!(f, "Modern"),
            LayoutStatus::Legacy => write!(f, "Legacy"),
            LayoutStatus::Invalid => write!(f, "Invalid"),
        }
    }
}

/// The two `UserAssist` categories. Each one lives under its own GUID subkey
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum OwnerGroup {
    ExecutableLaunches,
    ShortcutLaunches,
}

impl OwnerGroup {
    /// Every category in scan order
    pub fn all() -> [OwnerGroup; 2] {
        [OwnerGroup::ExecutableLaunches, OwnerGroup::ShortcutLaunches]
    }

    pub fn guid(&self) -> &'static str {
        match self {
            OwnerGroup::ExecutableLaunches => "{CEBFF5CD-ACE2-4F4F-9178-9926F41749EA}",
            OwnerGroup::ShortcutLaunches => "{F4E57C4B-2036-45F0-A9AB-443BCFE33D9F}",
        }
    }

    /// Full key path holding the category values: `<base>\<GUID>\Count`
    pub fn key_path(&self) -> String {
        format!("{USERASSIST_BASE}\\{}\\Count", self.guid())
    }
}

impl fmt::Display for OwnerGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.guid())
    }
}
