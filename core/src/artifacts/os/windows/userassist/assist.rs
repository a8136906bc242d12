use super::{folders::resolve_folder, layout::interpret, parser::ScanOptions};
use crate::{
    artifacts::os::windows::registry::store::RegistryValue, utils::time::filetime_to_datetime,
};
use common::windows::{ArtifactRecord, OwnerGroup};

/// Where a value was enumerated from
pub(crate) struct ValueOrigin<'a> {
    pub(crate) group: OwnerGroup,
    pub(crate) identity: &'a str,
    pub(crate) source: &'a str,
}

/// Turn one Registry value into a record. Malformed data still produces a record
pub(crate) fn assemble_record(
    value: &RegistryValue,
    origin: &ValueOrigin<'_>,
    options: &ScanOptions,
) -> ArtifactRecord {
    let layout = interpret(&value.data, value.value_type);
    let last_executed_raw = layout.last_execution.unwrap_or_default();
    let decoded_name = rot_decode(&value.name);
    let folder_path = if options.resolve_descriptions {
        resolve_folder(&decoded_name)
    } else {
        String::new()
    };

    ArtifactRecord {
        encoded_name: value.name.clone(),
        decoded_name,
        folder_path,
        owner_group: origin.group,
        owner_identity: origin.identity.to_string(),
        run_count: layout.run_count,
        focus_count: layout.focus_count,
        focus_duration_ms: layout.focus_duration_ms,
        last_executed: filetime_to_datetime(last_executed_raw),
        last_executed_raw,
        layout_status: layout.status,
        source: origin.source.to_string(),
    }
}

/// The `UserAssist` value names are ROT13 encoded.
/// Only ASCII letters rotate. Applying it twice gives back the input
pub fn rot_decode(rot: &str) -> String {
    let rot_shift = 13;
    rot.chars()
        .map(|c| match c {
            'a'..='m' | 'A'..='M' => ((c as u8) + rot_shift) as char,
            'n'..='z' | 'N'..='Z' => ((c as u8) - rot_shift) as char,
            _ => c,
        })
        .collect()
}
