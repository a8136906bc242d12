/**
 * Registry data loaded from a JSON export of user hives.
 * Each profile lists the keys that were dumped along with every value under them.
 * Binary values are base64 encoded, other types are stored as text
 */
use super::{
    error::RegistryError,
    store::{RegistryStore, RegistryValue, ValueRead, ValueType},
};
use crate::{
    filesystem::files::read_file,
    utils::{encoding::base64_decode_standard, regex_options::key_suffix_regex},
};
use log::{error, warn};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct ProfileExport {
    identity: String,
    #[serde(default)]
    source: String,
    #[serde(default)]
    keys: Vec<KeyExport>,
}

#[derive(Debug, Deserialize)]
struct KeyExport {
    /**Full key path. Ex: ROOT\Software\...\Count */
    path: String,
    #[serde(default)]
    values: Vec<ValueExport>,
}

#[derive(Debug, Deserialize)]
struct ValueExport {
    value: String,
    data: String,
    data_type: String,
}

pub struct ExportStore {
    profiles: Vec<ProfileExport>,
}

impl ExportStore {
    /// Load an export from disk
    pub fn from_file(path: &str) -> Result<ExportStore, RegistryError> {
        let buffer = match read_file(path) {
            Ok(result) => result,
            Err(err) => {
                error!("[registry] Could not read export {path}: {err:?}");
                return Err(RegistryError::StoreUnavailable);
            }
        };
        ExportStore::from_slice(&buffer)
    }

    /// Load an export already in memory
    pub fn from_slice(data: &[u8]) -> Result<ExportStore, RegistryError> {
        let profiles: Vec<ProfileExport> = match serde_json::from_slice(data) {
            Ok(result) => result,
            Err(err) => {
                error!("[registry] Could not parse export: {err:?}");
                return Err(RegistryError::StoreUnavailable);
            }
        };
        Ok(ExportStore { profiles })
    }

    /// Every profile exported under `identity`. Identities are compared exactly,
    /// so "Alice" and "alice" stay separate owners
    fn profiles(&self, identity: &str) -> impl Iterator<Item = &ProfileExport> {
        let identity = identity.to_string();
        self.profiles
            .iter()
            .filter(move |profile| profile.identity == identity)
    }
}

/// Convert an exported value back into raw bytes
fn value_read(value: &ValueExport) -> ValueRead {
    let value_type = ValueType::from_name(&value.data_type);
    let data = if value.data == "(NULL)" {
        Vec::new()
    } else if value_type.is_binary_encoded() {
        match base64_decode_standard(&value.data) {
            Ok(result) => result,
            Err(err) => {
                warn!(
                    "[registry] Could not base64 decode value {}: {err:?}",
                    value.value
                );
                return Err(RegistryError::ReadValue);
            }
        }
    } else {
        value.data.as_bytes().to_vec()
    };

    Ok(RegistryValue {
        name: value.value.clone(),
        value_type,
        data,
    })
}

impl RegistryStore for ExportStore {
    fn enumerate_values(
        &self,
        identity: &str,
        key_path: &str,
    ) -> Result<Vec<ValueRead>, RegistryError> {
        let key_regex = match key_suffix_regex(key_path) {
            Ok(result) => result,
            Err(err) => {
                error!("[registry] Could not build key regex for {key_path}: {err:?}");
                return Err(RegistryError::OpenKey);
            }
        };

        let mut found = false;
        let mut values = Vec::new();
        for key in self.profiles(identity).flat_map(|profile| &profile.keys) {
            if !key_regex.is_match(&key.path) {
                continue;
            }
            found = true;
            values.extend(key.values.iter().map(value_read));
        }

        if !found {
            return Err(RegistryError::MissingKey);
        }
        Ok(values)
    }

    fn identities(&self) -> Vec<String> {
        let mut identities: Vec<String> = self
            .profiles
            .iter()
            .map(|profile| profile.identity.clone())
            .collect();
        identities.sort();
        identities.dedup();
        identities
    }

    fn source(&self, identity: &str) -> String {
        match self
            .profiles(identity)
            .find(|profile| !profile.source.is_empty())
        {
            Some(profile) => profile.source.clone(),
            None => String::from("export"),
        }
    }
}
