use super::{
    error::RegistryError,
    store::{RegistryStore, RegistryValue, ValueRead, ValueType},
};
use std::collections::{BTreeMap, HashMap};

enum KeyEntry {
    Values(Vec<ValueRead>),
    Unopenable,
}

/// Registry data held entirely in memory. Keyed by identity then key path
#[derive(Default)]
pub struct MemoryStore {
    profiles: BTreeMap<String, HashMap<String, KeyEntry>>,
}

/// Registry paths are case insensitive
fn normalize_path(key_path: &str) -> String {
    key_path.trim_matches('\\').to_lowercase()
}

impl MemoryStore {
    pub fn new() -> MemoryStore {
        MemoryStore::default()
    }

    fn values_mut(&mut self, identity: &str, key_path: &str) -> Option<&mut Vec<ValueRead>> {
        let keys = self.profiles.entry(identity.to_string()).or_default();
        let entry = keys
            .entry(normalize_path(key_path))
            .or_insert_with(|| KeyEntry::Values(Vec::new()));
        match entry {
            KeyEntry::Values(values) => Some(values),
            KeyEntry::Unopenable => None,
        }
    }

    /// Add a value under `key_path`. Ignored if the key was marked unopenable
    pub fn insert_value(
        &mut self,
        identity: &str,
        key_path: &str,
        name: &str,
        value_type: ValueType,
        data: &[u8],
    ) {
        if let Some(values) = self.values_mut(identity, key_path) {
            values.push(Ok(RegistryValue {
                name: name.to_string(),
                value_type,
                data: data.to_vec(),
            }));
        }
    }

    /// Add an entry that fails to read when enumerated
    pub fn insert_failure(&mut self, identity: &str, key_path: &str) {
        if let Some(values) = self.values_mut(identity, key_path) {
            values.push(Err(RegistryError::ReadValue));
        }
    }

    /// Key exists but cannot be opened
    pub fn deny_key(&mut self, identity: &str, key_path: &str) {
        let keys = self.profiles.entry(identity.to_string()).or_default();
        keys.insert(normalize_path(key_path), KeyEntry::Unopenable);
    }
}

impl RegistryStore for MemoryStore {
    fn enumerate_values(
        &self,
        identity: &str,
        key_path: &str,
    ) -> Result<Vec<ValueRead>, RegistryError> {
        let keys = match self.profiles.get(identity) {
            Some(result) => result,
            None => return Err(RegistryError::MissingKey),
        };
        match keys.get(&normalize_path(key_path)) {
            Some(KeyEntry::Values(values)) => Ok(values.clone()),
            Some(KeyEntry::Unopenable) => Err(RegistryError::OpenKey),
            None => Err(RegistryError::MissingKey),
        }
    }

    fn identities(&self) -> Vec<String> {
        self.profiles.keys().cloned().collect()
    }

    fn source(&self, identity: &str) -> String {
        format!("memory:{identity}")
    }
}
