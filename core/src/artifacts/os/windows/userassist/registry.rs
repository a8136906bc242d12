use super::error::UserAssistError;
use crate::artifacts::os::windows::registry::{
    error::RegistryError,
    export::ExportStore,
    store::{RegistryStore, ValueRead},
};
use common::windows::OwnerGroup;
use log::error;

/// Open the Registry export holding `UserAssist` keys
pub(crate) fn open_store(alt_file: Option<&str>) -> Result<ExportStore, UserAssistError> {
    let path = match alt_file {
        Some(result) => result,
        None => {
            error!("[userassist] No Registry export provided. Live Registry access is not supported");
            return Err(UserAssistError::RegistryStore);
        }
    };

    match ExportStore::from_file(path) {
        Ok(result) => Ok(result),
        Err(err) => {
            error!("[userassist] Could not open Registry export {path}: {err:?}");
            Err(UserAssistError::RegistryStore)
        }
    }
}

/// Enumerate every value under the `Count` key of a category
pub(crate) fn category_values(
    store: &dyn RegistryStore,
    identity: &str,
    group: OwnerGroup,
) -> Result<Vec<ValueRead>, RegistryError> {
    store.enumerate_values(identity, &group.key_path())
}

/// Users to scan. Explicit list if given, otherwise everyone in the store
pub(crate) fn scan_identities(
    store: &dyn RegistryStore,
    users: Option<&[String]>,
) -> Result<Vec<String>, UserAssistError> {
    let identities = match users {
        Some(result) if !result.is_empty() => result.to_vec(),
        _ => store.identities(),
    };
    if identities.is_empty() {
        error!("[userassist] No users found to scan");
        return Err(UserAssistError::NoUsers);
    }
    Ok(identities)
}
